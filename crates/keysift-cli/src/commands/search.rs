use std::path::Path;

use crate::commands::common::{
    build_options, format_record_lines, join_keywords, load_config, open_database, search_records,
};
use crate::error::CliError;

#[allow(clippy::too_many_arguments)]
pub async fn run_search(
    table: &str,
    keywords: &[String],
    limit: Option<usize>,
    order: Option<String>,
    desc: bool,
    as_json: bool,
    db_path: Option<&Path>,
    config_path: Option<&Path>,
) -> Result<(), CliError> {
    let keywords = join_keywords(keywords);
    let config = load_config(config_path)?;
    let db = open_database(db_path).await?;
    let options = build_options(limit, order, desc);

    let records = search_records(&config, &db, table, &keywords, &options).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for line in format_record_lines(&records) {
            println!("{line}");
        }
    }

    Ok(())
}
