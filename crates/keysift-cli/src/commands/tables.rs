use std::path::Path;

use crate::commands::common::load_config;
use crate::error::CliError;

pub fn run_tables(as_json: bool, config_path: Option<&Path>) -> Result<(), CliError> {
    let tables = load_config(config_path)?.tables();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&tables)?);
    } else {
        for entry in tables {
            println!("{}: {}", entry.table, entry.columns.join(", "));
        }
    }

    Ok(())
}
