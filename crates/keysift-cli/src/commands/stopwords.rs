use std::path::Path;

use crate::commands::common::load_config;
use crate::error::CliError;

pub fn run_stopwords(config_path: Option<&Path>) -> Result<(), CliError> {
    println!("{}", load_config(config_path)?.stopwords().join(" "));
    Ok(())
}
