use std::path::Path;

use keysift_core::search::search_terms;

use crate::commands::common::load_config;
use crate::error::CliError;

pub fn run_terms(text: &[String], config_path: Option<&Path>) -> Result<(), CliError> {
    let config = load_config(config_path)?;
    for term in search_terms(&text.join(" "), &config.stopwords()) {
        println!("{term}");
    }
    Ok(())
}
