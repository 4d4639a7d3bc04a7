pub mod common;
pub mod search;
pub mod stopwords;
pub mod tables;
pub mod terms;
