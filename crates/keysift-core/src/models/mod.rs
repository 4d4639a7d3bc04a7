//! Data models for keysift

mod options;
mod record;

pub use options::{Direction, Order, SearchOptions};
pub use record::Record;
