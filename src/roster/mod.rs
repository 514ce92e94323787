//! Roster loading: the pipe-delimited file and the records it holds.

pub mod bucket;
pub mod parse;
pub mod person;

pub use bucket::Bucket;
pub use parse::{load, parse_roster};
pub use person::{Person, Role};
