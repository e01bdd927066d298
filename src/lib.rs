pub mod cli;
pub mod error;
pub mod github;
pub mod output;
pub mod progress;
pub mod report;

pub use error::{Error, Result};
