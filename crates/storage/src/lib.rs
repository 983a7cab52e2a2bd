#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod catalog;
pub mod export;
pub mod log;
mod profile;
mod tuning;

pub use catalog::{ExerciseError, JsonCatalog};
pub use export::{to_json, write_plan};
pub use profile::{parse_profile, read_profile};
pub use tuning::{parse_tuning, read_tuning};

#[derive(thiserror::Error, Debug)]
pub enum JsonError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
    #[error("invalid level \"{0}\"")]
    InvalidLevel(String),
    #[error(transparent)]
    Invalid(Box<dyn std::error::Error + Send + Sync>),
}
