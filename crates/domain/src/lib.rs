#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod assessment;
mod error;
mod exercise;
mod item;
pub mod knapsack;
mod optimizer;
mod plan;
mod profile;
mod service;
mod tuning;

pub use assessment::*;
pub use error::*;
pub use exercise::*;
pub use item::*;
pub use optimizer::*;
pub use plan::*;
pub use profile::*;
pub use service::*;
pub use tuning::*;
