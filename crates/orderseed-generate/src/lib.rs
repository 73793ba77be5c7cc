//! Seed data generation engine for orderseed.
//!
//! Produces workers, users, orders and order line items as `;`-delimited
//! files, sampling foreign keys from identifier pools loaded off disk.

pub mod emails;
pub mod engine;
pub mod errors;
pub mod faker;
pub mod fields;
pub mod generators;
pub mod model;
pub mod output;
pub mod planner;
pub mod pools;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{GenerateOptions, GenerationReport, InputPaths, TableReport};
