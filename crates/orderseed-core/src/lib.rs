//! Core contracts for orderseed.
//!
//! This crate defines the seeded entities, their status codes, and the table
//! layout (file names and headers) shared by the generator and the CLI.

pub mod entity;
pub mod error;
pub mod records;
pub mod table;

pub use entity::Entity;
pub use error::{Error, Result};
pub use records::{Order, OrderItem, OrderStatus, Record, User, WORKER_ROLE, Worker};
pub use table::{
    FIELD_DELIMITER, ORDER_CONTAINS_TABLE, ORDERS_TABLE, TASKS_TABLE, TableSpec, USERS_TABLE,
    WORKERS_TABLE,
};

/// Date format used for every date column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
