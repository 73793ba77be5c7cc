use thiserror::Error;

/// Core error type shared across orderseed crates.
#[derive(Debug, Error)]
pub enum Error {
    /// An entity name that does not match any generated table.
    #[error("unknown entity: {0}")]
    InvalidEntity(String),
    /// A status code outside `1..=4`.
    #[error("invalid order status: {0}")]
    InvalidStatus(String),
}

/// Convenience alias for results returned by orderseed crates.
pub type Result<T> = std::result::Result<T, Error>;
