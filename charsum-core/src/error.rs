use thiserror::Error;

/// Errors raised at the table's sizing boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("table capacity must be at least 1")]
    ZeroCapacity,
    #[error("growing capacity {capacity} by {increment} overflows usize")]
    CapacityOverflow { capacity: usize, increment: usize },
}

pub type Result<T> = std::result::Result<T, TableError>;
