pub mod comparison;
pub mod engine;
pub mod error;
pub mod scenario;
pub mod types;

#[cfg(feature = "sensitivity")]
pub mod sensitivity;

#[cfg(feature = "export")]
pub mod export;

pub use error::InvestCompareError;
pub use scenario::Scenario;
pub use types::*;

/// Standard result type for all invest-compare operations
pub type InvestCompareResult<T> = Result<T, InvestCompareError>;
