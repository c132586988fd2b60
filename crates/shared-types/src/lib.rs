pub mod error;
pub mod models;
pub mod reports;

pub use error::*;
pub use models::*;
pub use reports::*;
