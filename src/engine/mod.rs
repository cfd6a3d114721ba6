pub mod aggregate;
pub mod errors;
pub mod query;
pub mod result;
pub mod runner;
pub mod types;


pub use errors::*;
