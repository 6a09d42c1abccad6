pub mod error;
pub mod filter;
pub mod joins;
pub mod operator;
pub mod path;
pub mod query;
