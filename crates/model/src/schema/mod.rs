pub mod property;
pub mod registry;
