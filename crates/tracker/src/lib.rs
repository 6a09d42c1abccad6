pub mod bundle;
pub mod domain;
pub mod error;
pub mod persisted;
pub mod preheat;
pub mod validation;
