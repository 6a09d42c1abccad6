pub mod coerce;
pub mod kind;
pub mod value;
