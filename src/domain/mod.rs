pub mod errors;
pub mod instrument;
pub mod registry;
pub mod units;
