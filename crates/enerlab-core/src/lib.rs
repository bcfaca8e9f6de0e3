pub mod emissions;
pub mod error;
pub mod fuel;
pub mod loads;
pub mod rounding;
