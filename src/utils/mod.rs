pub mod constants;
pub mod rounding;
