pub mod assembler;
pub mod units;

pub use assembler::*;
pub use units::*;
