pub mod address;
pub mod time;

pub use address::*;
pub use time::*;
