pub mod bridge;
pub mod call;
pub mod market;
pub mod position;
pub mod quote;
pub mod token;

pub use bridge::*;
pub use call::*;
pub use market::*;
pub use position::*;
pub use quote::*;
pub use token::*;
