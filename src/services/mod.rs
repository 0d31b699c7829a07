pub mod analytics;
pub mod bridge;
pub mod lens_api;
pub mod risk;
pub mod swap;

pub use analytics::*;
pub use bridge::*;
pub use lens_api::*;
pub use risk::*;
pub use swap::*;
