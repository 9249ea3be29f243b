pub mod charset;
pub mod error;
pub mod generator;
pub mod mask;
pub mod request;
pub mod strength;

pub use zeroize;
