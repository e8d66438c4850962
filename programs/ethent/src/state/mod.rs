//! State account definitions

pub mod ethent;
pub mod registry;

pub use ethent::*;
pub use registry::*;
