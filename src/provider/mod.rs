//! Search provider module
//!
//! Defines the provider boundary and the Exa client behind it.

mod exa;
mod traits;
mod types;

pub use exa::ExaClient;
pub use traits::*;
pub use types::*;
