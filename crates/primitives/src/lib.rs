//! Identifiers and configuration-backed data types shared by every bridge client crate.

mod domain;
pub mod errors;
mod ids;
mod network;

pub use domain::*;
pub use ids::*;
pub use network::*;
