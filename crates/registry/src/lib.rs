//! Lookup of domains and resources from a loaded bridge configuration.

mod errors;
mod lookup;
mod registry;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use errors::RegistryError;
pub use lookup::{DomainLookup, ResourceLookup};
pub use registry::{Registry, TransferRoute};
