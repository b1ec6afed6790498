use thiserror::Error;
use xchain_primitives::{errors::ParseError, DomainId, ResourceId, ResourceType};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("domain {0} not found in bridge config")]
    DomainNotFound(String),

    #[error("resource {resource} not found on domain {domain}")]
    ResourceNotFound {
        domain: DomainId,
        resource: ResourceId,
    },

    #[error("invalid resource id {value:?}: {source}")]
    InvalidResourceId {
        value: String,
        #[source]
        source: ParseError,
    },

    #[error("domain {domain} has no handler for {resource_type:?} resources")]
    HandlerNotFound {
        domain: DomainId,
        resource_type: ResourceType,
    },
}
