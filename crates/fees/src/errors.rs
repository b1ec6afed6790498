use thiserror::Error;
use xchain_primitives::{DomainId, FeeHandlerType, ResourceId};
use xchain_registry::RegistryError;

use crate::client::ChainQueryError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeeError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The fee router has no handler for the route.
    #[error("route {source_domain} -> {destination} for resource {resource} is not registered on the fee router")]
    RouteNotRegistered {
        source_domain: DomainId,
        destination: DomainId,
        resource: ResourceId,
    },

    /// The router points at a handler the domain config does not list.
    #[error("fee handler {handler} for route {source_domain} -> {destination} ({resource}) is not registered in the bridge config")]
    UnregisteredFeeHandler {
        handler: String,
        source_domain: DomainId,
        destination: DomainId,
        resource: ResourceId,
    },

    /// No strategy handles the configured handler type.
    #[error("fee calculation method not specified for handler type {handler_type} ({resource} to domain {destination})")]
    FeeCalculationUnspecified {
        handler_type: FeeHandlerType,
        destination: DomainId,
        resource: ResourceId,
    },

    #[error("{handler_type} fee query on {handler} failed: {source}")]
    Query {
        handler_type: FeeHandlerType,
        handler: String,
        #[source]
        source: ChainQueryError,
    },

    #[error("fee router query failed: {0}")]
    Router(#[source] ChainQueryError),
}
