use tracing::debug;
use xchain_config::BridgeConfig;
use xchain_primitives::{Domain, FeeHandlerConfig, Network, Resource, ResourceId, ResourceType};

use crate::{
    errors::RegistryError,
    lookup::{DomainLookup, ResourceLookup},
};

/// Immutable index over the domains and resources of one bridge environment.
///
/// Built once from a [`BridgeConfig`] and handed to every component that needs
/// lookups.
#[derive(Debug, Clone)]
pub struct Registry {
    domains: Vec<Domain>,
}

/// Source and destination domain plus the resource moved between them.
#[derive(Debug, Clone, Copy)]
pub struct TransferRoute<'a> {
    pub source: &'a Domain,
    pub destination: &'a Domain,
    /// The resource as registered on the source domain.
    pub resource: &'a Resource,
}

impl<'a> TransferRoute<'a> {
    /// The same resource as registered on the destination domain, if it is.
    pub fn destination_resource(&self) -> Option<&'a Resource> {
        self.destination
            .resources
            .iter()
            .find(|r| r.resource_id == self.resource.resource_id)
    }
}

impl Registry {
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            domains: config.domains,
        }
    }

    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    pub fn domains_by_network(&self, network: Network) -> impl Iterator<Item = &Domain> + '_ {
        self.domains.iter().filter(move |d| d.network == network)
    }

    pub fn resolve_domain<'a>(
        &self,
        lookup: impl Into<DomainLookup<'a>>,
    ) -> Result<&Domain, RegistryError> {
        let lookup = lookup.into();
        lookup
            .find(&self.domains)
            .ok_or_else(|| RegistryError::DomainNotFound(lookup.to_string()))
    }

    /// Resolves a resource from the resource set of `domain`.
    pub fn resolve_resource<'a, 'b>(
        &self,
        domain: impl Into<DomainLookup<'a>>,
        resource: impl Into<ResourceLookup<'b>>,
    ) -> Result<&Resource, RegistryError> {
        let domain = self.resolve_domain(domain)?;
        find_resource(domain, resource.into())
    }

    /// Resolves both domains and the resource of a transfer.
    ///
    /// The resource has to be registered on the source domain; the destination
    /// domain has to exist.
    pub fn resolve_route<'a, 'b, 'c>(
        &self,
        source: impl Into<DomainLookup<'a>>,
        destination: impl Into<DomainLookup<'b>>,
        resource: impl Into<ResourceLookup<'c>>,
    ) -> Result<TransferRoute<'_>, RegistryError> {
        let source = self.resolve_domain(source)?;
        let destination = self.resolve_domain(destination)?;
        let resource = find_resource(source, resource.into())?;
        debug!(
            source = %source.id,
            destination = %destination.id,
            resource = %resource.resource_id,
            "resolved transfer route"
        );
        Ok(TransferRoute {
            source,
            destination,
            resource,
        })
    }

    /// Address of the custody handler for `resource_type` on `domain`.
    pub fn resource_handler<'d>(
        &self,
        domain: &'d Domain,
        resource_type: ResourceType,
    ) -> Result<&'d str, RegistryError> {
        domain
            .handlers
            .iter()
            .find(|h| h.resource_type == resource_type)
            .map(|h| h.address.as_str())
            .ok_or(RegistryError::HandlerNotFound {
                domain: domain.id,
                resource_type,
            })
    }

    /// The configured fee handler deployed at `address`, compared case-insensitively.
    pub fn fee_handler<'d>(&self, domain: &'d Domain, address: &str) -> Option<&'d FeeHandlerConfig> {
        domain
            .fee_handlers
            .iter()
            .find(|h| h.address.eq_ignore_ascii_case(address))
    }
}

fn find_resource<'d>(
    domain: &'d Domain,
    lookup: ResourceLookup<'_>,
) -> Result<&'d Resource, RegistryError> {
    let id: ResourceId = match lookup {
        ResourceLookup::Id(id) => id,
        ResourceLookup::Str(s) => s.parse().map_err(|source| RegistryError::InvalidResourceId {
            value: s.to_owned(),
            source,
        })?,
        ResourceLookup::Resource(r) => r.resource_id,
    };

    domain
        .resources
        .iter()
        .find(|r| r.resource_id == id)
        .ok_or(RegistryError::ResourceNotFound {
            domain: domain.id,
            resource: id,
        })
}
