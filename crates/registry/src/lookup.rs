use std::fmt;

use xchain_primitives::{Domain, DomainId, Resource, ResourceId};

/// The loose ways callers may name a domain.
#[derive(Debug, Clone, Copy)]
pub enum DomainLookup<'a> {
    Id(DomainId),

    /// CAIP-2 id, or a decimal domain id as a string.
    Str(&'a str),

    /// A domain-shaped value, matched by id first and then by CAIP id.
    Domain(&'a Domain),
}

impl From<DomainId> for DomainLookup<'_> {
    fn from(value: DomainId) -> Self {
        Self::Id(value)
    }
}

impl From<u8> for DomainLookup<'_> {
    fn from(value: u8) -> Self {
        Self::Id(DomainId::new(value))
    }
}

impl<'a> From<&'a str> for DomainLookup<'a> {
    fn from(value: &'a str) -> Self {
        Self::Str(value)
    }
}

impl<'a> From<&'a String> for DomainLookup<'a> {
    fn from(value: &'a String) -> Self {
        Self::Str(value.as_str())
    }
}

impl<'a> From<&'a Domain> for DomainLookup<'a> {
    fn from(value: &'a Domain) -> Self {
        Self::Domain(value)
    }
}

impl fmt::Display for DomainLookup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainLookup::Id(id) => write!(f, "{id}"),
            DomainLookup::Str(s) => write!(f, "{s:?}"),
            DomainLookup::Domain(d) => write!(f, "{} ({})", d.id, d.caip_id),
        }
    }
}

impl DomainLookup<'_> {
    pub(crate) fn find<'d>(&self, domains: &'d [Domain]) -> Option<&'d Domain> {
        match self {
            DomainLookup::Id(id) => domains.iter().find(|d| d.id == *id),
            DomainLookup::Str(s) => domains.iter().find(|d| d.caip_id == *s).or_else(|| {
                let id = s.parse::<u8>().ok()?;
                domains.iter().find(|d| d.id.get() == id)
            }),
            DomainLookup::Domain(candidate) => domains
                .iter()
                .find(|d| d.id == candidate.id)
                .or_else(|| domains.iter().find(|d| d.caip_id == candidate.caip_id)),
        }
    }
}

/// The loose ways callers may name a resource.
#[derive(Debug, Clone, Copy)]
pub enum ResourceLookup<'a> {
    Id(ResourceId),
    Str(&'a str),
    Resource(&'a Resource),
}

impl From<ResourceId> for ResourceLookup<'_> {
    fn from(value: ResourceId) -> Self {
        Self::Id(value)
    }
}

impl<'a> From<&'a str> for ResourceLookup<'a> {
    fn from(value: &'a str) -> Self {
        Self::Str(value)
    }
}

impl<'a> From<&'a String> for ResourceLookup<'a> {
    fn from(value: &'a String) -> Self {
        Self::Str(value.as_str())
    }
}

impl<'a> From<&'a Resource> for ResourceLookup<'a> {
    fn from(value: &'a Resource) -> Self {
        Self::Resource(value)
    }
}
