//! Location resolver collaborator
//!
//! The engine never reads a geolocation database itself; it asks a
//! [`LocationResolver`] for the visitor's record. Implementations may
//! cache per page view; `skip_cache` requests a fresh lookup.

use geogate_core::LocationRecord;
use thiserror::Error;

/// Resolver failure
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    /// The lookup itself failed (database missing, source misconfigured)
    #[error("Lookup failed: {0}")]
    Lookup(String),

    /// The lookup source is not available at all
    #[error("Lookup source unavailable: {0}")]
    Unavailable(String),
}

/// Per-request resolver options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolveOptions {
    /// Bypass any page-level lookup cache the resolver keeps
    pub skip_cache: bool,
}

/// The external geolocation lookup collaborator.
///
/// `languages` is the caller's display-language preference, most preferred
/// first; it steers the localized `name` representations inside the
/// returned record. A lookup that finds no data for the visitor returns
/// `Ok(LocationRecord::empty())`, not an error.
pub trait LocationResolver: Send + Sync {
    fn resolve(
        &self,
        languages: &[String],
        options: &ResolveOptions,
    ) -> std::result::Result<LocationRecord, ResolveError>;
}

/// Resolver returning one fixed record, regardless of languages or
/// options. Useful for tests and for callers that resolve out-of-band.
#[derive(Debug, Clone)]
pub struct StaticResolver {
    record: LocationRecord,
}

impl StaticResolver {
    pub fn new(record: LocationRecord) -> Self {
        Self { record }
    }
}

impl LocationResolver for StaticResolver {
    fn resolve(
        &self,
        _languages: &[String],
        _options: &ResolveOptions,
    ) -> std::result::Result<LocationRecord, ResolveError> {
        Ok(self.record.clone())
    }
}
