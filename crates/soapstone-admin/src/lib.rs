//! Typed message catalog for the mail platform's admin service.
//!
//! ## Crate layout
//! - `account`, `domain`, `server`: provisioning CRUD plus listings.
//! - `cert`: certificate inspection and key verification.
//! - `backup`: backup runs and backup set queries.
//! - `logger`: per-account log category management.
//! - `galsync`: GAL sync account lifecycle.
//! - `waitset`: admin wait set creation, polling, teardown.
//! - `directory`: directory search and mailbox reindexing.
//! - `types`: selectors, attribute lists, and shared child records.
//!
//! Every message implements [`MessageKind`](soapstone_core::traits::MessageKind)
//! against a `'static` descriptor table; [`registry`] exposes the validated
//! union of all module tables.

#[macro_use]
mod macros;

pub mod account;
pub mod backup;
pub mod cert;
pub mod directory;
pub mod domain;
pub mod galsync;
pub mod logger;
pub mod server;
pub mod types;
pub mod waitset;

use soapstone_core::{error::RegistryError, model::MessageShape, registry::Registry};
use std::sync::LazyLock;

///
/// REGISTRY
/// the static message catalog
///

static REGISTRY: LazyLock<Result<Registry, RegistryError>> = LazyLock::new(|| {
    let tables: Vec<_> = modules().iter().map(|&(_, table)| table).collect();
    Registry::build(&tables)
});

/// The validated message catalog, built exactly once per process.
///
/// Construction runs the full shape table validation; a table bug
/// surfaces here as a [`RegistryError`] rather than as a mapping failure
/// deep inside some request.
pub fn registry() -> Result<&'static Registry, RegistryError> {
    REGISTRY.as_ref().map_err(Clone::clone)
}

/// Per-module shape tables, in registration order.
///
/// Catalog exports group shapes by the module that declares them, so the
/// grouping lives here next to the module list instead of being guessed
/// from shape names downstream.
#[must_use]
pub fn modules() -> &'static [(&'static str, &'static [&'static MessageShape])] {
    &[
        ("account", account::SHAPES),
        ("domain", domain::SHAPES),
        ("server", server::SHAPES),
        ("cert", cert::SHAPES),
        ("backup", backup::SHAPES),
        ("logger", logger::SHAPES),
        ("galsync", galsync::SHAPES),
        ("waitset", waitset::SHAPES),
        ("directory", directory::SHAPES),
    ]
}

///
/// Catalog Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::{
        registry,
        types::{
            AccountBy, AccountInfo, AccountSelector, Attr, AttrList, CosBy, CosCountInfo,
            CosSelector, DataSourceBy, DomainBy, DomainInfo, DomainSelector, ServerBy,
            ServerInfo, ServerSelector,
        },
    };
    pub use soapstone_core::prelude::*;
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use soapstone_core::model::MessageRole;

    #[test]
    fn the_full_catalog_validates() {
        let registry = registry().expect("catalog should validate");
        assert_eq!(registry.len(), 64);
    }

    #[test]
    fn requests_pair_off_with_responses() {
        let registry = registry().expect("catalog should validate");

        for request in registry.requests() {
            let response = request
                .name
                .strip_suffix("Request")
                .map(|stem| format!("{stem}Response"))
                .expect("request names end in Request");

            let shape = registry
                .get(&response)
                .unwrap_or_else(|| panic!("{response} should be registered"));
            assert_eq!(shape.role, MessageRole::Response);
        }
    }

    #[test]
    fn module_tables_cover_the_whole_catalog() {
        let registry = registry().expect("catalog should validate");

        let total: usize = modules().iter().map(|(_, table)| table.len()).sum();
        assert_eq!(total, registry.len());
    }

    #[test]
    fn child_shapes_stay_out_of_the_name_table() {
        let registry = registry().expect("catalog should validate");

        // child records are reached through their owners, never by name
        assert!(registry.get("account").is_none());
        assert!(registry.get("a").is_none());
        assert!(registry.get("logger").is_none());
    }
}
