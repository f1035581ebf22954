//! ## Crate layout
//! - `core`: the wire element tree, field descriptors, the tri-state
//!   boolean, scalar and collection codecs, and the debug formatter.
//! - `admin`: the typed admin message catalog built on `core`, plus the
//!   validated shape registry.
//!
//! The `prelude` module mirrors the surface callers need to build, map,
//! and log admin messages; the member crates stay importable directly
//! for anything narrower.

pub use soapstone_admin as admin;
pub use soapstone_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Catalog Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::admin::prelude::*;
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn the_facade_reaches_the_catalog() {
        let registry = registry().expect("catalog should validate");

        assert!(registry.get("GetAccountRequest").is_some());
        assert!(!crate::VERSION.is_empty());
    }

    #[test]
    fn messages_map_through_the_facade() {
        let req = crate::admin::account::GetAccountRequest::new(AccountSelector::by_name(
            "ada@example.test",
        ));

        let el = req.to_element().expect("request should serialize");
        assert!(crate::core::xml::to_xml(&el).starts_with("<GetAccountRequest"));
    }
}
