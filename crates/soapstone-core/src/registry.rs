use crate::{error::RegistryError, model::MessageShape, validate::validate_shapes};
use std::collections::BTreeMap;

///
/// Registry
///
/// The full set of named message shapes (requests and responses; child
/// shapes hang off their owners' field tables and are validated through
/// them). Built once from the `'static` tables each catalog module
/// contributes, validated during build, and read-only afterwards, so
/// plain shared references are safe from any number of threads.
///

#[derive(Debug)]
pub struct Registry {
    shapes: Vec<&'static MessageShape>,
    by_name: BTreeMap<&'static str, &'static MessageShape>,
}

impl Registry {
    /// Build and validate a registry from per-module shape tables.
    ///
    /// Table order is registration order; `iter` preserves it so exports
    /// are stable across runs.
    pub fn build(tables: &[&[&'static MessageShape]]) -> Result<Self, RegistryError> {
        let mut shapes = Vec::new();
        for table in tables {
            shapes.extend_from_slice(table);
        }

        validate_shapes(&shapes).map_err(RegistryError::Validation)?;

        let by_name = shapes.iter().map(|s| (s.name, *s)).collect();

        Ok(Self { shapes, by_name })
    }

    /// Look up a shape by wire name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static MessageShape> {
        self.by_name.get(name).copied()
    }

    /// Look up a shape by wire name, failing on misses.
    pub fn require(&self, name: &str) -> Result<&'static MessageShape, RegistryError> {
        self.get(name)
            .ok_or_else(|| RegistryError::UnknownShape(name.to_string()))
    }

    /// Iterate shapes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static MessageShape> + '_ {
        self.shapes.iter().copied()
    }

    /// Iterate request shapes only, in registration order.
    pub fn requests(&self) -> impl Iterator<Item = &'static MessageShape> + '_ {
        self.iter().filter(|s| s.is_request())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

///
/// TESTS
///
