//! Value bridges and the registry that holds them.
//!
//! A bridge converts a domain-level value to the indexable representation
//! declared for a field, and back for projection when it supports that. The
//! registry is populated once at mapping load, injected explicitly wherever
//! resolution happens, and never mutated afterwards, so tests supply isolated
//! registries instead of reaching for ambient global state.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

use meridian_core::schema::FieldType;
use meridian_core::types::Value;

use crate::error::BridgeError;

/// A conversion capability between domain values and indexable values.
pub trait ValueBridge: Send + Sync {
    /// The index-side type this bridge produces.
    ///
    /// Resolution checks this against the consuming field's declared type.
    fn index_type(&self) -> FieldType;

    /// Convert a domain value to its indexable form.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Conversion`] if the value cannot be
    /// represented in the bridge's index type.
    fn to_indexed(&self, value: &Value) -> Result<Value, BridgeError>;

    /// Convert an indexed value back to its domain form, for projection.
    ///
    /// Bridges without a usable inverse return `None`; projection is then
    /// unavailable for fields using them.
    fn from_indexed(&self, _value: &Value) -> Option<Value> {
        None
    }
}

/// Builds a [`ValueBridge`] on demand.
///
/// Builder-form references let a mapping defer bridge construction until
/// the consuming field is known.
pub trait BridgeBuilder: Send + Sync {
    /// Build the bridge.
    fn build_bridge(&self) -> Arc<dyn ValueBridge>;
}

/// A pass-through bridge for values already in their indexable form.
///
/// Registered as the default bridge for every scalar field type; it
/// type-checks the value and otherwise leaves it untouched. Null passes
/// through as the missing-value marker.
#[derive(Debug, Clone, Copy)]
pub struct IdentityBridge {
    field_type: FieldType,
}

impl IdentityBridge {
    /// Create an identity bridge for a field type.
    #[must_use]
    pub const fn new(field_type: FieldType) -> Self {
        Self { field_type }
    }
}

impl ValueBridge for IdentityBridge {
    fn index_type(&self) -> FieldType {
        self.field_type
    }

    fn to_indexed(&self, value: &Value) -> Result<Value, BridgeError> {
        let matches = match self.field_type {
            FieldType::Bool => matches!(value, Value::Bool(_)),
            FieldType::Integer => matches!(value, Value::Int(_)),
            FieldType::Float => matches!(value, Value::Float(_) | Value::Int(_)),
            FieldType::Text => matches!(value, Value::String(_)),
            FieldType::Bytes => matches!(value, Value::Bytes(_)),
            FieldType::Geo => matches!(value, Value::Geo(_)),
        };

        if matches || value.is_null() {
            Ok(value.clone())
        } else {
            Err(BridgeError::Conversion {
                expected: self.field_type,
                actual: value.type_name(),
            })
        }
    }

    fn from_indexed(&self, value: &Value) -> Option<Value> {
        Some(value.clone())
    }
}

/// A registry of value bridges and bridge builders.
///
/// Bridges are stored by name, by implementation type, and as per-field-type
/// defaults. The registry is read-only after setup and safe to share behind
/// an `Arc`.
///
/// # Example
///
/// ```
/// use meridian_core::schema::FieldType;
/// use meridian_search::bridge::{BridgeRegistry, IdentityBridge};
///
/// let mut registry = BridgeRegistry::with_defaults();
/// registry.register_named("raw_float", IdentityBridge::new(FieldType::Float));
///
/// assert!(registry.contains_name("raw_float"));
/// assert!(registry.default_for(FieldType::Text).is_some());
/// ```
#[derive(Default)]
pub struct BridgeRegistry {
    by_name: HashMap<String, Arc<dyn ValueBridge>>,
    by_type: HashMap<TypeId, Arc<dyn ValueBridge>>,
    builders_by_name: HashMap<String, Arc<dyn BridgeBuilder>>,
    builders_by_type: HashMap<TypeId, Arc<dyn BridgeBuilder>>,
    defaults: HashMap<FieldType, Arc<dyn ValueBridge>>,
}

impl BridgeRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with identity defaults for every field type.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for field_type in [
            FieldType::Bool,
            FieldType::Integer,
            FieldType::Float,
            FieldType::Text,
            FieldType::Bytes,
            FieldType::Geo,
        ] {
            registry.register_default(field_type, IdentityBridge::new(field_type));
        }
        registry
    }

    /// Register a bridge under a name.
    ///
    /// A later registration under the same name replaces the earlier one.
    pub fn register_named(
        &mut self,
        name: impl Into<String>,
        bridge: impl ValueBridge + 'static,
    ) {
        self.by_name.insert(name.into(), Arc::new(bridge));
    }

    /// Register a bridge under its implementation type.
    pub fn register_typed<B: ValueBridge + 'static>(&mut self, bridge: B) {
        self.by_type.insert(TypeId::of::<B>(), Arc::new(bridge));
    }

    /// Register a bridge builder under a name.
    pub fn register_builder_named(
        &mut self,
        name: impl Into<String>,
        builder: impl BridgeBuilder + 'static,
    ) {
        self.builders_by_name.insert(name.into(), Arc::new(builder));
    }

    /// Register a bridge builder under its implementation type.
    pub fn register_builder_typed<B: BridgeBuilder + 'static>(&mut self, builder: B) {
        self.builders_by_type.insert(TypeId::of::<B>(), Arc::new(builder));
    }

    /// Register the default bridge for a field type.
    pub fn register_default(&mut self, field_type: FieldType, bridge: impl ValueBridge + 'static) {
        self.defaults.insert(field_type, Arc::new(bridge));
    }

    /// Get a bridge by name.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn ValueBridge>> {
        self.by_name.get(name).cloned()
    }

    /// Get a bridge by implementation type.
    #[must_use]
    pub fn get_by_type(&self, id: TypeId) -> Option<Arc<dyn ValueBridge>> {
        self.by_type.get(&id).cloned()
    }

    /// Get a bridge builder by name.
    #[must_use]
    pub fn builder_by_name(&self, name: &str) -> Option<Arc<dyn BridgeBuilder>> {
        self.builders_by_name.get(name).cloned()
    }

    /// Get a bridge builder by implementation type.
    #[must_use]
    pub fn builder_by_type(&self, id: TypeId) -> Option<Arc<dyn BridgeBuilder>> {
        self.builders_by_type.get(&id).cloned()
    }

    /// Get the default bridge for a field type.
    #[must_use]
    pub fn default_for(&self, field_type: FieldType) -> Option<Arc<dyn ValueBridge>> {
        self.defaults.get(&field_type).cloned()
    }

    /// Returns true if a bridge is registered under the given name.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Returns the number of registered bridges, builders, and defaults.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
            + self.by_type.len()
            + self.builders_by_name.len()
            + self.builders_by_type.len()
            + self.defaults.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lists all registered bridge names.
    #[must_use]
    pub fn list_names(&self) -> Vec<&str> {
        self.by_name.keys().map(String::as_str).collect()
    }
}

impl std::fmt::Debug for BridgeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BridgeRegistry")
            .field("bridges", &self.list_names())
            .field("defaults", &self.defaults.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn registry_register_and_get() {
        let mut registry = BridgeRegistry::new();
        registry.register_named("raw_int", IdentityBridge::new(FieldType::Integer));

        assert!(registry.contains_name("raw_int"));
        assert!(!registry.contains_name("unknown"));
        assert_eq!(
            registry.get_by_name("raw_int").map(|b| b.index_type()),
            Some(FieldType::Integer)
        );
    }

    #[test]
    fn registry_typed_lookup() {
        let mut registry = BridgeRegistry::new();
        registry.register_typed(IdentityBridge::new(FieldType::Text));

        let bridge = registry.get_by_type(TypeId::of::<IdentityBridge>());
        assert_eq!(bridge.map(|b| b.index_type()), Some(FieldType::Text));
        assert!(registry.get_by_type(TypeId::of::<String>()).is_none());
    }

    #[test]
    fn with_defaults_covers_every_field_type() {
        let registry = BridgeRegistry::with_defaults();
        for field_type in [
            FieldType::Bool,
            FieldType::Integer,
            FieldType::Float,
            FieldType::Text,
            FieldType::Bytes,
            FieldType::Geo,
        ] {
            assert!(registry.default_for(field_type).is_some(), "no default for {field_type}");
        }
    }

    #[test]
    fn identity_bridge_type_checks() {
        let bridge = IdentityBridge::new(FieldType::Float);

        assert!(bridge.to_indexed(&Value::Float(1.5)).is_ok());
        // Integers widen into float fields
        assert!(bridge.to_indexed(&Value::Int(3)).is_ok());
        // Null is the missing-value marker
        assert!(bridge.to_indexed(&Value::Null).is_ok());

        let err = bridge.to_indexed(&Value::from("nope")).unwrap_err();
        assert!(matches!(
            err,
            BridgeError::Conversion { expected: FieldType::Float, actual: "string" }
        ));
    }

    #[test]
    fn identity_bridge_projects() {
        let bridge = IdentityBridge::new(FieldType::Integer);
        assert_eq!(bridge.from_indexed(&Value::Int(7)), Some(Value::Int(7)));
    }
}
