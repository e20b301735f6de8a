//! Declarative references to value bridges.
//!
//! A [`BridgeRef`] mirrors the declarative source it is populated from: four
//! independent optional slots (bridge by name, bridge by type, builder by
//! name, builder by type). Because that source may be static and immutable,
//! mutual exclusivity is not enforced at declaration time; it is enforced
//! when the declaration is canonicalized into a [`ResolvedBridgeRef`], the
//! tagged form the resolver matches on exhaustively.

use std::any::TypeId;
use std::fmt;

use super::registry::{BridgeBuilder, ValueBridge};
use crate::error::BridgeError;

/// A by-type reference to a bridge or bridge-builder implementation.
///
/// Carries the `TypeId` used for registry lookup plus the type's name for
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeTypeRef {
    id: TypeId,
    name: &'static str,
}

impl BridgeTypeRef {
    /// Reference a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self { id: TypeId::of::<T>(), name: std::any::type_name::<T>() }
    }

    /// The referenced type's `TypeId`.
    #[must_use]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// The referenced type's name, for diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for BridgeTypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A declarative reference to the value bridge a field should use.
///
/// Either a bridge or a bridge builder can be referenced, but never both;
/// each can be referenced by name or by type, but never both. Violations
/// are reported by [`canonicalize`](Self::canonicalize), not by the
/// setters.
///
/// # Example
///
/// ```
/// use meridian_search::bridge::{BridgeRef, ResolvedBridgeRef};
///
/// let unset = BridgeRef::default();
/// assert!(matches!(unset.canonicalize().unwrap(), ResolvedBridgeRef::Unset));
///
/// let by_name = BridgeRef::by_name("iso_country_code");
/// assert!(matches!(by_name.canonicalize().unwrap(), ResolvedBridgeRef::ByName(_)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BridgeRef {
    name: Option<String>,
    bridge_type: Option<BridgeTypeRef>,
    builder_name: Option<String>,
    builder_type: Option<BridgeTypeRef>,
}

impl BridgeRef {
    /// Reference a registered bridge by name.
    #[must_use]
    pub fn by_name(name: impl Into<String>) -> Self {
        Self::default().with_name(name)
    }

    /// Reference a registered bridge by its implementation type.
    #[must_use]
    pub fn by_type<B: ValueBridge + 'static>() -> Self {
        Self::default().with_type::<B>()
    }

    /// Reference a registered bridge builder by name.
    #[must_use]
    pub fn by_builder_name(name: impl Into<String>) -> Self {
        Self::default().with_builder_name(name)
    }

    /// Reference a registered bridge builder by its implementation type.
    #[must_use]
    pub fn by_builder_type<B: BridgeBuilder + 'static>() -> Self {
        Self::default().with_builder_type::<B>()
    }

    /// Set the bridge name slot.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the bridge type slot.
    #[must_use]
    pub fn with_type<B: ValueBridge + 'static>(mut self) -> Self {
        self.bridge_type = Some(BridgeTypeRef::of::<B>());
        self
    }

    /// Set the builder name slot.
    #[must_use]
    pub fn with_builder_name(mut self, name: impl Into<String>) -> Self {
        self.builder_name = Some(name.into());
        self
    }

    /// Set the builder type slot.
    #[must_use]
    pub fn with_builder_type<B: BridgeBuilder + 'static>(mut self) -> Self {
        self.builder_type = Some(BridgeTypeRef::of::<B>());
        self
    }

    /// Collapse the declaration into its canonical tagged form.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::ConflictingReference`] if both a name and a
    /// type are set within either group, or if both the bridge group and
    /// the builder group are populated.
    pub fn canonicalize(&self) -> Result<ResolvedBridgeRef, BridgeError> {
        if self.name.is_some() && self.bridge_type.is_some() {
            return Err(BridgeError::ConflictingReference(
                "both a bridge name and a bridge type were set",
            ));
        }
        if self.builder_name.is_some() && self.builder_type.is_some() {
            return Err(BridgeError::ConflictingReference(
                "both a builder name and a builder type were set",
            ));
        }

        let bridge_set = self.name.is_some() || self.bridge_type.is_some();
        let builder_set = self.builder_name.is_some() || self.builder_type.is_some();
        if bridge_set && builder_set {
            return Err(BridgeError::ConflictingReference(
                "both a bridge reference and a builder reference were set",
            ));
        }

        let resolved = if let Some(name) = &self.name {
            ResolvedBridgeRef::ByName(name.clone())
        } else if let Some(type_ref) = self.bridge_type {
            ResolvedBridgeRef::ByType(type_ref)
        } else if let Some(name) = &self.builder_name {
            ResolvedBridgeRef::ByBuilderName(name.clone())
        } else if let Some(type_ref) = self.builder_type {
            ResolvedBridgeRef::ByBuilderType(type_ref)
        } else {
            ResolvedBridgeRef::Unset
        };

        Ok(resolved)
    }
}

/// The canonical, validated form of a [`BridgeRef`].
///
/// At most one strategy is referenced; `Unset` stands for "fall back to the
/// default bridge for the field's declared value type".
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedBridgeRef {
    /// No explicit reference; use the field type's default bridge.
    Unset,
    /// Look up a registered bridge by name.
    ByName(String),
    /// Look up a registered bridge by implementation type.
    ByType(BridgeTypeRef),
    /// Look up a registered bridge builder by name.
    ByBuilderName(String),
    /// Look up a registered bridge builder by implementation type.
    ByBuilderType(BridgeTypeRef),
}
