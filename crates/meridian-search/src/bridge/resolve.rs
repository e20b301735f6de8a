//! Bridge reference resolution.

use std::sync::Arc;

use meridian_core::schema::FieldReference;
use tracing::debug;

use super::reference::{BridgeRef, ResolvedBridgeRef};
use super::registry::{BridgeRegistry, ValueBridge};
use crate::error::BridgeError;

/// Resolve a declarative bridge reference to exactly one capability.
///
/// Resolution order follows the canonical form of the reference: an
/// explicit name is looked up in the registry, an explicit type is located
/// by `TypeId`, and an unset reference falls back to the default bridge for
/// the consuming field's declared value type. Whatever strategy located the
/// bridge, its capability signature (the index-side type it produces) must
/// match the field's declared type.
///
/// The resolver locates and validates; it never executes the bridge.
///
/// # Errors
///
/// - [`BridgeError::ConflictingReference`] if the declaration populates
///   more than one mutually-exclusive slot.
/// - [`BridgeError::UnknownName`] if a by-name lookup finds nothing.
/// - [`BridgeError::IncompatibleType`] if a by-type lookup finds nothing,
///   or if the located bridge's index type does not match the field.
/// - [`BridgeError::NoDefaultAvailable`] if an unset reference has no
///   default for the field's type.
pub fn resolve(
    reference: &BridgeRef,
    field: &FieldReference,
    registry: &BridgeRegistry,
) -> Result<Arc<dyn ValueBridge>, BridgeError> {
    let resolved = reference.canonicalize()?;

    let bridge = match &resolved {
        ResolvedBridgeRef::Unset => registry
            .default_for(field.field_type())
            .ok_or(BridgeError::NoDefaultAvailable(field.field_type()))?,

        ResolvedBridgeRef::ByName(name) => registry
            .get_by_name(name)
            .ok_or_else(|| BridgeError::UnknownName(name.clone()))?,

        ResolvedBridgeRef::ByType(type_ref) => registry.get_by_type(type_ref.id()).ok_or_else(
            || BridgeError::IncompatibleType {
                field: field.name().to_string(),
                reason: format!("{} is not registered as a value bridge", type_ref.name()),
            },
        )?,

        ResolvedBridgeRef::ByBuilderName(name) => registry
            .builder_by_name(name)
            .ok_or_else(|| BridgeError::UnknownName(name.clone()))?
            .build_bridge(),

        ResolvedBridgeRef::ByBuilderType(type_ref) => registry
            .builder_by_type(type_ref.id())
            .ok_or_else(|| BridgeError::IncompatibleType {
                field: field.name().to_string(),
                reason: format!("{} is not registered as a bridge builder", type_ref.name()),
            })?
            .build_bridge(),
    };

    // Capability signature check: the bridge must produce the field's
    // declared index type.
    if bridge.index_type() != field.field_type() {
        return Err(BridgeError::IncompatibleType {
            field: field.name().to_string(),
            reason: format!(
                "bridge indexes {}, field is declared as {}",
                bridge.index_type(),
                field.field_type()
            ),
        });
    }

    debug!(field = %field.name(), reference = ?resolved, "resolved value bridge");

    Ok(bridge)
}
