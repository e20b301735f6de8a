//! Predicate descriptors attached to sort clauses and aggregations.
//!
//! A [`Filter`] is a serialized, planner-agnostic predicate: the builders in
//! this crate thread filters through into descriptors without interpreting
//! them; evaluation belongs to the execution engine. The only structural
//! check performed here is that a [`NestedFilter`] is scoped to the same
//! nested path as the field it accompanies.

use meridian_core::schema::NestedPath;
use meridian_core::types::Value;
use serde::{Deserialize, Serialize};

/// A predicate over document fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Filter {
    /// Always true.
    True,

    /// Field equals value.
    Eq {
        /// The field to test.
        field: String,
        /// The value to compare against.
        value: Value,
    },

    /// Field is strictly below value.
    Lt {
        /// The field to test.
        field: String,
        /// The value to compare against.
        value: Value,
    },

    /// Field is strictly above value.
    Gt {
        /// The field to test.
        field: String,
        /// The value to compare against.
        value: Value,
    },

    /// All inner predicates hold.
    And(Vec<Filter>),

    /// Any inner predicate holds.
    Or(Vec<Filter>),

    /// The inner predicate does not hold.
    Not(Box<Filter>),
}

impl Filter {
    /// Field equals value.
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Eq { field: field.into(), value: value.into() }
    }

    /// Field is strictly below value.
    pub fn lt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Lt { field: field.into(), value: value.into() }
    }

    /// Field is strictly above value.
    pub fn gt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Gt { field: field.into(), value: value.into() }
    }

    /// All inner predicates hold.
    #[must_use]
    pub fn and(filters: Vec<Filter>) -> Self {
        Self::And(filters)
    }

    /// Any inner predicate holds.
    #[must_use]
    pub fn or(filters: Vec<Filter>) -> Self {
        Self::Or(filters)
    }

    /// The inner predicate does not hold.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(filter: Filter) -> Self {
        Self::Not(Box::new(filter))
    }
}

/// A predicate over the nested documents of one nesting scope.
///
/// The filter restricts which nested documents contribute values when
/// sorting within a nested scope. Builders check that the scope matches the
/// field they target; the predicate itself is opaque to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedFilter {
    path: NestedPath,
    filter: Filter,
}

impl NestedFilter {
    /// Create a filter scoped to a nested path.
    #[must_use]
    pub const fn new(path: NestedPath, filter: Filter) -> Self {
        Self { path, filter }
    }

    /// The nesting scope this filter applies to.
    #[must_use]
    pub const fn path(&self) -> &NestedPath {
        &self.path
    }

    /// The predicate over the nested documents.
    #[must_use]
    pub const fn filter(&self) -> &Filter {
        &self.filter
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn constructors_build_expected_shapes() {
        let filter = Filter::and(vec![
            Filter::eq("brand", "acme"),
            Filter::not(Filter::lt("price", 10i64)),
        ]);
        match filter {
            Filter::And(inner) => {
                assert_eq!(inner.len(), 2);
                assert!(matches!(inner[0], Filter::Eq { .. }));
                assert!(matches!(inner[1], Filter::Not(_)));
            }
            other => panic!("expected And, got {other:?}"),
        }
    }

    #[test]
    fn nested_filter_exposes_scope() {
        let path = NestedPath::new("offers").unwrap();
        let nested = NestedFilter::new(path.clone(), Filter::True);
        assert_eq!(nested.path(), &path);
    }
}
