//! Schema descriptors for the resource mapping engine.
//!
//! Every resource type declares a `static` [`Schema`]: its scalar fields with
//! semantic types, its to-one/to-many relations with the target schema, any
//! output-format overrides, and its declarative validation rules. The generic
//! engine in [`model`](crate::resources::model) consumes these descriptors, so
//! a resource type is pure data — no hand-written parser or validator per type.
//!
//! # Example
//!
//! ```rust,ignore
//! use fairsenden::resources::schema::{Field, Rule, Schema};
//!
//! static STATE_SCHEMA: Schema = Schema {
//!     name: "State",
//!     primary_key: "id",
//!     fields: &[Field::str("state"), Field::str("description")],
//!     rules: &[],
//! };
//! ```

/// The semantic type of a declared field.
#[derive(Clone, Copy, Debug)]
pub enum FieldKind {
    /// A string scalar.
    Str,
    /// An integer scalar.
    Int,
    /// A floating-point scalar.
    Float,
    /// A boolean scalar.
    Bool,
    /// A date-time scalar, coerced once at hydration.
    DateTime,
    /// A single nested resource, hydrated through the target schema.
    HasOne(&'static Schema),
    /// An ordered sequence of nested resources.
    HasMany(&'static Schema),
}

impl FieldKind {
    /// Human-readable name of the semantic type, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Str => "string",
            Self::Int => "integer",
            Self::Float => "float",
            Self::Bool => "boolean",
            Self::DateTime => "date-time",
            Self::HasOne(_) => "nested resource",
            Self::HasMany(_) => "nested resource list",
        }
    }
}

/// How a field is rendered by `values()`.
///
/// Hydration always parses the full input; these overrides only shape the
/// serialized output, making each hydrate/serialize asymmetry an explicit
/// per-resource declaration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputPolicy {
    /// Serialize the value unchanged.
    #[default]
    AsIs,
    /// Serialize a date-time as `YYYY-MM-DD`.
    DateOnly,
    /// Drop the field from the output when it is null or an empty string.
    OmitIfEmpty,
}

/// A declared field of a resource: wire name, semantic type, output policy.
#[derive(Clone, Copy, Debug)]
pub struct Field {
    /// The wire name of the field (exact JSON key).
    pub name: &'static str,
    /// The semantic type.
    pub kind: FieldKind,
    /// The output-format override, if any.
    pub output: OutputPolicy,
}

impl Field {
    /// Declares a string field.
    #[must_use]
    pub const fn str(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Str,
            output: OutputPolicy::AsIs,
        }
    }

    /// Declares an integer field.
    #[must_use]
    pub const fn int(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Int,
            output: OutputPolicy::AsIs,
        }
    }

    /// Declares a floating-point field.
    #[must_use]
    pub const fn float(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Float,
            output: OutputPolicy::AsIs,
        }
    }

    /// Declares a boolean field.
    #[must_use]
    pub const fn bool(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Bool,
            output: OutputPolicy::AsIs,
        }
    }

    /// Declares a date-time field.
    #[must_use]
    pub const fn date_time(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::DateTime,
            output: OutputPolicy::AsIs,
        }
    }

    /// Declares a to-one relation to the given schema.
    #[must_use]
    pub const fn has_one(name: &'static str, target: &'static Schema) -> Self {
        Self {
            name,
            kind: FieldKind::HasOne(target),
            output: OutputPolicy::AsIs,
        }
    }

    /// Declares a to-many relation to the given schema.
    #[must_use]
    pub const fn has_many(name: &'static str, target: &'static Schema) -> Self {
        Self {
            name,
            kind: FieldKind::HasMany(target),
            output: OutputPolicy::AsIs,
        }
    }

    /// Marks the field as serialized in `YYYY-MM-DD` form.
    #[must_use]
    pub const fn date_only(self) -> Self {
        Self {
            name: self.name,
            kind: self.kind,
            output: OutputPolicy::DateOnly,
        }
    }

    /// Marks the field as omitted from output when null or empty.
    #[must_use]
    pub const fn omit_if_empty(self) -> Self {
        Self {
            name: self.name,
            kind: self.kind,
            output: OutputPolicy::OmitIfEmpty,
        }
    }
}

/// A declarative validation rule, checked against the serialized view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// The field must be present and non-empty.
    Required(&'static str),
    /// The field's string value must have a length within `min..=max`.
    ///
    /// Skipped when the field is absent; combine with [`Rule::Required`]
    /// when presence is also mandatory.
    Length {
        /// The field the bound applies to.
        field: &'static str,
        /// Minimum number of characters.
        min: usize,
        /// Maximum number of characters.
        max: usize,
    },
}

/// The full declaration of a resource type.
#[derive(Debug)]
pub struct Schema {
    /// The resource type name, used in error messages.
    pub name: &'static str,
    /// The wire name of the primary-key field.
    pub primary_key: &'static str,
    /// Declared fields, in declaration order.
    pub fields: &'static [Field],
    /// Declarative validation rules, checked in order.
    pub rules: &'static [Rule],
}

impl Schema {
    /// Looks up a declared field by wire name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static NESTED: Schema = Schema {
        name: "Nested",
        primary_key: "id",
        fields: &[Field::str("id")],
        rules: &[],
    };

    static OUTER: Schema = Schema {
        name: "Outer",
        primary_key: "id",
        fields: &[
            Field::str("id"),
            Field::date_time("when").date_only(),
            Field::str("note").omit_if_empty(),
            Field::has_one("child", &NESTED),
            Field::has_many("children", &NESTED),
        ],
        rules: &[Rule::Required("id")],
    };

    #[test]
    fn test_field_lookup_by_wire_name() {
        assert!(OUTER.field("when").is_some());
        assert!(OUTER.field("unknown").is_none());
    }

    #[test]
    fn test_output_policies_are_declared_per_field() {
        assert_eq!(OUTER.field("when").unwrap().output, OutputPolicy::DateOnly);
        assert_eq!(OUTER.field("note").unwrap().output, OutputPolicy::OmitIfEmpty);
        assert_eq!(OUTER.field("id").unwrap().output, OutputPolicy::AsIs);
    }

    #[test]
    fn test_relation_fields_carry_target_schema() {
        match OUTER.field("child").unwrap().kind {
            FieldKind::HasOne(target) => assert_eq!(target.name, "Nested"),
            _ => panic!("expected a to-one relation"),
        }
        match OUTER.field("children").unwrap().kind {
            FieldKind::HasMany(target) => assert_eq!(target.name, "Nested"),
            _ => panic!("expected a to-many relation"),
        }
    }

    #[test]
    fn test_type_names_for_errors() {
        assert_eq!(FieldKind::DateTime.type_name(), "date-time");
        assert_eq!(FieldKind::Int.type_name(), "integer");
    }
}
