//! The generic hydration/serialization/validation engine.
//!
//! This module turns raw wire JSON into typed resource graphs and back, driven
//! entirely by each type's [`Schema`]. The [`Resource`] trait ties a serde
//! struct to its schema and provides `hydrate`, `rehydrate`, `values`,
//! `validate`, `primary_key`, and `has_primary_key` for every resource type.
//!
//! # Hydration Rules
//!
//! For each declared field, in declaration order:
//!
//! - To-one relations hydrate recursively when the raw value is present and
//!   non-empty, and stay absent otherwise.
//! - To-many relations hydrate each element of the raw array in input order;
//!   a present-but-empty value yields an empty collection.
//! - Scalars are coerced once to the declared semantic type. Raw keys that
//!   match no declared field are ignored, which keeps the SDK forward
//!   compatible with server-side additions.
//!
//! Hydration never fails on absent optional fields; it fails only when a
//! present value cannot be coerced (e.g., an unparseable date-time), with a
//! [`HydrationError::Coercion`] naming the offending field.
//!
//! # Serialization Rules
//!
//! `values()` is the structural inverse: to-one relations become nested
//! objects or null, to-many relations always become arrays (never null), and
//! scalars pass through except where the schema declares an output override
//! ([`OutputPolicy::DateOnly`], [`OutputPolicy::OmitIfEmpty`]).
//!
//! # Validation Rules
//!
//! `validate()` checks the schema's declarative rules against the serialized
//! view, then recurses depth-first through every present relation. The first
//! failure anywhere in the graph aborts validation with that failure. A
//! resource with no rules always validates.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::resources::errors::{HydrationError, ValidationError};
use crate::resources::schema::{Field, FieldKind, OutputPolicy, Rule, Schema};

/// A typed API resource declared by a [`Schema`].
///
/// Implementors pair a plain serde struct with a `static` schema; every
/// mapping operation is provided by the trait on top of the generic engine.
///
/// # Example
///
/// ```rust
/// use fairsenden::resources::{Address, Resource};
/// use serde_json::json;
///
/// let raw = json!({"street": "Main St", "zip": "10115", "city": "Berlin", "countrycode": "DE"});
/// let address = Address::hydrate(&raw).unwrap();
/// assert_eq!(address.city.as_deref(), Some("Berlin"));
/// assert!(address.validate().is_ok());
/// ```
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The resource type name, used in error messages.
    const NAME: &'static str;

    /// The schema describing this resource's fields, relations, and rules.
    fn schema() -> &'static Schema;

    /// Builds a new instance from raw wire JSON.
    ///
    /// The full graph is rebuilt from scratch; there are no partial-merge
    /// semantics for fresh hydration.
    ///
    /// # Errors
    ///
    /// Returns [`HydrationError`] when a present scalar cannot be coerced to
    /// its declared type, or the coerced tree does not fit the struct.
    fn hydrate(raw: &Value) -> Result<Self, HydrationError> {
        let canonical = hydrate_value(Self::schema(), raw)?;
        serde_json::from_value(canonical).map_err(|error| HydrationError::Shape {
            resource: Self::NAME,
            message: error.to_string(),
        })
    }

    /// Re-hydrates this instance from raw wire JSON.
    ///
    /// Every field matched by the raw object is overwritten; fields the raw
    /// object does not mention keep their current values.
    ///
    /// # Errors
    ///
    /// Returns [`HydrationError`] under the same conditions as
    /// [`hydrate`](Resource::hydrate).
    fn rehydrate(&mut self, raw: &Value) -> Result<(), HydrationError> {
        let canonical = hydrate_value(Self::schema(), raw)?;
        let mut current = to_value_object(self);
        if let (Value::Object(current), Value::Object(canonical)) = (&mut current, canonical) {
            for (key, value) in canonical {
                current.insert(key, value);
            }
        }
        *self = serde_json::from_value(current).map_err(|error| HydrationError::Shape {
            resource: Self::NAME,
            message: error.to_string(),
        })?;
        Ok(())
    }

    /// Serializes this instance to its plain wire representation.
    #[must_use]
    fn values(&self) -> Value {
        serialize_values(Self::schema(), &to_value_object(self))
    }

    /// Validates this instance and, depth-first, every nested resource.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule anywhere in the graph as a
    /// [`ValidationError`]; never an aggregate.
    fn validate(&self) -> Result<(), ValidationError> {
        validate_values(Self::schema(), &self.values())
    }

    /// Returns the primary-key value, if the declared field is non-empty.
    #[must_use]
    fn primary_key(&self) -> Option<String> {
        match self.values().get(Self::schema().primary_key) {
            Some(Value::String(id)) if !id.is_empty() => Some(id.clone()),
            Some(Value::Number(id)) => Some(id.to_string()),
            _ => None,
        }
    }

    /// Returns `true` when [`primary_key`](Resource::primary_key) is defined.
    #[must_use]
    fn has_primary_key(&self) -> bool {
        self.primary_key().is_some()
    }
}

/// Serializes a resource struct to a JSON object.
///
/// Resource structs contain only primitives, options, vectors, and nested
/// resources, so this cannot fail in practice; a failure degrades to an
/// empty object rather than panicking.
fn to_value_object<T: Serialize>(resource: &T) -> Value {
    serde_json::to_value(resource).unwrap_or_else(|_| Value::Object(Map::new()))
}

/// Walks raw JSON through a schema, producing the coerced canonical tree.
pub(crate) fn hydrate_value(schema: &Schema, raw: &Value) -> Result<Value, HydrationError> {
    let empty = Map::new();
    let raw = raw.as_object().unwrap_or(&empty);
    let mut out = Map::new();

    for field in schema.fields {
        match field.kind {
            FieldKind::HasOne(target) => {
                if let Some(value) = raw.get(field.name) {
                    if is_present(value) {
                        out.insert(field.name.to_string(), hydrate_value(target, value)?);
                    }
                }
            }
            FieldKind::HasMany(target) => {
                if let Some(value) = raw.get(field.name) {
                    let mut items = Vec::new();
                    if let Value::Array(elements) = value {
                        for element in elements {
                            items.push(hydrate_value(target, element)?);
                        }
                    }
                    out.insert(field.name.to_string(), Value::Array(items));
                }
            }
            _ => {
                if let Some(value) = raw.get(field.name) {
                    if !value.is_null() {
                        out.insert(
                            field.name.to_string(),
                            coerce_scalar(schema.name, field, value)?,
                        );
                    }
                }
            }
        }
    }

    Ok(Value::Object(out))
}

/// Walks a serialized resource through its schema, producing wire output.
pub(crate) fn serialize_values(schema: &Schema, serialized: &Value) -> Value {
    let empty = Map::new();
    let serialized = serialized.as_object().unwrap_or(&empty);
    let mut out = Map::new();

    for field in schema.fields {
        match field.kind {
            FieldKind::HasOne(target) => {
                let value = serialized
                    .get(field.name)
                    .filter(|value| !value.is_null())
                    .map_or(Value::Null, |value| serialize_values(target, value));
                out.insert(field.name.to_string(), value);
            }
            FieldKind::HasMany(target) => {
                let items = serialized
                    .get(field.name)
                    .and_then(Value::as_array)
                    .map_or_else(Vec::new, |elements| {
                        elements
                            .iter()
                            .map(|element| serialize_values(target, element))
                            .collect()
                    });
                out.insert(field.name.to_string(), Value::Array(items));
            }
            _ => {
                let value = serialized.get(field.name).cloned().unwrap_or(Value::Null);
                match field.output {
                    OutputPolicy::AsIs => {
                        out.insert(field.name.to_string(), value);
                    }
                    OutputPolicy::DateOnly => {
                        out.insert(field.name.to_string(), format_date_only(value));
                    }
                    OutputPolicy::OmitIfEmpty => {
                        if is_present(&value) {
                            out.insert(field.name.to_string(), value);
                        }
                    }
                }
            }
        }
    }

    Value::Object(out)
}

/// Checks a serialized resource against its schema's rules, then recurses.
pub(crate) fn validate_values(schema: &Schema, values: &Value) -> Result<(), ValidationError> {
    for rule in schema.rules {
        match rule {
            Rule::Required(field) => {
                if !values.get(field).is_some_and(is_present) {
                    return Err(ValidationError::required(field));
                }
            }
            Rule::Length { field, min, max } => {
                if let Some(Value::String(text)) = values.get(*field) {
                    let len = text.chars().count();
                    if len < *min || len > *max {
                        return Err(ValidationError::length(field, *min, *max));
                    }
                }
            }
        }
    }

    for field in schema.fields {
        match field.kind {
            FieldKind::HasOne(target) => {
                if let Some(value) = values.get(field.name) {
                    if !value.is_null() {
                        validate_values(target, value)?;
                    }
                }
            }
            FieldKind::HasMany(target) => {
                if let Some(Value::Array(elements)) = values.get(field.name) {
                    for element in elements {
                        validate_values(target, element)?;
                    }
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// Coerces a raw scalar to the field's declared semantic type.
fn coerce_scalar(resource: &'static str, field: &Field, raw: &Value) -> Result<Value, HydrationError> {
    let coercion_error = || HydrationError::Coercion {
        resource,
        field: field.name,
        expected: field.kind.type_name(),
    };

    match field.kind {
        FieldKind::Str => match raw {
            Value::String(text) => Ok(Value::String(text.clone())),
            Value::Number(number) => Ok(Value::String(number.to_string())),
            Value::Bool(flag) => Ok(Value::String(flag.to_string())),
            _ => Err(coercion_error()),
        },
        FieldKind::Int => match raw {
            Value::Number(number) => number
                .as_i64()
                .or_else(|| number.as_f64().map(|float| float as i64))
                .map(Value::from)
                .ok_or_else(coercion_error),
            Value::String(text) => text
                .parse::<i64>()
                .map(Value::from)
                .map_err(|_| coercion_error()),
            Value::Bool(flag) => Ok(Value::from(i64::from(*flag))),
            _ => Err(coercion_error()),
        },
        FieldKind::Float => match raw {
            Value::Number(number) => number
                .as_f64()
                .map(Value::from)
                .ok_or_else(coercion_error),
            Value::String(text) => text
                .parse::<f64>()
                .map(Value::from)
                .map_err(|_| coercion_error()),
            _ => Err(coercion_error()),
        },
        FieldKind::Bool => match raw {
            Value::Bool(flag) => Ok(Value::Bool(*flag)),
            Value::Number(number) => Ok(Value::Bool(number.as_f64() != Some(0.0))),
            Value::String(text) => match text.as_str() {
                "true" | "1" => Ok(Value::Bool(true)),
                "false" | "0" | "" => Ok(Value::Bool(false)),
                _ => Err(coercion_error()),
            },
            _ => Err(coercion_error()),
        },
        FieldKind::DateTime => match raw {
            Value::String(text) => parse_date_time(text)
                .map(|parsed| Value::String(parsed.to_rfc3339_opts(SecondsFormat::Secs, true)))
                .ok_or_else(coercion_error),
            _ => Err(coercion_error()),
        },
        FieldKind::HasOne(_) | FieldKind::HasMany(_) => Err(coercion_error()),
    }
}

/// Parses a date-time from the formats the API is known to emit.
///
/// Accepts RFC 3339, naive timestamps (assumed UTC), and bare dates
/// (interpreted as midnight UTC).
pub(crate) fn parse_date_time(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            return Some(parsed.and_utc());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

/// Truncates a date-time to midnight UTC of its calendar day.
pub(crate) fn start_of_day(moment: DateTime<Utc>) -> DateTime<Utc> {
    moment
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .map_or(moment, |midnight| midnight.and_utc())
}

/// Presence test shared by hydration, output policies, and `Required` rules.
///
/// Null, empty strings, empty objects, empty arrays, `false`, and zero all
/// count as absent, matching the remote API's loose notion of emptiness.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64() != Some(0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(elements) => !elements.is_empty(),
        Value::Object(entries) => !entries.is_empty(),
    }
}

/// Reformats an RFC 3339 string value to `YYYY-MM-DD`; nulls stay null.
fn format_date_only(value: Value) -> Value {
    match value {
        Value::String(text) => parse_date_time(&text).map_or(Value::String(text), |parsed| {
            Value::String(parsed.format("%Y-%m-%d").to_string())
        }),
        other => other,
    }
}
