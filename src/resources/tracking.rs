//! Change tracking for resources.
//!
//! [`Tracked`] wraps a [`Resource`] together with the raw payload it was
//! hydrated from and a snapshot of its serialized values at that point.
//! Mutations through `DerefMut` show up in [`Tracked::is_dirty`] and
//! [`Tracked::changed_fields`] without the resource type itself having to
//! know anything about dirtiness.

use std::ops::{Deref, DerefMut};

use serde_json::Value;

use crate::resources::errors::HydrationError;
use crate::resources::model::Resource;

/// A resource paired with its last-known server state.
#[derive(Debug, Clone)]
pub struct Tracked<R: Resource> {
    resource: R,
    /// The raw payload the resource was last hydrated from, untouched.
    original_state: Option<Value>,
    /// The serialized values at the last clean point.
    baseline: Option<Value>,
}

impl<R: Resource> Tracked<R> {
    /// Wraps a locally built resource with no server state.
    #[must_use]
    pub fn new(resource: R) -> Self {
        Self {
            resource,
            original_state: None,
            baseline: None,
        }
    }

    /// Hydrates a resource from raw wire JSON and records it as clean.
    ///
    /// # Errors
    ///
    /// Returns [`HydrationError`] when the payload cannot be coerced into
    /// the resource's schema.
    pub fn hydrate(raw: &Value) -> Result<Self, HydrationError> {
        let resource = R::hydrate(raw)?;
        let baseline = resource.values();
        Ok(Self {
            resource,
            original_state: Some(raw.clone()),
            baseline: Some(baseline),
        })
    }

    /// Re-hydrates the wrapped resource and resets it to clean.
    ///
    /// # Errors
    ///
    /// Returns [`HydrationError`] when the payload cannot be coerced into
    /// the resource's schema.
    pub fn rehydrate(&mut self, raw: &Value) -> Result<(), HydrationError> {
        self.resource.rehydrate(raw)?;
        self.original_state = Some(raw.clone());
        self.baseline = Some(self.resource.values());
        Ok(())
    }

    /// Returns `true` when the current values differ from the baseline.
    ///
    /// A resource that was never hydrated is dirty as soon as any of its
    /// values are set.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        !self.changed_fields().is_empty()
    }

    /// Returns the names of top-level fields that differ from the baseline.
    #[must_use]
    pub fn changed_fields(&self) -> Vec<String> {
        let current = self.resource.values();
        let Some(current) = current.as_object() else {
            return Vec::new();
        };

        let baseline = self.baseline.as_ref().and_then(Value::as_object);
        current
            .iter()
            .filter(|&(name, value)| {
                baseline.and_then(|fields| fields.get(name.as_str())) != Some(value)
            })
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Accepts the current values as the new clean baseline.
    pub fn mark_clean(&mut self) {
        self.baseline = Some(self.resource.values());
    }

    /// The raw payload this resource was last hydrated from, if any.
    #[must_use]
    pub fn original_state(&self) -> Option<&Value> {
        self.original_state.as_ref()
    }

    /// Consumes the wrapper, returning the resource.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.resource
    }
}

impl<R: Resource> Deref for Tracked<R> {
    type Target = R;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}

impl<R: Resource> DerefMut for Tracked<R> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.resource
    }
}
