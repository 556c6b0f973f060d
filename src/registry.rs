//! Flyweight registries interning colors and font names to small ids.
//!
//! A registry is filled while the operation stream is encoded and sealed
//! before it is embedded in a [`SyntaxInfo`](crate::SyntaxInfo). Once sealed,
//! the value-to-id index is dropped and registration fails.

use crate::color::Rgb;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::hash::Hash;

/// Id handed out by a registry. Ids start at 1; 0 is never assigned.
pub type Id = u32;

/// Registry of interned colors.
pub type ColorRegistry = Registry<Rgb>;

/// Registry of interned font family names.
pub type FontNameRegistry = Registry<String>;

/// Bidirectional id <-> value map with an open and a sealed phase.
#[derive(Clone, Debug)]
pub struct Registry<V> {
    name: &'static str,
    values: Vec<V>,
    // None once sealed.
    ids: Option<HashMap<V, Id>>,
}

impl<V: Clone + Eq + Hash> Registry<V> {
    /// Create an open, empty registry. `name` is used in error messages.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            values: Vec::new(),
            ids: Some(HashMap::new()),
        }
    }

    /// Id for `value`, registering it if it was not seen before.
    pub fn get_id(&mut self, value: &V) -> Result<Id> {
        let ids = self
            .ids
            .as_mut()
            .ok_or(Error::RegistrySealed { registry: self.name })?;
        if let Some(&id) = ids.get(value) {
            return Ok(id);
        }
        self.values.push(value.clone());
        let id = self.values.len() as Id;
        ids.insert(value.clone(), id);
        Ok(id)
    }

    /// Value registered under `id`.
    pub fn data_by_id(&self, id: Id) -> Result<&V> {
        let idx = (id as usize).checked_sub(1);
        idx.and_then(|idx| self.values.get(idx))
            .ok_or(Error::UnknownId {
                registry: self.name,
                id,
            })
    }

    /// Switch to the read-only phase.
    pub fn seal(&mut self) {
        self.ids = None;
        self.values.shrink_to_fit();
    }

    #[must_use]
    pub const fn is_sealed(&self) -> bool {
        self.ids.is_none()
    }

    /// All assigned ids in ascending order.
    #[must_use]
    pub fn all_ids(&self) -> Vec<Id> {
        (1..=self.values.len() as Id).collect()
    }

    /// `(id, value)` pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (Id, &V)> {
        self.values.iter().enumerate().map(|(idx, v)| (idx as Id + 1, v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
