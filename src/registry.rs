use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{ERROR_TYPE, Family, RegistryError, Variant};

/// Decoders for one variant of a family.
pub struct Entry<F> {
    /// Parses the variant from the raw payload.
    pub from_slice: fn(&[u8]) -> serde_json::Result<F>,
    /// Converts an already parsed object, used for fields nested in another object.
    pub from_value: fn(Value) -> serde_json::Result<F>,
}

impl<F> Clone for Entry<F> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<F> Copy for Entry<F> {}

fn from_slice<F, V>(bytes: &[u8]) -> serde_json::Result<F>
where
    V: DeserializeOwned + Into<F>,
{
    serde_json::from_slice::<V>(bytes).map(Into::into)
}
fn from_value<F, V>(value: Value) -> serde_json::Result<F>
where
    V: DeserializeOwned + Into<F>,
{
    serde_json::from_value::<V>(value).map(Into::into)
}

/// Discriminator to decoder map of one family.
///
/// Built once and never mutated afterwards.
pub struct Registry<F> {
    entries: HashMap<&'static str, Entry<F>>,
}

impl<F: Family> Registry<F> {
    pub fn builder() -> RegistryBuilder<F> {
        RegistryBuilder {
            entries: HashMap::new(),
            error: None,
        }
    }

    pub fn get(&self, discriminator: &str) -> Option<Entry<F>> {
        self.entries.get(discriminator).copied()
    }
    pub fn contains(&self, discriminator: &str) -> bool {
        self.entries.contains_key(discriminator)
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered discriminators, in no particular order.
    pub fn discriminators(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}

pub struct RegistryBuilder<F> {
    entries: HashMap<&'static str, Entry<F>>,
    error: Option<RegistryError>,
}

impl<F: Family> RegistryBuilder<F> {
    pub fn register<V>(self) -> Self
    where
        V: Variant + Into<F>,
    {
        self.register_entry(
            V::TYPE,
            Entry {
                from_slice: from_slice::<F, V>,
                from_value: from_value::<F, V>,
            },
        )
    }

    pub fn register_entry(mut self, discriminator: &'static str, entry: Entry<F>) -> Self {
        if self.error.is_some() {
            return self;
        }
        if discriminator == ERROR_TYPE {
            self.error = Some(RegistryError::Reserved { family: F::NAME });
        } else if self.entries.insert(discriminator, entry).is_some() {
            self.error = Some(RegistryError::Duplicate {
                family: F::NAME,
                discriminator,
            });
        }
        self
    }

    pub fn build(self) -> Result<Registry<F>, RegistryError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(Registry {
                entries: self.entries,
            }),
        }
    }
}
