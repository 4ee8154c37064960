//! Type descriptor used by documented request and response bodies.
//!
//! A descriptor is an ordered list of type-name tokens, outermost first, so
//! `Vec<Order>` is described as `["Vec", "Order"]` and rendered as
//! `"Vec of Order"`. Associative types additionally carry a key and a value
//! descriptor.

use serde::ser::{Serialize, SerializeMap, Serializer};

const SEPARATOR: &str = " of ";

/// Ordered type-name tokens, optionally with map key/value descriptors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonDocType {
    tokens: Vec<String>,
    map_key: Option<Box<JsonDocType>>,
    map_value: Option<Box<JsonDocType>>,
}

impl JsonDocType {
    pub fn new() -> Self {
        Self::default()
    }

    /// Descriptor holding a single token
    pub fn from_item(item: impl Into<String>) -> Self {
        Self {
            tokens: vec![item.into()],
            ..Self::default()
        }
    }

    pub fn add_item(&mut self, item: impl Into<String>) {
        self.tokens.push(item.into());
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn set_tokens(&mut self, tokens: Vec<String>) {
        self.tokens = tokens;
    }

    /// Drops the outermost token and returns it. Empty descriptors are left
    /// untouched and yield `None`.
    pub fn remove_outermost(&mut self) -> Option<String> {
        if self.tokens.is_empty() {
            None
        } else {
            Some(self.tokens.remove(0))
        }
    }

    /// Tokens joined with `" of "`
    pub fn rendered(&self) -> String {
        self.tokens.join(SEPARATOR)
    }

    pub fn map_key(&self) -> Option<&Self> {
        self.map_key.as_deref()
    }

    pub fn set_map_key(&mut self, key: Self) {
        self.map_key = Some(Box::new(key));
    }

    pub fn map_value(&self) -> Option<&Self> {
        self.map_value.as_deref()
    }

    pub fn set_map_value(&mut self, value: Self) {
        self.map_value = Some(Box::new(value));
    }
}

impl<S: Into<String>> FromIterator<S> for JsonDocType {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

impl std::fmt::Display for JsonDocType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.rendered())
    }
}

impl Serialize for JsonDocType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 1 + usize::from(self.map_key.is_some()) + usize::from(self.map_value.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("type", &self.rendered())?;
        if let Some(key) = &self.map_key {
            map.serialize_entry("mapKey", key)?;
        }
        if let Some(value) = &self.map_value {
            map.serialize_entry("mapValue", value)?;
        }
        map.end()
    }
}
