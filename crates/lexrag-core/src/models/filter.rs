//! Filter payloads: the loosely-typed caller request, its canonical
//! normalized form, and the compiled store-native predicate.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw metadata filter as sent by the caller. Loosely typed: unknown keys
/// are ignored and wrong-typed fields degrade to their absent form rather
/// than failing the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterRequest {
    pub state: Option<String>,
    pub county: Option<String>,
    pub locations: Vec<LocationFilter>,
    pub obligation: Option<TagValue>,
    pub penalty: Option<TagValue>,
    pub permission: Option<TagValue>,
}

impl FilterRequest {
    /// Tolerant boundary parse. Every field is extracted independently, so a
    /// malformed `locations` (say, a number) leaves the rest of the filter
    /// intact instead of rejecting the request.
    pub fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::default();
        };
        Self {
            state: map.get("state").and_then(Value::as_str).map(str::to_owned),
            county: map.get("county").and_then(Value::as_str).map(str::to_owned),
            locations: map
                .get("locations")
                .and_then(Value::as_array)
                .map(|entries| {
                    entries
                        .iter()
                        .filter_map(LocationFilter::from_value)
                        .collect()
                })
                .unwrap_or_default(),
            obligation: map.get("obligation").and_then(TagValue::from_value),
            penalty: map.get("penalty").and_then(TagValue::from_value),
            permission: map.get("permission").and_then(TagValue::from_value),
        }
    }
}

/// One nested location entry: a state with a list of counties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationFilter {
    pub state: Option<String>,
    pub counties: Vec<String>,
}

impl LocationFilter {
    fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        Some(Self {
            state: map.get("state").and_then(Value::as_str).map(str::to_owned),
            // A missing or malformed `counties` key is tolerated: the entry
            // simply expands to nothing.
            counties: map
                .get("counties")
                .and_then(Value::as_array)
                .map(|cs| {
                    cs.iter()
                        .filter_map(Value::as_str)
                        .map(str::to_owned)
                        .collect()
                })
                .unwrap_or_default(),
        })
    }
}

/// A boolean tag filter value: native boolean or the string form stored in
/// the index ("Y").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagValue {
    Bool(bool),
    Text(String),
}

impl TagValue {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(TagValue::Bool(*b)),
            Value::String(s) => Some(TagValue::Text(s.clone())),
            _ => None,
        }
    }

    /// A string counts as true only when it case-insensitively equals "Y".
    pub fn is_active(&self) -> bool {
        match self {
            TagValue::Bool(b) => *b,
            TagValue::Text(s) => s.eq_ignore_ascii_case("y"),
        }
    }
}

/// Canonical filter produced by normalization. `flat_locations` is always
/// present (possibly empty); each entry has at least one of state/county set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalFilter {
    pub state: Option<String>,
    pub county: Option<String>,
    pub flat_locations: Vec<FlatLocation>,
    pub tags: TagSet,
}

/// One `(state, county)` pair from the cartesian expansion of a nested
/// location entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatLocation {
    pub state: Option<String>,
    pub county: Option<String>,
}

/// The set of active boolean tag filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagSet {
    pub obligation: bool,
    pub penalty: bool,
    pub permission: bool,
}

impl TagSet {
    /// Active tags paired with their metadata field names, in canonical order.
    pub fn active(&self) -> impl Iterator<Item = &'static str> {
        [
            ("obligation", self.obligation),
            ("penalty", self.penalty),
            ("permission", self.permission),
        ]
        .into_iter()
        .filter_map(|(name, on)| on.then_some(name))
    }

    pub fn is_empty(&self) -> bool {
        !(self.obligation || self.penalty || self.permission)
    }
}

/// Compiled store-native filter expression. Opaque to callers; the inner
/// JSON uses the store's `$eq` / `$or` syntax. An empty object means
/// "match all" and is omitted from store queries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledFilter(Value);

impl CompiledFilter {
    pub fn new(expr: Value) -> Self {
        Self(expr)
    }

    /// The "match all" filter.
    pub fn empty() -> Self {
        Self(Value::Object(serde_json::Map::new()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.as_object().is_some_and(|m| m.is_empty())
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}
