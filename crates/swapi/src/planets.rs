use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One page of the planets listing, held as the JSON object it was parsed from.
///
/// Nothing is assumed about the object's keys: an error payload such as
/// `{"detail": "Not found"}` is still a page, and serializing a page
/// reproduces its body key for key. The accessors read the documented fields
/// when they are present.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanetPage(Map<String, Value>);

impl PlanetPage {
    pub fn new(body: Map<String, Value>) -> Self {
        Self(body)
    }

    /// Total number of planets across all pages.
    pub fn count(&self) -> Option<u64> {
        self.0.get("count").and_then(Value::as_u64)
    }

    pub fn next(&self) -> Option<&str> {
        self.0.get("next").and_then(Value::as_str)
    }

    pub fn previous(&self) -> Option<&str> {
        self.0.get("previous").and_then(Value::as_str)
    }

    /// Planets on this page. Entries without a string `name` are skipped.
    pub fn results(&self) -> Vec<Planet> {
        self.0
            .get("results")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| Planet::deserialize(entry).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_json(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_json(self) -> Map<String, Value> {
        self.0
    }
}

/// A planet record; everything except `name` is kept verbatim in `attributes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub name: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Planet {
    /// String attribute such as `climate` or `terrain`.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }
}
