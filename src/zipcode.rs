//! ZIP-code directory interface
//!
//!     The street pipelines never look up ZIP codes themselves; callers
//!     that join street keys with city data consume the [`ZipCodeIndex`]
//!     contract defined here. [`ZipDirectory`] is the in-memory reference
//!     implementation for record sets loaded from JSON; production callers
//!     may back the same trait with an external database.
//!
//!     Queries are forgiving about form: "10025", "10025-6093", and the
//!     integer-shaped "501" (a code that lost its leading zeros on the way
//!     through a spreadsheet) all resolve to their canonical five-digit
//!     code before lookup. An unknown code is a [`ZipCodeError::NotFound`],
//!     never a panic.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Five digits with an optional ZIP+4 suffix.
static ZIP_QUERY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{5})(?:-\d{4})?$").unwrap());

/// Lookup failures for ZIP-code queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZipCodeError {
    /// No record under the queried code.
    NotFound(String),
}

impl fmt::Display for ZipCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZipCodeError::NotFound(code) => write!(f, "no record for ZIP code '{}'", code),
        }
    }
}

impl std::error::Error for ZipCodeError {}

/// One ZIP code and the place it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ZipRecord {
    /// Canonical five-digit code
    pub zipcode: String,
    /// Primary city for the code
    pub major_city: String,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl ZipRecord {
    /// Field-to-value view of the record. Unset optional fields appear as
    /// JSON null so consumers see a stable set of keys.
    pub fn to_map(&self) -> BTreeMap<String, Value> {
        let optional = |field: &Option<String>| match field {
            Some(value) => Value::String(value.clone()),
            None => Value::Null,
        };
        let mut map = BTreeMap::new();
        map.insert("zipcode".to_string(), Value::String(self.zipcode.clone()));
        map.insert(
            "major_city".to_string(),
            Value::String(self.major_city.clone()),
        );
        map.insert("county".to_string(), optional(&self.county));
        map.insert("state".to_string(), optional(&self.state));
        map
    }
}

/// Key-value directory of ZIP-code records.
pub trait ZipCodeIndex: Send + Sync {
    /// Primary city for a ZIP code.
    fn city(&self, zipcode: &str) -> Result<String, ZipCodeError>;

    /// Full record for a ZIP code.
    fn record(&self, zipcode: &str) -> Result<&ZipRecord, ZipCodeError>;
}

/// Canonical five-digit form of a ZIP query.
///
/// Accepts a plain five-digit code, a ZIP+4 form whose suffix is dropped,
/// and bare digit strings of up to five characters, which are zero-padded
/// ("501" becomes "00501"). Returns `None` when the query cannot denote a
/// ZIP code.
pub fn canonical_zip(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if let Some(captures) = ZIP_QUERY.captures(trimmed) {
        if let Some(code) = captures.get(1) {
            return Some(code.as_str().to_string());
        }
    }
    if !trimmed.is_empty() && trimmed.len() < 5 && trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Some(format!("{:0>5}", trimmed));
    }
    None
}

/// In-memory ZIP-code directory backed by a hash map.
pub struct ZipDirectory {
    records: HashMap<String, ZipRecord>,
}

impl ZipDirectory {
    /// Directory over the given records, keyed by each record's code.
    pub fn new(records: impl IntoIterator<Item = ZipRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (record.zipcode.clone(), record))
            .collect();
        Self { records }
    }

    /// Load a directory from a JSON array of records.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let records: Vec<ZipRecord> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn lookup(&self, query: &str) -> Result<&ZipRecord, ZipCodeError> {
        let canonical = canonical_zip(query);
        let key = canonical.as_deref().unwrap_or(query);
        self.records
            .get(key)
            .ok_or_else(|| ZipCodeError::NotFound(query.trim().to_string()))
    }
}

impl ZipCodeIndex for ZipDirectory {
    fn city(&self, zipcode: &str) -> Result<String, ZipCodeError> {
        self.lookup(zipcode).map(|record| record.major_city.clone())
    }

    fn record(&self, zipcode: &str) -> Result<&ZipRecord, ZipCodeError> {
        self.lookup(zipcode)
    }
}
