//! Feature catalog record
//!
//! Mirrors one element of the catalog service's `features` array. Every
//! field is optional on the wire. Absent, null or wrongly typed fields fall
//! back to defaults, so a record is never lost over one bad field; a record
//! with unreadable compatibility data classifies as `Unknown`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Baseline block of a feature record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineInfo {
    /// Raw compatibility code (`wide`, `newly`, `limited`, or anything else)
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    /// Date the feature reached its current status
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub since: Option<String>,
}

/// Link to a specification document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecificationLink {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
}

/// One tracked web-platform feature
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    /// Namespaced key (`css-properties-gap`, `html-element-dialog`, `api-fetch`, ...)
    #[serde(default, deserialize_with = "string_or_empty")]
    pub identifier: String,
    /// Display name
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_baseline")]
    pub baseline: Option<BaselineInfo>,
    #[serde(default, deserialize_with = "lenient_specifications")]
    pub specifications: Vec<SpecificationLink>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub mdn_url: Option<String>,
    /// Per-browser support rows, kept opaque
    #[serde(
        default,
        deserialize_with = "lenient_array",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub browser_support: Vec<Value>,
}

/// Any non-string value reads as `None`
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_string))
}

fn string_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(lenient_string(deserializer)?.unwrap_or_default())
}

/// Non-object baseline blocks (`false`, numbers, strings) read as absent
fn lenient_baseline<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<BaselineInfo>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

/// Keeps readable links, drops the rest
fn lenient_specifications<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<SpecificationLink>, D::Error> {
    let items = lenient_array(deserializer)?;
    Ok(items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

fn lenient_array<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Value>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items),
        _ => Ok(Vec::new()),
    }
}

impl FeatureRecord {
    /// Minimal record with an identifier, name and raw status code
    pub fn new(identifier: impl Into<String>, name: impl Into<String>, status: Option<&str>) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            baseline: status.map(|s| BaselineInfo {
                status: Some(s.to_string()),
                since: None,
            }),
            ..Self::default()
        }
    }

    /// Raw compatibility code, if the record carries one
    pub fn status_code(&self) -> Option<&str> {
        self.baseline.as_ref()?.status.as_deref()
    }

    /// Domain derived from the identifier prefix
    pub fn domain(&self) -> FeatureDomain {
        FeatureDomain::of(&self.identifier)
    }

    /// Spec URLs, skipping links without one
    pub fn spec_urls(&self) -> impl Iterator<Item = &str> {
        self.specifications.iter().filter_map(|s| s.url.as_deref())
    }
}

/// Namespace of a feature identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureDomain {
    Css,
    Html,
    Api,
    Js,
    Other,
}

impl FeatureDomain {
    pub const ALL: [FeatureDomain; 5] = [
        FeatureDomain::Css,
        FeatureDomain::Html,
        FeatureDomain::Api,
        FeatureDomain::Js,
        FeatureDomain::Other,
    ];

    /// Classify an identifier by its prefix
    pub fn of(identifier: &str) -> Self {
        if identifier.starts_with("css-") {
            FeatureDomain::Css
        } else if identifier.starts_with("html-") {
            FeatureDomain::Html
        } else if identifier.starts_with("api-") {
            FeatureDomain::Api
        } else if identifier.starts_with("js-") {
            FeatureDomain::Js
        } else {
            FeatureDomain::Other
        }
    }

    /// Whether script sources can reference features of this domain
    pub fn is_script(&self) -> bool {
        matches!(self, FeatureDomain::Api | FeatureDomain::Js)
    }

    pub(crate) fn slot(&self) -> usize {
        match self {
            FeatureDomain::Css => 0,
            FeatureDomain::Html => 1,
            FeatureDomain::Api => 2,
            FeatureDomain::Js => 3,
            FeatureDomain::Other => 4,
        }
    }
}
