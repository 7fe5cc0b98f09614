use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A dashboard as stored in a local file.
///
/// Only the editable contract is modelled. Server-only fields such as
/// `resource` and `url` are dropped on deserialization and can never be
/// written back out. Field order here is the field order on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    #[serde(
        default,
        deserialize_with = "optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub title: String,
    #[serde(deserialize_with = "nullable_string")]
    pub description: String,
    pub graphs: Value,
}

impl Dashboard {
    pub fn to_draft(&self) -> DashboardDraft {
        DashboardDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            graphs: self.graphs.clone(),
        }
    }
}

/// Request body for create and update calls. Updates are full replacements,
/// so every field is always sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardDraft {
    pub title: String,
    pub description: String,
    pub graphs: Value,
}

impl DashboardDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>, graphs: Value) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            graphs,
        }
    }
}

/// Listing entry returned by the "list all" call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(deserialize_with = "required_id")]
    pub id: String,
    pub title: String,
}

/// Dashboard ids come back as numbers from some endpoints and strings from
/// others. Both end up as strings.
fn id_from_value<E: serde::de::Error>(value: Value) -> Result<String, E> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(E::custom(format!(
            "dashboard id must be a string or number, got {}",
            other
        ))),
    }
}

fn optional_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => id_from_value(value).map(Some),
    }
}

fn required_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    id_from_value(Value::deserialize(deserializer)?)
}

fn nullable_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
