//! # Response Classification
//!
//! Every service call returns a JSON body which may carry `warnings` and
//! `errors` next to its payload. Rather than poking at those keys at each call
//! site, the body is classified once into a [`ResponseStatus`] when the
//! [`Response`] is built, and commands go through [`Response::report`]:
//!
//! - warnings are appended to the command's messages and never stop execution
//! - errors turn into [`DashError::Remote`] and stop the current operation
//!
//! The service may send either field as a list of strings, a bare string, or a
//! list of arbitrary JSON values. All of those end up as `Vec<String>`.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DashError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseStatus {
    Ok,
    Warnings(Vec<String>),
    Errors {
        errors: Vec<String>,
        warnings: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub body: Value,
    pub status: ResponseStatus,
}

impl Response {
    pub fn from_body(body: Value) -> Self {
        let warnings = entries(&body, "warnings");
        let errors = entries(&body, "errors");

        let status = if !errors.is_empty() {
            ResponseStatus::Errors { errors, warnings }
        } else if !warnings.is_empty() {
            ResponseStatus::Warnings(warnings)
        } else {
            ResponseStatus::Ok
        };

        Self { body, status }
    }

    /// A response with no body at all (e.g. `204 No Content`).
    pub fn empty() -> Self {
        Self {
            body: Value::Null,
            status: ResponseStatus::Ok,
        }
    }

    pub fn warnings(&self) -> &[String] {
        match &self.status {
            ResponseStatus::Ok => &[],
            ResponseStatus::Warnings(warnings) => warnings,
            ResponseStatus::Errors { warnings, .. } => warnings,
        }
    }

    /// Surfaces warnings into `result` and fails if the response carries errors.
    pub fn report(self, result: &mut CmdResult) -> Result<Value> {
        for warning in self.warnings() {
            tracing::debug!(%warning, "service warning");
            result.add_message(CmdMessage::warning(format!("Warning: {}", warning)));
        }

        match self.status {
            ResponseStatus::Errors { errors, warnings } => {
                Err(DashError::Remote { errors, warnings })
            }
            _ => Ok(self.body),
        }
    }

    /// Pulls `key` out of the body and deserializes it.
    pub fn payload<T: DeserializeOwned>(body: &Value, key: &str) -> Result<T> {
        let value = body.get(key).ok_or_else(|| {
            DashError::MalformedData(format!("response has no `{}` field", key))
        })?;
        serde_json::from_value(value.clone()).map_err(|e| {
            DashError::MalformedData(format!("unexpected `{}` in response: {}", key, e))
        })
    }
}

fn entries(body: &Value, key: &str) -> Vec<String> {
    match body.get(key) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::String(s)) => vec![s.clone()],
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        Some(other) => vec![other.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use serde_json::json;

    #[test]
    fn classifies_plain_body_as_ok() {
        let res = Response::from_body(json!({"dash": {"id": 1}}));
        assert_eq!(res.status, ResponseStatus::Ok);
    }

    #[test]
    fn classifies_warnings() {
        let res = Response::from_body(json!({"warnings": ["slow"], "dash": {}}));
        assert_eq!(res.status, ResponseStatus::Warnings(vec!["slow".into()]));
    }

    #[test]
    fn errors_win_over_warnings() {
        let res = Response::from_body(json!({"warnings": "w", "errors": ["e1", {"code": 2}]}));
        assert_eq!(
            res.status,
            ResponseStatus::Errors {
                errors: vec!["e1".into(), "{\"code\":2}".into()],
                warnings: vec!["w".into()],
            }
        );
    }

    #[test]
    fn report_keeps_going_on_warnings() {
        let mut result = CmdResult::default();
        let body = Response::from_body(json!({"warnings": ["heads up"], "ok": true}))
            .report(&mut result)
            .unwrap();

        assert_eq!(body["ok"], json!(true));
        assert_eq!(result.messages.len(), 1);
        assert!(matches!(result.messages[0].level, MessageLevel::Warning));
        assert!(result.messages[0].content.contains("heads up"));
    }

    #[test]
    fn report_fails_on_errors() {
        let mut result = CmdResult::default();
        let err = Response::from_body(json!({"errors": ["No dashboard matches"]}))
            .report(&mut result)
            .unwrap_err();

        match err {
            DashError::Remote { errors, .. } => assert_eq!(errors, vec!["No dashboard matches"]),
            other => panic!("expected remote error, got {:?}", other),
        }
    }

    #[test]
    fn payload_reports_missing_key() {
        let err = Response::payload::<Value>(&json!({}), "dash").unwrap_err();
        assert!(matches!(err, DashError::MalformedData(_)));
    }
}
