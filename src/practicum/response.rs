//! Response shape checks and status formatting.
//!
//! The API payload is validated by hand rather than deserialized into a
//! struct: diagnostics must name the exact missing key or offending JSON
//! type, and records beyond the required two fields pass through untouched.

use serde_json::Value;
use tracing::debug;

use crate::error::{ResponseError, Result};

use super::types::HomeworkStatus;

/// Required top-level keys of a homework status payload.
const REQUIRED_KEYS: [&str; 2] = ["current_date", "homeworks"];

/// Returns the JSON type name used in type-mismatch diagnostics.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Checks that a decoded API payload has the expected shape.
///
/// Returns the homework records in server order, most recent first. The
/// records themselves are not inspected here; that is the formatter's job.
///
/// # Errors
///
/// Returns a type mismatch if the payload is not an object or `homeworks`
/// is not an array, and a missing-key error if `current_date` or
/// `homeworks` is absent.
pub fn check_response(payload: &Value) -> Result<&[Value]> {
    debug!("Checking homework API response shape");

    let Some(object) = payload.as_object() else {
        return Err(ResponseError::type_mismatch("response", json_type_name(payload)).into());
    };

    for key in REQUIRED_KEYS {
        if !object.contains_key(key) {
            return Err(ResponseError::missing_key(key).into());
        }
    }

    let homeworks = &object["homeworks"];
    let Some(records) = homeworks.as_array() else {
        return Err(ResponseError::type_mismatch("homeworks", json_type_name(homeworks)).into());
    };

    Ok(records)
}

/// Builds the notification text for one homework record.
///
/// # Errors
///
/// Returns a missing-key error if `homework_name` or `status` is absent, a
/// type mismatch if either is not a string, and an unknown-status error if
/// the status code is outside the verdict table.
pub fn parse_status(record: &Value) -> Result<String> {
    let name = require_str(record, "homework_name")?;
    let code = require_str(record, "status")?;

    let status = HomeworkStatus::from_code(code)
        .ok_or_else(|| ResponseError::unknown_status(code))?;

    debug!("Homework \"{name}\" is {status}");

    Ok(format!(
        "Changed review status for \"{name}\". {}",
        status.verdict()
    ))
}

/// Extracts a required string field from a record.
fn require_str<'a>(record: &'a Value, key: &str) -> Result<&'a str> {
    let value = record
        .get(key)
        .ok_or_else(|| ResponseError::missing_key(key))?;

    value
        .as_str()
        .ok_or_else(|| ResponseError::type_mismatch(key, json_type_name(value)).into())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::error::WatchError;

    use super::*;

    #[test]
    fn test_non_object_payload_is_a_type_mismatch() {
        let err = check_response(&json!("not a dict")).unwrap_err();
        match err {
            WatchError::Response(ResponseError::TypeMismatch { field, found }) => {
                assert_eq!(field, "response");
                assert_eq!(found, "string");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_current_date_is_named() {
        let err = check_response(&json!({"homeworks": []})).unwrap_err();
        assert!(err.to_string().contains("current_date"));
    }

    #[test]
    fn test_missing_homeworks_is_named() {
        let err = check_response(&json!({"current_date": 1})).unwrap_err();
        assert!(err.to_string().contains("homeworks"));
    }

    #[test]
    fn test_non_array_homeworks_names_the_found_type() {
        let err = check_response(&json!({"current_date": 1, "homeworks": "oops"})).unwrap_err();
        match err {
            WatchError::Response(ResponseError::TypeMismatch { field, found }) => {
                assert_eq!(field, "homeworks");
                assert_eq!(found, "string");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_valid_payload_returns_records_unchanged() {
        let payload = json!({
            "current_date": 1_700_000_000,
            "homeworks": [
                {"homework_name": "hw2", "status": "reviewing", "lesson_name": "final"},
                {"homework_name": "hw1", "status": "approved"},
            ],
        });

        let records = check_response(&payload).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["homework_name"], "hw2");
        assert_eq!(records[0]["lesson_name"], "final");
    }

    #[test]
    fn test_approved_record_formats_exactly() {
        let record = json!({"homework_name": "hw1", "status": "approved"});
        assert_eq!(
            parse_status(&record).unwrap(),
            "Changed review status for \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn test_reviewing_and_rejected_records_format() {
        let reviewing = json!({"homework_name": "hw2", "status": "reviewing"});
        assert_eq!(
            parse_status(&reviewing).unwrap(),
            "Changed review status for \"hw2\". Работа взята на проверку ревьюером."
        );

        let rejected = json!({"homework_name": "hw3", "status": "rejected"});
        assert_eq!(
            parse_status(&rejected).unwrap(),
            "Changed review status for \"hw3\". Работа проверена: у ревьюера есть замечания."
        );
    }

    #[test]
    fn test_unknown_status_is_named() {
        let record = json!({"homework_name": "hw1", "status": "unknown_status"});
        let err = parse_status(&record).unwrap_err();
        match err {
            WatchError::Response(ResponseError::UnknownStatus { status }) => {
                assert_eq!(status, "unknown_status");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_record_keys_are_named() {
        let err = parse_status(&json!({"status": "approved"})).unwrap_err();
        assert!(err.to_string().contains("homework_name"));

        let err = parse_status(&json!({"homework_name": "hw1"})).unwrap_err();
        assert!(err.to_string().contains("status"));
    }

    #[test]
    fn test_non_string_record_field_is_a_type_mismatch() {
        let record = json!({"homework_name": 7, "status": "approved"});
        let err = parse_status(&record).unwrap_err();
        assert!(matches!(
            err,
            WatchError::Response(ResponseError::TypeMismatch { .. })
        ));
    }
}
