//! Lenient identifier decoding for request bodies.
//!
//! Form-driven clients post ids as strings (`"42"`), scripted clients as
//! numbers (`42`). Both decode to the same `i32`; an absent, `null` or blank
//! value decodes to `None` so the handler can report a missing field.

use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

pub fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawId>::deserialize(deserializer)?;

    match raw {
        None => Ok(None),
        Some(RawId::Number(n)) => i32::try_from(n)
            .map(Some)
            .map_err(|_| de::Error::custom(format!("id {} is out of range", n))),
        Some(RawId::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<i32>()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("'{}' is not a valid id", s)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default, deserialize_with = "deserialize_optional_id")]
        song_id: Option<i32>,
    }

    fn parse(json: &str) -> Result<Option<i32>, serde_json::Error> {
        serde_json::from_str::<Body>(json).map(|b| b.song_id)
    }

    #[test]
    fn test_numbers_and_numeric_strings() {
        assert_eq!(parse(r#"{"song_id": 42}"#).unwrap(), Some(42));
        assert_eq!(parse(r#"{"song_id": "42"}"#).unwrap(), Some(42));
        assert_eq!(parse(r#"{"song_id": " 7 "}"#).unwrap(), Some(7));
    }

    #[test]
    fn test_absent_null_and_blank_are_none() {
        assert_eq!(parse(r#"{}"#).unwrap(), None);
        assert_eq!(parse(r#"{"song_id": null}"#).unwrap(), None);
        assert_eq!(parse(r#"{"song_id": ""}"#).unwrap(), None);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(parse(r#"{"song_id": "abc"}"#).is_err());
        assert!(parse(r#"{"song_id": 99999999999}"#).is_err());
        assert!(parse(r#"{"song_id": true}"#).is_err());
    }
}
