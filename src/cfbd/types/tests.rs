//! Unit tests for roster payload types

use super::*;
use serde_json::json;

#[cfg(test)]
mod player_record_tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let value = json!({
            "id": 4432,
            "firstName": "Jane",
            "lastName": "Doe",
            "team": "Utah",
            "homeCity": "Salt Lake City",
            "homeState": "UT",
            "position": "QB"
        });

        let record: PlayerRecord = serde_json::from_value(value).unwrap();

        assert_eq!(record.first_name(), "Jane");
        assert_eq!(record.last_name(), "Doe");
        assert_eq!(record.team(), "Utah");
        assert_eq!(record.home_city(), "Salt Lake City");
        assert_eq!(record.home_state(), "UT");
        assert_eq!(record.identity(), "Jane Doe");
    }

    #[test]
    fn test_missing_and_null_fields_read_as_unknown() {
        let value = json!({
            "firstName": "Jane",
            "homeCity": null
        });

        let record: PlayerRecord = serde_json::from_value(value).unwrap();

        assert_eq!(record.last_name(), UNKNOWN);
        assert_eq!(record.team(), UNKNOWN);
        assert_eq!(record.home_city(), UNKNOWN);
        assert_eq!(record.home_state(), UNKNOWN);
        assert_eq!(record.identity(), "Jane Unknown");
    }

    #[test]
    fn test_identity_is_trimmed() {
        let record = PlayerRecord {
            first_name: Some("  ".to_string()),
            last_name: Some("Doe ".to_string()),
            ..Default::default()
        };
        assert_eq!(record.identity(), "Doe");
    }

    #[test]
    fn test_array_payload() {
        let body = r#"[{"firstName":"A","lastName":"B"},{}]"#;
        let records: Vec<PlayerRecord> = serde_json::from_str(body).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].identity(), "Unknown Unknown");
    }
}
