use serde::{Deserialize, Serialize};

/// Class record as exchanged on the wire.
///
/// `start_date`/`end_date` carry `YYYY-MM-DD` strings but are treated as
/// opaque text: the service never parses them as calendar dates.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Class {
    pub id: i64,
    pub class_name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub number_of_hours: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_stay_opaque_strings() {
        let c: Class = serde_json::from_str(
            r#"{"id": 10, "class_name": "Rust", "description": "systems",
                "start_date": "2026-02-30", "end_date": "2026-03-01",
                "number_of_hours": 40}"#,
        )
        .expect("deserialize");
        // Feb 30 is not a real date; shape-checking only, so it passes through.
        assert_eq!(c.start_date, "2026-02-30");
    }

    #[test]
    fn rejects_non_integer_hours() {
        let res: Result<Class, _> = serde_json::from_str(
            r#"{"id": 10, "class_name": "Rust", "description": "systems",
                "start_date": "2026-01-01", "end_date": "2026-03-01",
                "number_of_hours": "forty"}"#,
        );
        assert!(res.is_err());
    }
}
