#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pointage::libs::payload::{PortalData, RawResponse};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 19).unwrap()
    }

    fn normalize(json: &str) -> PortalData {
        serde_json::from_str::<RawResponse>(json).unwrap().normalize(today())
    }

    #[test]
    fn test_modern_weeks_shape_wins() {
        let data = normalize(
            r#"{
                "token": "abc123",
                "preferences": {"theme": "ocean", "minutes_objective": 2280},
                "weeks": {
                    "2026-w-08": {
                        "days": {
                            "19-02-2026": {"hours": ["08:30", "12:00"], "effective": "03:30", "paid": "03:30"}
                        },
                        "total_effective": "03:30",
                        "total_paid": "03:30"
                    }
                }
            }"#,
        );

        assert_eq!(data.token.as_deref(), Some("abc123"));
        let preferences = data.preferences.as_ref().unwrap();
        assert_eq!(preferences.theme.as_deref(), Some("ocean"));
        assert_eq!(preferences.minutes_objective, Some(2280));

        let week = &data.weeks["2026-w-08"];
        assert_eq!(week.total_paid, "03:30");
        assert_eq!(week.days["19-02-2026"].hours, vec!["08:30", "12:00"]);
        assert!(data.error.is_none());
        assert!(!data.is_stale());
    }

    #[test]
    fn test_day_hours_default_to_empty() {
        let data = normalize(
            r#"{
                "weeks": {
                    "2026-w-08": {
                        "days": {"18-02-2026": {"effective": null, "paid": null}},
                        "total_effective": "00:00",
                        "total_paid": "00:00"
                    }
                }
            }"#,
        );

        assert!(data.weeks["2026-w-08"].days["18-02-2026"].hours.is_empty());
    }

    #[test]
    fn test_legacy_hours_shape_synthesizes_current_week() {
        let data = normalize(
            r#"{
                "hours": {"19-02-2026": ["08:30", "12:00"], "18-02-2026": []},
                "total_effective": "03:30"
            }"#,
        );

        // The flat map becomes one week keyed by today's ISO week
        assert_eq!(data.weeks.len(), 1);
        let week = &data.weeks["2026-w-08"];
        assert_eq!(week.days.len(), 2);
        assert_eq!(week.days["19-02-2026"].hours, vec!["08:30", "12:00"]);
        assert!(week.days["19-02-2026"].effective.is_none());

        // Missing paid total defaults to the effective total
        assert_eq!(week.total_effective, "03:30");
        assert_eq!(week.total_paid, "03:30");
    }

    #[test]
    fn test_legacy_shape_without_totals_defaults_to_zero() {
        let data = normalize(r#"{"hours": {"19-02-2026": []}}"#);

        let week = &data.weeks["2026-w-08"];
        assert_eq!(week.total_effective, "00:00");
        assert_eq!(week.total_paid, "00:00");
    }

    #[test]
    fn test_neither_shape_means_no_weeks() {
        let data = normalize(r#"{"error": "boom"}"#);

        assert!(data.weeks.is_empty());
        assert_eq!(data.error.as_deref(), Some("boom"));
        assert!(!data.is_stale());
    }

    #[test]
    fn test_stale_marker_is_detected_case_insensitively() {
        let data = normalize(r#"{"hours": {}, "error": "Portal unreachable, using cached data"}"#);
        assert!(data.is_stale());

        let data = normalize(r#"{"hours": {}, "error": "USING CACHED DATA"}"#);
        assert!(data.is_stale());
    }

    #[test]
    fn test_malformed_sections_degrade_independently() {
        // Every contested field carries the wrong type at once
        let data = normalize(
            r#"{
                "preferences": [],
                "token": 42,
                "error": {"nested": true},
                "weeks": "not a map",
                "hours": {"19-02-2026": ["08:30"]}
            }"#,
        );

        assert!(data.preferences.is_none());
        assert!(data.token.is_none());
        assert!(data.error.is_none());

        // The broken weeks map falls through to the legacy shape
        assert_eq!(data.weeks.len(), 1);
        assert_eq!(data.weeks["2026-w-08"].days["19-02-2026"].hours, vec!["08:30"]);
    }

    #[test]
    fn test_empty_preferences_object_is_usable() {
        let data = normalize(r#"{"preferences": {}}"#);

        let preferences = data.preferences.unwrap();
        assert!(preferences.theme.is_none());
        assert!(preferences.minutes_objective.is_none());
    }

    #[test]
    fn test_default_portal_data_is_empty_and_fresh() {
        let data = PortalData::default();

        assert!(data.weeks.is_empty());
        assert!(data.token.is_none());
        assert!(!data.is_stale());
    }
}
