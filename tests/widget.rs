#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use pointage::libs::data_storage::DataStorage;
    use pointage::libs::day::AbsenceMap;
    use pointage::libs::payload::{DayPayload, WeekPayload};
    use pointage::libs::summary::WeekContext;
    use pointage::libs::theme::Theme;
    use pointage::libs::widget::{WidgetSnapshot, WidgetStore, WidgetTimeRange};
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct WidgetTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for WidgetTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());

            WidgetTestContext { _temp_dir: temp_dir }
        }
    }

    fn thursday_noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 2, 19).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    fn sample_context() -> WeekContext {
        let day = DayPayload {
            hours: vec!["08:30".to_string(), "10:41".to_string(), "10:49".to_string()],
            effective: None,
            paid: None,
        };
        let weeks = HashMap::from([(
            "2026-w-08".to_string(),
            WeekPayload {
                days: HashMap::from([("19-02-2026".to_string(), day)]),
                total_effective: "20:00".to_string(),
                total_paid: "20:00".to_string(),
            },
        )]);
        WeekContext::new(weeks, AbsenceMap::new(), 2280, thursday_noon())
    }

    fn sample_snapshot() -> WidgetSnapshot {
        WidgetSnapshot::project(&sample_context(), Theme::Forest, false, "2026-02-19 11:58:00")
    }

    #[test]
    fn test_projection_week_figures() {
        let snapshot = sample_snapshot();

        assert_eq!(snapshot.total_effective, "20:00");
        assert_eq!(snapshot.total_paid, "20:00");
        assert_eq!(snapshot.remaining, "18:00");
        assert_eq!(snapshot.progress, 53);
        assert!(!snapshot.is_offline);
        assert_eq!(snapshot.last_sync, "2026-02-19 11:58:00");
    }

    #[test]
    fn test_projection_today_figures() {
        let snapshot = sample_snapshot();

        assert_eq!(snapshot.today_worked.as_deref(), Some("03:22"));
        assert_eq!(snapshot.today_target.as_deref(), Some("07:36"));
        assert_eq!(snapshot.today_remaining.as_deref(), Some("04:14"));
        assert_eq!(snapshot.today_sessions, Some(2));
        assert_eq!(snapshot.today_first_in.as_deref(), Some("08:30"));
        assert_eq!(snapshot.today_last_out.as_deref(), Some("12:00"));
        assert_eq!(snapshot.today_is_working, Some(true));
        assert_eq!(snapshot.today_is_absent, Some(false));

        let ranges = snapshot.today_ranges.unwrap();
        assert_eq!(
            ranges,
            vec![
                WidgetTimeRange {
                    start: "08:30".to_string(),
                    end: "10:41".to_string(),
                },
                WidgetTimeRange {
                    start: "10:49".to_string(),
                    end: "12:00".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_projection_carries_theme_palette() {
        let snapshot = sample_snapshot();

        assert_eq!(snapshot.theme.as_deref(), Some("forest"));
        assert_eq!(snapshot.accent_hex.as_deref(), Some("10B981"));
        assert_eq!(snapshot.accent_secondary_hex.as_deref(), Some("34D399"));
        assert_eq!(snapshot.background_start_hex.as_deref(), Some("1A1F1A"));
        assert_eq!(snapshot.background_end_hex.as_deref(), Some("111411"));
        assert_eq!(snapshot.is_light_theme, Some(false));
    }

    #[test]
    fn test_projection_today_remaining_floors_at_zero() {
        let day = DayPayload {
            hours: vec!["08:00".to_string(), "18:00".to_string()],
            effective: None,
            paid: None,
        };
        let weeks = HashMap::from([(
            "2026-w-08".to_string(),
            WeekPayload {
                days: HashMap::from([("19-02-2026".to_string(), day)]),
                total_effective: "30:00".to_string(),
                total_paid: "30:00".to_string(),
            },
        )]);
        let context = WeekContext::new(weeks, AbsenceMap::new(), 2280, thursday_noon());
        let snapshot = WidgetSnapshot::project(&context, Theme::Ocean, false, "stamp");

        // 600 minutes worked against a 456-minute daily share
        assert_eq!(snapshot.today_worked.as_deref(), Some("10:00"));
        assert_eq!(snapshot.today_remaining.as_deref(), Some("00:00"));
    }

    #[test]
    fn test_snapshot_without_today_fields_still_loads() {
        // Shape written before the today and theme fields existed
        let legacy = r#"{
            "total_effective": "10:00",
            "total_paid": "09:30",
            "remaining": "28:30",
            "progress": 25,
            "is_offline": false,
            "last_sync": "2026-02-19 08:00:00"
        }"#;

        let snapshot: WidgetSnapshot = serde_json::from_str(legacy).unwrap();
        assert_eq!(snapshot.progress, 25);
        assert!(snapshot.theme.is_none());
        assert!(snapshot.today_worked.is_none());
        assert!(snapshot.today_ranges.is_none());
    }

    #[test_context(WidgetTestContext)]
    #[test]
    fn test_load_without_snapshot_is_none(_ctx: &mut WidgetTestContext) {
        assert!(WidgetStore::new().load().is_none());
    }

    #[test_context(WidgetTestContext)]
    #[test]
    fn test_publish_round_trip(_ctx: &mut WidgetTestContext) {
        let store = WidgetStore::new();
        let snapshot = sample_snapshot();

        assert!(store.publish(&snapshot).unwrap());
        assert_eq!(store.load().unwrap(), snapshot);
    }

    #[test_context(WidgetTestContext)]
    #[test]
    fn test_publish_is_change_gated(_ctx: &mut WidgetTestContext) {
        let store = WidgetStore::new();
        let snapshot = sample_snapshot();

        assert!(store.publish(&snapshot).unwrap());
        assert!(!store.publish(&snapshot).unwrap());

        // A moved figure publishes again
        let offline = WidgetSnapshot::project(&sample_context(), Theme::Forest, true, "2026-02-19 11:58:00");
        assert!(store.publish(&offline).unwrap());
    }

    #[test_context(WidgetTestContext)]
    #[test]
    fn test_publish_bumps_refresh_counters_once_per_change(_ctx: &mut WidgetTestContext) {
        let store = WidgetStore::new();
        let snapshot = sample_snapshot();

        store.publish(&snapshot).unwrap();
        assert_eq!(read_counter("weekly"), 1);
        assert_eq!(read_counter("today"), 1);

        // An unchanged publish must not wake the renderer
        store.publish(&snapshot).unwrap();
        assert_eq!(read_counter("weekly"), 1);

        let offline = WidgetSnapshot::project(&sample_context(), Theme::Forest, true, "2026-02-19 11:58:00");
        store.publish(&offline).unwrap();
        assert_eq!(read_counter("weekly"), 2);
        assert_eq!(read_counter("today"), 2);
    }

    #[test_context(WidgetTestContext)]
    #[test]
    fn test_clear_removes_snapshot_and_wakes_widgets(_ctx: &mut WidgetTestContext) {
        let store = WidgetStore::new();
        store.publish(&sample_snapshot()).unwrap();

        store.clear().unwrap();
        assert!(store.load().is_none());
        assert_eq!(read_counter("weekly"), 2);

        // Clearing an already empty store is not an error
        store.clear().unwrap();
    }

    #[test_context(WidgetTestContext)]
    #[test]
    fn test_signal_refresh_targets_one_kind(_ctx: &mut WidgetTestContext) {
        let store = WidgetStore::new();

        store.signal_refresh("weekly").unwrap();
        assert_eq!(read_counter("weekly"), 1);

        let today_marker = DataStorage::new().get_shared_path("today.refresh").unwrap();
        assert!(!today_marker.exists());
    }

    fn read_counter(kind: &str) -> u64 {
        let path = DataStorage::new().get_shared_path(&format!("{}.refresh", kind)).unwrap();
        fs::read_to_string(path).unwrap().trim().parse().unwrap()
    }
}
