#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use pointage::libs::payload::WeekPayload;
    use pointage::libs::store::{last_sync_label, Profile, Store, DEFAULT_OBJECTIVE_MINUTES};
    use pointage::libs::theme::Theme;
    use std::collections::HashMap;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StoreTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());

            StoreTestContext { _temp_dir: temp_dir }
        }
    }

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day).unwrap().and_hms_opt(hour, minute, second).unwrap()
    }

    fn sample_weeks() -> HashMap<String, WeekPayload> {
        HashMap::from([(
            "2026-w-08".to_string(),
            WeekPayload {
                days: HashMap::new(),
                total_effective: "20:00".to_string(),
                total_paid: "19:30".to_string(),
            },
        )])
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_profile_defaults(_ctx: &mut StoreTestContext) {
        let store = Store::new("mgillet");
        let profile = store.load_profile();

        assert_eq!(profile.theme, "ocean");
        assert_eq!(profile.minutes_objective, DEFAULT_OBJECTIVE_MINUTES);
        assert_eq!(profile.theme_or_default(), Theme::Ocean);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_profile_save_and_reload(_ctx: &mut StoreTestContext) {
        let store = Store::new("mgillet");
        let profile = Profile {
            theme: "sunset".to_string(),
            minutes_objective: 2400,
        };

        store.save_profile(&profile).unwrap();
        let reloaded = store.load_profile();

        assert_eq!(reloaded, profile);
        assert_eq!(reloaded.theme_or_default(), Theme::Sunset);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_unknown_theme_key_degrades_at_use_time(_ctx: &mut StoreTestContext) {
        let profile = Profile {
            theme: "neon".to_string(),
            minutes_objective: 2280,
        };

        assert_eq!(profile.theme_or_default(), Theme::Ocean);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_weeks_cache_round_trip(_ctx: &mut StoreTestContext) {
        let store = Store::new("mgillet");
        assert!(store.load_weeks().is_none());

        let saved = store.save_weeks(sample_weeks(), false, at(2026, 2, 19, 12, 0, 0)).unwrap();
        assert_eq!(saved.fetched_at, "2026-02-19 12:00:00");

        let cache = store.load_weeks().unwrap();
        assert_eq!(cache.fetched_at, "2026-02-19 12:00:00");
        assert!(!cache.stale);
        assert_eq!(cache.weeks["2026-w-08"].total_paid, "19:30");

        // Caches are scoped per login
        assert!(Store::new("someone_else").load_weeks().is_none());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_weeks_cache_keeps_stale_flag(_ctx: &mut StoreTestContext) {
        let store = Store::new("mgillet");
        store.save_weeks(sample_weeks(), true, at(2026, 2, 19, 12, 0, 0)).unwrap();

        assert!(store.load_weeks().unwrap().stale);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_clear_weeks(_ctx: &mut StoreTestContext) {
        let store = Store::new("mgillet");
        store.save_weeks(sample_weeks(), false, at(2026, 2, 19, 12, 0, 0)).unwrap();

        store.clear_weeks().unwrap();
        assert!(store.load_weeks().is_none());

        // Clearing an already empty cache is not an error
        store.clear_weeks().unwrap();
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_apply_server_preferences_takes_usable_values(_ctx: &mut StoreTestContext) {
        let store = Store::new("mgillet");

        let profile = store.apply_server_preferences(Some("forest"), Some(2400)).unwrap();
        assert_eq!(profile.theme, "forest");
        assert_eq!(profile.minutes_objective, 2400);

        // The merge is persisted for the next run
        let reloaded = store.load_profile();
        assert_eq!(reloaded.theme, "forest");
        assert_eq!(reloaded.minutes_objective, 2400);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_apply_server_preferences_ignores_unusable_values(_ctx: &mut StoreTestContext) {
        let store = Store::new("mgillet");
        store
            .save_profile(&Profile {
                theme: "sunset".to_string(),
                minutes_objective: 2400,
            })
            .unwrap();

        // An unknown theme and a non-positive objective both lose
        let profile = store.apply_server_preferences(Some("bogus"), Some(0)).unwrap();
        assert_eq!(profile.theme, "sunset");
        assert_eq!(profile.minutes_objective, 2400);

        let profile = store.apply_server_preferences(None, Some(-10)).unwrap();
        assert_eq!(profile.minutes_objective, 2400);
    }

    #[test]
    fn test_last_sync_label_never_synced() {
        let now = at(2026, 2, 19, 12, 0, 0);

        assert_eq!(last_sync_label(None, now), "Jamais synchronisé");
        assert_eq!(last_sync_label(Some("not a stamp"), now), "Jamais synchronisé");
    }

    #[test]
    fn test_last_sync_label_ladder() {
        let now = at(2026, 2, 19, 12, 0, 0);

        assert_eq!(last_sync_label(Some("2026-02-19 11:59:30"), now), "Mis à jour à l'instant");
        assert_eq!(last_sync_label(Some("2026-02-19 11:45:00"), now), "Mis à jour il y a 15 min");
        assert_eq!(last_sync_label(Some("2026-02-19 09:00:00"), now), "Mis à jour il y a 3 h");
        assert_eq!(last_sync_label(Some("2026-02-18 09:00:00"), now), "Mis à jour 18/02 09:00");
    }

    #[test]
    fn test_last_sync_label_future_stamp_reads_as_just_now() {
        let now = at(2026, 2, 19, 12, 0, 0);

        // Clock skew between runs must not produce negative ages
        assert_eq!(last_sync_label(Some("2026-02-19 12:05:00"), now), "Mis à jour à l'instant");
    }
}
