#[cfg(test)]
mod tests {
    use pointage::libs::theme::Theme;

    #[test]
    fn test_all_covers_eight_themes() {
        assert_eq!(Theme::ALL.len(), 8);

        // No duplicate keys in the palette
        let mut keys: Vec<&str> = Theme::ALL.iter().map(|theme| theme.as_str()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 8);
    }

    #[test]
    fn test_parse_round_trips_every_theme() {
        for theme in Theme::ALL {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        assert_eq!(Theme::parse("neon"), None);
        assert_eq!(Theme::parse(""), None);

        // Keys are stored lowercase; parsing is case-sensitive
        assert_eq!(Theme::parse("Ocean"), None);
    }

    #[test]
    fn test_labels_are_display_names() {
        assert_eq!(Theme::Midnight.label(), "Midnight");
        assert_eq!(Theme::Ocean.label(), "Ocean");
        assert_eq!(Theme::Christmas.label(), "Christmas");
    }

    #[test]
    fn test_hex_values_carry_no_hash_prefix() {
        for theme in Theme::ALL {
            for hex in [
                theme.accent_hex(),
                theme.accent_secondary_hex(),
                theme.background_start_hex(),
                theme.background_end_hex(),
            ] {
                assert_eq!(hex.len(), 6);
                assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
            }
        }
    }

    #[test]
    fn test_only_light_is_light() {
        assert!(Theme::Light.is_light());
        for theme in Theme::ALL {
            if theme != Theme::Light {
                assert!(!theme.is_light());
            }
        }
    }

    #[test]
    fn test_serde_uses_lowercase_keys() {
        assert_eq!(serde_json::to_string(&Theme::Ocean).unwrap(), "\"ocean\"");
        assert_eq!(serde_json::from_str::<Theme>("\"sunset\"").unwrap(), Theme::Sunset);
        assert!(serde_json::from_str::<Theme>("\"neon\"").is_err());
    }
}
