#[cfg(test)]
mod tests {
    use pointage::libs::timemath::{
        clamp_to_paid_window, duration_minutes, format_minutes, format_signed_minutes, hour_label, parse_minutes, timeline_offset,
        DAY_VIEW_END_MINUTES, DAY_VIEW_START_MINUTES, PAID_WINDOW_END_MINUTES, PAID_WINDOW_START_MINUTES,
    };

    #[test]
    fn test_parse_minutes_valid_times() {
        assert_eq!(parse_minutes("00:00"), 0);
        assert_eq!(parse_minutes("08:30"), 510);
        assert_eq!(parse_minutes("12:00"), 720);
        assert_eq!(parse_minutes("18:30"), 1110);
        assert_eq!(parse_minutes("23:59"), 1439);

        // Unpadded hours are still two integer components
        assert_eq!(parse_minutes("9:05"), 545);
    }

    #[test]
    fn test_parse_minutes_malformed_input_collapses_to_zero() {
        assert_eq!(parse_minutes(""), 0);
        assert_eq!(parse_minutes("--:--"), 0);
        assert_eq!(parse_minutes("soon"), 0);
        assert_eq!(parse_minutes("08"), 0);
        assert_eq!(parse_minutes("08:30:00"), 0);
        assert_eq!(parse_minutes("aa:bb"), 0);
        assert_eq!(parse_minutes(":30"), 0);
    }

    #[test]
    fn test_format_minutes_zero_pads() {
        assert_eq!(format_minutes(0), "00:00");
        assert_eq!(format_minutes(5), "00:05");
        assert_eq!(format_minutes(456), "07:36");
        assert_eq!(format_minutes(510), "08:30");
        assert_eq!(format_minutes(1110), "18:30");
    }

    #[test]
    fn test_format_minutes_clamps_negatives() {
        assert_eq!(format_minutes(-1), "00:00");
        assert_eq!(format_minutes(-356), "00:00");
    }

    #[test]
    fn test_format_minutes_grows_past_24_hours() {
        // Weekly totals exceed a day and must not wrap
        assert_eq!(format_minutes(1530), "25:30");
        assert_eq!(format_minutes(2636), "43:56");
    }

    #[test]
    fn test_format_signed_minutes_keeps_negative_sign() {
        assert_eq!(format_signed_minutes(75), "01:15");
        assert_eq!(format_signed_minutes(0), "00:00");
        assert_eq!(format_signed_minutes(-75), "-01:15");
        assert_eq!(format_signed_minutes(-356), "-05:56");
    }

    #[test]
    fn test_hour_label_compact_style() {
        assert_eq!(hour_label(456), "7h36");
        assert_eq!(hour_label(2280), "38h00");
        assert_eq!(hour_label(61), "1h01");
        assert_eq!(hour_label(0), "0h00");
        assert_eq!(hour_label(-5), "0h00");
    }

    #[test]
    fn test_duration_minutes_floors_inverted_pairs() {
        assert_eq!(duration_minutes(510, 720), 210);
        assert_eq!(duration_minutes(510, 510), 0);

        // Inverted pairs come from portal-side corrections and must not
        // subtract from totals
        assert_eq!(duration_minutes(720, 510), 0);
    }

    #[test]
    fn test_clamp_to_paid_window() {
        assert_eq!(clamp_to_paid_window(400), PAID_WINDOW_START_MINUTES);
        assert_eq!(clamp_to_paid_window(510), 510);
        assert_eq!(clamp_to_paid_window(800), 800);
        assert_eq!(clamp_to_paid_window(1110), 1110);
        assert_eq!(clamp_to_paid_window(1200), PAID_WINDOW_END_MINUTES);
    }

    #[test]
    fn test_window_constants() {
        assert_eq!(DAY_VIEW_START_MINUTES, 480);
        assert_eq!(DAY_VIEW_END_MINUTES, 1140);
        assert_eq!(PAID_WINDOW_START_MINUTES, 510);
        assert_eq!(PAID_WINDOW_END_MINUTES, 1110);

        // The paid window sits inside the rendered day view
        assert!(DAY_VIEW_START_MINUTES < PAID_WINDOW_START_MINUTES);
        assert!(PAID_WINDOW_END_MINUTES < DAY_VIEW_END_MINUTES);
    }

    #[test]
    fn test_timeline_offset_pins_to_track() {
        assert_eq!(timeline_offset(DAY_VIEW_START_MINUTES), 0.0);
        assert_eq!(timeline_offset(DAY_VIEW_END_MINUTES), 1.0);

        // Before 08:00 and after 19:00 pin to the track edges
        assert_eq!(timeline_offset(0), 0.0);
        assert_eq!(timeline_offset(420), 0.0);
        assert_eq!(timeline_offset(1439), 1.0);
    }

    #[test]
    fn test_timeline_offset_is_linear_inside_window() {
        // 13:30 is the midpoint of the 08:00-19:00 track
        assert!((timeline_offset(810) - 0.5).abs() < f64::EPSILON);

        // 10:45 sits a quarter of the way in
        assert!((timeline_offset(645) - 0.25).abs() < f64::EPSILON);
    }
}
