#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use pointage::libs::blocks::{blocks, clamped_total_minutes, TimeBlock};

    fn punches(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_even_punches_pair_into_blocks() {
        let day = blocks(&punches(&["08:30", "12:00", "13:00", "17:30"]), at(18, 0));

        assert_eq!(day.len(), 2);
        assert_eq!(
            day[0],
            TimeBlock {
                start: "08:30".to_string(),
                end: "12:00".to_string(),
                duration_minutes: 210,
            }
        );
        assert_eq!(
            day[1],
            TimeBlock {
                start: "13:00".to_string(),
                end: "17:30".to_string(),
                duration_minutes: 270,
            }
        );
        assert_eq!(day.iter().map(|block| block.duration_minutes).sum::<i64>(), 480);
    }

    #[test]
    fn test_odd_trailing_punch_closes_at_now() {
        let day = blocks(&punches(&["08:30", "10:41", "10:49"]), at(12, 0));

        assert_eq!(day.len(), 2);
        assert_eq!(day[0].duration_minutes, 131);
        assert_eq!(day[1].start, "10:49");
        assert_eq!(day[1].end, "12:00");
        assert_eq!(day[1].duration_minutes, 71);
    }

    #[test]
    fn test_single_punch_opens_live_block() {
        let day = blocks(&punches(&["09:00"]), at(9, 45));

        assert_eq!(day.len(), 1);
        assert_eq!(day[0].start, "09:00");
        assert_eq!(day[0].end, "09:45");
        assert_eq!(day[0].duration_minutes, 45);
    }

    #[test]
    fn test_empty_punch_list() {
        assert!(blocks(&[], at(12, 0)).is_empty());
        assert_eq!(clamped_total_minutes(&[], at(12, 0)), 0);
    }

    #[test]
    fn test_malformed_punch_stays_visible_with_zero_duration() {
        let day = blocks(&punches(&["12:00", "--:--"]), at(18, 0));

        assert_eq!(day.len(), 1);
        assert_eq!(day[0].start, "12:00");
        assert_eq!(day[0].end, "--:--");
        assert_eq!(day[0].duration_minutes, 0);
    }

    #[test]
    fn test_inverted_pair_floors_at_zero() {
        let day = blocks(&punches(&["17:00", "09:00"]), at(18, 0));

        assert_eq!(day.len(), 1);
        assert_eq!(day[0].duration_minutes, 0);
    }

    #[test]
    fn test_clamped_total_trims_to_paid_window() {
        // Badge-in at 07:00 and badge-out at 20:00 only pay 08:30-18:30
        assert_eq!(clamped_total_minutes(&punches(&["07:00", "20:00"]), at(21, 0)), 600);

        // An early badge-in counts from the window start
        assert_eq!(clamped_total_minutes(&punches(&["07:12", "09:00"]), at(12, 0)), 30);
    }

    #[test]
    fn test_clamped_total_matches_raw_total_inside_window() {
        let hours = punches(&["08:30", "12:00", "13:00", "17:30"]);
        assert_eq!(clamped_total_minutes(&hours, at(18, 0)), 480);
    }

    #[test]
    fn test_clamped_total_closes_odd_punch_at_now() {
        // Open block from 18:00, observed at 19:00: only 18:00-18:30 pays
        assert_eq!(clamped_total_minutes(&punches(&["18:00"]), at(19, 0)), 30);
    }

    #[test]
    fn test_clamped_total_zero_for_pair_outside_window() {
        // Both punches after the window clamp to its end and cancel out
        assert_eq!(clamped_total_minutes(&punches(&["19:00", "20:00"]), at(21, 0)), 0);
    }
}
