//! Small pure helpers used by the GUI.

/// `MM:SS`, both fields zero-padded to two digits. Minutes are plain
/// integer truncation with no hour rollover: 3_600_000 ms is `60:00`.
pub(crate) fn fmt_clock(ms: u64) -> String {
    let total_secs = ms / 1000;
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// The transport time label: `"MM:SS / MM:SS"`, with `--:--` standing in
/// until the engine reports a total duration.
pub(crate) fn fmt_time_label(position_ms: u64, duration_ms: Option<u64>) -> String {
    match duration_ms {
        Some(d) => format!("{} / {}", fmt_clock(position_ms), fmt_clock(d)),
        None => format!("{} / --:--", fmt_clock(position_ms)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_zero_pads_both_fields() {
        assert_eq!(fmt_clock(0), "00:00");
        assert_eq!(fmt_clock(65_000), "01:05");
        assert_eq!(fmt_clock(9_000), "00:09");
    }

    #[test]
    fn clock_has_no_hour_rollover() {
        assert_eq!(fmt_clock(3_599_000), "59:59");
        assert_eq!(fmt_clock(3_600_000), "60:00");
    }

    #[test]
    fn clock_truncates_sub_second_remainders() {
        assert_eq!(fmt_clock(65_999), "01:05");
    }

    #[test]
    fn time_label_pairs_position_and_duration() {
        assert_eq!(fmt_time_label(65_000, Some(180_000)), "01:05 / 03:00");
        assert_eq!(fmt_time_label(1_000, None), "00:01 / --:--");
    }
}
