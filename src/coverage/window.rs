use crate::model::ShiftType;
use crate::time::{TimeOfDay, SECONDS_PER_DAY};

/// Intervalle `[start, end)` sur le cadran 24 h, avec passage de minuit
/// quand `end <= start`.
pub(super) fn window_contains(start: TimeOfDay, end: TimeOfDay, instant: TimeOfDay) -> bool {
    let start = start.seconds();
    let mut end = end.seconds();
    let mut t = instant.seconds();

    if end <= start {
        end += SECONDS_PER_DAY;
        if t < start {
            t += SECONDS_PER_DAY;
        }
    }

    start <= t && t < end
}

impl ShiftType {
    /// L'instant tombe-t-il dans la fenêtre de ce shift ?
    pub fn covers(&self, instant: TimeOfDay) -> bool {
        window_contains(self.start_of_day, self.end_of_day, instant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(raw: &str) -> TimeOfDay {
        raw.parse().unwrap()
    }

    #[test]
    fn day_window_is_half_open() {
        let (start, end) = (t("09:00:00"), t("17:00:00"));
        assert!(!window_contains(start, end, t("08:59:59")));
        assert!(window_contains(start, end, t("09:00:00")));
        assert!(window_contains(start, end, t("16:59:59")));
        assert!(!window_contains(start, end, t("17:00:00")));
    }

    #[test]
    fn night_window_ending_at_midnight() {
        let (start, end) = (t("20:00:00"), t("00:00:00"));
        assert!(window_contains(start, end, t("20:00:00")));
        assert!(window_contains(start, end, t("23:59:59")));
        assert!(!window_contains(start, end, t("00:00:00")));
        assert!(!window_contains(start, end, t("08:00:00")));
        assert!(!window_contains(start, end, t("19:59:59")));
    }

    #[test]
    fn night_window_past_midnight() {
        let (start, end) = (t("22:00:00"), t("06:00:00"));
        assert!(window_contains(start, end, t("23:00:00")));
        assert!(window_contains(start, end, t("00:00:00")));
        assert!(window_contains(start, end, t("05:59:59")));
        assert!(!window_contains(start, end, t("06:00:00")));
        assert!(!window_contains(start, end, t("12:00:00")));
    }

    #[test]
    fn equal_bounds_cover_the_whole_day() {
        let at = t("07:30:00");
        for probe in ["00:00:00", "07:29:59", "07:30:00", "12:00:00", "23:59:59"] {
            assert!(window_contains(at, at, t(probe)), "{probe} should be covered");
        }
    }
}
