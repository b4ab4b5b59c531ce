//! Seven-day window used to pick the day a board is shown for.
//!
//! This is pure date arithmetic and shares no state with the board.

use chrono::{Datelike, Days, NaiveDate, Weekday};

const DAYS_PER_WEEK: u64 = 7;
const WEEK_LEN: usize = 7;

/// Seven consecutive days beginning on a configured weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekWindow {
    start: NaiveDate,
}

impl WeekWindow {
    /// Returns the window that contains `date`, with weeks starting on
    /// `starts_on`.
    #[must_use]
    pub fn containing(date: NaiveDate, starts_on: Weekday) -> Self {
        let start = (0..DAYS_PER_WEEK)
            .filter_map(|back| date.checked_sub_days(Days::new(back)))
            .find(|day| day.weekday() == starts_on)
            .unwrap_or(date);
        Self { start }
    }

    /// Returns the first day of the window.
    #[must_use]
    pub const fn start(self) -> NaiveDate {
        self.start
    }

    /// Returns the seven days of the window in order.
    #[must_use]
    pub fn days(self) -> Vec<NaiveDate> {
        self.start
            .iter_days()
            .take(WEEK_LEN)
            .collect()
    }

    /// Returns `true` when `date` falls inside the window.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        self.start <= date
            && self
                .start
                .checked_add_days(Days::new(DAYS_PER_WEEK))
                .is_none_or(|end| date < end)
    }

    /// Returns the following window, or `None` past the end of the calendar.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.start
            .checked_add_days(Days::new(DAYS_PER_WEEK))
            .map(|start| Self { start })
    }

    /// Returns the preceding window, or `None` before the start of the
    /// calendar.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        self.start
            .checked_sub_days(Days::new(DAYS_PER_WEEK))
            .map(|start| Self { start })
    }

    /// Returns the day to select when the window is shown: `today` if it is
    /// inside the window, otherwise the first day.
    #[must_use]
    pub fn default_selection(self, today: NaiveDate) -> NaiveDate {
        if self.contains(today) {
            today
        } else {
            self.start
        }
    }
}

/// Formats a day the way the board header shows it, e.g. `Monday, Jan 5`.
#[must_use]
pub fn day_label(day: NaiveDate) -> String {
    day.format("%A, %b %-d").to_string()
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
mod tests {
    use super::{WeekWindow, day_label};
    use chrono::{NaiveDate, Weekday};
    use rstest::rstest;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
    }

    #[rstest]
    #[case(date(2026, 10, 16), Weekday::Mon, date(2026, 10, 12))]
    #[case(date(2026, 10, 12), Weekday::Mon, date(2026, 10, 12))]
    #[case(date(2026, 10, 18), Weekday::Mon, date(2026, 10, 12))]
    #[case(date(2026, 10, 16), Weekday::Sun, date(2026, 10, 11))]
    fn window_starts_on_configured_weekday(
        #[case] day: NaiveDate,
        #[case] starts_on: Weekday,
        #[case] expected_start: NaiveDate,
    ) {
        assert_eq!(WeekWindow::containing(day, starts_on).start(), expected_start);
    }

    #[test]
    fn window_lists_seven_consecutive_days() {
        let window = WeekWindow::containing(date(2026, 12, 30), Weekday::Mon);
        let days = window.days();
        assert_eq!(days.len(), 7);
        assert_eq!(days.first(), Some(&date(2026, 12, 28)));
        assert_eq!(days.last(), Some(&date(2027, 1, 3)));
    }

    #[test]
    fn navigation_shifts_by_one_week() {
        let window = WeekWindow::containing(date(2026, 10, 16), Weekday::Mon);
        let next = window.next().expect("next week exists");
        let back = next.previous().expect("previous week exists");
        assert_eq!(next.start(), date(2026, 10, 19));
        assert_eq!(back, window);
    }

    #[test]
    fn selection_prefers_today_inside_window() {
        let window = WeekWindow::containing(date(2026, 10, 16), Weekday::Mon);
        assert_eq!(window.default_selection(date(2026, 10, 16)), date(2026, 10, 16));
    }

    #[test]
    fn selection_falls_back_to_first_day_outside_window() {
        let window = WeekWindow::containing(date(2026, 10, 16), Weekday::Mon)
            .next()
            .expect("next week exists");
        assert_eq!(window.default_selection(date(2026, 10, 16)), date(2026, 10, 19));
    }

    #[rstest]
    #[case(date(2026, 10, 11), false)]
    #[case(date(2026, 10, 12), true)]
    #[case(date(2026, 10, 18), true)]
    #[case(date(2026, 10, 19), false)]
    fn containment_covers_exactly_seven_days(#[case] day: NaiveDate, #[case] inside: bool) {
        let window = WeekWindow::containing(date(2026, 10, 16), Weekday::Mon);
        assert_eq!(window.contains(day), inside);
    }

    #[test]
    fn last_window_of_the_calendar_contains_its_days() {
        let window = WeekWindow::containing(NaiveDate::MAX, Weekday::Mon);
        assert!(window.contains(NaiveDate::MAX));
        assert!(window.contains(window.start()));
        assert_eq!(window.next(), None);
    }

    #[test]
    fn label_uses_weekday_month_and_day() {
        assert_eq!(day_label(date(2026, 1, 5)), "Monday, Jan 5");
    }
}
