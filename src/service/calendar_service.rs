use chrono::{Datelike, Duration, NaiveDate};

/// Builds the textual date reference handed to the model: the current date
/// followed by every day of the previous, current, and next week. Weeks
/// start on Monday.
pub fn calendar_context(today: NaiveDate) -> String {
    let current_week_start =
        today - Duration::days(today.weekday().num_days_from_monday() as i64);
    let prev_week_start = current_week_start - Duration::days(7);
    let next_week_start = current_week_start + Duration::days(7);

    let mut text = format!("Current date: {}\n\n", today.format("%A, %B %d, %Y"));

    text.push_str("Previous week:\n");
    push_week(&mut text, prev_week_start);

    text.push_str("\nCurrent week:\n");
    push_week(&mut text, current_week_start);

    text.push_str("\nNext week:\n");
    push_week(&mut text, next_week_start);

    text
}

fn push_week(text: &mut String, week_start: NaiveDate) {
    for i in 0..7 {
        let day = week_start + Duration::days(i);
        text.push_str(&format!(
            "  {}: {}\n",
            day.format("%A"),
            day.format("%B %d, %Y")
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weeks_are_anchored_to_monday() {
        // A Wednesday; current week runs Jan 12 through Jan 18.
        let today = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
        let context = calendar_context(today);

        assert!(context.starts_with("Current date: Wednesday, January 14, 2026\n"));
        assert!(context.contains("Current week:\n  Monday: January 12, 2026"));
        assert!(context.contains("Previous week:\n  Monday: January 05, 2026"));
        assert!(context.contains("Next week:\n  Monday: January 19, 2026"));
    }

    #[test]
    fn context_lists_twenty_one_days() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
        let context = calendar_context(today);

        let day_lines: Vec<&str> = context
            .lines()
            .filter(|line| line.starts_with("  "))
            .collect();
        assert_eq!(day_lines.len(), 21);
        assert_eq!(day_lines[0], "  Monday: January 05, 2026");
        assert_eq!(day_lines[20], "  Sunday: January 25, 2026");
    }

    #[test]
    fn weeks_span_month_boundaries() {
        // Sunday, so the current week started back in January.
        let today = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let context = calendar_context(today);
        assert!(context.contains("Current week:\n  Monday: January 26, 2026"));
        assert!(context.contains("  Sunday: February 01, 2026"));
        assert!(context.contains("Next week:\n  Monday: February 02, 2026"));
    }

    #[test]
    fn monday_is_its_own_week_start() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
        let context = calendar_context(today);
        assert!(context.contains("Current week:\n  Monday: January 12, 2026"));
    }
}
