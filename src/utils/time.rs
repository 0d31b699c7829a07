use chrono::{Duration, NaiveDate, Utc};

/// Inclusive date range for the rewards query, formatted `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardsWindow {
    pub from: String,
    pub to: String,
}

/// The seven-day rewards window ending yesterday (UTC). The API settles
/// rewards with a one-day lag, so today is never included.
pub fn rewards_window() -> RewardsWindow {
    rewards_window_for(Utc::now().date_naive())
}

/// Window anchored to an explicit "today", for deterministic callers.
pub fn rewards_window_for(today: NaiveDate) -> RewardsWindow {
    let to = today - Duration::days(1);
    let from = to - Duration::days(6);
    RewardsWindow {
        from: from.format("%Y-%m-%d").to_string(),
        to: to.format("%Y-%m-%d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_ends_yesterday_and_spans_seven_days() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let window = rewards_window_for(today);
        assert_eq!(window.to, "2024-03-09");
        assert_eq!(window.from, "2024-03-03");
    }

    #[test]
    fn test_window_crosses_month_boundary() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let window = rewards_window_for(today);
        assert_eq!(window.to, "2024-02-29");
        assert_eq!(window.from, "2024-02-23");
    }
}
