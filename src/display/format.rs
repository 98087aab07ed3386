//! Formatting helpers shared by the terminal views

use std::fmt::Write;

use chrono::NaiveDate;

use crate::config::Settings;
use crate::models::Money;
use crate::storage::Collection;

/// Format an amount with the configured currency symbol
pub fn money(amount: Money, settings: &Settings) -> String {
    amount.format_with_symbol(&settings.currency_symbol)
}

/// Format an amount with an explicit sign: "+$10.00" / "-$10.00"
pub fn signed_money(amount: Money, settings: &Settings) -> String {
    if amount.is_negative() {
        money(amount, settings)
    } else {
        format!("+{}", money(amount, settings))
    }
}

/// Format a date with the configured strftime pattern, falling back to
/// ISO 8601 when the pattern cannot be rendered
pub fn date(date: NaiveDate, settings: &Settings) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(&settings.date_format)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// "+12.5% from last month"
pub fn format_trend(percent_change: f64) -> String {
    let sign = if percent_change >= 0.0 { "+" } else { "" };
    format!("{}{:.1}% from last month", sign, percent_change)
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// One warning line per collection that failed to load
pub fn degraded_notice(degraded: &[Collection]) -> String {
    let mut output: String = degraded
        .iter()
        .map(|c| format!("! Could not load {}; showing them as empty\n", c))
        .collect();
    if !output.is_empty() {
        output.push('\n');
    }
    output
}

/// Format a section title with an underline
pub fn heading(title: &str) -> String {
    format!("{}\n{}\n", title, "═".repeat(title.chars().count()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
    }

    #[test]
    fn test_format_trend() {
        assert_eq!(format_trend(12.5), "+12.5% from last month");
        assert_eq!(format_trend(-3.24), "-3.2% from last month");
        assert_eq!(format_trend(0.0), "+0.0% from last month");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(150.0, 100.0, 4), "████");
        assert_eq!(format_bar(0.0, 100.0, 3), "░░░");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Café au lait", 6), "Caf...");
    }

    #[test]
    fn test_money_uses_settings_symbol() {
        let settings = Settings {
            currency_symbol: "€".into(),
            ..Settings::default()
        };
        assert_eq!(money(Money::from_cents(1050), &settings), "€10.50");
        assert_eq!(signed_money(Money::from_cents(1050), &settings), "+€10.50");
        assert_eq!(signed_money(Money::from_cents(-1050), &settings), "-€10.50");
    }

    #[test]
    fn test_degraded_notice() {
        assert_eq!(degraded_notice(&[]), "");
        assert_eq!(
            degraded_notice(&[Collection::Budgets]),
            "! Could not load budgets; showing them as empty\n\n"
        );
    }

    #[test]
    fn test_date_uses_settings_format() {
        let settings = Settings {
            date_format: "%d/%m/%Y".into(),
            ..Settings::default()
        };
        let d = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(date(d, &settings), "09/03/2025");
    }

    #[test]
    fn test_date_with_unrenderable_format_falls_back_to_iso() {
        let settings = Settings {
            date_format: "%Q".into(),
            ..Settings::default()
        };
        let d = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        assert_eq!(date(d, &settings), "2025-01-02");
    }
}
