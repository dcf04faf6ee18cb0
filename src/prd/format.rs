//! @acp:module "PRD Formatting"
//! @acp:summary "Display helpers turning record values into Markdown text"
//! @acp:domain prd
//! @acp:layer utility

use serde_json::Value;

/// Render any record value as display text.
///
/// Strings are used as-is, numbers keep their written form, lists are joined
/// with `", "` and mappings fall back to compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => join_items(items, ", "),
        Value::Object(_) => value.to_string(),
    }
}

/// @acp:summary "Format target users for display"
///
/// A list of segments becomes `"Admins, End users"`; anything else is shown
/// as its display text.
pub fn format_target_users(users: &Value) -> String {
    match users {
        Value::Array(items) => join_items(items, ", "),
        other => display_value(other),
    }
}

/// @acp:summary "Format list items as markdown bullets"
pub fn format_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Bullet list for a record value. A scalar renders as a single bullet.
pub fn format_value_list(value: &Value) -> String {
    match value {
        Value::Array(items) => format_list(items.iter().map(display_value)),
        Value::Null => String::new(),
        other => format_list([display_value(other)]),
    }
}

/// Count with thousands separators (`10000` -> `10,000`).
pub fn format_count(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let text = if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value.abs() as u64)
    } else {
        format!("{}", value.abs())
    };

    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(text.len() + text.len() / 3 + 1);
    if value < 0.0 {
        grouped.push('-');
    }
    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

/// Fraction rendered as a percentage (`0.2`, 1 decimal -> `20.0%`).
pub fn format_percent(fraction: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, fraction * 100.0)
}

fn join_items(items: &[Value], separator: &str) -> String {
    items
        .iter()
        .map(display_value)
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_target_users_list() {
        assert_eq!(
            format_target_users(&json!(["Admins", "End users"])),
            "Admins, End users"
        );
    }

    #[test]
    fn test_format_target_users_scalar() {
        assert_eq!(format_target_users(&json!("Admins")), "Admins");
        assert_eq!(format_target_users(&json!(42)), "42");
    }

    #[test]
    fn test_format_list() {
        assert_eq!(format_list(["a", "b"]), "- a\n- b");
        assert_eq!(format_list(Vec::<String>::new()), "");
    }

    #[test]
    fn test_format_value_list_scalar_is_single_bullet() {
        assert_eq!(format_value_list(&json!("Latency")), "- Latency");
        assert_eq!(format_value_list(&json!(["x", 2])), "- x\n- 2");
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!(5)), "5");
        assert_eq!(display_value(&json!(2.5)), "2.5");
        assert_eq!(display_value(&json!(true)), "true");
        assert_eq!(display_value(&json!({"a": 1})), r#"{"a":1}"#);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(10000.0), "10,000");
        assert_eq!(format_count(999.0), "999");
        assert_eq!(format_count(1234567.0), "1,234,567");
        assert_eq!(format_count(1500.5), "1,500.5");
        assert_eq!(format_count(-2500.0), "-2,500");
        assert_eq!(format_count(0.0), "0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.2, 1), "20.0%");
        assert_eq!(format_percent(0.8, 0), "80%");
        assert_eq!(format_percent(1.5, 1), "150.0%");
    }
}
