use crate::weekday::Weekday;

/// Describe a 5-field cron expression in plain English (best effort).
///
/// Shape rules are tried in priority order and the first match wins.
/// Expressions that match no rule fall back to `Cron: <expression>`;
/// anything that does not split into five fields is "Invalid cron".
/// Always returns a sentence, never an error.
pub fn explain(expr: &str) -> String {
    let fields: Vec<&str> = expr.split_whitespace().collect();
    if fields.len() != 5 {
        return "Invalid cron".to_string();
    }
    let (minute, hour, dom, month, dow) = (fields[0], fields[1], fields[2], fields[3], fields[4]);

    if minute == "*" && hour == "*" && dom == "*" && month == "*" && dow == "*" {
        return "Every minute".to_string();
    }
    if minute == "0" && hour == "*" && dom == "*" && month == "*" && dow == "*" {
        return "Hourly at minute 0".to_string();
    }
    if is_number(minute) && hour == "*" && dom == "*" && month == "*" && dow == "*" {
        return format!("Every hour at minute {minute}");
    }
    if is_number(minute) && is_number(hour) && dom == "*" && month == "*" && dow == "*" {
        return format!("Every day at {}:{}", pad(hour), pad(minute));
    }
    // Month is deliberately left unconstrained here.
    if is_number(minute) && is_number(hour) && dow != "*" && dom == "*" {
        return format!(
            "Every {} at {}:{}",
            weekday_display(dow),
            pad(hour),
            pad(minute)
        );
    }

    format!("Cron: {expr}")
}

fn is_number(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit())
}

/// Zero-pad a field to two digits. Longer fields pass through unchanged.
fn pad(field: &str) -> String {
    format!("{field:0>2}")
}

/// Resolve a day-of-week token to a display name: numeric code first, then
/// name prefix, else echo the token (ranges and lists land here).
fn weekday_display(field: &str) -> String {
    if let Ok(n) = field.parse::<u8>() {
        if let Some(day) = Weekday::from_number(n) {
            return day.name().to_string();
        }
    }
    match Weekday::from_token(field) {
        Some(day) => day.name().to_string(),
        None => field.to_string(),
    }
}
