// Ordered phrase templates for the natural-language interpreter.
// The first template whose structure matches wins; a matched template whose
// time token fails to parse aborts the whole parse instead of falling
// through to later templates.

use crate::fields::ScheduleFields;
use crate::time::parse_time_token;
use crate::weekday::Weekday;

/// Result of trying one phrase template.
enum Outcome {
    /// Structure did not match; try the next template.
    NoMatch,
    Matched(ScheduleFields),
    /// Structure matched but the time token was invalid. Hard failure.
    Failed,
}

const TEMPLATES: &[fn(&str) -> Outcome] = &[
    every_minute,
    every_hour,
    every_subject_at_time,
    every_weekday_name_at_time,
    every_month_on_day_at_time,
    at_time_on_subject,
];

/// Interpret a natural-language scheduling phrase.
///
/// Recognizes a small fixed set of English patterns: "every minute",
/// "every hour", "every day at 9am", "every monday at 14:30",
/// "every month on 15 at 9am", "at 9am on weekdays". Input is trimmed and
/// lowercased before matching. Returns `None` when no pattern matches or a
/// matched pattern carries an invalid time.
pub fn interpret(input: &str) -> Option<ScheduleFields> {
    let text = input.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }

    for template in TEMPLATES {
        match template(&text) {
            Outcome::Matched(fields) => return Some(fields),
            Outcome::Failed => return None,
            Outcome::NoMatch => {}
        }
    }
    None
}

fn every_minute(text: &str) -> Outcome {
    if text == "every minute" {
        Outcome::Matched(ScheduleFields::every_minute())
    } else {
        Outcome::NoMatch
    }
}

fn every_hour(text: &str) -> Outcome {
    if text == "every hour" {
        Outcome::Matched(ScheduleFields::new("0", "*", "*", "*", "*"))
    } else {
        Outcome::NoMatch
    }
}

/// `every {day|weekday|weekend|<weekday name>} at {time}`
fn every_subject_at_time(text: &str) -> Outcome {
    let Some(rest) = text.strip_prefix("every ") else {
        return Outcome::NoMatch;
    };
    let Some((subject, time)) = rest.split_once(" at ") else {
        return Outcome::NoMatch;
    };
    if subject.is_empty() || subject.contains(' ') {
        return Outcome::NoMatch;
    }

    let day_of_week = match subject {
        "day" => "*".to_string(),
        "weekday" => "1-5".to_string(),
        "weekend" => "6,0".to_string(),
        other => match Weekday::from_name(other) {
            Some(day) => day.number().to_string(),
            None => return Outcome::NoMatch,
        },
    };

    at_time(time, "*", day_of_week)
}

/// `every {sunday|monday|...|saturday} at {time}`
fn every_weekday_name_at_time(text: &str) -> Outcome {
    let Some(rest) = text.strip_prefix("every ") else {
        return Outcome::NoMatch;
    };
    let Some((name, time)) = rest.split_once(" at ") else {
        return Outcome::NoMatch;
    };
    let Some(day) = Weekday::from_name(name) else {
        return Outcome::NoMatch;
    };

    at_time(time, "*", day.number().to_string())
}

/// `every month on {1-2 digit day} at {time}` — the day is substituted
/// verbatim with no range validation.
fn every_month_on_day_at_time(text: &str) -> Outcome {
    let Some(rest) = text.strip_prefix("every month on ") else {
        return Outcome::NoMatch;
    };
    let Some((day, time)) = rest.split_once(" at ") else {
        return Outcome::NoMatch;
    };
    if day.is_empty() || day.len() > 2 || !day.bytes().all(|b| b.is_ascii_digit()) {
        return Outcome::NoMatch;
    }
    // Reparse so "05" emits as "5".
    let Ok(day) = day.parse::<u8>() else {
        return Outcome::NoMatch;
    };

    at_time(time, day.to_string(), "*".to_string())
}

/// `at {time} on {weekdays|weekends|<weekday name>}`
fn at_time_on_subject(text: &str) -> Outcome {
    let Some(rest) = text.strip_prefix("at ") else {
        return Outcome::NoMatch;
    };
    let Some((time, subject)) = rest.split_once(" on ") else {
        return Outcome::NoMatch;
    };

    let day_of_week = match subject {
        "weekdays" => "1-5".to_string(),
        "weekends" => "6,0".to_string(),
        other => match Weekday::from_name(other) {
            Some(day) => day.number().to_string(),
            None => return Outcome::NoMatch,
        },
    };

    at_time(time, "*", day_of_week)
}

/// Shared tail: parse the time token and assemble the fields. Minute and
/// hour are emitted as plain unpadded integers.
fn at_time(time: &str, day_of_month: impl Into<String>, day_of_week: String) -> Outcome {
    match parse_time_token(time) {
        Some(t) => Outcome::Matched(ScheduleFields::new(
            t.minute.to_string(),
            t.hour.to_string(),
            day_of_month,
            "*",
            day_of_week,
        )),
        None => Outcome::Failed,
    }
}
