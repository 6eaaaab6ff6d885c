/// Clock time extracted from a free-text token like "9am" or "14:30".
///
/// Values are plain integers with no range checking: the interpreter emits
/// them into cron fields verbatim, so "25:70" passes through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
}

/// Parse a clock-time token: "9am", "12:30pm", "14:30", "9".
///
/// Meridiem suffixes are case-insensitive and normalize to 24-hour time
/// (12am -> 0, 12pm -> 12). The minute part is optional and defaults to 0.
/// Returns `None` when any numeric part fails to parse, or when the pm
/// shift would overflow the hour.
pub fn parse_time_token(token: &str) -> Option<TimeOfDay> {
    let token = token.trim().to_lowercase();

    if let Some(rest) = token.strip_suffix("am") {
        return parse_meridiem(rest, false);
    }
    if let Some(rest) = token.strip_suffix("pm") {
        return parse_meridiem(rest, true);
    }

    if let Some((hh, mm)) = token.split_once(':') {
        let hour: u32 = hh.trim().parse().ok()?;
        let minute: u32 = mm.trim().parse().ok()?;
        return Some(TimeOfDay { hour, minute });
    }

    let hour: u32 = token.parse().ok()?;
    Some(TimeOfDay { hour, minute: 0 })
}

fn parse_meridiem(rest: &str, pm: bool) -> Option<TimeOfDay> {
    let rest = rest.trim();
    let (hh, mm) = match rest.split_once(':') {
        Some((hh, mm)) => (hh.trim(), mm.trim()),
        None => (rest, ""),
    };

    // An absent hour part reads as 0, so a bare "pm" means 12:00.
    let mut hour: u32 = if hh.is_empty() { 0 } else { hh.parse().ok()? };
    let minute: u32 = if mm.is_empty() { 0 } else { mm.parse().ok()? };

    if pm && hour != 12 {
        hour = hour.checked_add(12)?;
    }
    if !pm && hour == 12 {
        hour = 0;
    }
    Some(TimeOfDay { hour, minute })
}
