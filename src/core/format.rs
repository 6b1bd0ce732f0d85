/// Half-up rounding to the nearest integer.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Rounds and groups digits with `.` every three places. No decimals, no symbol.
pub fn format_currency(amount: f64) -> String {
    let rounded = round_half_up(amount);
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_duration(hours: f64) -> String {
    if hours <= 0.0 {
        return "0 min".to_string();
    }
    if hours < 1.0 {
        return format!("{} min", round_half_up(hours * 60.0));
    }

    let whole = hours.floor();
    let minutes = round_half_up((hours - whole) * 60.0);
    let whole = whole as i64;
    let unit = if whole == 1 { "hora" } else { "horas" };

    if minutes == 0 {
        format!("{} {}", whole, unit)
    } else {
        format!("{} {} {} min", whole, unit, minutes)
    }
}
