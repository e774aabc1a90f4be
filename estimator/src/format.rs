/// `"640 m"` below one kilometre, `"1.5 km"` from there on.
pub fn format_distance(meters: f64) -> String {
    let meters = meters.max(0.0);
    if meters >= 1000.0 {
        format!("{} km", one_decimal(meters / 1000.0))
    } else {
        format!("{} m", meters.round() as u64)
    }
}

/// Nearest tenth of the exact binary value, exact ties rounding up: 1.25
/// gives "1.3" but 1.15 (stored as 1.1499...) gives "1.1".
fn one_decimal(value: f64) -> String {
    // Values >= 1 have at most 52 fractional binary digits, so 60 decimals
    // print them exactly.
    let exact = format!("{value:.60}");
    let tenths = exact.split_once('.').and_then(|(whole, fraction)| {
        let digits = fraction.as_bytes();
        let whole = whole.parse::<u128>().ok()?;
        let round_up = u128::from(digits[1] >= b'5');
        whole
            .checked_mul(10)?
            .checked_add(u128::from(digits[0] - b'0') + round_up)
    });
    match tenths {
        Some(tenths) => format!("{}.{}", tenths / 10, tenths % 10),
        None => format!("{value:.1}"),
    }
}

/// Whole hours and minutes, both floored: `"45min"`, `"1h 1min"`.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    if hours > 0 {
        format!("{hours}h {minutes}min")
    } else {
        format!("{minutes}min")
    }
}
