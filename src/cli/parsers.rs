// src/cli/parsers.rs

/// `0.0..=1.0` の確率値
pub fn parse_ratio(s: &str) -> Result<f64, String> {
    let value: f64 = s.trim().parse().map_err(|_| format!("not a number: {s}"))?;
    if !(0.0..=1.0).contains(&value) {
        return Err(format!("{value} is outside 0..=1"));
    }
    Ok(value)
}
