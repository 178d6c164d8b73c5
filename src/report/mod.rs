pub mod analysis;
pub mod json;
pub mod outputs;
pub mod prediction;
pub mod risk;
pub mod text;

/// Placeholder for a value the service did not report.
pub const NOT_AVAILABLE: &str = "N/A";

/// Rounds half away from zero at `decimals` places.
///
/// `format!("{:.1}", 87.25)` yields `87.2` (ties to even on the exact binary
/// value); displayed figures must read `87.3`.
pub fn round_half_up(v: f64, decimals: u32) -> f64 {
    if !v.is_finite() {
        return v;
    }
    let scale = 10f64.powi(decimals as i32);
    let scaled = v * scale;
    if !scaled.is_finite() {
        return v;
    }
    let rounded = scaled.round() / scale;
    if rounded == 0.0 { 0.0 } else { rounded }
}

pub fn format_fixed(v: f64, decimals: u32) -> String {
    format!("{:.*}", decimals as usize, round_half_up(v, decimals))
}

pub fn format_f64_4(v: f64) -> String {
    format_fixed(v, 4)
}

pub fn format_optional_4(v: Option<f64>) -> String {
    match v {
        Some(v) => format_f64_4(v),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Formats a 0..1 fraction as a one-decimal percentage; no clamping.
pub fn format_percent(fraction: f64) -> String {
    format!("{}%", format_fixed(fraction * 100.0, 1))
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
