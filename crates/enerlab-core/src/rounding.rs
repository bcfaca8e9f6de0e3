/// Round to `decimals` places, half away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Pass a value through its fixed-decimal display form and back.
///
/// Some downstream formulas consume the figure a reader sees on the page
/// rather than the full-precision float, so the format-then-reparse step is
/// part of the calculation, not a presentation detail.
pub fn through_display(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}
