//! Axis ceiling helpers shared by the chart transforms.

/// Most segments a tick list is split into; larger ranges widen the step.
pub const MAX_TICK_SEGMENTS: f64 = 20.0;

/// Ceiling of `value` after snapping float noise to six decimals.
///
/// `38000.0 * 1.1` evaluates to `41800.000000000004`; a plain `ceil` would
/// push the axis to 41801.
pub fn snapped_ceil(value: f64) -> f64 {
    let scaled = value * 1e6;
    if !scaled.is_finite() {
        return value.ceil();
    }
    (scaled.round() / 1e6).ceil()
}

/// Evenly spaced ticks `0, step, 2*step, ..` up to and including `max`.
///
/// When that would exceed [`MAX_TICK_SEGMENTS`] segments the step is widened
/// to the smallest multiple of `step` that fits, so the list stays short for
/// any finite `max`.
pub fn ticks(max: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || max < 0.0 || !max.is_finite() || !step.is_finite() {
        return vec![0.0];
    }
    let segments = max / step;
    let step = if segments > MAX_TICK_SEGMENTS {
        step * (segments / MAX_TICK_SEGMENTS).ceil()
    } else {
        step
    };
    let count = (max / step).floor().min(MAX_TICK_SEGMENTS) as usize;
    (0..=count).map(|i| i as f64 * step).collect()
}

/// `segments + 1` evenly spaced ticks from 0 to `max`.
pub fn divisions(max: f64, segments: usize) -> Vec<f64> {
    if !max.is_finite() {
        return vec![0.0];
    }
    if segments == 0 {
        return vec![0.0, max];
    }
    let width = max / segments as f64;
    (0..=segments)
        .map(|i| if i == segments { max } else { width * i as f64 })
        .collect()
}
