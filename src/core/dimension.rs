use crate::error::{PlotError, PlotResult};

/// Axis abstraction mapping a data domain to a pixel range and producing
/// formatted tick labels.
///
/// The plot owns one dimension per axis and pushes resolved domains and
/// pixel ranges into it; geometry builders only consume `to_pixel`.
pub trait Dimension {
    fn domain(&self) -> (f64, f64);
    fn range(&self) -> (f64, f64);
    fn set_domain(&mut self, start: f64, end: f64) -> PlotResult<()>;
    fn set_range(&mut self, start: f64, end: f64) -> PlotResult<()>;
    fn to_pixel(&self, value: f64) -> f64;
    /// Candidate tick values in domain coordinates, roughly `target_count` of them.
    fn ticks(&self, target_count: usize) -> Vec<f64>;
    fn format_tick(&self, value: f64) -> String;
}

/// Plain linear domain-to-pixel mapping.
///
/// The range is directional: `set_range(height, 0)` yields the inverted
/// mapping used for screen-space y axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearDimension {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearDimension {
    pub fn new(domain_start: f64, domain_end: f64) -> PlotResult<Self> {
        let (domain_start, domain_end) = normalize_domain(domain_start, domain_end)?;
        Ok(Self {
            domain_start,
            domain_end,
            range_start: 0.0,
            range_end: 1.0,
        })
    }
}

impl Dimension for LinearDimension {
    fn domain(&self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    fn set_domain(&mut self, start: f64, end: f64) -> PlotResult<()> {
        let (start, end) = normalize_domain(start, end)?;
        self.domain_start = start;
        self.domain_end = end;
        Ok(())
    }

    fn set_range(&mut self, start: f64, end: f64) -> PlotResult<()> {
        if !start.is_finite() || !end.is_finite() {
            return Err(PlotError::InvalidData(
                "dimension range must be finite".to_owned(),
            ));
        }
        self.range_start = start;
        self.range_end = end;
        Ok(())
    }

    fn to_pixel(&self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    fn ticks(&self, target_count: usize) -> Vec<f64> {
        linear_ticks(self.domain_start, self.domain_end, target_count)
    }

    fn format_tick(&self, value: f64) -> String {
        format_decimal(value)
    }
}

/// Evenly spaced "nice" tick values covering `[start, end]`.
pub fn linear_ticks(start: f64, end: f64, target_count: usize) -> Vec<f64> {
    let span = end - start;
    if !span.is_finite() || span == 0.0 || target_count == 0 {
        return vec![start];
    }

    let step = nice_step(span.abs() / target_count.max(1) as f64);
    let direction = span.signum();
    let first = (start / step).ceil() * step;

    let mut ticks = Vec::new();
    let mut tick = if direction > 0.0 {
        first
    } else {
        (start / step).floor() * step
    };
    // Half-step tolerance keeps the end tick despite float accumulation.
    while (end - tick) * direction >= -step * 0.5 {
        ticks.push(tick);
        tick += step * direction;
        if ticks.len() > target_count.saturating_mul(4) + 16 {
            break;
        }
    }
    ticks
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let factor = if residual > 5.0 {
        10.0
    } else if residual > 2.0 {
        5.0
    } else if residual > 1.0 {
        2.0
    } else {
        1.0
    };
    factor * magnitude
}

/// Formats a tick value without trailing fraction noise.
pub fn format_decimal(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    let magnitude = value.abs();
    if magnitude >= 1e6 || magnitude < 1e-4 {
        return format!("{value:.3e}");
    }

    let mut text = format!("{value:.6}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

/// Keeps ticks at least `min_spacing_px` apart, preferring to retain the
/// final tick so the axis end stays labelled.
///
/// Input pairs are `(domain value, pixel position)`.
pub fn select_ticks_with_min_spacing(
    mut ticks: Vec<(f64, f64)>,
    min_spacing_px: f64,
) -> Vec<(f64, f64)> {
    if ticks.is_empty() {
        return ticks;
    }

    ticks.sort_by(|left, right| left.1.total_cmp(&right.1));
    if ticks.len() == 1 || !min_spacing_px.is_finite() || min_spacing_px <= 0.0 {
        return ticks;
    }

    let mut selected = Vec::with_capacity(ticks.len());
    selected.push(ticks[0]);
    for tick in ticks.iter().copied().skip(1) {
        if tick.1 - selected.last().expect("not empty").1 >= min_spacing_px {
            selected.push(tick);
        }
    }

    let last_tick = *ticks.last().expect("not empty");
    let selected_last = *selected.last().expect("not empty");
    if selected_last != last_tick {
        if selected.len() == 1 {
            // On very narrow axes a single label is clearer than overlapping pairs.
            selected[0] = last_tick;
        } else {
            let penultimate = selected[selected.len() - 2];
            if last_tick.1 - penultimate.1 >= min_spacing_px {
                let last_index = selected.len() - 1;
                selected[last_index] = last_tick;
            }
        }
    }

    selected
}

fn normalize_domain(start: f64, end: f64) -> PlotResult<(f64, f64)> {
    if !start.is_finite() || !end.is_finite() {
        return Err(PlotError::InvalidData(
            "dimension domain must be finite".to_owned(),
        ));
    }

    if start == end {
        // A degenerate domain still has to map somewhere; widen symmetrically.
        return Ok((start - 0.5, end + 0.5));
    }

    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::{Dimension, LinearDimension, linear_ticks, select_ticks_with_min_spacing};

    #[test]
    fn linear_dimension_maps_domain_ends_to_range_ends() {
        let mut dimension = LinearDimension::new(0.0, 10.0).expect("dimension");
        dimension.set_range(0.0, 500.0).expect("range");
        assert!((dimension.to_pixel(0.0) - 0.0).abs() <= 1e-9);
        assert!((dimension.to_pixel(10.0) - 500.0).abs() <= 1e-9);
        assert!((dimension.to_pixel(5.0) - 250.0).abs() <= 1e-9);
    }

    #[test]
    fn inverted_range_maps_min_to_bottom() {
        let mut dimension = LinearDimension::new(0.0, 1.0).expect("dimension");
        dimension.set_range(400.0, 0.0).expect("range");
        assert!((dimension.to_pixel(0.0) - 400.0).abs() <= 1e-9);
        assert!((dimension.to_pixel(1.0) - 0.0).abs() <= 1e-9);
    }

    #[test]
    fn degenerate_domain_is_widened() {
        let dimension = LinearDimension::new(3.0, 3.0).expect("dimension");
        assert_eq!(dimension.domain(), (2.5, 3.5));
    }

    #[test]
    fn linear_ticks_cover_domain_with_nice_steps() {
        let ticks = linear_ticks(0.0, 10.0, 5);
        assert!(!ticks.is_empty());
        assert!(ticks.iter().all(|tick| (0.0..=10.0 + 1e-9).contains(tick)));
        let step = ticks[1] - ticks[0];
        assert!((step - 2.0).abs() <= 1e-9);
    }

    #[test]
    fn tick_selection_enforces_min_spacing_and_keeps_last() {
        let ticks = vec![(0.0, 0.0), (1.0, 10.0), (2.0, 20.0), (3.0, 100.0)];
        let selected = select_ticks_with_min_spacing(ticks, 50.0);
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].1, 0.0);
        assert_eq!(selected[1].1, 100.0);
    }
}
