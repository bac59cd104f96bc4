use chrono::{DateTime, Utc};

use crate::core::dimension::{Dimension, LinearDimension, linear_ticks};
use crate::error::PlotResult;

/// X dimension over unix-seconds timestamps with date/time tick labels.
///
/// Mapping behavior is identical to `LinearDimension`; only tick formatting
/// differs, switching between date and time precision with the domain span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeDimension {
    inner: LinearDimension,
}

const SECONDS_PER_DAY: f64 = 86_400.0;

impl TimeDimension {
    pub fn new(start_unix_seconds: f64, end_unix_seconds: f64) -> PlotResult<Self> {
        Ok(Self {
            inner: LinearDimension::new(start_unix_seconds, end_unix_seconds)?,
        })
    }

    fn span_seconds(&self) -> f64 {
        let (start, end) = self.inner.domain();
        (end - start).abs()
    }
}

impl Dimension for TimeDimension {
    fn domain(&self) -> (f64, f64) {
        self.inner.domain()
    }

    fn range(&self) -> (f64, f64) {
        self.inner.range()
    }

    fn set_domain(&mut self, start: f64, end: f64) -> PlotResult<()> {
        self.inner.set_domain(start, end)
    }

    fn set_range(&mut self, start: f64, end: f64) -> PlotResult<()> {
        self.inner.set_range(start, end)
    }

    fn to_pixel(&self, value: f64) -> f64 {
        self.inner.to_pixel(value)
    }

    fn ticks(&self, target_count: usize) -> Vec<f64> {
        let (start, end) = self.inner.domain();
        linear_ticks(start, end, target_count)
    }

    fn format_tick(&self, value: f64) -> String {
        let Some(timestamp) = DateTime::<Utc>::from_timestamp(value as i64, 0) else {
            return crate::core::dimension::format_decimal(value);
        };

        if self.span_seconds() >= 2.0 * SECONDS_PER_DAY {
            timestamp.format("%Y-%m-%d").to_string()
        } else {
            timestamp.format("%H:%M:%S").to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TimeDimension;
    use crate::core::dimension::Dimension;

    #[test]
    fn wide_domains_format_as_dates() {
        let dimension = TimeDimension::new(0.0, 30.0 * 86_400.0).expect("dimension");
        assert_eq!(dimension.format_tick(0.0), "1970-01-01");
    }

    #[test]
    fn narrow_domains_format_as_clock_time() {
        let dimension = TimeDimension::new(0.0, 3_600.0).expect("dimension");
        assert_eq!(dimension.format_tick(90.0), "00:01:30");
    }
}
