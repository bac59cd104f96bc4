use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Index-aligned measurement arrays with per-sample uncertainty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampledSeries {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub std: Vec<f64>,
}

impl SampledSeries {
    #[must_use]
    pub fn new(x: Vec<f64>, y: Vec<f64>, std: Vec<f64>) -> Self {
        Self { x, y, std }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn validate(&self) -> PlotResult<()> {
        if self.y.len() != self.x.len() || self.std.len() != self.x.len() {
            return Err(PlotError::InvalidData(format!(
                "sampled series arrays must be index-aligned: x={}, y={}, std={}",
                self.x.len(),
                self.y.len(),
                self.std.len()
            )));
        }
        for values in [&self.x, &self.y, &self.std] {
            if values.iter().any(|value| !value.is_finite()) {
                return Err(PlotError::InvalidData(
                    "sampled series values must be finite".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

/// Measured reference points with uncertainty.
///
/// Continuous observations render as a mean line inside an error envelope;
/// discrete observations render as independent per-point error bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObservationSeries {
    Continuous(SampledSeries),
    Discrete(SampledSeries),
}

impl ObservationSeries {
    #[must_use]
    pub fn is_continuous(&self) -> bool {
        matches!(self, Self::Continuous(_))
    }

    #[must_use]
    pub fn samples(&self) -> &SampledSeries {
        match self {
            Self::Continuous(samples) | Self::Discrete(samples) => samples,
        }
    }

    pub fn validate(&self) -> PlotResult<()> {
        self.samples().validate()
    }
}

/// Secondary historical/reference curve overlaid for comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefcaseSeries {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl RefcaseSeries {
    #[must_use]
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self { x, y }
    }

    pub fn validate(&self) -> PlotResult<()> {
        if self.y.len() != self.x.len() {
            return Err(PlotError::InvalidData(format!(
                "refcase arrays must be index-aligned: x={}, y={}",
                self.x.len(),
                self.y.len()
            )));
        }
        if self
            .x
            .iter()
            .chain(self.y.iter())
            .any(|value| !value.is_finite())
        {
            return Err(PlotError::InvalidData(
                "refcase values must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Data-derived axis bounds reported by a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl SeriesBounds {
    pub fn validate(&self) -> PlotResult<()> {
        for value in [self.x_min, self.x_max, self.y_min, self.y_max] {
            if !value.is_finite() {
                return Err(PlotError::InvalidData(
                    "series bounds must be finite".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

/// The data object consumed by the plot: a named ensemble with optional
/// boundary information, observation data and a refcase curve.
///
/// Primary ensemble content (the per-realization curves) is drawn by the
/// host-installed series renderer, so this type carries only what the plot
/// itself needs for domains and overlays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnsembleSeries {
    name: String,
    bounds: Option<SeriesBounds>,
    observation: Option<ObservationSeries>,
    refcase: Option<RefcaseSeries>,
}

impl EnsembleSeries {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: None,
            observation: None,
            refcase: None,
        }
    }

    #[must_use]
    pub fn with_bounds(mut self, bounds: SeriesBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    #[must_use]
    pub fn with_observation(mut self, observation: ObservationSeries) -> Self {
        self.observation = Some(observation);
        self
    }

    #[must_use]
    pub fn with_refcase(mut self, refcase: RefcaseSeries) -> Self {
        self.refcase = Some(refcase);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn has_boundaries(&self) -> bool {
        self.bounds.is_some()
    }

    #[must_use]
    pub fn bounds(&self) -> Option<SeriesBounds> {
        self.bounds
    }

    #[must_use]
    pub fn min_x(&self) -> Option<f64> {
        self.bounds.map(|bounds| bounds.x_min)
    }

    #[must_use]
    pub fn max_x(&self) -> Option<f64> {
        self.bounds.map(|bounds| bounds.x_max)
    }

    #[must_use]
    pub fn min_y(&self) -> Option<f64> {
        self.bounds.map(|bounds| bounds.y_min)
    }

    #[must_use]
    pub fn max_y(&self) -> Option<f64> {
        self.bounds.map(|bounds| bounds.y_max)
    }

    #[must_use]
    pub fn has_observation_data(&self) -> bool {
        self.observation.is_some()
    }

    #[must_use]
    pub fn observation_data(&self) -> Option<&ObservationSeries> {
        self.observation.as_ref()
    }

    #[must_use]
    pub fn has_refcase_data(&self) -> bool {
        self.refcase.is_some()
    }

    #[must_use]
    pub fn refcase_data(&self) -> Option<&RefcaseSeries> {
        self.refcase.as_ref()
    }

    pub fn validate(&self) -> PlotResult<()> {
        if let Some(bounds) = self.bounds {
            bounds.validate()?;
        }
        if let Some(observation) = &self.observation {
            observation.validate()?;
        }
        if let Some(refcase) = &self.refcase {
            refcase.validate()?;
        }
        Ok(())
    }
}
