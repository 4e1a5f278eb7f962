use crate::{Error, ScalarField};

/// Descriptive statistics of the data samples selected by a mask.
///
/// A sample is selected when the mask sample at the same index is non-zero. The standard
/// deviation is the population one, i.e. divided by `count`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RegionStats {
    /// The number of selected samples.
    pub count: usize,
    /// The mean.
    pub mean: f64,
    /// The minimum.
    pub min: f64,
    /// The maximum.
    pub max: f64,
    /// The population standard deviation.
    pub std_dev: f64,
}

impl RegionStats {
    /// The statistics of an empty selection.
    pub const EMPTY: Self = Self {
        count: 0,
        mean: 0.0,
        min: 0.0,
        max: 0.0,
        std_dev: 0.0,
    };

    /// Compute the statistics of `data` selected by `mask`.
    pub fn compute(data: &ScalarField, mask: &ScalarField) -> Result<Self, Error> {
        if data.size() != mask.size() {
            return Err(Error::FieldSizeMismatch {
                expected: data.size(),
                actual: mask.size(),
            });
        }

        let selected = || {
            data.samples()
                .iter()
                .zip(mask.samples())
                .filter(|(_, m)| **m != 0)
                .map(|(d, _)| *d as f64)
        };

        let (count, sum, min, max) = selected().fold(
            (0usize, 0.0, f64::INFINITY, f64::NEG_INFINITY),
            |(count, sum, min, max), v| (count + 1, sum + v, min.min(v), max.max(v)),
        );

        if count == 0 {
            return Ok(Self::EMPTY);
        }

        let mean = sum / count as f64;
        let variance = selected().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;

        Ok(Self {
            count,
            mean,
            min,
            max,
            std_dev: variance.sqrt(),
        })
    }

    /// Recompute the statistics in place.
    ///
    /// An empty selection resets to [`RegionStats::EMPTY`].
    pub fn recompute(&mut self, data: &ScalarField, mask: &ScalarField) -> Result<(), Error> {
        *self = Self::compute(data, mask)?;
        Ok(())
    }

    /// Check if no sample is selected.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
