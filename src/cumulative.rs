//! Inverse-CDF sampling over a prefix-sum table.

use rand::{Rng, TryRngCore, distr::Distribution};
use tracing::debug;

use crate::error::WeightError;
use crate::source::{UniformSource, unit_f64};

/// Weighted sampler over the indices `0..n`.
///
/// Holds the running sums of the weights. A draw scales a uniform value in
/// `[0, 1)` by the total and binary-searches the sums for the index whose
/// interval contains it.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeSampler {
    cumulative: Vec<f64>,
}

impl CumulativeSampler {
    /// Build from non-negative weights. O(n).
    ///
    /// # Errors
    /// * [`WeightError::Empty`] if `weights` is empty.
    /// * [`WeightError::Negative`] / [`WeightError::NonFinite`] for the first
    ///   bad weight, by index.
    /// * [`WeightError::Overflow`] if the sum is not representable.
    /// * [`WeightError::ZeroTotal`] if every weight is zero.
    pub fn new(weights: &[f64]) -> Result<Self, WeightError> {
        Self::from_vec(weights.to_vec())
    }

    /// Like [`new`](Self::new), but turns `weights` into the prefix sums in
    /// place instead of allocating.
    pub fn from_vec(mut weights: Vec<f64>) -> Result<Self, WeightError> {
        match accumulate(&mut weights) {
            Ok(total) => {
                debug!(len = weights.len(), total, "built cumulative sampler");
                Ok(Self {
                    cumulative: weights,
                })
            }
            Err(err) => {
                debug!(%err, "rejected weights");
                Err(err)
            }
        }
    }

    /// Draw one index, consuming a single value from `source`. O(log n).
    #[inline]
    pub fn sample_index<S: UniformSource + ?Sized>(&self, source: &mut S) -> usize {
        self.index_of(source.next_uniform() * self.total())
    }

    /// Draw one index from a fallible generator, passing its error through.
    pub fn try_sample_index<R: TryRngCore + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<usize, R::Error> {
        let raw = unit_f64(rng.try_next_u64()?);
        Ok(self.index_of(raw * self.total()))
    }

    /// Index `i` with `cumulative[i - 1] <= u < cumulative[i]`.
    ///
    /// Falls back to the last index when `u` is not below the total, so the
    /// result is in range for any input.
    pub fn index_of(&self, u: f64) -> usize {
        let last = self.cumulative.len() - 1;
        self.cumulative.partition_point(|&c| c <= u).min(last)
    }

    /// Number of indices.
    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    /// Always `false`: construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.cumulative[self.cumulative.len() - 1]
    }

    /// The prefix sums; entry `i` covers weights `0..=i`.
    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    /// Normalized weight of `index`, or `None` if out of range.
    pub fn probability(&self, index: usize) -> Option<f64> {
        let upper = *self.cumulative.get(index)?;
        let lower = match index {
            0 => 0.0,
            i => self.cumulative[i - 1],
        };
        Some((upper - lower) / self.total())
    }

    /// Draw `draws` indices, returning counts per index.
    #[cfg(test)]
    pub fn sample_counts<S: UniformSource + ?Sized>(
        &self,
        source: &mut S,
        draws: usize,
    ) -> Vec<usize> {
        let mut counts = vec![0usize; self.len()];
        for _ in 0..draws {
            counts[self.sample_index(source)] += 1;
        }
        counts
    }
}

impl Distribution<usize> for CumulativeSampler {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.sample_index(rng)
    }
}

/// Validate `table` and overwrite it with its running sums. Returns the total.
fn accumulate(table: &mut [f64]) -> Result<f64, WeightError> {
    if table.is_empty() {
        return Err(WeightError::Empty);
    }

    let mut running = 0.0f64;
    for (index, slot) in table.iter_mut().enumerate() {
        let value = *slot;
        if value < 0.0 {
            return Err(WeightError::Negative { index, value });
        }
        if !value.is_finite() {
            return Err(WeightError::NonFinite { index, value });
        }
        running += value;
        *slot = running;
    }

    if running.is_infinite() {
        return Err(WeightError::Overflow);
    }
    if running == 0.0 {
        return Err(WeightError::ZeroTotal);
    }
    Ok(running)
}
