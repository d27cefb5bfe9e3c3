//! # intdist
//!
//! Weighted random integers from a fixed discrete distribution.
//!
//! Given non-negative weights `w[0..n]`, [`CumulativeSampler`] draws an index
//! `i` with probability `w[i] / sum(w)`. It stores the running sums of the
//! weights and maps a uniform draw onto them by binary search
//! (inverse transform sampling).
//!
//! ## Quick start
//!
//! ```rust
//! use intdist::CumulativeSampler;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! # fn main() -> Result<(), intdist::WeightError> {
//! let sampler = CumulativeSampler::new(&[1.0, 3.0])?;
//!
//! let mut rng = StdRng::seed_from_u64(42); // seeded: reproducible draws
//! let i = sampler.sample_index(&mut rng);
//! assert!(i < 2);
//! # Ok(()) }
//! ```
//!
//! Items with weights go through [`WeightedTable`]:
//!
//! ```rust
//! use intdist::WeightedTable;
//!
//! # fn main() -> Result<(), intdist::WeightError> {
//! let table = WeightedTable::from_pairs([("common", 60.0), ("rare", 9.0), ("legendary", 1.0)])?;
//! let mut rng = rand::rng();
//! let tier = table.sample(&mut rng); // &&str
//! println!("you got: {tier}");
//! # Ok(()) }
//! ```
//!
//! ## Randomness
//! Samplers never reach for a global generator. Each call takes a
//! [`UniformSource`], implemented for every [`rand::Rng`], so seeded
//! generators give deterministic sequences. A sampler is immutable and
//! `Send + Sync`: threads can share one as long as each brings its own source.
//!
//! ## Performance
//! * **Build**: O(n), one pass over the weights.
//! * **Sample**: O(log n), one uniform draw per sample.
//! * **Space**: one `f64` per index.
//!
//! ## Gotchas
//! * Weights must be finite and non-negative; NaN, ∞ and negatives are rejected
//!   with the offending index.
//! * All-zero weights are rejected with [`WeightError::ZeroTotal`].
//! * This is for *fixed* distributions. If weights change, rebuild.

mod cumulative;
mod error;
mod source;

pub use cumulative::CumulativeSampler;
pub use error::WeightError;
pub use source::{UniformSource, unit_f64};

/// Associates items with weights and samples them through an internal
/// [`CumulativeSampler`].
///
/// Build it from any iterator of `(item, weight)` where `weight >= 0`.
#[derive(Debug, Clone)]
pub struct WeightedTable<T> {
    sampler: CumulativeSampler,
    items: Vec<T>,
}

impl<T> WeightedTable<T> {
    /// Build from any `(item, weight)` iterator.
    ///
    /// # Errors
    /// Same as [`CumulativeSampler::new`]; indices refer to pair positions.
    ///
    /// # Complexity
    /// O(n) time / O(n) space.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, WeightError>
    where
        I: IntoIterator<Item = (T, f64)>,
    {
        let (items, weights): (Vec<T>, Vec<f64>) = pairs.into_iter().unzip();
        let sampler = CumulativeSampler::from_vec(weights)?;
        Ok(Self { sampler, items })
    }

    /// Sample an item **by reference** (no `Clone` bound).
    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> &T {
        &self.items[self.sampler.sample_index(source)]
    }

    /// Sample an item **by value** (clones the chosen element).
    pub fn sample_owned<S: UniformSource + ?Sized>(&self, source: &mut S) -> T
    where
        T: Clone,
    {
        self.sample(source).clone()
    }

    /// Number of items in the table.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the table is empty. Never true for a built table.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The index sampler backing this table.
    pub fn sampler(&self) -> &CumulativeSampler {
        &self.sampler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn smoke_pairs() {
        let table = WeightedTable::from_pairs([("a", 1.0), ("b", 3.0)]).unwrap();
        let mut rng = rand::rng();
        let s = table.sample(&mut rng);
        assert!(["a", "b"].contains(s));
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
    }

    #[test]
    fn errors_point_at_pairs() {
        let err = WeightedTable::from_pairs([("a", 1.0), ("b", -1.0)]).unwrap_err();
        assert_eq!(
            err,
            WeightError::Negative {
                index: 1,
                value: -1.0
            }
        );
        let empty: [(&str, f64); 0] = [];
        assert_eq!(
            WeightedTable::from_pairs(empty).unwrap_err(),
            WeightError::Empty
        );
    }

    #[test]
    fn zero_weight_items_never_drop() {
        let table =
            WeightedTable::from_pairs([("never", 0.0), ("always", 2.0), ("nope", 0.0)]).unwrap();
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..5_000 {
            assert_eq!(table.sample_owned(&mut rng), "always");
        }
        assert_eq!(table.items(), &["never", "always", "nope"]);
        assert_eq!(table.sampler().total(), 2.0);
    }
}
