//! Shannon entropy of discrete value distributions
//!
//! Values are grouped by equality, so the same routine serves strings,
//! integers and (through [`entropy_of_floats`]) floating point data.

use std::collections::HashMap;
use std::hash::Hash;

/// Entropy of the empirical distribution of `values`.
///
/// Returns 0 for sequences with fewer than two elements and for sequences
/// holding a single distinct value. `base` defaults to `e`.
///
/// # Example
/// ```
/// use colsieve::pipeline::entropy;
///
/// assert_eq!(entropy(["a", "a", "a"], None), 0.0);
/// let h = entropy(["a", "b", "c", "d"], Some(2.0));
/// assert!((h - 2.0).abs() < 1e-12);
/// ```
pub fn entropy<I>(values: I, base: Option<f64>) -> f64
where
    I: IntoIterator,
    I::Item: Hash + Eq,
{
    let mut counts: HashMap<I::Item, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    entropy_from_counts(counts.into_values(), base)
}

/// Entropy of `f64` values, grouping equal numbers together.
///
/// `0.0` and `-0.0` fall in the same group; every NaN falls in one group.
pub fn entropy_of_floats(values: &[f64], base: Option<f64>) -> f64 {
    entropy(values.iter().map(|v| canonical_bits(*v)), base)
}

/// Entropy from the occurrence count of each distinct value.
///
/// Zero counts are ignored.
pub fn entropy_from_counts<I>(counts: I, base: Option<f64>) -> f64
where
    I: IntoIterator<Item = usize>,
{
    let counts: Vec<usize> = counts.into_iter().filter(|&c| c > 0).collect();
    let n: usize = counts.iter().sum();

    if n <= 1 || counts.len() <= 1 {
        return 0.0;
    }

    let n = n as f64;
    let log_base = base.map(f64::ln);

    let mut ent = 0.0;
    for &count in &counts {
        let p = count as f64 / n;
        let log_p = match log_base {
            Some(ln_b) => p.ln() / ln_b,
            None => p.ln(),
        };
        ent -= p * log_p;
    }
    ent
}

fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}
