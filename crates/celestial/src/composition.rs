//! Name → fraction maps used for gas and material compositions.
//!
//! Stored as a `BTreeMap` so iteration and serialized key order are stable.

use std::collections::BTreeMap;

pub type Composition = BTreeMap<String, f64>;

/// Tolerance on a composition's total before it is considered unnormalized.
pub const COMPOSITION_TOLERANCE: f64 = 0.01;

pub fn total(composition: &Composition) -> f64 {
    composition.values().sum()
}

/// Whether fractions sum to 1 within [`COMPOSITION_TOLERANCE`].
///
/// Empty compositions are treated as normalized (nothing to sum).
pub fn is_normalized(composition: &Composition) -> bool {
    composition.is_empty() || (total(composition) - 1.0).abs() <= COMPOSITION_TOLERANCE
}

/// Scale fractions so they sum to 1, dropping non-positive entries.
///
/// A composition with nothing positive left is cleared.
pub fn normalize(composition: &mut Composition) {
    composition.retain(|_, fraction| fraction.is_finite() && *fraction > 0.0);
    let sum = total(composition);
    if sum <= 0.0 {
        composition.clear();
        return;
    }
    for fraction in composition.values_mut() {
        *fraction /= sum;
    }
}

/// Build a normalized composition from `(name, weight)` pairs.
pub fn from_weights<'a>(weights: impl IntoIterator<Item = (&'a str, f64)>) -> Composition {
    let mut composition: Composition = weights
        .into_iter()
        .map(|(name, weight)| (name.to_string(), weight))
        .collect();
    normalize(&mut composition);
    composition
}

/// The component with the largest fraction.
pub fn dominant(composition: &Composition) -> Option<(&str, f64)> {
    composition
        .iter()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(name, fraction)| (name.as_str(), *fraction))
}
