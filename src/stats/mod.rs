//! Descriptive-statistics reports over a filtered `TripTable`.
//! Every report is a pure function of the table; empty tables degrade to
//! explicit no-data values, never a panic.

pub mod duration;
pub mod period;
pub mod station;
pub mod time;
pub mod user;

use std::collections::HashMap;
use std::hash::Hash;

/// Most frequent value. Ties are broken by first occurrence in `values`,
/// never by hash-map iteration order.
pub fn mode<T: Eq + Hash + Clone>(values: &[T]) -> Option<T> {
    let mut counts: HashMap<&T, usize> = HashMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    let best = counts.values().copied().max()?;
    values.iter().find(|v| counts[*v] == best).cloned()
}

/// Occurrence counts in descending order; equal counts keep first-seen order.
pub fn frequency_table<T: Eq + Hash + Clone>(values: &[T]) -> Vec<(T, usize)> {
    let mut counts: HashMap<&T, usize> = HashMap::new();
    let mut order: Vec<&T> = Vec::new();
    for v in values {
        let count = counts.entry(v).or_insert(0);
        if *count == 0 {
            order.push(v);
        }
        *count += 1;
    }

    let mut out: Vec<(T, usize)> = order.into_iter().map(|v| (v.clone(), counts[v])).collect();
    // stable sort: ties stay in first-seen order
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}
