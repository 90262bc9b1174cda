//! Small aggregate helpers shared by the reports. Blank cells are filtered
//! out by the callers before anything reaches these functions.

use std::collections::BTreeMap;

/// Most frequent item. Ties resolve to the smallest item.
pub fn mode<T, I>(items: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut best: Option<(T, usize)> = None;
    for (item, count) in tally(items) {
        match &best {
            Some((_, top)) if *top >= count => {}
            _ => best = Some((item, count)),
        }
    }
    best.map(|(item, _)| item)
}

/// Occurrence counts, most frequent first; equal counts keep ascending order.
pub fn value_counts<T, I>(items: I) -> Vec<(T, usize)>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut pairs: Vec<(T, usize)> = tally(items).into_iter().collect();
    pairs.sort_by(|left, right| right.1.cmp(&left.1));
    pairs
}

/// Parses numeric cells, returning the parsed values and how many cells were
/// rejected.
pub fn parse_numbers<'a, I>(cells: I) -> (Vec<f64>, usize)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut values = Vec::new();
    let mut rejected = 0;
    for cell in cells {
        match cell.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => values.push(value),
            _ => rejected += 1,
        }
    }
    (values, rejected)
}

pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(sum(values) / values.len() as f64)
    }
}

fn tally<T, I>(items: I) -> BTreeMap<T, usize>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}
