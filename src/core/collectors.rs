//! Grouping collectors with a downstream step applied inside each bucket.

use crate::core::query;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeSet;
use std::hash::Hash;

/// Groups by `key_fn`, then keeps only the items of each bucket that satisfy
/// `predicate`. Unlike filtering before grouping, a key seen in the input
/// stays in the result even when its bucket ends up empty.
pub fn group_by_filtering<I, K, F, P>(
    items: I,
    key_fn: F,
    mut predicate: P,
) -> IndexMap<K, Vec<I::Item>>
where
    I: IntoIterator,
    K: Hash + Eq,
    F: FnMut(&I::Item) -> K,
    P: FnMut(&I::Item) -> bool,
{
    query::group_by(items, key_fn)
        .into_iter()
        .map(|(key, bucket)| (key, query::filter(bucket, &mut predicate)))
        .collect()
}

pub fn group_by_mapping<I, K, F, M, R>(
    items: I,
    key_fn: F,
    mut mapper: M,
) -> IndexMap<K, Vec<R>>
where
    I: IntoIterator,
    K: Hash + Eq,
    F: FnMut(&I::Item) -> K,
    M: FnMut(I::Item) -> R,
{
    query::group_by(items, key_fn)
        .into_iter()
        .map(|(key, bucket)| (key, query::project(bucket, &mut mapper)))
        .collect()
}

pub fn group_by_flat_map<I, K, F, E, V, R>(
    items: I,
    key_fn: F,
    mut expand: E,
) -> IndexMap<K, BTreeSet<R>>
where
    I: IntoIterator,
    K: Hash + Eq,
    F: FnMut(&I::Item) -> K,
    E: FnMut(&I::Item) -> V,
    V: IntoIterator<Item = R>,
    R: Ord,
{
    query::group_by(items, key_fn)
        .into_iter()
        .map(|(key, bucket)| {
            let values: BTreeSet<R> = bucket.iter().flat_map(&mut expand).collect();
            (key, values)
        })
        .collect()
}

/// The item with the largest `metric` in each bucket. On ties the earliest
/// item wins.
pub fn group_max_by<I, K, F, M, O>(items: I, key_fn: F, mut metric: M) -> IndexMap<K, I::Item>
where
    I: IntoIterator,
    K: Hash + Eq,
    F: FnMut(&I::Item) -> K,
    M: FnMut(&I::Item) -> O,
    O: Ord,
{
    query::group_by(items, key_fn)
        .into_iter()
        .filter_map(|(key, bucket)| max_by_first(bucket, &mut metric).map(|item| (key, item)))
        .collect()
}

/// First maximal element, unlike `Iterator::max_by_key` which keeps the last.
pub fn max_by_first<I, M, O>(items: I, mut metric: M) -> Option<I::Item>
where
    I: IntoIterator,
    M: FnMut(&I::Item) -> O,
    O: Ord,
{
    query::reduce(items, None, |best: Option<(O, I::Item)>, item| {
        let value = metric(&item);
        match best {
            Some((best_value, best_item)) if best_value >= value => Some((best_value, best_item)),
            _ => Some((value, item)),
        }
    })
    .map(|(_, item)| item)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalorieSummary {
    pub count: usize,
    pub sum: u64,
    pub min: Option<u32>,
    pub max: Option<u32>,
    pub average: f64,
}

impl Default for CalorieSummary {
    fn default() -> Self {
        Self {
            count: 0,
            sum: 0,
            min: None,
            max: None,
            average: 0.0,
        }
    }
}

impl CalorieSummary {
    pub fn accept(self, value: u32) -> Self {
        let count = self.count + 1;
        let sum = self.sum + u64::from(value);
        Self {
            count,
            sum,
            min: Some(self.min.map_or(value, |min| min.min(value))),
            max: Some(self.max.map_or(value, |max| max.max(value))),
            average: sum as f64 / count as f64,
        }
    }

    pub fn of<I: IntoIterator<Item = u32>>(values: I) -> Self {
        query::reduce(values, Self::default(), Self::accept)
    }
}
