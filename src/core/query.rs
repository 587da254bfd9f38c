//! Sequence operations parameterised by caller-supplied functions.

use indexmap::IndexMap;
use std::hash::Hash;

pub fn filter<I, P>(items: I, mut predicate: P) -> Vec<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    items.into_iter().filter(|item| predicate(item)).collect()
}

pub fn project<I, F, R>(items: I, mapper: F) -> Vec<R>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> R,
{
    items.into_iter().map(mapper).collect()
}

/// Buckets items by `key_fn`. Buckets are ordered by the first appearance of
/// their key and are never empty.
pub fn group_by<I, K, F>(items: I, mut key_fn: F) -> IndexMap<K, Vec<I::Item>>
where
    I: IntoIterator,
    K: Hash + Eq,
    F: FnMut(&I::Item) -> K,
{
    let mut groups: IndexMap<K, Vec<I::Item>> = IndexMap::new();
    for item in items {
        groups.entry(key_fn(&item)).or_default().push(item);
    }
    groups
}

pub fn partition_by<I, P>(items: I, predicate: P) -> (Vec<I::Item>, Vec<I::Item>)
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    items.into_iter().partition(predicate)
}

/// Left-to-right fold. Returns `identity` untouched for an empty input.
pub fn reduce<I, R, F>(items: I, identity: R, combiner: F) -> R
where
    I: IntoIterator,
    F: FnMut(R, I::Item) -> R,
{
    items.into_iter().fold(identity, combiner)
}
