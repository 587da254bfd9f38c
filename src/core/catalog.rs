use crate::core::collectors::{self, CalorieSummary};
use crate::core::query;
use crate::domain::model::{CaloricLevel, CaloricThresholds, Dish, DishType, Menu};
use indexmap::IndexMap;
use std::collections::{BTreeMap, BTreeSet};
use std::hash::Hash;

/// Read-only, ordered collection of dishes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuCatalog {
    dishes: Vec<Dish>,
    tags: BTreeMap<String, Vec<String>>,
}

impl MenuCatalog {
    pub fn new(dishes: Vec<Dish>) -> Self {
        Self {
            dishes,
            tags: BTreeMap::new(),
        }
    }

    pub fn with_tags(mut self, tags: BTreeMap<String, Vec<String>>) -> Self {
        self.tags = tags;
        self
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Dish> {
        self.dishes.iter()
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&Dish> {
        self.dishes.iter().find(|dish| dish.name() == name)
    }

    pub fn tags_of(&self, dish: &Dish) -> &[String] {
        self.tags.get(dish.name()).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn filter<P>(&self, mut predicate: P) -> Vec<&Dish>
    where
        P: FnMut(&Dish) -> bool,
    {
        query::filter(&self.dishes, |dish| predicate(*dish))
    }

    pub fn project<F, R>(&self, mapper: F) -> Vec<R>
    where
        F: FnMut(&Dish) -> R,
    {
        query::project(&self.dishes, mapper)
    }

    pub fn group_by<K, F>(&self, mut key_fn: F) -> IndexMap<K, Vec<&Dish>>
    where
        K: Hash + Eq,
        F: FnMut(&Dish) -> K,
    {
        query::group_by(&self.dishes, |dish| key_fn(*dish))
    }

    pub fn partition_by<P>(&self, mut predicate: P) -> (Vec<&Dish>, Vec<&Dish>)
    where
        P: FnMut(&Dish) -> bool,
    {
        query::partition_by(&self.dishes, |dish| predicate(*dish))
    }

    pub fn reduce<R, F>(&self, identity: R, combiner: F) -> R
    where
        F: FnMut(R, &Dish) -> R,
    {
        query::reduce(&self.dishes, identity, combiner)
    }

    pub fn count_where<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&Dish) -> bool,
    {
        self.reduce(0, |count, dish| if predicate(dish) { count + 1 } else { count })
    }

    pub fn names(&self) -> Vec<&str> {
        self.dishes.iter().map(Dish::name).collect()
    }

    pub fn joined_names(&self, separator: &str) -> String {
        self.names().join(separator)
    }

    pub fn total_calories(&self) -> u64 {
        self.reduce(0, |sum, dish| sum + u64::from(dish.calories()))
    }

    pub fn calorie_summary(&self) -> CalorieSummary {
        CalorieSummary::of(self.dishes.iter().map(Dish::calories))
    }

    pub fn max_by_calories(&self) -> Option<&Dish> {
        collectors::max_by_first(&self.dishes, |dish| dish.calories())
    }

    pub fn min_by_calories(&self) -> Option<&Dish> {
        collectors::max_by_first(&self.dishes, |dish| std::cmp::Reverse(dish.calories()))
    }

    /// Stable ascending sort; dishes with equal calories keep catalog order.
    pub fn sorted_by_calories(&self) -> Vec<&Dish> {
        let mut sorted: Vec<&Dish> = self.dishes.iter().collect();
        sorted.sort_by_key(|dish| dish.calories());
        sorted
    }

    pub fn group_by_type(&self) -> IndexMap<DishType, Vec<&Dish>> {
        self.group_by(Dish::dish_type)
    }

    pub fn group_by_caloric_level(
        &self,
        thresholds: &CaloricThresholds,
    ) -> IndexMap<CaloricLevel, Vec<&Dish>> {
        self.group_by(|dish| thresholds.level_of(dish.calories()))
    }

    /// Returns `(vegetarian, non_vegetarian)`.
    pub fn partition_vegetarian(&self) -> (Vec<&Dish>, Vec<&Dish>) {
        self.partition_by(Dish::is_vegetarian)
    }

    pub fn group_by_filtering<K, F, P>(
        &self,
        mut key_fn: F,
        mut predicate: P,
    ) -> IndexMap<K, Vec<&Dish>>
    where
        K: Hash + Eq,
        F: FnMut(&Dish) -> K,
        P: FnMut(&Dish) -> bool,
    {
        collectors::group_by_filtering(
            &self.dishes,
            |dish| key_fn(*dish),
            |dish| predicate(*dish),
        )
    }

    pub fn group_by_mapping<K, F, M, R>(&self, mut key_fn: F, mapper: M) -> IndexMap<K, Vec<R>>
    where
        K: Hash + Eq,
        F: FnMut(&Dish) -> K,
        M: FnMut(&Dish) -> R,
    {
        collectors::group_by_mapping(&self.dishes, |dish| key_fn(*dish), mapper)
    }

    pub fn group_max_by<K, F, M, O>(&self, mut key_fn: F, mut metric: M) -> IndexMap<K, &Dish>
    where
        K: Hash + Eq,
        F: FnMut(&Dish) -> K,
        M: FnMut(&Dish) -> O,
        O: Ord,
    {
        collectors::group_max_by(&self.dishes, |dish| key_fn(*dish), |dish| metric(*dish))
    }

    pub fn tags_by<K, F>(&self, mut key_fn: F) -> IndexMap<K, BTreeSet<&str>>
    where
        K: Hash + Eq,
        F: FnMut(&Dish) -> K,
    {
        collectors::group_by_flat_map(
            &self.dishes,
            |dish| key_fn(*dish),
            |dish| self.tags_of(dish).iter().map(String::as_str),
        )
    }
}

impl From<Menu> for MenuCatalog {
    fn from(menu: Menu) -> Self {
        MenuCatalog::new(menu.dishes).with_tags(menu.tags)
    }
}

impl FromIterator<Dish> for MenuCatalog {
    fn from_iter<T: IntoIterator<Item = Dish>>(iter: T) -> Self {
        MenuCatalog::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MenuCatalog {
    type Item = &'a Dish;
    type IntoIter = std::slice::Iter<'a, Dish>;

    fn into_iter(self) -> Self::IntoIter {
        self.dishes.iter()
    }
}
