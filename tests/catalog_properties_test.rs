use menu_catalog::core::query;
use menu_catalog::{Dish, DishType, MenuCatalog};
use proptest::prelude::*;

fn dish_type() -> impl Strategy<Value = DishType> {
    prop_oneof![
        Just(DishType::Meat),
        Just(DishType::Fish),
        Just(DishType::Other),
    ]
}

prop_compose! {
    fn dish()(
        name in "[a-z]{1,8}",
        vegetarian in any::<bool>(),
        calories in 0u32..1500,
        dish_type in dish_type(),
    ) -> Dish {
        Dish::new(name, vegetarian, calories, dish_type)
    }
}

prop_compose! {
    fn catalog()(dishes in prop::collection::vec(dish(), 0..40)) -> MenuCatalog {
        MenuCatalog::new(dishes)
    }
}

fn sorted(mut dishes: Vec<&Dish>) -> Vec<&Dish> {
    dishes.sort_by(|a, b| {
        (a.name(), a.calories(), a.dish_type(), a.is_vegetarian()).cmp(&(
            b.name(),
            b.calories(),
            b.dish_type(),
            b.is_vegetarian(),
        ))
    });
    dishes
}

proptest! {
    #[test]
    fn filter_and_its_negation_cover_the_catalog(catalog in catalog(), limit in 0u32..1500) {
        let below = catalog.filter(|dish| dish.calories() < limit);
        let rest = catalog.filter(|dish| !(dish.calories() < limit));
        prop_assert_eq!(below.len() + rest.len(), catalog.len());
    }

    #[test]
    fn group_buckets_are_a_multiset_split(catalog in catalog()) {
        let groups = catalog.group_by(Dish::dish_type);

        prop_assert!(groups.values().all(|bucket| !bucket.is_empty()));
        for (key, bucket) in &groups {
            prop_assert!(bucket.iter().all(|dish| dish.dish_type() == *key));
        }

        let union: Vec<&Dish> = groups.into_values().flatten().collect();
        prop_assert_eq!(sorted(union), sorted(catalog.iter().collect()));
    }

    #[test]
    fn group_keys_follow_first_appearance(catalog in catalog()) {
        let groups = catalog.group_by(Dish::dish_type);
        let mut expected: Vec<DishType> = Vec::new();
        for dish in &catalog {
            if !expected.contains(&dish.dish_type()) {
                expected.push(dish.dish_type());
            }
        }
        prop_assert_eq!(groups.keys().copied().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn partition_is_disjoint_and_complete(catalog in catalog()) {
        let (veg, rest) = catalog.partition_by(Dish::is_vegetarian);

        prop_assert!(veg.iter().all(|dish| dish.is_vegetarian()));
        prop_assert!(rest.iter().all(|dish| !dish.is_vegetarian()));

        let mut union = veg;
        union.extend(rest);
        prop_assert_eq!(sorted(union), sorted(catalog.iter().collect()));
    }

    #[test]
    fn filter_preserves_catalog_order(catalog in catalog(), limit in 0u32..1500) {
        let kept = catalog.filter(|dish| dish.calories() >= limit);
        let positions: Vec<usize> = kept
            .iter()
            .map(|kept| {
                catalog
                    .iter()
                    .position(|dish| std::ptr::eq(dish, *kept))
                    .unwrap()
            })
            .collect();
        prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn reduce_sum_matches_iterator_sum(values in prop::collection::vec(0u64..10_000, 0..50)) {
        let expected: u64 = values.iter().sum();
        prop_assert_eq!(query::reduce(values, 0u64, |acc, v| acc + v), expected);
    }

    #[test]
    fn reduce_empty_returns_identity(identity in any::<i64>()) {
        prop_assert_eq!(query::reduce(Vec::<i64>::new(), identity, |_, v| v), identity);
    }
}
