use crate::domain::model::{Dish, DishType, Menu};
use crate::domain::ports::MenuSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// The nine-dish sample menu with its tag list.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinMenu;

impl BuiltinMenu {
    pub fn dishes() -> Vec<Dish> {
        vec![
            Dish::new("pork", false, 800, DishType::Meat),
            Dish::new("beef", false, 700, DishType::Meat),
            Dish::new("chicken", false, 400, DishType::Meat),
            Dish::new("french fries", true, 530, DishType::Other),
            Dish::new("rice", true, 350, DishType::Other),
            Dish::new("season fruit", true, 120, DishType::Other),
            Dish::new("pizza", true, 550, DishType::Other),
            Dish::new("prawns", false, 300, DishType::Fish),
            Dish::new("salmon", false, 450, DishType::Fish),
        ]
    }

    pub fn tags() -> BTreeMap<String, Vec<String>> {
        [
            ("pork", ["greasy", "salty"]),
            ("beef", ["salty", "roasted"]),
            ("chicken", ["fried", "crisp"]),
            ("french fries", ["greasy", "fried"]),
            ("rice", ["light", "natural"]),
            ("season fruit", ["fresh", "natural"]),
            ("pizza", ["tasty", "salty"]),
            ("prawns", ["tasty", "roasted"]),
            ("salmon", ["delicious", "fresh"]),
        ]
        .into_iter()
        .map(|(name, tags)| {
            (
                name.to_string(),
                tags.iter().map(|tag| tag.to_string()).collect(),
            )
        })
        .collect()
    }

    pub fn menu() -> Menu {
        Menu {
            dishes: Self::dishes(),
            tags: Self::tags(),
        }
    }
}

#[async_trait]
impl MenuSource for BuiltinMenu {
    async fn load(&self) -> Result<Menu> {
        Ok(Self::menu())
    }

    fn describe(&self) -> String {
        "built-in menu".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_dish_has_tags() {
        let menu = BuiltinMenu::menu();
        assert_eq!(menu.dishes.len(), 9);
        for dish in &menu.dishes {
            assert_eq!(menu.tags[dish.name()].len(), 2, "{}", dish.name());
        }
    }

    #[test]
    fn test_load_blocking() {
        let menu = tokio_test::block_on(BuiltinMenu.load()).unwrap();
        assert_eq!(menu.dishes[0].name(), "pork");
        assert_eq!(menu.dishes[8].name(), "salmon");
    }
}
