use crate::core::catalog::MenuCatalog;
use crate::core::collectors::CalorieSummary;
use crate::core::query;
use crate::core::report::QueryOutput;
use crate::domain::model::{CaloricThresholds, Dish, DishType};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_positive_number, Validate};
use serde::{Deserialize, Serialize};

/// Conjunction of optional conditions on a dish. An empty filter matches
/// every dish. Calorie bounds are strict.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DishFilter {
    pub vegetarian: Option<bool>,
    #[serde(rename = "type")]
    pub dish_type: Option<DishType>,
    pub calories_below: Option<u32>,
    pub calories_above: Option<u32>,
}

impl DishFilter {
    pub fn matches(&self, dish: &Dish) -> bool {
        self.vegetarian.map_or(true, |veg| dish.is_vegetarian() == veg)
            && self.dish_type.map_or(true, |t| dish.dish_type() == t)
            && self.calories_below.map_or(true, |max| dish.calories() < max)
            && self.calories_above.map_or(true, |min| dish.calories() > min)
    }

    pub fn is_empty(&self) -> bool {
        self == &DishFilter::default()
    }
}

impl Validate for DishFilter {
    fn validate(&self) -> Result<()> {
        if let (Some(above), Some(below)) = (self.calories_above, self.calories_below) {
            if below <= above.saturating_add(1) {
                return Err(CatalogError::InvalidConfigValueError {
                    field: "filter.calories_below".to_string(),
                    value: below.to_string(),
                    reason: format!(
                        "No calorie value is both above {} and below {}",
                        above, below
                    ),
                });
            }
        }
        Ok(())
    }
}

/// What dishes are grouped by in `group` and `tags` queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum GroupKey {
    #[default]
    Type,
    CaloricLevel,
    Vegetarian,
}

impl GroupKey {
    pub fn label(&self, dish: &Dish, thresholds: &CaloricThresholds) -> String {
        match self {
            GroupKey::Type => dish.dish_type().to_string(),
            GroupKey::CaloricLevel => thresholds.level_of(dish.calories()).to_string(),
            GroupKey::Vegetarian if dish.is_vegetarian() => "vegetarian".to_string(),
            GroupKey::Vegetarian => "non-vegetarian".to_string(),
        }
    }
}

/// A declarative catalog query, as read from the CLI or a report config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuQuery {
    /// Filter, then optionally sort by calories, then optionally truncate.
    List {
        #[serde(default)]
        filter: DishFilter,
        #[serde(default)]
        sort_by_calories: bool,
        #[serde(default)]
        limit: Option<usize>,
        #[serde(default)]
        names_only: bool,
    },
    Group {
        #[serde(default)]
        key: GroupKey,
        #[serde(default)]
        filter: DishFilter,
    },
    Partition {
        #[serde(default)]
        filter: DishFilter,
    },
    Summary {
        #[serde(default)]
        filter: DishFilter,
    },
    Tags {
        #[serde(default)]
        key: GroupKey,
    },
}

impl MenuQuery {
    pub fn kind(&self) -> &'static str {
        match self {
            MenuQuery::List { .. } => "list",
            MenuQuery::Group { .. } => "group",
            MenuQuery::Partition { .. } => "partition",
            MenuQuery::Summary { .. } => "summary",
            MenuQuery::Tags { .. } => "tags",
        }
    }

    pub fn evaluate(&self, catalog: &MenuCatalog, thresholds: &CaloricThresholds) -> QueryOutput {
        match self {
            MenuQuery::List {
                filter,
                sort_by_calories,
                limit,
                names_only,
            } => {
                let mut dishes = if *sort_by_calories {
                    query::filter(catalog.sorted_by_calories(), |dish| filter.matches(dish))
                } else {
                    catalog.filter(|dish| filter.matches(dish))
                };
                if let Some(limit) = limit {
                    dishes.truncate(*limit);
                }
                if *names_only {
                    QueryOutput::Names(query::project(dishes, |dish| dish.name().to_string()))
                } else {
                    QueryOutput::Dishes(dishes.into_iter().cloned().collect())
                }
            }
            MenuQuery::Group { key, filter } => {
                let matching = catalog.filter(|dish| filter.matches(dish));
                let groups = query::group_by(matching, |dish| key.label(dish, thresholds));
                QueryOutput::Groups(
                    groups
                        .into_iter()
                        .map(|(label, bucket)| (label, bucket.into_iter().cloned().collect()))
                        .collect(),
                )
            }
            MenuQuery::Partition { filter } => {
                let (matching, non_matching) = catalog.partition_by(|dish| filter.matches(dish));
                QueryOutput::Partition {
                    matching: matching.into_iter().cloned().collect(),
                    non_matching: non_matching.into_iter().cloned().collect(),
                }
            }
            MenuQuery::Summary { filter } => {
                let matching = catalog.filter(|dish| filter.matches(dish));
                QueryOutput::Summary(CalorieSummary::of(
                    matching.into_iter().map(Dish::calories),
                ))
            }
            MenuQuery::Tags { key } => {
                let tags = catalog.tags_by(|dish| key.label(dish, thresholds));
                QueryOutput::Tags(
                    tags.into_iter()
                        .map(|(label, set)| (label, set.into_iter().map(str::to_string).collect()))
                        .collect(),
                )
            }
        }
    }
}

impl Validate for MenuQuery {
    fn validate(&self) -> Result<()> {
        match self {
            MenuQuery::List { filter, limit, .. } => {
                if let Some(limit) = limit {
                    validate_positive_number("limit", *limit, 1)?;
                }
                filter.validate()
            }
            MenuQuery::Group { filter, .. }
            | MenuQuery::Partition { filter }
            | MenuQuery::Summary { filter } => filter.validate(),
            MenuQuery::Tags { .. } => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MenuCatalog {
        MenuCatalog::new(vec![
            Dish::new("pork", false, 800, DishType::Meat),
            Dish::new("rice", true, 350, DishType::Other),
            Dish::new("pizza", true, 550, DishType::Other),
            Dish::new("prawns", false, 300, DishType::Fish),
        ])
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = DishFilter::default();
        assert!(filter.is_empty());
        assert!(catalog().iter().all(|dish| filter.matches(dish)));
    }

    #[test]
    fn test_filter_conditions_are_conjunctive() {
        let filter = DishFilter {
            vegetarian: Some(true),
            calories_below: Some(500),
            ..DishFilter::default()
        };
        let catalog = catalog();
        let names: Vec<&str> = catalog
            .iter()
            .filter(|dish| filter.matches(dish))
            .map(Dish::name)
            .collect();
        assert_eq!(names, vec!["rice"]);
    }

    #[test]
    fn test_filter_rejects_empty_calorie_window() {
        let filter = DishFilter {
            calories_above: Some(300),
            calories_below: Some(301),
            ..DishFilter::default()
        };
        assert!(filter.validate().is_err());

        let filter = DishFilter {
            calories_above: Some(300),
            calories_below: Some(302),
            ..DishFilter::default()
        };
        assert!(filter.validate().is_ok());
    }

    #[test]
    fn test_list_sorted_names_with_limit() {
        let query = MenuQuery::List {
            filter: DishFilter {
                calories_below: Some(600),
                ..DishFilter::default()
            },
            sort_by_calories: true,
            limit: Some(2),
            names_only: true,
        };
        let output = query.evaluate(&catalog(), &CaloricThresholds::default());
        assert_eq!(
            output,
            QueryOutput::Names(vec!["prawns".to_string(), "rice".to_string()])
        );
    }

    #[test]
    fn test_sorted_list_keeps_catalog_order_on_ties() {
        let catalog = MenuCatalog::new(vec![
            Dish::new("beef", false, 700, DishType::Meat),
            Dish::new("fries", true, 530, DishType::Other),
            Dish::new("salmon", false, 530, DishType::Fish),
            Dish::new("fruit", true, 120, DishType::Other),
        ]);
        let query = MenuQuery::List {
            filter: DishFilter {
                calories_above: Some(100),
                ..DishFilter::default()
            },
            sort_by_calories: true,
            limit: None,
            names_only: true,
        };
        let output = query.evaluate(&catalog, &CaloricThresholds::default());
        let expected: Vec<String> = catalog
            .sorted_by_calories()
            .into_iter()
            .map(|dish| dish.name().to_string())
            .collect();
        assert_eq!(output, QueryOutput::Names(expected));
        assert_eq!(
            output,
            QueryOutput::Names(vec![
                "fruit".to_string(),
                "fries".to_string(),
                "salmon".to_string(),
                "beef".to_string(),
            ])
        );
    }

    #[test]
    fn test_group_by_caloric_level() {
        let query = MenuQuery::Group {
            key: GroupKey::CaloricLevel,
            filter: DishFilter::default(),
        };
        let QueryOutput::Groups(groups) = query.evaluate(&catalog(), &CaloricThresholds::default())
        else {
            panic!("expected groups");
        };
        let keys: Vec<&str> = groups.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["FAT", "DIET", "NORMAL"]);
        assert_eq!(groups["DIET"].len(), 2);
    }

    #[test]
    fn test_group_with_filter_has_no_empty_buckets() {
        let query = MenuQuery::Group {
            key: GroupKey::Type,
            filter: DishFilter {
                vegetarian: Some(true),
                ..DishFilter::default()
            },
        };
        let QueryOutput::Groups(groups) = query.evaluate(&catalog(), &CaloricThresholds::default())
        else {
            panic!("expected groups");
        };
        assert_eq!(groups.len(), 1);
        assert!(groups.contains_key("OTHER"));
    }

    #[test]
    fn test_partition_and_summary() {
        let thresholds = CaloricThresholds::default();
        let filter = DishFilter {
            dish_type: Some(DishType::Other),
            ..DishFilter::default()
        };

        let QueryOutput::Partition {
            matching,
            non_matching,
        } = MenuQuery::Partition {
            filter: filter.clone(),
        }
        .evaluate(&catalog(), &thresholds)
        else {
            panic!("expected partition");
        };
        assert_eq!(matching.len() + non_matching.len(), 4);
        assert_eq!(matching.len(), 2);

        let QueryOutput::Summary(summary) =
            MenuQuery::Summary { filter }.evaluate(&catalog(), &thresholds)
        else {
            panic!("expected summary");
        };
        assert_eq!(summary.sum, 900);
        assert_eq!(summary.max, Some(550));
    }

    #[test]
    fn test_query_from_json() {
        let query: MenuQuery = serde_json::from_value(serde_json::json!({
            "kind": "list",
            "filter": {"type": "FISH"},
            "limit": 1
        }))
        .unwrap();
        assert_eq!(
            query,
            MenuQuery::List {
                filter: DishFilter {
                    dish_type: Some(DishType::Fish),
                    ..DishFilter::default()
                },
                sort_by_calories: false,
                limit: Some(1),
                names_only: false,
            }
        );
        assert_eq!(query.kind(), "list");
    }

    #[test]
    fn test_zero_limit_is_invalid() {
        let query = MenuQuery::List {
            filter: DishFilter::default(),
            sort_by_calories: false,
            limit: Some(0),
            names_only: false,
        };
        assert!(query.validate().is_err());
    }
}
