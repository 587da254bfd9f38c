use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "UPPERCASE")]
pub enum DishType {
    #[serde(alias = "meat")]
    Meat,
    #[serde(alias = "fish")]
    Fish,
    #[serde(alias = "other")]
    Other,
}

impl DishType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DishType::Meat => "MEAT",
            DishType::Fish => "FISH",
            DishType::Other => "OTHER",
        }
    }
}

impl fmt::Display for DishType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for DishType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MEAT" => Ok(DishType::Meat),
            "FISH" => Ok(DishType::Fish),
            "OTHER" => Ok(DishType::Other),
            _ => Err(CatalogError::InvalidConfigValueError {
                field: "type".to_string(),
                value: s.to_string(),
                reason: "Expected one of MEAT, FISH, OTHER".to_string(),
            }),
        }
    }
}

/// A menu entry. Immutable after construction; `calories` is unsigned so it
/// can never go below zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dish {
    name: String,
    vegetarian: bool,
    calories: u32,
    #[serde(rename = "type")]
    dish_type: DishType,
}

impl Dish {
    pub fn new(name: impl Into<String>, vegetarian: bool, calories: u32, dish_type: DishType) -> Self {
        Self {
            name: name.into(),
            vegetarian,
            calories,
            dish_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_vegetarian(&self) -> bool {
        self.vegetarian
    }

    pub fn calories(&self) -> u32 {
        self.calories
    }

    pub fn dish_type(&self) -> DishType {
        self.dish_type
    }
}

impl Validate for Dish {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name).map_err(|_| CatalogError::InvalidDishError {
            name: self.name.clone(),
            reason: "Dish name cannot be empty".to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CaloricLevel {
    Diet,
    Normal,
    Fat,
}

impl CaloricLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaloricLevel::Diet => "DIET",
            CaloricLevel::Normal => "NORMAL",
            CaloricLevel::Fat => "FAT",
        }
    }
}

impl fmt::Display for CaloricLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Upper bounds (inclusive) of the DIET and NORMAL levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaloricThresholds {
    #[serde(default = "default_diet_max")]
    pub diet_max: u32,
    #[serde(default = "default_normal_max")]
    pub normal_max: u32,
}

fn default_diet_max() -> u32 {
    400
}

fn default_normal_max() -> u32 {
    700
}

impl Default for CaloricThresholds {
    fn default() -> Self {
        Self {
            diet_max: default_diet_max(),
            normal_max: default_normal_max(),
        }
    }
}

impl CaloricThresholds {
    pub fn level_of(&self, calories: u32) -> CaloricLevel {
        if calories <= self.diet_max {
            CaloricLevel::Diet
        } else if calories <= self.normal_max {
            CaloricLevel::Normal
        } else {
            CaloricLevel::Fat
        }
    }
}

impl Validate for CaloricThresholds {
    fn validate(&self) -> Result<()> {
        if self.normal_max == 0 {
            return Err(CatalogError::InvalidConfigValueError {
                field: "caloric_levels.normal_max".to_string(),
                value: self.normal_max.to_string(),
                reason: "Value must be greater than 0".to_string(),
            });
        }
        validate_range("caloric_levels.diet_max", self.diet_max, 0, self.normal_max - 1)
    }
}

/// What a menu source yields: the dishes in menu order and optional tags
/// keyed by dish name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub dishes: Vec<Dish>,
    #[serde(default)]
    pub tags: BTreeMap<String, Vec<String>>,
}

impl Menu {
    pub fn new(dishes: Vec<Dish>) -> Self {
        Self {
            dishes,
            tags: BTreeMap::new(),
        }
    }
}

impl Validate for Menu {
    fn validate(&self) -> Result<()> {
        self.dishes.iter().try_for_each(|dish| dish.validate())
    }
}
