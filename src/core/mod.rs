pub mod catalog;
pub mod collectors;
pub mod engine;
pub mod query;
pub mod report;
pub mod request;

pub use crate::domain::model::{CaloricLevel, CaloricThresholds, Dish, DishType, Menu};
pub use crate::domain::ports::MenuSource;
pub use crate::utils::error::Result;
