pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{BuiltinMenu, FileMenuSource};
pub use config::ReportConfig;
pub use core::{catalog::MenuCatalog, engine::CatalogEngine};
pub use domain::model::{CaloricLevel, CaloricThresholds, Dish, DishType, Menu};
pub use utils::error::{CatalogError, Result};
