use crate::domain::model::{Dish, DishType, Menu};
use crate::domain::ports::MenuSource;
use crate::utils::error::{CatalogError, Result};
use crate::utils::parse::{parse_or_absent, string_to_int};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuFormat {
    Csv,
    Json,
}

impl MenuFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Ok(MenuFormat::Csv),
            "json" => Ok(MenuFormat::Json),
            _ => Err(CatalogError::UnsupportedFormatError { extension }),
        }
    }
}

/// A menu stored in a local CSV or JSON file.
#[derive(Debug, Clone)]
pub struct FileMenuSource {
    path: PathBuf,
    format: MenuFormat,
}

impl FileMenuSource {
    pub fn new(path: impl Into<PathBuf>, format: MenuFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    /// Picks the format from the file extension.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let format = MenuFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> MenuFormat {
        self.format
    }
}

#[async_trait]
impl MenuSource for FileMenuSource {
    async fn load(&self) -> Result<Menu> {
        let data = tokio::fs::read(&self.path).await?;
        tracing::debug!("Read {} bytes from {}", data.len(), self.path.display());

        match self.format {
            MenuFormat::Csv => parse_csv_menu(&data),
            MenuFormat::Json => parse_json_menu(&data),
        }
    }

    fn describe(&self) -> String {
        format!("{:?} file {}", self.format, self.path.display())
    }
}

#[derive(Debug, Deserialize)]
struct CsvDishRow {
    name: String,
    vegetarian: String,
    calories: String,
    #[serde(rename = "type")]
    dish_type: String,
}

/// Reads `name,vegetarian,calories,type` rows. A row whose calories are not a
/// non-negative integer is skipped with a warning; any other malformed field
/// fails the load.
pub fn parse_csv_menu(data: &[u8]) -> Result<Menu> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data);

    let mut dishes = Vec::new();
    for row in reader.deserialize::<CsvDishRow>() {
        let row = row?;

        let calories = match string_to_int(&row.calories).and_then(|v| u32::try_from(v).ok()) {
            Some(calories) => calories,
            None => {
                tracing::warn!(
                    "Skipping dish '{}': calories '{}' is not a non-negative integer",
                    row.name,
                    row.calories
                );
                continue;
            }
        };

        let vegetarian = parse_or_absent::<bool>(&row.vegetarian.to_ascii_lowercase())
            .ok_or_else(|| CatalogError::InvalidDishError {
                name: row.name.clone(),
                reason: format!("vegetarian must be true or false, got '{}'", row.vegetarian),
            })?;

        let dish_type: DishType =
            row.dish_type
                .parse()
                .map_err(|_| CatalogError::InvalidDishError {
                    name: row.name.clone(),
                    reason: format!("unknown dish type '{}'", row.dish_type),
                })?;

        dishes.push(Dish::new(row.name, vegetarian, calories, dish_type));
    }

    Ok(Menu::new(dishes))
}

pub fn parse_json_menu(data: &[u8]) -> Result<Menu> {
    Ok(serde_json::from_slice(data)?)
}
