use crate::adapters::{BuiltinMenu, FileMenuSource, MenuFormat};
use crate::config::OutputFormat;
use crate::core::request::MenuQuery;
use crate::domain::model::CaloricThresholds;
use crate::domain::ports::MenuSource;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, validate_positive_number,
    validate_required_field, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration of the `catalog-report` binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub catalog: CatalogSection,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub caloric_levels: CaloricThresholds,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub queries: Vec<NamedQuery>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Builtin,
    Csv,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(rename = "type", default)]
    pub kind: SourceKind,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedQuery {
    pub name: String,
    #[serde(flatten)]
    pub query: MenuQuery,
}

impl ReportConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn source(&self) -> Result<Box<dyn MenuSource>> {
        match self.source.kind {
            SourceKind::Builtin => Ok(Box::new(BuiltinMenu)),
            SourceKind::Csv => Ok(Box::new(FileMenuSource::new(
                validate_required_field("source.path", &self.source.path)?,
                MenuFormat::Csv,
            ))),
            SourceKind::Json => Ok(Box::new(FileMenuSource::new(
                validate_required_field("source.path", &self.source.path)?,
                MenuFormat::Json,
            ))),
        }
    }

    pub fn queries(&self) -> impl Iterator<Item = (&str, &MenuQuery)> {
        self.queries
            .iter()
            .map(|named| (named.name.as_str(), &named.query))
    }
}

impl Validate for ReportConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("catalog.name", &self.catalog.name)?;

        let extension = match self.source.kind {
            SourceKind::Builtin => None,
            SourceKind::Csv => Some("csv"),
            SourceKind::Json => Some("json"),
        };
        if let Some(extension) = extension {
            let path = validate_required_field("source.path", &self.source.path)?;
            validate_path("source.path", path)?;
            validate_file_extension("source.path", path, &[extension])?;
        }

        self.caloric_levels.validate()?;

        validate_positive_number("queries", self.queries.len(), 1)?;
        for named in &self.queries {
            validate_non_empty_string("queries.name", &named.name)?;
            named.query.validate()?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::request::{DishFilter, GroupKey};
    use crate::domain::model::DishType;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC: &str = r#"
[catalog]
name = "textbook menu"

[[queries]]
name = "low calorie names"
kind = "list"
sort_by_calories = true
limit = 3
names_only = true

[queries.filter]
calories_below = 400

[[queries]]
name = "by type"
kind = "group"
key = "type"
"#;

    #[test]
    fn test_parse_basic_config_with_defaults() {
        let config = ReportConfig::from_toml_str(BASIC).unwrap();

        assert_eq!(config.catalog.name, "textbook menu");
        assert_eq!(config.source.kind, SourceKind::Builtin);
        assert_eq!(config.caloric_levels, CaloricThresholds::default());
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.queries.len(), 2);
        assert_eq!(
            config.queries[0].query,
            MenuQuery::List {
                filter: DishFilter {
                    calories_below: Some(400),
                    ..DishFilter::default()
                },
                sort_by_calories: true,
                limit: Some(3),
                names_only: true,
            }
        );
        assert_eq!(
            config.queries[1].query,
            MenuQuery::Group {
                key: GroupKey::Type,
                filter: DishFilter::default(),
            }
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[catalog]
name = "fish only"
description = "file based"

[source]
type = "json"
path = "./menu.json"

[caloric_levels]
diet_max = 300
normal_max = 600

[output]
format = "json"

[[queries]]
name = "fish"
kind = "summary"

[queries.filter]
type = "FISH"
"#;
        let config = ReportConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.kind, SourceKind::Json);
        assert_eq!(config.caloric_levels.diet_max, 300);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(
            config.queries[0].query,
            MenuQuery::Summary {
                filter: DishFilter {
                    dish_type: Some(DishType::Fish),
                    ..DishFilter::default()
                }
            }
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("MENU_CATALOG_TEST_DIR", "/srv/menus");

        let toml_content = r#"
[catalog]
name = "env"

[source]
type = "csv"
path = "${MENU_CATALOG_TEST_DIR}/menu.csv"

[[queries]]
name = "all"
kind = "list"
"#;

        let config = ReportConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.path.as_deref(), Some("/srv/menus/menu.csv"));

        std::env::remove_var("MENU_CATALOG_TEST_DIR");
    }

    #[test]
    fn test_unknown_env_var_is_left_verbatim() {
        let toml_content = r#"
[catalog]
name = "${MENU_CATALOG_SURELY_UNSET_VAR}"

[[queries]]
name = "all"
kind = "list"
"#;
        let config = ReportConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.catalog.name, "${MENU_CATALOG_SURELY_UNSET_VAR}");
    }

    #[test]
    fn test_file_source_requires_path() {
        let toml_content = r#"
[catalog]
name = "missing path"

[source]
type = "csv"

[[queries]]
name = "all"
kind = "list"
"#;
        let config = ReportConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(CatalogError::MissingConfigError { .. })
        ));
        assert!(config.source().is_err());
    }

    #[test]
    fn test_config_without_queries_is_invalid() {
        let config = ReportConfig::from_toml_str("[catalog]\nname = \"empty\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_query_kind_fails_parsing() {
        let toml_content = r#"
[catalog]
name = "bad"

[[queries]]
name = "x"
kind = "sort"
"#;
        assert!(matches!(
            ReportConfig::from_toml_str(toml_content),
            Err(CatalogError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC.as_bytes()).unwrap();

        let config = ReportConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.catalog.name, "textbook menu");
    }
}
