use crate::config::OutputFormat;
use crate::core::request::{DishFilter, GroupKey, MenuQuery};
use crate::domain::model::{CaloricThresholds, DishType};
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "menu-catalog")]
#[command(about = "Query a menu catalog: filter, group, partition and summarize dishes")]
pub struct CliConfig {
    /// Menu file (.csv or .json); the built-in menu is used when omitted
    #[arg(long, global = true)]
    pub menu: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Highest calorie count still classified as DIET
    #[arg(long, default_value_t = 400, global = true)]
    pub diet_max: u32,

    /// Highest calorie count still classified as NORMAL
    #[arg(long, default_value_t = 700, global = true)]
    pub normal_max: u32,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List matching dishes
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Sort by calories, lowest first
        #[arg(long)]
        sort: bool,

        #[arg(long)]
        limit: Option<usize>,

        /// Print dish names only
        #[arg(long)]
        names: bool,
    },
    /// Group matching dishes by a key
    Group {
        #[arg(long, value_enum, default_value_t = GroupKey::Type)]
        by: GroupKey,

        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Split the menu into dishes that match the filter and those that don't
    Partition {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Calorie statistics of matching dishes
    Summary {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Distinct dish tags per group
    Tags {
        #[arg(long, value_enum, default_value_t = GroupKey::Type)]
        by: GroupKey,
    },
    /// Convert text to an integer; prints nothing when the text is not one
    ParseInt {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    #[arg(long)]
    pub vegetarian: Option<bool>,

    #[arg(long = "type", value_enum)]
    pub dish_type: Option<DishType>,

    /// Keep dishes with strictly fewer calories
    #[arg(long)]
    pub calories_below: Option<u32>,

    /// Keep dishes with strictly more calories
    #[arg(long)]
    pub calories_above: Option<u32>,
}

impl From<&FilterArgs> for DishFilter {
    fn from(args: &FilterArgs) -> Self {
        DishFilter {
            vegetarian: args.vegetarian,
            dish_type: args.dish_type,
            calories_below: args.calories_below,
            calories_above: args.calories_above,
        }
    }
}

impl CliConfig {
    pub fn thresholds(&self) -> CaloricThresholds {
        CaloricThresholds {
            diet_max: self.diet_max,
            normal_max: self.normal_max,
        }
    }

    /// The catalog query for the chosen subcommand; `None` for commands that
    /// do not touch the catalog.
    pub fn query(&self) -> Option<MenuQuery> {
        match &self.command {
            Command::List {
                filter,
                sort,
                limit,
                names,
            } => Some(MenuQuery::List {
                filter: filter.into(),
                sort_by_calories: *sort,
                limit: *limit,
                names_only: *names,
            }),
            Command::Group { by, filter } => Some(MenuQuery::Group {
                key: *by,
                filter: filter.into(),
            }),
            Command::Partition { filter } => Some(MenuQuery::Partition {
                filter: filter.into(),
            }),
            Command::Summary { filter } => Some(MenuQuery::Summary {
                filter: filter.into(),
            }),
            Command::Tags { by } => Some(MenuQuery::Tags { key: *by }),
            Command::ParseInt { .. } => None,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(menu) = &self.menu {
            validate_path("menu", menu)?;
            validate_file_extension("menu", menu, &["csv", "json"])?;
        }
        self.thresholds().validate()?;
        match self.query() {
            Some(query) => query.validate(),
            None => Ok(()),
        }
    }
}
