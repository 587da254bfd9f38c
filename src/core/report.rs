use crate::core::collectors::CalorieSummary;
use crate::domain::model::Dish;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::Write;

/// Owned result of a `MenuQuery`, detached from the catalog it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "result", rename_all = "snake_case")]
pub enum QueryOutput {
    Dishes(Vec<Dish>),
    Names(Vec<String>),
    Groups(IndexMap<String, Vec<Dish>>),
    Partition {
        matching: Vec<Dish>,
        non_matching: Vec<Dish>,
    },
    Summary(CalorieSummary),
    Tags(IndexMap<String, BTreeSet<String>>),
}

impl QueryOutput {
    /// Number of dishes (or names, groups, tag buckets) in the result.
    pub fn len(&self) -> usize {
        match self {
            QueryOutput::Dishes(dishes) => dishes.len(),
            QueryOutput::Names(names) => names.len(),
            QueryOutput::Groups(groups) => groups.len(),
            QueryOutput::Partition {
                matching,
                non_matching,
            } => matching.len() + non_matching.len(),
            QueryOutput::Summary(summary) => summary.count,
            QueryOutput::Tags(tags) => tags.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        match self {
            QueryOutput::Dishes(dishes) => {
                for dish in dishes {
                    let _ = writeln!(out, "{}", dish_line(dish));
                }
            }
            QueryOutput::Names(names) => {
                for name in names {
                    let _ = writeln!(out, "{}", name);
                }
            }
            QueryOutput::Groups(groups) => {
                for (label, dishes) in groups {
                    let _ = writeln!(out, "{} ({}):", label, dishes.len());
                    for dish in dishes {
                        let _ = writeln!(out, "  {}", dish_line(dish));
                    }
                }
            }
            QueryOutput::Partition {
                matching,
                non_matching,
            } => {
                for (label, dishes) in [("matching", matching), ("non-matching", non_matching)] {
                    let _ = writeln!(out, "{} ({}):", label, dishes.len());
                    for dish in dishes {
                        let _ = writeln!(out, "  {}", dish_line(dish));
                    }
                }
            }
            QueryOutput::Summary(summary) => {
                let _ = writeln!(
                    out,
                    "count={} sum={} min={} max={} average={:.2}",
                    summary.count,
                    summary.sum,
                    optional(summary.min),
                    optional(summary.max),
                    summary.average
                );
            }
            QueryOutput::Tags(tags) => {
                for (label, set) in tags {
                    let joined: Vec<&str> = set.iter().map(String::as_str).collect();
                    let _ = writeln!(out, "{}: {}", label, joined.join(", "));
                }
            }
        }
        out
    }
}

fn dish_line(dish: &Dish) -> String {
    format!(
        "{:<14} {:>5} kcal  {:<5}{}",
        dish.name(),
        dish.calories(),
        dish.dish_type(),
        if dish.is_vegetarian() { "  (v)" } else { "" }
    )
}

fn optional(value: Option<u32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
