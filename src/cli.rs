use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::models::{Goal, Weekday};

/// macroplan: weekly calorie and macro planning from body metrics, goal,
/// and training schedule.
#[derive(Parser, Debug)]
#[command(name = "macroplan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the interactive planning wizard.
    Wizard {
        /// Write the plan as a self-contained HTML document.
        #[arg(long)]
        html: Option<PathBuf>,

        /// Write the plan as CSV, one row per day and meal.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Write the plan as pretty-printed JSON.
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Generate a plan non-interactively from flags.
    Generate {
        /// Age in years.
        #[arg(long)]
        age: u32,

        /// Height in centimeters.
        #[arg(long)]
        height: f64,

        /// Weight in kilograms.
        #[arg(long)]
        weight: f64,

        /// Training goal: bulk, maintain or cut.
        #[arg(long)]
        goal: String,

        /// Daily caloric surplus or deficit in kcal. Ignored for maintain.
        #[arg(long, default_value = "0")]
        adjustment: f64,

        /// Training days, comma-separated (e.g. "mon,wed,fri").
        #[arg(long)]
        training_days: String,

        /// Include a mid-morning snack.
        #[arg(long)]
        morning_snack: bool,

        /// Include a mid-afternoon snack.
        #[arg(long)]
        afternoon_snack: bool,

        /// Write the plan as a self-contained HTML document.
        #[arg(long)]
        html: Option<PathBuf>,

        /// Write the plan as CSV, one row per day and meal.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Write the plan as pretty-printed JSON.
        #[arg(long)]
        json: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Wizard {
            html: None,
            csv: None,
            json: None,
        }
    }
}

/// Parse a goal name, case-insensitive.
pub fn parse_goal(input: &str) -> Result<Goal> {
    let lower = input.trim().to_lowercase();

    if let Some(goal) = Goal::ALL
        .into_iter()
        .find(|g| g.display_name().to_lowercase() == lower)
    {
        return Ok(goal);
    }

    Err(PlanError::InvalidInput(match closest_goal(&lower) {
        Some(name) => format!("Unknown goal '{}'. Did you mean '{}'?", input.trim(), name),
        None => format!(
            "Unknown goal '{}'. Expected bulk, maintain or cut.",
            input.trim()
        ),
    }))
}

/// Parse a comma-separated list of weekday names.
///
/// Accepts full names or 3-letter abbreviations, case-insensitive, and
/// collapses duplicates. At least one day is required.
pub fn parse_training_days(input: &str) -> Result<BTreeSet<Weekday>> {
    let mut days = BTreeSet::new();

    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        match Weekday::from_name(part) {
            Some(day) => {
                days.insert(day);
            }
            None => {
                return Err(PlanError::InvalidInput(match closest_weekday(part) {
                    Some(name) => format!("Unknown day '{}'. Did you mean '{}'?", part, name),
                    None => format!("Unknown day '{}'", part),
                }));
            }
        }
    }

    if days.is_empty() {
        return Err(PlanError::NoTrainingDays);
    }

    Ok(days)
}

/// Gate the adjustment flag with the wizard's predicate: negative values
/// and NaN are rejected.
pub fn validate_adjustment(value: f64) -> Result<f64> {
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(PlanError::InvalidInput(
            "Adjustment must be a non-negative number".to_string(),
        ))
    }
}

fn closest_goal(lower: &str) -> Option<&'static str> {
    Goal::ALL
        .iter()
        .map(|g| {
            (
                g.display_name(),
                jaro_winkler(&g.display_name().to_lowercase(), lower),
            )
        })
        .filter(|(_, score)| *score > 0.7)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(name, _)| name)
}

fn closest_weekday(input: &str) -> Option<&'static str> {
    let lower = input.to_lowercase();

    Weekday::ALL
        .iter()
        .map(|d| {
            (
                d.display_name(),
                jaro_winkler(&d.display_name().to_lowercase(), &lower),
            )
        })
        .filter(|(_, score)| *score > 0.7)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(name, _)| name)
}
