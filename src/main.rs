use clap::Parser;
use std::path::PathBuf;

use macroplan::cli::{parse_goal, parse_training_days, validate_adjustment, Cli, Command};
use macroplan::error::{PlanError, Result};
use macroplan::export::{write_csv, write_html, write_json};
use macroplan::interface::{collect_user_session, display_weekly_plan, prompt_yes_no};
use macroplan::models::{Goal, SnackChoices, UserProfile, UserSession, WeeklyPlan};
use macroplan::planner::{build_weekly_plan, derived_energy};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Wizard { html, csv, json } => cmd_wizard(ExportTargets { html, csv, json }),
        Command::Generate {
            age,
            height,
            weight,
            goal,
            adjustment,
            training_days,
            morning_snack,
            afternoon_snack,
            html,
            csv,
            json,
        } => cmd_generate(
            age,
            height,
            weight,
            &goal,
            adjustment,
            &training_days,
            morning_snack,
            afternoon_snack,
            ExportTargets { html, csv, json },
        ),
    }
}

/// Export destinations shared by both commands.
struct ExportTargets {
    html: Option<PathBuf>,
    csv: Option<PathBuf>,
    json: Option<PathBuf>,
}

impl ExportTargets {
    fn any(&self) -> bool {
        self.html.is_some() || self.csv.is_some() || self.json.is_some()
    }

    fn write_all(&self, plan: &WeeklyPlan) -> Result<()> {
        if let Some(path) = &self.html {
            write_html(plan, path)?;
            println!("Wrote HTML plan to {:?}", path);
        }

        if let Some(path) = &self.csv {
            write_csv(plan, path)?;
            println!("Wrote CSV plan to {:?}", path);
        }

        if let Some(path) = &self.json {
            write_json(plan, path)?;
            println!("Wrote JSON plan to {:?}", path);
        }

        Ok(())
    }
}

/// Run the interactive wizard and present the resulting plan.
fn cmd_wizard(exports: ExportTargets) -> Result<()> {
    let session = collect_user_session()?;
    let plan = build_weekly_plan(&session);

    display_weekly_plan(&plan);

    if exports.any() {
        exports.write_all(&plan)?;
    } else {
        let save = prompt_yes_no("Save the plan as an HTML document?", true)?;
        if save {
            let path = PathBuf::from("meal_plan.html");
            write_html(&plan, &path)?;
            println!("Wrote HTML plan to {:?}", path);
        }
    }

    Ok(())
}

/// Build a plan from flags, mirroring the wizard's validation gates.
fn cmd_generate(
    age: u32,
    height: f64,
    weight: f64,
    goal: &str,
    adjustment: f64,
    training_days: &str,
    morning_snack: bool,
    afternoon_snack: bool,
    exports: ExportTargets,
) -> Result<()> {
    let goal = parse_goal(goal)?;
    let training_days = parse_training_days(training_days)?;
    let adjustment = validate_adjustment(adjustment)?;

    let energy = derived_energy(age, height, weight).ok_or_else(|| {
        PlanError::InvalidInput("Age, height and weight must all be positive numbers".to_string())
    })?;

    // Maintain pins the target to TDEE regardless of the flag.
    let caloric_adjustment = if goal == Goal::Maintain {
        0.0
    } else {
        adjustment
    };

    let session = UserSession {
        profile: UserProfile::new(age, height, weight),
        energy,
        goal,
        caloric_adjustment,
        training_days,
        snacks: SnackChoices {
            mid_morning: morning_snack,
            mid_afternoon: afternoon_snack,
        },
    };

    let plan = build_weekly_plan(&session);
    display_weekly_plan(&plan);
    exports.write_all(&plan)?;

    Ok(())
}
