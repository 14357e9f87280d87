use std::collections::BTreeSet;

use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::error::{PlanError, Result};
use crate::models::{
    ActivityLevel, DerivedEnergy, Goal, SnackChoices, UserProfile, UserSession, Weekday,
};
use crate::planner::constants::RATING_GOOD_MAX_RATIO;
use crate::planner::derived_energy;

/// Step 1: pick the training goal.
pub fn prompt_goal() -> Result<Goal> {
    let options: Vec<String> = Goal::ALL
        .iter()
        .map(|g| format!("{} ({})", g.display_name(), g.description()))
        .collect();

    let selection = Select::new()
        .with_prompt("What is your goal?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(Goal::ALL[selection])
}

/// Step 2: collect body metrics and echo the derived energy figures.
pub fn prompt_body_metrics() -> Result<(UserProfile, DerivedEnergy)> {
    let age = prompt_positive_u32("Age (years)")?;
    let height_cm = prompt_positive_f64("Height (cm)")?;
    let weight_kg = prompt_positive_f64("Weight (kg)")?;

    let profile = UserProfile::new(age, height_cm, weight_kg);
    let energy = derived_energy(age, height_cm, weight_kg)
        .ok_or_else(|| PlanError::InvalidInput("Body metrics must be positive".to_string()))?;

    println!();
    println!("Estimated BMR:  {} kcal/day", energy.bmr);
    println!(
        "Estimated TDEE: {} kcal/day ({} activity)",
        energy.tdee,
        ActivityLevel::default().display_name().to_lowercase()
    );
    println!();

    Ok((profile, energy))
}

/// Step 3: size of the daily surplus or deficit.
///
/// Skipped under Maintain, which pins calories to TDEE.
pub fn prompt_caloric_adjustment(goal: Goal, tdee: i32) -> Result<f64> {
    if goal == Goal::Maintain {
        println!("Maintenance holds calories at TDEE; no adjustment needed.");
        return Ok(0.0);
    }

    let sustainable_cap = (tdee as f64 * RATING_GOOD_MAX_RATIO).round() as i32;
    println!(
        "Tip: up to about {} kcal ({:.0}% of your TDEE) is usually sustainable.",
        sustainable_cap,
        RATING_GOOD_MAX_RATIO * 100.0
    );

    loop {
        let input: String = Input::new()
            .with_prompt(format!("Daily caloric {} (kcal)", goal.adjustment_noun()))
            .default("300".to_string())
            .interact_text()?;

        match input.trim().parse::<f64>() {
            Ok(value) if value >= 0.0 => return Ok(value),
            _ => println!("Please enter a non-negative number."),
        }
    }
}

/// Step 4: training days, at least one required.
pub fn prompt_training_days() -> Result<BTreeSet<Weekday>> {
    let names: Vec<&str> = Weekday::ALL.iter().map(|d| d.display_name()).collect();

    loop {
        let picked = MultiSelect::new()
            .with_prompt("Which days do you train? (space toggles, enter confirms)")
            .items(&names)
            .interact()?;

        if picked.is_empty() {
            println!("Select at least one training day.");
            continue;
        }

        return Ok(picked.into_iter().map(|i| Weekday::ALL[i]).collect());
    }
}

/// Step 5: optional snack slots.
pub fn prompt_snacks() -> Result<SnackChoices> {
    let mid_morning = Confirm::new()
        .with_prompt("Include a mid-morning snack?")
        .default(false)
        .interact()?;

    let mid_afternoon = Confirm::new()
        .with_prompt("Include a mid-afternoon snack?")
        .default(false)
        .interact()?;

    Ok(SnackChoices {
        mid_morning,
        mid_afternoon,
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Run all wizard steps and freeze the answers into a session.
pub fn collect_user_session() -> Result<UserSession> {
    let goal = prompt_goal()?;
    let (profile, energy) = prompt_body_metrics()?;
    let caloric_adjustment = prompt_caloric_adjustment(goal, energy.tdee)?;
    let training_days = prompt_training_days()?;
    let snacks = prompt_snacks()?;

    Ok(UserSession {
        profile,
        energy,
        goal,
        caloric_adjustment,
        training_days,
        snacks,
    })
}

fn prompt_positive_u32(prompt: &str) -> Result<u32> {
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;

        match input.trim().parse::<u32>() {
            Ok(value) if value > 0 => return Ok(value),
            _ => println!("Please enter a positive whole number."),
        }
    }
}

fn prompt_positive_f64(prompt: &str) -> Result<f64> {
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;

        match input.trim().parse::<f64>() {
            Ok(value) if value > 0.0 => return Ok(value),
            _ => println!("Please enter a positive number."),
        }
    }
}
