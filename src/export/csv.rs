use std::path::Path;

use crate::error::Result;
use crate::models::WeeklyPlan;

/// Write the plan as one CSV record per (day, meal).
///
/// Day totals repeat on every record so the file filters cleanly in a
/// spreadsheet.
pub fn write_csv(plan: &WeeklyPlan, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    // Write header
    wtr.write_record([
        "day",
        "day_type",
        "day_calories",
        "meal",
        "meal_calories",
        "protein_g",
        "carbs_g",
        "fat_g",
    ])?;

    // Write data rows
    for day in &plan.days {
        for meal in &day.meals {
            wtr.write_record([
                day.day.display_name().to_string(),
                day.day_type().to_string(),
                day.calories.to_string(),
                meal.name.display_name().to_string(),
                meal.calories.to_string(),
                meal.protein_g.to_string(),
                meal.carbs_g.to_string(),
                meal.fat_g.to_string(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
