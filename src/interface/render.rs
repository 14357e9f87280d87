use crate::models::{ActivityLevel, Goal, WeeklyPlan};

/// Display a weekly plan as a formatted terminal report.
///
/// Formatting only; every number shown was fixed by the builder.
pub fn display_weekly_plan(plan: &WeeklyPlan) {
    println!();
    println!("=== Weekly Meal Plan ===");
    println!();

    println!(
        "Profile: {} years, {:.0} cm, {:.1} kg",
        plan.profile.age, plan.profile.height_cm, plan.profile.weight_kg
    );
    println!("BMR:     {} kcal/day", plan.energy.bmr);
    println!(
        "TDEE:    {} kcal/day ({} activity)",
        plan.energy.tdee,
        ActivityLevel::default().display_name().to_lowercase()
    );

    match plan.goal {
        Goal::Maintain => println!("Goal:    Maintain"),
        _ => println!(
            "Goal:    {} ({:.0} kcal daily {})",
            plan.goal.display_name(),
            plan.caloric_adjustment,
            plan.goal.adjustment_noun()
        ),
    }

    println!(
        "Rating:  {} [{}]",
        plan.calorie_rating.label, plan.calorie_rating.color_tag
    );
    println!("         {}", plan.calorie_rating.description);
    println!(
        "Macros:  {:.0}% protein / {:.0}% carbs / {:.0}% fat",
        plan.macro_split.protein_pct, plan.macro_split.carbs_pct, plan.macro_split.fat_pct
    );

    // Find max meal name length for alignment; layouts match across days
    let name_width = plan
        .days
        .first()
        .map(|d| {
            d.meals
                .iter()
                .map(|m| m.name.display_name().len())
                .max()
                .unwrap_or(9)
        })
        .unwrap_or(9);

    for day in &plan.days {
        println!();
        println!(
            "--- {} ({}) | {} kcal ---",
            day.day.display_name(),
            day.day_type(),
            day.calories
        );

        for meal in &day.meals {
            println!(
                "  {:<width$} {:>5} kcal | P {:>3} g | C {:>3} g | F {:>3} g",
                meal.name.display_name(),
                meal.calories,
                meal.protein_g,
                meal.carbs_g,
                meal.fat_g,
                width = name_width
            );
        }
    }

    println!();
    println!("--- Daily Average ---");
    println!(
        "{} kcal | P {} g | C {} g | F {} g",
        plan.template.calories, plan.template.protein_g, plan.template.carbs_g, plan.template.fat_g
    );

    for meal in &plan.template.meals {
        println!(
            "  {:<width$} P {:>3} g | C {:>3} g | F {:>3} g",
            meal.name.display_name(),
            meal.protein_g,
            meal.carbs_g,
            meal.fat_g,
            width = name_width
        );
    }

    println!();
}
