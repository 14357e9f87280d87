use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{DailyTemplate, DayPlan, Goal, WeeklyPlan};

const STYLES: &str = "\
body { font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; margin: 2rem auto; max-width: 46rem; color: #222; }
h1 { border-bottom: 2px solid #444; padding-bottom: 0.3rem; }
h2 { margin-top: 1.6rem; }
table { border-collapse: collapse; width: 100%; margin: 0.5rem 0 1rem; }
th, td { border: 1px solid #ccc; padding: 0.35rem 0.6rem; text-align: right; }
th:first-child, td:first-child { text-align: left; }
thead { background: #f2f2f2; }
.stats { display: flex; gap: 1.5rem; flex-wrap: wrap; margin: 1rem 0; }
.stat .label { display: block; font-size: 0.8rem; color: #666; }
.stat .value { font-size: 1.2rem; font-weight: 600; }
.rating { padding: 0.6rem 0.9rem; border-radius: 4px; color: #fff; margin: 1rem 0; }
.rating.green { background: #2e7d32; }
.rating.yellow { background: #f9a825; }
.rating.red { background: #c62828; }
.rating.neutral { background: #546e7a; }
.explain { background: #f7f7f7; border: 1px solid #e0e0e0; border-radius: 4px; padding: 0.6rem 0.9rem; margin: 1rem 0; font-size: 0.85rem; color: #444; }
.explain p { margin: 0.2rem 0; }
.tag { font-size: 0.8rem; color: #666; }
";

/// Write the plan as a single self-contained HTML document.
pub fn write_html(plan: &WeeklyPlan, path: &Path) -> Result<()> {
    fs::write(path, render_document(plan))?;
    Ok(())
}

fn render_document(plan: &WeeklyPlan) -> String {
    let mut doc = String::new();

    doc.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    doc.push_str("<title>Weekly Meal Plan</title>\n");
    doc.push_str("<style>\n");
    doc.push_str(STYLES);
    doc.push_str("</style>\n</head>\n<body>\n");

    doc.push_str("<h1>Weekly Meal Plan</h1>\n");

    doc.push_str("<div class=\"stats\">\n");
    push_stat(&mut doc, "Age", &format!("{} years", plan.profile.age));
    push_stat(&mut doc, "Height", &format!("{:.0} cm", plan.profile.height_cm));
    push_stat(&mut doc, "Weight", &format!("{:.1} kg", plan.profile.weight_kg));
    push_stat(&mut doc, "BMR", &format!("{} kcal", plan.energy.bmr));
    push_stat(&mut doc, "TDEE", &format!("{} kcal", plan.energy.tdee));
    doc.push_str("</div>\n");

    doc.push_str("<div class=\"explain\">\n");
    doc.push_str("<strong>Understanding your numbers</strong>\n");
    doc.push_str("<p>BMR (Basal Metabolic Rate): the calories your body burns at rest to keep basic functions like breathing and circulation running.</p>\n");
    doc.push_str("<p>TDEE (Total Daily Energy Expenditure): the total calories you burn per day, including all physical activity and training.</p>\n");
    doc.push_str("</div>\n");

    let goal_line = match plan.goal {
        Goal::Maintain => "Maintain".to_string(),
        _ => format!(
            "{} ({:.0} kcal daily {})",
            plan.goal.display_name(),
            plan.caloric_adjustment,
            plan.goal.adjustment_noun()
        ),
    };
    doc.push_str(&format!(
        "<p>Goal: <strong>{}</strong><br>\nMacro split: {:.0}% protein / {:.0}% carbs / {:.0}% fat</p>\n",
        goal_line,
        plan.macro_split.protein_pct,
        plan.macro_split.carbs_pct,
        plan.macro_split.fat_pct
    ));

    doc.push_str(&format!(
        "<div class=\"rating {}\"><strong>{}</strong><br>{}</div>\n",
        plan.calorie_rating.color_tag, plan.calorie_rating.label, plan.calorie_rating.description
    ));

    for day in &plan.days {
        push_day(&mut doc, day);
    }

    push_template(&mut doc, &plan.template);

    doc.push_str("</body>\n</html>\n");
    doc
}

fn push_stat(doc: &mut String, label: &str, value: &str) {
    doc.push_str(&format!(
        "<div class=\"stat\"><span class=\"label\">{}</span><span class=\"value\">{}</span></div>\n",
        label, value
    ));
}

fn push_day(doc: &mut String, day: &DayPlan) {
    doc.push_str(&format!(
        "<h2>{} <span class=\"tag\">({}, {} kcal)</span></h2>\n",
        day.day.display_name(),
        day.day_type(),
        day.calories
    ));

    doc.push_str("<table>\n<thead><tr><th>Meal</th><th>Calories</th><th>Protein (g)</th><th>Carbs (g)</th><th>Fat (g)</th></tr></thead>\n<tbody>\n");
    for meal in &day.meals {
        doc.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            meal.name.display_name(),
            meal.calories,
            meal.protein_g,
            meal.carbs_g,
            meal.fat_g
        ));
    }
    doc.push_str("</tbody>\n</table>\n");
}

fn push_template(doc: &mut String, template: &DailyTemplate) {
    doc.push_str("<h2>Daily Average</h2>\n");
    doc.push_str(&format!(
        "<p>{} kcal | {} g protein | {} g carbs | {} g fat</p>\n",
        template.calories, template.protein_g, template.carbs_g, template.fat_g
    ));

    doc.push_str("<table>\n<thead><tr><th>Meal</th><th>Protein (g)</th><th>Carbs (g)</th><th>Fat (g)</th></tr></thead>\n<tbody>\n");
    for meal in &template.meals {
        doc.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            meal.name.display_name(),
            meal.protein_g,
            meal.carbs_g,
            meal.fat_g
        ));
    }
    doc.push_str("</tbody>\n</table>\n");
}
