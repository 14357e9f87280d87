use std::collections::BTreeSet;
use std::fs;

use tempfile::NamedTempFile;

use macroplan::export::{write_csv, write_html, write_json};
use macroplan::models::{Goal, SnackChoices, UserProfile, UserSession, Weekday, WeeklyPlan};
use macroplan::planner::{build_weekly_plan, derived_energy};

fn reference_plan() -> WeeklyPlan {
    let energy = derived_energy(30, 180.0, 80.0).expect("metrics are positive");

    let mut training_days = BTreeSet::new();
    training_days.insert(Weekday::Monday);
    training_days.insert(Weekday::Wednesday);
    training_days.insert(Weekday::Friday);

    build_weekly_plan(&UserSession {
        profile: UserProfile::new(30, 180.0, 80.0),
        energy,
        goal: Goal::Cut,
        caloric_adjustment: 300.0,
        training_days,
        snacks: SnackChoices::default(),
    })
}

#[test]
fn test_html_export_contains_full_report() {
    let plan = reference_plan();
    let file = NamedTempFile::new().unwrap();

    write_html(&plan, file.path()).unwrap();
    let doc = fs::read_to_string(file.path()).unwrap();

    for day in Weekday::ALL {
        assert!(doc.contains(day.display_name()), "{:?} missing", day);
    }

    // Day totals for both day types, the rating banner, and the template
    assert!(doc.contains("2563"));
    assert!(doc.contains("2214"));
    assert!(doc.contains("class=\"rating green\""));
    assert!(doc.contains("Sustainable deficit"));
    assert!(doc.contains("Daily Average"));
    assert!(doc.contains("2364 kcal"));
    assert!(doc.contains("Breakfast"));
    assert!(doc.contains("Basal Metabolic Rate"));
}

#[test]
fn test_csv_export_rows() {
    let plan = reference_plan();
    let file = NamedTempFile::new().unwrap();

    write_csv(&plan, file.path()).unwrap();
    let content = fs::read_to_string(file.path()).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines.len(), 1 + 21, "header plus 7 days x 3 meals");
    assert_eq!(
        lines[0],
        "day,day_type,day_calories,meal,meal_calories,protein_g,carbs_g,fat_g"
    );
    assert_eq!(lines[1], "Monday,Training,2563,Breakfast,769,67,87,17");
    assert_eq!(lines[2], "Monday,Training,2563,Lunch,1025,90,115,23");
    assert_eq!(lines[4], "Tuesday,Rest,2214,Breakfast,664,58,75,15");
}

#[test]
fn test_json_export_matches_plan() {
    let plan = reference_plan();
    let file = NamedTempFile::new().unwrap();

    write_json(&plan, file.path()).unwrap();
    let content = fs::read_to_string(file.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();

    assert_eq!(value["profile"]["age"], 30);
    assert_eq!(value["energy"]["bmr"], 1697);
    assert_eq!(value["energy"]["tdee"], 2630);
    assert_eq!(value["goal"], "Cut");
    assert_eq!(value["macro_split"]["protein_pct"], 35.0);
    assert_eq!(value["calorie_rating"]["level"], "Good");
    assert_eq!(value["calorie_rating"]["color_tag"], "green");

    let days = value["days"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days[0]["calories"], plan.days[0].calories);
    assert_eq!(days[0]["meals"][1]["name"], "Lunch");
    assert_eq!(days[0]["meals"][1]["protein_g"], 90);

    assert_eq!(value["template"]["calories"], plan.template.calories);
    assert_eq!(
        value["template"]["meals"].as_array().unwrap().len(),
        plan.template.meals.len()
    );
}
