use serde::Serialize;

use crate::models::session::{DerivedEnergy, Goal, MacroSplit, UserProfile, Weekday};

/// Display name of a meal slot.
///
/// Both snack slots share the `Snack` name; slot identity within a day is
/// the position in the meal list, never the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MealName {
    Breakfast,
    Snack,
    Lunch,
    Dinner,
}

impl MealName {
    pub fn display_name(&self) -> &'static str {
        match self {
            MealName::Breakfast => "Breakfast",
            MealName::Snack => "Snack",
            MealName::Lunch => "Lunch",
            MealName::Dinner => "Dinner",
        }
    }
}

/// One meal row of a day plan. Every quantity is independently rounded.
#[derive(Debug, Clone, Serialize)]
pub struct Meal {
    pub name: MealName,
    pub calories: i32,
    pub protein_g: i32,
    pub carbs_g: i32,
    pub fat_g: i32,
}

impl Meal {
    pub fn new(name: MealName, calories: i32, protein_g: i32, carbs_g: i32, fat_g: i32) -> Self {
        Self {
            name,
            calories,
            protein_g,
            carbs_g,
            fat_g,
        }
    }
}

/// Full breakdown for one day of the week.
#[derive(Debug, Clone, Serialize)]
pub struct DayPlan {
    pub day: Weekday,
    pub is_training_day: bool,

    /// Total calories for the day, rounded before any meal is derived.
    pub calories: i32,

    pub meals: Vec<Meal>,
}

impl DayPlan {
    pub fn day_type(&self) -> &'static str {
        if self.is_training_day {
            "Training"
        } else {
            "Rest"
        }
    }
}

/// Averaged macro figures for one meal slot across the week.
///
/// Carries no calorie figure; only the day-level average is reported.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateMeal {
    pub name: MealName,
    pub protein_g: i32,
    pub carbs_g: i32,
    pub fat_g: i32,
}

/// Weekly averages: overall daily figures plus one entry per meal slot.
#[derive(Debug, Clone, Serialize)]
pub struct DailyTemplate {
    pub calories: i32,
    pub protein_g: i32,
    pub carbs_g: i32,
    pub fat_g: i32,
    pub meals: Vec<TemplateMeal>,
}

/// Qualitative band for the caloric adjustment relative to TDEE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RatingLevel {
    Neutral,
    Good,
    Medium,
    High,
}

impl RatingLevel {
    /// Presentation color tag for this band.
    pub fn color_tag(&self) -> &'static str {
        match self {
            RatingLevel::Neutral => "neutral",
            RatingLevel::Good => "green",
            RatingLevel::Medium => "yellow",
            RatingLevel::High => "red",
        }
    }
}

/// Qualitative rating of the chosen caloric adjustment.
#[derive(Debug, Clone, Serialize)]
pub struct CalorieRating {
    pub level: RatingLevel,
    pub label: String,
    pub description: String,
    pub color_tag: &'static str,
}

impl CalorieRating {
    pub fn new(level: RatingLevel, label: String, description: String) -> Self {
        Self {
            level,
            label,
            description,
            color_tag: level.color_tag(),
        }
    }
}

/// The complete weekly plan handed to presenters. Presenters only format;
/// every number in here is final.
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyPlan {
    pub profile: UserProfile,
    pub energy: DerivedEnergy,
    pub goal: Goal,
    pub caloric_adjustment: f64,
    pub macro_split: MacroSplit,
    pub calorie_rating: CalorieRating,

    /// Exactly seven entries, Monday through Sunday.
    pub days: Vec<DayPlan>,

    pub template: DailyTemplate,
}
