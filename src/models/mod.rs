mod plan;
mod session;

pub use plan::{
    CalorieRating, DailyTemplate, DayPlan, Meal, MealName, RatingLevel, TemplateMeal, WeeklyPlan,
};
pub use session::{
    ActivityLevel, DerivedEnergy, Goal, MacroSplit, SnackChoices, UserProfile, UserSession, Weekday,
};
