pub mod constants;
pub mod energy;
pub mod meals;
pub mod targets;
pub mod weekly;

pub use constants::*;
pub use energy::{basal_metabolic_rate, derived_energy, total_daily_energy};
pub use meals::{meal_slots, MealSlot};
pub use targets::{base_calories, calorie_rating};
pub use weekly::build_weekly_plan;
