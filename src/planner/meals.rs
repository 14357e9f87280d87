use crate::models::{MealName, SnackChoices};
use crate::planner::constants::SNACK_SHARE;

/// One slot of the daily meal layout: a display name and the share of the
/// day's calories it receives.
#[derive(Debug, Clone, Copy)]
pub struct MealSlot {
    pub name: MealName,
    pub calorie_share: f64,
}

impl MealSlot {
    fn new(name: MealName, calorie_share: f64) -> Self {
        Self {
            name,
            calorie_share,
        }
    }
}

/// Daily meal layout for a snack configuration.
///
/// Four fixed cases, each summing to exactly 1.0. Breakfast drops to 0.25
/// whenever the mid-morning snack is on, Dinner drops to 0.25 whenever the
/// mid-afternoon snack is on, and Lunch absorbs the rest. The two snack
/// slots share a display name; downstream aggregation keys on position.
pub fn meal_slots(snacks: SnackChoices) -> Vec<MealSlot> {
    match (snacks.mid_morning, snacks.mid_afternoon) {
        (false, false) => vec![
            MealSlot::new(MealName::Breakfast, 0.30),
            MealSlot::new(MealName::Lunch, 0.40),
            MealSlot::new(MealName::Dinner, 0.30),
        ],
        (true, false) => vec![
            MealSlot::new(MealName::Breakfast, 0.25),
            MealSlot::new(MealName::Snack, SNACK_SHARE),
            MealSlot::new(MealName::Lunch, 0.35),
            MealSlot::new(MealName::Dinner, 0.30),
        ],
        (false, true) => vec![
            MealSlot::new(MealName::Breakfast, 0.30),
            MealSlot::new(MealName::Lunch, 0.35),
            MealSlot::new(MealName::Snack, SNACK_SHARE),
            MealSlot::new(MealName::Dinner, 0.25),
        ],
        (true, true) => vec![
            MealSlot::new(MealName::Breakfast, 0.25),
            MealSlot::new(MealName::Snack, SNACK_SHARE),
            MealSlot::new(MealName::Lunch, 0.30),
            MealSlot::new(MealName::Snack, SNACK_SHARE),
            MealSlot::new(MealName::Dinner, 0.25),
        ],
    }
}
