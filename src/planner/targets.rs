use crate::models::{CalorieRating, Goal, RatingLevel};
use crate::planner::constants::{RATING_GOOD_MAX_RATIO, RATING_MEDIUM_MAX_RATIO};

/// Base daily calorie target before day-type multipliers.
///
/// Bulk adds the adjustment, Cut subtracts it, Maintain ignores it.
/// The result stays unrounded; rounding happens per day.
pub fn base_calories(tdee: i32, goal: Goal, adjustment: f64) -> f64 {
    match goal {
        Goal::Bulk => tdee as f64 + adjustment,
        Goal::Cut => tdee as f64 - adjustment,
        Goal::Maintain => tdee as f64,
    }
}

/// Rate the adjustment size relative to TDEE.
///
/// Maintain is always Neutral. Otherwise the adjustment/TDEE ratio is
/// banded at 15% (Good) and 25% (Medium), High above that. The ratio is
/// forced to zero when the adjustment or the TDEE is non-positive.
pub fn calorie_rating(goal: Goal, adjustment: f64, tdee: i32) -> CalorieRating {
    if goal == Goal::Maintain {
        return CalorieRating::new(
            RatingLevel::Neutral,
            "Maintenance".to_string(),
            "Calories held at your estimated daily energy use.".to_string(),
        );
    }

    let ratio = if adjustment <= 0.0 || tdee <= 0 {
        0.0
    } else {
        adjustment / tdee as f64
    };

    let noun = goal.adjustment_noun();
    let good_pct = RATING_GOOD_MAX_RATIO * 100.0;
    let medium_pct = RATING_MEDIUM_MAX_RATIO * 100.0;

    let (level, label, description) = if ratio <= RATING_GOOD_MAX_RATIO {
        (
            RatingLevel::Good,
            format!("Sustainable {}", noun),
            format!(
                "Within {:.0}% of daily energy use. A pace most people can hold.",
                good_pct
            ),
        )
    } else if ratio <= RATING_MEDIUM_MAX_RATIO {
        (
            RatingLevel::Medium,
            format!("Aggressive {}", noun),
            format!(
                "Between {:.0}% and {:.0}% of daily energy use. Expect faster swings in weight and energy.",
                good_pct, medium_pct
            ),
        )
    } else {
        (
            RatingLevel::High,
            format!("Very aggressive {}", noun),
            format!(
                "More than {:.0}% of daily energy use. Hard to sustain; consider a smaller {}.",
                medium_pct, noun
            ),
        )
    };

    CalorieRating::new(level, label, description)
}
