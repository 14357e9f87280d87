use crate::models::{DailyTemplate, DayPlan, Meal, TemplateMeal, UserSession, Weekday, WeeklyPlan};
use crate::planner::constants::{
    DAYS_PER_WEEK, KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
    REST_DAY_MULTIPLIER, TRAINING_DAY_MULTIPLIER,
};
use crate::planner::meals::{meal_slots, MealSlot};
use crate::planner::targets::{base_calories, calorie_rating};

/// Build the full weekly plan from a frozen session.
///
/// Seven days in canonical Monday-first order. Each day total is rounded
/// before anything else is derived from it; per-meal values then round
/// independently, so meal rows may drift from the day total by a few
/// units. The caller guarantees at least one training day.
pub fn build_weekly_plan(session: &UserSession) -> WeeklyPlan {
    debug_assert!(
        !session.training_days.is_empty(),
        "session must carry at least one training day"
    );

    let split = session.goal.macro_split();
    let base = base_calories(
        session.energy.tdee,
        session.goal,
        session.caloric_adjustment,
    );
    let slots = meal_slots(session.snacks);
    let rating = calorie_rating(
        session.goal,
        session.caloric_adjustment,
        session.energy.tdee,
    );

    let mut days = Vec::with_capacity(DAYS_PER_WEEK);
    for day in Weekday::ALL {
        let is_training_day = session.training_days.contains(&day);
        let multiplier = if is_training_day {
            TRAINING_DAY_MULTIPLIER
        } else {
            REST_DAY_MULTIPLIER
        };

        let day_calories = (base * multiplier).round() as i32;

        // Unrounded gram pools, derived from the already-rounded day total.
        let protein_pool =
            day_calories as f64 * split.protein_pct / 100.0 / KCAL_PER_GRAM_PROTEIN;
        let carbs_pool = day_calories as f64 * split.carbs_pct / 100.0 / KCAL_PER_GRAM_CARBS;
        let fat_pool = day_calories as f64 * split.fat_pct / 100.0 / KCAL_PER_GRAM_FAT;

        let meals = slots
            .iter()
            .map(|slot| {
                Meal::new(
                    slot.name,
                    (day_calories as f64 * slot.calorie_share).round() as i32,
                    (protein_pool * slot.calorie_share).round() as i32,
                    (carbs_pool * slot.calorie_share).round() as i32,
                    (fat_pool * slot.calorie_share).round() as i32,
                )
            })
            .collect();

        days.push(DayPlan {
            day,
            is_training_day,
            calories: day_calories,
            meals,
        });
    }

    let template = daily_template(&days, &slots);

    WeeklyPlan {
        profile: session.profile,
        energy: session.energy,
        goal: session.goal,
        caloric_adjustment: session.caloric_adjustment,
        macro_split: split,
        calorie_rating: rating,
        days,
        template,
    }
}

/// Average the rounded per-day figures into one representative day.
///
/// Slot averages are keyed by position in the meal list, so the two Snack
/// slots of a both-snacks layout stay separate.
fn daily_template(days: &[DayPlan], slots: &[MealSlot]) -> DailyTemplate {
    let n = days.len() as f64;

    let calories = (days.iter().map(|d| d.calories).sum::<i32>() as f64 / n).round() as i32;

    let protein_total: i32 = days.iter().flat_map(|d| &d.meals).map(|m| m.protein_g).sum();
    let carbs_total: i32 = days.iter().flat_map(|d| &d.meals).map(|m| m.carbs_g).sum();
    let fat_total: i32 = days.iter().flat_map(|d| &d.meals).map(|m| m.fat_g).sum();

    let meals = slots
        .iter()
        .enumerate()
        .map(|(idx, slot)| {
            let protein: i32 = days.iter().map(|d| d.meals[idx].protein_g).sum();
            let carbs: i32 = days.iter().map(|d| d.meals[idx].carbs_g).sum();
            let fat: i32 = days.iter().map(|d| d.meals[idx].fat_g).sum();

            TemplateMeal {
                name: slot.name,
                protein_g: (protein as f64 / n).round() as i32,
                carbs_g: (carbs as f64 / n).round() as i32,
                fat_g: (fat as f64 / n).round() as i32,
            }
        })
        .collect();

    DailyTemplate {
        calories,
        protein_g: (protein_total as f64 / n).round() as i32,
        carbs_g: (carbs_total as f64 / n).round() as i32,
        fat_g: (fat_total as f64 / n).round() as i32,
        meals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use crate::models::{DerivedEnergy, Goal, MealName, SnackChoices, UserProfile};

    fn sample_session(goal: Goal, adjustment: f64, snacks: SnackChoices) -> UserSession {
        let mut training_days = BTreeSet::new();
        training_days.insert(Weekday::Monday);
        training_days.insert(Weekday::Thursday);

        UserSession {
            profile: UserProfile::new(30, 180.0, 80.0),
            energy: DerivedEnergy {
                bmr: 1697,
                tdee: 2630,
            },
            goal,
            caloric_adjustment: adjustment,
            training_days,
            snacks,
        }
    }

    #[test]
    fn test_always_seven_days_in_order() {
        let plan = build_weekly_plan(&sample_session(Goal::Maintain, 0.0, SnackChoices::default()));
        assert_eq!(plan.days.len(), 7);
        let order: Vec<Weekday> = plan.days.iter().map(|d| d.day).collect();
        assert_eq!(order, Weekday::ALL.to_vec());
    }

    #[test]
    fn test_training_flags_follow_selection() {
        let plan = build_weekly_plan(&sample_session(Goal::Maintain, 0.0, SnackChoices::default()));
        for day in &plan.days {
            let expected = day.day == Weekday::Monday || day.day == Weekday::Thursday;
            assert_eq!(day.is_training_day, expected, "{:?}", day.day);
        }
    }

    #[test]
    fn test_day_calories_use_type_multiplier() {
        // Maintain at TDEE 2630: training 2893, rest 2498.5 rounded up
        let plan = build_weekly_plan(&sample_session(Goal::Maintain, 0.0, SnackChoices::default()));
        assert_eq!(plan.days[0].calories, 2893);
        assert_eq!(plan.days[1].calories, 2499);
    }

    #[test]
    fn test_training_days_eat_more_than_rest_days() {
        let plan = build_weekly_plan(&sample_session(Goal::Cut, 300.0, SnackChoices::default()));
        let training = plan.days.iter().find(|d| d.is_training_day).unwrap();
        let rest = plan.days.iter().find(|d| !d.is_training_day).unwrap();
        assert!(training.calories > rest.calories);
    }

    #[test]
    fn test_meal_count_per_snack_config() {
        let none = build_weekly_plan(&sample_session(Goal::Maintain, 0.0, SnackChoices::default()));
        assert!(none.days.iter().all(|d| d.meals.len() == 3));

        let both = build_weekly_plan(&sample_session(
            Goal::Maintain,
            0.0,
            SnackChoices {
                mid_morning: true,
                mid_afternoon: true,
            },
        ));
        assert!(both.days.iter().all(|d| d.meals.len() == 5));
        assert_eq!(both.template.meals.len(), 5);
    }

    #[test]
    fn test_meal_calories_drift_stays_small() {
        let plan = build_weekly_plan(&sample_session(Goal::Cut, 300.0, SnackChoices::default()));
        for day in &plan.days {
            let meal_sum: i32 = day.meals.iter().map(|m| m.calories).sum();
            let drift = (meal_sum - day.calories).abs();
            assert!(
                drift <= day.meals.len() as i32,
                "{:?} drifted by {}",
                day.day,
                drift
            );
        }
    }

    #[test]
    fn test_template_averages_positionally() {
        let plan = build_weekly_plan(&sample_session(
            Goal::Maintain,
            0.0,
            SnackChoices {
                mid_morning: true,
                mid_afternoon: true,
            },
        ));

        // Both snack slots carry the same share, so their averages match
        // even though they are aggregated separately.
        let first_snack = &plan.template.meals[1];
        let second_snack = &plan.template.meals[3];
        assert_eq!(first_snack.protein_g, second_snack.protein_g);
        assert_eq!(first_snack.carbs_g, second_snack.carbs_g);
        assert_eq!(first_snack.fat_g, second_snack.fat_g);

        // Positional average recomputed by hand for the breakfast slot.
        let expected: i32 = {
            let sum: i32 = plan.days.iter().map(|d| d.meals[0].protein_g).sum();
            (sum as f64 / 7.0).round() as i32
        };
        assert_eq!(plan.template.meals[0].protein_g, expected);
    }

    #[test]
    fn test_template_with_single_snack() {
        let plan = build_weekly_plan(&sample_session(
            Goal::Maintain,
            0.0,
            SnackChoices {
                mid_morning: true,
                mid_afternoon: false,
            },
        ));

        let names: Vec<MealName> = plan.template.meals.iter().map(|m| m.name).collect();
        assert_eq!(
            names,
            vec![
                MealName::Breakfast,
                MealName::Snack,
                MealName::Lunch,
                MealName::Dinner
            ]
        );

        // The lone snack averages the second slot of every day.
        let expected: i32 = {
            let sum: i32 = plan.days.iter().map(|d| d.meals[1].carbs_g).sum();
            (sum as f64 / 7.0).round() as i32
        };
        assert_eq!(plan.template.meals[1].carbs_g, expected);
    }

    #[test]
    fn test_rating_travels_with_plan() {
        let plan = build_weekly_plan(&sample_session(Goal::Cut, 300.0, SnackChoices::default()));
        assert_eq!(plan.calorie_rating.color_tag, "green");

        let maintain =
            build_weekly_plan(&sample_session(Goal::Maintain, 0.0, SnackChoices::default()));
        assert_eq!(maintain.calorie_rating.color_tag, "neutral");
    }
}
