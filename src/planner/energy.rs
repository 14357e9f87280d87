use crate::models::{ActivityLevel, DerivedEnergy};
use crate::planner::constants::{
    BMR_AGE_FACTOR, BMR_HEIGHT_FACTOR, BMR_SEX_OFFSET, BMR_WEIGHT_FACTOR,
};

/// Basal metabolic rate from a sex-averaged Mifflin-St Jeor equation.
///
/// `round(10 * kg + 6.25 * cm - 5 * age - 78)` in kcal/day.
pub fn basal_metabolic_rate(age: u32, height_cm: f64, weight_kg: f64) -> i32 {
    let bmr = BMR_WEIGHT_FACTOR * weight_kg + BMR_HEIGHT_FACTOR * height_cm
        - BMR_AGE_FACTOR * age as f64
        + BMR_SEX_OFFSET;
    bmr.round() as i32
}

/// Total daily energy expenditure: BMR scaled by the activity multiplier,
/// rounded to a whole kcal.
pub fn total_daily_energy(bmr: i32, activity: ActivityLevel) -> i32 {
    (bmr as f64 * activity.multiplier()).round() as i32
}

/// Derive both energy figures from raw metrics at the default (moderate)
/// activity level.
///
/// Returns `None` while any metric is non-positive or NaN, the "cleared
/// readout" state of the input flow.
pub fn derived_energy(age: u32, height_cm: f64, weight_kg: f64) -> Option<DerivedEnergy> {
    // Compared positively so a NaN metric also clears the readout.
    let valid = age > 0 && height_cm > 0.0 && weight_kg > 0.0;
    if !valid {
        return None;
    }

    let bmr = basal_metabolic_rate(age, height_cm, weight_kg);
    let tdee = total_daily_energy(bmr, ActivityLevel::default());

    Some(DerivedEnergy { bmr, tdee })
}
