/// Weight coefficient of the Mifflin-St Jeor equation (kcal per kg).
pub const BMR_WEIGHT_FACTOR: f64 = 10.0;

/// Height coefficient of the Mifflin-St Jeor equation (kcal per cm).
pub const BMR_HEIGHT_FACTOR: f64 = 6.25;

/// Age coefficient of the Mifflin-St Jeor equation (kcal per year).
pub const BMR_AGE_FACTOR: f64 = 5.0;

/// Sex-averaged constant term: midpoint of the male (+5) and
/// female (-161) offsets.
pub const BMR_SEX_OFFSET: f64 = -78.0;

/// Calorie multiplier applied to the base target on training days.
pub const TRAINING_DAY_MULTIPLIER: f64 = 1.10;

/// Calorie multiplier applied to the base target on rest days.
pub const REST_DAY_MULTIPLIER: f64 = 0.95;

/// Calorie share of each optional snack slot.
pub const SNACK_SHARE: f64 = 0.10;

/// Adjustment/TDEE ratio up to which a surplus or deficit rates Good.
pub const RATING_GOOD_MAX_RATIO: f64 = 0.15;

/// Adjustment/TDEE ratio up to which a surplus or deficit rates Medium;
/// anything above rates High.
pub const RATING_MEDIUM_MAX_RATIO: f64 = 0.25;

/// Days in a generated plan.
pub const DAYS_PER_WEEK: usize = 7;

// ─────────────────────────────────────────────────────────────────────────────
// Atwater energy factors
// ─────────────────────────────────────────────────────────────────────────────

/// Calories per gram of protein.
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// Calories per gram of carbohydrate.
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

/// Calories per gram of fat.
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
