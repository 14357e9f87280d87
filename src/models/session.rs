use std::collections::BTreeSet;

use serde::Serialize;

/// Body metrics collected from the user.
///
/// All three values must be positive before any energy figure is derived.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UserProfile {
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
}

impl UserProfile {
    pub fn new(age: u32, height_cm: f64, weight_kg: f64) -> Self {
        Self {
            age,
            height_cm,
            weight_kg,
        }
    }

    /// Basic validation: every metric strictly positive.
    pub fn is_valid(&self) -> bool {
        self.age > 0 && self.height_cm > 0.0 && self.weight_kg > 0.0
    }
}

/// Training goal. Fixes the macro split and the direction of the
/// caloric adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Goal {
    Bulk,
    Maintain,
    Cut,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Bulk, Goal::Maintain, Goal::Cut];

    pub fn display_name(&self) -> &'static str {
        match self {
            Goal::Bulk => "Bulk",
            Goal::Maintain => "Maintain",
            Goal::Cut => "Cut",
        }
    }

    /// One-line blurb shown in the goal selection prompt.
    pub fn description(&self) -> &'static str {
        match self {
            Goal::Bulk => "build muscle with a caloric surplus",
            Goal::Maintain => "hold current weight at estimated daily use",
            Goal::Cut => "lose fat with a caloric deficit",
        }
    }

    /// Fixed macro distribution for this goal. Percentages always sum to 100.
    pub fn macro_split(&self) -> MacroSplit {
        match self {
            Goal::Bulk => MacroSplit {
                protein_pct: 25.0,
                carbs_pct: 55.0,
                fat_pct: 20.0,
            },
            Goal::Maintain => MacroSplit {
                protein_pct: 30.0,
                carbs_pct: 50.0,
                fat_pct: 20.0,
            },
            Goal::Cut => MacroSplit {
                protein_pct: 35.0,
                carbs_pct: 45.0,
                fat_pct: 20.0,
            },
        }
    }

    /// How the daily adjustment is worded for this goal.
    pub fn adjustment_noun(&self) -> &'static str {
        match self {
            Goal::Bulk => "surplus",
            Goal::Cut => "deficit",
            Goal::Maintain => "adjustment",
        }
    }
}

/// Fixed macro distribution in percent of daily calories.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MacroSplit {
    pub protein_pct: f64,
    pub carbs_pct: f64,
    pub fat_pct: f64,
}

/// Weekly activity level used for the TDEE multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// TDEE multiplier applied on top of BMR.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Light",
            ActivityLevel::Moderate => "Moderate",
            ActivityLevel::Active => "Active",
            ActivityLevel::VeryActive => "Very active",
        }
    }
}

impl Default for ActivityLevel {
    fn default() -> Self {
        ActivityLevel::Moderate
    }
}

/// Day of the week. Ordering follows the canonical Monday-first plan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days in plan order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Parse a full day name or its 3-letter abbreviation, case-insensitive.
    pub fn from_name(name: &str) -> Option<Weekday> {
        let lower = name.trim().to_lowercase();
        Weekday::ALL.into_iter().find(|day| {
            let full = day.display_name().to_lowercase();
            lower == full || lower == full[..3]
        })
    }
}

/// Which optional snack slots the plan should include.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnackChoices {
    pub mid_morning: bool,
    pub mid_afternoon: bool,
}

/// Rounded energy figures derived from the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DerivedEnergy {
    /// Basal metabolic rate in kcal/day.
    pub bmr: i32,

    /// Total daily energy expenditure in kcal/day.
    pub tdee: i32,
}

/// Immutable snapshot of everything the input flow collected.
///
/// A session is frozen once built; any change to an input means a new
/// session and a full plan rebuild.
#[derive(Debug, Clone)]
pub struct UserSession {
    pub profile: UserProfile,
    pub energy: DerivedEnergy,
    pub goal: Goal,
    pub caloric_adjustment: f64,
    pub training_days: BTreeSet<Weekday>,
    pub snacks: SnackChoices,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_splits_sum_to_100() {
        for goal in Goal::ALL {
            let split = goal.macro_split();
            let sum = split.protein_pct + split.carbs_pct + split.fat_pct;
            assert!((sum - 100.0).abs() < 1e-9, "{:?} sums to {}", goal, sum);
        }
    }

    #[test]
    fn test_cut_has_highest_protein() {
        assert!(Goal::Cut.macro_split().protein_pct > Goal::Maintain.macro_split().protein_pct);
        assert!(Goal::Maintain.macro_split().protein_pct > Goal::Bulk.macro_split().protein_pct);
    }

    #[test]
    fn test_activity_multipliers_increase() {
        let levels = [
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::Active,
            ActivityLevel::VeryActive,
        ];
        for pair in levels.windows(2) {
            assert!(pair[0].multiplier() < pair[1].multiplier());
        }
    }

    #[test]
    fn test_default_activity_is_moderate() {
        assert_eq!(ActivityLevel::default(), ActivityLevel::Moderate);
        assert_eq!(ActivityLevel::default().display_name(), "Moderate");
        assert!((ActivityLevel::default().multiplier() - 1.55).abs() < 1e-9);
    }

    #[test]
    fn test_weekday_order() {
        assert_eq!(Weekday::ALL.len(), 7);
        assert_eq!(Weekday::ALL[0], Weekday::Monday);
        assert_eq!(Weekday::ALL[6], Weekday::Sunday);
        assert!(Weekday::Monday < Weekday::Sunday);
    }

    #[test]
    fn test_weekday_from_name() {
        assert_eq!(Weekday::from_name("Monday"), Some(Weekday::Monday));
        assert_eq!(Weekday::from_name("monday"), Some(Weekday::Monday));
        assert_eq!(Weekday::from_name("MON"), Some(Weekday::Monday));
        assert_eq!(Weekday::from_name(" wed "), Some(Weekday::Wednesday));
        assert_eq!(Weekday::from_name("thu"), Some(Weekday::Thursday));
        assert_eq!(Weekday::from_name("someday"), None);
        assert_eq!(Weekday::from_name(""), None);
    }

    #[test]
    fn test_profile_validation() {
        assert!(UserProfile::new(30, 180.0, 80.0).is_valid());
        assert!(!UserProfile::new(0, 180.0, 80.0).is_valid());
        assert!(!UserProfile::new(30, 0.0, 80.0).is_valid());
        assert!(!UserProfile::new(30, 180.0, -1.0).is_valid());
    }
}
