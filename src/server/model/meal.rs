use entity::sea_orm_active_enums::{CaffeineChoice, MealType};
use sea_orm::ActiveEnum;

/// Preference applied when a student has neither a dated nor a weekly choice.
pub const DEFAULT_MEAL_TYPE: MealType = MealType::NonVeg;
/// Caffeine applied when a student has neither a dated nor a weekly choice.
pub const DEFAULT_CAFFEINE: CaffeineChoice = CaffeineChoice::NoCaffeine;

/// Where a resolved meal preference came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceSource {
    Dated,
    Weekly,
    Default,
}

impl PreferenceSource {
    /// How the student should read the meal, shown next to it in chat.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Dated => "chosen for this date",
            Self::Weekly => "from your weekly plan",
            Self::Default => "default, no choice saved",
        }
    }
}

/// Effective meal preference of a student for a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedMeal {
    pub meal_type: MealType,
    pub caffeine: CaffeineChoice,
    pub source: PreferenceSource,
}

impl ResolvedMeal {
    pub fn fallback() -> Self {
        Self {
            meal_type: DEFAULT_MEAL_TYPE,
            caffeine: DEFAULT_CAFFEINE,
            source: PreferenceSource::Default,
        }
    }

    pub fn meal_label(&self) -> String {
        self.meal_type.to_value()
    }

    pub fn caffeine_label(&self) -> String {
        self.caffeine.to_value()
    }
}
