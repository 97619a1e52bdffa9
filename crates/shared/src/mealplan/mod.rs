use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// An independent assignment pool. Variant order is the order meal types
/// appear on the calendar.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum MealType {
    Breakfast,
    Lunch,
    #[strum(to_string = "Snacks", serialize = "Snack")]
    Snacks,
    Dinner,
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Day {
    #[strum(to_string = "Mon", serialize = "Monday")]
    Mon,
    #[strum(to_string = "Tue", serialize = "Tuesday")]
    Tue,
    #[strum(to_string = "Wed", serialize = "Wednesday")]
    Wed,
    #[strum(to_string = "Thu", serialize = "Thursday")]
    Thu,
    #[strum(to_string = "Fri", serialize = "Friday")]
    Fri,
    #[strum(to_string = "Sat", serialize = "Saturday")]
    Sat,
    #[strum(to_string = "Sun", serialize = "Sunday")]
    Sun,
}

impl Day {
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::VARIANTS.get(index).copied()
    }
}

/// Dimensions of a generated plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanShape {
    pub weeks: usize,
    pub days_per_week: usize,
}

impl Default for PlanShape {
    fn default() -> Self {
        Self {
            weeks: 4,
            days_per_week: Day::VARIANTS.len(),
        }
    }
}

impl PlanShape {
    pub fn new(weeks: usize, days_per_week: usize) -> Self {
        Self {
            weeks,
            days_per_week,
        }
    }

    /// Number of calendar cells across every meal type.
    pub fn len(&self) -> usize {
        self.weeks * self.days_per_week * MealType::VARIANTS.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, slot: &Slot) -> bool {
        slot.week < self.weeks && slot.day < self.days_per_week
    }

    pub fn day_labels(&self) -> Vec<String> {
        Day::VARIANTS
            .iter()
            .take(self.days_per_week)
            .map(|d| d.to_string())
            .collect()
    }
}

/// One (meal type, week, day) cell of the plan. Week and day are 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot {
    pub meal_type: MealType,
    pub week: usize,
    pub day: usize,
}

impl Slot {
    pub fn new(meal_type: MealType, week: usize, day: usize) -> Self {
        Self {
            meal_type,
            week,
            day,
        }
    }
}
