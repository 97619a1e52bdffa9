use mealplanner_shared::MealType;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub category: String,
    pub is_breakfast: bool,
    pub is_lunch: bool,
    pub is_dinner: bool,
    pub is_snack: bool,
    pub is_side: bool,
}

impl Recipe {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: String::new(),
            is_breakfast: false,
            is_lunch: false,
            is_dinner: false,
            is_snack: false,
            is_side: false,
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn meal(mut self, meal_type: MealType) -> Self {
        match meal_type {
            MealType::Breakfast => self.is_breakfast = true,
            MealType::Lunch => self.is_lunch = true,
            MealType::Snacks => self.is_snack = true,
            MealType::Dinner => self.is_dinner = true,
        }
        self
    }

    pub fn side(mut self) -> Self {
        self.is_side = true;
        self
    }

    /// Whether this recipe belongs to the pool of `meal_type`.
    pub fn serves(&self, meal_type: MealType) -> bool {
        match meal_type {
            MealType::Breakfast => self.is_breakfast,
            MealType::Lunch => self.is_lunch,
            MealType::Snacks => self.is_snack,
            MealType::Dinner => self.is_dinner,
        }
    }

    /// Cells in recipe sheet column order.
    pub fn to_row(&self) -> Vec<String> {
        let flag = mealplanner_grid::layout::bool_cell;

        vec![
            self.name.to_owned(),
            self.category.to_owned(),
            flag(self.is_breakfast),
            flag(self.is_lunch),
            flag(self.is_dinner),
            flag(self.is_snack),
            flag(self.is_side),
        ]
    }
}

/// Case-insensitive `"true"`; anything else, blank included, is `false`.
pub fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}
