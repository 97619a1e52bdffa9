mod error;
pub mod mealplan;

pub use error::*;
pub use mealplan::{Day, MealType, PlanShape, Slot};
