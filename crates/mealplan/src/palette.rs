//! Colours attached to calendar weeks and meal types.

use mealplanner_shared::MealType;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Moves every channel towards white; `factor` 0 keeps the colour,
    /// 1 gives white.
    pub fn lighten(&self, factor: f64) -> Self {
        let channel = |c: u8| {
            let c = c as f64;
            (c + (255.0 - c) * factor).round().clamp(0.0, 255.0) as u8
        };

        Self(channel(self.0), channel(self.1), channel(self.2))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

pub const WEEK_COLORS: [Rgb; 4] = [
    Rgb(0x5A, 0x8C, 0xB8),
    Rgb(0x6B, 0xA5, 0x87),
    Rgb(0xD4, 0x84, 0x5C),
    Rgb(0xC9, 0x7B, 0xA4),
];

pub fn meal_color(meal_type: MealType) -> Rgb {
    match meal_type {
        MealType::Breakfast => Rgb(0xD4, 0x84, 0x5C),
        MealType::Lunch => Rgb(0x6B, 0xA5, 0x87),
        MealType::Snacks => Rgb(0xC9, 0x7B, 0xA4),
        MealType::Dinner => Rgb(0x5A, 0x8C, 0xB8),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPalette {
    pub primary: Rgb,
    pub light: Rgb,
    pub sides_label: Rgb,
    pub sides_cell: Rgb,
}

impl WeekPalette {
    /// Week colours repeat every four weeks.
    pub fn for_week(week: usize) -> Self {
        let primary = WEEK_COLORS[week % WEEK_COLORS.len()];
        let light = primary.lighten(0.4);

        Self {
            primary,
            light,
            sides_label: light.lighten(0.5),
            sides_cell: light.lighten(0.8),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lighten() {
        assert_eq!(Rgb(0x5A, 0x8C, 0xB8).lighten(0.4).to_string(), "#9CBAD4");
        assert_eq!(Rgb(0, 0, 0).lighten(1.0), Rgb(255, 255, 255));
        assert_eq!(Rgb(10, 20, 30).lighten(0.0), Rgb(10, 20, 30));
    }

    #[test]
    fn test_week_palette_cycles() {
        let first = WeekPalette::for_week(0);
        assert_eq!(first.primary, WEEK_COLORS[0]);
        assert_eq!(first.light.to_string(), "#9CBAD4");
        assert_eq!(WeekPalette::for_week(4), first);
        assert_ne!(WeekPalette::for_week(1), first);
    }
}
