use mealplanner_grid::layout::week_label;
use mealplanner_shared::{MealType, PlanShape, Slot};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use strum::VariantArray;

use crate::{WeekAssignment, palette::WeekPalette};

pub type Assignments = BTreeMap<MealType, Vec<WeekAssignment>>;
pub type SideSelections = HashMap<Slot, String>;

/// One resolved calendar cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CalendarEntry {
    pub week: usize,
    pub day: usize,
    pub meal_type: MealType,
    pub meal_name: Option<String>,
    pub side_name: Option<String>,
}

/// Resolves every (week, meal type, day) cell of `shape`, in that order.
///
/// The output always holds `shape.len()` entries: a meal type with no
/// assignment, or a blank cell, yields `meal_name: None`; a missing or blank
/// side selection yields `side_name: None`.
pub fn project(
    assignments: &Assignments,
    sides: &SideSelections,
    shape: &PlanShape,
) -> Vec<CalendarEntry> {
    let mut entries = Vec::with_capacity(shape.len());

    for week in 0..shape.weeks {
        for meal_type in MealType::VARIANTS {
            let assigned = assignments
                .get(meal_type)
                .and_then(|weeks| weeks.iter().find(|w| w.week == week));

            for day in 0..shape.days_per_week {
                let slot = Slot::new(*meal_type, week, day);

                entries.push(CalendarEntry {
                    week,
                    day,
                    meal_type: *meal_type,
                    meal_name: assigned.and_then(|w| w.meal(day)).map(str::to_owned),
                    side_name: sides
                        .get(&slot)
                        .map(|s| s.trim())
                        .filter(|s| !s.is_empty())
                        .map(str::to_owned),
                });
            }
        }
    }

    entries
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CalendarRow {
    pub meal_type: MealType,
    pub meals: Vec<Option<String>>,
    pub sides: Vec<Option<String>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CalendarWeek {
    pub week: usize,
    pub label: String,
    pub palette: WeekPalette,
    pub rows: Vec<CalendarRow>,
}

/// The projected entries grouped the way the calendar is laid out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Calendar {
    pub day_labels: Vec<String>,
    pub weeks: Vec<CalendarWeek>,
}

impl Calendar {
    pub fn build(assignments: &Assignments, sides: &SideSelections, shape: &PlanShape) -> Self {
        Self::from_entries(&project(assignments, sides, shape), shape)
    }

    pub fn from_entries(entries: &[CalendarEntry], shape: &PlanShape) -> Self {
        let mut weeks = (0..shape.weeks)
            .map(|week| CalendarWeek {
                week,
                label: week_label(week),
                palette: WeekPalette::for_week(week),
                rows: MealType::VARIANTS
                    .iter()
                    .map(|meal_type| CalendarRow {
                        meal_type: *meal_type,
                        meals: vec![None; shape.days_per_week],
                        sides: vec![None; shape.days_per_week],
                    })
                    .collect(),
            })
            .collect::<Vec<_>>();

        for entry in entries {
            let Some(row) = weeks
                .get_mut(entry.week)
                .and_then(|w| w.rows.iter_mut().find(|r| r.meal_type == entry.meal_type))
            else {
                continue;
            };

            if let Some(meal) = row.meals.get_mut(entry.day) {
                meal.clone_from(&entry.meal_name);
            }
            if let Some(side) = row.sides.get_mut(entry.day) {
                side.clone_from(&entry.side_name);
            }
        }

        Self {
            day_labels: shape.day_labels(),
            weeks,
        }
    }

    pub fn entries(&self) -> Vec<CalendarEntry> {
        let mut entries = vec![];

        for week in self.weeks.iter() {
            for row in week.rows.iter() {
                for (day, (meal, side)) in row.meals.iter().zip(row.sides.iter()).enumerate() {
                    entries.push(CalendarEntry {
                        week: week.week,
                        day,
                        meal_type: row.meal_type,
                        meal_name: meal.clone(),
                        side_name: side.clone(),
                    });
                }
            }
        }

        entries
    }
}
