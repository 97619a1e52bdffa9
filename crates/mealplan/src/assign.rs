use mealplanner_recipe::Recipe;
use mealplanner_shared::{Error, MealType, PlanShape, Result};
use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The recipe names picked for one meal type over one week, index 0 being
/// Monday.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekAssignment {
    pub meal_type: MealType,
    pub week: usize,
    pub days: Vec<String>,
}

impl WeekAssignment {
    /// The name on `day`, if that cell holds one.
    pub fn meal(&self, day: usize) -> Option<&str> {
        self.days
            .get(day)
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MealAssigner {
    shape: PlanShape,
}

impl MealAssigner {
    pub fn new(shape: PlanShape) -> Self {
        Self { shape }
    }

    pub fn shape(&self) -> &PlanShape {
        &self.shape
    }

    /// Assigns a recipe from `pool` to every day of every week.
    ///
    /// Each week reshuffles the pool on its own, so a recipe may come back
    /// the following week. Within a week no name repeats as long as the pool
    /// holds at least `days_per_week` recipes; a smaller pool is cycled
    /// through in full before any recipe shows up again.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        meal_type: MealType,
        pool: &[Recipe],
        rng: &mut R,
    ) -> Result<Vec<WeekAssignment>> {
        if pool.is_empty() {
            return Err(Error::NoEligibleRecipes(meal_type));
        }

        let mut weeks = Vec::with_capacity(self.shape.weeks);

        for week in 0..self.shape.weeks {
            let mut shuffled = pool.iter().map(|r| r.name.as_str()).collect::<Vec<_>>();
            shuffled.shuffle(rng);

            let days = fill_week(&shuffled, self.shape.days_per_week);

            tracing::debug!(
                meal_type = %meal_type,
                week = week + 1,
                pool = pool.len(),
                "week assigned: {}",
                days.join(", ")
            );

            weeks.push(WeekAssignment {
                meal_type,
                week,
                days,
            });
        }

        Ok(weeks)
    }
}

/// Walks `shuffled` day by day. A name already used this week is replaced
/// by the next unused one in shuffled order; after `shuffled.len()` probes
/// the repeat is kept.
fn fill_week(shuffled: &[&str], days_per_week: usize) -> Vec<String> {
    let len = shuffled.len();
    let mut used = HashSet::with_capacity(days_per_week);
    let mut days = Vec::with_capacity(days_per_week);

    for day in 0..days_per_week {
        let mut name = shuffled[day % len];
        let mut attempts = 0;

        while used.contains(name) && attempts < len {
            attempts += 1;
            name = shuffled[(day + attempts) % len];
        }

        used.insert(name);
        days.push(name.to_owned());
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_week_distinct() {
        let names = ["a", "b", "c", "d", "e", "f", "g", "h"];
        assert_eq!(fill_week(&names, 7), vec!["a", "b", "c", "d", "e", "f", "g"]);
    }

    #[test]
    fn test_fill_week_small_pool_cycles() {
        assert_eq!(
            fill_week(&["x", "y", "z"], 7),
            vec!["x", "y", "z", "x", "y", "z", "x"]
        );
        assert_eq!(fill_week(&["solo"], 3), vec!["solo", "solo", "solo"]);
    }

    #[test]
    fn test_fill_week_exact_pool() {
        let names = ["a", "b", "c", "d", "e", "f", "g"];
        assert_eq!(fill_week(&names, 7), names);
    }

    #[test]
    fn test_week_assignment_meal() {
        let week = WeekAssignment {
            meal_type: MealType::Lunch,
            week: 0,
            days: vec!["Soup".to_owned(), "  ".to_owned()],
        };

        assert_eq!(week.meal(0), Some("Soup"));
        assert_eq!(week.meal(1), None);
        assert_eq!(week.meal(6), None);
    }
}
