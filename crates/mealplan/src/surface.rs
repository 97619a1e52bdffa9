use mealplanner_grid::{
    GridStore, Range,
    layout::{self, CALENDAR_SHEET, FIRST_DAY_COL, SIDES_LABEL},
};
use mealplanner_shared::{MealType, PlanShape, Result, Slot};
use strum::VariantArray;

use crate::{Assignments, Calendar, SideSelections, WeekAssignment};

/// Which of the two rows of a week a cell sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Meal,
    Side,
}

fn cell_range(slot: &Slot, cell: Cell) -> Range {
    let row = match cell {
        Cell::Meal => layout::meal_row(slot.week),
        Cell::Side => layout::side_row(slot.week),
    };

    Range::cell(
        layout::meal_sheet(slot.meal_type),
        row,
        FIRST_DAY_COL + slot.day,
    )
}

/// Rewrites a meal sheet with `weeks`. Side selections on that sheet are
/// cleared.
pub fn write_assignments<S: GridStore>(
    store: &mut S,
    meal_type: MealType,
    weeks: &[WeekAssignment],
    shape: &PlanShape,
) -> Result<()> {
    layout::reset_meal_sheet(store, meal_type, shape)?;

    for assignment in weeks.iter().filter(|w| w.week < shape.weeks) {
        let mut days = assignment.days.clone();
        days.resize(shape.days_per_week, String::new());

        store.write(
            &layout::meal_range(meal_type, assignment.week, shape),
            &[days],
        )?;
    }

    Ok(())
}

/// Current meal cells of every meal sheet present on the grid, edits
/// included.
pub fn read_assignments<S: GridStore>(store: &S, shape: &PlanShape) -> Result<Assignments> {
    let mut assignments = Assignments::new();

    for meal_type in MealType::VARIANTS {
        if !store.has_sheet(&layout::meal_sheet(*meal_type)) {
            continue;
        }

        let mut weeks = Vec::with_capacity(shape.weeks);
        for week in 0..shape.weeks {
            let days = store
                .read(&layout::meal_range(*meal_type, week, shape))?
                .into_iter()
                .next()
                .unwrap_or_default();

            weeks.push(WeekAssignment {
                meal_type: *meal_type,
                week,
                days,
            });
        }

        assignments.insert(*meal_type, weeks);
    }

    Ok(assignments)
}

pub fn read_side_selections<S: GridStore>(store: &S, shape: &PlanShape) -> Result<SideSelections> {
    let mut sides = SideSelections::new();

    for meal_type in MealType::VARIANTS {
        if !store.has_sheet(&layout::meal_sheet(*meal_type)) {
            continue;
        }

        for week in 0..shape.weeks {
            let row = store
                .read(&layout::side_range(*meal_type, week, shape))?
                .into_iter()
                .next()
                .unwrap_or_default();

            for (day, name) in row.into_iter().enumerate() {
                if !name.trim().is_empty() {
                    sides.insert(Slot::new(*meal_type, week, day), name);
                }
            }
        }
    }

    Ok(sides)
}

/// Writes one meal or side cell; `None` clears it.
pub fn write_cell<S: GridStore>(
    store: &mut S,
    slot: &Slot,
    cell: Cell,
    value: Option<&str>,
) -> Result<()> {
    store.write(
        &cell_range(slot, cell),
        &[vec![value.unwrap_or_default().to_owned()]],
    )
}

/// Replaces the calendar sheet with `calendar`.
pub fn write_calendar<S: GridStore>(store: &mut S, calendar: &Calendar) -> Result<()> {
    store.add_sheet(CALENDAR_SHEET)?;
    store.clear_sheet(CALENDAR_SHEET)?;

    let days = calendar.day_labels.len();
    let cols = FIRST_DAY_COL + days;
    let blank = vec![String::new(); days];
    let text = |cells: &[Option<String>]| {
        cells
            .iter()
            .map(|c| c.clone().unwrap_or_default())
            .collect::<Vec<_>>()
    };

    for week in calendar.weeks.iter() {
        let mut rows = Vec::with_capacity(layout::calendar_block_rows());
        rows.push(layout::calendar_label_row(&week.label, &blank));
        rows.push(layout::calendar_label_row("", &calendar.day_labels));

        for row in week.rows.iter() {
            rows.push(layout::calendar_label_row(
                row.meal_type.to_string(),
                &text(&row.meals),
            ));
            rows.push(layout::calendar_label_row(SIDES_LABEL, &text(&row.sides)));
        }

        store.write(
            &Range::new(
                CALENDAR_SHEET,
                layout::calendar_block_start(week.week),
                0,
                rows.len(),
                cols,
            ),
            &rows,
        )?;
    }

    Ok(())
}
