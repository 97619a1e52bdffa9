use comfy_table::{Cell, Color, Table, presets::UTF8_BORDERS_ONLY};
use mealplanner_mealplan::{Calendar, CalendarWeek, GenerateReport, palette::Rgb};
use mealplanner_recipe::{Catalog, RowIssue};
use mealplanner_shared::MealType;

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
    }
}

fn tick(value: bool) -> &'static str {
    if value { "x" } else { "" }
}

pub fn catalog(catalog: &Catalog) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec![
        "Recipe", "Category", "Breakfast", "Lunch", "Dinner", "Snacks", "Side",
    ]);

    for recipe in catalog.recipes.iter() {
        table.add_row(vec![
            recipe.name.as_str(),
            recipe.category.as_str(),
            tick(recipe.is_breakfast),
            tick(recipe.is_lunch),
            tick(recipe.is_dinner),
            tick(recipe.is_snack),
            tick(recipe.is_side),
        ]);
    }

    let mut out = table.to_string();
    if !catalog.issues.is_empty() {
        out.push('\n');
        out.push_str(&issues(&catalog.issues));
    }

    out
}

pub fn issues(issues: &[RowIssue]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Row", "Recipe", "Skipped because"]);

    for issue in issues {
        table.add_row(vec![
            issue.row.to_string(),
            issue.name.clone(),
            issue.reason.to_string(),
        ]);
    }

    table.to_string()
}

pub fn sides(sides: &[String]) -> String {
    if sides.is_empty() {
        return "No recipe is marked as a side, side selection disabled.".to_string();
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Side"]);
    for side in sides {
        table.add_row(vec![side]);
    }

    table.to_string()
}

fn week(week: &CalendarWeek, day_labels: &[String]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);

    let mut header = vec![Cell::new(&week.label).fg(color(week.palette.primary))];
    header.extend(
        day_labels
            .iter()
            .map(|d| Cell::new(d).fg(color(week.palette.light))),
    );
    table.set_header(header);

    let text = |cells: &[Option<String>]| {
        cells
            .iter()
            .map(|c| c.as_deref().unwrap_or("-").to_string())
            .collect::<Vec<_>>()
    };

    for row in week.rows.iter() {
        let mut meals = vec![Cell::new(row.meal_type).fg(color(
            mealplanner_mealplan::palette::meal_color(row.meal_type),
        ))];
        meals.extend(text(&row.meals).into_iter().map(Cell::new));
        table.add_row(meals);

        if row.sides.iter().any(Option::is_some) {
            let mut sides = vec![Cell::new("  side").fg(color(week.palette.sides_label))];
            sides.extend(text(&row.sides).into_iter().map(Cell::new));
            table.add_row(sides);
        }
    }

    table.to_string()
}

pub fn calendar(calendar: &Calendar) -> String {
    calendar
        .weeks
        .iter()
        .map(|w| week(w, &calendar.day_labels))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn report(report: &GenerateReport) -> String {
    let names = |meal_types: &[MealType]| {
        meal_types
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut lines = vec![format!("Loaded {} recipes.", report.recipes)];
    if !report.issues.is_empty() {
        lines.push(issues(&report.issues));
    }
    lines.push(format!("Planned: {}", names(&report.generated)));
    if !report.skipped.is_empty() {
        lines.push(format!(
            "Left blank, no eligible recipes: {}",
            names(&report.skipped)
        ));
    }
    if report.sides.is_empty() {
        lines.push("Side selection disabled.".to_string());
    } else {
        lines.push(format!("{} sides available.", report.sides.len()));
    }
    lines.push(calendar(&report.calendar));

    lines.join("\n")
}
