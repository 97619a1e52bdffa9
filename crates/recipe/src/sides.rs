use crate::Recipe;

/// Names of the recipes flagged as sides, in catalog order.
///
/// An empty list means side selection is disabled, not that something failed.
pub fn list_sides(recipes: &[Recipe]) -> Vec<String> {
    recipes
        .iter()
        .filter(|r| r.is_side)
        .map(|r| r.name.to_owned())
        .collect()
}

/// Every name a meal cell may be changed to by hand.
pub fn meal_options(recipes: &[Recipe]) -> Vec<String> {
    recipes.iter().map(|r| r.name.to_owned()).collect()
}
