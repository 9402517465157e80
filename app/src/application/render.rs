use std::fmt::{self, Display, Formatter};

use larder_core::domain::recipe::{
    entities::{NutritionalInfo, Recipe, RequestState},
    services::ControllerView,
};

const MISSING: &str = "N/A";

fn or_missing<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| v.to_string())
}

/// Whole generator screen: the form, the submit control and any outcome.
pub struct Screen<'a>(pub &'a ControllerView);

impl Display for Screen<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let view = self.0;
        let form = &view.form;

        writeln!(f, "== AI Recipe Generator ==")?;
        if view.ingredients.is_empty() {
            writeln!(f, "Ingredients: (none yet)")?;
        } else {
            writeln!(f, "Ingredients: {}", view.ingredients.join(", "))?;
        }

        let restrictions = if form.dietary_restrictions.is_empty() {
            "none".to_string()
        } else {
            form.dietary_restrictions
                .iter()
                .map(|r| r.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        writeln!(f, "Dietary restrictions: {restrictions}")?;
        let cuisine = form.cuisine_type.map_or("Any Cuisine", |c| c.as_str());
        writeln!(f, "Cuisine: {cuisine}")?;
        let people = if form.servings.get() == 1 { "person" } else { "people" };
        writeln!(f, "Servings: {} {people}", form.servings)?;
        writeln!(f, "Complexity: {}", form.complexity)?;

        if view.busy {
            writeln!(f, "[ generating... ]")?;
        } else if view.submit_enabled {
            writeln!(f, "[ Generate Recipe ]")?;
        } else {
            writeln!(f, "[ Generate Recipe ] (add an ingredient first)")?;
        }

        match &view.state {
            RequestState::Error(message) => writeln!(f, "! {message}"),
            RequestState::Loaded(recipe) => write!(f, "\n{}", RecipeCard(recipe)),
            RequestState::Idle | RequestState::Loading => Ok(()),
        }
    }
}

pub struct RecipeCard<'a>(pub &'a Recipe);

impl Display for RecipeCard<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let recipe = self.0;

        writeln!(f, "# {}", or_missing(recipe.title.as_deref()))?;
        writeln!(f, "{}", or_missing(recipe.description.as_deref()))?;
        writeln!(
            f,
            "Prep time: {} min | Cook time: {} min | Difficulty: {}",
            or_missing(recipe.prep_time_minutes.as_ref()),
            or_missing(recipe.cook_time_minutes.as_ref()),
            or_missing(recipe.difficulty.as_deref())
        )?;

        writeln!(f, "\nIngredients:")?;
        for ingredient in &recipe.ingredients {
            writeln!(f, "  - {ingredient}")?;
        }

        writeln!(f, "\nInstructions:")?;
        for (step, instruction) in recipe.instructions.iter().enumerate() {
            writeln!(f, "  {}. {instruction}", step + 1)?;
        }

        if let Some(tags) = recipe.tags.as_ref().filter(|tags| !tags.is_empty()) {
            writeln!(f, "\nTags: {}", tags.join(", "))?;
        }

        if let Some(nutrition) = &recipe.nutritional_info {
            write!(f, "\n{}", Nutrition(nutrition))?;
        }

        Ok(())
    }
}

struct Nutrition<'a>(&'a NutritionalInfo);

impl Display for Nutrition<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let n = self.0;
        writeln!(f, "Nutritional Information (estimated):")?;
        writeln!(f, "  Calories: {}", or_missing(n.calories.as_ref()))?;
        writeln!(f, "  Protein: {}g", or_missing(n.protein_g.as_ref()))?;
        writeln!(f, "  Carbs: {}g", or_missing(n.carbs_g.as_ref()))?;
        writeln!(f, "  Fat: {}g", or_missing(n.fat_g.as_ref()))?;
        writeln!(f, "  Fiber: {}g", or_missing(n.fiber_g.as_ref()))?;
        writeln!(f, "  Sugar: {}g", or_missing(n.sugar_g.as_ref()))
    }
}
