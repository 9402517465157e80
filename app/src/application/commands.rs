use larder_core::{
    application::session::SessionCommand,
    domain::{
        common::entities::app_errors::CoreError,
        recipe::value_objects::{Complexity, CuisineType, DietaryRestriction, Servings},
    },
};
use thiserror::Error;

/// One line typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Session(SessionCommand),
    Substitutes(String),
    Pairings(String),
    Cuisines,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`, type `help` for the list")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Invalid(#[from] CoreError),
}

pub const HELP: &str = "\
commands:
  <ingredient>            add an ingredient
  add <ingredient>        add an ingredient
  rm <ingredient>         remove an ingredient
  diet <tag>              toggle a dietary restriction
                          (vegetarian, vegan, gluten-free, dairy-free, nut-free, low-carb)
  cuisine [name]          pick a cuisine, no name for any cuisine
  servings <1|2|4|6|8>    number of people
  complexity <level>      easy, medium or hard
  generate                generate a recipe
  save                    save the current recipe
  subs <ingredient>       suggest substitutes
  pairs <ingredient>      suggest pairings
  cuisines                list cuisines known to the service
  show                    redraw the form
  quit                    exit";

/// Returns `Ok(None)` for blank lines.
pub fn parse_line(line: &str) -> Result<Option<Input>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    let required = |name: &'static str| -> Result<String, CommandError> {
        if rest.is_empty() {
            Err(CommandError::MissingArgument(name))
        } else {
            Ok(rest.to_string())
        }
    };

    let input = match keyword {
        "add" => Input::Session(SessionCommand::AddIngredient(required("add")?)),
        "rm" | "remove" => Input::Session(SessionCommand::RemoveIngredient(required("rm")?)),
        "diet" => {
            let restriction: DietaryRestriction = required("diet")?.parse()?;
            Input::Session(SessionCommand::ToggleRestriction(restriction))
        }
        "cuisine" => {
            CuisineType::from_selection(rest)?;
            Input::Session(SessionCommand::SetCuisine(rest.to_string()))
        }
        "servings" => {
            let servings: Servings = required("servings")?.parse()?;
            Input::Session(SessionCommand::SetServings(servings))
        }
        "complexity" => {
            let complexity: Complexity = required("complexity")?.parse()?;
            Input::Session(SessionCommand::SetComplexity(complexity))
        }
        "generate" | "go" => Input::Session(SessionCommand::Submit),
        "save" => Input::Session(SessionCommand::SaveRecipe),
        "subs" => Input::Substitutes(required("subs")?),
        "pairs" => Input::Pairings(required("pairs")?),
        "cuisines" => Input::Cuisines,
        "show" => Input::Show,
        "help" | "?" => Input::Help,
        "quit" | "exit" => Input::Quit,
        _ if !keyword.starts_with(':') => {
            Input::Session(SessionCommand::AddIngredient(line.to_string()))
        }
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Some(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(line: &str) -> Input {
        parse_line(line).unwrap().unwrap()
    }

    #[test]
    fn test_bare_text_adds_ingredient() {
        assert_eq!(
            parsed("  olive oil "),
            Input::Session(SessionCommand::AddIngredient("olive oil".to_string()))
        );
        assert_eq!(parse_line("   ").unwrap(), None);
    }

    #[test]
    fn test_form_commands() {
        assert_eq!(
            parsed("diet gluten-free"),
            Input::Session(SessionCommand::ToggleRestriction(
                DietaryRestriction::GlutenFree
            ))
        );
        assert_eq!(
            parsed("servings 6"),
            Input::Session(SessionCommand::SetServings(Servings::try_from(6).unwrap()))
        );
        assert_eq!(
            parsed("complexity hard"),
            Input::Session(SessionCommand::SetComplexity(Complexity::Hard))
        );
        assert_eq!(
            parsed("cuisine"),
            Input::Session(SessionCommand::SetCuisine(String::new()))
        );
        assert_eq!(
            parsed("cuisine thai"),
            Input::Session(SessionCommand::SetCuisine("thai".to_string()))
        );
        assert_eq!(parsed("go"), Input::Session(SessionCommand::Submit));
    }

    #[test]
    fn test_rejects_values_outside_the_form() {
        assert!(matches!(
            parse_line("servings 3"),
            Err(CommandError::Invalid(CoreError::Validation(_)))
        ));
        assert!(matches!(
            parse_line("diet paleo"),
            Err(CommandError::Invalid(_))
        ));
        assert!(matches!(
            parse_line("cuisine martian"),
            Err(CommandError::Invalid(CoreError::Validation(_)))
        ));
        assert_eq!(parse_line("rm"), Err(CommandError::MissingArgument("rm")));
        assert_eq!(
            parse_line(":frobnicate now"),
            Err(CommandError::Unknown(":frobnicate".to_string()))
        );
    }

    #[test]
    fn test_lookups() {
        assert_eq!(parsed("subs butter"), Input::Substitutes("butter".to_string()));
        assert_eq!(parsed("pairs tomato"), Input::Pairings("tomato".to_string()));
        assert_eq!(parsed("cuisines"), Input::Cuisines);
    }
}
