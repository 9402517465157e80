use anyhow::Result;
use larder_core::{
    application::{
        create_controller,
        session::{RecipeSession, SessionCommand},
    },
    domain::{
        common::{RecipeConfig, entities::app_errors::CoreError},
        recipe::{ports::RecipeService, services::ControllerView},
    },
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing::info;

use crate::application::{
    commands::{HELP, Input, parse_line},
    render::Screen,
};

async fn redraw_on_change(mut view: watch::Receiver<ControllerView>) {
    while view.changed().await.is_ok() {
        let snapshot = view.borrow_and_update().clone();
        print!("\n{}", Screen(&snapshot));
    }
}

fn print_list(label: &str, result: Result<Vec<String>, CoreError>) {
    match result {
        Ok(items) if items.is_empty() => println!("{label}: none found"),
        Ok(items) => println!("{label}: {}", items.join(", ")),
        Err(e) => eprintln!("! {}", e.user_message()),
    }
}

/// Reads commands from stdin until `quit` or end of input.
pub async fn run(config: RecipeConfig) -> Result<()> {
    info!(api_url = %config.api_url, "starting recipe generator");

    let controller = create_controller(config);
    let lookups = controller.service();
    let (session, session_task) = RecipeSession::spawn(controller);

    println!("{HELP}\n");
    print!("{}", Screen(&session.view()));
    let redraw = tokio::spawn(redraw_on_change(session.subscribe()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = match parse_line(&line) {
            Ok(Some(input)) => input,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("! {e}");
                continue;
            }
        };

        match input {
            Input::Session(command) => {
                if session.send(command).await.is_err() {
                    break;
                }
            }
            Input::Substitutes(ingredient) => {
                let restrictions = session.view().form.dietary_restrictions;
                print_list(
                    "Substitutes",
                    lookups.suggest_substitutes(ingredient, restrictions).await,
                );
            }
            Input::Pairings(ingredient) => {
                print_list("Pairings", lookups.suggest_pairings(ingredient).await);
            }
            Input::Cuisines => print_list("Cuisines", lookups.list_cuisines().await),
            Input::Show => print!("{}", Screen(&session.view())),
            Input::Help => println!("{HELP}"),
            Input::Quit => break,
        }
    }

    // The loop may already be gone if it stopped on its own.
    let _ = session.send(SessionCommand::Shutdown).await;
    session_task.await?;
    redraw.abort();

    Ok(())
}
