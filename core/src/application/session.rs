use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::Recipe,
        ports::RecipeService,
        services::{ControllerView, RecipeRequestController},
        value_objects::{Complexity, DietaryRestriction, Servings},
    },
};

const COMMAND_BUFFER: usize = 32;

/// User interactions a surface forwards to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    AddIngredient(String),
    RemoveIngredient(String),
    SetPending(String),
    AddPending,
    SetServings(Servings),
    SetComplexity(Complexity),
    SetCuisine(String),
    ToggleRestriction(DietaryRestriction),
    Submit,
    SaveRecipe,
    Shutdown,
}

enum SessionEvent {
    Command(SessionCommand),
    Completed(Result<Recipe, CoreError>),
}

#[derive(Debug, Clone)]
pub struct SessionHandle {
    commands: mpsc::Sender<SessionCommand>,
    view: watch::Receiver<ControllerView>,
}

impl SessionHandle {
    /// Fails only once the session loop has stopped.
    pub async fn send(&self, command: SessionCommand) -> Result<(), SessionCommand> {
        self.commands.send(command).await.map_err(|e| e.0)
    }

    pub fn subscribe(&self) -> watch::Receiver<ControllerView> {
        self.view.clone()
    }

    pub fn view(&self) -> ControllerView {
        self.view.borrow().clone()
    }
}

/// Event loop owning a single controller. Commands and network completions are
/// handled one at a time, so a second submit can only ever observe `Loading`.
pub struct RecipeSession<S> {
    controller: RecipeRequestController<S>,
    commands: mpsc::Receiver<SessionCommand>,
    completions_tx: mpsc::Sender<Result<Recipe, CoreError>>,
    completions: mpsc::Receiver<Result<Recipe, CoreError>>,
}

impl<S> RecipeSession<S>
where
    S: RecipeService + 'static,
{
    pub fn spawn(controller: RecipeRequestController<S>) -> (SessionHandle, JoinHandle<()>) {
        let (commands_tx, commands) = mpsc::channel(COMMAND_BUFFER);
        let (completions_tx, completions) = mpsc::channel(1);

        let handle = SessionHandle {
            commands: commands_tx,
            view: controller.subscribe(),
        };

        let session = Self {
            controller,
            commands,
            completions_tx,
            completions,
        };

        (handle, tokio::spawn(session.run()))
    }

    async fn next_event(&mut self) -> Option<SessionEvent> {
        tokio::select! {
            completion = self.completions.recv() => completion.map(SessionEvent::Completed),
            command = self.commands.recv() => command.map(SessionEvent::Command),
        }
    }

    async fn run(mut self) {
        while let Some(event) = self.next_event().await {
            match event {
                SessionEvent::Completed(result) => self.controller.complete(result),
                SessionEvent::Command(SessionCommand::Shutdown) => break,
                SessionEvent::Command(command) => self.handle(command),
            }
        }
        debug!("recipe session stopped");
    }

    fn handle(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::AddIngredient(text) => {
                self.controller.add_ingredient(&text);
            }
            SessionCommand::RemoveIngredient(ingredient) => {
                self.controller.remove_ingredient(&ingredient);
            }
            SessionCommand::SetPending(text) => self.controller.set_pending_ingredient(text),
            SessionCommand::AddPending => {
                self.controller.add_pending_ingredient();
            }
            SessionCommand::SetServings(servings) => self.controller.set_servings(servings),
            SessionCommand::SetComplexity(complexity) => {
                self.controller.set_complexity(complexity)
            }
            SessionCommand::SetCuisine(selection) => {
                if let Err(e) = self.controller.set_cuisine(&selection) {
                    warn!("ignoring cuisine selection: {}", e);
                }
            }
            SessionCommand::ToggleRestriction(restriction) => {
                self.controller.toggle_restriction(restriction)
            }
            SessionCommand::Submit => self.dispatch(),
            SessionCommand::SaveRecipe => self.controller.save_recipe(),
            SessionCommand::Shutdown => {}
        }
    }

    fn dispatch(&mut self) {
        let Some(request) = self.controller.begin_submit() else {
            return;
        };

        let service = self.controller.service();
        let completions = self.completions_tx.clone();
        tokio::spawn(async move {
            let result = service.generate_recipe(request).await;
            if completions.send(result).await.is_err() {
                debug!("recipe session closed before the response arrived");
            }
        });
    }
}
