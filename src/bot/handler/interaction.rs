//! Interaction handler dispatching slash commands.

use serenity::all::{Context, Interaction};

use crate::bot::command::{invocation_from_command, responder::Responder, CommandRegistry};
use crate::state::AppState;

/// Handles the interaction_create event by dispatching slash commands.
///
/// Interactions other than slash commands are ignored. Unknown commands and
/// command failures are logged and reported to the invoker with a generic
/// ephemeral message; neither affects later interactions.
pub async fn handle_interaction_create(
    state: &AppState,
    commands: &CommandRegistry,
    ctx: Context,
    interaction: Interaction,
) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let invocation = invocation_from_command(&command);
    let responder = Responder::new(&ctx, &command);

    tracing::debug!(
        "Received command {} from user {}",
        invocation.name,
        invocation.user_id
    );

    // Failures were already reported to the invoker
    let _ = commands.dispatch(&responder, &invocation, state).await;
}
