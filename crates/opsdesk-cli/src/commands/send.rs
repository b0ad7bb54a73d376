use super::context::CliContext;
use super::format_message;
use anyhow::{Result, bail};
use opsdesk_application::SendOutcome;
use opsdesk_core::subject::{EntityKind, Subject};

pub async fn run(
    context: &CliContext,
    kind: EntityKind,
    id: &str,
    actor: &str,
    text: &str,
) -> Result<()> {
    let chat = context.chat_service().with_actor(actor);
    chat.set_subject(Subject::new(id, kind));

    match chat.send(text).await {
        SendOutcome::Applied(message) => {
            println!("{}", format_message(&message));
            Ok(())
        }
        SendOutcome::Skipped => bail!("Nothing to send: entity id, actor and text are required"),
        SendOutcome::Failed(e) => bail!("Failed to send message: {}", e),
    }
}
