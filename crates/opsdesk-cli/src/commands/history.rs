use super::context::CliContext;
use super::print_view;
use anyhow::{Result, bail};
use opsdesk_application::LoadOutcome;
use opsdesk_core::subject::{EntityKind, Subject};

pub async fn run(context: &CliContext, kind: EntityKind, id: &str, json: bool) -> Result<()> {
    let chat = context.chat_service();
    chat.set_subject(Subject::new(id, kind));

    match chat.load().await {
        LoadOutcome::Skipped => bail!("Entity id must not be blank"),
        LoadOutcome::Failed(e) => bail!("Failed to load conversation for {} {}: {}", kind, id, e),
        LoadOutcome::Applied { .. } | LoadOutcome::Discarded => {}
    }

    let view = chat.snapshot();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_view(&view);
    }
    Ok(())
}
