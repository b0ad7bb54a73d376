use super::context::CliContext;
use super::print_view;
use anyhow::Result;
use futures::future::join_all;
use opsdesk_application::LoadOutcome;
use opsdesk_core::subject::{EntityKind, Subject};
use std::sync::Arc;

/// Visits every id without waiting for its history, like a user clicking
/// through a list. Only the last entity's conversation is printed.
pub async fn run(context: &CliContext, kind: EntityKind, ids: &[String]) -> Result<()> {
    let chat = Arc::new(context.chat_service());
    let mut loads = Vec::with_capacity(ids.len());

    for id in ids {
        chat.set_subject(Subject::new(id.as_str(), kind));
        let loader = chat.clone();
        loads.push(tokio::spawn(async move { loader.load().await }));
        tokio::task::yield_now().await;
    }

    let outcomes = join_all(loads).await;
    let discarded = outcomes
        .iter()
        .filter(|outcome| matches!(outcome, Ok(LoadOutcome::Discarded)))
        .count();
    tracing::info!("[watch] {} of {} loads discarded as stale", discarded, ids.len());

    if let Some(subject) = chat.subject() {
        println!("== {}", subject);
    }
    print_view(&chat.snapshot());
    Ok(())
}
