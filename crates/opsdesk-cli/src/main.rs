use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use opsdesk_core::subject::EntityKind;

mod commands;

#[derive(Parser)]
#[command(name = "opsdesk")]
#[command(about = "OPSDESK CLI - entity conversations of the admin console", long_about = None)]
struct Cli {
    /// Config file (defaults to ~/.config/opsdesk/config.toml)
    #[arg(long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Log everything opsdesk does
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct EntityArgs {
    /// Entity kind: request or project
    #[arg(long)]
    kind: EntityKind,

    /// Entity id
    #[arg(long)]
    id: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the conversation attached to an entity
    History {
        #[command(flatten)]
        entity: EntityArgs,

        /// Print the view state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Post a message to an entity's conversation
    Send {
        #[command(flatten)]
        entity: EntityArgs,

        /// Id of the administrator sending the message
        #[arg(long)]
        actor: String,

        /// Message text
        text: String,
    },
    /// Switch between several entities without waiting, then print what is shown
    Watch {
        /// Entity kind: request or project
        #[arg(long)]
        kind: EntityKind,

        /// Entity ids, visited in order
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let context = commands::context::CliContext::load(cli.config.as_deref(), cli.verbose)?;

    let result = match cli.command {
        Commands::History { entity, json } => {
            commands::history::run(&context, entity.kind, &entity.id, json).await
        }
        Commands::Send {
            entity,
            actor,
            text,
        } => commands::send::run(&context, entity.kind, &entity.id, &actor, &text).await,
        Commands::Watch { kind, ids } => commands::watch::run(&context, kind, &ids).await,
        Commands::Config => commands::config::run(&context),
    };

    context.shutdown();
    result
}
