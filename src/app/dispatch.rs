use crate::cli::commands::{Cli, Commands};
use anyhow::Result;
use tokio::io::{self, AsyncBufReadExt, BufReader};

use crate::app::status::render_status;
use crate::config::Config;
use crate::llm::GeminiProvider;
use crate::mediator::ResponseMediator;
use crate::session::{ChatSession, SubmitOutcome};
use crate::ui::{render_reply, style};

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Chat {
            message,
            model,
            temperature,
        } => run_chat(&config, message, model, temperature).await,
        Commands::Status => {
            println!("{}", render_status(&config));
            Ok(())
        }
    }
}

fn build_session(
    config: &Config,
    model_override: Option<String>,
    temperature_override: Option<f64>,
) -> ChatSession {
    let model = model_override.unwrap_or_else(|| config.default_model.clone());
    let temperature = temperature_override.unwrap_or(config.default_temperature);

    let provider = GeminiProvider::new(config.api_key.as_deref());
    let mediator = ResponseMediator::new(Box::new(provider), model, temperature);
    ChatSession::new(mediator)
}

/// One-shot with `-m`, otherwise the interactive loop. The loop is
/// sequential: the next line is not read until the previous submission has
/// appended its reply, which is what enforces single-flight here.
async fn run_chat(
    config: &Config,
    message: Option<String>,
    model_override: Option<String>,
    temperature_override: Option<f64>,
) -> Result<()> {
    let mut session = build_session(config, model_override, temperature_override);

    if let Some(message) = message {
        submit_and_render(&mut session, &message).await;
        return Ok(());
    }

    println!(
        "{} {}",
        style::header("Nexus Executive Terminal"),
        style::dim(format!("({})", session.mediator().model()))
    );
    println!(
        "{}",
        style::dim("Describe your objective. /new starts a session, /quit exits.")
    );

    let stdin = io::stdin();
    let reader = BufReader::new(stdin);
    let mut lines = reader.lines();

    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim().to_string();
        if line == "/quit" || line == "/exit" {
            break;
        }
        if line == "/new" {
            session.new_session();
            println!("{}", style::dim("Session cleared."));
            continue;
        }

        submit_and_render(&mut session, &line).await;
    }

    Ok(())
}

async fn submit_and_render(session: &mut ChatSession, input: &str) {
    match session.handle_input(input).await {
        Ok(SubmitOutcome::Replied) => {
            if let Some(reply) = session.last_reply() {
                println!("{}", render_reply(reply));
            }
        }
        Ok(SubmitOutcome::Ignored) => {}
        Err(err) => {
            // Unreachable from the sequential loop; surfaced for shared handles.
            println!("{}", style::yellow(err));
        }
    }
}
