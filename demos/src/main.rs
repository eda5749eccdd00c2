//! Interactive chef assistant chat.
//!
//! ## Setup
//!
//! ```bash
//! export OPENAI_API_KEY="your-openai-api-key"
//! export EXA_API_KEY="your-exa-api-key"
//!
//! cargo run --bin chef-chat
//! ```
//!
//! Type a cooking question and get the final answer plus the reasoning
//! trace behind it. Ctrl-D (or an empty line) exits.

use anyhow::Context;
use mirepoix::{
    agent::{ReactAgent, react::TraceStep},
    config::Settings,
    llm::SiumaiModel,
    tool::{ToolRegistry, builtin::{ExaSearchClient, RecipeSearchTool}},
};
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::{Level, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    // Missing credentials are fatal here, before any loop runs.
    let settings = Settings::from_env().context("missing required credentials")?;

    let model = SiumaiModel::openai(&settings)
        .await
        .context("failed to build completion model")?;

    let mut registry = ToolRegistry::new();
    let search_client = ExaSearchClient::new(settings.exa_api_key.clone());
    registry.register(Arc::new(RecipeSearchTool::new(search_client)))?;
    let registry = Arc::new(registry);

    info!("tool registry ready with {} tools", registry.len());

    let agent = ReactAgent::new(Arc::new(model), registry);
    let mut session = agent.new_session();

    println!("Chef assistant ready. Ask about cooking, recipes, or diet.");

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let question = line.trim();
        if question.is_empty() {
            break;
        }

        match agent.query(&mut session, question).await {
            Ok(output) => {
                println!("\n{}\n", output.answer);
                render_trace(&output.trace.steps);
            }
            Err(e) => {
                eprintln!("error ({}): {e}", e.category());
            }
        }
    }

    Ok(())
}

fn render_trace(steps: &[TraceStep]) {
    if steps.is_empty() {
        return;
    }
    println!("--- reasoning trace ---");
    for step in steps {
        match step {
            TraceStep::Thought { text } => println!("Thought: {text}"),
            TraceStep::Action { tool, input } => println!("Action: {tool}: {input}"),
            TraceStep::Observation { text } => println!("Observation: {text}"),
        }
    }
    println!("-----------------------");
}
