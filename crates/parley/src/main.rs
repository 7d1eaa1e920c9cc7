//! Line-based chat shell.
//!
//! The shell owns the session lifecycle and is the only layer that turns
//! tagged failures into user-facing fallback text. The cache is consulted
//! opportunistically for repeated identical inputs; it never sits on the
//! agent's critical path.

use anyhow::Context;
use clap::Parser;
use log::{debug, warn};
use parley_cache::{CacheStore, FileCacheStore, cache_key};
use parley_config::ParleyConfig;
use parley_core::{Agent, ChatSession, Role, fallback, route};
use parley_llm::{ChatModel, LlmError, NvidiaChatClient, TextGenerator};
use parley_memory::WindowBuffer;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Chat with a hosted language model from the terminal.
#[derive(Debug, Parser)]
#[command(name = "parley", version, about)]
struct Cli {
    /// Path to a parley.json5 config file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the configured model name.
    #[arg(long)]
    model: Option<String>,
    /// Override the memory window size.
    #[arg(long)]
    window: Option<usize>,
    /// Disable the reply cache even when configured.
    #[arg(long)]
    no_cache: bool,
}

/// Generator used when no credentials are configured: every turn reports
/// the missing-credentials tag and the shell replies with the capability
/// blurb. The session itself never crashes.
struct OfflineGenerator;

#[async_trait::async_trait]
impl TextGenerator for OfflineGenerator {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
        Err(LlmError::MissingCredentials)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    parley::init_logging();
    let cli = Cli::parse();

    let mut config = parley_config::load(cli.config.as_deref()).context("loading config")?;
    if let Some(model) = cli.model {
        config.model.model_name = model;
    }
    if let Some(window) = cli.window {
        config.memory.window_size = window.max(1);
    }

    let generator = build_generator(&config);
    let agent = Agent::new(
        ChatModel::new(generator),
        WindowBuffer::new(config.memory.window_size),
    );
    let mut session = ChatSession::new(agent);

    let cache = if cli.no_cache { None } else { build_cache(&config) };
    let ttl = config.cache.default_ttl_secs;

    println!("parley - model {} (/quit to exit)", config.model.model_name);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        print!("you> ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        match input {
            "/quit" | "/exit" => break,
            "/clear" => {
                session.reset();
                println!("(history cleared)");
                continue;
            }
            "/stats" => {
                println!("{}", serde_json::to_string_pretty(&session.report())?);
                continue;
            }
            "/history" => {
                for turn in session.transcript() {
                    let speaker = match turn.role {
                        Role::User => "you",
                        Role::Assistant => "parley",
                    };
                    println!("{speaker}: {}", turn.content);
                }
                continue;
            }
            _ => {}
        }

        let reply = respond(&mut session, cache.as_deref(), ttl, input).await;
        println!("parley> {reply}");
    }

    Ok(())
}

/// Produce the reply for one utterance: cache hit, successful turn, or
/// fallback text for a tagged failure.
async fn respond(
    session: &mut ChatSession,
    cache: Option<&dyn CacheStore>,
    ttl: Option<u64>,
    input: &str,
) -> String {
    let key = cache_key("reply", input);
    if !input.is_empty() {
        if let Some(store) = cache {
            if let Some(hit) = store.get(&key).await {
                if let Some(text) = hit.as_str() {
                    debug!("cache hit (key={key})");
                    return text.to_string();
                }
            }
        }
    }

    match session.submit(input).await {
        Ok(result) => {
            if let Some(store) = cache {
                store
                    .set(&key, serde_json::Value::from(result.response.as_str()), ttl)
                    .await;
            }
            result.response
        }
        Err(err) => {
            debug!("turn failed: {err}");
            let text = fallback::text_for(&err);
            session.record_fallback(input, text, route::route(input));
            text.to_string()
        }
    }
}

fn build_generator(config: &ParleyConfig) -> Arc<dyn TextGenerator> {
    let api_key = parley_config::api_key_from(|name| std::env::var(name).ok());
    match NvidiaChatClient::new(&config.model, api_key) {
        Ok(client) => Arc::new(client),
        Err(err) => {
            warn!("starting without endpoint credentials: {err}");
            Arc::new(OfflineGenerator)
        }
    }
}

fn build_cache(config: &ParleyConfig) -> Option<Box<dyn CacheStore>> {
    let path = config.cache.path.as_ref()?;
    match FileCacheStore::new(path) {
        Ok(store) => Some(Box::new(store)),
        Err(err) => {
            warn!("cache disabled (path={path}): {err}");
            None
        }
    }
}
