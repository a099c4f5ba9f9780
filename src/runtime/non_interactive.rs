use anyhow::Result;
use serde::Serialize;

use crate::{
    api::{ApiClient, ChatBackend},
    app::Config,
    chat::{Dispatcher, SendOutcome},
    cli::OutputFormat,
};

/// Result of a non-interactive run
#[derive(Debug, Serialize)]
pub struct NonInteractiveResult {
    /// The question that was sent
    pub prompt: String,
    /// The assistant's reply, or the fallback text on failure
    pub response: String,
    /// Session to pass back with `--session` to continue
    pub session_id: Option<String>,
    /// How the turn ended
    #[serde(flatten)]
    pub outcome: SendOutcome,
    /// Metadata about the execution
    pub metadata: ExecutionMetadata,
}

impl NonInteractiveResult {
    pub fn is_success(&self) -> bool {
        self.outcome == SendOutcome::Replied
    }
}

#[derive(Debug, Serialize)]
pub struct ExecutionMetadata {
    /// API the question went to
    pub api_url: String,
    /// Execution time in milliseconds
    pub duration_ms: u128,
}

/// Runs a single chat turn outside the TUI
pub struct NonInteractiveRunner {
    backend: Box<dyn ChatBackend>,
    api_url: String,
    dispatcher: Dispatcher,
}

impl NonInteractiveRunner {
    /// Create a runner from configuration, optionally resuming a session
    pub fn new(config: &Config, session: Option<&str>) -> Result<Self> {
        let client = ApiClient::from_config(&config.api)?;
        let api_url = client.base_url().to_string();
        Ok(Self::with_backend(Box::new(client), api_url, session))
    }

    pub fn with_backend(
        backend: Box<dyn ChatBackend>,
        api_url: String,
        session: Option<&str>,
    ) -> Self {
        let dispatcher = match session {
            Some(id) => Dispatcher::with_session(id),
            None => Dispatcher::new(),
        };

        Self {
            backend,
            api_url,
            dispatcher,
        }
    }

    /// Send one prompt and report what happened
    pub async fn execute(&mut self, prompt: String) -> NonInteractiveResult {
        let start_time = std::time::Instant::now();

        let outcome = self.dispatcher.send(self.backend.as_ref(), &prompt).await;

        let response = match outcome {
            SendOutcome::Rejected(_) => String::new(),
            _ => self
                .dispatcher
                .store()
                .last()
                .map(|m| m.content().to_string())
                .unwrap_or_default(),
        };

        NonInteractiveResult {
            prompt,
            response,
            session_id: self.dispatcher.store().session_id().map(str::to_string),
            outcome,
            metadata: ExecutionMetadata {
                api_url: self.api_url.clone(),
                duration_ms: start_time.elapsed().as_millis(),
            },
        }
    }

    /// Format the result according to the output format
    pub fn format_result(&self, result: &NonInteractiveResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(result).unwrap_or_else(|e| {
                format!("{{\"error\": \"Failed to serialize result: {}\"}}", e)
            }),
            OutputFormat::Text => {
                let mut output = String::new();
                match result.outcome {
                    SendOutcome::Rejected(_) => output.push_str("Nothing to send."),
                    _ => output.push_str(&result.response),
                }
                if let Some(session) = &result.session_id {
                    output.push_str(&format!("\n\n--- session: {} ---", session));
                }
                output
            }
        }
    }
}
