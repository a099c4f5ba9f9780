use anyhow::{Context, Result};
use colored::Colorize;
use std::sync::Arc;

use crate::{
    api::ApiClient,
    app::{get_data_dir, load_config, Config},
    chat::ChatWidget,
    cli::{handle_command, Cli, Commands, OutputFormat},
    sections::PortfolioData,
    tui::{run_ui, App},
    utils::{init_logger, log_debug, log_error, log_info, log_warn, LogTarget},
};

use super::NonInteractiveRunner;

/// Main runtime orchestrator
pub struct Orchestrator {
    cli: Cli,
    config: Config,
}

impl Orchestrator {
    /// Create a new orchestrator from CLI args
    pub fn new(cli: Cli) -> Result<Self> {
        let mut config = match load_config(cli.config.as_deref()) {
            Ok(cfg) => cfg,
            // An explicitly requested file must load
            Err(e) if cli.config.is_some() => return Err(e),
            Err(e) => {
                eprintln!("⚠️  Failed to load config: {}. Using defaults.", e);
                Config::default()
            }
        };

        if let Some(url) = &cli.api_url {
            config.api.base_url = url.clone();
        }

        Ok(Self { cli, config })
    }

    /// Run the orchestrator. Returns false when the process should exit
    /// with a failure code.
    pub async fn run(self) -> Result<bool> {
        let command = self.cli.command.clone().unwrap_or(Commands::Chat);
        let interactive = matches!(command, Commands::Chat);

        if self.cli.verbose {
            let target = if interactive {
                LogTarget::File(get_data_dir()?.join("folio.log"))
            } else {
                LogTarget::Stderr
            };
            init_logger(target)?;
        }

        if let Commands::Ask {
            message,
            session,
            output_format,
        } = &command
        {
            return self.ask(message, session.as_deref(), *output_format).await;
        }

        if handle_command(&command, &self.config).await? {
            return Ok(true);
        }

        self.run_interactive().await?;
        Ok(true)
    }

    async fn ask(
        &self,
        message: &str,
        session: Option<&str>,
        format: OutputFormat,
    ) -> Result<bool> {
        let mut runner = NonInteractiveRunner::new(&self.config, session)?;
        let result = runner.execute(message.to_string()).await;
        println!("{}", runner.format_result(&result, format));
        Ok(result.is_success())
    }

    async fn run_interactive(&self) -> Result<()> {
        let client = ApiClient::from_config(&self.config.api)
            .context("Failed to create API client")?;

        println!("💼 Loading portfolio from {}", client.base_url().green());
        log_info("💼", format!("Loading portfolio from {}", client.base_url()));

        let data = PortfolioData::load(&client).await;
        if data.profile.is_none() {
            log_warn("⚠️", "Profile unavailable, showing defaults");
        }

        let api_url = client.base_url().to_string();
        let mut widget = ChatWidget::new(Arc::new(client), self.config.chat.discard_on_close);
        if self.config.chat.open_on_start {
            widget.open();
        }

        log_debug(format!(
            "Chat discard_on_close = {}",
            self.config.chat.discard_on_close
        ));

        let app = App::new(widget, data, &self.config.ui, api_url);
        run_ui(app).await.inspect_err(|e| log_error("❌", format!("UI error: {}", e)))
    }
}
