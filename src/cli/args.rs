use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Browse a portfolio and chat with its AI assistant from the terminal", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output (logs to stderr, or to the log file while the TUI runs)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the API base URL (e.g. http://localhost:8000/api)
    #[arg(long, env = "FOLIO_API_URL", global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Open the interactive portfolio with the chat pane (default)
    Chat,
    /// Ask the assistant a single question
    Ask {
        /// The question to send
        message: String,
        /// Continue an existing conversation
        #[arg(short, long)]
        session: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        output_format: OutputFormat,
    },
    /// Show the profile introduction
    Profile,
    /// Show work experience
    Experience,
    /// Show projects
    Projects,
    /// Show skills
    Skills,
    /// Show contact details
    Contact,
    /// Write a default configuration file
    Init,
    /// Check that the API is reachable
    Status,
    /// Show version information
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    Text,
    /// JSON structured output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_chat() {
        let cli = Cli::try_parse_from(["folio"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_ask_arguments() {
        let cli = Cli::try_parse_from([
            "folio",
            "ask",
            "What projects?",
            "--session",
            "abc123",
            "--output-format",
            "json",
            "--api-url",
            "http://example.test/api",
        ])
        .unwrap();

        assert_eq!(cli.api_url.as_deref(), Some("http://example.test/api"));
        match cli.command {
            Some(Commands::Ask {
                message,
                session,
                output_format,
            }) => {
                assert_eq!(message, "What projects?");
                assert_eq!(session.as_deref(), Some("abc123"));
                assert_eq!(output_format, OutputFormat::Json);
            }
            other => panic!("Expected ask, got {:?}", other),
        }
    }

    #[test]
    fn test_ask_requires_message() {
        assert!(Cli::try_parse_from(["folio", "ask"]).is_err());
    }
}
