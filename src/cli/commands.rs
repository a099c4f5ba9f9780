use anyhow::{Context, Result};
use colored::Colorize;

use crate::{
    api::ApiClient,
    app::{get_config_dir, init_config, Config},
    sections::{render_section, LineKind, PortfolioData, Section, SectionLine},
};

use super::Commands;

/// Handle CLI subcommands. Returns false when the command should fall
/// through to the interactive or non-interactive runners.
pub async fn handle_command(command: &Commands, config: &Config) -> Result<bool> {
    match command {
        Commands::Chat | Commands::Ask { .. } => Ok(false),
        Commands::Profile => {
            print_section(Section::Hero, config).await?;
            Ok(true)
        }
        Commands::Experience => {
            print_section(Section::Experience, config).await?;
            Ok(true)
        }
        Commands::Projects => {
            print_section(Section::Projects, config).await?;
            Ok(true)
        }
        Commands::Skills => {
            print_section(Section::Skills, config).await?;
            Ok(true)
        }
        Commands::Contact => {
            print_section(Section::Contact, config).await?;
            Ok(true)
        }
        Commands::Init => {
            let (path, created) = init_config()?;
            if created {
                println!("Created default configuration at: {}", path.display());
            } else {
                println!("Configuration already exists at: {}", path.display());
            }
            Ok(true)
        }
        Commands::Status => {
            show_status(config).await?;
            Ok(true)
        }
        Commands::Version => {
            show_version();
            Ok(true)
        }
    }
}

/// Fetch what one section needs and print it
pub async fn print_section(section: Section, config: &Config) -> Result<()> {
    let client = ApiClient::from_config(&config.api)?;
    let mut data = PortfolioData::default();

    match section {
        Section::Hero | Section::Contact => {
            data.profile = Some(client.profile().await.context("Failed to load profile")?);
        }
        Section::Experience => {
            data.experiences = client
                .experiences()
                .await
                .context("Failed to load experiences")?;
        }
        Section::Projects => {
            data.projects = client.projects().await.context("Failed to load projects")?;
        }
        Section::Skills => {
            data.skills = client.skills().await.context("Failed to load skills")?;
        }
    }

    for line in render_section(section, &data) {
        println!("{}", colorize(&line));
    }
    Ok(())
}

fn colorize(line: &SectionLine) -> String {
    match line.kind {
        LineKind::Heading => line.text.cyan().bold().to_string(),
        LineKind::Subheading => line.text.green().bold().to_string(),
        LineKind::Body => line.text.clone(),
        LineKind::Meta => line.text.dimmed().to_string(),
        LineKind::Tag => line.text.yellow().to_string(),
        LineKind::Blank => String::new(),
    }
}

/// Show version information
pub fn show_version() {
    println!("Folio v{}", env!("CARGO_PKG_VERSION"));
    println!("   Browse a portfolio and chat with its AI assistant");
}

/// Show API reachability and where configuration is read from
async fn show_status(config: &Config) -> Result<()> {
    println!("Folio Status:");
    println!();

    let client = ApiClient::from_config(&config.api)?;
    if client.is_reachable().await {
        println!("  [OK] API: Reachable at {}", client.base_url().green());
    } else {
        println!("  [ERROR] API: Not reachable at {}", client.base_url().red());
    }

    let config_path = get_config_dir()?.join("config.toml");
    if config_path.exists() {
        println!("  [OK] Configuration: {}", config_path.display());
    } else {
        println!("  [WARNING] Configuration: Not found (using defaults)");
    }

    println!(
        "  Chat: discard reply on close = {}",
        config.chat.discard_on_close
    );
    println!();
    Ok(())
}
