#![deny(unsafe_code)]

//! Reelmark CLI — queue page or link URLs for import into a self-hosted
//! video catalog, with optional tag groups.

mod surfaces;

use std::io::Read as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use reelmark_config::{AppConfig, TagGroupConfig, decode_groups, encode_groups};
use reelmark_core::menu::{self, MENU_ASK, MENU_PLAIN};
use reelmark_core::surface::PromptSurface;
use reelmark_core::{ImportController, MenuClick, SettingsHub, SettingsSnapshot};

use surfaces::{FixedPrompt, SilentMenu, StdinPrompt, TerminalNotifier};

/// Reelmark — queue links for import into a self-hosted video catalog.
#[derive(Parser)]
#[command(name = "reelmark", version, about, long_about = None)]
struct Cli {
    /// Path to configuration file.
    #[arg(short, long, default_value = "reelmark.toml")]
    config: PathBuf,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Queue a URL for import into the cataloging service.
    Import {
        /// The page or link URL to import.
        url: String,

        /// Apply the tags of the named group.
        #[arg(long, conflicts_with_all = ["tags", "ask"])]
        group: Option<String>,

        /// Apply these comma-separated tags verbatim.
        #[arg(long, conflicts_with = "ask")]
        tags: Option<String>,

        /// Prompt for tags on stdin before submitting.
        #[arg(long)]
        ask: bool,
    },

    /// Print the context-menu tree derived from the configuration.
    Menu,

    /// Print the configured tag groups in their flat text form.
    Groups {
        /// Read a flat text block from stdin and print it as `[[groups]]` TOML.
        #[arg(long)]
        parse: bool,
    },

    /// Validate and display configuration.
    Config {
        /// Show the resolved configuration.
        #[arg(long)]
        show: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up tracing subscriber with verbosity level
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Import {
            url,
            group,
            tags,
            ask,
        } => cmd_import(load_config(&cli.config).await?, url, group, tags, ask).await?,
        Commands::Menu => cmd_menu(load_config(&cli.config).await?),
        Commands::Groups { parse } => cmd_groups(load_config(&cli.config).await?, parse)?,
        Commands::Config { show } => cmd_config(&cli.config, show).await?,
    }

    Ok(())
}

async fn cmd_import(
    config: AppConfig,
    url: String,
    group: Option<String>,
    tags: Option<String>,
    ask: bool,
) -> Result<()> {
    let hub = SettingsHub::new(config);

    let node_id = if ask || tags.is_some() {
        MENU_ASK.to_string()
    } else if let Some(label) = group {
        let rx = hub.subscribe();
        let snapshot = rx.borrow();
        let group = snapshot
            .groups
            .iter()
            .find(|g| g.label == label)
            .ok_or_else(|| anyhow::anyhow!("no tag group labelled {label:?} in the configuration"))?;
        menu::group_menu_id(group.id)
    } else {
        MENU_PLAIN.to_string()
    };

    // --tags feeds the interactive seam a fixed response, so verbatim tags
    // go through the same split-and-trim path as a real prompt.
    let prompt: Arc<dyn PromptSurface> = match tags {
        Some(tags) => Arc::new(FixedPrompt::new(tags)),
        None => Arc::new(StdinPrompt),
    };

    let controller = ImportController::new(
        &hub,
        Arc::new(SilentMenu),
        prompt,
        Arc::new(TerminalNotifier),
    );

    controller
        .handle_click(&MenuClick {
            node_id,
            link_url: Some(url.clone()),
            page_url: url,
        })
        .await;

    Ok(())
}

fn cmd_menu(config: AppConfig) {
    let snapshot = SettingsSnapshot::from(config);
    for node in menu::build_menu(&snapshot.groups) {
        let indent = if node.parent_id.is_some() { "  " } else { "" };
        println!("{indent}{}  [{}]", node.label, node.id);
    }
}

fn cmd_groups(config: AppConfig, parse: bool) -> Result<()> {
    if parse {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        let groups = decode_groups(&text);

        #[derive(serde::Serialize)]
        struct GroupsOut {
            groups: Vec<TagGroupConfig>,
        }

        let mut out = AppConfig::default();
        out.set_tag_groups(&groups);
        let toml_str = toml::to_string_pretty(&GroupsOut { groups: out.groups })
            .map_err(|e| anyhow::anyhow!("TOML error: {e}"))?;
        print!("{toml_str}");
    } else {
        println!("{}", encode_groups(&config.tag_groups()));
    }
    Ok(())
}

async fn cmd_config(config_path: &Path, show: bool) -> Result<()> {
    let config = load_config(config_path).await?;
    if show {
        let toml_str =
            toml::to_string_pretty(&config).map_err(|e| anyhow::anyhow!("TOML error: {e}"))?;
        println!("{toml_str}");
    } else {
        println!("Configuration at '{}' is valid.", config_path.display());
    }
    Ok(())
}

async fn load_config(path: &Path) -> Result<AppConfig> {
    if path.exists() {
        AppConfig::load(path).await.map_err(|e| anyhow::anyhow!(e))
    } else {
        info!(path = %path.display(), "Config file not found, using defaults");
        Ok(AppConfig::default())
    }
}
