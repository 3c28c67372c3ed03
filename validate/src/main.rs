//! Offline checker for the Brave light tracker.
//!
//! Runs the tracker against the in-memory host so toast templates, table
//! overrides and RelicMagicite patches can be checked without a game client.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::filter::EnvFilter;
use zodiac_core::config::{config_path, load_config_or_default, load_file, save_file};
use zodiac_core::game_data::{
    StaticMessageSheet, TableOverrides, default_overrides_path, load_overrides,
};
use zodiac_core::host::InventoryItem;
use zodiac_core::host::memory::{MemoryAddon, MemoryHost, MemoryInventory};
use zodiac_core::overlay::{
    ANALYZE_TEXT_NODE_ID, LIGHT_TEXT_NODE_ID, RELIC_MAGICITE_ADDON, RELIC_MAGICITE_ADDON_INDEX,
};
use zodiac_core::{BraveManager, ClientLanguage, LightAssessment, ToastOutcome, ZodiacConfig};

#[derive(Parser)]
#[command(version, about = "Check Zodiac Brave toast templates and RelicMagicite patches")]
struct Cli {
    /// Configuration file (defaults to the per-user config)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Table overrides file (defaults to <config dir>/zodiac/tables.toml)
    #[arg(long, global = true)]
    overrides: Option<PathBuf>,

    /// Log message sheet to use instead of the built-in templates
    #[arg(long, global = true)]
    messages: Option<PathBuf>,

    /// Override the configured client language (ja, en, de, fr)
    #[arg(short, long, global = true)]
    language: Option<ClientLanguage>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify toast texts the way the tracker would
    Classify {
        /// Toast texts
        #[arg(required = true)]
        texts: Vec<String>,

        /// Territory the player is in
        #[arg(short, long)]
        territory: Option<u16>,
    },
    /// Preview the RelicMagicite patch for an equipped item
    Patch {
        #[arg(short, long)]
        item: u32,

        #[arg(short, long)]
        spiritbond: u16,

        /// Text the host rendered in the light node
        #[arg(long, default_value = "")]
        light_text: String,

        /// Text the host rendered in the analyze node
        #[arg(long, default_value = "")]
        analyze_text: String,
    },
    /// List the relic and duty tables
    Tables,
    /// Show the effective configuration
    Config {
        /// Print the per-user config file path instead
        #[arg(long)]
        path: bool,

        /// Write the effective configuration to this file
        #[arg(long)]
        save: Option<PathBuf>,
    },
}

/// Initialize logging, writing to ZODIAC_LOG_PATH if set, otherwise stderr.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    if let Ok(path) = std::env::var("ZODIAC_LOG_PATH")
        && let Ok(file) = std::fs::OpenOptions::new().create(true).append(true).open(&path)
    {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_ansi(false)
            .with_writer(file)
            .init();
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    if let Commands::Config { path: true, .. } = cli.command {
        let path = config_path().map_err(|e| e.to_string())?;
        println!("{}", path.display());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => load_file(path).map_err(|e| e.to_string())?,
        None => load_config_or_default(),
    };
    if let Some(language) = cli.language {
        config.language = language;
    }

    let overrides = match cli.overrides.clone().or_else(default_overrides_path) {
        Some(path) => load_overrides(&path).map_err(|e| e.to_string())?,
        None => TableOverrides::default(),
    };
    let sheet = match &cli.messages {
        Some(path) => StaticMessageSheet::load_file(path),
        None => StaticMessageSheet::builtin(),
    }
    .map_err(|e| e.to_string())?;

    let manager = BraveManager::load(&config, &sheet, &overrides).map_err(|e| e.to_string())?;

    match cli.command {
        Commands::Classify { texts, territory } => {
            classify(&manager, &config, &texts, territory);
            Ok(())
        }
        Commands::Patch { item, spiritbond, light_text, analyze_text } => {
            let item = InventoryItem::new(item, spiritbond);
            patch(&manager, &config, item, &light_text, &analyze_text);
            Ok(())
        }
        Commands::Tables => {
            tables(&manager);
            Ok(())
        }
        Commands::Config { save, .. } => {
            println!("{config:#?}");
            if let Some(path) = save {
                save_file(&path, &config).map_err(|e| e.to_string())?;
                tracing::info!(path = %path.display(), "Configuration saved");
            }
            Ok(())
        }
    }
}

fn classify(
    manager: &BraveManager,
    config: &ZodiacConfig,
    texts: &[String],
    territory: Option<u16>,
) {
    for text in texts {
        let mut host = MemoryHost::default();
        host.client.territory = Some(territory.unwrap_or(0));
        let mut handled = false;

        let outcome = manager.on_toast(
            config,
            text,
            &mut handled,
            &host.client,
            &mut host.chat,
            &mut host.bonus_light,
        );

        println!("{text}");
        match outcome {
            None => println!("  error (see log)"),
            Some(ToastOutcome::AlreadyHandled) | Some(ToastOutcome::Unrecognized) => {
                println!("  no match")
            }
            Some(ToastOutcome::Completed { level }) => {
                println!("  {} (row {}): completed, no message", level.name, level.message_id)
            }
            Some(ToastOutcome::Announced { level, assessment, .. }) => {
                println!(
                    "  {} (row {}): +{} light",
                    level.name, level.message_id, level.intensity
                );
                for message in &host.chat.messages {
                    println!("  chat: {message}");
                }
                match assessment {
                    LightAssessment::BonusDetected { duty, .. } => println!(
                        "  bonus: above half of {} ({})",
                        duty.default_light_intensity, duty.name
                    ),
                    LightAssessment::Regular { duty, .. } => println!(
                        "  regular: within half of {} ({})",
                        duty.default_light_intensity, duty.name
                    ),
                    LightAssessment::UnknownTerritory { .. } if territory.is_some() => {
                        println!("  no light data for territory")
                    }
                    LightAssessment::UnknownTerritory { .. } | LightAssessment::Completed => {}
                }
            }
        }
    }
}

fn patch(
    manager: &BraveManager,
    config: &ZodiacConfig,
    item: InventoryItem,
    light_text: &str,
    analyze_text: &str,
) {
    let mut host = MemoryHost::default();
    host.inventory = MemoryInventory::with_mainhand(item);
    host.gui.open_addon(
        RELIC_MAGICITE_ADDON,
        RELIC_MAGICITE_ADDON_INDEX,
        MemoryAddon::new()
            .with_text_node(LIGHT_TEXT_NODE_ID, light_text)
            .with_text_node(ANALYZE_TEXT_NODE_ID, analyze_text),
    );

    let outcome = manager.on_addon_setup(config, &host.inventory, &mut host.gui);
    println!("outcome: {outcome:?}");

    if let Some(addon) = host.gui.addon(RELIC_MAGICITE_ADDON, RELIC_MAGICITE_ADDON_INDEX) {
        for node_id in [LIGHT_TEXT_NODE_ID, ANALYZE_TEXT_NODE_ID] {
            if let Some(text) = addon.node_text(node_id) {
                println!("node {node_id}: {text:?}");
            }
        }
    }
}

fn tables(manager: &BraveManager) {
    println!("Light levels ({:?}):", manager.classifier().language());
    for level in manager.classifier().levels() {
        println!(
            "  {:>2}  {:<10} row {}  {:?}",
            level.intensity, level.name, level.message_id, level.message
        );
    }

    let mut relics: Vec<_> = manager.relics().iter().collect();
    relics.sort_by_key(|(id, _)| *id);
    println!("Relics ({}):", relics.len());
    for (id, relic) in relics {
        println!("  {:>6}  {:<18} {:?}", id, relic.name, relic.slot);
    }

    let mut duties: Vec<_> = manager.duties().iter().collect();
    duties.sort_by_key(|(id, _)| *id);
    println!("Duties ({}):", duties.len());
    for (id, duty) in duties {
        println!("  {:>6}  {:<36} {}", id, duty.name, duty.default_light_intensity);
    }
}
