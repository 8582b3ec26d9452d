use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use themekit::config::ThemekitConfig;
use themekit::{
    FileStorage, PersistConfig, SystemSchemeListener, ThemeError, ThemeResult, ThemeStore,
};
use tokens::{ThemeConfig, ThemeMode, ThemeModeConfig, ThemeSource};

#[derive(Debug, Parser)]
#[command(
    name = "themekit",
    about = "Inspect and switch the persisted light/dark theme",
    version
)]
pub struct Cli {
    /// Path to a themekit.toml file.
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the persisted theme, overriding the config file.
    #[arg(long = "storage-dir", global = true)]
    pub storage_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the current theme.
    Show {
        /// Use the tab-bar mode instead of the main mode.
        #[arg(long)]
        tab: bool,

        /// Print only the color table.
        #[arg(long)]
        colors: bool,

        /// Tab-bar mode override for this run.
        #[arg(long = "tab-mode", value_enum)]
        tab_mode: Option<ModeArg>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Print the stored mode config and the mode in effect.
    Mode {
        /// Tab-bar mode override for this run.
        #[arg(long = "tab-mode", value_enum)]
        tab_mode: Option<ModeArg>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Switch to a fixed mode and persist it.
    Switch {
        #[arg(value_enum)]
        mode: ModeArg,
    },

    /// Follow the system color scheme and persist that choice.
    System,

    /// Print the tab-bar mode. Without an override this is the main mode.
    Tab,

    /// Remove the persisted theme.
    Reset,

    /// Follow system scheme changes until interrupted.
    Watch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Light,
    Dark,
}

impl From<ModeArg> for ThemeMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Light => ThemeMode::Light,
            ModeArg::Dark => ThemeMode::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Toml,
}

#[derive(Debug, Serialize)]
struct ModeReport {
    config: ThemeModeConfig,
    mode: ThemeMode,
    #[serde(rename = "tabMode")]
    tab_mode: ThemeMode,
}

fn render<T: Serialize>(value: &T, format: OutputFormat) -> ThemeResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Toml => Ok(toml::to_string_pretty(value)?),
    }
}

fn mode_report(store: &ThemeStore) -> ModeReport {
    let state = store.state();
    ModeReport {
        config: state.config,
        mode: state.mode,
        tab_mode: store.tab_theme_mode(),
    }
}

async fn open_store(cli: &Cli, config: &ThemekitConfig) -> ThemeResult<ThemeStore> {
    let persist = match &cli.storage_dir {
        Some(dir) => PersistConfig::new(
            config.storage().key(),
            Arc::new(FileStorage::new(dir.clone())),
        ),
        None => config.persist_config()?,
    };

    let store = ThemeStore::create(persist, Arc::new(config.scheme_provider()))?;
    store.ready().await;

    if let Some(responsive) = config.responsive().responsive() {
        store.set_theme_config(ThemeConfig {
            responsive: Some(responsive),
            ..Default::default()
        });
    }
    Ok(store)
}

pub async fn run(cli: Cli, config: ThemekitConfig) -> ThemeResult<()> {
    if let Some(output) = execute(cli, config).await? {
        println!("{output}");
    }
    Ok(())
}

/// Runs one command and returns what it prints. `watch` prints as it goes
/// and returns `None`.
async fn execute(cli: Cli, config: ThemekitConfig) -> ThemeResult<Option<String>> {
    let store = open_store(&cli, &config).await?;

    let output = match cli.command {
        Commands::Show {
            tab,
            colors,
            tab_mode,
            format,
        } => {
            apply_tab_mode(&store, tab_mode);
            let source = if tab {
                ThemeSource::TabMode
            } else {
                ThemeSource::Mode
            };
            let theme = store.theme_for(source);
            if colors {
                render(&theme.colors, format)?
            } else {
                render(&theme, format)?
            }
        }
        Commands::Mode { tab_mode, format } => {
            apply_tab_mode(&store, tab_mode);
            render(&mode_report(&store), format)?
        }
        Commands::Switch { mode } => {
            store.set_mode_config(ThemeMode::from(mode).into());
            store.flush().await;
            store.current_theme_mode().to_string()
        }
        Commands::System => {
            let mode = store.service().set_system_mode();
            store.persist_state();
            store.flush().await;
            format!("system ({mode})")
        }
        Commands::Tab => store.tab_theme_mode().to_string(),
        Commands::Reset => {
            store.reset_persisted().await?;
            "reset".to_string()
        }
        Commands::Watch => {
            watch(&store).await?;
            return Ok(None);
        }
    };

    Ok(Some(output))
}

fn apply_tab_mode(store: &ThemeStore, tab_mode: Option<ModeArg>) {
    if let Some(mode) = tab_mode {
        store.service().set_tab_mode(Some(mode.into()));
    }
}

async fn watch(store: &ThemeStore) -> ThemeResult<()> {
    let listener = SystemSchemeListener::attach(
        store,
        Some(Arc::new(|mode| log::info!("System scheme is now {mode}"))),
    );

    let mut changes = store.subscribe();
    println!("{}", store.current_theme_mode());

    loop {
        tokio::select! {
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
                let mode = changes.borrow_and_update().mode;
                println!("{mode}");
            }
            signal = tokio::signal::ctrl_c() => {
                signal.map_err(ThemeError::from)?;
                break;
            }
        }
    }

    listener.detach();
    Ok(())
}
