//! Terminal front end: resolve and toggle the stored theme preference,
//! follow the OS color scheme, or preview the typewriter headline.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::{style, Term};
use tracing_subscriber::EnvFilter;

use folio::events::{Event, EventHub};
use folio::page::memory::MemoryPage;
use folio::site::Site;
use folio::{OsColorScheme, SiteConfig, StorageScope, ThemeState};

const DEFAULT_STORE: &str = ".folio-theme.json";

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Portfolio site behavior, from the terminal")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Preference file, overriding the configured one
    #[arg(long, global = true, value_name = "PATH")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the theme a page would load with
    Resolve,
    /// Flip the stored theme preference
    Toggle,
    /// Follow OS color scheme changes until interrupted
    Watch {
        #[arg(long, default_value_t = 1000)]
        interval_ms: u64,
    },
    /// Play the typewriter headline
    Type {
        #[arg(long, default_value_t = 60)]
        ticks: usize,
        /// Do not wait between frames
        #[arg(long)]
        fast: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SiteConfig::default(),
    };
    if let Some(store) = cli.store {
        config.theme.storage_path = Some(store);
    }
    if config.theme.scope == StorageScope::Persistent && config.theme.storage_path.is_none() {
        config.theme.storage_path = Some(PathBuf::from(DEFAULT_STORE));
    }

    let page = MemoryPage::complete();
    let mut hub = EventHub::new();
    let mut site = Site::mount_configured(
        &page,
        &config,
        Box::new(OsColorScheme::new()),
        &mut hub,
    );

    match cli.command {
        Command::Resolve => {
            let source = if site.theme().stored_preference().is_some() {
                "stored preference"
            } else {
                "system color scheme"
            };
            println!("{} (from {})", paint(site.initial_theme()), source);
            print_affordance(&page);
        }
        Command::Toggle => {
            hub.dispatch(&Event::ThemeToggleClicked);
            let state = site
                .theme()
                .current_state()
                .context("theme toggle did not apply")?;
            println!("{}", paint(state));
            print_affordance(&page);
        }
        Command::Watch { interval_ms } => {
            let scheme = OsColorScheme::new();
            scheme.poll();
            println!(
                "{} - watching for color scheme changes",
                paint(site.initial_theme())
            );
            loop {
                thread::sleep(Duration::from_millis(interval_ms));
                if let Some(prefers_dark) = scheme.poll() {
                    hub.dispatch(&Event::ColorSchemeChanged { prefers_dark });
                    if let Some(state) = site.theme().current_state() {
                        let system = ThemeState::from_prefers_dark(prefers_dark);
                        println!("system now prefers {}: page is {}", system, paint(state));
                    }
                }
            }
        }
        Command::Type { ticks, fast } => {
            let term = Term::stdout();
            let Some(text) = page.typed_text.clone() else {
                return Ok(());
            };
            for _ in 0..ticks {
                let Some(delay) = site.advance_typewriter() else {
                    break;
                };
                term.clear_line()?;
                term.write_str(&text.text())?;
                if !fast {
                    thread::sleep(delay);
                }
            }
            term.write_line("")?;
        }
    }
    Ok(())
}

fn paint(state: ThemeState) -> String {
    match state {
        ThemeState::Dark => style(state).bold().magenta().to_string(),
        ThemeState::Light => style(state).bold().yellow().to_string(),
    }
}

fn print_affordance(page: &MemoryPage) {
    if let Some(affordance) = page.theme_toggle.as_ref().and_then(|t| t.shown()) {
        println!("toggle: {} {}", affordance.icon, style(affordance.label).dim());
    }
}
