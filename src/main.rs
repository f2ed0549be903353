//! termenu demo - browse a small menu tree on the terminal
//!
//! Usage: termenu [--config <FILE>] [-v...] [--log-file <FILE>]
//!
//! Keys: Up/Down move, Enter/Right select, Left/Esc/Backspace go back,
//! Ctrl with a back key quits from any depth, F5 redraws.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use termenu::config::{load_or_default, Config};
use termenu::terminal::detect_capabilities;
use termenu::{ConsoleSurface, Entry, Menu, MenuId, MenuTree, Navigator, Renderer, Value};

/// termenu - keyboard-driven terminal menus
#[derive(Parser, Debug)]
#[command(name = "termenu")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to ~/.config/termenu/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let (config, warnings) = load_or_default(cli.config.as_deref())?;
    for w in &warnings {
        let line = w.line.map(|l| format!(":{l}")).unwrap_or_default();
        match &w.suggestion {
            Some(s) => eprintln!(
                "warning: unknown key '{}' in {}{} (did you mean '{}'?)",
                w.key,
                w.file.display(),
                line,
                s
            ),
            None => eprintln!(
                "warning: unknown key '{}' in {}{}",
                w.key,
                w.file.display(),
                line
            ),
        }
    }

    let caps = detect_capabilities();
    if !caps.is_interactive() {
        bail!("termenu needs an interactive terminal on stdin and stdout");
    }

    let (tree, root) = build_menu_tree(&config);
    let mut navigator = Navigator::new(tree, root, ConsoleSurface::stdout())?
        .with_renderer(Renderer::new(config.render_style(caps.supports_unicode)))
        .with_key_bindings(config.key_bindings());

    let reason = navigator.run()?;
    tracing::info!(?reason, "menu closed");
    Ok(ExitCode::from(reason.code()))
}

fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        // stdout carries the menu frame
        None => builder.with_writer(io::stderr).init(),
    }
    Ok(())
}

fn build_menu_tree(config: &Config) -> (MenuTree, MenuId) {
    let margin = config.display.margin;
    let mut tree = MenuTree::new();

    let second = tree.insert(
        Menu::from_entries(
            "Test Menu 2",
            [
                Entry::text(1, "Hello There!"),
                Entry::exit(2, "Exit", 1),
                Entry::input(3, "Number", Value::Int(12345)),
            ],
        )
        .with_margin(margin),
    );

    let size = |id: u32, label: &str| {
        Entry::checkbox(id, label, 1).on_activate(|ctx| ctx.check_exclusively())
    };
    let options = tree.insert(
        Menu::from_entries(
            "Options",
            [
                Entry::text(1, "Size"),
                size(2, "Small"),
                size(3, "Medium").with_checked(true),
                size(4, "Large"),
                Entry::text(5, ""),
                Entry::input(6, "Name", Value::Text("guest".to_string())),
                Entry::input(7, "Ratio", Value::Float(1.5)),
                Entry::input(8, "Enabled", Value::Bool(true)),
            ],
        )
        .with_margin(margin),
    );

    let mut added = 0u32;
    let root = tree.insert(
        Menu::from_entries(
            "Test Menu 1",
            [
                Entry::text(1, "Test text"),
                Entry::text(2, "More test text"),
                Entry::checkbox(3, "Random check box", 0),
                Entry::submenu(4, "Menu 2", second),
                Entry::submenu(5, "Options", options),
                Entry::action(6, "Add a line", move |ctx| {
                    added += 1;
                    let line = Entry::text(100 + added, format!("Added line {added}"));
                    if let Err(err) = ctx.menu().add_entry(line) {
                        tracing::warn!("{err}");
                    }
                }),
                Entry::exit(7, "Quit", 0),
            ],
        )
        .with_margin(margin),
    );

    (tree, root)
}
