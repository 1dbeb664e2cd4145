use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use tabnav::config::Config;
use tabnav::logging::init_tracing;
use tabnav::navigation::NavigationCoordinator;
use tabnav::shell::{OutputFormat, Shell};

#[derive(Parser)]
#[command(name = "tabnav", about = "Multi-tab navigation coordinator shell")]
struct Args {
    /// Config file (default: <config dir>/tabnav/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read shell commands from a file instead of stdin
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Print state as JSON
    #[arg(long)]
    json: bool,

    /// Deep links to open before the shell starts
    links: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    init_tracing(&config.logging);
    tracing::debug!(?config, "Configuration loaded");

    let coordinator = NavigationCoordinator::with_config(&config.coordinator);
    for link in &args.links {
        coordinator.handle_deep_link(link);
    }

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut shell = Shell::new(coordinator, config.shell, format);
    let mut stdout = io::stdout().lock();

    match (&args.script, args.links.is_empty()) {
        (Some(script), _) => {
            let file = File::open(script)
                .with_context(|| format!("opening script '{}'", script.display()))?;
            shell.run(BufReader::new(file), &mut stdout, false)?;
        }
        (None, true) => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            shell.run(stdin.lock(), &mut stdout, interactive)?;
        }
        (None, false) => shell.print_state(&mut stdout)?,
    }

    Ok(())
}
