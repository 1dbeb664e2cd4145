//! Line-oriented driver for the coordinator.
//!
//! Stands in for a rendering layer: reads commands, forwards them to
//! [`NavigationCoordinator`] operations and prints the resulting state.

mod command;
mod render;

pub use command::{Command, CommandError, HELP};
pub use render::{render_log, render_state, render_state_json};

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::ShellConfig;
use crate::navigation::{NavigationCoordinator, Subscription};
use crate::route::Route;

/// How state is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Whether the shell should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    coordinator: NavigationCoordinator,
    config: ShellConfig,
    format: OutputFormat,
    changed: Arc<AtomicBool>,
    _subscription: Subscription,
}

impl Shell {
    pub fn new(
        coordinator: NavigationCoordinator,
        config: ShellConfig,
        format: OutputFormat,
    ) -> Self {
        let changed = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&changed);
        let subscription = coordinator.subscribe(move |_| flag.store(true, Ordering::SeqCst));
        Self {
            coordinator,
            config,
            format,
            changed,
            _subscription: subscription,
        }
    }

    pub fn coordinator(&self) -> &NavigationCoordinator {
        &self.coordinator
    }

    /// Read commands until EOF or `quit`.
    ///
    /// Parse errors are reported on `out` and do not stop the loop.
    /// With `interactive` set, the prompt is printed before each line.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        out: &mut W,
        interactive: bool,
    ) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            if interactive {
                write!(out, "{}", self.config.prompt)?;
                out.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;

            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    tracing::debug!(line = %line, error = %err, "Rejected shell command");
                    writeln!(out, "error: {}", err)?;
                    continue;
                }
            };

            if self.execute(command, out)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Apply one command and print whatever it produces.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<Flow> {
        match command {
            Command::Open(uri) => self.coordinator.handle_deep_link(&uri),
            Command::Push(route) => self.coordinator.navigate(route),
            Command::Tab(tab) => self.coordinator.navigate(Route::TabSelection(tab)),
            Command::Back => self.coordinator.navigate_back(),
            Command::Root => self.coordinator.navigate_to_root(),
            Command::Show => {
                self.changed.store(false, Ordering::SeqCst);
                self.print_state(out)?;
            }
            Command::Log => {
                out.write_all(render_log(&self.coordinator.transition_log()).as_bytes())?;
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }

        if self.changed.swap(false, Ordering::SeqCst) && self.config.echo_state {
            self.print_state(out)?;
        }
        Ok(Flow::Continue)
    }

    pub fn print_state<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let state = self.coordinator.snapshot();
        match self.format {
            OutputFormat::Text => out.write_all(render_state(&state).as_bytes()),
            OutputFormat::Json => {
                let json = render_state_json(&state).map_err(io::Error::from)?;
                writeln!(out, "{}", json)
            }
        }
    }
}
