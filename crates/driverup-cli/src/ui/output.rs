//! Terminal reporter.
//!
//! Status goes to stderr so stdout stays clean for `--list` output. Download
//! progress redraws a single line, and only when stderr is a terminal.

use std::io::{IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::style::Stylize;
use driverup_core::Reporter;

use super::theme::{Theme, format_size};

#[derive(Debug)]
pub struct TerminalReporter {
    theme: Theme,
    interactive: bool,
    /// A progress line is drawn and not yet terminated.
    progress_open: AtomicBool,
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            interactive: std::io::stderr().is_terminal(),
            progress_open: AtomicBool::new(false),
        }
    }

    fn close_progress(&self) {
        if self.progress_open.swap(false, Ordering::Relaxed) {
            eprintln!();
        }
    }

    fn line(&self, icon: &str, color: crossterm::style::Color, msg: &str) {
        self.close_progress();
        eprintln!("{} {msg}", icon.with(color));
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for TerminalReporter {
    fn section(&self, title: &str) {
        self.close_progress();
        eprintln!("{}", title.with(self.theme.colors.header).bold());
    }

    fn downloading(&self, version: &str, current: u64, total: Option<u64>) {
        if !self.interactive {
            return;
        }
        let progress = match total.filter(|&t| t > 0) {
            Some(total) => format!("{} / {}", format_size(current), format_size(total)),
            None => format_size(current),
        };
        let mut stderr = std::io::stderr().lock();
        let _ = write!(
            stderr,
            "\r{} Downloading {}  {}",
            self.theme.icons.active.with(self.theme.colors.version),
            version.with(self.theme.colors.version),
            progress.with(self.theme.colors.secondary)
        );
        let _ = stderr.flush();
        self.progress_open.store(true, Ordering::Relaxed);
    }

    fn extracting(&self, version: &str) {
        self.line(
            self.theme.icons.active,
            self.theme.colors.version,
            &format!("Extracting {version}"),
        );
    }

    fn done(&self, version: &str, detail: &str) {
        self.line(
            self.theme.icons.success,
            self.theme.colors.success,
            &format!("{} {}", version.with(self.theme.colors.version), detail),
        );
    }

    fn failed(&self, version: &str, reason: &str) {
        self.line(
            self.theme.icons.error,
            self.theme.colors.error,
            &format!("{version} {reason}"),
        );
    }

    fn error(&self, msg: &str) {
        self.line(self.theme.icons.error, self.theme.colors.error, msg);
    }
}
