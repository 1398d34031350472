//! Terminal output for yourOrbit
//!
//! Consistent styled messages for every command. Toasts are rendered through
//! [`ConsoleToaster`], which writes with the same symbols.

use console::style;

use crate::notify::{Toast, ToastLevel, ToastSink};

/// Output handler for consistent CLI formatting
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("✔").green(), message);
        }
    }

    /// Errors are always shown, even in quiet mode
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✖").red(), message);
    }

    pub fn warning(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("⚠").yellow(), message);
        }
    }

    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("ℹ").blue(), message);
        }
    }

    /// Only shown with `-v`
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            println!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn header(&self, title: &str) {
        if !self.quiet {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    pub fn table_row(&self, key: &str, value: &str) {
        println!("  {:<20} {}", style(key).dim(), value);
    }

    pub fn list_item(&self, item: &str) {
        println!("  • {}", item);
    }

    pub fn indent(&self, message: &str) {
        println!("    {}", message);
    }

    /// Print a key-value pair with consistent styling
    pub fn key_value(&self, key: &str, value: &str, highlight: bool) {
        if !self.quiet {
            let styled_value = if highlight {
                style(value).green().bold()
            } else {
                style(value).white()
            };
            println!("  {} {}", style(key).dim(), styled_value);
        }
    }

    /// Print a status indicator with consistent styling
    pub fn status_indicator(&self, status: &str, message: &str, is_success: bool) {
        if !self.quiet {
            let (icon, color) = if is_success {
                ("✓", style(status).green())
            } else {
                ("✗", style(status).red())
            };
            println!("{} {} {}", style(icon).bold(), color.bold(), message);
        }
    }

    pub fn category(&self, category: &str) {
        if !self.quiet {
            println!("\n{}", style(category).bold().cyan());
        }
    }
}

/// Shows toasts on the terminal. Error toasts go to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleToaster {
    output: Output,
}

impl ConsoleToaster {
    pub fn new(output: Output) -> Self {
        Self { output }
    }
}

impl ToastSink for ConsoleToaster {
    fn show(&mut self, toast: Toast) {
        tracing::debug!("Toast ({:?}, {}ms): {}", toast.level, toast.duration_ms, toast.title);
        match toast.level {
            ToastLevel::Info => self.output.info(&toast.title),
            ToastLevel::Warning => self.output.warning(&toast.title),
            ToastLevel::Error => self.output.error(&toast.title),
        }

        let Some(description) = toast.description else {
            return;
        };
        for line in description.lines() {
            if toast.level == ToastLevel::Error {
                eprintln!("    {}", style(line).dim());
            } else if !self.output.is_quiet() {
                self.output.indent(&style(line).dim().to_string());
            }
        }
    }
}
