//! Terminal output for the CLI.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// How the CLI renders results.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Format {
    /// Styled human-readable text.
    Text,
    /// Machine-readable JSON on stdout, errors on stderr.
    Json,
}

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    format: Format,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        let format = if json { Format::Json } else { Format::Text };
        Self { verbose, format }
    }

    /// Whether JSON output was requested.
    pub fn is_json(&self) -> bool {
        self.format == Format::Json
    }

    fn text(&self) -> bool {
        self.format == Format::Text
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.text() {
            println!("{} {}", style("ℹ").blue(), msg);
        }
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.text() {
            println!("{} {}", style("✓").green(), msg);
        }
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.text() {
            eprintln!("{} {}", style("⚠").yellow(), msg);
        }
    }

    /// Print an error message. Emitted in both formats so scripted callers
    /// see failures too.
    pub fn error(&self, msg: &str) {
        match self.format {
            Format::Json => {
                let payload = serde_json::json!({ "error": msg });
                eprintln!("{}", payload);
            }
            Format::Text => eprintln!("{} {}", style("✗").red(), style(msg).red()),
        }
    }

    /// Print a debug message (only in verbose text mode).
    pub fn debug(&self, msg: &str) {
        if self.verbose && self.text() {
            eprintln!("{}", style(format!("→ {msg}")).dim());
        }
    }

    /// Print a section header.
    pub fn header(&self, msg: &str) {
        if self.text() {
            println!("\n{}", style(msg).bold().underlined());
        }
    }

    /// Print a value as pretty JSON on stdout.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(rendered) = serde_json::to_string_pretty(value) {
            println!("{rendered}");
        }
    }

    /// Print an indented key-value line.
    pub fn kv(&self, key: &str, value: &str) {
        if self.text() {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    /// Print a bulleted list item.
    pub fn list_item(&self, item: &str) {
        if self.text() {
            println!("  {} {}", style("•").dim(), item);
        }
    }

    /// Print one row of a fixed-width table.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if !self.text() {
            return;
        }
        let mut line = String::from("  ");
        for (col, width) in cols.iter().zip(widths) {
            line.push_str(&format!("{col:width$}  "));
        }
        println!("{}", line.trim_end());
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if !self.text() {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new_spinner();
        if let Ok(template) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(template);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(80));
        pb
    }
}
