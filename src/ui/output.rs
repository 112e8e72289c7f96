//! Diagnostics on stderr.
//!
//! stdout is reserved for results (`public key copied to ...`); everything
//! the operator should read but scripts should not parse goes here.

use crate::config::ConfigWarning;
use crate::error::SshwError;
use crate::ui::text::ColoredText;
use crate::ui::theme::Glyphs;

/// Writes warnings, errors and `-v` messages to stderr.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    verbose: u8,
    color: bool,
    glyphs: Glyphs,
}

impl Reporter {
    pub fn new(verbose: u8, color: bool, unicode: bool) -> Self {
        Self {
            verbose,
            color,
            glyphs: Glyphs::new(unicode),
        }
    }

    /// Print `message` when running with at least `level` `-v` flags.
    pub fn print_verbose(&self, level: u8, message: impl AsRef<str>) {
        if self.verbose >= level {
            eprintln!("{}", ColoredText::dim(message.as_ref()).render(self.color));
        }
    }

    pub fn print_warning(&self, message: impl AsRef<str>) {
        eprintln!("{}", self.format_warning(message.as_ref()));
    }

    /// Unknown keys in the settings or host file.
    pub fn print_config_warnings(&self, warnings: &[ConfigWarning]) {
        for w in warnings {
            self.print_warning(format_config_warning(w));
        }
    }

    pub fn print_error(&self, err: &anyhow::Error) {
        eprint!("{}", self.format_error(err));
    }

    fn format_warning(&self, message: &str) -> String {
        let icon = ColoredText::warning(self.glyphs.warning).render(self.color);
        format!("{} {}", icon, message)
    }

    pub fn format_error(&self, err: &anyhow::Error) -> String {
        let icon = ColoredText::error(self.glyphs.error).render(self.color);
        let mut out = format!("{} {}\n", icon, err);
        for cause in err.chain().skip(1) {
            out.push_str(&format!("  caused by: {}\n", cause));
        }
        if let Some(fix) = err.downcast_ref::<SshwError>().and_then(fix_for) {
            out.push_str(&format!("  {}\n", ColoredText::dim(fix).render(self.color)));
        }
        out
    }
}

fn format_config_warning(w: &ConfigWarning) -> String {
    let location = match w.line {
        Some(line) => format!("{}:{}", w.file.display(), line),
        None => w.file.display().to_string(),
    };
    let mut message = format!("Unknown config key '{}' in {}", w.key, location);
    if let Some(suggestion) = &w.suggestion {
        message.push_str(&format!(" (did you mean '{}'?)", suggestion));
    }
    message
}

fn fix_for(err: &SshwError) -> Option<&'static str> {
    match err {
        SshwError::ConfigNotFound { .. } => {
            Some("Create ~/.sshw.yml with a list of hosts, or pass --config <PATH>.")
        }
        SshwError::NoPublicKey { .. } => Some("Generate a key pair with `ssh-keygen` first."),
        SshwError::TerminalAcquire(_) => Some("sshw must be run from an interactive terminal."),
        _ => None,
    }
}
