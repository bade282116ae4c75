//! Visual theme and styling.

use console::Style;

use crate::report::Severity;

/// Styles used by the text report.
#[derive(Debug, Clone)]
pub struct ReportTheme {
    /// Normal temperatures (green).
    pub normal: Style,
    /// Warning temperatures (yellow).
    pub warning: Style,
    /// Critical temperatures (red).
    pub critical: Style,
    /// Report title and section headings (bold).
    pub header: Style,
    /// Advisory lines in the device section (dim).
    pub advisory: Style,
}

impl Default for ReportTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            normal: Style::new().green(),
            warning: Style::new().yellow(),
            critical: Style::new().red(),
            header: Style::new().bold(),
            advisory: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            normal: Style::new(),
            warning: Style::new(),
            critical: Style::new(),
            header: Style::new(),
            advisory: Style::new(),
        }
    }

    /// Pick the theme for the current output.
    pub fn for_output(colors: bool) -> Self {
        if colors {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Style for a temperature severity.
    pub fn severity(&self, severity: Severity) -> &Style {
        match severity {
            Severity::Normal => &self.normal,
            Severity::Warning => &self.warning,
            Severity::Critical => &self.critical,
        }
    }

    /// Format a value in the style of its severity, if it has one.
    pub fn format_severity(&self, text: &str, severity: Option<Severity>) -> String {
        match severity {
            Some(severity) => self.severity(severity).apply_to(text).to_string(),
            None => text.to_string(),
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
