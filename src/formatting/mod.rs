use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    /// Plain output (no colors)
    pub fn plain() -> Self {
        Self::new(ColorMode::Never)
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }
}

/// Severity used to colour a progress figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Good,
    Warning,
    Critical,
}

impl Tone {
    /// Progress at or above 75% is good, below 25% critical
    pub fn for_progress(progress: f64) -> Self {
        if progress >= 75.0 {
            Self::Good
        } else if progress >= 25.0 {
            Self::Warning
        } else {
            Self::Critical
        }
    }
}

pub struct ColoredFormatter {
    config: FormattingConfig,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        colored::control::set_override(config.color.should_use_color());
        Self { config }
    }

    fn enabled(&self) -> bool {
        self.config.color.should_use_color()
    }

    pub fn header(&self, text: &str) -> String {
        if self.enabled() {
            text.blue().bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.enabled() {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn tone(&self, text: &str, tone: Tone) -> String {
        if !self.enabled() {
            return text.to_string();
        }
        match tone {
            Tone::Good => text.green().to_string(),
            Tone::Warning => text.yellow().to_string(),
            Tone::Critical => text.red().to_string(),
        }
    }
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_formatter_leaves_text_untouched() {
        let formatter = ColoredFormatter::new(FormattingConfig::plain());
        assert_eq!(formatter.header("KPIs"), "KPIs");
        assert_eq!(formatter.tone("0.4%", Tone::Critical), "0.4%");
    }

    #[test]
    fn test_tone_thresholds() {
        assert_eq!(Tone::for_progress(0.4), Tone::Critical);
        assert_eq!(Tone::for_progress(25.0), Tone::Warning);
        assert_eq!(Tone::for_progress(84.9), Tone::Good);
    }
}
