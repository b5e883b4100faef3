use colored::*;

pub struct ColorScheme;

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self
    }

    pub fn album(&self, text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn artist_name(&self, text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn year(&self, text: &str) -> ColoredString {
        text.normal()
    }

    pub fn rank(&self, text: &str) -> ColoredString {
        text.blue()
    }

    pub fn item_id(&self, text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn success(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(&self, text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(&self, text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn number(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn stats(&self, text: &str) -> ColoredString {
        text.blue()
    }

    pub fn command(&self, text: &str) -> ColoredString {
        text.cyan()
    }
}
