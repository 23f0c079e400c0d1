//! Display settings persisted next to the bookmarks.

use serde::{Deserialize, Serialize};

/// Process-wide display settings.
///
/// Every field falls back to its default when absent from the persisted file.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub show_usage_info: bool,
    pub show_large_logo: bool,
    pub confirm_command_line: bool,
    pub fit_to_width: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_usage_info: true,
            show_large_logo: true,
            confirm_command_line: true,
            fit_to_width: false,
        }
    }
}

/// One toggleable field of [`Settings`], addressed by the digits 1-4 in the
/// settings menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKind {
    ShowUsageInfo,
    ShowLargeLogo,
    ConfirmCommandLine,
    FitToWidth,
}

impl SettingKind {
    pub const ALL: [SettingKind; 4] = [
        SettingKind::ShowUsageInfo,
        SettingKind::ShowLargeLogo,
        SettingKind::ConfirmCommandLine,
        SettingKind::FitToWidth,
    ];

    #[must_use]
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '1' => Some(SettingKind::ShowUsageInfo),
            '2' => Some(SettingKind::ShowLargeLogo),
            '3' => Some(SettingKind::ConfirmCommandLine),
            '4' => Some(SettingKind::FitToWidth),
            _ => None,
        }
    }

    #[must_use]
    pub fn digit(self) -> char {
        match self {
            SettingKind::ShowUsageInfo => '1',
            SettingKind::ShowLargeLogo => '2',
            SettingKind::ConfirmCommandLine => '3',
            SettingKind::FitToWidth => '4',
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SettingKind::ShowUsageInfo => "Show usage info",
            SettingKind::ShowLargeLogo => "Show large logo",
            SettingKind::ConfirmCommandLine => "Confirm command line before running",
            SettingKind::FitToWidth => "Fit table to terminal width",
        }
    }
}

impl Settings {
    #[must_use]
    pub fn get(&self, kind: SettingKind) -> bool {
        match kind {
            SettingKind::ShowUsageInfo => self.show_usage_info,
            SettingKind::ShowLargeLogo => self.show_large_logo,
            SettingKind::ConfirmCommandLine => self.confirm_command_line,
            SettingKind::FitToWidth => self.fit_to_width,
        }
    }

    /// Flips one field and returns its new value.
    pub fn toggle(&mut self, kind: SettingKind) -> bool {
        let field = match kind {
            SettingKind::ShowUsageInfo => &mut self.show_usage_info,
            SettingKind::ShowLargeLogo => &mut self.show_large_logo,
            SettingKind::ConfirmCommandLine => &mut self.confirm_command_line,
            SettingKind::FitToWidth => &mut self.fit_to_width,
        };
        *field = !*field;
        *field
    }
}
