//! Render plan construction.
//!
//! [`build`] turns the session into a device-independent description of one
//! frame. It never touches the terminal; `ui` draws the plan.

use blast_core::bookmarks::BookmarkSet;
use blast_core::config::{MAX_COMMAND_WIDTH, MIN_NAME_WIDTH};
use blast_core::matching::{Classification, MatchClass};
use blast_core::pagination::Page;
use blast_core::settings::{SettingKind, Settings};

use super::types::{Mode, SessionState};

pub const LARGE_LOGO: [&str; 5] = [
    r" _     _           _   ",
    r"| |__ | | __ _ ___| |_ ",
    r"| '_ \| |/ _` / __| __|",
    r"| |_) | | (_| \__ \ |_ ",
    r"|_.__/|_|\__,_|___/\__|",
];

pub const SMALL_LOGO: &str = "blast";

pub const USAGE: [UsageLine; 4] = [
    UsageLine {
        command: "blast save",
        argument: "<name> <command>",
        description: "Save bookmark",
    },
    UsageLine {
        command: "blast use",
        argument: "<name>",
        description: "Run bookmarked command",
    },
    UsageLine {
        command: "blast delete",
        argument: "<name>",
        description: "Delete bookmark",
    },
    UsageLine {
        command: "blast show",
        argument: "<text>",
        description: "List bookmarks containing text",
    },
];

/// Characters of table chrome around the name and command columns:
/// `"│ "`, `" │ "` and `" │"`.
const TABLE_CHROME: usize = 7;
/// Extra chrome when the index column is shown.
const INDEX_CHROME: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageLine {
    pub command: &'static str,
    pub argument: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub keys: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    /// 0 when indexes are hidden
    pub index: usize,
    pub name: usize,
    pub command: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRow {
    /// Shown only while deleting
    pub position: Option<usize>,
    pub name: String,
    /// Already cut to the command column width
    pub command: String,
    pub class: MatchClass,
    pub marked_for_deletion: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageIndicator {
    pub current: usize,
    pub count: usize,
    pub visible: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub digit: char,
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub label: String,
    pub input: String,
    /// Set when Enter would commit
    pub highlight: bool,
}

/// Everything the display needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    pub logo: Vec<&'static str>,
    pub usage: Vec<UsageLine>,
    pub key_hints: Vec<KeyHint>,
    pub columns: Columns,
    pub rows: Vec<PlanRow>,
    pub empty_message: Option<String>,
    pub page: PageIndicator,
    pub menu: Vec<MenuItem>,
    pub prompt: Prompt,
    pub cursor_visible: bool,
}

/// Lines of the frame that are not bookmark rows or their dividers.
#[must_use]
pub fn header_footer_overhead(settings: &Settings, mode: Mode) -> u16 {
    let logo = if settings.show_large_logo {
        LARGE_LOGO.len() + 1
    } else {
        2
    };
    let usage = if settings.show_usage_info {
        USAGE.len() + 2
    } else {
        0
    };
    let menu = if mode == Mode::Settings {
        SettingKind::ALL.len() + 1
    } else {
        0
    };
    // Key hints, top and bottom border, page indicator, prompt
    let fixed = 5;

    u16::try_from(logo + usage + menu + fixed).unwrap_or(u16::MAX)
}

/// Column widths for the table.
///
/// The name column fits every name and is never narrower than
/// [`MIN_NAME_WIDTH`]. The command column takes what is left of the terminal,
/// capped at [`MAX_COMMAND_WIDTH`] unless `fit_to_width` is set.
#[must_use]
pub fn columns(
    bookmarks: &BookmarkSet,
    terminal_width: u16,
    show_index: bool,
    fit_to_width: bool,
) -> Columns {
    let index = if show_index {
        bookmarks.len().max(1).to_string().len()
    } else {
        0
    };
    let name = bookmarks.longest_name_width().max(MIN_NAME_WIDTH);

    let chrome = TABLE_CHROME + if show_index { INDEX_CHROME } else { 0 };
    let remaining = usize::from(terminal_width).saturating_sub(chrome + index + name);
    let command = if fit_to_width {
        remaining
    } else {
        remaining.min(MAX_COMMAND_WIDTH)
    };

    Columns {
        index,
        name,
        command: command.max(1),
    }
}

/// Cuts `text` to at most `width` characters, marking the cut with `…`.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }

    let mut truncated: String = text.chars().take(width.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

fn key_hints(mode: Mode) -> Vec<KeyHint> {
    let hint = |keys, label| KeyHint { keys, label };
    match mode {
        Mode::Run => vec![
            hint("^C / Esc", "Exit"),
            hint("Tab", "Complete"),
            hint("↑ / ↓", "Page"),
            hint("^D", "Delete"),
            hint("^F", "Fit width"),
            hint("^S", "Settings"),
        ],
        Mode::Delete => vec![
            hint("Enter", "Select number"),
            hint("Esc", "Back"),
            hint("↑ / ↓", "Page"),
            hint("^D", "Run mode"),
            hint("^C", "Exit"),
        ],
        Mode::ConfirmDelete { .. } => vec![
            hint("Enter", "Confirm"),
            hint("Esc", "Cancel"),
            hint("^C", "Exit"),
        ],
        Mode::Settings => vec![
            hint("1-4", "Toggle"),
            hint("Esc", "Back"),
            hint("^C", "Exit"),
        ],
    }
}

fn prompt(
    bookmarks: &BookmarkSet,
    classification: &Classification,
    state: &SessionState,
) -> Prompt {
    let (label, highlight) = match state.mode {
        Mode::Run => (": ".to_string(), classification.single_exact().is_some()),
        Mode::Delete => ("Delete bookmark number: ".to_string(), false),
        Mode::ConfirmDelete { position } => {
            let name = bookmarks
                .entry_at(position)
                .map_or("", |entry| entry.name.as_str());
            (format!("Delete bookmark `{name}`? [yes]/no: "), false)
        }
        Mode::Settings => ("Toggle a setting with 1-4, <esc> to return".to_string(), false),
    };

    Prompt {
        label,
        input: state.query.clone(),
        highlight,
    }
}

/// Builds the plan for one frame.
#[must_use]
pub fn build(
    bookmarks: &BookmarkSet,
    classification: &Classification,
    page: &Page<'_>,
    state: &SessionState,
    settings: &Settings,
) -> RenderPlan {
    let show_index = state.mode.is_deleting();
    let columns = columns(bookmarks, state.viewport.width, show_index, state.fit_to_width);

    let pending = match state.mode {
        Mode::ConfirmDelete { position } => Some(position),
        _ => None,
    };

    let rows = page
        .entries
        .iter()
        .map(|visible| PlanRow {
            position: show_index.then_some(visible.position),
            name: visible.entry.name.clone(),
            command: truncate(&visible.entry.command, columns.command),
            class: visible.class,
            marked_for_deletion: pending == Some(visible.position),
        })
        .collect::<Vec<_>>();

    let empty_message = if bookmarks.is_empty() {
        Some("No bookmarks saved yet".to_string())
    } else if rows.is_empty() {
        Some(format!("No bookmarks match `{}`", state.query))
    } else {
        None
    };

    let logo = if settings.show_large_logo {
        LARGE_LOGO.to_vec()
    } else {
        vec![SMALL_LOGO]
    };

    let usage = if settings.show_usage_info {
        USAGE.to_vec()
    } else {
        Vec::new()
    };

    let menu = if state.mode == Mode::Settings {
        SettingKind::ALL
            .iter()
            .map(|kind| MenuItem {
                digit: kind.digit(),
                label: kind.label(),
                enabled: settings.get(*kind),
            })
            .collect()
    } else {
        Vec::new()
    };

    RenderPlan {
        logo,
        usage,
        key_hints: key_hints(state.mode),
        columns,
        rows,
        empty_message,
        page: PageIndicator {
            current: page.current_page,
            count: page.page_count,
            visible: page.visible_count,
        },
        menu,
        prompt: prompt(bookmarks, classification, state),
        cursor_visible: state.mode != Mode::Settings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::types::Viewport;
    use blast_core::bookmarks::BookmarkEntry;
    use blast_core::matching::classify;
    use blast_core::pagination::paginate;

    fn bookmarks(pairs: &[(&str, &str)]) -> BookmarkSet {
        pairs
            .iter()
            .map(|(name, command)| BookmarkEntry::new(*name, *command).unwrap())
            .collect()
    }

    fn state(query: &str, mode: Mode, width: u16) -> SessionState {
        SessionState {
            query: query.to_string(),
            mode,
            current_page: 1,
            fit_to_width: false,
            viewport: Viewport { width, height: 40 },
        }
    }

    fn plan_for(set: &BookmarkSet, state: &SessionState, settings: &Settings) -> RenderPlan {
        let classes = if state.mode.is_deleting() {
            Classification::uniform(set, MatchClass::PrefixMatch)
        } else {
            classify(set, &state.query)
        };
        let page = paginate(set, &classes, &state.query, 9, state.current_page);
        build(set, &classes, &page, state, settings)
    }

    #[test]
    fn test_name_column_has_minimum_width() {
        let set = bookmarks(&[("ls", "ls -la")]);
        assert_eq!(columns(&set, 200, false, false).name, MIN_NAME_WIDTH);

        let long_name = "a".repeat(40);
        let set = bookmarks(&[(long_name.as_str(), "ls")]);
        assert_eq!(columns(&set, 200, false, false).name, 40);
    }

    #[test]
    fn test_command_column_is_capped_unless_fitting() {
        let set = bookmarks(&[("ls", "ls -la")]);

        // 200 - 7 - 25 = 168 left over
        assert_eq!(columns(&set, 200, false, false).command, MAX_COMMAND_WIDTH);
        assert_eq!(columns(&set, 200, false, true).command, 168);
        // Narrow terminals shrink the column either way
        assert_eq!(columns(&set, 60, false, false).command, 28);
        assert_eq!(columns(&set, 60, false, true).command, 28);
    }

    #[test]
    fn test_command_column_never_collapses() {
        let set = bookmarks(&[("ls", "ls -la")]);
        assert_eq!(columns(&set, 10, false, false).command, 1);
    }

    #[test]
    fn test_index_column_counts_digits() {
        let pairs: Vec<(String, String)> = (0..12)
            .map(|i| (format!("cmd{i}"), format!("echo {i}")))
            .collect();
        let set: BookmarkSet = pairs
            .iter()
            .map(|(name, command)| BookmarkEntry::new(name.as_str(), command.as_str()).unwrap())
            .collect();

        let with_index = columns(&set, 200, true, false);
        assert_eq!(with_index.index, 2);
        assert_eq!(columns(&set, 200, false, false).index, 0);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly", 7), "exactly");
        assert_eq!(truncate("kubectl apply", 8), "kubectl…");
        assert_eq!(truncate("abc", 1), "…");
    }

    #[test]
    fn test_rows_carry_match_classes() {
        let set = bookmarks(&[("deploy", "a"), ("deploy-staging", "b"), ("build", "c")]);
        let plan = plan_for(&set, &state("deploy", Mode::Run, 120), &Settings::default());

        assert_eq!(plan.rows.len(), 2);
        assert_eq!(plan.rows[0].name, "deploy");
        assert_eq!(plan.rows[0].class, MatchClass::ExactMatch);
        assert_eq!(plan.rows[1].class, MatchClass::PrefixMatch);
        assert!(plan.rows.iter().all(|row| row.position.is_none()));
        assert!(plan.prompt.highlight);
        assert_eq!(plan.prompt.input, "deploy");
    }

    #[test]
    fn test_prompt_not_highlighted_without_single_exact() {
        let set = bookmarks(&[("deploy", "a"), ("deploy-staging", "b")]);
        let plan = plan_for(&set, &state("dep", Mode::Run, 120), &Settings::default());
        assert!(!plan.prompt.highlight);
    }

    #[test]
    fn test_delete_mode_shows_positions() {
        let set = bookmarks(&[("a", "1"), ("b", "2"), ("c", "3")]);
        let plan = plan_for(&set, &state("2", Mode::Delete, 120), &Settings::default());

        let positions: Vec<Option<usize>> = plan.rows.iter().map(|row| row.position).collect();
        assert_eq!(positions, vec![Some(1), Some(2), Some(3)]);
        assert_eq!(plan.prompt.label, "Delete bookmark number: ");
    }

    #[test]
    fn test_confirm_delete_marks_pending_row() {
        let set = bookmarks(&[("a", "1"), ("b", "2"), ("c", "3")]);
        let plan = plan_for(
            &set,
            &state("", Mode::ConfirmDelete { position: 2 }, 120),
            &Settings::default(),
        );

        let marked: Vec<&str> = plan
            .rows
            .iter()
            .filter(|row| row.marked_for_deletion)
            .map(|row| row.name.as_str())
            .collect();
        assert_eq!(marked, vec!["b"]);
        assert_eq!(plan.prompt.label, "Delete bookmark `b`? [yes]/no: ");
    }

    #[test]
    fn test_settings_menu_and_cursor() {
        let set = bookmarks(&[("a", "1")]);
        let settings = Settings {
            show_large_logo: false,
            ..Settings::default()
        };
        let plan = plan_for(&set, &state("", Mode::Settings, 120), &settings);

        assert!(!plan.cursor_visible);
        assert_eq!(plan.menu.len(), 4);
        assert_eq!(plan.menu[1].digit, '2');
        assert!(!plan.menu[1].enabled);
        assert!(plan.menu[0].enabled);

        let run_plan = plan_for(&set, &state("", Mode::Run, 120), &settings);
        assert!(run_plan.cursor_visible);
        assert!(run_plan.menu.is_empty());
    }

    #[test]
    fn test_logo_and_usage_follow_settings() {
        let set = bookmarks(&[("a", "1")]);
        let plan = plan_for(&set, &state("", Mode::Run, 120), &Settings::default());
        assert_eq!(plan.logo.len(), LARGE_LOGO.len());
        assert_eq!(plan.usage.len(), USAGE.len());

        let settings = Settings {
            show_usage_info: false,
            show_large_logo: false,
            ..Settings::default()
        };
        let plan = plan_for(&set, &state("", Mode::Run, 120), &settings);
        assert_eq!(plan.logo, vec![SMALL_LOGO]);
        assert!(plan.usage.is_empty());
    }

    #[test]
    fn test_overhead_follows_settings_and_mode() {
        let defaults = Settings::default();
        let bare = Settings {
            show_usage_info: false,
            show_large_logo: false,
            ..Settings::default()
        };

        assert_eq!(header_footer_overhead(&defaults, Mode::Run), 17);
        assert_eq!(header_footer_overhead(&bare, Mode::Run), 7);
        assert_eq!(header_footer_overhead(&bare, Mode::Settings), 12);
    }

    #[test]
    fn test_empty_messages() {
        let plan = plan_for(&BookmarkSet::new(), &state("", Mode::Run, 120), &Settings::default());
        assert!(plan.rows.is_empty());
        assert_eq!(plan.page.count, 1);
        assert_eq!(plan.empty_message.as_deref(), Some("No bookmarks saved yet"));

        let set = bookmarks(&[("a", "1")]);
        let plan = plan_for(&set, &state("zz", Mode::Run, 120), &Settings::default());
        assert_eq!(plan.empty_message.as_deref(), Some("No bookmarks match `zz`"));
    }

    #[test]
    fn test_commands_are_truncated_to_column() {
        let long_command = "x".repeat(200);
        let set = bookmarks(&[("long", long_command.as_str())]);
        let plan = plan_for(&set, &state("", Mode::Run, 80), &Settings::default());

        // 80 - 7 - 25
        assert_eq!(plan.columns.command, 48);
        assert_eq!(plan.rows[0].command.chars().count(), 48);
        assert!(plan.rows[0].command.ends_with('…'));
    }
}
