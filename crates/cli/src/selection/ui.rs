use std::io::{stdout, Stdout, Write};

use crossterm::cursor::{self, MoveTo};
use crossterm::event::{self, Event};
use crossterm::style::Color::{Black, Blue, Green, Red, Reset, White, Yellow};
use crossterm::style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{queue, ExecutableCommand};
use log::debug;

use blast_core::bookmarks::BookmarkEntry;
use blast_core::error::Result;
use blast_core::store::Store;

use super::colors::AsTermColor;
use super::input::key_from_event;
use super::render::{Columns, PlanRow, RenderPlan};
use super::state::Session;
use super::types::{Transition, Viewport};

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    Committed(BookmarkEntry),
    Interrupted,
}

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode and give the terminal back on drop
        let _ = disable_raw_mode();
        let mut stdout = stdout();
        let _ = stdout.execute(cursor::Show);
        let _ = stdout.execute(LeaveAlternateScreen);
    }
}

/// Runs the picker on the alternate screen until a bookmark is committed or
/// the user interrupts.
pub fn run_picker<S: Store>(store: S) -> Result<PickerOutcome> {
    let mut stdout = stdout();
    let (width, height) = terminal::size()?;
    let mut session = Session::new(store, Viewport { width, height });

    stdout.execute(EnterAlternateScreen)?;
    enable_raw_mode()?;

    let _raw_mode_guard = RawModeGuard; // When this goes out of scope, the terminal is restored

    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            draw(&mut stdout, &session.render_plan())?;
        }

        needs_redraw = match event::read()? {
            Event::Key(key_event) => match key_from_event(key_event) {
                Some(key) => match session.handle_key(key)? {
                    Transition::Committed(entry) => return Ok(PickerOutcome::Committed(entry)),
                    Transition::Interrupted => return Ok(PickerOutcome::Interrupted),
                    Transition::Ignored => false,
                    transition => {
                        debug!("{transition:?}");
                        true
                    }
                },
                None => false,
            },
            Event::Resize(width, height) => {
                session.resize(Viewport { width, height });
                true
            }
            Event::FocusGained | Event::FocusLost | Event::Mouse(_) | Event::Paste(_) => false,
        };
    }
}

/// Draws one frame from a render plan.
fn draw(stdout: &mut Stdout, plan: &RenderPlan) -> Result<()> {
    queue!(stdout, cursor::Hide, Clear(ClearType::All), MoveTo(0, 0))?;

    for line in &plan.logo {
        queue!(
            stdout,
            SetForegroundColor(Yellow),
            SetAttribute(Attribute::Bold),
            Print(line),
            SetAttribute(Attribute::Reset),
            cursor::MoveToNextLine(1)
        )?;
    }
    queue!(stdout, cursor::MoveToNextLine(1))?;

    print_usage(stdout, plan)?;
    print_key_hints(stdout, plan)?;
    print_table(stdout, plan)?;

    queue!(
        stdout,
        Print(format!(
            "Page {}/{} ({} shown)",
            plan.page.current, plan.page.count, plan.page.visible
        )),
        cursor::MoveToNextLine(1)
    )?;

    print_menu(stdout, plan)?;

    queue!(stdout, Print(&plan.prompt.label))?;
    if plan.prompt.highlight {
        queue!(
            stdout,
            SetForegroundColor(Yellow),
            SetAttribute(Attribute::Bold),
            Print(&plan.prompt.input),
            SetAttribute(Attribute::Reset)
        )?;
    } else {
        queue!(stdout, Print(&plan.prompt.input))?;
    }

    if plan.cursor_visible {
        queue!(stdout, cursor::Show)?;
    }

    stdout.flush()?;
    Ok(())
}

fn print_usage(stdout: &mut Stdout, plan: &RenderPlan) -> Result<()> {
    if plan.usage.is_empty() {
        return Ok(());
    }

    queue!(
        stdout,
        SetForegroundColor(Yellow),
        SetAttribute(Attribute::Bold),
        Print("Usage"),
        SetAttribute(Attribute::Reset),
        cursor::MoveToNextLine(1)
    )?;

    for usage in &plan.usage {
        queue!(
            stdout,
            Print(format!("{:<13}", usage.command)),
            SetForegroundColor(Blue),
            Print(format!("{:<17}", usage.argument)),
            SetForegroundColor(Reset),
            Print(format!(" <- {}", usage.description)),
            cursor::MoveToNextLine(1)
        )?;
    }
    queue!(stdout, cursor::MoveToNextLine(1))?;

    Ok(())
}

fn print_key_hints(stdout: &mut Stdout, plan: &RenderPlan) -> Result<()> {
    for hint in &plan.key_hints {
        queue!(
            stdout,
            SetBackgroundColor(White),
            SetForegroundColor(Black),
            Print(format!(" {} ", hint.keys)),
            SetBackgroundColor(Reset),
            SetForegroundColor(Reset),
            Print(format!(" {}   ", hint.label)),
        )?;
    }
    queue!(stdout, cursor::MoveToNextLine(1))?;

    Ok(())
}

/// Horizontal rule across the table using the given corner and junction glyphs.
fn border(columns: &Columns, left: &str, fill: &str, junction: &str, right: &str) -> String {
    let mut segments = Vec::new();
    if columns.index > 0 {
        segments.push(fill.repeat(columns.index + 2));
    }
    segments.push(fill.repeat(columns.name + 2));
    segments.push(fill.repeat(columns.command + 2));

    format!("{left}{}{right}", segments.join(junction))
}

fn row_text(columns: &Columns, row: &PlanRow) -> String {
    let index = match row.position {
        Some(position) if columns.index > 0 => {
            format!("{position:>width$} │ ", width = columns.index)
        }
        _ => String::new(),
    };

    format!(
        "{index}{:<name_width$} │ {:<command_width$}",
        row.name,
        row.command,
        name_width = columns.name,
        command_width = columns.command
    )
}

fn print_table(stdout: &mut Stdout, plan: &RenderPlan) -> Result<()> {
    let columns = &plan.columns;

    queue!(
        stdout,
        Print(border(columns, "╭", "─", "┬", "╮")),
        cursor::MoveToNextLine(1)
    )?;

    for row in &plan.rows {
        queue!(stdout, Print("│ "))?;
        if row.is_bold() {
            queue!(stdout, SetAttribute(Attribute::Bold))?;
        }
        queue!(
            stdout,
            SetForegroundColor(row.as_crossterm_color()),
            Print(row_text(columns, row)),
            SetAttribute(Attribute::Reset),
            SetForegroundColor(Reset),
            Print(" │"),
            cursor::MoveToNextLine(1),
            Print(border(columns, "│", "╌", "┼", "│")),
            cursor::MoveToNextLine(1)
        )?;
    }

    if let Some(message) = &plan.empty_message {
        let inner_width = border(columns, "", " ", " ", "").chars().count() - 2;
        queue!(
            stdout,
            Print("│ "),
            SetForegroundColor(Red),
            Print(format!("{message:<inner_width$}")),
            SetForegroundColor(Reset),
            Print(" │"),
            cursor::MoveToNextLine(1)
        )?;
    }

    queue!(
        stdout,
        Print(border(columns, "╰", "─", "┴", "╯")),
        cursor::MoveToNextLine(1)
    )?;

    Ok(())
}

fn print_menu(stdout: &mut Stdout, plan: &RenderPlan) -> Result<()> {
    if plan.menu.is_empty() {
        return Ok(());
    }

    queue!(
        stdout,
        SetAttribute(Attribute::Bold),
        Print("Settings"),
        SetAttribute(Attribute::Reset),
        cursor::MoveToNextLine(1)
    )?;

    for item in &plan.menu {
        let (mark, color) = if item.enabled { ("x", Green) } else { (" ", Reset) };
        queue!(
            stdout,
            Print(format!("  {}  ", item.digit)),
            SetForegroundColor(color),
            Print(format!("[{mark}] {}", item.label)),
            SetForegroundColor(Reset),
            cursor::MoveToNextLine(1)
        )?;
    }

    Ok(())
}
