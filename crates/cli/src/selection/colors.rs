use crossterm::style::Color;

use blast_core::matching::MatchClass;

use super::render::PlanRow;

/// Trait for mapping render plan highlight classes to terminal colors
pub trait AsTermColor {
    fn as_crossterm_color(&self) -> Color;

    fn is_bold(&self) -> bool {
        false
    }
}

impl AsTermColor for MatchClass {
    fn as_crossterm_color(&self) -> Color {
        match self {
            MatchClass::NoMatch => Color::Reset,
            MatchClass::PrefixMatch => Color::Green,
            MatchClass::ExactMatch => Color::Yellow,
        }
    }

    fn is_bold(&self) -> bool {
        *self != MatchClass::NoMatch
    }
}

impl AsTermColor for PlanRow {
    fn as_crossterm_color(&self) -> Color {
        if self.marked_for_deletion {
            Color::Red
        } else {
            self.class.as_crossterm_color()
        }
    }

    fn is_bold(&self) -> bool {
        self.marked_for_deletion || self.class.is_bold()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(class: MatchClass, marked_for_deletion: bool) -> PlanRow {
        PlanRow {
            position: None,
            name: "ls".to_string(),
            command: "ls -la".to_string(),
            class,
            marked_for_deletion,
        }
    }

    #[test]
    fn test_match_class_colors() {
        assert_eq!(MatchClass::NoMatch.as_crossterm_color(), Color::Reset);
        assert_eq!(MatchClass::PrefixMatch.as_crossterm_color(), Color::Green);
        assert_eq!(MatchClass::ExactMatch.as_crossterm_color(), Color::Yellow);
        assert!(!MatchClass::NoMatch.is_bold());
        assert!(MatchClass::ExactMatch.is_bold());
    }

    #[test]
    fn test_deletion_overrides_match_color() {
        let marked = row(MatchClass::PrefixMatch, true);
        assert_eq!(marked.as_crossterm_color(), Color::Red);
        assert!(marked.is_bold());

        let plain = row(MatchClass::NoMatch, false);
        assert_eq!(plain.as_crossterm_color(), Color::Reset);
        assert!(!plain.is_bold());
    }
}
