use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::toolbar::ToolbarAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Toolbar(ToolbarAction),
    SwitchSection(i32),
    NextField,
    PrevField,
    /// Dismiss the alert, or reset the status line when there is none.
    Dismiss,
    /// Open the option list on selects, new line in text areas.
    Enter,
    Edit(KeyEvent),
    None,
}

pub const HELP_TEXT: &str = "Tab/↓ next • Shift+Tab/↑ prev • Enter choose/new line • Ctrl+S save • Ctrl+B back • Ctrl+Q cancel • Esc dismiss";

pub fn classify(key: &KeyEvent) -> KeyCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') | KeyCode::Char('S') => KeyCommand::Toolbar(ToolbarAction::Save),
            KeyCode::Char('b') | KeyCode::Char('B') => KeyCommand::Toolbar(ToolbarAction::Back),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyCommand::Toolbar(ToolbarAction::Deploy),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('c') | KeyCode::Char('C') => {
                KeyCommand::Toolbar(ToolbarAction::Cancel)
            }
            KeyCode::Tab => {
                let delta = if key.modifiers.contains(KeyModifiers::SHIFT) {
                    -1
                } else {
                    1
                };
                KeyCommand::SwitchSection(delta)
            }
            _ => KeyCommand::None,
        };
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => KeyCommand::NextField,
        KeyCode::BackTab | KeyCode::Up => KeyCommand::PrevField,
        KeyCode::Esc => KeyCommand::Dismiss,
        KeyCode::Enter => KeyCommand::Enter,
        _ => KeyCommand::Edit(*key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn control_chords_map_to_toolbar_actions() {
        let cases = [
            ('s', ToolbarAction::Save),
            ('b', ToolbarAction::Back),
            ('d', ToolbarAction::Deploy),
            ('q', ToolbarAction::Cancel),
            ('c', ToolbarAction::Cancel),
        ];
        for (ch, action) in cases {
            assert_eq!(
                classify(&key(KeyCode::Char(ch), KeyModifiers::CONTROL)),
                KeyCommand::Toolbar(action)
            );
        }
    }

    #[test]
    fn ctrl_tab_maps_to_section_steps() {
        let next = classify(&key(KeyCode::Tab, KeyModifiers::CONTROL));
        let prev = classify(&key(
            KeyCode::Tab,
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        ));
        assert_eq!(next, KeyCommand::SwitchSection(1));
        assert_eq!(prev, KeyCommand::SwitchSection(-1));
    }

    #[test]
    fn shift_tab_triggers_previous_field() {
        assert_eq!(
            classify(&key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            KeyCommand::PrevField
        );
    }

    #[test]
    fn plain_characters_are_edits() {
        let event = key(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(classify(&event), KeyCommand::Edit(event));
    }
}
