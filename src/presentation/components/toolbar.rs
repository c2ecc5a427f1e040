use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{ToolbarAction, ToolbarState};

pub const SAVING_LABEL: &str = "Saving...";

/// One line of buttons; disabled ones are greyed out and the saving
/// indicator trails the row while a save is in flight.
pub fn toolbar_line(state: ToolbarState) -> Line<'static> {
    let mut spans = Vec::new();
    for (index, action) in ToolbarAction::ALL.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("[ {} ]", action.label()),
            button_style(action, state.is_enabled(action)),
        ));
    }
    if state.show_saving() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            SAVING_LABEL,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        ));
    }
    Line::from(spans)
}

pub fn render_toolbar(frame: &mut Frame<'_>, area: Rect, state: ToolbarState) {
    let widget = Paragraph::new(toolbar_line(state)).block(Block::default().borders(Borders::TOP));
    frame.render_widget(widget, area);
}

fn button_style(action: ToolbarAction, enabled: bool) -> Style {
    if !enabled {
        return Style::default().fg(Color::DarkGray);
    }
    match action {
        ToolbarAction::Save => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        _ if action.is_primary() => Style::default()
            .fg(Color::Black)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().fg(Color::White),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span_style(line: &Line<'_>, label: &str) -> Style {
        line.spans
            .iter()
            .find(|span| span.content.contains(label))
            .map(|span| span.style)
            .unwrap_or_else(|| panic!("no span for {label}"))
    }

    #[test]
    fn invalid_form_greys_out_save() {
        let line = toolbar_line(ToolbarState {
            submitting: false,
            valid: false,
        });
        assert_eq!(
            span_style(&line, "Save Configuration").fg,
            Some(Color::DarkGray)
        );
        assert_eq!(span_style(&line, "Cancel").fg, Some(Color::White));
        assert_eq!(span_style(&line, "Deploy cluster").fg, Some(Color::DarkGray));
    }

    #[test]
    fn saving_indicator_follows_submitting_flag() {
        let busy = toolbar_line(ToolbarState {
            submitting: true,
            valid: true,
        });
        assert!(busy.spans.iter().any(|span| span.content == SAVING_LABEL));
        assert_eq!(
            span_style(&busy, "Save Configuration").fg,
            Some(Color::DarkGray)
        );

        let idle = toolbar_line(ToolbarState {
            submitting: false,
            valid: true,
        });
        assert!(!idle.spans.iter().any(|span| span.content == SAVING_LABEL));
        assert_eq!(span_style(&idle, "Save Configuration").bg, Some(Color::Green));
    }
}
