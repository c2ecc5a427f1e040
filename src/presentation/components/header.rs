use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::form::FormState;

/// Section strip; the active section is bracketed.
pub fn render_header(frame: &mut Frame<'_>, area: Rect, form_state: &FormState) {
    let mut spans = vec![Span::styled(
        "Cluster configuration  ",
        Style::default().add_modifier(Modifier::BOLD),
    )];
    for (index, section) in form_state.sections.iter().enumerate() {
        if index == form_state.section_index {
            spans.push(Span::styled(
                format!("[{}]", section.title),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                format!(" {} ", section.title),
                Style::default().fg(Color::Gray),
            ));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
