use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Paragraph, Wrap},
};

use super::super::view::UiContext;

pub fn render_footer(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let error_count = ctx.form_state.error_count() + ctx.form_errors.len();
    let mut status = ctx.status_message.to_string();
    if ctx.form_state.is_dirty() {
        status.push_str(" • unsaved changes");
    }
    if let Some(extra) = ctx.form_errors.first() {
        status.push_str(" • ");
        status.push_str(extra);
    }

    let badge = if error_count > 0 {
        Span::styled(
            format!("[! {error_count}]"),
            Style::default().fg(Color::Red).bg(Color::Black),
        )
    } else {
        Span::styled("[ok]", Style::default().fg(Color::Green))
    };
    let status_widget = Paragraph::new(ratatui::text::Line::from(vec![
        badge,
        Span::raw(" "),
        Span::raw(status),
    ]))
    .wrap(Wrap { trim: true });
    frame.render_widget(status_widget, rows[0]);

    if let Some(help) = ctx.help {
        let help_widget = Paragraph::new(help)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help_widget, rows[1]);
    }
}
