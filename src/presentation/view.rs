use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{app::ToolbarState, form::FormState};

use super::components::{
    alert_height, render_alert, render_fields, render_footer, render_header, render_popup,
    render_toolbar,
};

pub struct UiContext<'a> {
    pub form_state: &'a FormState,
    /// Form level error; shown until dismissed.
    pub alert: Option<&'a str>,
    pub toolbar: ToolbarState,
    pub status_message: &'a str,
    pub form_errors: &'a [String],
    pub help: Option<&'a str>,
    pub popup: Option<PopupRender<'a>>,
}

pub struct PopupRender<'a> {
    pub title: &'a str,
    pub options: &'a [String],
    pub selected: usize,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let footer_height = if ctx.help.is_some() { 2 } else { 1 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(alert_height(ctx.alert)),
            Constraint::Length(2),
            Constraint::Length(footer_height),
        ])
        .split(frame.area());

    let cursor_enabled = ctx.popup.is_none();
    render_header(frame, chunks[0], ctx.form_state);
    render_fields(frame, chunks[1], ctx.form_state, cursor_enabled);
    if let Some(message) = ctx.alert {
        render_alert(frame, chunks[2], message);
    }
    render_toolbar(frame, chunks[3], ctx.toolbar);
    render_footer(frame, chunks[4], &ctx);

    if let Some(popup) = ctx.popup {
        render_popup(frame, popup);
    }
}
