use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::{
    domain::FieldKind,
    form::{FieldState, FormState},
};

/// Every section stacked in one scrolling list. Section headings are list
/// rows too, so the selected row is offset by the headings above it.
pub fn render_fields(frame: &mut Frame<'_>, area: Rect, form_state: &FormState, enable_cursor: bool) {
    if form_state.is_empty() {
        let placeholder =
            Paragraph::new("No editable fields").block(Block::default().borders(Borders::ALL));
        frame.render_widget(placeholder, area);
        return;
    }

    let content_width = area.width.saturating_sub(6);
    let focused = form_state.focused_position();
    let mut items = Vec::new();
    let mut selected_row = 0;
    let mut cursor_hint: Option<CursorHint> = None;
    let mut line_offset = 0usize;
    let mut position = 0usize;

    for section in &form_state.sections {
        let heading = section_heading(&section.title, content_width);
        line_offset += 1;
        items.push(ListItem::new(heading));
        for field in &section.fields {
            let is_selected = position == focused;
            let render = build_field_render(field, is_selected, content_width);
            if is_selected {
                selected_row = items.len();
                cursor_hint = render.cursor_hint.map(|mut hint| {
                    hint.line_offset += line_offset;
                    hint
                });
            }
            line_offset += render.lines.len();
            items.push(ListItem::new(render.lines));
            position += 1;
        }
    }

    let mut list_state = ListState::default();
    list_state.select(Some(selected_row));

    let list = List::new(items)
        .block(
            Block::default()
                .title(form_state.title.clone())
                .borders(Borders::ALL),
        )
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, area, &mut list_state);

    // the list scrolls on its own, so the hint is only trusted when the
    // selected row starts inside the first page
    if enable_cursor
        && list_state.offset() == 0
        && let Some(cursor) = cursor_hint
        && cursor.line_offset < area.height.saturating_sub(2) as usize
    {
        let cursor_y = area.y.saturating_add(1).saturating_add(cursor.line_offset as u16);
        // border, highlight symbol, then the "  │ " gutter
        let cursor_x = area
            .x
            .saturating_add(1 + 2 + 4)
            .saturating_add(cursor.value_width);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

struct FieldRender {
    lines: Vec<Line<'static>>,
    cursor_hint: Option<CursorHint>,
}

struct CursorHint {
    line_offset: usize,
    value_width: u16,
}

fn section_heading(title: &str, width: u16) -> Line<'static> {
    let used = UnicodeWidthStr::width(title) + 4;
    let rule = "─".repeat((width as usize).saturating_sub(used).min(40));
    Line::from(vec![
        Span::styled("── ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {rule}"), Style::default().fg(Color::DarkGray)),
    ])
}

fn build_field_render(field: &FieldState, is_selected: bool, max_width: u16) -> FieldRender {
    let mut lines = Vec::new();
    let label_style = if is_selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    };
    let mut label = vec![Span::styled(field.schema.display_label(), label_style)];
    if field.dirty {
        label.push(Span::styled(" •", Style::default().fg(Color::Yellow)));
    }
    lines.push(Line::from(label));

    let (value_panel, cursor_hint) = value_panel_lines(field, is_selected, max_width);
    lines.extend(value_panel);

    if is_selected && let Some(help) = &field.schema.help {
        for segment in wrap(help, max_width.max(8) as usize) {
            lines.push(Line::from(Span::styled(
                format!("  {segment}"),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    if let Some(error) = error_lines(field, max_width) {
        lines.extend(error);
    }

    FieldRender { lines, cursor_hint }
}

fn value_segments(field: &FieldState, width: usize) -> Vec<String> {
    let text = field.display_value();
    let mut segments = Vec::new();
    for raw_line in text.split('\n') {
        if raw_line.is_empty() {
            segments.push(String::new());
            continue;
        }
        segments.extend(
            wrap(raw_line, width)
                .into_iter()
                .map(|segment| segment.into_owned()),
        );
    }
    if segments.is_empty() {
        segments.push(String::new());
    }
    segments
}

fn value_panel_lines(
    field: &FieldState,
    is_selected: bool,
    max_width: u16,
) -> (Vec<Line<'static>>, Option<CursorHint>) {
    let clamp_width = max_width.max(4) as usize;
    let mut segments = value_segments(field, clamp_width);
    if let FieldKind::Select(_) = field.schema.kind
        && let Some(first) = segments.first_mut()
    {
        first.push_str(" ▾");
    }
    let inner_width = segments
        .iter()
        .map(|line| UnicodeWidthStr::width(line.as_str()))
        .max()
        .unwrap_or(0)
        .max(8);
    let last_line_width = segments
        .last()
        .map(|line| UnicodeWidthStr::width(line.as_str()))
        .unwrap_or(0);

    let mut lines = Vec::new();
    if !is_selected {
        let value_style = if field.text().is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };
        for segment in segments {
            let segment = if segment.is_empty() && lines.is_empty() {
                "-".to_string()
            } else {
                segment
            };
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(segment, value_style),
            ]));
        }
        return (lines, None);
    }

    let border_style = Style::default().fg(Color::Yellow);
    let value_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let border_line = "─".repeat(inner_width.saturating_add(2));
    lines.push(Line::from(Span::styled(
        format!("  ┌{border_line}┐"),
        border_style,
    )));
    let value_start = lines.len();
    for segment in &segments {
        let padding = inner_width.saturating_sub(UnicodeWidthStr::width(segment.as_str()));
        lines.push(Line::from(vec![
            Span::styled("  │ ", border_style),
            Span::styled(format!("{segment}{}", " ".repeat(padding)), value_style),
            Span::styled(" │", border_style),
        ]));
    }
    lines.push(Line::from(Span::styled(
        format!("  └{border_line}┘"),
        border_style,
    )));

    let cursor_hint = match field.schema.kind {
        FieldKind::Select(_) => None,
        FieldKind::Text | FieldKind::Integer | FieldKind::TextArea => Some(CursorHint {
            line_offset: value_start + segments.len() - 1,
            value_width: last_line_width as u16,
        }),
    };
    (lines, cursor_hint)
}

fn error_lines(field: &FieldState, max_width: u16) -> Option<Vec<Line<'static>>> {
    field.visible_error().map(|message| {
        wrap(message, max_width.max(8) as usize)
            .into_iter()
            .enumerate()
            .map(|(index, segment)| {
                let prefix = if index == 0 { "  ✗ " } else { "    " };
                Line::from(Span::styled(
                    format!("{prefix}{segment}"),
                    Style::default().fg(Color::Red),
                ))
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FieldId, FieldSchema};

    fn text_of(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn errors_stay_hidden_until_touched() {
        let mut field = FieldState::new(
            FieldSchema::new(FieldId::ApiVip, "API Virtual IP", FieldKind::Text),
            "",
        );
        field.set_error("Required".to_string());
        let render = build_field_render(&field, false, 40);
        assert!(!text_of(&render.lines).iter().any(|line| line.contains("Required")));

        field.touch();
        let render = build_field_render(&field, false, 40);
        assert!(text_of(&render.lines).contains(&"  ✗ Required".to_string()));
    }

    #[test]
    fn focused_field_shows_help_and_box() {
        let field = FieldState::new(
            FieldSchema::new(FieldId::ApiVip, "API Virtual IP", FieldKind::Text)
                .with_help("Virtual IP used to reach the API."),
            "10.0.0.1",
        );
        let lines = text_of(&build_field_render(&field, true, 60).lines);
        assert_eq!(lines[0], "API Virtual IP *");
        assert!(lines[1].starts_with("  ┌"));
        assert!(lines[2].contains("10.0.0.1"));
        assert!(lines.iter().any(|line| line.contains("Virtual IP used")));
    }

    #[test]
    fn text_area_lines_render_separately() {
        let field = FieldState::new(
            FieldSchema::new(FieldId::SshPublicKey, "SSH Public Key", FieldKind::TextArea),
            "first\nsecond",
        );
        let lines = text_of(&build_field_render(&field, false, 60).lines);
        assert_eq!(&lines[1..3], ["  first", "  second"]);
    }
}
