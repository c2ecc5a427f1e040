use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::Value;

use crate::domain::{FieldKind, FieldSchema, SelectOption};

use super::error::FieldCoercionError;

#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    Select {
        options: Vec<SelectOption>,
        selected: usize,
    },
}

#[derive(Debug, Clone)]
pub struct FieldState {
    pub schema: FieldSchema,
    pub value: FieldValue,
    pub dirty: bool,
    pub touched: bool,
    pub error: Option<String>,
}

impl FieldState {
    pub fn new(schema: FieldSchema, initial: &str) -> Self {
        let value = match &schema.kind {
            FieldKind::Select(options) => {
                let mut options = options.clone();
                let selected = match options.iter().position(|option| option.value == initial) {
                    Some(index) => index,
                    None => {
                        // keep values the inventory knows but this form does not
                        options.push(SelectOption::new(initial, initial));
                        options.len() - 1
                    }
                };
                FieldValue::Select { options, selected }
            }
            FieldKind::Text | FieldKind::Integer | FieldKind::TextArea => {
                FieldValue::Text(initial.to_string())
            }
        };
        Self {
            schema,
            value,
            dirty: false,
            touched: false,
            error: None,
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        match &mut self.value {
            FieldValue::Text(buffer) => match key.code {
                KeyCode::Left | KeyCode::Right if self.schema.kind == FieldKind::Integer => {
                    let delta = if key.code == KeyCode::Left { -1 } else { 1 };
                    adjust_integer(buffer, delta);
                    self.after_edit();
                    true
                }
                KeyCode::Char(c) => {
                    buffer.push(c);
                    self.after_edit();
                    true
                }
                KeyCode::Backspace => {
                    if buffer.pop().is_none() {
                        return false;
                    }
                    self.after_edit();
                    true
                }
                KeyCode::Delete => {
                    buffer.clear();
                    self.after_edit();
                    true
                }
                _ => false,
            },
            FieldValue::Select { options, selected } => match key.code {
                KeyCode::Left => {
                    if options.is_empty() {
                        return false;
                    }
                    *selected = if *selected == 0 {
                        options.len() - 1
                    } else {
                        *selected - 1
                    };
                    self.after_edit();
                    true
                }
                KeyCode::Right | KeyCode::Char(' ') => {
                    if options.is_empty() {
                        return false;
                    }
                    *selected = (*selected + 1) % options.len();
                    self.after_edit();
                    true
                }
                _ => false,
            },
        }
    }

    /// Inserts pasted text. Single line inputs drop line breaks.
    pub fn insert_text(&mut self, text: &str) -> bool {
        let multiline = self.schema.is_multiline();
        let FieldValue::Text(buffer) = &mut self.value else {
            return false;
        };
        let before = buffer.len();
        if multiline {
            buffer.push_str(&text.replace("\r\n", "\n"));
        } else {
            buffer.extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
        }
        if buffer.len() == before {
            return false;
        }
        self.after_edit();
        true
    }

    pub fn insert_newline(&mut self) -> bool {
        if !self.schema.is_multiline() {
            return false;
        }
        if let FieldValue::Text(buffer) = &mut self.value {
            buffer.push('\n');
            self.after_edit();
            return true;
        }
        false
    }

    /// Replaces the value as if the user had typed it.
    pub fn set_text(&mut self, text: &str) {
        match &mut self.value {
            FieldValue::Text(buffer) => *buffer = text.to_string(),
            FieldValue::Select { options, selected } => {
                match options.iter().position(|option| option.value == text) {
                    Some(index) => *selected = index,
                    None => {
                        options.push(SelectOption::new(text, text));
                        *selected = options.len() - 1;
                    }
                }
            }
        }
        self.after_edit();
    }

    pub fn set_selected(&mut self, index: usize) {
        if let FieldValue::Select { options, selected } = &mut self.value
            && index < options.len()
        {
            *selected = index;
            self.after_edit();
        }
    }

    pub fn select_options(&self) -> Option<(&[SelectOption], usize)> {
        match &self.value {
            FieldValue::Select { options, selected } => Some((options.as_slice(), *selected)),
            FieldValue::Text(_) => None,
        }
    }

    /// Raw value as it goes on the wire.
    pub fn text(&self) -> String {
        match &self.value {
            FieldValue::Text(buffer) => buffer.clone(),
            FieldValue::Select { options, selected } => options
                .get(*selected)
                .map(|option| option.value.clone())
                .unwrap_or_default(),
        }
    }

    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(buffer) => buffer.clone(),
            FieldValue::Select { options, selected } => options
                .get(*selected)
                .map(|option| option.label.clone())
                .unwrap_or_default(),
        }
    }

    /// JSON value for whole-record validation. A host prefix that does not
    /// parse stays a string so the schema reports it against the field.
    pub fn json_value(&self) -> Value {
        let text = self.text();
        match self.schema.kind {
            FieldKind::Integer => text
                .trim()
                .parse::<i64>()
                .map(Value::from)
                .unwrap_or(Value::String(text)),
            FieldKind::TextArea => Value::String(text.trim_end().to_string()),
            FieldKind::Text | FieldKind::Select(_) => Value::String(text),
        }
    }

    pub fn integer_value(&self) -> Result<i64, FieldCoercionError> {
        let text = self.text();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(FieldCoercionError::new(self.schema.name(), "Required"));
        }
        trimmed
            .parse::<i64>()
            .map_err(|_| FieldCoercionError::new(self.schema.name(), "A whole number is required"))
    }

    /// Error to show inline; hidden until the field has been touched.
    pub fn visible_error(&self) -> Option<&str> {
        if self.touched {
            self.error.as_deref()
        } else {
            None
        }
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn touch(&mut self) {
        self.touched = true;
    }

    fn after_edit(&mut self) {
        self.dirty = true;
        self.touched = true;
        self.error = None;
    }
}

fn adjust_integer(buffer: &mut String, delta: i64) {
    let current = buffer.trim().parse::<i64>().unwrap_or(0);
    *buffer = current.saturating_add(delta).to_string();
}
