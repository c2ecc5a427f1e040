use serde_json::{Map, Value, json};

use crate::{
    api::{ClusterUpdateParams, HostRoleAssignment},
    domain::{FieldId, FieldKind, FormSchema},
    validation::FieldErrors,
};

use super::{
    error::FieldCoercionError, field::FieldState, initial::assign_text, section::SectionState,
};

#[derive(Debug, Clone)]
pub struct FormState {
    pub title: String,
    pub sections: Vec<SectionState>,
    pub section_index: usize,
    pub field_index: usize,
    hosts_roles: Vec<HostRoleAssignment>,
}

impl FormState {
    pub fn from_params(schema: &FormSchema, params: &ClusterUpdateParams) -> Self {
        let sections = schema
            .sections
            .iter()
            .map(|section| SectionState::from_section(section, params))
            .filter(|section| !section.fields.is_empty())
            .collect();
        Self {
            title: schema.title.clone(),
            sections,
            section_index: 0,
            field_index: 0,
            hosts_roles: params.hosts_roles.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|section| section.fields.is_empty())
    }

    pub fn hosts_roles(&self) -> &[HostRoleAssignment] {
        &self.hosts_roles
    }

    pub fn focused_field(&self) -> Option<&FieldState> {
        self.sections
            .get(self.section_index)
            .and_then(|section| section.fields.get(self.field_index))
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut FieldState> {
        self.sections
            .get_mut(self.section_index)
            .and_then(|section| section.fields.get_mut(self.field_index))
    }

    /// Position of the focused field counted across all sections.
    pub fn focused_position(&self) -> usize {
        self.sections
            .iter()
            .take(self.section_index)
            .map(|section| section.fields.len())
            .sum::<usize>()
            + self.field_index
    }

    pub fn focus_next_field(&mut self) {
        let Some(section) = self.sections.get(self.section_index) else {
            return;
        };
        if self.field_index + 1 < section.fields.len() {
            self.field_index += 1;
        } else {
            self.advance_section(1);
        }
    }

    pub fn focus_prev_field(&mut self) {
        if self.sections.is_empty() {
            return;
        }
        if self.field_index > 0 {
            self.field_index -= 1;
        } else {
            self.advance_section(-1);
            if let Some(section) = self.sections.get(self.section_index) {
                self.field_index = section.fields.len().saturating_sub(1);
            }
        }
    }

    pub fn focus_next_section(&mut self, delta: i32) {
        self.advance_section(delta);
    }

    pub fn focus_field(&mut self, id: FieldId) -> bool {
        for (section_index, section) in self.sections.iter().enumerate() {
            if let Some(field_index) = section.fields.iter().position(|field| field.schema.id == id)
            {
                self.section_index = section_index;
                self.field_index = field_index;
                return true;
            }
        }
        false
    }

    pub fn field(&self, id: FieldId) -> Option<&FieldState> {
        self.iter_fields().find(|field| field.schema.id == id)
    }

    pub fn field_mut(&mut self, id: FieldId) -> Option<&mut FieldState> {
        self.iter_fields_mut().find(|field| field.schema.id == id)
    }

    /// Buffer as a JSON document, valid or not.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        for field in self.iter_fields() {
            map.insert(field.schema.name().to_string(), field.json_value());
        }
        let roles = self
            .hosts_roles
            .iter()
            .map(|assignment| json!({ "id": assignment.id, "role": assignment.role }))
            .collect();
        map.insert("hostsRoles".to_string(), Value::Array(roles));
        Value::Object(map)
    }

    pub fn try_build_params(&self) -> Result<ClusterUpdateParams, FieldCoercionError> {
        let mut params = ClusterUpdateParams {
            hosts_roles: self.hosts_roles.clone(),
            ..ClusterUpdateParams::default()
        };
        for field in self.iter_fields() {
            match field.schema.kind {
                FieldKind::Integer => {
                    if field.schema.id == FieldId::ClusterNetworkHostPrefix {
                        params.cluster_network_host_prefix = field.integer_value()?;
                    }
                }
                FieldKind::TextArea => {
                    assign_text(&mut params, field.schema.id, field.text().trim_end().to_string())
                }
                FieldKind::Text | FieldKind::Select(_) => {
                    assign_text(&mut params, field.schema.id, field.text())
                }
            }
        }
        Ok(params)
    }

    /// Replaces every field error with `errors`; entries that match no
    /// field come back as form level messages.
    pub fn apply_errors(&mut self, errors: &FieldErrors) -> Vec<String> {
        self.clear_errors();
        let mut unmatched = Vec::new();
        for (name, message) in errors {
            let target = FieldId::from_name(name).filter(|id| self.field(*id).is_some());
            match target {
                Some(id) => {
                    if let Some(field) = self.field_mut(id) {
                        field.set_error(message.clone());
                    }
                }
                None if name.is_empty() => unmatched.push(message.clone()),
                None => {
                    let location = describe_path(name, &self.hosts_roles);
                    unmatched.push(format!("{location}: {message}"));
                }
            }
        }
        unmatched
    }

    pub fn clear_errors(&mut self) {
        for field in self.iter_fields_mut() {
            field.clear_error();
        }
    }

    pub fn touch_all(&mut self) {
        for field in self.iter_fields_mut() {
            field.touch();
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.iter_fields().any(|field| field.dirty)
    }

    pub fn mark_clean(&mut self) {
        for field in self.iter_fields_mut() {
            field.dirty = false;
        }
    }

    pub fn error_count(&self) -> usize {
        self.iter_fields().filter(|field| field.error.is_some()).count()
    }

    pub fn iter_fields(&self) -> impl Iterator<Item = &FieldState> {
        self.sections.iter().flat_map(|section| section.fields.iter())
    }

    fn iter_fields_mut(&mut self) -> impl Iterator<Item = &mut FieldState> {
        self.sections
            .iter_mut()
            .flat_map(|section| section.fields.iter_mut())
    }

    fn advance_section(&mut self, delta: i32) {
        let len = self.sections.len() as i32;
        if len == 0 {
            return;
        }
        let next = self.section_index as i32 + delta;
        self.section_index = next.rem_euclid(len) as usize;
        self.field_index = 0;
    }
}

/// `hostsRoles.1.role` reads better as `host h2 role`.
fn describe_path(path: &str, hosts_roles: &[HostRoleAssignment]) -> String {
    let mut segments = path.split('.');
    if segments.next() == Some("hostsRoles")
        && let Some(index) = segments.next().and_then(|raw| raw.parse::<usize>().ok())
        && let Some(assignment) = hosts_roles.get(index)
    {
        let attribute = segments.next().unwrap_or("entry");
        return format!("host {} {attribute}", assignment.id);
    }
    path.to_string()
}
