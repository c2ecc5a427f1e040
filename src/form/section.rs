use crate::{api::ClusterUpdateParams, domain::FormSection};

use super::{field::FieldState, initial::field_text};

#[derive(Debug, Clone)]
pub struct SectionState {
    pub id: String,
    pub title: String,
    pub fields: Vec<FieldState>,
}

impl SectionState {
    pub fn from_section(section: &FormSection, params: &ClusterUpdateParams) -> Self {
        let fields = section
            .fields
            .iter()
            .cloned()
            .map(|schema| {
                let initial = field_text(params, schema.id);
                FieldState::new(schema, &initial)
            })
            .collect();
        Self {
            id: section.id.clone(),
            title: section.title.clone(),
            fields,
        }
    }
}
