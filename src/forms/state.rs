use std::rc::Rc;

use yew::prelude::*;

use crate::error::SubmissionError;
use crate::forms::definitions::FormKind;
use crate::forms::handlers;
use crate::forms::payload::SubmissionPayload;
use crate::validation::field::{FieldKind, FormField};
use crate::validation::phone;

/// Current values and validation state of every field in one form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub kind: FormKind,
    pub fields: Vec<FormField>,
}

pub enum FormAction {
    Input { name: &'static str, value: String },
    Blur { name: &'static str },
    Reset,
}

impl FormState {
    pub fn new(kind: FormKind) -> Self {
        let fields = kind
            .fields()
            .iter()
            .map(|spec| FormField::new(spec.name, spec.kind, spec.required))
            .collect();
        Self { kind, fields }
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|field| field.name == name)
    }

    /// Current values by field name, with phone numbers in canonical form.
    pub fn payload(&self) -> SubmissionPayload {
        self.fields
            .iter()
            .map(|field| {
                let value = match field.kind {
                    FieldKind::Tel => phone::normalize(&field.raw_value),
                    _ => field.raw_value.clone(),
                };
                (field.name, value)
            })
            .collect()
    }

    pub fn submit(&self) -> Result<&'static str, SubmissionError> {
        handlers::submit(self.kind, &self.payload())
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Input { name, value } => {
                if let Some(field) = self.field_mut(name) {
                    field.on_input(value);
                }
            }
            FormAction::Blur { name } => {
                if let Some(field) = self.field_mut(name) {
                    field.on_blur();
                }
            }
            FormAction::Reset => self.fields.iter_mut().for_each(FormField::reset),
        }
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
