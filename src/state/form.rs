//! Values currently shown by the settings form elements.
//!
//! DESIGN
//! ======
//! The rendered inputs read and write this map through a signal; an element
//! exists on the page exactly when its id has an entry here.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::HashMap;

use crate::settings::binding::{Binding, FieldValue};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    values: HashMap<String, FieldValue>,
}

impl FormState {
    /// One entry per binding, each holding the binding's empty value.
    pub fn for_bindings(bindings: &[Binding]) -> Self {
        let values = bindings
            .iter()
            .map(|b| (b.element_id.clone(), b.to_field(None)))
            .collect();
        Self { values }
    }

    #[must_use]
    pub fn get(&self, element_id: &str) -> Option<&FieldValue> {
        self.values.get(element_id)
    }

    /// Store a value for an element that is on the page. Unknown ids are ignored.
    pub fn set(&mut self, element_id: &str, value: FieldValue) {
        if let Some(slot) = self.values.get_mut(element_id) {
            *slot = value;
        }
    }

    #[must_use]
    pub fn checked(&self, element_id: &str) -> bool {
        matches!(self.get(element_id), Some(FieldValue::Checked(true)))
    }

    /// Text value of an element; checkboxes and unknown ids read as empty.
    #[must_use]
    pub fn text(&self, element_id: &str) -> String {
        match self.get(element_id) {
            Some(FieldValue::Text(text)) => text.clone(),
            _ => String::new(),
        }
    }
}
