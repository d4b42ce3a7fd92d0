use crate::coerce::Coercion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Input,
    TextArea,
}

/// Static description of a named form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub coercion: Coercion,
}

impl FieldSpec {
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Input,
            coercion: Coercion::Text,
        }
    }

    pub const fn text_area(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::TextArea,
            coercion: Coercion::Text,
        }
    }

    pub const fn numeric(name: &'static str, coercion: Coercion) -> Self {
        Self {
            name,
            kind: FieldKind::Input,
            coercion,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub spec: FieldSpec,
    pub value: String,
}

/// A form element: an ordered set of named fields plus the focused one.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<Field>,
    focused: Option<&'static str>,
}

impl Form {
    pub fn new(specs: &[FieldSpec]) -> Self {
        Self {
            fields: specs
                .iter()
                .map(|spec| Field {
                    spec: *spec,
                    value: String::new(),
                })
                .collect(),
            focused: None,
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.spec.name == name)
            .map(|field| field.value.as_str())
    }

    /// Sets a field by name. Returns `false` when the form has no such field.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|field| field.spec.name == name) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }

    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|field| field.value.is_empty())
    }

    pub fn focus_first(&mut self) {
        self.focused = self.fields.first().map(|field| field.spec.name);
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused
    }
}

/// The submit control of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    label: String,
    disabled: bool,
}

impl SubmitButton {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            disabled: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub(crate) fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
    }

    pub(crate) fn disable(&mut self, busy_label: &str) {
        self.disabled = true;
        self.set_label(busy_label);
    }

    pub(crate) fn enable(&mut self, label: &str) {
        self.disabled = false;
        self.set_label(label);
    }
}
