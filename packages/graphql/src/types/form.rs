use async_graphql::{Enum, SimpleObject};
use models::{Field, FormRecord};
use services::{ContactForm, DisplayElement, FieldError, FormState};

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum FormField {
    #[graphql(name = "FIRST_NAME")]
    FirstName,
    #[graphql(name = "LAST_NAME")]
    LastName,
    #[graphql(name = "EMAIL")]
    Email,
    #[graphql(name = "MESSAGE")]
    Message,
}

impl From<FormField> for Field {
    fn from(f: FormField) -> Self {
        match f {
            FormField::FirstName => Field::FirstName,
            FormField::LastName => Field::LastName,
            FormField::Email => Field::Email,
            FormField::Message => Field::Message,
        }
    }
}

impl From<Field> for FormField {
    fn from(f: Field) -> Self {
        match f {
            Field::FirstName => FormField::FirstName,
            Field::LastName => FormField::LastName,
            Field::Email => FormField::Email,
            Field::Message => FormField::Message,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum FormStateType {
    #[graphql(name = "EDITING")]
    Editing,
    #[graphql(name = "SUBMITTED")]
    Submitted,
}

impl From<FormState> for FormStateType {
    fn from(s: FormState) -> Self {
        match s {
            FormState::Editing => FormStateType::Editing,
            FormState::Submitted => FormStateType::Submitted,
        }
    }
}

#[derive(SimpleObject)]
pub struct FieldDescriptorType {
    pub field: FormField,
    pub name: String,
    pub placeholder: Option<String>,
}

#[derive(SimpleObject, Debug)]
pub struct FieldErrorType {
    pub field: FormField,
    pub message: String,
    /// Message as rendered, with the "Error: " prefix
    pub text: String,
}

impl From<&FieldError> for FieldErrorType {
    fn from(e: &FieldError) -> Self {
        FieldErrorType {
            field: e.field.into(),
            message: e.message.to_string(),
            text: e.display_text(),
        }
    }
}

#[derive(SimpleObject)]
pub struct DisplayElementType {
    pub field: FormField,
    pub value: String,
}

impl From<DisplayElement> for DisplayElementType {
    fn from(e: DisplayElement) -> Self {
        DisplayElementType {
            field: e.field.into(),
            value: e.value,
        }
    }
}

#[derive(SimpleObject)]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl From<&FormRecord> for FormValues {
    fn from(r: &FormRecord) -> Self {
        FormValues {
            first_name: r.first_name.clone(),
            last_name: r.last_name.clone(),
            email: r.email.clone(),
            message: r.message.clone(),
        }
    }
}

#[derive(SimpleObject)]
pub struct ContactFormType {
    pub heading: String,
    pub submit_label: String,
    pub fields: Vec<FieldDescriptorType>,
    pub values: FormValues,
    pub errors: Vec<FieldErrorType>,
    pub state: FormStateType,
    /// Whether submitting the current values would commit them
    pub is_valid: bool,
    /// Values of the last commit; no MESSAGE element when it was left empty
    pub submitted: Vec<DisplayElementType>,
}

impl From<&ContactForm> for ContactFormType {
    fn from(form: &ContactForm) -> Self {
        let view = form.view();
        ContactFormType {
            heading: view.heading.to_string(),
            submit_label: view.submit_label.to_string(),
            fields: view
                .fields
                .iter()
                .map(|d| FieldDescriptorType {
                    field: d.field.into(),
                    name: d.field.name().to_string(),
                    placeholder: d.placeholder.map(str::to_string),
                })
                .collect(),
            values: form.values().into(),
            errors: form.errors().iter().map(FieldErrorType::from).collect(),
            state: form.state().into(),
            is_valid: form.is_valid(),
            submitted: view.submitted.into_iter().map(DisplayElementType::from).collect(),
        }
    }
}
