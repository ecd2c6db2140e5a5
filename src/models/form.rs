//! Form data model
//!
//! `FormData` is the single record collected across the wizard. It is only
//! ever changed by merging a `FormPatch`: fields named in the patch are
//! replaced, every other field keeps its previous value.

use std::fmt;

use super::identity::{Gender, IdType};

/// Identifies one field of `FormData`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    FullName,
    IdType,
    IdNumber,
    Birthday,
    Gender,
    PhoneNumber,
    VerificationCode,
}

impl FormField {
    /// Stable machine name of the field
    pub fn key(self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::IdType => "id_type",
            Self::IdNumber => "id_number",
            Self::Birthday => "birthday",
            Self::Gender => "gender",
            Self::PhoneNumber => "phone_number",
            Self::VerificationCode => "verification_code",
        }
    }

    /// Label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full name",
            Self::IdType => "ID type",
            Self::IdNumber => "ID number",
            Self::Birthday => "Birthday",
            Self::Gender => "Gender",
            Self::PhoneNumber => "Phone",
            Self::VerificationCode => "Code",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// All data collected by the wizard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    /// Full legal name
    pub full_name: String,

    /// Identity document kind
    pub id_type: IdType,

    /// Identity document number
    pub id_number: String,

    /// Date of birth as an ISO 8601 calendar date string (not parsed)
    pub birthday: String,

    /// Unset until the user picks one
    pub gender: Option<Gender>,

    /// Mobile number, expected to be 11 ASCII digits
    pub phone_number: String,

    /// One-time code, expected to be 6 digits
    pub verification_code: String,
}

impl FormData {
    /// Create an empty form with default selections
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a partial update, keeping every field the patch omits
    pub fn merge(&mut self, patch: FormPatch) {
        let FormPatch {
            full_name,
            id_type,
            id_number,
            birthday,
            gender,
            phone_number,
            verification_code,
        } = patch;

        if let Some(v) = full_name {
            self.full_name = v;
        }
        if let Some(v) = id_type {
            self.id_type = v;
        }
        if let Some(v) = id_number {
            self.id_number = v;
        }
        if let Some(v) = birthday {
            self.birthday = v;
        }
        if let Some(v) = gender {
            self.gender = Some(v);
        }
        if let Some(v) = phone_number {
            self.phone_number = v;
        }
        if let Some(v) = verification_code {
            self.verification_code = v;
        }
    }

    /// Text value of a free-text field, `None` for selector fields
    pub fn text(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::FullName => Some(&self.full_name),
            FormField::IdNumber => Some(&self.id_number),
            FormField::Birthday => Some(&self.birthday),
            FormField::PhoneNumber => Some(&self.phone_number),
            FormField::VerificationCode => Some(&self.verification_code),
            FormField::IdType | FormField::Gender => None,
        }
    }
}

/// A partial update to `FormData`; `None` means "leave unchanged"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPatch {
    pub full_name: Option<String>,
    pub id_type: Option<IdType>,
    pub id_number: Option<String>,
    pub birthday: Option<String>,
    pub gender: Option<Gender>,
    pub phone_number: Option<String>,
    pub verification_code: Option<String>,
}

impl FormPatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    pub fn full_name(mut self, value: impl Into<String>) -> Self {
        self.full_name = Some(value.into());
        self
    }

    pub fn id_type(mut self, value: IdType) -> Self {
        self.id_type = Some(value);
        self
    }

    pub fn id_number(mut self, value: impl Into<String>) -> Self {
        self.id_number = Some(value.into());
        self
    }

    pub fn birthday(mut self, value: impl Into<String>) -> Self {
        self.birthday = Some(value.into());
        self
    }

    pub fn gender(mut self, value: Gender) -> Self {
        self.gender = Some(value);
        self
    }

    pub fn phone_number(mut self, value: impl Into<String>) -> Self {
        self.phone_number = Some(value.into());
        self
    }

    pub fn verification_code(mut self, value: impl Into<String>) -> Self {
        self.verification_code = Some(value.into());
        self
    }

    /// Build a patch that sets one free-text field
    ///
    /// Selector fields are ignored and yield an empty patch.
    pub fn text(field: FormField, value: impl Into<String>) -> Self {
        let patch = Self::new();
        match field {
            FormField::FullName => patch.full_name(value),
            FormField::IdNumber => patch.id_number(value),
            FormField::Birthday => patch.birthday(value),
            FormField::PhoneNumber => patch.phone_number(value),
            FormField::VerificationCode => patch.verification_code(value),
            FormField::IdType | FormField::Gender => patch,
        }
    }

    /// Check if the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormData {
        FormData {
            full_name: "Li Wei".into(),
            id_type: IdType::Passport,
            id_number: "E12345678".into(),
            birthday: "1990-05-17".into(),
            gender: Some(Gender::Female),
            phone_number: "13812345678".into(),
            verification_code: "123456".into(),
        }
    }

    #[test]
    fn test_new_form_defaults() {
        let form = FormData::new();
        assert_eq!(form.id_type, IdType::IdentityCard);
        assert_eq!(form.gender, None);
        assert!(form.full_name.is_empty());
        assert!(form.verification_code.is_empty());
    }

    #[test]
    fn test_merge_keeps_omitted_fields() {
        let mut form = filled();
        let before = form.clone();

        form.merge(FormPatch::new().phone_number("13900000000"));

        assert_eq!(form.phone_number, "13900000000");
        assert_eq!(form.full_name, before.full_name);
        assert_eq!(form.id_type, before.id_type);
        assert_eq!(form.id_number, before.id_number);
        assert_eq!(form.birthday, before.birthday);
        assert_eq!(form.gender, before.gender);
        assert_eq!(form.verification_code, before.verification_code);
    }

    #[test]
    fn test_empty_patch_is_a_no_op() {
        let mut form = filled();
        let before = form.clone();
        let patch = FormPatch::new();
        assert!(patch.is_empty());

        form.merge(patch);
        assert_eq!(form, before);
    }

    #[test]
    fn test_merge_replaces_with_empty_string() {
        // Replacing with "" is still a replacement, not a deletion
        let mut form = filled();
        form.merge(FormPatch::new().full_name(""));
        assert_eq!(form.full_name, "");
        assert_eq!(form.id_number, "E12345678");
    }

    #[test]
    fn test_text_patch_targets_one_field() {
        let mut form = FormData::new();
        form.merge(FormPatch::text(FormField::Birthday, "2000-01-01"));
        assert_eq!(form.text(FormField::Birthday), Some("2000-01-01"));
        assert_eq!(form.text(FormField::FullName), Some(""));

        assert!(FormPatch::text(FormField::Gender, "male").is_empty());
        assert_eq!(form.text(FormField::IdType), None);
    }

    #[test]
    fn test_form_field_keys() {
        assert_eq!(FormField::FullName.to_string(), "full_name");
        assert_eq!(FormField::VerificationCode.key(), "verification_code");
        assert_eq!(FormField::PhoneNumber.label(), "Phone");
    }
}
