//! Contact form fields

use std::str::FromStr;

use crate::error::Error;

/// One of the contact form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// The input's `name`/`id` attribute
    pub fn input_name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.input_name() == s)
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

/// Controlled values of the three contact inputs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_from_input_name() {
        assert_eq!("name".parse::<Field>().unwrap(), Field::Name);
        assert_eq!("email".parse::<Field>().unwrap(), Field::Email);
        assert_eq!("message".parse::<Field>().unwrap(), Field::Message);
        assert!(matches!(
            "phone".parse::<Field>(),
            Err(Error::UnknownField(ref f)) if f == "phone"
        ));
    }

    #[test]
    fn test_set_and_get() {
        let mut form = ContactForm::new();
        form.set(Field::Email, "a@x.com");
        assert_eq!(form.get(Field::Email), "a@x.com");
        assert_eq!(form.get(Field::Name), "");
    }

    #[test]
    fn test_clear_blanks_every_field() {
        let mut form = ContactForm {
            name: "Ana".into(),
            email: "a@x.com".into(),
            message: "Hi".into(),
        };
        assert!(!form.is_blank());
        form.clear();
        assert!(form.is_blank());
        assert_eq!(form, ContactForm::default());
    }
}
