//! Draft values bound to the four text inputs.

use std::{fmt, str::FromStr};

use shared::{
    domain::UserId,
    protocol::{NewUser, UserUpdate},
};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Id,
    Name,
    Surname,
    Age,
}

impl FormField {
    /// Display order of the inputs.
    pub const ALL: [FormField; 4] = [
        FormField::Id,
        FormField::Name,
        FormField::Surname,
        FormField::Age,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Id => "ID",
            FormField::Name => "Name",
            FormField::Surname => "Surname",
            FormField::Age => "Age",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            FormField::Id => "id",
            FormField::Name => "name",
            FormField::Surname => "surname",
            FormField::Age => "age",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown form field '{s}'"))
    }
}

/// Raw text of every input. Numeric fields stay text until submission and the
/// form is never cleared between operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub age: String,
}

impl FormState {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Id => &self.id,
            FormField::Name => &self.name,
            FormField::Surname => &self.surname,
            FormField::Age => &self.age,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Id => &mut self.id,
            FormField::Name => &mut self.name,
            FormField::Surname => &mut self.surname,
            FormField::Age => &mut self.age,
        };
        *slot = value;
    }

    pub fn parsed_age(&self) -> Result<i64, ValidationError> {
        parse_integer(&self.age).ok_or_else(|| ValidationError::InvalidAge {
            value: self.age.clone(),
        })
    }

    pub fn parsed_id(&self) -> Result<UserId, ValidationError> {
        match parse_integer(&self.id) {
            Some(id) if id > 0 => Ok(UserId(id)),
            _ => Err(ValidationError::InvalidId {
                value: self.id.clone(),
            }),
        }
    }

    /// Body for `POST /users`. The id field is not part of it.
    pub fn create_request(&self) -> Result<NewUser, ValidationError> {
        let age = self.parsed_age()?;
        Ok(NewUser {
            name: self.name.clone(),
            surname: self.surname.clone(),
            age,
        })
    }

    /// Target and body for `PUT /users/{id}`. Age is checked before id.
    pub fn update_request(&self) -> Result<(UserId, UserUpdate), ValidationError> {
        let age = self.parsed_age()?;
        let id = self.parsed_id()?;
        Ok((
            id,
            UserUpdate {
                id: Some(id),
                name: self.name.clone(),
                surname: self.surname.clone(),
                age,
            },
        ))
    }

    /// Delete addresses the raw id text as typed.
    pub fn delete_target(&self) -> &str {
        &self.id
    }
}

/// Reads the leading base-10 integer: leading whitespace, an optional sign,
/// then as many ASCII digits as follow. Anything after the digits is ignored,
/// so `"30abc"` is 30 and `"3.5"` is 3. No digit in that position, or a value
/// outside `i64`, yields `None`.
fn parse_integer(raw: &str) -> Option<i64> {
    let text = raw.trim_start();
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let sign_len = text.len() - unsigned.len();
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    text[..sign_len + digits].parse::<i64>().ok()
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
