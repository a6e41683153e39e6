use entity::user::Gender;
use serde::{Deserialize, Serialize};

use crate::types::error::AppError;
use crate::utils::validation::{
    check_email, check_max_len, check_non_negative, check_password, parse_enum, BIOGRAPHY_MAX,
    EMAIL_MAX, NAME_MAX, USER_PHOTO_MAX,
};

fn check_profile_text(
    email: Option<&str>,
    first_name: Option<&str>,
    last_name: Option<&str>,
    photo: Option<&str>,
    biography: Option<&str>,
) -> Result<(), AppError> {
    check_max_len("email", email.map(str::trim), EMAIL_MAX)?;
    check_max_len("first_name", first_name, NAME_MAX)?;
    check_max_len("last_name", last_name, NAME_MAX)?;
    check_max_len("photo", photo, USER_PHOTO_MAX)?;
    check_max_len("biography", biography, BIOGRAPHY_MAX)
}

/// Body of `/login`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RUserLogin {
    pub email: String,
    pub password: String,
}

/// Body of `/register`. Only the credentials are required; the profile can
/// be filled in now or later through `PUT /users`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RUserRegister {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub photo: Option<String>,
    pub biography: Option<String>,
}

impl RUserRegister {
    /// Returns the parsed gender when every field checks out.
    pub fn validate(&self) -> Result<Option<Gender>, AppError> {
        check_email(&self.email)?;
        check_password(&self.password)?;
        check_profile_text(
            Some(&self.email),
            self.first_name.as_deref(),
            self.last_name.as_deref(),
            self.photo.as_deref(),
            self.biography.as_deref(),
        )?;
        check_non_negative("age", self.age)?;
        self.gender
            .as_deref()
            .map(|raw| parse_enum::<Gender>("gender", raw))
            .transpose()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RUserUpdate {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub photo: Option<String>,
    pub biography: Option<String>,
}

/// Admin-only account switches. Absent fields are left alone.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RUserAccess {
    pub is_active: Option<bool>,
    pub is_admin: Option<bool>,
}

#[derive(Debug)]
pub struct DBUserCreate {
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<Gender>,
    pub age: Option<i32>,
    pub photo: Option<String>,
    pub biography: Option<String>,
}

/// A validated user patch. `None` keeps the stored value.
#[derive(Debug, Default)]
pub struct DBUserUpdate {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<Gender>,
    pub age: Option<i32>,
    pub photo: Option<String>,
    pub biography: Option<String>,
}

impl RUserUpdate {
    /// Checks every present field. The password is left in clear text for the
    /// caller to hash.
    pub fn validate(&self) -> Result<Option<Gender>, AppError> {
        if let Some(email) = &self.email {
            check_email(email)?;
        }
        if let Some(password) = &self.password {
            check_password(password)?;
        }
        check_profile_text(
            self.email.as_deref(),
            self.first_name.as_deref(),
            self.last_name.as_deref(),
            self.photo.as_deref(),
            self.biography.as_deref(),
        )?;
        check_non_negative("age", self.age)?;
        self.gender
            .as_deref()
            .map(|raw| parse_enum::<Gender>("gender", raw))
            .transpose()
    }
}
