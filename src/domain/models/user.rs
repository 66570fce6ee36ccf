use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, models::credential::HashedPassword};

/// Kind of account being registered. Each variant owns exactly one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Admin,
    Client,
    Driver,
}

impl UserType {
    pub const ALL: [UserType; 3] = [UserType::Admin, UserType::Client, UserType::Driver];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Admin => "admin",
            UserType::Client => "client",
            UserType::Driver => "driver",
        }
    }

    pub fn table_name(&self) -> &'static str {
        match self {
            UserType::Admin => "admins",
            UserType::Client => "clients",
            UserType::Driver => "drivers",
        }
    }
}

impl FromStr for UserType {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        UserType::ALL
            .into_iter()
            .find(|user_type| user_type.as_str() == value)
            .ok_or_else(|| DomainError::UnknownUserType(value.to_string()))
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw registration fields as received from the caller
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub user_type: String,
}

impl RegistrationRequest {
    /// Resolve the user type and check that every field carries a value.
    ///
    /// The user type is checked first so that caller text never reaches the
    /// persistence layer unless it names a known table.
    pub fn validate(&self) -> Result<UserType, DomainError> {
        let user_type = self.user_type.parse::<UserType>()?;

        require("name", &self.name)?;
        require("email", &self.email)?;
        require("password", &self.password)?;
        require("phone", &self.phone)?;

        Ok(user_type)
    }
}

fn require(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingField(field));
    }
    Ok(())
}

/// Validated user ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
    phone: String,
    password_hash: HashedPassword,
    user_type: UserType,
}

impl NewUser {
    pub fn new(
        name: String,
        email: String,
        phone: String,
        password_hash: HashedPassword,
        user_type: UserType,
    ) -> Self {
        Self {
            name,
            email,
            phone,
            password_hash,
            user_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn phone(&self) -> &str {
        &self.phone
    }
    pub fn password_hash(&self) -> &HashedPassword {
        &self.password_hash
    }
    pub fn user_type(&self) -> UserType {
        self.user_type
    }
}
