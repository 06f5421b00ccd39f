use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_NAME: &str = "Firstname LASTNAME";
pub const DEFAULT_EMAIL: &str = "your-mail@address.com";
pub const DEFAULT_PHONE: &str = "XXXXXXXXXX";

/// The editable profile: the single unit of storage.
///
/// Each field carries its own serde default so a partially stored record
/// keeps what it has and falls back to the placeholders for the rest. A
/// stored `null` counts as absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(default = "default_name", deserialize_with = "name_or_default")]
    pub name: String,
    #[serde(default = "default_email", deserialize_with = "email_or_default")]
    pub email: String,
    #[serde(default = "default_phone", deserialize_with = "phone_or_default")]
    pub phone: String,
    /// Local image reference; `None` means the bundled default avatar.
    #[serde(default)]
    pub avatar: Option<String>,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_email() -> String {
    DEFAULT_EMAIL.to_string()
}

fn default_phone() -> String {
    DEFAULT_PHONE.to_string()
}

fn name_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_name))
}

fn email_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_email))
}

fn phone_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_phone))
}

impl Default for ProfileRecord {
    fn default() -> Self {
        Self {
            name: default_name(),
            email: default_email(),
            phone: default_phone(),
            avatar: None,
        }
    }
}

impl ProfileRecord {
    pub fn new(name: &str, email: &str, phone: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            avatar: None,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
        }
    }

    /// Parse from the stored JSON form.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Serialize to the stored JSON form.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// The text fields a user can type into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Phone];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }
}
