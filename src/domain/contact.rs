use std::hash::{Hash, Hasher};

pub use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
pub use uuid::Uuid;

use crate::errors::AppError;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Contact {
    pub id: Uuid,

    pub name: String,
    pub phone: String,
    pub email: String,
    pub tag: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    pub const NAME_RULE: &'static str = "Name must begin with alphabet, may contain spaces, dot, hyphen, and apostrophe between alphabets. \
        Name must not exceed 50 characters";

    pub const PHONE_RULE: &'static str =
        "Number must contain 10 to 15 digits and may begin with +";

    pub const EMAIL_RULE: &'static str =
        "Email can be empty, or must be a valid email. Must not exceed 254 characters";

    pub fn new(name: String, phone: String, email: String, tag: String) -> Self {
        let now = Utc::now();
        Contact {
            id: Uuid::new_v4(),
            name,
            phone,
            email,
            tag,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn validate_name(&self) -> Result<bool, AppError> {
        // Must begin with alphabet
        // Name may contain spaces, dots, hyphens, and apostrophe after that
        // Not more than 50 characters
        let re = Regex::new(r"^[A-Za-z][A-Za-z0-9 .'-]*$")?;
        Ok((self.name.len() <= 50) && re.is_match(&self.name))
    }

    pub fn validate_phone(&self) -> Result<bool, AppError> {
        // Must be between 10 to 15 digits
        // Phone number may begin with + signifying a country code
        let re = Regex::new(r"^\+?\d{10,15}$")?;
        Ok(re.is_match(&self.phone))
    }

    pub fn validate_email(&self) -> Result<bool, AppError> {
        // Email can be empty
        // Or must look like user@host.tld
        // Not more than 254 characters
        let re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")?;
        Ok(self.email.is_empty() || (re.is_match(&self.email) && self.email.len() <= 254))
    }
}

// Identity is (name, phone) with country-code-insensitive phone matching,
// so an edit to email or tag never turns a contact into a "new" one.
impl PartialEq for Contact {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && phones_match(&self.phone, &other.phone)
    }
}

impl Eq for Contact {}

impl Hash for Contact {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        national_digits(&self.phone).hash(state);
    }
}

/// Two numbers match when their national significant digits agree,
/// so `+2348123456789` and `08123456789` refer to the same line.
pub fn phones_match(a: &str, b: &str) -> bool {
    let (a, b) = (national_digits(a), national_digits(b));
    !a.is_empty() && a == b
}

// `+` numbers drop a three-digit country code, local numbers drop the
// leading trunk digit. Anything too short to carry either yields "".
fn national_digits(phone: &str) -> &str {
    match phone.strip_prefix('+') {
        Some(rest) => rest.get(3..).unwrap_or(""),
        None => phone.get(1..).unwrap_or(""),
    }
}
