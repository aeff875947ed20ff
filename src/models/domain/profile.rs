use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

pub const DEFAULT_NAME: &str = "Learner";
pub const DEFAULT_AGE: &str = "25";
pub const DEFAULT_COUNTRY: &str = "Global";

const MIN_AGE: u32 = 5;
const MAX_AGE: u32 = 120;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub role: String,
}

impl UserProfile {
    /// True when every field is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        [&self.name, &self.age, &self.country, &self.field, &self.role]
            .iter()
            .all(|value| value.trim().is_empty())
    }

    /// Checks the only hard requirements: a field of expertise, and an age that
    /// is a plausible whole number when one is given.
    pub fn validate(&self) -> AppResult<()> {
        if self.field.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Please enter a field of expertise to continue.".to_string(),
            ));
        }

        let age = self.age.trim();
        if !age.is_empty() {
            let valid = age
                .parse::<u32>()
                .is_ok_and(|years| (MIN_AGE..=MAX_AGE).contains(&years));
            if !valid {
                return Err(AppError::ValidationError(
                    "Please enter a valid number for age.".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Trimmed copy with defaults filled in for every optional field.
    pub fn resolved(&self) -> UserProfile {
        let field = self.field.trim().to_string();
        let role = non_empty_or(&self.role, || format!("Professional in {}", field));

        UserProfile {
            name: non_empty_or(&self.name, || DEFAULT_NAME.to_string()),
            age: non_empty_or(&self.age, || DEFAULT_AGE.to_string()),
            country: non_empty_or(&self.country, || DEFAULT_COUNTRY.to_string()),
            role,
            field,
        }
    }
}

fn non_empty_or(value: &str, default: impl FnOnce() -> String) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default()
    } else {
        trimmed.to_string()
    }
}
