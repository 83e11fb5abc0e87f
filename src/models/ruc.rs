use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of characters in a RUC.
pub const RUC_LEN: usize = 11;

// ---------------------------------------------------------------------------
// RucValidationError
// ---------------------------------------------------------------------------

/// Field-level rejection of a RUC typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RucValidationError {
    #[error("El RUC debe tener 11 dígitos.")]
    WrongLength,

    #[error("El RUC solo debe contener números.")]
    NonNumeric,
}

// ---------------------------------------------------------------------------
// Ruc
// ---------------------------------------------------------------------------

/// A taxpayer identifier that passed input validation: exactly eleven ASCII
/// digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ruc(String);

impl Ruc {
    /// Validate raw user input. Length is checked before content, so
    /// `"123"` reports [`RucValidationError::WrongLength`] even though it is
    /// numeric. Input is not trimmed.
    pub fn parse(input: &str) -> Result<Self, RucValidationError> {
        if input.chars().count() != RUC_LEN {
            return Err(RucValidationError::WrongLength);
        }
        if !input.chars().all(|c| c.is_ascii_digit()) {
            return Err(RucValidationError::NonNumeric);
        }
        Ok(Ruc(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ruc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Ruc {
    type Err = RucValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ruc::parse(s)
    }
}

impl TryFrom<String> for Ruc {
    type Error = RucValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Ruc::parse(&value)
    }
}

impl From<Ruc> for String {
    fn from(ruc: Ruc) -> Self {
        ruc.0
    }
}

impl AsRef<str> for Ruc {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
