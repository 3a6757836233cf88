use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContactName(String);

impl ContactName {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Joins command tokens with single spaces, e.g. `["Ada", "Lovelace"]`.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, CoreError> {
        let joined = tokens
            .iter()
            .map(|token| token.as_ref().trim())
            .filter(|token| !token.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        Self::new(&joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ContactName {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<ContactName> for String {
    fn from(name: ContactName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::ContactName;
    use crate::error::CoreError;

    #[test]
    fn name_is_trimmed() {
        let name = ContactName::new("  Ada Lovelace ").unwrap();
        assert_eq!(name.as_str(), "Ada Lovelace");
    }

    #[test]
    fn name_rejects_blank() {
        assert_eq!(ContactName::new("  ").unwrap_err(), CoreError::EmptyName);
        let empty: [&str; 0] = [];
        assert_eq!(
            ContactName::from_tokens(&empty).unwrap_err(),
            CoreError::EmptyName
        );
    }

    #[test]
    fn from_tokens_joins_with_single_spaces() {
        let name = ContactName::from_tokens(&["Mary", "", "Ann", "Smith"]).unwrap();
        assert_eq!(name.as_str(), "Mary Ann Smith");
    }
}
