use std::fmt;

use crate::error::DomError;

/// Ordered set of class tokens attached to an element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

fn validate(token: &str) -> Result<(), DomError> {
    if token.is_empty() || token.chars().any(|c| c.is_ascii_whitespace()) {
        return Err(DomError::InvalidToken(token.to_string()));
    }
    Ok(())
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a class list from a space-separated string.
    pub fn parse(classes: &str) -> Self {
        let mut list = Self::new();
        list.extend(classes.split_whitespace());
        list
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Add a token. Returns true if it was not already present.
    pub fn add(&mut self, token: &str) -> Result<bool, DomError> {
        validate(token)?;
        if self.contains(token) {
            return Ok(false);
        }
        self.tokens.push(token.to_string());
        Ok(true)
    }

    /// Remove a token. Returns true if it was present.
    pub fn remove(&mut self, token: &str) -> Result<bool, DomError> {
        validate(token)?;
        let before = self.tokens.len();
        self.tokens.retain(|t| t != token);
        Ok(self.tokens.len() != before)
    }

    /// Flip a token's presence. Returns whether the token is present afterwards.
    pub fn toggle(&mut self, token: &str) -> Result<bool, DomError> {
        if self.remove(token)? {
            Ok(false)
        } else {
            self.add(token)
        }
    }
}

impl<'a> Extend<&'a str> for ClassList {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for token in iter {
            if let Err(err) = self.add(token) {
                log::warn!("[class_list] skipping token: {err}");
            }
        }
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}
