//! Registry of senseBox devices this service is allowed to query.
//!
//! The registry is an immutable value built once at startup and carried in
//! the application state; validation of caller-supplied IDs happens against
//! it before any upstream call is made.

/// senseBox IDs tracked by this deployment.
pub const SENSEBOX_IDS: [&str; 3] = [
    "5eba5fbad46fb8001b799786",
    "5c21ff8f919bf8001adf2488",
    "5ade1acf223bd80019a1011c",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("senseBox ID cannot be empty")]
    Empty,

    #[error("Invalid senseBox ID format: must be exactly 24 hexadecimal characters")]
    Malformed,

    #[error("senseBox ID not found in allowed list")]
    Unknown,
}

#[derive(Debug, Clone)]
pub struct BoxRegistry {
    ids: Vec<String>,
}

impl BoxRegistry {
    /// Registry over the builtin senseBox IDs.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(SENSEBOX_IDS.iter().map(ToString::to_string).collect())
    }

    #[must_use]
    pub fn new(ids: Vec<String>) -> Self {
        Self { ids }
    }

    /// IDs in fixed query order.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|known| known == id)
    }

    /// Validate a caller-supplied senseBox ID.
    ///
    /// Checks syntactic form (exactly 24 hexadecimal characters,
    /// case-insensitive) before registry membership. Pure, no I/O.
    ///
    /// # Errors
    ///
    /// Returns the first failed check as a `ValidationError`.
    pub fn validate(&self, id: &str) -> Result<(), ValidationError> {
        if id.is_empty() {
            return Err(ValidationError::Empty);
        }
        if id.len() != 24 || !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValidationError::Malformed);
        }
        if !self.contains(id) {
            return Err(ValidationError::Unknown);
        }
        Ok(())
    }
}

impl Default for BoxRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
