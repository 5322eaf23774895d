//! The user's resolved choices

/// Message shown while the project name is empty
pub const EMPTY_NAME_MESSAGE: &str = "Please enter a valid name";

/// Answers collected once per run; never modified afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet {
    /// Project name, kept exactly as typed
    pub name: String,
    pub use_typescript: bool,
    pub use_eslint: bool,
    pub use_prettier: bool,
}

impl AnswerSet {
    /// Initial values for the three toggles: TypeScript, ESLint, Prettier
    pub const DEFAULT_TOGGLES: (bool, bool, bool) = (false, true, true);

    /// Answers with the prompt defaults for every toggle
    pub fn with_defaults(name: impl Into<String>) -> Self {
        let (use_typescript, use_eslint, use_prettier) = Self::DEFAULT_TOGGLES;
        Self {
            name: name.into(),
            use_typescript,
            use_eslint,
            use_prettier,
        }
    }
}

/// Accept any name whose trimmed form is non-empty. No path sanitization.
pub fn validate_name(input: &str) -> Result<(), &'static str> {
    if input.trim().is_empty() {
        Err(EMPTY_NAME_MESSAGE)
    } else {
        Ok(())
    }
}
