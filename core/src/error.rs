//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//!
//! Only two failure classes are fatal: the target documents could not be
//! located, or an anchor comment is missing from one of them. Identifier
//! and alias collisions are resolved by re-prompting inside the collector
//! and never reach this enum; formatter trouble is downgraded to a warning
//! by the CLI rather than surfaced as an error.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors (file access, terminal reads).
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The target documents could not be located in any supported layout.
    /// Raised before any work is done.
    #[from(ignore)]
    #[display("Location Error: {_0}")]
    Location(String),

    /// An anchor comment is missing from a document, so there is no safe
    /// insertion point. Raised before any write.
    #[from(ignore)]
    #[display("Anchor Error: {_0}")]
    AnchorNotFound(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_conversion() {
        let io_err = Error::new(ErrorKind::Other, "test");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_string_conversion() {
        // Test that String defaults to General, not one of the fatal variants
        let msg = String::from("something wrong");
        let app_err: AppError = msg.into();
        match app_err {
            AppError::General(s) => assert_eq!(s, "something wrong"),
            _ => panic!("String should convert to AppError::General"),
        }
    }

    #[test]
    fn test_fatal_variants_manual_creation() {
        // Location and AnchorNotFound must be created explicitly
        let loc = AppError::Location("no documents".into());
        assert_eq!(format!("{}", loc), "Location Error: no documents");

        let anchor = AppError::AnchorNotFound("marker gone".into());
        assert_eq!(format!("{}", anchor), "Anchor Error: marker gone");
    }
}
