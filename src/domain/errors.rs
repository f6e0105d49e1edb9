use thiserror::Error;

/// A specific input rule broken by `create_list` or `add_item`.
///
/// Display strings are the user-facing messages printed by the surface layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title must be at least 3 characters")]
    TitleTooShort,
    #[error("Title must be under 50 characters")]
    TitleTooLong,
    #[error("Only letters, numbers, spaces, dashes, and underscores allowed")]
    TitleInvalidChars,
    #[error("A list with this name already exists")]
    DuplicateTitle,
    #[error("Item name must not be empty")]
    ItemNameEmpty,
    #[error("Item price must be a non-negative number")]
    ItemPriceInvalid,
    #[error("Item quantity must be a non-negative whole number")]
    ItemQuantityInvalid,
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("List not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("PDF export failed: {0}")]
    Export(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        assert_eq!(DomainError::NotFound.to_string(), "List not found");
    }

    #[test]
    fn storage_display() {
        assert_eq!(
            DomainError::Storage("disk full".to_string()).to_string(),
            "Storage error: disk full"
        );
    }

    #[test]
    fn export_display() {
        assert_eq!(
            DomainError::Export("no rasterizer".to_string()).to_string(),
            "PDF export failed: no rasterizer"
        );
    }

    #[test]
    fn validation_display_is_transparent() {
        let err: DomainError = ValidationError::TitleTooShort.into();
        assert_eq!(err.to_string(), "Title must be at least 3 characters");
    }

    #[test]
    fn validation_error_converts_to_domain_error() {
        let err: DomainError = ValidationError::DuplicateTitle.into();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::DuplicateTitle)
        ));
    }
}
