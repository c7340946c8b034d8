//! Error types for repository operations.

use std::fmt;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Structured context for repository errors.
///
/// Provides additional information about where and why an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation being performed (e.g., "fetch_bookings")
    pub operation: Option<String>,
    /// The entity type involved (e.g., "booking", "bay")
    pub entity: Option<String>,
    /// The entity or center ID if applicable
    pub entity_id: Option<String>,
    /// Additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with an operation name.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    /// Set the entity type.
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Set the entity ID.
    pub fn with_entity_id(mut self, id: impl ToString) -> Self {
        self.entity_id = Some(id.to_string());
        self
    }

    /// Set additional details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(ref op) = self.operation {
            parts.push(format!("operation={}", op));
        }
        if let Some(ref entity) = self.entity {
            parts.push(format!("entity={}", entity));
        }
        if let Some(ref id) = self.entity_id {
            parts.push(format!("id={}", id));
        }
        if let Some(ref details) = self.details {
            parts.push(format!("details={}", details));
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Backend connection errors. Typically transient; retrying is the
    /// data-fetch layer's concern, never the scheduler's.
    #[error("Connection error: {message} {context}")]
    ConnectionError {
        message: String,
        context: ErrorContext,
    },

    /// Query execution errors.
    #[error("Query error: {message} {context}")]
    QueryError {
        message: String,
        context: ErrorContext,
    },

    /// Requested entity was not found.
    #[error("Not found: {message} {context}")]
    NotFound {
        message: String,
        context: ErrorContext,
    },

    /// A stored record failed validation when decoding.
    #[error("Data validation error: {message} {context}")]
    ValidationError {
        message: String,
        context: ErrorContext,
    },
}

impl RepositoryError {
    /// Shorthand for a query error with operation context.
    pub fn query(message: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::QueryError {
            message: message.into(),
            context: ErrorContext::new(operation),
        }
    }

    /// Shorthand for a not-found error on an entity.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        let entity = entity.into();
        Self::NotFound {
            message: format!("{} does not exist", entity),
            context: ErrorContext::default()
                .with_entity(entity)
                .with_entity_id(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_display_joins_parts() {
        let ctx = ErrorContext::new("fetch_bookings")
            .with_entity("booking")
            .with_entity_id("bk-7")
            .with_details("date range inverted");
        let rendered = ctx.to_string();
        assert!(rendered.contains("operation=fetch_bookings"));
        assert!(rendered.contains("entity=booking"));
        assert!(rendered.contains("id=bk-7"));
        assert!(rendered.contains("details=date range inverted"));
    }

    #[test]
    fn test_error_display_includes_context() {
        let err = RepositoryError::query("backend unreachable", "fetch_active_bays");
        let rendered = err.to_string();
        assert!(rendered.starts_with("Query error: backend unreachable"));
        assert!(rendered.contains("operation=fetch_active_bays"));
    }

    #[test]
    fn test_not_found_shorthand() {
        let err = RepositoryError::not_found("bay", "bay-9");
        assert!(err.to_string().contains("bay does not exist"));
        assert!(err.to_string().contains("id=bay-9"));
    }
}
