// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum UsageTrendsError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<UsageTrendsError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

pub type Result<T> = std::result::Result<T, UsageTrendsError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Invalid pattern '{pattern}': {details}")]
    InvalidPattern { pattern: String, details: String },

    #[error("Invalid category name '{name}': {details}")]
    InvalidCategoryName { name: String, details: String },

    #[error("Invalid commit id '{value}'")]
    InvalidCommitId { value: String },

    #[error("Timestamp {value} is outside the representable range")]
    InvalidTimestamp { value: i64 },

    #[error("No commits within the last {window}: newest is {latest}, now is {now}")]
    StaleHistory { window: String, latest: i64, now: i64 },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Failed to scan repository history: {reason}")]
    HistoryScanFailed {
        reason: String,
        #[source]
        source: Option<Box<UsageTrendsError>>,
    },

    #[error("Failed to count occurrences at {commit}: {reason}")]
    CountingFailed {
        commit: String,
        reason: String,
        #[source]
        source: Option<Box<UsageTrendsError>>,
    },

    #[error("Failed to produce report: {reason}")]
    ReportFailed {
        reason: String,
        #[source]
        source: Option<Box<UsageTrendsError>>,
    },
}

pub type ApplicationResult<T> = std::result::Result<T, ApplicationError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} output: {details}")]
    SerializationError { format: String, details: String },

    #[error("Git operation failed: {operation} - {details}")]
    GitError { operation: String, details: String },

    #[error("Plot rendering failed: {details}")]
    PlotError { details: String },

    #[error("Template error for '{path}': {details}")]
    TemplateError { path: PathBuf, details: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for UsageTrendsError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for UsageTrendsError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for UsageTrendsError {
    fn from(err: serde_yaml::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<UsageTrendsError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| UsageTrendsError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| UsageTrendsError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
