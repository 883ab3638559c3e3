use thiserror::Error;

/// Credential resolution fails closed: any of these aborts the run before a
/// fetch is attempted. The messages are the user-facing diagnostics.
#[derive(Error, Debug, PartialEq)]
pub enum CredentialsError {
    #[error("Could not find credentials file\n{0}")]
    FileUnreadable(String),

    #[error("Could not find profile in credentials file")]
    ProfileNotFound,

    #[error("Could not find access key in profile")]
    AccessKeyNotFound,
}
