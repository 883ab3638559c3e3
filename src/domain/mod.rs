pub mod credentials;
pub mod error;
pub mod secret;

pub use error::CredentialsError;
pub use secret::SecretRecord;
