use anyhow::Result;
use aws_sdk_secretsmanager::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_secretsmanager::operation::get_secret_value::GetSecretValueError;
use aws_sdk_secretsmanager::Client;
use aws_smithy_types::error::display::DisplayErrorContext;

use crate::config::FetchConfig;
use crate::domain::SecretRecord;

/// Movable stage label for the current secret version.
pub const CURRENT_VERSION_STAGE: &str = "AWSCURRENT";

/// Service errors that get a labeled diagnostic; anything else prints its raw
/// message.
const KNOWN_ERROR_CODES: [&str; 5] = [
    "ResourceNotFoundException",
    "InvalidParameterException",
    "InvalidRequestException",
    "DecryptionFailure",
    "InternalServiceError",
];

/// Issues the single `GetSecretValue` call and prints the result.
///
/// Service and transport errors are printed as diagnostics and are not
/// retried; only a serialization failure propagates as a fatal error.
pub async fn fetch_and_render(client: &Client, config: &FetchConfig) -> Result<()> {
    let stage = resolve_version_stage(config.version.as_deref());
    let response = client
        .get_secret_value()
        .secret_id(&config.secret)
        .version_stage(stage)
        .send()
        .await;

    match response {
        Ok(output) => {
            let record = SecretRecord::from_output(output);
            println!("{}", render(&record, config.extract)?);
            Ok(())
        }
        Err(err) => {
            println!("{}", describe_fetch_error(&err));
            Ok(())
        }
    }
}

/// Callers may pass either a stage label or a version id; the service itself
/// disambiguates. An unset version means the current stage.
fn resolve_version_stage(version: Option<&str>) -> &str {
    version.unwrap_or(CURRENT_VERSION_STAGE)
}

fn render(record: &SecretRecord, extract: bool) -> Result<String> {
    if extract {
        Ok(record.payload())
    } else {
        record.to_json()
    }
}

fn describe_fetch_error(err: &SdkError<GetSecretValueError>) -> String {
    match err {
        SdkError::ServiceError(context) => {
            let service_err = context.err();
            let message = DisplayErrorContext(service_err).to_string();
            format_service_error(service_err.code(), &message)
        }
        other => DisplayErrorContext(other).to_string(),
    }
}

fn format_service_error(code: Option<&str>, message: &str) -> String {
    match code {
        Some(code) if KNOWN_ERROR_CODES.contains(&code) => format!("{code} {message}"),
        _ => message.to_string(),
    }
}
