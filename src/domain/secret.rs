use anyhow::{Context, Result};
use aws_sdk_secretsmanager::operation::get_secret_value::GetSecretValueOutput;
use aws_smithy_types::date_time::Format;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::Serialize;

/// A fetched secret version. Field names follow the service's wire casing so
/// the full-JSON output matches what the service reports.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SecretRecord {
    #[serde(rename = "ARN")]
    pub arn: Option<String>,
    #[serde(rename = "CreatedDate")]
    pub created_date: Option<String>,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    /// Binary payloads are carried base64-encoded.
    #[serde(rename = "SecretBinary")]
    pub secret_binary: Option<String>,
    #[serde(rename = "SecretString")]
    pub secret_string: Option<String>,
    #[serde(rename = "VersionId")]
    pub version_id: Option<String>,
    #[serde(rename = "VersionStages")]
    pub version_stages: Option<Vec<String>>,
}

impl SecretRecord {
    pub fn from_output(output: GetSecretValueOutput) -> Self {
        Self {
            arn: output.arn,
            created_date: output
                .created_date
                .and_then(|date| date.fmt(Format::DateTime).ok()),
            name: output.name,
            secret_binary: output
                .secret_binary
                .map(|blob| BASE64.encode(blob.as_ref())),
            secret_string: output.secret_string,
            version_id: output.version_id,
            version_stages: output.version_stages,
        }
    }

    /// The secret payload alone: the string value, or the base64 form of a
    /// binary secret.
    pub fn payload(&self) -> String {
        self.secret_string
            .clone()
            .or_else(|| self.secret_binary.clone())
            .unwrap_or_default()
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize secret response")
    }
}
