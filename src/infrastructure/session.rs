use aws_config::BehaviorVersion;
use aws_sdk_secretsmanager::Client;
use aws_types::region::Region;

use crate::config::FetchConfig;
use crate::domain::CredentialsError;
use crate::infrastructure::credentials_file;

/// Resolves a Secrets Manager client for this invocation.
///
/// With `skip_profile` set, the SDK discovers credentials ambiently
/// (environment, default profile, instance metadata) and only the region is
/// pinned. Otherwise the named profile is validated against the credentials
/// file first; validation failure aborts resolution with no fetch attempted.
pub async fn resolve_client(config: &FetchConfig) -> Result<Client, CredentialsError> {
    if !config.skip_profile {
        credentials_file::verify_profile(&config.credentials_file, &config.profile)?;
    }

    let mut loader =
        aws_config::defaults(BehaviorVersion::latest()).region(Region::new(config.region.clone()));
    if !config.skip_profile {
        loader = loader.profile_name(config.profile.as_str());
    }

    let shared_config = loader.load().await;
    Ok(Client::new(&shared_config))
}
