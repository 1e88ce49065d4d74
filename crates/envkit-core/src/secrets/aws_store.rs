//! AWS Secrets Manager store

use async_trait::async_trait;
use aws_config::{meta::region::RegionProviderChain, BehaviorVersion, Region};
use aws_sdk_secretsmanager::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_secretsmanager::operation::get_secret_value::GetSecretValueError;
use aws_sdk_secretsmanager::Client;

use super::traits::{RemoteSecretStore, SecretStoreError, SecretStoreResult};
use crate::config::{ConfigError, ConfigResult, RemoteStoreConfig};

/// A secret store backed by AWS Secrets Manager
///
/// Credentials and region come from the standard AWS discovery chain,
/// optionally overridden by a [`RemoteStoreConfig`]. The client is cheap to
/// share and supports concurrent requests.
#[derive(Debug, Clone)]
pub struct AwsSecretStore {
    client: Client,
}

impl AwsSecretStore {
    /// Load shared AWS configuration and build a client
    ///
    /// Fails when the config overrides are invalid or when no region can be
    /// discovered.
    pub async fn load(config: &RemoteStoreConfig) -> ConfigResult<Self> {
        config.validate()?;

        let region_provider = match &config.region {
            Some(region) => RegionProviderChain::first_try(Region::new(region.clone())),
            None => RegionProviderChain::default_provider(),
        };

        let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region_provider);
        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        let shared_config = loader.load().await;
        if shared_config.region().is_none() {
            return Err(ConfigError::MissingRegion);
        }

        Ok(Self::from_client(Client::new(&shared_config)))
    }

    /// Wrap an existing client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RemoteSecretStore for AwsSecretStore {
    fn name(&self) -> &str {
        "aws-secrets-manager"
    }

    async fn get_secret(&self, secret_id: &str) -> SecretStoreResult<String> {
        let resp = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|e| map_sdk_error(secret_id, e))?;

        resp.secret_string()
            .map(str::to_string)
            .ok_or_else(|| SecretStoreError::EmptyPayload(secret_id.to_string()))
    }
}

fn map_sdk_error<R>(secret_id: &str, err: SdkError<GetSecretValueError, R>) -> SecretStoreError
where
    R: std::fmt::Debug + 'static,
{
    match err {
        SdkError::ServiceError(context) => {
            let err = context.into_err();
            if err.is_resource_not_found_exception() {
                SecretStoreError::NotFound(secret_id.to_string())
            } else if err.code() == Some("AccessDeniedException") {
                SecretStoreError::AccessDenied(secret_id.to_string())
            } else if err.is_internal_service_error() {
                SecretStoreError::Transient(DisplayErrorContext(err).to_string())
            } else {
                SecretStoreError::Other(DisplayErrorContext(err).to_string())
            }
        }
        err @ (SdkError::TimeoutError(_) | SdkError::DispatchFailure(_)) => {
            SecretStoreError::Transient(DisplayErrorContext(err).to_string())
        }
        err => SecretStoreError::Other(DisplayErrorContext(err).to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_secretsmanager::config::{BehaviorVersion as SdkBehaviorVersion, Region as SdkRegion};

    #[test]
    fn test_aws_store_name() {
        let config = aws_sdk_secretsmanager::Config::builder()
            .behavior_version(SdkBehaviorVersion::latest())
            .region(SdkRegion::new("us-east-1"))
            .build();
        let store = AwsSecretStore::from_client(Client::from_conf(config));
        assert_eq!(store.name(), "aws-secrets-manager");
    }

    #[tokio::test]
    async fn test_load_rejects_invalid_config_before_discovery() {
        let config = RemoteStoreConfig::new().with_profile("");
        let err = AwsSecretStore::load(&config).await.unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("profile")));
    }
}
