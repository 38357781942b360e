//! MFA factor listing through the shared query cache.

use std::sync::Arc;

use async_trait::async_trait;

use super::errors::AuthError;
use super::keys;
use super::types::FactorList;
use crate::config::MfaConfig;
use crate::query::{QueryCache, QueryKey, QueryOptions, QueryResult};

/// Authentication backend operations used by the profile pages.
#[async_trait]
pub trait MfaBackend: Send + Sync {
    async fn list_factors(&self) -> Result<FactorList, AuthError>;
}

/// Call the backend's list-factors operation.
///
/// The factor list is returned unchanged; backend errors propagate as-is.
pub async fn get_mfa_list_factors(backend: &dyn MfaBackend) -> Result<FactorList, AuthError> {
    match backend.list_factors().await {
        Ok(list) => Ok(list),
        Err(e) => {
            tracing::warn!(
                event = "core.profile.mfa_list_factors_failed",
                error = %e,
                code = ?e.code,
                status = ?e.status
            );
            Err(e)
        }
    }
}

/// Read-through query for the current user's MFA factors.
#[derive(Clone)]
pub struct MfaFactorsQuery {
    backend: Arc<dyn MfaBackend>,
    cache: QueryCache<QueryKey, FactorList>,
}

impl MfaFactorsQuery {
    pub fn new(backend: Arc<dyn MfaBackend>, cache: QueryCache<QueryKey, FactorList>) -> Self {
        Self { backend, cache }
    }

    /// Enabled, fresh for 30 minutes.
    pub fn default_options() -> QueryOptions {
        Self::options_from_config(&MfaConfig::default())
    }

    pub fn options_from_config(config: &MfaConfig) -> QueryOptions {
        QueryOptions::default()
            .with_enabled(config.enabled())
            .with_stale_time(config.stale_time())
    }

    pub async fn fetch(&self, options: QueryOptions) -> QueryResult<FactorList, AuthError> {
        let backend = Arc::clone(&self.backend);
        self.cache
            .fetch(&keys::mfa_factors(), options, || async move {
                get_mfa_list_factors(backend.as_ref()).await
            })
            .await
    }

    /// Force the next subscriber to refetch, e.g. after enrolling a factor.
    pub async fn invalidate(&self) {
        self.cache.invalidate(&keys::mfa_factors()).await;
    }
}
