//! JSONPlaceholder `UserSource` 实现

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::traits::{ErrorContext, ProviderErrorMapper, UserSource};
use crate::types::UserRecord;

use super::{JsonPlaceholderProvider, PROVIDER_NAME, is_valid_user_id};

#[async_trait]
impl UserSource for JsonPlaceholderProvider {
    fn id(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn fetch_users(&self) -> Result<Vec<UserRecord>> {
        let users: Vec<UserRecord> = self.get(&self.users_url(), ErrorContext::default()).await?;
        log::debug!("[{}] fetched {} users", self.provider_name(), users.len());
        Ok(users)
    }

    async fn fetch_user(&self, user_id: &str) -> Result<UserRecord> {
        if !is_valid_user_id(user_id) {
            log::debug!("[{}] rejecting user id {user_id:?}", self.provider_name());
            return Err(ProviderError::UserNotFound {
                provider: self.provider_name().to_string(),
                user_id: user_id.to_string(),
                status: None,
            });
        }

        self.get(&self.user_url(user_id), ErrorContext::for_user(user_id))
            .await
    }
}
