use std::sync::Arc;

use crate::error::Result;
use crate::providers::JsonPlaceholderProvider;
use crate::traits::UserSource;
use crate::types::ProviderConfig;

/// 根据配置创建用户数据源
pub fn create_source(config: &ProviderConfig) -> Result<Arc<dyn UserSource>> {
    Ok(Arc::new(JsonPlaceholderProvider::new(config)?))
}
