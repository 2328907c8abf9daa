//! 配置服务

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use user_directory_core::DEFAULT_PAGE_SIZE;
use user_directory_provider::{ProviderConfig, DEFAULT_BASE_URL};

use crate::i18n::{set_language, Language};
use crate::view::theme::{set_theme, Theme};

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 数据源地址
    pub api_base_url: String,
    /// 每页条数
    pub page_size: usize,
    /// 请求超时（秒）
    pub request_timeout_secs: u64,
    pub theme: Theme,
    pub language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout_secs: 10,
            theme: Theme::Dark,
            language: Language::EnUs.code().to_string(),
        }
    }
}

impl AppConfig {
    /// 实际使用的每页条数，至少为 1
    pub fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }

    /// 构造数据源配置
    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            base_url: self.api_base_url.clone(),
            timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }

    /// 解析语言代码，无法识别时回退到英语
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_default()
    }

    /// 应用主题与语言
    pub fn apply_preferences(&self) {
        set_theme(self.theme);
        set_language(self.language());
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务
///
/// 配置文件位于 `<config_dir>/user-directory/config.json`
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new() -> Self {
        let path = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("user-directory")
            .join("config.json");
        Self::with_path(path)
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::info!("No config file at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Malformed config file {}", self.path.display()))?;

        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }

        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        Ok(())
    }
}
