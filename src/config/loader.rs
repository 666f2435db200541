// ==========================================
// 文档站点配置 - 加载器
// ==========================================
// 流程: 读取文件 -> JSON 解析 -> 校验 -> 只读记录
// 失败在加载阶段暴露，不延迟到渲染阶段
// ==========================================

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::config::site_config::{
    ConfigRecord, RawConfigRecord, RawLocaleDescriptor, RawThemeConfig,
};
use crate::config::validator::validate;
use crate::error::{ConfigError, ConfigResult};

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = ".dumirc.json";

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从文件加载配置
    ///
    /// # 参数
    /// - path: JSON 配置文件路径
    ///
    /// # 返回
    /// - Ok(ConfigRecord): 加载并校验通过
    /// - Err(ConfigError::Io): 文件读取失败
    /// - Err(ConfigError::Parse): JSON 格式错误
    /// - Err(ConfigError::Validation): 校验失败
    pub fn load_from_path(path: impl AsRef<Path>) -> ConfigResult<ConfigRecord> {
        let path = path.as_ref();
        tracing::debug!("读取配置文件: {}", path.display());

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::load_from_str(&content).inspect_err(|e| {
            tracing::warn!("配置文件 {} 被拒绝: {}", path.display(), e);
        })
    }

    /// 从 JSON 字符串加载配置
    pub fn load_from_str(content: &str) -> ConfigResult<ConfigRecord> {
        let raw: RawConfigRecord = serde_json::from_str(content)?;
        Self::finish(raw)
    }

    /// 从已解析的 JSON 值加载配置
    pub fn from_value(value: Value) -> ConfigResult<ConfigRecord> {
        let raw: RawConfigRecord = serde_json::from_value(value)?;
        Self::finish(raw)
    }

    /// 仓库自带的站点配置
    pub fn builtin() -> ConfigResult<ConfigRecord> {
        let raw = RawConfigRecord {
            theme_config: Some(RawThemeConfig {
                name: Some("七夜".to_string()),
                logo: Some("/logo.png".to_string()),
                footer: None,
            }),
            locales: Some(vec![
                RawLocaleDescriptor {
                    id: Some("zh-CN".to_string()),
                    name: Some("中文".to_string()),
                },
                RawLocaleDescriptor {
                    id: Some("en-US".to_string()),
                    name: Some("EN".to_string()),
                },
            ]),
        };
        Self::finish(raw)
    }

    fn finish(raw: RawConfigRecord) -> ConfigResult<ConfigRecord> {
        let record = validate(raw)?;
        tracing::debug!(
            name = record.theme().name(),
            locales = ?record.locale_ids(),
            "配置校验通过"
        );
        Ok(record)
    }
}
