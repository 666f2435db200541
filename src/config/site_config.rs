// ==========================================
// 文档站点配置 - 数据模型
// ==========================================
// 职责: 主题信息 + 语言列表
// 格式: JSON，字段名沿用站点配置写法 (themeConfig / locales)
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// 校验后的只读记录
// ==========================================

/// 主题信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeConfig {
    name: String,
    logo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    footer: Option<String>,
}

impl ThemeConfig {
    pub(crate) fn new(name: String, logo: String, footer: Option<String>) -> Self {
        Self { name, logo, footer }
    }

    /// 站点显示名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// logo 路径或 URL
    pub fn logo(&self) -> &str {
        &self.logo
    }

    /// 页脚 HTML 片段，原样保留
    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }
}

/// 语言描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleDescriptor {
    id: String,
    name: String,
}

impl LocaleDescriptor {
    pub(crate) fn new(id: String, name: String) -> Self {
        Self { id, name }
    }

    /// 语言代码，例如 zh-CN
    pub fn id(&self) -> &str {
        &self.id
    }

    /// 语言切换器中显示的名称
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// 站点配置记录
///
/// 只能经由 [`crate::config::validator::validate`] 构造，因此任何实例都满足：
/// - 主题名称与 logo 非空
/// - 至少一个语言，且语言 id 互不相同
///
/// 记录构造后只读。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigRecord {
    theme_config: ThemeConfig,
    locales: Vec<LocaleDescriptor>,
}

impl ConfigRecord {
    pub(crate) fn new(theme_config: ThemeConfig, locales: Vec<LocaleDescriptor>) -> Self {
        debug_assert!(!locales.is_empty());
        Self {
            theme_config,
            locales,
        }
    }

    pub fn theme(&self) -> &ThemeConfig {
        &self.theme_config
    }

    /// 语言列表，顺序即语言切换器中的显示顺序
    pub fn locales(&self) -> &[LocaleDescriptor] {
        &self.locales
    }

    /// 默认语言（列表第一项）
    pub fn default_locale(&self) -> &LocaleDescriptor {
        &self.locales[0]
    }

    /// 按 id 查找语言
    pub fn locale(&self, id: &str) -> Option<&LocaleDescriptor> {
        self.locales.iter().find(|l| l.id == id)
    }

    pub fn locale_ids(&self) -> Vec<&str> {
        self.locales.iter().map(|l| l.id.as_str()).collect()
    }

    /// 以站点配置格式导出
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

// ==========================================
// 未校验的草稿
// ==========================================
// 所有字段均为 Option：缺失字段交给校验器报告，而不是在反序列化阶段失败

/// 未校验的主题信息
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawThemeConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub footer: Option<String>,
}

/// 未校验的语言描述
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLocaleDescriptor {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// 未校验的站点配置
///
/// 站点工具的其他配置项（路由、插件等）直接忽略
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConfigRecord {
    #[serde(default)]
    pub theme_config: Option<RawThemeConfig>,
    #[serde(default)]
    pub locales: Option<Vec<RawLocaleDescriptor>>,
}
