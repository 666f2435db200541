// ==========================================
// 文档站点配置层
// ==========================================
// 职责: 站点主题与语言列表的加载、校验、只读访问
// 存储: JSON 配置文件（默认 .dumirc.json）
// ==========================================

pub mod loader;
pub mod site_config;
pub mod validator;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_FILE};
pub use site_config::{
    ConfigRecord, LocaleDescriptor, RawConfigRecord, RawLocaleDescriptor, RawThemeConfig,
    ThemeConfig,
};
pub use validator::validate;
