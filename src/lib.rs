// ==========================================
// 文档站点配置加载器 - 核心库
// ==========================================
// 职责: 读取并校验文档站点的主题与语言配置
// 定位: 只负责加载阶段，构建/渲染由外部文档工具完成
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 配置层 - 数据模型/校验/加载
pub mod config;

// 错误类型
pub mod error;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

pub use config::{ConfigLoader, ConfigRecord, LocaleDescriptor, ThemeConfig};
pub use error::{ConfigError, ConfigResult, ConfigValidationError, Violation, ViolationKind};

// ==========================================
// 常量定义
// ==========================================

// 版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 名称
pub const APP_NAME: &str = "七夜文档站点配置";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
