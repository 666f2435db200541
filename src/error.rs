// ==========================================
// 文档站点配置加载器 - 错误类型
// ==========================================
// 工具: thiserror 派生宏
// 分层: ConfigValidationError (配置校验) / ConfigError (加载全流程)
// ==========================================

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::i18n;

// ==========================================
// Violation - 单条校验违规
// ==========================================

/// 违规类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// 必填字段缺失
    MissingField,
    /// 字段为空（仅含空白也视为空）
    EmptyField,
    /// locales 为空列表
    NoLocales,
    /// locale id 重复
    DuplicateLocaleId {
        id: String,
        first_index: usize,
        duplicate_index: usize,
    },
}

/// 单条校验违规
///
/// `field` 使用配置文件中的写法，例如 `themeConfig.logo`、`locales[1].id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub kind: ViolationKind,
}

impl Violation {
    pub fn missing(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: ViolationKind::MissingField,
        }
    }

    pub fn empty(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: ViolationKind::EmptyField,
        }
    }

    /// 按当前语言渲染违规说明
    pub fn localized_message(&self) -> String {
        match &self.kind {
            ViolationKind::MissingField => {
                i18n::t_with_args("validation.missing_field", &[("field", &self.field)])
            }
            ViolationKind::EmptyField => {
                i18n::t_with_args("validation.empty_field", &[("field", &self.field)])
            }
            ViolationKind::NoLocales => {
                i18n::t_with_args("validation.no_locales", &[("field", &self.field)])
            }
            ViolationKind::DuplicateLocaleId {
                id,
                first_index,
                duplicate_index,
            } => i18n::t_with_args(
                "validation.duplicate_locale_id",
                &[
                    ("id", id),
                    ("first", &first_index.to_string()),
                    ("duplicate", &duplicate_index.to_string()),
                ],
            ),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::MissingField => write!(f, "{}: 必填字段缺失", self.field),
            ViolationKind::EmptyField => write!(f, "{}: 字段不能为空", self.field),
            ViolationKind::NoLocales => write!(f, "{}: 至少需要一个语言", self.field),
            ViolationKind::DuplicateLocaleId {
                id,
                first_index,
                duplicate_index,
            } => write!(
                f,
                "{}: locale id 重复 \"{}\" (locales[{}] 与 locales[{}])",
                self.field, id, first_index, duplicate_index
            ),
        }
    }
}

// ==========================================
// ConfigValidationError - 配置校验错误
// ==========================================

/// 配置校验错误
///
/// 一次校验收集全部违规，不在第一条违规处停止
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("配置校验失败 ({} 项违规): {}", .violations.len(), join_violations(.violations))]
pub struct ConfigValidationError {
    pub violations: Vec<Violation>,
}

impl ConfigValidationError {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// 是否包含指定字段的违规
    pub fn has_violation_for(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    /// 按当前语言渲染全部违规（每行一条）
    pub fn localized_report(&self) -> String {
        let mut lines = vec![i18n::t_with_args(
            "validation.header",
            &[("count", &self.violations.len().to_string())],
        )];
        lines.extend(
            self.violations
                .iter()
                .map(|v| format!("  - {}", v.localized_message())),
        );
        lines.join("\n")
    }
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

// ==========================================
// ConfigError - 加载错误
// ==========================================

/// 配置加载错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("配置解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ConfigValidationError),
}

impl ConfigError {
    /// 取出校验错误（仅 Validation 变体）
    pub fn as_validation(&self) -> Option<&ConfigValidationError> {
        match self {
            ConfigError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
