// ==========================================
// 文档站点配置 - 校验器
// ==========================================
// 规则:
// 1. themeConfig.name / themeConfig.logo 必填且非空
// 2. locales 必填且至少一项
// 3. 每个语言的 id / name 必填且非空
// 4. 语言 id 不允许重复（不做静默覆盖）
// ==========================================
// 收集全部违规后一次性返回
// ==========================================

use std::collections::HashMap;

use crate::config::site_config::{
    ConfigRecord, LocaleDescriptor, RawConfigRecord, RawLocaleDescriptor, RawThemeConfig,
    ThemeConfig,
};
use crate::error::{ConfigValidationError, Violation, ViolationKind};

/// 校验草稿并构造只读记录
///
/// # 返回
/// - Ok(ConfigRecord): 校验通过
/// - Err(ConfigValidationError): 包含全部违规
pub fn validate(raw: RawConfigRecord) -> Result<ConfigRecord, ConfigValidationError> {
    let mut violations = Vec::new();

    let theme = validate_theme(raw.theme_config, &mut violations);
    let locales = validate_locales(raw.locales, &mut violations);

    match (theme, locales) {
        (Some(theme), Some(locales)) if violations.is_empty() => {
            Ok(ConfigRecord::new(theme, locales))
        }
        _ => Err(ConfigValidationError::new(violations)),
    }
}

fn validate_theme(
    raw: Option<RawThemeConfig>,
    violations: &mut Vec<Violation>,
) -> Option<ThemeConfig> {
    let Some(raw) = raw else {
        violations.push(Violation::missing("themeConfig"));
        return None;
    };

    let name = require_non_empty(raw.name, "themeConfig.name", violations);
    let logo = require_non_empty(raw.logo, "themeConfig.logo", violations);

    // footer 可以包含 HTML，原样保留
    Some(ThemeConfig::new(name?, logo?, raw.footer))
}

fn validate_locales(
    raw: Option<Vec<RawLocaleDescriptor>>,
    violations: &mut Vec<Violation>,
) -> Option<Vec<LocaleDescriptor>> {
    let Some(raw) = raw else {
        violations.push(Violation::missing("locales"));
        return None;
    };

    if raw.is_empty() {
        violations.push(Violation {
            field: "locales".to_string(),
            kind: ViolationKind::NoLocales,
        });
        return None;
    }

    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut locales = Vec::with_capacity(raw.len());

    for (index, entry) in raw.into_iter().enumerate() {
        let id = require_non_empty(entry.id, &format!("locales[{}].id", index), violations);
        let name = require_non_empty(entry.name, &format!("locales[{}].name", index), violations);

        if let Some(id) = &id {
            // 比较时忽略首尾空白，存储时保留原值
            let key = id.trim().to_string();
            if let Some(&first_index) = seen.get(&key) {
                violations.push(Violation {
                    field: format!("locales[{}].id", index),
                    kind: ViolationKind::DuplicateLocaleId {
                        id: id.clone(),
                        first_index,
                        duplicate_index: index,
                    },
                });
            } else {
                seen.insert(key, index);
            }
        }

        if let (Some(id), Some(name)) = (id, name) {
            locales.push(LocaleDescriptor::new(id, name));
        }
    }

    Some(locales)
}

fn require_non_empty(
    value: Option<String>,
    field: &str,
    violations: &mut Vec<Violation>,
) -> Option<String> {
    match value {
        None => {
            violations.push(Violation::missing(field));
            None
        }
        Some(v) if v.trim().is_empty() => {
            violations.push(Violation::empty(field));
            None
        }
        Some(v) => Some(v),
    }
}
