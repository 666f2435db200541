// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持中文（默认）和英文，语言代码与站点 locales 保持一致
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

use crate::config::ConfigRecord;

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"zh-CN" 或 "en-US"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 是否内置了该语言的消息文件
pub fn is_supported(locale: &str) -> bool {
    rust_i18n::available_locales!().iter().any(|l| *l == locale)
}

/// 按站点默认语言（locales 第一项）切换消息语言
///
/// # 返回
/// - true: 已切换
/// - false: 没有对应的消息文件，保持当前语言
pub fn apply_default_locale(record: &ConfigRecord) -> bool {
    let id = record.default_locale().id();
    if is_supported(id) {
        set_locale(id);
        true
    } else {
        tracing::debug!(locale = id, "站点默认语言无内置消息，保持 {}", current_locale());
        false
    }
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use qiye_docs_config::i18n::t_with_args;
/// let msg = t_with_args("validation.missing_field", &[("field", "themeConfig.logo")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use std::sync::Mutex;

    // rust-i18n 的 locale 为全局状态，且 Rust 测试默认并行执行；
    // 为避免测试互相干扰，这里对 i18n 相关测试串行化。
    static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_set_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("zh-CN");
        assert_eq!(current_locale(), "zh-CN");

        set_locale("en-US");
        assert_eq!(current_locale(), "en-US");

        set_locale("zh-CN");
    }

    #[test]
    fn test_supported_locales() {
        assert!(is_supported("zh-CN"));
        assert!(is_supported("en-US"));
        assert!(!is_supported("fr-FR"));
    }

    #[test]
    fn test_translate_with_args() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("zh-CN");
        let msg = t_with_args("validation.missing_field", &[("field", "themeConfig.logo")]);
        assert_eq!(msg, "缺少必填字段: themeConfig.logo");

        set_locale("en-US");
        let msg = t_with_args("validation.missing_field", &[("field", "themeConfig.logo")]);
        assert_eq!(msg, "Missing required field: themeConfig.logo");

        set_locale("zh-CN");
    }

    #[test]
    fn test_apply_default_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("zh-CN");

        let english_first = ConfigLoader::load_from_str(
            r#"{"themeConfig":{"name":"七夜","logo":"/logo.png"},
                "locales":[{"id":"en-US","name":"EN"},{"id":"zh-CN","name":"中文"}]}"#,
        )
        .unwrap();
        assert!(apply_default_locale(&english_first));
        assert_eq!(current_locale(), "en-US");

        let unknown_first = ConfigLoader::load_from_str(
            r#"{"themeConfig":{"name":"七夜","logo":"/logo.png"},
                "locales":[{"id":"ja-JP","name":"日本語"}]}"#,
        )
        .unwrap();
        assert!(!apply_default_locale(&unknown_first));
        assert_eq!(current_locale(), "en-US");

        set_locale("zh-CN");
    }
}
