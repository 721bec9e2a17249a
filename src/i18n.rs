// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持日文（默认）和英文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

use crate::config::ImportConfig;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

/// 支持的语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["ja", "en"];

/// 未显式设置时使用的语言（rust-i18n 自身默认为 "en"）
pub const DEFAULT_LOCALE: &str = "ja";

static LOCALE_CHOSEN: AtomicBool = AtomicBool::new(false);
static DEFAULT_LOCALE_INIT: Once = Once::new();

// 首次使用时切换到 DEFAULT_LOCALE,已调用 set_locale 时不覆盖
fn ensure_default_locale() {
    DEFAULT_LOCALE_INIT.call_once(|| {
        if !LOCALE_CHOSEN.load(Ordering::SeqCst) {
            rust_i18n::set_locale(DEFAULT_LOCALE);
        }
    });
}

/// 获取当前语言
pub fn current_locale() -> String {
    ensure_default_locale();
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"ja" 或 "en"）
pub fn set_locale(locale: &str) {
    LOCALE_CHOSEN.store(true, Ordering::SeqCst);
    rust_i18n::set_locale(locale);
}

/// 按导入设定切换语言;不支持的语言代码保持当前语言
pub fn apply_config(config: &ImportConfig) {
    if SUPPORTED_LOCALES.contains(&config.locale.as_str()) {
        set_locale(&config.locale);
    } else {
        tracing::warn!(locale = %config.locale, "不支持的语言代码,保持当前语言");
    }
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use requisition_equipment::i18n::t;
/// let msg = t("numbering.renumber_notice");
/// ```
pub fn t(key: &str) -> String {
    ensure_default_locale();
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use requisition_equipment::i18n::t_with_args;
/// let msg = t_with_args("import.unknown_equipment_type", &[("code", "XYZ")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    ensure_default_locale();
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}
