// ==========================================
// 购入仕样书作成 - 配置加载器
// ==========================================
// 职责: JSON 配置文件读取 + 环境变量覆写
// 优先级: 环境变量 > 配置文件 > 默认值
// ==========================================

use crate::config::numbering_config::NumberingConfig;
use crate::importer::error::{ImportError, ImportResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ==========================================
// 环境变量键
// ==========================================
pub mod env_keys {
    pub const LOCALE: &str = "REQUISITION_LOCALE";
    pub const SHEET_NAME: &str = "REQUISITION_SHEET_NAME";
    pub const NUMBERING_PREFIX: &str = "REQUISITION_NUMBERING_PREFIX";
    pub const NUMBERING_START: &str = "REQUISITION_NUMBERING_START";
}

// ==========================================
// ImportConfig - 导入设定
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportConfig {
    pub sheet_name: Option<String>, // None = 第一个工作表
    pub skip_blank_rows: bool,
    pub locale: String, // 警告消息语言（ja / en）
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            sheet_name: None,
            skip_blank_rows: true,
            locale: "ja".to_string(),
        }
    }
}

// ==========================================
// AppConfig - 全体设定
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub import: ImportConfig,
    pub numbering: NumberingConfig,
}

impl AppConfig {
    /// 从 JSON 字符串解析（缺失项取默认值）
    pub fn from_json_str(json: &str) -> ImportResult<Self> {
        serde_json::from_str(json).map_err(|e| ImportError::ConfigReadError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// 从 JSON 文件读取,并应用环境变量覆写
    pub fn load(path: &Path) -> ImportResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ImportError::ConfigReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let mut config: AppConfig =
            serde_json::from_str(&content).map_err(|e| ImportError::ConfigReadError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        config.apply_overrides(|key| std::env::var(key).ok())?;
        tracing::debug!(path = %path.display(), ?config, "配置已加载");
        Ok(config)
    }

    /// 仅使用默认值 + 环境变量
    pub fn from_env() -> ImportResult<Self> {
        let mut config = AppConfig::default();
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// 应用覆写（lookup 返回 None 表示未设置）
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ImportResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(locale) = lookup(env_keys::LOCALE) {
            self.import.locale = locale.trim().to_string();
        }

        if let Some(sheet) = lookup(env_keys::SHEET_NAME) {
            let sheet = sheet.trim();
            self.import.sheet_name = (!sheet.is_empty()).then(|| sheet.to_string());
        }

        if let Some(prefix) = lookup(env_keys::NUMBERING_PREFIX) {
            self.numbering.prefix = prefix;
        }

        if let Some(start) = lookup(env_keys::NUMBERING_START) {
            self.numbering.start_number =
                start
                    .trim()
                    .parse::<f64>()
                    .map_err(|e| ImportError::ConfigValueError {
                        key: env_keys::NUMBERING_START.to_string(),
                        value: start.clone(),
                        message: e.to_string(),
                    })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.import.locale, "ja");
        assert!(config.import.skip_blank_rows);
        assert_eq!(config.numbering.start_number, 1.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            AppConfig::from_json_str(r#"{"numbering":{"prefix":"BS","startNumber":3}}"#).unwrap();
        assert_eq!(config.numbering.prefix, "BS");
        assert_eq!(config.numbering.normalized_start(), 3);
        assert_eq!(config.import, ImportConfig::default());
    }

    #[test]
    fn test_invalid_json_is_error() {
        let result = AppConfig::from_json_str("{not json");
        assert!(matches!(result, Err(ImportError::ConfigReadError { .. })));
    }

    #[test]
    fn test_overrides_applied() {
        let mut config = AppConfig::default();
        config
            .apply_overrides(lookup_from(&[
                (env_keys::LOCALE, "en"),
                (env_keys::NUMBERING_PREFIX, "LN"),
                (env_keys::NUMBERING_START, "20"),
                (env_keys::SHEET_NAME, "  "),
            ]))
            .unwrap();

        assert_eq!(config.import.locale, "en");
        assert_eq!(config.import.sheet_name, None);
        assert_eq!(config.numbering.prefix, "LN");
        assert_eq!(config.numbering.normalized_start(), 20);
    }

    #[test]
    fn test_invalid_start_override_is_error() {
        let mut config = AppConfig::default();
        let result = config.apply_overrides(lookup_from(&[(env_keys::NUMBERING_START, "abc")]));
        assert!(matches!(result, Err(ImportError::ConfigValueError { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"import":{{"sheetName":"機器リスト"}}}}"#).unwrap();

        let config = AppConfig::load(file.path()).unwrap();

        assert_eq!(config.import.sheet_name.as_deref(), Some("機器リスト"));
    }
}
