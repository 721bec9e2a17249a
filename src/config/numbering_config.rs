// ==========================================
// 购入仕样书作成 - 采番设定
// ==========================================
// 职责: 前缀 + 起始番号（用户输入,使用前规范化）
// ==========================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NumberingConfig {
    pub prefix: String,
    pub start_number: f64, // 任意数值输入,见 normalized_start
}

impl Default for NumberingConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            start_number: 1.0,
        }
    }
}

impl NumberingConfig {
    pub fn new(prefix: impl Into<String>, start_number: f64) -> Self {
        Self {
            prefix: prefix.into(),
            start_number,
        }
    }

    /// TRIM 后非空且不以 '-' 结尾时补 '-';空前缀不加分隔符
    pub fn normalized_prefix(&self) -> String {
        let trimmed = self.prefix.trim();
        if trimmed.is_empty() {
            String::new()
        } else if trimmed.ends_with('-') {
            trimmed.to_string()
        } else {
            format!("{}-", trimmed)
        }
    }

    /// 取整后 >= 1;非有限值或小于 1 时为 1,超过 u64 上限时取 u64::MAX
    pub fn normalized_start(&self) -> u64 {
        if !self.start_number.is_finite() {
            return 1;
        }
        let floored = self.start_number.floor();
        if floored < 1.0 {
            1
        } else {
            floored as u64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_prefix() {
        assert_eq!(NumberingConfig::new("BS", 1.0).normalized_prefix(), "BS-");
        assert_eq!(NumberingConfig::new(" BS- ", 1.0).normalized_prefix(), "BS-");
        assert_eq!(NumberingConfig::new("   ", 1.0).normalized_prefix(), "");
        assert_eq!(NumberingConfig::new("", 1.0).normalized_prefix(), "");
    }

    #[test]
    fn test_normalized_start_clamps() {
        assert_eq!(NumberingConfig::new("", 5.0).normalized_start(), 5);
        assert_eq!(NumberingConfig::new("", 2.9).normalized_start(), 2);
        assert_eq!(NumberingConfig::new("", 0.5).normalized_start(), 1);
        assert_eq!(NumberingConfig::new("", -3.0).normalized_start(), 1);
        assert_eq!(NumberingConfig::new("", f64::NAN).normalized_start(), 1);
        assert_eq!(NumberingConfig::new("", f64::INFINITY).normalized_start(), 1);
        assert_eq!(NumberingConfig::new("", 1e20).normalized_start(), u64::MAX);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let cfg: NumberingConfig = serde_json::from_str(r#"{"prefix":"BS"}"#).unwrap();
        assert_eq!(cfg.prefix, "BS");
        assert_eq!(cfg.start_number, 1.0);

        let cfg: NumberingConfig = serde_json::from_str(r#"{"startNumber":10}"#).unwrap();
        assert_eq!(cfg.normalized_start(), 10);
    }
}
