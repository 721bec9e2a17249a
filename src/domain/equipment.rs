// ==========================================
// 购入仕样书作成 - 机器记录领域模型
// ==========================================
// 职责: 机器记录 / 导入警告 / 导入中间结构体
// 红线: 校验只在导入时执行,字段编辑后不再校验
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// 原始行（列标题 → 单元格值）,仅在一次解析内存在
pub type RawRow = HashMap<String, String>;

// ==========================================
// EquipmentRecord - 机器记录
// ==========================================
// 用途: 导入层生成,采番引擎/字段编辑器以替换方式更新
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentRecord {
    // ===== 必填 =====
    pub process_id: String,    // 工程番号
    pub process_name: String,  // 工程名
    pub main_function: String, // 主機能

    // ===== 可选 =====
    pub equipment_type: String, // 機器種別（目录代码,可为空）
    pub equipment_name: String, // 機器名称
    pub model: String,          // 型式/仕様
    pub quantity: f64,          // 数量（无法解析时为 0）
    pub manufacturer: String,   // メーカー
    pub remarks: String,        // 備考

    // ===== 采番结果 =====
    pub equipment_number: String, // 空字符串 = 尚未采番
}

impl EquipmentRecord {
    pub fn has_equipment_type(&self) -> bool {
        !self.equipment_type.trim().is_empty()
    }

    pub fn is_numbered(&self) -> bool {
        !self.equipment_number.is_empty()
    }
}

/// 数量解析: 非数值/非有限值一律为 0
pub fn parse_quantity(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

// ==========================================
// EquipmentField - 记录字段标识
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EquipmentField {
    ProcessId,
    ProcessName,
    MainFunction,
    EquipmentType,
    EquipmentName,
    Model,
    Quantity,
    Manufacturer,
    Remarks,
    EquipmentNumber,
}

impl EquipmentField {
    /// 导入时必须非空的字段
    pub const REQUIRED: [EquipmentField; 3] = [
        EquipmentField::ProcessId,
        EquipmentField::ProcessName,
        EquipmentField::MainFunction,
    ];

    /// 字段键名（与下游 JSON 一致）
    pub fn key(&self) -> &'static str {
        match self {
            EquipmentField::ProcessId => "processId",
            EquipmentField::ProcessName => "processName",
            EquipmentField::MainFunction => "mainFunction",
            EquipmentField::EquipmentType => "equipmentType",
            EquipmentField::EquipmentName => "equipmentName",
            EquipmentField::Model => "model",
            EquipmentField::Quantity => "quantity",
            EquipmentField::Manufacturer => "manufacturer",
            EquipmentField::Remarks => "remarks",
            EquipmentField::EquipmentNumber => "equipmentNumber",
        }
    }
}

impl fmt::Display for EquipmentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for EquipmentField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "processId" => Ok(EquipmentField::ProcessId),
            "processName" => Ok(EquipmentField::ProcessName),
            "mainFunction" => Ok(EquipmentField::MainFunction),
            "equipmentType" => Ok(EquipmentField::EquipmentType),
            "equipmentName" => Ok(EquipmentField::EquipmentName),
            "model" => Ok(EquipmentField::Model),
            "quantity" => Ok(EquipmentField::Quantity),
            "manufacturer" => Ok(EquipmentField::Manufacturer),
            "remarks" => Ok(EquipmentField::Remarks),
            "equipmentNumber" => Ok(EquipmentField::EquipmentNumber),
            other => Err(format!("未知字段: {}", other)),
        }
    }
}

// ==========================================
// NormalizedRow - 导入中间结构体
// ==========================================
// 用途: 字段映射产物（标题 → 内部字段,已 TRIM）
// 生命周期: 仅在导入流程内
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedRow {
    pub process_id: Option<String>,
    pub process_name: Option<String>,
    pub main_function: Option<String>,
    pub equipment_type: Option<String>,
    pub equipment_name: Option<String>,
    pub model: Option<String>,
    pub quantity: Option<String>,
    pub manufacturer: Option<String>,
    pub remarks: Option<String>,

    // 元信息
    pub row_number: usize, // 表格行号（含标题行偏移,用于警告）
}

impl NormalizedRow {
    /// 取字段值（None 视为空）
    pub fn value(&self, field: EquipmentField) -> &str {
        let v = match field {
            EquipmentField::ProcessId => &self.process_id,
            EquipmentField::ProcessName => &self.process_name,
            EquipmentField::MainFunction => &self.main_function,
            EquipmentField::EquipmentType => &self.equipment_type,
            EquipmentField::EquipmentName => &self.equipment_name,
            EquipmentField::Model => &self.model,
            EquipmentField::Quantity => &self.quantity,
            EquipmentField::Manufacturer => &self.manufacturer,
            EquipmentField::Remarks => &self.remarks,
            EquipmentField::EquipmentNumber => return "",
        };
        v.as_deref().unwrap_or("")
    }

    pub(crate) fn slot_mut(&mut self, field: EquipmentField) -> Option<&mut Option<String>> {
        match field {
            EquipmentField::ProcessId => Some(&mut self.process_id),
            EquipmentField::ProcessName => Some(&mut self.process_name),
            EquipmentField::MainFunction => Some(&mut self.main_function),
            EquipmentField::EquipmentType => Some(&mut self.equipment_type),
            EquipmentField::EquipmentName => Some(&mut self.equipment_name),
            EquipmentField::Model => Some(&mut self.model),
            EquipmentField::Quantity => Some(&mut self.quantity),
            EquipmentField::Manufacturer => Some(&mut self.manufacturer),
            EquipmentField::Remarks => Some(&mut self.remarks),
            EquipmentField::EquipmentNumber => None,
        }
    }

    /// 缺失的必填字段（TRIM 后为空）
    pub fn missing_required(&self) -> Vec<EquipmentField> {
        EquipmentField::REQUIRED
            .iter()
            .copied()
            .filter(|f| self.value(*f).trim().is_empty())
            .collect()
    }

    /// 生成完整记录（可选字段取默认值,机器番号为空）
    pub fn into_record(self) -> EquipmentRecord {
        let quantity = self.quantity.as_deref().map(parse_quantity).unwrap_or(0.0);
        EquipmentRecord {
            process_id: self.process_id.unwrap_or_default(),
            process_name: self.process_name.unwrap_or_default(),
            main_function: self.main_function.unwrap_or_default(),
            equipment_type: self.equipment_type.unwrap_or_default(),
            equipment_name: self.equipment_name.unwrap_or_default(),
            model: self.model.unwrap_or_default(),
            quantity,
            manufacturer: self.manufacturer.unwrap_or_default(),
            remarks: self.remarks.unwrap_or_default(),
            equipment_number: String::new(),
        }
    }
}

// ==========================================
// ImportWarning - 导入警告（行级,不阻断批次）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportWarning {
    pub index: usize,    // 表格行号（首个数据行 = 2）
    pub message: String, // 可读原因（按当前语言）
    pub kind: WarningKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum WarningKind {
    MissingRequiredFields { fields: Vec<EquipmentField> },
    UnknownEquipmentType { code: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), 3.0);
        assert_eq!(parse_quantity(" 2.5 "), 2.5);
        assert_eq!(parse_quantity(""), 0.0);
        assert_eq!(parse_quantity("二台"), 0.0);
        assert_eq!(parse_quantity("inf"), 0.0);
        assert_eq!(parse_quantity("NaN"), 0.0);
    }

    #[test]
    fn test_field_key_roundtrip() {
        for field in [
            EquipmentField::ProcessId,
            EquipmentField::Quantity,
            EquipmentField::EquipmentNumber,
        ] {
            assert_eq!(field.key().parse::<EquipmentField>().unwrap(), field);
        }
        assert!("quantityX".parse::<EquipmentField>().is_err());
    }

    #[test]
    fn test_missing_required_treats_blank_as_missing() {
        let row = NormalizedRow {
            process_id: Some("P-01".to_string()),
            process_name: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(
            row.missing_required(),
            vec![EquipmentField::ProcessName, EquipmentField::MainFunction]
        );
    }

    #[test]
    fn test_into_record_defaults() {
        let row = NormalizedRow {
            process_id: Some("P-01".to_string()),
            process_name: Some("溶接".to_string()),
            main_function: Some("スポット溶接".to_string()),
            quantity: Some("abc".to_string()),
            row_number: 2,
            ..Default::default()
        };
        let record = row.into_record();
        assert_eq!(record.quantity, 0.0);
        assert_eq!(record.equipment_type, "");
        assert_eq!(record.equipment_number, "");
        assert!(!record.has_equipment_type());
        assert!(!record.is_numbered());
    }

    #[test]
    fn test_warning_serializes_camel_case() {
        let w = ImportWarning {
            index: 5,
            message: "x".to_string(),
            kind: WarningKind::UnknownEquipmentType {
                code: "XYZ".to_string(),
            },
        };
        let json = serde_json::to_value(&w).unwrap();
        assert_eq!(json["index"], 5);
        assert_eq!(json["kind"]["type"], "unknownEquipmentType");
        assert_eq!(json["kind"]["code"], "XYZ");
    }
}
