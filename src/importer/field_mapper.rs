// ==========================================
// 购入仕样书作成 - 字段映射器实现
// ==========================================
// 职责: 列标题 → 内部字段映射 + TRIM
// 规则: 标题完全一致匹配,无别名/模糊匹配;未知列静默丢弃
// ==========================================

use crate::domain::equipment::{EquipmentField, NormalizedRow, RawRow};
use crate::importer::importer_trait::FieldMapper as FieldMapperTrait;

/// 标准列标题（模板顺序）与内部字段的一一对应
pub const HEADER_MAP: [(&str, EquipmentField); 9] = [
    ("工程番号", EquipmentField::ProcessId),
    ("工程名", EquipmentField::ProcessName),
    ("主機能", EquipmentField::MainFunction),
    ("機器種別", EquipmentField::EquipmentType),
    ("機器名称", EquipmentField::EquipmentName),
    ("型式/仕様", EquipmentField::Model),
    ("数量", EquipmentField::Quantity),
    ("メーカー", EquipmentField::Manufacturer),
    ("備考", EquipmentField::Remarks),
];

/// 标题 → 字段（完全一致）
pub fn field_for_header(header: &str) -> Option<EquipmentField> {
    HEADER_MAP
        .iter()
        .find(|(label, _)| *label == header)
        .map(|(_, field)| *field)
}

/// 字段 → 标题（机器番号没有对应列）
pub fn header_for_field(field: EquipmentField) -> Option<&'static str> {
    HEADER_MAP
        .iter()
        .find(|(_, f)| *f == field)
        .map(|(label, _)| *label)
}

pub struct FieldMapper;

impl FieldMapperTrait for FieldMapper {
    fn map_row(&self, row: &RawRow, row_number: usize) -> NormalizedRow {
        let mut normalized = NormalizedRow {
            row_number,
            ..Default::default()
        };

        for (header, value) in row {
            let Some(field) = field_for_header(header) else {
                continue;
            };
            if let Some(slot) = normalized.slot_mut(field) {
                *slot = Some(value.trim().to_string());
            }
        }

        normalized
    }
}

/// 单行规范化（无状态便捷入口）
pub fn normalize(row: &RawRow, row_number: usize) -> NormalizedRow {
    FieldMapper.map_row(row, row_number)
}
