// ==========================================
// 购入仕样书作成 - 字段编辑器
// ==========================================
// 职责: 导入后人工修正单条记录的单个字段
// 红线: 不重新校验（校验只在导入时执行）
// ==========================================

use crate::domain::equipment::{parse_quantity, EquipmentField, EquipmentRecord};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("行番号が範囲外です: {index}（件数 {len}）")]
    IndexOutOfRange { index: usize, len: usize },
}

fn apply(record: &EquipmentRecord, field: EquipmentField, value: &str) -> EquipmentRecord {
    let mut updated = record.clone();
    let value = value.to_string();
    match field {
        EquipmentField::ProcessId => updated.process_id = value,
        EquipmentField::ProcessName => updated.process_name = value,
        EquipmentField::MainFunction => updated.main_function = value,
        EquipmentField::EquipmentType => updated.equipment_type = value,
        EquipmentField::EquipmentName => updated.equipment_name = value,
        EquipmentField::Model => updated.model = value,
        EquipmentField::Quantity => updated.quantity = parse_quantity(&value),
        EquipmentField::Manufacturer => updated.manufacturer = value,
        EquipmentField::Remarks => updated.remarks = value,
        EquipmentField::EquipmentNumber => updated.equipment_number = value,
    }
    updated
}

/// 替换 index 处记录的单个字段,返回新列表
///
/// index 越界时不做任何修改,原样返回（仅记录警告日志）。
pub fn set_field(
    records: &[EquipmentRecord],
    index: usize,
    field: EquipmentField,
    value: &str,
) -> Vec<EquipmentRecord> {
    match try_set_field(records, index, field, value) {
        Ok(updated) => updated,
        Err(e) => {
            tracing::warn!(error = %e, field = %field, "字段编辑被忽略");
            records.to_vec()
        }
    }
}

/// 同 set_field,但越界时返回错误
pub fn try_set_field(
    records: &[EquipmentRecord],
    index: usize,
    field: EquipmentField,
    value: &str,
) -> Result<Vec<EquipmentRecord>, EditError> {
    if index >= records.len() {
        return Err(EditError::IndexOutOfRange {
            index,
            len: records.len(),
        });
    }

    Ok(records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            if idx == index {
                apply(record, field, value)
            } else {
                record.clone()
            }
        })
        .collect())
}
