// ==========================================
// 购入仕样书作成 - 导入校验器实现
// ==========================================
// 职责: 必填字段校验 + 机器种别目录校验 → 记录/警告 分流
// 规则: 行级问题只产生警告并跳过该行,批次永不中断
// ==========================================

use crate::domain::catalog;
use crate::domain::equipment::{
    EquipmentField, EquipmentRecord, ImportWarning, NormalizedRow, RawRow, WarningKind,
};
use crate::i18n::t_with_args;
use crate::importer::field_mapper::FieldMapper;
use crate::importer::importer_trait::FieldMapper as FieldMapperTrait;
use serde::{Deserialize, Serialize};

/// 标题行占用的行数（首个数据行报告为第 2 行）
pub const HEADER_ROW_OFFSET: usize = 1;

/// 0 起始的数据行位置 → 表格行号
pub fn sheet_row_number(position: usize) -> usize {
    position + 1 + HEADER_ROW_OFFSET
}

// ==========================================
// ValidationOutcome - 校验结果
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub records: Vec<EquipmentRecord>,
    pub warnings: Vec<ImportWarning>,
}

pub struct ImportValidator<M: FieldMapperTrait = FieldMapper> {
    mapper: M,
}

impl ImportValidator<FieldMapper> {
    pub fn new() -> Self {
        Self {
            mapper: FieldMapper,
        }
    }
}

impl Default for ImportValidator<FieldMapper> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: FieldMapperTrait> ImportValidator<M> {
    pub fn with_mapper(mapper: M) -> Self {
        Self { mapper }
    }

    /// 校验整批原始行（按输入顺序）
    pub fn validate(&self, rows: &[RawRow]) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::default();

        for (position, row) in rows.iter().enumerate() {
            let normalized = self.mapper.map_row(row, sheet_row_number(position));
            match self.validate_row(normalized) {
                Ok(record) => outcome.records.push(record),
                Err(warning) => {
                    tracing::debug!(
                        row = warning.index,
                        message = %warning.message,
                        "跳过不合格行"
                    );
                    outcome.warnings.push(warning);
                }
            }
        }

        outcome
    }

    /// 校验单行: 通过则生成完整记录,否则返回该行唯一的警告
    pub fn validate_row(&self, row: NormalizedRow) -> Result<EquipmentRecord, ImportWarning> {
        let missing = row.missing_required();
        if !missing.is_empty() {
            return Err(missing_fields_warning(row.row_number, missing));
        }

        let equipment_type = row.value(EquipmentField::EquipmentType);
        if !equipment_type.is_empty() && catalog::lookup(equipment_type).is_none() {
            return Err(unknown_type_warning(row.row_number, equipment_type));
        }

        Ok(row.into_record())
    }
}

fn missing_fields_warning(index: usize, fields: Vec<EquipmentField>) -> ImportWarning {
    let joined = fields
        .iter()
        .map(|f| f.key())
        .collect::<Vec<_>>()
        .join(", ");
    ImportWarning {
        index,
        message: t_with_args("import.missing_required_fields", &[("fields", &joined)]),
        kind: WarningKind::MissingRequiredFields { fields },
    }
}

fn unknown_type_warning(index: usize, code: &str) -> ImportWarning {
    ImportWarning {
        index,
        message: t_with_args("import.unknown_equipment_type", &[("code", code)]),
        kind: WarningKind::UnknownEquipmentType {
            code: code.to_string(),
        },
    }
}

/// 使用默认字段映射器校验整批原始行
pub fn validate(rows: &[RawRow]) -> ValidationOutcome {
    ImportValidator::new().validate(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, &str)]) -> RawRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn valid_row(process_id: &str, equipment_type: &str) -> RawRow {
        raw(&[
            ("工程番号", process_id),
            ("工程名", "フレーム溶接"),
            ("主機能", "スポット溶接"),
            ("機器種別", equipment_type),
            ("数量", "2"),
        ])
    }

    #[test]
    fn test_valid_rows_accepted_without_warnings() {
        let rows = vec![valid_row("P-01", "WRB"), valid_row("P-02", "")];

        let outcome = validate(&rows);

        assert_eq!(outcome.records.len(), 2);
        assert!(outcome.warnings.is_empty());
        assert_eq!(outcome.records[0].process_id, "P-01");
        assert_eq!(outcome.records[0].quantity, 2.0);
        assert_eq!(outcome.records[1].equipment_type, "");
        assert!(outcome.records.iter().all(|r| r.equipment_number.is_empty()));
    }

    #[test]
    fn test_lowercase_known_type_accepted_as_given() {
        let outcome = validate(&[valid_row("P-01", " jig ")]);

        assert_eq!(outcome.records.len(), 1);
        // 导入时只 TRIM,大写化由采番引擎负责
        assert_eq!(outcome.records[0].equipment_type, "jig");
    }

    #[test]
    fn test_missing_fields_listed_in_one_warning() {
        let rows = vec![raw(&[("工程番号", "P-01"), ("機器種別", "WRB")])];

        let outcome = validate(&rows);

        assert!(outcome.records.is_empty());
        assert_eq!(outcome.warnings.len(), 1);
        let w = &outcome.warnings[0];
        assert_eq!(w.index, 2);
        assert!(w.message.contains("processName"));
        assert!(w.message.contains("mainFunction"));
        assert!(!w.message.contains("processId"));
        assert_eq!(
            w.kind,
            WarningKind::MissingRequiredFields {
                fields: vec![EquipmentField::ProcessName, EquipmentField::MainFunction]
            }
        );
    }

    #[test]
    fn test_missing_field_takes_precedence_over_unknown_type() {
        let rows = vec![raw(&[("工程番号", "P-01"), ("機器種別", "XYZ")])];

        let outcome = validate(&rows);

        assert_eq!(outcome.warnings.len(), 1);
        assert!(matches!(
            outcome.warnings[0].kind,
            WarningKind::MissingRequiredFields { .. }
        ));
    }

    #[test]
    fn test_unknown_type_rejected() {
        let outcome = validate(&[valid_row("P-01", "ROBOT")]);

        assert!(outcome.records.is_empty());
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].message.contains("ROBOT"));
        assert_eq!(
            outcome.warnings[0].kind,
            WarningKind::UnknownEquipmentType {
                code: "ROBOT".to_string()
            }
        );
    }

    #[test]
    fn test_warning_index_includes_header_offset() {
        let mut rows: Vec<RawRow> = (0..3).map(|i| valid_row(&format!("P-{i}"), "")).collect();
        rows.push(raw(&[("工程番号", "P-9"), ("主機能", "搬送")]));
        rows.push(valid_row("P-10", "CNV"));

        let outcome = validate(&rows);

        assert_eq!(outcome.records.len(), 4);
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].index, 5);
        assert!(outcome.warnings[0].message.contains("processName"));
    }

    #[test]
    fn test_empty_input() {
        let outcome = validate(&[]);
        assert_eq!(outcome, ValidationOutcome::default());
    }

    struct UppercaseIdMapper;

    impl FieldMapperTrait for UppercaseIdMapper {
        fn map_row(&self, row: &RawRow, row_number: usize) -> NormalizedRow {
            let mut mapped = FieldMapper.map_row(row, row_number);
            mapped.process_id = mapped.process_id.map(|v| v.to_uppercase());
            mapped
        }
    }

    #[test]
    fn test_custom_mapper() {
        let validator = ImportValidator::with_mapper(UppercaseIdMapper);

        let outcome = validator.validate(&[valid_row("p-01", "WRB")]);

        assert_eq!(outcome.records[0].process_id, "P-01");
    }

    #[test]
    fn test_sheet_row_number() {
        assert_eq!(sheet_row_number(0), 2);
        assert_eq!(sheet_row_number(3), 5);
    }
}
