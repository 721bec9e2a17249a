// ==========================================
// 购入仕样书作成 - 机器清单会话状态
// ==========================================
// 职责: 持有当前批次（记录 + 警告 + 采番设定）
// 红线: 导入失败时保持原状态不变;所有更新都以替换方式进行
// ==========================================

use crate::config::NumberingConfig;
use crate::domain::equipment::{EquipmentField, EquipmentRecord, ImportWarning};
use crate::engine::field_editor::set_field;
use crate::engine::numbering::assign_numbers;
use crate::importer::equipment_importer_impl::ImportOutcome;
use crate::importer::error::ImportResult;

#[derive(Debug, Clone, Default)]
pub struct EquipmentSession {
    records: Vec<EquipmentRecord>,
    warnings: Vec<ImportWarning>,
    numbering: NumberingConfig,
    batch_id: Option<String>,
}

impl EquipmentSession {
    pub fn new(numbering: NumberingConfig) -> Self {
        Self {
            numbering,
            ..Default::default()
        }
    }

    pub fn records(&self) -> &[EquipmentRecord] {
        &self.records
    }

    pub fn warnings(&self) -> &[ImportWarning] {
        &self.warnings
    }

    pub fn numbering(&self) -> &NumberingConfig {
        &self.numbering
    }

    pub fn batch_id(&self) -> Option<&str> {
        self.batch_id.as_deref()
    }

    /// 应用一次导入结果
    ///
    /// 成功: 整批替换记录与警告;失败: 原状态不变,错误原样返回。
    pub fn apply_import(&mut self, result: ImportResult<ImportOutcome>) -> ImportResult<()> {
        let outcome = result.map_err(|e| {
            tracing::warn!(error = %e, "导入失败,保留当前批次");
            e
        })?;

        self.records = outcome.records;
        self.warnings = outcome.warnings;
        self.batch_id = Some(outcome.batch_id);
        Ok(())
    }

    pub fn update_numbering_config(&mut self, numbering: NumberingConfig) {
        self.numbering = numbering;
    }

    /// 按当前设定重新采番（总是从起始番号开始）
    pub fn apply_numbering(&mut self) {
        self.records = assign_numbers(&self.records, &self.numbering);
    }

    /// 修改单个字段;越界时无操作
    pub fn update_field(&mut self, index: usize, field: EquipmentField, value: &str) {
        self.records = set_field(&self.records, index, field, value);
    }

    /// 清空批次（保留采番设定）
    pub fn reset(&mut self) {
        self.records.clear();
        self.warnings.clear();
        self.batch_id = None;
    }
}
