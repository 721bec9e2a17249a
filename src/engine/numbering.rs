// ==========================================
// 购入仕样书作成 - 自动采番引擎
// ==========================================
// 职责: 按机器种别分组,分配唯一、递增、3 位补零的机器番号
// 输入: 合格记录 + 采番设定
// 输出: 新的记录列表（不修改输入）
// ==========================================
// 红线: 计数器只属于一次调用;重复调用 = 从起始番号重新采番
// ==========================================

use crate::config::NumberingConfig;
use crate::domain::equipment::EquipmentRecord;
use crate::i18n::t;
use std::collections::HashMap;
use tracing::instrument;

/// 番号最小位数
pub const NUMBER_WIDTH: usize = 3;

// ==========================================
// NumberingEngine - 自动采番引擎
// ==========================================
pub struct NumberingEngine {
    prefix: String,
    start: u64,
}

impl NumberingEngine {
    /// 按设定创建（前缀/起始番号在此规范化）
    pub fn new(config: &NumberingConfig) -> Self {
        Self {
            prefix: config.normalized_prefix(),
            start: config.normalized_start(),
        }
    }

    /// 批量采番
    ///
    /// 种别为空的记录原样通过,不占用任何计数器;
    /// 同一种别内保持输入顺序,番号从起始值开始逐一递增。
    #[instrument(skip(self, records), fields(count = records.len(), prefix = %self.prefix, start = self.start))]
    pub fn assign_numbers(&self, records: &[EquipmentRecord]) -> Vec<EquipmentRecord> {
        // u128 计数: 起始值最大为 u64::MAX,递增不会溢出
        let mut counters: HashMap<String, u128> = HashMap::new();

        let numbered: Vec<EquipmentRecord> = records
            .iter()
            .map(|record| {
                let equipment_type = record.equipment_type.trim().to_uppercase();
                if equipment_type.is_empty() {
                    return record.clone();
                }

                let next = counters
                    .entry(equipment_type.clone())
                    .or_insert(u128::from(self.start));
                let current = *next;
                *next += 1;

                EquipmentRecord {
                    equipment_number: self.format_number(&equipment_type, current),
                    equipment_type,
                    ..record.clone()
                }
            })
            .collect();

        tracing::debug!(types = counters.len(), "采番完成");
        numbered
    }

    /// "{prefix}{TYPE}-{NNN}"
    pub fn format_number(&self, equipment_type: &str, sequence: u128) -> String {
        format!(
            "{}{}-{:0width$}",
            self.prefix,
            equipment_type,
            sequence,
            width = NUMBER_WIDTH
        )
    }
}

/// 批量采番（无状态便捷入口）
pub fn assign_numbers(records: &[EquipmentRecord], config: &NumberingConfig) -> Vec<EquipmentRecord> {
    NumberingEngine::new(config).assign_numbers(records)
}

/// 提示调用方: 每次执行都会从起始番号重新采番
pub fn renumber_notice() -> String {
    t("numbering.renumber_notice")
}
