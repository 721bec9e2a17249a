// ==========================================
// 购入仕样书作成 - 机器导入 Trait
// ==========================================
// 职责: 定义导入管道各阶段接口（不包含实现）
// 流程: 文件解析 → 字段映射 → 校验 → {记录, 警告}
// ==========================================

use crate::domain::equipment::{NormalizedRow, RawRow};
use crate::importer::equipment_importer_impl::ImportOutcome;
use crate::importer::error::ImportResult;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

// ==========================================
// EquipmentImporter Trait
// ==========================================
// 用途: 机器清单导入主接口
// 实现者: EquipmentImporterImpl
#[async_trait]
pub trait EquipmentImporter: Send + Sync {
    /// 从文件导入机器清单
    ///
    /// # 参数
    /// - file_path: .xlsx / .xls / .ods / .csv 文件路径
    ///
    /// # 返回
    /// - Ok(ImportOutcome): 合格记录 + 行级警告
    /// - Err: 文件无法读取/格式不支持（整批失败,不返回部分结果）
    async fn import_file(&self, file_path: PathBuf) -> ImportResult<ImportOutcome>;

    /// 批量导入多个文件（并发执行）
    ///
    /// # 说明
    /// - 每个文件独立导入,某个文件失败不影响其他文件
    /// - 返回顺序与输入顺序一致
    async fn batch_import(&self, file_paths: Vec<PathBuf>) -> Vec<ImportResult<ImportOutcome>>;
}

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（阶段 0）
// 实现者: ExcelParser, CsvParser
pub trait FileParser: Send + Sync {
    /// 解析文件为原始行（HashMap<列标题, 值>）
    ///
    /// # 返回
    /// - Ok(Vec<RawRow>): 数据行（不含标题行,已跳过全空行）
    /// - Err: 文件读取错误、格式错误
    fn parse_to_raw_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 用途: 字段映射接口（阶段 1）
// 实现者: field_mapper::FieldMapper
pub trait FieldMapper: Send + Sync {
    /// 将原始行映射为 NormalizedRow
    ///
    /// # 参数
    /// - row: 原始行
    /// - row_number: 表格行号（用于警告）
    fn map_row(&self, row: &RawRow, row_number: usize) -> NormalizedRow;
}
