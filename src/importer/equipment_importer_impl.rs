// ==========================================
// 购入仕样书作成 - 机器导入器实现
// ==========================================
// 职责: 文件解析（阻塞线程）→ 校验 → 导入结果
// 红线: 批次级错误整体失败,不返回部分记录/警告
// ==========================================

use crate::config::ImportConfig;
use crate::domain::equipment::{EquipmentRecord, ImportWarning, RawRow};
use crate::importer::error::ImportResult;
use crate::importer::file_parser::{SourceFormat, UniversalFileParser};
use crate::importer::importer_trait::EquipmentImporter;
use crate::importer::validator::{validate, ValidationOutcome};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

// ==========================================
// ImportOutcome - 一次导入的结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportOutcome {
    pub batch_id: String,
    pub source_file: Option<String>,
    pub imported_at: DateTime<Utc>,
    pub records: Vec<EquipmentRecord>,
    pub warnings: Vec<ImportWarning>,
    pub summary: ImportSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub total_rows: usize, // 数据行数（不含标题行/已跳过的全空行）
    pub accepted: usize,
    pub skipped: usize,
}

impl ImportOutcome {
    /// 由已解析的原始行构建结果
    pub fn from_rows(rows: &[RawRow], source_file: Option<String>) -> Self {
        let ValidationOutcome { records, warnings } = validate(rows);
        let summary = ImportSummary {
            total_rows: rows.len(),
            accepted: records.len(),
            skipped: warnings.len(),
        };

        let outcome = Self {
            batch_id: Uuid::new_v4().to_string(),
            source_file,
            imported_at: Utc::now(),
            records,
            warnings,
            summary,
        };

        tracing::info!(
            batch_id = %outcome.batch_id,
            total = summary.total_rows,
            accepted = summary.accepted,
            skipped = summary.skipped,
            "机器清单导入完成"
        );

        outcome
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

// ==========================================
// EquipmentImporterImpl
// ==========================================
pub struct EquipmentImporterImpl {
    parser: Arc<UniversalFileParser>,
}

impl Default for EquipmentImporterImpl {
    fn default() -> Self {
        Self::new(&ImportConfig::default())
    }
}

impl EquipmentImporterImpl {
    pub fn new(config: &ImportConfig) -> Self {
        Self {
            parser: Arc::new(UniversalFileParser::new(
                config.sheet_name.clone(),
                config.skip_blank_rows,
            )),
        }
    }

    /// 同步导入（调用方已在阻塞上下文中时使用）
    pub fn import_file_blocking(&self, file_path: &std::path::Path) -> ImportResult<ImportOutcome> {
        let rows = self.parser.parse(file_path)?;
        Ok(ImportOutcome::from_rows(
            &rows,
            Some(file_path.display().to_string()),
        ))
    }

    /// 从上传的字节内容导入
    pub fn import_bytes(&self, bytes: &[u8], format: SourceFormat) -> ImportResult<ImportOutcome> {
        let rows = self.parser.parse_bytes(bytes, format)?;
        Ok(ImportOutcome::from_rows(&rows, None))
    }
}

#[async_trait]
impl EquipmentImporter for EquipmentImporterImpl {
    async fn import_file(&self, file_path: PathBuf) -> ImportResult<ImportOutcome> {
        tracing::debug!(path = %file_path.display(), "开始解析导入文件");

        let parser = Arc::clone(&self.parser);
        let path = file_path.clone();
        let rows = tokio::task::spawn_blocking(move || parser.parse(&path))
            .await?
            .map_err(|e| {
                tracing::error!(path = %file_path.display(), error = %e, "导入文件解析失败");
                e
            })?;

        Ok(ImportOutcome::from_rows(
            &rows,
            Some(file_path.display().to_string()),
        ))
    }

    async fn batch_import(&self, file_paths: Vec<PathBuf>) -> Vec<ImportResult<ImportOutcome>> {
        let tasks = file_paths.into_iter().map(|path| self.import_file(path));
        join_all(tasks).await
    }
}
