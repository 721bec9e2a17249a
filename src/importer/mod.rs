// ==========================================
// 购入仕样书作成 - 导入层
// ==========================================
// 职责: 外部表格 → 合格机器记录 + 行级警告
// 支持: Excel, CSV, 导入模板生成
// ==========================================

// 模块声明
pub mod equipment_importer_impl;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod importer_trait;
pub mod template;
pub mod validator;

// 重导出核心类型
pub use equipment_importer_impl::{EquipmentImporterImpl, ImportOutcome, ImportSummary};
pub use error::{ImportError, ImportResult};
pub use field_mapper::{normalize, FieldMapper as FieldMapperImpl, HEADER_MAP};
pub use file_parser::{CsvParser, ExcelParser, SourceFormat, UniversalFileParser};
pub use template::{write_csv_template, write_xlsx_template, xlsx_template_bytes};
pub use validator::{validate, ImportValidator, ValidationOutcome};

// 重导出 Trait 接口
pub use importer_trait::{EquipmentImporter, FieldMapper, FileParser};
