// ==========================================
// 购入仕样书作成 - 领域模型层
// ==========================================
// 职责: 机器记录、导入警告、机器种别目录
// 红线: 不含文件读取逻辑,不含采番逻辑
// ==========================================

pub mod catalog;
pub mod equipment;

// 重导出核心类型
pub use catalog::{EquipmentTypeEntry, Shop};
pub use equipment::{
    parse_quantity, EquipmentField, EquipmentRecord, ImportWarning, NormalizedRow, RawRow,
    WarningKind,
};
