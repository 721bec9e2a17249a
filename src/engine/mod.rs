// ==========================================
// 购入仕样书作成 - 引擎层
// ==========================================
// 职责: 自动采番 / 字段编辑 / 会话状态
// 红线: 纯同步函数,返回新列表,不修改输入
// ==========================================

pub mod field_editor;
pub mod numbering;
pub mod session;

// 重导出核心引擎
pub use field_editor::{set_field, try_set_field, EditError};
pub use numbering::{assign_numbers, renumber_notice, NumberingEngine};
pub use session::EquipmentSession;
