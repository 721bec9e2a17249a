// ==========================================
// 购入仕样书作成 - 机器清单导入/采番核心库
// ==========================================
// 流程: 表格文件 → 字段映射 → 导入校验 → {记录, 警告} → 自动采番 → 字段编辑
// 系统定位: 纯内存转换,不负责持久化与文档渲染
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "ja");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 记录与目录
pub mod domain;

// 导入层 - 外部表格
pub mod importer;

// 引擎层 - 采番与编辑
pub mod engine;

// 配置层
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

pub use config::{AppConfig, ImportConfig, NumberingConfig};
pub use domain::{
    EquipmentField, EquipmentRecord, EquipmentTypeEntry, ImportWarning, RawRow, Shop, WarningKind,
};
pub use engine::{assign_numbers, set_field, EquipmentSession, NumberingEngine};
pub use importer::{
    validate, EquipmentImporter, EquipmentImporterImpl, ImportError, ImportOutcome, ImportResult,
    ValidationOutcome,
};

// ==========================================
// 库初始化
// ==========================================

/// 按设定初始化运行时状态（当前仅语言）
///
/// 未调用时消息语言为 i18n::DEFAULT_LOCALE（日文）。
pub fn init(config: &AppConfig) {
    i18n::apply_config(&config.import);
    tracing::info!(
        version = VERSION,
        locale = %i18n::current_locale(),
        "{} 初始化完成",
        APP_NAME
    );
}

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "購入仕様書作成 - 機器リスト";
