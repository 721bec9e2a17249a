// ==========================================
// 购入仕样书作成 - 配置层
// ==========================================
// 职责: 导入设定 / 采番设定,支持文件 + 环境变量覆写
// ==========================================

pub mod config_loader;
pub mod numbering_config;

// 重导出核心配置
pub use config_loader::{env_keys, AppConfig, ImportConfig};
pub use numbering_config::NumberingConfig;
