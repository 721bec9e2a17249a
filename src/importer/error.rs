// ==========================================
// 购入仕样书作成 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 范围: 批次级致命错误（行级问题走 ImportWarning,不在此处）
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("ファイルが存在しません: {0}")]
    FileNotFound(String),

    #[error("未対応のファイル形式です: {0}（.xlsx/.xls/.ods/.csv のみ対応）")]
    UnsupportedFormat(String),

    #[error("ファイルの読み込みに失敗しました: {0}")]
    FileReadError(String),

    #[error("Excelの解析に失敗しました: {0}")]
    ExcelParseError(String),

    #[error("CSVの解析に失敗しました: {0}")]
    CsvParseError(String),

    // ===== 模板生成错误 =====
    #[error("テンプレートの作成に失敗しました: {0}")]
    TemplateWriteError(String),

    // ===== 配置错误 =====
    #[error("設定の読み込みに失敗しました (path: {path}): {message}")]
    ConfigReadError { path: String, message: String },

    #[error("設定値が不正です (key: {key}, value: {value}): {message}")]
    ConfigValueError {
        key: String,
        value: String,
        message: String,
    },

    // ===== 通用错误 =====
    #[error("内部エラー: {0}")]
    InternalError(String),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for ImportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ImportError::TemplateWriteError(err.to_string())
    }
}

impl From<tokio::task::JoinError> for ImportError {
    fn from(err: tokio::task::JoinError) -> Self {
        ImportError::InternalError(format!("解析タスクが異常終了しました: {}", err))
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
