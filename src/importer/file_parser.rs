// ==========================================
// 购入仕样书作成 - 文件解析器实现
// ==========================================
// 阶段 0: 文件读取与解析（首行为标题行）
// 支持: Excel (.xlsx/.xls/.xlsm/.ods) / CSV (.csv)
// ==========================================

use crate::domain::equipment::RawRow;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::FileParser;
use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

const EXCEL_EXTENSIONS: [&str; 4] = ["xlsx", "xlsm", "xls", "ods"];

// ==========================================
// SourceFormat - 输入格式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Excel,
}

impl SourceFormat {
    /// 按扩展名判断（大小写不敏感）
    pub fn from_extension(ext: &str) -> ImportResult<Self> {
        let ext = ext.trim_start_matches('.').to_lowercase();
        if ext == "csv" {
            Ok(SourceFormat::Csv)
        } else if EXCEL_EXTENSIONS.contains(&ext.as_str()) {
            Ok(SourceFormat::Excel)
        } else {
            Err(ImportError::UnsupportedFormat(ext))
        }
    }

    pub fn from_path(path: &Path) -> ImportResult<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(ext)
    }
}

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

fn clean_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_string()
}

fn is_blank(row: &RawRow) -> bool {
    row.values().all(|v| v.is_empty())
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser {
    skip_blank_rows: bool,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self {
            skip_blank_rows: true,
        }
    }
}

impl CsvParser {
    pub fn new(skip_blank_rows: bool) -> Self {
        Self { skip_blank_rows }
    }

    /// 从任意读取器解析（上传缓冲区等）
    pub fn parse_reader<R: Read>(&self, reader: R) -> ImportResult<Vec<RawRow>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(clean_header).collect();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row = RawRow::new();

            for (col_idx, value) in record.iter().enumerate() {
                match headers.get(col_idx) {
                    Some(header) if !header.is_empty() => {
                        // 表头重复时保留最左列
                        row.entry(header.clone())
                            .or_insert_with(|| value.trim().to_string());
                    }
                    _ => {}
                }
            }

            if self.skip_blank_rows && is_blank(&row) {
                continue;
            }
            rows.push(row);
        }

        Ok(rows)
    }
}

impl FileParser for CsvParser {
    fn parse_to_raw_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        ensure_exists(file_path)?;
        if SourceFormat::from_path(file_path)? != SourceFormat::Csv {
            let ext = file_path
                .extension()
                .map(|e| e.to_string_lossy().to_string())
                .unwrap_or_default();
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let file = File::open(file_path)?;
        self.parse_reader(file)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser {
    sheet_name: Option<String>, // None = 第一个工作表
    skip_blank_rows: bool,
}

impl Default for ExcelParser {
    fn default() -> Self {
        Self {
            sheet_name: None,
            skip_blank_rows: true,
        }
    }
}

impl ExcelParser {
    pub fn new(sheet_name: Option<String>, skip_blank_rows: bool) -> Self {
        Self {
            sheet_name,
            skip_blank_rows,
        }
    }

    /// 从内存中的工作簿字节解析
    pub fn parse_bytes(&self, bytes: &[u8]) -> ImportResult<Vec<RawRow>> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;
        self.read_first_sheet(&mut workbook)
    }

    fn read_first_sheet<RS: Read + Seek>(
        &self,
        workbook: &mut Sheets<RS>,
    ) -> ImportResult<Vec<RawRow>> {
        let sheet_names = workbook.sheet_names();
        let sheet_name = match &self.sheet_name {
            Some(name) => sheet_names
                .iter()
                .find(|s| s.as_str() == name.as_str())
                .cloned()
                .ok_or_else(|| {
                    ImportError::ExcelParseError(format!("シートが見つかりません: {}", name))
                })?,
            None => sheet_names
                .first()
                .cloned()
                .ok_or_else(|| ImportError::ExcelParseError("ワークシートがありません".to_string()))?,
        };

        let range = workbook.worksheet_range(&sheet_name)?;
        self.range_to_rows(&range)
    }

    fn range_to_rows(&self, range: &Range<Data>) -> ImportResult<Vec<RawRow>> {
        let mut rows_iter = range.rows();

        // 提取表头（第一行）;空工作表与空 CSV 一样视为零行
        let Some(header_row) = rows_iter.next() else {
            return Ok(Vec::new());
        };
        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| clean_header(&cell.to_string()))
            .collect();

        let mut rows = Vec::new();
        for data_row in rows_iter {
            let mut row = RawRow::new();

            for (col_idx, cell) in data_row.iter().enumerate() {
                match headers.get(col_idx) {
                    Some(header) if !header.is_empty() => {
                        row.entry(header.clone())
                            .or_insert_with(|| cell.to_string().trim().to_string());
                    }
                    _ => {}
                }
            }

            if self.skip_blank_rows && is_blank(&row) {
                continue;
            }
            rows.push(row);
        }

        Ok(rows)
    }
}

impl FileParser for ExcelParser {
    fn parse_to_raw_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        ensure_exists(file_path)?;
        if SourceFormat::from_path(file_path)? != SourceFormat::Excel {
            let ext = file_path
                .extension()
                .map(|e| e.to_string_lossy().to_string())
                .unwrap_or_default();
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(file_path)?;
        self.read_first_sheet(&mut workbook)
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser {
    csv: CsvParser,
    excel: ExcelParser,
}

impl Default for UniversalFileParser {
    fn default() -> Self {
        Self::new(None, true)
    }
}

impl UniversalFileParser {
    pub fn new(sheet_name: Option<String>, skip_blank_rows: bool) -> Self {
        Self {
            csv: CsvParser::new(skip_blank_rows),
            excel: ExcelParser::new(sheet_name, skip_blank_rows),
        }
    }

    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Vec<RawRow>> {
        let path = file_path.as_ref();
        match SourceFormat::from_path(path)? {
            SourceFormat::Csv => self.csv.parse_to_raw_rows(path),
            SourceFormat::Excel => self.excel.parse_to_raw_rows(path),
        }
    }

    /// 解析上传的字节内容
    pub fn parse_bytes(&self, bytes: &[u8], format: SourceFormat) -> ImportResult<Vec<RawRow>> {
        match format {
            SourceFormat::Csv => self.csv.parse_reader(bytes),
            SourceFormat::Excel => self.excel.parse_bytes(bytes),
        }
    }
}

impl FileParser for UniversalFileParser {
    fn parse_to_raw_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        self.parse(file_path)
    }
}
