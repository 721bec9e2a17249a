// ==========================================
// 购入仕样书作成 - 导入模板生成
// ==========================================
// 职责: 生成只含标题行的空白表格,供用户填写后再导入
// 红线: 标题顺序与字段映射表一致,导入解析的往返伙伴
// ==========================================

use crate::importer::error::ImportResult;
use crate::importer::field_mapper::HEADER_MAP;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::io::Write;
use std::path::Path;

pub const TEMPLATE_SHEET_NAME: &str = "REQUISITION";
pub const TEMPLATE_FILE_NAME: &str = "REQUISITION_template.xlsx";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// 标准列标题（模板顺序）
pub fn header_labels() -> [&'static str; 9] {
    HEADER_MAP.map(|(label, _)| label)
}

fn build_workbook() -> ImportResult<Workbook> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(TEMPLATE_SHEET_NAME)?;
        write_headers(sheet, &header_format)?;
    }

    Ok(workbook)
}

fn write_headers(sheet: &mut Worksheet, format: &Format) -> ImportResult<()> {
    for (col, label) in header_labels().iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *label, format)?;
        sheet.set_column_width(col as u16, 16)?;
    }
    Ok(())
}

/// 写出 .xlsx 模板
pub fn write_xlsx_template(out_path: &Path) -> ImportResult<()> {
    let mut workbook = build_workbook()?;
    workbook.save(out_path)?;
    tracing::info!(path = %out_path.display(), "导入模板已生成");
    Ok(())
}

/// 生成 .xlsx 模板字节（供下载）
pub fn xlsx_template_bytes() -> ImportResult<Vec<u8>> {
    let mut workbook = build_workbook()?;
    Ok(workbook.save_to_buffer()?)
}

/// 写出 CSV 模板（带 BOM,便于 Excel 直接打开）
pub fn write_csv_template<W: Write>(mut writer: W) -> ImportResult<()> {
    writer.write_all(UTF8_BOM)?;
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(header_labels())?;
    csv_writer.flush()?;
    Ok(())
}
