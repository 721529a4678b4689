// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, record_to_row};
use crate::export::{ExportFormat, RecordExport, notify_export_success};
use crate::ui::messages::info;
use crate::utils::time::format_duration;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::io;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Columns written as numbers: id and duration in minutes.
const NUMERIC_COLUMNS: [usize; 2] = [0, 6];

/// Export XLSX with a title row, styled header, banded rows and a total row.
pub(crate) fn export_xlsx(rows: &[RecordExport], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let title_format = Format::new().set_bold().set_font_size(14);
    worksheet
        .write_with_format(0, 0, title, &title_format)
        .map_err(to_io_app_error)?;

    let headers = get_headers();
    let header_row = 2u32;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(header_row, col as u16, *header, &header_format)
            .map_err(to_io_app_error)?;
    }

    worksheet.set_freeze_panes(header_row + 1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();
    col_widths[0] = col_widths[0].max(UnicodeWidthStr::width(title) / 2);

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    let mut total_secs = 0;
    for (row_index, rec) in rows.iter().enumerate() {
        let row = header_row + 1 + row_index as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };
        total_secs += rec.seconds;

        for (col, value) in record_to_row(rec).iter().enumerate() {
            write_cell(worksheet, row, col, value, band_color)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    let total_row = header_row + 1 + rows.len() as u32;
    let total_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xD9D9D9))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);
    let total_minutes: i64 = rows.iter().map(|r| r.duration_minutes).sum();

    worksheet
        .write_with_format(total_row, 0, "TOTAL", &total_format)
        .map_err(to_io_app_error)?;
    for col in 1..headers.len() {
        let col16 = col as u16;
        let res = match col {
            6 => worksheet.write_with_format(total_row, col16, total_minutes as f64, &total_format),
            7 => worksheet.write_with_format(
                total_row,
                col16,
                format_duration(total_secs),
                &total_format,
            ),
            _ => worksheet.write_with_format(total_row, col16, "", &total_format),
        };
        res.map_err(to_io_app_error)?;
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_io_app_error)?;
    }

    workbook.save(path_str(path)?).map_err(to_io_app_error)?;

    notify_export_success(ExportFormat::Xlsx, rows.len(), path);
    Ok(())
}

fn write_cell(worksheet: &mut Worksheet, row: u32, col: usize, s: &str, bg: Color) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if NUMERIC_COLUMNS.contains(&col)
        && let Ok(num) = s.parse::<f64>()
    {
        let fmt = base.set_align(FormatAlign::Right);
        worksheet
            .write_with_format(row, col as u16, num, &fmt)
            .map_err(to_io_app_error)?;
        return Ok(());
    }

    worksheet
        .write_with_format(row, col as u16, s, &base)
        .map_err(to_io_app_error)?;
    Ok(())
}

fn to_io_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::from(io::Error::other(e.to_string()))
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::from(io::Error::other("invalid path")))
}
