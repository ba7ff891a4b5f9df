//! تصدير قائمة السندات إلى Excel
//!
//! ورقة واحدة من اليمين لليسار: صف عناوين ثم صف لكل سند
//! مرتباً كما ورد.

use crate::error::{Result, SanadError};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};
use sanad_common::VoucherRecord;
use std::path::Path;

const HEADERS: [&str; 8] = [
    "رقم السند",
    "التاريخ",
    "اسم المستلم",
    "رقم الهاتف",
    "الموقع",
    "إجمالي التحسين",
    "إجمالي الغرامة",
    "المبلغ الإجمالي",
];

pub fn generate_voucher_list_excel(records: &[VoucherRecord], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    // تنسيقات الخلايا
    let header_format = Format::new()
        .set_bold()
        .set_font_size(10.0)
        .set_font_color(Color::RGB(0x555555))
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xAAAAAA));

    let value_format = Format::new()
        .set_font_size(11.0)
        .set_align(FormatAlign::Right)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let amount_format = Format::new()
        .set_font_size(11.0)
        .set_align(FormatAlign::Right)
        .set_align(FormatAlign::VerticalCenter)
        .set_num_format("#,##0.##")
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("السندات")
        .map_err(|e| SanadError::ExcelGeneration(format!("تعذر تسمية الورقة: {}", e)))?;
    worksheet.set_right_to_left(true);

    for (col, width) in [18.0, 12.0, 22.0, 14.0, 22.0, 14.0, 14.0, 14.0]
        .iter()
        .enumerate()
    {
        worksheet
            .set_column_width(col as u16, *width)
            .map_err(|e| SanadError::ExcelGeneration(format!("تعذر ضبط عرض العمود: {}", e)))?;
    }

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| SanadError::ExcelGeneration(format!("تعذرت كتابة العناوين: {}", e)))?;
    }

    for (index, record) in records.iter().enumerate() {
        let row = (index + 1) as u32;
        let write_err =
            |e: rust_xlsxwriter::XlsxError| SanadError::ExcelGeneration(format!("تعذرت الكتابة: {}", e));

        worksheet
            .write_string_with_format(row, 0, record.voucher_number.as_str(), &value_format)
            .map_err(write_err)?;
        worksheet
            .write_string_with_format(row, 1, record.date.as_str(), &value_format)
            .map_err(write_err)?;
        worksheet
            .write_string_with_format(row, 2, record.recipient_name.as_str(), &value_format)
            .map_err(write_err)?;
        worksheet
            .write_string_with_format(row, 3, record.recipient_phone.as_str(), &value_format)
            .map_err(write_err)?;
        worksheet
            .write_string_with_format(row, 4, record.location.as_str(), &value_format)
            .map_err(write_err)?;
        worksheet
            .write_number_with_format(row, 5, record.improvement_amount, &amount_format)
            .map_err(write_err)?;
        worksheet
            .write_number_with_format(row, 6, record.fine_amount, &amount_format)
            .map_err(write_err)?;
        worksheet
            .write_number_with_format(row, 7, record.total_amount, &amount_format)
            .map_err(write_err)?;
    }

    workbook
        .save(output_path)
        .map_err(|e| SanadError::ExcelGeneration(format!("تعذر حفظ الملف: {}", e)))?;

    Ok(())
}
