//! طباعة السند كملف PDF بمقاس A4
//!
//! تخطيط نصي بسيط: ترويسة الجهة، رقم السند والتاريخ، جدول الصفوف،
//! الإجماليات، وسطر التوقيعات.

use crate::error::{Result, SanadError};
use printpdf::*;
use sanad_common::VoucherRecord;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

const A4_WIDTH_MM: f32 = 210.0;
const A4_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
const LINE_HEIGHT_MM: f32 = 7.0;

pub fn generate_voucher_pdf(
    record: &VoucherRecord,
    output_path: &Path,
    organization_name: &str,
) -> Result<()> {
    let (doc, page1, layer1) = PdfDocument::new(
        &record.voucher_number,
        Mm(A4_WIDTH_MM),
        Mm(A4_HEIGHT_MM),
        "Layer 1",
    );

    let layer = doc.get_page(page1).get_layer(layer1);

    // TODO: تضمين خط عربي وتخطيط من اليمين لليسار —
    // الخط المدمج لا يعرض الحروف العربية، والأرقام تُطبع لاتينية مؤقتاً
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| SanadError::PdfGeneration(format!("تعذر تحميل الخط: {:?}", e)))?;
    let font_bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| SanadError::PdfGeneration(format!("تعذر تحميل الخط: {:?}", e)))?;

    let mut y = A4_HEIGHT_MM - MARGIN_MM;
    let x = MARGIN_MM;

    let heading = |layer: &PdfLayerReference, text: String, size: f32, y: &mut f32| {
        layer.use_text(text, size, Mm(x), Mm(*y), &font_bold);
        *y -= LINE_HEIGHT_MM * 1.5;
    };
    let line = |layer: &PdfLayerReference, text: String, y: &mut f32| {
        layer.use_text(text, 10.0, Mm(x), Mm(*y), &font);
        *y -= LINE_HEIGHT_MM;
    };

    heading(&layer, organization_name.to_string(), 14.0, &mut y);
    heading(&layer, "سند صرف كرت تحصيل غرامة".to_string(), 12.0, &mut y);

    line(&layer, format!("رقم السند: {}", record.voucher_number), &mut y);
    line(&layer, format!("التاريخ: {}", record.date), &mut y);
    line(&layer, format!("الموقع: {}", record.location), &mut y);
    y -= LINE_HEIGHT_MM * 0.5;

    // جدول الصفوف
    line(
        &layer,
        format!(
            "{:<4} {:<16} {:<16} {:>12} {:>12} {:>12}",
            "#", "كرت الغرامة", "سند التحصيل", "التحسين", "الغرامة", "المستحق"
        ),
        &mut y,
    );
    for (index, row) in record.rows.iter().enumerate() {
        line(
            &layer,
            format!(
                "{:<4} {:<16} {:<16} {:>12} {:>12} {:>12}",
                index + 1,
                row.fine_card_number,
                row.receipt_number,
                fmt_amount(row.improvement_amount),
                fmt_amount(row.fine_amount),
                fmt_amount(row.due_amount),
            ),
            &mut y,
        );
    }
    y -= LINE_HEIGHT_MM * 0.5;

    line(
        &layer,
        format!("إجمالي التحسين: {}", fmt_amount(record.improvement_amount)),
        &mut y,
    );
    line(
        &layer,
        format!("إجمالي الغرامة: {}", fmt_amount(record.fine_amount)),
        &mut y,
    );
    line(
        &layer,
        format!("المبلغ الإجمالي: {}", fmt_amount(record.total_amount)),
        &mut y,
    );
    y -= LINE_HEIGHT_MM * 0.5;

    line(&layer, format!("اسم المستلم: {}", record.recipient_name), &mut y);
    if !record.recipient_phone.is_empty() {
        line(&layer, format!("رقم الهاتف: {}", record.recipient_phone), &mut y);
    }
    if let Some(notes) = &record.notes {
        line(&layer, format!("ملاحظات: {}", notes), &mut y);
    }

    // سطر التوقيعات أسفل الصفحة
    let signature_y = MARGIN_MM + LINE_HEIGHT_MM * 2.0;
    layer.use_text("توقيع المستلم: ................", 10.0, Mm(x), Mm(signature_y), &font);
    layer.use_text(
        "توقيع المدير المالي: ................",
        10.0,
        Mm(A4_WIDTH_MM / 2.0),
        Mm(signature_y),
        &font,
    );

    let file = File::create(output_path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| SanadError::PdfGeneration(format!("تعذر حفظ PDF: {:?}", e)))?;

    Ok(())
}

/// تنسيق مبلغ بأرقام لاتينية بمنزلتين كحد أقصى بلا أصفار زائدة
fn fmt_amount(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        let s = format!("{:.2}", rounded);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_amount() {
        assert_eq!(fmt_amount(500.0), "500");
        assert_eq!(fmt_amount(12.5), "12.5");
        assert_eq!(fmt_amount(12.55), "12.55");
        assert_eq!(fmt_amount(166.665), "166.67");
        assert_eq!(fmt_amount(0.0), "0");
    }
}
