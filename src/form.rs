//! نموذج إدخال السند التفاعلي
//!
//! إدخال بيانات السند من الطرفية: الموقع، صفوف الكروت والمبالغ،
//! بيانات المستلم، مع ملخص حي بالأرقام العربية. المبالغ تُقبل
//! أرقاماً فقط (لاتينية أو عربية) وتُرفض قبل وصولها إلى الحساب.

use crate::error::{Result, SanadError};
use dialoguer::Input;
use lazy_static::lazy_static;
use regex::Regex;
use sanad_common::{format_currency, DueAmountPolicy, VoucherDraft};

lazy_static! {
    /// أرقام فقط مع جزء عشري اختياري من منزلة أو منزلتين
    static ref AMOUNT_RE: Regex = Regex::new(r"^\d{1,12}(\.\d{1,2})?$").unwrap();
}

/// تحليل مبلغ مُدخل — يقبل الأرقام اللاتينية والعربية فقط
///
/// أي إدخال آخر يرجع None ولا يصل إلى حساب المبالغ المشتقة.
pub fn parse_amount(input: &str) -> Option<f64> {
    let normalized: String = input
        .trim()
        .chars()
        .map(|c| match c {
            // الأرقام العربية (٠-٩) إلى لاتينية
            '\u{0660}'..='\u{0669}' => {
                char::from_u32('0' as u32 + (c as u32 - 0x0660)).unwrap_or(c)
            }
            // الفاصلة العشرية العربية
            '\u{066B}' => '.',
            _ => c,
        })
        .collect();

    if AMOUNT_RE.is_match(&normalized) {
        normalized.parse().ok()
    } else {
        None
    }
}

/// تشغيل نموذج الإدخال التفاعلي وإرجاع مسودة جاهزة للحفظ
pub fn run_interactive_form(date: String, policy: DueAmountPolicy) -> Result<VoucherDraft> {
    let mut draft = VoucherDraft::new(date, policy);

    println!("بيانات السند");
    println!("---");

    draft.location = prompt_required(
        "اسم الموقع / البوابة / النقطة",
        "يرجى إدخال اسم الموقع أو البوابة",
    )?;

    // الصفوف الثلاثة الابتدائية ثم صفوف إضافية عند الطلب
    let mut index = 0;
    loop {
        let row_ids: Vec<String> = draft.rows().iter().map(|r| r.id.clone()).collect();
        while index < row_ids.len() {
            prompt_row(&mut draft, &row_ids[index], index + 1)?;
            index += 1;
        }

        if !prompt_yes_no("إضافة صف جديد؟")? {
            break;
        }
        draft.add_row();
    }

    draft.recipient_name = prompt_required("اسم المستلم", "يرجى إدخال اسم المستلم")?;
    draft.recipient_phone = prompt_optional("رقم هاتف المستلم")?;

    let notes = prompt_optional("ملاحظات")?;
    if !notes.is_empty() {
        draft.notes = Some(notes);
    }

    print_summary(&draft);
    Ok(draft)
}

/// إدخال صف واحد: رقم الكرت، رقم سند التحصيل، مبلغ التحسين
fn prompt_row(draft: &mut VoucherDraft, row_id: &str, number: usize) -> Result<()> {
    println!("\nالصف {}:", number);

    let card = prompt_optional("  رقم كرت الغرامة")?;
    draft.set_fine_card_number(row_id, &card);

    let receipt = prompt_optional("  رقم سند التحصيل")?;
    draft.set_receipt_number(row_id, &receipt);

    let amount = prompt_amount("  مبلغ التحسين")?;
    draft.set_improvement_amount(row_id, amount);

    if draft.policy() == DueAmountPolicy::FineOnTop {
        let fine = prompt_amount("  مبلغ الغرامة")?;
        draft.set_fine_amount(row_id, fine);
    }

    if let Some(row) = draft.rows().iter().find(|r| r.id == row_id) {
        println!(
            "  → الغرامة: {} | المستحق: {}",
            format_currency(row.fine_amount),
            format_currency(row.due_amount)
        );
    }
    Ok(())
}

/// إدخال مبلغ مع إعادة الطلب عند الإدخال غير الصالح
fn prompt_amount(prompt: &str) -> Result<f64> {
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| SanadError::Prompt(e.to_string()))?;

        if input.trim().is_empty() {
            return Ok(0.0);
        }

        match parse_amount(&input) {
            Some(amount) => return Ok(amount),
            None => println!("  ⚠ مبلغ غير صالح — أدخل أرقاماً فقط"),
        }
    }
}

/// حقل مطلوب — يعاد الطلب مع رسالة الحقل حتى الإدخال
fn prompt_required(prompt: &str, message: &str) -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| SanadError::Prompt(e.to_string()))?;

        let trimmed = input.trim().to_string();
        if trimmed.is_empty() {
            println!("⚠ حقل مطلوب: {}", message);
            continue;
        }
        return Ok(trimmed);
    }
}

fn prompt_optional(prompt: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| SanadError::Prompt(e.to_string()))?;
    Ok(input.trim().to_string())
}

fn prompt_yes_no(prompt: &str) -> Result<bool> {
    let input: String = Input::new()
        .with_prompt(format!("{} (y/N)", prompt))
        .allow_empty(true)
        .interact_text()
        .map_err(|e| SanadError::Prompt(e.to_string()))?;
    Ok(matches!(input.trim(), "y" | "Y" | "نعم"))
}

/// طباعة ملخص المسودة
fn print_summary(draft: &VoucherDraft) {
    let summary = draft.summary();
    println!("\nملخص السند:");
    println!("  عدد الصفوف: {}", sanad_common::to_arabic_digits(&summary.total_row_count.to_string()));
    println!("  إجمالي التحسين: {}", format_currency(summary.total_improvement_amount));
    println!("  إجمالي الغرامة: {}", format_currency(summary.total_fine_amount));
    println!("  إجمالي المستحق: {}", format_currency(summary.total_due_amount));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_plain_digits() {
        assert_eq!(parse_amount("1000"), Some(1000.0));
        assert_eq!(parse_amount("0"), Some(0.0));
        assert_eq!(parse_amount("  250 "), Some(250.0));
    }

    #[test]
    fn test_parse_amount_fraction() {
        assert_eq!(parse_amount("12.5"), Some(12.5));
        assert_eq!(parse_amount("12.55"), Some(12.55));
        // ثلاث منازل عشرية مرفوضة
        assert_eq!(parse_amount("12.555"), None);
    }

    #[test]
    fn test_parse_amount_arabic_digits() {
        assert_eq!(parse_amount("١٠٠٠"), Some(1000.0));
        assert_eq!(parse_amount("١٢٫٥"), Some(12.5));
    }

    #[test]
    fn test_parse_amount_rejects_malformed() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("12a"), None);
        assert_eq!(parse_amount("-5"), None);
        assert_eq!(parse_amount("1,000"), None);
        assert_eq!(parse_amount("1.2.3"), None);
        assert_eq!(parse_amount("."), None);
    }

    #[test]
    fn test_parse_amount_never_negative() {
        for input in ["1000", "١٢٫٥", "0.01"] {
            let amount = parse_amount(input).unwrap();
            assert!(amount >= 0.0);
        }
    }
}
