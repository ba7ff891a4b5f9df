//! تنسيق العرض بالأرقام العربية
//!
//! تحويلات عرض فقط — لا تدخل أبداً في حساب المبالغ المشتقة:
//! - المبالغ: ٠–٢ منزلة عشرية بلا أصفار زائدة، بفواصل الآلاف العربية
//! - التواريخ: صيغة YYYY/M/D بالأرقام العربية

/// فاصل الآلاف العربي (U+066C)
const ARABIC_THOUSANDS_SEPARATOR: char = '\u{066C}';

/// الفاصلة العشرية العربية (U+066B)
const ARABIC_DECIMAL_SEPARATOR: char = '\u{066B}';

/// تحويل الأرقام اللاتينية إلى أرقام عربية (٠-٩)
pub fn to_arabic_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '0'..='9' => {
                let digit = c as u32 - '0' as u32;
                char::from_u32(0x0660 + digit).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

/// تنسيق مبلغ للعرض بالأرقام العربية
///
/// تقريب إلى منزلتين عشريتين كحد أقصى مع حذف الأصفار الزائدة،
/// على نمط `Intl.NumberFormat('ar-SA-u-nu-arab')` في التطبيق الأصلي.
pub fn format_currency(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let negative = amount < 0.0;

    // التقريب للعرض فقط — المبالغ المخزنة تبقى دون تقريب
    let cents = (amount.abs() * 100.0).round() as u128;
    let integer_part = cents / 100;
    let fraction = (cents % 100) as u32;

    let mut out = String::new();
    if negative && cents > 0 {
        out.push('-');
    }
    out.push_str(&group_thousands(&integer_part.to_string()));

    if fraction != 0 {
        out.push(ARABIC_DECIMAL_SEPARATOR);
        if fraction % 10 == 0 {
            out.push_str(&(fraction / 10).to_string());
        } else {
            out.push_str(&format!("{:02}", fraction));
        }
    }

    to_arabic_digits(&out)
}

/// تنسيق تاريخ YYYY-MM-DD للعرض بصيغة YYYY/M/D بالأرقام العربية
///
/// الشهر واليوم بلا أصفار بادئة؛ المدخل غير الصالح يُعاد كما هو
/// بعد تحويل أرقامه.
pub fn format_date_ymd(date: &str) -> String {
    let parts: Vec<&str> = date.split('-').collect();
    if parts.len() != 3 || parts.iter().any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit())) {
        return to_arabic_digits(date);
    }

    let month = parts[1].trim_start_matches('0');
    let day = parts[2].trim_start_matches('0');
    let formatted = format!(
        "{}/{}/{}",
        parts[0],
        if month.is_empty() { "0" } else { month },
        if day.is_empty() { "0" } else { day },
    );
    to_arabic_digits(&formatted)
}

/// تجميع الآلاف بالفاصل العربي
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::new();
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(ARABIC_THOUSANDS_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}
