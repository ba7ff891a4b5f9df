//! تصفية السندات حسب نوع البحث
//!
//! أربعة أنواع للبحث: التاريخ، رقم السند، رقم الكرت، اسم المستلم.
//! البحث برقم الكرت يطابق أرقام كروت الغرامة داخل صفوف السند.

use crate::types::VoucherRecord;

/// نوع البحث
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// مطابقة تاريخ الإنشاء (اليوم فقط دون الوقت)
    Date,
    /// بحث جزئي في رقم السند
    #[default]
    VoucherNumber,
    /// بحث جزئي في أرقام كروت الغرامة داخل الصفوف
    CardNumber,
    /// بحث جزئي في اسم المستلم
    RecipientName,
}

impl std::str::FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "date" => Ok(SearchMode::Date),
            "voucher" | "voucher-number" => Ok(SearchMode::VoucherNumber),
            "card" | "card-number" => Ok(SearchMode::CardNumber),
            "recipient" | "recipient-name" => Ok(SearchMode::RecipientName),
            _ => Err(format!(
                "Unknown search mode: {}. Use date, voucher, card, or recipient",
                s
            )),
        }
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Date => write!(f, "date"),
            SearchMode::VoucherNumber => write!(f, "voucher"),
            SearchMode::CardNumber => write!(f, "card"),
            SearchMode::RecipientName => write!(f, "recipient"),
        }
    }
}

/// تصفية السندات مع الحفاظ على الترتيب
///
/// الاستعلام الفارغ يرجع كل السندات دون تصفية، والمدخل لا يُعدَّل أبداً.
pub fn filter_vouchers(
    records: &[VoucherRecord],
    mode: SearchMode,
    query: &str,
) -> Vec<VoucherRecord> {
    let query = query.trim();
    if query.is_empty() {
        return records.to_vec();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches(record, mode, &needle))
        .cloned()
        .collect()
}

fn matches(record: &VoucherRecord, mode: SearchMode, needle: &str) -> bool {
    match mode {
        // RFC3339 يبدأ دائماً بـ YYYY-MM-DD فتكفي مقارنة البادئة
        SearchMode::Date => record.created_at.get(..10) == Some(needle),
        SearchMode::VoucherNumber => record.voucher_number.to_lowercase().contains(needle),
        SearchMode::RecipientName => record.recipient_name.to_lowercase().contains(needle),
        SearchMode::CardNumber => record
            .rows
            .iter()
            .any(|row| row.fine_card_number.to_lowercase().contains(needle)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VoucherRow;

    fn record(voucher_number: &str, created_at: &str, recipient: &str) -> VoucherRecord {
        VoucherRecord {
            voucher_number: voucher_number.to_string(),
            created_at: created_at.to_string(),
            recipient_name: recipient.to_string(),
            ..Default::default()
        }
    }

    fn sample_records() -> Vec<VoucherRecord> {
        vec![
            record("V20231001-1111", "2023-10-01T09:00:00Z", "أحمد محمد"),
            record("V20231005-2222", "2023-10-05T14:22:00Z", "محمد علي"),
            record("V20240501-3333", "2024-05-01T08:30:00Z", "خالد أحمد"),
        ]
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let records = sample_records();
        let filtered = filter_vouchers(&records, SearchMode::VoucherNumber, "");
        assert_eq!(filtered.len(), records.len());
        for (a, b) in records.iter().zip(filtered.iter()) {
            assert_eq!(a.voucher_number, b.voucher_number);
        }

        // الاستعلام المكوّن من فراغات يعامل كفارغ
        let filtered = filter_vouchers(&records, SearchMode::Date, "   ");
        assert_eq!(filtered.len(), records.len());
    }

    #[test]
    fn test_voucher_number_substring_scenario_c() {
        let records = vec![
            record("V20231001", "2023-10-01T00:00:00Z", ""),
            record("V20240501", "2024-05-01T00:00:00Z", ""),
        ];
        let filtered = filter_vouchers(&records, SearchMode::VoucherNumber, "2023");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].voucher_number, "V20231001");
    }

    #[test]
    fn test_voucher_number_case_insensitive() {
        let records = sample_records();
        let filtered = filter_vouchers(&records, SearchMode::VoucherNumber, "v2024");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].voucher_number, "V20240501-3333");
    }

    #[test]
    fn test_date_ignores_time_of_day_scenario_d() {
        let records = sample_records();
        let filtered = filter_vouchers(&records, SearchMode::Date, "2023-10-05");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].voucher_number, "V20231005-2222");
    }

    #[test]
    fn test_date_exact_match_only() {
        let records = sample_records();
        assert!(filter_vouchers(&records, SearchMode::Date, "2023-10").is_empty());
        assert!(filter_vouchers(&records, SearchMode::Date, "2023-10-02").is_empty());
    }

    #[test]
    fn test_recipient_name_substring() {
        let records = sample_records();
        let filtered = filter_vouchers(&records, SearchMode::RecipientName, "أحمد");
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].recipient_name, "أحمد محمد");
        assert_eq!(filtered[1].recipient_name, "خالد أحمد");
    }

    #[test]
    fn test_card_number_matches_embedded_rows() {
        let mut records = sample_records();
        records[1].rows = vec![
            VoucherRow {
                fine_card_number: "FC-1001".to_string(),
                ..VoucherRow::empty()
            },
            VoucherRow {
                fine_card_number: "FC-2002".to_string(),
                ..VoucherRow::empty()
            },
        ];

        let filtered = filter_vouchers(&records, SearchMode::CardNumber, "fc-2002");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].voucher_number, "V20231005-2222");

        // لا صفوف مطابقة → لا نتائج
        assert!(filter_vouchers(&records, SearchMode::CardNumber, "FC-9999").is_empty());
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let records = sample_records();
        let before: Vec<String> = records.iter().map(|r| r.voucher_number.clone()).collect();
        let _ = filter_vouchers(&records, SearchMode::RecipientName, "محمد");
        let after: Vec<String> = records.iter().map(|r| r.voucher_number.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_order_preserved() {
        let records = sample_records();
        let filtered = filter_vouchers(&records, SearchMode::VoucherNumber, "v2023");
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].voucher_number, "V20231001-1111");
        assert_eq!(filtered[1].voucher_number, "V20231005-2222");
    }

    #[test]
    fn test_search_mode_from_str() {
        assert_eq!("date".parse::<SearchMode>().unwrap(), SearchMode::Date);
        assert_eq!(
            "voucher-number".parse::<SearchMode>().unwrap(),
            SearchMode::VoucherNumber
        );
        assert_eq!("Card".parse::<SearchMode>().unwrap(), SearchMode::CardNumber);
        assert_eq!(
            "recipient".parse::<SearchMode>().unwrap(),
            SearchMode::RecipientName
        );
        assert!("name".parse::<SearchMode>().is_err());
    }
}
