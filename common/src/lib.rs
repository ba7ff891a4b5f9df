//! Sanad Common Library
//!
//! الأنواع والحسابات المشتركة لنظام سندات صرف كرت تحصيل الغرامة:
//! - types: صف السند، ملخص السند، سجل السند المحفوظ
//! - calc: حساب المبالغ المشتقة وملخص السند
//! - voucher: مسودة السند وقواعد الصفوف
//! - search: تصفية السندات حسب نوع البحث
//! - format: تنسيق العرض بالأرقام العربية

pub mod calc;
pub mod error;
pub mod format;
pub mod search;
pub mod types;
pub mod voucher;

pub use calc::{calculate_summary, compute_derived_amounts, DueAmountPolicy};
pub use error::{Error, Result};
pub use format::{format_currency, format_date_ymd, to_arabic_digits};
pub use search::{filter_vouchers, SearchMode};
pub use types::{VoucherRecord, VoucherRow, VoucherSummary};
pub use voucher::VoucherDraft;
