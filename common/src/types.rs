//! تعريف أنواع السند
//!
//! الأنواع المشتركة بين النموذج والمخزن والتصدير:
//! - VoucherRow: صف واحد من بيانات السند
//! - VoucherSummary: ملخص محسوب من الصفوف الحالية
//! - VoucherRecord: السند المحفوظ (يُنشأ مرة واحدة عند الحفظ)

use serde::{Deserialize, Serialize};

/// صف واحد من بيانات السند
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VoucherRow {
    /// معرّف الصف (يُولَّد عند الإنشاء، ثابت طوال الجلسة)
    pub id: String,
    pub fine_card_number: String,     // رقم كرت الغرامة
    pub receipt_number: String,       // رقم سند التحصيل
    pub improvement_amount: f64,      // مبلغ التحسين (إدخال المستخدم)
    pub fine_amount: f64,             // مبلغ الغرامة (مشتق)
    pub due_amount: f64,              // المبلغ المستحق (مشتق)
}

impl VoucherRow {
    /// صف جديد فارغ بمعرّف مولَّد ومبالغ صفرية
    pub fn empty() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            ..Default::default()
        }
    }
}

/// ملخص السند — يُحسب دائماً من الصفوف ولا يُعدَّل مباشرة
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VoucherSummary {
    pub total_improvement_amount: f64,
    pub total_fine_amount: f64,
    pub total_due_amount: f64,
    pub total_row_count: usize,
}

/// السند المحفوظ
///
/// يُنشأ مرة واحدة عند الحفظ ويُقرأ فقط بعد ذلك.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VoucherRecord {
    pub id: String,

    /// رقم السند (مثل V20231005-4821)
    pub voucher_number: String,

    /// وقت الإنشاء بصيغة RFC3339
    pub created_at: String,

    /// تاريخ السند بصيغة YYYY-MM-DD
    pub date: String,

    pub location: String,             // اسم الموقع / البوابة / النقطة
    pub recipient_name: String,       // اسم المستلم
    pub recipient_phone: String,      // رقم هاتف المستلم

    /// إجمالي المبلغ المستحق
    pub total_amount: f64,

    pub improvement_amount: f64,      // إجمالي مبالغ التحسين
    pub fine_amount: f64,             // إجمالي مبالغ الغرامة

    /// نسخة من صفوف السند وقت الحفظ
    pub rows: Vec<VoucherRow>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
