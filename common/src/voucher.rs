//! مسودة السند
//!
//! حالة النموذج قبل الحفظ: تبدأ المسودة دائماً بثلاثة صفوف فارغة،
//! وتُعاد حسابات الحقول المشتقة فوراً عند تعديل مبلغ التحسين،
//! ولا يمكن حذف الصفوف تحت الحد الأدنى.

use crate::calc::{calculate_summary, DueAmountPolicy};
use crate::error::{Error, Result};
use crate::types::{VoucherRecord, VoucherRow, VoucherSummary};

/// عدد الصفوف عند إنشاء المسودة
pub const INITIAL_ROW_COUNT: usize = 3;

/// الحد الأدنى لعدد الصفوف — لا يُسمح بالحذف تحته
pub const MIN_ROW_COUNT: usize = 1;

/// مسودة سند قيد الإدخال
#[derive(Debug, Clone)]
pub struct VoucherDraft {
    /// تاريخ السند بصيغة YYYY-MM-DD
    pub date: String,
    pub location: String,
    pub recipient_name: String,
    pub recipient_phone: String,
    pub notes: Option<String>,
    policy: DueAmountPolicy,
    rows: Vec<VoucherRow>,
}

impl VoucherDraft {
    /// مسودة جديدة بثلاثة صفوف فارغة
    pub fn new(date: String, policy: DueAmountPolicy) -> Self {
        Self {
            date,
            location: String::new(),
            recipient_name: String::new(),
            recipient_phone: String::new(),
            notes: None,
            policy,
            rows: (0..INITIAL_ROW_COUNT).map(|_| VoucherRow::empty()).collect(),
        }
    }

    pub fn rows(&self) -> &[VoucherRow] {
        &self.rows
    }

    pub fn policy(&self) -> DueAmountPolicy {
        self.policy
    }

    /// إضافة صف فارغ جديد، وإرجاع معرّفه
    pub fn add_row(&mut self) -> String {
        let row = VoucherRow::empty();
        let id = row.id.clone();
        self.rows.push(row);
        id
    }

    /// حذف صف — يُرفض الحذف تحت الحد الأدنى
    ///
    /// يرجع true عند الحذف فعلاً.
    pub fn remove_row(&mut self, id: &str) -> bool {
        if self.rows.len() <= MIN_ROW_COUNT {
            return false;
        }
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        self.rows.len() < before
    }

    /// تعديل مبلغ التحسين وإعادة حساب المبالغ المشتقة فوراً
    pub fn set_improvement_amount(&mut self, id: &str, amount: f64) -> bool {
        let policy = self.policy;
        match self.rows.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                row.improvement_amount = amount.max(0.0);
                let (fine, due) = policy.derive(row.improvement_amount, row.fine_amount);
                row.fine_amount = fine;
                row.due_amount = due;
                true
            }
            None => false,
        }
    }

    /// تعديل مبلغ الغرامة — لا أثر له إلا مع القاعدة الجمعية
    pub fn set_fine_amount(&mut self, id: &str, amount: f64) -> bool {
        if self.policy != DueAmountPolicy::FineOnTop {
            return false;
        }
        let policy = self.policy;
        match self.rows.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                let (fine, due) = policy.derive(row.improvement_amount, amount.max(0.0));
                row.fine_amount = fine;
                row.due_amount = due;
                true
            }
            None => false,
        }
    }

    pub fn set_fine_card_number(&mut self, id: &str, value: &str) -> bool {
        match self.rows.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                row.fine_card_number = value.to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_receipt_number(&mut self, id: &str, value: &str) -> bool {
        match self.rows.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                row.receipt_number = value.to_string();
                true
            }
            None => false,
        }
    }

    /// ملخص المسودة الحالي
    pub fn summary(&self) -> VoucherSummary {
        calculate_summary(&self.rows)
    }

    /// التحقق قبل الحفظ — الموقع واسم المستلم حقلان مطلوبان
    pub fn validate(&self) -> Result<()> {
        if self.location.trim().is_empty() {
            return Err(Error::Validation(
                "يرجى إدخال اسم الموقع أو البوابة".to_string(),
            ));
        }
        if self.recipient_name.trim().is_empty() {
            return Err(Error::Validation("يرجى إدخال اسم المستلم".to_string()));
        }
        Ok(())
    }

    /// تجميد المسودة في سجل سند محفوظ
    pub fn into_record(self, voucher_number: String, created_at: String) -> VoucherRecord {
        let summary = self.summary();
        VoucherRecord {
            id: uuid::Uuid::new_v4().to_string(),
            voucher_number,
            created_at,
            date: self.date,
            location: self.location,
            recipient_name: self.recipient_name,
            recipient_phone: self.recipient_phone,
            total_amount: summary.total_due_amount,
            improvement_amount: summary.total_improvement_amount,
            fine_amount: summary.total_fine_amount,
            rows: self.rows,
            notes: self.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> VoucherDraft {
        VoucherDraft::new("2023-10-05".to_string(), DueAmountPolicy::default())
    }

    #[test]
    fn test_new_draft_starts_with_three_rows() {
        let draft = draft();
        assert_eq!(draft.rows().len(), INITIAL_ROW_COUNT);
        for row in draft.rows() {
            assert_eq!(row.improvement_amount, 0.0);
            assert_eq!(row.fine_amount, 0.0);
            assert_eq!(row.due_amount, 0.0);
        }
    }

    #[test]
    fn test_set_improvement_recomputes_derived() {
        let mut draft = draft();
        let id = draft.rows()[0].id.clone();
        assert!(draft.set_improvement_amount(&id, 1000.0));

        let row = &draft.rows()[0];
        assert_eq!(row.improvement_amount, 1000.0);
        assert_eq!(row.fine_amount, 500.0);
        assert_eq!(row.due_amount, 500.0);
    }

    #[test]
    fn test_set_improvement_unknown_row() {
        let mut draft = draft();
        assert!(!draft.set_improvement_amount("لا-وجود", 100.0));
    }

    #[test]
    fn test_set_fine_ignored_under_half_rule() {
        // الحقول المشتقة لا تُعدَّل مباشرة مع القاعدة المعتمدة
        let mut draft = draft();
        let id = draft.rows()[0].id.clone();
        draft.set_improvement_amount(&id, 1000.0);
        assert!(!draft.set_fine_amount(&id, 999.0));
        assert_eq!(draft.rows()[0].fine_amount, 500.0);
    }

    #[test]
    fn test_set_fine_applies_under_additive_rule() {
        let mut draft =
            VoucherDraft::new("2023-10-05".to_string(), DueAmountPolicy::FineOnTop);
        let id = draft.rows()[0].id.clone();
        draft.set_improvement_amount(&id, 1000.0);
        assert!(draft.set_fine_amount(&id, 300.0));

        let row = &draft.rows()[0];
        assert_eq!(row.fine_amount, 300.0);
        assert_eq!(row.due_amount, 1300.0);
    }

    #[test]
    fn test_add_and_remove_row() {
        let mut draft = draft();
        let id = draft.add_row();
        assert_eq!(draft.rows().len(), 4);
        assert!(draft.remove_row(&id));
        assert_eq!(draft.rows().len(), 3);
    }

    #[test]
    fn test_remove_row_refused_at_floor() {
        let mut draft = draft();
        let ids: Vec<String> = draft.rows().iter().map(|r| r.id.clone()).collect();
        assert!(draft.remove_row(&ids[0]));
        assert!(draft.remove_row(&ids[1]));
        // بقي صف واحد — الحذف مرفوض
        assert!(!draft.remove_row(&ids[2]));
        assert_eq!(draft.rows().len(), MIN_ROW_COUNT);
    }

    #[test]
    fn test_summary_follows_rows() {
        let mut draft = draft();
        let ids: Vec<String> = draft.rows().iter().map(|r| r.id.clone()).collect();
        draft.set_improvement_amount(&ids[0], 1000.0);
        draft.set_improvement_amount(&ids[1], 2000.0);

        let summary = draft.summary();
        assert_eq!(summary.total_improvement_amount, 3000.0);
        assert_eq!(summary.total_fine_amount, 1500.0);
        assert_eq!(summary.total_due_amount, 1500.0);
        assert_eq!(summary.total_row_count, 3);
    }

    #[test]
    fn test_validate_requires_location_then_recipient() {
        let mut draft = draft();
        let err = draft.validate().unwrap_err();
        assert!(err.to_string().contains("الموقع"));

        draft.location = "بوابة الشمال".to_string();
        let err = draft.validate().unwrap_err();
        assert!(err.to_string().contains("المستلم"));

        draft.recipient_name = "أحمد محمد".to_string();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_whitespace_only() {
        let mut draft = draft();
        draft.location = "   ".to_string();
        draft.recipient_name = "أحمد".to_string();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_into_record_freezes_totals_and_rows() {
        let mut draft = draft();
        let ids: Vec<String> = draft.rows().iter().map(|r| r.id.clone()).collect();
        draft.set_improvement_amount(&ids[0], 1000.0);
        draft.location = "نقطة الشرق".to_string();
        draft.recipient_name = "محمد علي".to_string();

        let record = draft.into_record(
            "V20231005-4821".to_string(),
            "2023-10-05T14:22:00Z".to_string(),
        );

        assert_eq!(record.voucher_number, "V20231005-4821");
        assert_eq!(record.date, "2023-10-05");
        assert_eq!(record.total_amount, 500.0);
        assert_eq!(record.improvement_amount, 1000.0);
        assert_eq!(record.fine_amount, 500.0);
        assert_eq!(record.rows.len(), 3);
        assert!(!record.id.is_empty());
    }
}
