//! حساب المبالغ المشتقة وملخص السند
//!
//! القاعدة المعتمدة: مبلغ الغرامة نصف مبلغ التحسين، والمبلغ المستحق
//! يساوي مبلغ الغرامة. القاعدة القديمة (الجمعية) محفوظة كخيار مسمى
//! قابل للاختيار من الإعدادات.

use crate::types::{VoucherRow, VoucherSummary};

/// قاعدة اشتقاق مبلغ الغرامة والمبلغ المستحق
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DueAmountPolicy {
    /// القاعدة المعتمدة: الغرامة = ٥٠٪ من التحسين، المستحق = الغرامة
    #[default]
    HalfOfImprovement,
    /// القاعدة القديمة: الغرامة تُدخل يدوياً، المستحق = التحسين + الغرامة
    FineOnTop,
}

impl DueAmountPolicy {
    /// اشتقاق (مبلغ الغرامة، المبلغ المستحق) من مبالغ الصف
    ///
    /// المبالغ السالبة أو غير المنتهية تُصفَّر قبل الحساب.
    pub fn derive(&self, improvement_amount: f64, fine_amount: f64) -> (f64, f64) {
        let improvement = clamp_amount(improvement_amount);
        match self {
            DueAmountPolicy::HalfOfImprovement => {
                let fine = improvement * 0.5;
                (fine, fine)
            }
            DueAmountPolicy::FineOnTop => {
                let fine = clamp_amount(fine_amount);
                (fine, improvement + fine)
            }
        }
    }
}

impl std::str::FromStr for DueAmountPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "half" => Ok(DueAmountPolicy::HalfOfImprovement),
            "additive" => Ok(DueAmountPolicy::FineOnTop),
            _ => Err(format!("Unknown due rule: {}. Use half or additive", s)),
        }
    }
}

impl std::fmt::Display for DueAmountPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DueAmountPolicy::HalfOfImprovement => write!(f, "half"),
            DueAmountPolicy::FineOnTop => write!(f, "additive"),
        }
    }
}

/// اشتقاق المبالغ بالقاعدة المعتمدة (٥٠٪)
///
/// دالة نقية بلا آثار جانبية، ونتيجتها متطابقة عند تكرار الاستدعاء.
pub fn compute_derived_amounts(improvement_amount: f64) -> (f64, f64) {
    DueAmountPolicy::HalfOfImprovement.derive(improvement_amount, 0.0)
}

/// حساب ملخص السند من الصفوف الحالية
///
/// تمريرة واحدة على الصفوف؛ المدخل الفارغ يعطي ملخصاً صفرياً.
pub fn calculate_summary(rows: &[VoucherRow]) -> VoucherSummary {
    rows.iter().fold(
        VoucherSummary {
            total_row_count: rows.len(),
            ..Default::default()
        },
        |summary, row| VoucherSummary {
            total_improvement_amount: summary.total_improvement_amount + row.improvement_amount,
            total_fine_amount: summary.total_fine_amount + row.fine_amount,
            total_due_amount: summary.total_due_amount + row.due_amount,
            total_row_count: summary.total_row_count,
        },
    )
}

/// تصفير المبالغ السالبة أو غير الصالحة
fn clamp_amount(amount: f64) -> f64 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}
