//! مخزن السندات
//!
//! ملف JSON واحد مرقّم الإصدار في مجلد البيانات. الملف المفقود أو
//! التالف أو مختلف الإصدار يعامل كمخزن فارغ مع تحذير بدل إيقاف
//! البرنامج. العمليتان المطلوبتان: إدراج سند واحد، وقراءة الكل
//! مرتباً بالأحدث أولاً.

use crate::error::{Result, SanadError};
use chrono::NaiveDate;
use rand::Rng;
use sanad_common::VoucherRecord;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

const STORE_FILE_NAME: &str = "vouchers.json";

/// بنية ملف المخزن
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoucherStore {
    /// الإصدار (لفحص التوافق)
    version: u32,
    /// السندات المحفوظة
    vouchers: Vec<VoucherRecord>,
}

impl VoucherStore {
    const CURRENT_VERSION: u32 = 1;

    /// مسار ملف المخزن داخل مجلد البيانات
    pub fn store_path(dir: &Path) -> std::path::PathBuf {
        dir.join(STORE_FILE_NAME)
    }

    /// قراءة المخزن من المجلد
    pub fn load(dir: &Path) -> Self {
        let store_path = Self::store_path(dir);
        if !store_path.exists() {
            return Self::default();
        }

        let file = match File::open(&store_path) {
            Ok(f) => f,
            Err(_) => return Self::default(),
        };

        let reader = BufReader::new(file);
        match serde_json::from_reader(reader) {
            Ok(store) => {
                let store: VoucherStore = store;
                // فحص الإصدار
                if store.version != Self::CURRENT_VERSION {
                    eprintln!("إصدار مخزن السندات غير متوافق، سيُنشأ مخزن جديد");
                    return Self::default();
                }
                store
            }
            Err(_) => {
                eprintln!("تعذرت قراءة مخزن السندات، سيُنشأ مخزن جديد");
                Self::default()
            }
        }
    }

    /// حفظ المخزن في المجلد
    pub fn save(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir)?;
        let store_path = Self::store_path(dir);
        let file = File::create(&store_path)
            .map_err(|e| SanadError::Store(format!("تعذر إنشاء {}: {}", store_path.display(), e)))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// إدراج سند جديد
    pub fn insert(&mut self, record: VoucherRecord) {
        self.vouchers.push(record);
    }

    /// كل السندات مرتبة بالأحدث أولاً
    pub fn list_recent(&self) -> Vec<VoucherRecord> {
        let mut records = self.vouchers.clone();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records
    }

    /// البحث عن سند برقمه
    pub fn find_by_number(&self, voucher_number: &str) -> Option<&VoucherRecord> {
        self.vouchers
            .iter()
            .find(|r| r.voucher_number == voucher_number)
    }

    pub fn len(&self) -> usize {
        self.vouchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vouchers.is_empty()
    }
}

impl Default for VoucherStore {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            vouchers: Vec::new(),
        }
    }
}

/// توليد رقم سند: V + التاريخ + لاحقة عشوائية من ٤ أرقام
///
/// التفرد تقديري وغير مضمون — لا فحص للتصادمات.
pub fn generate_voucher_number(date: NaiveDate) -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..10_000);
    format!("V{}-{:04}", date.format("%Y%m%d"), suffix)
}
