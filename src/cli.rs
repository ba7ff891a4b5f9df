use clap::{Parser, Subcommand};
use sanad_common::SearchMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sanad")]
#[command(about = "نظام سندات صرف كرت تحصيل الغرامة", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// إخراج تفاصيل إضافية
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// تسجيل الدخول إلى النظام
    Login {
        /// اسم المستخدم
        #[arg(required = true)]
        username: String,

        /// كلمة المرور (تُطلب تفاعلياً إن لم تُمرر)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// تسجيل الخروج ومسح الجلسة
    Logout,

    /// إنشاء سند صرف جديد (إدخال تفاعلي)
    New {
        /// تاريخ السند (YYYY-MM-DD، الافتراضي اليوم)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// عرض السندات والبحث فيها
    List {
        /// نوع البحث (date / voucher / card / recipient)
        #[arg(short, long, default_value = "voucher")]
        mode: SearchMode,

        /// نص البحث (فارغ = عرض الكل)
        #[arg(short, long)]
        query: Option<String>,
    },

    /// عرض تفاصيل سند واحد
    Show {
        /// رقم السند
        #[arg(required = true)]
        voucher_number: String,
    },

    /// طباعة سند أو تصدير قائمة السندات
    Export {
        /// رقم السند (مطلوب لتصدير PDF)
        voucher_number: Option<String>,

        /// صيغة الإخراج (pdf / excel / both)
        #[arg(short, long, default_value = "pdf")]
        format: ExportFormat,

        /// ملف أو مجلد الإخراج
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// عرض أو تعديل الإعدادات
    Config {
        /// تعيين اسم الجهة (يظهر في ترويسة الطباعة)
        #[arg(long)]
        set_organization: Option<String>,

        /// تعيين قاعدة المبلغ المستحق (half / additive)
        #[arg(long)]
        set_due_rule: Option<String>,

        /// عرض الإعدادات
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default)]
pub enum ExportFormat {
    #[default]
    Pdf,
    Excel,
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use pdf, excel, or both", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Pdf => write!(f, "pdf"),
            ExportFormat::Excel => write!(f, "excel"),
            ExportFormat::Both => write!(f, "both"),
        }
    }
}
