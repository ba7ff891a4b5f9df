use thiserror::Error;

#[derive(Error, Debug)]
pub enum SanadError {
    #[error("خطأ في الإعدادات: {0}")]
    Config(String),

    #[error("يجب تسجيل الدخول أولاً. استخدم `sanad login <اسم المستخدم>`")]
    NotLoggedIn,

    #[error("اسم المستخدم أو كلمة المرور غير صحيحة")]
    InvalidCredentials,

    #[error("السند غير موجود: {0}")]
    VoucherNotFound(String),

    #[error("تاريخ غير صالح: {0} (الصيغة المطلوبة YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("حقل مطلوب: {0}")]
    Validation(String),

    #[error("خطأ في مخزن السندات: {0}")]
    Store(String),

    #[error("خطأ في توليد PDF: {0}")]
    PdfGeneration(String),

    #[error("خطأ في توليد Excel: {0}")]
    ExcelGeneration(String),

    #[error("خطأ في الإدخال التفاعلي: {0}")]
    Prompt(String),

    #[error("خطأ JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("خطأ إدخال/إخراج: {0}")]
    Io(#[from] std::io::Error),
}

impl From<sanad_common::Error> for SanadError {
    fn from(err: sanad_common::Error) -> Self {
        match err {
            sanad_common::Error::Io(e) => SanadError::Io(e),
            sanad_common::Error::Json(e) => SanadError::JsonParse(e),
            sanad_common::Error::Validation(msg) => SanadError::Validation(msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, SanadError>;
