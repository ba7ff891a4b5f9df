//! سياق الجلسة
//!
//! حالة تسجيل الدخول ككائن صريح بدل حالة عامة: تُفحص الجلسة المحفوظة
//! عند بدء التشغيل، وتُمسح صراحة عند تسجيل الخروج. التحقق من بيانات
//! الدخول محاكاة محلية وليس مصادقة حقيقية.

use crate::error::{Result, SanadError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const SESSION_FILE_NAME: &str = "session.json";

/// المستخدم التجريبي الوحيد
const MOCK_USERNAME: &str = "admin";
const MOCK_PASSWORD: &str = "password";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    /// الاسم المعروض
    pub name: String,
}

/// جلسة مستخدم محفوظة
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user: User,
    /// وقت تسجيل الدخول بصيغة RFC3339
    pub logged_in_at: String,
}

impl Session {
    pub fn session_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SanadError::Config("تعذر العثور على مجلد المستخدم".into()))?;
        Ok(home.join(".config").join("sanad").join(SESSION_FILE_NAME))
    }

    /// فحص الجلسة المحفوظة عند بدء التشغيل
    ///
    /// الملف التالف يُمسح بدل إفشال التشغيل.
    pub fn load() -> Option<Self> {
        let path = Self::session_path().ok()?;
        if !path.exists() {
            return None;
        }

        let content = std::fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&content) {
            Ok(session) => Some(session),
            Err(_) => {
                let _ = std::fs::remove_file(&path);
                None
            }
        }
    }

    fn save(&self) -> Result<()> {
        let path = Self::session_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

/// تسجيل الدخول — يتحقق من بيانات الدخول ويحفظ الجلسة
pub fn login(username: &str, password: &str) -> Result<Session> {
    if !check_credentials(username, password) {
        return Err(SanadError::InvalidCredentials);
    }

    let session = Session {
        user: User {
            id: "1".to_string(),
            username: username.to_string(),
            name: "مدير النظام".to_string(),
        },
        logged_in_at: chrono::Utc::now().to_rfc3339(),
    };
    session.save()?;
    Ok(session)
}

/// تسجيل الخروج — يمسح الجلسة المحفوظة
///
/// يرجع true إن كانت هناك جلسة فعلاً.
pub fn logout() -> Result<bool> {
    let path = Session::session_path()?;
    if path.exists() {
        std::fs::remove_file(&path)?;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// الجلسة الحالية أو خطأ يطلب تسجيل الدخول
pub fn require_login() -> Result<Session> {
    Session::load().ok_or(SanadError::NotLoggedIn)
}

fn check_credentials(username: &str, password: &str) -> bool {
    username == MOCK_USERNAME && password == MOCK_PASSWORD
}
