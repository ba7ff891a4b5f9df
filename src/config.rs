use crate::error::{Result, SanadError};
use sanad_common::DueAmountPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// اسم الجهة — يظهر في ترويسة الطباعة
    pub organization_name: String,

    /// قاعدة المبلغ المستحق (half / additive)
    pub due_rule: String,

    /// مجلد حفظ السندات (الافتراضي مجلد بيانات النظام)
    pub data_dir: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SanadError::Config("تعذر العثور على مجلد المستخدم".into()))?;
        Ok(home.join(".config").join("sanad").join("config.json"))
    }

    /// مجلد حفظ السندات الفعلي
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let base = dirs::data_dir()
            .ok_or_else(|| SanadError::Config("تعذر العثور على مجلد البيانات".into()))?;
        Ok(base.join("sanad"))
    }

    /// قاعدة المبلغ المستحق المفعّلة
    ///
    /// القيمة غير المعروفة ترجع القاعدة المعتمدة (٥٠٪) بدل الفشل.
    pub fn due_policy(&self) -> DueAmountPolicy {
        self.due_rule.parse().unwrap_or_default()
    }

    pub fn set_due_rule(&mut self, rule: &str) -> Result<()> {
        let policy: DueAmountPolicy = rule
            .parse()
            .map_err(|e: String| SanadError::Config(e))?;
        self.due_rule = policy.to_string();
        self.save()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            organization_name: "صندوق تنمية الخدمات م/شبوة".to_string(),
            due_rule: DueAmountPolicy::default().to_string(),
            data_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.organization_name.contains("صندوق"));
        assert_eq!(config.due_rule, "half");
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_due_policy_parsing() {
        let mut config = Config::default();
        assert_eq!(config.due_policy(), DueAmountPolicy::HalfOfImprovement);

        config.due_rule = "additive".to_string();
        assert_eq!(config.due_policy(), DueAmountPolicy::FineOnTop);

        // القيمة غير المعروفة ترجع القاعدة المعتمدة
        config.due_rule = "غير معروف".to_string();
        assert_eq!(config.due_policy(), DueAmountPolicy::HalfOfImprovement);
    }

    #[test]
    fn test_config_roundtrip_json() {
        let config = Config {
            organization_name: "جهة تجريبية".to_string(),
            due_rule: "additive".to_string(),
            data_dir: Some(PathBuf::from("/tmp/sanad")),
        };
        let json = serde_json::to_string(&config).expect("فشل التحويل إلى JSON");
        let restored: Config = serde_json::from_str(&json).expect("فشل التحويل من JSON");
        assert_eq!(restored.organization_name, "جهة تجريبية");
        assert_eq!(restored.due_policy(), DueAmountPolicy::FineOnTop);
        assert_eq!(restored.data_dir, Some(PathBuf::from("/tmp/sanad")));
    }
}
