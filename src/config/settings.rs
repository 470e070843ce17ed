use super::ConfigError;
use crate::templates::TemplateId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DetectionSettings {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra_keywords: BTreeMap<TemplateId, Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disabled: Vec<TemplateId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
    #[serde(default)]
    pub detection: DetectionSettings,
}

impl Settings {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn to_yaml(&self, path: &Path) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|source| ConfigError::Encode {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(log_dir) = &self.log_dir {
            if !log_dir.is_absolute() {
                return Err(ConfigError::Settings(
                    "`log_dir` must be an absolute path".to_string(),
                ));
            }
        }
        for (id, keywords) in &self.detection.extra_keywords {
            if self.detection.disabled.contains(id) {
                return Err(ConfigError::Settings(format!(
                    "template `{id}` is disabled but also has extra keywords"
                )));
            }
            if keywords.iter().any(|keyword| keyword.trim().is_empty()) {
                return Err(ConfigError::Settings(format!(
                    "extra keywords for `{id}` must be non-empty"
                )));
            }
        }
        Ok(())
    }

    /// Directory for the audit log: `log_dir` when configured, else `<state_root>/logs`.
    pub fn resolve_log_dir(&self, state_root: &Path) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| state_root.join("logs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn settings_parse_template_keyed_detection_overrides() {
        let settings: Settings = serde_yaml::from_str(
            r#"
detection:
  extra_keywords:
    engagement-planning: ["spend plan"]
  disabled: [field-copilot]
"#,
        )
        .expect("parse settings");
        assert_eq!(
            settings.detection.extra_keywords[&TemplateId::EngagementPlanning],
            vec!["spend plan".to_string()]
        );
        assert_eq!(settings.detection.disabled, vec![TemplateId::FieldCopilot]);
        settings.validate().expect("valid settings");
    }

    #[test]
    fn unknown_template_key_is_a_parse_error() {
        let err = serde_yaml::from_str::<Settings>(
            r#"
detection:
  disabled: [budget-wizard]
"#,
        )
        .expect_err("unknown template");
        assert!(err.to_string().contains("invalid workflow template id"));
    }

    #[test]
    fn validation_rejects_blank_keywords_and_conflicts() {
        let mut settings = Settings::default();
        settings
            .detection
            .extra_keywords
            .insert(TemplateId::ContentPlanning, vec!["  ".to_string()]);
        assert!(settings.validate().is_err());

        settings
            .detection
            .extra_keywords
            .insert(TemplateId::ContentPlanning, vec!["asset review".to_string()]);
        settings.validate().expect("valid keyword");
        settings.detection.disabled.push(TemplateId::ContentPlanning);
        let err = settings.validate().expect_err("conflict");
        assert!(err.to_string().contains("content-planning"));
    }

    #[test]
    fn relative_log_dir_is_rejected() {
        let settings = Settings {
            log_dir: Some(PathBuf::from("logs")),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn log_dir_defaults_under_state_root() {
        let temp = tempdir().expect("tempdir");
        let settings = Settings::default();
        assert_eq!(
            settings.resolve_log_dir(temp.path()),
            temp.path().join("logs")
        );
    }
}
