use crate::config::{default_state_root, load_global_settings, ConfigError, Settings};
use crate::shared::logging::{append_log_line, format_log_line};
use crate::workflows::Workflow;
use std::fs;
use std::path::{Path, PathBuf};

/// Everything a command handler needs from the environment.
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    pub settings: Settings,
    /// Audit log directory. `None` disables the audit log.
    pub log_dir: Option<PathBuf>,
}

impl CommandContext {
    pub fn from_environment() -> Result<Self, String> {
        let settings = load_global_settings().map_err(map_config_err)?;
        let log_dir = match default_state_root() {
            Ok(state_root) => Some(settings.resolve_log_dir(&state_root)),
            Err(_) => settings.log_dir.clone(),
        };
        Ok(Self { settings, log_dir })
    }

    /// Appends an audit line. Logging failures never fail the command.
    pub fn audit(&self, event: &str, fields: &[(&str, String)]) {
        let Some(log_dir) = self.log_dir.as_deref() else {
            return;
        };
        if let Err(err) = append_log_line(log_dir, &format_log_line(event, fields)) {
            tracing::warn!(
                log_dir = %log_dir.display(),
                error = %err,
                "failed to append audit log line"
            );
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn parse(raw: &str) -> Result<Self, String> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err("format must be one of: json, yaml".to_string()),
        }
    }

    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

pub fn map_config_err(err: ConfigError) -> String {
    err.to_string()
}

pub fn read_workflow(path: &Path) -> Result<Workflow, String> {
    let raw =
        fs::read_to_string(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let workflow: Workflow = match OutputFormat::for_path(path) {
        OutputFormat::Json => serde_json::from_str(&raw)
            .map_err(|e| format!("failed to parse {}: {e}", path.display()))?,
        OutputFormat::Yaml => serde_yaml::from_str(&raw)
            .map_err(|e| format!("failed to parse {}: {e}", path.display()))?,
    };
    workflow
        .validate()
        .map_err(|e| format!("invalid workflow in {}: {e}", path.display()))?;
    Ok(workflow)
}

pub fn render_workflow(workflow: &Workflow, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(workflow)
            .map_err(|e| format!("failed to encode workflow: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(workflow).map_err(|e| format!("failed to encode workflow: {e}"))
        }
    }
}

pub fn parse_step_index(raw: &str) -> Result<usize, String> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| format!("invalid step index `{raw}`; expected a non-negative integer"))
}
