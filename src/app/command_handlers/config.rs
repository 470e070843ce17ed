use crate::app::command_support::{map_config_err, CommandContext};
use crate::config::default_global_config_path;

pub fn cmd_config(args: &[String], context: &CommandContext) -> Result<String, String> {
    match args {
        [verb] if verb == "show" => {
            let path = default_global_config_path().map_err(map_config_err)?;
            let body = context.settings.to_yaml(&path).map_err(map_config_err)?;
            let log_dir = context
                .log_dir
                .as_ref()
                .map(|dir| dir.display().to_string())
                .unwrap_or_else(|| "disabled".to_string());
            Ok(format!(
                "config={}\naudit_log_dir={log_dir}\n{body}",
                path.display()
            ))
        }
        _ => Err("usage: config show".to_string()),
    }
}
