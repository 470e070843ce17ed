use crate::app::command_support::{render_workflow, OutputFormat};
use crate::templates::TemplateId;

pub fn cmd_templates(args: &[String]) -> Result<String, String> {
    if !args.is_empty() {
        return Err("usage: templates".to_string());
    }
    Ok(TemplateId::ALL
        .iter()
        .map(|id| {
            let template = id.template();
            format!(
                "{:<22} {} ({})",
                id.as_str(),
                template.name,
                template.modules().join(" -> ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn cmd_template(args: &[String]) -> Result<String, String> {
    let usage = "usage: template show <id> [--format json|yaml]";
    if args.len() < 2 || args[0] != "show" {
        return Err(usage.to_string());
    }
    let id = TemplateId::parse(&args[1]).map_err(|e| e.to_string())?;
    let format = match &args[2..] {
        [] => OutputFormat::Json,
        [flag, value] if flag == "--format" => OutputFormat::parse(value)?,
        _ => return Err(usage.to_string()),
    };
    render_workflow(&id.instantiate(), format)
}
