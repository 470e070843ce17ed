use crate::app::command_support::{render_workflow, CommandContext, OutputFormat};
use crate::workflows::Detector;

pub fn cmd_detect(args: &[String], context: &CommandContext) -> Result<String, String> {
    let (content_only, words) = match args.first().map(String::as_str) {
        Some("--content") => (true, &args[1..]),
        _ => (false, args),
    };
    if words.is_empty() {
        return Err("usage: detect [--content] <query...>".to_string());
    }
    let query = words.join(" ");
    let detector = Detector::from_settings(&context.settings.detection);
    let detected = if content_only {
        detector.classify_content(&query)
    } else {
        detector.classify(&query)
    };

    context.audit(
        "detect",
        &[
            ("content", content_only.to_string()),
            (
                "template",
                detected
                    .map(|id| id.as_str().to_string())
                    .unwrap_or_else(|| "none".to_string()),
            ),
        ],
    );

    match detected {
        Some(id) => render_workflow(&id.instantiate(), OutputFormat::Json),
        None => Ok("no workflow detected".to_string()),
    }
}
