use crate::app::command_support::{
    parse_step_index, read_workflow, render_workflow, CommandContext, OutputFormat,
};
use crate::workflows::{
    reset_workflow, try_approve_module_step, try_execute_workflow_step, try_process_module_step,
    Workflow, WorkflowProgress,
};
use serde_json::Value;
use std::path::Path;

const STEP_USAGE: &str =
    "usage: step <execute|process|approve> <file> <index> [--adjustments <json>]";

fn parse_adjustments(args: &[String]) -> Result<Option<Value>, String> {
    match args {
        [] => Ok(None),
        [flag, raw] if flag == "--adjustments" => serde_json::from_str(raw)
            .map(Some)
            .map_err(|e| format!("invalid adjustments json: {e}")),
        _ => Err(STEP_USAGE.to_string()),
    }
}

fn audit_transition(context: &CommandContext, event: &str, workflow: &Workflow, index: usize) {
    let progress = WorkflowProgress::of(workflow);
    context.audit(
        event,
        &[
            ("workflow", workflow.id.clone()),
            ("step", index.to_string()),
            ("current_step", workflow.current_step.to_string()),
            ("progress", format!("{}%", progress.percent)),
        ],
    );
}

pub fn cmd_step(args: &[String], context: &CommandContext) -> Result<String, String> {
    if args.len() < 3 {
        return Err(STEP_USAGE.to_string());
    }
    let workflow = read_workflow(Path::new(&args[1]))?;
    let index = parse_step_index(&args[2])?;

    let next = match args[0].as_str() {
        "execute" | "process" if args.len() != 3 => return Err(STEP_USAGE.to_string()),
        "execute" => try_execute_workflow_step(&workflow, index),
        "process" => try_process_module_step(&workflow, index),
        "approve" => {
            let adjustments = parse_adjustments(&args[3..])?;
            try_approve_module_step(&workflow, index, adjustments)
        }
        other => return Err(format!("unknown step action `{other}`\n{STEP_USAGE}")),
    }
    .map_err(|e| e.to_string())?;

    audit_transition(context, &format!("step.{}", args[0]), &next, index);
    render_workflow(&next, OutputFormat::Json)
}

pub fn cmd_reset(args: &[String], context: &CommandContext) -> Result<String, String> {
    if args.len() != 1 {
        return Err("usage: reset <file>".to_string());
    }
    let workflow = read_workflow(Path::new(&args[0]))?;
    let next = reset_workflow(&workflow);
    context.audit("reset", &[("workflow", next.id.clone())]);
    render_workflow(&next, OutputFormat::Json)
}

pub fn cmd_progress(args: &[String]) -> Result<String, String> {
    if args.len() != 1 {
        return Err("usage: progress <file>".to_string());
    }
    let workflow = read_workflow(Path::new(&args[0]))?;
    let progress = WorkflowProgress::of(&workflow);
    let body = serde_json::to_string_pretty(&progress)
        .map_err(|e| format!("failed to encode progress: {e}"))?;
    Ok(format!("{}\n{body}", progress.summary()))
}
