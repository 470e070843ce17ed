use omniverse::app::command_handlers::{run_cli, run_cli_with};
use omniverse::app::command_support::CommandContext;
use omniverse::config::{Settings, CONFIG_PATH_ENV};
use omniverse::shared::logging::log_file_path;
use omniverse::templates::TemplateId;
use omniverse::workflows::{StepStatus, Workflow, WorkflowProgress};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn context(log_dir: &Path) -> CommandContext {
    CommandContext {
        settings: Settings::default(),
        log_dir: Some(log_dir.to_path_buf()),
    }
}

fn write_workflow(dir: &Path, workflow: &Workflow) -> PathBuf {
    let path = dir.join("workflow.json");
    fs::write(
        &path,
        serde_json::to_string_pretty(workflow).expect("encode workflow"),
    )
    .expect("write workflow");
    path
}

#[test]
fn app_cli_module_prints_help_and_rejects_unknown_verbs() {
    let dir = tempdir().expect("tempdir");
    let ctx = context(dir.path());
    let help = run_cli_with(&[], &ctx).expect("help");
    assert!(help.contains("step approve"));
    let err = run_cli_with(&args(&["launch"]), &ctx).expect_err("unknown verb");
    assert_eq!(err, "unknown command `launch`");
}

#[test]
fn app_cli_module_lists_and_shows_templates() {
    let dir = tempdir().expect("tempdir");
    let ctx = context(dir.path());
    let listing = run_cli_with(&args(&["templates"]), &ctx).expect("templates");
    assert_eq!(listing.lines().count(), TemplateId::ALL.len());
    assert!(listing.contains("attribution -> response-curves -> optimization"));

    let shown = run_cli_with(&args(&["template", "show", "field-copilot"]), &ctx).expect("show");
    let wf: Workflow = serde_json::from_str(&shown).expect("json workflow");
    assert_eq!(wf, TemplateId::FieldCopilot.instantiate());

    let yaml = run_cli_with(
        &args(&["template", "show", "field-copilot", "--format", "yaml"]),
        &ctx,
    )
    .expect("yaml");
    let wf: Workflow = serde_yaml::from_str(&yaml).expect("yaml workflow");
    assert_eq!(wf.id, "field-copilot");

    let err = run_cli_with(&args(&["template", "show", "nope"]), &ctx).expect_err("unknown");
    assert!(err.contains("unknown workflow template `nope`"));
}

#[test]
fn app_cli_module_detects_workflows_and_audits() {
    let dir = tempdir().expect("tempdir");
    let ctx = context(dir.path());
    let out = run_cli_with(
        &args(&["detect", "How", "should", "I", "allocate", "my", "marketing", "budget?"]),
        &ctx,
    )
    .expect("detect");
    let wf: Workflow = serde_json::from_str(&out).expect("workflow json");
    assert_eq!(wf.id, "engagement-planning");

    let none = run_cli_with(&args(&["detect", "--content", "allocate", "budget"]), &ctx)
        .expect("content detect");
    assert_eq!(none, "no workflow detected");

    let log = fs::read_to_string(log_file_path(dir.path())).expect("audit log");
    assert!(log.contains("detect content=false template=engagement-planning"));
    assert!(log.contains("detect content=true template=none"));
}

#[test]
fn app_cli_module_applies_step_transitions_from_file() {
    let dir = tempdir().expect("tempdir");
    let ctx = context(&dir.path().join("logs"));
    let path = write_workflow(dir.path(), &TemplateId::EngagementPlanning.instantiate());
    let file = path.display().to_string();

    let out = run_cli_with(
        &args(&["step", "approve", &file, "0", "--adjustments", r#"{"digital":0.2}"#]),
        &ctx,
    )
    .expect("approve");
    let wf: Workflow = serde_json::from_str(&out).expect("workflow json");
    assert_eq!(wf.current_step, 1);
    assert_eq!(wf.steps[0].status, StepStatus::Approved);
    assert_eq!(wf.steps[0].user_input, Some(serde_json::json!({"digital": 0.2})));
    assert_eq!(wf.steps[1].status, StepStatus::Active);

    let on_disk: Workflow =
        serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("decode");
    assert_eq!(on_disk.current_step, 0);

    let out = run_cli_with(&args(&["step", "process", &file, "3"]), &ctx).expect("process");
    let wf: Workflow = serde_json::from_str(&out).expect("workflow json");
    assert_eq!(wf.steps[3].status, StepStatus::Review);

    let log = fs::read_to_string(log_file_path(&dir.path().join("logs"))).expect("audit log");
    assert!(log.contains("step.approve workflow=engagement-planning step=0 current_step=1 progress=20%"));
    assert!(log.contains("step.process workflow=engagement-planning step=3"));
}

#[test]
fn app_cli_module_reports_bad_step_input() {
    let dir = tempdir().expect("tempdir");
    let ctx = context(dir.path());
    let path = write_workflow(dir.path(), &TemplateId::CustomerPriority.instantiate());
    let file = path.display().to_string();

    let err = run_cli_with(&args(&["step", "execute", &file, "5"]), &ctx).expect_err("range");
    assert!(err.contains("step index 5 is out of range"));
    let err = run_cli_with(&args(&["step", "execute", &file, "-1"]), &ctx).expect_err("negative");
    assert!(err.contains("invalid step index `-1`"));
    let err = run_cli_with(
        &args(&["step", "approve", &file, "0", "--adjustments", "{oops"]),
        &ctx,
    )
    .expect_err("bad json");
    assert!(err.contains("invalid adjustments json"));
    let err = run_cli_with(&args(&["step", "skip", &file, "0"]), &ctx).expect_err("action");
    assert!(err.contains("unknown step action `skip`"));
}

#[test]
fn app_cli_module_resets_and_reports_progress() {
    let dir = tempdir().expect("tempdir");
    let ctx = context(dir.path());
    let mut wf = TemplateId::ContentPlanning.instantiate();
    wf.steps[0].status = StepStatus::Approved;
    wf.steps[1].status = StepStatus::Active;
    wf.current_step = 1;
    let path = write_workflow(dir.path(), &wf);
    let file = path.display().to_string();

    let out = run_cli_with(&args(&["progress", &file]), &ctx).expect("progress");
    let (summary, body) = out.split_once('\n').expect("summary line");
    assert_eq!(
        summary,
        "workflow=content-planning progress=20% state=step 2/5 module=gap-analysis"
    );
    let progress: WorkflowProgress = serde_json::from_str(body).expect("progress json");
    assert_eq!(progress.percent, 20);

    let out = run_cli_with(&args(&["reset", &file]), &ctx).expect("reset");
    let reset: Workflow = serde_json::from_str(&out).expect("workflow json");
    assert_eq!(reset, TemplateId::ContentPlanning.instantiate());
}

#[test]
fn app_cli_module_rejects_cursor_beyond_steps() {
    let dir = tempdir().expect("tempdir");
    let ctx = context(dir.path());
    let mut wf = TemplateId::FieldSuggestions.instantiate();
    wf.current_step = 9;
    let path = write_workflow(dir.path(), &wf);
    let err = run_cli_with(&args(&["progress", &path.display().to_string()]), &ctx)
        .expect_err("bad cursor");
    assert!(err.contains("currentStep 9 but only 5 steps"));
}

#[test]
fn app_cli_module_rejects_workflow_without_steps() {
    let dir = tempdir().expect("tempdir");
    let ctx = context(dir.path());
    let path = dir.path().join("empty.json");
    fs::write(
        &path,
        r#"{"id":"x","name":"X","description":"","trigger":"","steps":[],"currentStep":0}"#,
    )
    .expect("write workflow");
    let file = path.display().to_string();

    let err = run_cli_with(&args(&["progress", &file]), &ctx).expect_err("no steps");
    assert!(err.contains("workflow `x` has no steps"));
    let err = run_cli_with(&args(&["reset", &file]), &ctx).expect_err("no steps");
    assert!(err.contains("has no steps"));
}

#[test]
fn app_cli_module_rejects_conflicting_active_steps() {
    let dir = tempdir().expect("tempdir");
    let ctx = context(dir.path());
    let mut wf = TemplateId::CustomerPriority.instantiate();
    wf.steps[0].status = StepStatus::Active;
    wf.steps[2].status = StepStatus::Active;
    let path = write_workflow(dir.path(), &wf);
    let err = run_cli_with(&args(&["step", "process", &path.display().to_string(), "1"]), &ctx)
        .expect_err("two active steps");
    assert!(err.contains("more than one active step: [0, 2]"));

    let mut wf = TemplateId::CustomerPriority.instantiate();
    wf.steps[3].status = StepStatus::Active;
    let path = write_workflow(dir.path(), &wf);
    let err = run_cli_with(&args(&["progress", &path.display().to_string()]), &ctx)
        .expect_err("active step off cursor");
    assert!(err.contains("step 3 active but currentStep is 0"));
}

#[test]
fn app_cli_module_accepts_free_form_step_data() {
    let dir = tempdir().expect("tempdir");
    let ctx = context(dir.path());
    let mut wf = TemplateId::EngagementPlanning.instantiate();
    wf.steps[0].data = Some(serde_json::json!({"tools": "MMM Engine", "owner": 7}));
    let path = write_workflow(dir.path(), &wf);

    let out = run_cli_with(&args(&["step", "execute", &path.display().to_string(), "0"]), &ctx)
        .expect("execute");
    let next: Workflow = serde_json::from_str(&out).expect("workflow json");
    assert_eq!(next.steps[0].status, StepStatus::Active);
    assert_eq!(
        next.steps[0].data,
        Some(serde_json::json!({"tools": "MMM Engine", "owner": 7}))
    );
}

// The only test in this file that touches the process environment.
#[test]
fn app_cli_module_skips_settings_for_verbs_that_do_not_use_them() {
    let dir = tempdir().expect("tempdir");
    let config = dir.path().join("config.yaml");
    fs::write(&config, "detection: [unterminated").expect("write config");
    std::env::set_var(CONFIG_PATH_ENV, &config);

    let listing = run_cli(args(&["templates"])).expect("templates");
    assert_eq!(listing.lines().count(), TemplateId::ALL.len());
    run_cli(args(&["template", "show", "customer-priority"])).expect("template show");
    let path = write_workflow(dir.path(), &TemplateId::CustomerPriority.instantiate());
    let out = run_cli(args(&["progress", &path.display().to_string()])).expect("progress");
    assert!(out.starts_with("workflow=customer-priority progress=0%"));

    let err = run_cli(args(&["config", "show"])).expect_err("broken config");
    assert!(err.contains("config.yaml"));
    let err = run_cli(args(&["detect", "allocate", "budget"])).expect_err("broken config");
    assert!(err.contains("config.yaml"));
}
