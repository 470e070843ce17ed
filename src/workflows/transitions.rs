//! Pure transitions over [`Workflow`] values.
//!
//! Every mutator borrows its input and returns a fresh aggregate, so a caller
//! holding the previous value never observes a change. The `try_*` variants
//! report an out-of-range index; the plain variants log it and hand back an
//! unchanged copy.

use crate::workflows::error::WorkflowError;
use crate::workflows::model::{StepStatus, Workflow};
use serde_json::Value;

fn check_index(workflow: &Workflow, step_index: usize) -> Result<(), WorkflowError> {
    if step_index < workflow.steps.len() {
        return Ok(());
    }
    Err(WorkflowError::StepIndexOutOfRange {
        workflow_id: workflow.id.clone(),
        step_index,
        step_count: workflow.steps.len(),
    })
}

fn or_unchanged(
    workflow: &Workflow,
    operation: &str,
    result: Result<Workflow, WorkflowError>,
) -> Workflow {
    match result {
        Ok(next) => next,
        Err(err) => {
            tracing::warn!(
                workflow_id = %workflow.id,
                operation,
                error = %err,
                "ignoring workflow transition"
            );
            workflow.clone()
        }
    }
}

/// Marks `step_index` active and moves the cursor there. Only one step is ever
/// active; any other active step goes back to pending.
fn activate(workflow: &mut Workflow, step_index: usize) {
    for (index, step) in workflow.steps.iter_mut().enumerate() {
        if index != step_index && step.status == StepStatus::Active {
            step.status = StepStatus::Pending;
        }
    }
    workflow.steps[step_index].status = StepStatus::Active;
    workflow.current_step = step_index;
}

pub fn try_execute_workflow_step(
    workflow: &Workflow,
    step_index: usize,
) -> Result<Workflow, WorkflowError> {
    check_index(workflow, step_index)?;
    let mut next = workflow.clone();
    activate(&mut next, step_index);
    Ok(next)
}

pub fn execute_workflow_step(workflow: &Workflow, step_index: usize) -> Workflow {
    or_unchanged(
        workflow,
        "execute",
        try_execute_workflow_step(workflow, step_index),
    )
}

pub fn try_process_module_step(
    workflow: &Workflow,
    step_index: usize,
) -> Result<Workflow, WorkflowError> {
    check_index(workflow, step_index)?;
    let mut next = workflow.clone();
    next.steps[step_index].status = StepStatus::Review;
    Ok(next)
}

/// Puts a step into human review. The cursor does not move.
pub fn process_module_step(workflow: &Workflow, step_index: usize) -> Workflow {
    or_unchanged(
        workflow,
        "process",
        try_process_module_step(workflow, step_index),
    )
}

pub fn try_approve_module_step(
    workflow: &Workflow,
    step_index: usize,
    adjustments: Option<Value>,
) -> Result<Workflow, WorkflowError> {
    check_index(workflow, step_index)?;
    let mut next = workflow.clone();
    let step = &mut next.steps[step_index];
    step.status = StepStatus::Approved;
    if let Some(adjustments) = adjustments {
        step.user_input = Some(adjustments);
    }
    if step_index + 1 < next.steps.len() {
        activate(&mut next, step_index + 1);
    }
    Ok(next)
}

/// Approves a step, optionally recording the reviewer's adjustments, and hands
/// control to the following step. Approving the last step leaves the cursor
/// where it is.
pub fn approve_module_step(
    workflow: &Workflow,
    step_index: usize,
    adjustments: Option<Value>,
) -> Workflow {
    or_unchanged(
        workflow,
        "approve",
        try_approve_module_step(workflow, step_index, adjustments),
    )
}

pub fn reset_workflow(workflow: &Workflow) -> Workflow {
    let mut next = workflow.clone();
    next.current_step = 0;
    for step in &mut next.steps {
        step.status = StepStatus::Pending;
        step.user_input = None;
        step.output = None;
    }
    next
}

pub fn active_module(workflow: &Workflow) -> Option<&str> {
    workflow.current()?.module.as_deref()
}

/// Percentage of approved or completed steps, rounded half up.
pub fn workflow_progress(workflow: &Workflow) -> u8 {
    let total = workflow.steps.len();
    if total == 0 {
        return 0;
    }
    let done = workflow
        .steps
        .iter()
        .filter(|step| step.status.is_done())
        .count();
    ((200 * done + total) / (2 * total)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::model::{AgentKind, WorkflowStep};

    fn step(module: &str) -> WorkflowStep {
        WorkflowStep {
            agent: AgentKind::Engagement,
            action: format!("{module} action"),
            status: StepStatus::Pending,
            module: Some(module.to_string()),
            reasoning: Vec::new(),
            data: None,
            user_input: None,
            output: None,
        }
    }

    fn workflow(modules: &[&str]) -> Workflow {
        Workflow {
            id: "sample".to_string(),
            name: "Sample".to_string(),
            description: "sample workflow".to_string(),
            trigger: "sample".to_string(),
            steps: modules.iter().map(|module| step(module)).collect(),
            current_step: 0,
            brand_context: None,
        }
    }

    #[test]
    fn progress_rounds_half_up() {
        let mut wf = workflow(&["a", "b", "c"]);
        assert_eq!(workflow_progress(&wf), 0);
        wf.steps[0].status = StepStatus::Approved;
        assert_eq!(workflow_progress(&wf), 33);
        wf.steps[1].status = StepStatus::Completed;
        assert_eq!(workflow_progress(&wf), 67);

        let mut eight = workflow(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        eight.steps[0].status = StepStatus::Approved;
        assert_eq!(workflow_progress(&eight), 13);
    }

    #[test]
    fn progress_of_empty_workflow_is_zero() {
        assert_eq!(workflow_progress(&workflow(&[])), 0);
        assert_eq!(active_module(&workflow(&[])), None);
    }

    #[test]
    fn execute_clears_previously_active_step() {
        let wf = execute_workflow_step(&workflow(&["a", "b", "c"]), 0);
        let wf = execute_workflow_step(&wf, 2);
        assert_eq!(wf.steps[0].status, StepStatus::Pending);
        assert_eq!(wf.steps[2].status, StepStatus::Active);
        assert_eq!(wf.current_step, 2);
        assert_eq!(wf.active_index(), Some(2));
    }

    #[test]
    fn try_variants_report_out_of_range_index() {
        let wf = workflow(&["a"]);
        let err = try_process_module_step(&wf, 1).expect_err("index 1 is out of range");
        assert_eq!(
            err,
            WorkflowError::StepIndexOutOfRange {
                workflow_id: "sample".to_string(),
                step_index: 1,
                step_count: 1,
            }
        );
    }
}
