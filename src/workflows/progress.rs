use crate::workflows::model::{StepStatus, Workflow};
use crate::workflows::transitions::{active_module, workflow_progress};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowProgress {
    pub workflow_id: String,
    pub current_step: usize,
    pub step_count: usize,
    pub percent: u8,
    #[serde(default)]
    pub active_module: Option<String>,
    #[serde(default)]
    pub pending_review: Vec<usize>,
    pub complete: bool,
}

impl WorkflowProgress {
    pub fn of(workflow: &Workflow) -> Self {
        Self {
            workflow_id: workflow.id.clone(),
            current_step: workflow.current_step,
            step_count: workflow.steps.len(),
            percent: workflow_progress(workflow),
            active_module: active_module(workflow).map(str::to_string),
            pending_review: workflow
                .steps
                .iter()
                .enumerate()
                .filter(|(_, step)| step.status == StepStatus::Review)
                .map(|(index, _)| index)
                .collect(),
            complete: workflow.is_complete(),
        }
    }

    pub fn summary(&self) -> String {
        let state = if self.complete {
            "complete".to_string()
        } else if self.pending_review.contains(&self.current_step) {
            format!("review {}/{}", self.current_step + 1, self.step_count)
        } else {
            format!("step {}/{}", self.current_step + 1, self.step_count)
        };
        format!(
            "workflow={} progress={}% state={} module={}",
            self.workflow_id,
            self.percent,
            state,
            self.active_module.as_deref().unwrap_or("none")
        )
    }
}
