#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WorkflowError {
    #[error(
        "step index {step_index} is out of range for workflow `{workflow_id}` with {step_count} steps"
    )]
    StepIndexOutOfRange {
        workflow_id: String,
        step_index: usize,
        step_count: usize,
    },
    #[error("unknown workflow template `{0}`")]
    UnknownTemplate(String),
    #[error("workflow `{0}` has no steps")]
    NoSteps(String),
    #[error("workflow `{workflow_id}` has currentStep {current_step} but only {step_count} steps")]
    CursorOutOfRange {
        workflow_id: String,
        current_step: usize,
        step_count: usize,
    },
    #[error("workflow `{workflow_id}` has more than one active step: {indices:?}")]
    MultipleActiveSteps {
        workflow_id: String,
        indices: Vec<usize>,
    },
    #[error("workflow `{workflow_id}` has step {active} active but currentStep is {current_step}")]
    ActiveStepOffCursor {
        workflow_id: String,
        active: usize,
        current_step: usize,
    },
}
