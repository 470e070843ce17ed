pub mod detection;
pub mod error;
pub mod model;
pub mod progress;
pub mod transitions;

pub use detection::{
    classify, classify_content, detect_content_workflow, detect_workflow, Detector,
};
pub use error::WorkflowError;
pub use model::{AgentKind, BrandContext, StepStatus, Workflow, WorkflowStep};
pub use progress::WorkflowProgress;
pub use transitions::{
    active_module, approve_module_step, execute_workflow_step, process_module_step,
    reset_workflow, try_approve_module_step, try_execute_workflow_step, try_process_module_step,
    workflow_progress,
};
