use crate::workflows::error::WorkflowError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentKind {
    Customer,
    Engagement,
    ContentPlanning,
    ContentGeneration,
    ContentApproval,
    Orchestration,
    Activation,
    Suggestions,
    Copilot,
}

impl AgentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Engagement => "engagement",
            Self::ContentPlanning => "content-planning",
            Self::ContentGeneration => "content-generation",
            Self::ContentApproval => "content-approval",
            Self::Orchestration => "orchestration",
            Self::Activation => "activation",
            Self::Suggestions => "suggestions",
            Self::Copilot => "copilot",
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    #[default]
    Pending,
    Active,
    Completed,
    Review,
    Approved,
}

impl StepStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Review => "review",
            Self::Approved => "approved",
        }
    }

    /// Statuses that count toward workflow progress.
    pub fn is_done(self) -> bool {
        matches!(self, Self::Approved | Self::Completed)
    }
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStep {
    pub agent: AgentKind,
    pub action: String,
    #[serde(default)]
    pub status: StepStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(default)]
    pub reasoning: Vec<String>,
    /// Free-form descriptive payload. Templates put `tools` and `metrics`
    /// here; nothing in the state machine reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_input: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandContext {
    pub therapeutic_area: String,
    pub brand_name: String,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub trigger: String,
    pub steps: Vec<WorkflowStep>,
    #[serde(default)]
    pub current_step: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_context: Option<BrandContext>,
}

impl Workflow {
    pub fn step(&self, index: usize) -> Option<&WorkflowStep> {
        self.steps.get(index)
    }

    pub fn current(&self) -> Option<&WorkflowStep> {
        self.steps.get(self.current_step)
    }

    /// Index of the step currently marked `active`, if any.
    pub fn active_index(&self) -> Option<usize> {
        self.steps
            .iter()
            .position(|step| step.status == StepStatus::Active)
    }

    /// A workflow is complete once every step is approved or completed.
    /// Empty workflows are never complete.
    pub fn is_complete(&self) -> bool {
        !self.steps.is_empty() && self.steps.iter().all(|step| step.status.is_done())
    }

    /// Checks the cursor and single-active invariants. Workflows built by
    /// templates and transitions always pass; files read from disk may not.
    pub fn validate(&self) -> Result<(), WorkflowError> {
        if self.steps.is_empty() {
            return Err(WorkflowError::NoSteps(self.id.clone()));
        }
        if self.current_step >= self.steps.len() {
            return Err(WorkflowError::CursorOutOfRange {
                workflow_id: self.id.clone(),
                current_step: self.current_step,
                step_count: self.steps.len(),
            });
        }
        let active: Vec<usize> = self
            .steps
            .iter()
            .enumerate()
            .filter(|(_, step)| step.status == StepStatus::Active)
            .map(|(index, _)| index)
            .collect();
        if active.len() > 1 {
            return Err(WorkflowError::MultipleActiveSteps {
                workflow_id: self.id.clone(),
                indices: active,
            });
        }
        match active.first() {
            Some(&index) if index != self.current_step => {
                Err(WorkflowError::ActiveStepOffCursor {
                    workflow_id: self.id.clone(),
                    active: index,
                    current_step: self.current_step,
                })
            }
            _ => Ok(()),
        }
    }

    pub fn with_brand_context(mut self, brand_context: BrandContext) -> Self {
        self.brand_context = Some(brand_context);
        self
    }
}
