//! Built-in workflow templates.
//!
//! Templates are immutable `static` tables. The only way to obtain a
//! [`Workflow`] from one is [`TemplateId::instantiate`], which builds a fresh
//! owned value every call.

mod commercial;
mod content;
mod field;

use crate::workflows::error::WorkflowError;
use crate::workflows::model::{AgentKind, BrandContext, StepStatus, Workflow, WorkflowStep};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::json;

pub const STEPS_PER_TEMPLATE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TemplateId {
    CustomerPriority,
    EngagementPlanning,
    ContentPlanning,
    ContentGeneration,
    AiOrchestration,
    FieldSuggestions,
    FieldCopilot,
}

impl TemplateId {
    /// Detection priority order. The first template whose keywords match wins.
    pub const ALL: [TemplateId; 7] = [
        TemplateId::CustomerPriority,
        TemplateId::EngagementPlanning,
        TemplateId::ContentPlanning,
        TemplateId::ContentGeneration,
        TemplateId::AiOrchestration,
        TemplateId::FieldSuggestions,
        TemplateId::FieldCopilot,
    ];

    /// Content supply chain templates, in priority order.
    pub const CONTENT: [TemplateId; 2] =
        [TemplateId::ContentPlanning, TemplateId::ContentGeneration];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CustomerPriority => "customer-priority",
            Self::EngagementPlanning => "engagement-planning",
            Self::ContentPlanning => "content-planning",
            Self::ContentGeneration => "content-generation",
            Self::AiOrchestration => "ai-orchestration",
            Self::FieldSuggestions => "field-suggestions",
            Self::FieldCopilot => "field-copilot",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, WorkflowError> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == normalized)
            .ok_or_else(|| WorkflowError::UnknownTemplate(raw.to_string()))
    }

    pub fn is_content(self) -> bool {
        Self::CONTENT.contains(&self)
    }

    pub fn template(self) -> &'static WorkflowTemplate {
        match self {
            Self::CustomerPriority => &commercial::CUSTOMER_PRIORITY,
            Self::EngagementPlanning => &commercial::ENGAGEMENT_PLANNING,
            Self::ContentPlanning => &content::CONTENT_PLANNING,
            Self::ContentGeneration => &content::CONTENT_GENERATION,
            Self::AiOrchestration => &commercial::AI_ORCHESTRATION,
            Self::FieldSuggestions => &field::FIELD_SUGGESTIONS,
            Self::FieldCopilot => &field::FIELD_COPILOT,
        }
    }

    pub fn instantiate(self) -> Workflow {
        self.template().instantiate()
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TemplateId {
    type Err = WorkflowError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

impl Serialize for TemplateId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TemplateId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(|err| {
            D::Error::custom(format!("invalid workflow template id `{raw}`: {err}"))
        })
    }
}

#[derive(Debug)]
pub struct BrandTemplate {
    pub therapeutic_area: &'static str,
    pub brand_name: &'static str,
    pub objectives: &'static [&'static str],
    pub budget: Option<u64>,
}

#[derive(Debug)]
pub struct StepTemplate {
    pub agent: AgentKind,
    pub action: &'static str,
    pub module: &'static str,
    pub reasoning: [&'static str; 5],
    pub tools: &'static [&'static str],
    pub metrics: &'static [&'static str],
}

#[derive(Debug)]
pub struct WorkflowTemplate {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
    pub trigger: &'static str,
    /// Lowercase phrases matched against the lowercased query, starting at a
    /// word boundary.
    pub keywords: &'static [&'static str],
    pub brand: Option<BrandTemplate>,
    pub steps: [StepTemplate; STEPS_PER_TEMPLATE],
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

impl BrandTemplate {
    fn instantiate(&self) -> BrandContext {
        BrandContext {
            therapeutic_area: self.therapeutic_area.to_string(),
            brand_name: self.brand_name.to_string(),
            objectives: owned(self.objectives),
            budget: self.budget,
        }
    }
}

impl StepTemplate {
    fn instantiate(&self) -> WorkflowStep {
        WorkflowStep {
            agent: self.agent,
            action: self.action.to_string(),
            status: StepStatus::Pending,
            module: Some(self.module.to_string()),
            reasoning: owned(&self.reasoning),
            data: Some(json!({
                "tools": self.tools,
                "metrics": self.metrics,
            })),
            user_input: None,
            output: None,
        }
    }
}

impl WorkflowTemplate {
    pub fn instantiate(&self) -> Workflow {
        Workflow {
            id: self.id.as_str().to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            trigger: self.trigger.to_string(),
            steps: self.steps.iter().map(StepTemplate::instantiate).collect(),
            current_step: 0,
            brand_context: self.brand.as_ref().map(BrandTemplate::instantiate),
        }
    }

    pub fn modules(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.module).collect()
    }
}

pub(crate) const DCE_OMNIVERSE: &str = "DCE OmniVerse";
