use super::{BrandTemplate, StepTemplate, TemplateId, WorkflowTemplate, DCE_OMNIVERSE};
use crate::workflows::model::AgentKind;

pub(super) static CONTENT_PLANNING: WorkflowTemplate = WorkflowTemplate {
    id: TemplateId::ContentPlanning,
    name: "Content Planning",
    description: "Audit existing assets and plan the content the next campaign needs",
    trigger: "What content do we need for the next campaign?",
    keywords: &[
        "content plan",
        "content strategy",
        "content gap",
        "content calendar",
        "content audit",
        "what content",
    ],
    brand: Some(BrandTemplate {
        therapeutic_area: "Oncology",
        brand_name: DCE_OMNIVERSE,
        objectives: &["Close message gaps by segment"],
        budget: None,
    }),
    steps: [
        StepTemplate {
            agent: AgentKind::ContentPlanning,
            action: "Content Inventory Audit",
            module: "audit",
            reasoning: [
                "Cataloguing approved assets by channel",
                "Tagging assets with key messages",
                "Checking expiry dates of approvals",
                "Measuring asset usage in the field",
                "Listing retired and stale assets",
            ],
            tools: &["DAM Connector", "Message Tagger"],
            metrics: &["Active Assets", "Expiring Assets"],
        },
        StepTemplate {
            agent: AgentKind::ContentPlanning,
            action: "Message Gap Analysis",
            module: "gap-analysis",
            reasoning: [
                "Mapping messages to microsegment needs",
                "Finding segments without tailored content",
                "Comparing engagement by message theme",
                "Ranking gaps by segment value",
                "Summarizing the top content gaps",
            ],
            tools: &["Gap Analyzer", "Engagement Reports"],
            metrics: &["Gap Count", "Segment Coverage"],
        },
        StepTemplate {
            agent: AgentKind::ContentPlanning,
            action: "Content Strategy Definition",
            module: "strategy",
            reasoning: [
                "Choosing priority themes for the campaign",
                "Assigning formats per channel",
                "Setting reuse targets for modular content",
                "Estimating MLR review load",
                "Drafting the strategy brief",
            ],
            tools: &["Strategy Canvas", "Modular Content Library"],
            metrics: &["Planned Assets", "Reuse Ratio"],
        },
        StepTemplate {
            agent: AgentKind::ContentPlanning,
            action: "Editorial Calendar Build",
            module: "calendar",
            reasoning: [
                "Scheduling production against launch dates",
                "Reserving MLR review slots",
                "Staggering releases by channel",
                "Flagging congress and conference windows",
                "Publishing the editorial calendar",
            ],
            tools: &["Calendar Service", "Review Scheduler"],
            metrics: &["Scheduled Assets", "Review Slots"],
        },
        StepTemplate {
            agent: AgentKind::ContentPlanning,
            action: "Creative Brief Generation",
            module: "briefs",
            reasoning: [
                "Writing one brief per planned asset",
                "Linking approved claims and references",
                "Specifying audience and call to action",
                "Attaching brand guidelines",
                "Handing briefs to content generation",
            ],
            tools: &["Brief Writer", "Claims Library"],
            metrics: &["Briefs Created", "Claims Linked"],
        },
    ],
};

pub(super) static CONTENT_GENERATION: WorkflowTemplate = WorkflowTemplate {
    id: TemplateId::ContentGeneration,
    name: "Content Generation",
    description: "Draft, review and approve compliant content variants",
    trigger: "Generate new content for the launch campaign",
    keywords: &[
        "generate content",
        "create content",
        "content creation",
        "new content",
        "draft email",
        "draft an email",
        "mlr review",
        "mlr submission",
        "mlr-ready",
    ],
    brand: Some(BrandTemplate {
        therapeutic_area: "Oncology",
        brand_name: DCE_OMNIVERSE,
        objectives: &["Shorten time to approved content"],
        budget: None,
    }),
    steps: [
        StepTemplate {
            agent: AgentKind::ContentGeneration,
            action: "Brief Intake",
            module: "briefing",
            reasoning: [
                "Reading the creative brief",
                "Resolving referenced claims",
                "Confirming audience and channel",
                "Loading brand voice guidelines",
                "Preparing the drafting context",
            ],
            tools: &["Brief Parser", "Claims Library"],
            metrics: &["Claims Resolved", "Brief Completeness"],
        },
        StepTemplate {
            agent: AgentKind::ContentGeneration,
            action: "Content Drafting",
            module: "drafting",
            reasoning: [
                "Composing headline and body copy",
                "Inserting approved claims verbatim",
                "Adding fair balance and safety information",
                "Matching tone to the audience",
                "Producing the first draft",
            ],
            tools: &["Copy Generator", "Template Library"],
            metrics: &["Draft Length", "Readability"],
        },
        StepTemplate {
            agent: AgentKind::ContentApproval,
            action: "MLR Pre-Review",
            module: "mlr-review",
            reasoning: [
                "Checking claims against references",
                "Verifying fair balance placement",
                "Scanning for off-label language",
                "Scoring compliance risk",
                "Listing required edits",
            ],
            tools: &["Compliance Checker", "Reference Validator"],
            metrics: &["MLR Score", "Flagged Phrases"],
        },
        StepTemplate {
            agent: AgentKind::ContentGeneration,
            action: "Variant Creation",
            module: "variants",
            reasoning: [
                "Adapting copy per microsegment",
                "Resizing for each channel format",
                "Keeping claims identical across variants",
                "Tagging variants for testing",
                "Bundling variants for approval",
            ],
            tools: &["Variant Builder", "Format Adapter"],
            metrics: &["Variants Created", "Segment Fit"],
        },
        StepTemplate {
            agent: AgentKind::ContentApproval,
            action: "Final Approval Routing",
            module: "approval",
            reasoning: [
                "Assembling the review package",
                "Routing to medical, legal and regulatory reviewers",
                "Tracking reviewer decisions",
                "Applying final edits",
                "Releasing approved assets to the library",
            ],
            tools: &["Review Workflow", "DAM Connector"],
            metrics: &["Approval Time", "Revision Rounds"],
        },
    ],
};
