use super::{BrandTemplate, StepTemplate, TemplateId, WorkflowTemplate, DCE_OMNIVERSE};
use crate::workflows::model::AgentKind;

pub(super) static CUSTOMER_PRIORITY: WorkflowTemplate = WorkflowTemplate {
    id: TemplateId::CustomerPriority,
    name: "Customer Prioritization",
    description: "Identify and rank the HCPs that should receive field and digital focus",
    trigger: "Who should be my priority customers?",
    keywords: &[
        "priority customer",
        "priority hcp",
        "prioritize",
        "prioritise",
        "target list",
        "which hcps",
        "customer segment",
        "microsegment",
    ],
    brand: None,
    steps: [
        StepTemplate {
            agent: AgentKind::Customer,
            action: "Prescribing Pattern Analysis",
            module: "prescribing-analysis",
            reasoning: [
                "Loading 24 months of claims and prescribing history",
                "Normalizing volumes across payer channels",
                "Flagging HCPs with accelerating category share",
                "Separating new writers from established prescribers",
                "Summarizing trend strength per territory",
            ],
            tools: &["Claims Data Lake", "Trend Detector"],
            metrics: &["TRx Growth", "NBRx Share", "Category Volume"],
        },
        StepTemplate {
            agent: AgentKind::Customer,
            action: "Microsegment Identification",
            module: "segmentation",
            reasoning: [
                "Clustering HCPs on behavior and channel affinity",
                "Profiling practice type and patient mix",
                "Labeling segments by adoption stage",
                "Checking segment stability across quarters",
                "Publishing microsegment definitions",
            ],
            tools: &["Segmentation Engine", "Affinity Model"],
            metrics: &["Segment Size", "Silhouette Score"],
        },
        StepTemplate {
            agent: AgentKind::Customer,
            action: "Opportunity Scoring",
            module: "scoring",
            reasoning: [
                "Estimating headroom per HCP from patient potential",
                "Weighting responsiveness to past engagement",
                "Applying access and formulary adjustments",
                "Calibrating scores against historical lift",
                "Producing a 0-100 opportunity score",
            ],
            tools: &["Propensity Model", "Access Adjuster"],
            metrics: &["Opportunity Score", "Predicted Lift"],
        },
        StepTemplate {
            agent: AgentKind::Customer,
            action: "Priority Ranking",
            module: "prioritization",
            reasoning: [
                "Ranking HCPs by score within each territory",
                "Balancing workload across representatives",
                "Reserving capacity for high-growth new writers",
                "Cross-checking ranks with field feedback",
                "Finalizing tiered priority lists",
            ],
            tools: &["Ranking Service", "Capacity Planner"],
            metrics: &["Tier Coverage", "Rep Workload"],
        },
        StepTemplate {
            agent: AgentKind::Customer,
            action: "Target List Publication",
            module: "targeting",
            reasoning: [
                "Packaging tiered lists for CRM sync",
                "Attaching rationale for every priority change",
                "Preparing territory summaries for managers",
                "Scheduling refresh cadence",
                "Handing targets to engagement planning",
            ],
            tools: &["CRM Connector", "Report Builder"],
            metrics: &["Targets Published", "Coverage Rate"],
        },
    ],
};

pub(super) static ENGAGEMENT_PLANNING: WorkflowTemplate = WorkflowTemplate {
    id: TemplateId::EngagementPlanning,
    name: "Budget & Engagement Planning",
    description: "Attribute past impact and allocate marketing budget across channels",
    trigger: "How should I allocate my marketing budget?",
    keywords: &[
        "budget",
        "allocate",
        "allocation",
        "channel mix",
        "engagement plan",
        "roi optimization",
        "marketing spend",
        "response curve",
    ],
    brand: Some(BrandTemplate {
        therapeutic_area: "Oncology",
        brand_name: DCE_OMNIVERSE,
        objectives: &["Grow new patient starts", "Improve channel ROI"],
        budget: Some(25_000_000),
    }),
    steps: [
        StepTemplate {
            agent: AgentKind::Engagement,
            action: "Impact Attribution Analysis",
            module: "attribution",
            reasoning: [
                "Collecting spend and response by channel",
                "Fitting a marketing mix model on weekly data",
                "Isolating baseline from promoted volume",
                "Attributing incremental scripts to each channel",
                "Reporting attribution with confidence bands",
            ],
            tools: &["MMM Engine", "Attribution Service"],
            metrics: &["Incremental TRx", "Channel Contribution"],
        },
        StepTemplate {
            agent: AgentKind::Engagement,
            action: "Response Curve Analysis",
            module: "response-curves",
            reasoning: [
                "Deriving diminishing-return curves per channel",
                "Locating saturation points",
                "Estimating carryover effects",
                "Comparing curves across segments",
                "Marking channels with remaining headroom",
            ],
            tools: &["Curve Fitter", "Saturation Detector"],
            metrics: &["Marginal ROI", "Saturation Point"],
        },
        StepTemplate {
            agent: AgentKind::Engagement,
            action: "Budget Optimization",
            module: "optimization",
            reasoning: [
                "Setting total budget and channel constraints",
                "Maximizing incremental return across curves",
                "Testing sensitivity to budget changes",
                "Applying minimum presence rules",
                "Selecting the recommended scenario",
            ],
            tools: &["Optimizer", "Scenario Planner"],
            metrics: &["Projected ROI", "Incremental Revenue"],
        },
        StepTemplate {
            agent: AgentKind::Engagement,
            action: "Channel Allocation",
            module: "allocation",
            reasoning: [
                "Translating the optimal scenario into channel budgets",
                "Splitting spend by quarter",
                "Aligning allocation with priority segments",
                "Checking against contractual commitments",
                "Documenting shifts from last year",
            ],
            tools: &["Allocation Planner", "Finance Sync"],
            metrics: &["Channel Budget", "Spend Shift"],
        },
        StepTemplate {
            agent: AgentKind::Engagement,
            action: "Engagement Plan Creation",
            module: "planning",
            reasoning: [
                "Converting budgets into touchpoint volumes",
                "Sequencing engagements by segment",
                "Setting frequency caps per HCP",
                "Defining measurement checkpoints",
                "Publishing the engagement plan",
            ],
            tools: &["Journey Planner", "Calendar Service"],
            metrics: &["Planned Touchpoints", "Reach"],
        },
    ],
};

pub(super) static AI_ORCHESTRATION: WorkflowTemplate = WorkflowTemplate {
    id: TemplateId::AiOrchestration,
    name: "AI Orchestration",
    description: "Coordinate next best actions across channels for each customer journey",
    trigger: "Orchestrate the customer journey across channels",
    keywords: &[
        "orchestrate",
        "orchestration",
        "customer journey",
        "patient journey",
        "hcp journey",
        "journey map",
        "next best action",
        "next-best-action",
        "omnichannel",
    ],
    brand: None,
    steps: [
        StepTemplate {
            agent: AgentKind::Orchestration,
            action: "Signal Aggregation",
            module: "signals",
            reasoning: [
                "Merging CRM, digital and claims signals",
                "Deduplicating events per HCP",
                "Scoring signal freshness",
                "Dropping signals below relevance threshold",
                "Publishing the unified signal feed",
            ],
            tools: &["Event Bus", "Identity Resolver"],
            metrics: &["Signals Processed", "Match Rate"],
        },
        StepTemplate {
            agent: AgentKind::Orchestration,
            action: "Journey Stage Mapping",
            module: "journey",
            reasoning: [
                "Placing each HCP on the adoption journey",
                "Detecting stalled transitions",
                "Comparing stage mix with plan",
                "Highlighting journeys at risk",
                "Recording stage changes for audit",
            ],
            tools: &["Journey Model", "Stage Classifier"],
            metrics: &["Stage Distribution", "Stall Rate"],
        },
        StepTemplate {
            agent: AgentKind::Orchestration,
            action: "Next Best Action Selection",
            module: "next-best-action",
            reasoning: [
                "Generating candidate actions per HCP",
                "Estimating uplift for each candidate",
                "Applying channel preference and consent",
                "Resolving conflicts between channels",
                "Selecting one action per HCP",
            ],
            tools: &["NBA Engine", "Consent Registry"],
            metrics: &["Expected Uplift", "Action Coverage"],
        },
        StepTemplate {
            agent: AgentKind::Orchestration,
            action: "Cross-Channel Sequencing",
            module: "sequencing",
            reasoning: [
                "Ordering actions over the next four weeks",
                "Respecting frequency caps",
                "Leaving gaps for rep follow-up",
                "Aligning digital sends with field visits",
                "Freezing the sequence for activation",
            ],
            tools: &["Sequencer", "Frequency Guard"],
            metrics: &["Sequence Length", "Cap Violations"],
        },
        StepTemplate {
            agent: AgentKind::Activation,
            action: "Channel Activation",
            module: "activation",
            reasoning: [
                "Pushing email actions to the marketing platform",
                "Syncing field actions to CRM",
                "Registering media audiences",
                "Confirming delivery receipts",
                "Opening the monitoring dashboard",
            ],
            tools: &["Activation Gateway", "CRM Connector"],
            metrics: &["Actions Activated", "Delivery Rate"],
        },
    ],
};
