use super::{StepTemplate, TemplateId, WorkflowTemplate};
use crate::workflows::model::AgentKind;

pub(super) static FIELD_SUGGESTIONS: WorkflowTemplate = WorkflowTemplate {
    id: TemplateId::FieldSuggestions,
    name: "Field Suggestions",
    description: "Turn customer signals into prioritized suggestions for field representatives",
    trigger: "What suggestions should my field reps act on this week?",
    keywords: &[
        "field suggestion",
        "suggestions",
        "field rep",
        "rep trigger",
        "field alert",
        "call plan",
    ],
    brand: None,
    steps: [
        StepTemplate {
            agent: AgentKind::Suggestions,
            action: "Trigger Detection",
            module: "triggers",
            reasoning: [
                "Watching for new writer and lapsed writer events",
                "Detecting formulary wins in each territory",
                "Catching digital engagement spikes",
                "Filtering triggers already acted on",
                "Queueing triggers for insight generation",
            ],
            tools: &["Trigger Monitor", "Formulary Feed"],
            metrics: &["Triggers Fired", "Trigger Precision"],
        },
        StepTemplate {
            agent: AgentKind::Suggestions,
            action: "Insight Generation",
            module: "insights",
            reasoning: [
                "Explaining why each trigger matters",
                "Pulling supporting prescribing evidence",
                "Relating the trigger to the HCP segment",
                "Writing plain-language insight text",
                "Attaching evidence links",
            ],
            tools: &["Insight Writer", "Evidence Store"],
            metrics: &["Insights Written", "Evidence Coverage"],
        },
        StepTemplate {
            agent: AgentKind::Suggestions,
            action: "Suggestion Composition",
            module: "suggestions",
            reasoning: [
                "Pairing each insight with a recommended action",
                "Selecting approved content to share",
                "Setting a response window",
                "Avoiding duplicate suggestions per HCP",
                "Drafting the suggestion cards",
            ],
            tools: &["Suggestion Builder", "Content Library"],
            metrics: &["Suggestions Drafted", "Content Attached"],
        },
        StepTemplate {
            agent: AgentKind::Suggestions,
            action: "Suggestion Prioritization",
            module: "prioritization",
            reasoning: [
                "Scoring suggestions by expected impact",
                "Capping the weekly load per representative",
                "Boosting time-sensitive triggers",
                "Ordering suggestions within each territory",
                "Marking the top suggestions for this week",
            ],
            tools: &["Impact Scorer", "Capacity Planner"],
            metrics: &["Expected Impact", "Rep Load"],
        },
        StepTemplate {
            agent: AgentKind::Suggestions,
            action: "Suggestion Delivery",
            module: "delivery",
            reasoning: [
                "Syncing suggestions to the CRM inbox",
                "Notifying representatives on mobile",
                "Recording delivery timestamps",
                "Collecting accept and dismiss feedback",
                "Feeding outcomes back to trigger tuning",
            ],
            tools: &["CRM Connector", "Notification Service"],
            metrics: &["Delivery Rate", "Acceptance Rate"],
        },
    ],
};

pub(super) static FIELD_COPILOT: WorkflowTemplate = WorkflowTemplate {
    id: TemplateId::FieldCopilot,
    name: "Field Copilot",
    description: "Prepare a representative for an upcoming HCP interaction",
    trigger: "Help me prepare for my call with Dr. Patel",
    keywords: &[
        "copilot",
        "co-pilot",
        "prepare for my call",
        "pre-call",
        "call prep",
        "meeting prep",
        "objection",
    ],
    brand: None,
    steps: [
        StepTemplate {
            agent: AgentKind::Copilot,
            action: "Pre-Call Briefing",
            module: "pre-call",
            reasoning: [
                "Retrieving the HCP profile and segment",
                "Summarizing recent prescribing changes",
                "Listing open suggestions for this HCP",
                "Noting the last three interactions",
                "Assembling the briefing card",
            ],
            tools: &["CRM Connector", "Profile Service"],
            metrics: &["Profile Completeness", "Days Since Last Call"],
        },
        StepTemplate {
            agent: AgentKind::Copilot,
            action: "Context Assembly",
            module: "context",
            reasoning: [
                "Checking local access and formulary status",
                "Collecting peer prescribing benchmarks",
                "Gathering recent digital engagement",
                "Pulling relevant clinical updates",
                "Ranking context by relevance",
            ],
            tools: &["Access Feed", "Engagement Reports"],
            metrics: &["Context Items", "Relevance Score"],
        },
        StepTemplate {
            agent: AgentKind::Copilot,
            action: "Talking Point Generation",
            module: "talking-points",
            reasoning: [
                "Selecting key messages for the segment",
                "Binding each message to an approved claim",
                "Tailoring openers to recent activity",
                "Keeping the list to three points",
                "Formatting points for quick review",
            ],
            tools: &["Message Selector", "Claims Library"],
            metrics: &["Talking Points", "Claims Used"],
        },
        StepTemplate {
            agent: AgentKind::Copilot,
            action: "Objection Handling Prep",
            module: "objections",
            reasoning: [
                "Predicting likely objections from history",
                "Retrieving approved responses",
                "Linking supporting evidence",
                "Rehearsing short answers",
                "Flagging topics to route to medical",
            ],
            tools: &["Objection Library", "Evidence Store"],
            metrics: &["Objections Covered", "Response Confidence"],
        },
        StepTemplate {
            agent: AgentKind::Copilot,
            action: "Follow-Up Planning",
            module: "follow-up",
            reasoning: [
                "Drafting the call note template",
                "Proposing a follow-up date",
                "Selecting content to send after the call",
                "Creating CRM tasks",
                "Closing the preparation session",
            ],
            tools: &["Task Service", "Content Library"],
            metrics: &["Tasks Created", "Follow-Up Window"],
        },
    ],
};
