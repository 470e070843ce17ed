#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliVerb {
    Help,
    Templates,
    Template,
    Detect,
    Step,
    Reset,
    Progress,
    Config,
    Unknown,
}

impl CliVerb {
    /// Verbs that read settings or write the audit log.
    pub fn needs_context(self) -> bool {
        matches!(self, Self::Detect | Self::Step | Self::Reset | Self::Config)
    }
}

pub fn parse_cli_verb(input: &str) -> CliVerb {
    match input {
        "help" | "--help" | "-h" => CliVerb::Help,
        "templates" => CliVerb::Templates,
        "template" => CliVerb::Template,
        "detect" => CliVerb::Detect,
        "step" => CliVerb::Step,
        "reset" => CliVerb::Reset,
        "progress" => CliVerb::Progress,
        "config" => CliVerb::Config,
        _ => CliVerb::Unknown,
    }
}

pub fn cli_help_lines() -> Vec<String> {
    vec![
        "Commands:".to_string(),
        "  templates                                  List built-in workflow templates"
            .to_string(),
        "  template show <id> [--format json|yaml]    Print a fresh instance of a template"
            .to_string(),
        "  detect [--content] <query...>              Detect the workflow for a request"
            .to_string(),
        "  step execute <file> <index>                Activate a step".to_string(),
        "  step process <file> <index>                Send a step to review".to_string(),
        "  step approve <file> <index> [--adjustments <json>]".to_string(),
        "                                             Approve a step and advance".to_string(),
        "  reset <file>                               Return every step to pending".to_string(),
        "  progress <file>                            Show progress for a workflow file"
            .to_string(),
        "  config show                                Print effective settings".to_string(),
        String::new(),
        "Workflow files are JSON (or YAML with a .yaml/.yml extension).".to_string(),
        "Transitions print the updated workflow; the input file is left untouched.".to_string(),
    ]
}

pub(crate) fn help_text() -> String {
    cli_help_lines().join("\n")
}
