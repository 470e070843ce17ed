use crate::app::cli::{help_text, parse_cli_verb, CliVerb};
use crate::app::command_support::CommandContext;

pub mod config;
pub mod detect;
pub mod templates;
pub mod workflows;

/// Entry point for the binary. Settings are only loaded for verbs that use
/// them, so a missing home directory or a broken config file does not block
/// `templates`, `template` or `progress`.
pub fn run_cli(args: Vec<String>) -> Result<String, String> {
    let Some(verb) = args.first() else {
        return Ok(help_text());
    };
    let context = if parse_cli_verb(verb).needs_context() {
        CommandContext::from_environment()?
    } else {
        CommandContext::default()
    };
    run_cli_with(&args, &context)
}

pub fn run_cli_with(args: &[String], context: &CommandContext) -> Result<String, String> {
    if args.is_empty() {
        return Ok(help_text());
    }

    match parse_cli_verb(args[0].as_str()) {
        CliVerb::Help => Ok(help_text()),
        CliVerb::Templates => templates::cmd_templates(&args[1..]),
        CliVerb::Template => templates::cmd_template(&args[1..]),
        CliVerb::Detect => detect::cmd_detect(&args[1..], context),
        CliVerb::Step => workflows::cmd_step(&args[1..], context),
        CliVerb::Reset => workflows::cmd_reset(&args[1..], context),
        CliVerb::Progress => workflows::cmd_progress(&args[1..]),
        CliVerb::Config => config::cmd_config(&args[1..], context),
        CliVerb::Unknown => Err(format!("unknown command `{}`", args[0])),
    }
}
