pub mod add;
pub mod list;
pub mod reload;

use teloxide::utils::command::{BotCommands, ParseError};

/// Passes the raw argument string through unchanged so that names containing
/// spaces survive, and malformed input reaches the handler for a validation
/// reply instead of failing silently at parse time.
fn parse_raw_args(input: String) -> Result<(String,), ParseError> {
    Ok((input,))
}

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Birthday reminder bot commands:")]
pub enum Command {
    #[command(description = "Display this help message")]
    Help,
    #[command(description = "Subscribe to birthday reminders")]
    Start,
    #[command(description = "Reload the birthday list from the record file")]
    Reload,
    #[command(description = "Show birthdays in the next 7 days")]
    List,
    #[command(description = "Add a birthday: /add <name> <DD-MM>", parse_with = parse_raw_args)]
    Add { args: String },
}
