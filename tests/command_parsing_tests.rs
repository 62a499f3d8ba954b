#![allow(clippy::unwrap_used)]

use birthday_reminder_bot::bot::commands::Command;
use teloxide::utils::command::BotCommands;

#[test]
fn test_parse_simple_commands() {
    assert_eq!(Command::parse("/start", "testbot").unwrap(), Command::Start);
    assert_eq!(Command::parse("/help", "testbot").unwrap(), Command::Help);
    assert_eq!(Command::parse("/reload", "testbot").unwrap(), Command::Reload);
    assert_eq!(Command::parse("/list", "testbot").unwrap(), Command::List);
}

#[test]
fn test_parse_commands_with_bot_mention() {
    assert_eq!(
        Command::parse("/start@testbot", "testbot").unwrap(),
        Command::Start
    );
    assert_eq!(
        Command::parse("/list@testbot", "testbot").unwrap(),
        Command::List
    );
}

#[test]
fn test_parse_add_keeps_raw_arguments() {
    assert_eq!(
        Command::parse("/add Ann 01-01", "testbot").unwrap(),
        Command::Add {
            args: "Ann 01-01".to_string()
        }
    );
}

#[test]
fn test_parse_add_preserves_spaces_in_names() {
    assert_eq!(
        Command::parse("/add Ann-Marie van Dijk 15-03", "testbot").unwrap(),
        Command::Add {
            args: "Ann-Marie van Dijk 15-03".to_string()
        }
    );
}

#[test]
fn test_parse_add_without_arguments_still_parses() {
    // Validation happens in the handler so the user gets a usage reply
    assert_eq!(
        Command::parse("/add", "testbot").unwrap(),
        Command::Add {
            args: String::new()
        }
    );
}

#[test]
fn test_parse_unknown_command_fails() {
    assert!(Command::parse("/unsubscribe", "testbot").is_err());
    assert!(Command::parse("hello there", "testbot").is_err());
}
