use super::*;
use teloxide::utils::command::BotCommands;

#[test]
fn greeting_uses_sender_name() {
    let text = greeting(Some("Ann"));
    assert!(text.contains("Ann"));
}

#[test]
fn greeting_falls_back_to_placeholder() {
    let text = greeting(None);
    assert!(text.contains(ANONYMOUS_NAME));
}

#[test]
fn help_text_lists_both_commands() {
    assert!(HELP_TEXT.contains("/start"));
    assert!(HELP_TEXT.contains("/help"));
}

#[test]
fn commands_parse() {
    assert_eq!(Command::parse("/start", "relaybot").unwrap(), Command::Start);
    assert_eq!(Command::parse("/help", "relaybot").unwrap(), Command::Help);
    assert!(Command::parse("what is RAG?", "relaybot").is_err());
}
