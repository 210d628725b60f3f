use std::path::PathBuf;

use wordswap_types::{AppEvent, WindowKind};

use crate::ui::parse_command;

#[test]
fn test_plain_text_is_translated() {
    match parse_command("hello world") {
        Some(AppEvent::Translate(text)) => assert_eq!(text, "hello world"),
        other => panic!("Wrong event: {:?}", other),
    }
}

#[test]
fn test_empty_line_is_ignored() {
    assert!(parse_command("").is_none());
}

#[test]
fn test_escaped_colon() {
    match parse_command("::-)") {
        Some(AppEvent::Translate(text)) => assert_eq!(text, ":-)"),
        other => panic!("Wrong event: {:?}", other),
    }
}

#[test]
fn test_dictionary_commands() {
    match parse_command(":load dicts/slang.json") {
        Some(AppEvent::LoadDictionary(path)) => {
            assert_eq!(path, PathBuf::from("dicts/slang.json"))
        }
        other => panic!("Wrong event: {:?}", other),
    }

    match parse_command(":open  new.json ") {
        Some(AppEvent::OpenNewDictionary(path)) => assert_eq!(path, PathBuf::from("new.json")),
        other => panic!("Wrong event: {:?}", other),
    }

    assert!(parse_command(":load").is_none());
}

#[test]
fn test_file_command_needs_two_paths() {
    match parse_command(":file in.txt out.txt") {
        Some(AppEvent::TranslateFile { source, dest }) => {
            assert_eq!(source, PathBuf::from("in.txt"));
            assert_eq!(dest, PathBuf::from("out.txt"));
        }
        other => panic!("Wrong event: {:?}", other),
    }

    assert!(parse_command(":file in.txt").is_none());
    assert!(parse_command(":file a b c").is_none());
}

#[test]
fn test_window_commands() {
    assert!(matches!(parse_command(":edit"), Some(AppEvent::OpenEditor)));
    assert!(matches!(parse_command(":info"), Some(AppEvent::OpenInfo)));
    assert!(matches!(
        parse_command(":close"),
        Some(AppEvent::CloseWindow(WindowKind::Info))
    ));
    assert!(matches!(
        parse_command(":close editor"),
        Some(AppEvent::CloseWindow(WindowKind::Editor))
    ));
    assert!(matches!(parse_command(":quit"), Some(AppEvent::Shutdown)));
    assert!(parse_command(":unknown").is_none());
}

#[test]
fn test_close_accepts_window_display_names() {
    for kind in [WindowKind::Editor, WindowKind::Info] {
        match parse_command(&format!(":close {kind}")) {
            Some(AppEvent::CloseWindow(parsed)) => assert_eq!(parsed, kind),
            other => panic!("Wrong event: {:?}", other),
        }
    }
}
