//! Scripted input queues for non-interactive runs.
//!
//! When `SIGNUP_TEST_TEXT_INPUTS` or `SIGNUP_TEST_MENU_EVENTS` is set, the
//! prompt layer consumes the queued answers instead of touching the
//! terminal, which lets integration tests drive the binary end to end.
//! Sequences are `|`-separated; menu key tokens within a sequence are
//! `,`-separated.

use once_cell::sync::Lazy;
use std::{collections::VecDeque, env, sync::Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTestEvent {
    Up,
    Down,
    Enter,
    Esc,
}

#[derive(Debug, Clone)]
pub enum TextTestInput {
    Value(String),
    Escape,
}

struct TextQueue {
    enabled: bool,
    inputs: VecDeque<TextTestInput>,
}

impl TextQueue {
    fn from_env() -> Self {
        match env::var("SIGNUP_TEST_TEXT_INPUTS") {
            Ok(raw) => Self {
                enabled: true,
                inputs: parse_text_sequences(&raw),
            },
            Err(_) => Self {
                enabled: false,
                inputs: VecDeque::new(),
            },
        }
    }
}

struct MenuQueue {
    enabled: bool,
    events: VecDeque<Vec<MenuTestEvent>>,
}

impl MenuQueue {
    fn from_env() -> Self {
        match env::var("SIGNUP_TEST_MENU_EVENTS") {
            Ok(raw) => Self {
                enabled: true,
                events: parse_menu_sequences(&raw),
            },
            Err(_) => Self {
                enabled: false,
                events: VecDeque::new(),
            },
        }
    }
}

static TEXT_INPUTS: Lazy<Mutex<TextQueue>> = Lazy::new(|| Mutex::new(TextQueue::from_env()));

static MENU_EVENTS: Lazy<Mutex<MenuQueue>> = Lazy::new(|| Mutex::new(MenuQueue::from_env()));

pub fn next_text_input(label: &str) -> Option<TextTestInput> {
    let mut guard = TEXT_INPUTS.lock().expect("text input queue poisoned");
    if !guard.enabled {
        return None;
    }
    Some(
        guard
            .inputs
            .pop_front()
            .unwrap_or_else(|| panic!("Text inputs exhausted before prompt `{label}`")),
    )
}

pub fn next_menu_events(label: &str) -> Option<Vec<MenuTestEvent>> {
    let mut guard = MENU_EVENTS.lock().expect("menu event queue poisoned");
    if !guard.enabled {
        return None;
    }
    Some(
        guard
            .events
            .pop_front()
            .unwrap_or_else(|| panic!("Menu events exhausted before `{label}` menu rendered")),
    )
}

fn parse_text_input(token: &str) -> TextTestInput {
    match token.to_ascii_uppercase().as_str() {
        "<ESC>" | "ESC" => TextTestInput::Escape,
        "<BLANK>" | "<EMPTY>" => TextTestInput::Value(String::new()),
        _ => TextTestInput::Value(token.to_string()),
    }
}

fn parse_menu_event(token: &str) -> Option<MenuTestEvent> {
    match token.to_ascii_uppercase().as_str() {
        "UP" => Some(MenuTestEvent::Up),
        "DOWN" => Some(MenuTestEvent::Down),
        "ENTER" | "RETURN" => Some(MenuTestEvent::Enter),
        "ESC" | "ESCAPE" => Some(MenuTestEvent::Esc),
        _ => None,
    }
}

fn parse_text_sequences(raw: &str) -> VecDeque<TextTestInput> {
    raw.split('|')
        .map(|segment| segment.trim())
        .filter(|segment| !segment.is_empty())
        .map(parse_text_input)
        .collect()
}

fn parse_menu_sequences(raw: &str) -> VecDeque<Vec<MenuTestEvent>> {
    raw.split('|')
        .filter_map(|segment| {
            let trimmed = segment.trim();
            if trimmed.is_empty() {
                return None;
            }
            let events = trimmed
                .split(',')
                .filter_map(|token| parse_menu_event(token.trim()))
                .collect::<Vec<_>>();
            if events.is_empty() {
                None
            } else {
                Some(events)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_tokens_parse() {
        let parsed = parse_text_sequences("Ada | <BLANK> | <ESC> | plain");
        assert_eq!(parsed.len(), 4);
        assert!(matches!(&parsed[0], TextTestInput::Value(v) if v == "Ada"));
        assert!(matches!(&parsed[1], TextTestInput::Value(v) if v.is_empty()));
        assert!(matches!(parsed[2], TextTestInput::Escape));
    }

    #[test]
    fn menu_sequences_parse() {
        let parsed = parse_menu_sequences("DOWN,DOWN,ENTER | ESC | bogus");
        assert_eq!(parsed.len(), 2);
        assert_eq!(
            parsed[0],
            vec![
                MenuTestEvent::Down,
                MenuTestEvent::Down,
                MenuTestEvent::Enter
            ]
        );
        assert_eq!(parsed[1], vec![MenuTestEvent::Esc]);
    }
}
