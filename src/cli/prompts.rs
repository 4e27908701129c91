//! Terminal prompt primitives: raw-mode text input, an arrow-key choice
//! menu, and a yes/no confirmation. Every prompt consults the scripted
//! queues first so the binary stays drivable without a terminal.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{self, ClearType},
    ExecutableCommand,
};
use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::cli::script::{self, MenuTestEvent, TextTestInput};

pub enum TextPromptResult {
    Value(String),
    Cancel,
}

/// Prompts for one line of text. ESC or Ctrl-C cancels; an empty entry
/// keeps the default when one is present.
pub fn text_input(label: &str, default: Option<&str>) -> io::Result<TextPromptResult> {
    if let Some(scripted) = script::next_text_input(label) {
        return Ok(match scripted {
            TextTestInput::Value(value) => TextPromptResult::Value(value),
            TextTestInput::Escape => TextPromptResult::Cancel,
        });
    }

    let mut guard = RawModeGuard::activate()?;
    let mut stdout = io::stdout();
    redraw_input(&mut stdout, "")?;
    let mut buffer = String::new();

    loop {
        let event = event::read()?;
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
                {
                    guard.deactivate();
                    println!();
                    return Ok(TextPromptResult::Cancel);
                }

                match key.code {
                    KeyCode::Esc => {
                        guard.deactivate();
                        println!();
                        return Ok(TextPromptResult::Cancel);
                    }
                    KeyCode::Enter => {
                        guard.deactivate();
                        println!();
                        let trimmed = buffer.trim();
                        let value = if trimmed.is_empty() {
                            default.unwrap_or("").to_string()
                        } else {
                            buffer.clone()
                        };
                        return Ok(TextPromptResult::Value(value));
                    }
                    KeyCode::Backspace => {
                        buffer.pop();
                        redraw_input(&mut stdout, &buffer)?;
                    }
                    KeyCode::Char(ch) => {
                        buffer.push(ch);
                        redraw_input(&mut stdout, &buffer)?;
                    }
                    _ => {}
                }
            }
            _ => continue,
        }
    }
}

/// Shows a selectable list and returns the chosen index, or `None` when
/// the user backs out with ESC.
pub fn choice_menu(title: &str, options: &[String]) -> io::Result<Option<usize>> {
    if options.is_empty() {
        return Ok(None);
    }

    println!("{title}");
    if let Some(events) = script::next_menu_events(title) {
        for option in options {
            println!("  {option}");
        }
        return Ok(apply_scripted_events(&events, options.len()));
    }

    let mut selected = 0usize;
    let mut guard = RawModeGuard::activate()?;
    let mut stdout = io::stdout();
    render_options(&mut stdout, options, selected, false)?;

    loop {
        let event = event::read()?;
        let Event::Key(key) = event else { continue };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match key.code {
            KeyCode::Up => {
                selected = selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if selected + 1 < options.len() {
                    selected += 1;
                }
            }
            KeyCode::Enter => {
                guard.deactivate();
                println!();
                return Ok(Some(selected));
            }
            KeyCode::Esc => {
                guard.deactivate();
                println!();
                return Ok(None);
            }
            _ => continue,
        }
        render_options(&mut stdout, options, selected, true)?;
    }
}

/// Yes/no confirmation; scripted answers are interpreted as y/n tokens.
pub fn confirm(prompt: &str, default: bool) -> io::Result<bool> {
    if let Some(scripted) = script::next_text_input(prompt) {
        return Ok(match scripted {
            TextTestInput::Value(value) => match value.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" | "true" => true,
                "n" | "no" | "false" => false,
                _ => default,
            },
            TextTestInput::Escape => false,
        });
    }

    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(io::Error::other)
}

fn apply_scripted_events(events: &[MenuTestEvent], len: usize) -> Option<usize> {
    let mut selected = 0usize;
    for event in events {
        match event {
            MenuTestEvent::Up => selected = selected.saturating_sub(1),
            MenuTestEvent::Down => {
                if selected + 1 < len {
                    selected += 1;
                }
            }
            MenuTestEvent::Enter => return Some(selected),
            MenuTestEvent::Esc => return None,
        }
    }
    Some(selected)
}

fn render_options(
    stdout: &mut Stdout,
    options: &[String],
    selected: usize,
    redraw: bool,
) -> io::Result<()> {
    if redraw {
        stdout.execute(cursor::MoveUp(options.len() as u16))?;
        stdout.execute(terminal::Clear(ClearType::FromCursorDown))?;
    }
    for (index, option) in options.iter().enumerate() {
        let marker = if index == selected { ">" } else { " " };
        stdout.execute(cursor::MoveToColumn(0))?;
        write!(stdout, "{marker} {option}")?;
        writeln!(stdout)?;
    }
    stdout.flush()
}

fn redraw_input(stdout: &mut Stdout, buffer: &str) -> io::Result<()> {
    stdout.execute(cursor::MoveToColumn(0))?;
    stdout.execute(terminal::Clear(ClearType::CurrentLine))?;
    write!(stdout, "> {}", buffer)?;
    stdout.flush()
}

struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    fn activate() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self { active: true })
    }

    fn deactivate(&mut self) {
        if self.active {
            let _ = terminal::disable_raw_mode();
            self.active = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.deactivate();
    }
}
