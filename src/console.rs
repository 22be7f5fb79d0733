//! Debug console: parse a typed line, run it against the session, and
//! return the text to print.

use std::fmt::Write;

use thiserror::Error;

use crate::input::{ActionOutcome, Binding, InputAction, Key, UnknownKey};
use crate::prefs::PreferenceStore;
use crate::session::{Session, SessionError};

pub const HELP: &str = "Commands:
  help                   show this list
  list                   show hotbar slots
  items                  list known items
  give <id> [slot]       put an item in the hotbar
  remove <slot>          empty a slot
  select <slot>          equip a slot (1-based)
  next / prev            scroll the equipped slot
  press <key>            simulate a key press (e.g. Alpha3, G)
  scroll <delta>         simulate the mouse wheel
  throw                  drop the equipped item
  bindings               show key bindings
  bind <binding> <key>   rebind a control (e.g. bind throw T)
  save                   write preferences to disk
  quit                   exit";

#[derive(Debug, Error, PartialEq)]
pub enum ConsoleError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Not a slot number: {0}")]
    InvalidSlot(String),

    #[error("Unknown binding: {0}")]
    UnknownBinding(String),

    #[error(transparent)]
    UnknownKey(#[from] UnknownKey),
}

/// Commands accepted by the console
///
/// Slot numbers are typed 1-based, matching the number keys, and stored
/// zero-based here.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    Help,
    List,
    Items,
    Give { id: String, slot: Option<usize> },
    Remove(usize),
    Select(usize),
    Next,
    Previous,
    Press(Key),
    Scroll(f32),
    Throw,
    Bindings,
    Bind { binding: Binding, key: Key },
    Save,
    Quit,
}

impl ConsoleCommand {
    /// Parses one line; returns Ok(None) for a blank line
    pub fn parse(line: &str) -> Result<Option<ConsoleCommand>, ConsoleError> {
        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else {
            return Ok(None);
        };

        let command = match cmd.to_lowercase().as_str() {
            "help" | "h" | "?" => ConsoleCommand::Help,
            "list" | "inv" | "inventory" => ConsoleCommand::List,
            "items" => ConsoleCommand::Items,
            "give" => {
                let id = parts.next().ok_or(ConsoleError::Usage("give <id> [slot]"))?;
                let slot = parts.next().map(parse_slot).transpose()?;
                ConsoleCommand::Give {
                    id: id.to_string(),
                    slot,
                }
            }
            "remove" => {
                let slot = parts.next().ok_or(ConsoleError::Usage("remove <slot>"))?;
                ConsoleCommand::Remove(parse_slot(slot)?)
            }
            "select" => {
                let slot = parts.next().ok_or(ConsoleError::Usage("select <slot>"))?;
                ConsoleCommand::Select(parse_slot(slot)?)
            }
            "next" => ConsoleCommand::Next,
            "prev" | "previous" => ConsoleCommand::Previous,
            "press" => {
                let key = parts.next().ok_or(ConsoleError::Usage("press <key>"))?;
                ConsoleCommand::Press(key.parse()?)
            }
            "scroll" => {
                let delta = parts
                    .next()
                    .and_then(|d| d.parse::<f32>().ok())
                    .ok_or(ConsoleError::Usage("scroll <delta>"))?;
                ConsoleCommand::Scroll(delta)
            }
            "throw" | "drop" => ConsoleCommand::Throw,
            "bindings" | "keys" => ConsoleCommand::Bindings,
            "bind" => {
                let (Some(binding), Some(key)) = (parts.next(), parts.next()) else {
                    return Err(ConsoleError::Usage("bind <binding> <key>"));
                };
                ConsoleCommand::Bind {
                    binding: Binding::from_name(binding)
                        .ok_or_else(|| ConsoleError::UnknownBinding(binding.to_string()))?,
                    key: key.parse()?,
                }
            }
            "save" => ConsoleCommand::Save,
            "exit" | "quit" | "q" => ConsoleCommand::Quit,
            other => return Err(ConsoleError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn parse_slot(text: &str) -> Result<usize, ConsoleError> {
    match text.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(ConsoleError::InvalidSlot(text.to_string())),
    }
}

/// Runs a command and returns the text to show
///
/// `Quit` is left to the caller and produces no output here.
pub fn execute<P: PreferenceStore>(
    session: &mut Session<P>,
    command: ConsoleCommand,
) -> Result<String, SessionError> {
    let output = match command {
        ConsoleCommand::Help => HELP.to_string(),
        ConsoleCommand::List => describe_hotbar(session),
        ConsoleCommand::Items => {
            let mut out = String::new();
            for item in session.registry().all_items() {
                let _ = writeln!(out, "{:<10} {}", item.id, item.name);
            }
            out
        }
        ConsoleCommand::Give { id, slot } => {
            let index = session.give(&id, slot)?;
            format!("{} -> slot {}", id, index + 1)
        }
        ConsoleCommand::Remove(slot) => match session.inventory_mut().remove(slot)? {
            Some(item) => format!("Removed {} from slot {}", item.name, slot + 1),
            None => format!("Slot {} is already empty", slot + 1),
        },
        ConsoleCommand::Select(slot) => describe(session.perform(InputAction::SelectSlot(slot))?),
        ConsoleCommand::Next => describe(session.perform(InputAction::ScrollUp)?),
        ConsoleCommand::Previous => describe(session.perform(InputAction::ScrollDown)?),
        ConsoleCommand::Press(key) => match session.press(key)? {
            Some(outcome) => describe(outcome),
            None => format!("{} is not an inventory key", key),
        },
        ConsoleCommand::Scroll(delta) => match session.scroll(delta)? {
            Some(outcome) => describe(outcome),
            None => "No scroll".to_string(),
        },
        ConsoleCommand::Throw => describe(session.perform(InputAction::ThrowEquipped)?),
        ConsoleCommand::Bindings => {
            let mut out = String::new();
            for (binding, key) in session.bindings().iter() {
                let _ = writeln!(out, "{:<12} {}", binding.preference_key(), key);
            }
            out
        }
        ConsoleCommand::Bind { binding, key } => {
            session.rebind(binding, key);
            format!("{} = {}", binding.preference_key(), key)
        }
        ConsoleCommand::Save => {
            session.save_preferences()?;
            "Preferences saved".to_string()
        }
        ConsoleCommand::Quit => String::new(),
    };

    Ok(output)
}

fn describe(outcome: ActionOutcome) -> String {
    match outcome {
        ActionOutcome::Selected(index) => format!("Equipped slot {}", index + 1),
        ActionOutcome::Unchanged => "Already at the end of the hotbar".to_string(),
        ActionOutcome::Thrown(item) => format!("Threw {}", item.name),
        ActionOutcome::NothingToThrow => "Nothing equipped".to_string(),
    }
}

/// One line per slot, marking the equipped one
pub fn describe_hotbar<P: PreferenceStore>(session: &Session<P>) -> String {
    let inventory = session.inventory();
    let mut out = String::new();
    for (index, item) in inventory.iter() {
        let marker = if index == inventory.equipped_index() { '>' } else { ' ' };
        let name = if item.is_empty() { "(empty)" } else { item.name.as_str() };
        let _ = writeln!(out, "{} [{}] {}", marker, index + 1, name);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::item::ItemRegistry;
    use crate::prefs::MemoryPreferences;

    fn session() -> Session<MemoryPreferences> {
        Session::new(
            &SessionConfig::default(),
            ItemRegistry::create_default(),
            MemoryPreferences::new(),
        )
        .unwrap()
    }

    fn run(session: &mut Session<MemoryPreferences>, line: &str) -> String {
        let command = ConsoleCommand::parse(line).unwrap().unwrap();
        execute(session, command).unwrap()
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(ConsoleCommand::parse("   "), Ok(None));
    }

    #[test]
    fn test_parse_give() {
        assert_eq!(
            ConsoleCommand::parse("give sword 3"),
            Ok(Some(ConsoleCommand::Give {
                id: "sword".into(),
                slot: Some(2)
            }))
        );
        assert_eq!(
            ConsoleCommand::parse("GIVE potion"),
            Ok(Some(ConsoleCommand::Give {
                id: "potion".into(),
                slot: None
            }))
        );
        assert_eq!(
            ConsoleCommand::parse("give"),
            Err(ConsoleError::Usage("give <id> [slot]"))
        );
    }

    #[test]
    fn test_parse_slot_numbers_are_one_based() {
        assert_eq!(ConsoleCommand::parse("select 1"), Ok(Some(ConsoleCommand::Select(0))));
        assert_eq!(
            ConsoleCommand::parse("select 0"),
            Err(ConsoleError::InvalidSlot("0".into()))
        );
        assert_eq!(
            ConsoleCommand::parse("remove x"),
            Err(ConsoleError::InvalidSlot("x".into()))
        );
    }

    #[test]
    fn test_parse_bind() {
        assert_eq!(
            ConsoleCommand::parse("bind throw T"),
            Ok(Some(ConsoleCommand::Bind {
                binding: Binding::Throw,
                key: Key::T
            }))
        );
        assert_eq!(
            ConsoleCommand::parse("bind jump Space"),
            Err(ConsoleError::UnknownBinding("jump".into()))
        );
        assert!(matches!(
            ConsoleCommand::parse("bind throw Banana"),
            Err(ConsoleError::UnknownKey(_))
        ));
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            ConsoleCommand::parse("dance"),
            Err(ConsoleError::UnknownCommand("dance".into()))
        );
    }

    #[test]
    fn test_give_and_list() {
        let mut session = session();
        assert_eq!(run(&mut session, "give sword 3"), "sword -> slot 3");
        assert_eq!(run(&mut session, "give shield 3"), "shield -> slot 1");

        let listing = run(&mut session, "list");
        let lines: Vec<_> = listing.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "> [1] Shield");
        assert_eq!(lines[1], "  [2] (empty)");
        assert_eq!(lines[2], "  [3] Sword");
    }

    #[test]
    fn test_select_throw_and_remove() {
        let mut session = session();
        run(&mut session, "give potion 2");
        assert_eq!(run(&mut session, "press 2"), "Equipped slot 2");
        assert_eq!(run(&mut session, "throw"), "Threw Potion");
        assert_eq!(run(&mut session, "throw"), "Nothing equipped");
        assert_eq!(run(&mut session, "remove 2"), "Slot 2 is already empty");
    }

    #[test]
    fn test_scroll_commands() {
        let mut session = session();
        assert_eq!(run(&mut session, "prev"), "Already at the end of the hotbar");
        assert_eq!(run(&mut session, "next"), "Equipped slot 2");
        assert_eq!(run(&mut session, "scroll -0.5"), "Equipped slot 1");
        assert_eq!(run(&mut session, "press W"), "W is not an inventory key");
    }

    #[test]
    fn test_bind_command() {
        let mut session = session();
        assert_eq!(run(&mut session, "bind slot1Key F1"), "slot1Key = F1");
        assert!(run(&mut session, "bindings").contains("slot1Key     F1"));
        assert_eq!(run(&mut session, "save"), "Preferences saved");
    }

    #[test]
    fn test_errors_are_reported() {
        let mut session = session();
        let command = ConsoleCommand::parse("give banana").unwrap().unwrap();
        assert!(matches!(
            execute(&mut session, command),
            Err(SessionError::UnknownItem(_))
        ));

        let command = ConsoleCommand::parse("select 9").unwrap().unwrap();
        assert!(execute(&mut session, command).is_err());
    }
}
