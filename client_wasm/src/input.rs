//! Keyboard input handling

use game_core::{InputMapper, Key};

/// Map a browser `KeyboardEvent.key` value to a game key
pub fn key_from_str(key: &str) -> Option<Key> {
    match key {
        "Escape" => Some(Key::Escape),
        " " | "Spacebar" => Some(Key::Space),
        "r" | "R" => Some(Key::Reset),
        "ArrowUp" | "w" | "W" => Some(Key::Up),
        "ArrowDown" | "s" | "S" => Some(Key::Down),
        _ => None,
    }
}

/// Handle key down event
pub fn handle_key_down(input: &mut InputMapper, key: &str) {
    if let Some(key) = key_from_str(key) {
        input.key_down(key);
    }
}

/// Handle key up event
pub fn handle_key_up(input: &mut InputMapper, key: &str) {
    if let Some(key) = key_from_str(key) {
        input.key_up(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_key_names() {
        assert_eq!(key_from_str("Escape"), Some(Key::Escape));
        assert_eq!(key_from_str(" "), Some(Key::Space));
        assert_eq!(key_from_str("Spacebar"), Some(Key::Space));
        assert_eq!(key_from_str("R"), Some(Key::Reset));
        assert_eq!(key_from_str("w"), Some(Key::Up));
        assert_eq!(key_from_str("ArrowDown"), Some(Key::Down));
        assert_eq!(key_from_str("Enter"), None);
    }

    #[test]
    fn test_unknown_keys_leave_input_untouched() {
        let mut input = InputMapper::new();
        handle_key_down(&mut input, "ArrowUp");
        handle_key_up(&mut input, "Shift");
        assert_eq!(input.take_commands().paddle_dir, -1);
    }

    #[test]
    fn test_arrow_release_stops_paddle() {
        let mut input = InputMapper::new();
        handle_key_down(&mut input, "s");
        handle_key_up(&mut input, "ArrowUp");
        assert_eq!(input.take_commands().paddle_dir, 0);
    }
}
