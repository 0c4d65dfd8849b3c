#![forbid(unsafe_code)]

//! The modal editor state machine.
//!
//! Three modes: `Command` dispatches single-key actions, `Insert` appends
//! to the text, and `Input` collects a file name for a pending open or
//! write. The machine is pure: [`EditorState::apply`] consumes one key
//! and returns an [`Action`] for the caller to execute, so every
//! transition can be tested without a terminal or a filesystem.

use textwall_core::event::{KeyCode, KeyEvent};

/// Which mode the editor is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Single-key dispatch; nothing is typed into the text.
    #[default]
    Command,
    /// Keys append to the text buffer.
    Insert,
    /// Keys build a file name on the prompt line.
    Input,
}

/// What a completed file-name prompt will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    Open,
    Write,
}

/// Side effect requested by a key, executed by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    None,
    Quit,
    OpenFile(String),
    WriteFile(String),
    /// Narrow the side margins (widen the frame).
    ShrinkMargin,
    /// Widen the side margins (narrow the frame).
    GrowMargin,
}

/// Editor state: mode, text, prompt input, and the status message.
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    mode: Mode,
    pending: Option<Pending>,
    text: Vec<char>,
    input: String,
    status: String,
}

impl EditorState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The typed text, newlines included.
    #[must_use]
    pub fn text(&self) -> &[char] {
        &self.text
    }

    /// The file name being typed, while in `Input` mode.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The current status message (may be empty).
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Prompt text for the pending operation, while in `Input` mode.
    #[must_use]
    pub fn prompt(&self) -> Option<&'static str> {
        match self.pending? {
            Pending::Open => Some("Enter file name:"),
            Pending::Write => Some("Enter file name to save to:"),
        }
    }

    /// Status-line label for the current mode.
    #[must_use]
    pub fn mode_label(&self) -> &'static str {
        match self.mode {
            Mode::Command => "command",
            Mode::Insert => "insert",
            Mode::Input => "input",
        }
    }

    /// Replace the text wholesale (after an open).
    pub fn set_text(&mut self, text: Vec<char>) {
        self.text = text;
    }

    pub fn set_status(&mut self, status: String) {
        self.status = status;
    }

    /// Process one key press.
    pub fn apply(&mut self, key: KeyEvent) -> Action {
        match self.mode {
            Mode::Command => self.apply_command(key),
            Mode::Insert => self.apply_insert(key),
            Mode::Input => self.apply_input(key),
        }
    }

    fn apply_command(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q' | 'Q') => Action::Quit,
            KeyCode::Char('i' | 'I') => {
                self.mode = Mode::Insert;
                self.status.clear();
                Action::None
            }
            KeyCode::Char('o' | 'O') => {
                self.begin_prompt(Pending::Open);
                Action::None
            }
            KeyCode::Char('w' | 'W') => {
                self.begin_prompt(Pending::Write);
                Action::None
            }
            KeyCode::Char('+' | '=') => Action::ShrinkMargin,
            KeyCode::Char('-') => Action::GrowMargin,
            _ => Action::None,
        }
    }

    fn apply_insert(&mut self, key: KeyEvent) -> Action {
        match key.code {
            // Quits even mid-typing; there is no way to type a literal q.
            KeyCode::Char('q' | 'Q') => Action::Quit,
            KeyCode::Escape => {
                self.mode = Mode::Command;
                Action::None
            }
            KeyCode::Enter => {
                self.text.push('\n');
                Action::None
            }
            KeyCode::Backspace => {
                self.text.pop();
                Action::None
            }
            KeyCode::Char(c) => {
                self.text.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn apply_input(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Escape => {
                self.end_prompt();
                self.status = String::from("canceled");
                Action::None
            }
            KeyCode::Enter => {
                // Dispatches whatever was typed, empty included; the
                // file layer reports the failure like any other.
                let pending = self.pending;
                let name = std::mem::take(&mut self.input);
                self.end_prompt();
                match pending {
                    Some(Pending::Open) => Action::OpenFile(name),
                    Some(Pending::Write) => Action::WriteFile(name),
                    None => Action::None,
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
                Action::None
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn begin_prompt(&mut self, pending: Pending) {
        self.mode = Mode::Input;
        self.pending = Some(pending);
        self.input.clear();
        self.status.clear();
    }

    fn end_prompt(&mut self) {
        self.mode = Mode::Command;
        self.pending = None;
        self.input.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c))
    }

    fn type_str(editor: &mut EditorState, s: &str) {
        for c in s.chars() {
            assert_eq!(editor.apply(key(c)), Action::None);
        }
    }

    #[test]
    fn starts_in_command_mode_with_empty_text() {
        let editor = EditorState::new();
        assert_eq!(editor.mode(), Mode::Command);
        assert!(editor.text().is_empty());
        assert!(editor.status().is_empty());
    }

    #[test]
    fn insert_then_escape_returns_to_command() {
        let mut editor = EditorState::new();
        assert_eq!(editor.apply(key('i')), Action::None);
        assert_eq!(editor.mode(), Mode::Insert);
        type_str(&mut editor, "hi");
        assert_eq!(editor.apply(KeyEvent::new(KeyCode::Escape)), Action::None);
        assert_eq!(editor.mode(), Mode::Command);
        assert_eq!(editor.text(), &['h', 'i']);
    }

    #[test]
    fn q_quits_from_command_mode() {
        let mut editor = EditorState::new();
        assert_eq!(editor.apply(key('q')), Action::Quit);
        let mut editor = EditorState::new();
        assert_eq!(editor.apply(key('Q')), Action::Quit);
    }

    #[test]
    fn q_quits_from_insert_mode_without_inserting() {
        let mut editor = EditorState::new();
        editor.apply(key('i'));
        assert_eq!(editor.apply(key('q')), Action::Quit);
        assert!(editor.text().is_empty());
    }

    #[test]
    fn enter_and_backspace_edit_the_text() {
        let mut editor = EditorState::new();
        editor.apply(key('i'));
        type_str(&mut editor, "ab");
        editor.apply(KeyEvent::new(KeyCode::Enter));
        type_str(&mut editor, "c");
        assert_eq!(editor.text(), &['a', 'b', '\n', 'c']);
        editor.apply(KeyEvent::new(KeyCode::Backspace));
        editor.apply(KeyEvent::new(KeyCode::Backspace));
        assert_eq!(editor.text(), &['a', 'b']);
    }

    #[test]
    fn backspace_on_empty_text_is_harmless() {
        let mut editor = EditorState::new();
        editor.apply(key('i'));
        editor.apply(KeyEvent::new(KeyCode::Backspace));
        assert!(editor.text().is_empty());
    }

    #[test]
    fn tab_is_ignored_in_insert_mode() {
        let mut editor = EditorState::new();
        editor.apply(key('i'));
        assert_eq!(editor.apply(KeyEvent::new(KeyCode::Tab)), Action::None);
        assert!(editor.text().is_empty());
        assert_eq!(editor.mode(), Mode::Insert);
    }

    #[test]
    fn open_prompt_collects_a_name() {
        let mut editor = EditorState::new();
        editor.apply(key('o'));
        assert_eq!(editor.mode(), Mode::Input);
        assert_eq!(editor.prompt(), Some("Enter file name:"));
        type_str(&mut editor, "a.txt");
        assert_eq!(editor.input(), "a.txt");
        let action = editor.apply(KeyEvent::new(KeyCode::Enter));
        assert_eq!(action, Action::OpenFile(String::from("a.txt")));
        assert_eq!(editor.mode(), Mode::Command);
        assert!(editor.input().is_empty());
    }

    #[test]
    fn write_prompt_yields_a_write_action() {
        let mut editor = EditorState::new();
        editor.apply(key('w'));
        assert_eq!(editor.prompt(), Some("Enter file name to save to:"));
        type_str(&mut editor, "out");
        assert_eq!(
            editor.apply(KeyEvent::new(KeyCode::Enter)),
            Action::WriteFile(String::from("out"))
        );
    }

    #[test]
    fn uppercase_command_keys_work_too() {
        let mut editor = EditorState::new();
        editor.apply(key('I'));
        assert_eq!(editor.mode(), Mode::Insert);

        let mut editor = EditorState::new();
        editor.apply(key('O'));
        assert_eq!(editor.prompt(), Some("Enter file name:"));

        let mut editor = EditorState::new();
        editor.apply(key('W'));
        assert_eq!(editor.prompt(), Some("Enter file name to save to:"));
    }

    #[test]
    fn q_is_a_literal_character_in_a_prompt() {
        let mut editor = EditorState::new();
        editor.apply(key('o'));
        assert_eq!(editor.apply(key('q')), Action::None);
        assert_eq!(editor.input(), "q");
    }

    #[test]
    fn escape_cancels_a_prompt() {
        let mut editor = EditorState::new();
        editor.apply(key('w'));
        type_str(&mut editor, "half-typed");
        assert_eq!(editor.apply(KeyEvent::new(KeyCode::Escape)), Action::None);
        assert_eq!(editor.mode(), Mode::Command);
        assert!(editor.input().is_empty());
        assert_eq!(editor.status(), "canceled");
    }

    #[test]
    fn empty_prompt_submission_still_dispatches() {
        let mut editor = EditorState::new();
        editor.apply(key('o'));
        assert_eq!(
            editor.apply(KeyEvent::new(KeyCode::Enter)),
            Action::OpenFile(String::new())
        );
        assert_eq!(editor.mode(), Mode::Command);

        let mut editor = EditorState::new();
        editor.apply(key('w'));
        assert_eq!(
            editor.apply(KeyEvent::new(KeyCode::Enter)),
            Action::WriteFile(String::new())
        );
    }

    #[test]
    fn prompt_backspace_edits_the_name() {
        let mut editor = EditorState::new();
        editor.apply(key('o'));
        type_str(&mut editor, "ab");
        editor.apply(KeyEvent::new(KeyCode::Backspace));
        assert_eq!(editor.input(), "a");
    }

    #[test]
    fn margin_keys_request_layout_changes() {
        let mut editor = EditorState::new();
        assert_eq!(editor.apply(key('+')), Action::ShrinkMargin);
        assert_eq!(editor.apply(key('=')), Action::ShrinkMargin);
        assert_eq!(editor.apply(key('-')), Action::GrowMargin);
    }

    #[test]
    fn unbound_command_keys_are_ignored() {
        let mut editor = EditorState::new();
        for c in ['x', 'z', '0', ' '] {
            assert_eq!(editor.apply(key(c)), Action::None);
            assert_eq!(editor.mode(), Mode::Command);
        }
        assert_eq!(editor.apply(KeyEvent::new(KeyCode::Up)), Action::None);
    }

    #[test]
    fn text_survives_mode_round_trips() {
        let mut editor = EditorState::new();
        editor.apply(key('i'));
        type_str(&mut editor, "keep");
        editor.apply(KeyEvent::new(KeyCode::Escape));
        editor.apply(key('o'));
        editor.apply(KeyEvent::new(KeyCode::Escape));
        editor.apply(key('i'));
        assert_eq!(editor.text(), &['k', 'e', 'e', 'p']);
    }
}
