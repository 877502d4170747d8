//! Behavioral Pattern: State
//! Example: Text editor delegating formatting to its current state
//!
//! Run with: cargo run --bin b02_state

/// State trait declares the method every concrete writing state implements.
pub trait WritingState {
    fn write(&self, words: &str) -> String;
}

pub struct DefaultText;

impl WritingState for DefaultText {
    fn write(&self, words: &str) -> String {
        words.to_string()
    }
}

pub struct UpperCase;

impl WritingState for UpperCase {
    fn write(&self, words: &str) -> String {
        words.to_uppercase()
    }
}

pub struct LowerCase;

impl WritingState for LowerCase {
    fn write(&self, words: &str) -> String {
        words.to_lowercase()
    }
}

/// The editor holds exactly one active state at a time and delegates
/// its formatting behavior to it.
pub struct TextEditor {
    state: Box<dyn WritingState>,
}

impl TextEditor {
    pub fn new(state: Box<dyn WritingState>) -> Self {
        TextEditor { state }
    }

    /// Changes the editor state at runtime. No self-transitions are
    /// encoded anywhere; every switch comes from the outside.
    pub fn set_state(&mut self, state: Box<dyn WritingState>) {
        self.state = state;
    }

    /// Formats a line according to the current state.
    pub fn type_line(&self, words: &str) -> String {
        self.state.write(words)
    }
}

fn main() {
    let mut editor = TextEditor::new(Box::new(DefaultText));
    println!("{}", editor.type_line("First line"));

    editor.set_state(Box::new(UpperCase));
    println!("{}", editor.type_line("Second line"));

    editor.set_state(Box::new(LowerCase));
    println!("{}", editor.type_line("Third line"));

    /* Output:
    First line
    SECOND LINE
    third line */
}
