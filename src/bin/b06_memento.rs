//! Behavioral Pattern: Memento
//! Example: Externally snapshotting and restoring an editor's content
//!
//! Run with: cargo run --bin b06_memento

use chrono::Local;

/// Opaque, immutable snapshot of the editor's state. Exposes its
/// metadata (creation date) and content through getters only.
pub struct EditorMemento {
    content: String,
    date: String,
}

impl EditorMemento {
    fn new(content: String) -> Self {
        EditorMemento {
            content,
            date: Local::now().format("%Y-%m-%d").to_string(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn date(&self) -> &str {
        &self.date
    }
}

/// Editor which can save its state and restore it later if necessary.
pub struct Editor {
    content: String,
}

impl Editor {
    pub fn new() -> Self {
        Editor {
            content: String::new(),
        }
    }

    pub fn type_words(&mut self, words: &str) {
        self.content = format!("{} {}", self.content, words);
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Saves the current state inside a memento snapshot. The caller
    /// owns the snapshot's lifetime; the editor keeps no copy.
    pub fn save(&self) -> EditorMemento {
        EditorMemento::new(self.content.clone())
    }

    /// Unconditionally overwrites the current content with the
    /// snapshot's content.
    pub fn restore(&mut self, memento: &EditorMemento) {
        self.content = memento.content().to_string();
    }
}

fn main() {
    let mut editor = Editor::new();
    editor.type_words("This is the first sentence.");
    editor.type_words("This is second.");
    let saved = editor.save();

    editor.type_words("And this is third.");
    println!("{}", editor.content());
    /* Output:
    This is the first sentence. This is second. And this is third. */

    editor.restore(&saved);
    println!("{}", editor.content());
    /* Output:
    This is the first sentence. This is second. */
}
