// Pattern: Memento
// Snapshots of an object's state, restorable later without exposing internals.

use crate::transcript::Transcript;

/// Opaque snapshot; only `TextEditor` can read it back.
#[derive(Debug, Clone)]
pub struct TextMemento {
    state: String,
}

#[derive(Debug, Default)]
pub struct TextEditor {
    text: String,
}

impl TextEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn type_text(&mut self, text: &str) -> &str {
        self.text.push_str(text);
        &self.text
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn save(&self) -> TextMemento {
        TextMemento {
            state: self.text.clone(),
        }
    }

    pub fn restore(&mut self, memento: TextMemento) {
        self.text = memento.state;
    }
}

#[derive(Debug, Default)]
pub struct History {
    mementos: Vec<TextMemento>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, memento: TextMemento) {
        self.mementos.push(memento);
    }

    /// Most recent snapshot first.
    pub fn undo(&mut self) -> Option<TextMemento> {
        self.mementos.pop()
    }

    pub fn len(&self) -> usize {
        self.mementos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mementos.is_empty()
    }
}

pub fn demo(out: &mut Transcript) {
    let mut editor = TextEditor::new();
    let mut history = History::new();

    out.line(format!("Current text: {}", editor.type_text("Hello")));
    history.push(editor.save());

    out.line(format!("Current text: {}", editor.type_text(" World!")));
    history.push(editor.save());

    out.line(format!("Current text: {}", editor.type_text(" Goodbye!")));

    while let Some(memento) = history.undo() {
        editor.restore(memento);
        out.line(format!("Restored text: {}", editor.text()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_restore_returns_to_snapshot() {
        let mut editor = TextEditor::new();
        editor.type_text("draft");
        let snapshot = editor.save();
        editor.type_text(" v2");

        editor.restore(snapshot);
        assert_eq!(editor.text(), "draft");
    }

    #[test]
    fn test_history_is_lifo() {
        let mut editor = TextEditor::new();
        let mut history = History::new();
        editor.type_text("a");
        history.push(editor.save());
        editor.type_text("b");
        history.push(editor.save());
        assert_eq!(history.len(), 2);

        editor.restore(history.undo().unwrap());
        assert_eq!(editor.text(), "ab");
        editor.restore(history.undo().unwrap());
        assert_eq!(editor.text(), "a");
        assert!(history.undo().is_none());
        assert!(history.is_empty());
    }

    #[test]
    fn test_demo_transcript() {
        let mut out = Transcript::new();
        demo(&mut out);
        assert_eq!(
            out.lines(),
            [
                "Current text: Hello",
                "Current text: Hello World!",
                "Current text: Hello World! Goodbye!",
                "Restored text: Hello World!",
                "Restored text: Hello",
            ]
        );
    }
}
