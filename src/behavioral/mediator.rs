// Pattern: Mediator
// Colleagues talk through a mediator instead of referencing each other.

use std::cell::RefCell;
use std::rc::Rc;

use crate::transcript::Transcript;

pub trait ChatMediator {
    fn show_message(&self, sender: &str, message: &str);
}

#[derive(Default)]
pub struct ChatRoom {
    log: RefCell<Vec<String>>,
}

impl ChatRoom {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn messages(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

impl ChatMediator for ChatRoom {
    fn show_message(&self, sender: &str, message: &str) {
        self.log.borrow_mut().push(format!("{sender}: {message}"));
    }
}

pub struct User {
    name: String,
    mediator: Rc<dyn ChatMediator>,
}

impl User {
    pub fn new(name: impl Into<String>, mediator: Rc<dyn ChatMediator>) -> Self {
        Self {
            name: name.into(),
            mediator,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn send(&self, message: &str) {
        self.mediator.show_message(&self.name, message);
    }
}

pub fn demo(out: &mut Transcript) {
    let room = ChatRoom::new();
    let alice = User::new("Alice", room.clone());
    let bob = User::new("Bob", room.clone());

    alice.send("Hi Bob!");
    bob.send("Hello Alice!");

    for message in room.messages() {
        out.line(message);
    }
}
