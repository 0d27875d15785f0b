// Pattern: Command
// Requests become objects: the invoker triggers them, receivers do the work,
// and a history makes them undoable.

use std::cell::Cell;
use std::rc::Rc;

use crate::transcript::Transcript;

// ============================================================================
// Receivers
// ============================================================================

#[derive(Debug, Default)]
pub struct Light {
    on: Cell<bool>,
}

impl Light {
    pub fn turn_on(&self) -> &'static str {
        self.on.set(true);
        "Light is on"
    }

    pub fn turn_off(&self) -> &'static str {
        self.on.set(false);
        "Light is off"
    }

    pub fn is_on(&self) -> bool {
        self.on.get()
    }
}

#[derive(Debug, Default)]
pub struct Fan {
    running: Cell<bool>,
}

impl Fan {
    pub fn start(&self) -> &'static str {
        self.running.set(true);
        "Fan is on"
    }

    pub fn stop(&self) -> &'static str {
        self.running.set(false);
        "Fan is off"
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

// ============================================================================
// Commands
// ============================================================================

pub trait Command {
    fn execute(&self) -> &'static str;
    fn undo(&self) -> &'static str;
}

pub struct LightOn(pub Rc<Light>);
impl Command for LightOn {
    fn execute(&self) -> &'static str {
        self.0.turn_on()
    }

    fn undo(&self) -> &'static str {
        self.0.turn_off()
    }
}

pub struct LightOff(pub Rc<Light>);
impl Command for LightOff {
    fn execute(&self) -> &'static str {
        self.0.turn_off()
    }

    fn undo(&self) -> &'static str {
        self.0.turn_on()
    }
}

pub struct FanStart(pub Rc<Fan>);
impl Command for FanStart {
    fn execute(&self) -> &'static str {
        self.0.start()
    }

    fn undo(&self) -> &'static str {
        self.0.stop()
    }
}

pub struct FanStop(pub Rc<Fan>);
impl Command for FanStop {
    fn execute(&self) -> &'static str {
        self.0.stop()
    }

    fn undo(&self) -> &'static str {
        self.0.start()
    }
}

// ============================================================================
// Invoker
// ============================================================================

#[derive(Default)]
pub struct RemoteControl {
    slot: Option<Rc<dyn Command>>,
    history: Vec<Rc<dyn Command>>,
}

impl RemoteControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_command(&mut self, command: Rc<dyn Command>) {
        self.slot = Some(command);
    }

    /// Does nothing until a command is set.
    pub fn press_button(&mut self, out: &mut Transcript) {
        if let Some(command) = &self.slot {
            out.line(command.execute());
            self.history.push(Rc::clone(command));
        }
    }

    pub fn undo(&mut self, out: &mut Transcript) -> bool {
        match self.history.pop() {
            Some(command) => {
                out.line(format!("Undo: {}", command.undo()));
                true
            }
            None => false,
        }
    }
}

pub fn demo(out: &mut Transcript) {
    let light = Rc::new(Light::default());
    let fan = Rc::new(Fan::default());

    let mut remote = RemoteControl::new();
    remote.set_command(Rc::new(LightOn(Rc::clone(&light))));
    remote.press_button(out);

    remote.set_command(Rc::new(FanStart(Rc::clone(&fan))));
    remote.press_button(out);

    remote.set_command(Rc::new(LightOff(Rc::clone(&light))));
    remote.press_button(out);

    while remote.undo(out) {}
    out.line(format!(
        "Light on: {}, fan running: {}",
        light.is_on(),
        fan.is_running()
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_without_command_is_noop() {
        let mut out = Transcript::new();
        let mut remote = RemoteControl::new();
        remote.press_button(&mut out);
        assert!(out.is_empty());
        assert!(!remote.undo(&mut out));
    }

    #[test]
    fn test_commands_reach_receivers() {
        let mut out = Transcript::new();
        let fan = Rc::new(Fan::default());
        let mut remote = RemoteControl::new();

        remote.set_command(Rc::new(FanStart(Rc::clone(&fan))));
        remote.press_button(&mut out);
        assert!(fan.is_running());

        remote.set_command(Rc::new(FanStop(Rc::clone(&fan))));
        remote.press_button(&mut out);
        assert!(!fan.is_running());
        assert_eq!(out.lines(), ["Fan is on", "Fan is off"]);
    }

    #[test]
    fn test_undo_reverts_in_reverse_order() {
        let mut out = Transcript::new();
        let light = Rc::new(Light::default());
        let mut remote = RemoteControl::new();

        remote.set_command(Rc::new(LightOn(Rc::clone(&light))));
        remote.press_button(&mut out);
        remote.set_command(Rc::new(LightOff(Rc::clone(&light))));
        remote.press_button(&mut out);
        assert!(!light.is_on());

        assert!(remote.undo(&mut out));
        assert!(light.is_on());
        assert!(remote.undo(&mut out));
        assert!(!light.is_on());
        assert!(!remote.undo(&mut out));
    }

    #[test]
    fn test_demo_restores_everything() {
        let mut out = Transcript::new();
        demo(&mut out);
        assert!(out.contains("Light on: false, fan running: false"));
    }
}
