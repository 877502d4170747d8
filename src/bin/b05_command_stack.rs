//! Behavioral Pattern: Command (stack invoker with rollback)
//! Example: Commands capture their parameters and know their inverse
//!
//! Run with: cargo run --bin b05_command_stack

use std::cell::RefCell;
use std::rc::Rc;

/// Receiver of commands. Actions are journaled so rollback behavior
/// can be observed from the outside.
pub struct Receiver {
    journal: RefCell<Vec<String>>,
}

impl Receiver {
    pub fn new() -> Self {
        Receiver {
            journal: RefCell::new(Vec::new()),
        }
    }

    pub fn turn_on(&self, params: &[String]) {
        self.record(format!(
            "Receiver: Turning on something with params: {}",
            params.join(", ")
        ));
    }

    pub fn turn_off(&self, params: &[String]) {
        self.record(format!(
            "Receiver: Turning off something with params: {}",
            params.join(", ")
        ));
    }

    pub fn journal(&self) -> Vec<String> {
        self.journal.borrow().clone()
    }

    fn record(&self, entry: String) {
        println!("{}", entry);
        self.journal.borrow_mut().push(entry);
    }
}

/// Extended command: an immutable (receiver, parameters) pair that can
/// execute and, if necessary, roll back with the logically inverse
/// receiver operation using the same captured parameters.
pub trait Command {
    fn execute(&self);
    fn rollback(&self);
}

pub struct TurnOnCommand {
    receiver: Rc<Receiver>,
    params: Vec<String>,
}

impl TurnOnCommand {
    pub fn new(receiver: Rc<Receiver>, params: &[&str]) -> Self {
        TurnOnCommand {
            receiver,
            params: params.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl Command for TurnOnCommand {
    fn execute(&self) {
        self.receiver.turn_on(&self.params);
    }

    fn rollback(&self) {
        self.receiver.turn_off(&self.params);
    }
}

/// Invoker holding a LIFO stack: the most recently pushed command is
/// the first executed and the first rolled back.
pub struct Invoker {
    commands: Vec<Box<dyn Command>>,
}

impl Invoker {
    pub fn new() -> Self {
        Invoker {
            commands: Vec::new(),
        }
    }

    pub fn push_command(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    /// Pops and executes the last command. Returns false on an empty
    /// stack, the demo's terminal sentinel.
    pub fn execute_command(&mut self) -> bool {
        match self.commands.pop() {
            Some(command) => {
                command.execute();
                true
            }
            None => false,
        }
    }

    /// Pops and rolls back the last command.
    pub fn rollback_command(&mut self) -> bool {
        match self.commands.pop() {
            Some(command) => {
                command.rollback();
                true
            }
            None => false,
        }
    }
}

fn main() {
    let receiver = Rc::new(Receiver::new());
    let mut invoker = Invoker::new();

    invoker.push_command(Box::new(TurnOnCommand::new(
        Rc::clone(&receiver),
        &["some_param"],
    )));
    invoker.execute_command();

    invoker.push_command(Box::new(TurnOnCommand::new(
        Rc::clone(&receiver),
        &["kill", "-9"],
    )));
    invoker.rollback_command();

    /* Output:
    Receiver: Turning on something with params: some_param
    Receiver: Turning off something with params: kill, -9 */
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rollback_runs_exactly_the_last_pushed_commands_inverse() {
        let receiver = Rc::new(Receiver::new());
        let mut invoker = Invoker::new();

        invoker.push_command(Box::new(TurnOnCommand::new(Rc::clone(&receiver), &["c1"])));
        invoker.push_command(Box::new(TurnOnCommand::new(Rc::clone(&receiver), &["c2"])));

        assert!(invoker.rollback_command());

        // Only C2's inverse ran; C1 is untouched and still pending.
        assert_eq!(
            receiver.journal(),
            vec!["Receiver: Turning off something with params: c2".to_string()]
        );
    }

    #[test]
    fn execute_pops_most_recent_first() {
        let receiver = Rc::new(Receiver::new());
        let mut invoker = Invoker::new();

        invoker.push_command(Box::new(TurnOnCommand::new(Rc::clone(&receiver), &["a"])));
        invoker.push_command(Box::new(TurnOnCommand::new(Rc::clone(&receiver), &["b"])));

        assert!(invoker.execute_command());
        assert!(invoker.execute_command());

        assert_eq!(
            receiver.journal(),
            vec![
                "Receiver: Turning on something with params: b".to_string(),
                "Receiver: Turning on something with params: a".to_string(),
            ]
        );
    }

    #[test]
    fn empty_stack_returns_the_false_sentinel() {
        let mut invoker = Invoker::new();
        assert!(!invoker.execute_command());
        assert!(!invoker.rollback_command());
    }
}
