//! Behavioral Pattern: Command (queue invoker)
//! Example: Requests encapsulated as objects and drained in FIFO order
//!
//! Run with: cargo run --bin b04_command_queue

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CommandError {
    #[error("Command failed: {0}")]
    Failed(String),
}

/// Receiver of commands, contains the actual business logic. Every
/// performed action lands in its journal so callers can observe it.
pub struct Receiver {
    journal: RefCell<Vec<String>>,
}

impl Receiver {
    pub fn new() -> Self {
        Receiver {
            journal: RefCell::new(Vec::new()),
        }
    }

    pub fn turn_on(&self) {
        self.record("Receiver: Turning on something..");
    }

    pub fn turn_off(&self) {
        self.record("Receiver: Turning off something..");
    }

    pub fn journal(&self) -> Vec<String> {
        self.journal.borrow().clone()
    }

    fn record(&self, entry: &str) {
        println!("{}", entry);
        self.journal.borrow_mut().push(entry.to_string());
    }
}

/// A command does none of the work itself; it only passes the call
/// on to its receiver.
pub trait Command {
    fn execute(&self) -> Result<(), CommandError>;
}

pub struct TurnOnCommand {
    receiver: Rc<Receiver>,
}

impl TurnOnCommand {
    pub fn new(receiver: Rc<Receiver>) -> Self {
        TurnOnCommand { receiver }
    }
}

impl Command for TurnOnCommand {
    fn execute(&self) -> Result<(), CommandError> {
        self.receiver.turn_on();
        Ok(())
    }
}

pub struct TurnOffCommand {
    receiver: Rc<Receiver>,
}

impl TurnOffCommand {
    pub fn new(receiver: Rc<Receiver>) -> Self {
        TurnOffCommand { receiver }
    }
}

impl Command for TurnOffCommand {
    fn execute(&self) -> Result<(), CommandError> {
        self.receiver.turn_off();
        Ok(())
    }
}

/// Invoker holding a FIFO queue of pending commands, decoupled from
/// any receiver.
pub struct Invoker {
    commands: Vec<Box<dyn Command>>,
}

impl Invoker {
    pub fn new() -> Self {
        Invoker {
            commands: Vec::new(),
        }
    }

    /// Appends a command to the end of the queue.
    pub fn push_command(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    /// Drains the queue front-to-back, removing each command after it
    /// runs. A failing command does not stop the drain; its error is
    /// collected and the remaining commands still execute.
    pub fn execute_all(&mut self) -> Vec<CommandError> {
        let mut errors = Vec::new();
        for command in self.commands.drain(..) {
            if let Err(err) = command.execute() {
                errors.push(err);
            }
        }
        errors
    }

    pub fn pending(&self) -> usize {
        self.commands.len()
    }
}

fn main() {
    let receiver = Rc::new(Receiver::new());
    let mut invoker = Invoker::new();

    invoker.push_command(Box::new(TurnOnCommand::new(Rc::clone(&receiver))));
    invoker.push_command(Box::new(TurnOffCommand::new(Rc::clone(&receiver))));
    invoker.execute_all();

    /* Output:
    Receiver: Turning on something..
    Receiver: Turning off something.. */
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FaultyCommand;

    impl Command for FaultyCommand {
        fn execute(&self) -> Result<(), CommandError> {
            Err(CommandError::Failed("boom".into()))
        }
    }

    #[test]
    fn queue_drains_in_push_order_and_clears() {
        let receiver = Rc::new(Receiver::new());
        let mut invoker = Invoker::new();

        invoker.push_command(Box::new(TurnOnCommand::new(Rc::clone(&receiver))));
        invoker.push_command(Box::new(TurnOffCommand::new(Rc::clone(&receiver))));

        let errors = invoker.execute_all();

        assert!(errors.is_empty());
        assert_eq!(invoker.pending(), 0);
        assert_eq!(
            receiver.journal(),
            vec![
                "Receiver: Turning on something..".to_string(),
                "Receiver: Turning off something..".to_string(),
            ]
        );
    }

    #[test]
    fn a_failing_command_does_not_stop_the_drain() {
        let receiver = Rc::new(Receiver::new());
        let mut invoker = Invoker::new();

        invoker.push_command(Box::new(TurnOnCommand::new(Rc::clone(&receiver))));
        invoker.push_command(Box::new(FaultyCommand));
        invoker.push_command(Box::new(TurnOffCommand::new(Rc::clone(&receiver))));

        let errors = invoker.execute_all();

        assert_eq!(errors, vec![CommandError::Failed("boom".into())]);
        // The command after the failure still ran.
        assert_eq!(receiver.journal().len(), 2);
        assert_eq!(invoker.pending(), 0);
    }

    #[test]
    fn executing_an_empty_queue_is_a_no_op() {
        let mut invoker = Invoker::new();
        assert!(invoker.execute_all().is_empty());
    }
}
