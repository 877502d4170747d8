//! Behavioral Pattern: Chain of Responsibility
//! Example: Loggers that each decide whether to act, then forward
//!
//! Run with: cargo run --bin b08_chain_of_responsibility

use std::cell::RefCell;
use std::rc::Rc;

/// Every performed side effect lands here so chain order is observable.
pub type Journal = Rc<RefCell<Vec<String>>>;

/// Declares the method for building the chain and the method for
/// executing a request. `forward` carries the shared continuation
/// logic every concrete handler would otherwise duplicate: call the
/// successor if present, otherwise return the terminal sentinel.
pub trait LogHandler {
    fn set_next(&mut self, next: Box<dyn LogHandler>);

    fn next(&self) -> Option<&dyn LogHandler>;

    /// Check-and-act, then unconditionally forward; returns whatever
    /// the tail of the chain returns.
    fn handle(&self, message: &str) -> bool;

    fn forward(&self, message: &str) -> bool {
        match self.next() {
            Some(handler) => handler.handle(message),
            None => false,
        }
    }
}

/// Logs to the database if possible, then executes the next handler.
pub struct DbLogger {
    next: Option<Box<dyn LogHandler>>,
    journal: Journal,
}

impl DbLogger {
    pub fn new(journal: Journal) -> Self {
        DbLogger { next: None, journal }
    }

    /// Stub; flip to true to see the database branch act.
    fn can_save(&self) -> bool {
        false
    }
}

impl LogHandler for DbLogger {
    fn set_next(&mut self, next: Box<dyn LogHandler>) {
        self.next = Some(next);
    }

    fn next(&self) -> Option<&dyn LogHandler> {
        self.next.as_deref()
    }

    fn handle(&self, message: &str) -> bool {
        if self.can_save() {
            self.journal
                .borrow_mut()
                .push(format!("Save message to database: {}", message));
        }
        self.forward(message)
    }
}

/// Sends the message by mail if possible, then executes the next handler.
pub struct MailLogger {
    next: Option<Box<dyn LogHandler>>,
    journal: Journal,
}

impl MailLogger {
    pub fn new(journal: Journal) -> Self {
        MailLogger { next: None, journal }
    }

    fn can_mail(&self) -> bool {
        true
    }
}

impl LogHandler for MailLogger {
    fn set_next(&mut self, next: Box<dyn LogHandler>) {
        self.next = Some(next);
    }

    fn next(&self) -> Option<&dyn LogHandler> {
        self.next.as_deref()
    }

    fn handle(&self, message: &str) -> bool {
        if self.can_mail() {
            self.journal
                .borrow_mut()
                .push(format!("Send message by email: {}", message));
        }
        self.forward(message)
    }
}

/// Writes the message to a log file if possible, then executes the
/// next handler if present.
pub struct FileLogger {
    next: Option<Box<dyn LogHandler>>,
    journal: Journal,
}

impl FileLogger {
    pub fn new(journal: Journal) -> Self {
        FileLogger { next: None, journal }
    }

    fn can_write(&self) -> bool {
        true
    }
}

impl LogHandler for FileLogger {
    fn set_next(&mut self, next: Box<dyn LogHandler>) {
        self.next = Some(next);
    }

    fn next(&self) -> Option<&dyn LogHandler> {
        self.next.as_deref()
    }

    fn handle(&self, message: &str) -> bool {
        if self.can_write() {
            self.journal
                .borrow_mut()
                .push(format!("Save message to log file: {}", message));
        }
        self.forward(message)
    }
}

/// Builds the db -> mail -> file chain and returns its head.
pub fn build_chain(journal: Journal) -> Box<dyn LogHandler> {
    let file = FileLogger::new(Rc::clone(&journal));
    let mut mail = MailLogger::new(Rc::clone(&journal));
    let mut db = DbLogger::new(journal);

    mail.set_next(Box::new(file));
    db.set_next(Box::new(mail));
    Box::new(db)
}

fn main() {
    let journal: Journal = Rc::new(RefCell::new(Vec::new()));
    let chain = build_chain(Rc::clone(&journal));

    chain.handle("Message text");

    for entry in journal.borrow().iter() {
        println!("{}", entry);
    }

    /* Output:
    Send message by email: Message text
    Save message to log file: Message text */
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_able_handlers_act_in_chain_order() {
        let journal: Journal = Rc::new(RefCell::new(Vec::new()));
        let chain = build_chain(Rc::clone(&journal));

        chain.handle("Message text");

        // The DB logger cannot act; mail then file, in that order.
        assert_eq!(
            *journal.borrow(),
            vec![
                "Send message by email: Message text".to_string(),
                "Save message to log file: Message text".to_string(),
            ]
        );
    }

    #[test]
    fn return_value_is_the_tails_sentinel_forwarded_to_the_head() {
        let journal: Journal = Rc::new(RefCell::new(Vec::new()));
        let chain = build_chain(journal);

        assert!(!chain.handle("anything"));
    }

    #[test]
    fn handler_without_successor_returns_false() {
        let journal: Journal = Rc::new(RefCell::new(Vec::new()));
        let lone = MailLogger::new(Rc::clone(&journal));

        assert!(!lone.handle("solo"));
        assert_eq!(journal.borrow().len(), 1);
    }
}
