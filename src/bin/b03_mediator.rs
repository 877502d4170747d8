//! Behavioral Pattern: Mediator
//! Example: Chat components talking only through a central dispatcher
//!
//! Run with: cargo run --bin b03_mediator

use std::rc::Rc;

/// Identifies who raised a notification. Components never hand each
/// other references, only this tag plus a payload.
pub enum Sender<'a> {
    User { name: &'a str },
    Bot { name: &'a str },
}

/// General mediator interface.
pub trait Mediator {
    fn notify(&self, sender: Sender, event: &str, data: &str) -> Option<String>;
}

/// Concrete mediator receives notices from components and knows how
/// to react to them. Dispatch is a sequence of (sender-kind, event-tag)
/// guarded branches; unmatched combinations are silently ignored.
pub struct ChatMediator;

impl Mediator for ChatMediator {
    fn notify(&self, sender: Sender, event: &str, data: &str) -> Option<String> {
        match (sender, event) {
            (Sender::User { name }, "sendMessage") => Some(format!("{}: {}", name, data)),
            (Sender::Bot { name }, "banUser") => {
                Some(format!("User {} was banned by {}", data, name))
            }
            _ => None,
        }
    }
}

/// Concrete components are not directly related. The only channel of
/// communication is sending notifications to the mediator.
pub struct User {
    pub name: String,
    mediator: Rc<dyn Mediator>,
}

impl User {
    pub fn new(name: impl Into<String>, mediator: Rc<dyn Mediator>) -> Self {
        User {
            name: name.into(),
            mediator,
        }
    }

    pub fn send_message(&self, message: &str) -> Option<String> {
        self.mediator
            .notify(Sender::User { name: &self.name }, "sendMessage", message)
    }
}

pub struct Bot {
    pub name: String,
    mediator: Rc<dyn Mediator>,
}

impl Bot {
    pub fn new(mediator: Rc<dyn Mediator>) -> Self {
        Bot {
            name: "Bot".to_string(),
            mediator,
        }
    }

    pub fn ban_user(&self, user: &User) -> Option<String> {
        self.mediator
            .notify(Sender::Bot { name: &self.name }, "banUser", &user.name)
    }
}

fn main() {
    let chat: Rc<dyn Mediator> = Rc::new(ChatMediator);

    let john = User::new("John", Rc::clone(&chat));
    let jane = User::new("Jane", Rc::clone(&chat));
    let bot = Bot::new(Rc::clone(&chat));

    // every chat member interacts with the mediator,
    // but not with each other directly
    for line in [
        john.send_message("Hi!"),
        jane.send_message("What's up?"),
        bot.ban_user(&john),
    ]
    .into_iter()
    .flatten()
    {
        println!("{}", line);
    }

    /* Output:
    John: Hi!
    Jane: What's up?
    User John was banned by Bot */
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_are_echoed_with_sender_name() {
        let chat: Rc<dyn Mediator> = Rc::new(ChatMediator);
        let john = User::new("John", chat);

        assert_eq!(john.send_message("Hi!").as_deref(), Some("John: Hi!"));
    }

    #[test]
    fn bot_ban_reports_both_parties() {
        let chat: Rc<dyn Mediator> = Rc::new(ChatMediator);
        let john = User::new("John", Rc::clone(&chat));
        let bot = Bot::new(chat);

        assert_eq!(
            bot.ban_user(&john).as_deref(),
            Some("User John was banned by Bot")
        );
    }

    #[test]
    fn unmatched_combinations_are_silently_ignored() {
        let chat = ChatMediator;

        // A user cannot ban, a bot cannot chat; no default branch fires.
        assert_eq!(chat.notify(Sender::User { name: "John" }, "banUser", "Jane"), None);
        assert_eq!(chat.notify(Sender::Bot { name: "Bot" }, "sendMessage", "Hi"), None);
        assert_eq!(chat.notify(Sender::User { name: "John" }, "unknown", ""), None);
    }
}
