// Pattern 8: Mediator
// Colleagues never talk to each other directly; every message goes
// through the chat room, which owns the participant list and routes to
// everyone except the sender. With two participants this degenerates to
// "deliver to the other one".

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
enum SendError {
    #[error("no colleague named '{0}' is registered with the chat room")]
    UnknownSender(String),
}

trait Colleague {
    fn name(&self) -> &str;
    fn receive(&self, from: &str, message: &str);
}

struct ChatUser {
    name: String,
    inbox: RefCell<Vec<String>>,
}

impl ChatUser {
    fn new(name: &str) -> Self {
        ChatUser {
            name: name.to_string(),
            inbox: RefCell::new(Vec::new()),
        }
    }

    fn inbox(&self) -> Vec<String> {
        self.inbox.borrow().clone()
    }
}

impl Colleague for ChatUser {
    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&self, from: &str, message: &str) {
        println!("{} received from {}: {}", self.name, from, message);
        self.inbox.borrow_mut().push(format!("{}: {}", from, message));
    }
}

// The mediator. Colleagues are registered once and addressed by name
// afterwards; routing lives here and nowhere else.
#[derive(Default)]
struct ChatRoom {
    colleagues: Vec<Rc<dyn Colleague>>,
}

impl ChatRoom {
    fn register(&mut self, colleague: Rc<dyn Colleague>) {
        self.colleagues.push(colleague);
    }

    /// Delivers `message` to every colleague except the sender and
    /// returns how many copies went out.
    fn send_from(&self, sender: &str, message: &str) -> Result<usize, SendError> {
        if !self.colleagues.iter().any(|c| c.name() == sender) {
            return Err(SendError::UnknownSender(sender.to_string()));
        }

        let mut delivered = 0;
        for colleague in &self.colleagues {
            if colleague.name() != sender {
                colleague.receive(sender, message);
                delivered += 1;
            }
        }
        Ok(delivered)
    }
}

fn main() {
    println!("=== Mediator Pattern Demo ===\n");

    let alice = Rc::new(ChatUser::new("Alice"));
    let bob = Rc::new(ChatUser::new("Bob"));
    let carol = Rc::new(ChatUser::new("Carol"));

    let mut room = ChatRoom::default();
    room.register(alice.clone());
    room.register(bob.clone());
    room.register(carol.clone());

    if let Ok(count) = room.send_from("Alice", "Hello, everyone!") {
        println!("(delivered to {} colleagues)\n", count);
    }
    if let Ok(count) = room.send_from("Bob", "Hello, Alice!") {
        println!("(delivered to {} colleagues)\n", count);
    }

    // A sender the room has never heard of is reported, not delivered.
    if let Err(error) = room.send_from("Mallory", "Let me in") {
        println!("Delivery failed: {}", error);
    }

    println!("\nAlice's inbox: {:?}", alice.inbox());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room_with(users: &[&Rc<ChatUser>]) -> ChatRoom {
        let mut room = ChatRoom::default();
        for user in users {
            room.register(Rc::clone(user) as Rc<dyn Colleague>);
        }
        room
    }

    #[test]
    fn test_message_skips_the_sender() {
        let alice = Rc::new(ChatUser::new("Alice"));
        let bob = Rc::new(ChatUser::new("Bob"));
        let carol = Rc::new(ChatUser::new("Carol"));
        let room = room_with(&[&alice, &bob, &carol]);

        let delivered = room.send_from("Alice", "standup in 5").unwrap();

        assert_eq!(delivered, 2);
        assert!(alice.inbox().is_empty());
        assert_eq!(bob.inbox(), vec!["Alice: standup in 5"]);
        assert_eq!(carol.inbox(), vec!["Alice: standup in 5"]);
    }

    #[test]
    fn test_two_party_room_routes_to_the_other() {
        let alice = Rc::new(ChatUser::new("Alice"));
        let bob = Rc::new(ChatUser::new("Bob"));
        let room = room_with(&[&alice, &bob]);

        room.send_from("Bob", "Hello, Alice!").unwrap();

        assert_eq!(alice.inbox(), vec!["Bob: Hello, Alice!"]);
        assert!(bob.inbox().is_empty());
    }

    #[test]
    fn test_unknown_sender_is_rejected() {
        let alice = Rc::new(ChatUser::new("Alice"));
        let room = room_with(&[&alice]);

        let error = room.send_from("Mallory", "hi").unwrap_err();

        assert_eq!(error, SendError::UnknownSender("Mallory".to_string()));
        assert!(alice.inbox().is_empty());
    }

    #[test]
    fn test_lone_colleague_has_no_audience() {
        let alice = Rc::new(ChatUser::new("Alice"));
        let room = room_with(&[&alice]);

        assert_eq!(room.send_from("Alice", "echo?"), Ok(0));
    }
}
