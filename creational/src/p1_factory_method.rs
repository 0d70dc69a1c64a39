// Pattern 1: Factory Method
// Client code asks the factory for "a notifier" by key and gets a boxed
// trait object back; which concrete type that is stays the factory's
// business. An unknown key is not a crash: `create` answers with `None`,
// and `try_create` turns the same miss into a typed error.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("no notifier registered for channel '{0}'")]
struct UnknownChannel(String);

trait Notifier: std::fmt::Debug {
    fn notify(&self, message: &str) -> String;
}

#[derive(Debug)]
struct EmailNotifier;

impl Notifier for EmailNotifier {
    fn notify(&self, message: &str) -> String {
        format!("[email] {}", message)
    }
}

#[derive(Debug)]
struct SmsNotifier;

impl Notifier for SmsNotifier {
    fn notify(&self, message: &str) -> String {
        format!("[sms] {}", message)
    }
}

struct NotifierFactory;

impl NotifierFactory {
    fn create(channel: &str) -> Option<Box<dyn Notifier>> {
        match channel {
            "email" => Some(Box::new(EmailNotifier)),
            "sms" => Some(Box::new(SmsNotifier)),
            _ => None,
        }
    }

    fn try_create(channel: &str) -> Result<Box<dyn Notifier>, UnknownChannel> {
        Self::create(channel).ok_or_else(|| UnknownChannel(channel.to_string()))
    }
}

fn main() {
    println!("=== Factory Method Pattern Demo ===\n");

    for channel in ["email", "sms"] {
        if let Some(notifier) = NotifierFactory::create(channel) {
            println!("{}", notifier.notify("Your order has shipped"));
        }
    }

    // Unknown keys yield no product instead of a panic.
    match NotifierFactory::create("pigeon") {
        Some(notifier) => println!("{}", notifier.notify("unexpected")),
        None => println!("No notifier available for 'pigeon'"),
    }

    // The fallible twin names the failure.
    if let Err(error) = NotifierFactory::try_create("pigeon") {
        println!("try_create: {}", error);
    }
}
