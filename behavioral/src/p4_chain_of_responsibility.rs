// Pattern 4: Chain of Responsibility
// Handlers form a linked chain; each one either handles the request or
// passes it to its successor. The sender only ever talks to the head of
// the chain and never learns who resolved the request.

use colored::Colorize;

trait Handler {
    fn handle(&self, severity: u32) -> String;
    fn set_next(&mut self, next: Box<dyn Handler>);
}

fn unhandled(severity: u32) -> String {
    format!("Severity {} ticket can't be handled.", severity)
}

// First tier: resolves everyday tickets, severity 0..10.
#[derive(Default)]
struct FrontDesk {
    next: Option<Box<dyn Handler>>,
}

impl Handler for FrontDesk {
    fn handle(&self, severity: u32) -> String {
        if severity < 10 {
            format!("Severity {} ticket resolved by the front desk.", severity)
        } else if let Some(next) = &self.next {
            next.handle(severity)
        } else {
            unhandled(severity)
        }
    }

    fn set_next(&mut self, next: Box<dyn Handler>) {
        self.next = Some(next);
    }
}

// Second tier: severity 10..20.
#[derive(Default)]
struct Supervisor {
    next: Option<Box<dyn Handler>>,
}

impl Handler for Supervisor {
    fn handle(&self, severity: u32) -> String {
        if (10..20).contains(&severity) {
            format!("Severity {} ticket escalated to a supervisor.", severity)
        } else if let Some(next) = &self.next {
            next.handle(severity)
        } else {
            unhandled(severity)
        }
    }

    fn set_next(&mut self, next: Box<dyn Handler>) {
        self.next = Some(next);
    }
}

fn main() {
    println!("{}\n", "=== Chain of Responsibility Demo ===".bold());

    // Build the chain: front desk first, supervisor behind it.
    let mut front_desk = FrontDesk::default();
    front_desk.set_next(Box::new(Supervisor::default()));

    for severity in [5, 12, 25] {
        let outcome = front_desk.handle(severity);
        if outcome.ends_with("can't be handled.") {
            println!("{}", outcome.red());
        } else {
            println!("{}", outcome);
        }
    }
}
