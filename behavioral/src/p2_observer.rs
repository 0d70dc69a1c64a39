// Pattern 2: Observer
// One-to-many notification: observers register with a subject and get
// called back whenever its message changes. The registry sits behind a
// mutex so registration, removal and notification stay safe if several
// threads ever share the subject; this demo itself is single-threaded.

use std::sync::{Arc, Mutex};

trait Observer: Send + Sync {
    fn update(&self, message: &str);
}

struct Subscriber {
    name: String,
}

impl Subscriber {
    fn new(name: impl Into<String>) -> Self {
        Subscriber { name: name.into() }
    }
}

impl Observer for Subscriber {
    fn update(&self, message: &str) {
        println!("{} received message: {}", self.name, message);
    }
}

#[derive(Default)]
struct SubjectState {
    observers: Vec<Arc<dyn Observer>>,
    message: String,
}

// Subject. Observers are identified by handle (`Arc::ptr_eq`), so the same
// observer attached twice is registered once, and detach removes exactly
// that handle. Notification order is attach order.
#[derive(Default)]
struct Subject {
    state: Mutex<SubjectState>,
}

impl Subject {
    fn new() -> Self {
        Subject::default()
    }

    fn attach(&self, observer: Arc<dyn Observer>) {
        let mut state = self.state.lock().unwrap();
        let already_attached = state
            .observers
            .iter()
            .any(|existing| Arc::ptr_eq(existing, &observer));
        if !already_attached {
            state.observers.push(observer);
        }
    }

    fn detach(&self, observer: &Arc<dyn Observer>) {
        let mut state = self.state.lock().unwrap();
        state
            .observers
            .retain(|existing| !Arc::ptr_eq(existing, observer));
    }

    fn notify(&self) {
        let state = self.state.lock().unwrap();
        for observer in &state.observers {
            observer.update(&state.message);
        }
    }

    fn set_message(&self, message: &str) {
        {
            let mut state = self.state.lock().unwrap();
            state.message = message.to_string();
        }
        self.notify();
    }

    fn observer_count(&self) -> usize {
        self.state.lock().unwrap().observers.len()
    }
}

fn main() {
    println!("=== Observer Pattern Demo ===\n");

    let subject = Subject::new();
    let observer1: Arc<dyn Observer> = Arc::new(Subscriber::new("Observer 1"));
    let observer2: Arc<dyn Observer> = Arc::new(Subscriber::new("Observer 2"));

    subject.attach(Arc::clone(&observer1));
    subject.attach(Arc::clone(&observer2));
    println!("Attached observers: {}", subject.observer_count());

    subject.set_message("Hello observers!");

    println!("\nDetaching Observer 2...");
    subject.detach(&observer2);
    println!("Attached observers: {}", subject.observer_count());

    subject.set_message("Hello again!");
}
