// Pattern 9: Memento
// The originator snapshots its own state into an opaque memento; the
// caretaker stores snapshots without ever looking inside them. Because a
// snapshot is plain data it also serializes straight to JSON, which is
// exactly what "save it externally" means in practice.

use serde::Serialize;

// No public accessors: only the originator reads the state back.
#[derive(Debug, Clone, Serialize)]
struct Memento {
    state: String,
}

#[derive(Default)]
struct Originator {
    state: String,
}

impl Originator {
    fn set_state(&mut self, state: &str) {
        self.state = state.to_string();
    }

    fn state(&self) -> &str {
        &self.state
    }

    fn create_memento(&self) -> Memento {
        Memento {
            state: self.state.clone(),
        }
    }

    /// Restores a saved snapshot. A missing snapshot leaves the current
    /// state untouched.
    fn restore(&mut self, memento: Option<&Memento>) {
        if let Some(memento) = memento {
            self.state = memento.state.clone();
        }
    }
}

#[derive(Default)]
struct Caretaker {
    mementos: Vec<Memento>,
}

impl Caretaker {
    fn add(&mut self, memento: Memento) {
        self.mementos.push(memento);
    }

    fn get(&self, index: usize) -> Option<&Memento> {
        self.mementos.get(index)
    }

    fn history(&self) -> &[Memento] {
        &self.mementos
    }
}

fn main() {
    println!("=== Memento Pattern Demo ===\n");

    let mut originator = Originator::default();
    let mut caretaker = Caretaker::default();

    originator.set_state("State 1");
    caretaker.add(originator.create_memento());

    originator.set_state("State 2");
    caretaker.add(originator.create_memento());

    originator.set_state("State 3");
    println!("Current state:     {}", originator.state());

    originator.restore(caretaker.get(0));
    println!("Restored to state: {}", originator.state());

    originator.restore(caretaker.get(1));
    println!("Restored to state: {}", originator.state());

    originator.restore(caretaker.get(5));
    println!("After bad index:   {} (snapshot 5 does not exist)", originator.state());

    let exported = serde_json::to_string_pretty(caretaker.history())
        .unwrap_or_else(|_| "[]".to_string());
    println!("\nSaved history as JSON:\n{}", exported);
}
