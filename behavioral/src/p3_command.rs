// Pattern 3: Command
// A request reified as an object: each command captures its receiver and
// everything needed to run, so an invoker can queue commands and execute
// them later without knowing what any of them do.

use std::rc::Rc;

// Receiver: knows how to actually perform the work.
struct Light {
    location: String,
}

impl Light {
    fn new(location: impl Into<String>) -> Self {
        Light {
            location: location.into(),
        }
    }

    fn switch_on(&self) -> String {
        format!("{} light switched on", self.location)
    }

    fn switch_off(&self) -> String {
        format!("{} light switched off", self.location)
    }
}

trait Command {
    fn execute(&self) -> String;
}

struct SwitchOn {
    light: Rc<Light>,
}

impl Command for SwitchOn {
    fn execute(&self) -> String {
        self.light.switch_on()
    }
}

struct SwitchOff {
    light: Rc<Light>,
}

impl Command for SwitchOff {
    fn execute(&self) -> String {
        self.light.switch_off()
    }
}

// Invoker: holds queued commands, runs them in FIFO order, then forgets
// them. It never looks inside a command.
#[derive(Default)]
struct Invoker {
    queue: Vec<Box<dyn Command>>,
}

impl Invoker {
    fn add_command(&mut self, command: Box<dyn Command>) {
        self.queue.push(command);
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }

    fn execute_all(&mut self) -> Vec<String> {
        self.queue.drain(..).map(|command| command.execute()).collect()
    }
}

fn main() {
    println!("=== Command Pattern Demo ===\n");

    let kitchen = Rc::new(Light::new("kitchen"));
    let porch = Rc::new(Light::new("porch"));

    let mut invoker = Invoker::default();
    invoker.add_command(Box::new(SwitchOn {
        light: Rc::clone(&kitchen),
    }));
    invoker.add_command(Box::new(SwitchOff {
        light: Rc::clone(&kitchen),
    }));
    invoker.add_command(Box::new(SwitchOn {
        light: Rc::clone(&porch),
    }));

    println!("Queued commands: {}", invoker.pending());
    println!("\nExecuting queue:");
    for result in invoker.execute_all() {
        println!("  {}", result);
    }

    println!("\nQueued commands after run: {}", invoker.pending());
}
