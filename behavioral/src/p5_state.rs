// Pattern 5: State
// The machine's behavior lives in interchangeable state objects. All states
// are created once, up front; switching states swaps a shared handle, so no
// state is ever re-allocated and no conditional on "what state am I in"
// appears anywhere.

use std::rc::Rc;

trait State {
    fn handle_request(&self) -> String;
}

struct OnState;

impl State for OnState {
    fn handle_request(&self) -> String {
        "Machine is ON now.".to_string()
    }
}

struct OffState;

impl State for OffState {
    fn handle_request(&self) -> String {
        "Machine is OFF now.".to_string()
    }
}

struct StandbyState;

impl State for StandbyState {
    fn handle_request(&self) -> String {
        "Machine is in Standby mode.".to_string()
    }
}

// Context. Starts out OFF.
struct Machine {
    current: Rc<dyn State>,
    on: Rc<dyn State>,
    off: Rc<dyn State>,
    standby: Rc<dyn State>,
}

impl Machine {
    fn new() -> Self {
        let on: Rc<dyn State> = Rc::new(OnState);
        let off: Rc<dyn State> = Rc::new(OffState);
        let standby: Rc<dyn State> = Rc::new(StandbyState);
        Machine {
            current: Rc::clone(&off),
            on,
            off,
            standby,
        }
    }

    fn set_state(&mut self, state: Rc<dyn State>) {
        self.current = state;
    }

    fn handle_request(&self) -> String {
        self.current.handle_request()
    }

    fn on_state(&self) -> Rc<dyn State> {
        Rc::clone(&self.on)
    }

    fn off_state(&self) -> Rc<dyn State> {
        Rc::clone(&self.off)
    }

    fn standby_state(&self) -> Rc<dyn State> {
        Rc::clone(&self.standby)
    }
}

fn main() {
    println!("=== State Pattern Demo ===\n");

    let mut machine = Machine::new();
    println!("{}", machine.handle_request());

    machine.set_state(machine.on_state());
    println!("{}", machine.handle_request());

    machine.set_state(machine.standby_state());
    println!("{}", machine.handle_request());

    machine.set_state(machine.off_state());
    println!("{}", machine.handle_request());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_starts_off() {
        let machine = Machine::new();
        assert_eq!(machine.handle_request(), "Machine is OFF now.");
    }

    #[test]
    fn test_behavior_follows_current_state() {
        let mut machine = Machine::new();

        machine.set_state(machine.on_state());
        assert_eq!(machine.handle_request(), "Machine is ON now.");

        machine.set_state(machine.standby_state());
        assert_eq!(machine.handle_request(), "Machine is in Standby mode.");

        machine.set_state(machine.off_state());
        assert_eq!(machine.handle_request(), "Machine is OFF now.");
    }

    #[test]
    fn test_state_handles_are_reused_not_recreated() {
        let machine = Machine::new();
        assert!(Rc::ptr_eq(&machine.on_state(), &machine.on_state()));
        assert!(!Rc::ptr_eq(&machine.on_state(), &machine.off_state()));
    }
}
