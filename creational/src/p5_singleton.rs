// Pattern 5: Singleton
// One lazily created instance, shared program-wide. `lazy_static` runs
// the initializer exactly once on first access, and the `Mutex` makes the
// shared state safe to mutate from anywhere. The atomic counter exists
// only to show that "exactly once" actually holds.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

static INIT_CALLS: AtomicUsize = AtomicUsize::new(0);

lazy_static::lazy_static! {
    static ref SETTINGS: Mutex<Settings> = {
        INIT_CALLS.fetch_add(1, Ordering::SeqCst);
        Mutex::new(Settings::new())
    };
}

#[derive(Debug)]
struct Settings {
    greeting: String,
    volume: u32,
}

impl Settings {
    fn new() -> Self {
        Settings {
            greeting: "Hello, I am a singleton!".to_string(),
            volume: 50,
        }
    }
}

// The single global access point.
fn settings() -> &'static Mutex<Settings> {
    &SETTINGS
}

fn main() {
    println!("=== Singleton Pattern Demo ===\n");

    {
        let current = settings().lock().unwrap();
        println!("First access:  {}", current.greeting);
    }
    {
        let current = settings().lock().unwrap();
        println!("Second access: {}", current.greeting);
    }
    println!("Initializer ran {} time(s)", INIT_CALLS.load(Ordering::SeqCst));

    // A change made through one access point is visible through every
    // other one, because there is only one instance.
    settings().lock().unwrap().volume = 80;
    println!("\nVolume after update: {}", settings().lock().unwrap().volume);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initializer_runs_exactly_once() {
        drop(settings().lock().unwrap());
        drop(settings().lock().unwrap());

        assert_eq!(INIT_CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_every_access_sees_the_same_instance() {
        assert!(std::ptr::eq(settings(), settings()));
    }

    #[test]
    fn test_mutation_is_visible_across_accesses() {
        settings().lock().unwrap().greeting = "updated".to_string();

        assert_eq!(settings().lock().unwrap().greeting, "updated");
    }
}
