// Pattern 1: Strategy
// A family of interchangeable algorithms behind one trait. The calculator
// holds at most one strategy and delegates to it; swapping the strategy at
// runtime changes behavior without touching the calculator itself.

trait Strategy {
    fn execute(&self, a: i32, b: i32) -> String;
}

struct Addition;

impl Strategy for Addition {
    fn execute(&self, a: i32, b: i32) -> String {
        format!("Result of addition: {}", a + b)
    }
}

struct Subtraction;

impl Strategy for Subtraction {
    fn execute(&self, a: i32, b: i32) -> String {
        format!("Result of subtraction: {}", a - b)
    }
}

struct Multiplication;

impl Strategy for Multiplication {
    fn execute(&self, a: i32, b: i32) -> String {
        format!("Result of multiplication: {}", a * b)
    }
}

// Context. An absent strategy is a valid state: executing then is a no-op.
#[derive(Default)]
struct Calculator {
    strategy: Option<Box<dyn Strategy>>,
}

impl Calculator {
    fn new(strategy: Box<dyn Strategy>) -> Self {
        Calculator {
            strategy: Some(strategy),
        }
    }

    fn set_strategy(&mut self, strategy: Box<dyn Strategy>) {
        self.strategy = Some(strategy);
    }

    fn execute(&self, a: i32, b: i32) -> Option<String> {
        self.strategy.as_ref().map(|s| s.execute(a, b))
    }
}

fn main() {
    println!("=== Strategy Pattern Demo ===\n");

    // Usage: same inputs, different algorithm, selected at runtime.
    let mut calculator = Calculator::new(Box::new(Addition));
    println!("{}", calculator.execute(5, 3).unwrap());

    calculator.set_strategy(Box::new(Subtraction));
    println!("{}", calculator.execute(5, 3).unwrap());

    calculator.set_strategy(Box::new(Multiplication));
    println!("{}", calculator.execute(5, 3).unwrap());

    println!("\n=== Calculator Without a Strategy ===");
    let idle = Calculator::default();
    match idle.execute(5, 3) {
        Some(result) => println!("{}", result),
        None => println!("No strategy configured; nothing to execute."),
    }
}
