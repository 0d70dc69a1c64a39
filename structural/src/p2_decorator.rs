// Pattern 2: Decorator
// Condiments wrap a beverage and present the same trait, so a decorated
// drink can be decorated again. Each layer adds its own description and
// price on top of whatever it wraps.

trait Beverage {
    fn description(&self) -> String;
    fn cost(&self) -> u32;
}

// The core object.
struct Espresso;

impl Beverage for Espresso {
    fn description(&self) -> String {
        "Espresso".to_string()
    }

    fn cost(&self) -> u32 {
        10
    }
}

struct Milk {
    inner: Box<dyn Beverage>,
}

impl Milk {
    fn new(inner: Box<dyn Beverage>) -> Self {
        Milk { inner }
    }
}

impl Beverage for Milk {
    fn description(&self) -> String {
        format!("{}, Milk", self.inner.description())
    }

    fn cost(&self) -> u32 {
        15 + self.inner.cost()
    }
}

struct Mocha {
    inner: Box<dyn Beverage>,
}

impl Mocha {
    fn new(inner: Box<dyn Beverage>) -> Self {
        Mocha { inner }
    }
}

impl Beverage for Mocha {
    fn description(&self) -> String {
        format!("{}, Mocha", self.inner.description())
    }

    fn cost(&self) -> u32 {
        30 + self.inner.cost()
    }
}

fn main() {
    println!("=== Decorator Pattern Demo ===\n");

    let mut beverage: Box<dyn Beverage> = Box::new(Espresso);
    println!("{} Rs.{}", beverage.description(), beverage.cost());

    beverage = Box::new(Milk::new(beverage));
    println!("{} Rs.{}", beverage.description(), beverage.cost());

    beverage = Box::new(Mocha::new(beverage));
    println!("{} Rs.{}", beverage.description(), beverage.cost());
}
