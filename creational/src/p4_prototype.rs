// Pattern 4: Prototype
// New objects come from copying a configured original instead of calling
// a constructor. `clone_box` is what makes the copy possible through a
// trait object, when all the caller holds is `dyn Prototype`.

trait Prototype {
    fn clone_box(&self) -> Box<dyn Prototype>;
    fn describe(&self) -> String;
}

impl Clone for Box<dyn Prototype> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[derive(Clone)]
struct Circle {
    radius: u32,
}

impl Prototype for Circle {
    fn clone_box(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }

    fn describe(&self) -> String {
        format!("circle with radius {}", self.radius)
    }
}

#[derive(Clone)]
struct Square {
    side: u32,
}

impl Prototype for Square {
    fn clone_box(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }

    fn describe(&self) -> String {
        format!("square with side {}", self.side)
    }
}

fn main() {
    println!("=== Prototype Pattern Demo ===\n");

    let mut original = Circle { radius: 100 };
    let copy = original.clone_box();

    println!("Original: {}", original.describe());
    println!("Copy:     {}", copy.describe());

    // The copy owns its own state: editing the original leaves it alone.
    original.radius = 25;
    println!("\nAfter shrinking the original:");
    println!("Original: {}", original.describe());
    println!("Copy:     {}", copy.describe());

    // A whole palette of prototypes duplicates without knowing any
    // concrete type.
    let palette: Vec<Box<dyn Prototype>> =
        vec![Box::new(Circle { radius: 10 }), Box::new(Square { side: 4 })];
    let duplicates: Vec<Box<dyn Prototype>> = palette.clone();

    println!("\nDuplicated palette:");
    for shape in &duplicates {
        println!("  {}", shape.describe());
    }
}
