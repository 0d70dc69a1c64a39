// Pattern 3: Composite
// Leaves and groups both implement `Graphic`, so a scene renders with a
// single call no matter how deeply the groups nest. Children are shared
// through `Rc`, letting one leaf appear in several groups.

use std::rc::Rc;

use itertools::Itertools;

trait Graphic {
    fn render(&self) -> String;
}

struct Circle;

impl Graphic for Circle {
    fn render(&self) -> String {
        "Drawing Circle".to_string()
    }
}

struct Rectangle;

impl Graphic for Rectangle {
    fn render(&self) -> String {
        "Drawing Rectangle".to_string()
    }
}

#[derive(Default)]
struct CompositeGraphic {
    children: Vec<Rc<dyn Graphic>>,
}

impl CompositeGraphic {
    fn add(&mut self, graphic: Rc<dyn Graphic>) {
        self.children.push(graphic);
    }
}

impl Graphic for CompositeGraphic {
    fn render(&self) -> String {
        self.children.iter().map(|child| child.render()).join("\n")
    }
}

fn main() {
    println!("=== Composite Pattern Demo ===\n");

    let circle1: Rc<dyn Graphic> = Rc::new(Circle);
    let circle2: Rc<dyn Graphic> = Rc::new(Circle);
    let rectangle: Rc<dyn Graphic> = Rc::new(Rectangle);

    let mut inner = CompositeGraphic::default();
    inner.add(Rc::clone(&circle1));
    inner.add(Rc::clone(&rectangle));

    let mut scene = CompositeGraphic::default();
    scene.add(Rc::clone(&circle2));
    scene.add(Rc::new(inner));

    // One call draws the whole tree.
    println!("{}", scene.render());

    println!("\nThe rectangle is shared by reference:");
    println!("strong count = {}", Rc::strong_count(&rectangle));
}
