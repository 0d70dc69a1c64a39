// Pattern 7: Flyweight
// Every tree stores only its coordinates; the heavy species data (name,
// color, texture) is interned once in the factory and shared through
// `Rc`. Planting ten thousand oaks allocates one `TreeKind`.

use std::collections::HashMap;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Intrinsic state: shared, immutable.
struct TreeKind {
    name: String,
    color: String,
    texture: String,
}

impl TreeKind {
    fn draw(&self, x: i32, y: i32) -> String {
        format!(
            "Drawing tree {} of color {} with texture {} at ({}, {})",
            self.name, self.color, self.texture, x, y
        )
    }
}

#[derive(Default)]
struct TreeFactory {
    kinds: HashMap<String, Rc<TreeKind>>,
}

impl TreeFactory {
    /// Returns the shared kind for this combination, creating it only on
    /// first request.
    fn kind(&mut self, name: &str, color: &str, texture: &str) -> Rc<TreeKind> {
        let key = format!("{}_{}_{}", name, color, texture);
        Rc::clone(self.kinds.entry(key).or_insert_with(|| {
            Rc::new(TreeKind {
                name: name.to_string(),
                color: color.to_string(),
                texture: texture.to_string(),
            })
        }))
    }

    fn kinds_created(&self) -> usize {
        self.kinds.len()
    }
}

// Extrinsic state: unique per tree.
struct Tree {
    x: i32,
    y: i32,
    kind: Rc<TreeKind>,
}

impl Tree {
    fn draw(&self) -> String {
        self.kind.draw(self.x, self.y)
    }
}

fn main() {
    println!("=== Flyweight Pattern Demo ===\n");

    let mut factory = TreeFactory::default();
    let mut forest = vec![
        Tree { x: 1, y: 2, kind: factory.kind("Oak", "Green", "Rough") },
        Tree { x: 3, y: 4, kind: factory.kind("Pine", "Dark Green", "Smooth") },
        Tree { x: 5, y: 6, kind: factory.kind("Oak", "Green", "Rough") },
        Tree { x: 7, y: 8, kind: factory.kind("Pine", "Dark Green", "Smooth") },
        Tree { x: 9, y: 10, kind: factory.kind("Birch", "White", "Smooth") },
    ];

    for tree in &forest {
        println!("{}", tree.draw());
    }

    println!("\nTrees planted:          {}", forest.len());
    println!("Distinct kinds created: {}", factory.kinds_created());
    println!(
        "Both oaks share one kind: {}",
        Rc::ptr_eq(&forest[0].kind, &forest[2].kind)
    );

    // Bulk planting at fixed-seed random coordinates: the kind table
    // does not grow.
    let species = [
        ("Oak", "Green", "Rough"),
        ("Pine", "Dark Green", "Smooth"),
        ("Birch", "White", "Smooth"),
    ];
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..8 {
        let (name, color, texture) = species[rng.gen_range(0..species.len())];
        forest.push(Tree {
            x: rng.gen_range(0..100),
            y: rng.gen_range(0..100),
            kind: factory.kind(name, color, texture),
        });
    }

    println!("\nAfter planting 8 more trees:");
    println!("Trees planted:          {}", forest.len());
    println!("Distinct kinds created: {}", factory.kinds_created());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_attributes_share_one_kind() {
        let mut factory = TreeFactory::default();
        let first = factory.kind("Oak", "Green", "Rough");
        let second = factory.kind("Oak", "Green", "Rough");

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(factory.kinds_created(), 1);
    }

    #[test]
    fn test_different_attributes_get_their_own_kind() {
        let mut factory = TreeFactory::default();
        let oak = factory.kind("Oak", "Green", "Rough");
        let pine = factory.kind("Pine", "Dark Green", "Smooth");

        assert!(!Rc::ptr_eq(&oak, &pine));
        assert_eq!(factory.kinds_created(), 2);
    }

    #[test]
    fn test_tree_renders_extrinsic_and_intrinsic_state() {
        let mut factory = TreeFactory::default();
        let tree = Tree {
            x: 1,
            y: 2,
            kind: factory.kind("Oak", "Green", "Rough"),
        };

        assert_eq!(
            tree.draw(),
            "Drawing tree Oak of color Green with texture Rough at (1, 2)"
        );
    }

    #[test]
    fn test_bulk_planting_does_not_grow_the_kind_table() {
        let mut factory = TreeFactory::default();
        let species = [
            ("Oak", "Green", "Rough"),
            ("Pine", "Dark Green", "Smooth"),
            ("Birch", "White", "Smooth"),
        ];
        for (name, color, texture) in species {
            factory.kind(name, color, texture);
        }

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let (name, color, texture) = species[rng.gen_range(0..species.len())];
            factory.kind(name, color, texture);
        }

        assert_eq!(factory.kinds_created(), species.len());
    }
}
