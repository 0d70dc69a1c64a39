// Pattern 3: Builder
// The director knows the order of construction steps; the builders know
// what each step means for their material. Swapping the builder swaps the
// representation while the process stays fixed. `finish` hands the house
// out by value, leaving the builder ready for another round.

use std::mem;

#[derive(Debug, Default, PartialEq)]
struct House {
    parts: Vec<String>,
}

impl House {
    fn describe(&self) -> String {
        format!("House parts: {}", self.parts.join(" + "))
    }
}

trait HouseBuilder {
    fn build_foundation(&mut self);
    fn build_walls(&mut self);
    fn build_roof(&mut self);
    fn finish(&mut self) -> House;
}

#[derive(Default)]
struct StoneHouseBuilder {
    house: House,
}

impl HouseBuilder for StoneHouseBuilder {
    fn build_foundation(&mut self) {
        self.house.parts.push("granite foundation".to_string());
    }

    fn build_walls(&mut self) {
        self.house.parts.push("stone walls".to_string());
    }

    fn build_roof(&mut self) {
        self.house.parts.push("slate roof".to_string());
    }

    fn finish(&mut self) -> House {
        mem::take(&mut self.house)
    }
}

#[derive(Default)]
struct WoodHouseBuilder {
    house: House,
}

impl HouseBuilder for WoodHouseBuilder {
    fn build_foundation(&mut self) {
        self.house.parts.push("concrete slab".to_string());
    }

    fn build_walls(&mut self) {
        self.house.parts.push("timber walls".to_string());
    }

    fn build_roof(&mut self) {
        self.house.parts.push("shingle roof".to_string());
    }

    fn finish(&mut self) -> House {
        mem::take(&mut self.house)
    }
}

#[derive(Default)]
struct Director {
    builder: Option<Box<dyn HouseBuilder>>,
}

impl Director {
    fn set_builder(&mut self, builder: Box<dyn HouseBuilder>) {
        self.builder = Some(builder);
    }

    /// Runs the fixed foundation-walls-roof sequence. Without a builder
    /// there is nothing to construct.
    fn construct(&mut self) -> Option<House> {
        let builder = self.builder.as_mut()?;
        builder.build_foundation();
        builder.build_walls();
        builder.build_roof();
        Some(builder.finish())
    }
}

fn main() {
    println!("=== Builder Pattern Demo ===\n");

    let mut director = Director::default();
    if director.construct().is_none() {
        println!("No builder assigned; nothing to construct.");
    }

    director.set_builder(Box::new(StoneHouseBuilder::default()));
    if let Some(house) = director.construct() {
        println!("{}", house.describe());
    }

    // Same director, same steps, different representation.
    director.set_builder(Box::new(WoodHouseBuilder::default()));
    if let Some(house) = director.construct() {
        println!("{}", house.describe());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stone_builder_builds_in_order() {
        let mut director = Director::default();
        director.set_builder(Box::new(StoneHouseBuilder::default()));

        let house = director.construct().unwrap();
        assert_eq!(
            house.parts,
            vec!["granite foundation", "stone walls", "slate roof"]
        );
    }

    #[test]
    fn test_wood_builder_yields_a_different_representation() {
        let mut director = Director::default();
        director.set_builder(Box::new(WoodHouseBuilder::default()));

        let house = director.construct().unwrap();
        assert_eq!(
            house.describe(),
            "House parts: concrete slab + timber walls + shingle roof"
        );
    }

    #[test]
    fn test_director_without_builder_constructs_nothing() {
        let mut director = Director::default();
        assert_eq!(director.construct(), None);
    }

    #[test]
    fn test_builder_is_reusable_after_finish() {
        let mut director = Director::default();
        director.set_builder(Box::new(StoneHouseBuilder::default()));

        let first = director.construct().unwrap();
        let second = director.construct().unwrap();
        assert_eq!(first, second);
    }
}
