// Pattern 7: Iterator
// Sequential access to an aggregate without exposing how it stores its
// elements. The iterator is its own struct tracking the traversal
// position; implementing `std::iter::Iterator` means every standard
// adapter works on it for free.

struct Aggregate<T> {
    items: Vec<T>,
}

impl<T> Aggregate<T> {
    fn new() -> Self {
        Aggregate { items: Vec::new() }
    }

    fn add(&mut self, item: T) {
        self.items.push(item);
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn iter(&self) -> AggregateIter<'_, T> {
        AggregateIter {
            items: &self.items,
            position: 0,
        }
    }
}

impl<T> FromIterator<T> for Aggregate<T> {
    fn from_iter<I: IntoIterator<Item = T>>(source: I) -> Self {
        Aggregate {
            items: source.into_iter().collect(),
        }
    }
}

// The concrete iterator: a cursor over the aggregate's storage. Returning
// `None` plays the role of a has-next check.
struct AggregateIter<'a, T> {
    items: &'a [T],
    position: usize,
}

impl<'a, T> Iterator for AggregateIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.get(self.position)?;
        self.position += 1;
        Some(item)
    }
}

impl<'a, T> IntoIterator for &'a Aggregate<T> {
    type Item = &'a T;
    type IntoIter = AggregateIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn main() {
    println!("=== Iterator Pattern Demo ===\n");

    let mut aggregate = Aggregate::new();
    aggregate.add(1);
    aggregate.add(2);
    aggregate.add(3);
    println!("Aggregate holds {} items", aggregate.len());

    print!("Explicit traversal:");
    let mut iterator = aggregate.iter();
    while let Some(item) = iterator.next() {
        print!(" {}", item);
    }
    println!();

    print!("For-loop traversal:");
    for item in &aggregate {
        print!(" {}", item);
    }
    println!();

    // Standard adapters compose with the custom iterator.
    let doubled: Vec<i32> = aggregate.iter().map(|n| n * 2).collect();
    println!("Doubled via map:   {:?}", doubled);
    println!("Sum via adapter:   {}", aggregate.iter().sum::<i32>());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let mut aggregate = Aggregate::new();
        aggregate.add("a");
        aggregate.add("b");
        aggregate.add("c");

        let seen: Vec<&str> = aggregate.iter().copied().collect();
        assert_eq!(seen, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_exhausted_iterator_stays_exhausted() {
        let mut aggregate = Aggregate::new();
        aggregate.add(1);

        let mut iterator = aggregate.iter();
        assert_eq!(iterator.next(), Some(&1));
        assert_eq!(iterator.next(), None);
        assert_eq!(iterator.next(), None);
    }

    #[test]
    fn test_empty_aggregate_yields_nothing() {
        let aggregate: Aggregate<i32> = Aggregate::new();
        assert_eq!(aggregate.iter().next(), None);
        assert_eq!(aggregate.len(), 0);
    }

    #[test]
    fn test_standard_adapters_work() {
        let aggregate: Aggregate<i32> = (1..=3).collect();
        assert_eq!(aggregate.iter().sum::<i32>(), 6);
        assert_eq!(aggregate.iter().max(), Some(&3));
    }

    #[test]
    fn test_multiple_independent_iterators() {
        let aggregate: Aggregate<i32> = (1..=3).collect();
        let mut first = aggregate.iter();
        let mut second = aggregate.iter();

        first.next();
        first.next();
        assert_eq!(second.next(), Some(&1));
    }
}
