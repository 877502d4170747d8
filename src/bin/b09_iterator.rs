//! Behavioral Pattern: Iterator
//! Example: Traversing a collection in reverse through `std::iter::Iterator`
//!
//! Run with: cargo run --bin b09_iterator

/// Concrete iterator implementing the traversal algorithm: walks the
/// collection back-to-front.
pub struct ReverseIterator<'a> {
    items: &'a [String],
    position: usize,
}

impl<'a> Iterator for ReverseIterator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position == 0 {
            return None;
        }
        self.position -= 1;
        self.items.get(self.position).map(String::as_str)
    }
}

/// Concrete collection hands out the "right" iterator for itself.
pub struct SimpleCollection {
    items: Vec<String>,
}

impl SimpleCollection {
    pub fn new() -> Self {
        SimpleCollection { items: Vec::new() }
    }

    pub fn add_item(mut self, item: impl Into<String>) -> Self {
        self.items.push(item.into());
        self
    }

    pub fn iter(&self) -> ReverseIterator<'_> {
        ReverseIterator {
            items: &self.items,
            position: self.items.len(),
        }
    }
}

fn main() {
    let collection = SimpleCollection::new()
        .add_item("1st item")
        .add_item("2nd item")
        .add_item("3rd item");

    // go through the collection in reverse order
    for item in collection.iter() {
        println!("{}", item);
    }

    /* Output:
    3rd item
    2nd item
    1st item */
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_items_back_to_front() {
        let collection = SimpleCollection::new()
            .add_item("1st item")
            .add_item("2nd item")
            .add_item("3rd item");

        let items: Vec<&str> = collection.iter().collect();
        assert_eq!(items, vec!["3rd item", "2nd item", "1st item"]);
    }

    #[test]
    fn empty_collection_yields_nothing() {
        let collection = SimpleCollection::new();
        assert_eq!(collection.iter().count(), 0);
    }

    #[test]
    fn iterator_composes_with_std_combinators() {
        let collection = SimpleCollection::new().add_item("a").add_item("b");
        let upper: Vec<String> = collection.iter().map(str::to_uppercase).collect();
        assert_eq!(upper, vec!["B", "A"]);
    }
}
