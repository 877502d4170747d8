//! Structural Pattern: Decorator
//! Example: Stacking coffee add-ons at runtime
//!
//! Run with: cargo run --bin s04_decorator

pub trait Coffee {
    fn cost(&self) -> u32;
    fn description(&self) -> String;
}

pub struct SimpleCoffee;

impl Coffee for SimpleCoffee {
    fn cost(&self) -> u32 {
        10
    }

    fn description(&self) -> String {
        "Coffee".to_string()
    }
}

/// Decorators wrap any other `Coffee` and adjust both operations, so
/// behavior changes at runtime without touching the wrapped type.
pub struct MilkCoffee {
    inner: Box<dyn Coffee>,
}

impl MilkCoffee {
    pub fn new(inner: Box<dyn Coffee>) -> Self {
        MilkCoffee { inner }
    }
}

impl Coffee for MilkCoffee {
    fn cost(&self) -> u32 {
        self.inner.cost() + 2
    }

    fn description(&self) -> String {
        format!("{}, with milk", self.inner.description())
    }
}

pub struct VanillaCoffee {
    inner: Box<dyn Coffee>,
}

impl VanillaCoffee {
    pub fn new(inner: Box<dyn Coffee>) -> Self {
        VanillaCoffee { inner }
    }
}

impl Coffee for VanillaCoffee {
    fn cost(&self) -> u32 {
        self.inner.cost() + 3
    }

    fn description(&self) -> String {
        format!("{}, with vanilla", self.inner.description())
    }
}

fn main() {
    let coffee = SimpleCoffee;
    println!("{} - {}", coffee.description(), coffee.cost());

    let milk_coffee = MilkCoffee::new(Box::new(SimpleCoffee));
    println!("{} - {}", milk_coffee.description(), milk_coffee.cost());

    // decorators compose in chains
    let vanilla_milk_coffee = VanillaCoffee::new(Box::new(MilkCoffee::new(Box::new(SimpleCoffee))));
    println!(
        "{} - {}",
        vanilla_milk_coffee.description(),
        vanilla_milk_coffee.cost()
    );

    /* Output:
    Coffee - 10
    Coffee, with milk - 12
    Coffee, with milk, with vanilla - 15 */
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_coffee_is_undecorated() {
        assert_eq!(SimpleCoffee.cost(), 10);
        assert_eq!(SimpleCoffee.description(), "Coffee");
    }

    #[test]
    fn each_decorator_adds_its_own_cost_and_label() {
        let milk = MilkCoffee::new(Box::new(SimpleCoffee));
        assert_eq!(milk.cost(), 12);
        assert_eq!(milk.description(), "Coffee, with milk");
    }

    #[test]
    fn decorators_stack_in_wrapping_order() {
        let stacked = VanillaCoffee::new(Box::new(MilkCoffee::new(Box::new(SimpleCoffee))));
        assert_eq!(stacked.cost(), 15);
        assert_eq!(stacked.description(), "Coffee, with milk, with vanilla");

        let reversed = MilkCoffee::new(Box::new(VanillaCoffee::new(Box::new(SimpleCoffee))));
        assert_eq!(reversed.cost(), 15);
        assert_eq!(reversed.description(), "Coffee, with vanilla, with milk");
    }
}
