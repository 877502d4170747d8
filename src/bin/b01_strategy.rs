//! Behavioral Pattern: Strategy
//! Example: Swappable sorting algorithms behind a common trait
//!
//! Run with: cargo run --bin b01_strategy

/// Strategy trait declares the operation common to all supported
/// versions of the sorting algorithm.
pub trait SortStrategy {
    fn sort(&self, data: Vec<i32>) -> Vec<i32>;

    fn name(&self) -> &'static str;
}

/// Concrete strategy, stands in for a bubble sort implementation.
pub struct BubbleSort;

impl SortStrategy for BubbleSort {
    fn sort(&self, data: Vec<i32>) -> Vec<i32> {
        // stub
        println!("Sorting using bubble sort..");
        data
    }

    fn name(&self) -> &'static str {
        "bubble sort"
    }
}

/// Concrete strategy, stands in for a quick sort implementation.
pub struct QuickSort;

impl SortStrategy for QuickSort {
    fn sort(&self, data: Vec<i32>) -> Vec<i32> {
        // stub
        println!("Sorting using quick sort..");
        data
    }

    fn name(&self) -> &'static str {
        "quick sort"
    }
}

/// Context keeps a reference to one of the strategy objects and works
/// with it only through the `SortStrategy` trait.
pub struct Sorter {
    strategy: Box<dyn SortStrategy>,
}

impl Sorter {
    /// Context accepts a strategy through the constructor..
    pub fn new(strategy: Box<dyn SortStrategy>) -> Self {
        Sorter { strategy }
    }

    /// ..but also allows swapping it at runtime. Plain assignment,
    /// no validation.
    pub fn set_strategy(&mut self, strategy: Box<dyn SortStrategy>) {
        self.strategy = strategy;
    }

    /// The context delegates the work to the strategy object instead
    /// of implementing multiple versions of the algorithm on its own.
    pub fn sort_array(&self, data: Vec<i32>) -> Vec<i32> {
        self.strategy.sort(data)
    }
}

/// Picks an algorithm based on the input size: bubble sort for small
/// amounts of data, quick sort for everything else.
pub fn pick_strategy(len: usize) -> Box<dyn SortStrategy> {
    if len < 10 {
        Box::new(BubbleSort)
    } else {
        Box::new(QuickSort)
    }
}

fn main() {
    let data = vec![4, 2, 1, 5, 9];

    let sorter = Sorter::new(pick_strategy(data.len()));
    sorter.sort_array(data);

    /* Output:
    Sorting using bubble sort.. */
}
