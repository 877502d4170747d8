//! Structural Pattern: Adapter
//! Example: Making an e-reader usable through the paper-book interface
//!
//! Run with: cargo run --bin s01_adapter

/// The interface the client code already works with.
pub trait Book {
    fn open(&self) -> String;
    fn turn_page(&self) -> String;
}

pub struct PaperBook;

impl Book for PaperBook {
    fn open(&self) -> String {
        "Open the book..".to_string()
    }

    fn turn_page(&self) -> String {
        "Go to the next page..".to_string()
    }
}

/// The e-book comes with an incompatible interface we probably
/// cannot modify.
pub struct Kindle;

impl Kindle {
    // does the same as open() on a real book
    pub fn turn_on(&self) -> String {
        "Turn on the Kindle..".to_string()
    }

    // does the same as turn_page() on a real book
    pub fn press_next_button(&self) -> String {
        "Press next button on Kindle..".to_string()
    }
}

/// Adapter wraps the Kindle and exposes it through the book interface.
pub struct KindleAdapter {
    kindle: Kindle,
}

impl KindleAdapter {
    pub fn new(kindle: Kindle) -> Self {
        KindleAdapter { kindle }
    }
}

impl Book for KindleAdapter {
    fn open(&self) -> String {
        self.kindle.turn_on()
    }

    fn turn_page(&self) -> String {
        self.kindle.press_next_button()
    }
}

fn read(book: &dyn Book) {
    println!("{}", book.open());
    println!("{}", book.turn_page());
}

fn main() {
    read(&PaperBook);

    // the Kindle now fits wherever a plain book is expected
    read(&KindleAdapter::new(Kindle));

    /* Output:
    Open the book..
    Go to the next page..
    Turn on the Kindle..
    Press next button on Kindle.. */
}
