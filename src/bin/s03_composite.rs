//! Structural Pattern: Composite
//! Example: Pricing a cart of products and nested product bundles
//!
//! Run with: cargo run --bin s03_composite

/// A cart entry is either a single product or a bundle of further
/// entries. The tagged variant replaces the classic abstract base
/// class: every operation handles both shapes in one match.
pub enum CartItem {
    Product { name: String, price: f64 },
    Bundle { name: String, children: Vec<CartItem> },
}

impl CartItem {
    pub fn product(name: impl Into<String>, price: f64) -> Self {
        CartItem::Product {
            name: name.into(),
            price,
        }
    }

    pub fn bundle(name: impl Into<String>) -> Self {
        CartItem::Bundle {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CartItem::Product { name, .. } | CartItem::Bundle { name, .. } => name,
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, CartItem::Bundle { .. })
    }

    /// Adding to a leaf product is a silent no-op, like the empty
    /// base-class implementation it replaces.
    pub fn add(&mut self, item: CartItem) {
        if let CartItem::Bundle { children, .. } = self {
            children.push(item);
        }
    }

    /// Removes a direct child by name; a no-op on leaves.
    pub fn remove(&mut self, name: &str) {
        if let CartItem::Bundle { children, .. } = self {
            children.retain(|child| child.name() != name);
        }
    }

    /// Total price of this item and everything below it.
    pub fn price(&self) -> f64 {
        match self {
            CartItem::Product { price, .. } => *price,
            CartItem::Bundle { children, .. } => children.iter().map(CartItem::price).sum(),
        }
    }
}

fn main() {
    let mut cart: Vec<CartItem> = vec![CartItem::product("Bike", 200.0)];

    let mut motorcycle = CartItem::bundle("Motorcycle");
    motorcycle.add(CartItem::product("Motor", 700.0));
    motorcycle.add(CartItem::product("Wheels", 300.0));

    let mut frame = CartItem::bundle("Frame");
    frame.add(CartItem::product("Steering", 200.0));
    frame.add(CartItem::product("Seat", 100.0));
    motorcycle.add(frame);
    cart.push(motorcycle);

    let total: f64 = cart.iter().map(CartItem::price).sum();
    println!("{}", total); // Output: 1500
}
