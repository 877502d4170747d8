//! Structural Pattern: Flyweight
//! Example: Sharing brand data across many cart products
//!
//! Run with: cargo run --bin s06_flyweight

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// The flyweight: the portion of product state that is duplicated
/// across many products. Immutable and shared.
#[derive(Debug)]
pub struct Brand {
    pub name: String,
    pub logo: String,
}

/// Contains the main part of the product state; brand data is only
/// referenced, never copied.
pub struct Product {
    pub title: String,
    pub price: f64,
    pub brand: Rc<Brand>,
}

/// The factory decides when to create a new brand and when an
/// existing one will do. The cache is append-only and keyed by brand
/// name; nothing is ever evicted.
pub struct BrandFactory {
    brands: RefCell<HashMap<String, Rc<Brand>>>,
}

impl BrandFactory {
    pub fn new() -> Self {
        BrandFactory {
            brands: RefCell::new(HashMap::new()),
        }
    }

    pub fn get_brand(&self, name: &str, logo: &str) -> Rc<Brand> {
        if let Some(brand) = self.brands.borrow().get(name) {
            return Rc::clone(brand);
        }

        let brand = Rc::new(Brand {
            name: name.to_string(),
            logo: logo.to_string(),
        });
        self.brands
            .borrow_mut()
            .insert(name.to_string(), Rc::clone(&brand));
        brand
    }

    pub fn brand_count(&self) -> usize {
        self.brands.borrow().len()
    }
}

pub struct ShoppingCart {
    products: Vec<Product>,
    factory: BrandFactory,
}

impl ShoppingCart {
    pub fn new() -> Self {
        ShoppingCart {
            products: Vec::new(),
            factory: BrandFactory::new(),
        }
    }

    pub fn add_product(&mut self, title: &str, price: f64, brand: &str, brand_logo: &str) {
        let brand = self.factory.get_brand(brand, brand_logo);
        self.products.push(Product {
            title: title.to_string(),
            price,
            brand,
        });
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn brand_count(&self) -> usize {
        self.factory.brand_count()
    }
}

fn main() {
    let mut cart = ShoppingCart::new();
    cart.add_product("Sports shoes", 120.0, "Nike", "Nike.png");
    cart.add_product("Kids shoes", 100.0, "Nike", "Nike.png");
    cart.add_product("Women shoes", 110.0, "Nike", "Nike.png");
    cart.add_product("Running shoes", 140.0, "Asics", "Asics.jpg");
    cart.add_product("Everyday shoes", 90.0, "Adidas", "Adidas.svg");

    println!("{} products in basket", cart.products().len());
    println!("{} unique brand instances in memory", cart.brand_count());

    /* Output:
    5 products in basket
    3 unique brand instances in memory */
}
