//! Creational Pattern: Factory Method
//! Example: Responses that defer formatter creation to subclasses
//!
//! Run with: cargo run --bin c01_factory_method

use serde_json::json;

/// Formatter interface declares the behavior shared by all response
/// body formats.
pub trait Formatter {
    fn wrap_data(&self, data: &str) -> String;
}

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn wrap_data(&self, data: &str) -> String {
        json!({ "code": 200, "response": data }).to_string()
    }
}

pub struct HtmlFormatter;

impl Formatter for HtmlFormatter {
    fn wrap_data(&self, data: &str) -> String {
        format!("<html>{}</html>", data)
    }
}

/// The factory method lives here: `render` contains the shared
/// business logic and calls `create_formatter`, which each concrete
/// response overrides to pick its product.
pub trait Response {
    fn create_formatter(&self) -> Box<dyn Formatter>;

    fn render(&self, data: &str) -> String {
        self.create_formatter().wrap_data(data)
    }
}

pub struct JsonResponse;

impl Response for JsonResponse {
    fn create_formatter(&self) -> Box<dyn Formatter> {
        Box::new(JsonFormatter)
    }
}

pub struct HtmlResponse;

impl Response for HtmlResponse {
    fn create_formatter(&self) -> Box<dyn Formatter> {
        Box::new(HtmlFormatter)
    }
}

/// Selects a response type by name, e.g. from configuration.
pub fn response_for(format: &str) -> Option<Box<dyn Response>> {
    match format {
        "json" => Some(Box::new(JsonResponse)),
        "html" => Some(Box::new(HtmlResponse)),
        _ => None,
    }
}

fn main() {
    let data = "some input data";
    let response_format = "json"; // taken from configuration for example

    if let Some(response) = response_for(response_format) {
        println!("{}", response.render(data));
    }

    /* Output:
    {"code":200,"response":"some input data"} */
}
