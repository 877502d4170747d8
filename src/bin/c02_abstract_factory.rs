//! Creational Pattern: Abstract Factory
//! Example: Template-engine families that are never mixed
//!
//! Run with: cargo run --bin c02_abstract_factory

/// The base interface for the header product family.
pub trait Header {
    fn render(&self) -> String;
}

/// Another product family.
pub trait Body {
    fn render(&self) -> String;
}

/// Abstract factory defines creation of all distinct products but
/// leaves actual product creation to the concrete factories, so a
/// header and body always come from the same engine.
pub trait TemplateFactory {
    fn create_header(&self) -> Box<dyn Header>;
    fn create_body(&self) -> Box<dyn Body>;
}

pub struct SmartyHeader;

impl Header for SmartyHeader {
    fn render(&self) -> String {
        "<h1>{$title}</h1>".to_string()
    }
}

pub struct SmartyBody;

impl Body for SmartyBody {
    fn render(&self) -> String {
        "<main>{$content}</main>".to_string()
    }
}

pub struct BladeHeader;

impl Header for BladeHeader {
    fn render(&self) -> String {
        "<h1>{{ $title }}</h1>".to_string()
    }
}

pub struct BladeBody;

impl Body for BladeBody {
    fn render(&self) -> String {
        "<main>{{ $content }}</main>".to_string()
    }
}

pub struct SmartyTemplateFactory;

impl TemplateFactory for SmartyTemplateFactory {
    fn create_header(&self) -> Box<dyn Header> {
        Box::new(SmartyHeader)
    }

    fn create_body(&self) -> Box<dyn Body> {
        Box::new(SmartyBody)
    }
}

pub struct BladeTemplateFactory;

impl TemplateFactory for BladeTemplateFactory {
    fn create_header(&self) -> Box<dyn Header> {
        Box::new(BladeHeader)
    }

    fn create_body(&self) -> Box<dyn Body> {
        Box::new(BladeBody)
    }
}

/// The factory is selected based on environment or configuration.
pub fn factory_for(engine: &str) -> Option<Box<dyn TemplateFactory>> {
    match engine {
        "smarty" => Some(Box::new(SmartyTemplateFactory)),
        "blade" => Some(Box::new(BladeTemplateFactory)),
        _ => None,
    }
}

fn main() {
    let template_engine = "blade";

    if let Some(factory) = factory_for(template_engine) {
        // header and body are either both Smarty or both Blade, never mixed
        print!("{}", factory.create_header().render());
        println!("{}", factory.create_body().render());
    }

    /* Output:
    <h1>{{ $title }}</h1><main>{{ $content }}</main> */
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blade_factory_produces_a_consistent_family() {
        let factory = factory_for("blade").unwrap();
        assert_eq!(factory.create_header().render(), "<h1>{{ $title }}</h1>");
        assert_eq!(factory.create_body().render(), "<main>{{ $content }}</main>");
    }

    #[test]
    fn smarty_factory_produces_a_consistent_family() {
        let factory = factory_for("smarty").unwrap();
        assert_eq!(factory.create_header().render(), "<h1>{$title}</h1>");
        assert_eq!(factory.create_body().render(), "<main>{$content}</main>");
    }

    #[test]
    fn unknown_engine_selects_nothing() {
        assert!(factory_for("twig").is_none());
    }
}
