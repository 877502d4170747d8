//! Behavioral Pattern: Visitor
//! Example: Adding export formats to a fixed document hierarchy
//!
//! Run with: cargo run --bin b07_visitor

use serde_json::Value;

/// Basic interface for all visitors. One method per document variant:
/// adding a new document type without updating every visitor is a
/// compile error, which is the safety net this pattern wants.
pub trait Visitor {
    fn visit_template(&self, template: &Template) -> String;
    fn visit_report(&self, report: &Report) -> String;
}

/// Each document implements accept() so that it calls the visitor
/// method corresponding to its own variant (double dispatch).
pub trait Visitable {
    fn accept(&self, visitor: &dyn Visitor) -> String;
}

pub struct Template {
    pub title: String,
    pub content: String,
    pub header: String,
    pub footer: String,
}

impl Template {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Template {
            title: title.into(),
            content: content.into(),
            header: "{header}".to_string(),
            footer: "{footer}".to_string(),
        }
    }
}

impl Visitable for Template {
    fn accept(&self, visitor: &dyn Visitor) -> String {
        visitor.visit_template(self)
    }
}

pub struct Report {
    pub title: String,
    pub content: String,
    pub diagram: String,
}

impl Report {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Report {
            title: title.into(),
            content: content.into(),
            diagram: " {diagram} ".to_string(),
        }
    }
}

impl Visitable for Report {
    fn accept(&self, visitor: &dyn Visitor) -> String {
        visitor.visit_report(self)
    }
}

/// Concrete visitor: extends the documents with JSON export, without
/// the documents knowing this format exists.
pub struct JsonExportVisitor;

impl Visitor for JsonExportVisitor {
    fn visit_template(&self, template: &Template) -> String {
        let payload = format!(
            "{}{}{}{}",
            template.header, template.title, template.content, template.footer
        );
        Value::String(payload).to_string()
    }

    fn visit_report(&self, report: &Report) -> String {
        let payload = format!("{}{}{}", report.title, report.diagram, report.content);
        Value::String(payload).to_string()
    }
}

/// Concrete visitor: XML export for the same closed document set.
pub struct XmlExportVisitor;

impl Visitor for XmlExportVisitor {
    fn visit_template(&self, template: &Template) -> String {
        format!(
            "<xml><header>{}</header><title>{}</title><content>{}</content><footer>{}</footer></xml>",
            template.header, template.title, template.content, template.footer
        )
    }

    fn visit_report(&self, report: &Report) -> String {
        format!(
            "<xml><title>{}</title><diagram>{}</diagram><content>{}</content></xml>",
            report.title, report.diagram, report.content
        )
    }
}

fn main() {
    let report = Report::new("report_title", "report_content");
    let template = Template::new("template_title", " template_content");

    println!("{}", report.accept(&JsonExportVisitor));
    println!("{}", report.accept(&XmlExportVisitor));
    println!("{}", template.accept(&JsonExportVisitor));

    /* Output:
    "report_title {diagram} report_content"
    <xml><title>report_title</title><diagram> {diagram} </diagram><content>report_content</content></xml>
    "{header}template_title template_content{footer}" */
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_visitor_exports_report() {
        let report = Report::new("report_title", "report_content");
        assert_eq!(
            report.accept(&JsonExportVisitor),
            "\"report_title {diagram} report_content\""
        );
    }

    #[test]
    fn xml_visitor_exports_template() {
        let template = Template::new("t", "c");
        assert_eq!(
            template.accept(&XmlExportVisitor),
            "<xml><header>{header}</header><title>t</title><content>c</content><footer>{footer}</footer></xml>"
        );
    }

    #[test]
    fn visitors_produce_independent_output_for_the_same_document() {
        let report = Report::new("report_title", "report_content");

        let json = report.accept(&JsonExportVisitor);
        let xml = report.accept(&XmlExportVisitor);

        assert!(json.starts_with('"'));
        assert!(xml.starts_with("<xml>"));
        assert_ne!(json, xml);
    }

    #[test]
    fn json_export_escapes_like_any_json_string() {
        let report = Report::new("with \"quotes\"", "c");
        let json = report.accept(&JsonExportVisitor);
        assert!(json.contains("\\\"quotes\\\""));
    }
}
