//! Creational Pattern: Builder
//! Example: Consuming builder, plus a Director-driven variant
//!
//! Run with: cargo run --bin c03_builder

// =============================================================================
// Example 1: Consuming builder against the telescoping constructor
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct Page {
    pub title: String,
    pub header: String,
    pub content: String,
    pub footer: String,
}

impl Page {
    pub fn builder(title: impl Into<String>) -> PageBuilder {
        PageBuilder::new(title)
    }

    pub fn show(&self) -> String {
        format!("{}{}{}{}", self.title, self.header, self.content, self.footer)
    }
}

/// Each setter takes `self` and returns `self` for chaining; `build`
/// consumes the builder, so it cannot be reused afterwards.
pub struct PageBuilder {
    title: String,
    header: String,
    content: String,
    footer: String,
}

impl PageBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        PageBuilder {
            title: title.into(),
            header: String::new(),
            content: String::new(),
            footer: String::new(),
        }
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = footer.into();
        self
    }

    pub fn build(self) -> Page {
        Page {
            title: self.title,
            header: self.header,
            content: self.content,
            footer: self.footer,
        }
    }
}

// =============================================================================
// Example 2: Director tells an abstract builder the desired sequence
// =============================================================================

pub trait BuildSteps {
    fn add_header(&mut self, header: &str);
    fn add_content(&mut self, content: &str);
    fn add_footer(&mut self, footer: &str);
}

pub struct Director;

impl Director {
    /// Tells the builder what to do, in the desired order.
    pub fn construct(builder: &mut dyn BuildSteps) {
        builder.add_header("header");
        builder.add_content("content");
        builder.add_footer("footer");
    }
}

/// Concrete builder wrapping every part in HTML tags.
pub struct HtmlPageBuilder {
    page: Page,
}

impl HtmlPageBuilder {
    pub fn new() -> Self {
        HtmlPageBuilder {
            page: Page::default(),
        }
    }

    pub fn finish(self) -> Page {
        self.page
    }
}

impl BuildSteps for HtmlPageBuilder {
    fn add_header(&mut self, header: &str) {
        self.page.header = format!("<header>{}</header>", header);
    }

    fn add_content(&mut self, content: &str) {
        self.page.content = format!("<article>{}</article>", content);
    }

    fn add_footer(&mut self, footer: &str) {
        self.page.footer = format!("<footer>{}</footer>", footer);
    }
}

fn main() {
    let page = Page::builder("<h1>Home page</h1>")
        .header("<header></header>")
        .content("<article>content</article>")
        .footer("<footer></footer>")
        .build();
    println!("{}", page.show());

    let mut builder = HtmlPageBuilder::new();
    Director::construct(&mut builder);
    println!("{}", builder.finish().show());

    /* Output:
    <h1>Home page</h1><header></header><article>content</article><footer></footer>
    <header>header</header><article>content</article><footer>footer</footer> */
}
