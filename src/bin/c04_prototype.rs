//! Creational Pattern: Prototype
//! Example: Copying a page with an explicit field-by-field policy
//!
//! Run with: cargo run --bin c04_prototype

use chrono::{DateTime, Local};
use std::cell::RefCell;
use std::rc::Rc;

pub struct Author {
    pub name: String,
    pages: Vec<String>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Author {
            name: name.into(),
            pages: Vec::new(),
        }))
    }

    fn add_page(&mut self, title: &str) {
        self.pages.push(title.to_string());
    }

    pub fn pages(&self) -> String {
        format!("Pages: {}", self.pages.join(", "))
    }
}

/// A page carries a mix of owned data and a shared author reference,
/// so copying cannot be a blind memberwise clone.
pub struct Page {
    title: String,
    body: String,
    comments: Vec<String>,
    date: DateTime<Local>,
    author: Rc<RefCell<Author>>,
}

impl Page {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        author: Rc<RefCell<Author>>,
    ) -> Self {
        let title = title.into();
        author.borrow_mut().add_page(&title);
        Page {
            title,
            body: body.into(),
            comments: Vec::new(),
            date: Local::now(),
            author,
        }
    }

    pub fn add_comment(&mut self, comment: impl Into<String>) {
        self.comments.push(comment.into());
    }

    /// Copy policy, field by field:
    /// - title: deep copy, suffixed with "(copy)"
    /// - body: deep copy
    /// - comments: reset, the copy starts without discussion
    /// - date: reset to the moment of copying
    /// - author: shared; the copy registers itself with the author
    pub fn duplicate(&self) -> Page {
        let title = format!("{}(copy)", self.title);
        self.author.borrow_mut().add_page(&title);
        Page {
            title,
            body: self.body.clone(),
            comments: Vec::new(),
            date: Local::now(),
            author: Rc::clone(&self.author),
        }
    }

    pub fn render(&self) -> String {
        format!(
            "Title: {}\nBody: {}\nAuthor: {} Date: {}\nComments: {}\n",
            self.title,
            self.body,
            self.author.borrow().name,
            self.date.format("%Y-%m-%d"),
            self.comments.join(", ")
        )
    }
}

fn main() {
    let author = Author::new("John Doe");
    let mut page = Page::new("Article", "Some text.", Rc::clone(&author));
    page.add_comment("1st comment");
    print!("{}", page.render());
    /* Output:
    Title: Article
    Body: Some text.
    Author: John Doe Date: 2018-10-01
    Comments: 1st comment */

    let copy = page.duplicate();
    print!("{}", copy.render());
    /* Output:
    Title: Article(copy)
    Body: Some text.
    Author: John Doe Date: 2018-10-01
    Comments: */

    println!("{}", author.borrow().pages());
    /* Output: Pages: Article, Article(copy) */
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_gets_suffixed_title_and_fresh_comments() {
        let author = Author::new("John Doe");
        let mut page = Page::new("Article", "Some text.", author);
        page.add_comment("1st comment");

        let copy = page.duplicate();

        assert!(copy.render().contains("Title: Article(copy)"));
        assert!(copy.render().contains("Comments: \n"));
        // the original keeps its discussion
        assert!(page.render().contains("Comments: 1st comment"));
    }

    #[test]
    fn copy_shares_the_author_and_registers_itself() {
        let author = Author::new("John Doe");
        let page = Page::new("Article", "Some text.", Rc::clone(&author));

        let _copy = page.duplicate();

        assert_eq!(author.borrow().pages(), "Pages: Article, Article(copy)");
    }

    #[test]
    fn body_is_deep_copied() {
        let author = Author::new("A");
        let page = Page::new("T", "Some text.", author);
        let copy = page.duplicate();

        assert!(copy.render().contains("Body: Some text."));
    }
}
