//! Structural Pattern: Bridge
//! Example: Pages and themes extending independently
//!
//! Run with: cargo run --bin s02_bridge

/// Implementation side of the bridge. New themes can be added without
/// touching any page type.
pub trait Theme {
    fn color(&self) -> String;
}

pub struct DarkTheme;

impl Theme for DarkTheme {
    fn color(&self) -> String {
        "Dark colors".to_string()
    }
}

pub struct LightTheme;

impl Theme for LightTheme {
    fn color(&self) -> String {
        "White colors".to_string()
    }
}

/// Abstraction side: a page delegates colors and styles to its theme
/// object instead of hardcoding them.
pub trait WebPage {
    fn content(&self) -> String;
}

pub struct HomePage {
    theme: Box<dyn Theme>,
}

impl HomePage {
    pub fn new(theme: Box<dyn Theme>) -> Self {
        HomePage { theme }
    }
}

impl WebPage for HomePage {
    fn content(&self) -> String {
        format!("Home page in {}", self.theme.color())
    }
}

pub struct AboutPage {
    theme: Box<dyn Theme>,
}

impl AboutPage {
    pub fn new(theme: Box<dyn Theme>) -> Self {
        AboutPage { theme }
    }
}

impl WebPage for AboutPage {
    fn content(&self) -> String {
        format!("About page in {}", self.theme.color())
    }
}

fn main() {
    let home = HomePage::new(Box::new(DarkTheme));
    println!("{}", home.content()); // Output: Home page in Dark colors

    let about = AboutPage::new(Box::new(LightTheme));
    println!("{}", about.content()); // Output: About page in White colors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_page_combines_with_any_theme() {
        assert_eq!(
            HomePage::new(Box::new(DarkTheme)).content(),
            "Home page in Dark colors"
        );
        assert_eq!(
            HomePage::new(Box::new(LightTheme)).content(),
            "Home page in White colors"
        );
        assert_eq!(
            AboutPage::new(Box::new(DarkTheme)).content(),
            "About page in Dark colors"
        );
    }

    #[test]
    fn a_new_theme_needs_no_page_changes() {
        struct HighContrastTheme;

        impl Theme for HighContrastTheme {
            fn color(&self) -> String {
                "High-contrast colors".to_string()
            }
        }

        assert_eq!(
            AboutPage::new(Box::new(HighContrastTheme)).content(),
            "About page in High-contrast colors"
        );
    }
}
