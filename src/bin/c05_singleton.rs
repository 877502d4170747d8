//! Creational Pattern: Singleton
//! Example: One process-wide application instance behind lazy init
//!
//! Run with: cargo run --bin c05_singleton

use lazy_static::lazy_static;

/// Process-wide application object. The type deliberately implements
/// neither `Clone` nor any serialization traits, so the only way to
/// get hold of it is through `instance()`.
pub struct Application {
    is_running: bool,
}

lazy_static! {
    // Initialized exactly once, on first access, for the lifetime of
    // the process. No teardown.
    static ref APPLICATION: Application = Application::init();
}

impl Application {
    fn init() -> Self {
        Application { is_running: true }
    }

    /// The only way to get an application instance.
    pub fn instance() -> &'static Application {
        &APPLICATION
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }
}

fn main() {
    let app = Application::instance();
    let second_app = Application::instance();

    if std::ptr::eq(app, second_app) {
        println!("It's the same instance");
    }

    /* Output:
    It's the same instance */

    // There is no other way to obtain an Application:
    // `Application { is_running: true }` does not compile outside this
    // module (private field), and the type has no Clone impl.
    assert!(app.is_running());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_accessor_calls_observe_the_same_address() {
        let first = Application::instance();
        let second = Application::instance();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn instance_is_initialized_on_first_access() {
        assert!(Application::instance().is_running());
    }
}
