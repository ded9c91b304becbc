/// Fixed salutation every greeting starts with.
pub const SALUTATION: &str = "hello";

/// Builds greetings. Stateless; every call is independent.
#[derive(Debug, Default, Clone, Copy)]
pub struct Greeter;

impl Greeter {
    pub fn new() -> Self {
        Self
    }

    /// Returns the greeting for `name`, e.g. `"hello, fuga"`.
    pub fn say(&self, name: &str) -> String {
        format!("{SALUTATION}, {name}")
    }
}
