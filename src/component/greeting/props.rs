/// Inputs the shell passes to the greeting panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GreetingProps {
    pub greeting: String,
    /// Optional; an absent name renders as an empty segment.
    pub name: Option<String>,
    /// Render the click counter and its increment button.
    pub show_counter: bool,
}

impl GreetingProps {
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            greeting: greeting.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_counter(mut self, show_counter: bool) -> Self {
        self.show_counter = show_counter;
        self
    }
}
