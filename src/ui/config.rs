/// Text shown around the explorer's input and panels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    pub title: String,
    pub subtitle: String,
    pub prompt: String,
    pub placeholder: String,
    pub idle_hint: String,
    pub loading_label: String,
    pub key_hints: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "GitHub Profile Explorer".to_string(),
            subtitle: "Discover GitHub profiles in style".to_string(),
            prompt: "Username".to_string(),
            placeholder: "Enter GitHub username...".to_string(),
            idle_hint: "Type a username and press Enter to search".to_string(),
            loading_label: "Fetching profile".to_string(),
            key_hints: "Enter search • Ctrl+O profile • Ctrl+B blog • Ctrl+T twitter • Esc quit"
                .to_string(),
        }
    }
}

impl UiConfig {
    /// Replace the title shown above the search bar.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}
