use richview_core::{StyledText, TextSize};

/// The fragment appended to truncated text, with the settings it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct SeeMoreSpec {
    /// Parsed fragment, runs included
    pub text: StyledText,
    pub color: Option<String>,
    pub size: TextSize,
    /// Style tokens in `<rich style>` form (`b_u`), empty for none
    pub style: String,
    /// Extra horizontal space reserved next to the fragment
    pub padding: f32,
    /// Whether the whole view expands on click instead of just the fragment
    pub clickable_whole_view: bool,
}

impl SeeMoreSpec {
    pub fn new(text: StyledText) -> Self {
        Self {
            text,
            color: None,
            size: TextSize::sp(14),
            style: String::new(),
            padding: 0.0,
            clickable_whole_view: false,
        }
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
