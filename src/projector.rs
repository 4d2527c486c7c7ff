//! Audience-facing display state. The console draws whatever this holds; the
//! only behaviour beyond storing text is the black-out flag, which swallows
//! every render request while it is set.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projector {
    main_text: String,
    footer: Option<String>,
    blank: bool,
    hidden: bool,
}

impl Projector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a verse. Ignored while the projector is blacked out.
    pub fn render(&mut self, main_text: impl Into<String>, footer: Option<String>) {
        if self.blank {
            return;
        }
        self.main_text = main_text.into();
        self.footer = footer;
    }

    pub fn clear(&mut self) {
        self.main_text.clear();
        self.footer = None;
    }

    /// Entering black-out clears the screen; leaving it shows nothing until the
    /// next render.
    pub fn set_blank(&mut self, blank: bool) {
        if blank && !self.blank {
            self.clear();
        }
        self.blank = blank;
    }

    pub fn toggle_black(&mut self) -> bool {
        self.set_blank(!self.blank);
        self.blank
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn toggle_hidden(&mut self) -> bool {
        self.hidden = !self.hidden;
        self.hidden
    }

    pub fn main_text(&self) -> &str {
        &self.main_text
    }

    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }

    pub fn is_blank(&self) -> bool {
        self.blank
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}
