use std::fmt;

/// A CSS length as written into an inline style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(u16),
    Em(f32),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(px) => write!(f, "{px}px"),
            Self::Em(em) => write!(f, "{em}em"),
        }
    }
}

/// The inline `display` value. `Initial` means no inline override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Initial,
    None,
}

/// The subset of inline style the document tracks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub font_size: Option<Length>,
    pub display: Display,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: Length) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: Length) -> Self {
        self.height = Some(height);
        self
    }

    pub fn font_size(mut self, font_size: Length) -> Self {
        self.font_size = Some(font_size);
        self
    }

    pub fn display(mut self, display: Display) -> Self {
        self.display = display;
        self
    }

    pub fn is_hidden(&self) -> bool {
        self.display == Display::None
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Render as the value of a `style` attribute.
    pub fn to_css(&self) -> String {
        let mut decls = Vec::new();
        if let Some(width) = self.width {
            decls.push(format!("width: {width}"));
        }
        if let Some(height) = self.height {
            decls.push(format!("height: {height}"));
        }
        if let Some(font_size) = self.font_size {
            decls.push(format!("font-size: {font_size}"));
        }
        if self.display == Display::None {
            decls.push("display: none".to_string());
        }
        decls.join("; ")
    }
}
