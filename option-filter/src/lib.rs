//! Live text filtering for native `select` controls.
//!
//! [`OptionFilter`] puts a text input in front of a `select` and, on every
//! keystroke, shows, hides and selects the control's options by literal
//! substring match against their labels.
//!
//! ```
//! use optdom::{Document, ElementBuilder};
//! use option_filter::{FilterParams, OptionFilter};
//!
//! let mut doc = Document::new();
//! let body = doc.body();
//! doc.mount(
//!     body,
//!     ElementBuilder::select()
//!         .id("people")
//!         .child(ElementBuilder::option("佐々木 一郎"))
//!         .child(ElementBuilder::option("木下 次郎")),
//! )
//! .unwrap();
//!
//! let mut filter = OptionFilter::new(&doc, FilterParams::new("#people")).unwrap();
//! filter.init(&mut doc);
//!
//! let input = filter.input().unwrap();
//! doc.type_text(input, "次郎").unwrap();
//! ```

mod error;
mod filter;
mod params;
mod widget;

pub use error::{ErrorKind, OptionFilterError};
pub use filter::{FilterOutcome, IGNORE_ATTR, INPUT_FONT_SIZE, SENTINEL_LABEL};
pub use params::{DEFAULT_PLACEHOLDER, FilterParams, Target};
pub use widget::OptionFilter;
