//! The filter pass run on every input event.

use optdom::{Display, Document, DomError, Length, NodeId};

/// Marker attribute carried by options the filter pass must skip.
///
/// Presence-based: any value counts. The sentinel is written with `"true"`.
pub const IGNORE_ATTR: &str = "filter:ignore";

/// Label of the hidden placeholder option.
pub const SENTINEL_LABEL: &str = "No match";

/// Font size given to the filter input.
pub const INPUT_FONT_SIZE: Length = Length::Em(0.8);

/// Counts over the options a pass considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterOutcome {
    pub shown: usize,
    pub hidden: usize,
    pub selected: usize,
}

/// Everything a pass needs, copied into the input listener.
#[derive(Debug, Clone)]
pub(crate) struct FilterPass {
    pub(crate) select: NodeId,
    pub(crate) input: NodeId,
    pub(crate) sentinel: NodeId,
    pub(crate) initial_value: String,
}

impl FilterPass {
    /// The options subject to filtering, in tree order.
    fn entries(&self, doc: &Document) -> Vec<NodeId> {
        doc.options(self.select)
            .into_iter()
            .filter(|option| *option != self.sentinel && !doc.has_attr(*option, IGNORE_ATTR))
            .collect()
    }

    pub(crate) fn run(&self, doc: &mut Document) -> Result<FilterOutcome, DomError> {
        let term = doc.value(self.input);
        let is_empty = term.is_empty();
        let entries = self.entries(doc);

        let mut outcome = FilterOutcome::default();
        let mut selection = Vec::with_capacity(entries.len());
        for &entry in &entries {
            let matched = doc.option_label(entry).contains(term.as_str());
            let shown = matched || is_empty;

            doc.style_mut(entry)?.display = if shown {
                Display::Initial
            } else {
                Display::None
            };
            selection.push((entry, matched && !is_empty));

            if shown {
                outcome.shown += 1;
            } else {
                outcome.hidden += 1;
            }
        }

        doc.apply_selection(self.select, selection)?;

        if is_empty {
            let initial = entries
                .iter()
                .copied()
                .find(|entry| doc.option_value(*entry) == self.initial_value);
            if let Some(initial) = initial {
                doc.set_selected(initial, true)?;
            }
        }

        outcome.selected = entries.iter().filter(|e| doc.is_selected(**e)).count();

        log::debug!(
            "[option-filter] term {:?} on {}: {} shown, {} hidden, {} selected",
            term,
            self.select,
            outcome.shown,
            outcome.hidden,
            outcome.selected
        );
        Ok(outcome)
    }
}
