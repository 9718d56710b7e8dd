use optdom::{Adjacent, Display, Document, EventKind, InlineStyle, Length, NodeId};

use crate::error::{ErrorKind, OptionFilterError};
use crate::filter::{FilterOutcome, FilterPass, IGNORE_ATTR, INPUT_FONT_SIZE, SENTINEL_LABEL};
use crate::params::{FilterParams, Target};

/// Elements created by [`OptionFilter::init`].
#[derive(Debug, Clone, Copy)]
struct Parts {
    input: NodeId,
    sentinel: NodeId,
}

/// A text filter bound to one `select` element.
///
/// Construction only resolves and validates the target and records its
/// current value; nothing in the document changes until [`init`] runs.
///
/// [`init`]: OptionFilter::init
#[derive(Debug)]
pub struct OptionFilter {
    select: NodeId,
    initial_value: String,
    placeholder: String,
    parts: Option<Parts>,
}

impl OptionFilter {
    /// Bind to the target described by `params`.
    ///
    /// Fails with [`ErrorKind::TargetMissing`] when the target resolves to
    /// nothing and [`ErrorKind::TargetWrongType`] when it is not a `select`.
    #[track_caller]
    pub fn new(doc: &Document, params: FilterParams) -> Result<Self, OptionFilterError> {
        let select = resolve_target(doc, &params.target)?;
        let initial_value = doc.value(select);

        log::debug!(
            "[option-filter] bound to {} ({}), initial value {:?}",
            select,
            params.target,
            initial_value
        );

        Ok(Self {
            select,
            initial_value,
            placeholder: params.resolved_placeholder(),
            parts: None,
        })
    }

    /// Insert the filter input and the sentinel option and start listening.
    ///
    /// Never fails: problems are logged and leave the widget inert.
    pub fn init(&mut self, doc: &mut Document) {
        match self.try_init(doc) {
            Ok(()) => {}
            Err(err) if matches!(err.kind(), ErrorKind::AlreadyInitialized) => {
                log::warn!("[option-filter] {err}");
            }
            Err(err) => log::error!("[option-filter] {err}"),
        }
    }

    /// [`init`](Self::init), reporting failures to the caller instead of the
    /// log.
    #[track_caller]
    pub fn try_init(&mut self, doc: &mut Document) -> Result<(), OptionFilterError> {
        if self.parts.is_some() {
            return Err(OptionFilterError::new(ErrorKind::AlreadyInitialized));
        }

        let select = resolve_target(doc, &Target::Node(self.select))?;
        if doc.parent(select).is_none() {
            return Err(OptionFilterError::new(ErrorKind::Detached));
        }

        let parts = self.create_elements(doc)?;
        let pass = self.pass(parts);
        doc.add_event_listener(parts.input, EventKind::Input, move |doc, _| {
            if let Err(err) = pass.run(doc) {
                log::error!("[option-filter] filter pass failed: {err}");
            }
        })?;
        insert_parts(doc, select, parts)?;

        self.parts = Some(parts);
        log::info!(
            "[option-filter] initialized on {} with input {} and sentinel {}",
            select,
            parts.input,
            parts.sentinel
        );
        Ok(())
    }

    /// Run a filter pass against the current input text without waiting
    /// for an input event.
    #[track_caller]
    pub fn apply_filter(&self, doc: &mut Document) -> Result<FilterOutcome, OptionFilterError> {
        let Some(parts) = self.parts else {
            return Err(OptionFilterError::new(ErrorKind::NotInitialized));
        };
        Ok(self.pass(parts).run(doc)?)
    }

    fn pass(&self, parts: Parts) -> FilterPass {
        FilterPass {
            select: self.select,
            input: parts.input,
            sentinel: parts.sentinel,
            initial_value: self.initial_value.clone(),
        }
    }

    fn create_elements(&self, doc: &mut Document) -> Result<Parts, OptionFilterError> {
        let rect = doc.client_rect(self.select);

        let input = doc.create_element("input");
        *doc.style_mut(input)? = InlineStyle::new()
            .width(Length::Px(rect.width))
            .height(Length::Px(rect.height))
            .font_size(INPUT_FONT_SIZE);
        doc.set_attr(input, "placeholder", &self.placeholder)?;

        let sentinel = doc.create_element("option");
        doc.set_text(sentinel, SENTINEL_LABEL)?;
        doc.set_attr(sentinel, "value", "")?;
        doc.set_attr(sentinel, IGNORE_ATTR, "true")?;
        doc.style_mut(sentinel)?.display = Display::None;

        Ok(Parts { input, sentinel })
    }

    /// The enhanced `select`.
    pub fn target(&self) -> NodeId {
        self.select
    }

    /// The filter input, once initialized.
    pub fn input(&self) -> Option<NodeId> {
        self.parts.map(|p| p.input)
    }

    /// The hidden "No match" option, once initialized.
    pub fn sentinel(&self) -> Option<NodeId> {
        self.parts.map(|p| p.sentinel)
    }

    /// The target's value when the filter was constructed.
    pub fn initial_value(&self) -> &str {
        &self.initial_value
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn is_initialized(&self) -> bool {
        self.parts.is_some()
    }
}

/// Put the input before `select` and the sentinel first inside it. Either
/// both land or neither does.
#[track_caller]
fn insert_parts(doc: &mut Document, select: NodeId, parts: Parts) -> Result<(), OptionFilterError> {
    doc.insert_adjacent(select, Adjacent::BeforeBegin, parts.input)?;
    if let Err(err) = doc.insert_adjacent(select, Adjacent::AfterBegin, parts.sentinel) {
        if let Err(cleanup) = doc.remove(parts.input) {
            log::warn!("[option-filter] could not detach {}: {cleanup}", parts.input);
        }
        return Err(OptionFilterError::new(ErrorKind::Dom(err)));
    }
    Ok(())
}

#[track_caller]
fn resolve_target(doc: &Document, target: &Target) -> Result<NodeId, OptionFilterError> {
    let found = match target {
        Target::Node(id) => Some(*id).filter(|id| doc.has_node(*id)),
        Target::Selector(selector) => doc.query_selector(selector).unwrap_or_else(|err| {
            log::warn!("[option-filter] {err}");
            None
        }),
    };

    let Some(select) = found else {
        return Err(OptionFilterError::new(ErrorKind::TargetMissing {
            target: target.to_string(),
        }));
    };

    match doc.tag_name(select) {
        Some("select") => Ok(select),
        tag => Err(OptionFilterError::new(ErrorKind::TargetWrongType {
            tag: tag.unwrap_or("#document").to_string(),
        })),
    }
}
