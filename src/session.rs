//! The chooser session boundary.
//!
//! [`ChooserSession`] is the surface a dialog talks to: it turns raw
//! input events (query text changes, row activations, confirm, cancel)
//! into model and matcher calls and owns the completion callback.
//! Rendering is the embedder's job; the session only hands out rows.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::matcher::{Matcher, MatcherControl};
use crate::model::SelectionModel;
use crate::output::ChooserOutput;
use crate::{ChooserError, Item, SelectMode, VisibleItem};

/// Completion callback: delivered the selection exactly once on confirm,
/// never on cancel.
pub type CompletionCallback = Box<dyn FnOnce(ChooserOutput) + Send>;

/// Latest applied filter result: request sequence plus visible rows.
type View = (usize, Vec<VisibleItem>);

//------------------------------------------------------------------------------
/// One chooser dialog's worth of state: the model, the filter
/// coordinator, the currently applied view, and the completion callback.
pub struct ChooserSession {
    model: Arc<SelectionModel>,
    matcher: Matcher,
    view: Arc<Mutex<View>>,
    control: Option<MatcherControl>,
    on_confirm: Option<CompletionCallback>,
}

impl ChooserSession {
    /// Opens a session over `items`. `on_confirm` fires exactly once if
    /// the user confirms; cancelling drops it unfired.
    pub fn new(items: Vec<Item>, mode: SelectMode, on_confirm: CompletionCallback) -> Self {
        let model = Arc::new(SelectionModel::new(items, mode));
        // The initial view is the unfiltered collection, sequence 0.
        let view = Arc::new(Mutex::new((0, model.query(""))));
        Self {
            model,
            matcher: Matcher::new(),
            view,
            control: None,
            on_confirm: Some(on_confirm),
        }
    }

    /// The model behind this session.
    pub fn model(&self) -> &Arc<SelectionModel> {
        &self.model
    }

    /// Dispatches a background filter for `text`, superseding any
    /// request still in flight. The rows land in
    /// [`visible_rows`](Self::visible_rows) once the worker wins.
    pub fn query_changed(&mut self, text: &str) {
        if let Some(mut control) = self.control.take() {
            control.kill();
        }

        let view = self.view.clone();
        let control = self
            .matcher
            .run(text, self.model.snapshot(), move |sequence, rows| {
                Self::apply(&view, sequence, rows);
            });
        self.control = Some(control);
    }

    /// Applies a filter result unless a newer one has already landed.
    fn apply(view: &Mutex<View>, sequence: usize, rows: Vec<VisibleItem>) {
        let mut view = view.lock();
        if sequence >= view.0 {
            *view = (sequence, rows);
        } else {
            trace!("stale filter result {sequence} ignored, have {}", view.0);
        }
    }

    /// True while a filter request is still running.
    pub fn filtering(&self) -> bool {
        self.control.as_ref().is_some_and(|control| !control.stopped())
    }

    /// The currently applied filtered view. Rows carry backing indices
    /// for [`item_activated`](Self::item_activated).
    pub fn visible_rows(&self) -> Vec<VisibleItem> {
        self.view.lock().1.clone()
    }

    /// Toggles selection at a row's backing index.
    pub fn item_activated(&self, index: usize) -> Result<bool, ChooserError> {
        self.model.toggle(index)
    }

    /// Delivers the selection to the completion callback and finishes
    /// the session; only the first confirm fires the callback.
    pub fn confirm(&mut self) {
        if let Some(callback) = self.on_confirm.take() {
            let output = self.model.selection();
            debug!("session confirmed, {} selected", output.items.len());
            callback(output);
        }
    }

    /// Finishes the session without touching the callback.
    pub fn cancel(&mut self) {
        if self.on_confirm.take().is_some() {
            debug!("session cancelled");
        }
    }

    /// True once confirm or cancel has run.
    pub fn finished(&self) -> bool {
        self.on_confirm.is_none()
    }
}
