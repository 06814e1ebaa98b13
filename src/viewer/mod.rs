//! Step-indexed pattern viewer
//!
//! [`StepViewer`] holds the selected [`PatternRecord`] (borrowed from the
//! catalog), a [`StepCursor`] over its steps, and an injected [`Renderer`].
//!
//! # Navigation contract
//!
//! Every operation (`select`, `next`, `previous`, `jump_to`, `reset`):
//!
//! 1. updates the cursor, which keeps `0 <= current_step < total_steps`
//! 2. calls [`Renderer::present`] with the pattern id and new step
//! 3. notifies subscribed [`StepObserver`]s
//! 4. returns the new [`StepPosition`]
//!
//! All of this happens before the call returns. Saturated moves (next at the
//! last step, previous at step 0) still present and notify. Navigation never
//! looks at renderer state, so a renderer that has nothing to show yet cannot
//! hold up the cursor.

pub mod cursor;

pub use cursor::StepCursor;

use crate::catalog::{PatternCatalog, PatternRecord};
use crate::render::Renderer;
use std::fmt;
use tracing::debug;

/// Observable viewer state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepPosition<'a> {
    pub pattern_id: &'a str,
    pub current_step: usize,
    pub total_steps: usize,
}

impl StepPosition<'_> {
    pub fn is_first(&self) -> bool {
        self.current_step == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_step + 1 >= self.total_steps
    }
}

impl fmt::Display for StepPosition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} of {}", self.current_step + 1, self.total_steps)
    }
}

/// Push-style listener for step changes
pub trait StepObserver {
    fn step_changed(&mut self, position: StepPosition<'_>);
}

impl<F> StepObserver for F
where
    F: FnMut(StepPosition<'_>),
{
    fn step_changed(&mut self, position: StepPosition<'_>) {
        (*self)(position)
    }
}

/// Cursor over one pattern's steps, driving a renderer
pub struct StepViewer<'c, R> {
    catalog: &'c PatternCatalog,
    record: &'c PatternRecord,
    cursor: StepCursor,
    renderer: R,
    observers: Vec<Box<dyn StepObserver + 'c>>,
}

impl<'c, R: Renderer> StepViewer<'c, R> {
    /// Create a viewer and select `pattern_id` (falling back to the default)
    pub fn new(catalog: &'c PatternCatalog, renderer: R, pattern_id: &str) -> Self {
        let record = catalog.lookup(pattern_id);
        let mut viewer = StepViewer {
            catalog,
            record,
            cursor: StepCursor::new(record.step_count()),
            renderer,
            observers: Vec::new(),
        };
        viewer.publish();
        viewer
    }

    /// Register an observer; it is called after every operation
    pub fn subscribe(&mut self, observer: impl StepObserver + 'c) {
        self.observers.push(Box::new(observer));
    }

    /// Switch to another pattern and start at step 0
    pub fn select(&mut self, pattern_id: &str) -> StepPosition<'c> {
        self.record = self.catalog.lookup(pattern_id);
        self.cursor = StepCursor::new(self.record.step_count());
        self.publish()
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> StepPosition<'c> {
        self.cursor.next();
        self.publish()
    }

    pub fn previous(&mut self) -> StepPosition<'c> {
        self.cursor.previous();
        self.publish()
    }

    /// Jump to `index`, clamped into range
    pub fn jump_to(&mut self, index: i64) -> StepPosition<'c> {
        self.cursor.jump_to(index);
        self.publish()
    }

    pub fn jump_to_last(&mut self) -> StepPosition<'c> {
        self.jump_to(i64::MAX)
    }

    pub fn reset(&mut self) -> StepPosition<'c> {
        self.cursor.reset();
        self.publish()
    }

    fn publish(&mut self) -> StepPosition<'c> {
        let position = self.position();
        debug!(
            pattern = position.pattern_id,
            step = position.current_step,
            total = position.total_steps,
            "step changed"
        );
        self.renderer
            .present(position.pattern_id, position.current_step);
        for observer in &mut self.observers {
            observer.step_changed(position);
        }
        position
    }
}

impl<'c, R> StepViewer<'c, R> {
    pub fn position(&self) -> StepPosition<'c> {
        StepPosition {
            pattern_id: self.record.id(),
            current_step: self.cursor.index(),
            total_steps: self.cursor.total(),
        }
    }

    pub fn record(&self) -> &'c PatternRecord {
        self.record
    }

    pub fn catalog(&self) -> &'c PatternCatalog {
        self.catalog
    }

    pub fn current_step(&self) -> usize {
        self.cursor.index()
    }

    pub fn total_steps(&self) -> usize {
        self.cursor.total()
    }

    /// Instruction text for the current step
    pub fn current_instruction(&self) -> &'c str {
        self.record.step(self.cursor.index()).unwrap_or_default()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingRenderer;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct StepLog(Rc<RefCell<Vec<usize>>>);

    impl StepObserver for StepLog {
        fn step_changed(&mut self, position: StepPosition<'_>) {
            self.0.borrow_mut().push(position.current_step);
        }
    }

    fn catalog() -> PatternCatalog {
        PatternCatalog::builtin().expect("builtin catalog")
    }

    #[test]
    fn test_new_presents_initial_step() {
        let catalog = catalog();
        let viewer = StepViewer::new(&catalog, RecordingRenderer::new(), "miura-ori");
        assert_eq!(viewer.renderer().calls(), &[("miura-ori".to_string(), 0)]);
        assert_eq!(viewer.position().to_string(), "Step 1 of 6");
    }

    #[test]
    fn test_saturated_moves_still_present() {
        let catalog = catalog();
        let mut viewer = StepViewer::new(&catalog, RecordingRenderer::new(), "waterbomb");
        viewer.previous();
        assert_eq!(viewer.renderer().calls().len(), 2);
        assert_eq!(viewer.renderer().last(), Some(("waterbomb", 0)));
    }

    #[test]
    fn test_observer_sees_each_transition_in_order() {
        let catalog = catalog();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut viewer = StepViewer::new(&catalog, RecordingRenderer::new(), "waterbomb");
        viewer.subscribe(StepLog(Rc::clone(&seen)));

        viewer.next();
        viewer.next();
        viewer.jump_to(-1);
        viewer.jump_to_last();
        assert_eq!(*seen.borrow(), vec![1, 2, 0, 5]);
    }

    #[test]
    fn test_current_instruction_tracks_cursor() {
        let catalog = catalog();
        let mut viewer = StepViewer::new(&catalog, RecordingRenderer::new(), "waterbomb");
        viewer.jump_to(2);
        assert_eq!(
            viewer.current_instruction(),
            "Fold diagonals in each small square."
        );
    }

    #[test]
    fn test_position_helpers() {
        let position = StepPosition {
            pattern_id: "x",
            current_step: 2,
            total_steps: 3,
        };
        assert!(position.is_last());
        assert!(!position.is_first());
    }
}
