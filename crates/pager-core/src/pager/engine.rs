//! Pager engine implementation

use super::{PagerContext, PagerError, PagerSubscriber};
use crate::window::{compute_window, PageToken, WindowError};
use parking_lot::RwLock;
use std::sync::{Arc, Weak};
use tracing::debug;

/// Pager state stored internally
#[derive(Debug, Clone)]
struct PagerState {
    current_page: usize,
    total_pages: usize,
}

/// The pager engine
///
/// Owns the current page and the page count, validates every requested
/// transition, and notifies subscribers after each change. Shared between
/// the UI and application code via `Arc`.
pub struct PagerEngine {
    state: Arc<RwLock<PagerState>>,
    subscribers: Arc<RwLock<Vec<Weak<dyn PagerSubscriber>>>>,
}

impl PagerEngine {
    /// Create a new engine starting at page 1
    pub fn new(total_pages: usize) -> Result<Self, WindowError> {
        if total_pages < 1 {
            return Err(WindowError::InvalidTotal(total_pages));
        }

        let state = PagerState {
            current_page: 1,
            total_pages,
        };

        Ok(Self {
            state: Arc::new(RwLock::new(state)),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        })
    }

    /// Jump to a specific page
    ///
    /// Selecting the page that is already current is a no-op and does not
    /// notify subscribers.
    pub fn select(&self, page: usize) -> Result<(), PagerError> {
        let mut state = self.state.write();

        if page < 1 || page > state.total_pages {
            return Err(WindowError::InvalidCurrentPage {
                current_page: page,
                total: state.total_pages,
            }
            .into());
        }
        if page == state.current_page {
            return Ok(());
        }

        state.current_page = page;
        drop(state);
        self.notify_subscribers();
        Ok(())
    }

    /// Move forward one page
    pub fn next(&self) -> Result<(), PagerError> {
        let mut state = self.state.write();

        if state.current_page >= state.total_pages {
            return Err(PagerError::AtLastPage);
        }
        state.current_page += 1;

        drop(state);
        self.notify_subscribers();
        Ok(())
    }

    /// Move back one page
    pub fn previous(&self) -> Result<(), PagerError> {
        let mut state = self.state.write();

        if state.current_page <= 1 {
            return Err(PagerError::AtFirstPage);
        }
        state.current_page -= 1;

        drop(state);
        self.notify_subscribers();
        Ok(())
    }

    /// Replace the page count (e.g. when the underlying data changes)
    ///
    /// Resets the current page back to 1.
    pub fn set_total(&self, total_pages: usize) -> Result<(), WindowError> {
        if total_pages < 1 {
            return Err(WindowError::InvalidTotal(total_pages));
        }

        let mut state = self.state.write();
        state.total_pages = total_pages;
        state.current_page = 1;

        drop(state);
        self.notify_subscribers();
        Ok(())
    }

    /// Get a snapshot of the current pager state
    pub fn context(&self) -> PagerContext {
        let state = self.state.read();
        PagerContext {
            current_page: state.current_page,
            total_pages: state.total_pages,
        }
    }

    /// Compute the token strip for the current state
    ///
    /// The engine keeps its state valid, so the calculator is total here.
    pub fn window(&self) -> Vec<PageToken> {
        let context = self.context();
        compute_window(context.current_page, context.total_pages).unwrap_or_default()
    }

    /// Add a subscriber
    pub fn add_subscriber(&self, subscriber: Arc<dyn PagerSubscriber>) {
        let mut subscribers = self.subscribers.write();
        subscribers.push(Arc::downgrade(&subscriber));
    }

    /// Notify all subscribers of a page change
    fn notify_subscribers(&self) {
        let context = self.context();
        debug!(
            "page changed to {} of {}",
            context.current_page, context.total_pages
        );

        let mut subscribers = self.subscribers.write();

        // Remove any dead weak references
        subscribers.retain(|weak| weak.strong_count() > 0);

        for weak in subscribers.iter() {
            if let Some(subscriber) = weak.upgrade() {
                subscriber.on_page_change(&context);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        seen: RwLock<Vec<usize>>,
    }

    impl Recorder {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                seen: RwLock::new(Vec::new()),
            })
        }
    }

    impl PagerSubscriber for Recorder {
        fn on_page_change(&self, context: &PagerContext) {
            self.seen.write().push(context.current_page);
        }
    }

    #[test]
    fn test_engine_starts_at_page_one() {
        let engine = PagerEngine::new(20).unwrap();
        let context = engine.context();
        assert_eq!(context.current_page, 1);
        assert_eq!(context.total_pages, 20);
    }

    #[test]
    fn test_zero_page_count_is_rejected() {
        assert!(matches!(
            PagerEngine::new(0),
            Err(WindowError::InvalidTotal(0))
        ));
    }

    #[test]
    fn test_select_validates_the_requested_page() {
        let engine = PagerEngine::new(20).unwrap();

        engine.select(5).unwrap();
        assert_eq!(engine.context().current_page, 5);

        assert_eq!(
            engine.select(0),
            Err(PagerError::Window(WindowError::InvalidCurrentPage {
                current_page: 0,
                total: 20
            }))
        );
        assert_eq!(
            engine.select(21),
            Err(PagerError::Window(WindowError::InvalidCurrentPage {
                current_page: 21,
                total: 20
            }))
        );
        assert_eq!(engine.context().current_page, 5);
    }

    #[test]
    fn test_selecting_the_current_page_does_not_notify() {
        let engine = PagerEngine::new(20).unwrap();
        let recorder = Recorder::new();
        engine.add_subscriber(recorder.clone());

        engine.select(1).unwrap();
        assert!(recorder.seen.read().is_empty());
    }

    #[test]
    fn test_steps_fail_at_the_boundaries() {
        let engine = PagerEngine::new(3).unwrap();

        assert_eq!(engine.previous(), Err(PagerError::AtFirstPage));
        assert_eq!(engine.context().current_page, 1);

        engine.select(3).unwrap();
        assert_eq!(engine.next(), Err(PagerError::AtLastPage));
        assert_eq!(engine.context().current_page, 3);
    }

    #[test]
    fn test_set_total_resets_to_the_first_page() {
        let engine = PagerEngine::new(20).unwrap();
        engine.select(12).unwrap();

        engine.set_total(50).unwrap();
        let context = engine.context();
        assert_eq!(context.total_pages, 50);
        assert_eq!(context.current_page, 1);

        assert_eq!(engine.set_total(0), Err(WindowError::InvalidTotal(0)));
    }

    #[test]
    fn test_subscribers_observe_transitions_in_order() {
        let engine = PagerEngine::new(20).unwrap();
        let recorder = Recorder::new();
        engine.add_subscriber(recorder.clone());

        engine.select(3).unwrap();
        engine.next().unwrap();
        engine.previous().unwrap();

        assert_eq!(*recorder.seen.read(), vec![3, 4, 3]);
    }

    #[test]
    fn test_dropped_subscribers_are_pruned() {
        let engine = PagerEngine::new(20).unwrap();
        let recorder = Recorder::new();
        engine.add_subscriber(recorder.clone());
        drop(recorder);

        // Notification must not panic with a dead subscriber in the list.
        engine.select(2).unwrap();
        assert!(engine.subscribers.read().is_empty());
    }

    #[test]
    fn test_window_tracks_the_engine_state() {
        let engine = PagerEngine::new(20).unwrap();
        engine.select(13).unwrap();

        let tokens = engine.window();
        assert_eq!(tokens.len(), 9);
        assert!(tokens.contains(&PageToken::Page(13)));
    }
}
