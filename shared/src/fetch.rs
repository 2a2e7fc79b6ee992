//! Latest-request-wins bookkeeping for view fetches.
//!
//! Views start a fetch on every navigation and cannot cancel the ones already
//! in flight. Each fetch takes a [`FetchTicket`] from the view's
//! [`FetchSequence`]; only the holder of the newest ticket may publish its
//! outcome.

use std::{cell::Cell, rc::Rc};

/// Issues tickets for one view's fetches.
#[derive(Debug, Clone, Default)]
pub struct FetchSequence {
    issued: Rc<Cell<u64>>,
}

impl FetchSequence {
    /// Start a fetch, superseding every ticket issued before.
    pub fn begin(&self) -> FetchTicket {
        let generation = self.issued.get() + 1;
        self.issued.set(generation);
        FetchTicket {
            generation,
            issued: Rc::clone(&self.issued),
        }
    }

    /// Supersede outstanding tickets without starting a new fetch.
    pub fn invalidate(&self) {
        self.issued.set(self.issued.get() + 1);
    }
}

/// Proof that a fetch was started; goes stale once a newer one begins.
#[derive(Debug)]
pub struct FetchTicket {
    generation: u64,
    issued: Rc<Cell<u64>>,
}

impl FetchTicket {
    /// Whether no newer fetch has started since this one.
    pub fn is_current(&self) -> bool {
        self.issued.get() == self.generation
    }
}
