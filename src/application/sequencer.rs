use std::cell::Cell;

/// Issued when a refresh starts; only the newest ticket may publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

impl RefreshTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Last-call-wins gate for overlapping refreshes. Outstanding requests are
/// left to finish; their results are dropped once a newer ticket exists.
#[derive(Debug, Default)]
pub struct RefreshSequencer {
    latest: Cell<u64>,
}

impl RefreshSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> RefreshTicket {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        RefreshTicket(next)
    }

    pub fn is_current(&self, ticket: RefreshTicket) -> bool {
        self.latest.get() == ticket.0
    }
}
