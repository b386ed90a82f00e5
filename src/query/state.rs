//! Query state
//!
//! The cursor/buffer/page-counter bundle behind one iteration. Only
//! [`QuerySet`](super::QuerySet) mutates it.

use crate::resource::{Record, ResourceKind};

/// Progress of one pass over a remote collection
#[derive(Debug, Clone)]
pub struct QueryState {
    kind: ResourceKind,
    /// Last page successfully fetched; 0 before the first fetch
    last_fetched_page: u32,
    /// Records of the current page only
    buffer: Vec<Record>,
    /// Index of the next record to hand out; always `<= buffer.len()`
    cursor: usize,
    /// Set once the API reported there is no next page. Never cleared.
    terminal: bool,
    /// Records handed out so far across all pages
    consumed: u64,
}

impl QueryState {
    /// Fresh state: nothing fetched, nothing buffered
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            last_fetched_page: 0,
            buffer: Vec::new(),
            cursor: 0,
            terminal: false,
            consumed: 0,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn last_fetched_page(&self) -> u32 {
        self.last_fetched_page
    }

    /// Page number the next fetch must request
    pub fn next_page(&self) -> u32 {
        self.last_fetched_page + 1
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Records held for the current page, consumed or not
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    /// Records of the current page not yet handed out
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.cursor
    }

    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Hand out the next buffered record, if any
    pub(crate) fn take_buffered(&mut self) -> Option<Record> {
        let record = self.buffer.get(self.cursor)?.clone();
        self.cursor += 1;
        self.consumed += 1;
        Some(record)
    }

    /// Replace the buffer with a freshly fetched page
    pub(crate) fn load_page(&mut self, page: u32, records: Vec<Record>) {
        debug_assert_eq!(page, self.next_page(), "pages must be loaded in order");
        self.last_fetched_page = page;
        self.buffer = records;
        self.cursor = 0;
    }

    /// Enter the terminal state; releases the buffer
    pub(crate) fn mark_terminal(&mut self) {
        self.terminal = true;
        self.buffer = Vec::new();
        self.cursor = 0;
    }
}
