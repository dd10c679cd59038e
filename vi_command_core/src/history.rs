//! Undo history

use log::{trace, warn};

use crate::config::HistoryConfig;
use crate::snapshot::Snapshot;

/// Stack of snapshots, newest on top
#[derive(Debug, Clone, Default)]
pub struct History {
    stack: Vec<Snapshot>,
    limit: Option<usize>,
}

impl History {
    /// A limit of 0 is raised to 1 so the newest snapshot always survives
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            stack: Vec::new(),
            limit: config.limit.map(|limit| limit.max(1)),
        }
    }

    /// Record a snapshot, evicting the oldest one when over the limit
    pub fn push(&mut self, snapshot: Snapshot) {
        trace!("history push: cursor={} depth={}", snapshot.cursor, self.stack.len() + 1);
        self.stack.push(snapshot);

        if let Some(limit) = self.limit {
            if self.stack.len() > limit {
                let excess = self.stack.len() - limit;
                warn!("history limit {} reached, dropping {} oldest snapshot(s)", limit, excess);
                self.stack.drain(..excess);
            }
        }
    }

    /// Pop up to `count` snapshots and return the last one popped
    ///
    /// Stops silently when the stack runs out. `None` means nothing was
    /// popped.
    pub fn pop_many(&mut self, count: usize) -> Option<Snapshot> {
        let mut last = None;
        for _ in 0..count {
            match self.stack.pop() {
                Some(snapshot) => last = Some(snapshot),
                None => break,
            }
        }
        trace!("history pop: depth={}", self.stack.len());
        last
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn peek(&self) -> Option<&Snapshot> {
        self.stack.last()
    }
}
