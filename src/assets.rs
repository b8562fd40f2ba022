use fnv::FnvHashSet;

/// Handle for one in-flight asset load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LoadTicket {
    id: u64,
}

/// Bookkeeping for asynchronous loads. A completion is only applied when its
/// ticket is still pending; unmounting closes the tracker so late results are
/// discarded.
#[derive(Debug, Default)]
pub struct AssetLoads {
    next_id: u64,
    pending: FnvHashSet<u64>,
    closed: bool,
}

impl AssetLoads {
    pub fn begin(&mut self) -> LoadTicket {
        let id = self.next_id;
        self.next_id += 1;
        if !self.closed {
            self.pending.insert(id);
        }
        LoadTicket { id }
    }

    /// Retire a ticket. Returns `true` when the caller may apply the result.
    pub fn finish(&mut self, ticket: LoadTicket) -> bool {
        self.pending.remove(&ticket.id) && !self.closed
    }

    /// Retire every pending ticket without closing the tracker, e.g. when a
    /// newer load supersedes them.
    pub fn supersede_all(&mut self) {
        self.pending.clear();
    }

    pub fn close(&mut self) {
        if !self.pending.is_empty() {
            log::info!("[asset] discarding {} pending load(s)", self.pending.len());
        }
        self.pending.clear();
        self.closed = true;
    }

    pub fn is_pending(&self, ticket: LoadTicket) -> bool {
        self.pending.contains(&ticket.id)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

/// Panorama texture availability as shown to the user.
#[derive(Clone, Debug, PartialEq)]
pub enum PanoramaStatus {
    Loading,
    Ready { width: u32, height: u32 },
    Failed(String),
}

impl PanoramaStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, PanoramaStatus::Loading)
    }
}
