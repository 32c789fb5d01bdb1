use crate::artifacts::diff::segment::{Algorithm, DiffResult, compute_diff_with};
use derive_new::new;

/// The two texts under comparison and the diff computed for them.
///
/// Every change of either text bumps the revision and drops the previous
/// result; there is no incremental patching. A computation started through
/// [`Session::begin`] is only published if no newer text arrived meanwhile.
#[derive(Debug, Default)]
pub struct Session {
    old_text: String,
    new_text: String,
    algorithm: Algorithm,
    revision: u64,
    result: Option<DiffResult>,
}

/// Snapshot of the inputs at a given revision.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Ticket {
    revision: u64,
    old_text: String,
    new_text: String,
    algorithm: Algorithm,
}

impl Ticket {
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn compute(&self) -> DiffResult {
        compute_diff_with(&self.old_text, &self.new_text, self.algorithm)
    }
}

impl Session {
    pub fn new(algorithm: Algorithm) -> Self {
        Session {
            algorithm,
            ..Default::default()
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn old_text(&self) -> &str {
        &self.old_text
    }

    pub fn new_text(&self) -> &str {
        &self.new_text
    }

    pub fn set_old(&mut self, text: impl Into<String>) {
        self.old_text = text.into();
        self.invalidate();
    }

    pub fn set_new(&mut self, text: impl Into<String>) {
        self.new_text = text.into();
        self.invalidate();
    }

    pub fn set_texts(&mut self, old_text: impl Into<String>, new_text: impl Into<String>) {
        self.old_text = old_text.into();
        self.new_text = new_text.into();
        self.invalidate();
    }

    pub fn begin(&self) -> Ticket {
        Ticket::new(
            self.revision,
            self.old_text.clone(),
            self.new_text.clone(),
            self.algorithm,
        )
    }

    /// Stores `result` if `ticket` still describes the current texts.
    pub fn publish(&mut self, ticket: &Ticket, result: DiffResult) -> bool {
        if ticket.revision != self.revision {
            tracing::debug!(
                stale = ticket.revision,
                current = self.revision,
                "discarding stale diff result"
            );
            return false;
        }

        self.result = Some(result);
        true
    }

    /// The last published result, if it matches the current texts.
    pub fn latest(&self) -> Option<&DiffResult> {
        self.result.as_ref()
    }

    /// The diff of the current texts, computed now if nothing was published yet.
    pub fn diff(&mut self) -> &DiffResult {
        let (old_text, new_text, algorithm) = (&self.old_text, &self.new_text, self.algorithm);
        self.result
            .get_or_insert_with(|| compute_diff_with(old_text, new_text, algorithm))
    }

    fn invalidate(&mut self) {
        self.revision += 1;
        self.result = None;
        tracing::trace!(revision = self.revision, "session texts changed");
    }
}
