/// Tally of one [`Notifier::notify`](crate::Notifier::notify) pass.
///
/// Informational only: a skipped endpoint is normal, not a failure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Delivery {
    /// Endpoints that accepted the signal.
    pub delivered: usize,
    /// Endpoints that could not accept it right now.
    pub skipped: usize,
}

impl Delivery {
    /// Number of endpoints visited by the pass.
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.delivered + self.skipped
    }
}
