//! Construction options for seeds.

/// Options accepted by [`ClusterSeed::with_options`].
///
/// [`ClusterSeed::with_options`]: crate::ClusterSeed::with_options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedOptions {
    /// Number of trailing vertices to treat as frozen. Only digraph and
    /// edge-list inputs use it; other inputs log a warning and ignore it.
    pub frozen: Option<usize>,
    /// Whether the frozen variables form a principal coefficient system.
    /// `None` means unknown.
    pub is_principal: Option<bool>,
}

impl SeedOptions {
    /// Options with nothing set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the frozen vertex count.
    #[must_use]
    pub fn frozen(mut self, frozen: usize) -> Self {
        self.frozen = Some(frozen);
        self
    }

    /// Records whether the coefficients are principal.
    #[must_use]
    pub fn principal(mut self, is_principal: bool) -> Self {
        self.is_principal = Some(is_principal);
        self
    }
}
