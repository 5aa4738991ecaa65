//! Table and session configuration.

use core::time::Duration;

/// Configuration for a session registry and the games it hosts.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use std::time::Duration;
/// use bjsession::TableOptions;
///
/// let options = TableOptions::default()
///     .with_session_ttl(Duration::from_secs(600))
///     .with_reply_timeout(Duration::from_millis(500))
///     .with_stand_on_soft_17(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Age after which a session is evicted.
    pub session_ttl: Duration,
    /// How long a caller waits for a session to reply.
    pub reply_timeout: Duration,
    /// Period of the background eviction pass.
    pub sweep_interval: Duration,
    /// Commands a session will queue before callers wait to enqueue.
    pub queue_depth: usize,
    /// Whether the dealer stands on soft 17. When false the dealer hits it.
    pub stand_on_soft_17: bool,
    /// Whether a session is removed from the registry once it replies with a
    /// round the player has stood on.
    pub retire_finished: bool,
    /// Seed for deck shuffling. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            session_ttl: Duration::from_secs(30 * 60),
            reply_timeout: Duration::from_secs(2),
            sweep_interval: Duration::from_secs(60 * 60),
            queue_depth: 32,
            stand_on_soft_17: false,
            retire_finished: true,
            seed: None,
        }
    }
}

impl TableOptions {
    /// Sets the session time-to-live.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use bjsession::TableOptions;
    ///
    /// let options = TableOptions::default().with_session_ttl(Duration::from_secs(60));
    /// assert_eq!(options.session_ttl, Duration::from_secs(60));
    /// ```
    #[must_use]
    pub const fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = ttl;
        self
    }

    /// Sets how long callers wait for a reply.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use bjsession::TableOptions;
    ///
    /// let options = TableOptions::default().with_reply_timeout(Duration::from_secs(5));
    /// assert_eq!(options.reply_timeout, Duration::from_secs(5));
    /// ```
    #[must_use]
    pub const fn with_reply_timeout(mut self, timeout: Duration) -> Self {
        self.reply_timeout = timeout;
        self
    }

    /// Sets the eviction period.
    #[must_use]
    pub const fn with_sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = interval;
        self
    }

    /// Sets the per-session command queue depth. Zero is raised to one.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsession::TableOptions;
    ///
    /// let options = TableOptions::default().with_queue_depth(0);
    /// assert_eq!(options.queue_depth, 1);
    /// ```
    #[must_use]
    pub const fn with_queue_depth(mut self, depth: usize) -> Self {
        self.queue_depth = if depth == 0 { 1 } else { depth };
        self
    }

    /// Sets whether the dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsession::TableOptions;
    ///
    /// let options = TableOptions::default().with_stand_on_soft_17(true);
    /// assert!(options.stand_on_soft_17);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets whether finished sessions leave the registry.
    #[must_use]
    pub const fn with_retire_finished(mut self, retire: bool) -> Self {
        self.retire_finished = retire;
        self
    }

    /// Sets the shuffle seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsession::TableOptions;
    ///
    /// let options = TableOptions::default().with_seed(42);
    /// assert_eq!(options.seed, Some(42));
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
