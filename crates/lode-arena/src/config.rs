//! Arena and scratch-pool configuration parameters.

use crate::error::ArenaError;

/// Configuration for a single [`Arena`](crate::Arena).
///
/// Both sizes are rounded up to the platform page size at arena creation
/// and are immutable afterwards. There is no runtime reconfiguration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Total virtual span reserved up front, in bytes.
    ///
    /// Default: 64 MiB. This is the hard upper bound on everything the
    /// arena will ever hand out; the reservation never moves or resizes,
    /// which is what makes returned pointers stable for the arena's life.
    pub reserve_size: usize,

    /// Granularity by which physical backing grows, in bytes.
    ///
    /// Default: 1 MiB. Also the amount committed immediately at creation.
    /// Clamped to `reserve_size` after page rounding.
    pub commit_size: usize,

    /// Return committed pages beyond the initial commit to the OS on
    /// [`Arena::clear`](crate::Arena::clear).
    ///
    /// Default: `false`, keeping the footprint monotonically
    /// non-decreasing until the arena is dropped. Enabling this trades
    /// the fast reuse-on-push path for a smaller resident footprint
    /// between clears.
    pub decommit_on_clear: bool,
}

impl ArenaConfig {
    /// Default reserved span: 64 MiB.
    pub const DEFAULT_RESERVE_SIZE: usize = 64 << 20;

    /// Default commit granularity: 1 MiB.
    pub const DEFAULT_COMMIT_SIZE: usize = 1 << 20;

    /// Create a config with the given reserve and commit sizes.
    pub fn new(reserve_size: usize, commit_size: usize) -> Self {
        Self {
            reserve_size,
            commit_size,
            decommit_on_clear: false,
        }
    }

    /// Check the config for values the arena cannot work with.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.reserve_size == 0 {
            return Err(ArenaError::InvalidConfig {
                reason: "reserve_size must be nonzero".to_string(),
            });
        }
        if self.commit_size == 0 {
            return Err(ArenaError::InvalidConfig {
                reason: "commit_size must be nonzero".to_string(),
            });
        }
        // Sizes past isize::MAX can't be page-rounded or offset into
        // without overflow, and no allocation that large is valid anyway.
        if self.reserve_size > isize::MAX as usize || self.commit_size > isize::MAX as usize {
            return Err(ArenaError::InvalidConfig {
                reason: "sizes must not exceed isize::MAX".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RESERVE_SIZE, Self::DEFAULT_COMMIT_SIZE)
    }
}

/// Configuration for a [`ScratchPool`](crate::ScratchPool).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScratchConfig {
    /// Number of slots in the pool.
    ///
    /// Default: 2. The reference design fixed this at two without a
    /// documented rationale, so it is a parameter here; two covers the
    /// common case of one scratch alongside one destination arena.
    pub slots: usize,

    /// Configuration for each slot's arena, created lazily on first use.
    pub arena: ArenaConfig,
}

impl ScratchConfig {
    /// Default slot count.
    pub const DEFAULT_SLOTS: usize = 2;

    /// Check the config for values the pool cannot work with.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.slots == 0 {
            return Err(ArenaError::InvalidConfig {
                reason: "scratch pool needs at least one slot".to_string(),
            });
        }
        self.arena.validate()
    }
}

impl Default for ScratchConfig {
    fn default() -> Self {
        Self {
            slots: Self::DEFAULT_SLOTS,
            arena: ArenaConfig::default(),
        }
    }
}
