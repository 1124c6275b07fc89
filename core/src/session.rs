//! # Range Sessions
//!
//! A [`RangeSession`] binds a resolved range, an optional starting address and the
//! rendering options, and drives the walk together with progress tracking.
//!
//! It can be consumed two ways:
//! * **Pull**: [`RangeSession::iter`] returns a lazy [`Walk`] of [`Entry`] values.
//! * **Push**: [`RangeSession::for_each`], [`RangeSession::for_each_async`] and
//!   [`RangeSession::run`] hand every entry to a handler, one at a time and in order.
//!
//! Push mode is only a loop over the pull iterator. An async handler is awaited
//! before the next address is produced, and a handler error stops the walk.

use std::future::Future;
use std::iter::FusedIterator;

use async_trait::async_trait;
use iprange_common::config::IterationConfig;
use iprange_common::network::codec;
use iprange_common::{NumericRange, RangeError};
use tracing::debug;

use crate::iterator::AddressIter;
use crate::progress::{self, Progress};
use crate::resolver::{self, RangeSpec};

/// One produced address and where it sits in the session's range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub address: String,
    pub progress: Progress,
}

/// Receives entries in push mode.
#[async_trait]
pub trait AddressHandler: Send {
    async fn handle(&mut self, address: String, progress: Progress) -> anyhow::Result<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeSession {
    range: NumericRange,
    /// Always inside `range` when set.
    start: Option<u128>,
    config: IterationConfig,
}

impl RangeSession {
    pub fn new(range: NumericRange) -> Self {
        Self {
            range,
            start: None,
            config: IterationConfig::default(),
        }
    }

    pub fn resolve(spec: &RangeSpec) -> Result<Self, RangeError> {
        resolver::resolve(spec).map(Self::new)
    }

    pub fn with_config(self, config: IterationConfig) -> Self {
        Self { config, ..self }
    }

    pub fn range(&self) -> &NumericRange {
        &self.range
    }

    pub fn start(&self) -> Option<u128> {
        self.start
    }

    pub fn config(&self) -> IterationConfig {
        self.config
    }

    /// Returns a copy of this session that begins at `address`.
    ///
    /// Progress stays relative to the whole range: starting at the sixth address
    /// of a block still reports `iteration` 6 for it.
    pub fn start_with(&self, address: &str) -> Result<Self, RangeError> {
        let value = codec::parse_address(self.range.family(), address)?;
        self.start_with_value(value)
    }

    pub fn start_with_value(&self, value: u128) -> Result<Self, RangeError> {
        progress::progress_of(&self.range, value)?;
        Ok(Self {
            start: Some(value),
            ..*self
        })
    }

    /// Starts a fresh pull-mode walk.
    pub fn iter(&self) -> Walk {
        let first = self.start.unwrap_or(self.range.from());
        Walk {
            values: AddressIter::new(first, self.range.to()),
            range: self.range,
            config: self.config,
        }
    }

    /// Calls `handler` for every entry. The first error ends the walk and is returned.
    pub fn for_each<F>(&self, mut handler: F) -> anyhow::Result<()>
    where
        F: FnMut(&str, Progress) -> anyhow::Result<()>,
    {
        self.log_start();
        for entry in self.iter() {
            handler(&entry.address, entry.progress)?;
        }
        debug!("Walk over {} finished", self.range);
        Ok(())
    }

    /// Like [`for_each`](Self::for_each), awaiting each call before producing the next entry.
    pub async fn for_each_async<F, Fut>(&self, mut handler: F) -> anyhow::Result<()>
    where
        F: FnMut(String, Progress) -> Fut,
        Fut: Future<Output = anyhow::Result<()>>,
    {
        self.log_start();
        for Entry { address, progress } in self.iter() {
            handler(address, progress).await?;
        }
        debug!("Walk over {} finished", self.range);
        Ok(())
    }

    /// Drives an [`AddressHandler`] over every entry.
    pub async fn run<H>(&self, handler: &mut H) -> anyhow::Result<()>
    where
        H: AddressHandler + ?Sized,
    {
        self.log_start();
        for Entry { address, progress } in self.iter() {
            handler.handle(address, progress).await?;
        }
        debug!("Walk over {} finished", self.range);
        Ok(())
    }

    fn log_start(&self) {
        let first = self.start.unwrap_or(self.range.from());
        debug!(
            addresses = %self.range.len(),
            "Walking {} starting at {}",
            self.range,
            self.range.render(first, self.config.ipv6_format)
        );
    }
}

/// Every IPv4 address.
impl Default for RangeSession {
    fn default() -> Self {
        Self::new(NumericRange::full(iprange_common::Family::V4))
    }
}

impl IntoIterator for &RangeSession {
    type Item = Entry;
    type IntoIter = Walk;

    fn into_iter(self) -> Walk {
        self.iter()
    }
}

/// Pull-mode walk over a session. Each call to `iter` creates its own.
#[derive(Clone, Debug)]
pub struct Walk {
    values: AddressIter,
    range: NumericRange,
    config: IterationConfig,
}

impl Walk {
    pub fn has_more(&self) -> bool {
        self.values.has_more()
    }
}

impl Iterator for Walk {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        let value = self.values.next()?;
        Some(Entry {
            address: self.range.render(value, self.config.ipv6_format),
            progress: progress::measure(&self.range, value),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl FusedIterator for Walk {}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
