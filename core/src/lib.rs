//! # iprange-core
//!
//! Enumerates the addresses of a CIDR block or an explicit range and reports
//! where each address sits in it.
//!
//! The pieces, in the order data flows through them:
//! * **[`resolver`]**: CIDR text or explicit bounds → [`NumericRange`].
//! * **[`iterator`]**: lazy forward walk over the values of a range.
//! * **[`progress`]**: count, 1-based position and completion percentage.
//! * **[`session`]**: ties the above together for pull and push consumption.
//!
//! ```no_run
//! use iprange_core::{RangeSession, RangeSpec};
//!
//! let session = RangeSession::resolve(&RangeSpec::cidr("10.0.1.0/29"))?
//!     .start_with("10.0.1.5")?;
//! for entry in session.iter() {
//!     println!("{} ({}%)", entry.address, entry.progress.completion_percentage);
//! }
//! # Ok::<(), iprange_core::RangeError>(())
//! ```

pub mod iterator;
pub mod progress;
pub mod resolver;
pub mod session;

pub use iprange_common::config::IterationConfig;
pub use iprange_common::{Count, Family, Ipv6Format, NumericRange, RangeError, MAX_IPV4, MAX_IPV6};
pub use iterator::{addresses, iterate, AddressIter};
pub use progress::{progress_of, Progress};
pub use resolver::{is_valid, is_valid_cidr, parse_cidr, resolve, Bound, Cidr, RangeSpec};
pub use session::{AddressHandler, Entry, RangeSession, Walk};
