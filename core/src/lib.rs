//! Helpers for values that may be absent: existence tests, fallback substitution, and running a callback for the
//! present or absent case followed by the complementary one.
//!
//! ```
//! use nullkill_core::{when_present, value_or};
//!
//! let greeting = value_or(None, Some("Hello"))?;
//! when_present(Some(greeting), Some(|g: &&str| assert_eq!(*g, "Hello")))?
//!   .when_absent(Some(|| unreachable!()))?;
//! # Ok::<(), nullkill_core::NullError>(())
//! ```

pub mod error;
pub mod presence;
pub mod fallback;
pub mod chain;
pub mod util;

mod log;

pub use chain::{AfterAbsent, AfterPresent, Chain, ChainAfterAbsent, ChainAfterPresent, when_absent, when_first_nullable_present, when_first_present, when_present};
pub use error::NullError;
pub use fallback::{or_empty_string, or_false, or_zero, value_or, value_or_default};
pub use presence::{absent, is_absent, is_present, is_present_and_non_empty};
pub use util::nullable::Nullable;
pub use util::option::NullableExt;
pub use util::sequence::Sequence;
