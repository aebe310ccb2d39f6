//! Fluent, lazy adapters over any sequence.
//!
//! A source is wrapped with [`wrap`], transformed with chained adapters that each take the
//! wrapper by value, and finally drained by a consumer such as [`ChainIter::list`] or
//! [`ChainIter::sum`]. Adapters do no work until elements are pulled.

mod chain_iter;
mod error;
mod number;
mod producer;
mod test_util;

pub use crate::chain_iter::{wrap, ChainIter};
pub use crate::error::{Error, Result};
pub use crate::number::{Decimal, Number};
pub use crate::producer::Producer;
