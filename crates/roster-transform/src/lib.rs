//! Record building.
//!
//! Turns rows accepted by validation into immutable
//! [`roster_model::DomainRecord`]s, applying each column's normalizer:
//! dates to calendar dates, gender to `M`/`F`, letter grades upper-cased,
//! subjects split into a list. Blank optional text becomes `""`; blank
//! enrollment and joined dates default to [`BuildContext::today`].

mod builder;
mod cells;
mod error;

pub use builder::{BuildContext, build_record, build_records};
pub use error::{Result, TransformError};
