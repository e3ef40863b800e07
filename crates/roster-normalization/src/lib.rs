//! Cell value normalization.
//!
//! Stateless, pure functions that coerce raw spreadsheet text into canonical
//! values. None of them panic or return errors: a value that cannot be
//! coerced yields an empty/`None` result and the validator decides whether
//! that is a problem.
//!
//! # Overview
//!
//! - **Dates**: ISO `YYYY-MM-DD`, `DD/MM/YYYY`, spreadsheet date serials and
//!   a set of common textual layouts, always normalized to ISO
//! - **Gender**: `M`/`Male`/`F`/`Female` in any case
//! - **Email**: syntactic check only
//! - **Numbers**: thousands separators, whitespace, integral checks
//! - **Text**: letter grades, pass/fail, subject lists
//!
//! # Example
//!
//! ```
//! use roster_normalization::{is_valid_email, normalize_gender, parse_date};
//! use roster_model::Gender;
//!
//! assert_eq!(parse_date("15/05/2010"), "2010-05-15");
//! assert_eq!(parse_date("40313"), "2010-05-15");
//! assert_eq!(normalize_gender("male"), Gender::M);
//! assert!(is_valid_email("head@school.ac.zm"));
//! ```

mod date;
mod email;
mod gender;
mod numeric;
mod text;

pub use date::{date_to_serial, format_iso_date, parse_date, parse_date_value, serial_to_date};
pub use email::is_valid_email;
pub use gender::{is_known_gender, normalize_gender};
pub use numeric::{format_number, parse_integer, parse_numeric};
pub use text::{
    join_subjects, normalize_letter_grade, normalize_pass_fail, normalize_text, split_subjects,
};
