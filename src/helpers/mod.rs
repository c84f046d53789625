//! Helper functions for post listings
//!
//! Date, reading-time and list helpers used by the loader and by the
//! command-line listings.

mod date;
mod list;
mod reading;

pub use date::*;
pub use list::*;
pub use reading::*;
