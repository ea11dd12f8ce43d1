//! Date formatting engine

mod date;

pub use date::format_date;
