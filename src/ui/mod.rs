//! Interactive terminal UI for pk.

pub mod table;

pub use table::run;
