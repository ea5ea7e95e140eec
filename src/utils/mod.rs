pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod time;

pub use formatting::mins2readable;
pub use time::{format_minutes, worked_minutes};
