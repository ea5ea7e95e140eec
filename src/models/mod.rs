pub mod carry_over;
pub mod leave;
pub mod work_entry;

pub use carry_over::CarryOver;
pub use leave::{LeaveBalance, LeaveEntry};
pub use work_entry::WorkLogEntry;
