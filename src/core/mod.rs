pub mod aggregate;
pub mod backup;
pub mod clock;
pub mod log;
pub mod session;

pub use clock::{Clock, FixedClock, SystemClock};
pub use session::DeviceLog;
