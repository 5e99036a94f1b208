use serde::Serialize;

/// Cumulative check-out / check-in counters of one owner.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct OwnerCounts {
    pub checkout: u64,
    pub checkin: u64,
}

impl OwnerCounts {
    pub fn new(checkout: u64, checkin: u64) -> Self {
        Self { checkout, checkin }
    }

    /// Devices taken out but not (yet) brought back.
    /// Negative when more check-ins than check-outs were recorded.
    pub fn balance(&self) -> i64 {
        self.checkout as i64 - self.checkin as i64
    }

    pub fn total(&self) -> u64 {
        self.checkout + self.checkin
    }
}
