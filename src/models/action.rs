use clap::ValueEnum;
use serde::Serialize;

/// Device movement recorded by an event.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, ValueEnum)]
pub enum Action {
    /// Device taken out (반출)
    #[value(name = "out")]
    CheckOut,
    /// Device brought back (반입)
    #[value(name = "in")]
    CheckIn,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::CheckOut => "out",
            Action::CheckIn => "in",
        }
    }

    /// Convert enum → storage token
    pub fn to_store_token(&self) -> &'static str {
        match self {
            Action::CheckOut => "반출",
            Action::CheckIn => "반입",
        }
    }

    /// Convert storage token → enum (exact match only)
    pub fn from_store_token(s: &str) -> Option<Self> {
        match s {
            "반출" => Some(Action::CheckOut),
            "반입" => Some(Action::CheckIn),
            _ => None,
        }
    }
}
