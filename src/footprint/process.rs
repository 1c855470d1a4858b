//! Soldering processes.
//!
//! Every land pattern in the catalogs is tied to the soldering process it was
//! designed for. Manufacturers publish separate pad sets for each:
//!
//! - **Reflow**: solder paste and oven, the smallest pads
//! - **Wave**: wave soldering, longer pads to catch the solder wave
//! - **Flow**: Murata's name for flow (wave) soldering
//! - **Hand**: manual soldering iron, largest pads

use std::fmt;

use serde::{Deserialize, Serialize};

/// Soldering process a pad set is designed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SolderProcess {
    /// Reflow soldering.
    Reflow,

    /// Wave soldering.
    Wave,

    /// Flow soldering (wave soldering in Murata terminology).
    Flow,

    /// Hand soldering.
    Hand,
}

impl SolderProcess {
    /// All processes in generation order.
    pub const ALL: [Self; 4] = [Self::Reflow, Self::Wave, Self::Flow, Self::Hand];

    /// Parses a process from a string.
    ///
    /// Accepts the process names case-insensitively.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "REFLOW" => Some(Self::Reflow),
            "WAVE" => Some(Self::Wave),
            "FLOW" => Some(Self::Flow),
            "HAND" => Some(Self::Hand),
            _ => None,
        }
    }

    /// Returns the process name as used in footprint names.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Reflow => "Reflow",
            Self::Wave => "Wave",
            Self::Flow => "Flow",
            Self::Hand => "Hand",
        }
    }

    /// Returns the test board column for this process.
    ///
    /// Wave and Flow are the same process under two names and share a column.
    #[must_use]
    pub const fn board_column(&self) -> u32 {
        match self {
            Self::Reflow => 0,
            Self::Wave | Self::Flow => 1,
            Self::Hand => 2,
        }
    }
}

impl fmt::Display for SolderProcess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_from_string() {
        assert_eq!(SolderProcess::from_str_loose("Reflow"), Some(SolderProcess::Reflow));
        assert_eq!(SolderProcess::from_str_loose("wave"), Some(SolderProcess::Wave));
        assert_eq!(SolderProcess::from_str_loose("FLOW"), Some(SolderProcess::Flow));
        assert_eq!(SolderProcess::from_str_loose("hand"), Some(SolderProcess::Hand));
        assert_eq!(SolderProcess::from_str_loose("vapour"), None);
    }

    #[test]
    fn wave_and_flow_share_a_column() {
        assert_eq!(SolderProcess::Reflow.board_column(), 0);
        assert_eq!(SolderProcess::Wave.board_column(), 1);
        assert_eq!(SolderProcess::Flow.board_column(), 1);
        assert_eq!(SolderProcess::Hand.board_column(), 2);
    }

    #[test]
    fn display_matches_name() {
        for process in SolderProcess::ALL {
            assert_eq!(process.to_string(), process.name());
        }
    }
}
