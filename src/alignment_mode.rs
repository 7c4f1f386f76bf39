use std::fmt;
use std::str::FromStr;

use crate::AlignerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlignmentMode {
    #[default]
    Global,      // Needleman-Wunsch
    Local,       // Smith-Waterman
}

impl AlignmentMode {
    pub fn name(&self) -> &'static str {
        match self {
            AlignmentMode::Global => "global",
            AlignmentMode::Local => "local",
        }
    }

    /// Whether the recurrence floors every cell at zero.
    pub fn is_local(&self) -> bool {
        matches!(self, AlignmentMode::Local)
    }
}

impl fmt::Display for AlignmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlignmentMode {
    type Err = AlignerError;

    /// Accepts `global`/`local` and the short `nw`/`sw` names, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "global" | "nw" => Ok(AlignmentMode::Global),
            "local" | "sw" => Ok(AlignmentMode::Local),
            _ => Err(AlignerError::InvalidStrategy(s.to_string())),
        }
    }
}
