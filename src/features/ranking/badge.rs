use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Display badge derived solely from a weekly rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Badge {
    Gold,
    Silver,
    Bronze,
    #[serde(rename = "NONE")]
    Unranked,
}

impl Badge {
    /// Maps a 1-based rank to its badge. Ranks past the podium get no medal.
    pub fn for_rank(rank: u32) -> Badge {
        match rank {
            1 => Badge::Gold,
            2 => Badge::Silver,
            3 => Badge::Bronze,
            _ => Badge::Unranked,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Badge::Gold => "Gold",
            Badge::Silver => "Silver",
            Badge::Bronze => "Bronze",
            Badge::Unranked => "NONE",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Badge {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Gold" => Ok(Badge::Gold),
            "Silver" => Ok(Badge::Silver),
            "Bronze" => Ok(Badge::Bronze),
            "NONE" => Ok(Badge::Unranked),
            other => Err(format!("Unknown badge: {}", other)),
        }
    }
}
