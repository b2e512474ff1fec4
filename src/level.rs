#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ContributionLevel {
    #[default]
    None = 0,
    Minimal = 1,
    Low = 2,
    Medium = 3,
    High = 4,
}

const MINIMAL: u64 = 1;
const LOW: u64 = 10;
const MEDIUM: u64 = 20;
const HIGH: u64 = 30;

impl ContributionLevel {
    pub const ALL: [ContributionLevel; 5] = [
        Self::None,
        Self::Minimal,
        Self::Low,
        Self::Medium,
        Self::High,
    ];

    pub fn classify(count: u64) -> Self {
        if count >= HIGH {
            Self::High
        } else if count >= MEDIUM {
            Self::Medium
        } else if count >= LOW {
            Self::Low
        } else if count >= MINIMAL {
            Self::Minimal
        } else {
            Self::None
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::None => "No",
            Self::Minimal => "1-9",
            Self::Low => "10-19",
            Self::Medium => "20-29",
            Self::High => "30+",
        }
    }
}

pub fn describe(level: u8) -> &'static str {
    ContributionLevel::from_u8(level)
        .map(ContributionLevel::description)
        .unwrap_or("Unknown")
}
