use ansi_term::Colour;

/// Coarse time-of-day bucket derived from the trip's start hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Canonical display order.
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
    ];

    /// Bucket thresholds: [5,12) morning, [12,17) afternoon, [17,21) evening.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Self::Morning,
            12..=16 => Self::Afternoon,
            17..=20 => Self::Evening,
            _ => Self::Night,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
            TimeOfDay::Night => "Night",
        }
    }

    pub fn colour(&self) -> Colour {
        match self {
            TimeOfDay::Morning => Colour::Yellow,
            TimeOfDay::Afternoon => Colour::Green,
            TimeOfDay::Evening => Colour::Purple,
            TimeOfDay::Night => Colour::Blue,
        }
    }
}
