/// Race limits checked once, when a race is built.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RaceConfig {
    /// Hard cap on entrants, applied on top of "no more than the START cells".
    pub max_participants: usize,
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
}

impl RaceConfig {
    pub const DEFAULT_MAX_PARTICIPANTS: usize = 4;

    pub fn new() -> Self {
        Self {
            max_participants: Self::DEFAULT_MAX_PARTICIPANTS,
            max_width: None,
            max_height: None,
        }
    }

    pub fn with_max_participants(max_participants: usize) -> Self {
        Self {
            max_participants,
            ..Self::new()
        }
    }

    pub fn with_max_dimensions(mut self, max_width: u32, max_height: u32) -> Self {
        self.max_width = Some(max_width);
        self.max_height = Some(max_height);
        self
    }
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self::new()
    }
}
