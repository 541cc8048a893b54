use serde::{Deserialize, Serialize};

/// The four World Bank indicators charted by the dashboard.
///
/// Declaration order is chart order; `Indicator::ALL[i]` feeds chart `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    OutOfSchoolPrimaryFemale,
    AdultFemaleLiteracy,
    SecondaryProgressionFemale,
    FemaleLaborForceShare,
}

impl Indicator {
    pub const ALL: [Indicator; 4] = [
        Indicator::OutOfSchoolPrimaryFemale,
        Indicator::AdultFemaleLiteracy,
        Indicator::SecondaryProgressionFemale,
        Indicator::FemaleLaborForceShare,
    ];

    /// World Bank indicator code used in the request path.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::OutOfSchoolPrimaryFemale => "SE.PRM.UNER.FE",
            Self::AdultFemaleLiteracy => "SE.ADT.LITR.FE.ZS",
            Self::SecondaryProgressionFemale => "SE.SEC.PROG.FE.ZS",
            Self::FemaleLaborForceShare => "SL.TLF.TOTL.FE.ZS",
        }
    }

    /// Zero-based chart slot.
    #[must_use]
    pub fn position(self) -> usize {
        match self {
            Self::OutOfSchoolPrimaryFemale => 0,
            Self::AdultFemaleLiteracy => 1,
            Self::SecondaryProgressionFemale => 2,
            Self::FemaleLaborForceShare => 3,
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|indicator| indicator.code().eq_ignore_ascii_case(code))
    }
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
