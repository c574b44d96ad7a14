//! Metro areas that operate toll facilities.
//!
//! # Examples
//! ```
//! use tollway_core::Region;
//!
//! assert_eq!(Region::DallasFortWorth.as_str(), "dallas-fort-worth");
//! assert_eq!("houston".parse::<Region>(), Ok(Region::Houston));
//! ```

/// A metro area used to narrow a pricing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Austin and its toll authority (CTRMA / TxDOT).
    Austin,
    /// Houston (HCTRA) and the Grand Parkway.
    Houston,
    /// Dallas-Fort Worth (NTTA and managed lanes).
    DallasFortWorth,
    /// San Antonio.
    SanAntonio,
}

impl Region {
    /// Every region, in table order.
    pub const ALL: [Self; 4] = [
        Self::Austin,
        Self::Houston,
        Self::DallasFortWorth,
        Self::SanAntonio,
    ];

    /// Return the region as a lowercase, hyphenated `&str`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Austin => "austin",
            Self::Houston => "houston",
            Self::DallasFortWorth => "dallas-fort-worth",
            Self::SanAntonio => "san-antonio",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "austin" => Ok(Self::Austin),
            "houston" => Ok(Self::Houston),
            "dallas-fort-worth" | "dfw" => Ok(Self::DallasFortWorth),
            "san-antonio" => Ok(Self::SanAntonio),
            _ => Err(format!("unknown region '{s}'")),
        }
    }
}
