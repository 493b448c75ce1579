use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, FromRepr, IntoStaticStr};

/// Months of the Tamrielic calendar, in order
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    IntoStaticStr,
    Display,
    EnumIter,
    EnumCount,
)]
#[repr(u8)]
pub enum Month {
    #[strum(serialize = "Morning Star")]
    MorningStar = 0,
    #[strum(serialize = "Sun's Dawn")]
    SunsDawn = 1,
    #[strum(serialize = "First Seed")]
    FirstSeed = 2,
    #[strum(serialize = "Rain's Hand")]
    RainsHand = 3,
    #[strum(serialize = "Second Seed")]
    SecondSeed = 4,
    #[strum(serialize = "Midyear")]
    Midyear = 5,
    #[strum(serialize = "Sun's Height")]
    SunsHeight = 6,
    #[strum(serialize = "Last Seed")]
    LastSeed = 7,
    #[strum(serialize = "Hearthfire")]
    Hearthfire = 8,
    #[strum(serialize = "Frostfall")]
    Frostfall = 9,
    #[strum(serialize = "Sun's Dusk")]
    SunsDusk = 10,
    #[strum(serialize = "Evening Star")]
    EveningStar = 11,
}

impl Month {
    /// Zero-based month index
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// One-based month number
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::from_repr)
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// The birth sign ruling the month
    pub fn birth_sign(&self) -> &'static str {
        match self {
            Self::MorningStar => "The Ritual",
            Self::SunsDawn => "The Lover",
            Self::FirstSeed => "The Lord",
            Self::RainsHand => "The Mage",
            Self::SecondSeed => "The Shadow",
            Self::Midyear => "The Steed",
            Self::SunsHeight => "The Apprentice",
            Self::LastSeed => "The Warrior",
            Self::Hearthfire => "The Lady",
            Self::Frostfall => "The Tower",
            Self::SunsDusk => "The Atronach",
            Self::EveningStar => "The Thief",
        }
    }

    /// Month name as counted in Black Marsh
    pub fn argonian_name(&self) -> &'static str {
        match self {
            Self::MorningStar => "Vakka (Sun)",
            Self::SunsDawn => "Xeech (Nut)",
            Self::FirstSeed => "Sisei (Sprout)",
            Self::RainsHand => "Hist-Deek (Hist Sapling)",
            Self::SecondSeed => "Hist-Dooka (Mature Hist)",
            Self::Midyear => "Hist-Tsoko (Elder Hist)",
            Self::SunsHeight => "Thtithil-Gah (Egg-Basket)",
            Self::LastSeed => "Thtithil (Egg)",
            Self::Hearthfire => "Nushmeeko (Lizard)",
            Self::Frostfall => "Shaja-Nushmeeko (Semi-Humanoid Lizard)",
            Self::SunsDusk => "Saxhleel (Argonian)",
            Self::EveningStar => "Xulomaht (The Deceased)",
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    IntoStaticStr,
    Display,
    EnumIter,
    EnumCount,
)]
#[repr(u8)]
pub enum Weekday {
    Sundas = 0,
    Morndas = 1,
    Tirdas = 2,
    Middas = 3,
    Turdas = 4,
    Fredas = 5,
    Loredas = 6,
}

impl Weekday {
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// One-based day of the week (Sundas = 1)
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::from_repr)
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// First three letters of the name
    pub fn short_name(&self) -> &'static str {
        &self.name()[..3]
    }
}
