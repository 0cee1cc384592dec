use getset::Getters;
use std::fmt::Display;

/// Root category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Animal {
    Fish(Fish),
}

/// Subcategory of [`Animal`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Fish {
    GoldFish(GoldFish),
    Carp(Carp),
}

#[derive(Getters, Debug, Clone, PartialEq, Eq, Hash)]
#[getset(get = "pub")]
pub struct GoldFish {
    name: String,
}

#[derive(Getters, Debug, Clone, PartialEq, Eq, Hash)]
#[getset(get = "pub")]
pub struct Carp {
    name: String,
}

impl GoldFish {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Carp {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Fish {
    pub fn name(&self) -> &str {
        match self {
            Self::GoldFish(fish) => fish.name(),
            Self::Carp(fish) => fish.name(),
        }
    }
}

impl Animal {
    pub fn name(&self) -> &str {
        match self {
            Self::Fish(fish) => fish.name(),
        }
    }
}

// Each leaf converts into every ancestor.

impl From<GoldFish> for Fish {
    fn from(fish: GoldFish) -> Self {
        Self::GoldFish(fish)
    }
}

impl From<Carp> for Fish {
    fn from(fish: Carp) -> Self {
        Self::Carp(fish)
    }
}

impl From<Fish> for Animal {
    fn from(fish: Fish) -> Self {
        Self::Fish(fish)
    }
}

impl From<GoldFish> for Animal {
    fn from(fish: GoldFish) -> Self {
        Self::Fish(fish.into())
    }
}

impl From<Carp> for Animal {
    fn from(fish: Carp) -> Self {
        Self::Fish(fish.into())
    }
}

impl Display for Fish {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GoldFish(fish) => write!(f, "GoldFish({})", fish.name()),
            Self::Carp(fish) => write!(f, "Carp({})", fish.name()),
        }
    }
}

impl Display for Animal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fish(fish) => Display::fmt(fish, f),
        }
    }
}
