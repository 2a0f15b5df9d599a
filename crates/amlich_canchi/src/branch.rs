//! The twelve Earthly Branches (Địa Chi) and their zodiac animals.

use crate::element::Element;

/// One of the twelve Earthly Branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum EarthlyBranch {
    Ty,
    Suu,
    Dan,
    Mao,
    Thin,
    Ti,
    Ngo,
    Mui,
    Than,
    Dau,
    Tuat,
    Hoi,
}

/// All branches in cycle order (index 0 = Tý).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Ty,
    EarthlyBranch::Suu,
    EarthlyBranch::Dan,
    EarthlyBranch::Mao,
    EarthlyBranch::Thin,
    EarthlyBranch::Ti,
    EarthlyBranch::Ngo,
    EarthlyBranch::Mui,
    EarthlyBranch::Than,
    EarthlyBranch::Dau,
    EarthlyBranch::Tuat,
    EarthlyBranch::Hoi,
];

impl EarthlyBranch {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ty => "Tý",
            Self::Suu => "Sửu",
            Self::Dan => "Dần",
            Self::Mao => "Mão",
            Self::Thin => "Thìn",
            Self::Ti => "Tỵ",
            Self::Ngo => "Ngọ",
            Self::Mui => "Mùi",
            Self::Than => "Thân",
            Self::Dau => "Dậu",
            Self::Tuat => "Tuất",
            Self::Hoi => "Hợi",
        }
    }

    /// 0-based index (0 = Tý).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch at `n` modulo 12 (negative `n` wraps).
    pub const fn from_cycle(n: i64) -> Self {
        ALL_BRANCHES[n.rem_euclid(12) as usize]
    }

    pub const fn animal(self) -> ZodiacAnimal {
        ALL_ANIMALS[self.index() as usize]
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Ty | Self::Hoi => Element::Water,
            Self::Dan | Self::Mao => Element::Wood,
            Self::Ti | Self::Ngo => Element::Fire,
            Self::Than | Self::Dau => Element::Metal,
            Self::Suu | Self::Thin | Self::Mui | Self::Tuat => Element::Earth,
        }
    }

    /// Local clock hours `[start, end)` of the double-hour (giờ) ruled by this
    /// branch. Tý spans midnight: 23–1.
    pub const fn hour_range(self) -> (u32, u32) {
        let start = (2 * self.index() as u32 + 23) % 24;
        (start, (start + 2) % 24)
    }
}

/// The twelve animals of the Vietnamese zodiac (the Cat replaces the Rabbit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacAnimal {
    Rat,
    Ox,
    Tiger,
    Cat,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

/// All animals in branch order (index 0 = Rat).
pub const ALL_ANIMALS: [ZodiacAnimal; 12] = [
    ZodiacAnimal::Rat,
    ZodiacAnimal::Ox,
    ZodiacAnimal::Tiger,
    ZodiacAnimal::Cat,
    ZodiacAnimal::Dragon,
    ZodiacAnimal::Snake,
    ZodiacAnimal::Horse,
    ZodiacAnimal::Goat,
    ZodiacAnimal::Monkey,
    ZodiacAnimal::Rooster,
    ZodiacAnimal::Dog,
    ZodiacAnimal::Pig,
];

impl ZodiacAnimal {
    /// Vietnamese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "Chuột",
            Self::Ox => "Trâu",
            Self::Tiger => "Hổ",
            Self::Cat => "Mèo",
            Self::Dragon => "Rồng",
            Self::Snake => "Rắn",
            Self::Horse => "Ngựa",
            Self::Goat => "Dê",
            Self::Monkey => "Khỉ",
            Self::Rooster => "Gà",
            Self::Dog => "Chó",
            Self::Pig => "Lợn",
        }
    }
}
