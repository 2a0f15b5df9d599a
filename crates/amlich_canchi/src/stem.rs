//! The ten Heavenly Stems (Thiên Can).

use crate::element::Element;

/// Yin/Yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Dương",
            Self::Yin => "Âm",
        }
    }
}

/// One of the ten Heavenly Stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum HeavenlyStem {
    Giap,
    At,
    Binh,
    Dinh,
    Mau,
    Ky,
    Canh,
    Tan,
    Nham,
    Quy,
}

/// All stems in cycle order (index 0 = Giáp).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Giap,
    HeavenlyStem::At,
    HeavenlyStem::Binh,
    HeavenlyStem::Dinh,
    HeavenlyStem::Mau,
    HeavenlyStem::Ky,
    HeavenlyStem::Canh,
    HeavenlyStem::Tan,
    HeavenlyStem::Nham,
    HeavenlyStem::Quy,
];

impl HeavenlyStem {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Giap => "Giáp",
            Self::At => "Ất",
            Self::Binh => "Bính",
            Self::Dinh => "Đinh",
            Self::Mau => "Mậu",
            Self::Ky => "Kỷ",
            Self::Canh => "Canh",
            Self::Tan => "Tân",
            Self::Nham => "Nhâm",
            Self::Quy => "Quý",
        }
    }

    /// 0-based index (0 = Giáp).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem at `n` modulo 10 (negative `n` wraps).
    pub const fn from_cycle(n: i64) -> Self {
        ALL_STEMS[n.rem_euclid(10) as usize]
    }

    /// Giáp, Bính, Mậu, Canh, Nhâm are Yang.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Stems pair up by element: Giáp/Ất Wood, Bính/Đinh Fire, and so on.
    pub const fn element(self) -> Element {
        match self.index() / 2 {
            0 => Element::Wood,
            1 => Element::Fire,
            2 => Element::Earth,
            3 => Element::Metal,
            _ => Element::Water,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_indices() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
        assert_eq!(HeavenlyStem::Binh.name(), "Bính");
    }

    #[test]
    fn wraps_negative() {
        assert_eq!(HeavenlyStem::from_cycle(-1), HeavenlyStem::Quy);
        assert_eq!(HeavenlyStem::from_cycle(23), HeavenlyStem::Dinh);
    }

    #[test]
    fn polarity_and_element() {
        assert_eq!(HeavenlyStem::Giap.polarity(), Polarity::Yang);
        assert_eq!(HeavenlyStem::Quy.polarity(), Polarity::Yin);
        assert_eq!(HeavenlyStem::Canh.element(), Element::Metal);
        assert_eq!(HeavenlyStem::Quy.element(), Element::Water);
    }
}
