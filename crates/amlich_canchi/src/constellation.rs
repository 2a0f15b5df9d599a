//! The 28 lunar mansions (Nhị thập bát tú) as a day cycle.
//!
//! Each civil day is ruled by one mansion in a continuous 28-day cycle that
//! stays aligned with the week: every mansion falls on the weekday of its
//! ruling luminary (Giác, ruled by Jupiter, is always a Thursday).

use amlich_time::local_day_number;

use crate::element::Element;

/// Day-number offset aligning the cycle with the week.
const CYCLE_OFFSET: i64 = 4;

/// One of the 28 mansions, in traditional order from Giác.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Constellation {
    Horn,
    Neck,
    Root,
    Room,
    Heart,
    Tail,
    WinnowingBasket,
    Dipper,
    Ox,
    Girl,
    Emptiness,
    Rooftop,
    Encampment,
    Wall,
    Legs,
    Bond,
    Stomach,
    HairyHead,
    Net,
    TurtleBeak,
    ThreeStars,
    Well,
    Ghost,
    Willow,
    Star,
    ExtendedNet,
    Wings,
    Chariot,
}

/// All 28 mansions in order (index 0 = Giác).
pub const ALL_CONSTELLATIONS: [Constellation; 28] = [
    Constellation::Horn,
    Constellation::Neck,
    Constellation::Root,
    Constellation::Room,
    Constellation::Heart,
    Constellation::Tail,
    Constellation::WinnowingBasket,
    Constellation::Dipper,
    Constellation::Ox,
    Constellation::Girl,
    Constellation::Emptiness,
    Constellation::Rooftop,
    Constellation::Encampment,
    Constellation::Wall,
    Constellation::Legs,
    Constellation::Bond,
    Constellation::Stomach,
    Constellation::HairyHead,
    Constellation::Net,
    Constellation::TurtleBeak,
    Constellation::ThreeStars,
    Constellation::Well,
    Constellation::Ghost,
    Constellation::Willow,
    Constellation::Star,
    Constellation::ExtendedNet,
    Constellation::Wings,
    Constellation::Chariot,
];

/// Auspicious mansions, by index.
#[rustfmt::skip]
const AUSPICIOUS: [bool; 28] = [
    // East
    true,  false, false, true,  false, true,  true,
    // North
    true,  false, false, false, false, true,  true,
    // West
    false, true,  true,  false, true,  false, true,
    // South
    true,  false, false, false, true,  false, true,
];

impl Constellation {
    /// Vietnamese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Horn => "Giác",
            Self::Neck => "Cang",
            Self::Root => "Đê",
            Self::Room => "Phòng",
            Self::Heart => "Tâm",
            Self::Tail => "Vĩ",
            Self::WinnowingBasket => "Cơ",
            Self::Dipper => "Đẩu",
            Self::Ox => "Ngưu",
            Self::Girl => "Nữ",
            Self::Emptiness => "Hư",
            Self::Rooftop => "Nguy",
            Self::Encampment => "Thất",
            Self::Wall => "Bích",
            Self::Legs => "Khôi",
            Self::Bond => "Lâu",
            Self::Stomach => "Vị",
            Self::HairyHead => "Mão",
            Self::Net => "Tất",
            Self::TurtleBeak => "Chủy",
            Self::ThreeStars => "Sâm",
            Self::Well => "Tỉnh",
            Self::Ghost => "Quỷ",
            Self::Willow => "Liễu",
            Self::Star => "Tinh",
            Self::ExtendedNet => "Trương",
            Self::Wings => "Dực",
            Self::Chariot => "Chẩn",
        }
    }

    /// 0-based index (0 = Giác).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 28 {
            Some(ALL_CONSTELLATIONS[index as usize])
        } else {
            None
        }
    }

    /// Ruling luminary; cycles through the seven every seven mansions.
    pub const fn luminary(self) -> Luminary {
        ALL_LUMINARIES[self.index() as usize % 7]
    }

    /// The Symbol (quadrant) the mansion belongs to, seven per quadrant.
    pub const fn quadrant(self) -> Quadrant {
        match self.index() / 7 {
            0 => Quadrant::AzureDragon,
            1 => Quadrant::BlackTortoise,
            2 => Quadrant::WhiteTiger,
            _ => Quadrant::VermilionBird,
        }
    }

    pub const fn is_auspicious(self) -> bool {
        AUSPICIOUS[self.index() as usize]
    }
}

/// The seven luminaries ruling the mansions (and the days of the week).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Luminary {
    Jupiter,
    Venus,
    Saturn,
    Sun,
    Moon,
    Mars,
    Mercury,
}

/// Luminaries in mansion order (Giác = Jupiter).
pub const ALL_LUMINARIES: [Luminary; 7] = [
    Luminary::Jupiter,
    Luminary::Venus,
    Luminary::Saturn,
    Luminary::Sun,
    Luminary::Moon,
    Luminary::Mars,
    Luminary::Mercury,
];

impl Luminary {
    /// Vietnamese name (Mộc, Kim, Thổ, Nhật, Nguyệt, Hỏa, Thủy).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jupiter => "Mộc",
            Self::Venus => "Kim",
            Self::Saturn => "Thổ",
            Self::Sun => "Nhật",
            Self::Moon => "Nguyệt",
            Self::Mars => "Hỏa",
            Self::Mercury => "Thủy",
        }
    }

    /// Element of a planet; `None` for the Sun and the Moon.
    pub const fn element(self) -> Option<Element> {
        match self {
            Self::Jupiter => Some(Element::Wood),
            Self::Venus => Some(Element::Metal),
            Self::Saturn => Some(Element::Earth),
            Self::Mars => Some(Element::Fire),
            Self::Mercury => Some(Element::Water),
            Self::Sun | Self::Moon => None,
        }
    }
}

/// The four Symbols, seven mansions each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// East
    AzureDragon,
    /// North
    BlackTortoise,
    /// West
    WhiteTiger,
    /// South
    VermilionBird,
}

impl Quadrant {
    pub const fn name(self) -> &'static str {
        match self {
            Self::AzureDragon => "Đông phương Thanh Long",
            Self::BlackTortoise => "Bắc phương Huyền Vũ",
            Self::WhiteTiger => "Tây phương Bạch Hổ",
            Self::VermilionBird => "Nam phương Chu Tước",
        }
    }
}

/// Mansion ruling the civil day with Julian Day Number `jdn`.
pub const fn constellation_for_day(jdn: i64) -> Constellation {
    ALL_CONSTELLATIONS[(jdn + CYCLE_OFFSET).rem_euclid(28) as usize]
}

/// Mansion ruling the local civil day containing UT Julian Date `jd`.
pub fn constellation_for_jd(jd: f64, tz_hours: f64) -> Constellation {
    constellation_for_day(local_day_number(jd, tz_hours))
}
