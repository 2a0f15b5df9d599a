//! The Five Elements (Ngũ Hành) and their cycles.
//!
//! Generating cycle (tương sinh): Wood → Fire → Earth → Metal → Water → Wood.
//! Overcoming cycle (tương khắc): Wood → Earth → Water → Fire → Metal → Wood.

/// One of the Five Elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All elements in generating-cycle order.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// Vietnamese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Mộc",
            Self::Fire => "Hỏa",
            Self::Earth => "Thổ",
            Self::Metal => "Kim",
            Self::Water => "Thủy",
        }
    }

    /// 0-based index in generating-cycle order.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The element this one generates.
    pub const fn generates(self) -> Self {
        ALL_ELEMENTS[(self.index() as usize + 1) % 5]
    }

    /// The element that generates this one.
    pub const fn generated_by(self) -> Self {
        ALL_ELEMENTS[(self.index() as usize + 4) % 5]
    }

    /// The element this one overcomes.
    pub const fn destroys(self) -> Self {
        ALL_ELEMENTS[(self.index() as usize + 2) % 5]
    }

    /// The element that overcomes this one.
    pub const fn destroyed_by(self) -> Self {
        ALL_ELEMENTS[(self.index() as usize + 3) % 5]
    }
}

/// Relation of one element to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRelation {
    Generates,
    GeneratedBy,
    Destroys,
    DestroyedBy,
    Same,
    Neutral,
}

impl ElementRelation {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Generates => "Tương sinh",
            Self::GeneratedBy => "Được sinh",
            Self::Destroys => "Tương khắc",
            Self::DestroyedBy => "Bị khắc",
            Self::Same => "Bình hòa",
            Self::Neutral => "Không quan hệ",
        }
    }

    /// The relation seen from the other side.
    pub const fn inverse(self) -> Self {
        match self {
            Self::Generates => Self::GeneratedBy,
            Self::GeneratedBy => Self::Generates,
            Self::Destroys => Self::DestroyedBy,
            Self::DestroyedBy => Self::Destroys,
            Self::Same => Self::Same,
            Self::Neutral => Self::Neutral,
        }
    }
}

/// Relation of `a` to `b`.
///
/// Checked in the order generates, destroys, generated-by, destroyed-by,
/// same.
pub fn element_compatibility(a: Element, b: Element) -> ElementRelation {
    if a.generates() == b {
        ElementRelation::Generates
    } else if a.destroys() == b {
        ElementRelation::Destroys
    } else if a.generated_by() == b {
        ElementRelation::GeneratedBy
    } else if a.destroyed_by() == b {
        ElementRelation::DestroyedBy
    } else if a == b {
        ElementRelation::Same
    } else {
        ElementRelation::Neutral
    }
}
