//! Nạp Âm: the thirty "sound" elements of the sexagenary cycle.
//!
//! Consecutive cycle positions pair up (Giáp Tý and Ất Sửu share Hải Trung
//! Kim, and so on), so cycle index `n` maps to entry `n / 2`.

use crate::element::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum NaAm {
    HaiTrungKim,
    LuTrungHoa,
    DaiLamMoc,
    LoBangTho,
    KiemPhongKim,
    SonDauHoa,
    GianHaThuy,
    ThanhDauTho,
    BachLapKim,
    DuongLieuMoc,
    TuyenTrungThuy,
    OcThuongTho,
    TichLichHoa,
    TungBachMoc,
    TruongLuuThuy,
    SaTrungKim,
    SonHaHoa,
    BinhDiaMoc,
    BichThuongTho,
    KimBachKim,
    PhuDangHoa,
    ThienHaThuy,
    DaiDichTho,
    ThoaXuyenKim,
    TangDoMoc,
    DaiKheThuy,
    SaTrungTho,
    ThienThuongHoa,
    ThachLuuMoc,
    DaiHaiThuy,
}

/// All 30 entries in cycle order.
pub const ALL_NA_AM: [NaAm; 30] = [
    NaAm::HaiTrungKim,
    NaAm::LuTrungHoa,
    NaAm::DaiLamMoc,
    NaAm::LoBangTho,
    NaAm::KiemPhongKim,
    NaAm::SonDauHoa,
    NaAm::GianHaThuy,
    NaAm::ThanhDauTho,
    NaAm::BachLapKim,
    NaAm::DuongLieuMoc,
    NaAm::TuyenTrungThuy,
    NaAm::OcThuongTho,
    NaAm::TichLichHoa,
    NaAm::TungBachMoc,
    NaAm::TruongLuuThuy,
    NaAm::SaTrungKim,
    NaAm::SonHaHoa,
    NaAm::BinhDiaMoc,
    NaAm::BichThuongTho,
    NaAm::KimBachKim,
    NaAm::PhuDangHoa,
    NaAm::ThienHaThuy,
    NaAm::DaiDichTho,
    NaAm::ThoaXuyenKim,
    NaAm::TangDoMoc,
    NaAm::DaiKheThuy,
    NaAm::SaTrungTho,
    NaAm::ThienThuongHoa,
    NaAm::ThachLuuMoc,
    NaAm::DaiHaiThuy,
];

impl NaAm {
    pub const fn name(self) -> &'static str {
        match self {
            Self::HaiTrungKim => "Hải Trung Kim",
            Self::LuTrungHoa => "Lư Trung Hỏa",
            Self::DaiLamMoc => "Đại Lâm Mộc",
            Self::LoBangTho => "Lộ Bàng Thổ",
            Self::KiemPhongKim => "Kiếm Phong Kim",
            Self::SonDauHoa => "Sơn Đầu Hỏa",
            Self::GianHaThuy => "Giản Hạ Thủy",
            Self::ThanhDauTho => "Thành Đầu Thổ",
            Self::BachLapKim => "Bạch Lạp Kim",
            Self::DuongLieuMoc => "Dương Liễu Mộc",
            Self::TuyenTrungThuy => "Tuyền Trung Thủy",
            Self::OcThuongTho => "Ốc Thượng Thổ",
            Self::TichLichHoa => "Tích Lịch Hỏa",
            Self::TungBachMoc => "Tùng Bách Mộc",
            Self::TruongLuuThuy => "Trường Lưu Thủy",
            Self::SaTrungKim => "Sa Trung Kim",
            Self::SonHaHoa => "Sơn Hạ Hỏa",
            Self::BinhDiaMoc => "Bình Địa Mộc",
            Self::BichThuongTho => "Bích Thượng Thổ",
            Self::KimBachKim => "Kim Bạc Kim",
            Self::PhuDangHoa => "Phú Đăng Hỏa",
            Self::ThienHaThuy => "Thiên Hà Thủy",
            Self::DaiDichTho => "Đại Dịch Thổ",
            Self::ThoaXuyenKim => "Thoa Xuyến Kim",
            Self::TangDoMoc => "Tang Đố Mộc",
            Self::DaiKheThuy => "Đại Khê Thủy",
            Self::SaTrungTho => "Sa Trung Thổ",
            Self::ThienThuongHoa => "Thiên Thượng Hỏa",
            Self::ThachLuuMoc => "Thạch Lựu Mộc",
            Self::DaiHaiThuy => "Đại Hải Thủy",
        }
    }

    /// 0-based index (0 = Hải Trung Kim).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Entry for a sexagenary cycle index in 0..60.
    pub const fn from_cycle_index(cycle_index: u8) -> Option<Self> {
        if cycle_index < 60 {
            Some(ALL_NA_AM[cycle_index as usize / 2])
        } else {
            None
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::HaiTrungKim
            | Self::KiemPhongKim
            | Self::BachLapKim
            | Self::SaTrungKim
            | Self::KimBachKim
            | Self::ThoaXuyenKim => Element::Metal,
            Self::LuTrungHoa
            | Self::SonDauHoa
            | Self::TichLichHoa
            | Self::SonHaHoa
            | Self::PhuDangHoa
            | Self::ThienThuongHoa => Element::Fire,
            Self::DaiLamMoc
            | Self::DuongLieuMoc
            | Self::TungBachMoc
            | Self::BinhDiaMoc
            | Self::TangDoMoc
            | Self::ThachLuuMoc => Element::Wood,
            Self::LoBangTho
            | Self::ThanhDauTho
            | Self::OcThuongTho
            | Self::BichThuongTho
            | Self::DaiDichTho
            | Self::SaTrungTho => Element::Earth,
            Self::GianHaThuy
            | Self::TuyenTrungThuy
            | Self::TruongLuuThuy
            | Self::ThienHaThuy
            | Self::DaiKheThuy
            | Self::DaiHaiThuy => Element::Water,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_share_entry() {
        assert_eq!(NaAm::from_cycle_index(0), Some(NaAm::HaiTrungKim));
        assert_eq!(NaAm::from_cycle_index(1), Some(NaAm::HaiTrungKim));
        assert_eq!(NaAm::from_cycle_index(59), Some(NaAm::DaiHaiThuy));
        assert_eq!(NaAm::from_cycle_index(60), None);
    }

    #[test]
    fn six_of_each_element() {
        for e in crate::element::ALL_ELEMENTS {
            let n = ALL_NA_AM.iter().filter(|x| x.element() == e).count();
            assert_eq!(n, 6, "{e:?}");
        }
    }
}
