//! # 基础类型
//!
//! 五行、阴阳与四柱索引。

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;

// ============================================================================
// 五行
// ============================================================================

/// 五行
///
/// 判别值即相生顺序：木(0) → 火(1) → 土(2) → 金(3) → 水(4) → 木
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, PartialOrd, Ord, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum WuXing {
    #[default]
    Mu = 0,
    Huo = 1,
    Tu = 2,
    Jin = 3,
    Shui = 4,
}

/// 五行关系（以调用方为"我"）
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum WuXingRelation {
    /// 同类
    Same = 0,
    /// 我生
    Generates = 1,
    /// 我克
    Overcomes = 2,
    /// 克我
    OvercomeBy = 3,
    /// 生我
    GeneratedBy = 4,
}

impl WuXing {
    /// 相生顺序
    pub const ALL: [WuXing; 5] = [WuXing::Mu, WuXing::Huo, WuXing::Tu, WuXing::Jin, WuXing::Shui];

    pub fn index(&self) -> u8 {
        *self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            WuXing::Mu => "木",
            WuXing::Huo => "火",
            WuXing::Tu => "土",
            WuXing::Jin => "金",
            WuXing::Shui => "水",
        }
    }

    fn step(&self, n: u8) -> Self {
        Self::ALL[((self.index() + n) % 5) as usize]
    }

    /// 我生者
    pub fn sheng(&self) -> Self {
        self.step(1)
    }

    /// 我克者
    pub fn ke(&self) -> Self {
        self.step(2)
    }

    /// 克我者
    pub fn ke_by(&self) -> Self {
        self.step(3)
    }

    /// 生我者
    pub fn sheng_by(&self) -> Self {
        self.step(4)
    }

    /// `other` 相对于 `self` 的关系
    pub fn relation_to(&self, other: WuXing) -> WuXingRelation {
        match (other.index() + 5 - self.index()) % 5 {
            0 => WuXingRelation::Same,
            1 => WuXingRelation::Generates,
            2 => WuXingRelation::Overcomes,
            3 => WuXingRelation::OvercomeBy,
            _ => WuXingRelation::GeneratedBy,
        }
    }
}

// ============================================================================
// 阴阳
// ============================================================================

/// 阴阳
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum YinYang {
    #[default]
    Yang = 0,
    Yin = 1,
}

impl YinYang {
    pub fn name(&self) -> &'static str {
        match self {
            YinYang::Yang => "阳",
            YinYang::Yin => "阴",
        }
    }
}

// ============================================================================
// 四柱索引
// ============================================================================

/// 四柱干支索引
///
/// 天干 0-9，地支 0-11。起卦特征向量的前八项即按字段顺序取自本结构。
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SiZhuIndex {
    pub year_gan: u8,
    pub year_zhi: u8,
    pub month_gan: u8,
    pub month_zhi: u8,
    pub day_gan: u8,
    pub day_zhi: u8,
    pub hour_gan: u8,
    pub hour_zhi: u8,
}

impl SiZhuIndex {
    /// 按 年干、年支、月干、月支、日干、日支、时干、时支 顺序展开
    pub fn to_array(&self) -> [u8; 8] {
        [
            self.year_gan,
            self.year_zhi,
            self.month_gan,
            self.month_zhi,
            self.day_gan,
            self.day_zhi,
            self.hour_gan,
            self.hour_zhi,
        ]
    }

    pub fn is_valid(&self) -> bool {
        [self.year_gan, self.month_gan, self.day_gan, self.hour_gan].iter().all(|g| *g < 10)
            && [self.year_zhi, self.month_zhi, self.day_zhi, self.hour_zhi].iter().all(|z| *z < 12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wuxing_cycle() {
        assert_eq!(WuXing::Mu.sheng(), WuXing::Huo);
        assert_eq!(WuXing::Shui.sheng(), WuXing::Mu);
        assert_eq!(WuXing::Mu.ke(), WuXing::Tu);
        assert_eq!(WuXing::Huo.ke(), WuXing::Jin);
        assert_eq!(WuXing::Mu.ke_by(), WuXing::Jin);
        assert_eq!(WuXing::Mu.sheng_by(), WuXing::Shui);
        assert_eq!(WuXing::Tu.sheng_by(), WuXing::Huo);
    }

    #[test]
    fn test_wuxing_relation() {
        assert_eq!(WuXing::Huo.relation_to(WuXing::Huo), WuXingRelation::Same);
        assert_eq!(WuXing::Huo.relation_to(WuXing::Tu), WuXingRelation::Generates);
        assert_eq!(WuXing::Huo.relation_to(WuXing::Jin), WuXingRelation::Overcomes);
        assert_eq!(WuXing::Huo.relation_to(WuXing::Shui), WuXingRelation::OvercomeBy);
        assert_eq!(WuXing::Huo.relation_to(WuXing::Mu), WuXingRelation::GeneratedBy);

        for a in WuXing::ALL {
            assert_eq!(a.relation_to(a.sheng()), WuXingRelation::Generates);
            assert_eq!(a.relation_to(a.sheng_by()), WuXingRelation::GeneratedBy);
        }
    }

    #[test]
    fn test_sizhu_index() {
        let idx = SiZhuIndex {
            year_gan: 6, year_zhi: 6, month_gan: 8, month_zhi: 6,
            day_gan: 2, day_zhi: 0, hour_gan: 1, hour_zhi: 7,
        };
        assert_eq!(idx.to_array(), [6, 6, 8, 6, 2, 0, 1, 7]);
        assert!(idx.is_valid());
        assert!(!SiZhuIndex { hour_zhi: 12, ..idx }.is_valid());
    }
}
