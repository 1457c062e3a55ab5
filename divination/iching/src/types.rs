//! # 周易类型定义

use alloc::string::String;
use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_std::prelude::*;

use stardust_divination_common::WuXing;

use crate::constants::{find_hexagram_by_number, TRIGRAM_DATA};

// ============================================================================
// 八卦
// ============================================================================

/// 八经卦
///
/// 爻序自下而上，阳爻为 1，阴爻为 0。
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Trigram {
    /// 乾 ☰ 天
    #[default]
    Qian = 0,
    /// 坤 ☷ 地
    Kun = 1,
    /// 震 ☳ 雷
    Zhen = 2,
    /// 巽 ☴ 风
    Xun = 3,
    /// 坎 ☵ 水
    Kan = 4,
    /// 离 ☲ 火
    Li = 5,
    /// 艮 ☶ 山
    Gen = 6,
    /// 兑 ☱ 泽
    Dui = 7,
}

impl Trigram {
    pub const ALL: [Trigram; 8] = [
        Trigram::Qian,
        Trigram::Kun,
        Trigram::Zhen,
        Trigram::Xun,
        Trigram::Kan,
        Trigram::Li,
        Trigram::Gen,
        Trigram::Dui,
    ];

    pub fn index(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        TRIGRAM_DATA[self.index() as usize].name
    }

    pub fn symbol(&self) -> &'static str {
        TRIGRAM_DATA[self.index() as usize].symbol
    }

    /// 卦象（天、地、雷、风、水、火、山、泽）
    pub fn nature(&self) -> &'static str {
        TRIGRAM_DATA[self.index() as usize].nature
    }

    pub fn wuxing(&self) -> WuXing {
        TRIGRAM_DATA[self.index() as usize].wuxing
    }

    /// 三爻，自下而上
    pub fn lines(&self) -> [u8; 3] {
        TRIGRAM_DATA[self.index() as usize].lines
    }

    /// 由三爻查卦，爻值只能是 0 或 1
    pub fn from_lines(lines: [u8; 3]) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.lines() == lines)
    }
}

/// 八卦静态数据
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TrigramData {
    pub name: &'static str,
    pub symbol: &'static str,
    pub nature: &'static str,
    pub wuxing: WuXing,
    pub lines: [u8; 3],
}

// ============================================================================
// 六十四卦
// ============================================================================

/// 六十四卦静态数据（文王卦序）
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Hexagram {
    pub number: u8,
    pub name: &'static str,
    pub upper: Trigram,
    pub lower: Trigram,
    /// 卦德
    pub nature: &'static str,
    /// 卦辞
    pub judgement: &'static str,
    /// 大象
    pub image: &'static str,
    /// 星际解读
    pub cosmic_desc: &'static str,
}

impl Hexagram {
    /// 六爻，自下而上（下卦在前）
    pub fn lines(&self) -> [u8; 6] {
        let lower = self.lower.lines();
        let upper = self.upper.lines();
        [lower[0], lower[1], lower[2], upper[0], upper[1], upper[2]]
    }
}

/// 爻辞与白话释义
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct LineText {
    pub text: &'static str,
    pub interpretation: &'static str,
}

/// 变爻爻辞（带爻位名称）
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ChangingLineText {
    /// 爻位 0-5
    pub index: u8,
    /// 爻位名称，如 `初爻`
    pub position: &'static str,
    pub text: &'static str,
    pub interpretation: &'static str,
}

// ============================================================================
// 起卦
// ============================================================================

/// 起卦特征数量
pub const SEED_FEATURES: usize = 20;

/// 起卦特征向量
///
/// 依次为：四柱八个干支索引、MBTI 四维与大五五维（四舍五入）、九型主型与翼型、
/// 日干 × 12 + 日支。相同特征向量必然得到相同卦象，可作为缓存键。
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, PartialOrd, Ord, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct CastSeed {
    pub values: [i64; SEED_FEATURES],
}

/// 起卦结果
#[derive(Clone, Encode, Decode, TypeInfo, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct HexagramCast {
    /// 六爻数值（6 老阴、7 少阳、8 少阴、9 老阳），自下而上
    pub yao_values: [u8; 6],
    /// 本卦六爻（1 阳 0 阴）
    pub primary_lines: [u8; 6],
    /// 本卦卦序
    pub primary: u8,
    /// 变爻位置（0-5）
    pub changing_lines: Vec<u8>,
    /// 变卦六爻，无变爻时为 None
    pub transformed_lines: Option<[u8; 6]>,
    /// 变卦卦序，无变爻时为 None
    pub transformed: Option<u8>,
    pub interpretation: String,
    pub advice: String,
}

impl HexagramCast {
    pub fn primary_hexagram(&self) -> &'static Hexagram {
        find_hexagram_by_number(self.primary)
    }

    pub fn transformed_hexagram(&self) -> Option<&'static Hexagram> {
        self.transformed.map(find_hexagram_by_number)
    }
}
