//! # 八字类型定义
//!
//! ## 天干地支索引
//!
//! - 天干: 甲(0) 乙(1) 丙(2) 丁(3) 戊(4) 己(5) 庚(6) 辛(7) 壬(8) 癸(9)
//! - 地支: 子(0) 丑(1) 寅(2) 卯(3) 辰(4) 巳(5) 午(6) 未(7) 申(8) 酉(9) 戌(10) 亥(11)

use alloc::string::String;
use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_std::prelude::*;

use stardust_divination_common::{SiZhuIndex, WuXing, YinYang};

use crate::constants::*;

// ============================================================================
// 天干、地支、干支
// ============================================================================

/// 天干
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TianGan(pub u8);

impl TianGan {
    pub fn is_valid(&self) -> bool {
        self.0 < 10
    }

    pub fn name(&self) -> &'static str {
        TIANGAN_NAMES.get(self.0 as usize).copied().unwrap_or("")
    }

    /// 甲乙木、丙丁火、戊己土、庚辛金、壬癸水
    pub fn wuxing(&self) -> WuXing {
        WuXing::from_index((self.0 % 10) / 2).unwrap_or_default()
    }

    /// 偶数索引为阳干
    pub fn yin_yang(&self) -> YinYang {
        if self.0 % 2 == 0 {
            YinYang::Yang
        } else {
            YinYang::Yin
        }
    }
}

/// 地支
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct DiZhi(pub u8);

impl DiZhi {
    pub fn is_valid(&self) -> bool {
        self.0 < 12
    }

    pub fn name(&self) -> &'static str {
        DIZHI_NAMES.get(self.0 as usize).copied().unwrap_or("")
    }

    /// 地支本气五行
    pub fn wuxing(&self) -> WuXing {
        DIZHI_WUXING.get(self.0 as usize).copied().unwrap_or_default()
    }

    /// 生肖
    pub fn zodiac(&self) -> &'static str {
        ZODIAC_NAMES.get(self.0 as usize).copied().unwrap_or("")
    }

    /// 藏干（按主气、中气、余气排列）
    pub fn canggan(&self) -> &'static [u8] {
        CANGGAN_TABLE.get(self.0 as usize).copied().unwrap_or(&[])
    }
}

/// 干支组合
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GanZhi {
    pub gan: TianGan,
    pub zhi: DiZhi,
}

impl GanZhi {
    pub fn new(gan: u8, zhi: u8) -> Self {
        Self { gan: TianGan(gan), zhi: DiZhi(zhi) }
    }

    pub fn name(&self) -> String {
        let mut s = String::from(self.gan.name());
        s.push_str(self.zhi.name());
        s
    }
}

/// 四柱干支
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SiZhu {
    pub year: GanZhi,
    pub month: GanZhi,
    pub day: GanZhi,
    pub hour: GanZhi,
}

impl SiZhu {
    /// 日主（日干）
    pub fn day_master(&self) -> TianGan {
        self.day.gan
    }

    /// 年、月、日、时顺序
    pub fn pillars(&self) -> [GanZhi; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    pub fn to_index(&self) -> SiZhuIndex {
        SiZhuIndex {
            year_gan: self.year.gan.0,
            year_zhi: self.year.zhi.0,
            month_gan: self.month.gan.0,
            month_zhi: self.month.zhi.0,
            day_gan: self.day.gan.0,
            day_zhi: self.day.zhi.0,
            hour_gan: self.hour.gan.0,
            hour_zhi: self.hour.zhi.0,
        }
    }
}

// ============================================================================
// 十神与藏干
// ============================================================================

/// 十神
///
/// 判别值 = 五行偏移 × 2 + (阴阳不同 ? 1 : 0)；JSON 中以中文名表示
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShiShen {
    /// 比肩 - 同我同性
    #[default]
    #[cfg_attr(feature = "std", serde(rename = "比肩"))]
    BiJian = 0,
    /// 劫财 - 同我异性
    #[cfg_attr(feature = "std", serde(rename = "劫财"))]
    JieCai = 1,
    /// 食神 - 我生同性
    #[cfg_attr(feature = "std", serde(rename = "食神"))]
    ShiShen = 2,
    /// 伤官 - 我生异性
    #[cfg_attr(feature = "std", serde(rename = "伤官"))]
    ShangGuan = 3,
    /// 偏财 - 我克同性
    #[cfg_attr(feature = "std", serde(rename = "偏财"))]
    PianCai = 4,
    /// 正财 - 我克异性
    #[cfg_attr(feature = "std", serde(rename = "正财"))]
    ZhengCai = 5,
    /// 七杀 - 克我同性
    #[cfg_attr(feature = "std", serde(rename = "七杀"))]
    QiSha = 6,
    /// 正官 - 克我异性
    #[cfg_attr(feature = "std", serde(rename = "正官"))]
    ZhengGuan = 7,
    /// 偏印 - 生我同性
    #[cfg_attr(feature = "std", serde(rename = "偏印"))]
    PianYin = 8,
    /// 正印 - 生我异性
    #[cfg_attr(feature = "std", serde(rename = "正印"))]
    ZhengYin = 9,
}

impl ShiShen {
    pub const ALL: [ShiShen; 10] = [
        ShiShen::BiJian,
        ShiShen::JieCai,
        ShiShen::ShiShen,
        ShiShen::ShangGuan,
        ShiShen::PianCai,
        ShiShen::ZhengCai,
        ShiShen::QiSha,
        ShiShen::ZhengGuan,
        ShiShen::PianYin,
        ShiShen::ZhengYin,
    ];

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        SHISHEN_NAMES[self.index() as usize]
    }

    pub fn description(&self) -> &'static str {
        SHISHEN_DESCRIPTIONS[self.index() as usize]
    }

    /// 比肩、劫财属于同类，不单独成格
    pub fn is_peer(&self) -> bool {
        matches!(self, ShiShen::BiJian | ShiShen::JieCai)
    }
}

/// 藏干类型
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CangGanType {
    /// 主气
    #[default]
    ZhuQi = 0,
    /// 中气
    ZhongQi = 1,
    /// 余气
    YuQi = 2,
}

impl CangGanType {
    pub fn from_rank(rank: usize) -> Self {
        match rank {
            0 => CangGanType::ZhuQi,
            1 => CangGanType::ZhongQi,
            _ => CangGanType::YuQi,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CangGanType::ZhuQi => "主气",
            CangGanType::ZhongQi => "中气",
            CangGanType::YuQi => "余气",
        }
    }

    /// 五行统计权重（十分之一单位）：1.0 / 0.5 / 0.3
    pub fn tally_weight(&self) -> u16 {
        CANGGAN_TALLY_WEIGHTS[*self as usize]
    }

    /// 日主强弱权重（百分之一单位）：3 / 1.5 / 1
    pub fn strength_weight(&self) -> i32 {
        CANGGAN_STRENGTH_WEIGHTS[*self as usize]
    }
}

/// 藏干信息
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct CangGanInfo {
    pub gan: TianGan,
    pub gan_type: CangGanType,
    /// 相对日主的十神
    pub shishen: ShiShen,
}

/// 单柱详情
#[derive(Clone, Encode, Decode, TypeInfo, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Zhu {
    pub ganzhi: GanZhi,
    /// 天干十神，日柱为 None（日主不与自身论十神）
    pub tiangan_shishen: Option<ShiShen>,
    pub canggan: Vec<CangGanInfo>,
}

/// 十神频次分布
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShiShenDistribution {
    pub counts: [u8; 10],
}

impl ShiShenDistribution {
    pub fn add(&mut self, shishen: ShiShen) {
        let slot = &mut self.counts[shishen.index() as usize];
        *slot = slot.saturating_add(1);
    }

    pub fn get(&self, shishen: ShiShen) -> u8 {
        self.counts[shishen.index() as usize]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().map(|c| *c as u32).sum()
    }

    /// 出现次数最多的非比劫十神，并列时取十神序靠前者
    pub fn most_frequent_excluding_peers(&self) -> Option<ShiShen> {
        let mut best: Option<(ShiShen, u8)> = None;
        for shishen in ShiShen::ALL.iter().filter(|s| !s.is_peer()) {
            let count = self.get(*shishen);
            if count == 0 {
                continue;
            }
            match best {
                Some((_, c)) if c >= count => {}
                _ => best = Some((*shishen, count)),
            }
        }
        best.map(|(s, _)| s)
    }
}

// ============================================================================
// 五行统计
// ============================================================================

/// 五行加权统计
///
/// 以十分之一为单位：天干计 10，藏干按主气/中气/余气计 10/5/3。
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct WuXingTally {
    pub mu: u16,
    pub huo: u16,
    pub tu: u16,
    pub jin: u16,
    pub shui: u16,
}

impl WuXingTally {
    pub fn get(&self, wuxing: WuXing) -> u16 {
        match wuxing {
            WuXing::Mu => self.mu,
            WuXing::Huo => self.huo,
            WuXing::Tu => self.tu,
            WuXing::Jin => self.jin,
            WuXing::Shui => self.shui,
        }
    }

    pub fn add(&mut self, wuxing: WuXing, tenths: u16) {
        let slot = match wuxing {
            WuXing::Mu => &mut self.mu,
            WuXing::Huo => &mut self.huo,
            WuXing::Tu => &mut self.tu,
            WuXing::Jin => &mut self.jin,
            WuXing::Shui => &mut self.shui,
        };
        *slot = slot.saturating_add(tenths);
    }

    pub fn total(&self) -> u16 {
        WuXing::ALL.iter().map(|w| self.get(*w)).sum()
    }

    /// 按数值降序排列，相等时保持 木火土金水 顺序
    pub fn sorted_desc(&self) -> [(WuXing, u16); 5] {
        let mut entries = WuXing::ALL.map(|w| (w, self.get(w)));
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    /// 显示值，保留一位小数，如 `3.5`
    pub fn display(&self, wuxing: WuXing) -> String {
        format_tenths(self.get(wuxing))
    }
}

/// 十分之一单位格式化为一位小数
pub fn format_tenths(tenths: u16) -> String {
    alloc::format!("{}.{}", tenths / 10, tenths % 10)
}

// ============================================================================
// 日主强弱与格局
// ============================================================================

/// 日主强弱等级
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum StrengthLevel {
    /// 偏强
    Strong = 0,
    /// 中和
    #[default]
    Balanced = 1,
    /// 偏弱
    Weak = 2,
}

impl StrengthLevel {
    pub fn name(&self) -> &'static str {
        match self {
            StrengthLevel::Strong => "偏强",
            StrengthLevel::Balanced => "中和",
            StrengthLevel::Weak => "偏弱",
        }
    }
}

/// 日主强弱
#[derive(Clone, Encode, Decode, TypeInfo, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct DayMasterStrength {
    /// 强弱分（百分之一单位，0-10000）
    pub score_centi: u16,
    pub level: StrengthLevel,
    pub analysis: String,
}

impl DayMasterStrength {
    /// 0-100 整数分（四舍五入）
    pub fn score(&self) -> u8 {
        ((self.score_centi as u32 + 50) / 100) as u8
    }
}

/// 格局判定来源
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GeJuSource {
    /// 月令主气十神透出天干
    TouGan = 0,
    /// 月令主气十神
    #[default]
    YueLing = 1,
    /// 月令无可取，按十神频次
    Frequency = 2,
    /// 无可取之神，默认比肩
    Fallback = 3,
}

/// 格局
///
/// 名称与说明随判定结果一并保存，便于直接序列化给界面。
#[derive(Clone, Encode, Decode, TypeInfo, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GeJu {
    pub shishen: ShiShen,
    pub source: GeJuSource,
    /// 格局名称，如 `正官格`
    pub name: String,
    pub description: String,
}

impl GeJu {
    pub fn new(shishen: ShiShen, source: GeJuSource) -> Self {
        let (name, description) = GEJU_TABLE[shishen.index() as usize];
        Self { shishen, source, name: name.into(), description: description.into() }
    }
}

// ============================================================================
// 真太阳时
// ============================================================================

/// 真太阳时修正结果
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TrueSolarTimeResult {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// 日期偏移（-1 前一天，0 当天，1 后一天）
    pub day_offset: i8,
    /// 总修正秒数（经度差 + 均时差）
    pub correction_seconds: i32,
}

/// 排盘时记录的真太阳时信息
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarTimeInfo {
    pub clock_hour: u8,
    pub clock_minute: u8,
    /// 经度（1/100000 度，东经为正）
    pub longitude: i32,
    /// 时区偏移（分钟，UTC+8 为 480）
    pub tz_offset_minutes: i16,
    pub solar: TrueSolarTimeResult,
    /// 修正后的公历日期，仅作展示，排盘仍用钟表日期
    pub solar_year: i32,
    pub solar_month: u8,
    pub solar_day: u8,
}

// ============================================================================
// 命盘
// ============================================================================

/// 元素主题色
#[derive(Clone, Encode, Decode, TypeInfo, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementTheme {
    pub color: String,
    pub glow: String,
    pub bg: String,
}

/// 五行补益建议
#[derive(Clone, Encode, Decode, TypeInfo, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ComplementaryAdvice {
    pub weak_element: WuXing,
    pub color: String,
    pub direction: String,
    pub season: String,
    pub text: String,
}

/// 八字命盘
#[derive(Clone, Encode, Decode, TypeInfo, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BaziChart {
    /// 排盘所用公历日期与小时（真太阳时修正后为所在时辰的起始小时）
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,

    pub sizhu: SiZhu,
    pub year_zhu: Zhu,
    pub month_zhu: Zhu,
    pub day_zhu: Zhu,
    pub hour_zhu: Zhu,

    pub day_master: TianGan,
    pub main_element: WuXing,
    pub yin_yang: YinYang,
    pub zodiac: String,

    pub shishen_distribution: ShiShenDistribution,
    pub wuxing_tally: WuXingTally,
    pub strength: DayMasterStrength,
    pub geju: GeJu,

    pub cosmic_name: String,
    pub personality: String,
    pub zodiac_trait: String,
    pub theme: ElementTheme,
    pub wuxing_insight: String,
    pub complementary_advice: ComplementaryAdvice,
    pub fragments: Vec<String>,

    pub solar_time: Option<SolarTimeInfo>,
}

impl BaziChart {
    pub fn index(&self) -> SiZhuIndex {
        self.sizhu.to_index()
    }
}
