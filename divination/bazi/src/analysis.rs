//! # 十神、五行与格局分析
//!
//! 以日干（日主）为参照：
//! - 藏干: 每个地支按主气、中气、余气排列的 1-3 个天干
//! - 十神: 由五行偏移（相生顺序）与阴阳异同决定
//! - 五行统计: 天干计 1，藏干按位次计 1 / 0.5 / 0.3
//! - 日主强弱: 月令、藏干、年月时三干三部分加减，限定在 0-100
//! - 格局: 月令主气十神，透干优先，无可取时按频次
//!
//! 所有函数对任意干支索引都不会失败，查表落空时取默认值。

use sp_std::prelude::*;

use stardust_divination_common::{WuXing, WuXingRelation};

use crate::constants::*;
use crate::interpretation::strength_analysis;
use crate::types::*;

// ============================================================================
// 藏干与十神
// ============================================================================

/// 地支藏干及其位次
pub fn get_canggan(zhi: DiZhi) -> Vec<(TianGan, CangGanType)> {
    zhi.canggan()
        .iter()
        .enumerate()
        .map(|(rank, gan)| (TianGan(*gan), CangGanType::from_rank(rank)))
        .collect()
}

/// 计算 `other` 相对日主 `day_gan` 的十神
pub fn calculate_shishen(day_gan: TianGan, other: TianGan) -> ShiShen {
    let offset = day_gan.wuxing().relation_to(other.wuxing()) as u8;
    let different = day_gan.yin_yang() != other.yin_yang();
    ShiShen::from_index(offset * 2 + different as u8).unwrap_or_default()
}

/// 单柱详情（天干十神 + 藏干十神）
pub fn build_zhu(ganzhi: GanZhi, day_gan: TianGan, is_day_pillar: bool) -> Zhu {
    let canggan = get_canggan(ganzhi.zhi)
        .into_iter()
        .map(|(gan, gan_type)| CangGanInfo { gan, gan_type, shishen: calculate_shishen(day_gan, gan) })
        .collect();

    Zhu {
        ganzhi,
        tiangan_shishen: if is_day_pillar { None } else { Some(calculate_shishen(day_gan, ganzhi.gan)) },
        canggan,
    }
}

/// 年、月、时三干的十神（日干不论）
pub fn visible_shishen(sizhu: &SiZhu) -> [ShiShen; 3] {
    let day_gan = sizhu.day_master();
    [sizhu.year.gan, sizhu.month.gan, sizhu.hour.gan].map(|gan| calculate_shishen(day_gan, gan))
}

/// 十神频次：年月时三干 + 四支全部藏干
pub fn analyze_shishen(sizhu: &SiZhu) -> ShiShenDistribution {
    let day_gan = sizhu.day_master();
    let mut distribution = ShiShenDistribution::default();

    for shishen in visible_shishen(sizhu) {
        distribution.add(shishen);
    }
    for ganzhi in sizhu.pillars() {
        for (gan, _) in get_canggan(ganzhi.zhi) {
            distribution.add(calculate_shishen(day_gan, gan));
        }
    }

    distribution
}

// ============================================================================
// 五行统计
// ============================================================================

/// 五行加权统计（十分之一单位）
pub fn calculate_wuxing_tally(sizhu: &SiZhu) -> WuXingTally {
    let mut tally = WuXingTally::default();

    for ganzhi in sizhu.pillars() {
        tally.add(ganzhi.gan.wuxing(), TIANGAN_TALLY_WEIGHT);
        for (gan, gan_type) in get_canggan(ganzhi.zhi) {
            tally.add(gan.wuxing(), gan_type.tally_weight());
        }
    }

    tally
}

// ============================================================================
// 日主强弱
// ============================================================================

fn month_command_delta(relation: WuXingRelation) -> i32 {
    match relation {
        WuXingRelation::Same => MONTH_COMMAND_SAME,
        WuXingRelation::GeneratedBy => MONTH_COMMAND_GENERATES_DAY,
        WuXingRelation::OvercomeBy => MONTH_COMMAND_OVERCOMES_DAY,
        WuXingRelation::Generates => MONTH_COMMAND_DRAINED_BY_DAY,
        WuXingRelation::Overcomes => MONTH_COMMAND_OVERCOME_BY_DAY,
    }
}

/// 藏干只计同类、生我、克我三类
fn canggan_delta(relation: WuXingRelation, weight: i32) -> i32 {
    match relation {
        WuXingRelation::Same => weight,
        WuXingRelation::GeneratedBy => weight * 6 / 10,
        WuXingRelation::OvercomeBy => -(weight / 2),
        WuXingRelation::Generates | WuXingRelation::Overcomes => 0,
    }
}

fn visible_stem_delta(relation: WuXingRelation) -> i32 {
    match relation {
        WuXingRelation::Same => VISIBLE_STEM_SAME,
        WuXingRelation::GeneratedBy => VISIBLE_STEM_GENERATES_DAY,
        WuXingRelation::OvercomeBy => VISIBLE_STEM_OVERCOMES_DAY,
        WuXingRelation::Generates => VISIBLE_STEM_DRAINED_BY_DAY,
        WuXingRelation::Overcomes => VISIBLE_STEM_OVERCOME_BY_DAY,
    }
}

/// 日主强弱分（百分之一单位，0-10000）
pub fn calculate_strength_score(sizhu: &SiZhu) -> u16 {
    let day_wuxing: WuXing = sizhu.day_master().wuxing();
    let mut score = STRENGTH_BASE;

    // 月令
    score += month_command_delta(day_wuxing.relation_to(sizhu.month.zhi.wuxing()));

    // 四支藏干
    for ganzhi in sizhu.pillars() {
        for (gan, gan_type) in get_canggan(ganzhi.zhi) {
            score += canggan_delta(day_wuxing.relation_to(gan.wuxing()), gan_type.strength_weight());
        }
    }

    // 年、月、时干
    for gan in [sizhu.year.gan, sizhu.month.gan, sizhu.hour.gan] {
        score += visible_stem_delta(day_wuxing.relation_to(gan.wuxing()));
    }

    score.clamp(0, STRENGTH_MAX) as u16
}

/// 强弱分档：≥65 偏强，≤35 偏弱，其余中和
pub fn classify_strength(score_centi: u16) -> StrengthLevel {
    if score_centi >= STRENGTH_STRONG_THRESHOLD {
        StrengthLevel::Strong
    } else if score_centi <= STRENGTH_WEAK_THRESHOLD {
        StrengthLevel::Weak
    } else {
        StrengthLevel::Balanced
    }
}

/// 日主强弱（分数、分档、分析文案）
pub fn calculate_day_master_strength(sizhu: &SiZhu) -> DayMasterStrength {
    let score_centi = calculate_strength_score(sizhu);
    let level = classify_strength(score_centi);
    DayMasterStrength { score_centi, level, analysis: strength_analysis(sizhu.day_master(), level) }
}

// ============================================================================
// 格局
// ============================================================================

/// 月令主气十神，月支无藏干时为 None
pub fn month_main_shishen(sizhu: &SiZhu) -> Option<ShiShen> {
    sizhu
        .month
        .zhi
        .canggan()
        .first()
        .map(|gan| calculate_shishen(sizhu.day_master(), TianGan(*gan)))
}

/// 格局判定
pub fn classify_geju(sizhu: &SiZhu, distribution: &ShiShenDistribution) -> GeJu {
    if let Some(main) = month_main_shishen(sizhu) {
        let source = if visible_shishen(sizhu).contains(&main) { GeJuSource::TouGan } else { GeJuSource::YueLing };
        return GeJu::new(main, source);
    }

    match distribution.most_frequent_excluding_peers() {
        Some(shishen) => GeJu::new(shishen, GeJuSource::Frequency),
        None => GeJu::new(ShiShen::BiJian, GeJuSource::Fallback),
    }
}
