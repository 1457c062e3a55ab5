//! # 命盘文案
//!
//! 星际称号、性格描述、生肖特质、主题色、五行洞察、补益建议、
//! 日主强弱分析与命运碎片。文案只依赖命盘数据，同一命盘总得到同一文本。

use alloc::{format, string::String};
use sp_std::prelude::*;

use stardust_divination_common::{WuXing, YinYang};

use crate::constants::*;
use crate::types::*;

/// 星际称号（按日干）
pub fn cosmic_name(day_gan: TianGan) -> &'static str {
    COSMIC_NAMES.get(day_gan.0 as usize).copied().unwrap_or("")
}

/// 性格描述（按日干）
pub fn personality(day_gan: TianGan) -> &'static str {
    PERSONALITIES.get(day_gan.0 as usize).copied().unwrap_or("")
}

/// 生肖特质（按年支）
pub fn zodiac_trait(year_zhi: DiZhi) -> &'static str {
    ZODIAC_TRAITS.get(year_zhi.0 as usize).copied().unwrap_or("")
}

pub fn element_theme(wuxing: WuXing) -> ElementTheme {
    let (color, glow, bg) = ELEMENT_THEMES[wuxing.index() as usize];
    ElementTheme { color: color.into(), glow: glow.into(), bg: bg.into() }
}

/// 五行洞察
///
/// 依次检查：最旺一行 ≥ 4、生我与日主均 ≥ 2、克我 ≥ 3、极差 ≤ 1，
/// 都不满足时提示以最弱一行补之。数量按十分之一单位比较。
pub fn wuxing_insight(main: WuXing, tally: &WuXingTally) -> String {
    let sorted = tally.sorted_desc();
    let (dominant, dominant_count) = sorted[0];
    let (weakest, weakest_count) = sorted[4];

    if dominant_count >= 40 {
        if dominant == main {
            return format!("{}气极旺，身强气盛，宜以{}泄秀生辉。", main.name(), main.sheng().name());
        }
        return format!("命局{}气深厚，外力充沛，借势而行可成大器。", dominant.name());
    }

    let sheng_by = main.sheng_by();
    if tally.get(sheng_by) >= 20 && tally.get(main) >= 20 {
        return format!("{}来生{}，源源不断之力，根基深厚，得天独厚。", sheng_by.name(), main.name());
    }

    let ke_by = main.ke_by();
    if tally.get(ke_by) >= 30 {
        return format!("{}重克{}，压力铸就非凡，逆境方显真我本色。", ke_by.name(), main.name());
    }

    if dominant_count - weakest_count <= 10 {
        return String::from("五行趋于均衡，生克有序，天赋和谐圆融之象。");
    }

    format!("{}气偏旺，{}气稍弱，以{}补之可得平衡圆满。", dominant.name(), weakest.name(), weakest.name())
}

/// 五行补益建议：取统计中最弱的一行
pub fn complementary_advice(tally: &WuXingTally) -> ComplementaryAdvice {
    let weak = tally.sorted_desc()[4].0;
    let (color, direction, season, text) = COMPLEMENT_TABLE[weak.index() as usize];
    ComplementaryAdvice {
        weak_element: weak,
        color: color.into(),
        direction: direction.into(),
        season: season.into(),
        text: text.into(),
    }
}

/// 日主强弱分析文案
pub fn strength_analysis(day_gan: TianGan, level: StrengthLevel) -> String {
    let me = day_gan.wuxing();
    match level {
        StrengthLevel::Strong => format!(
            "日主{}{}偏强，{}气充盈。宜以{}泄秀、以{}制衡，方得中和之美。",
            day_gan.name(),
            me.name(),
            me.name(),
            me.sheng().name(),
            me.ke_by().name(),
        ),
        StrengthLevel::Weak => format!(
            "日主{}{}偏弱，宜得{}来生扶、{}来帮身，忌{}过旺克身。",
            day_gan.name(),
            me.name(),
            me.sheng_by().name(),
            me.name(),
            me.ke_by().name(),
        ),
        StrengthLevel::Balanced => format!(
            "日主{}{}中和，{}之生扶与{}之克制相当，五行流通，进退有度。",
            day_gan.name(),
            me.name(),
            me.sheng_by().name(),
            me.ke_by().name(),
        ),
    }
}

/// 命运碎片（揭示动画逐句展示）
pub fn generate_fragments(sizhu: &SiZhu, yin_yang: YinYang, main: WuXing) -> Vec<String> {
    let mut fragments = alloc::vec![
        format!("{}{}之命", yin_yang.name(), main.name()),
        format!("{}年", sizhu.year.name()),
        format!("生肖属{}", sizhu.year.zhi.zodiac()),
        format!("{}月", sizhu.month.name()),
        format!("{}日", sizhu.day.name()),
        format!("{}时", sizhu.hour.name()),
    ];
    fragments.extend(FRAGMENT_TAIL.iter().map(|s| String::from(*s)));
    fragments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::calculate_wuxing_tally;
    use crate::calculations::calculate_sizhu;

    fn tally(mu: u16, huo: u16, tu: u16, jin: u16, shui: u16) -> WuXingTally {
        WuXingTally { mu, huo, tu, jin, shui }
    }

    #[test]
    fn test_identity_texts() {
        assert_eq!(cosmic_name(TianGan(2)), "烈阳天行");
        assert_eq!(cosmic_name(TianGan(10)), "");
        assert!(personality(TianGan(0)).starts_with("你如参天古木"));
        assert_eq!(zodiac_trait(DiZhi(6)), "奔放自由，热情如火");
        assert_eq!(element_theme(WuXing::Huo).color, "#fb923c");
    }

    #[test]
    fn test_wuxing_insight_rules() {
        // 日主之行独旺
        assert_eq!(
            wuxing_insight(WuXing::Mu, &tally(45, 10, 10, 10, 10)),
            "木气极旺，身强气盛，宜以火泄秀生辉。"
        );
        // 他行独旺
        assert_eq!(
            wuxing_insight(WuXing::Mu, &tally(10, 10, 45, 10, 10)),
            "命局土气深厚，外力充沛，借势而行可成大器。"
        );
        // 生我者与日主均有力
        assert_eq!(
            wuxing_insight(WuXing::Mu, &tally(20, 0, 10, 10, 25)),
            "水来生木，源源不断之力，根基深厚，得天独厚。"
        );
        // 克我者重
        assert_eq!(
            wuxing_insight(WuXing::Mu, &tally(10, 10, 10, 30, 0)),
            "金重克木，压力铸就非凡，逆境方显真我本色。"
        );
        assert_eq!(
            wuxing_insight(WuXing::Mu, &tally(20, 15, 18, 12, 15)),
            "五行趋于均衡，生克有序，天赋和谐圆融之象。"
        );
    }

    #[test]
    fn test_wuxing_insight_1990() {
        let sizhu = calculate_sizhu(1990, 5, 15, 14);
        let t = calculate_wuxing_tally(&sizhu);
        assert_eq!(wuxing_insight(WuXing::Huo, &t), "火气偏旺，金气稍弱，以金补之可得平衡圆满。");

        let advice = complementary_advice(&t);
        assert_eq!(advice.weak_element, WuXing::Jin);
        assert_eq!(advice.color, "白色");
        assert_eq!(advice.direction, "西方");
        assert_eq!(advice.season, "秋季");
    }

    #[test]
    fn test_weakest_tie_takes_last_in_cycle() {
        // 土与水并列最弱，按 木火土金水 稳定排序后取末位
        let advice = complementary_advice(&tally(30, 20, 5, 20, 5));
        assert_eq!(advice.weak_element, WuXing::Shui);
    }

    #[test]
    fn test_fragments() {
        let sizhu = calculate_sizhu(1990, 5, 15, 14);
        let fragments = generate_fragments(&sizhu, YinYang::Yang, WuXing::Huo);
        assert_eq!(
            fragments,
            vec!["阳火之命", "庚午年", "生肖属马", "壬午月", "丙子日", "乙未时", "天干地支交汇", "命运之轮转动"]
        );
    }

    #[test]
    fn test_strength_analysis_mentions_cycle() {
        let text = strength_analysis(TianGan(0), StrengthLevel::Weak);
        assert_eq!(text, "日主甲木偏弱，宜得水来生扶、木来帮身，忌金过旺克身。");
    }
}
