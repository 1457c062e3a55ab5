//! # 八字排盘 (Stardust Bazi)
//!
//! ## 概述
//!
//! 由公历出生日期时间推算四柱，并以日干为"我"完成命盘分析：
//! - 四柱计算（年柱、月柱、日柱、时柱）
//! - 藏干提取与十神关系
//! - 五行加权统计
//! - 日主强弱（月令、藏干、天干三部分计分）
//! - 格局判定（月令主气、透干、频次兜底）
//! - 星际称号、性格、生肖特质、五行洞察、补益建议等文案
//! - 真太阳时修正（经度时差 + 均时差）
//!
//! ## 技术特性
//!
//! - 纯函数：同一 (年, 月, 日, 时) 永远得到同一命盘
//! - 定点数：五行统计以 0.1、强弱分以 0.01 为单位，分档边界精确
//! - 月柱按公历月份推算，不按节气换月
//!
//! ## 使用示例
//!
//! ```ignore
//! let chart = stardust_bazi::calculate_bazi(1990, 5, 15, 14);
//! assert_eq!(chart.sizhu.day.name(), "丙子");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod analysis;
pub mod calculations;
pub mod constants;
pub mod interpretation;
pub mod types;

pub use types::*;

use analysis::*;
use calculations::*;
use interpretation::*;

/// 排盘
///
/// 调用方负责校验日期时间范围，越界输入按公式取余，不会失败。
pub fn calculate_bazi(year: i32, month: u8, day: u8, hour: u8) -> BaziChart {
    let sizhu = calculate_sizhu(year, month, day, hour);
    let day_master = sizhu.day_master();
    let main_element = day_master.wuxing();
    let yin_yang = day_master.yin_yang();

    let shishen_distribution = analyze_shishen(&sizhu);
    let wuxing_tally = calculate_wuxing_tally(&sizhu);
    let strength = calculate_day_master_strength(&sizhu);
    let geju = classify_geju(&sizhu, &shishen_distribution);

    log::debug!(
        "🔮 排盘完成: 日主 {}{} {}，格局 {}",
        day_master.name(),
        main_element.name(),
        strength.level.name(),
        geju.name,
    );

    BaziChart {
        year,
        month,
        day,
        hour,
        sizhu,
        year_zhu: build_zhu(sizhu.year, day_master, false),
        month_zhu: build_zhu(sizhu.month, day_master, false),
        day_zhu: build_zhu(sizhu.day, day_master, true),
        hour_zhu: build_zhu(sizhu.hour, day_master, false),
        day_master,
        main_element,
        yin_yang,
        zodiac: sizhu.year.zhi.zodiac().into(),
        shishen_distribution,
        wuxing_tally,
        strength,
        geju,
        cosmic_name: cosmic_name(day_master).into(),
        personality: personality(day_master).into(),
        zodiac_trait: zodiac_trait(sizhu.year.zhi).into(),
        theme: element_theme(main_element),
        wuxing_insight: wuxing_insight(main_element, &wuxing_tally),
        complementary_advice: complementary_advice(&wuxing_tally),
        fragments: generate_fragments(&sizhu, yin_yang, main_element),
        solar_time: None,
    }
}

/// 经真太阳时修正后排盘
///
/// 修正只决定时辰：取修正后时间所在时辰的起始小时，在钟表日期上排盘。
/// 跨日的修正日期记录在 `solar_time` 中，不改变年、月、日柱。
pub fn calculate_bazi_with_solar_time(
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    longitude: i32,
    tz_offset_minutes: i16,
) -> BaziChart {
    let solar = apply_true_solar_time(month, day, hour, minute, longitude, tz_offset_minutes);
    let (solar_year, solar_month, solar_day) = adjust_date(year, month, day, solar.day_offset as i32);
    let chart_hour = shichen_start_hour(solar.hour);

    log::debug!(
        "🔮 真太阳时: {:02}:{:02} → {:02}:{:02}:{:02} (日偏移 {})，按 {} 时排盘",
        hour,
        minute,
        solar.hour,
        solar.minute,
        solar.second,
        solar.day_offset,
        chart_hour,
    );

    let mut chart = calculate_bazi(year, month, day, chart_hour);
    chart.solar_time = Some(SolarTimeInfo {
        clock_hour: hour,
        clock_minute: minute,
        longitude,
        tz_offset_minutes,
        solar,
        solar_year,
        solar_month,
        solar_day,
    });
    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use stardust_divination_common::{WuXing, YinYang};

    #[test]
    fn test_calculate_bazi_1990() {
        let chart = calculate_bazi(1990, 5, 15, 14);

        assert_eq!(chart.sizhu.year.name(), "庚午");
        assert_eq!(chart.sizhu.month.name(), "壬午");
        assert_eq!(chart.sizhu.day.name(), "丙子");
        assert_eq!(chart.sizhu.hour.name(), "乙未");
        assert_eq!(chart.day_master, TianGan(2));
        assert_eq!(chart.main_element, WuXing::Huo);
        assert_eq!(chart.yin_yang, YinYang::Yang);
        assert_eq!(chart.zodiac, "马");
        assert_eq!(chart.cosmic_name, "烈阳天行");

        assert_eq!(chart.year_zhu.tiangan_shishen, Some(ShiShen::PianCai));
        assert_eq!(chart.month_zhu.tiangan_shishen, Some(ShiShen::QiSha));
        assert_eq!(chart.day_zhu.tiangan_shishen, None);
        assert_eq!(chart.hour_zhu.tiangan_shishen, Some(ShiShen::ZhengYin));

        assert_eq!(chart.wuxing_tally.total(), 98);
        assert_eq!(chart.strength.level, StrengthLevel::Strong);
        assert_eq!(chart.geju.name, "劫财格");
        assert_eq!(chart.fragments.len(), 8);
        assert_eq!(chart.solar_time, None);
    }

    #[test]
    fn test_calculate_bazi_deterministic() {
        for (y, m, d, h) in [(1990, 5, 15, 14), (1900, 1, 1, 0), (2100, 12, 31, 23), (1964, 2, 29, 12)] {
            assert_eq!(calculate_bazi(y, m, d, h), calculate_bazi(y, m, d, h));
        }
    }

    #[test]
    fn test_solar_time_shifts_hour_pillar() {
        // 北京 14:30 修正为 14:18，仍为未时
        let chart = calculate_bazi_with_solar_time(1990, 5, 15, 14, 30, 11_640_000, 480);
        assert_eq!(chart.hour, 14);
        assert_eq!(chart.sizhu, calculate_bazi(1990, 5, 15, 14).sizhu);
        let info = chart.solar_time.unwrap();
        assert_eq!((info.clock_hour, info.clock_minute), (14, 30));
        assert_eq!((info.solar.hour, info.solar.minute), (14, 18));
    }

    #[test]
    fn test_solar_time_changes_shichen() {
        // 乌鲁木齐 12:30 修正为 10:16，午时变巳时
        let chart = calculate_bazi_with_solar_time(1990, 1, 1, 12, 30, 8_760_000, 480);
        assert_eq!(chart.hour, 10);
        assert_eq!(chart.sizhu.hour.zhi, DiZhi(5));
        assert_eq!(chart.sizhu, calculate_bazi(1990, 1, 1, 10).sizhu);
    }

    #[test]
    fn test_solar_time_keeps_clock_date() {
        // 乌鲁木齐 1990-01-01 00:30 修正为 1989-12-31 22:16，只取亥时，日期不变
        let chart = calculate_bazi_with_solar_time(1990, 1, 1, 0, 30, 8_760_000, 480);
        assert_eq!((chart.year, chart.month, chart.day, chart.hour), (1990, 1, 1, 22));
        assert_eq!(chart.sizhu, calculate_bazi(1990, 1, 1, 22).sizhu);
        assert_eq!(chart.sizhu.year.name(), "庚午");
        assert_eq!(chart.sizhu.month.name(), "戊寅");
        assert_eq!(chart.sizhu.day.name(), "壬戌");
        assert_eq!(chart.sizhu.hour.name(), "辛亥");
        assert_eq!(chart.day_master, TianGan(8));

        let info = chart.solar_time.unwrap();
        assert_eq!(info.solar.day_offset, -1);
        assert_eq!((info.solar_year, info.solar_month, info.solar_day), (1989, 12, 31));
    }
}
