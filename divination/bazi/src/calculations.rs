//! # 四柱推算
//!
//! 年柱、月柱、日柱、时柱均由公历日期时间直接推算：
//!
//! - 年柱: (年 - 4) 对 10 / 12 取余
//! - 月柱: 五虎遁，月干起点 = (年干 mod 5) × 2 + 2，月支 = (月 + 1) mod 12
//! - 日柱: 儒略日数，日干 = (jd + 9) mod 10，日支 = (jd + 1) mod 12
//! - 时柱: 五鼠遁，时支 = ⌊(时 + 1) / 2⌋ mod 12，时干 = (日干 × 2 + 时支) mod 10
//!
//! 月柱使用公历月份，不按节气换月。所有函数对任意输入都有结果，
//! 范围校验由调用方负责。
//!
//! 另提供真太阳时修正（经度时差 + 均时差）和跨日日期调整。

use crate::constants::*;
use crate::types::*;

// ============================================================================
// 四柱
// ============================================================================

/// 年柱
pub fn calculate_year_ganzhi(year: i32) -> GanZhi {
    let offset = year as i64 - 4;
    GanZhi::new(offset.rem_euclid(10) as u8, offset.rem_euclid(12) as u8)
}

/// 月柱（五虎遁）
///
/// 甲己之年丙作首，乙庚之岁戊为头，丙辛必定寻庚起，丁壬壬位顺行流，戊癸何方发，甲寅之上好追求。
pub fn calculate_month_ganzhi(year: i32, month: u8) -> GanZhi {
    let year_gan = calculate_year_ganzhi(year).gan.0 as i64;
    let start = (year_gan % 5) * 2 + 2;
    let gan = (start + month as i64 - 1).rem_euclid(10);
    let zhi = (month as i64 + 1).rem_euclid(12);
    GanZhi::new(gan as u8, zhi as u8)
}

/// 日柱
pub fn calculate_day_ganzhi(year: i32, month: u8, day: u8) -> GanZhi {
    let jd = day_number(year, month, day);
    GanZhi::new((jd + 9).rem_euclid(10) as u8, (jd + 1).rem_euclid(12) as u8)
}

/// 日柱所用的儒略日数（以 3 月为年首）
fn day_number(year: i32, month: u8, day: u8) -> i64 {
    let month = month as i64;
    let a = (14 - month).div_euclid(12);
    let y = year as i64 - a;
    let m = month + 12 * a - 3;
    day as i64 + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4)
}

/// 时柱（五鼠遁）
pub fn calculate_hour_ganzhi(hour: u8, day_gan: TianGan) -> GanZhi {
    let zhi = hour_branch(hour);
    let gan = (day_gan.0 as u16 * 2 + zhi as u16) % 10;
    GanZhi::new(gan as u8, zhi)
}

/// 时辰地支，23 点起为子时
pub fn hour_branch(hour: u8) -> u8 {
    (((hour as u16 + 1) / 2) % 12) as u8
}

/// 时辰起始的小时值（子时记 0，丑时 2 ... 亥时 22）
///
/// 用于把修正后的时间落到时辰选择框。
pub fn shichen_start_hour(hour: u8) -> u8 {
    (hour_branch(hour) * 2) % 24
}

/// 四柱
pub fn calculate_sizhu(year: i32, month: u8, day: u8, hour: u8) -> SiZhu {
    let day_ganzhi = calculate_day_ganzhi(year, month, day);
    let sizhu = SiZhu {
        year: calculate_year_ganzhi(year),
        month: calculate_month_ganzhi(year, month),
        day: day_ganzhi,
        hour: calculate_hour_ganzhi(hour, day_ganzhi.gan),
    };

    log::trace!(
        "🔮 四柱 {}-{}-{} {}时: {} {} {} {}",
        year,
        month,
        day,
        hour,
        sizhu.year.name(),
        sizhu.month.name(),
        sizhu.day.name(),
        sizhu.hour.name(),
    );

    sizhu
}

// ============================================================================
// 公历日期
// ============================================================================

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// 当月天数，月份越界返回 0
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => MONTH_DAYS[(month - 1) as usize],
        _ => 0,
    }
}

/// 日期按天偏移，跨月跨年
pub fn adjust_date(year: i32, month: u8, day: u8, day_offset: i32) -> (i32, u8, u8) {
    let (mut y, mut m, mut d) = (year, month, day);
    if !(1..=12).contains(&m) {
        return (y, m, d);
    }

    let mut remaining = day_offset;
    while remaining > 0 {
        if d < days_in_month(y, m) {
            d += 1;
        } else {
            d = 1;
            if m == 12 {
                m = 1;
                y += 1;
            } else {
                m += 1;
            }
        }
        remaining -= 1;
    }
    while remaining < 0 {
        if d > 1 {
            d -= 1;
        } else {
            if m == 1 {
                m = 12;
                y -= 1;
            } else {
                m -= 1;
            }
            d = days_in_month(y, m);
        }
        remaining += 1;
    }

    (y, m, d)
}

// ============================================================================
// 真太阳时
// ============================================================================

/// 均时差（秒）
///
/// 取每月 1 日的值，按当月日序线性插值；月份越界返回 0。
pub fn equation_of_time_seconds(month: u8, day: u8) -> i32 {
    if !(1..=12).contains(&month) {
        return 0;
    }
    let idx = (month - 1) as usize;
    let len = MONTH_DAYS[idx] as i32;
    let elapsed = (day.max(1) as i32 - 1).min(len);
    let start = EQUATION_OF_TIME_SECONDS[idx];
    let end = EQUATION_OF_TIME_SECONDS[idx + 1];
    start + (end - start) * elapsed / len
}

/// 真太阳时修正
///
/// 修正量 = (经度 - 时区中央经线) × 4 分钟/度 + 均时差
///
/// # 参数
/// - `longitude`: 经度（1/100000 度，东经为正）
/// - `tz_offset_minutes`: 时区偏移（分钟，北京时间为 480）
pub fn apply_true_solar_time(
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    longitude: i32,
    tz_offset_minutes: i16,
) -> TrueSolarTimeResult {
    let longitude_seconds = longitude as i64 * SECONDS_PER_DEGREE / LONGITUDE_SCALE;
    let correction = longitude_seconds - tz_offset_minutes as i64 * 60 + equation_of_time_seconds(month, day) as i64;
    let total = hour as i64 * 3600 + minute as i64 * 60 + correction;

    let day_offset = total.div_euclid(SECONDS_PER_DAY);
    let seconds = total.rem_euclid(SECONDS_PER_DAY);

    TrueSolarTimeResult {
        hour: (seconds / 3600) as u8,
        minute: ((seconds % 3600) / 60) as u8,
        second: (seconds % 60) as u8,
        day_offset: day_offset as i8,
        correction_seconds: correction as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_ganzhi() {
        // 1990 庚午
        assert_eq!(calculate_year_ganzhi(1990), GanZhi::new(6, 6));
        // 1984 甲子
        assert_eq!(calculate_year_ganzhi(1984), GanZhi::new(0, 0));
        // 2024 甲辰
        assert_eq!(calculate_year_ganzhi(2024), GanZhi::new(0, 4));
        assert_eq!(calculate_year_ganzhi(2024).zhi.zodiac(), "龙");
    }

    #[test]
    fn test_month_ganzhi_wuhudun() {
        // 甲年正月丙寅
        assert_eq!(calculate_month_ganzhi(1984, 1), GanZhi::new(2, 2));
        // 庚年五月壬午
        assert_eq!(calculate_month_ganzhi(1990, 5), GanZhi::new(8, 6));
        // 12 月的地支回到子
        assert_eq!(calculate_month_ganzhi(1990, 11).zhi, DiZhi(0));
    }

    #[test]
    fn test_day_ganzhi() {
        // 1990-05-15 丙子
        assert_eq!(calculate_day_ganzhi(1990, 5, 15), GanZhi::new(2, 0));
    }

    #[test]
    fn test_day_ganzhi_period_60() {
        let dates: [(i32, u8, u8); 5] = [(1990, 5, 15), (1901, 1, 1), (2000, 2, 28), (2023, 12, 31), (1964, 2, 29)];
        for (y, m, d) in dates {
            let later = adjust_date(y, m, d, 60);
            assert_eq!(
                calculate_day_ganzhi(y, m, d),
                calculate_day_ganzhi(later.0, later.1, later.2),
            );
            let next = adjust_date(y, m, d, 1);
            let today = calculate_day_ganzhi(y, m, d);
            assert_eq!(
                GanZhi::new((today.gan.0 + 1) % 10, (today.zhi.0 + 1) % 12),
                calculate_day_ganzhi(next.0, next.1, next.2),
            );
        }
    }

    #[test]
    fn test_day_number_uses_four_year_leap_rule() {
        // 1900-02-29 不存在，但 jd 仍按四年一闰计入
        assert_eq!(calculate_day_ganzhi(1900, 2, 28), GanZhi::new(3, 3));
        assert_eq!(calculate_day_ganzhi(1900, 3, 1), GanZhi::new(5, 5));
    }

    #[test]
    fn test_hour_ganzhi() {
        // 丙日未时乙未
        assert_eq!(calculate_hour_ganzhi(14, TianGan(2)), GanZhi::new(1, 7));
        // 23 点属子时
        assert_eq!(hour_branch(23), 0);
        assert_eq!(hour_branch(0), 0);
        assert_eq!(hour_branch(1), 1);
        // 甲日子时甲子
        assert_eq!(calculate_hour_ganzhi(0, TianGan(0)), GanZhi::new(0, 0));
    }

    #[test]
    fn test_sizhu_1990() {
        let sizhu = calculate_sizhu(1990, 5, 15, 14);
        assert_eq!(sizhu.year.name(), "庚午");
        assert_eq!(sizhu.month.name(), "壬午");
        assert_eq!(sizhu.day.name(), "丙子");
        assert_eq!(sizhu.hour.name(), "乙未");
        assert_eq!(sizhu.to_index().to_array(), [6, 6, 8, 6, 2, 0, 1, 7]);
    }

    #[test]
    fn test_adjust_date() {
        assert_eq!(adjust_date(1990, 1, 1, -1), (1989, 12, 31));
        assert_eq!(adjust_date(1989, 12, 31, 1), (1990, 1, 1));
        assert_eq!(adjust_date(2000, 2, 28, 1), (2000, 2, 29));
        assert_eq!(adjust_date(1900, 2, 28, 1), (1900, 3, 1));
        assert_eq!(adjust_date(2024, 3, 1, -1), (2024, 2, 29));
        assert_eq!(adjust_date(2024, 3, 1, 0), (2024, 3, 1));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 13), 0);
    }

    #[test]
    fn test_equation_of_time() {
        assert_eq!(equation_of_time_seconds(1, 1), -216);
        assert_eq!(equation_of_time_seconds(5, 15), 160);
        assert_eq!(equation_of_time_seconds(11, 1), 986);
        assert_eq!(equation_of_time_seconds(0, 1), 0);
    }

    #[test]
    fn test_true_solar_time_beijing() {
        // 北京 116.40°E，东八区
        let r = apply_true_solar_time(5, 15, 14, 30, 11_640_000, 480);
        assert_eq!((r.hour, r.minute, r.second), (14, 18, 16));
        assert_eq!(r.day_offset, 0);
        assert_eq!(r.correction_seconds, -704);
    }

    #[test]
    fn test_true_solar_time_previous_day() {
        // 乌鲁木齐 87.60°E，东八区，凌晨 00:30 回退到前一日
        let r = apply_true_solar_time(1, 1, 0, 30, 8_760_000, 480);
        assert_eq!((r.hour, r.minute, r.second), (22, 16, 48));
        assert_eq!(r.day_offset, -1);
        assert_eq!(adjust_date(1990, 1, 1, r.day_offset as i32), (1989, 12, 31));
    }

    #[test]
    fn test_shichen_start_hour() {
        assert_eq!(shichen_start_hour(14), 14);
        assert_eq!(shichen_start_hour(15), 16);
        assert_eq!(shichen_start_hour(23), 0);
        assert_eq!(shichen_start_hour(22), 22);
    }
}
