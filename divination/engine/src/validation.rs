//! # 输入校验
//!
//! 排盘与起卦的纯函数对越界输入只做取余，不报错；
//! 引擎在调用之前按配置拒绝越界的出生信息与人格测试结果。

use sp_core::Get;

use stardust_bazi::calculations::days_in_month;
use stardust_divination_common::{PersonalityResult, SiZhuIndex};

use crate::{BirthInput, Config, Error};

/// 经度上下限（1/100000 度）
pub const MAX_LONGITUDE: i32 = 18_000_000;

/// 时区偏移范围（分钟）：UTC-12 至 UTC+14
pub const MIN_TZ_OFFSET_MINUTES: i16 = -720;
pub const MAX_TZ_OFFSET_MINUTES: i16 = 840;

/// 校验出生信息
///
/// # 规则
/// - 年份在 [MinBirthYear, MaxBirthYear] 之内
/// - 月份 1-12，日期不超过当月天数（含闰年）
/// - 时 0-23，分 0-59
/// - 经度 ±180°，时区 UTC-12 至 UTC+14
pub fn validate_birth_input<T: Config>(input: &BirthInput) -> Result<(), Error> {
    if input.year < T::MinBirthYear::get() as i32 || input.year > T::MaxBirthYear::get() as i32 {
        return Err(Error::InvalidYear);
    }
    if !(1..=12).contains(&input.month) {
        return Err(Error::InvalidMonth);
    }
    if input.day == 0 || input.day > days_in_month(input.year, input.month) {
        return Err(Error::InvalidDay);
    }
    if matches!(input.hour, Some(h) if h > 23) {
        return Err(Error::InvalidHour);
    }
    if input.minute > 59 {
        return Err(Error::InvalidMinute);
    }
    if let Some(location) = input.solar {
        if !(-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&location.longitude) {
            return Err(Error::InvalidLongitude);
        }
        if !(MIN_TZ_OFFSET_MINUTES..=MAX_TZ_OFFSET_MINUTES).contains(&location.tz_offset_minutes) {
            return Err(Error::InvalidTimezone);
        }
    }
    Ok(())
}

/// 校验人格测试结果
pub fn validate_personality(personality: &PersonalityResult) -> Result<(), Error> {
    if personality.is_valid() {
        Ok(())
    } else {
        Err(Error::InvalidPersonality)
    }
}

/// 校验命盘索引（外部构造的命盘可能越界）
pub fn validate_chart_index(index: &SiZhuIndex) -> Result<(), Error> {
    if index.is_valid() {
        Ok(())
    } else {
        Err(Error::InvalidChart)
    }
}
