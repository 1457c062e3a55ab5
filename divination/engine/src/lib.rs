//! # 星尘命理引擎 (Stardust Divination Engine)
//!
//! 把八字排盘、周易起卦与人格测试串成一次完整解读。
//!
//! ## 职责
//!
//! - **校验**: 排盘与起卦本身对越界输入只取余，引擎在入口按 [`Config`] 拒绝
//! - **真太阳时**: 填写了具体时间与出生地时，按经度与均时差修正，以修正后的时辰排盘
//! - **缓存**: 同一身份（四柱 + 人格）的卦象只计算一次
//! - **交叉洞察**: 命盘、人格、卦象三页各一句对照解读
//!
//! ## 使用
//!
//! ```ignore
//! let mut engine = DivinationEngine::<DefaultConfig>::new();
//! let input = BirthInput::new(1990, 5, 15, Some(14));
//! let reading = engine.reading(&input, &personality)?;
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod cache;
pub mod insights;
pub mod types;
pub mod validation;

#[cfg(test)]
mod mock;
#[cfg(test)]
mod tests;

pub use cache::{CastCache, CastKey};
pub use insights::generate_cross_insights;
pub use types::*;

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_core::{ConstU16, ConstU32, ConstU8, Get};
use sp_std::marker::PhantomData;

use stardust_bazi::{calculate_bazi, calculate_bazi_with_solar_time, BaziChart};
use stardust_divination_common::PersonalityResult;
use stardust_iching::{build_seed, cast_from_seed, HexagramCast};

// ==================== 配置 ====================

/// 引擎配置
pub trait Config {
    /// 最早出生年份
    type MinBirthYear: Get<u16>;
    /// 最晚出生年份
    type MaxBirthYear: Get<u16>;
    /// 未填写时辰时使用的小时（默认午时）
    type DefaultBirthHour: Get<u8>;
    /// 起卦缓存容量，0 表示不缓存
    type MaxCachedCasts: Get<u32>;
}

/// 默认配置：1900-2100 年，午时，缓存 64 条
pub struct DefaultConfig;

impl Config for DefaultConfig {
    type MinBirthYear = ConstU16<1900>;
    type MaxBirthYear = ConstU16<2100>;
    type DefaultBirthHour = ConstU8<12>;
    type MaxCachedCasts = ConstU32<64>;
}

// ==================== 错误 ====================

#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    /// 年份超出配置范围
    InvalidYear,
    /// 月份不在 1-12
    InvalidMonth,
    /// 日期不存在
    InvalidDay,
    /// 小时不在 0-23
    InvalidHour,
    /// 分钟不在 0-59
    InvalidMinute,
    /// 经度超出 ±180°
    InvalidLongitude,
    /// 时区超出 UTC-12 至 UTC+14
    InvalidTimezone,
    /// 人格测试结果不合法
    InvalidPersonality,
    /// 命盘干支索引越界
    InvalidChart,
}

impl Error {
    pub fn description(&self) -> &'static str {
        match self {
            Error::InvalidYear => "出生年份超出范围",
            Error::InvalidMonth => "月份无效",
            Error::InvalidDay => "日期无效",
            Error::InvalidHour => "小时无效",
            Error::InvalidMinute => "分钟无效",
            Error::InvalidLongitude => "经度无效",
            Error::InvalidTimezone => "时区无效",
            Error::InvalidPersonality => "人格测试结果无效",
            Error::InvalidChart => "命盘数据无效",
        }
    }
}

// ==================== 引擎 ====================

pub struct DivinationEngine<T: Config> {
    cache: CastCache,
    _config: PhantomData<T>,
}

impl<T: Config> Default for DivinationEngine<T> {
    fn default() -> Self {
        Self { cache: CastCache::default(), _config: PhantomData }
    }
}

impl<T: Config> DivinationEngine<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 排盘
    ///
    /// 未填写小时取 `DefaultBirthHour`；只有填写了小时且提供出生地时才做真太阳时修正，
    /// 修正只改变时辰，不改变出生日期。
    pub fn create_chart(&self, input: &BirthInput) -> Result<BaziChart, Error> {
        validation::validate_birth_input::<T>(input).map_err(|e| {
            log::warn!("❌ 出生信息校验失败: {:?} ({:?})", e, input);
            e
        })?;

        let chart = match (input.hour, input.solar) {
            (Some(hour), Some(location)) => calculate_bazi_with_solar_time(
                input.year,
                input.month,
                input.day,
                hour,
                input.minute,
                location.longitude,
                location.tz_offset_minutes,
            ),
            (Some(hour), None) => calculate_bazi(input.year, input.month, input.day, hour),
            (None, _) => calculate_bazi(input.year, input.month, input.day, T::DefaultBirthHour::get()),
        };

        log::debug!(
            "📜 排盘完成: {}-{}-{} → {}",
            input.year,
            input.month,
            input.day,
            chart.day_master.name()
        );
        Ok(chart)
    }

    /// 起卦，同一四柱与人格命中缓存
    pub fn cast_hexagram(
        &mut self,
        chart: &BaziChart,
        personality: &PersonalityResult,
    ) -> Result<HexagramCast, Error> {
        let index = chart.index();
        validation::validate_chart_index(&index).map_err(|e| {
            log::warn!("❌ 命盘索引越界: {:?}", index);
            e
        })?;
        validation::validate_personality(personality).map_err(|e| {
            log::warn!("❌ 人格测试结果无效: {}", personality.mbti.type_code);
            e
        })?;

        let seed = build_seed(&index, personality);
        let key: CastKey = sp_io::hashing::blake2_256(&seed.encode());

        if let Some(cast) = self.cache.get(&key) {
            log::debug!("🔮 起卦缓存命中: 第 {} 卦", cast.primary);
            return Ok(cast.clone());
        }

        let cast = cast_from_seed(&seed);
        log::debug!("🔮 起卦: 第 {} 卦，变爻 {:?}", cast.primary, cast.changing_lines);
        self.cache.insert(key, cast.clone(), T::MaxCachedCasts::get());
        Ok(cast)
    }

    /// 完整解读：排盘、起卦、交叉洞察
    pub fn reading(
        &mut self,
        input: &BirthInput,
        personality: &PersonalityResult,
    ) -> Result<DivinationReading, Error> {
        let chart = self.create_chart(input)?;
        let cast = self.cast_hexagram(&chart, personality)?;
        let insights = generate_cross_insights(&chart, personality, Some(&cast));
        Ok(DivinationReading { chart, cast, insights })
    }

    pub fn cached_casts(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
