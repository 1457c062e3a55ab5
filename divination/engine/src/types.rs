//! # 引擎输入输出类型

use alloc::string::String;
use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;

use stardust_bazi::BaziChart;
use stardust_iching::HexagramCast;

/// 出生地经度与时区，用于真太阳时修正
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarLocation {
    /// 经度（1/100000 度，东经为正）
    pub longitude: i32,
    /// 时区偏移（分钟，北京时间为 480）
    pub tz_offset_minutes: i16,
}

/// 出生信息
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BirthInput {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    /// 未填写时取配置的默认时辰
    pub hour: Option<u8>,
    pub minute: u8,
    /// 仅在填写了具体时间时生效
    pub solar: Option<SolarLocation>,
}

impl BirthInput {
    pub fn new(year: i32, month: u8, day: u8, hour: Option<u8>) -> Self {
        Self { year, month, day, hour, minute: 0, solar: None }
    }

    pub fn with_time(mut self, hour: u8, minute: u8) -> Self {
        self.hour = Some(hour);
        self.minute = minute;
        self
    }

    pub fn with_solar(mut self, longitude: i32, tz_offset_minutes: i16) -> Self {
        self.solar = Some(SolarLocation { longitude, tz_offset_minutes });
        self
    }
}

/// 三系统交叉洞察（命盘、人格、卦象三页各一句）
#[derive(Clone, Encode, Decode, TypeInfo, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct CrossSystemInsights {
    pub bazi_insight: String,
    pub personality_insight: String,
    /// 未起卦时为空
    pub iching_insight: String,
}

/// 完整解读：命盘 + 卦象 + 交叉洞察
#[derive(Clone, Encode, Decode, TypeInfo, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct DivinationReading {
    pub chart: BaziChart,
    pub cast: HexagramCast,
    pub insights: CrossSystemInsights,
}
