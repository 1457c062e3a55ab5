//! # 引擎测试配置
//!
//! 收窄年份范围、缩小缓存容量，便于覆盖校验与淘汰路径。

use alloc::string::ToString;
use frame_support::parameter_types;

use stardust_divination_common::*;

use crate::Config;

parameter_types! {
    pub const MinBirthYear: u16 = 1950;
    pub const MaxBirthYear: u16 = 2050;
    pub const DefaultBirthHour: u8 = 12;
    pub const MaxCachedCasts: u32 = 2;
}

pub struct Test;

impl Config for Test {
    type MinBirthYear = MinBirthYear;
    type MaxBirthYear = MaxBirthYear;
    type DefaultBirthHour = DefaultBirthHour;
    type MaxCachedCasts = MaxCachedCasts;
}

/// ENTP 星际探索者，7 号 8 翼
pub fn personality_a() -> PersonalityResult {
    PersonalityResult {
        mbti: MbtiResult {
            dimensions: MbtiDimensions { ei: 72.4, sn: 35.5, tf: 60.2, jp: 48.9 },
            type_code: "ENTP".to_string(),
            cosmic: Some("星际探索者".to_string()),
        },
        big5: Big5Result { percentages: Big5Percentages { o: 66.0, c: 58.3, ex: 71.5, a: 49.6, n: 32.2 } },
        enneagram: EnneagramResult { enneagram_type: 7, wing: 8 },
    }
}

/// INFP 星云诗人，4 号 5 翼
pub fn personality_b() -> PersonalityResult {
    PersonalityResult {
        mbti: MbtiResult {
            dimensions: MbtiDimensions { ei: 28.0, sn: 64.0, tf: 41.0, jp: 55.0 },
            type_code: "INFP".to_string(),
            cosmic: Some("星云诗人".to_string()),
        },
        big5: Big5Result { percentages: Big5Percentages { o: 40.0, c: 62.0, ex: 30.0, a: 70.0, n: 58.0 } },
        enneagram: EnneagramResult { enneagram_type: 4, wing: 5 },
    }
}

pub fn birth_1990() -> crate::BirthInput {
    crate::BirthInput::new(1990, 5, 15, Some(14))
}
