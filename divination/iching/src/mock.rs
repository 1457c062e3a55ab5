//! 起卦测试数据

use alloc::string::ToString;

use stardust_divination_common::*;

/// 1990-05-15 14 时：庚午 壬午 丙子 乙未
pub fn sizhu_1990() -> SiZhuIndex {
    SiZhuIndex {
        year_gan: 6,
        year_zhi: 6,
        month_gan: 8,
        month_zhi: 6,
        day_gan: 2,
        day_zhi: 0,
        hour_gan: 1,
        hour_zhi: 7,
    }
}

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
