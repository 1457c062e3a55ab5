//! # 人格测试结果
//!
//! 由外部问卷计分器产出的只读记录：MBTI 四维百分比与类型字母、
//! 大五人格五维百分比、九型人格主型与翼型。
//!
//! 百分比是浮点数，没有 SCALE 编码，只在 `std` 下提供 serde 序列化。

use alloc::string::String;

use crate::round_half_away;

/// MBTI 四个维度的倾向百分比 (0-100)
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MbtiDimensions {
    pub ei: f64,
    pub sn: f64,
    pub tf: f64,
    pub jp: f64,
}

/// MBTI 结果
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MbtiResult {
    pub dimensions: MbtiDimensions,
    /// 四字母类型，如 `ENFP`
    #[cfg_attr(feature = "std", serde(rename = "type"))]
    pub type_code: String,
    /// 类型的星际称号，用于交叉洞察文案
    #[cfg_attr(feature = "std", serde(default))]
    pub cosmic: Option<String>,
}

/// 大五人格百分比 (0-100)
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Big5Percentages {
    pub o: f64,
    pub c: f64,
    pub ex: f64,
    pub a: f64,
    pub n: f64,
}

/// 大五人格结果
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Big5Result {
    pub percentages: Big5Percentages,
}

/// 九型人格结果
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct EnneagramResult {
    /// 主型 1-9
    #[cfg_attr(feature = "std", serde(rename = "type"))]
    pub enneagram_type: u8,
    /// 翼型 1-9
    pub wing: u8,
}

/// 人格测试结果
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonalityResult {
    pub mbti: MbtiResult,
    pub big5: Big5Result,
    pub enneagram: EnneagramResult,
}

/// MBTI 四个位置允许的字母
const MBTI_LETTERS: [[u8; 2]; 4] = [*b"EI", *b"SN", *b"TF", *b"JP"];

fn is_valid_percentage(value: f64) -> bool {
    value.is_finite() && (0.0..=100.0).contains(&value)
}

impl PersonalityResult {
    /// 九个百分比按 ei, sn, tf, jp, o, c, ex, a, n 顺序排列
    pub fn percentages(&self) -> [f64; 9] {
        let d = &self.mbti.dimensions;
        let p = &self.big5.percentages;
        [d.ei, d.sn, d.tf, d.jp, p.o, p.c, p.ex, p.a, p.n]
    }

    /// 四舍五入后的九个百分比
    pub fn rounded_scores(&self) -> [i64; 9] {
        self.percentages().map(round_half_away)
    }

    /// MBTI 类型是否为外向 (E)
    pub fn is_extravert(&self) -> bool {
        self.mbti.type_code.as_bytes().first() == Some(&b'E')
    }

    pub fn is_introvert(&self) -> bool {
        self.mbti.type_code.as_bytes().first() == Some(&b'I')
    }

    /// MBTI 类型字母是否合法（空字符串视为未提供，允许）
    pub fn has_valid_type_code(&self) -> bool {
        let code = self.mbti.type_code.as_bytes();
        if code.is_empty() {
            return true;
        }
        code.len() == 4 && code.iter().zip(MBTI_LETTERS.iter()).all(|(c, allowed)| allowed.contains(c))
    }

    /// 百分比在 0-100 之内且有限，九型主型与翼型在 1-9 之内
    pub fn is_valid(&self) -> bool {
        self.percentages().iter().all(|v| is_valid_percentage(*v))
            && (1..=9).contains(&self.enneagram.enneagram_type)
            && (1..=9).contains(&self.enneagram.wing)
            && self.has_valid_type_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn sample() -> PersonalityResult {
        PersonalityResult {
            mbti: MbtiResult {
                dimensions: MbtiDimensions { ei: 72.4, sn: 35.5, tf: 60.2, jp: 48.9 },
                type_code: "ENTP".to_string(),
                cosmic: None,
            },
            big5: Big5Result {
                percentages: Big5Percentages { o: 66.0, c: 58.3, ex: 71.5, a: 49.6, n: 32.2 },
            },
            enneagram: EnneagramResult { enneagram_type: 7, wing: 8 },
        }
    }

    #[test]
    fn test_rounded_scores() {
        assert_eq!(sample().rounded_scores(), [72, 36, 60, 49, 66, 58, 72, 50, 32]);
    }

    #[test]
    fn test_validation() {
        assert!(sample().is_valid());

        let mut r = sample();
        r.big5.percentages.n = 100.5;
        assert!(!r.is_valid());

        let mut r = sample();
        r.mbti.dimensions.ei = f64::NAN;
        assert!(!r.is_valid());

        let mut r = sample();
        r.enneagram.enneagram_type = 0;
        assert!(!r.is_valid());

        let mut r = sample();
        r.enneagram.wing = 10;
        assert!(!r.is_valid());

        let mut r = sample();
        r.mbti.type_code = "EXTP".to_string();
        assert!(!r.is_valid());
    }

    #[test]
    fn test_extraversion() {
        let r = sample();
        assert!(r.is_extravert());
        assert!(!r.is_introvert());
    }
}
