//! # 起卦算法
//!
//! 1. 特征向量：四柱干支 8 项 + 人格百分比 9 项 + 九型 2 项 + 日柱混合 1 项
//! 2. FNV-1a 折叠成 32 位哈希
//! 3. 以哈希为种子（为 0 时取 1）运行 xorshift32，六次取爻
//! 4. 每次取 `6 + ((state >> 8) % 4)`，得 6/7/8/9
//! 5. 奇数为阳、偶数为阴，自下而上成卦；6、9 为变爻
//! 6. 变爻阴阳互换得变卦
//!
//! 取爻使用中间位而非低位：xorshift 低位周期短、相邻种子相关性强。
//! 种子落入 xorshift 弱状态的情况视为可接受，不更换生成器。

use sp_std::prelude::*;

use stardust_divination_common::{PersonalityResult, SiZhuIndex};

use crate::constants::*;
use crate::interpretation::{generate_advice, interpret_hexagram};
use crate::types::*;

// ============================================================================
// 特征与哈希
// ============================================================================

/// 组装起卦特征向量
pub fn build_seed(sizhu: &SiZhuIndex, personality: &PersonalityResult) -> CastSeed {
    let mut values = [0i64; SEED_FEATURES];

    for (slot, v) in values.iter_mut().zip(sizhu.to_array()) {
        *slot = v as i64;
    }
    for (slot, v) in values[8..17].iter_mut().zip(personality.rounded_scores()) {
        *slot = v;
    }
    values[17] = personality.enneagram.enneagram_type as i64;
    values[18] = personality.enneagram.wing as i64;
    values[19] = sizhu.day_gan as i64 * 12 + sizhu.day_zhi as i64;

    CastSeed { values }
}

/// FNV-1a 风格哈希
///
/// 每项取低 32 位参与异或，乘法按 2^32 取模。
pub fn fnv_hash(values: &[i64]) -> u32 {
    values.iter().fold(FNV_OFFSET_BASIS, |h, v| (h ^ (*v as u32)).wrapping_mul(FNV_PRIME))
}

// ============================================================================
// xorshift32
// ============================================================================

/// xorshift32 伪随机数发生器
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// 零状态会锁死在 0，改用 1
    pub fn new(seed: u32) -> Self {
        Self { state: if seed == 0 { 1 } else { seed } }
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// 下一爻：6 老阴、7 少阳、8 少阴、9 老阳
    pub fn next_yao(&mut self) -> u8 {
        6 + ((self.next_u32() >> YAO_BIT_OFFSET) % 4) as u8
    }
}

/// 由哈希生成六爻数值，自下而上
pub fn draw_yao_values(hash: u32) -> [u8; 6] {
    let mut rng = XorShift32::new(hash);
    let mut yao = [0u8; 6];
    for v in yao.iter_mut() {
        *v = rng.next_yao();
    }
    yao
}

// ============================================================================
// 成卦
// ============================================================================

/// 7、9 为阳 (1)，6、8 为阴 (0)
pub fn yao_to_line(value: u8) -> u8 {
    value % 2
}

/// 6、9 为变爻
pub fn is_changing(value: u8) -> bool {
    value == 6 || value == 9
}

pub fn changing_positions(yao_values: &[u8; 6]) -> Vec<u8> {
    yao_values
        .iter()
        .enumerate()
        .filter(|(_, v)| is_changing(**v))
        .map(|(i, _)| i as u8)
        .collect()
}

/// 六爻拆为 (上卦, 下卦)
pub fn split_trigrams(lines: &[u8; 6]) -> (Trigram, Trigram) {
    let lower = Trigram::from_lines([lines[0], lines[1], lines[2]]).unwrap_or_default();
    let upper = Trigram::from_lines([lines[3], lines[4], lines[5]]).unwrap_or_default();
    (upper, lower)
}

pub fn hexagram_of_lines(lines: &[u8; 6]) -> &'static Hexagram {
    let (upper, lower) = split_trigrams(lines);
    find_hexagram(upper, lower)
}

/// 变爻位置阴阳互换
pub fn flip_lines(lines: &[u8; 6], changing: &[u8]) -> [u8; 6] {
    let mut flipped = *lines;
    for i in changing {
        if let Some(line) = flipped.get_mut(*i as usize) {
            *line ^= 1;
        }
    }
    flipped
}

/// 由特征向量起卦
pub fn cast_from_seed(seed: &CastSeed) -> HexagramCast {
    let hash = fnv_hash(&seed.values);
    let yao_values = draw_yao_values(hash);
    let primary_lines = yao_values.map(yao_to_line);
    let changing_lines = changing_positions(&yao_values);

    let primary = hexagram_of_lines(&primary_lines);
    let (transformed_lines, transformed) = if changing_lines.is_empty() {
        (None, None)
    } else {
        let lines = flip_lines(&primary_lines, &changing_lines);
        (Some(lines), Some(hexagram_of_lines(&lines)))
    };

    log::debug!(
        "🔮 起卦: hash={} 爻={:?} 本卦={} 变卦={:?}",
        hash,
        yao_values,
        primary.name,
        transformed.map(|h| h.name),
    );

    HexagramCast {
        yao_values,
        primary_lines,
        primary: primary.number,
        interpretation: interpret_hexagram(primary, &changing_lines, transformed),
        advice: generate_advice(primary, transformed, changing_lines.len()),
        changing_lines,
        transformed_lines,
        transformed: transformed.map(|h| h.number),
    }
}

/// 起卦：四柱索引 + 人格测试结果
pub fn cast_hexagram(sizhu: &SiZhuIndex, personality: &PersonalityResult) -> HexagramCast {
    cast_from_seed(&build_seed(sizhu, personality))
}
