//! # 占卜公共模块
//!
//! 八字排盘与周易起卦共用的基础类型：
//! - **五行**: 木、火、土、金、水（按相生顺序排列）
//! - **阴阳**: 天干极性
//! - **四柱索引**: 年月日时八个干支索引
//! - **人格测试结果**: MBTI 维度、大五人格、九型人格
//!
//! 本模块只包含纯数据与纯函数，不依赖任何运行时状态。

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod personality;
pub mod types;

pub use personality::*;
pub use types::*;

/// 四舍五入（远离零方向）
///
/// `core` 在 no_std 下没有 `f64::round`，这里显式实现，
/// 保证 0.5 的进位方向在所有平台一致。
///
/// 先截断再比较小数部分，不做 `value + 0.5`，
/// 否则 0.49999999999999994 这类值会因加法舍入进位成 1。
pub fn round_half_away(value: f64) -> i64 {
    let truncated = value as i64;
    let fraction = value - truncated as f64;
    if fraction >= 0.5 {
        truncated + 1
    } else if fraction <= -0.5 {
        truncated - 1
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_away() {
        assert_eq!(round_half_away(72.4), 72);
        assert_eq!(round_half_away(35.5), 36);
        assert_eq!(round_half_away(49.6), 50);
        assert_eq!(round_half_away(0.0), 0);
        assert_eq!(round_half_away(100.0), 100);
        assert_eq!(round_half_away(-2.5), -3);
        assert_eq!(round_half_away(-2.4), -2);
    }

    #[test]
    fn test_round_just_below_half() {
        let below_half = 0.49999999999999994_f64;
        assert!(below_half < 0.5);
        assert_eq!(round_half_away(below_half), 0);
        assert_eq!(round_half_away(-below_half), 0);
        assert_eq!(round_half_away(99.49999999999999), 99);
        assert_eq!(round_half_away(0.5), 1);
    }
}
