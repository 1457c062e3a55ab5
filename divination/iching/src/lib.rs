//! # 周易起卦 (Stardust I Ching)
//!
//! 确定性起卦：八字四柱 + 人格测试数据 → 本卦 + 变爻 + 变卦。
//!
//! ## 核心概念
//!
//! - **八卦**: 乾、坤、震、巽、坎、离、艮、兑
//! - **六爻**: 6 老阴、7 少阳、8 少阴、9 老阳，老阴老阳为变爻
//! - **本卦、变卦**: 变爻阴阳互换即得变卦，无变爻则无变卦
//! - **解读**: 卦德、大象、爻辞与转化句拼成的叙述文本
//!
//! ## 确定性
//!
//! 同一四柱与同一人格测试结果永远得到同一卦象。特征向量经 FNV-1a 哈希后
//! 作为 xorshift32 的种子，不使用任何外部随机源。

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod algorithm;
pub mod constants;
pub mod interpretation;
pub mod line_texts;
pub mod types;

#[cfg(test)]
mod mock;

pub use algorithm::{build_seed, cast_from_seed, cast_hexagram};
pub use constants::{find_hexagram, find_hexagram_by_number, HEXAGRAMS, YAO_NAMES};
pub use interpretation::{changing_line_texts, get_line_text};
pub use types::*;
