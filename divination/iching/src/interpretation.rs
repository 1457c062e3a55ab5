//! # 卦象解读
//!
//! 解读文本由本卦卦德、大象、星际解读，变爻爻辞，以及本卦到变卦的转化句拼成；
//! 建议按卦德关键字、变爻数量和上卦五行变化三条规则组合。

use alloc::{format, string::String};
use sp_std::prelude::*;

use crate::constants::YAO_NAMES;
use crate::line_texts::LINE_TEXTS;
use crate::types::*;

// ============================================================================
// 爻辞
// ============================================================================

/// 单爻爻辞，卦序或爻位越界时返回空文本
pub fn get_line_text(hexagram_number: u8, line_index: u8) -> LineText {
    if !(1..=64).contains(&hexagram_number) {
        return LineText::default();
    }
    LINE_TEXTS[(hexagram_number - 1) as usize]
        .get(line_index as usize)
        .copied()
        .unwrap_or_default()
}

/// 变爻爻辞（按变爻顺序）
pub fn changing_line_texts(hexagram_number: u8, changing_lines: &[u8]) -> Vec<ChangingLineText> {
    if !(1..=64).contains(&hexagram_number) {
        return Vec::new();
    }
    changing_lines
        .iter()
        .filter_map(|i| {
            let position = *YAO_NAMES.get(*i as usize)?;
            let line = get_line_text(hexagram_number, *i);
            Some(ChangingLineText { index: *i, position, text: line.text, interpretation: line.interpretation })
        })
        .collect()
}

// ============================================================================
// 解读与建议
// ============================================================================

/// 组装解读文本
pub fn interpret_hexagram(primary: &Hexagram, changing_lines: &[u8], transformed: Option<&Hexagram>) -> String {
    let mut text = format!("{}卦，{}。{}。\n\n", primary.name, primary.nature, primary.image);
    text.push_str(primary.cosmic_desc);
    text.push_str("\n\n");

    if !changing_lines.is_empty() {
        let lines = changing_line_texts(primary.number, changing_lines);
        let positions: Vec<&str> = lines.iter().map(|l| l.position).collect();
        text.push_str(&format!("变爻在{}。", positions.join("、")));
        for line in &lines {
            text.push_str(&format!("{}动：「{}」——{}。", line.position, line.text, line.interpretation));
        }
        text.push_str("\n\n");
    }

    match transformed {
        Some(t) => {
            text.push_str(&format!(
                "本卦{}化为{}，由「{}」转向「{}」。",
                primary.name, t.name, primary.nature, t.nature
            ));
            text.push_str(&format!("{}。未来的走向蕴含着{}的能量。", t.image, t.nature));
        }
        None => text.push_str("六爻安定，无变爻动。当前状态稳固，宜守正持中。"),
    }

    text
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}

/// 按卦德关键字选取的首句
pub fn nature_advice(nature: &str) -> &'static str {
    if contains_any(nature, &["刚", "壮"]) {
        "以刚健之力开拓前行，但谨防过刚则折。"
    } else if contains_any(nature, &["柔", "顺"]) {
        "以柔顺之道处世，顺势而为方得圆融。"
    } else if contains_any(nature, &["明", "光"]) {
        "你的光芒正在显现，以正道引导这份光明。"
    } else if contains_any(nature, &["险", "困"]) {
        "暂时的困境是成长的催化剂，守住信念。"
    } else {
        "顺应宇宙的节奏，在变化中保持本心。"
    }
}

/// 按变爻数量选取的第二句
pub fn change_count_advice(changing_count: usize) -> &'static str {
    match changing_count {
        0 => "当前能量平稳，宜保持现状精进不懈。",
        1 | 2 => "小幅调整即将到来，灵活应变是你的星际法宝。",
        _ => "重大变化正在酝酿，做好迎接新篇章的准备。",
    }
}

/// 生成建议
pub fn generate_advice(primary: &Hexagram, transformed: Option<&Hexagram>, changing_count: usize) -> String {
    let mut advice = String::from(nature_advice(primary.nature));
    advice.push_str(change_count_advice(changing_count));

    if let Some(t) = transformed {
        let from = primary.upper.wuxing();
        let to = t.upper.wuxing();
        if from != to {
            advice.push_str(&format!("能量从{}向{}转化，拥抱这份蜕变。", from.name(), to.name()));
        }
    }

    advice
}
