//! # 三系统交叉洞察
//!
//! 把命盘（日主五行、格局）、人格（MBTI 主导功能、九型）与卦象（上下卦五行、卦德）
//! 互相对照，为三个结果页各生成一句洞察。每页最多取两条命中规则，
//! 都未命中时使用固定兜底句。

use alloc::{format, string::String};
use sp_std::prelude::*;

use stardust_bazi::{BaziChart, ShiShen};
use stardust_divination_common::{PersonalityResult, WuXing};
use stardust_iching::HexagramCast;

use crate::CrossSystemInsights;

/// 五行与 MBTI 认知功能共振 (功能, 描述)，按 木火土金水
const ELEMENT_FUNCTIONS: [([&str; 2], &str); 5] = [
    (["Ni", "Ne"], "木之生发与直觉洞察共振，你的灵魂如春芽探索未见之境"),
    (["Fe", "Se"], "火之热情与感知表达共振，你的生命如烈焰照亮当下瞬间"),
    (["Si", "Te"], "土之稳固与经验秩序共振，你的根基如大地承载实在之物"),
    (["Ti", "Te"], "金之锋锐与逻辑结构共振，你的心智如利刃剖析本质规律"),
    (["Ni", "Fi"], "水之深邃与内在感受共振，你的灵魂如深渊映照隐秘真相"),
];

/// 格局与九型人格呼应 (九型, 模板)，按十神顺序；模板中 {T} 为九型编号，{R} 为九型特质
const PATTERN_ENNEAGRAM: [([u8; 2], &str); 10] = [
    ([2, 8], "比肩之独与{T}之{R}互相呼应，命局与性格共铸自主之路"),
    ([2, 8], "劫财之争与{T}之{R}彼此强化，星盘与人格共入竞逐之局"),
    ([9, 7], "食神之悦与{T}之{R}彼此滋养，星命与人性共享宁和之境"),
    ([4, 8], "伤官之锋与{T}之{R}相互淬炼，命格与个性共铸独立之魂"),
    ([3, 7], "偏财之机与{T}之{R}相互激发，天命与性格共舞于机遇之海"),
    ([6, 2], "正财之稳与{T}之{R}同频共振，宿命与心性共守恒久之道"),
    ([8, 3], "七杀之力与{T}之{R}同源共振，宿命与意志共筑权力之峰"),
    ([1, 3], "正官之序与{T}之{R}互为表里，命运与人格共筑秩序之塔"),
    ([4, 5], "偏印之奇与{T}之{R}互为镜像，命盘与心灵共探非常之道"),
    ([5, 9], "正印之智与{T}之{R}交相辉映，天赋与性情共入深思之境"),
];

/// 九型特质，下标 = 九型 - 1
const ENNEAGRAM_TRAITS: [&str; 9] = [
    "完美主义", "助人情怀", "成就驱动", "独特表达", "求知探索", "忠诚谨慎", "乐观追寻", "力量掌控", "和平调停",
];

/// MBTI 类型 → 主导功能
const MBTI_DOMINANT: [(&str, &str); 16] = [
    ("INTJ", "Ni"), ("INFJ", "Ni"), ("ENTJ", "Te"), ("ENFJ", "Fe"),
    ("INTP", "Ti"), ("INFP", "Fi"), ("ENTP", "Ne"), ("ENFP", "Ne"),
    ("ISTJ", "Si"), ("ISFJ", "Si"), ("ESTJ", "Te"), ("ESFJ", "Fe"),
    ("ISTP", "Ti"), ("ISFP", "Fi"), ("ESTP", "Se"), ("ESFP", "Se"),
];

/// 认知功能中文名
const FUNCTION_NAMES: [(&str, &str); 8] = [
    ("Ni", "内倾直觉"), ("Ne", "外倾直觉"), ("Fe", "外倾情感"), ("Se", "外倾感知"),
    ("Si", "内倾感知"), ("Te", "外倾思考"), ("Ti", "内倾思考"), ("Fi", "内倾情感"),
];

const EXTRAVERT_NATURE_KEYWORDS: [&str; 3] = ["刚", "壮", "动"];
const INTROVERT_NATURE_KEYWORDS: [&str; 4] = ["柔", "顺", "止", "静"];

pub fn dominant_function(type_code: &str) -> Option<&'static str> {
    MBTI_DOMINANT.iter().find(|(t, _)| *t == type_code).map(|(_, f)| *f)
}

pub fn function_name(function: &str) -> &'static str {
    FUNCTION_NAMES.iter().find(|(f, _)| *f == function).map(|(_, n)| *n).unwrap_or("")
}

fn element_resonates(main: WuXing, function: Option<&str>) -> bool {
    let (functions, _) = ELEMENT_FUNCTIONS[main.index() as usize];
    function.map_or(false, |f| functions.contains(&f))
}

fn pattern_enneagram(pattern: ShiShen, enneagram_type: u8) -> Option<String> {
    let (types, template) = PATTERN_ENNEAGRAM[pattern.index() as usize];
    if !types.contains(&enneagram_type) {
        return None;
    }
    let trait_name = ENNEAGRAM_TRAITS.get(enneagram_type.checked_sub(1)? as usize)?;
    Some(template.replace("{T}", &format!("{}号", enneagram_type)).replace("{R}", trait_name))
}

/// 最多取前两条，以句号连接
fn join_parts(parts: &[String], fallback: String) -> String {
    if parts.is_empty() {
        return fallback;
    }
    let mut text = parts.iter().take(2).cloned().collect::<Vec<_>>().join("。");
    text.push('。');
    text
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}

/// 生成交叉洞察
pub fn generate_cross_insights(
    chart: &BaziChart,
    personality: &PersonalityResult,
    cast: Option<&HexagramCast>,
) -> CrossSystemInsights {
    let main = chart.main_element;
    let dominant = dominant_function(&personality.mbti.type_code);
    let resonates = element_resonates(main, dominant);
    let hexagram = cast.map(|c| c.primary_hexagram());
    let trigram_elements = hexagram.map(|h| (h.upper.wuxing(), h.lower.wuxing()));

    // 命盘
    let mut parts = Vec::new();
    if resonates {
        parts.push(String::from(ELEMENT_FUNCTIONS[main.index() as usize].1));
    }
    if let Some(text) = pattern_enneagram(chart.geju.shishen, personality.enneagram.enneagram_type) {
        parts.push(text);
    }
    if let (Some(h), Some((upper, lower))) = (hexagram, trigram_elements) {
        if upper == main || lower == main {
            parts.push(format!("{}卦与你的{}行日主遥相呼应，天象与命盘在此刻交汇共鸣", h.name, main.name()));
        }
    }
    let bazi_insight = join_parts(&parts, String::from("你的命盘五行流转，与人格星图形成独特的生命底色。"));

    // 人格
    let mut parts = Vec::new();
    if let (true, Some(function)) = (resonates, dominant) {
        parts.push(format!(
            "你的{}与命中{}行交织，认知方式与天赋本源形成双螺旋共振",
            function_name(function),
            main.name()
        ));
    }
    if let (Some(h), Some(cosmic)) = (hexagram, personality.mbti.cosmic.as_ref()) {
        parts.push(format!("卦象之「{}」与{}的能量交汇，古老智慧映射你的现代人格", h.nature, cosmic));
    }
    let personality_insight =
        join_parts(&parts, String::from("你的人格星图独立闪耀，等待与命理卦象的三维交汇。"));

    // 卦象
    let iching_insight = match (hexagram, trigram_elements) {
        (Some(h), Some((upper, lower))) => {
            let mut parts = Vec::new();
            if upper == main || lower == main {
                let elements = if upper == lower {
                    String::from(upper.name())
                } else {
                    format!("{}、{}", upper.name(), lower.name())
                };
                parts.push(format!(
                    "{}卦携{}之气，与你命盘{}行主星遥相呼应，古今时空在此折叠",
                    h.name,
                    elements,
                    main.name()
                ));
            }
            let label = personality.mbti.cosmic.as_deref().unwrap_or(personality.mbti.type_code.as_str());
            if contains_any(h.nature, &EXTRAVERT_NATURE_KEYWORDS) && personality.is_extravert() {
                parts.push(format!("卦象「{}」之质与你{}的外向能量同频，人格特质在易象中找到镜像", h.nature, label));
            } else if contains_any(h.nature, &INTROVERT_NATURE_KEYWORDS) && personality.is_introvert() {
                parts.push(format!("卦象「{}」之意与你{}的内敛气质共鸣，人格特质在易象中找到镜像", h.nature, label));
            }
            join_parts(&parts, format!("{}卦静候时机，等待与你的命盘人格形成三元共振场域。", h.name))
        }
        _ => String::new(),
    };

    CrossSystemInsights { bazi_insight, personality_insight, iching_insight }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{personality_a, personality_b};
    use alloc::string::ToString;
    use stardust_bazi::calculate_bazi;

    fn cast(primary: u8) -> HexagramCast {
        HexagramCast { primary, ..Default::default() }
    }

    #[test]
    fn test_dominant_function() {
        assert_eq!(dominant_function("ENTP"), Some("Ne"));
        assert_eq!(dominant_function("ISFJ"), Some("Si"));
        assert_eq!(dominant_function(""), None);
        assert_eq!(function_name("Fe"), "外倾情感");
        assert_eq!(function_name("Xx"), "");
    }

    #[test]
    fn test_trigram_element_match() {
        let chart = calculate_bazi(1990, 5, 15, 14);
        let insights = generate_cross_insights(&chart, &personality_a(), Some(&cast(37)));
        assert_eq!(insights.bazi_insight, "家人卦与你的火行日主遥相呼应，天象与命盘在此刻交汇共鸣。");
        assert_eq!(
            insights.personality_insight,
            "卦象之「家道和睦」与星际探索者的能量交汇，古老智慧映射你的现代人格。"
        );
        assert_eq!(
            insights.iching_insight,
            "家人卦携木、火之气，与你命盘火行主星遥相呼应，古今时空在此折叠。"
        );
    }

    #[test]
    fn test_introvert_nature_match() {
        let chart = calculate_bazi(1990, 5, 15, 14);
        let insights = generate_cross_insights(&chart, &personality_b(), Some(&cast(52)));
        assert_eq!(insights.bazi_insight, "你的命盘五行流转，与人格星图形成独特的生命底色。");
        assert_eq!(
            insights.iching_insight,
            "卦象「止定沉静」之意与你星云诗人的内敛气质共鸣，人格特质在易象中找到镜像。"
        );
    }

    #[test]
    fn test_element_and_pattern_resonance() {
        // 丙火日主、劫财格，ESFJ 主导 Fe，8 号
        let chart = calculate_bazi(1990, 5, 15, 14);
        let mut personality = personality_a();
        personality.mbti.type_code = "ESFJ".to_string();
        personality.enneagram.enneagram_type = 8;

        let insights = generate_cross_insights(&chart, &personality, None);
        assert_eq!(
            insights.bazi_insight,
            "火之热情与感知表达共振，你的生命如烈焰照亮当下瞬间。劫财之争与8号之力量掌控彼此强化，星盘与人格共入竞逐之局。"
        );
        assert_eq!(
            insights.personality_insight,
            "你的外倾情感与命中火行交织，认知方式与天赋本源形成双螺旋共振。"
        );
        assert_eq!(insights.iching_insight, "");
    }

    #[test]
    fn test_at_most_two_parts() {
        let chart = calculate_bazi(1990, 5, 15, 14);
        let mut personality = personality_a();
        personality.mbti.type_code = "ESFJ".to_string();
        personality.enneagram.enneagram_type = 8;

        let insights = generate_cross_insights(&chart, &personality, Some(&cast(37)));
        assert_eq!(insights.bazi_insight.matches('。').count(), 2);
        assert!(!insights.bazi_insight.contains("家人卦"));
    }

    #[test]
    fn test_fallbacks_without_cast() {
        let chart = calculate_bazi(1990, 5, 15, 14);
        let insights = generate_cross_insights(&chart, &personality_b(), None);
        assert_eq!(insights.personality_insight, "你的人格星图独立闪耀，等待与命理卦象的三维交汇。");
        assert_eq!(insights.iching_insight, "");
    }

    #[test]
    fn test_iching_fallback_and_type_code_label() {
        let chart = calculate_bazi(1990, 5, 15, 14);
        let mut personality = personality_b();
        personality.mbti.cosmic = None;

        // 艮：土土，与火不合；INFP 内向，止 命中
        let insights = generate_cross_insights(&chart, &personality, Some(&cast(52)));
        assert!(insights.iching_insight.contains("你INFP的内敛气质"));

        // 乾：金金，卦德含刚，内向不命中
        let insights = generate_cross_insights(&chart, &personality, Some(&cast(1)));
        assert_eq!(insights.iching_insight, "乾卦静候时机，等待与你的命盘人格形成三元共振场域。");

        personality.mbti.type_code = "ENTP".to_string();
        let insights = generate_cross_insights(&chart, &personality, Some(&cast(1)));
        assert_eq!(
            insights.iching_insight,
            "卦象「刚健中正」之质与你ENTP的外向能量同频，人格特质在易象中找到镜像。"
        );
    }
}
