//! # 八字常量表
//!
//! 天干地支名称、藏干、十神与格局描述、身份文案等静态数据。

use stardust_divination_common::WuXing;

// ============================================================================
// 天干地支
// ============================================================================

pub const TIANGAN_NAMES: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

pub const DIZHI_NAMES: [&str; 12] = ["子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥"];

pub const ZODIAC_NAMES: [&str; 12] = ["鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪"];

/// 地支本气五行
pub const DIZHI_WUXING: [WuXing; 12] = [
    WuXing::Shui, // 子
    WuXing::Tu,   // 丑
    WuXing::Mu,   // 寅
    WuXing::Mu,   // 卯
    WuXing::Tu,   // 辰
    WuXing::Huo,  // 巳
    WuXing::Huo,  // 午
    WuXing::Tu,   // 未
    WuXing::Jin,  // 申
    WuXing::Jin,  // 酉
    WuXing::Tu,   // 戌
    WuXing::Shui, // 亥
];

/// 地支藏干表（天干索引，主气在前）
pub const CANGGAN_TABLE: [&[u8]; 12] = [
    &[9],       // 子: 癸
    &[5, 9, 7], // 丑: 己癸辛
    &[0, 2, 4], // 寅: 甲丙戊
    &[1],       // 卯: 乙
    &[4, 1, 9], // 辰: 戊乙癸
    &[2, 6, 4], // 巳: 丙庚戊
    &[3, 5],    // 午: 丁己
    &[5, 3, 1], // 未: 己丁乙
    &[6, 8, 4], // 申: 庚壬戊
    &[7],       // 酉: 辛
    &[4, 7, 3], // 戌: 戊辛丁
    &[8, 0],    // 亥: 壬甲
];

/// 藏干五行统计权重（十分之一单位）
pub const CANGGAN_TALLY_WEIGHTS: [u16; 3] = [10, 5, 3];

/// 藏干日主强弱权重（百分之一单位）
pub const CANGGAN_STRENGTH_WEIGHTS: [i32; 3] = [300, 150, 100];

/// 天干五行统计权重（十分之一单位）
pub const TIANGAN_TALLY_WEIGHT: u16 = 10;

// ============================================================================
// 日主强弱（百分之一单位）
// ============================================================================

pub const STRENGTH_BASE: i32 = 5000;
pub const STRENGTH_MAX: i32 = 10000;
/// 不低于此分为偏强
pub const STRENGTH_STRONG_THRESHOLD: u16 = 6500;
/// 不高于此分为偏弱
pub const STRENGTH_WEAK_THRESHOLD: u16 = 3500;

/// 月令本气对日主的影响：同类、生我、克我、我生、我克
pub const MONTH_COMMAND_SAME: i32 = 1600;
pub const MONTH_COMMAND_GENERATES_DAY: i32 = 1000;
pub const MONTH_COMMAND_OVERCOMES_DAY: i32 = -1400;
pub const MONTH_COMMAND_DRAINED_BY_DAY: i32 = -600;
pub const MONTH_COMMAND_OVERCOME_BY_DAY: i32 = -400;

/// 年、月、时干对日主的影响：同类、生我、克我、我生、我克
pub const VISIBLE_STEM_SAME: i32 = 500;
pub const VISIBLE_STEM_GENERATES_DAY: i32 = 300;
pub const VISIBLE_STEM_OVERCOMES_DAY: i32 = -400;
pub const VISIBLE_STEM_DRAINED_BY_DAY: i32 = -200;
pub const VISIBLE_STEM_OVERCOME_BY_DAY: i32 = -200;

// ============================================================================
// 十神与格局
// ============================================================================

pub const SHISHEN_NAMES: [&str; 10] = ["比肩", "劫财", "食神", "伤官", "偏财", "正财", "七杀", "正官", "偏印", "正印"];

pub const SHISHEN_DESCRIPTIONS: [&str; 10] = [
    "同我者为比肩，主自立、坚持与同辈助力",
    "同我异性为劫财，主竞争、魄力与合作中的取舍",
    "我生同性为食神，主才艺、享受与温和表达",
    "我生异性为伤官，主锋芒、创新与不拘一格",
    "我克同性为偏财，主机遇、交际与流动之财",
    "我克异性为正财，主勤俭、务实与稳定收获",
    "克我同性为七杀，主魄力、压力与权威挑战",
    "克我异性为正官，主规矩、责任与名誉地位",
    "生我同性为偏印，主奇思、玄学与独到领悟",
    "生我异性为正印，主学识、庇护与仁慈包容",
];

/// 格局表：按十神顺序排列的 (名称, 描述)
pub const GEJU_TABLE: [(&str, &str); 10] = [
    ("比肩格", "月令比肩当令，自我意识强烈，独立自主，凭一己之力开拓天地。"),
    ("劫财格", "月令劫财当令，性格果敢好胜，敢于竞争，善于在激烈角逐中突围。"),
    ("食神格", "月令食神当令，才华内蕴，温和从容，以才艺与品味滋养人生。"),
    ("伤官格", "月令伤官当令，聪明外露，锋芒毕现，不拘成规而勇于创新。"),
    ("偏财格", "月令偏财当令，慷慨豪爽，善抓机遇，人脉广阔而财路灵活。"),
    ("正财格", "月令正财当令，勤勉务实，重信守诺，以稳健经营积累丰盛。"),
    ("七杀格", "月令七杀当令，魄力非凡，敢担重任，压力之下愈显锋芒。"),
    ("正官格", "月令正官当令，品行端正，循规守矩，责任心强而易得名望。"),
    ("偏印格", "月令偏印当令，思维独特，悟性过人，于冷门领域另辟蹊径。"),
    ("正印格", "月令正印当令，仁厚好学，得贵人庇护，以学识涵养立身。"),
];

// ============================================================================
// 身份文案（以日干为"我"）
// ============================================================================

/// 星际称号（按日干）
pub const COSMIC_NAMES: [&str; 10] = [
    "苍龙破晓",
    "幽兰映月",
    "烈阳天行",
    "烛火星引",
    "山岳不动",
    "沃野千里",
    "星陨铸刃",
    "霜华凝玉",
    "沧海横流",
    "寒露凝珠",
];

/// 性格描述（按日干）
pub const PERSONALITIES: [&str; 10] = [
    "你如参天古木，正直而坚韧。无论风暴如何肆虐，你始终向着光明生长。天生具有领导力，心怀仁慈，是他人风雨中的庇护之所。",
    "你如藤蔓兰草，柔韧而坚强。看似温柔，实则有着惊人的适应力与生命力。善于在逆境中找到生机，以柔克刚，四季常青。",
    "你如太阳当空，光芒万丈。热情洋溢，慷慨大方，你的存在本身就是温暖的源泉。照亮他人前行的路，却从不索取回报。",
    "你如暗夜烛火，温柔而深邃。在黑暗中，你用微光指引迷途之人。拥有洞察事物本质的智慧，内心燃烧着不灭的热忱。",
    "你如巍峨高山，沉稳而厚重。你是众人依靠的磐石，承载万物却不言辛苦。你的胸怀如大地般包容，存在即安全。",
    "你如沃土良田，温润而滋养。默默耕耘，将养分给予身边的一切。细腻、耐心、务实，用双手创造丰盛的收获。",
    "你如利剑出鞘，果断而刚毅。钢铁般的意志和无畏的勇气，是你与生俱来的铠甲。爱憎分明，是黑暗中最锋利的光。",
    "你如珠玉美石，精致而珍贵。外表清冷，内心丰富。追求完美，注重细节，有着与生俱来的审美天赋。",
    "你如浩瀚大海，深邃而辽阔。思维如潮水般奔涌不息，充满智慧与创造力。包容万象，自由不羁，是真正的大智之人。",
    "你如晨露细雨，滋润而宁静。拥有水滴石穿的毅力和洞察秋毫的直觉。看似平静的表面下，蕴含着改变世界的力量。",
];

/// 生肖特质（按地支）
pub const ZODIAC_TRAITS: [&str; 12] = [
    "机敏灵巧，洞察先机",
    "勤恳踏实，坚韧不拔",
    "勇猛无畏，王者之气",
    "温雅从容，心思细腻",
    "气吞山河，志存高远",
    "深沉睿智，洞幽察微",
    "奔放自由，热情如火",
    "温良恭俭，艺术天赋",
    "聪慧多变，机智过人",
    "精明干练，一丝不苟",
    "忠诚正直，侠义心肠",
    "宽厚豁达，福泽深厚",
];

/// 元素主题色 (color, glow, bg)，按 木火土金水
pub const ELEMENT_THEMES: [(&str, &str, &str); 5] = [
    ("#4ade80", "rgba(74, 222, 128, 0.5)", "rgba(74, 222, 128, 0.08)"),
    ("#fb923c", "rgba(251, 146, 60, 0.5)", "rgba(251, 146, 60, 0.08)"),
    ("#fbbf24", "rgba(251, 191, 36, 0.5)", "rgba(251, 191, 36, 0.08)"),
    ("#e2e8f0", "rgba(226, 232, 240, 0.5)", "rgba(226, 232, 240, 0.08)"),
    ("#60a5fa", "rgba(96, 165, 250, 0.5)", "rgba(96, 165, 250, 0.08)"),
];

/// 五行补益 (颜色, 方位, 季节, 建议)，按 木火土金水
pub const COMPLEMENT_TABLE: [(&str, &str, &str, &str); 5] = [
    ("绿色", "东方", "春季", "多亲近草木，晨起向东而行，以生发之气舒展身心。"),
    ("红色", "南方", "夏季", "多沐浴阳光，投身热忱之事，以光明之气点燃斗志。"),
    ("黄色", "中央", "四季末", "多脚踏实地，守信而行，以厚重之气稳固根基。"),
    ("白色", "西方", "秋季", "多修习条理与决断，删繁就简，以清肃之气磨砺锋芒。"),
    ("黑色", "北方", "冬季", "多静心沉思，亲近江河湖海，以润下之气涵养智慧。"),
];

/// 命运碎片的收尾两句
pub const FRAGMENT_TAIL: [&str; 2] = ["天干地支交汇", "命运之轮转动"];

// ============================================================================
// 真太阳时
// ============================================================================

/// 平年各月天数
pub const MONTH_DAYS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// 每月 1 日的均时差（秒），末项为次年 1 月 1 日，日间线性插值
pub const EQUATION_OF_TIME_SECONDS: [i32; 13] = [-216, -820, -783, -260, 176, 140, -211, -360, 38, 680, 986, 592, -243];

/// 经度 1 度对应的时间（秒）
pub const SECONDS_PER_DEGREE: i64 = 240;

/// 经度存储精度（1/100000 度）
pub const LONGITUDE_SCALE: i64 = 100_000;

pub const SECONDS_PER_DAY: i64 = 86_400;
