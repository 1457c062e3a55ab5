//! # 周易常量表
//!
//! 八卦、六十四卦（文王卦序）与 (上卦, 下卦) 查找表。

use stardust_divination_common::WuXing;

use crate::types::{Hexagram, Trigram, TrigramData};

/// 爻位名称，自下而上
pub const YAO_NAMES: [&str; 6] = ["初爻", "二爻", "三爻", "四爻", "五爻", "上爻"];

/// FNV-1a 初始值
pub const FNV_OFFSET_BASIS: u32 = 2_166_136_261;

/// FNV-1a 乘数
pub const FNV_PRIME: u32 = 16_777_619;

/// 取爻时 xorshift 状态的右移位数（避开低位相关性）
pub const YAO_BIT_OFFSET: u32 = 8;

/// 八卦数据，顺序与 [`Trigram`] 判别值一致
pub const TRIGRAM_DATA: [TrigramData; 8] = [
    TrigramData { name: "乾", symbol: "☰", nature: "天", wuxing: WuXing::Jin, lines: [1, 1, 1] },
    TrigramData { name: "坤", symbol: "☷", nature: "地", wuxing: WuXing::Tu, lines: [0, 0, 0] },
    TrigramData { name: "震", symbol: "☳", nature: "雷", wuxing: WuXing::Mu, lines: [1, 0, 0] },
    TrigramData { name: "巽", symbol: "☴", nature: "风", wuxing: WuXing::Mu, lines: [0, 1, 1] },
    TrigramData { name: "坎", symbol: "☵", nature: "水", wuxing: WuXing::Shui, lines: [0, 1, 0] },
    TrigramData { name: "离", symbol: "☲", nature: "火", wuxing: WuXing::Huo, lines: [1, 0, 1] },
    TrigramData { name: "艮", symbol: "☶", nature: "山", wuxing: WuXing::Tu, lines: [0, 0, 1] },
    TrigramData { name: "兑", symbol: "☱", nature: "泽", wuxing: WuXing::Jin, lines: [1, 1, 0] },
];

/// 六十四卦，下标 = 卦序 - 1
pub const HEXAGRAMS: [Hexagram; 64] = [
    Hexagram {
        number: 1,
        name: "乾",
        upper: Trigram::Qian,
        lower: Trigram::Qian,
        nature: "刚健中正",
        judgement: "元亨利贞",
        image: "天行健，君子以自强不息",
        cosmic_desc: "你的灵魂如纯阳之天，自强不息，创造力与领导力并驱。宇宙赋予你开创格局的使命。",
    },
    Hexagram {
        number: 2,
        name: "坤",
        upper: Trigram::Kun,
        lower: Trigram::Kun,
        nature: "柔顺包容",
        judgement: "元亨，利牝马之贞",
        image: "地势坤，君子以厚德载物",
        cosmic_desc: "你的灵魂如大地般包容万物，以柔顺之力承载一切。宇宙赋予你滋养与成就的使命。",
    },
    Hexagram {
        number: 3,
        name: "屯",
        upper: Trigram::Kan,
        lower: Trigram::Zhen,
        nature: "初生蓄势",
        judgement: "元亨利贞，勿用有攸往",
        image: "云雷屯，君子以经纶",
        cosmic_desc: "你正处于万物初生的星云期，虽有波折但蕴含无限可能。静待时机，厚积薄发。",
    },
    Hexagram {
        number: 4,
        name: "蒙",
        upper: Trigram::Gen,
        lower: Trigram::Kan,
        nature: "启蒙求知",
        judgement: "亨，匪我求童蒙",
        image: "山下出泉，蒙",
        cosmic_desc: "你的灵魂正在觉醒之旅中，如山泉初涌。保持谦逊求知之心，智慧将如泉水般汩汩而出。",
    },
    Hexagram {
        number: 5,
        name: "需",
        upper: Trigram::Kan,
        lower: Trigram::Qian,
        nature: "等待时机",
        judgement: "有孚，光亨贞吉",
        image: "云上于天，需",
        cosmic_desc: "你如云积于天际，等待化雨的时刻。耐心与信念是你最大的星际武器。",
    },
    Hexagram {
        number: 6,
        name: "讼",
        upper: Trigram::Qian,
        lower: Trigram::Kan,
        nature: "争辩明理",
        judgement: "有孚，窒惕",
        image: "天与水违行，讼",
        cosmic_desc: "你的内心有着坚定的立场和追求正义的勇气。学会和解，方能化干戈为玉帛。",
    },
    Hexagram {
        number: 7,
        name: "师",
        upper: Trigram::Kun,
        lower: Trigram::Kan,
        nature: "统御之道",
        judgement: "贞，丈人吉",
        image: "地中有水，师",
        cosmic_desc: "你天生具有统领能力，如大地蓄水般深藏不露。纪律与仁慈并行，方成大器。",
    },
    Hexagram {
        number: 8,
        name: "比",
        upper: Trigram::Kan,
        lower: Trigram::Kun,
        nature: "亲近团结",
        judgement: "吉，原筮元永贞",
        image: "地上有水，比",
        cosmic_desc: "你的灵魂渴望连接与共鸣。以真诚为纽带，你将汇聚星光般的伙伴。",
    },
    Hexagram {
        number: 9,
        name: "小畜",
        upper: Trigram::Xun,
        lower: Trigram::Qian,
        nature: "以柔蓄刚",
        judgement: "亨，密云不雨",
        image: "风行天上，小畜",
        cosmic_desc: "你正在积蓄力量的阶段，如密云酝酿大雨。小步积累，终将迎来丰沛的释放。",
    },
    Hexagram {
        number: 10,
        name: "履",
        upper: Trigram::Qian,
        lower: Trigram::Dui,
        nature: "谨慎前行",
        judgement: "履虎尾，不咥人亨",
        image: "上天下泽，履",
        cosmic_desc: "你以优雅和勇气行走于宇宙之间。礼仪与胆识并重，即使踏虎尾亦能全身而退。",
    },
    Hexagram {
        number: 11,
        name: "泰",
        upper: Trigram::Kun,
        lower: Trigram::Qian,
        nature: "通泰安乐",
        judgement: "小往大来，吉亨",
        image: "天地交，泰",
        cosmic_desc: "天地交泰，你正处于最和谐的星际频率中。内外通达，万事亨通，珍惜这段黄金时光。",
    },
    Hexagram {
        number: 12,
        name: "否",
        upper: Trigram::Qian,
        lower: Trigram::Kun,
        nature: "闭塞不通",
        judgement: "否之匪人",
        image: "天地不交，否",
        cosmic_desc: "暂时的闭塞是宇宙给予你的沉潜期。守住本心，否极泰来，黑暗后必有星光。",
    },
    Hexagram {
        number: 13,
        name: "同人",
        upper: Trigram::Qian,
        lower: Trigram::Li,
        nature: "志同道合",
        judgement: "同人于野，亨",
        image: "天与火，同人",
        cosmic_desc: "你的灵魂频率吸引着志同道合之人。以光明正大之心团结众人，共创星辰大海。",
    },
    Hexagram {
        number: 14,
        name: "大有",
        upper: Trigram::Li,
        lower: Trigram::Qian,
        nature: "大有所得",
        judgement: "元亨",
        image: "火在天上，大有",
        cosmic_desc: "你如烈日当空，光芒普照。丰盛的能量与资源汇聚于你，以德行驾驭方能长久。",
    },
    Hexagram {
        number: 15,
        name: "谦",
        upper: Trigram::Kun,
        lower: Trigram::Gen,
        nature: "谦逊有礼",
        judgement: "亨，君子有终",
        image: "地中有山，谦",
        cosmic_desc: "你的灵魂拥有山般的实力却藏于大地之下。谦逊是你最闪耀的星光，越低调越有力量。",
    },
    Hexagram {
        number: 16,
        name: "豫",
        upper: Trigram::Zhen,
        lower: Trigram::Kun,
        nature: "愉悦振奋",
        judgement: "利建侯行师",
        image: "雷出地奋，豫",
        cosmic_desc: "你如春雷破土，充满愉悦和生机。热情与行动力是你感染宇宙的方式。",
    },
    Hexagram {
        number: 17,
        name: "随",
        upper: Trigram::Dui,
        lower: Trigram::Zhen,
        nature: "随顺适时",
        judgement: "元亨利贞",
        image: "泽中有雷，随",
        cosmic_desc: "你善于顺应宇宙的节奏而行。灵活变通不是软弱，而是与星辰共舞的智慧。",
    },
    Hexagram {
        number: 18,
        name: "蛊",
        upper: Trigram::Gen,
        lower: Trigram::Xun,
        nature: "整饬革新",
        judgement: "元亨，利涉大川",
        image: "山下有风，蛊",
        cosmic_desc: "你正面临需要革新的课题。勇敢面对积弊，拨乱反正，你将开创全新的星际篇章。",
    },
    Hexagram {
        number: 19,
        name: "临",
        upper: Trigram::Kun,
        lower: Trigram::Dui,
        nature: "居高临下",
        judgement: "元亨利贞",
        image: "泽上有地，临",
        cosmic_desc: "你以宽广的胸怀俯瞰全局。温柔而有力地影响周围，如大地临泽般滋润万物。",
    },
    Hexagram {
        number: 20,
        name: "观",
        upper: Trigram::Xun,
        lower: Trigram::Kun,
        nature: "观察领悟",
        judgement: "盥而不荐，有孚颙若",
        image: "风行地上，观",
        cosmic_desc: "你拥有洞察宇宙深处的慧眼。沉静观察，领悟星辰的语言，智慧便从观照中诞生。",
    },
    Hexagram {
        number: 21,
        name: "噬嗑",
        upper: Trigram::Li,
        lower: Trigram::Zhen,
        nature: "明断果决",
        judgement: "亨，利用狱",
        image: "雷电噬嗑",
        cosmic_desc: "你如闪电般明快果断，有拨云见日的魄力。面对障碍，你选择咬碎它而非绕行。",
    },
    Hexagram {
        number: 22,
        name: "贲",
        upper: Trigram::Gen,
        lower: Trigram::Li,
        nature: "文饰之美",
        judgement: "亨，小利有攸往",
        image: "山下有火，贲",
        cosmic_desc: "你的灵魂天生追求美与和谐。内在的光芒经过精心雕琢，绽放出独特的星辰之美。",
    },
    Hexagram {
        number: 23,
        name: "剥",
        upper: Trigram::Gen,
        lower: Trigram::Kun,
        nature: "剥落更新",
        judgement: "不利有攸往",
        image: "山附于地，剥",
        cosmic_desc: "旧的能量正在剥落，为新生让路。这是宇宙的自然循环，不必恐惧，静候黎明。",
    },
    Hexagram {
        number: 24,
        name: "复",
        upper: Trigram::Kun,
        lower: Trigram::Zhen,
        nature: "复归本初",
        judgement: "亨，出入无疾",
        image: "雷在地中，复",
        cosmic_desc: "一阳复始，新的能量正从灵魂深处萌发。回归初心，你将发现最本真的力量。",
    },
    Hexagram {
        number: 25,
        name: "无妄",
        upper: Trigram::Qian,
        lower: Trigram::Zhen,
        nature: "至诚不妄",
        judgement: "元亨利贞",
        image: "天下雷行，无妄",
        cosmic_desc: "你的灵魂追求真实与纯粹。不虚妄、不伪装，以至诚之心行走宇宙间。",
    },
    Hexagram {
        number: 26,
        name: "大畜",
        upper: Trigram::Gen,
        lower: Trigram::Qian,
        nature: "大蓄大成",
        judgement: "利贞，不家食吉",
        image: "天在山中，大畜",
        cosmic_desc: "你正在蓄积巨大的宇宙能量。学习与沉淀将在未来化为磅礴的力量。",
    },
    Hexagram {
        number: 27,
        name: "颐",
        upper: Trigram::Gen,
        lower: Trigram::Zhen,
        nature: "颐养正道",
        judgement: "贞吉，观颐",
        image: "山下有雷，颐",
        cosmic_desc: "你的灵魂需要滋养与被滋养。注意身心的平衡，以正道养生，方得长久之力。",
    },
    Hexagram {
        number: 28,
        name: "大过",
        upper: Trigram::Dui,
        lower: Trigram::Xun,
        nature: "非常之行",
        judgement: "栋桡，利有攸往",
        image: "泽灭木，大过",
        cosmic_desc: "你正经历超越常规的考验。这是宇宙对强者的磨炼，以非常之勇行非常之事。",
    },
    Hexagram {
        number: 29,
        name: "坎",
        upper: Trigram::Kan,
        lower: Trigram::Kan,
        nature: "临险不惧",
        judgement: "习坎，有孚",
        image: "水洊至，习坎",
        cosmic_desc: "你的灵魂如水般坚韧，面对重重险阻依然从容流淌。以信念穿越暗夜，终见星河。",
    },
    Hexagram {
        number: 30,
        name: "离",
        upper: Trigram::Li,
        lower: Trigram::Li,
        nature: "光明附丽",
        judgement: "利贞亨，畜牝牛吉",
        image: "明两作，离",
        cosmic_desc: "你是光之使者，双重火焰照亮宇宙。依附正道而行，你的光芒将绵延不绝。",
    },
    Hexagram {
        number: 31,
        name: "咸",
        upper: Trigram::Dui,
        lower: Trigram::Gen,
        nature: "感应相通",
        judgement: "亨利贞，取女吉",
        image: "山上有泽，咸",
        cosmic_desc: "你的灵魂拥有强大的感应力，能与万物产生共鸣。开放心灵，让宇宙的讯息自由流通。",
    },
    Hexagram {
        number: 32,
        name: "恒",
        upper: Trigram::Zhen,
        lower: Trigram::Xun,
        nature: "恒久不变",
        judgement: "亨无咎利贞",
        image: "雷风恒",
        cosmic_desc: "你的灵魂拥有持之以恒的力量。在变幻的宇宙中，你是那颗不移的恒星。",
    },
    Hexagram {
        number: 33,
        name: "遁",
        upper: Trigram::Qian,
        lower: Trigram::Gen,
        nature: "适时退隐",
        judgement: "亨，小利贞",
        image: "天下有山，遁",
        cosmic_desc: "你懂得适时退一步的智慧。战略性的隐退不是逃避，而是蓄势待发的宇宙韬略。",
    },
    Hexagram {
        number: 34,
        name: "大壮",
        upper: Trigram::Zhen,
        lower: Trigram::Qian,
        nature: "阳刚壮盛",
        judgement: "利贞",
        image: "雷在天上，大壮",
        cosmic_desc: "你的能量正处于巅峰状态，如天雷滚滚。以正道引导这股力量，避免刚而过折。",
    },
    Hexagram {
        number: 35,
        name: "晋",
        upper: Trigram::Li,
        lower: Trigram::Kun,
        nature: "光明上进",
        judgement: "康侯用锡马蕃庶",
        image: "明出地上，晋",
        cosmic_desc: "你如旭日东升，前途一片光明。以大地的厚德为根基，你的光芒将不断上升。",
    },
    Hexagram {
        number: 36,
        name: "明夷",
        upper: Trigram::Kun,
        lower: Trigram::Li,
        nature: "韬光养晦",
        judgement: "利艰贞",
        image: "明入地中，明夷",
        cosmic_desc: "你的光芒暂时隐入大地之中。在黑暗中保持内心的光明，这是最高级的宇宙智慧。",
    },
    Hexagram {
        number: 37,
        name: "家人",
        upper: Trigram::Xun,
        lower: Trigram::Li,
        nature: "家道和睦",
        judgement: "利女贞",
        image: "风自火出，家人",
        cosmic_desc: "你的灵魂以家与归属为根基。从最亲密的关系出发，你的爱将如风般传播到更远处。",
    },
    Hexagram {
        number: 38,
        name: "睽",
        upper: Trigram::Li,
        lower: Trigram::Dui,
        nature: "异中求同",
        judgement: "小事吉",
        image: "上火下泽，睽",
        cosmic_desc: "你善于在差异中发现共通之处。对立并非矛盾，而是宇宙赋予你的多元视角。",
    },
    Hexagram {
        number: 39,
        name: "蹇",
        upper: Trigram::Kan,
        lower: Trigram::Gen,
        nature: "知难而进",
        judgement: "利西南，不利东北",
        image: "山上有水，蹇",
        cosmic_desc: "前路虽有险阻，但你拥有跋山涉水的勇气。反省自我，借助同伴，困难终将化解。",
    },
    Hexagram {
        number: 40,
        name: "解",
        upper: Trigram::Zhen,
        lower: Trigram::Kan,
        nature: "解除困厄",
        judgement: "利西南，无所往",
        image: "雷雨作，解",
        cosmic_desc: "如春雷化雨，你正在经历一场解脱。困扰消散，束缚解除，轻装上阵迎接新旅程。",
    },
    Hexagram {
        number: 41,
        name: "损",
        upper: Trigram::Gen,
        lower: Trigram::Dui,
        nature: "减损益上",
        judgement: "有孚，元吉",
        image: "山下有泽，损",
        cosmic_desc: "适度的舍弃是更高层次的获得。减去多余的执着，你的灵魂将变得更加轻盈通透。",
    },
    Hexagram {
        number: 42,
        name: "益",
        upper: Trigram::Xun,
        lower: Trigram::Zhen,
        nature: "增益进取",
        judgement: "利有攸往，利涉大川",
        image: "风雷益",
        cosmic_desc: "宇宙正在为你注入新的能量。抓住这个增益的窗口期，大胆行动，利涉大川。",
    },
    Hexagram {
        number: 43,
        name: "夬",
        upper: Trigram::Dui,
        lower: Trigram::Qian,
        nature: "果断决绝",
        judgement: "扬于王庭",
        image: "泽上于天，夬",
        cosmic_desc: "你正面临需要果断抉择的时刻。以正义之心做出决断，光明将驱散最后的阴霾。",
    },
    Hexagram {
        number: 44,
        name: "姤",
        upper: Trigram::Qian,
        lower: Trigram::Xun,
        nature: "不期而遇",
        judgement: "女壮，勿用取女",
        image: "天下有风，姤",
        cosmic_desc: "一股意想不到的力量正在接近。保持觉察，审慎对待每一次不期而遇的际会。",
    },
    Hexagram {
        number: 45,
        name: "萃",
        upper: Trigram::Dui,
        lower: Trigram::Kun,
        nature: "聚合汇萃",
        judgement: "亨，王假有庙",
        image: "泽上于地，萃",
        cosmic_desc: "你拥有汇聚众人的星际引力。以诚心为核心，你将吸引志同道合的灵魂聚集身旁。",
    },
    Hexagram {
        number: 46,
        name: "升",
        upper: Trigram::Kun,
        lower: Trigram::Xun,
        nature: "上升进步",
        judgement: "元亨，用见大人",
        image: "地中生木，升",
        cosmic_desc: "你如破土而出的大树，稳步上升。以谦逊和坚韧向上生长，终将触及更广阔的天际。",
    },
    Hexagram {
        number: 47,
        name: "困",
        upper: Trigram::Dui,
        lower: Trigram::Kan,
        nature: "困境磨炼",
        judgement: "亨贞，大人吉",
        image: "泽无水，困",
        cosmic_desc: "暂时的困顿是宇宙对你的考验。守住内心的光芒，以言行一致穿越困境。",
    },
    Hexagram {
        number: 48,
        name: "井",
        upper: Trigram::Kan,
        lower: Trigram::Xun,
        nature: "滋养不竭",
        judgement: "改邑不改井",
        image: "木上有水，井",
        cosmic_desc: "你的灵魂如一口深井，源源不断地滋养着周围。保持清澈纯净，你的价值永恒不变。",
    },
    Hexagram {
        number: 49,
        name: "革",
        upper: Trigram::Dui,
        lower: Trigram::Li,
        nature: "变革更新",
        judgement: "巳日乃孚，元亨利贞",
        image: "泽中有火，革",
        cosmic_desc: "你正处于深刻变革的宇宙节点。旧的秩序正在瓦解，新的可能正在诞生。拥抱变化。",
    },
    Hexagram {
        number: 50,
        name: "鼎",
        upper: Trigram::Li,
        lower: Trigram::Xun,
        nature: "鼎新革故",
        judgement: "元吉亨",
        image: "木上有火，鼎",
        cosmic_desc: "你如宝鼎般承载着转化的力量。将经验和智慧熔炼升华，你将创造出全新的价值。",
    },
    Hexagram {
        number: 51,
        name: "震",
        upper: Trigram::Zhen,
        lower: Trigram::Zhen,
        nature: "震动奋起",
        judgement: "亨，震来虩虩",
        image: "洊雷震",
        cosmic_desc: "双重震动激活了你灵魂中沉睡的力量。在震惊之后归于沉静，你将获得前所未有的清明。",
    },
    Hexagram {
        number: 52,
        name: "艮",
        upper: Trigram::Gen,
        lower: Trigram::Gen,
        nature: "止定沉静",
        judgement: "艮其背，不获其身",
        image: "兼山艮",
        cosmic_desc: "你的灵魂正在学习静止的艺术。该止则止，在宁静中找到真正的力量与智慧。",
    },
    Hexagram {
        number: 53,
        name: "渐",
        upper: Trigram::Xun,
        lower: Trigram::Gen,
        nature: "循序渐进",
        judgement: "女归吉，利贞",
        image: "山上有木，渐",
        cosmic_desc: "你如山上之木，循序渐进地成长。不急不躁，按照自然的节奏，你终将枝繁叶茂。",
    },
    Hexagram {
        number: 54,
        name: "归妹",
        upper: Trigram::Zhen,
        lower: Trigram::Dui,
        nature: "归宿依附",
        judgement: "征凶，无攸利",
        image: "泽上有雷，归妹",
        cosmic_desc: "你的灵魂在寻找归属和依附。明确自己的位置和角色，在关系中找到恰当的平衡。",
    },
    Hexagram {
        number: 55,
        name: "丰",
        upper: Trigram::Zhen,
        lower: Trigram::Li,
        nature: "丰盛光大",
        judgement: "亨，王假之",
        image: "雷电皆至，丰",
        cosmic_desc: "你正处于能量最丰沛的时刻，如雷电交加般壮丽。在丰盛中保持清醒，光大不骄。",
    },
    Hexagram {
        number: 56,
        name: "旅",
        upper: Trigram::Li,
        lower: Trigram::Gen,
        nature: "旅途修行",
        judgement: "小亨，旅贞吉",
        image: "山上有火，旅",
        cosmic_desc: "你是宇宙间的旅行者，在行走中修行。保持谦逊和谨慎，旅途中的每一步都是修炼。",
    },
    Hexagram {
        number: 57,
        name: "巽",
        upper: Trigram::Xun,
        lower: Trigram::Xun,
        nature: "柔顺渗透",
        judgement: "小亨，利有攸往",
        image: "随风巽",
        cosmic_desc: "你如风般柔顺而无孔不入。以温和而持续的力量渗透一切障碍，润物无声。",
    },
    Hexagram {
        number: 58,
        name: "兑",
        upper: Trigram::Dui,
        lower: Trigram::Dui,
        nature: "喜悦和谐",
        judgement: "亨利贞",
        image: "丽泽兑",
        cosmic_desc: "你的灵魂散发着愉悦与和谐的光辉。以喜悦感染世界，在分享中获得更大的幸福。",
    },
    Hexagram {
        number: 59,
        name: "涣",
        upper: Trigram::Xun,
        lower: Trigram::Kan,
        nature: "涣散重聚",
        judgement: "亨，王假有庙",
        image: "风行水上，涣",
        cosmic_desc: "打破固有的壁垒，让能量自由流动。涣散不是消亡，而是重新聚合前的必要释放。",
    },
    Hexagram {
        number: 60,
        name: "节",
        upper: Trigram::Kan,
        lower: Trigram::Dui,
        nature: "节制适度",
        judgement: "亨，苦节不可贞",
        image: "泽上有水，节",
        cosmic_desc: "你的灵魂正在学习节制的智慧。适度则吉，过犹不及。在限制中找到自由的真谛。",
    },
    Hexagram {
        number: 61,
        name: "中孚",
        upper: Trigram::Xun,
        lower: Trigram::Dui,
        nature: "诚信感化",
        judgement: "豚鱼吉，利涉大川",
        image: "泽上有风，中孚",
        cosmic_desc: "你以至诚之心感化万物。如风拂水面，内心的真诚是你最强大的宇宙力量。",
    },
    Hexagram {
        number: 62,
        name: "小过",
        upper: Trigram::Zhen,
        lower: Trigram::Gen,
        nature: "小有超越",
        judgement: "亨利贞，可小事",
        image: "山上有雷，小过",
        cosmic_desc: "你正在经历小范围的突破与超越。在细节处精进，谦逊行事，小过必有小成。",
    },
    Hexagram {
        number: 63,
        name: "既济",
        upper: Trigram::Kan,
        lower: Trigram::Li,
        nature: "功成有序",
        judgement: "亨小，利贞",
        image: "水在火上，既济",
        cosmic_desc: "你的各方面能量已趋于完成和平衡。在圆满中保持警觉，防微杜渐方能长久。",
    },
    Hexagram {
        number: 64,
        name: "未济",
        upper: Trigram::Li,
        lower: Trigram::Kan,
        nature: "未竟之志",
        judgement: "亨，小狐汔济",
        image: "火在水上，未济",
        cosmic_desc: "你正站在新旅程的起点，一切尚未完成。这是宇宙的提醒：最精彩的篇章还在前方。",
    },
];

/// (上卦 × 8 + 下卦) → 卦序，编译期由 [`HEXAGRAMS`] 生成
pub const HEXAGRAM_INDEX: [u8; 64] = build_hexagram_index();

const fn build_hexagram_index() -> [u8; 64] {
    let mut table = [0u8; 64];
    let mut i = 0;
    while i < HEXAGRAMS.len() {
        let hexagram = &HEXAGRAMS[i];
        table[hexagram.upper as usize * 8 + hexagram.lower as usize] = hexagram.number;
        i += 1;
    }
    table
}

/// 由上下卦查六十四卦
pub fn find_hexagram(upper: Trigram, lower: Trigram) -> &'static Hexagram {
    let number = HEXAGRAM_INDEX[upper.index() as usize * 8 + lower.index() as usize];
    find_hexagram_by_number(number)
}

/// 按卦序查卦，越界时返回乾卦
pub fn find_hexagram_by_number(number: u8) -> &'static Hexagram {
    match number {
        1..=64 => &HEXAGRAMS[(number - 1) as usize],
        _ => &HEXAGRAMS[0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hexagram_numbers_in_order() {
        for (i, hexagram) in HEXAGRAMS.iter().enumerate() {
            assert_eq!(hexagram.number as usize, i + 1);
        }
    }

    #[test]
    fn test_hexagram_index_covers_all_pairs() {
        let mut seen = [false; 65];
        for upper in Trigram::ALL {
            for lower in Trigram::ALL {
                let number = HEXAGRAM_INDEX[upper.index() as usize * 8 + lower.index() as usize];
                assert!((1..=64).contains(&number));
                assert!(!seen[number as usize], "卦序 {} 重复", number);
                seen[number as usize] = true;

                let hexagram = find_hexagram(upper, lower);
                assert_eq!(hexagram.upper, upper);
                assert_eq!(hexagram.lower, lower);
            }
        }
        assert!(seen[1..].iter().all(|s| *s));
    }

    #[test]
    fn test_find_hexagram() {
        assert_eq!(find_hexagram(Trigram::Qian, Trigram::Qian).name, "乾");
        assert_eq!(find_hexagram(Trigram::Kun, Trigram::Qian).name, "泰");
        assert_eq!(find_hexagram(Trigram::Kan, Trigram::Li).number, 63);
        assert_eq!(find_hexagram(Trigram::Li, Trigram::Kan).number, 64);
        assert_eq!(find_hexagram_by_number(0).number, 1);
        assert_eq!(find_hexagram_by_number(65).number, 1);
    }

    #[test]
    fn test_trigram_lines_unique() {
        for a in Trigram::ALL {
            assert_eq!(Trigram::from_lines(a.lines()), Some(a));
        }
        assert_eq!(Trigram::from_lines([2, 0, 0]), None);
        assert_eq!(Trigram::Zhen.lines(), [1, 0, 0]);
        assert_eq!(Trigram::Gen.lines(), [0, 0, 1]);
    }
}
