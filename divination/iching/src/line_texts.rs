//! # 三百八十四爻爻辞
//!
//! 按卦序排列，每卦六爻自初爻至上爻，附白话释义。

use crate::types::LineText;

/// 爻辞表，下标 = 卦序 - 1
pub const LINE_TEXTS: [[LineText; 6]; 64] = [
    // 1 乾
    [
        LineText { text: "潜龙勿用", interpretation: "力量尚在积蓄，宜静待时机" },
        LineText { text: "见龙在田，利见大人", interpretation: "才华初露，寻找引路之人" },
        LineText { text: "君子终日乾乾，夕惕若厉，无咎", interpretation: "保持警觉精进，方可无忧" },
        LineText { text: "或跃在渊，无咎", interpretation: "进退之间审慎抉择" },
        LineText { text: "飞龙在天，利见大人", interpretation: "能量巅峰，大展宏图之时" },
        LineText { text: "亢龙有悔", interpretation: "盛极必衰，知进退方为智" },
    ],
    // 2 坤
    [
        LineText { text: "履霜，坚冰至", interpretation: "见微知著，防患未然" },
        LineText { text: "直方大，不习无不利", interpretation: "以柔顺之德自然应对" },
        LineText { text: "含章可贞，或从王事，无成有终", interpretation: "韬光养晦，静待成就" },
        LineText { text: "括囊，无咎无誉", interpretation: "谨言慎行，守护内心" },
        LineText { text: "黄裳，元吉", interpretation: "守正中和，获至高福祉" },
        LineText { text: "龙战于野，其血玄黄", interpretation: "阴阳相争，需化解冲突" },
    ],
    // 3 屯
    [
        LineText { text: "磐桓，利居贞，利建侯", interpretation: "初始艰难，坚守方能立足" },
        LineText { text: "屯如邅如，乘马班如，匪寇婚媾", interpretation: "困境中坚持，终得善果" },
        LineText { text: "即鹿无虞，惟入于林中", interpretation: "莫追无望之事，放手为上" },
        LineText { text: "乘马班如，求婚媾，往吉", interpretation: "主动求助，化险为夷" },
        LineText { text: "屯其膏，小贞吉，大贞凶", interpretation: "小有积累，勿急于求成" },
        LineText { text: "乘马班如，泣血涟如", interpretation: "困顿之极，需转换思路" },
    ],
    // 4 蒙
    [
        LineText { text: "发蒙，利用刑人", interpretation: "教化蒙昧，需立规矩" },
        LineText { text: "包蒙吉，纳妇吉，子克家", interpretation: "包容接纳，方能育才" },
        LineText { text: "勿用取女，见金夫，不有躬", interpretation: "勿为虚华所惑，守本心" },
        LineText { text: "困蒙，吝", interpretation: "困于无知，需虚心求教" },
        LineText { text: "童蒙，吉", interpretation: "保持纯真求知，可获吉" },
        LineText { text: "击蒙，不利为寇，利御寇", interpretation: "以正道破执念，勿入歧途" },
    ],
    // 5 需
    [
        LineText { text: "需于郊，利用恒，无咎", interpretation: "远离纷扰，静心等待" },
        LineText { text: "需于沙，小有言，终吉", interpretation: "近处等待，小有波折终安" },
        LineText { text: "需于泥，致寇至", interpretation: "危险渐近，需提高警觉" },
        LineText { text: "需于血，出自穴", interpretation: "身陷险境，需待机脱身" },
        LineText { text: "需于酒食，贞吉", interpretation: "以平和之心待时而动" },
        LineText { text: "入于穴，有不速之客三人来，敬之终吉", interpretation: "意外助力降临，恭敬以待" },
    ],
    // 6 讼
    [
        LineText { text: "不永所事，小有言，终吉", interpretation: "及时止损，避免深陷" },
        LineText { text: "不克讼，归而逋", interpretation: "退让求和，保全己身" },
        LineText { text: "食旧德，贞厉，终吉", interpretation: "守住本分，不争功名" },
        LineText { text: "不克讼，复即命，渝安贞，吉", interpretation: "转变心态，化争为和" },
        LineText { text: "讼元吉", interpretation: "秉持公正，可获吉祥" },
        LineText { text: "或锡之鞶带，终朝三褫之", interpretation: "争得虚名终失，不如不争" },
    ],
    // 7 师
    [
        LineText { text: "师出以律，否臧凶", interpretation: "行动需有纪律，否则危险" },
        LineText { text: "在师中，吉无咎，王三锡命", interpretation: "居中协调，获得认可" },
        LineText { text: "师或舆尸，凶", interpretation: "执行不力，招致失败" },
        LineText { text: "师左次，无咎", interpretation: "战略撤退，保存实力" },
        LineText { text: "田有禽，利执言，无咎", interpretation: "由贤能者领导，方能成功" },
        LineText { text: "大君有命，开国承家，小人勿用", interpretation: "论功行赏，但需慎选人才" },
    ],
    // 8 比
    [
        LineText { text: "有孚比之，无咎", interpretation: "以诚相待，终获信任" },
        LineText { text: "比之自内，贞吉", interpretation: "从内心建立联结，吉祥" },
        LineText { text: "比之匪人", interpretation: "亲近不当之人，需警惕" },
        LineText { text: "外比之，贞吉", interpretation: "向外寻求盟友，可获吉" },
        LineText { text: "显比，王用三驱", interpretation: "光明磊落，不强求结盟" },
        LineText { text: "比之无首，凶", interpretation: "群龙无首，易生祸端" },
    ],
    // 9 小畜
    [
        LineText { text: "复自道，何其咎，吉", interpretation: "回归正途，无需自责" },
        LineText { text: "牵复，吉", interpretation: "被善缘牵引，得以回归" },
        LineText { text: "舆说辐，夫妻反目", interpretation: "前行受阻，关系生变" },
        LineText { text: "有孚，血去惕出，无咎", interpretation: "以诚化解危机，转危为安" },
        LineText { text: "有孚挛如，富以其邻", interpretation: "真诚凝聚众力，共享丰盛" },
        LineText { text: "既雨既处，尚德载", interpretation: "积累已满，暂缓前行为宜" },
    ],
    // 10 履
    [
        LineText { text: "素履，往无咎", interpretation: "以本真行事，可顺利前行" },
        LineText { text: "履道坦坦，幽人贞吉", interpretation: "守正道者安稳吉祥" },
        LineText { text: "眇能视，跛能履，履虎尾，咥人凶", interpretation: "能力不足强为之，危险" },
        LineText { text: "履虎尾，愬愬终吉", interpretation: "虽临险境，谨慎可得吉" },
        LineText { text: "夬履，贞厉", interpretation: "果决而行，需防过刚" },
        LineText { text: "视履考祥，其旋元吉", interpretation: "回顾经验，总结可获大吉" },
    ],
    // 11 泰
    [
        LineText { text: "拔茅茹，以其汇，征吉", interpretation: "携手同行，共创盛世" },
        LineText { text: "包荒，用冯河，不遐遗", interpretation: "包容广大，中正行事" },
        LineText { text: "无平不陂，无往不复", interpretation: "万物流转，守正应变" },
        LineText { text: "翩翩，不富以其邻，不戒以孚", interpretation: "以诚待人，财富共享" },
        LineText { text: "帝乙归妹，以祉元吉", interpretation: "谦卑联姻，获至高福祉" },
        LineText { text: "城复于隍，勿用师", interpretation: "盛极转衰，需内省自守" },
    ],
    // 12 否
    [
        LineText { text: "拔茅茹，以其汇，贞吉亨", interpretation: "结盟撤离，保存实力" },
        LineText { text: "包承，小人吉，大人否亨", interpretation: "顺应时势，韬光养晦" },
        LineText { text: "包羞", interpretation: "承受屈辱，等待转机" },
        LineText { text: "有命无咎，畴离祉", interpretation: "顺应天命，终获福祉" },
        LineText { text: "休否，大人吉", interpretation: "转危为安，但需常怀危机" },
        LineText { text: "倾否，先否后喜", interpretation: "困境终结，喜悦将至" },
    ],
    // 13 同人
    [
        LineText { text: "同人于门，无咎", interpretation: "在起点就开放包容" },
        LineText { text: "同人于宗，吝", interpretation: "仅限同类，格局太小" },
        LineText { text: "伏戎于莽，升其高陵，三岁不兴", interpretation: "暗藏敌意，难以和合" },
        LineText { text: "乘其墉，弗克攻，吉", interpretation: "放弃攻击，转向和解" },
        LineText { text: "同人，先号咷而后笑", interpretation: "经历波折后终获团结" },
        LineText { text: "同人于郊，无悔", interpretation: "广结善缘，无怨无悔" },
    ],
    // 14 大有
    [
        LineText { text: "无交害，匪咎，艰则无咎", interpretation: "初获丰盛，保持谦逊" },
        LineText { text: "大车以载，有攸往，无咎", interpretation: "承载丰盛，广泛分享" },
        LineText { text: "公用亨于天子，小人弗克", interpretation: "德行不足难守富贵" },
        LineText { text: "匪其彭，无咎", interpretation: "不显富炫耀，方能无咎" },
        LineText { text: "厥孚交如，威如，吉", interpretation: "以诚相交，建立威信" },
        LineText { text: "自天佑之，吉无不利", interpretation: "天降福泽，事事顺遂" },
    ],
    // 15 谦
    [
        LineText { text: "谦谦君子，用涉大川，吉", interpretation: "谦逊至极，可渡艰险" },
        LineText { text: "鸣谦，贞吉", interpretation: "美名在外，守正得吉" },
        LineText { text: "劳谦君子，有终吉", interpretation: "谦而有为，终获圆满" },
        LineText { text: "无不利，撝谦", interpretation: "谦卑处事，百事皆利" },
        LineText { text: "不富以其邻，利用侵伐", interpretation: "谦德服众，令行禁止" },
        LineText { text: "鸣谦，利用行师，征邑国", interpretation: "谦声远播，可成大事" },
    ],
    // 16 豫
    [
        LineText { text: "鸣豫，凶", interpretation: "过度欢愉，招致凶险" },
        LineText { text: "介于石，不终日，贞吉", interpretation: "保持警觉，不沉溺享乐" },
        LineText { text: "盱豫，悔，迟有悔", interpretation: "醉心逸乐，悔之已晚" },
        LineText { text: "由豫，大有得，勿疑", interpretation: "由此凝聚众力，共享成果" },
        LineText { text: "贞疾，恒不死", interpretation: "虽染顽疾，坚持可活" },
        LineText { text: "冥豫，成有渝，无咎", interpretation: "从迷醉中觉醒，可得解脱" },
    ],
    // 17 随
    [
        LineText { text: "官有渝，贞吉，出门交有功", interpretation: "改变方向，开放交流" },
        LineText { text: "系小子，失丈夫", interpretation: "择善而从，放弃不当" },
        LineText { text: "系丈夫，失小子，随有求得", interpretation: "跟随正道，必有所得" },
        LineText { text: "随有获，贞凶，有孚在道以明", interpretation: "随波逐流有险，守正则安" },
        LineText { text: "孚于嘉，吉", interpretation: "追随美善，吉祥如意" },
        LineText { text: "拘系之，乃从维之", interpretation: "坚定追随，获天命认可" },
    ],
    // 18 蛊
    [
        LineText { text: "干父之蛊，有子，考无咎", interpretation: "修复旧患，承担责任" },
        LineText { text: "干母之蛊，不可贞", interpretation: "处理遗留问题需柔和" },
        LineText { text: "干父之蛊，小有悔，无大咎", interpretation: "纠正前人错误，稍有遗憾" },
        LineText { text: "裕父之蛊，往见吝", interpretation: "宽容前人过失，勿苛责" },
        LineText { text: "干父之蛊，用誉", interpretation: "革新有功，获得赞誉" },
        LineText { text: "不事王侯，高尚其事", interpretation: "超脱世俗，追求更高境界" },
    ],
    // 19 临
    [
        LineText { text: "咸临，贞吉", interpretation: "感召众人，正道吉祥" },
        LineText { text: "咸临，吉，无不利", interpretation: "以感化力聚众，万事顺遂" },
        LineText { text: "甘临，无攸利，既忧之，无咎", interpretation: "以利诱人不长久，需警醒" },
        LineText { text: "至临，无咎", interpretation: "亲临现场，方能无误" },
        LineText { text: "知临，大君之宜，吉", interpretation: "以智慧领导，君王之道" },
        LineText { text: "敦临，吉，无咎", interpretation: "以厚道待人，终得吉祥" },
    ],
    // 20 观
    [
        LineText { text: "童观，小人无咎，君子吝", interpretation: "浅薄观察，难获深意" },
        LineText { text: "闚观，利女贞", interpretation: "窥探表象，格局受限" },
        LineText { text: "观我生，进退", interpretation: "观察自我，审时度势" },
        LineText { text: "观国之光，利用宾于王", interpretation: "见识更大格局，提升视野" },
        LineText { text: "观我生，君子无咎", interpretation: "反观自省，君子之道" },
        LineText { text: "观其生，君子无咎", interpretation: "观察他者，觉察万物" },
    ],
    // 21 噬嗑
    [
        LineText { text: "屦校灭趾，无咎", interpretation: "小受惩戒，防微杜渐" },
        LineText { text: "噬肤灭鼻，无咎", interpretation: "深层惩治，断除顽疾" },
        LineText { text: "噬腊肉，遇毒，小吝，无咎", interpretation: "处理积弊，遇阻但无妨" },
        LineText { text: "噬干胏，得金矢，利艰贞，吉", interpretation: "艰难决断，终获正果" },
        LineText { text: "噬干肉，得黄金，贞厉，无咎", interpretation: "坚定执行，虽险无咎" },
        LineText { text: "何校灭耳，凶", interpretation: "执法过度，招致凶险" },
    ],
    // 22 贲
    [
        LineText { text: "贲其趾，舍车而徒", interpretation: "不求虚饰，脚踏实地" },
        LineText { text: "贲其须", interpretation: "修饰外表，追随主流" },
        LineText { text: "贲如濡如，永贞吉", interpretation: "润泽修饰，持久方吉" },
        LineText { text: "贲如皤如，白马翰如", interpretation: "朴素纯净，获真诚相待" },
        LineText { text: "贲于丘园，束帛戋戋，吝，终吉", interpretation: "回归朴素，舍奢从简" },
        LineText { text: "白贲，无咎", interpretation: "返璞归真，本色无咎" },
    ],
    // 23 剥
    [
        LineText { text: "剥床以足，蔑贞凶", interpretation: "根基动摇，危险降临" },
        LineText { text: "剥床以辨，蔑贞凶", interpretation: "崩解加剧，难以维系" },
        LineText { text: "剥之，无咎", interpretation: "顺应剥落，放手为安" },
        LineText { text: "剥床以肤，凶", interpretation: "侵蚀切肤，凶险至极" },
        LineText { text: "贯鱼，以宫人宠，无不利", interpretation: "以柔顺应对，化险为夷" },
        LineText { text: "硕果不食，君子得舆，小人剥庐", interpretation: "保留核心，待来年重生" },
    ],
    // 24 复
    [
        LineText { text: "不远复，无祗悔，元吉", interpretation: "及时回归，无悔大吉" },
        LineText { text: "休复，吉", interpretation: "止息妄念，回归安宁" },
        LineText { text: "频复，厉无咎", interpretation: "反复犹豫，终能回归" },
        LineText { text: "中行独复", interpretation: "独自醒悟，回归正道" },
        LineText { text: "敦复，无悔", interpretation: "笃定归来，无怨无悔" },
        LineText { text: "迷复，凶，有灾眚", interpretation: "迷失太久，难以挽回" },
    ],
    // 25 无妄
    [
        LineText { text: "无妄，往吉", interpretation: "纯真而行，顺利前进" },
        LineText { text: "不耕获，不菑畲，则利有攸往", interpretation: "不妄求回报，自有收获" },
        LineText { text: "无妄之灾，或系之牛", interpretation: "无妄遭难，非己之过" },
        LineText { text: "可贞，无咎", interpretation: "守住本心，可得无咎" },
        LineText { text: "无妄之疾，勿药有喜", interpretation: "本无病患，无需妄治" },
        LineText { text: "无妄，行有眚，无攸利", interpretation: "失去真诚，行事多阻" },
    ],
    // 26 大畜
    [
        LineText { text: "有厉，利已", interpretation: "遇险即止，保存积蓄" },
        LineText { text: "舆说輹", interpretation: "止步等待，蓄势待发" },
        LineText { text: "良马逐，利艰贞", interpretation: "精进修习，方可前行" },
        LineText { text: "童牛之牿，元吉", interpretation: "及早规范，可获大吉" },
        LineText { text: "豮豕之牙，吉", interpretation: "去其锋芒，转危为安" },
        LineText { text: "何天之衢，亨", interpretation: "积蓄圆满，通达天际" },
    ],
    // 27 颐
    [
        LineText { text: "舍尔灵龟，观我朵颐，凶", interpretation: "舍本逐末，自招凶险" },
        LineText { text: "颠颐，拂经，于丘颐，征凶", interpretation: "养育之道需循正理" },
        LineText { text: "拂颐，贞凶，十年勿用", interpretation: "违背正道滋养，无益" },
        LineText { text: "颠颐，吉，虎视眈眈", interpretation: "以正道养人，可获吉" },
        LineText { text: "拂经，居贞吉，不可涉大川", interpretation: "守住原则滋养，暂勿冒险" },
        LineText { text: "由颐，厉吉，利涉大川", interpretation: "养育大众，可成大业" },
    ],
    // 28 大过
    [
        LineText { text: "藉用白茅，无咎", interpretation: "谨慎行事，以敬化险" },
        LineText { text: "枯杨生稊，老夫得其女妻", interpretation: "枯木逢春，重获生机" },
        LineText { text: "栋桡，凶", interpretation: "栋梁弯折，危机深重" },
        LineText { text: "栋隆，吉，有它吝", interpretation: "力挽狂澜，虽吉有忧" },
        LineText { text: "枯杨生华，老妇得其士夫", interpretation: "强撑外表，难以持久" },
        LineText { text: "过涉灭顶，凶，无咎", interpretation: "冒险过度，虽败无悔" },
    ],
    // 29 坎
    [
        LineText { text: "习坎，入于坎窞，凶", interpretation: "陷入困境，越陷越深" },
        LineText { text: "坎有险，求小得", interpretation: "险中求生，小有所获" },
        LineText { text: "来之坎坎，险且枕，入于坎窞", interpretation: "前后皆险，暂勿妄动" },
        LineText { text: "樽酒簋贰，用缶，纳约自牖", interpretation: "简朴诚恳，可化险为夷" },
        LineText { text: "坎不盈，祗既平，无咎", interpretation: "险境未满，顺应即平" },
        LineText { text: "系用徽纆，寘于丛棘，三岁不得", interpretation: "深陷囹圄，难以脱困" },
    ],
    // 30 离
    [
        LineText { text: "履错然，敬之无咎", interpretation: "谨慎应对变化，保持敬畏" },
        LineText { text: "黄离，元吉", interpretation: "中正光明，大吉大利" },
        LineText { text: "日昃之离，不鼓缶而歌", interpretation: "辉煌已过，需看破放下" },
        LineText { text: "突如其来如，焚如，死如，弃如", interpretation: "盛极而衰，瞬间陨落" },
        LineText { text: "出涕沱若，戚嗟若，吉", interpretation: "哀伤之中，反思得吉" },
        LineText { text: "王用出征，有嘉折首", interpretation: "以正义之师，扫除邪恶" },
    ],
    // 31 咸
    [
        LineText { text: "咸其拇", interpretation: "初有感应，尚需等待" },
        LineText { text: "咸其腓，凶，居吉", interpretation: "冲动妄动则凶，守静为吉" },
        LineText { text: "咸其股，执其随，往吝", interpretation: "盲目追随，难获善果" },
        LineText { text: "贞吉，悔亡，憧憧往来", interpretation: "心念专一，感召同道" },
        LineText { text: "咸其脢，无悔", interpretation: "感而不动，保持自持" },
        LineText { text: "咸其辅颊舌", interpretation: "仅靠言语，难以动人" },
    ],
    // 32 恒
    [
        LineText { text: "浚恒，贞凶，无攸利", interpretation: "急于求成，反而有害" },
        LineText { text: "悔亡", interpretation: "恒久坚持，悔恨消散" },
        LineText { text: "不恒其德，或承之羞", interpretation: "不能恒久，招致羞辱" },
        LineText { text: "田无禽", interpretation: "守恒无获，需调整方向" },
        LineText { text: "恒其德贞，妇人吉，夫子凶", interpretation: "固守不变，需因时制宜" },
        LineText { text: "振恒，凶", interpretation: "恒久过度，动荡不安" },
    ],
    // 33 遁
    [
        LineText { text: "遯尾，厉，勿用有攸往", interpretation: "退避太慢，陷入险境" },
        LineText { text: "执之用黄牛之革，莫之胜说", interpretation: "坚守本心，不被诱惑" },
        LineText { text: "系遯，有疾厉", interpretation: "欲退不能，需断舍离" },
        LineText { text: "好遯，君子吉，小人否", interpretation: "善于退隐，君子之道" },
        LineText { text: "嘉遯，贞吉", interpretation: "从容隐退，正道吉祥" },
        LineText { text: "肥遯，无不利", interpretation: "彻底超脱，万事皆利" },
    ],
    // 34 大壮
    [
        LineText { text: "壮于趾，征凶，有孚", interpretation: "初有强势，冒进则凶" },
        LineText { text: "贞吉", interpretation: "守正而壮，可获吉祥" },
        LineText { text: "小人用壮，君子用罔", interpretation: "逞强硬碰，反受其害" },
        LineText { text: "贞吉，悔亡，藩决不羸", interpretation: "刚柔并济，可破困局" },
        LineText { text: "丧羊于易，无悔", interpretation: "舍弃强势，反得自在" },
        LineText { text: "羝羊触藩，不能退，不能遂", interpretation: "进退两难，守艰可解" },
    ],
    // 35 晋
    [
        LineText { text: "晋如摧如，贞吉", interpretation: "进而复退，保持宽裕" },
        LineText { text: "晋如愁如，贞吉", interpretation: "虽有忧虑，坚持得福" },
        LineText { text: "众允，悔亡", interpretation: "众人信任，前进无悔" },
        LineText { text: "晋如鼫鼠，贞厉", interpretation: "似鼠窃进，终有危险" },
        LineText { text: "悔亡，失得勿恤，往吉", interpretation: "放下得失，勇往直前" },
        LineText { text: "晋其角，维用伐邑", interpretation: "强势进取，需防过刚" },
    ],
    // 36 明夷
    [
        LineText { text: "明夷于飞，垂其翼", interpretation: "韬光养晦，忍辱负重" },
        LineText { text: "明夷，夷于左股，用拯马壮，吉", interpretation: "明伤暗救，自保待时" },
        LineText { text: "明夷于南狩，得其大首", interpretation: "暗中积蓄，终获转机" },
        LineText { text: "入于左腹，获明夷之心", interpretation: "洞悉暗昧，果断脱离" },
        LineText { text: "箕子之明夷，利贞", interpretation: "内明外晦，守正自保" },
        LineText { text: "不明晦，初登于天，后入于地", interpretation: "极盛转暗，需有自知" },
    ],
    // 37 家人
    [
        LineText { text: "闲有家，悔亡", interpretation: "从家庭做起，建立秩序" },
        LineText { text: "无攸遂，在中馈，贞吉", interpretation: "各司其职，守住本分" },
        LineText { text: "家人嗃嗃，悔厉吉", interpretation: "严格治家，勿过度放纵" },
        LineText { text: "富家，大吉", interpretation: "家业兴旺，大吉之兆" },
        LineText { text: "王假有家，勿恤，吉", interpretation: "以身作则，感化家人" },
        LineText { text: "有孚威如，终吉", interpretation: "诚信树威，终获和睦" },
    ],
    // 38 睽
    [
        LineText { text: "悔亡，丧马勿逐，自复", interpretation: "暂别求同，容纳差异" },
        LineText { text: "遇主于巷，无咎", interpretation: "偶遇同道，化解隔阂" },
        LineText { text: "见舆曳，其牛掣", interpretation: "历经磨难，终得和合" },
        LineText { text: "睽孤，遇元夫，交孚", interpretation: "在孤独中寻得知音" },
        LineText { text: "悔亡，厥宗噬肤，往何咎", interpretation: "回归本源，消解对立" },
        LineText { text: "睽孤，见豕负涂，载鬼一车", interpretation: "疑云散去，误会冰释" },
    ],
    // 39 蹇
    [
        LineText { text: "往蹇来誉", interpretation: "暂缓前进，反思得誉" },
        LineText { text: "王臣蹇蹇，匪躬之故", interpretation: "为公忘私，虽难无悔" },
        LineText { text: "往蹇来反", interpretation: "知难而退，回归修整" },
        LineText { text: "往蹇来连", interpretation: "前遇险阻，需携手共进" },
        LineText { text: "大蹇朋来", interpretation: "艰难之时，盟友相助" },
        LineText { text: "往蹇来硕，吉，利见大人", interpretation: "克服困难，终获硕果" },
    ],
    // 40 解
    [
        LineText { text: "无咎", interpretation: "解脱初现，无忧无咎" },
        LineText { text: "田获三狐，得黄矢，贞吉", interpretation: "扫除障碍，获得正道" },
        LineText { text: "负且乘，致寇至，贞吝", interpretation: "不当负重，招致麻烦" },
        LineText { text: "解而拇，朋至斯孚", interpretation: "放下执着，诚意感召" },
        LineText { text: "君子维有解，吉", interpretation: "君子以德化小人" },
        LineText { text: "公用射隼于高墉之上，获之", interpretation: "果断除害，万事顺遂" },
    ],
    // 41 损
    [
        LineText { text: "已事遄往，无咎，酌损之", interpretation: "速成己事，适度减损" },
        LineText { text: "利贞，征凶，弗损益之", interpretation: "守正为利，减损反增" },
        LineText { text: "三人行则损一人，一人行则得其友", interpretation: "精简团队，方得知己" },
        LineText { text: "损其疾，使遄有喜，无咎", interpretation: "去除病患，速得喜悦" },
        LineText { text: "或益之十朋之龟，弗克违，元吉", interpretation: "减损换来天降福泽" },
        LineText { text: "弗损益之，无咎，贞吉", interpretation: "减损至极反得增益" },
    ],
    // 42 益
    [
        LineText { text: "利用为大作，元吉，无咎", interpretation: "顺势增益，可成大业" },
        LineText { text: "或益之十朋之龟，弗克违", interpretation: "受赐天福，长久吉祥" },
        LineText { text: "益之用凶事，无咎，有孚中行", interpretation: "在危难中施益，获信" },
        LineText { text: "中行告公从，利用为依迁国", interpretation: "顺应增益，可迁移造福" },
        LineText { text: "有孚惠心，勿问元吉", interpretation: "以诚心施惠，获元吉" },
        LineText { text: "莫益之，或击之，立心勿恒，凶", interpretation: "不增反损，摇摆不定" },
    ],
    // 43 夬
    [
        LineText { text: "壮于前趾，往不胜为咎", interpretation: "操之过急，反为过失" },
        LineText { text: "惕号，莫夜有戎，勿恤", interpretation: "保持警觉，防患未然" },
        LineText { text: "壮于頄，有凶", interpretation: "刚决过度，独行可免咎" },
        LineText { text: "臀无肤，其行次且", interpretation: "进退不定，需坚定决断" },
        LineText { text: "苋陆夬夬，中行无咎", interpretation: "坚决果断，守中道无咎" },
        LineText { text: "无号，终有凶", interpretation: "失去警觉，终至凶险" },
    ],
    // 44 姤
    [
        LineText { text: "系于金柅，贞吉", interpretation: "坚守原则，勿被诱惑" },
        LineText { text: "包有鱼，无咎，不利宾", interpretation: "内部资源，勿轻易外泄" },
        LineText { text: "臀无肤，其行次且，厉", interpretation: "行进艰难，虽险无大害" },
        LineText { text: "包无鱼，起凶", interpretation: "失去根基，危机四起" },
        LineText { text: "以杞包瓜，含章，有陨自天", interpretation: "韬光养晦，天降福泽" },
        LineText { text: "姤其角，吝，无咎", interpretation: "强势相遇，虽有遗憾无咎" },
    ],
    // 45 萃
    [
        LineText { text: "有孚不终，乃乱乃萃", interpretation: "聚合有变，坦诚沟通化解" },
        LineText { text: "引吉，无咎，孚乃利用禴", interpretation: "引导聚合，诚信获吉" },
        LineText { text: "萃如嗟如，无攸利", interpretation: "聚而生怨，需调和众心" },
        LineText { text: "大吉，无咎", interpretation: "大规模聚合，吉无咎" },
        LineText { text: "萃有位，无咎，匪孚", interpretation: "以位聚众，需以德服人" },
        LineText { text: "赍咨涕洟，无咎", interpretation: "聚散由心，悲喜无咎" },
    ],
    // 46 升
    [
        LineText { text: "允升，大吉", interpretation: "顺势上升，大吉大利" },
        LineText { text: "孚乃利用禴，无咎", interpretation: "以诚晋升，简朴为贵" },
        LineText { text: "升虚邑", interpretation: "顺势而升，轻松推进" },
        LineText { text: "王用亨于岐山，吉，无咎", interpretation: "得时得地，晋升无阻" },
        LineText { text: "贞吉，升阶", interpretation: "守正稳升，步步登高" },
        LineText { text: "冥升，利于不息之贞", interpretation: "不懈努力，终达巅峰" },
    ],
    // 47 困
    [
        LineText { text: "臀困于株木，入于幽谷", interpretation: "陷入困顿，久不见光" },
        LineText { text: "困于酒食，朱绂方来", interpretation: "困于享乐，守静为宜" },
        LineText { text: "困于石，据于蒺藜", interpretation: "困境加深，失所依靠" },
        LineText { text: "来徐徐，困于金车，吝，有终", interpretation: "脱困缓慢，终有转机" },
        LineText { text: "劓刖，困于赤绂，乃徐有说", interpretation: "身处屈辱，静待解脱" },
        LineText { text: "困于葛藟，于臲卼", interpretation: "困至极点，反而得生" },
    ],
    // 48 井
    [
        LineText { text: "井泥不食，旧井无禽", interpretation: "井水混浊，无人取用" },
        LineText { text: "井谷射鲋，瓮敝漏", interpretation: "井底陈旧，器具破损" },
        LineText { text: "井渫不食，为我心恻", interpretation: "清理之井无人用，可惜" },
        LineText { text: "井甃，无咎", interpretation: "修缮水井，保障供给" },
        LineText { text: "井冽，寒泉食", interpretation: "井水清冽，可供饮用" },
        LineText { text: "井收勿幕，有孚元吉", interpretation: "井水开放共享，大吉" },
    ],
    // 49 革
    [
        LineText { text: "巩用黄牛之革", interpretation: "时机未到，暂缓变革" },
        LineText { text: "已日乃革之，征吉，无咎", interpretation: "择日变革，可获吉祥" },
        LineText { text: "征凶，贞厉，革言三就，有孚", interpretation: "反复酝酿，方可革新" },
        LineText { text: "悔亡，有孚改命，吉", interpretation: "革新有据，顺应天命" },
        LineText { text: "大人虎变，未占有孚", interpretation: "彻底蜕变，众人信服" },
        LineText { text: "君子豹变，小人革面", interpretation: "渐进改变，守正为宜" },
    ],
    // 50 鼎
    [
        LineText { text: "鼎颠趾，利出否", interpretation: "革故鼎新，去旧迎新" },
        LineText { text: "鼎有实，我仇有疾，不我能即，吉", interpretation: "内有充实，外难侵扰" },
        LineText { text: "鼎耳革，其行塞", interpretation: "暂遇阻碍，耐心待时" },
        LineText { text: "鼎折足，覆公餗，其形渥，凶", interpretation: "承载不力，倾覆责任" },
        LineText { text: "鼎黄耳金铉，利贞", interpretation: "稳固平衡，守正得利" },
        LineText { text: "鼎玉铉，大吉，无不利", interpretation: "至高品质，万事大吉" },
    ],
    // 51 震
    [
        LineText { text: "震来虩虩，后笑言哑哑，吉", interpretation: "震惊过后，反思得吉" },
        LineText { text: "震来厉，亿丧贝，跻于九陵", interpretation: "震动失财，守静可复" },
        LineText { text: "震苏苏，震行无眚", interpretation: "震中保持清醒，可免灾" },
        LineText { text: "震遂泥", interpretation: "震后陷入泥沼，难行" },
        LineText { text: "震往来厉，亿无丧，有事", interpretation: "震荡反复，守住根本" },
        LineText { text: "震索索，视矍矍，征凶", interpretation: "过度惊恐，需调整心态" },
    ],
    // 52 艮
    [
        LineText { text: "艮其趾，无咎，利永贞", interpretation: "及时止步，长久守正" },
        LineText { text: "艮其腓，不拯其随", interpretation: "想止不能，内心纠结" },
        LineText { text: "艮其限，列其夤，厉熏心", interpretation: "强行止步，内心煎熬" },
        LineText { text: "艮其身，无咎", interpretation: "反求诸己，可得无咎" },
        LineText { text: "艮其辅，言有序，悔亡", interpretation: "慎言守序，悔恨消散" },
        LineText { text: "敦艮，吉", interpretation: "笃定止步，吉祥如意" },
    ],
    // 53 渐
    [
        LineText { text: "鸿渐于干，小子厉，有言，无咎", interpretation: "起步艰难，虽有非议无妨" },
        LineText { text: "鸿渐于磐，饮食衎衎，吉", interpretation: "稳步推进，安乐自得" },
        LineText { text: "鸿渐于陆，夫征不复", interpretation: "进退失据，需防外患" },
        LineText { text: "鸿渐于木，或得其桷，无咎", interpretation: "寻得栖息，暂获安稳" },
        LineText { text: "鸿渐于陵，妇三岁不孕，终莫之胜，吉", interpretation: "虽经磨难，终获圆满" },
        LineText { text: "鸿渐于陆，其羽可用为仪，吉", interpretation: "渐进至极，德行圆满" },
    ],
    // 54 归妹
    [
        LineText { text: "归妹以娣，跛能履，征吉", interpretation: "以次位前行，可获吉祥" },
        LineText { text: "眇能视，利幽人之贞", interpretation: "虽有不足，守静为利" },
        LineText { text: "归妹以须，反归以娣", interpretation: "期望过高，需调整定位" },
        LineText { text: "归妹愆期，迟归有时", interpretation: "静待时机，勿急于求成" },
        LineText { text: "帝乙归妹，其君之袂不如其娣之袂良", interpretation: "内涵胜于华丽，可得吉" },
        LineText { text: "女承筐无实，士刲羊无血", interpretation: "徒有形式，缺乏真心" },
    ],
    // 55 丰
    [
        LineText { text: "遇其配主，虽旬无咎，往有尚", interpretation: "遇到同道，共创丰盛" },
        LineText { text: "丰其蔀，日中见斗", interpretation: "虽有阻碍，诚心化解" },
        LineText { text: "丰其沛，日中见沬", interpretation: "丰盛过度，受损无咎" },
        LineText { text: "丰其蔀，日中见斗，遇其夷主，吉", interpretation: "困难中遇贵人相助" },
        LineText { text: "来章，有庆誉，吉", interpretation: "美好显现，获得赞誉" },
        LineText { text: "丰其屋，蔀其家", interpretation: "丰盛中孤立，终至凶险" },
    ],
    // 56 旅
    [
        LineText { text: "旅琐琐，斯其所取灾", interpretation: "旅途琐碎，自招烦扰" },
        LineText { text: "旅即次，怀其资，得童仆贞", interpretation: "旅中有所，稳步前行" },
        LineText { text: "旅焚其次，丧其童仆，贞厉", interpretation: "旅途失所，危险加剧" },
        LineText { text: "旅于处，得其资斧", interpretation: "暂有安顿，内心不安" },
        LineText { text: "射雉一矢亡，终以誉命", interpretation: "舍小获大，终得美誉" },
        LineText { text: "鸟焚其巢，旅人先笑后号咷", interpretation: "乐极生悲，终至凶险" },
    ],
    // 57 巽
    [
        LineText { text: "进退，利武人之贞", interpretation: "进退审慎，坚定为宜" },
        LineText { text: "巽在床下，用史巫纷若，吉", interpretation: "谦卑请教，可获指引" },
        LineText { text: "频巽，吝", interpretation: "过度柔顺，失去主见" },
        LineText { text: "悔亡，田获三品", interpretation: "悔恨消散，收获丰厚" },
        LineText { text: "贞吉，悔亡，无不利", interpretation: "谨慎变通，终获圆满" },
        LineText { text: "巽在床下，丧其资斧，贞凶", interpretation: "过度谦卑，失去根本" },
    ],
    // 58 兑
    [
        LineText { text: "和兑，吉", interpretation: "和悦交流，吉祥如意" },
        LineText { text: "孚兑，吉，悔亡", interpretation: "以诚相待，悔恨消散" },
        LineText { text: "来兑，凶", interpretation: "强求欢悦，反致凶险" },
        LineText { text: "商兑未宁，介疾有喜", interpretation: "商议和悦，化解病患" },
        LineText { text: "孚于剥，有厉", interpretation: "信任剥蚀者，有危险" },
        LineText { text: "引兑", interpretation: "引导和悦，顺势而为" },
    ],
    // 59 涣
    [
        LineText { text: "用拯马壮，吉", interpretation: "借力突破，及时分散" },
        LineText { text: "涣奔其机，悔亡", interpretation: "奔向根本，悔恨消散" },
        LineText { text: "涣其躬，无悔", interpretation: "放下执着，无怨无悔" },
        LineText { text: "涣其群，元吉", interpretation: "打破藩篱，成就大业" },
        LineText { text: "涣汗其大号，涣王居，无咎", interpretation: "发布号令，统合涣散" },
        LineText { text: "涣其血，去逖出，无咎", interpretation: "远离伤害，涣散而出" },
    ],
    // 60 节
    [
        LineText { text: "不出户庭，无咎", interpretation: "知晓限度，守住本分" },
        LineText { text: "不出门庭，凶", interpretation: "过度自限，失去机会" },
        LineText { text: "不节若，则嗟若，无咎", interpretation: "不知节制，悔之晚矣" },
        LineText { text: "安节，亨", interpretation: "安于节制，通达顺畅" },
        LineText { text: "甘节，吉，往有尚", interpretation: "乐于节制，可成大事" },
        LineText { text: "苦节，贞凶，悔亡", interpretation: "节制过苦，需调和适度" },
    ],
    // 61 中孚
    [
        LineText { text: "虞吉，有它不燕", interpretation: "诚信为本，方得安宁" },
        LineText { text: "鸣鹤在阴，其子和之", interpretation: "内心呼应，诚意相通" },
        LineText { text: "得敌，或鼓或罢，或泣或歌", interpretation: "真诚相待，喜忧与共" },
        LineText { text: "月几望，马匹亡，无咎", interpretation: "近乎圆满，舍小保大" },
        LineText { text: "有孚挛如，无咎", interpretation: "至诚凝聚，无咎无忧" },
        LineText { text: "翰音登于天，贞凶", interpretation: "空言无实，终至凶险" },
    ],
    // 62 小过
    [
        LineText { text: "飞鸟以凶", interpretation: "过度小心，反致凶险" },
        LineText { text: "过其祖，遇其妣", interpretation: "恰当越级，把握分寸" },
        LineText { text: "弗过防之，从或戕之，凶", interpretation: "防范不足，遭受伤害" },
        LineText { text: "无咎，弗过遇之，往厉必戒", interpretation: "适度而行，勿固守不变" },
        LineText { text: "密云不雨，自我西郊", interpretation: "小有积蓄，终有收获" },
        LineText { text: "弗遇过之，飞鸟离之，凶", interpretation: "过犹不及，招致灾祸" },
    ],
    // 63 既济
    [
        LineText { text: "曳其轮，濡其尾，无咎", interpretation: "已成之初，谨慎保持" },
        LineText { text: "妇丧其茀，勿逐，七日得", interpretation: "小有损失，静待自复" },
        LineText { text: "高宗伐鬼方，三年克之", interpretation: "成后图远，需贤能之士" },
        LineText { text: "繻有衣袽，终日戒", interpretation: "盛中防衰，时刻警觉" },
        LineText { text: "东邻杀牛，不如西邻之禴祭", interpretation: "真诚胜奢华，可获福" },
        LineText { text: "濡其首，厉", interpretation: "沉溺成就，危机暗涌" },
    ],
    // 64 未济
    [
        LineText { text: "濡其尾，吝", interpretation: "即将成功，勿急躁冒进" },
        LineText { text: "曳其轮，贞吉", interpretation: "稳步推进，守正得吉" },
        LineText { text: "未济，征凶，利涉大川", interpretation: "未竟之时，积极筹划" },
        LineText { text: "贞吉，悔亡，震用伐鬼方", interpretation: "坚持努力，终获嘉奖" },
        LineText { text: "贞吉，无悔，君子之光，有孚", interpretation: "光明磊落，诚信得吉" },
        LineText { text: "有孚于饮酒，无咎", interpretation: "庆祝勿过，守住诚信" },
    ],
];
