//! # 引擎单元测试

use crate::{mock::*, *};
use frame_support::{assert_err, assert_ok};

fn engine() -> DivinationEngine<Test> {
    DivinationEngine::new()
}

// ==================== 校验 ====================

#[test]
fn test_rejects_invalid_birth_input() {
    let engine = engine();
    assert_err!(engine.create_chart(&BirthInput::new(1990, 13, 1, None)), Error::InvalidMonth);
    assert_err!(engine.create_chart(&BirthInput::new(1990, 0, 1, None)), Error::InvalidMonth);
    assert_err!(engine.create_chart(&BirthInput::new(1990, 2, 30, None)), Error::InvalidDay);
    assert_err!(engine.create_chart(&BirthInput::new(1990, 4, 0, None)), Error::InvalidDay);
    assert_err!(engine.create_chart(&BirthInput::new(1990, 5, 15, Some(24))), Error::InvalidHour);
    assert_err!(
        engine.create_chart(&BirthInput::new(1990, 5, 15, None).with_time(14, 60)),
        Error::InvalidMinute
    );
}

#[test]
fn test_year_range_follows_config() {
    let engine = engine();
    assert_err!(engine.create_chart(&BirthInput::new(1949, 5, 15, None)), Error::InvalidYear);
    assert_err!(engine.create_chart(&BirthInput::new(2051, 5, 15, None)), Error::InvalidYear);
    assert_ok!(engine.create_chart(&BirthInput::new(1950, 1, 1, None)));
    assert_ok!(engine.create_chart(&BirthInput::new(2050, 12, 31, None)));

    // 默认配置放宽到 1900-2100
    let default_engine = DivinationEngine::<DefaultConfig>::new();
    assert_ok!(default_engine.create_chart(&BirthInput::new(1900, 3, 1, None)));
    assert_err!(default_engine.create_chart(&BirthInput::new(2101, 1, 1, None)), Error::InvalidYear);
}

#[test]
fn test_leap_day() {
    let engine = engine();
    assert_ok!(engine.create_chart(&BirthInput::new(2000, 2, 29, None)));
    assert_err!(engine.create_chart(&BirthInput::new(2001, 2, 29, None)), Error::InvalidDay);
}

#[test]
fn test_rejects_invalid_location() {
    let engine = engine();
    let input = BirthInput::new(1990, 5, 15, None).with_time(14, 30);
    assert_err!(engine.create_chart(&input.with_solar(18_000_001, 480)), Error::InvalidLongitude);
    assert_err!(engine.create_chart(&input.with_solar(11_640_000, 900)), Error::InvalidTimezone);
    assert_err!(engine.create_chart(&input.with_solar(11_640_000, -721)), Error::InvalidTimezone);
    assert_ok!(engine.create_chart(&input.with_solar(-18_000_000, -720)));
}

#[test]
fn test_rejects_invalid_personality() {
    let mut engine = engine();
    let chart = engine.create_chart(&birth_1990()).unwrap();

    let mut personality = personality_a();
    personality.enneagram.enneagram_type = 0;
    assert_err!(engine.cast_hexagram(&chart, &personality), Error::InvalidPersonality);

    let mut personality = personality_a();
    personality.big5.percentages.o = 100.5;
    assert_err!(engine.cast_hexagram(&chart, &personality), Error::InvalidPersonality);

    let mut personality = personality_a();
    personality.mbti.dimensions.ei = f64::NAN;
    assert_err!(engine.cast_hexagram(&chart, &personality), Error::InvalidPersonality);

    let mut personality = personality_a();
    personality.mbti.type_code = "ABCD".into();
    assert_err!(engine.cast_hexagram(&chart, &personality), Error::InvalidPersonality);

    assert_eq!(engine.cached_casts(), 0);
}

#[test]
fn test_rejects_out_of_range_chart() {
    let mut engine = engine();
    let mut chart = engine.create_chart(&birth_1990()).unwrap();
    chart.sizhu.day.gan = stardust_bazi::TianGan(10);
    assert_err!(engine.cast_hexagram(&chart, &personality_a()), Error::InvalidChart);
}

// ==================== 排盘 ====================

#[test]
fn test_default_hour_when_missing() {
    let engine = engine();
    let chart = engine.create_chart(&BirthInput::new(1990, 5, 15, None)).unwrap();
    assert_eq!(chart.hour, 12);
    assert_eq!(chart.sizhu.hour.name(), "甲午");

    // 没有具体时间时忽略出生地
    let chart = engine.create_chart(&BirthInput::new(1990, 5, 15, None).with_solar(8_760_000, 480)).unwrap();
    assert_eq!(chart.hour, 12);
    assert_eq!(chart.solar_time, None);
}

#[test]
fn test_chart_with_solar_time() {
    let engine = engine();
    let input = BirthInput::new(1990, 1, 1, None).with_time(0, 30).with_solar(8_760_000, 480);
    let chart = engine.create_chart(&input).unwrap();
    // 修正跨到前一日，只影响时辰
    assert_eq!((chart.year, chart.month, chart.day, chart.hour), (1990, 1, 1, 22));
    assert_eq!(chart.sizhu.day.name(), "壬戌");
    assert_eq!(chart.sizhu.hour.name(), "辛亥");
    let info = chart.solar_time.unwrap();
    assert_eq!((info.solar_year, info.solar_month, info.solar_day), (1989, 12, 31));

    // 不带出生地时按钟表时间排盘
    let plain = engine.create_chart(&BirthInput::new(1990, 1, 1, None).with_time(0, 30)).unwrap();
    assert_eq!((plain.year, plain.month, plain.day, plain.hour), (1990, 1, 1, 0));
}

// ==================== 起卦与缓存 ====================

#[test]
fn test_cast_matches_pure_function() {
    let mut engine = engine();
    let chart = engine.create_chart(&birth_1990()).unwrap();
    let cast = engine.cast_hexagram(&chart, &personality_a()).unwrap();
    assert_eq!(cast, stardust_iching::cast_hexagram(&chart.index(), &personality_a()));
    assert_eq!(cast.primary, 37);
    assert_eq!(cast.transformed, Some(28));
}

#[test]
fn test_cast_cache_hit() {
    let mut engine = engine();
    let chart = engine.create_chart(&birth_1990()).unwrap();

    let first = engine.cast_hexagram(&chart, &personality_a()).unwrap();
    assert_eq!(engine.cached_casts(), 1);
    let second = engine.cast_hexagram(&chart, &personality_a()).unwrap();
    assert_eq!(engine.cached_casts(), 1);
    assert_eq!(first, second);

    let other = engine.cast_hexagram(&chart, &personality_b()).unwrap();
    assert_eq!(engine.cached_casts(), 2);
    assert_eq!(other.primary, 52);
    assert_eq!(other.transformed, Some(23));
}

#[test]
fn test_cast_cache_eviction() {
    let mut engine = engine();
    let charts = [
        engine.create_chart(&BirthInput::new(1990, 5, 15, Some(14))).unwrap(),
        engine.create_chart(&BirthInput::new(1985, 3, 8, Some(9))).unwrap(),
        engine.create_chart(&BirthInput::new(2001, 11, 23, Some(20))).unwrap(),
    ];
    for chart in charts.iter() {
        assert_ok!(engine.cast_hexagram(chart, &personality_a()));
    }
    assert_eq!(engine.cached_casts(), 2);

    engine.clear_cache();
    assert_eq!(engine.cached_casts(), 0);
}

// ==================== 完整解读 ====================

#[test]
fn test_reading_1990() {
    let mut engine = engine();
    let reading = engine.reading(&birth_1990(), &personality_a()).unwrap();
    assert_eq!(reading.chart.sizhu.day.name(), "丙子");
    assert_eq!(reading.chart.geju.name, "劫财格");
    assert_eq!(reading.cast.primary_hexagram().name, "家人");
    assert_eq!(reading.cast.transformed_hexagram().map(|h| h.name), Some("大过"));
    assert_eq!(
        reading.insights.bazi_insight,
        "家人卦与你的火行日主遥相呼应，天象与命盘在此刻交汇共鸣。"
    );
    assert!(!reading.cast.interpretation.is_empty());
    assert!(!reading.cast.advice.is_empty());
}

#[test]
fn test_reading_is_deterministic() {
    let a = engine().reading(&birth_1990(), &personality_b()).unwrap();
    let b = engine().reading(&birth_1990(), &personality_b()).unwrap();
    assert_eq!(a, b);
    assert_eq!(codec::Encode::encode(&a), codec::Encode::encode(&b));
}

#[test]
fn test_error_encoding() {
    use codec::{Decode, Encode};
    let encoded = Error::InvalidDay.encode();
    assert_eq!(encoded, vec![2u8]);
    assert_eq!(Error::decode(&mut &encoded[..]).ok(), Some(Error::InvalidDay));
    assert_eq!(Error::InvalidPersonality.description(), "人格测试结果无效");
}

// ==================== JSON ====================

#[test]
fn test_personality_from_json() {
    let json = r#"{
        "mbti": {
            "dimensions": { "ei": 72.4, "sn": 35.5, "tf": 60.2, "jp": 48.9 },
            "type": "ENTP",
            "cosmic": "星际探索者"
        },
        "big5": { "percentages": { "o": 66.0, "c": 58.3, "ex": 71.5, "a": 49.6, "n": 32.2 } },
        "enneagram": { "type": 7, "wing": 8 }
    }"#;
    let personality: PersonalityResult = serde_json::from_str(json).unwrap();
    assert_eq!(personality, personality_a());
}

#[test]
fn test_reading_json_shape() {
    let mut engine = engine();
    let reading = engine.reading(&birth_1990(), &personality_a()).unwrap();
    let value = serde_json::to_value(&reading).unwrap();
    assert_eq!(value["cast"]["primary"], 37);
    assert_eq!(value["cast"]["transformed"], 28);
    assert_eq!(value["chart"]["zodiac"], "马");
    assert_eq!(value["chart"]["geju"]["name"], "劫财格");
    assert_eq!(
        value["chart"]["geju"]["description"],
        "月令劫财当令，性格果敢好胜，敢于竞争，善于在激烈角逐中突围。"
    );
    assert_eq!(value["chart"]["geju"]["shishen"], "劫财");
    assert_eq!(value["chart"]["year_zhu"]["tiangan_shishen"], "偏财");
    assert_eq!(value["chart"]["day_zhu"]["canggan"][0]["shishen"], "正官");

    // 中文十神名可以原样读回
    let chart: stardust_bazi::BaziChart = serde_json::from_value(value["chart"].clone()).unwrap();
    assert_eq!(chart, reading.chart);
    assert!(value["insights"]["iching_insight"].as_str().unwrap().starts_with("家人卦"));

    let input: BirthInput =
        serde_json::from_str(r#"{"year":1990,"month":5,"day":15,"hour":14,"minute":0,"solar":null}"#).unwrap();
    assert_eq!(input, birth_1990());
}
