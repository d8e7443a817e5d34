// Unit tests for similarity scoring and the repeat-rate formula.
//
// Covers the algebraic properties of both metrics (identity, symmetry,
// bounds, empty inputs), the chunking no-op for short documents, and an
// end-to-end paraphrase check through the tokenizer.

use papercheck::similarity::overlap::{cosine_similarity, jaccard_similarity};
use papercheck::similarity::rate::{chunked_scores, compute_repeat_rate, RateParams};
use papercheck::text::tokenizer::tokenize;
use papercheck::text::traits::SegmentMode;

fn v(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

const ORIGINAL: [&str; 7] = [
    "论文查重系统用于检测两篇文章之间的文字重复程度。",
    "系统首先对文本进行分词处理并去除标点符号。",
    "然后过滤掉没有实际意义的停用词。",
    "接着统计每个词语在文档中出现的次数。",
    "最后综合集合重叠度和词频向量夹角计算重复率。",
    "对于超长文档系统会按固定长度分块比较。",
    "这种方法能够有效发现调整段落顺序的抄袭行为。",
];

// ============================================================
// Jaccard
// ============================================================

#[test]
fn jaccard_identical_lists() {
    let a = v(&["星期天", "晴", "看电影"]);
    assert_eq!(jaccard_similarity(&a, &a.clone()), 1.0);
}

#[test]
fn jaccard_disjoint_lists() {
    let a = v(&["星期天", "晴", "看电影"]);
    let b = v(&["星期一", "雨", "看书"]);
    assert_eq!(jaccard_similarity(&a, &b), 0.0);
}

#[test]
fn jaccard_empty_inputs() {
    let empty: Vec<String> = Vec::new();
    let b = v(&["晴"]);
    assert_eq!(jaccard_similarity(&empty, &empty), 1.0);
    assert_eq!(jaccard_similarity(&empty, &b), 0.0);
    assert_eq!(jaccard_similarity(&b, &empty), 0.0);
}

// ============================================================
// Cosine
// ============================================================

#[test]
fn cosine_identical_lists() {
    let a = v(&["星期天", "晴", "看电影", "晴"]);
    assert_eq!(cosine_similarity(&a, &a.clone()), 1.0);
}

#[test]
fn cosine_partial_overlap() {
    let a = v(&["星期天", "晴", "看电影"]);
    let b = v(&["周天", "晴朗", "看电影"]);
    assert!(cosine_similarity(&a, &b) > 0.2);
}

#[test]
fn cosine_empty_inputs() {
    let empty: Vec<String> = Vec::new();
    let b = v(&["晴"]);
    assert_eq!(cosine_similarity(&empty, &empty), 1.0);
    assert_eq!(cosine_similarity(&empty, &b), 0.0);
    assert_eq!(cosine_similarity(&b, &empty), 0.0);
}

// ============================================================
// Shared properties
// ============================================================

#[test]
fn scores_are_symmetric_and_bounded() {
    let pairs = [
        (v(&["a", "b", "c"]), v(&["b", "c", "d", "d"])),
        (v(&["a", "a", "a"]), v(&["a"])),
        (v(&["x"]), v(&["y", "z"])),
        (v(&[]), v(&["q"])),
    ];
    for (a, b) in &pairs {
        let j = jaccard_similarity(a, b);
        let c = cosine_similarity(a, b);
        assert_eq!(j, jaccard_similarity(b, a));
        assert_eq!(c, cosine_similarity(b, a));
        assert!((0.0..=1.0).contains(&j), "jaccard {j} out of range");
        assert!((0.0..=1.0).contains(&c), "cosine {c} out of range");
        let rate = compute_repeat_rate(a, b);
        assert!((0.0..=1.0).contains(&rate), "rate {rate} out of range");
    }
}

#[test]
fn self_similarity_of_tokenized_text() {
    let words = tokenize(&ORIGINAL.concat(), SegmentMode::Precise);
    assert!(!words.is_empty());
    assert_eq!(jaccard_similarity(&words, &words), 1.0);
    assert_eq!(cosine_similarity(&words, &words), 1.0);
    assert_eq!(compute_repeat_rate(&words, &words), 1.0);
}

// ============================================================
// Repeat rate
// ============================================================

#[test]
fn identical_short_lists_rate_one() {
    let a = v(&["星期天", "晴", "看电影"]);
    assert_eq!(compute_repeat_rate(&a, &a.clone()), 1.0);
}

#[test]
fn both_empty_rate_one_and_one_empty_rate_zero() {
    let empty: Vec<String> = Vec::new();
    let b = tokenize("今天是星期天，天气晴。", SegmentMode::Precise);
    assert_eq!(compute_repeat_rate(&empty, &empty), 1.0);
    assert_eq!(compute_repeat_rate(&empty, &b), 0.0);
}

#[test]
fn chunking_short_documents_matches_direct_mode() {
    let a = tokenize(&ORIGINAL.concat(), SegmentMode::Precise);
    let b = tokenize(&ORIGINAL[..4].concat(), SegmentMode::Precise);
    assert!(a.len() < 1000 && b.len() < 1000);

    let scores = chunked_scores(&a, &b, 1000);
    assert_eq!(scores.chunks, 1);
    assert_eq!(scores.jaccard, jaccard_similarity(&a, &b));
    assert_eq!(scores.cosine, cosine_similarity(&a, &b));

    let always_chunk = RateParams {
        chunk_threshold: 0,
        ..RateParams::default()
    };
    let chunked = always_chunk.combine(&a, &b);
    let plain = RateParams::default().combine(&a, &b);
    assert!(chunked.chunked);
    assert_eq!(chunked.chunks, 1);
    assert_eq!(chunked.rate, plain.rate);
}

#[test]
fn very_long_documents_use_chunks() {
    let a: Vec<String> = (0..12_000).map(|i| format!("w{}", i % 700)).collect();
    let breakdown = RateParams::default().combine(&a, &a.clone());
    assert!(breakdown.chunked);
    assert_eq!(breakdown.chunks, 12);
    assert_eq!(breakdown.rate, 1.0);
}

/// `shared` common words plus `unique` words of its own on each side.
fn overlapping_pair(shared: usize, unique: usize) -> (Vec<String>, Vec<String>) {
    let common: Vec<String> = (0..shared).map(|i| format!("w{i}")).collect();
    let mut a = common.clone();
    let mut b = common;
    a.extend((0..unique).map(|i| format!("x{i}")));
    b.extend((0..unique).map(|i| format!("y{i}")));
    (a, b)
}

#[test]
fn ten_thousand_tokens_stays_direct() {
    let a: Vec<String> = (0..10_000).map(|i| format!("w{i}")).collect();
    let breakdown = RateParams::default().combine(&a, &a.clone());
    assert!(!breakdown.chunked);
    assert_eq!(breakdown.chunks, 1);
}

#[test]
fn ten_thousand_and_one_tokens_is_chunked() {
    let a: Vec<String> = (0..10_001).map(|i| format!("w{i}")).collect();
    let breakdown = RateParams::default().combine(&a, &a.clone());
    assert!(breakdown.chunked);
    assert_eq!(breakdown.chunks, 11);
    assert_eq!(breakdown.rate, 1.0);
}

#[test]
fn one_side_over_chunk_threshold_is_enough() {
    let a: Vec<String> = (0..10_001).map(|i| format!("w{i}")).collect();
    let b: Vec<String> = (0..10).map(|i| format!("w{i}")).collect();
    assert!(RateParams::default().combine(&a, &b).chunked);
    assert!(RateParams::default().combine(&b, &a).chunked);
}

#[test]
fn fifty_tokens_uses_even_blend() {
    // jaccard 45/55 = 0.8182, cosine 45/50 = 0.9 => (0.8182 + 0.9) / 2
    let (a, b) = overlapping_pair(45, 5);
    assert_eq!((a.len(), b.len()), (50, 50));
    let breakdown = RateParams::default().combine(&a, &b);
    assert!(!breakdown.long_form);
    assert_eq!(breakdown.jaccard, 0.8182);
    assert_eq!(breakdown.cosine, 0.9);
    assert_eq!(breakdown.rate, 0.8591);
}

#[test]
fn fifty_one_tokens_uses_long_form_blend() {
    // jaccard 46/56 = 0.8214, cosine 46/51 = 0.9020 => 0.2 * 0.8214 + 0.8 * 0.902
    let (a, b) = overlapping_pair(46, 5);
    assert_eq!((a.len(), b.len()), (51, 51));
    let breakdown = RateParams::default().combine(&a, &b);
    assert!(breakdown.long_form);
    assert_eq!(breakdown.jaccard, 0.8214);
    assert_eq!(breakdown.cosine, 0.902);
    assert_eq!(breakdown.rate, 0.8859);
}

// ============================================================
// Paraphrase behavior
// ============================================================

#[test]
fn reordered_sentences_with_minor_edits_score_high() {
    let original = ORIGINAL.concat();
    let candidate = [
        ORIGINAL[2],
        "论文查重系统用于识别两篇文章之间的文字重复程度。",
        "这种方法能够准确发现调整段落顺序的抄袭行为。",
        ORIGINAL[4],
        ORIGINAL[1],
        ORIGINAL[5],
        ORIGINAL[3],
    ]
    .concat();

    let a = tokenize(&original, SegmentMode::Search);
    let b = tokenize(&candidate, SegmentMode::Search);
    assert!(a.len() > 50, "expected long-form input, got {} tokens", a.len());

    let rate = compute_repeat_rate(&a, &b);
    assert!(rate >= 0.85, "reordered copy rate {rate} below 0.85");
}

#[test]
fn rewritten_sentence_pair_scores_moderately() {
    let original = "Python是解释型、面向对象的高级程序设计语言。1989年由Guido van Rossum发明，\
                    1991年发布首个版本，支持跨平台开发，语法简洁易读，适合快速开发。";
    let rewritten = "Python是面向对象的解释型高级程序设计语言，由Guido van Rossum于1989年创造，\
                     1991年推出第一个公开发行版，可跨平台运行，语法简洁易懂，适用于快速开发项目。";

    let a = tokenize(original, SegmentMode::Search);
    let b = tokenize(rewritten, SegmentMode::Search);
    assert_eq!((a.len(), b.len()), (33, 40));

    let breakdown = RateParams::default().combine(&a, &b);
    assert!(!breakdown.long_form);
    assert_eq!(breakdown.jaccard, 0.5333);
    assert_eq!(breakdown.cosine, 0.694);
    assert_eq!(breakdown.rate, 0.6137);
}
