//! VADER (Valence Aware Dictionary and sEntiment Reasoner) 情感打分
//!
//! 基于词典的规则打分器：
//! - 词典查找，程度副词增强/减弱
//! - 大写强调、否定词、"but" 转折、习语
//! - 标点强调，最后归一化为 [-1, 1] 的 compound 分数

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::error::{AppError, Result};

// 程度副词的增减量
const B_INCR: f64 = 0.293;
const B_DECR: f64 = -0.293;

// 全大写强调
const C_INCR: f64 = 0.733;

// 否定系数
const N_SCALAR: f64 = -0.74;

const NORMALIZE_ALPHA: f64 = 15.0;

static BUNDLED_LEXICON: &str = include_str!("vader_lexicon.txt");

static NEGATE: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt",
        "ain't", "aren't", "can't", "couldn't", "daren't", "didn't", "doesn't",
        "dont", "hadnt", "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither",
        "don't", "hadn't", "hasn't", "haven't", "isn't", "mightn't", "mustn't",
        "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing", "nowhere",
        "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent",
        "oughtn't", "shan't", "shouldn't", "uh-uh", "wasn't", "weren't",
        "without", "wont", "wouldnt", "won't", "wouldn't", "rarely", "seldom", "despite",
    ]
    .into_iter()
    .collect()
});

static BOOSTER_DICT: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    let incr = [
        "absolutely", "amazingly", "awfully", "completely", "considerable", "considerably",
        "decidedly", "deeply", "effing", "enormous", "enormously", "entirely", "especially",
        "exceptional", "exceptionally", "extreme", "extremely", "fabulously", "flipping",
        "flippin", "frackin", "fracking", "fricking", "frickin", "frigging", "friggin",
        "fully", "fuckin", "fucking", "fuggin", "fugging", "greatly", "hella", "highly",
        "hugely", "incredible", "incredibly", "intensely", "major", "majorly", "more", "most",
        "particularly", "purely", "quite", "really", "remarkably", "so", "substantially",
        "thoroughly", "total", "totally", "tremendous", "tremendously", "uber",
        "unbelievably", "unusually", "utter", "utterly", "very",
    ];
    let decr = [
        "almost", "barely", "hardly", "just enough", "kind of", "kinda", "kindof", "kind-of",
        "less", "little", "marginal", "marginally", "occasional", "occasionally", "partly",
        "scarce", "scarcely", "slight", "slightly", "somewhat", "sort of", "sorta", "sortof",
        "sort-of",
    ];

    incr.into_iter()
        .map(|word| (word, B_INCR))
        .chain(decr.into_iter().map(|word| (word, B_DECR)))
        .collect()
});

// 带情感的固定搭配，直接覆盖分值
static SPECIAL_CASES: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        ("the shit", 3.0),
        ("the bomb", 3.0),
        ("bad ass", 1.5),
        ("badass", 1.5),
        ("bus stop", 0.0),
        ("yeah right", -2.0),
        ("kiss of death", -1.5),
        ("to die for", 3.0),
        ("beating heart", 3.1),
        ("broken heart", -2.9),
    ]
    .into_iter()
    .collect()
});

/// 一段文本的情感分布
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

#[derive(Debug, Clone)]
pub struct SentimentIntensityAnalyzer {
    lexicon: HashMap<String, f64>,
}

impl Default for SentimentIntensityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentIntensityAnalyzer {
    /// 使用内置词典
    pub fn new() -> Self {
        Self::from_lexicon_str(BUNDLED_LEXICON)
    }

    /// 解析 VADER 词典格式：`token<TAB>mean[<TAB>std<TAB>ratings]`
    pub fn from_lexicon_str(raw: &str) -> Self {
        let lexicon = raw
            .lines()
            .filter_map(|line| {
                let mut fields = line.trim_end_matches('\r').split('\t');
                let token = fields.next()?.trim();
                let mean = fields.next()?.trim().parse::<f64>().ok()?;
                (!token.is_empty()).then(|| (token.to_string(), mean))
            })
            .collect();

        Self { lexicon }
    }

    pub fn from_lexicon_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let analyzer = Self::from_lexicon_str(&raw);

        if analyzer.lexicon.is_empty() {
            return Err(AppError::Internal(format!(
                "Sentiment lexicon {} contains no entries",
                path.display()
            )));
        }

        Ok(analyzer)
    }

    pub fn lexicon_len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        let words = words_and_emoticons(text);
        let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let is_cap_diff = allcap_differential(&words);

        let mut sentiments = Vec::with_capacity(words.len());
        for i in 0..words.len() {
            let item = lowered[i].as_str();

            if BOOSTER_DICT.contains_key(item) {
                sentiments.push(0.0);
                continue;
            }

            if item == "kind" && i + 1 < words.len() && lowered[i + 1] == "of" {
                sentiments.push(0.0);
                continue;
            }

            sentiments.push(self.sentiment_valence(&words, &lowered, is_cap_diff, i));
        }

        but_check(&lowered, &mut sentiments);
        score_valence(&sentiments, text)
    }

    fn in_lexicon(&self, word: &str) -> bool {
        self.lexicon.contains_key(word)
    }

    fn sentiment_valence(
        &self,
        words: &[String],
        lowered: &[String],
        is_cap_diff: bool,
        i: usize,
    ) -> f64 {
        let item = lowered[i].as_str();
        let base = match self.lexicon.get(item) {
            Some(&valence) => valence,
            None => return 0.0,
        };
        let mut valence = base;

        // "no" 修饰其他情感词时自身不计分
        if item == "no" && i + 1 < words.len() && self.in_lexicon(&lowered[i + 1]) {
            valence = 0.0;
        }
        if (i > 0 && lowered[i - 1] == "no")
            || (i > 1 && lowered[i - 2] == "no")
            || (i > 2 && lowered[i - 3] == "no" && matches!(lowered[i - 1].as_str(), "or" | "nor"))
        {
            valence = base * N_SCALAR;
        }

        if is_cap_diff && is_upper(&words[i]) {
            if valence > 0.0 {
                valence += C_INCR;
            } else {
                valence -= C_INCR;
            }
        }

        for start_i in 0..3 {
            if i > start_i && !self.in_lexicon(&lowered[i - (start_i + 1)]) {
                let prev = i - (start_i + 1);
                let mut s = scalar_inc_dec(&words[prev], &lowered[prev], valence, is_cap_diff);
                if start_i == 1 && s != 0.0 {
                    s *= 0.95;
                }
                if start_i == 2 && s != 0.0 {
                    s *= 0.9;
                }
                valence += s;
                valence = negation_check(valence, lowered, start_i, i);
                if start_i == 2 {
                    valence = special_idioms_check(valence, lowered, i);
                }
            }
        }

        self.least_check(valence, lowered, i)
    }

    fn least_check(&self, valence: f64, lowered: &[String], i: usize) -> f64 {
        if i > 1 && !self.in_lexicon(&lowered[i - 1]) && lowered[i - 1] == "least" {
            if lowered[i - 2] != "at" && lowered[i - 2] != "very" {
                return valence * N_SCALAR;
            }
        } else if i > 0 && !self.in_lexicon(&lowered[i - 1]) && lowered[i - 1] == "least" {
            return valence * N_SCALAR;
        }
        valence
    }
}

fn strip_punc_if_word(token: &str) -> &str {
    let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.chars().count() <= 2 {
        token
    } else {
        stripped
    }
}

fn words_and_emoticons(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| strip_punc_if_word(token).to_string())
        .collect()
}

/// 至少含一个有大小写之分的字符，且没有小写字母
fn is_upper(word: &str) -> bool {
    let mut cased = false;
    for c in word.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

/// 只有部分单词全大写时才算强调
fn allcap_differential(words: &[String]) -> bool {
    let allcap_words = words.iter().filter(|w| is_upper(w)).count();
    let cap_differential = words.len() - allcap_words;
    cap_differential > 0 && cap_differential < words.len()
}

fn negated(word: &str) -> bool {
    NEGATE.contains(word) || word.contains("n't")
}

fn scalar_inc_dec(word: &str, word_lower: &str, valence: f64, is_cap_diff: bool) -> f64 {
    let mut scalar = match BOOSTER_DICT.get(word_lower) {
        Some(&scalar) => scalar,
        None => return 0.0,
    };
    if valence < 0.0 {
        scalar *= -1.0;
    }
    if is_cap_diff && is_upper(word) {
        if valence > 0.0 {
            scalar += C_INCR;
        } else {
            scalar -= C_INCR;
        }
    }
    scalar
}

fn negation_check(valence: f64, lowered: &[String], start_i: usize, i: usize) -> f64 {
    let is_so_or_this = |w: &str| w == "so" || w == "this";

    match start_i {
        0 => {
            if negated(&lowered[i - 1]) {
                return valence * N_SCALAR;
            }
        }
        1 => {
            if lowered[i - 2] == "never" && is_so_or_this(lowered[i - 1].as_str()) {
                return valence * 1.25;
            } else if lowered[i - 2] == "without" && lowered[i - 1] == "doubt" {
                return valence;
            } else if negated(&lowered[i - 2]) {
                return valence * N_SCALAR;
            }
        }
        _ => {
            if (lowered[i - 3] == "never" && is_so_or_this(lowered[i - 2].as_str()))
                || is_so_or_this(lowered[i - 1].as_str())
            {
                return valence * 1.25;
            } else if lowered[i - 3] == "without"
                && (lowered[i - 2] == "doubt" || lowered[i - 1] == "doubt")
            {
                return valence;
            } else if negated(&lowered[i - 3]) {
                return valence * N_SCALAR;
            }
        }
    }
    valence
}

fn special_idioms_check(mut valence: f64, lowered: &[String], i: usize) -> f64 {
    let onezero = format!("{} {}", lowered[i - 1], lowered[i]);
    let twoonezero = format!("{} {} {}", lowered[i - 2], lowered[i - 1], lowered[i]);
    let twoone = format!("{} {}", lowered[i - 2], lowered[i - 1]);
    let threetwoone = format!("{} {} {}", lowered[i - 3], lowered[i - 2], lowered[i - 1]);
    let threetwo = format!("{} {}", lowered[i - 3], lowered[i - 2]);

    for seq in [&onezero, &twoonezero, &twoone, &threetwoone, &threetwo] {
        if let Some(&special) = SPECIAL_CASES.get(seq.as_str()) {
            valence = special;
            break;
        }
    }

    if lowered.len() - 1 > i {
        let zeroone = format!("{} {}", lowered[i], lowered[i + 1]);
        if let Some(&special) = SPECIAL_CASES.get(zeroone.as_str()) {
            valence = special;
        }
    }
    if lowered.len() - 1 > i + 1 {
        let zeroonetwo = format!("{} {} {}", lowered[i], lowered[i + 1], lowered[i + 2]);
        if let Some(&special) = SPECIAL_CASES.get(zeroonetwo.as_str()) {
            valence = special;
        }
    }

    // 多词程度副词，例如 "kind of"
    for n_gram in [&threetwoone, &threetwo, &twoone] {
        if let Some(&scalar) = BOOSTER_DICT.get(n_gram.as_str()) {
            valence += scalar;
        }
    }
    valence
}

/// "but" 之前的情感减半，之后的放大
fn but_check(lowered: &[String], sentiments: &mut [f64]) {
    if let Some(bi) = lowered.iter().position(|w| w == "but") {
        for (idx, sentiment) in sentiments.iter_mut().enumerate() {
            if idx < bi {
                *sentiment *= 0.5;
            } else if idx > bi {
                *sentiment *= 1.5;
            }
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let ep_count = text.matches('!').count().min(4);
    let ep_amplifier = ep_count as f64 * 0.292;

    let qm_count = text.matches('?').count();
    let qm_amplifier = match qm_count {
        0 | 1 => 0.0,
        2..=3 => qm_count as f64 * 0.18,
        _ => 0.96,
    };

    ep_amplifier + qm_amplifier
}

fn normalize(score: f64) -> f64 {
    let norm = score / (score * score + NORMALIZE_ALPHA).sqrt();
    norm.clamp(-1.0, 1.0)
}

fn sift_sentiment_scores(sentiments: &[f64]) -> (f64, f64, usize) {
    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0;
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1;
        }
    }
    (pos_sum, neg_sum, neu_count)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn score_valence(sentiments: &[f64], text: &str) -> PolarityScores {
    if sentiments.is_empty() {
        return PolarityScores::default();
    }

    let mut sum_s: f64 = sentiments.iter().sum();
    let punct_emph_amplifier = punctuation_emphasis(text);
    if sum_s > 0.0 {
        sum_s += punct_emph_amplifier;
    } else if sum_s < 0.0 {
        sum_s -= punct_emph_amplifier;
    }
    let compound = normalize(sum_s);

    let (mut pos_sum, mut neg_sum, neu_count) = sift_sentiment_scores(sentiments);
    if pos_sum > neg_sum.abs() {
        pos_sum += punct_emph_amplifier;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= punct_emph_amplifier;
    }

    let total = pos_sum + neg_sum.abs() + neu_count as f64;
    PolarityScores {
        neg: round_to((neg_sum / total).abs(), 3),
        neu: round_to((neu_count as f64 / total).abs(), 3),
        pos: round_to((pos_sum / total).abs(), 3),
        compound: round_to(compound, 4),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compound(text: &str) -> f64 {
        SentimentIntensityAnalyzer::new().polarity_scores(text).compound
    }

    #[test]
    fn test_single_word() {
        let scores = SentimentIntensityAnalyzer::new().polarity_scores("good");
        assert_eq!(scores.compound, 0.4404);
        assert_eq!(scores.pos, 1.0);
        assert_eq!(scores.neg, 0.0);
        assert_eq!(scores.neu, 0.0);
    }

    #[test]
    fn test_reference_compound_scores() {
        let cases = [
            ("I disagree", -0.3818),
            ("VADER is smart, handsome, and funny.", 0.8316),
            ("VADER is smart, handsome, and funny!", 0.8439),
            ("VADER is very smart, handsome, and funny.", 0.8545),
            ("VADER is VERY SMART, handsome, and FUNNY.", 0.9227),
            ("VADER is not smart, handsome, nor funny.", -0.7424),
            ("The book was good.", 0.4404),
            ("The book was kind of good.", 0.3832),
            (
                "The plot was good, but the characters are uncompelling and the dialog is not great.",
                -0.7042,
            ),
            ("A really bad, horrible book.", -0.8211),
            ("At least it isn't a horrible book.", 0.431),
            ("Today SUX!", -0.5461),
            ("Today only kinda sux! But I'll get by, lol", 0.5249),
        ];

        let analyzer = SentimentIntensityAnalyzer::new();
        for (text, expected) in cases {
            assert_eq!(analyzer.polarity_scores(text).compound, expected, "{}", text);
        }
    }

    #[test]
    fn test_negation() {
        assert_eq!(compound("not good"), -0.3412);
        assert!(compound("this isn't good") < 0.0);
        assert!(compound("it was never bad") > compound("it was bad"));
    }

    #[test]
    fn test_booster() {
        assert_eq!(compound("very good"), 0.4927);
        assert!(compound("slightly good") < compound("good"));
    }

    #[test]
    fn test_caps_emphasis() {
        // 整句全大写时不算强调
        assert_eq!(compound("GOOD"), compound("good"));
        assert!(compound("this video is GOOD") > compound("this video is good"));
    }

    #[test]
    fn test_punctuation_emphasis() {
        assert!(compound("good!!!") > compound("good"));
        assert_eq!(compound("good!!!!!!"), compound("good!!!!"));
        assert!(compound("bad??") < compound("bad"));
    }

    #[test]
    fn test_but_shifts_weight() {
        let with_but = compound("the intro is good but the audio is terrible");
        let without_but = compound("the intro is good and the audio is terrible");
        assert!(with_but < without_but);
        assert!(with_but < -0.05);
    }

    #[test]
    fn test_least() {
        assert!(compound("least good") < 0.0);
        assert!(compound("at least good") > 0.0);
    }

    #[test]
    fn test_special_idioms() {
        assert!(compound("she has a broken heart") < compound("she has a broken arm"));
    }

    #[test]
    fn test_neutral_and_empty() {
        assert_eq!(
            SentimentIntensityAnalyzer::new().polarity_scores(""),
            PolarityScores::default()
        );
        let scores = SentimentIntensityAnalyzer::new().polarity_scores("the video is ten minutes long");
        assert_eq!(scores.compound, 0.0);
        assert_eq!(scores.neu, 1.0);
    }

    #[test]
    fn test_emoticons() {
        assert!(compound("nice one :)") > compound("nice one"));
        assert!(compound("meh :(") < 0.0);
    }

    #[test]
    fn test_strip_punctuation() {
        assert_eq!(strip_punc_if_word("great!"), "great");
        assert_eq!(strip_punc_if_word(":)"), ":)");
        assert_eq!(strip_punc_if_word("\"awesome\","), "awesome");
    }

    #[test]
    fn test_custom_lexicon() {
        let analyzer = SentimentIntensityAnalyzer::from_lexicon_str(
            "rustacean\t2.5\t0.5\t[2, 3, 2, 3]\nbroken line\nsegfault\t-3.0\n",
        );
        assert_eq!(analyzer.lexicon_len(), 2);
        assert!(analyzer.polarity_scores("rustacean").compound > 0.0);
        assert!(analyzer.polarity_scores("segfault").compound < 0.0);
        assert_eq!(analyzer.polarity_scores("good").compound, 0.0);
    }

    #[test]
    fn test_lexicon_file_missing() {
        let result = SentimentIntensityAnalyzer::from_lexicon_file("/nonexistent/vader_lexicon.txt");
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
