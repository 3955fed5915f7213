use std::path::Path;

use crate::{
    error::Result,
    models::video::Sentiment,
    utils::vader::SentimentIntensityAnalyzer,
};

/// compound 分数的正/负阈值，边界值本身视为中性
pub const POLARITY_THRESHOLD: f64 = 0.05;

/// 评论情感分类
pub trait SentimentClassifier: Send + Sync {
    fn classify(&self, text: &str) -> Result<Sentiment>;
}

pub fn classify_compound(compound: f64) -> Sentiment {
    if compound > POLARITY_THRESHOLD {
        Sentiment::Positive
    } else if compound < -POLARITY_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

#[derive(Debug, Clone, Default)]
pub struct VaderClassifier {
    analyzer: SentimentIntensityAnalyzer,
}

impl VaderClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// 加载完整的 vader_lexicon.txt 替换内置词典
    pub fn from_lexicon_file(path: impl AsRef<Path>) -> Result<Self> {
        let analyzer = SentimentIntensityAnalyzer::from_lexicon_file(path)?;
        tracing::info!("Loaded sentiment lexicon with {} entries", analyzer.lexicon_len());
        Ok(Self { analyzer })
    }

    pub fn analyzer(&self) -> &SentimentIntensityAnalyzer {
        &self.analyzer
    }
}

impl SentimentClassifier for VaderClassifier {
    fn classify(&self, text: &str) -> Result<Sentiment> {
        let scores = self.analyzer.polarity_scores(text);
        Ok(classify_compound(scores.compound))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(classify_compound(0.10), Sentiment::Positive);
        assert_eq!(classify_compound(-0.20), Sentiment::Negative);
        assert_eq!(classify_compound(0.0), Sentiment::Neutral);
        assert_eq!(classify_compound(0.05), Sentiment::Neutral);
        assert_eq!(classify_compound(-0.05), Sentiment::Neutral);
        assert_eq!(classify_compound(0.0501), Sentiment::Positive);
        assert_eq!(classify_compound(-0.0501), Sentiment::Negative);
        assert_eq!(classify_compound(1.0), Sentiment::Positive);
        assert_eq!(classify_compound(-1.0), Sentiment::Negative);
    }

    #[test]
    fn test_vader_classifier() {
        let classifier = VaderClassifier::new();
        assert_eq!(classifier.classify("This tutorial is great, thanks!").unwrap(), Sentiment::Positive);
        assert_eq!(classifier.classify("Worst video ever, total waste of time").unwrap(), Sentiment::Negative);
        assert_eq!(classifier.classify("Posted at 10:32 from Berlin").unwrap(), Sentiment::Neutral);
        assert_eq!(classifier.classify("I disagree").unwrap(), Sentiment::Negative);
        assert_eq!(classifier.classify("wtf is this garbage").unwrap(), Sentiment::Negative);
        assert_eq!(classifier.classify("").unwrap(), Sentiment::Neutral);
    }

    proptest! {
        #[test]
        fn classify_is_total(text in any::<String>()) {
            let classifier = VaderClassifier::new();
            let sentiment = classifier.classify(&text).unwrap();
            prop_assert!(matches!(
                sentiment,
                Sentiment::Positive | Sentiment::Negative | Sentiment::Neutral
            ));
        }

        #[test]
        fn classify_is_deterministic(text in "[a-zA-Z!?:() ]{0,80}") {
            let classifier = VaderClassifier::new();
            let first = classifier.classify(&text).unwrap();
            let second = classifier.classify(&text).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn compound_stays_in_range(text in any::<String>()) {
            let compound = VaderClassifier::new().analyzer().polarity_scores(&text).compound;
            prop_assert!((-1.0..=1.0).contains(&compound));
        }
    }
}
