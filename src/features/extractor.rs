//! Feature extraction over collected content.
//!
//! Pure function of the item, the interest profile, and the similarity
//! oracle. Extraction never fails: a missing optional field or a failed
//! oracle call degrades to a defined neutral value so one bad record cannot
//! block ranking the whole candidate set.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::{ArticleFeatures, FeatureVector, PaperFeatures};
use crate::content::{Article, ContentItem, InterestProfile, Paper};
use crate::core::config::RankingConfig;
use crate::similarity::SimilarityOracle;

const MISSING_TIMESTAMP_RECENCY: f64 = 0.5;

pub struct FeatureExtractor {
    oracle: Arc<dyn SimilarityOracle>,
    config: RankingConfig,
}

impl FeatureExtractor {
    pub fn new(oracle: Arc<dyn SimilarityOracle>, config: RankingConfig) -> Self {
        Self { oracle, config }
    }

    pub async fn extract(&self, item: &ContentItem, profile: &InterestProfile) -> FeatureVector {
        self.extract_at(item, profile, Utc::now()).await
    }

    /// Extraction with an explicit clock, so recency is testable.
    pub async fn extract_at(
        &self,
        item: &ContentItem,
        profile: &InterestProfile,
        now: DateTime<Utc>,
    ) -> FeatureVector {
        let similarity = self.similarity_score(item, profile).await;

        match item {
            ContentItem::Paper(paper) => FeatureVector::Paper(self.paper_features(
                paper,
                similarity,
                now,
            )),
            ContentItem::Article(article) => FeatureVector::Article(self.article_features(
                article,
                similarity,
                now,
            )),
        }
    }

    async fn similarity_score(&self, item: &ContentItem, profile: &InterestProfile) -> f64 {
        let interests_text = profile.joined();
        let item_text = format!("{} {}", item.title(), item.body());

        match self.oracle.similarity(&interests_text, &item_text).await {
            Ok(score) => f64::from(score).clamp(0.0, 1.0),
            Err(err) => {
                tracing::warn!("similarity oracle unavailable, scoring 0.0: {}", err);
                0.0
            }
        }
    }

    fn paper_features(&self, paper: &Paper, similarity: f64, now: DateTime<Utc>) -> PaperFeatures {
        let recency = recency_score(paper.published, now, self.config.paper_half_life_days);

        let citations = f64::from(paper.citation_count.unwrap_or(0))
            / f64::from(self.config.citation_cap);
        let citations = citations.clamp(0.0, 1.0);

        let category = if paper
            .categories
            .iter()
            .any(|cat| self.config.core_categories.contains(cat))
        {
            1.0
        } else {
            0.5
        };

        // Shorter titles tend to be more focused.
        let title_length = 1.0 - (paper.title.chars().count() as f64 / 200.0).min(0.5);

        PaperFeatures {
            similarity,
            recency,
            citations,
            category,
            title_length,
        }
    }

    fn article_features(
        &self,
        article: &Article,
        similarity: f64,
        now: DateTime<Utc>,
    ) -> ArticleFeatures {
        let recency = recency_score(article.published, now, self.config.article_half_life_days);

        let engagement =
            f64::from(article.upvotes.unwrap_or(0)) / f64::from(self.config.upvote_cap);
        let engagement = engagement.clamp(0.0, 1.0);

        let source = if self.config.trusted_sources.contains(&article.source) {
            1.0
        } else {
            0.7
        };

        // Longer bodies tend to be more comprehensive.
        let content_length = (article.content.chars().count() as f64 / 2000.0).min(1.0);

        ArticleFeatures {
            similarity,
            recency,
            engagement,
            source,
            content_length,
        }
    }
}

/// `1 / (1 + age_days / half_life)`. Missing timestamps score the fixed
/// neutral 0.5; timestamps in the future clamp to age zero.
fn recency_score(published: Option<DateTime<Utc>>, now: DateTime<Utc>, half_life_days: f64) -> f64 {
    let Some(published) = published else {
        return MISSING_TIMESTAMP_RECENCY;
    };

    let age_days = ((now - published).num_seconds() as f64 / 86_400.0).max(0.0);
    1.0 / (1.0 + age_days / half_life_days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ScoutError;
    use async_trait::async_trait;
    use chrono::Duration;

    struct ConstOracle(f32);

    #[async_trait]
    impl SimilarityOracle for ConstOracle {
        async fn similarity(&self, _a: &str, _b: &str) -> Result<f32, ScoutError> {
            Ok(self.0)
        }
    }

    struct FailingOracle;

    #[async_trait]
    impl SimilarityOracle for FailingOracle {
        async fn similarity(&self, _a: &str, _b: &str) -> Result<f32, ScoutError> {
            Err(ScoutError::Provider("embedding service down".to_string()))
        }
    }

    fn extractor(oracle: Arc<dyn SimilarityOracle>) -> FeatureExtractor {
        FeatureExtractor::new(oracle, RankingConfig::default())
    }

    fn paper(published: Option<DateTime<Utc>>, citations: Option<u32>) -> ContentItem {
        ContentItem::Paper(Paper {
            arxiv_id: "2501.01234".to_string(),
            title: "Sparse Mixture Routing".to_string(),
            authors: vec![],
            abstract_text: "Routing tokens to experts.".to_string(),
            categories: vec!["cs.LG".to_string()],
            published,
            url: "https://arxiv.org/abs/2501.01234".to_string(),
            citation_count: citations,
        })
    }

    fn article(upvotes: Option<u32>, source: &str, content: &str) -> ContentItem {
        ContentItem::Article(Article {
            source: source.to_string(),
            source_id: "1".to_string(),
            title: "Post".to_string(),
            url: "https://example.com".to_string(),
            content: content.to_string(),
            author: None,
            published: None,
            upvotes,
        })
    }

    #[tokio::test]
    async fn thirty_day_old_paper_at_default_half_life_scores_half() {
        let now = Utc::now();
        let item = paper(Some(now - Duration::days(30)), Some(100));
        let vector = extractor(Arc::new(ConstOracle(0.8)))
            .extract_at(&item, &InterestProfile::new(["ml"]), now)
            .await;

        assert!((vector.value_or_zero("recency") - 0.5).abs() < 1e-9);
        // citation_count == cap
        assert_eq!(vector.value_or_zero("citations"), 1.0);
        assert_eq!(vector.value_or_zero("category"), 1.0);
    }

    #[tokio::test]
    async fn fresh_paper_scores_full_recency() {
        let now = Utc::now();
        let item = paper(Some(now), None);
        let vector = extractor(Arc::new(ConstOracle(0.0)))
            .extract_at(&item, &InterestProfile::default(), now)
            .await;

        assert_eq!(vector.value_or_zero("recency"), 1.0);
    }

    #[tokio::test]
    async fn recency_decreases_with_age() {
        let now = Utc::now();
        let ext = extractor(Arc::new(ConstOracle(0.0)));
        let profile = InterestProfile::default();

        let mut previous = f64::MAX;
        for days in [0, 10, 30, 90, 365, 3650] {
            let item = paper(Some(now - Duration::days(days)), None);
            let recency = ext
                .extract_at(&item, &profile, now)
                .await
                .value_or_zero("recency");
            assert!(recency < previous || days == 0);
            previous = recency;
        }
        // converges toward zero
        assert!(previous < 0.01);
    }

    #[tokio::test]
    async fn missing_optional_fields_degrade_to_defaults() {
        let item = paper(None, None);
        let vector = extractor(Arc::new(ConstOracle(0.4)))
            .extract_at(&item, &InterestProfile::new(["ml"]), Utc::now())
            .await;

        assert_eq!(vector.value_or_zero("recency"), 0.5);
        assert_eq!(vector.value_or_zero("citations"), 0.0);
        // all schema keys present
        assert_eq!(vector.pairs().len(), 5);
    }

    #[tokio::test]
    async fn article_upvotes_clamp_at_cap() {
        let item = article(Some(1000), "hackernews", "short");
        let vector = extractor(Arc::new(ConstOracle(0.4)))
            .extract_at(&item, &InterestProfile::new(["rust"]), Utc::now())
            .await;

        assert_eq!(vector.value_or_zero("engagement"), 1.0);
        assert_eq!(vector.value_or_zero("source"), 1.0);
    }

    #[tokio::test]
    async fn untrusted_source_gets_lower_prior() {
        let body = "a".repeat(4000);
        let item = article(None, "someblog", &body);
        let vector = extractor(Arc::new(ConstOracle(0.4)))
            .extract_at(&item, &InterestProfile::new(["rust"]), Utc::now())
            .await;

        assert_eq!(vector.value_or_zero("source"), 0.7);
        assert_eq!(vector.value_or_zero("engagement"), 0.0);
        // long body caps at 1.0
        assert_eq!(vector.value_or_zero("content_length"), 1.0);
    }

    #[tokio::test]
    async fn oracle_failure_degrades_to_zero_similarity() {
        let item = paper(None, Some(50));
        let vector = extractor(Arc::new(FailingOracle))
            .extract_at(&item, &InterestProfile::new(["ml"]), Utc::now())
            .await;

        assert_eq!(vector.value_or_zero("similarity"), 0.0);
        assert_eq!(vector.value_or_zero("citations"), 0.5);
    }

    #[tokio::test]
    async fn future_timestamp_clamps_to_age_zero() {
        let now = Utc::now();
        let item = paper(Some(now + Duration::days(2)), None);
        let vector = extractor(Arc::new(ConstOracle(0.0)))
            .extract_at(&item, &InterestProfile::default(), now)
            .await;

        assert_eq!(vector.value_or_zero("recency"), 1.0);
    }
}
