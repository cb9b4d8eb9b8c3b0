//! Heuristic SEO metadata for generated text.

use crate::common::utils::content::{is_heading, strip_heading_markup, truncate_with_ellipsis};

pub const META_DESCRIPTION_MAX_CHARS: usize = 155;

const BASE_SCORE: u8 = 70;
const KEYWORD_BONUS: u8 = 5;
const MAX_SCORE: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoMetadata {
    /// `None` when the body has no non-empty line
    pub title: Option<String>,
    pub meta_description: String,
    pub keywords: Vec<String>,
    pub seo_score: u8,
}

pub fn derive(body: &str, target_keywords: &[String]) -> SeoMetadata {
    let mut lines = body.lines().map(str::trim).filter(|line| !line.is_empty());

    let title = lines
        .next()
        .map(strip_heading_markup)
        .filter(|title| !title.is_empty())
        .map(str::to_string);

    let meta_description = lines
        .find(|line| !is_heading(line))
        .map(|line| truncate_with_ellipsis(line, META_DESCRIPTION_MAX_CHARS))
        .unwrap_or_default();

    SeoMetadata {
        title,
        meta_description,
        keywords: target_keywords.to_vec(),
        seo_score: seo_score(body, target_keywords),
    }
}

/// 70 plus 5 per keyword found (case-insensitive), capped at 100.
pub fn seo_score(body: &str, target_keywords: &[String]) -> u8 {
    let body = body.to_lowercase();
    target_keywords
        .iter()
        .filter(|keyword| body.contains(&keyword.to_lowercase()))
        .fold(BASE_SCORE, |score, _| {
            score.saturating_add(KEYWORD_BONUS).min(MAX_SCORE)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn title_meta_and_score_from_markdown_body() {
        let body = "# 5 Tips for Robotics\nThis is the first real paragraph about robotics tips.";
        let seo = derive(body, &keywords(&["robotics"]));

        assert_eq!(seo.title.as_deref(), Some("5 Tips for Robotics"));
        assert_eq!(
            seo.meta_description,
            "This is the first real paragraph about robotics tips."
        );
        assert_eq!(seo.keywords, vec!["robotics"]);
        assert_eq!(seo.seo_score, 75);
    }

    #[test]
    fn meta_description_skips_blank_and_heading_lines() {
        let body = "\n\n## Title\n\n## Section\n   \nBody text.\nMore.";
        let seo = derive(body, &[]);
        assert_eq!(seo.title.as_deref(), Some("Title"));
        assert_eq!(seo.meta_description, "Body text.");
    }

    #[test]
    fn long_meta_description_is_ellipsized() {
        let body = format!("Title\n{}", "word ".repeat(60));
        let seo = derive(&body, &[]);
        assert!(seo.meta_description.ends_with("..."));
        assert_eq!(seo.meta_description.chars().count(), META_DESCRIPTION_MAX_CHARS + 3);
    }

    #[test]
    fn single_line_body_has_no_meta_description() {
        let seo = derive("Just a tweet #launch", &[]);
        assert_eq!(seo.title.as_deref(), Some("Just a tweet #launch"));
        assert_eq!(seo.meta_description, "");
    }

    #[test]
    fn empty_body_has_no_title() {
        let seo = derive("  \n\n", &[]);
        assert_eq!(seo.title, None);
        assert_eq!(seo.seo_score, 70);
    }

    #[test]
    fn score_without_keywords_is_base() {
        assert_eq!(seo_score("anything", &[]), 70);
    }

    #[test]
    fn keyword_match_is_case_insensitive_and_missing_keywords_add_nothing() {
        let body = "Robotics AUTOMATION for warehouses";
        assert_eq!(seo_score(body, &keywords(&["robotics", "Automation", "drones"])), 80);
    }

    #[test]
    fn score_never_exceeds_100() {
        let many: Vec<String> = (0..20).map(|i| format!("kw{i}")).collect();
        let body = many.join(" ");
        assert_eq!(seo_score(&body, &many), 100);

        for n in 0..many.len() {
            let score = seo_score(&body, &many[..n]);
            assert!((70..=100).contains(&score));
        }
    }
}
