//! Report assembly and terminal rendering.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sov_engine::{display_name, rank_brands, Analysis, SovWeights};

/// Serializable result of one analysis run.
#[derive(Debug, Serialize)]
pub(crate) struct SovReport {
    pub generated_at: DateTime<Utc>,
    /// Query the records were collected for, when collected in the same run.
    pub query: Option<String>,
    pub record_count: usize,
    pub primary_brand: Option<String>,
    pub weights: SovWeights,
    #[serde(flatten)]
    pub analysis: Analysis,
}

/// Renders the per-brand table, highest composite share first.
pub(crate) fn render_table(analysis: &Analysis) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<15} | {:<10} | {:<10} | {:<10} | COMPOSITE SOV",
        "BRAND", "MENTIONS", "SENTIMENT", "VIEWS SOV"
    );
    let _ = writeln!(out, "{}", "-".repeat(70));

    for (brand, share) in rank_brands(&analysis.shares) {
        let (mentions, sentiment) = analysis
            .stats
            .get(brand)
            .map_or((0, 0.0), |s| (s.mentions, s.average_sentiment()));
        let views_share = format!("{:.2}%", share.engagement_share);
        let _ = writeln!(
            out,
            "{:<15} | {:<10} | {:<10.2} | {:<10} | {:.2}%",
            display_name(brand),
            mentions,
            sentiment,
            views_share,
            share.composite_share
        );
    }
    out
}

/// Fixed follow-up actions for the content and marketing team.
///
/// Names the primary brand when one is set.
pub(crate) fn render_recommendations(primary: Option<&str>) -> String {
    let brand = primary.map_or_else(|| "our brand".to_string(), display_name);
    let items = [
        "**Cross-Platform Strategy**: Ensure consistency between YouTube video content \
         and Google search articles."
            .to_string(),
        "**SEO & Video Synergy**: Embed top-performing YouTube videos in high-ranking \
         blog posts to boost engagement."
            .to_string(),
        format!(
            "**Influencer Collaboration**: Identify channels with high view counts \
             (Engagement SoV) but low {brand} mentions and partner with them."
        ),
        "**Competitive Benchmarking**: Analyze the top-performing videos of competitors \
         to understand what content format (review, unboxing, comparison) works best."
            .to_string(),
        "**Sentiment Analysis**: Monitor comments on top videos to address user concerns \
         and highlight positive feedback."
            .to_string(),
    ];

    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        let _ = writeln!(out, "{}. {item}", i + 1);
    }
    out
}

pub(crate) fn print_report(report: &SovReport) {
    match &report.query {
        Some(query) => println!(
            "--- Share of Voice for '{query}' ({} results) ---",
            report.record_count
        ),
        None => println!("--- Share of Voice ({} results) ---", report.record_count),
    }
    println!();
    print!("{}", render_table(&report.analysis));
    println!();
    println!("--- Insights ---");
    for insight in &report.analysis.insights {
        println!("- {insight}");
    }
    println!();
    println!("--- Recommendations for Content & Marketing Team ---");
    print!("{}", render_recommendations(report.primary_brand.as_deref()));
}

#[cfg(test)]
mod tests {
    use sov_core::{ResultRecord, Source};
    use sov_engine::SovAnalyzer;

    use super::*;

    fn sample_analysis() -> Analysis {
        let records = vec![
            ResultRecord::new(Source::Web).with_title("Atomberg fan review"),
            ResultRecord::new(Source::Video)
                .with_title("Havells fan unboxing")
                .with_views("10K views"),
        ];
        SovAnalyzer::new(|_: &str| 0.0)
            .run(&records, &["atomberg", "havells"], Some("atomberg"))
            .unwrap()
    }

    #[test]
    fn table_lists_brands_by_composite_share() {
        let table = render_table(&sample_analysis());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("Havells"), "got {:?}", lines[2]);
        assert!(lines[2].ends_with("75.00%"), "got {:?}", lines[2]);
        assert!(lines[3].starts_with("Atomberg"), "got {:?}", lines[3]);
        assert!(lines[3].ends_with("25.00%"), "got {:?}", lines[3]);
    }

    #[test]
    fn table_for_empty_analysis_has_only_header() {
        let analysis = SovAnalyzer::new(|_: &str| 0.0)
            .run(&[], &["atomberg"], None)
            .unwrap();
        assert_eq!(render_table(&analysis).lines().count(), 2);
    }

    #[test]
    fn recommendations_name_the_primary_brand() {
        let text = render_recommendations(Some("atomberg"));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("1. **Cross-Platform Strategy**"));
        assert!(lines[2].contains("but low Atomberg mentions"), "got {:?}", lines[2]);
        assert!(lines[4].starts_with("5. **Sentiment Analysis**"));
    }

    #[test]
    fn recommendations_without_primary_stay_generic() {
        let text = render_recommendations(None);
        assert!(text.contains("but low our brand mentions"));
    }

    #[test]
    fn report_json_flattens_analysis() {
        let report = SovReport {
            generated_at: Utc::now(),
            query: Some("smart ceiling fan india".to_string()),
            record_count: 2,
            primary_brand: Some("atomberg".to_string()),
            weights: SovWeights::default(),
            analysis: sample_analysis(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["record_count"], 2);
        assert_eq!(json["weights"]["web_multiplier"], 1.5);
        assert_eq!(json["stats"]["havells"]["total_views"], 10_000);
        assert_eq!(json["insights"].as_array().map(Vec::len), Some(3));
        assert!(json["generated_at"].is_string());
    }
}
