//! Accept-Language header parsing.
//!
//! Turns a raw header value such as `"fr-CH, fr;q=0.9, en;q=0.8, *;q=0.5"`
//! into language ranges ranked by quality. Parsing is total: anything
//! malformed degrades to fewer (or zero) ranges instead of an error.

/// The wildcard language range.
pub const WILDCARD: &str = "*";

/// One entry of an Accept-Language header.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageRange {
    /// Lowercased language tag, or `*`
    tag: String,
    /// Quality weight in `[0, 1]`
    quality: f32,
}

impl LanguageRange {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn quality(&self) -> f32 {
        self.quality
    }

    pub fn is_wildcard(&self) -> bool {
        self.tag == WILDCARD
    }

    /// The primary subtag, e.g. `en` for `en-us`.
    pub fn primary_subtag(&self) -> &str {
        self.tag.split('-').next().unwrap_or(&self.tag)
    }
}

/// Language ranges ordered by descending quality.
///
/// Equal qualities keep their header order. Iterating is cheap and can be
/// repeated any number of times.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageRanges {
    ranges: Vec<LanguageRange>,
}

impl LanguageRanges {
    pub fn iter(&self) -> std::slice::Iter<'_, LanguageRange> {
        self.ranges.iter()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl<'a> IntoIterator for &'a LanguageRanges {
    type Item = &'a LanguageRange;
    type IntoIter = std::slice::Iter<'a, LanguageRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

/// Parse an Accept-Language header value.
///
/// - Segments are split on `,`, parameters on `;`
/// - A missing `q` defaults to 1.0; out-of-range values are clamped and
///   unparseable ones become 0.0
/// - Tags are trimmed and lowercased; empty tags are skipped
/// - Only the first occurrence of a tag is kept
/// - The result is stably sorted by quality, highest first
///
/// # Example
/// ```
/// use locale_negotiator::i18n::accept_language;
///
/// let ranges = accept_language::parse(Some("en;q=0.5, fr"));
/// let tags: Vec<&str> = ranges.iter().map(|r| r.tag()).collect();
/// assert_eq!(tags, vec!["fr", "en"]);
/// ```
pub fn parse(header: Option<&str>) -> LanguageRanges {
    let Some(header) = header else {
        return LanguageRanges::default();
    };

    let mut ranges: Vec<LanguageRange> = Vec::new();

    for segment in header.split(',') {
        let mut parts = segment.split(';');
        let tag = parts.next().unwrap_or_default().trim().to_ascii_lowercase();

        if tag.is_empty() || ranges.iter().any(|range| range.tag == tag) {
            continue;
        }

        ranges.push(LanguageRange {
            tag,
            quality: parse_quality(parts),
        });
    }

    // Vec::sort_by is stable, so equal qualities keep header order
    ranges.sort_by(|a, b| b.quality.total_cmp(&a.quality));

    LanguageRanges { ranges }
}

/// Read the `q` parameter from the parameters following a tag.
fn parse_quality<'a>(params: impl Iterator<Item = &'a str>) -> f32 {
    for param in params {
        let Some((key, value)) = param.split_once('=') else {
            continue;
        };
        if !key.trim().eq_ignore_ascii_case("q") {
            continue;
        }

        return match value.trim().parse::<f32>() {
            Ok(q) if q.is_nan() => 0.0,
            Ok(q) => q.clamp(0.0, 1.0),
            Err(_) => 0.0,
        };
    }

    1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tags(ranges: &LanguageRanges) -> Vec<&str> {
        ranges.iter().map(LanguageRange::tag).collect()
    }

    fn qualities(ranges: &LanguageRanges) -> Vec<f32> {
        ranges.iter().map(LanguageRange::quality).collect()
    }

    // ==================== Empty Input Tests ====================

    #[test]
    fn test_parse_none() {
        assert!(parse(None).is_empty());
    }

    #[test]
    fn test_parse_empty_and_blank() {
        assert!(parse(Some("")).is_empty());
        assert!(parse(Some("  ")).is_empty());
        assert!(parse(Some(",,;")).is_empty());
    }

    // ==================== Quality Tests ====================

    #[test]
    fn test_parse_default_quality() {
        let ranges = parse(Some("fr"));
        assert_eq!(tags(&ranges), vec!["fr"]);
        assert_eq!(qualities(&ranges), vec![1.0]);
    }

    #[test]
    fn test_parse_sorts_by_quality() {
        let ranges = parse(Some("en;q=0.5, fr;q=0.9, de"));
        assert_eq!(tags(&ranges), vec!["de", "fr", "en"]);
        assert_eq!(qualities(&ranges), vec![1.0, 0.9, 0.5]);
    }

    #[test]
    fn test_parse_ties_keep_header_order() {
        let ranges = parse(Some("es;q=0.8, en, it;q=0.8, fr"));
        assert_eq!(tags(&ranges), vec!["en", "fr", "es", "it"]);
    }

    #[test]
    fn test_parse_clamps_quality() {
        let ranges = parse(Some("en;q=1.5, fr;q=-0.3"));
        assert_eq!(tags(&ranges), vec!["en", "fr"]);
        assert_eq!(qualities(&ranges), vec![1.0, 0.0]);
    }

    #[test]
    fn test_parse_unparseable_quality_is_zero() {
        let ranges = parse(Some("en;q=abc, fr;q=NaN, de;q=0.1"));
        assert_eq!(tags(&ranges), vec!["de", "en", "fr"]);
        assert_eq!(qualities(&ranges), vec![0.1, 0.0, 0.0]);
    }

    #[test]
    fn test_parse_quality_key_is_case_insensitive() {
        let ranges = parse(Some("en; Q = 0.4"));
        assert_eq!(qualities(&ranges), vec![0.4]);
    }

    #[test]
    fn test_parse_ignores_other_params() {
        let ranges = parse(Some("en;level=1;q=0.3"));
        assert_eq!(qualities(&ranges), vec![0.3]);
    }

    // ==================== Tag Tests ====================

    #[test]
    fn test_parse_trims_and_lowercases() {
        let ranges = parse(Some("  EN-US ;q=0.9 ,Fr"));
        assert_eq!(tags(&ranges), vec!["fr", "en-us"]);
    }

    #[test]
    fn test_parse_keeps_first_duplicate() {
        let ranges = parse(Some("en;q=0.2, fr;q=0.5, EN;q=1.0"));
        assert_eq!(tags(&ranges), vec!["fr", "en"]);
        assert_eq!(qualities(&ranges), vec![0.5, 0.2]);
    }

    #[test]
    fn test_parse_wildcard() {
        let ranges = parse(Some("*;q=0.5, en"));
        assert_eq!(tags(&ranges), vec!["en", "*"]);
        assert!(ranges.iter().nth(1).unwrap().is_wildcard());
    }

    #[test]
    fn test_primary_subtag() {
        let ranges = parse(Some("en-US, fr"));
        let primaries: Vec<&str> = ranges.iter().map(LanguageRange::primary_subtag).collect();
        assert_eq!(primaries, vec!["en", "fr"]);
    }

    #[test]
    fn test_ranges_are_restartable() {
        let ranges = parse(Some("fr, en;q=0.8"));
        let first: Vec<&str> = ranges.iter().map(LanguageRange::tag).collect();
        let second: Vec<&str> = (&ranges).into_iter().map(LanguageRange::tag).collect();
        assert_eq!(first, second);
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn parse_never_panics(header in ".*") {
            let _ = parse(Some(&header));
        }

        #[test]
        fn parse_output_is_sorted_and_bounded(header in "[a-zA-Z*;=.,0-9 -]{0,64}") {
            let ranges = parse(Some(&header));
            let qs = qualities(&ranges);
            prop_assert!(qs.iter().all(|q| (0.0..=1.0).contains(q)));
            prop_assert!(qs.windows(2).all(|w| w[0] >= w[1]));
        }

        #[test]
        fn parse_output_has_no_duplicate_tags(header in "[a-cA-C;=.,0-9 -]{0,48}") {
            let ranges = parse(Some(&header));
            let all = tags(&ranges);
            for (i, tag) in all.iter().enumerate() {
                prop_assert!(!all[i + 1..].contains(tag));
            }
        }
    }
}
