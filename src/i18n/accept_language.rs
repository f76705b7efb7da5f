//! Accept-Language header parsing.
//!
//! Turns `fr-CH, fr;q=0.9, en;q=0.8, *;q=0.5` into tags ordered by
//! descending weight. Parsing never fails: entries that can't be understood
//! are dropped, and a weight that can't be read puts its entry last.

use std::cmp::Ordering;

/// A single language range from the header.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedTag {
    pub tag: String,
    /// `None` when the `q` parameter was present but malformed.
    pub quality: Option<f32>,
}

/// Parse the `q` parameter of one entry.
///
/// Returns `Some(Some(q))` for a valid weight, `Some(None)` for a malformed
/// one, and `None` when the entry has no `q` parameter.
fn parse_quality<'a>(params: impl Iterator<Item = &'a str>) -> Option<Option<f32>> {
    for param in params {
        let Some((key, value)) = param.split_once('=') else {
            continue;
        };
        if !key.trim().eq_ignore_ascii_case("q") {
            continue;
        }
        let quality = value
            .trim()
            .parse::<f32>()
            .ok()
            .filter(|q| q.is_finite() && (0.0..=1.0).contains(q));
        return Some(quality);
    }
    None
}

fn compare(a: &WeightedTag, b: &WeightedTag) -> Ordering {
    // Descending weight; malformed weights sort after every valid one.
    match (a.quality, b.quality) {
        (Some(qa), Some(qb)) => qb.partial_cmp(&qa).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Parse an Accept-Language value into tags, highest weight first.
///
/// Entries with `q=0` are "not acceptable" and removed, as are wildcards and
/// empty entries. Ties keep their header order.
pub fn parse(header: &str) -> Vec<WeightedTag> {
    let mut tags: Vec<WeightedTag> = header
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(';');
            let tag = parts.next()?.trim();
            if tag.is_empty() || tag == "*" {
                return None;
            }
            let quality = parse_quality(parts).unwrap_or(Some(1.0));
            if quality == Some(0.0) {
                return None;
            }
            Some(WeightedTag {
                tag: tag.to_string(),
                quality,
            })
        })
        .collect();

    // sort_by is stable, which preserves header order on ties.
    tags.sort_by(compare);
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(header: &str) -> Vec<String> {
        parse(header).into_iter().map(|t| t.tag).collect()
    }

    #[test]
    fn test_single_tag() {
        let parsed = parse("fr");
        assert_eq!(
            parsed,
            vec![WeightedTag {
                tag: "fr".to_string(),
                quality: Some(1.0)
            }]
        );
    }

    #[test]
    fn test_orders_by_weight() {
        assert_eq!(tags("en;q=0.5, ar;q=0.9, fr;q=0.7"), vec!["ar", "fr", "en"]);
    }

    #[test]
    fn test_unweighted_counts_as_one() {
        assert_eq!(tags("de;q=0.8, ja"), vec!["ja", "de"]);
    }

    #[test]
    fn test_ties_keep_header_order() {
        assert_eq!(tags("ko;q=0.5, nl;q=0.5, pl"), vec!["pl", "ko", "nl"]);
    }

    #[test]
    fn test_zero_weight_removed() {
        assert_eq!(tags("en;q=0, fr;q=0.1"), vec!["fr"]);
        assert_eq!(tags("en;q=0.000"), Vec::<String>::new());
    }

    #[test]
    fn test_wildcard_and_empty_entries_removed() {
        assert_eq!(tags(" , *;q=0.9, ,tr"), vec!["tr"]);
    }

    #[test]
    fn test_malformed_weight_sorts_last() {
        assert_eq!(tags("ru;q=abc, sv;q=0.1, uk;q=2"), vec!["sv", "ru", "uk"]);
        assert_eq!(parse("ru;q=abc")[0].quality, None);
    }

    #[test]
    fn test_parameters_other_than_q_ignored() {
        assert_eq!(tags("vi;level=1;q=0.2, zh;foo"), vec!["zh", "vi"]);
    }

    #[test]
    fn test_whitespace_and_case_in_q() {
        assert_eq!(tags("hi ; Q = 0.3 , hu ;q=0.4"), vec!["hu", "hi"]);
    }

    #[test]
    fn test_garbage_does_not_panic() {
        let _ = parse(";;;,,,q=,=;q");
        let _ = parse("en;q=NaN, fr;q=inf, de;q=-1");
        assert_eq!(tags("en;q=NaN, fr;q=0.5"), vec!["fr", "en"]);
    }

    #[test]
    fn test_empty_header() {
        assert!(parse("").is_empty());
    }
}
