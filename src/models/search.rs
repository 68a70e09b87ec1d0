// src/models/search.rs
use std::collections::HashMap;
use std::str::FromStr;
use crate::error::AppError;

/// Results per page, both upstream and in our own pagination.
pub const PAGE_SIZE: u32 = 10;

/// Upstream search radius codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeCode {
    #[default]
    M300 = 1,
    M500 = 2,
    M1000 = 3,
    M2000 = 4,
    M3000 = 5,
}

impl RangeCode {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn meters(self) -> u32 {
        match self {
            RangeCode::M300 => 300,
            RangeCode::M500 => 500,
            RangeCode::M1000 => 1000,
            RangeCode::M2000 => 2000,
            RangeCode::M3000 => 3000,
        }
    }

    fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(RangeCode::M300),
            2 => Some(RangeCode::M500),
            3 => Some(RangeCode::M1000),
            4 => Some(RangeCode::M2000),
            5 => Some(RangeCode::M3000),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Keep whatever order the upstream returned.
    #[default]
    Upstream,
    /// Re-sort locally, nearest first.
    Distance,
    /// Ask the upstream for its recommended order (`order=4`).
    Recommended,
}

impl SortMode {
    fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("distance") => SortMode::Distance,
            Some("4") => SortMode::Recommended,
            _ => SortMode::Upstream,
        }
    }

    /// Value forwarded as the upstream `order` parameter, if any.
    pub fn upstream_order(self) -> Option<&'static str> {
        match self {
            SortMode::Recommended => Some("4"),
            SortMode::Upstream | SortMode::Distance => None,
        }
    }
}

/// Opaque upstream filter codes, each present only when non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub genre: Option<String>,
    pub special_category: Option<String>,
    pub budget: Option<String>,
}

/// A validated search. Built once per inbound call and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub page: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub range: RangeCode,
    /// Already normalised to `word+word` form.
    pub keyword: Option<String>,
    pub filters: SearchFilters,
    pub sort: SortMode,
}

impl SearchRequest {
    /// Like [`Self::from_query`], for a raw pair list. The first
    /// occurrence of a repeated key wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, AppError> {
        let mut params = HashMap::with_capacity(pairs.len());
        for (key, value) in pairs {
            params.entry(key).or_insert(value);
        }
        Self::from_query(&params)
    }

    /// Validates raw query parameters. Fails on the first bad field.
    pub fn from_query(params: &HashMap<String, String>) -> Result<Self, AppError> {
        let get = |name: &str| params.get(name).map(String::as_str);

        let page = parse_or(get("page"), "page", 1i64)?;
        if page < 1 {
            return Err(AppError::validation("page must be 1 or greater"));
        }
        let page = u32::try_from(page)
            .map_err(|_| AppError::validation("page is out of range"))?;

        let latitude = parse_required::<f64>(get("lat"), "lat")?;
        let longitude = parse_required::<f64>(get("lng"), "lng")?;
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(AppError::validation("lat must be between -90 and 90"));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::validation("lng must be between -180 and 180"));
        }

        let range_code = parse_or(get("range"), "range", 1i64)?;
        let range = RangeCode::from_code(range_code)
            .ok_or_else(|| AppError::validation("range must be between 1 and 5"))?;

        Ok(SearchRequest {
            page,
            latitude,
            longitude,
            range,
            keyword: get("keyword").and_then(normalize_keyword),
            filters: SearchFilters {
                genre: non_empty(get("genre")),
                special_category: non_empty(get("special_category")),
                budget: non_empty(get("budget")),
            },
            sort: SortMode::parse(get("sort_by")),
        })
    }

    /// 1-based index of the first result on this page.
    pub fn start(&self) -> u64 {
        (u64::from(self.page) - 1) * u64::from(PAGE_SIZE) + 1
    }
}

/// Turns `"ラーメン　個室"` into `"ラーメン+個室"`; `None` if nothing is left.
pub fn normalize_keyword(raw: &str) -> Option<String> {
    let words: Vec<&str> = raw
        .split(|c: char| c == ' ' || c == '\u{3000}')
        .filter(|w| !w.is_empty())
        .collect();

    if words.is_empty() {
        None
    } else {
        Some(words.join("+"))
    }
}

fn non_empty(raw: Option<&str>) -> Option<String> {
    raw.filter(|v| !v.is_empty()).map(str::to_string)
}

fn parse_required<T: FromStr>(raw: Option<&str>, name: &str) -> Result<T, AppError> {
    let raw = raw.ok_or_else(|| AppError::validation(format!("{name} is required")))?;
    raw.trim()
        .parse()
        .map_err(|_| AppError::validation(format!("{name} must be a number")))
}

fn parse_or<T: FromStr>(raw: Option<&str>, name: &str, default: T) -> Result<T, AppError> {
    match raw {
        Some(_) => parse_required(raw, name),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn expect_validation(pairs: &[(&str, &str)]) -> String {
        match SearchRequest::from_query(&query(pairs)) {
            Err(AppError::ValidationError(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn minimal_query_gets_defaults() {
        let req = SearchRequest::from_query(&query(&[("lat", "35.681236"), ("lng", "139.767125")]))
            .unwrap();
        assert_eq!(req.page, 1);
        assert_eq!(req.range, RangeCode::M300);
        assert_eq!(req.sort, SortMode::Upstream);
        assert_eq!(req.keyword, None);
        assert_eq!(req.filters, SearchFilters::default());
        assert_eq!(req.start(), 1);
    }

    #[test]
    fn missing_coordinates_are_rejected() {
        assert_eq!(expect_validation(&[("range", "3")]), "lat is required");
        assert_eq!(expect_validation(&[("lat", "35.6"), ("range", "3")]), "lng is required");
    }

    #[test]
    fn non_numeric_fields_are_rejected() {
        assert_eq!(expect_validation(&[("lat", "xyz"), ("lng", "139.76")]), "lat must be a number");
        assert_eq!(expect_validation(&[("lat", "35.68"), ("lng", "pqr")]), "lng must be a number");
        assert_eq!(
            expect_validation(&[("lat", "35.68"), ("lng", "139.76"), ("range", "abc")]),
            "range must be a number"
        );
        assert_eq!(
            expect_validation(&[("lat", "35.68"), ("lng", "139.76"), ("page", "two")]),
            "page must be a number"
        );
        assert_eq!(expect_validation(&[("lat", ""), ("lng", "139.76")]), "lat must be a number");
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        expect_validation(&[("lat", "91"), ("lng", "0")]);
        expect_validation(&[("lat", "0"), ("lng", "-180.5")]);
        expect_validation(&[("lat", "NaN"), ("lng", "0")]);
        expect_validation(&[("lat", "0"), ("lng", "0"), ("range", "6")]);
        expect_validation(&[("lat", "0"), ("lng", "0"), ("page", "0")]);
    }

    #[test]
    fn filters_and_sort_are_carried() {
        let req = SearchRequest::from_query(&query(&[
            ("lat", "35.68"),
            ("lng", "139.76"),
            ("range", "5"),
            ("page", "3"),
            ("genre", "G013,G001"),
            ("special_category", "SC01"),
            ("budget", ""),
            ("sort_by", "distance"),
        ]))
        .unwrap();
        assert_eq!(req.range.meters(), 3000);
        assert_eq!(req.start(), 21);
        assert_eq!(req.filters.genre.as_deref(), Some("G013,G001"));
        assert_eq!(req.filters.special_category.as_deref(), Some("SC01"));
        assert_eq!(req.filters.budget, None);
        assert_eq!(req.sort, SortMode::Distance);
    }

    #[test]
    fn first_repeated_key_wins() {
        let pairs = [("lat", "1"), ("lat", "x"), ("lng", "139.76"), ("lng", "")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let req = SearchRequest::from_pairs(pairs).unwrap();
        assert_eq!(req.latitude, 1.0);
        assert_eq!(req.longitude, 139.76);
    }

    #[test]
    fn sort_values() {
        assert_eq!(SortMode::parse(Some("4")), SortMode::Recommended);
        assert_eq!(SortMode::parse(Some("rating")), SortMode::Upstream);
        assert_eq!(SortMode::parse(None), SortMode::Upstream);
        assert_eq!(SortMode::Recommended.upstream_order(), Some("4"));
        assert_eq!(SortMode::Distance.upstream_order(), None);
    }

    #[test]
    fn keyword_normalization() {
        assert_eq!(normalize_keyword("ラーメン　個室").as_deref(), Some("ラーメン+個室"));
        assert_eq!(normalize_keyword("  sushi   bar ").as_deref(), Some("sushi+bar"));
        assert_eq!(normalize_keyword("　 　"), None);
        assert_eq!(normalize_keyword(""), None);
    }
}
