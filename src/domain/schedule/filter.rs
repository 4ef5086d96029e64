use chrono::NaiveDate;
use thiserror::Error;

/// One clause of a session list query. Clauses are combined with AND;
/// `Search` carries its own internal OR over name and description.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionFilter {
    EventName(String),
    OnDate(NaiveDate),
    HasTrack(i64),
    HasSpeaker(i64),
    Search(String),
}

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("invalid value for {param}: {value:?} is not a valid integer id")]
    InvalidId { param: &'static str, value: String },
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Builds the AND-list of filter clauses from raw query parameters.
/// Empty or whitespace-only values count as absent, so `?event_name=`
/// leaves the query unconstrained. Parses fail closed: a non-numeric id
/// or malformed date is an error here, before anything reaches the
/// store.
pub fn build_session_filters(
    event_name: Option<String>,
    date: Option<&str>,
    track_id: Option<&str>,
    speaker_id: Option<&str>,
    search: Option<String>,
) -> Result<Vec<SessionFilter>, FilterError> {
    let mut filters = Vec::new();
    if let Some(name) = event_name.filter(|s| !s.trim().is_empty()) {
        filters.push(SessionFilter::EventName(name));
    }
    if let Some(raw) = date.filter(|s| !s.trim().is_empty()) {
        let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| FilterError::InvalidDate(raw.to_string()))?;
        filters.push(SessionFilter::OnDate(parsed));
    }
    if let Some(raw) = track_id.filter(|s| !s.trim().is_empty()) {
        filters.push(SessionFilter::HasTrack(parse_id("track_id", raw)?));
    }
    if let Some(raw) = speaker_id.filter(|s| !s.trim().is_empty()) {
        filters.push(SessionFilter::HasSpeaker(parse_id("speaker_id", raw)?));
    }
    if let Some(text) = search.filter(|s| !s.trim().is_empty()) {
        filters.push(SessionFilter::Search(text));
    }
    Ok(filters)
}

pub fn parse_id(param: &'static str, raw: &str) -> Result<i64, FilterError> {
    raw.trim().parse::<i64>().map_err(|_| FilterError::InvalidId {
        param,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_params_yields_unconstrained_query() {
        let filters = build_session_filters(None, None, None, None, None).unwrap();
        assert!(filters.is_empty());
    }

    #[test]
    fn all_params_combine_in_order() {
        let filters = build_session_filters(
            Some("RustConf".into()),
            Some("2024-01-01"),
            Some("3"),
            Some("7"),
            Some("intro".into()),
        )
        .unwrap();
        assert_eq!(
            filters,
            vec![
                SessionFilter::EventName("RustConf".into()),
                SessionFilter::OnDate(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
                SessionFilter::HasTrack(3),
                SessionFilter::HasSpeaker(7),
                SessionFilter::Search("intro".into()),
            ]
        );
    }

    #[test]
    fn empty_and_blank_values_count_as_absent() {
        let filters = build_session_filters(
            Some(String::new()),
            Some(""),
            Some("  "),
            Some(""),
            Some("   ".into()),
        )
        .unwrap();
        assert!(filters.is_empty());
    }

    #[test]
    fn non_numeric_track_id_fails_closed() {
        let err = build_session_filters(None, None, Some("abc"), None, None).unwrap_err();
        assert!(matches!(err, FilterError::InvalidId { param: "track_id", .. }));
    }

    #[test]
    fn non_numeric_speaker_id_fails_closed() {
        let err = build_session_filters(None, None, None, Some("1.5"), None).unwrap_err();
        assert!(matches!(err, FilterError::InvalidId { param: "speaker_id", .. }));
    }

    #[test]
    fn malformed_date_fails_closed() {
        let err =
            build_session_filters(None, Some("01/02/2024"), None, None, None).unwrap_err();
        assert!(matches!(err, FilterError::InvalidDate(_)));
    }

    #[test]
    fn surrounding_whitespace_in_ids_is_tolerated() {
        let filters = build_session_filters(None, None, Some(" 42 "), None, None).unwrap();
        assert_eq!(filters, vec![SessionFilter::HasTrack(42)]);
    }
}
