use crate::dates::parse_date;
use crate::entities::{Exercise, User};
use crate::errors::DomainError;
use chrono::NaiveDate;

/// Filter applied when reading a user's exercise log.
///
/// Both date bounds are inclusive. A `limit` of `None` returns every
/// matching exercise.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LogQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<usize>,
}

impl LogQuery {
    /// Build a query from raw query-string values. Blank values count as
    /// absent, `limit=0` means no cap, and anything malformed is rejected.
    pub fn parse(
        from: Option<&str>,
        to: Option<&str>,
        limit: Option<&str>,
    ) -> Result<Self, DomainError> {
        let from = non_blank(from).map(parse_date).transpose()?;
        let to = non_blank(to).map(parse_date).transpose()?;

        let limit = match non_blank(limit) {
            Some(raw) => match raw.parse::<usize>() {
                Ok(0) => None,
                Ok(limit) => Some(limit),
                Err(_) => return Err(DomainError::InvalidLimit(raw.to_string())),
            },
            None => None,
        };

        Ok(Self { from, to, limit })
    }

    pub fn matches(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// A user together with the exercises selected by a `LogQuery`,
/// sorted by date ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseLog {
    pub user: User,
    pub exercises: Vec<Exercise>,
}

impl ExerciseLog {
    pub fn count(&self) -> usize {
        self.exercises.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_query_has_no_bounds() {
        let query = LogQuery::parse(None, Some(""), None).unwrap();
        assert_eq!(query, LogQuery::default());
        assert!(query.matches(ymd(1999, 12, 31)));
    }

    #[test]
    fn bounds_are_inclusive() {
        let query = LogQuery::parse(Some("2023-01-01"), Some("2023-01-31"), None).unwrap();
        assert!(query.matches(ymd(2023, 1, 1)));
        assert!(query.matches(ymd(2023, 1, 31)));
        assert!(!query.matches(ymd(2022, 12, 31)));
        assert!(!query.matches(ymd(2023, 2, 1)));
    }

    #[test]
    fn zero_limit_means_unbounded() {
        let query = LogQuery::parse(None, None, Some("0")).unwrap();
        assert_eq!(query.limit, None);

        let query = LogQuery::parse(None, None, Some("2")).unwrap();
        assert_eq!(query.limit, Some(2));
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert!(matches!(
            LogQuery::parse(Some("yesterday"), None, None),
            Err(DomainError::InvalidDate(_))
        ));
        assert!(matches!(
            LogQuery::parse(None, None, Some("many")),
            Err(DomainError::InvalidLimit(_))
        ));
        assert!(matches!(
            LogQuery::parse(None, None, Some("-1")),
            Err(DomainError::InvalidLimit(_))
        ));
    }
}
