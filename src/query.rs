//! Argument shapes accepted by the query methods, and their normalization
//! into a single [`DateQuery`] before anything is validated.

use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{school_error::SchoolError, text_manipulators::parse_month};

/// A month as a caller may hand it over: a number, or text from a form/CLI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MonthInput {
    Number(i64),
    Text(String),
}

impl MonthInput {
    fn resolve(&self) -> Result<u32, SchoolError> {
        match self {
            MonthInput::Number(n) => u32::try_from(*n)
                .ok()
                .filter(|m| (1..=12).contains(m))
                .ok_or_else(|| SchoolError::MonthRange(n.to_string())),
            MonthInput::Text(text) => {
                parse_month(text).ok_or_else(|| SchoolError::MonthRange(text.clone()))
            }
        }
    }
}

impl From<u32> for MonthInput {
    fn from(month: u32) -> Self {
        MonthInput::Number(i64::from(month))
    }
}

/// The structured form: `{"year": 2024, "month": 5, "default": [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryOptions<D> {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub month: Option<MonthInput>,
    #[serde(default)]
    pub default: Option<D>,
}

impl<D> Default for QueryOptions<D> {
    fn default() -> Self {
        Self {
            year: None,
            month: None,
            default: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum QueryArgs<D> {
    /// No date at all; the portal picks the current month.
    Bare,
    Date {
        year: Option<i32>,
        month: Option<u32>,
    },
    Options(QueryOptions<D>),
}

impl<D> Default for QueryArgs<D> {
    fn default() -> Self {
        QueryArgs::Bare
    }
}

impl<D> From<(i32, u32)> for QueryArgs<D> {
    fn from((year, month): (i32, u32)) -> Self {
        QueryArgs::Date {
            year: Some(year),
            month: Some(month),
        }
    }
}

impl<D> From<QueryOptions<D>> for QueryArgs<D> {
    fn from(options: QueryOptions<D>) -> Self {
        QueryArgs::Options(options)
    }
}

impl<D: DeserializeOwned + Default> QueryArgs<D> {
    /// An object is the options form, `null` is bare. Anything else is refused.
    pub fn from_json(value: Value) -> Result<Self, SchoolError> {
        match value {
            Value::Null => Ok(QueryArgs::Bare),
            object @ Value::Object(_) => Ok(QueryArgs::Options(serde_json::from_value(object)?)),
            other => Err(SchoolError::InvalidOptions(serde::de::Error::custom(format!(
                "expected an options object, got {other}"
            )))),
        }
    }
}

/// Canonical, validated query: both date parts or neither, month in 1..=12.
#[derive(Debug, Clone, PartialEq)]
pub struct DateQuery<D> {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub default: D,
}

impl<D: Default> QueryArgs<D> {
    pub fn normalize(self) -> Result<DateQuery<D>, SchoolError> {
        let (year, month, default) = match self {
            QueryArgs::Bare => (None, None, D::default()),
            QueryArgs::Date { year, month } => (year, month.map(MonthInput::from), D::default()),
            QueryArgs::Options(options) => (
                options.year,
                options.month,
                options.default.unwrap_or_default(),
            ),
        };
        let month = validate_date(year, month.as_ref())?;
        Ok(DateQuery {
            year,
            month,
            default,
        })
    }
}

/// Completeness is checked before the month range.
pub fn validate_date(
    year: Option<i32>,
    month: Option<&MonthInput>,
) -> Result<Option<u32>, SchoolError> {
    if year.is_some() != month.is_some() {
        return Err(SchoolError::IncompleteDate);
    }
    month.map(MonthInput::resolve).transpose()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn bare_and_date_get_the_default_fallback() {
        let bare = QueryArgs::<String>::Bare.normalize().unwrap();
        assert_eq!(bare, DateQuery { year: None, month: None, default: String::new() });

        let dated = QueryArgs::<String>::from((2024, 5)).normalize().unwrap();
        assert_eq!(dated.year, Some(2024));
        assert_eq!(dated.month, Some(5));
        assert_eq!(dated.default, "");
    }

    #[test]
    fn options_carry_their_own_default() {
        let args = QueryArgs::<Vec<String>>::from_json(json!({
            "year": 2024,
            "month": 5,
            "default": ["none"]
        }))
        .unwrap();
        let query = args.normalize().unwrap();
        assert_eq!(query.year, Some(2024));
        assert_eq!(query.month, Some(5));
        assert_eq!(query.default, vec!["none".to_string()]);
    }

    #[test]
    fn month_may_arrive_as_text() {
        let args = QueryArgs::<String>::from_json(json!({ "year": 2024, "month": "7" })).unwrap();
        assert_eq!(args.normalize().unwrap().month, Some(7));
    }

    #[test]
    fn partial_dates_are_incomplete() {
        let only_year = QueryArgs::<String>::Date { year: Some(2024), month: None };
        assert!(matches!(only_year.normalize(), Err(SchoolError::IncompleteDate)));

        let only_month = QueryArgs::<String>::from_json(json!({ "month": 3 })).unwrap();
        assert!(matches!(only_month.normalize(), Err(SchoolError::IncompleteDate)));
    }

    #[test]
    fn month_out_of_range_or_empty_is_rejected() {
        for bad in [json!(13), json!(0), json!(-1), json!("")] {
            let args =
                QueryArgs::<String>::from_json(json!({ "year": 2024, "month": bad })).unwrap();
            assert!(matches!(args.normalize(), Err(SchoolError::MonthRange(_))));
        }
        let thirteen = QueryArgs::<String>::from((2024, 13));
        assert!(matches!(thirteen.normalize(), Err(SchoolError::MonthRange(m)) if m == "13"));
    }

    #[test]
    fn non_object_json_is_invalid_options() {
        assert!(matches!(
            QueryArgs::<String>::from_json(json!(2024)),
            Err(SchoolError::InvalidOptions(_))
        ));
        assert!(matches!(
            QueryArgs::<String>::from_json(Value::Null),
            Ok(QueryArgs::Bare)
        ));
    }
}
