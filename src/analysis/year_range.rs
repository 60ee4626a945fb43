use crate::error::AggregationError;

pub const RANGE_SEPARATOR: char = '–';

/// `"2013–2018"` -> `"2013"`, `"2013"` -> `"2013"`.
pub fn opening_segment(year_range: &str) -> &str {
    year_range
        .split(RANGE_SEPARATOR)
        .next()
        .unwrap_or(year_range)
}

/// Key a rating is filed under: the closing year of a range, or the year itself.
pub fn rating_bucket(year_range: &str) -> &str {
    year_range.split(RANGE_SEPARATOR).nth(1).unwrap_or(year_range)
}

pub fn opening_year(year_range: &str) -> Result<i32, std::num::ParseIntError> {
    opening_segment(year_range).trim().parse::<i32>()
}

/// Stable sort of year-keyed entries by the opening year of each key.
pub fn sort_by_opening_year<V>(
    entries: Vec<(String, V)>,
    column: usize,
) -> Result<Vec<(String, V)>, AggregationError> {
    let mut keyed = entries
        .into_iter()
        .map(|(key, value)| match opening_year(&key) {
            Ok(year) => Ok((year, (key, value))),
            Err(e) => Err(AggregationError {
                column,
                field: "year_range",
                value: key,
                reason: e.to_string(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    keyed.sort_by_key(|(year, _)| *year);

    Ok(keyed.into_iter().map(|(_, entry)| entry).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_of_a_range() {
        assert_eq!(opening_segment("2013–2018"), "2013");
        assert_eq!(rating_bucket("2013–2018"), "2018");
    }

    #[test]
    fn segments_of_a_single_year() {
        assert_eq!(opening_segment("2021"), "2021");
        assert_eq!(rating_bucket("2021"), "2021");
    }

    #[test]
    fn hyphen_is_not_a_range_separator() {
        assert_eq!(rating_bucket("2013-2018"), "2013-2018");
        assert!(opening_year("2013-2018").is_err());
    }

    #[test]
    fn sorts_by_opening_year_keeping_ties_in_order() {
        let entries = vec![
            ("2019".to_string(), 'a'),
            ("2013–2018".to_string(), 'b'),
            ("2013".to_string(), 'c'),
        ];

        let sorted = sort_by_opening_year(entries, 0).unwrap();

        let keys: Vec<_> = sorted.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        assert_eq!(keys, vec![("2013–2018", 'b'), ("2013", 'c'), ("2019", 'a')]);
    }

    #[test]
    fn non_numeric_key_reports_the_column() {
        let err = sort_by_opening_year(vec![("TBA".to_string(), 1)], 4).unwrap_err();
        assert_eq!(err.column, 4);
        assert_eq!(err.field, "year_range");
        assert_eq!(err.value, "TBA");
    }
}
