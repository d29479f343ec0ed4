//! Pure projections over a ledger snapshot: filter, sort, sum, and the
//! display/CSV shapes. Nothing in here holds state or touches storage.

use crate::core::expense::Expense;
use anyhow::bail;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::str::FromStr;

/// A calendar month used to narrow the visible set, parsed from `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthFilter {
    pub year: i32,
    pub month: u32,
}

impl MonthFilter {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl FromStr for MonthFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((year, month)) = s.trim().split_once('-') else {
            bail!("month filter must look like YYYY-MM, got '{s}'");
        };
        let year: i32 = year
            .parse()
            .map_err(|_| anyhow::anyhow!("month filter has an invalid year: '{s}'"))?;
        let month: u32 = month
            .parse()
            .map_err(|_| anyhow::anyhow!("month filter has an invalid month: '{s}'"))?;
        if !(1..=12).contains(&month) {
            bail!("month filter month must be 01-12, got '{s}'");
        }
        Ok(Self { year, month })
    }
}

/// Lazily yields the records matching the filter; no filter means all of
/// them. Pure function of its inputs, safe to materialize or restart.
pub fn filter_by_month<'a>(
    records: &'a [Expense],
    filter: Option<MonthFilter>,
) -> impl Iterator<Item = &'a Expense> + 'a {
    records
        .iter()
        .filter(move |e| filter.map_or(true, |m| m.contains(e.date)))
}

/// Most recent first. The sort is stable, so records sharing a date keep
/// their relative input order.
pub fn sort_by_date_desc<'a>(records: impl IntoIterator<Item = &'a Expense>) -> Vec<&'a Expense> {
    let mut sorted: Vec<&Expense> = records.into_iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// Decimal-safe sum of the amounts, rounded to the two decimals shown to
/// the user. Exactly zero for an empty set.
pub fn compute_total<'a>(records: impl IntoIterator<Item = &'a Expense>) -> Decimal {
    records
        .into_iter()
        .map(|e| e.amount)
        .sum::<Decimal>()
        .round_dp(2)
}

/// One record shaped for presentation. Category and note are markup-safe;
/// date and amount are formatted, not escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub date: String,
    pub category: String,
    pub amount: String,
    pub note: String,
}

pub fn to_display_rows<'a>(
    records: impl IntoIterator<Item = &'a Expense>,
    currency_symbol: &str,
    date_format: &str,
) -> Vec<DisplayRow> {
    records
        .into_iter()
        .map(|e| DisplayRow {
            date: format_date(e.date, date_format),
            category: escape_markup(&e.category),
            amount: format_amount(e.amount, currency_symbol),
            note: escape_markup(&e.note),
        })
        .collect()
}

pub fn format_date(date: NaiveDate, date_format: &str) -> String {
    date.format(date_format).to_string()
}

/// Exactly two decimal places, currency symbol prefixed.
pub fn format_amount(amount: Decimal, currency_symbol: &str) -> String {
    format!("{currency_symbol}{:.2}", amount)
}

/// Escapes `&`, `<` and `>` so user text cannot be taken for markup by a
/// rendering surface.
pub fn escape_markup(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

pub const CSV_HEADER: &str = "Date,Category,Amount,Note";

/// CSV of the given records: header, then one row each with the note quoted
/// and internal quotes doubled. Callers should treat an empty record set as
/// "nothing to export" rather than writing a header-only file.
pub fn to_csv<'a>(records: impl IntoIterator<Item = &'a Expense>, date_format: &str) -> String {
    let mut lines = vec![CSV_HEADER.to_string()];
    for e in records {
        let note = format!("\"{}\"", e.note.replace('"', "\"\""));
        lines.push(format!(
            "{},{},{},{}",
            format_date(e.date, date_format),
            e.category,
            e.amount,
            note
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: &str, amount: &str, category: &str, date: &str, note: &str) -> Expense {
        Expense {
            id: id.to_string(),
            amount: amount.parse().unwrap(),
            category: category.to_string(),
            date: date.parse().unwrap(),
            note: note.to_string(),
        }
    }

    #[test]
    fn test_month_filter_parsing() {
        assert_eq!(
            "2024-01".parse::<MonthFilter>().unwrap(),
            MonthFilter { year: 2024, month: 1 }
        );
        assert!("2024".parse::<MonthFilter>().is_err());
        assert!("2024-13".parse::<MonthFilter>().is_err());
        assert!("abcd-01".parse::<MonthFilter>().is_err());
    }

    #[test]
    fn test_filter_without_month_is_identity() {
        let records = vec![
            expense("1", "10", "Food", "2024-01-10", ""),
            expense("2", "20", "Rent", "2024-02-05", ""),
        ];
        let all: Vec<&Expense> = filter_by_month(&records, None).collect();
        assert_eq!(all, records.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_filter_by_month_keeps_only_matching_dates() {
        let records = vec![
            expense("1", "10", "Food", "2024-01-10", ""),
            expense("2", "20", "Rent", "2024-02-05", ""),
            expense("3", "30", "Food", "2023-01-20", ""),
        ];
        let filter = "2024-01".parse::<MonthFilter>().unwrap();
        let january: Vec<&Expense> = filter_by_month(&records, Some(filter)).collect();
        assert_eq!(january, [&records[0]]);
    }

    #[test]
    fn test_sort_is_descending_and_stable() {
        let records = vec![
            expense("old", "1", "Food", "2024-01-01", ""),
            expense("tie-a", "2", "Food", "2024-03-15", ""),
            expense("tie-b", "3", "Food", "2024-03-15", ""),
            expense("new", "4", "Food", "2024-04-01", ""),
        ];
        let sorted = sort_by_date_desc(&records);
        let ids: Vec<&str> = sorted.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["new", "tie-a", "tie-b", "old"]);
    }

    #[test]
    fn test_compute_total() {
        assert_eq!(compute_total([]), Decimal::ZERO);

        let records = vec![
            expense("1", "0.10", "Food", "2024-01-01", ""),
            expense("2", "0.20", "Food", "2024-01-02", ""),
            expense("3", "49.70", "Food", "2024-01-03", ""),
        ];
        assert_eq!(compute_total(&records), "50.00".parse().unwrap());
    }

    #[test]
    fn test_display_rows_format_and_escape() {
        let records = vec![expense(
            "1",
            "50",
            "Food & Drink",
            "2024-01-15",
            "<script>",
        )];
        let rows = to_display_rows(&records, "₹", "%d/%m/%Y");
        assert_eq!(
            rows,
            [DisplayRow {
                date: "15/01/2024".to_string(),
                category: "Food &amp; Drink".to_string(),
                amount: "₹50.00".to_string(),
                note: "&lt;script&gt;".to_string(),
            }]
        );
    }

    #[test]
    fn test_display_row_note_may_be_empty() {
        let records = vec![expense("1", "9.9", "Food", "2024-01-15", "")];
        let rows = to_display_rows(&records, "$", "%Y-%m-%d");
        assert_eq!(rows[0].amount, "$9.90");
        assert_eq!(rows[0].note, "");
    }

    #[test]
    fn test_csv_quotes_notes_and_doubles_quotes() {
        let records = vec![
            expense("1", "10", "Food", "2024-01-10", "a,b"),
            expense("2", "20", "Rent", "2024-02-05", "say \"hi\""),
        ];
        let csv = to_csv(&records, "%Y-%m-%d");
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Date,Category,Amount,Note");
        assert_eq!(lines[1], "2024-01-10,Food,10,\"a,b\"");
        assert_eq!(lines[2], "2024-02-05,Rent,20,\"say \"\"hi\"\"\"");
    }
}
