use std::sync::LazyLock;

use csv::{ReaderBuilder, StringRecord, Trim};
use regex::Regex;

use super::model::{BatchResult, BatchRow};

const TEMPLATE: &str = "barcode,name,price,quantity\nExample: 5901234123457,Product Name,10.99,100";
const EXPORT_HEADER: &str = "Barcode,Status,Product Name,Error\n";

static DECIMAL_PREFIX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").ok());
static INTEGER_PREFIX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+").ok());

/// Parses `barcode,name,price,quantity` lines into batch rows.
///
/// Every non-blank line becomes exactly one row: fields are split on commas
/// with no quote handling. A first line mentioning "barcode" (any case) is
/// treated as a header. Numbers are read from the leading numeric part of
/// their field (`"1.99 USD"` is 1.99, `"10.5"` as a quantity is 10); fields
/// without one become `None`.
pub fn parse_csv(content: &str) -> Vec<BatchRow> {
    let mut lines = content.trim().lines().peekable();
    if lines
        .peek()
        .is_some_and(|line| line.to_lowercase().contains("barcode"))
    {
        lines.next();
    }

    let body = lines
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(body.as_bytes());

    reader
        .records()
        .filter_map(Result::ok)
        .map(|record| to_row(&record))
        .collect()
}

fn leading_match<'a>(pattern: &LazyLock<Option<Regex>>, value: &'a str) -> Option<&'a str> {
    pattern
        .as_ref()
        .and_then(|re| re.find(value))
        .map(|m| m.as_str())
}

fn to_row(record: &StringRecord) -> BatchRow {
    let field = |index: usize| record.get(index).filter(|value| !value.is_empty());

    BatchRow {
        barcode: record.get(0).unwrap_or_default().to_string(),
        name: field(1).map(str::to_string),
        price: field(2)
            .and_then(|value| leading_match(&DECIMAL_PREFIX, value))
            .and_then(|number| number.parse::<f64>().ok())
            .filter(|price| price.is_finite()),
        quantity: field(3)
            .and_then(|value| leading_match(&INTEGER_PREFIX, value))
            .and_then(|number| number.parse::<i64>().ok()),
    }
}

/// Header plus one example row, offered to users as an import starting point.
pub fn generate_csv_template() -> String {
    TEMPLATE.to_string()
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Renders batch results as `Barcode,Status,Product Name,Error` rows.
///
/// Product name and error are always quoted so embedded commas survive.
pub fn export_results_to_csv(batch: &BatchResult) -> String {
    let mut csv = String::from(EXPORT_HEADER);

    for item in &batch.results {
        let status = if item.success { "SUCCESS" } else { "FAILED" };
        csv.push_str(&format!(
            "{},{},{},{}\n",
            item.barcode,
            status,
            quote(item.product_name.as_deref().unwrap_or_default()),
            quote(item.error.as_deref().unwrap_or_default()),
        ));
    }

    csv
}
