//! Price table extraction.
//!
//! The upstream page renders prices as a plain HTML table inside a
//! `.table-responsive` wrapper. Column headers have been renamed more than
//! once, so keys are derived from the header row and mapped onto record
//! fields through a small alias table.

use crate::models::PriceRecord;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

static TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".table-responsive table").expect("valid table selector"));
static ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("valid row selector"));
static HEADER_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("th").expect("valid header selector"));
static DATA_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("valid cell selector"));

const DATE_HEADERS: &[&str] = &["date", "arrival date"];
const MARKET_HEADERS: &[&str] = &["market", "market name"];
const AVERAGE_HEADERS: &[&str] = &["average price", "avg price"];

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Header labels sometimes wrap across lines in the markup.
fn header_key(cell: ElementRef<'_>) -> String {
    cell.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn pick(row: &HashMap<String, String>, aliases: &[&str]) -> Option<String> {
    aliases.iter().find_map(|alias| row.get(*alias).cloned())
}

/// Parse the first price table in `html` into records, in page order.
///
/// Returns an empty list when the table is missing or has no header row.
/// Rows whose cell count differs from the header count are skipped.
pub fn parse_price_table(html: &str) -> Vec<PriceRecord> {
    let document = Html::parse_document(html);

    let Some(table) = document.select(&TABLE).next() else {
        debug!("No price table found in document");
        return Vec::new();
    };

    let mut rows = table.select(&ROW);
    let Some(header_row) = rows.next() else {
        return Vec::new();
    };

    let mut headers: Vec<String> = header_row.select(&HEADER_CELL).map(header_key).collect();
    if headers.is_empty() {
        headers = header_row.select(&DATA_CELL).map(header_key).collect();
    }
    if headers.is_empty() {
        debug!("Price table has an empty header row");
        return Vec::new();
    }

    debug!("Price table headers: {:?}", headers);

    let mut records = Vec::new();
    for (idx, row) in rows.enumerate() {
        let cells: Vec<String> = row.select(&DATA_CELL).map(cell_text).collect();
        if cells.len() != headers.len() {
            debug!(
                "Skipped row {}: {} cells, expected {}",
                idx + 1,
                cells.len(),
                headers.len()
            );
            continue;
        }

        let mapped: HashMap<String, String> = headers.iter().cloned().zip(cells).collect();
        records.push(PriceRecord {
            date: pick(&mapped, DATE_HEADERS),
            mandi: pick(&mapped, MARKET_HEADERS),
            avg: pick(&mapped, AVERAGE_HEADERS),
        });
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(table: &str) -> String {
        format!(
            r#"<html><body><h1>Prices</h1><div class="table-responsive">{table}</div></body></html>"#
        )
    }

    fn record(date: &str, mandi: &str, avg: &str) -> PriceRecord {
        PriceRecord {
            date: Some(date.into()),
            mandi: Some(mandi.into()),
            avg: Some(avg.into()),
        }
    }

    #[test]
    fn parses_basic_table() {
        let html = page(
            "<table>\
             <tr><th>date</th><th>market</th><th>average price</th></tr>\
             <tr><td>2024-01-01</td><td>Moga</td><td>2500</td></tr>\
             </table>",
        );
        assert_eq!(
            parse_price_table(&html),
            vec![record("2024-01-01", "Moga", "2500")]
        );
    }

    #[test]
    fn header_aliases_and_case() {
        let html = page(
            "<table><thead>\
             <tr><th> Arrival Date </th><th>District</th><th>Market</th><th>Average\n  Price</th></tr>\
             </thead><tbody>\
             <tr><td> 05/03/2024 </td><td>Ludhiana</td><td>Khanna</td><td>₹ 2,275</td></tr>\
             <tr><td>06/03/2024</td><td>Ludhiana</td><td>Jagraon</td><td>₹ 2,300</td></tr>\
             </tbody></table>",
        );
        assert_eq!(
            parse_price_table(&html),
            vec![
                record("05/03/2024", "Khanna", "₹ 2,275"),
                record("06/03/2024", "Jagraon", "₹ 2,300"),
            ]
        );
    }

    #[test]
    fn skips_rows_with_wrong_cell_count() {
        let html = page(
            "<table>\
             <tr><th>date</th><th>market</th><th>average price</th></tr>\
             <tr><td>2024-01-01</td><td>Moga</td><td>2500</td></tr>\
             <tr><td colspan=\"3\">Advertisement</td></tr>\
             <tr><td>2024-01-02</td><td>Moga</td><td>2510</td><td>extra</td></tr>\
             <tr><td>2024-01-03</td><td>Barnala</td><td>2490</td></tr>\
             </table>",
        );
        assert_eq!(
            parse_price_table(&html),
            vec![
                record("2024-01-01", "Moga", "2500"),
                record("2024-01-03", "Barnala", "2490"),
            ]
        );
    }

    #[test]
    fn missing_columns_become_null() {
        let html = page(
            "<table>\
             <tr><th>Market</th><th>Min Price</th></tr>\
             <tr><td>Moga</td><td>2400</td></tr>\
             </table>",
        );
        assert_eq!(
            parse_price_table(&html),
            vec![PriceRecord {
                date: None,
                mandi: Some("Moga".into()),
                avg: None,
            }]
        );
    }

    #[test]
    fn header_row_with_td_cells() {
        let html = page(
            "<table>\
             <tr><td>Date</td><td>Market</td><td>Average Price</td></tr>\
             <tr><td>2024-01-01</td><td>Moga</td><td>2500</td></tr>\
             </table>",
        );
        assert_eq!(
            parse_price_table(&html),
            vec![record("2024-01-01", "Moga", "2500")]
        );
    }

    #[test]
    fn only_first_table_is_read() {
        let html = format!(
            "{}{}",
            page("<table><tr><th>date</th><th>market</th><th>average price</th></tr>\
                  <tr><td>2024-01-01</td><td>Moga</td><td>2500</td></tr></table>"),
            page("<table><tr><th>date</th><th>market</th><th>average price</th></tr>\
                  <tr><td>2024-01-01</td><td>Other</td><td>1</td></tr></table>"),
        );
        assert_eq!(parse_price_table(&html).len(), 1);
    }

    #[test]
    fn missing_table_yields_nothing() {
        let unwrapped = "<html><body><table><tr><th>date</th></tr>\
                         <tr><td>2024-01-01</td></tr></table></body></html>";
        assert!(parse_price_table(unwrapped).is_empty());
        assert!(parse_price_table("not html at all").is_empty());
        assert!(parse_price_table(&page("<table></table>")).is_empty());
    }
}
