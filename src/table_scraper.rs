use anyhow::anyhow;
use log::{debug, info};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::{
    ScrapeError,
    requests::RequestClient,
    text_manipulators::{extract_text, squash_whitespace},
};

pub type Row = Vec<String>;

/// Rows in page order, each row its cells in column order. Rows may be ragged.
pub type Table = Vec<Row>;

pub struct TableScraper {
    table_index: usize,
    table_selector: Selector,
    row_selector: Selector,
    whitespace: Regex,
}

impl TableScraper {
    /// `table_index` picks which `<table>` of the page to keep, counting from 0 in document order.
    pub fn new(table_index: usize) -> anyhow::Result<Self> {
        let table_selector =
            Selector::parse("table").map_err(|e| anyhow!("invalid table selector: {e}"))?;
        let row_selector =
            Selector::parse("tr").map_err(|e| anyhow!("invalid row selector: {e}"))?;
        let whitespace = Regex::new(r"\s+")?;
        Ok(Self {
            table_index,
            table_selector,
            row_selector,
            whitespace,
        })
    }

    pub async fn scrape(&self, client: &RequestClient, url: &str) -> Result<Table, ScrapeError> {
        info!("Scraping table #{} from {}", self.table_index, url);
        let html = client.fetch_url_body(url).await?;
        self.parse(&html)
    }

    pub fn parse(&self, html: &str) -> Result<Table, ScrapeError> {
        let document = Html::parse_document(html);
        let Some(table) = document.select(&self.table_selector).nth(self.table_index) else {
            let found = document.select(&self.table_selector).count();
            return Err(ScrapeError::Parse(format!(
                "wanted table #{} but the page has {} table(s)",
                self.table_index, found
            )));
        };

        let rows: Table = table
            .select(&self.row_selector)
            // html5ever gives us nested tables' rows too.
            .filter(|row| belongs_to(*row, table))
            .map(|row| self.row_cells(row))
            .filter(|cells| !cells.is_empty())
            .collect();

        debug!("Extracted {} rows", rows.len());
        Ok(rows)
    }

    fn row_cells(&self, row: ElementRef) -> Row {
        row.children()
            .filter_map(ElementRef::wrap)
            .filter(|cell| matches!(cell.value().name(), "td" | "th"))
            .map(|cell| squash_whitespace(&self.whitespace, &extract_text(cell)))
            .collect()
    }
}

fn belongs_to(row: ElementRef, table: ElementRef) -> bool {
    row.ancestors()
        .find(|node| {
            node.value()
                .as_element()
                .is_some_and(|el| el.name() == "table")
        })
        .is_some_and(|owner| owner.id() == table.id())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITUATION_PAGE: &str = r#"
        <html><body>
          <h2>Situation in Québec</h2>
          <table class="contenttable">
            <thead>
              <tr><th>Date</th><th>Cases</th></tr>
            </thead>
            <tbody>
              <tr><td>2020-03-09</td><td>3</td></tr>
              <tr><td>2020-03-10</td><td>1,200</td></tr>
            </tbody>
          </table>
          <table><tr><td>second</td></tr></table>
        </body></html>
    "#;

    fn rows(table: &[&[&str]]) -> Table {
        table
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn extracts_first_table_with_header_first() {
        let scraper = TableScraper::new(0).unwrap();
        let table = scraper.parse(SITUATION_PAGE).unwrap();
        assert_eq!(
            table,
            rows(&[
                &["Date", "Cases"],
                &["2020-03-09", "3"],
                &["2020-03-10", "1,200"],
            ])
        );
    }

    #[test]
    fn picks_table_by_index() {
        let scraper = TableScraper::new(1).unwrap();
        assert_eq!(scraper.parse(SITUATION_PAGE).unwrap(), rows(&[&["second"]]));
    }

    #[test]
    fn missing_table_is_a_parse_error() {
        let scraper = TableScraper::new(0).unwrap();
        let err = scraper
            .parse("<html><body><p>Page moved</p></body></html>")
            .unwrap_err();
        assert!(matches!(err, ScrapeError::Parse(_)));

        let err = TableScraper::new(5).unwrap().parse(SITUATION_PAGE).unwrap_err();
        assert!(matches!(err, ScrapeError::Parse(_)));
    }

    #[test]
    fn squashes_whitespace_and_markup_inside_cells() {
        let html = "<table><tr><td>\n  <strong>Montréal</strong>&nbsp;\n (region)  </td>\
                    <td><a href=\"#\">12</a> <sup>*</sup></td></tr></table>";
        let table = TableScraper::new(0).unwrap().parse(html).unwrap();
        assert_eq!(table, rows(&[&["Montréal (region)", "12 *"]]));
    }

    #[test]
    fn keeps_ragged_rows_and_skips_empty_ones() {
        let html = "<table><tr><th>Region</th><th>Cases</th><th>Deaths</th></tr>\
                    <tr></tr><tr><td>Total</td><td>50</td></tr></table>";
        let table = TableScraper::new(0).unwrap().parse(html).unwrap();
        assert_eq!(table, rows(&[&["Region", "Cases", "Deaths"], &["Total", "50"]]));
    }

    #[test]
    fn ignores_rows_of_nested_tables() {
        let html = "<table><tr><td>outer</td>\
                    <td><table><tr><td>inner</td></tr></table></td></tr></table>";
        let table = TableScraper::new(0).unwrap().parse(html).unwrap();
        assert_eq!(table, rows(&[&["outer", "inner"]]));
    }
}
