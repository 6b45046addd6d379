use crate::dto::{parsed_rows::*, validated_rows::*};
use crate::model::configs::chart_config::*;

pub trait ParserService: Send + Sync {
    #[doc = "
        Split raw delimited text into text rows keyed by the configured column names
        # Arguments
        * `raw_text` - CSV text with a header row
        * `columns` - Period / value column names to pick from the header
    "]
    fn parse_rows(&self, raw_text: &str, columns: &ColumnMapping) -> ParsedRows;

    #[doc = "Keep only rows with a finite numeric value and a valid `YYYY-MM` period"]
    fn validate_rows(&self, parsed: ParsedRows) -> ValidatedRows;
}
