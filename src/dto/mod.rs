pub mod chart_snapshot;
pub mod data_quality;
pub mod eia_data_row;
pub mod load_outcome;
pub mod normalized_series;
pub mod parsed_rows;
pub mod raw_price_row;
pub mod rendered_chart;
pub mod validated_rows;
