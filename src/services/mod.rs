pub mod cash_outflow;
pub mod category_share;
pub mod dashboard;
pub mod fallback;
pub mod invoice_table;
pub mod invoice_trend;
pub mod numeric;
pub mod scale;
pub mod stats;
pub mod tooltip;
pub mod vendor_ranking;
