pub mod cash_outflow;
pub mod category;
pub mod dataset;
pub mod hover;
pub mod invoice;
pub mod invoice_trend;
pub mod numeric;
pub mod settings;
pub mod snapshot;
pub mod stats;
pub mod vendor;

pub use cash_outflow::{AgingBucket, BucketPoint, CashOutflowChart, ClassificationMode, PeriodAmount};
pub use category::{CategoryChart, CategorySlice, CategorySpend};
pub use dataset::{DataSource, DataWarning, Dataset};
pub use hover::{Anchor, HoverState, HoverTarget, TrendTooltip, VendorTooltip};
pub use invoice::{Invoice, InvoiceRow, InvoiceTable};
pub use invoice_trend::{
    AxisScale, CalendarMonth, InvoiceTrendChart, MonthlyMetric, TrendPoint, CALENDAR_FRAME,
};
pub use numeric::NumericValue;
pub use settings::Formatting;
pub use snapshot::{DashboardSnapshot, DashboardView};
pub use stats::{DashboardStats, StatCard, StatPanel};
pub use vendor::{AxisTick, RankedVendor, VendorRanking, VendorSpend};
