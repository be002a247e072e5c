use serde::{Deserialize, Serialize};

use super::{
    CashOutflowChart, CategoryChart, CategorySpend, DashboardStats, Invoice, InvoiceTable,
    InvoiceTrendChart, MonthlyMetric, PeriodAmount, StatPanel, VendorRanking, VendorSpend,
};

/// One refresh worth of upstream query results. Any collection may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardSnapshot {
    pub stats: Option<DashboardStats>,
    pub cash_outflow: Option<Vec<PeriodAmount>>,
    pub invoice_trends: Option<Vec<MonthlyMetric>>,
    pub vendors: Option<Vec<VendorSpend>>,
    pub category_spend: Option<Vec<CategorySpend>>,
    pub invoices: Option<Vec<Invoice>>,
}

/// Display-ready structures for every dashboard widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub stats: StatPanel,
    pub cash_outflow: CashOutflowChart,
    pub invoice_trend: InvoiceTrendChart,
    pub top_vendors: VendorRanking,
    pub category_spend: CategoryChart,
    pub invoices: InvoiceTable,
}

impl DashboardView {
    pub fn warning_count(&self) -> usize {
        self.stats.warnings.len()
            + self.cash_outflow.warnings.len()
            + self.invoice_trend.warnings.len()
            + self.top_vendors.warnings.len()
            + self.category_spend.warnings.len()
            + self.invoices.warnings.len()
    }
}
