use crate::{
    format,
    metrics::Metrics,
    models::{Category, Transaction, TransactionId, TransactionType},
    traits::{CSVExport, CSVWrite},
};
use anyhow::Result;
use clap::ValueEnum;
use getset::Getters;
use rust_decimal::prelude::*;
use serde::Serialize;

fn round_four_decimals<S>(x: &Decimal, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_str(&format!("{x:.4}"))
}

/// The four screens of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum View {
    #[default]
    Dashboard,
    DataEntry,
    CostAnalysis,
    Performance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct MetricRow {
    #[getset(get = "pub")]
    metric: &'static str,
    #[getset(get = "pub")]
    #[serde(serialize_with = "round_four_decimals")]
    value: Decimal,
    #[getset(get = "pub")]
    display: String,
    #[getset(get = "pub")]
    note: String,
}

impl MetricRow {
    fn currency(metric: &'static str, value: Decimal, note: impl Into<String>) -> Self {
        MetricRow {
            metric,
            value,
            display: format::currency(value),
            note: note.into(),
        }
    }

    fn percent(metric: &'static str, value: Decimal, note: impl Into<String>) -> Self {
        MetricRow {
            metric,
            value,
            display: format::percent(value),
            note: note.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRow {
    id: TransactionId,
    description: String,
    #[serde(serialize_with = "round_four_decimals")]
    amount: Decimal,
    display: String,
    category: Category,
    #[serde(rename = "type")]
    type_: TransactionType,
}

impl From<&Transaction> for TransactionRow {
    fn from(tx: &Transaction) -> Self {
        TransactionRow {
            id: *tx.id(),
            description: tx.description().clone(),
            amount: *tx.amount(),
            display: format::currency(*tx.amount()),
            category: *tx.category(),
            type_: *tx.kind(),
        }
    }
}

/// KPI cards plus the budget-vs-realized chart series.
pub struct Dashboard(Metrics);

impl Dashboard {
    pub fn new(metrics: Metrics) -> Self {
        Dashboard(metrics)
    }

    pub fn rows(&self) -> Vec<MetricRow> {
        let m = &self.0;
        let chart = "Budget vs Realized";
        vec![
            MetricRow::currency("total_revenue", m.revenue_realized, "Realized"),
            MetricRow::currency("total_costs", m.costs_realized, "Realized"),
            MetricRow::currency(
                "net_margin",
                m.net_margin,
                if m.is_profit() { "Profit" } else { "Loss" },
            ),
            MetricRow::percent("budget_achievement", m.budget_achievement_rate, "Revenue Target"),
            MetricRow::currency("revenue_budget", m.revenue_budget, chart),
            MetricRow::currency("revenue_realized", m.revenue_realized, chart),
            MetricRow::currency("costs_budget", m.costs_budget, chart),
            MetricRow::currency("costs_realized", m.costs_realized, chart),
        ]
    }
}

/// Cost split and break-even analysis.
pub struct CostAnalysis(Metrics);

impl CostAnalysis {
    pub fn new(metrics: Metrics) -> Self {
        CostAnalysis(metrics)
    }

    pub fn rows(&self) -> Vec<MetricRow> {
        let m = &self.0;
        let distribution = if m.has_cost_distribution() {
            "Cost Distribution"
        } else {
            "No cost data available"
        };
        vec![
            MetricRow::currency("fixed_costs", m.fixed_costs_realized, distribution),
            MetricRow::currency("variable_costs", m.variable_costs_realized, distribution),
            MetricRow::currency(
                "margin_on_variable_costs",
                m.margin_on_variable_costs,
                "Revenue - Variable Costs",
            ),
            MetricRow {
                metric: "margin_rate",
                value: m.margin_rate,
                display: format::percent(m.margin_rate_percent),
                note: "(M/CV) / Revenue".to_string(),
            },
            MetricRow::currency(
                "break_even_point",
                m.break_even_point,
                format!(
                    "Fixed Costs / Margin Rate: the business needs to generate {} in revenue \
                     to cover all costs and reach the break-even point",
                    format::currency(m.break_even_point)
                ),
            ),
        ]
    }
}

/// Effectiveness and efficiency against budget.
pub struct Performance(Metrics);

impl Performance {
    pub fn new(metrics: Metrics) -> Self {
        Performance(metrics)
    }

    pub fn rows(&self) -> Vec<MetricRow> {
        let m = &self.0;
        vec![
            MetricRow::currency("revenue_budget", m.revenue_budget, "Effectiveness"),
            MetricRow::currency("revenue_realized", m.revenue_realized, "Effectiveness"),
            MetricRow::percent(
                "revenue_achievement",
                m.revenue_achievement,
                if m.is_effective {
                    "Sales objective achieved!"
                } else {
                    "Below sales target"
                },
            ),
            MetricRow::currency("costs_budget", m.costs_budget, "Efficiency"),
            MetricRow::currency("costs_realized", m.costs_realized, "Efficiency"),
            MetricRow::percent(
                "cost_efficiency",
                m.cost_efficiency,
                if m.is_efficient {
                    "Resources optimized!"
                } else {
                    "Budget exceeded"
                },
            ),
            MetricRow {
                metric: "revenue_variance",
                value: m.revenue_variance,
                display: format::revenue_variance(m.revenue_variance, m.is_effective),
                note: if m.is_effective {
                    "Above Target"
                } else {
                    "Below Target"
                }
                .to_string(),
            },
            MetricRow {
                metric: "cost_variance",
                value: m.cost_variance,
                display: format::cost_variance(m.cost_variance, m.is_efficient),
                note: if m.is_efficient {
                    "Under Budget"
                } else {
                    "Over Budget"
                }
                .to_string(),
            },
        ]
    }
}

/// The transaction table of the data-entry screen, in insertion order.
pub struct TransactionList<'a>(&'a [Transaction]);

impl<'a> TransactionList<'a> {
    pub fn new(transactions: &'a [Transaction]) -> Self {
        TransactionList(transactions)
    }

    pub fn rows(&self) -> Vec<TransactionRow> {
        self.0.iter().map(TransactionRow::from).collect()
    }
}

fn write_all<T: Serialize>(rows: &[T], writer: &mut impl CSVWrite) -> Result<()> {
    for row in rows {
        writer.write_record(row)?;
    }
    Ok(())
}

impl CSVExport for Dashboard {
    fn export(&self, writer: &mut impl CSVWrite) -> Result<()> {
        write_all(&self.rows(), writer)
    }
}

impl CSVExport for CostAnalysis {
    fn export(&self, writer: &mut impl CSVWrite) -> Result<()> {
        write_all(&self.rows(), writer)
    }
}

impl CSVExport for Performance {
    fn export(&self, writer: &mut impl CSVWrite) -> Result<()> {
        write_all(&self.rows(), writer)
    }
}

impl CSVExport for TransactionList<'_> {
    fn export(&self, writer: &mut impl CSVWrite) -> Result<()> {
        write_all(&self.rows(), writer)
    }
}

/// Recomputes metrics from `transactions` and writes `view` to `writer`.
///
/// Fails with [`crate::errors::MetricsError`] when a figure overflows.
pub fn render(view: View, transactions: &[Transaction], writer: &mut impl CSVWrite) -> Result<()> {
    match view {
        View::DataEntry => TransactionList::new(transactions).export(writer),
        View::Dashboard => Dashboard::new(Metrics::compute(transactions)?).export(writer),
        View::CostAnalysis => CostAnalysis::new(Metrics::compute(transactions)?).export(writer),
        View::Performance => Performance::new(Metrics::compute(transactions)?).export(writer),
    }
}
