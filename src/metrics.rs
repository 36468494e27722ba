//! Financial aggregation over a transaction snapshot.
//!
//! Every function here is pure: it reads a slice of transactions and returns a
//! value, nothing is cached between calls. Ratios never divide by zero; when a
//! denominator is not strictly positive the ratio is defined as zero.
//!
//! Arithmetic is checked. A figure that does not fit in a [`Decimal`] yields
//! [`MetricsError::ValueOverflow`] naming that figure.

use crate::{
    errors::MetricsError,
    models::{Category, Transaction, TransactionType},
};
use rust_decimal::prelude::*;

const HUNDRED: Decimal = dec!(100);

/// Which categories a [`sum`] should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    Any,
    Only(Category),
    /// Every category except revenue.
    Costs,
}

impl CategoryFilter {
    fn accepts(self, category: Category) -> bool {
        match self {
            CategoryFilter::Any => true,
            CategoryFilter::Only(wanted) => category == wanted,
            CategoryFilter::Costs => category.is_cost(),
        }
    }
}

/// Sums `amount` over the transactions matching both filters.
///
/// `kind: None` matches budget and realized alike. An empty match is zero.
pub fn sum(
    transactions: &[Transaction],
    category: CategoryFilter,
    kind: Option<TransactionType>,
) -> Result<Decimal, MetricsError> {
    transactions
        .iter()
        .filter(|tx| category.accepts(*tx.category()))
        .filter(|tx| kind.is_none_or(|kind| *tx.kind() == kind))
        .try_fold(Decimal::ZERO, |total, tx| {
            total
                .checked_add(*tx.amount())
                .ok_or(MetricsError::ValueOverflow("sum"))
        })
}

fn difference(a: Decimal, b: Decimal, figure: &'static str) -> Result<Decimal, MetricsError> {
    a.checked_sub(b).ok_or(MetricsError::ValueOverflow(figure))
}

/// `numerator / denominator`, or zero unless the denominator is positive.
fn ratio_or_zero(
    numerator: Decimal,
    denominator: Decimal,
    figure: &'static str,
) -> Result<Decimal, MetricsError> {
    if denominator > Decimal::ZERO {
        numerator
            .checked_div(denominator)
            .ok_or(MetricsError::ValueOverflow(figure))
    } else {
        Ok(Decimal::ZERO)
    }
}

/// `numerator / denominator × 100`, or zero unless the denominator is positive.
fn percent_or_zero(
    numerator: Decimal,
    denominator: Decimal,
    figure: &'static str,
) -> Result<Decimal, MetricsError> {
    ratio_or_zero(numerator, denominator, figure)?
        .checked_mul(HUNDRED)
        .ok_or(MetricsError::ValueOverflow(figure))
}

pub fn revenue(transactions: &[Transaction], kind: TransactionType) -> Result<Decimal, MetricsError> {
    sum(transactions, CategoryFilter::Only(Category::Revenue), Some(kind))
}

pub fn costs(transactions: &[Transaction], kind: TransactionType) -> Result<Decimal, MetricsError> {
    sum(transactions, CategoryFilter::Costs, Some(kind))
}

pub fn fixed_costs_realized(transactions: &[Transaction]) -> Result<Decimal, MetricsError> {
    sum(
        transactions,
        CategoryFilter::Only(Category::FixedCost),
        Some(TransactionType::Realized),
    )
}

pub fn variable_costs_realized(transactions: &[Transaction]) -> Result<Decimal, MetricsError> {
    sum(
        transactions,
        CategoryFilter::Only(Category::VariableCost),
        Some(TransactionType::Realized),
    )
}

/// Realized revenue minus realized costs. Negative means a loss.
pub fn net_margin(transactions: &[Transaction]) -> Result<Decimal, MetricsError> {
    difference(
        revenue(transactions, TransactionType::Realized)?,
        costs(transactions, TransactionType::Realized)?,
        "net margin",
    )
}

/// Realized revenue as a percentage of budgeted revenue.
///
/// Zero when no revenue was budgeted, even if revenue was realized.
pub fn budget_achievement_rate(transactions: &[Transaction]) -> Result<Decimal, MetricsError> {
    percent_or_zero(
        revenue(transactions, TransactionType::Realized)?,
        revenue(transactions, TransactionType::Budget)?,
        "budget achievement",
    )
}

/// Same figure as [`budget_achievement_rate`], as shown on the performance view.
pub fn revenue_achievement(transactions: &[Transaction]) -> Result<Decimal, MetricsError> {
    budget_achievement_rate(transactions)
}

/// Margin on variable costs (M/CV): realized revenue minus realized variable costs.
pub fn margin_on_variable_costs(transactions: &[Transaction]) -> Result<Decimal, MetricsError> {
    difference(
        revenue(transactions, TransactionType::Realized)?,
        variable_costs_realized(transactions)?,
        "margin on variable costs",
    )
}

/// M/CV over realized revenue, as a fraction (not a percentage).
pub fn margin_rate(transactions: &[Transaction]) -> Result<Decimal, MetricsError> {
    ratio_or_zero(
        margin_on_variable_costs(transactions)?,
        revenue(transactions, TransactionType::Realized)?,
        "margin rate",
    )
}

/// Revenue needed to cover fixed costs at the current margin rate.
///
/// Zero when the margin rate is zero or negative. That zero does not mean no
/// revenue is needed; the point is undefined in that case.
pub fn break_even_point(transactions: &[Transaction]) -> Result<Decimal, MetricsError> {
    ratio_or_zero(
        fixed_costs_realized(transactions)?,
        margin_rate(transactions)?,
        "break-even point",
    )
}

/// Realized costs as a percentage of budgeted costs. Zero without a cost budget.
pub fn cost_efficiency(transactions: &[Transaction]) -> Result<Decimal, MetricsError> {
    percent_or_zero(
        costs(transactions, TransactionType::Realized)?,
        costs(transactions, TransactionType::Budget)?,
        "cost efficiency",
    )
}

/// Sales objective reached.
pub fn is_effective(transactions: &[Transaction]) -> Result<bool, MetricsError> {
    Ok(revenue_achievement(transactions)? >= HUNDRED)
}

/// Spent no more than planned.
pub fn is_efficient(transactions: &[Transaction]) -> Result<bool, MetricsError> {
    Ok(cost_efficiency(transactions)? <= HUNDRED)
}

/// Every figure the views display, computed in one pass over the formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub revenue_realized: Decimal,
    pub revenue_budget: Decimal,
    pub costs_realized: Decimal,
    pub costs_budget: Decimal,
    pub fixed_costs_realized: Decimal,
    pub variable_costs_realized: Decimal,
    pub net_margin: Decimal,
    pub budget_achievement_rate: Decimal,
    pub margin_on_variable_costs: Decimal,
    pub margin_rate: Decimal,
    /// Margin rate × 100, for display.
    pub margin_rate_percent: Decimal,
    pub break_even_point: Decimal,
    pub revenue_achievement: Decimal,
    pub cost_efficiency: Decimal,
    /// Distance of revenue achievement from the 100% target.
    pub revenue_variance: Decimal,
    /// Distance of cost efficiency from the 100% budget line.
    pub cost_variance: Decimal,
    pub is_effective: bool,
    pub is_efficient: bool,
}

impl Metrics {
    pub fn compute(transactions: &[Transaction]) -> Result<Self, MetricsError> {
        let revenue_realized = revenue(transactions, TransactionType::Realized)?;
        let revenue_budget = revenue(transactions, TransactionType::Budget)?;
        let costs_realized = costs(transactions, TransactionType::Realized)?;
        let costs_budget = costs(transactions, TransactionType::Budget)?;
        let fixed_costs_realized = fixed_costs_realized(transactions)?;
        let variable_costs_realized = variable_costs_realized(transactions)?;

        let margin_on_variable_costs = difference(
            revenue_realized,
            variable_costs_realized,
            "margin on variable costs",
        )?;
        let margin_rate = ratio_or_zero(margin_on_variable_costs, revenue_realized, "margin rate")?;
        let margin_rate_percent = margin_rate
            .checked_mul(HUNDRED)
            .ok_or(MetricsError::ValueOverflow("margin rate"))?;
        let revenue_achievement =
            percent_or_zero(revenue_realized, revenue_budget, "budget achievement")?;
        let cost_efficiency = percent_or_zero(costs_realized, costs_budget, "cost efficiency")?;

        Ok(Metrics {
            revenue_realized,
            revenue_budget,
            costs_realized,
            costs_budget,
            fixed_costs_realized,
            variable_costs_realized,
            net_margin: difference(revenue_realized, costs_realized, "net margin")?,
            budget_achievement_rate: revenue_achievement,
            margin_on_variable_costs,
            margin_rate,
            margin_rate_percent,
            break_even_point: ratio_or_zero(fixed_costs_realized, margin_rate, "break-even point")?,
            revenue_achievement,
            cost_efficiency,
            revenue_variance: difference(revenue_achievement, HUNDRED, "revenue variance")?,
            cost_variance: difference(cost_efficiency, HUNDRED, "cost variance")?,
            is_effective: revenue_achievement >= HUNDRED,
            is_efficient: cost_efficiency <= HUNDRED,
        })
    }

    pub fn is_profit(&self) -> bool {
        self.net_margin >= Decimal::ZERO
    }

    /// True when there are realized fixed or variable costs to chart.
    pub fn has_cost_distribution(&self) -> bool {
        // Realized costs are exactly the fixed plus variable realized amounts.
        self.costs_realized > Decimal::ZERO
    }
}
