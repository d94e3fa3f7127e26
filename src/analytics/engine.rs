use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

use super::bucket::{MonthlyBuckets, MonthlyRecord};
use super::rollup;
use crate::catalog::{Dimension, DimensionCatalog, DimensionKind, NameLookup};
use crate::errors::AppError;
use crate::transaction::{RecurringTransactionSource, TransactionSource};

/// Which records take part in an aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordScope {
    All,
    /// Only records whose type is `expense`; income never counts as spend.
    ExpenseOnly,
}

impl RecordScope {
    fn as_str(&self) -> &'static str {
        match self {
            RecordScope::All => "all",
            RecordScope::ExpenseOnly => "expense",
        }
    }
}

/// One aggregated row. `month` is set for month-resolved output only.
#[derive(Debug, Clone, PartialEq)]
pub struct AverageResult {
    pub dimension_id: i32,
    /// Empty when the id has no catalog entry
    pub dimension_name: String,
    pub month: Option<DateTime<Utc>>,
    pub average: f64,
}

/// Computes per-dimension averages over one-off and recurring transactions.
///
/// Stateless: every call fetches from its sources and builds its own
/// bucket map.
pub struct AggregationEngine {
    transactions: Arc<dyn TransactionSource>,
    recurring: Arc<dyn RecurringTransactionSource>,
    catalog: Arc<dyn DimensionCatalog>,
}

impl AggregationEngine {
    pub fn new(
        transactions: Arc<dyn TransactionSource>,
        recurring: Arc<dyn RecurringTransactionSource>,
        catalog: Arc<dyn DimensionCatalog>,
    ) -> Self {
        Self {
            transactions,
            recurring,
            catalog,
        }
    }

    /// All-time rollup: one row per dimension, mean of monthly means.
    pub async fn average_summary(
        &self,
        kind: DimensionKind,
        scope: RecordScope,
    ) -> Result<Vec<AverageResult>, AppError> {
        let (buckets, names) = self.bucketize(kind, scope).await?;

        Ok(rollup::all_time_averages(&buckets)
            .into_iter()
            .map(|avg| AverageResult {
                dimension_id: avg.dimension_id,
                dimension_name: names.resolve(avg.dimension_id),
                month: None,
                average: avg.average,
            })
            .collect())
    }

    /// Month-resolved: one row per (dimension, month).
    pub async fn average_trend(
        &self,
        kind: DimensionKind,
        scope: RecordScope,
    ) -> Result<Vec<AverageResult>, AppError> {
        let (buckets, names) = self.bucketize(kind, scope).await?;

        Ok(rollup::monthly_averages(&buckets)
            .into_iter()
            .map(|avg| AverageResult {
                dimension_id: avg.key.dimension_id,
                dimension_name: names.resolve(avg.key.dimension_id),
                month: avg.key.month_start(),
                average: avg.average,
            })
            .collect())
    }

    async fn bucketize(
        &self,
        kind: DimensionKind,
        scope: RecordScope,
    ) -> Result<(MonthlyBuckets, NameLookup), AppError> {
        let needs_types = scope == RecordScope::ExpenseOnly && kind != DimensionKind::Type;

        // First failure drops the other pending fetches
        let (transactions, recurring, dimensions, types) = futures::try_join!(
            self.transactions.list_transactions(),
            self.recurring.list_recurring_transactions(),
            self.catalog.list_dimensions(kind),
            async {
                if needs_types {
                    self.catalog
                        .list_dimensions(DimensionKind::Type)
                        .await
                        .map(Some)
                } else {
                    Ok(None)
                }
            },
        )?;

        let expense_type_ids = match scope {
            RecordScope::All => None,
            RecordScope::ExpenseOnly => {
                let types = types.as_deref().unwrap_or(&dimensions[..]);
                Some(expense_type_ids(types))
            }
        };

        let mut buckets = MonthlyBuckets::new(kind);
        buckets.accumulate(
            transactions
                .iter()
                .filter(|t| in_scope(*t, expense_type_ids.as_ref())),
        );
        buckets.accumulate(
            recurring
                .iter()
                .filter(|r| in_scope(*r, expense_type_ids.as_ref())),
        );

        info!(
            kind = kind.as_str(),
            scope = scope.as_str(),
            transactions = transactions.len(),
            recurring = recurring.len(),
            buckets = buckets.len(),
            "Bucketized transactions"
        );

        let names = NameLookup::from_dimensions(&dimensions);
        debug!(catalog_entries = dimensions.len(), "Built name lookup");

        Ok((buckets, names))
    }
}

fn expense_type_ids(types: &[Dimension]) -> HashSet<i32> {
    types
        .iter()
        .filter(|t| t.is_expense_type())
        .map(|t| t.id)
        .collect()
}

fn in_scope<R: MonthlyRecord>(record: &R, expense_type_ids: Option<&HashSet<i32>>) -> bool {
    match expense_type_ids {
        None => true,
        Some(ids) => record.type_id().is_some_and(|id| ids.contains(&id)),
    }
}
