//! Monthly bucketing of transaction-like records.
//!
//! Records from any number of sources are folded into one map keyed by
//! (dimension id, calendar year, calendar month). Each bucket holds the
//! running sum and count of the records that landed in it.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use rust_decimal::prelude::ToPrimitive;
use std::collections::btree_map::{self, BTreeMap};

use crate::catalog::DimensionKind;
use crate::transaction::{RecurringTransaction, Transaction};

/// Composite bucket key. Ordering is by dimension, then chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub dimension_id: i32,
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(dimension_id: i32, date: NaiveDate) -> Self {
        Self {
            dimension_id,
            year: date.year(),
            month: date.month(),
        }
    }

    /// First day of the month at midnight UTC.
    pub fn month_start(&self) -> Option<DateTime<Utc>> {
        Utc.with_ymd_and_hms(self.year, self.month, 1, 0, 0, 0).single()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlyAccumulator {
    pub sum: f64,
    pub count: u64,
}

impl MonthlyAccumulator {
    pub fn add(&mut self, amount: f64) {
        self.sum += amount;
        self.count += 1;
    }

    pub fn average(&self) -> f64 {
        self.sum / self.count as f64
    }
}

/// Anything that can be dropped into a monthly bucket.
pub trait MonthlyRecord {
    fn dimension_id(&self, kind: DimensionKind) -> Option<i32>;
    fn type_id(&self) -> Option<i32>;
    fn amount(&self) -> f64;
    /// The date that decides the bucket month; `None` skips the record.
    fn occurred_on(&self) -> Option<NaiveDate>;
}

impl MonthlyRecord for Transaction {
    fn dimension_id(&self, kind: DimensionKind) -> Option<i32> {
        match kind {
            DimensionKind::Category => self.category_id,
            DimensionKind::Type => self.type_id,
        }
    }

    fn type_id(&self) -> Option<i32> {
        self.type_id
    }

    fn amount(&self) -> f64 {
        self.amount.to_f64().unwrap_or_default()
    }

    fn occurred_on(&self) -> Option<NaiveDate> {
        self.date.map(|d| d.date_naive())
    }
}

/// A recurring template counts once, in the month it starts.
impl MonthlyRecord for RecurringTransaction {
    fn dimension_id(&self, kind: DimensionKind) -> Option<i32> {
        match kind {
            DimensionKind::Category => self.category_id,
            DimensionKind::Type => self.type_id,
        }
    }

    fn type_id(&self) -> Option<i32> {
        self.type_id
    }

    fn amount(&self) -> f64 {
        self.amount.to_f64().unwrap_or_default()
    }

    fn occurred_on(&self) -> Option<NaiveDate> {
        Some(self.start_date)
    }
}

/// Bucket map for a single aggregation request.
#[derive(Debug)]
pub struct MonthlyBuckets {
    kind: DimensionKind,
    buckets: BTreeMap<MonthKey, MonthlyAccumulator>,
}

impl MonthlyBuckets {
    pub fn new(kind: DimensionKind) -> Self {
        Self {
            kind,
            buckets: BTreeMap::new(),
        }
    }

    /// Fold records into the map. Records without a date or without a
    /// reference for this dimension are skipped.
    pub fn accumulate<'a, R, I>(&mut self, records: I)
    where
        R: MonthlyRecord + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        for record in records {
            let (Some(dimension_id), Some(date)) =
                (record.dimension_id(self.kind), record.occurred_on())
            else {
                continue;
            };

            self.buckets
                .entry(MonthKey::new(dimension_id, date))
                .or_default()
                .add(record.amount());
        }
    }

    pub fn get(&self, key: &MonthKey) -> Option<&MonthlyAccumulator> {
        self.buckets.get(key)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, MonthKey, MonthlyAccumulator> {
        self.buckets.iter()
    }
}
