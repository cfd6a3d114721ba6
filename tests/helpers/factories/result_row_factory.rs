use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::engine::aggregate::{AggState, MetricValue};
use crate::engine::result::ResultRow;

pub struct ResultRowFactory {
    timestamp: DateTime<Utc>,
    count: i64,
    price_sum: i64,
    amount: i64,
    encoded: bool,
}

impl ResultRowFactory {
    pub fn new() -> Self {
        Self {
            timestamp: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
            count: 3,
            price_sum: 30,
            amount: 60,
            encoded: false,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    pub fn with_price_sum(mut self, price_sum: i64) -> Self {
        self.price_sum = price_sum;
        self
    }

    pub fn with_amount(mut self, amount: i64) -> Self {
        self.amount = amount;
        self
    }

    /// Emit metrics in serialized form, as if they crossed a network hop.
    pub fn encoded(mut self) -> Self {
        self.encoded = true;
        self
    }

    pub fn create(&self) -> ResultRow {
        let states = [
            ("rows", AggState::CountAll { count: self.count }),
            (
                "avg_price",
                AggState::Avg {
                    sum: self.price_sum,
                    count: self.count,
                },
            ),
            ("total_amount", AggState::Sum { sum: self.amount }),
        ];
        let mut row = ResultRow::new(self.timestamp);
        for (name, state) in states {
            let value = if self.encoded {
                MetricValue::encoded(&state).unwrap()
            } else {
                MetricValue::State(state)
            };
            row = row.with_metric(name, value);
        }
        row
    }

    /// Hourly rows; row `i` has count `i + 1`.
    pub fn create_list(self, count: usize) -> Vec<ResultRow> {
        (0..count)
            .map(|i| {
                let n = i as i64 + 1;
                ResultRowFactory {
                    timestamp: self.timestamp + Duration::hours(i as i64),
                    count: n,
                    price_sum: self.price_sum * n,
                    amount: self.amount * n,
                    encoded: self.encoded,
                }
                .create()
            })
            .collect()
    }
}
