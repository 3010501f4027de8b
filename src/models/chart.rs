use chrono::NaiveDate;

use crate::models::{OhlcvRecord, SupportResistance};

/// One OHLCV row plus the derived fields the chart tooltip shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRecord {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    /// close - open for the period.
    pub price_change: f64,
    /// price_change / open * 100. None when open is zero, so a bad upstream
    /// row never renders as Infinity or NaN.
    pub price_change_percent: Option<f64>,
}

impl ChartRecord {
    fn from_ohlcv(raw: &OhlcvRecord) -> Self {
        let price_change = raw.close - raw.open;
        let price_change_percent = if raw.open == 0.0 {
            None
        } else {
            Some(price_change / raw.open * 100.0)
        };

        Self {
            date: raw.date,
            open: raw.open,
            high: raw.high,
            low: raw.low,
            close: raw.close,
            volume: raw.volume,
            price_change,
            price_change_percent,
        }
    }
}

/// Chart-ready view of one symbol's history. Input order is preserved; no
/// resampling or gap-filling happens here. Rebuilt from scratch on every new
/// raw arrival.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ChartSeries {
    /// Zero rows from the backend. The view must branch on this rather than
    /// render an empty plot.
    #[default]
    Empty,
    Ready {
        records: Vec<ChartRecord>,
        support_resistance: Option<SupportResistance>,
    },
}

impl ChartSeries {
    pub fn build(data: &[OhlcvRecord], support_resistance: Option<SupportResistance>) -> Self {
        if data.is_empty() {
            return Self::Empty;
        }

        Self::Ready {
            records: data.iter().map(ChartRecord::from_ohlcv).collect(),
            support_resistance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(open: f64, close: f64) -> OhlcvRecord {
        OhlcvRecord {
            date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            open,
            high: open.max(close),
            low: open.min(close),
            close,
            volume: 1_000,
        }
    }

    #[test]
    fn derived_fields_match_definition() {
        let series = ChartSeries::build(&[row(100.0, 110.0)], None);
        let ChartSeries::Ready { records, .. } = series else {
            panic!("expected a ready series");
        };
        assert_eq!(records[0].price_change, 10.0);
        assert_eq!(records[0].price_change_percent, Some(10.0));
    }

    #[test]
    fn zero_open_omits_the_percentage() {
        let series = ChartSeries::build(&[row(0.0, 5.0)], None);
        let ChartSeries::Ready { records, .. } = series else {
            panic!("expected a ready series");
        };
        assert_eq!(records[0].price_change, 5.0);
        assert_eq!(records[0].price_change_percent, None);
    }

    #[test]
    fn empty_input_is_an_explicit_no_data_state() {
        assert_eq!(ChartSeries::build(&[], None), ChartSeries::Empty);

        // A populated-but-flat series is NOT the empty state.
        let flat = ChartSeries::build(&[row(100.0, 100.0)], None);
        assert_ne!(flat, ChartSeries::Empty);
    }

    #[test]
    fn support_resistance_passes_through_untouched() {
        let sr = SupportResistance {
            support: 95.0,
            resistance: 120.0,
        };
        let series = ChartSeries::build(&[row(100.0, 110.0)], Some(sr));
        let ChartSeries::Ready {
            support_resistance, ..
        } = series
        else {
            panic!("expected a ready series");
        };
        assert_eq!(support_resistance, Some(sr));

        // Absence means "not provided", not zero levels.
        let series = ChartSeries::build(&[row(100.0, 110.0)], None);
        let ChartSeries::Ready {
            support_resistance, ..
        } = series
        else {
            panic!("expected a ready series");
        };
        assert_eq!(support_resistance, None);
    }
}
