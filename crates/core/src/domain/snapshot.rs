use crate::domain::error::EvaluationError;
use serde::Serialize;
use serde_json::{Map, Value};

/// Normalized metrics for one security, as handed over by a metrics provider.
///
/// Every field is optional. A `None` switches off the rules that depend on it; it is never read
/// as zero. [`StockSnapshot::from_json`] is the only decoder.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StockSnapshot {
    pub company_name: Option<String>,
    pub current_price: Option<f64>,
    pub one_year_return_pct: Option<f64>,
    pub market_cap: Option<f64>,
    pub total_debt: Option<f64>,
    pub debt_to_equity: Option<f64>,
    pub pe_ratio: Option<f64>,
    /// Fraction, `0.18` means 18%.
    pub roe: Option<f64>,
    pub week52_high: Option<f64>,
    pub week52_low: Option<f64>,
}

// (field, provider display key)
const NUMERIC_FIELDS: [(&str, &str); 9] = [
    ("current_price", "Current Price"),
    ("one_year_return_pct", "1Y Return (%)"),
    ("market_cap", "Market Cap"),
    ("total_debt", "Total Debt"),
    ("debt_to_equity", "Debt to Equity"),
    ("pe_ratio", "PE Ratio"),
    ("roe", "ROE"),
    ("week52_high", "52 Week High"),
    ("week52_low", "52 Week Low"),
];

impl StockSnapshot {
    /// Decodes a snapshot from a loosely-typed JSON object.
    ///
    /// Accepts both the snake_case field names and the provider's display keys; when both are
    /// set, the snake_case key wins. `null` and missing keys become `None`; a non-number where a
    /// number is expected is rejected.
    pub fn from_json(value: &Value) -> Result<Self, EvaluationError> {
        let obj = value
            .as_object()
            .ok_or_else(|| EvaluationError::invalid("snapshot", "expected a JSON object"))?;

        let mut numbers = [None; NUMERIC_FIELDS.len()];
        for (slot, (field, display)) in numbers.iter_mut().zip(NUMERIC_FIELDS) {
            *slot = number_field(obj, field, display)?;
        }
        let [current_price, one_year_return_pct, market_cap, total_debt, debt_to_equity, pe_ratio, roe, week52_high, week52_low] =
            numbers;

        let snapshot = Self {
            company_name: text_field(obj, "company_name", "Company Name")?,
            current_price,
            one_year_return_pct,
            market_cap,
            total_debt,
            debt_to_equity,
            pe_ratio,
            roe,
            week52_high,
            week52_low,
        };
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Rejects non-finite numbers. Absent fields always pass.
    pub fn validate(&self) -> Result<(), EvaluationError> {
        for (field, value) in self.numeric_fields() {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(EvaluationError::invalid(field, format!("{v} is not a finite number")));
                }
            }
        }
        Ok(())
    }

    /// `(price, high, low)` when all three are present.
    pub fn price_range(&self) -> Option<(f64, f64, f64)> {
        Some((self.current_price?, self.week52_high?, self.week52_low?))
    }

    pub fn is_empty(&self) -> bool {
        self.company_name.is_none() && self.numeric_fields().iter().all(|(_, v)| v.is_none())
    }

    fn numeric_fields(&self) -> [(&'static str, Option<f64>); NUMERIC_FIELDS.len()] {
        [
            ("current_price", self.current_price),
            ("one_year_return_pct", self.one_year_return_pct),
            ("market_cap", self.market_cap),
            ("total_debt", self.total_debt),
            ("debt_to_equity", self.debt_to_equity),
            ("pe_ratio", self.pe_ratio),
            ("roe", self.roe),
            ("week52_high", self.week52_high),
            ("week52_low", self.week52_low),
        ]
    }
}

fn lookup<'a>(obj: &'a Map<String, Value>, field: &str, display: &str) -> Option<&'a Value> {
    obj.get(field)
        .filter(|v| !v.is_null())
        .or_else(|| obj.get(display))
        .filter(|v| !v.is_null())
}

fn number_field(
    obj: &Map<String, Value>,
    field: &'static str,
    display: &str,
) -> Result<Option<f64>, EvaluationError> {
    match lookup(obj, field, display) {
        None => Ok(None),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| EvaluationError::invalid(field, format!("{n} does not fit in f64"))),
        Some(other) => Err(EvaluationError::invalid(
            field,
            format!("expected a number, got {other}"),
        )),
    }
}

fn text_field(
    obj: &Map<String, Value>,
    field: &'static str,
    display: &str,
) -> Result<Option<String>, EvaluationError> {
    match lookup(obj, field, display) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.trim().to_string()).filter(|s| !s.is_empty())),
        Some(other) => Err(EvaluationError::invalid(
            field,
            format!("expected a string, got {other}"),
        )),
    }
}
