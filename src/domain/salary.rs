use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Year-month value object, e.g. `2025-04`
///
/// Persisted as the first day of the month (a plain date column) so native
/// date operators keep working for range queries; reconstructed on read.
/// On the wire it is the string `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, String> {
        if !(1..=12).contains(&month) {
            return Err(format!("Month must be 1-12, got {}", month));
        }
        // keep the year inside the range a date column can hold
        if !(1..=9999).contains(&year) {
            return Err(format!("Year must be 1-9999, got {}", year));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The first day of this month, the persisted representation
    pub fn first_day(&self) -> NaiveDate {
        // year and month are validated at construction, day 1 always exists
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(date) => date,
            None => unreachable!("validated year-month"),
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| format!("Invalid year-month: {}", s))?;
        let year: i32 = year.parse().map_err(|_| format!("Invalid year in: {}", s))?;
        let month: u32 = month
            .parse()
            .map_err(|_| format!("Invalid month in: {}", s))?;
        YearMonth::new(year, month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Payment status of a salary record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SalaryStatus {
    Draft,
    Paid,
    Cancelled,
}

impl SalaryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SalaryStatus::Draft => "DRAFT",
            SalaryStatus::Paid => "PAID",
            SalaryStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for SalaryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SalaryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(SalaryStatus::Draft),
            "PAID" => Ok(SalaryStatus::Paid),
            "CANCELLED" => Ok(SalaryStatus::Cancelled),
            other => Err(format!("Unknown salary status: {}", other)),
        }
    }
}

/// Monthly salary record
///
/// # Invariants
/// - `net_salary = base_salary + bonus - deductions` after every write;
///   the server recomputes it and ignores client-supplied values
/// - `(employee_id, month)` is unique
#[derive(Debug, Clone)]
pub struct Salary {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub base_salary: Decimal,
    pub bonus: Decimal,
    pub deductions: Decimal,
    pub net_salary: Decimal,
    pub month: YearMonth,
    pub status: SalaryStatus,
    pub comments: Option<String>,
}

/// Computes the net salary at fixed scale 2, rounding half up
pub fn compute_net_salary(base: Decimal, bonus: Decimal, deductions: Decimal) -> Decimal {
    (base + bonus - deductions).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
