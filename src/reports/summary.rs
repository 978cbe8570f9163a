//! Expense summary
//!
//! Normalizes expenses of different periods into a monthly total, projects
//! it over a year, and groups the records by period for display.

use crate::models::{ExpenseRecord, Period};

/// Months in a year, used to project the monthly total
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Expenses sharing one period
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodGroup {
    pub period: Period,
    /// Sum of the raw amounts, not normalized
    pub subtotal: f64,
    /// Records sorted by amount, largest first
    pub records: Vec<ExpenseRecord>,
}

impl PeriodGroup {
    pub fn label(&self) -> &'static str {
        self.period.label()
    }
}

/// Aggregated view of an expense list
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSummary {
    /// Sum of every record's monthly equivalent
    pub monthly_total: f64,
    /// Monthly total projected over a year
    pub yearly_total: f64,
    /// Non-empty groups in period display order
    pub groups: Vec<PeriodGroup>,
}

impl ExpenseSummary {
    /// Aggregate a list of records
    ///
    /// The input is not modified. Records with equal amounts keep their
    /// relative input order within a group. No rounding is applied.
    pub fn generate(records: &[ExpenseRecord]) -> Self {
        let monthly_total: f64 = records.iter().map(ExpenseRecord::monthly_equivalent).sum();

        let mut buckets: [Vec<ExpenseRecord>; 4] = Default::default();
        for record in records {
            buckets[record.period.order()].push(record.clone());
        }

        let groups = Period::ALL
            .iter()
            .zip(buckets)
            .filter(|(_, records)| !records.is_empty())
            .map(|(&period, mut records)| {
                let subtotal = records.iter().map(|r| r.amount).sum();
                // sort_by is stable
                records.sort_by(|a, b| b.amount.total_cmp(&a.amount));
                PeriodGroup {
                    period,
                    subtotal,
                    records,
                }
            })
            .collect();

        Self {
            monthly_total,
            yearly_total: monthly_total * MONTHS_PER_YEAR,
            groups,
        }
    }

    /// Amount to set aside from each paycheck to cover a month
    ///
    /// Zero paychecks is treated as one.
    pub fn per_paycheck(&self, paychecks_per_month: u32) -> f64 {
        self.monthly_total / f64::from(paychecks_per_month.max(1))
    }

    /// Total number of records across all groups
    pub fn record_count(&self) -> usize {
        self.groups.iter().map(|g| g.records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The group for a period, if any record has it
    pub fn group(&self, period: Period) -> Option<&PeriodGroup> {
        self.groups.iter().find(|g| g.period == period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, ExpenseInput};

    fn record(id: &str, title: &str, amount: f64, period: Period) -> ExpenseRecord {
        ExpenseRecord {
            id: ExpenseId::from(id),
            title: title.to_string(),
            amount,
            period,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_empty() {
        let summary = ExpenseSummary::generate(&[]);
        assert_eq!(summary.monthly_total, 0.0);
        assert_eq!(summary.yearly_total, 0.0);
        assert!(summary.is_empty());
    }

    #[test]
    fn test_rent_and_coffee() {
        let records = vec![
            record("r", "Rent", 30000.0, Period::Monthly),
            record("c", "Coffee", 150.0, Period::Daily),
        ];

        let summary = ExpenseSummary::generate(&records);

        assert_close(summary.monthly_total, 34562.5);
        assert_close(summary.yearly_total, 414750.0);
        assert_eq!(summary.groups.len(), 2);
        assert_eq!(summary.groups[0].period, Period::Daily);
        assert_eq!(summary.groups[1].period, Period::Monthly);
    }

    #[test]
    fn test_contributions_per_period() {
        let monthly = ExpenseSummary::generate(&[record("a", "A", 777.0, Period::Monthly)]);
        assert_eq!(monthly.monthly_total, 777.0);

        let yearly = ExpenseSummary::generate(&[record("a", "A", 1200.0, Period::Yearly)]);
        assert_close(yearly.monthly_total, 100.0);

        let weekly = ExpenseSummary::generate(&[record("a", "A", 300.0, Period::Weekly)]);
        assert_eq!(weekly.monthly_total, 300.0 * (52.0 / 12.0));

        let daily = ExpenseSummary::generate(&[record("a", "A", 10.0, Period::Daily)]);
        assert_eq!(daily.monthly_total, 10.0 * (365.0 / 12.0));
    }

    #[test]
    fn test_per_paycheck() {
        let summary = ExpenseSummary::generate(&[record("a", "Rent", 30000.0, Period::Monthly)]);
        assert_eq!(summary.per_paycheck(1), 30000.0);
        assert_eq!(summary.per_paycheck(2), 15000.0);
        assert_eq!(summary.per_paycheck(0), 30000.0);
    }

    #[test]
    fn test_yearly_is_exactly_twelve_months() {
        let records = vec![
            record("a", "A", 0.1, Period::Daily),
            record("b", "B", 0.2, Period::Weekly),
            record("c", "C", 0.3, Period::Monthly),
            record("d", "D", 1234.567, Period::Yearly),
        ];

        let summary = ExpenseSummary::generate(&records);
        assert_eq!(summary.yearly_total, summary.monthly_total * 12.0);
    }

    #[test]
    fn test_group_sorting_and_stability() {
        let records = vec![
            record("1", "Small", 10.0, Period::Monthly),
            record("2", "TieFirst", 50.0, Period::Monthly),
            record("3", "Big", 90.0, Period::Monthly),
            record("4", "TieSecond", 50.0, Period::Monthly),
        ];

        let summary = ExpenseSummary::generate(&records);
        let titles: Vec<_> = summary.groups[0]
            .records
            .iter()
            .map(|r| r.title.as_str())
            .collect();

        assert_eq!(titles, vec!["Big", "TieFirst", "TieSecond", "Small"]);
    }

    #[test]
    fn test_subtotal_is_raw() {
        let records = vec![
            record("1", "Coffee", 150.0, Period::Daily),
            record("2", "Lunch", 400.0, Period::Daily),
        ];

        let summary = ExpenseSummary::generate(&records);
        assert_eq!(summary.groups[0].subtotal, 550.0);
    }

    #[test]
    fn test_group_order_and_omission() {
        let records = vec![
            record("1", "Insurance", 12000.0, Period::Yearly),
            record("2", "Coffee", 150.0, Period::Daily),
            record("3", "Cleaning", 2000.0, Period::Weekly),
        ];

        let summary = ExpenseSummary::generate(&records);
        let periods: Vec<_> = summary.groups.iter().map(|g| g.period).collect();

        assert_eq!(periods, vec![Period::Daily, Period::Weekly, Period::Yearly]);
        assert!(summary.group(Period::Monthly).is_none());
        assert_eq!(summary.record_count(), 3);
    }

    #[test]
    fn test_input_untouched() {
        let records = vec![
            ExpenseRecord::new(ExpenseInput::new("Small", 1.0, Period::Monthly)),
            ExpenseRecord::new(ExpenseInput::new("Big", 2.0, Period::Monthly)),
        ];
        let before = records.clone();

        let _ = ExpenseSummary::generate(&records);

        assert_eq!(records, before);
    }

    #[test]
    fn test_deterministic() {
        let records = vec![
            record("1", "A", 3.0, Period::Weekly),
            record("2", "B", 3.0, Period::Weekly),
            record("3", "C", 9.0, Period::Daily),
        ];

        assert_eq!(
            ExpenseSummary::generate(&records),
            ExpenseSummary::generate(&records)
        );
    }
}
