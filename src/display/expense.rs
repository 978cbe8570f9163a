//! Expense display formatting
//!
//! Formats the aggregated expense list, single records, and import previews.

use crate::models::ExpenseRecord;
use crate::reports::ExpenseSummary;
use crate::services::PendingImport;

use super::{separator, truncate, AmountFormat};

const MAX_TITLE_WIDTH: usize = 32;
const SHORT_ID_WIDTH: usize = 8;

/// Format the summary as grouped lists followed by the totals
///
/// `paychecks_per_month` above 1 adds a per-paycheck line.
pub fn format_summary(
    summary: &ExpenseSummary,
    fmt: &AmountFormat,
    paychecks_per_month: u32,
) -> String {
    let mut rows: Vec<(String, String)> = Vec::new();

    for group in &summary.groups {
        rows.push((group.label().to_string(), fmt.format(group.subtotal)));
        for record in &group.records {
            rows.push((
                format!(
                    "  {:<id_width$}  {}",
                    record.id.short(),
                    truncate(&record.title, MAX_TITLE_WIDTH),
                    id_width = SHORT_ID_WIDTH,
                ),
                fmt.format(record.amount),
            ));
        }
    }

    let mut totals = vec![
        ("Per month".to_string(), fmt.format(summary.monthly_total)),
        ("Per year".to_string(), fmt.format(summary.yearly_total)),
    ];
    if paychecks_per_month > 1 {
        totals.insert(
            1,
            (
                format!("Per paycheck ({}/month)", paychecks_per_month),
                fmt.format(summary.per_paycheck(paychecks_per_month)),
            ),
        );
    }

    let label_width = rows
        .iter()
        .chain(totals.iter())
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    let amount_width = rows
        .iter()
        .chain(totals.iter())
        .map(|(_, amount)| amount.chars().count())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    if summary.is_empty() {
        output.push_str("No expenses recorded.\n");
    }

    let push_row = |output: &mut String, label: &str, amount: &str| {
        output.push_str(&format!(
            "{:<label_width$}  {:>amount_width$}\n",
            label,
            amount,
            label_width = label_width,
            amount_width = amount_width,
        ));
    };

    for (label, amount) in &rows {
        push_row(&mut output, label, amount);
    }

    output.push_str(&separator(label_width + 2 + amount_width));
    output.push('\n');

    for (label, amount) in &totals {
        push_row(&mut output, label, amount);
    }

    output
}

/// Format a single expense with its monthly equivalent
pub fn format_expense_details(record: &ExpenseRecord, fmt: &AmountFormat) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense: {}\n", record.title));
    output.push_str(&format!("  ID:        {}\n", record.id));
    output.push_str(&format!("  Amount:    {}\n", fmt.format(record.amount)));
    output.push_str(&format!("  Period:    {}\n", record.period.label()));
    output.push_str(&format!(
        "  Per month: {}\n",
        fmt.format(record.monthly_equivalent())
    ));
    output.push_str(&format!(
        "  Per year:  {}\n",
        fmt.format(record.monthly_equivalent() * crate::reports::MONTHS_PER_YEAR)
    ));

    output
}

/// Describe what a pending import will do
pub fn format_import_preview(pending: &PendingImport, fmt: &AmountFormat) -> String {
    let incoming = ExpenseSummary::generate(pending.records());

    let mut output = String::new();
    output.push_str(&format!(
        "File contains {} expense(s), {} per month.\n",
        pending.incoming_count(),
        fmt.format(incoming.monthly_total)
    ));
    if pending.is_destructive() {
        output.push_str(&format!(
            "Importing replaces all {} current expense(s).\n",
            pending.replaced_count()
        ));
    }

    output
}
