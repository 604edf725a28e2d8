// src/services/finance.rs

// Funções puras de agregação financeira. Todos os números derivados do
// sistema (totais, margens, decomposição de IGV, séries para gráficos)
// saem daqui; os handlers só repassam o resultado.

use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{
    dashboard::{CategoryTotal, ExpenseDistributionEntry, MonthlyCashflowEntry},
    expense::{Expense, ExpenseCategory},
    income::{Income, TaxSplit},
};

// Taxa fixa de 18% de IGV. Constante de domínio, não configurável.
fn igv_rate() -> Decimal {
    Decimal::new(18, 2) // 0.18
}

fn igv_factor() -> Decimal {
    Decimal::new(118, 2) // 1.18
}

// Decompõe um valor bruto em subtotal + IGV.
// Invariante: subtotal + igv == total quando o IGV está incluído.
pub fn split_igv(amount: Decimal, igv_included: bool) -> TaxSplit {
    if igv_included {
        TaxSplit {
            subtotal: amount / igv_factor(),
            igv: amount * igv_rate() / igv_factor(),
            total: amount,
        }
    } else {
        TaxSplit {
            subtotal: amount,
            igv: Decimal::ZERO,
            total: amount,
        }
    }
}

pub fn total_income(incomes: &[Income]) -> Decimal {
    incomes.iter().map(|income| income.amount).sum()
}

pub fn total_expense(expenses: &[Expense]) -> Decimal {
    expenses.iter().map(|expense| expense.amount).sum()
}

pub fn income_total_for_project(incomes: &[Income], project_id: Uuid) -> Decimal {
    incomes
        .iter()
        .filter(|income| income.project_id == project_id)
        .map(|income| income.amount)
        .sum()
}

pub fn expense_total_for_project(expenses: &[Expense], project_id: Uuid) -> Decimal {
    expenses
        .iter()
        .filter(|expense| expense.project_id == Some(project_id))
        .map(|expense| expense.amount)
        .sum()
}

pub fn margin(total_income: Decimal, total_expense: Decimal) -> Decimal {
    total_income - total_expense
}

// Margem em %. Com ingresso zero a divisão não acontece: devolve 0,
// nunca NaN/Infinity.
pub fn margin_percent(total_income: Decimal, total_expense: Decimal) -> Decimal {
    if total_income.is_zero() {
        return Decimal::ZERO;
    }
    (total_income - total_expense) / total_income * Decimal::ONE_HUNDRED
}

// Total por categoria. Percorre TODAS as categorias do enum: categoria
// sem registro aparece com zero, nunca é omitida.
pub fn category_breakdown(expenses: &[Expense]) -> Vec<CategoryTotal> {
    ExpenseCategory::ALL
        .iter()
        .map(|&category| CategoryTotal {
            category,
            label: category.label().to_string(),
            total: expenses
                .iter()
                .filter(|expense| expense.category == category)
                .map(|expense| expense.amount)
                .sum(),
        })
        .collect()
}

// Distribuição percentual por categoria, para o gráfico de pizza.
pub fn expense_distribution(expenses: &[Expense]) -> Vec<ExpenseDistributionEntry> {
    let total = total_expense(expenses);
    category_breakdown(expenses)
        .into_iter()
        .map(|row| {
            let percent = if total.is_zero() {
                Decimal::ZERO
            } else {
                row.total / total * Decimal::ONE_HUNDRED
            };
            ExpenseDistributionEntry {
                category: row.category,
                label: row.label,
                total: row.total,
                percent,
            }
        })
        .collect()
}

pub fn igv_total(expenses: &[Expense]) -> Decimal {
    expenses.iter().map(|expense| expense.igv).sum()
}

pub fn detraccion_total(expenses: &[Expense]) -> Decimal {
    expenses.iter().map(|expense| expense.detraccion).sum()
}

const MONTH_LABELS: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

// Série mensal de ingressos vs egressos, agrupada pelo mês-calendário
// da data do registro e ordenada cronologicamente.
pub fn monthly_cashflow(incomes: &[Income], expenses: &[Expense]) -> Vec<MonthlyCashflowEntry> {
    let mut buckets: BTreeMap<(i32, u32), (Decimal, Decimal)> = BTreeMap::new();

    for income in incomes {
        let bucket = buckets
            .entry((income.date.year(), income.date.month()))
            .or_default();
        bucket.0 += income.amount;
    }
    for expense in expenses {
        let bucket = buckets
            .entry((expense.date.year(), expense.date.month()))
            .or_default();
        bucket.1 += expense.amount;
    }

    buckets
        .into_iter()
        .map(|((_, month), (income, expense))| MonthlyCashflowEntry {
            month: MONTH_LABELS[(month - 1) as usize].to_string(),
            income,
            expense,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::models::income::DocumentKind;

    fn tolerance() -> Decimal {
        Decimal::new(1, 6) // 1e-6
    }

    fn income(project_id: Uuid, amount: i64, month: u32) -> Income {
        Income {
            id: Uuid::new_v4(),
            client: "Cliente de prueba".to_string(),
            project_id,
            amount: Decimal::from(amount),
            igv_included: true,
            date: NaiveDate::from_ymd_opt(2024, month, 10).unwrap(),
            kind: DocumentKind::Invoice,
            number: "F001-000099".to_string(),
        }
    }

    fn expense(
        project_id: Option<Uuid>,
        category: ExpenseCategory,
        amount: i64,
        month: u32,
    ) -> Expense {
        Expense {
            id: Uuid::new_v4(),
            category,
            amount: Decimal::from(amount),
            igv: Decimal::ZERO,
            detraccion: Decimal::ZERO,
            source_account: "Banco Principal".to_string(),
            target_account: "Proveedor".to_string(),
            date: NaiveDate::from_ymd_opt(2024, month, 12).unwrap(),
            description: "Gasto de prueba".to_string(),
            attachment: None,
            project_id,
        }
    }

    #[test]
    fn split_igv_included_matches_the_worked_example() {
        // 500000 con IGV incluido -> subtotal 423728.81, igv 76271.19
        let split = split_igv(Decimal::from(500_000), true);
        let expected_subtotal = Decimal::new(42_372_881, 2);
        let expected_igv = Decimal::new(7_627_119, 2);

        assert!((split.subtotal - expected_subtotal).abs() < Decimal::new(1, 2));
        assert!((split.igv - expected_igv).abs() < Decimal::new(1, 2));
        assert_eq!(split.total, Decimal::from(500_000));
    }

    #[test]
    fn split_igv_included_preserves_the_gross_amount() {
        for amount in [1i64, 118, 500_000, 999_999] {
            let amount = Decimal::from(amount);
            let split = split_igv(amount, true);
            assert!((split.subtotal + split.igv - amount).abs() < tolerance());
        }
    }

    #[test]
    fn split_igv_excluded_has_zero_tax() {
        let amount = Decimal::from(300_000);
        let split = split_igv(amount, false);
        assert_eq!(split.igv, Decimal::ZERO);
        assert_eq!(split.subtotal, amount);
        assert_eq!(split.total, amount);
    }

    #[test]
    fn margin_matches_the_three_project_example() {
        // ingresos {1.8M, 3.2M, 1.8M} vs egresos {1.2M, 2.8M, 1.65M}
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        let incomes = vec![
            income(a, 1_800_000, 1),
            income(b, 3_200_000, 1),
            income(c, 1_800_000, 1),
        ];
        let expenses = vec![
            expense(Some(a), ExpenseCategory::SupplierInvoice, 1_200_000, 1),
            expense(Some(b), ExpenseCategory::SupplierInvoice, 2_800_000, 1),
            expense(Some(c), ExpenseCategory::SupplierInvoice, 1_650_000, 1),
        ];

        let total_in = total_income(&incomes);
        let total_out = total_expense(&expenses);
        assert_eq!(total_in, Decimal::from(6_800_000));
        assert_eq!(total_out, Decimal::from(5_650_000));
        assert_eq!(margin(total_in, total_out), Decimal::from(1_150_000));
    }

    #[test]
    fn sums_by_project_only_count_matching_records() {
        let target = Uuid::new_v4();
        let other = Uuid::new_v4();
        let incomes = vec![
            income(target, 500_000, 1),
            income(target, 300_000, 3),
            income(other, 800_000, 2),
        ];
        let expenses = vec![
            expense(Some(target), ExpenseCategory::Payroll, 80_000, 2),
            expense(Some(other), ExpenseCategory::Service, 25_000, 2),
            expense(None, ExpenseCategory::Other, 10_000, 2),
        ];

        assert_eq!(
            income_total_for_project(&incomes, target),
            Decimal::from(800_000)
        );
        assert_eq!(
            expense_total_for_project(&expenses, target),
            Decimal::from(80_000)
        );
    }

    #[test]
    fn margin_percent_guards_division_by_zero() {
        assert_eq!(
            margin_percent(Decimal::ZERO, Decimal::from(1_000)),
            Decimal::ZERO
        );
    }

    #[test]
    fn margin_percent_on_regular_totals() {
        let percent = margin_percent(Decimal::from(800_000), Decimal::from(230_000));
        assert_eq!(percent, Decimal::new(7_125, 2)); // 71.25%
    }

    #[test]
    fn category_breakdown_visits_every_category() {
        let expenses = vec![expense(None, ExpenseCategory::Payroll, 80_000, 1)];
        let rows = category_breakdown(&expenses);

        assert_eq!(rows.len(), ExpenseCategory::ALL.len());
        for row in &rows {
            if row.category == ExpenseCategory::Payroll {
                assert_eq!(row.total, Decimal::from(80_000));
            } else {
                assert_eq!(row.total, Decimal::ZERO);
            }
        }
    }

    #[test]
    fn category_totals_add_up_to_the_grand_total() {
        let expenses = vec![
            expense(None, ExpenseCategory::SupplierInvoice, 150_000, 1),
            expense(None, ExpenseCategory::Payroll, 80_000, 2),
            expense(None, ExpenseCategory::Service, 25_000, 2),
        ];
        let sum: Decimal = category_breakdown(&expenses)
            .iter()
            .map(|row| row.total)
            .sum();
        assert_eq!(sum, total_expense(&expenses));
    }

    #[test]
    fn distribution_percentages_handle_an_empty_set() {
        let rows = expense_distribution(&[]);
        assert_eq!(rows.len(), ExpenseCategory::ALL.len());
        assert!(rows.iter().all(|row| row.percent == Decimal::ZERO));
    }

    #[test]
    fn tax_and_withholding_totals_are_independent() {
        let mut first = expense(None, ExpenseCategory::SupplierInvoice, 150_000, 1);
        first.igv = Decimal::from(27_000);
        first.detraccion = Decimal::from(15_000);
        let mut second = expense(None, ExpenseCategory::Service, 25_000, 2);
        second.igv = Decimal::from(4_500);
        second.detraccion = Decimal::from(2_500);

        let expenses = vec![first, second];
        assert_eq!(igv_total(&expenses), Decimal::from(31_500));
        assert_eq!(detraccion_total(&expenses), Decimal::from(17_500));
    }

    #[test]
    fn monthly_cashflow_groups_and_orders_by_month() {
        let project = Uuid::new_v4();
        let incomes = vec![
            income(project, 500_000, 1),
            income(project, 300_000, 3),
            income(project, 200_000, 3),
        ];
        let expenses = vec![expense(Some(project), ExpenseCategory::Payroll, 80_000, 2)];

        let series = monthly_cashflow(&incomes, &expenses);
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].month, "Ene");
        assert_eq!(series[0].income, Decimal::from(500_000));
        assert_eq!(series[1].month, "Feb");
        assert_eq!(series[1].expense, Decimal::from(80_000));
        assert_eq!(series[2].month, "Mar");
        assert_eq!(series[2].income, Decimal::from(500_000));
    }
}
