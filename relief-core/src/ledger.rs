//! Ledger record types: donations in, relief spending out.

use serde::{Deserialize, Serialize};

/// Direction of money on the ledger.
///
/// Serialized with the spreadsheet's own spelling so exported JSON matches the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    #[serde(rename = "Credit")]
    Credit,
    #[serde(rename = "Debit")]
    Debit,
}

impl TransactionType {
    /// Map the raw `Type` column. Only the exact string `Credit` is a credit;
    /// everything else (including blanks and `credit`) is treated as a debit.
    pub fn from_sheet_value(raw: &str) -> Self {
        if raw == "Credit" {
            TransactionType::Credit
        } else {
            TransactionType::Debit
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Credit => "Credit",
            TransactionType::Debit => "Debit",
        }
    }
}

/// One ledger line as shown on the transparency page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Positional identity (`trans-3` for sheet rows, `3` for bundled rows)
    pub id: String,
    /// Date exactly as written in the source, unvalidated
    pub date: String,
    pub description: String,
    /// Spending bucket; `General` when the sheet leaves it blank
    pub category: String,
    /// Amount in the sheet's currency; sign comes from the sheet, not from `kind`
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Receipt or invoice link, if one was published
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_link: Option<String>,
}

impl Transaction {
    pub fn is_credit(&self) -> bool {
        self.kind == TransactionType::Credit
    }

    pub fn is_debit(&self) -> bool {
        self.kind == TransactionType::Debit
    }
}

/// Totals derived from a ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub total_collected: f64,
    pub total_spent: f64,
    pub remaining_balance: f64,
}

impl FinancialSummary {
    /// Credits count as collected, debits as spent. Amounts are summed as written.
    pub fn from_transactions(txns: &[Transaction]) -> Self {
        let collected: f64 = txns.iter().filter(|t| t.is_credit()).map(|t| t.amount).sum();
        let spent: f64 = txns.iter().filter(|t| t.is_debit()).map(|t| t.amount).sum();

        Self {
            total_collected: collected,
            total_spent: spent,
            remaining_balance: collected - spent,
        }
    }
}
