//! Terminal rendering of ledger data.

use anyhow::Result;
use relief_core::{FinancialSummary, ImpactStory, StoryMedia, Transaction};
use serde::Serialize;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `1234567.5` → `1,234,567.50`
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac}")
}

pub fn print_transactions(txns: &[Transaction], limit: usize, currency: &str) {
    if txns.is_empty() {
        println!("(no transactions)");
        return;
    }

    for t in txns.iter().take(limit) {
        let arrow = if t.is_credit() { "+" } else { "-" };
        println!(
            "{:<12} {} {:>16} {} | {:<6} | {} | {}",
            t.date,
            arrow,
            format_amount(t.amount),
            currency,
            t.kind.label(),
            t.category,
            t.description
        );
        if let Some(link) = &t.proof_link {
            println!("{:<12}   proof: {}", "", link);
        }
    }

    if txns.len() > limit {
        println!("... {} more", txns.len() - limit);
    }
}

pub fn print_stories(stories: &[ImpactStory], limit: usize) {
    if stories.is_empty() {
        println!("(no stories)");
        return;
    }

    for s in stories.iter().take(limit) {
        println!("[{}] {}", s.date, s.title);
        if !s.description.is_empty() {
            println!("  {}", s.description);
        }
        let media = StoryMedia::for_story(s);
        if let Some(link) = media.link() {
            let label = match media {
                StoryMedia::Video { .. } => "video",
                _ => "image",
            };
            println!("  {label}: {link}");
        }
        println!();
    }

    if stories.len() > limit {
        println!("... {} more", stories.len() - limit);
    }
}

pub fn print_summary(summary: &FinancialSummary, currency: &str) {
    println!("Total collected:   {:>16} {}", format_amount(summary.total_collected), currency);
    println!("Total spent:       {:>16} {}", format_amount(summary.total_spent), currency);
    println!("Remaining balance: {:>16} {}", format_amount(summary.remaining_balance), currency);
}
