//! Bundled sample data for offline and demo runs.

use relief_core::{ImpactStory, Transaction, TransactionType};

struct SampleTransaction {
    date: &'static str,
    description: &'static str,
    category: &'static str,
    amount: f64,
    kind: TransactionType,
    proof_link: Option<&'static str>,
}

struct SampleStory {
    date: &'static str,
    title: &'static str,
    description: &'static str,
    image_url: Option<&'static str>,
}

const SAMPLE_TRANSACTIONS: &[SampleTransaction] = &[
    SampleTransaction {
        date: "2025-11-30",
        description: "Member donations (first 48 hours)",
        category: "Donations",
        amount: 425_000.0,
        kind: TransactionType::Credit,
        proof_link: None,
    },
    SampleTransaction {
        date: "2025-12-01",
        description: "Corporate partner contribution",
        category: "Donations",
        amount: 300_000.0,
        kind: TransactionType::Credit,
        proof_link: Some("https://example.org/receipts/partner-001.pdf"),
    },
    SampleTransaction {
        date: "2025-12-02",
        description: "Dry ration packs (200 families)",
        category: "Food Supplies",
        amount: 180_000.0,
        kind: TransactionType::Debit,
        proof_link: Some("https://example.org/receipts/inv-2231.pdf"),
    },
    SampleTransaction {
        date: "2025-12-03",
        description: "Water purification tablets and filters",
        category: "Sanitation",
        amount: 96_500.0,
        kind: TransactionType::Debit,
        proof_link: Some("https://example.org/receipts/inv-2240.pdf"),
    },
    SampleTransaction {
        date: "2025-12-04",
        description: "Transport of supplies to Kandy district",
        category: "Logistics",
        amount: 42_750.0,
        kind: TransactionType::Debit,
        proof_link: None,
    },
    SampleTransaction {
        date: "2025-12-06",
        description: "Student branch fundraiser",
        category: "Donations",
        amount: 88_200.0,
        kind: TransactionType::Credit,
        proof_link: None,
    },
];

const SAMPLE_STORIES: &[SampleStory] = &[
    SampleStory {
        date: "2025-12-02",
        title: "Ration packs reach flooded villages",
        description: "Volunteers from three student branches packed and delivered dry rations to families cut off by flood water.",
        image_url: Some("https://iili.io/sample-rations.jpg"),
    },
    SampleStory {
        date: "2025-12-04",
        title: "Clean water restored at relief camp",
        description: "Filters and purification tablets now supply drinking water for more than 400 people sheltering at the school.",
        image_url: Some("https://www.youtube.com/watch?v=aqz-KE-bpKQ"),
    },
    SampleStory {
        date: "2025-12-06",
        title: "Thank you, donors",
        description: "A first look at where the money has gone, with receipts for every purchase published on the ledger.",
        image_url: None,
    },
];

/// Sample ledger with positional ids `"0"`, `"1"`, ...
pub fn mock_transactions() -> Vec<Transaction> {
    SAMPLE_TRANSACTIONS
        .iter()
        .enumerate()
        .map(|(i, t)| Transaction {
            id: i.to_string(),
            date: t.date.to_string(),
            description: t.description.to_string(),
            category: t.category.to_string(),
            amount: t.amount,
            kind: t.kind,
            proof_link: t.proof_link.map(str::to_string),
        })
        .collect()
}

/// Sample stories with positional ids `"0"`, `"1"`, ...
pub fn mock_impact_stories() -> Vec<ImpactStory> {
    SAMPLE_STORIES
        .iter()
        .enumerate()
        .map(|(i, s)| ImpactStory {
            id: i.to_string(),
            date: s.date.to_string(),
            title: s.title.to_string(),
            description: s.description.to_string(),
            image_url: s.image_url.map(str::to_string),
        })
        .collect()
}
