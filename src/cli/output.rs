//! Human and JSON rendering for command results

use serde::Serialize;
use studygenius::{Account, PaymentMethod, PlanOffer, UploadedDocument};

/// Print a value as pretty JSON
pub fn json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn account(account: &Account, trial_days_left: Option<i64>) {
    println!("{} <{}>", account.name, account.email);
    println!("  id:        {}", account.id);
    println!("  verified:  {}", if account.is_verified { "yes" } else { "no" });
    println!("  plan:      {}", account.plan_display_name());
    if let Some(days) = trial_days_left {
        println!("  trial:     {} day(s) left", days);
    }
    if let Some(end) = account.subscription.as_ref().and_then(|s| s.end_date) {
        println!("  renews:    {}", end.format("%Y-%m-%d"));
    }
}

pub fn plans(offers: &[PlanOffer]) {
    for offer in offers {
        let marker = if offer.popular { " (most popular)" } else { "" };
        println!("{}{} - {}", offer.name, marker, offer.description);
        if offer.monthly_price == 0.0 {
            println!("  free forever");
        } else {
            println!(
                "  ${:.2}/month or ${:.2}/year (save ${:.2})",
                offer.monthly_price,
                offer.annual_price,
                offer.annual_savings()
            );
        }
    }
}

pub fn payment_methods(methods: &[PaymentMethod]) {
    if methods.is_empty() {
        println!("No payment methods on file.");
        return;
    }
    for method in methods {
        println!(
            "{}  {} ending in {}  exp {}/{}  {}{}",
            method.id,
            method.card_type,
            method.last_four,
            method.expiry_month,
            method.expiry_year,
            method.cardholder_name,
            if method.is_default { "  [default]" } else { "" }
        );
    }
}

pub fn documents(documents: &[UploadedDocument]) {
    if documents.is_empty() {
        println!("No documents uploaded yet.");
        return;
    }
    for doc in documents {
        println!(
            "{}  {}  [{}]  {}  {}",
            doc.id,
            doc.file_name,
            doc.subject,
            studygenius::utils::format_bytes(doc.size),
            doc.uploaded_at.format("%Y-%m-%d %H:%M")
        );
    }
}
