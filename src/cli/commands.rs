//! Command handlers

use super::output;
use super::{CardArgs, CardsCommand, Cli, Commands};
use anyhow::{Context, Result, bail};
use chrono::Utc;
use serde_json::json;
use studygenius::{
    CardDetails, NewPaymentMethod, PasswordStrength, PaymentMethodPatch, StudyGenius,
};

/// Run one command against the application
///
/// Returns true when the command changed state that must be saved.
pub async fn execute(cli: &Cli, app: &StudyGenius) -> Result<bool> {
    match &cli.command {
        Commands::Plans => {
            if cli.json {
                output::json(&app.catalog().offers())?;
            } else {
                output::plans(app.catalog().offers());
            }
            Ok(false)
        }

        Commands::Signup {
            name,
            email,
            password,
        } => {
            let account = app.accounts().signup(name, email, password).await?;
            let strength = PasswordStrength::evaluate(password);
            if cli.json {
                output::json(&json!({
                    "account": account,
                    "passwordStrength": strength,
                    "destination": app.destination_for(&account),
                }))?;
            } else {
                println!("Welcome, {}! Your account has been created.", account.name);
                println!("Password strength: {} ({}%)", strength.label, strength.percent);
                println!("Next: {:?}", app.destination_for(&account));
            }
            Ok(false)
        }

        Commands::Login { email, password } => {
            let account = app.accounts().login(email, password).await?;
            if cli.json {
                output::json(&json!({
                    "account": account,
                    "destination": app.destination_for(&account),
                }))?;
            } else {
                println!("Logged in as {} <{}>", account.name, account.email);
                println!("Next: {:?}", app.destination_for(&account));
            }
            Ok(false)
        }

        Commands::Logout => {
            app.accounts().logout().await?;
            if !cli.json {
                println!("Logged out.");
            }
            Ok(false)
        }

        Commands::Whoami => {
            let account = app.require_account().await?;
            if cli.json {
                output::json(&account)?;
            } else {
                output::account(&account, account.trial_days_remaining(Utc::now()));
            }
            Ok(false)
        }

        Commands::Trial => {
            let account = app.accounts().activate_free_trial().await?;
            if cli.json {
                output::json(&account)?;
            } else {
                println!(
                    "Your {}-day free trial is active.",
                    app.accounts().trial_days()
                );
            }
            Ok(false)
        }

        Commands::ForgotPassword { email } => {
            app.accounts().request_password_reset(email).await?;
            if !cli.json {
                println!("If an account exists for {}, a reset link is on its way.", email);
            }
            Ok(false)
        }

        Commands::Subscribe {
            plan,
            cycle,
            card,
            save_card,
        } => {
            let details = card_details(card, *save_card)?;
            let receipt = app.subscribe(*plan, *cycle, &details).await?;
            if cli.json {
                output::json(&receipt)?;
            } else {
                println!(
                    "Subscribed to {} ({}) for ${:.2}. Transaction {}.",
                    receipt.subscription.name.display_name(),
                    receipt.subscription.billing_cycle,
                    receipt.subscription.price,
                    receipt.transaction_id
                );
                println!(
                    "Active until {}.",
                    receipt.subscription.end_date.format("%Y-%m-%d")
                );
            }
            Ok(*save_card)
        }

        Commands::Cards(command) => cards(cli, app, command).await,

        Commands::Upload { file, subject } => {
            let metadata = tokio::fs::metadata(file)
                .await
                .with_context(|| format!("Cannot read {}", file.display()))?;
            let file_name = file
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default();

            let document = app
                .upload_document(&file_name, subject, metadata.len())
                .await?;
            if cli.json {
                output::json(&document)?;
            } else {
                println!("Uploaded {} as {}.", document.file_name, document.id);
            }
            Ok(true)
        }

        Commands::Documents => {
            let account = app.require_account().await?;
            let documents = app.documents().list(&account.id);
            if cli.json {
                output::json(&documents)?;
            } else {
                output::documents(&documents);
            }
            Ok(false)
        }

        Commands::Generate {
            document_id,
            kind,
            info,
        } => {
            let generated = app.generate_content(document_id, *kind, info).await?;
            if cli.json {
                output::json(&generated)?;
            } else {
                println!("{}", generated.content);
            }
            Ok(false)
        }
    }
}

async fn cards(cli: &Cli, app: &StudyGenius, command: &CardsCommand) -> Result<bool> {
    let account = app.require_account().await?;
    let ledger = app.payment_methods();

    let method = match command {
        CardsCommand::List => {
            let methods = ledger.list(&account.id);
            if cli.json {
                output::json(&methods)?;
            } else {
                output::payment_methods(&methods);
            }
            return Ok(false);
        }
        CardsCommand::Add { card, default } => {
            let details = card_details(card, true)?;
            ledger.add(&account.id, NewPaymentMethod::from_card(&details, *default))
        }
        CardsCommand::Update {
            id,
            card_number,
            card_name,
            expiry,
            default,
        } => {
            let mut patch = PaymentMethodPatch::new();
            if let Some(number) = card_number {
                patch = patch.with_card_number(number);
            }
            if let Some(name) = card_name {
                patch = patch.cardholder_name(name.as_str());
            }
            if let Some(expiry) = expiry {
                let (month, year) = split_expiry(expiry)?;
                patch = patch.expiry(month, year);
            }
            if *default {
                patch = patch.is_default(true);
            }
            if patch.is_empty() {
                bail!("Nothing to update");
            }
            ledger.update(&account.id, id, patch)?
        }
        CardsCommand::Remove { id } => {
            let removed = app.remove_payment_method(&account.id, id)?;
            if cli.json {
                output::json(&removed)?;
            } else {
                println!("Removed {} ending in {}.", removed.card_type, removed.last_four);
            }
            return Ok(true);
        }
        CardsCommand::Default { id } => ledger.set_default(&account.id, id)?,
    };

    if cli.json {
        output::json(&method)?;
    } else {
        output::payment_methods(std::slice::from_ref(&method));
    }
    Ok(true)
}

fn card_details(card: &CardArgs, save_card: bool) -> Result<CardDetails> {
    let (expiry_month, expiry_year) = split_expiry(&card.expiry)?;
    Ok(CardDetails {
        card_number: card.card_number.clone(),
        card_name: card.card_name.clone(),
        expiry_month,
        expiry_year,
        cvv: card.cvv.clone(),
        save_card,
    })
}

/// Split `MM/YY` into its parts
fn split_expiry(expiry: &str) -> Result<(String, String)> {
    match expiry.split_once('/') {
        Some((month, year)) if !month.trim().is_empty() && !year.trim().is_empty() => {
            Ok((month.trim().to_string(), year.trim().to_string()))
        }
        _ => bail!("Expiry must be written as MM/YY"),
    }
}
