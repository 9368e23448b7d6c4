// src/cli/handlers.rs
use anyhow::Context;
use console::style;
use inquire::Confirm;

use crate::cli::CliCommand;
use crate::core::meter::PasswordMeter;
use crate::models::{PasswordCheckRecord, PasswordGenerationOptions, ScoreResult, Strength, TIMESTAMP_FORMAT};
use crate::strength;

// Handlers for one-shot CLI commands
pub fn run_command(
    meter: &PasswordMeter,
    command: CliCommand,
    defaults: &PasswordGenerationOptions,
) -> anyhow::Result<()> {
    match command {
        CliCommand::Check { password } => {
            let result = meter
                .check_password(&password)
                .context("Failed to record password check")?;
            print_score(&result);
        }
        CliCommand::Generate { length, no_upper, no_lower, no_digits, no_special } => {
            let options = PasswordGenerationOptions {
                length: length.map(usize::from).unwrap_or(defaults.length),
                include_uppercase: !no_upper,
                include_lowercase: !no_lower,
                include_numbers: !no_digits,
                include_symbols: !no_special,
            };
            handle_generate(meter, &options)?;
        }
        CliCommand::History { show_passwords } => {
            print_history(&meter.get_history(), show_passwords);
        }
        CliCommand::ClearHistory { yes } => {
            let confirmed = yes
                || Confirm::new("Delete the whole password history?")
                    .with_default(false)
                    .prompt()?;
            if confirmed {
                handle_clear_history(meter)?;
            }
        }
    }
    Ok(())
}

pub fn handle_generate(meter: &PasswordMeter, options: &PasswordGenerationOptions) -> anyhow::Result<String> {
    let password = meter.generate_password(options)?;
    let result = strength::score(&password);

    println!("\nGenerated Password: {}", style(&password).bold());
    if result.score == 5 {
        println!("{}", style("✅ This password is STRONG (5/5). You're good to go!").green());
    } else {
        println!("Strength: {} ({}/5)", styled_label(result.strength()), result.score);
    }
    Ok(password)
}

pub fn handle_clear_history(meter: &PasswordMeter) -> anyhow::Result<()> {
    meter.clear_history().context("Failed to clear password history")?;
    println!("{}", style("Password history cleared!").green());
    Ok(())
}

pub fn print_score(result: &ScoreResult) {
    if result.is_blacklisted {
        println!("{}", style(format!("❌ {}", result.summary())).red().bold());
        return;
    }

    let filled = (result.progress() * 20.0).round() as usize;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(20 - filled));
    let strength = result.strength();

    println!("Password Strength: {}", styled_bar(&bar, strength));
    println!("{} (Score: {}/5)", styled_label(strength), result.score);
    println!("{}", result.summary());

    if result.score < 5 && !result.feedback.is_empty() {
        println!("\n💡 Improvement Suggestions");
        for tip in &result.feedback {
            println!("  - {}", tip);
        }
    }
}

pub fn print_history(records: &[PasswordCheckRecord], show_passwords: bool) {
    let rows = format_history(records, show_passwords);
    if rows.is_empty() {
        println!("No password history yet.");
        return;
    }
    println!("{:<19}  {:<8}  {}", "timestamp", "strength", "password");
    for row in rows {
        println!("{}", row);
    }
}

/// History rows, newest first. Passwords are masked unless asked otherwise.
pub fn format_history(records: &[PasswordCheckRecord], show_passwords: bool) -> Vec<String> {
    records
        .iter()
        .rev()
        .map(|record| {
            let shown = if show_passwords { record.clone() } else { record.masked() };
            format!(
                "{}  {:<8}  {}",
                shown.timestamp.format(TIMESTAMP_FORMAT),
                shown.strength.as_str(),
                shown.password
            )
        })
        .collect()
}

fn styled_label(strength: Strength) -> console::StyledObject<&'static str> {
    let label = style(strength.as_str()).bold();
    match strength {
        Strength::Weak => label.red(),
        Strength::Moderate => label.yellow(),
        Strength::Strong => label.green(),
    }
}

fn styled_bar(bar: &str, strength: Strength) -> console::StyledObject<&str> {
    match strength {
        Strength::Weak => style(bar).red(),
        Strength::Moderate => style(bar).yellow(),
        Strength::Strong => style(bar).green(),
    }
}
