// src/cli/menu.rs
use inquire::{Confirm, CustomType, Password, Select, Text};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::cli::handlers;
use crate::core::meter::PasswordMeter;
use crate::models::PasswordGenerationOptions;

const CHECK: &str = "🔍  Check password";
const GENERATE: &str = "🔐  Generate password";
const HISTORY: &str = "📜  View history";
const CLEAR: &str = "🧹  Clear history";
const EXIT: &str = "❌  Exit";

pub fn run_cli_menu(
    meter: &PasswordMeter,
    defaults: &PasswordGenerationOptions,
    should_exit: Arc<AtomicBool>,
) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║       🔒 PASSWORD STRENGTH METER      ║");
    println!("╚══════════════════════════════════════╝");
    println!("Check your password strength, generate secure passwords, and view history.\n");

    while !should_exit.load(Ordering::SeqCst) {
        let choice = Select::new("Choose action:", vec![CHECK, GENERATE, HISTORY, CLEAR, EXIT]).prompt()?;

        match choice {
            CHECK => {
                let password = Password::new("Enter your password:")
                    .with_display_mode(inquire::PasswordDisplayMode::Masked)
                    .without_confirmation()
                    .prompt()?;
                if password.is_empty() {
                    continue;
                }
                match meter.check_password(&password) {
                    Ok(result) => handlers::print_score(&result),
                    Err(e) => eprintln!("❌ Failed to record password check: {}", e),
                }
            }
            GENERATE => {
                let options = prompt_generation_options(defaults)?;
                if let Err(e) = handlers::handle_generate(meter, &options) {
                    eprintln!("❌ {}", e);
                }
            }
            HISTORY => {
                let show = Confirm::new("Show passwords in plain text?")
                    .with_default(false)
                    .prompt()?;
                handlers::print_history(&meter.get_history(), show);
            }
            CLEAR => {
                let confirmed = Confirm::new("Delete the whole password history?")
                    .with_default(false)
                    .prompt()?;
                if confirmed {
                    if let Err(e) = handlers::handle_clear_history(meter) {
                        eprintln!("❌ {:#}", e);
                    }
                }
            }
            _ => break,
        }

        // Wait for user to press enter
        let _ = Text::new("Press enter to continue...").prompt();
    }

    Ok(())
}

fn prompt_generation_options(defaults: &PasswordGenerationOptions) -> anyhow::Result<PasswordGenerationOptions> {
    let length = CustomType::<usize>::new("Password length (8-32):")
        .with_default(defaults.length)
        .with_error_message("Please enter a number")
        .with_validator(|value: &usize| {
            if (PasswordGenerationOptions::MIN_LENGTH..=PasswordGenerationOptions::MAX_LENGTH).contains(value) {
                Ok(inquire::validator::Validation::Valid)
            } else {
                Ok(inquire::validator::Validation::Invalid("Length must be between 8 and 32".into()))
            }
        })
        .prompt()?;

    let include_uppercase = Confirm::new("Include uppercase letters (A-Z)?")
        .with_default(defaults.include_uppercase)
        .prompt()?;

    let include_lowercase = Confirm::new("Include lowercase letters (a-z)?")
        .with_default(defaults.include_lowercase)
        .prompt()?;

    let include_numbers = Confirm::new("Include digits (0-9)?")
        .with_default(defaults.include_numbers)
        .prompt()?;

    let include_symbols = Confirm::new("Include special characters (!@#$%^&*)?")
        .with_default(defaults.include_symbols)
        .prompt()?;

    Ok(PasswordGenerationOptions {
        length,
        include_uppercase,
        include_lowercase,
        include_numbers,
        include_symbols,
    })
}
