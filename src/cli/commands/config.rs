use crate::config::Config;
use crate::errors::AppResult;

use crate::cli::parser::Commands;
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            print!("{}", serde_yaml::to_string(&cfg).unwrap());
        }

        // ---- CHECK CONFIG ----
        if *check {
            let placeholders = placeholder_fields(cfg);
            if placeholders.is_empty() {
                success("Configuration complete: no placeholder fields left.");
            } else {
                for field in placeholders {
                    warning(format!("Field '{field}' still has its placeholder value."));
                }
            }
        }
    }

    Ok(())
}

/// Fields still carrying the shipped defaults, i.e. an invoice would print
/// "John Doe" and a fake IBAN.
fn placeholder_fields(cfg: &Config) -> Vec<&'static str> {
    let defaults = Config::default();
    let mut out = Vec::new();

    if cfg.payee_name == defaults.payee_name {
        out.push("payee_name");
    }
    if cfg.payee_street == defaults.payee_street {
        out.push("payee_street");
    }
    if cfg.payee_city == defaults.payee_city {
        out.push("payee_city");
    }
    if cfg.payee_country == defaults.payee_country {
        out.push("payee_country");
    }
    if cfg.bank_name == defaults.bank_name {
        out.push("bank_name");
    }
    if cfg.clearing_number == defaults.clearing_number {
        out.push("clearing_number");
    }
    if cfg.account_number == defaults.account_number {
        out.push("account_number");
    }
    if cfg.iban == defaults.iban {
        out.push("iban");
    }
    if cfg.bic == defaults.bic {
        out.push("bic");
    }

    out
}
