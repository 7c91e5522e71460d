use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// User configuration: default hourly rate plus the payee and banking
/// details printed on the invoice. Every field has a fallback, so a missing
/// or partial config file still produces a complete document.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_salary_per_hour")]
    pub salary_per_hour: f64,

    #[serde(default = "default_payee_name")]
    pub payee_name: String,
    #[serde(default = "default_payee_street")]
    pub payee_street: String,
    #[serde(default = "default_payee_city")]
    pub payee_city: String,
    #[serde(default = "default_payee_country")]
    pub payee_country: String,

    #[serde(default = "default_bank_name")]
    pub bank_name: String,
    #[serde(default = "default_clearing_number")]
    pub clearing_number: String,
    #[serde(default = "default_account_number")]
    pub account_number: String,
    #[serde(default = "default_iban")]
    pub iban: String,
    #[serde(default = "default_bic")]
    pub bic: String,
}

fn default_salary_per_hour() -> f64 {
    160.0
}
fn default_payee_name() -> String {
    "John Doe".to_string()
}
fn default_payee_street() -> String {
    "123 Main Street".to_string()
}
fn default_payee_city() -> String {
    "Cityville, 12345".to_string()
}
fn default_payee_country() -> String {
    "Country".to_string()
}
fn default_bank_name() -> String {
    "Bank Name".to_string()
}
fn default_clearing_number() -> String {
    "0000-0".to_string()
}
fn default_account_number() -> String {
    "000 000 000-0".to_string()
}
fn default_iban() -> String {
    "XX00 0000 0000 0000 0000 0000".to_string()
}
fn default_bic() -> String {
    "BANKCODE".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            salary_per_hour: default_salary_per_hour(),
            payee_name: default_payee_name(),
            payee_street: default_payee_street(),
            payee_city: default_payee_city(),
            payee_country: default_payee_country(),
            bank_name: default_bank_name(),
            clearing_number: default_clearing_number(),
            account_number: default_account_number(),
            iban: default_iban(),
            bic: default_bic(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
            appdata.join("ics2invoice")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".ics2invoice")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("ics2invoice.conf")
    }

    /// Load configuration from the default file, or return defaults if not
    /// found.
    pub fn load() -> Self {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from a specific path (the `--config` override).
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            let content = fs::read_to_string(path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize the configuration directory and write a default config
    /// file for the user to edit.
    pub fn init_all() -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        if path.exists() {
            println!("⚙️  Config file already exists: {:?}", path);
            return Ok(());
        }

        let yaml = serde_yaml::to_string(&Config::default())
            .expect("❌ Failed to serialize default configuration");
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;
        println!("✅ Config file: {:?}", path);

        Ok(())
    }
}
