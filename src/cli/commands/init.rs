use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with default payee and banking data
pub fn handle() -> AppResult<()> {
    println!("⚙️  Initializing ics2invoice…");

    Config::init_all()?;

    println!("🎉 ics2invoice initialization completed!");
    println!("   Edit {:?} to set your payee and banking data.", Config::config_file());
    Ok(())
}
