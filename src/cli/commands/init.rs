use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::ActivityKind;
use crate::store::CsvWorkbook;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the workbook directory with one sheet per activity kind
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1️⃣ PREPARE CONFIGURATION
    //
    let wb_path = Config::init_all(cli.workbook.clone(), cli.test)?;

    println!("⚙️  Initializing promptbank…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Workbook   : {}", wb_path.display());

    //
    // 2️⃣ CREATE SHEETS (existing sheets are kept as they are)
    //
    let sheets: Vec<(&str, [&str; 5])> = ActivityKind::ALL
        .iter()
        .map(|k| (k.sheet_name(), k.header()))
        .collect();
    CsvWorkbook::create(&wb_path, &sheets)?;

    for kind in ActivityKind::ALL {
        println!("✅ Sheet '{}' ready ({})", kind.sheet_name(), kind.label());
    }

    println!("🎉 promptbank initialization completed!");
    Ok(())
}
