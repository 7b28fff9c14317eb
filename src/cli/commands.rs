use crate::cli::args::Args;
use crate::cli::output::{ConsoleWriter, OutputWriter};
use crate::core::generator::GameGenerator;
use crate::domain::config::{RunRequest, SenaGenConfig};
use crate::domain::error::SenaGenResult;
use crate::infrastructure::config::ConfigManager;
use crate::infrastructure::logging::init_logging;
use crate::infrastructure::storage::GameStore;

/// Execute the generation run described by the command line
pub fn execute(args: Args) -> SenaGenResult<()> {
    let writer = ConsoleWriter::new(args.format.clone());

    // Load configuration using ConfigManager
    let config_manager = ConfigManager::new()?;
    let config = if let Some(config_path) = &args.config {
        config_manager.load_from_path(config_path.as_ref())?
    } else {
        config_manager.load()?
    };
    config.validate()?;

    // Initialize logging
    if !args.quiet {
        init_logging(&config.global.log_level, args.verbose)?;
    }

    let request = resolve_request(&args, &config);
    tracing::info!(
        "Generating {} game(s) of size {} into '{}'",
        request.quantity,
        request.size,
        request.filename
    );

    let mut generator = GameGenerator::new(config.draw.pool.clone());
    let games = generator.generate(request.quantity, request.size)?;

    let store = match &config.output.directory {
        Some(dir) => GameStore::with_directory(dir.clone()),
        None => GameStore::new()?,
    };
    store.save(&games, &request.filename)?;

    if args.print {
        writer.write_games(&games)?;
    }

    writer.write_message(&format!("File {} saved successfully", request.filename))?;
    Ok(())
}

/// Resolve the settings for one run: flags win over file
/// configuration, which wins over built-in defaults
pub fn resolve_request(args: &Args, config: &SenaGenConfig) -> RunRequest {
    RunRequest {
        quantity: args.quantity.unwrap_or(config.draw.quantity),
        size: args.size.unwrap_or(config.draw.size),
        filename: args
            .output
            .clone()
            .unwrap_or_else(|| config.output.default_filename()),
    }
}
