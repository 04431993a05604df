use clap::Parser;
use std::process;
use vocab_extract::{
    Cli, OutputFormatter, OutputMode, UserFriendlyError, VocabError, VocabExtract,
};

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    let cli = Cli::parse();
    setup_logging(&cli);

    // Handle special commands first
    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    let app = match VocabExtract::from_cli(&cli) {
        Ok(app) => app,
        Err(e) => {
            print_startup_error(&e);
            return exit_code_for(&e);
        }
    };

    if cli.dry_run {
        return handle_dry_run(&app);
    }

    match app.extract_vocabulary() {
        Ok(report) => {
            app.output_formatter().print_extraction_report(&report);
            0
        }
        Err(e) => {
            app.handle_error(&e);
            exit_code_for(&e)
        }
    }
}

fn exit_code_for(error: &VocabError) -> i32 {
    match error {
        VocabError::Config { .. } => 2,
        VocabError::WorkbookNotFound { .. } => 3,
        VocabError::Workbook { .. } => 4,
        VocabError::OutputWrite { .. } => 5,
        _ => 1,
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "vocab-extract.toml".to_string());

    match VocabExtract::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  vocab-extract --config {}", config_path);
            println!("\nEdit the [[sheets]] entries to match your workbook layout.");
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn handle_dry_run(app: &VocabExtract) -> i32 {
    let formatter = app.output_formatter();
    let config = app.config();

    formatter.info("DRY RUN MODE - No output will be written");
    formatter.print_separator();

    println!("  Workbook: {}", config.input.workbook.display());
    println!("  Output:   {}", config.output.path.display());
    println!("  Pretty:   {}", config.output.pretty);
    println!("  Skipped heading rows: {}", config.input.skip_rows);

    let sheets = match app.inspect_workbook() {
        Ok(sheets) => sheets,
        Err(e) => {
            formatter.print_user_friendly_error(&e);
            return exit_code_for(&e);
        }
    };

    formatter.print_separator();
    formatter.info("Extraction plan:");
    for (group, present) in &sheets {
        let status = if *present { "found" } else { "missing" };
        println!(
            "  [{}] {} -> {} / {}",
            status,
            group.sheet,
            group.level,
            group.level.category()
        );
    }

    let missing = sheets.iter().filter(|(_, present)| !present).count();
    if missing > 0 {
        formatter.warning(&format!(
            "{} configured sheet(s) missing; they would contribute no words",
            missing
        ));
    }

    formatter.print_separator();
    formatter.success("Dry run completed successfully");
    0
}

fn print_startup_error(error: &VocabError) {
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}

fn setup_logging(cli: &Cli) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .format_timestamp(None)
        .init();
}
