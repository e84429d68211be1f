use std::{env, fs, path::Path, process::ExitCode};
use util::config::AppConfig;

mod runner;

#[tokio::main]
async fn main() -> ExitCode {
    let config = AppConfig::global().clone();
    let db_path = config.database_path.clone();
    let url = config.database_url();
    let args: Vec<String> = env::args().collect();

    let result = match args.get(1).map(|s| s.as_str()) {
        Some("clean") => {
            remove_db_file(&db_path);
            Ok(())
        }
        Some("fresh") => {
            remove_db_file(&db_path);
            create_db_dir(&config);
            runner::run_all_migrations(&url).await
        }
        _ => {
            create_db_dir(&config);
            runner::run_all_migrations(&url).await
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Migration failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn remove_db_file(path: &str) {
    let db_path = Path::new(path);
    if !db_path.exists() {
        println!("DB file does not exist: {}", db_path.display());
        return;
    }
    match fs::remove_file(db_path) {
        Ok(()) => println!("Deleted DB: {}", db_path.display()),
        Err(err) => eprintln!("Failed to delete {}: {err}", db_path.display()),
    }
}

fn create_db_dir(config: &AppConfig) {
    if let Err(err) = config.ensure_database_dir() {
        eprintln!("Failed to create DB directory for {}: {err}", config.database_path);
    }
}
