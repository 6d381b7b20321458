use std::process::ExitCode;

use apiconfig::{ApiBaseUrl, Environment, ProcessEnvironment};
use config::{SecretSources, Settings};
use files::FileReaderImpl;
use report::Report;

mod args;
mod config;
mod files;
mod report;

fn main() -> ExitCode {
    init_tracing();
    let cli_args: Vec<String> = std::env::args().skip(1).collect();
    let project_secrets = match args::parse_args(&cli_args) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    let environment = ProcessEnvironment;
    let api_base_url = init_api_base_url(&environment);

    let paths = config::secrets_paths(project_secrets, &environment);
    let files = config::load_secrets_files(&paths, &FileReaderImpl);
    let sources = SecretSources::new(files, &environment);
    let settings = Settings::resolve(api_base_url.clone(), &sources);
    tracing::debug!(?settings, "settings resolved");
    settings.warn_on_missing_api_key();

    let report = Report::new(&settings, sources.files());
    match report.to_json() {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize report");
            ExitCode::FAILURE
        }
    }
}

/// Sets the process-wide base url from `env` and returns it
fn init_api_base_url(env: &dyn Environment) -> &'static ApiBaseUrl {
    // Nothing reads the slot before this; a rejected initialize leaves the earlier value in place
    let _ = apiconfig::initialize(env);
    apiconfig::api_base_url()
}

fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
