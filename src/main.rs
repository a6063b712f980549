//! `chatscene` 바이너리 진입점.

use std::process;

use anyhow::Result;

use chatscene::interface::cli::{
    AppComposition, Cli, CliAction, read_batch_input, resolve_options, run_batch, run_convert,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let action = Cli::parse_action();
    let composition = AppComposition::default();

    match run(&composition, action).await {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("error: {err:#}");
            process::exit(1);
        }
    }
}

async fn run(composition: &AppComposition, action: CliAction) -> Result<String> {
    match action {
        CliAction::InspectConfig => composition.inspect_config_usecase().execute(),
        CliAction::Convert { message, flags } => {
            let config = composition.config()?;
            let service = composition.prompt_service(&config);
            let options = resolve_options(flags, &config);
            run_convert(&service, composition.reporter(), &message, options).await
        }
        CliAction::Batch { file, flags } => {
            let input = read_batch_input(file.as_deref())?;
            let config = composition.config()?;
            let service = composition.prompt_service(&config);
            let options = resolve_options(flags, &config);
            run_batch(&service, composition.reporter(), &input, options).await
        }
    }
}
