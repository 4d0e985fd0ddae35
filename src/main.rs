use clap::Parser;
use researchmap2md::utils::{logger, validation::Validate};
use researchmap2md::{CliConfig, ConvertError, Converter, MarkdownOutput, RenderConfig, TracingReporter};

fn run(config: &CliConfig) -> Result<(), ConvertError> {
    config.validate()?;
    let render_config = RenderConfig::from_env()?;
    tracing::debug!("Render config: {:?}", render_config);

    let reporter = TracingReporter;
    let markdown = Converter::new(render_config, &reporter).convert(&config.input_file)?;

    MarkdownOutput::new(config.output_file.clone()).write(&markdown)?;
    if let Some(path) = &config.output_file {
        tracing::info!("📁 Output saved to: {}", path.display());
    }
    Ok(())
}

fn main() {
    let config = CliConfig::parse();

    // 初期化
    logger::init_cli_logger();
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!("❌ Conversion failed: {} (Category: {:?})", e, e.category());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}
