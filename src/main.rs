use artist_select::{cli, config, pipeline, report};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("エラー: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> artist_select::error::Result<()> {
    match cli.command {
        Commands::Run { overrides, dry_run, report: report_path } => {
            println!("🎨 artist-select - 画家フォルダ選別\n");

            let mut config = Config::load(cli.config.as_deref())?;
            overrides.apply(&mut config)?;
            let run_config = config.into_run_config(dry_run)?;

            let summary = pipeline::run(&run_config)?;
            report::print_summary(&summary);

            if let Some(path) = report_path {
                report::save_json(&summary, &path)?;
                println!("✔ 結果を保存: {}", path.display());
            }
        }

        Commands::Targets { overrides } => {
            let mut config = Config::load(cli.config.as_deref())?;
            overrides.apply(&mut config)?;
            println!("対象画家 ({}件):", config.targets.len());
            for name in &config.targets {
                println!("  - {}", name);
            }
        }

        Commands::Config { show, init } => {
            if init {
                let path = match &cli.config {
                    Some(path) => path.clone(),
                    None => Config::config_path()?,
                };
                Config::default().save(&path)?;
                println!("✔ 設定ファイルを作成しました: {}", path.display());
            }

            if show || !init {
                let config = Config::load(cli.config.as_deref())?;
                println!("設定:");
                println!("  カタログ: {}", config.catalogue_path.display());
                println!("  画像フォルダ: {}", config.source_dir.display());
                println!("  出力先: {}", config.output_dir.display());
                println!("  対象画家: {}件", config.targets.len());
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
