use clap::Parser;
use voucher_service::core::ConfigProvider;
use voucher_service::utils::logger::{self, LogFormat};
use voucher_service::{CliConfig, Command, JsonFileVoucherRepository, VoucherError, VoucherService};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(cli.verbose, format);

    if let Err(e) = run(&cli).await {
        tracing::error!("voucher command failed: {} (kind: {})", e, e.kind().as_str());
        match serde_json::to_string(&e.to_body()) {
            Ok(body) => eprintln!("{}", body),
            Err(_) => eprintln!("{}", e.user_friendly_message()),
        }
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: &CliConfig) -> Result<(), VoucherError> {
    let config = cli.resolve()?;
    tracing::debug!("Resolved config: {:?}", config);

    let repository = JsonFileVoucherRepository::new(config.store_path());
    let service = VoucherService::with_min_amount(repository, config.min_amount());

    let output = match &cli.command {
        Command::Create { code, discount } => {
            service.create_voucher(code, *discount).await?;
            serde_json::json!({ "code": code, "discount": discount })
        }
        Command::Apply { code, amount } => {
            let outcome = service.apply_voucher(code, *amount).await?;
            serde_json::to_value(outcome)?
        }
        Command::Show { code } => {
            let voucher = service.get_voucher(code).await?;
            serde_json::to_value(voucher)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
