use clap::Parser;
use page_context::domain::ports::{DeviceDetector, LayoutRepository};
use page_context::utils::{logger, validation::Validate};
use page_context::{
    CliArgs, ClientHintDetector, Layout, LayoutId, MobileLayoutResolver, PageContextConfig,
    RequestCookies, StaticDeviceSignal,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    // 載入配置
    let config = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            match PageContextConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ {}", e.user_friendly_message());
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
            }
        }
        None => PageContextConfig::default(),
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    tracing::debug!(
        active_modules = config.modules.active.len(),
        layouts = config.layouts.len(),
        cookie = config.cookie_name(),
        "Configuration loaded"
    );

    let mut page = args.page()?;
    let request = args.request_context();
    let repository = config.layout_repository();

    let default_id = page.layout.unwrap_or(LayoutId(0));
    let mut layout = repository
        .find_layout(default_id)
        .unwrap_or_else(|| Layout::new(default_id, ""));

    let detector: Box<dyn DeviceDetector> = match args.mobile {
        Some(mobile) => Box::new(StaticDeviceSignal(mobile)),
        None => Box::new(ClientHintDetector),
    };
    let resolver = MobileLayoutResolver::from_config(&config, detector, RequestCookies, repository);

    match resolver.resolve(&mut page, &mut layout, &request) {
        Ok(resolution) => {
            let output = serde_json::json!({
                "resolution": resolution,
                "is_mobile": page.is_mobile,
                "layout": layout,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Layout resolution failed: {} ({:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
