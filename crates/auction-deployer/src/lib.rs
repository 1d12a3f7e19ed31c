pub mod arguments;
pub mod config;
pub mod onchain;
pub mod orchestrator;
pub mod traits;

use crate::{config::Plan, onchain::OnchainDeployer};

pub async fn start(args: arguments::Arguments) {
    observe::tracing::initialize(&args.logging.observe_config());
    observe::panic_hook::install();
    tracing::info!("running auction deployer with validated arguments:\n{}", args);

    let plan = match &args.config {
        Some(path) => match config::load(path).await {
            Ok(plan) => plan,
            Err(err) => {
                tracing::error!(%err, "invalid deployment plan");
                std::process::exit(1);
            }
        },
        None => Plan::default(),
    };
    tracing::debug!(?plan, "deployment plan");

    let provider = ethrpc::provider_with_signer(args.node_url, args.private_key);
    let deployer = OnchainDeployer::new(provider, args.artifacts_dir, args.confirmations.get());
    orchestrator::deploy_and_report(&deployer, &plan, &mut std::io::stdout()).await;
}
