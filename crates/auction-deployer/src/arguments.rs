use {
    alloy::signers::local::PrivateKeySigner,
    std::{
        fmt::{self, Display, Formatter},
        num::NonZeroU64,
        path::PathBuf,
    },
    url::Url,
};

#[derive(clap::Parser)]
pub struct LoggingArguments {
    #[clap(
        long,
        env,
        default_value = "warn,auction_deployer=debug,contracts=debug,ethrpc=debug"
    )]
    pub log_filter: String,

    /// Output log events as JSON.
    #[clap(long, env, action = clap::ArgAction::Set, default_value = "false")]
    pub use_json_logs: bool,
}

impl LoggingArguments {
    pub fn observe_config(&self) -> observe::Config {
        observe::Config::new(&self.log_filter, self.use_json_logs)
    }
}

impl Display for LoggingArguments {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self {
            log_filter,
            use_json_logs,
        } = self;

        writeln!(f, "log_filter: {log_filter}")?;
        writeln!(f, "use_json_logs: {use_json_logs}")?;
        Ok(())
    }
}

#[derive(clap::Parser)]
pub struct Arguments {
    #[clap(flatten)]
    pub logging: LoggingArguments,

    /// The Ethereum node URL to connect to.
    #[clap(long, env, default_value = "http://localhost:8545")]
    pub node_url: Url,

    /// Hex encoded private key of the account that deploys the contract and
    /// starts the auction.
    #[clap(long, env, hide_env_values = true)]
    pub private_key: PrivateKeySigner,

    /// Directory containing the compiled `<ContractName>.json` artifacts.
    #[clap(long, env, default_value = "artifacts")]
    pub artifacts_dir: PathBuf,

    /// Number of confirmations to wait for on every transaction.
    #[clap(long, env, default_value = "1")]
    pub confirmations: NonZeroU64,

    /// TOML file overriding the built-in deployment plan.
    #[clap(long, env)]
    pub config: Option<PathBuf>,
}

impl Display for Arguments {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self {
            logging,
            node_url,
            private_key,
            artifacts_dir,
            confirmations,
            config,
        } = self;

        write!(f, "{logging}")?;
        writeln!(f, "node_url: {node_url}")?;
        writeln!(f, "private_key: SECRET (address {})", private_key.address())?;
        writeln!(f, "artifacts_dir: {artifacts_dir:?}")?;
        writeln!(f, "confirmations: {confirmations}")?;
        writeln!(f, "config: {config:?}")?;
        Ok(())
    }
}
