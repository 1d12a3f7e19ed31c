use clap::Parser;

#[tokio::main]
async fn main() {
    let args = auction_deployer::arguments::Arguments::parse();
    auction_deployer::start(args).await;
}
