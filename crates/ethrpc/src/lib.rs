mod instrumentation;

use {
    alloy::{
        network::{EthereumWallet, TxSigner},
        primitives::Signature,
        providers::{DynProvider, Provider, ProviderBuilder, WalletProvider},
        rpc::client::ClientBuilder,
    },
    instrumentation::InstrumentationLayer,
    url::Url,
};

pub type AlloyProvider = DynProvider;

/// Creates a provider that signs and sends transactions from `signer`.
///
/// The provider fills in nonce, gas and chain id for every transaction.
pub fn provider_with_signer<S>(url: Url, signer: S) -> AlloyProvider
where
    S: TxSigner<Signature> + Send + Sync + 'static,
{
    signing_provider(url, signer).erased()
}

fn signing_provider<S>(url: Url, signer: S) -> impl Provider + WalletProvider + 'static
where
    S: TxSigner<Signature> + Send + Sync + 'static,
{
    let rpc = ClientBuilder::default()
        .layer(InstrumentationLayer)
        .http(url);
    let wallet = EthereumWallet::new(signer);

    ProviderBuilder::new().wallet(wallet).connect_client(rpc)
}
