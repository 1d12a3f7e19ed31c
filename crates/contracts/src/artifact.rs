//! Compiled contract artifacts as emitted by Remix
//! (`data.bytecode.object`) or Hardhat/Foundry (`bytecode`).

use {
    alloy::{
        dyn_abi::{DynSolValue, JsonAbiExt},
        json_abi::JsonAbi,
        primitives::Bytes,
    },
    anyhow::{Context, Result, ensure},
    serde::Deserialize,
    std::path::Path,
};

#[derive(Debug, Clone)]
pub struct ContractArtifact {
    pub abi: JsonAbi,
    /// Creation bytecode, without constructor arguments.
    pub bytecode: Bytes,
}

#[derive(Deserialize)]
struct RawArtifact {
    abi: JsonAbi,
    #[serde(default)]
    bytecode: Option<RawBytecode>,
    #[serde(default)]
    data: Option<RemixData>,
}

#[derive(Deserialize)]
struct RemixData {
    bytecode: RawBytecode,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBytecode {
    Hex(String),
    Object { object: String },
}

impl RawBytecode {
    fn hex(&self) -> &str {
        match self {
            Self::Hex(hex) => hex,
            Self::Object { object } => object,
        }
    }
}

impl ContractArtifact {
    /// Reads `<dir>/<contract_name>.json`.
    pub async fn load(dir: &Path, contract_name: &str) -> Result<Self> {
        let path = dir.join(format!("{contract_name}.json"));
        let data = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("failed to read artifact {path:?}"))?;
        let artifact =
            Self::from_json(&data).with_context(|| format!("invalid artifact {path:?}"))?;
        tracing::debug!(?path, code_size = artifact.bytecode.len(), "loaded artifact");
        Ok(artifact)
    }

    pub fn from_json(data: &str) -> Result<Self> {
        let raw: RawArtifact = serde_json::from_str(data)?;
        let bytecode = raw
            .data
            .map(|data| data.bytecode)
            .or(raw.bytecode)
            .context("artifact contains no bytecode")?;
        let bytecode: Bytes = bytecode
            .hex()
            .parse()
            .context("bytecode is not valid hex, are there unlinked libraries?")?;
        ensure!(!bytecode.is_empty(), "artifact bytecode is empty");

        Ok(Self {
            abi: raw.abi,
            bytecode,
        })
    }

    /// Returns the creation bytecode followed by the ABI-encoded constructor
    /// arguments. Argument types are checked against the constructor ABI.
    pub fn deployment_code(&self, args: &[DynSolValue]) -> Result<Bytes> {
        let encoded_args = match &self.abi.constructor {
            Some(constructor) => constructor
                .abi_encode_input(args)
                .context("constructor arguments do not match the contract ABI")?,
            None => {
                ensure!(
                    args.is_empty(),
                    "contract has no constructor but {} arguments were given",
                    args.len()
                );
                Vec::new()
            }
        };

        let mut code = self.bytecode.to_vec();
        code.extend_from_slice(&encoded_args);
        Ok(code.into())
    }
}
