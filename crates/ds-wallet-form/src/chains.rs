/// A network the form offers in its chain selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportedChain {
    pub id: u64,
    pub name: &'static str,
}

/// Sepolia Testnet, preselected on a fresh form.
pub const DEFAULT_CHAIN_ID: u64 = 11_155_111;

pub const SUPPORTED_CHAINS: [SupportedChain; 4] = [
    SupportedChain {
        id: 1,
        name: "Ethereum Mainnet",
    },
    SupportedChain {
        id: 56,
        name: "Binance Smart Chain",
    },
    SupportedChain {
        id: 42_161,
        name: "Arbitrum One",
    },
    SupportedChain {
        id: DEFAULT_CHAIN_ID,
        name: "Sepolia Testnet",
    },
];

pub fn lookup(chain_id: u64) -> Option<SupportedChain> {
    SUPPORTED_CHAINS.iter().copied().find(|c| c.id == chain_id)
}

pub fn is_supported(chain_id: u64) -> bool {
    lookup(chain_id).is_some()
}
