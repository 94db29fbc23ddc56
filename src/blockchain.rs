//! registry of the supported blockchains
//!
//! each chain maps to its registered
//! [SLIP44](https://github.com/satoshilabs/slips/blob/master/slip-0044.md)
//! coin type, the second level of the BIP44 hierarchy. Note that the
//! registry is keyed by chain, not by coin type: Binance Smart Chain
//! reuses the Ethereum coin type.

use std::{fmt, str};

/// a blockchain supported by the wallet key derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "generic-serialization", derive(Serialize, Deserialize))]
pub enum Blockchain {
    Bitcoin,
    Ethereum,
    Solana,
    BinanceSmartChain,
}

impl Blockchain {
    /// the SLIP44 registered coin type of this blockchain
    pub fn coin_type(&self) -> u32 {
        match self {
            &Blockchain::Bitcoin => 0,
            &Blockchain::Ethereum => 60,
            &Blockchain::Solana => 501,
            &Blockchain::BinanceSmartChain => 60,
        }
    }
}

impl fmt::Display for Blockchain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &Blockchain::Bitcoin => write!(f, "bitcoin"),
            &Blockchain::Ethereum => write!(f, "ethereum"),
            &Blockchain::Solana => write!(f, "solana"),
            &Blockchain::BinanceSmartChain => write!(f, "binance-smart-chain"),
        }
    }
}

impl str::FromStr for Blockchain {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bitcoin" => Ok(Blockchain::Bitcoin),
            "ethereum" => Ok(Blockchain::Ethereum),
            "solana" => Ok(Blockchain::Solana),
            "binance-smart-chain" => Ok(Blockchain::BinanceSmartChain),
            _ => Err("Unknown blockchain name"),
        }
    }
}
