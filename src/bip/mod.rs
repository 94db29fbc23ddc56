//! BIP (Bitcoin Improvement Proposal) related modules
//!
//! * BIP39: mnemonic phrases for entropy backup and seed derivation;
//! * BIP44: multi account hierarchy for deterministic wallets.

pub mod bip39;
pub mod bip44;
