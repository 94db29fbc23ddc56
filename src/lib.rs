//! Wallet key core library
//!
//! This library implements the key material side of a deterministic
//! wallet:
//!
//! * [BIP39](https://github.com/bitcoin/bips/blob/master/bip-0039.mediawiki)
//!   mnemonic phrases: entropy generation, phrase validation and seed
//!   stretching (see the [`bip::bip39`](./bip/bip39/index.html) module);
//! * [BIP32](https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki)
//!   hierarchical deterministic derivation over the secp256k1 curve
//!   (see the [`hdwallet`](./hdwallet/index.html) module);
//! * [BIP44](https://github.com/bitcoin/bips/blob/master/bip-0044.mediawiki)
//!   multi account addressing on top of it (see the
//!   [`bip::bip44`](./bip/bip44/index.html) module).
//!
//! # Example
//!
//! ```
//! use chaindom::bip::bip39::{dictionary, MnemonicString};
//! use chaindom::hdwallet::Wallet;
//!
//! let phrase = "mercy shock future conduct text sure police veteran orient bus truck prison";
//! let mnemonics = MnemonicString::new(&dictionary::ENGLISH, phrase.to_string())
//!     .expect("the phrase is only made of english words");
//!
//! let wallet = Wallet::from_bip39_mnemonics(&mnemonics, b"").unwrap();
//! let key = wallet.derive("m/44'/60'/0'/0/0").unwrap();
//! println!("{}", key.public_key);
//! ```
#![cfg_attr(feature = "with-bench", feature(test))]

#[cfg(feature = "generic-serialization")]
#[macro_use]
extern crate serde_derive;
#[cfg(feature = "generic-serialization")]
extern crate serde;

extern crate cryptoxide;
extern crate secp256k1;

#[cfg(test)]
extern crate rand;
#[cfg(test)]
#[macro_use]
extern crate quickcheck;
#[cfg(test)]
#[cfg(feature = "with-bench")]
extern crate test;

pub mod util;

mod scalar;

pub mod bip;
pub mod blockchain;
pub mod hdwallet;
