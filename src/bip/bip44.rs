//! BIP44 addressing
//!
//! provides a way to create derivation paths along the multi account
//! hierarchy described by BIP44:
//!
//! ```text
//! m / purpose' / coin_type' / account' / change / address_index
//! ```
//!
//! The purpose is fixed to `44'`, the coin type comes from the
//! [SLIP44 registry](https://github.com/satoshilabs/slips/blob/master/slip-0044.md)
//! (see also the [`blockchain`](../../blockchain/index.html) module)
//! and the three remaining levels are held by an [`Addressing`]
//! object.

use blockchain::Blockchain;
use hdwallet::{DerivationIndex, Path};
use std::{error, fmt, result};

#[cfg(feature = "generic-serialization")]
use serde;

/// the BIP44 purpose, i.e. `44'`
pub const BIP44_PURPOSE: DerivationIndex = 0x8000002C;

/// the soft derivation upper bound, the indices above carry the
/// hardened bit
pub const BIP44_SOFT_UPPER_BOUND: DerivationIndex = 0x80000000;

/// Error relating to `bip44`'s `Addressing` operations
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// this means the derivation path does not have the expected 5
    /// levels, the parameter carries the received length
    InvalidLength(usize),

    /// this means the first level of the derivation path is not the
    /// BIP44 purpose `44'`
    InvalidPurpose(DerivationIndex),

    /// the coin type is above the soft upper bound or, when read from
    /// a path, is missing the hardened bit
    CoinTypeOutOfBound(u32),

    /// the account is above the soft upper bound or, when read from a
    /// path, is missing the hardened bit
    AccountOutOfBound(u32),

    /// the change is not a soft derivation index
    ChangeOutOfBound(u32),

    /// the address index is not a soft derivation index
    IndexOutOfBound(u32),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &Error::InvalidLength(len) => write!(
                f,
                "Invalid length, expected a derivation path of 5 indices, but received {}",
                len
            ),
            &Error::InvalidPurpose(purpose) => write!(
                f,
                "Invalid purpose, expected 0x{:08x} but received 0x{:08x}",
                BIP44_PURPOSE, purpose
            ),
            &Error::CoinTypeOutOfBound(val) => write!(f, "Coin Type out of bound: 0x{:08x}", val),
            &Error::AccountOutOfBound(val) => write!(f, "Account out of bound: 0x{:08x}", val),
            &Error::ChangeOutOfBound(val) => write!(f, "Change out of bound: 0x{:08x}", val),
            &Error::IndexOutOfBound(val) => write!(f, "Index out of bound: 0x{:08x}", val),
        }
    }
}
impl error::Error for Error {}

pub type Result<T> = result::Result<T, Error>;

/// the SLIP44 coin type, in soft form. The hardened bit is applied
/// when the derivation path is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CoinType(u32);
impl CoinType {
    /// create a `CoinType` from the given coin type number.
    ///
    /// # Error
    ///
    /// `CoinTypeOutOfBound` if the value has the hardened bit set.
    pub fn new(c: u32) -> Result<Self> {
        if c >= BIP44_SOFT_UPPER_BOUND {
            return Err(Error::CoinTypeOutOfBound(c));
        }
        Ok(CoinType(c))
    }

    pub fn get_coin_type_value(&self) -> u32 {
        self.0
    }

    pub fn get_scheme_value(&self) -> u32 {
        self.0 | BIP44_SOFT_UPPER_BOUND
    }
}
impl From<Blockchain> for CoinType {
    fn from(blockchain: Blockchain) -> Self {
        // the registered coin types are all well below the bound
        CoinType(blockchain.coin_type())
    }
}
impl fmt::Display for CoinType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// the BIP44 account, in soft form. The hardened bit is applied when
/// the derivation path is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Account(u32);
impl Account {
    pub fn new(account: u32) -> Result<Self> {
        if account >= BIP44_SOFT_UPPER_BOUND {
            return Err(Error::AccountOutOfBound(account));
        }
        Ok(Account(account))
    }

    pub fn get_account_number(&self) -> u32 {
        self.0
    }

    pub fn get_scheme_value(&self) -> u32 {
        self.0 | BIP44_SOFT_UPPER_BOUND
    }
}
impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "generic-serialization")]
impl serde::Serialize for Account {
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u32(self.0)
    }
}
#[cfg(feature = "generic-serialization")]
impl<'de> serde::Deserialize<'de> for Account {
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct AccountVisitor;
        impl<'de> serde::de::Visitor<'de> for AccountVisitor {
            type Value = Account;
            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a BIP44 account number")
            }
            fn visit_u32<E>(self, v: u32) -> result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                match Account::new(v) {
                    Err(err) => Err(E::custom(format!("{}", err))),
                    Ok(account) => Ok(account),
                }
            }
            fn visit_u64<E>(self, v: u64) -> result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                if v > 0xffffffff {
                    return Err(E::custom(format!("account number too large: {}", v)));
                }
                self.visit_u32(v as u32)
            }
        }
        deserializer.deserialize_u32(AccountVisitor)
    }
}

/// the address index within an account and a change level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index(u32);
impl Index {
    pub fn new(index: u32) -> Result<Self> {
        if index >= BIP44_SOFT_UPPER_BOUND {
            return Err(Error::IndexOutOfBound(index));
        }
        Ok(Index(index))
    }

    pub fn get_index(&self) -> u32 {
        self.0
    }

    /// the index incremented by the given offset
    ///
    /// # Error
    ///
    /// `IndexOutOfBound` if the result overflows the soft index
    /// space.
    pub fn incr(&self, i: u32) -> Result<Self> {
        match self.0.checked_add(i) {
            Some(index) => Index::new(index),
            None => Err(Error::IndexOutOfBound(::std::u32::MAX)),
        }
    }
}
impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "generic-serialization")]
impl serde::Serialize for Index {
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u32(self.0)
    }
}
#[cfg(feature = "generic-serialization")]
impl<'de> serde::Deserialize<'de> for Index {
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct IndexVisitor;
        impl<'de> serde::de::Visitor<'de> for IndexVisitor {
            type Value = Index;
            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a BIP44 address index")
            }
            fn visit_u32<E>(self, v: u32) -> result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                match Index::new(v) {
                    Err(err) => Err(E::custom(format!("{}", err))),
                    Ok(index) => Ok(index),
                }
            }
            fn visit_u64<E>(self, v: u64) -> result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                if v > 0xffffffff {
                    return Err(E::custom(format!("address index too large: {}", v)));
                }
                self.visit_u32(v as u32)
            }
        }
        deserializer.deserialize_u32(IndexVisitor)
    }
}

/// the change chain within an account, external for receive
/// addresses, internal for change addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "generic-serialization", derive(Serialize, Deserialize))]
pub enum AddrType {
    Internal,
    External,
}

/// full address based on the BIP44 hierarchy below the purpose and
/// coin type levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Addressing {
    pub coin_type: CoinType,
    pub account: Account,
    pub change: u32,
    pub index: Index,
}
impl Addressing {
    /// create a new `Addressing` for the given coin type and account,
    /// starting at address index 0
    ///
    /// # Example
    ///
    /// ```
    /// use chaindom::bip::bip44::{Addressing, AddrType};
    ///
    /// let addr = Addressing::new(60, 0, AddrType::External).unwrap();
    ///
    /// assert!(addr.index.incr(32).is_ok());
    /// ```
    pub fn new(coin_type: u32, account: u32, typ: AddrType) -> Result<Self> {
        let change = match typ {
            AddrType::Internal => 1,
            AddrType::External => 0,
        };
        Ok(Addressing {
            coin_type: CoinType::new(coin_type)?,
            account: Account::new(account)?,
            change: change,
            index: Index::new(0)?,
        })
    }

    /// same as `new` with the coin type taken from the given
    /// [`Blockchain`](../../blockchain/enum.Blockchain.html)
    pub fn for_blockchain(blockchain: Blockchain, account: u32, typ: AddrType) -> Result<Self> {
        Addressing::new(blockchain.coin_type(), account, typ)
    }

    /// the full 5 level derivation path of this `Addressing`, with
    /// the purpose, coin type and account levels hardened
    pub fn to_path(&self) -> Path {
        Path::new(vec![
            BIP44_PURPOSE,
            self.coin_type.get_scheme_value(),
            self.account.get_scheme_value(),
            self.change,
            self.index.get_index(),
        ])
    }

    /// read an `Addressing` back from a 5 level derivation path
    ///
    /// # Error
    ///
    /// This function may fail if the path does not have exactly 5
    /// levels, if the purpose is not `44'` or if the hardening of the
    /// levels does not follow the BIP44 scheme.
    pub fn from_path(path: &Path) -> Result<Self> {
        let p = path.as_ref();
        if p.len() != 5 {
            return Err(Error::InvalidLength(p.len()));
        }
        if p[0] != BIP44_PURPOSE {
            return Err(Error::InvalidPurpose(p[0]));
        }
        if p[1] < BIP44_SOFT_UPPER_BOUND {
            return Err(Error::CoinTypeOutOfBound(p[1]));
        }
        if p[2] < BIP44_SOFT_UPPER_BOUND {
            return Err(Error::AccountOutOfBound(p[2]));
        }
        if p[3] >= BIP44_SOFT_UPPER_BOUND {
            return Err(Error::ChangeOutOfBound(p[3]));
        }
        Ok(Addressing {
            coin_type: CoinType::new(p[1] ^ BIP44_SOFT_UPPER_BOUND)?,
            account: Account::new(p[2] ^ BIP44_SOFT_UPPER_BOUND)?,
            change: p[3],
            index: Index::new(p[4])?,
        })
    }

    /// try to generate a new `Addressing` starting from the given
    /// offset after this one
    ///
    /// # Error
    ///
    /// may fail if the offset overflows the soft index space
    pub fn incr(&self, incr: u32) -> Result<Self> {
        let mut addr = *self;
        addr.index = addr.index.incr(incr)?;
        Ok(addr)
    }

    /// generate the list of the `chunk_size` addressings that follow
    /// this one, starting at the next index
    pub fn next_chunks(&self, chunk_size: usize) -> Result<Vec<Self>> {
        let mut v = Vec::with_capacity(chunk_size);
        let mut addr = *self;
        for _ in 0..chunk_size {
            addr = addr.incr(1)?;
            v.push(addr);
        }
        Ok(v)
    }
}
impl fmt::Display for Addressing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "m/44'/{}'/{}'/{}/{}",
            self.coin_type, self.account, self.change, self.index
        )
    }
}
