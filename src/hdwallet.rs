//! BIP32 hierarchical deterministic keys over the secp256k1 curve
//!
//! The master extended key is extracted from a generation seed, then
//! every child is reachable through index based derivation, hardened
//! or not. The textual `m/44'/0'/0'/0/0` notation is supported
//! through [`Path`](./struct.Path.html) and the [`Wallet`](./struct.Wallet.html)
//! object ties a master key to a curve context to make the whole
//! derivation a one liner.
//!
//! # Example
//!
//! ```
//! use chaindom::hdwallet::{Seed, Wallet};
//!
//! let seed = Seed::from_hex(
//!     "c097b079262b98aae1818707a68946a8ff742ac37e2835e55af8a0cf1423943a\
//!      8f6fbd243c52e6a4e91d59601daab9c8c5a508b2490b12171b9fdc4f21234da2",
//! ).unwrap();
//! let wallet = Wallet::from_seed(&seed).unwrap();
//! let key = wallet.derive("m/44'/0'/0'/0/0").unwrap();
//! println!("{}", key.public_key);
//! ```

use cryptoxide::hmac::Hmac;
use cryptoxide::mac::Mac;
use cryptoxide::sha2::Sha512;
use cryptoxide::util::fixed_time_eq;
use std::{error, fmt, hash, result, str};

use secp256k1::{self, Secp256k1, SignOnly};

use bip::{bip39, bip44};
use scalar::Scalar;
use util::{hex, securemem};

/// the minimum size of a master generation seed, in bytes
pub const SEED_MIN_SIZE: usize = 16;
/// the maximum size of a master generation seed, in bytes
pub const SEED_MAX_SIZE: usize = 64;
/// the size of an extended private key, the private scalar followed
/// by the chain code
pub const XPRV_SIZE: usize = 64;
pub const PRIVATE_KEY_SIZE: usize = 32;
/// the size of a compressed curve point
pub const PUBLIC_KEY_SIZE: usize = 33;
pub const CHAIN_CODE_SIZE: usize = 32;

/// the HMAC key of the master extraction, fixed by BIP32
const MASTER_HMAC_KEY: &'static [u8] = b"Bitcoin seed";

/// HDWallet errors
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// the given seed is of an invalid size, the parameter is the
    /// given seed size. See `SEED_MIN_SIZE` and `SEED_MAX_SIZE`.
    InvalidSeedSize(usize),

    /// the master extraction mapped the seed outside of the usable
    /// scalar range, a different seed must be used
    MasterKeyOutOfRange,

    /// the given extended private key is of an invalid size, the
    /// parameter is the given size. See `XPRV_SIZE`.
    InvalidXPrvSize(usize),

    /// the given private key is of an invalid size, the parameter is
    /// the given size. See `PRIVATE_KEY_SIZE`.
    InvalidPrivateKeySize(usize),

    /// the given public key is of an invalid size, the parameter is
    /// the given size. See `PUBLIC_KEY_SIZE`.
    InvalidPublicKeySize(usize),

    /// the private scalar is zero or not below the curve order
    PrivateKeyOutOfRange,

    /// a segment of a derivation path string could not be read, the
    /// parameter carries the offending input
    InvalidPathSyntax(String),

    /// the derivation at the given index produced a child outside of
    /// the usable scalar range, the caller is expected to retry with
    /// the next index
    ChildKeyOutOfRange(DerivationIndex),

    /// error while decoding an hexadecimal string
    HexadecimalError(hex::Error),

    /// forward the secp256k1 backend errors
    Secp256k1(secp256k1::Error),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &Error::InvalidSeedSize(sz) => write!(
                f,
                "Invalid Seed Size, expected between {} and {} bytes, but received {} bytes.",
                SEED_MIN_SIZE, SEED_MAX_SIZE, sz
            ),
            &Error::MasterKeyOutOfRange => write!(
                f,
                "Invalid Master Key, the seed maps outside of the curve order."
            ),
            &Error::InvalidXPrvSize(sz) => write!(
                f,
                "Invalid XPrv Size, expected {} bytes, but received {} bytes.",
                XPRV_SIZE, sz
            ),
            &Error::InvalidPrivateKeySize(sz) => write!(
                f,
                "Invalid Private Key Size, expected {} bytes, but received {} bytes.",
                PRIVATE_KEY_SIZE, sz
            ),
            &Error::InvalidPublicKeySize(sz) => write!(
                f,
                "Invalid Public Key Size, expected {} bytes, but received {} bytes.",
                PUBLIC_KEY_SIZE, sz
            ),
            &Error::PrivateKeyOutOfRange => write!(
                f,
                "Invalid Private Key, the scalar is zero or not below the curve order."
            ),
            &Error::InvalidPathSyntax(ref segment) => {
                write!(f, "Invalid derivation path segment: \"{}\".", segment)
            }
            &Error::ChildKeyOutOfRange(index) => write!(
                f,
                "Child Key out of range at derivation index {}, derive the next index.",
                index
            ),
            &Error::HexadecimalError(ref err) => write!(f, "Invalid hexadecimal: {}.", err),
            &Error::Secp256k1(ref err) => write!(f, "Curve backend error: {}.", err),
        }
    }
}
impl From<hex::Error> for Error {
    fn from(e: hex::Error) -> Error {
        Error::HexadecimalError(e)
    }
}
impl From<secp256k1::Error> for Error {
    fn from(e: secp256k1::Error) -> Error {
        Error::Secp256k1(e)
    }
}
impl error::Error for Error {
    fn cause(&self) -> Option<&error::Error> {
        match self {
            &Error::HexadecimalError(ref err) => Some(err),
            &Error::Secp256k1(ref err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

pub type ChainCode = [u8; CHAIN_CODE_SIZE];

pub type DerivationIndex = u32;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum DerivationType {
    Soft(u32),
    Hard(u32),
}

fn to_type(index: DerivationIndex) -> DerivationType {
    if index >= 0x80000000 {
        DerivationType::Hard(index)
    } else {
        DerivationType::Soft(index)
    }
}

/// a master generation seed, any byte length between `SEED_MIN_SIZE`
/// and `SEED_MAX_SIZE` inclusive
pub struct Seed(Vec<u8>);
impl Seed {
    /// create a `Seed` by taking ownership of the given bytes
    ///
    /// # Error
    ///
    /// `InvalidSeedSize` if the given length is out of the supported
    /// bounds.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        if bytes.len() < SEED_MIN_SIZE || bytes.len() > SEED_MAX_SIZE {
            return Err(Error::InvalidSeedSize(bytes.len()));
        }
        Ok(Seed(bytes))
    }

    /// create a `Seed` by copying the given slice
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Seed::from_bytes(Vec::from(bytes))
    }

    /// create a `Seed` from the given hexadecimal string
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        Seed::from_bytes(hex::decode(hex_str)?)
    }
}
impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
impl Drop for Seed {
    fn drop(&mut self) {
        securemem::zero(&mut self.0);
    }
}

/// an extended private key, the private scalar followed by the chain
/// code
///
/// the chain code is not a secret by itself but it never leaves the
/// extended key here, the whole buffer is zeroed on drop.
pub struct XPrv([u8; XPRV_SIZE]);
impl XPrv {
    /// takes the given raw bytes and provides an `XPrv`, no check
    /// beside the size is performed
    fn from_bytes(bytes: [u8; XPRV_SIZE]) -> Self {
        XPrv(bytes)
    }

    /// perform the BIP32 master extraction on the given seed
    ///
    /// # Error
    ///
    /// `MasterKeyOutOfRange` if the extraction maps the seed to a
    /// zero scalar or a scalar not below the curve order. There is no
    /// way to fix such a seed, another one must be used.
    pub fn generate_from_seed(seed: &Seed) -> Result<Self> {
        mk_master_key(seed.as_ref())
    }

    /// same as `generate_from_seed` with a 64 bytes BIP39 stretched
    /// seed
    pub fn generate_from_bip39(seed: &bip39::Seed) -> Result<Self> {
        mk_master_key(seed.as_ref())
    }

    /// create an `XPrv` from the given slice, checking the scalar
    /// range
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != XPRV_SIZE {
            return Err(Error::InvalidXPrvSize(bytes.len()));
        }
        let scalar = Scalar::from_slice(&bytes[0..PRIVATE_KEY_SIZE]);
        if scalar.is_zero() || !scalar.is_below_order() {
            return Err(Error::PrivateKeyOutOfRange);
        }
        let mut buf = [0u8; XPRV_SIZE];
        buf[..].clone_from_slice(bytes);
        Ok(XPrv::from_bytes(buf))
    }

    /// create an `XPrv` from the given hexadecimal string
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str)?;
        XPrv::from_slice(&bytes)
    }

    /// the private scalar part
    pub fn private_key(&self) -> PrivateKey {
        let mut buf = [0u8; PRIVATE_KEY_SIZE];
        buf[..].clone_from_slice(&self.0[0..PRIVATE_KEY_SIZE]);
        PrivateKey(buf)
    }

    /// the chain code part
    pub fn chain_code(&self) -> ChainCode {
        let mut buf = [0u8; CHAIN_CODE_SIZE];
        buf[..].clone_from_slice(&self.0[PRIVATE_KEY_SIZE..XPRV_SIZE]);
        buf
    }

    /// the compressed public key associated to the private scalar
    pub fn public<C>(&self, secp: &Secp256k1<C>) -> Result<PublicKey>
    where
        C: secp256k1::Signing,
    {
        let bytes = mk_public_key(secp, &self.0[0..PRIVATE_KEY_SIZE])?;
        Ok(PublicKey(bytes))
    }

    /// derive the child extended private key at the given index
    ///
    /// Hardened derivation (index with the topmost bit set) uses the
    /// private scalar, soft derivation uses the compressed public
    /// key, as defined by BIP32.
    ///
    /// # Error
    ///
    /// `ChildKeyOutOfRange` if the index maps to an unusable child.
    /// The index is not retried here, the caller picks the next one.
    pub fn derive<C>(&self, secp: &Secp256k1<C>, index: DerivationIndex) -> Result<Self>
    where
        C: secp256k1::Signing,
    {
        derive_private(secp, self, index)
    }
}
impl Clone for XPrv {
    fn clone(&self) -> Self {
        XPrv(self.0)
    }
}
impl PartialEq for XPrv {
    fn eq(&self, rhs: &XPrv) -> bool {
        fixed_time_eq(self.as_ref(), rhs.as_ref())
    }
}
impl Eq for XPrv {}
impl fmt::Debug for XPrv {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.as_ref()))
    }
}
impl fmt::Display for XPrv {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.as_ref()))
    }
}
impl AsRef<[u8]> for XPrv {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
impl Drop for XPrv {
    fn drop(&mut self) {
        securemem::zero(&mut self.0);
    }
}

/// a private scalar of the secp256k1 curve
pub struct PrivateKey([u8; PRIVATE_KEY_SIZE]);
impl PrivateKey {
    /// create a `PrivateKey` from the given bytes, checking the
    /// scalar range
    pub fn from_bytes(bytes: [u8; PRIVATE_KEY_SIZE]) -> Result<Self> {
        let scalar = Scalar::from_bytes(bytes);
        if scalar.is_zero() || !scalar.is_below_order() {
            return Err(Error::PrivateKeyOutOfRange);
        }
        Ok(PrivateKey(bytes))
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PRIVATE_KEY_SIZE {
            return Err(Error::InvalidPrivateKeySize(bytes.len()));
        }
        let mut buf = [0u8; PRIVATE_KEY_SIZE];
        buf[..].clone_from_slice(bytes);
        PrivateKey::from_bytes(buf)
    }

    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str)?;
        PrivateKey::from_slice(&bytes)
    }

    /// the compressed public key associated to this private key
    pub fn public<C>(&self, secp: &Secp256k1<C>) -> Result<PublicKey>
    where
        C: secp256k1::Signing,
    {
        let bytes = mk_public_key(secp, &self.0)?;
        Ok(PublicKey(bytes))
    }
}
impl Clone for PrivateKey {
    fn clone(&self) -> Self {
        PrivateKey(self.0)
    }
}
impl PartialEq for PrivateKey {
    fn eq(&self, rhs: &PrivateKey) -> bool {
        fixed_time_eq(self.as_ref(), rhs.as_ref())
    }
}
impl Eq for PrivateKey {}
impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.as_ref()))
    }
}
impl fmt::Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.as_ref()))
    }
}
impl AsRef<[u8]> for PrivateKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
impl Drop for PrivateKey {
    fn drop(&mut self) {
        securemem::zero(&mut self.0);
    }
}

/// a compressed public key of the secp256k1 curve
#[derive(Clone, Copy)]
pub struct PublicKey([u8; PUBLIC_KEY_SIZE]);
impl PublicKey {
    pub fn from_bytes(bytes: [u8; PUBLIC_KEY_SIZE]) -> Self {
        PublicKey(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PUBLIC_KEY_SIZE {
            return Err(Error::InvalidPublicKeySize(bytes.len()));
        }
        let mut buf = [0u8; PUBLIC_KEY_SIZE];
        buf[..].clone_from_slice(bytes);
        Ok(PublicKey::from_bytes(buf))
    }

    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str)?;
        PublicKey::from_slice(&bytes)
    }
}
impl PartialEq for PublicKey {
    fn eq(&self, rhs: &PublicKey) -> bool {
        fixed_time_eq(self.as_ref(), rhs.as_ref())
    }
}
impl Eq for PublicKey {}
impl hash::Hash for PublicKey {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}
impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.as_ref()))
    }
}
impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.as_ref()))
    }
}
impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// the key pair obtained at the end of a wallet derivation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedKey {
    pub private_key: PrivateKey,
    pub public_key: PublicKey,
}

fn be32(i: u32) -> [u8; 4] {
    [(i >> 24) as u8, (i >> 16) as u8, (i >> 8) as u8, i as u8]
}

fn mk_master_key(seed: &[u8]) -> Result<XPrv> {
    let mut mac = Hmac::new(Sha512::new(), MASTER_HMAC_KEY);
    mac.input(seed);
    let mut out = [0u8; XPRV_SIZE];
    mac.raw_result(&mut out);

    let key = Scalar::from_slice(&out[0..PRIVATE_KEY_SIZE]);
    if key.is_zero() || !key.is_below_order() {
        return Err(Error::MasterKeyOutOfRange);
    }

    Ok(XPrv::from_bytes(out))
}

fn mk_public_key<C>(secp: &Secp256k1<C>, private: &[u8]) -> Result<[u8; PUBLIC_KEY_SIZE]>
where
    C: secp256k1::Signing,
{
    let sk = secp256k1::SecretKey::from_slice(private)?;
    let pk = secp256k1::PublicKey::from_secret_key(secp, &sk);
    Ok(pk.serialize())
}

fn derive_private<C>(secp: &Secp256k1<C>, xprv: &XPrv, index: DerivationIndex) -> Result<XPrv>
where
    C: secp256k1::Signing,
{
    let ekey = &xprv.as_ref()[0..PRIVATE_KEY_SIZE];
    let chaincode = &xprv.as_ref()[PRIVATE_KEY_SIZE..XPRV_SIZE];

    let mut mac = Hmac::new(Sha512::new(), chaincode);
    match to_type(index) {
        DerivationType::Soft(_) => {
            let pk = mk_public_key(secp, ekey)?;
            mac.input(&pk);
        }
        DerivationType::Hard(_) => {
            mac.input(&[0x0]);
            mac.input(ekey);
        }
    }
    mac.input(&be32(index));

    let mut out = [0u8; XPRV_SIZE];
    mac.raw_result(&mut out);
    mac.reset();

    let il = Scalar::from_slice(&out[0..PRIVATE_KEY_SIZE]);
    if !il.is_below_order() {
        return Err(Error::ChildKeyOutOfRange(index));
    }
    let parent = Scalar::from_slice(ekey);
    let child = il.add_mod_order(&parent);
    if child.is_zero() {
        return Err(Error::ChildKeyOutOfRange(index));
    }

    let mut buf = [0u8; XPRV_SIZE];
    buf[0..PRIVATE_KEY_SIZE].clone_from_slice(&child.to_bytes());
    buf[PRIVATE_KEY_SIZE..XPRV_SIZE].clone_from_slice(&out[PRIVATE_KEY_SIZE..XPRV_SIZE]);
    Ok(XPrv::from_bytes(buf))
}

/// a derivation path, the `m/44'/0'/0'/0/0` notation
///
/// the hardened indices carry the topmost bit set, the string form
/// marks them with a `'` suffix
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Path(Vec<DerivationIndex>);
impl Path {
    pub fn new(path: Vec<DerivationIndex>) -> Self {
        Path(path)
    }
}
impl AsRef<[DerivationIndex]> for Path {
    fn as_ref(&self) -> &[DerivationIndex] {
        &self.0[..]
    }
}
impl str::FromStr for Path {
    type Err = Error;

    /// parse the `m/44'/0'/0'/0/0` notation
    ///
    /// the first segment must be exactly `m`, every following segment
    /// is a decimal index below 2^31, hardened by a single trailing
    /// `'`. Anything else is rejected, there is no alternative
    /// hardening marker and no whitespace tolerance.
    fn from_str(s: &str) -> Result<Self> {
        let mut segments = s.split('/');
        match segments.next() {
            Some("m") => {}
            _ => return Err(Error::InvalidPathSyntax(s.to_string())),
        }
        let mut path = Vec::new();
        for segment in segments {
            path.push(parse_segment(segment)?);
        }
        Ok(Path(path))
    }
}
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "m")?;
        for &index in self.0.iter() {
            if index >= 0x80000000 {
                write!(f, "/{}'", index ^ 0x80000000)?;
            } else {
                write!(f, "/{}", index)?;
            }
        }
        Ok(())
    }
}

fn parse_segment(segment: &str) -> Result<DerivationIndex> {
    let (digits, hardened) = if segment.ends_with('\'') {
        (&segment[..segment.len() - 1], true)
    } else {
        (segment, false)
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidPathSyntax(segment.to_string()));
    }
    let index = match digits.parse::<u32>() {
        Ok(index) => index,
        Err(_) => return Err(Error::InvalidPathSyntax(segment.to_string())),
    };
    if index >= 0x80000000 {
        return Err(Error::InvalidPathSyntax(segment.to_string()));
    }
    if hardened {
        Ok(index | 0x80000000)
    } else {
        Ok(index)
    }
}

/// a wallet root, the master extended key tied to a curve context,
/// ready to derive key pairs along paths
pub struct Wallet {
    root_key: XPrv,
    secp: Secp256k1<SignOnly>,
}
impl Wallet {
    /// create a `Wallet` from the given master generation seed
    ///
    /// # Error
    ///
    /// `MasterKeyOutOfRange` if the master extraction maps the seed
    /// outside of the usable scalar range.
    pub fn from_seed(seed: &Seed) -> Result<Self> {
        let root_key = XPrv::generate_from_seed(seed)?;
        Ok(Wallet {
            root_key: root_key,
            secp: Secp256k1::signing_only(),
        })
    }

    /// create a `Wallet` from a BIP39 stretched seed
    pub fn from_bip39_seed(seed: &bip39::Seed) -> Result<Self> {
        let root_key = XPrv::generate_from_bip39(seed)?;
        Ok(Wallet {
            root_key: root_key,
            secp: Secp256k1::signing_only(),
        })
    }

    /// create a `Wallet` from the given mnemonic phrase and
    /// passphrase
    ///
    /// the phrase has already been checked against a dictionary to
    /// build the `MnemonicString`, the checksum is not rechecked
    /// here.
    pub fn from_bip39_mnemonics(
        mnemonics: &bip39::MnemonicString,
        password: &[u8],
    ) -> Result<Self> {
        let seed = bip39::Seed::from_mnemonic_string(mnemonics, password);
        Wallet::from_bip39_seed(&seed)
    }

    /// the master extended private key
    pub fn root_key(&self) -> &XPrv {
        &self.root_key
    }

    /// derive the key pair at the given path string, see
    /// [`Path`](./struct.Path.html) for the notation
    ///
    /// `m` alone is valid and yields the master key pair.
    pub fn derive(&self, path: &str) -> Result<DerivedKey> {
        let path = path.parse::<Path>()?;
        self.derive_path(&path)
    }

    /// derive the key pair along the given parsed path
    pub fn derive_path(&self, path: &Path) -> Result<DerivedKey> {
        let mut key = self.root_key.clone();
        for &index in path.as_ref().iter() {
            key = key.derive(&self.secp, index)?;
        }
        let private_key = key.private_key();
        let public_key = key.public(&self.secp)?;
        Ok(DerivedKey {
            private_key: private_key,
            public_key: public_key,
        })
    }

    /// derive the key pair of the given BIP44 addressing
    pub fn derive_bip44(&self, addressing: &bip44::Addressing) -> Result<DerivedKey> {
        self.derive_path(&addressing.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bip::bip39;
    use bip::bip44::{AddrType, Addressing};
    use blockchain::Blockchain;

    // seed and key pairs of the wallet test vectors
    const KNOWN_SEED: &'static str =
        "c097b079262b98aae1818707a68946a8ff742ac37e2835e55af8a0cf1423943a8f6fbd243c52e6a4e91d59601daab9c8c5a508b2490b12171b9fdc4f21234da2";
    const MASTER_PRIV: &'static str =
        "a011b418812ea272551fbbb00125f004a0c654318a092634b2a406b31f0d2764";
    const MASTER_PUB: &'static str =
        "0329ea12d95275cbf6d7333524a667d86e405713de3c5ed9cb2a1c352b602dfedf";
    const BITCOIN_PRIV: &'static str =
        "61c926b9ccf2d3c5f6c76147cd3b640ed355dfb090b5b5aa019497b911f21d2d";
    const BITCOIN_PUB: &'static str =
        "034f0c96f46cbe4957b2f080793b9c6236f87043c2a90b418958f88613b2f27899";
    const ETHEREUM_PRIV: &'static str =
        "05b627332ff2f468d310313a94933cd4b595875b4e856146f20b4930d991103c";
    const ETHEREUM_PUB: &'static str =
        "03c7f8dbe129d24dce4d467d5a555bcf1eec42204f6d576035d8c3716f1dd08965";

    // BIP32 test vector 1
    const TV1_SEED: &'static str = "000102030405060708090a0b0c0d0e0f";
    const TV1_MASTER: &'static str =
        "e8f32e723decf4051aefac8e2c93c9c5b214313817cdb01a1494b917c8436b35873dff81c02f525623fd1fe5167eac3a55a049de3d314bb42ee227ffed37d508";
    const TV1_MASTER_PUB: &'static str =
        "0339a36013301597daef41fbe593a02cc513d0b55527ec2df1050e2e8ff49c85c2";
    const TV1_CHILD_H0: &'static str =
        "edb2e14f9ee77d26dd93b4ecede8d16ed408ce149b6cd80b0715a2d911a0afea47fdacbd0f1097043b78c63c20c34ef4ed9a111d980047ad16282c7ae6236141";
    const TV1_LEAF: &'static str =
        "471b76e389e528d6de6d816857e012c5455051cad6660850e58372a6c3e6e7c8c783e67b921d2beb8f6b389cc646d7263b4145701dadd2161548a8b078e65e9e";
    const TV1_LEAF_PUB: &'static str =
        "022a471424da5e657499d1ff51cb43c47481a03b1e77f951fe64cec9f5a48f7011";

    const KNOWN_PHRASE: &'static str =
        "mercy shock future conduct text sure police veteran orient bus truck prison";
    const PHRASE_ETHEREUM_PRIV: &'static str =
        "0d7d529d73351962b3d4037b51c14815f96c9b239e107b89ddc7446487519d13";
    const PHRASE_ETHEREUM_PUB: &'static str =
        "029d7952e40ad93e9984addb2bd2b5204f587a9f22e0a42c1deec3475fae81ca5d";

    #[test]
    fn seed_sizes() {
        assert_eq!(Seed::from_slice(&[0; 15]).err(), Some(Error::InvalidSeedSize(15)));
        assert_eq!(Seed::from_slice(&[0; 65]).err(), Some(Error::InvalidSeedSize(65)));
        assert!(Seed::from_slice(&[0; SEED_MIN_SIZE]).is_ok());
        assert!(Seed::from_slice(&[0; SEED_MAX_SIZE]).is_ok());
    }

    #[test]
    fn seed_from_hex_rejects_garbage() {
        match Seed::from_hex("not hexadecimal") {
            Err(Error::HexadecimalError(_)) => (),
            _ => panic!("expected an hexadecimal error"),
        }
    }

    #[test]
    fn master_extraction() {
        let seed = Seed::from_hex(TV1_SEED).unwrap();
        let root = XPrv::generate_from_seed(&seed).unwrap();
        assert_eq!(root.to_string(), TV1_MASTER);

        let secp = Secp256k1::signing_only();
        let public = root.public(&secp).unwrap();
        assert_eq!(public.to_string(), TV1_MASTER_PUB);
    }

    #[test]
    fn derive_hardened() {
        let seed = Seed::from_hex(TV1_SEED).unwrap();
        let root = XPrv::generate_from_seed(&seed).unwrap();
        let secp = Secp256k1::signing_only();

        let child = root.derive(&secp, 0x80000000).unwrap();
        assert_eq!(child.to_string(), TV1_CHILD_H0);
    }

    #[test]
    fn derive_chain() {
        let seed = Seed::from_hex(TV1_SEED).unwrap();
        let mut key = XPrv::generate_from_seed(&seed).unwrap();
        let secp = Secp256k1::signing_only();

        // m/0'/1/2'/2/1000000000
        let indices = [0x80000000, 1, 0x80000002, 2, 1000000000];
        for &index in indices.iter() {
            key = key.derive(&secp, index).unwrap();
        }
        assert_eq!(key.to_string(), TV1_LEAF);
        assert_eq!(key.public(&secp).unwrap().to_string(), TV1_LEAF_PUB);
    }

    #[test]
    fn hard_and_soft_derivations_differ() {
        let seed = Seed::from_hex(TV1_SEED).unwrap();
        let root = XPrv::generate_from_seed(&seed).unwrap();
        let secp = Secp256k1::signing_only();

        let soft = root.derive(&secp, 0).unwrap();
        let hard = root.derive(&secp, 0x80000000).unwrap();
        assert!(soft != hard);
    }

    #[test]
    fn xprv_from_slice_checks() {
        assert_eq!(
            XPrv::from_slice(&[0; 63]).err(),
            Some(Error::InvalidXPrvSize(63))
        );
        // zero scalar
        assert_eq!(
            XPrv::from_slice(&[0; XPRV_SIZE]).err(),
            Some(Error::PrivateKeyOutOfRange)
        );
        // scalar above the order
        assert_eq!(
            XPrv::from_slice(&[0xff; XPRV_SIZE]).err(),
            Some(Error::PrivateKeyOutOfRange)
        );

        let xprv = XPrv::from_hex(TV1_MASTER).unwrap();
        assert_eq!(xprv.to_string(), TV1_MASTER);
    }

    #[test]
    fn xprv_parts() {
        let xprv = XPrv::from_hex(TV1_MASTER).unwrap();
        assert_eq!(
            format!("{}", xprv.private_key()),
            &TV1_MASTER[..2 * PRIVATE_KEY_SIZE]
        );
        assert_eq!(
            hex::encode(&xprv.chain_code()[..]),
            &TV1_MASTER[2 * PRIVATE_KEY_SIZE..]
        );
    }

    #[test]
    fn private_key_range_checks() {
        assert_eq!(
            PrivateKey::from_slice(&[0; PRIVATE_KEY_SIZE]).err(),
            Some(Error::PrivateKeyOutOfRange)
        );
        assert_eq!(
            PrivateKey::from_slice(&[0xff; PRIVATE_KEY_SIZE]).err(),
            Some(Error::PrivateKeyOutOfRange)
        );
        assert_eq!(
            PrivateKey::from_slice(&[0; 31]).err(),
            Some(Error::InvalidPrivateKeySize(31))
        );
        assert!(PrivateKey::from_hex(BITCOIN_PRIV).is_ok());
    }

    #[test]
    fn public_key_sizes() {
        assert_eq!(
            PublicKey::from_slice(&[2; 32]).err(),
            Some(Error::InvalidPublicKeySize(32))
        );
        let public = PublicKey::from_hex(BITCOIN_PUB).unwrap();
        assert_eq!(public.to_string(), BITCOIN_PUB);
    }

    #[test]
    fn wallet_master_pair() {
        let seed = Seed::from_hex(KNOWN_SEED).unwrap();
        let wallet = Wallet::from_seed(&seed).unwrap();

        let key = wallet.derive("m").unwrap();
        assert_eq!(key.private_key.to_string(), MASTER_PRIV);
        assert_eq!(key.public_key.to_string(), MASTER_PUB);
    }

    #[test]
    fn wallet_bitcoin_derivation() {
        let seed = Seed::from_hex(KNOWN_SEED).unwrap();
        let wallet = Wallet::from_seed(&seed).unwrap();

        let key = wallet.derive("m/44'/0'/0'/0/0").unwrap();
        assert_eq!(key.private_key.to_string(), BITCOIN_PRIV);
        assert_eq!(key.public_key.to_string(), BITCOIN_PUB);
    }

    #[test]
    fn wallet_ethereum_derivation() {
        let seed = Seed::from_hex(KNOWN_SEED).unwrap();
        let wallet = Wallet::from_seed(&seed).unwrap();

        let key = wallet.derive("m/44'/60'/0'/0/0").unwrap();
        assert_eq!(key.private_key.to_string(), ETHEREUM_PRIV);
        assert_eq!(key.public_key.to_string(), ETHEREUM_PUB);
    }

    #[test]
    fn wallet_is_deterministic() {
        let seed = Seed::from_hex(KNOWN_SEED).unwrap();
        let wallet1 = Wallet::from_seed(&seed).unwrap();
        let wallet2 = Wallet::from_seed(&seed).unwrap();

        assert_eq!(wallet1.root_key(), wallet2.root_key());
        assert_eq!(
            wallet1.derive("m/44'/60'/0'/0/0").unwrap(),
            wallet2.derive("m/44'/60'/0'/0/0").unwrap()
        );
    }

    #[test]
    fn wallet_derive_bip44() {
        let seed = Seed::from_hex(KNOWN_SEED).unwrap();
        let wallet = Wallet::from_seed(&seed).unwrap();

        let addressing =
            Addressing::for_blockchain(Blockchain::Ethereum, 0, AddrType::External).unwrap();
        let key = wallet.derive_bip44(&addressing).unwrap();
        assert_eq!(key.private_key.to_string(), ETHEREUM_PRIV);
        assert_eq!(key.public_key.to_string(), ETHEREUM_PUB);
    }

    #[test]
    fn wallet_from_mnemonics() {
        let mnemonics = bip39::MnemonicString::new(
            &bip39::dictionary::ENGLISH,
            KNOWN_PHRASE.to_string(),
        )
        .unwrap();
        let wallet = Wallet::from_bip39_mnemonics(&mnemonics, b"").unwrap();

        let key = wallet.derive("m/44'/60'/0'/0/0").unwrap();
        assert_eq!(key.private_key.to_string(), PHRASE_ETHEREUM_PRIV);
        assert_eq!(key.public_key.to_string(), PHRASE_ETHEREUM_PUB);
    }

    #[test]
    fn path_parsing() {
        assert_eq!("m".parse::<Path>(), Ok(Path::new(vec![])));
        assert_eq!("m/0".parse::<Path>(), Ok(Path::new(vec![0])));
        assert_eq!(
            "m/2147483647'".parse::<Path>(),
            Ok(Path::new(vec![0xffffffff]))
        );
        assert_eq!(
            "m/44'/60'/0'/0/0".parse::<Path>(),
            Ok(Path::new(vec![0x8000002C, 0x8000003C, 0x80000000, 0, 0]))
        );
    }

    #[test]
    fn path_parsing_rejects() {
        let rejected = [
            "",
            "M/0",
            "n/0",
            "invalid/path",
            "m/",
            "m//0",
            "m/0''",
            "m/'",
            "m/+1",
            "m/-1",
            "m/0h",
            "m/ 1",
            "m/2147483648",
            "m/4294967296",
        ];
        for path in rejected.iter() {
            match path.parse::<Path>() {
                Err(Error::InvalidPathSyntax(_)) => (),
                r => panic!("path {:?} should be rejected, got {:?}", path, r),
            }
        }
    }

    #[test]
    fn path_display() {
        let path = Path::new(vec![0x8000002C, 0x8000003C, 0x80000000, 0, 0]);
        assert_eq!(path.to_string(), "m/44'/60'/0'/0/0");
        assert_eq!(Path::new(vec![]).to_string(), "m");
    }

    quickcheck! {
        fn path_string_roundtrip(indices: Vec<u32>) -> bool {
            let path = Path::new(indices);
            match path.to_string().parse::<Path>() {
                Ok(parsed) => parsed == path,
                Err(_) => false,
            }
        }
    }
}

#[cfg(test)]
#[cfg(feature = "with-bench")]
mod bench {
    use super::*;
    use test;

    const BENCH_SEED: &'static str = "000102030405060708090a0b0c0d0e0f";

    #[bench]
    fn master_extraction(b: &mut test::Bencher) {
        let seed = Seed::from_hex(BENCH_SEED).unwrap();
        b.iter(|| {
            let _ = XPrv::generate_from_seed(&seed).unwrap();
        })
    }

    #[bench]
    fn derive_hard(b: &mut test::Bencher) {
        let seed = Seed::from_hex(BENCH_SEED).unwrap();
        let root = XPrv::generate_from_seed(&seed).unwrap();
        let secp = Secp256k1::signing_only();
        b.iter(|| {
            let _ = root.derive(&secp, 0x80000000).unwrap();
        })
    }

    #[bench]
    fn derive_soft(b: &mut test::Bencher) {
        let seed = Seed::from_hex(BENCH_SEED).unwrap();
        let root = XPrv::generate_from_seed(&seed).unwrap();
        let secp = Secp256k1::signing_only();
        b.iter(|| {
            let _ = root.derive(&secp, 0).unwrap();
        })
    }
}
