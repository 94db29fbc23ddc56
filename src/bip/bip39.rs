//! BIP39 mnemonics
//!
//! Can be used to generate the root key of a hierarchical
//! deterministic wallet, or simply to map entropy bytes to a human
//! friendly phrase and back.
//!
//! For more details about the protocol, see the
//! [Bitcoin Improvement Proposal 39](https://github.com/bitcoin/bips/blob/master/bip-0039.mediawiki)
//!
//! # Example
//!
//! ## To create a new mnemonic phrase
//!
//! ```
//! extern crate rand;
//! extern crate chaindom;
//! use chaindom::bip::bip39::{dictionary, Entropy, Type};
//!
//! let entropy = Entropy::generate(Type::Type12Words, rand::random);
//! let phrase = entropy.to_mnemonics().to_string(&dictionary::ENGLISH);
//! println!("{}", phrase);
//! ```
//!
//! ## To validate a phrase and recover the seed
//!
//! ```
//! # extern crate chaindom;
//! use chaindom::bip::bip39::{dictionary, MnemonicString, Seed};
//!
//! let phrase = "mercy shock future conduct text sure police veteran orient bus truck prison";
//! let mnemonics = MnemonicString::new(&dictionary::ENGLISH, phrase.to_string())
//!     .expect("the phrase is only made of english words");
//! let seed = Seed::from_mnemonic_string(&mnemonics, b"");
//! ```

use cryptoxide::digest::Digest;
use cryptoxide::hmac::Hmac;
use cryptoxide::pbkdf2::pbkdf2;
use cryptoxide::sha2::{Sha256, Sha512};
use cryptoxide::util::fixed_time_eq;
use std::{error, fmt, ops::Deref, result, str};
use util::{bits::BitReaderBy11, bits::BitWriterBy11, hex, securemem};

/// Error regarding BIP39 operations
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// Received an unsupported number of mnemonic words. The parameter
    /// contains the unsupported number. Supported values are
    /// described as part of the [`Type`](./enum.Type.html).
    WrongNumberOfWords(usize),

    /// Received an unsupported number of entropy bits. The parameter
    /// contains the unsupported number.
    WrongKeySize(usize),

    /// The given mnemonic is out of bound, i.e. its index is above 2047
    /// and is therefore not part of any dictionary.
    MnemonicOutOfBound(u16),

    /// Forward error regarding dictionary operations.
    LanguageError(dictionary::Error),

    /// The given seed used too many or too few bytes, the parameter
    /// contains the received size.
    InvalidSeedSize(usize),

    /// The checksum embedded in the mnemonic phrase does not match the
    /// checksum computed from the entropy. The first parameter is the
    /// expected value, the second the one found in the phrase.
    InvalidChecksum(u8, u8),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &Error::WrongNumberOfWords(sz) => {
                write!(f, "Unsupported number of mnemonic words: {}", sz)
            }
            &Error::WrongKeySize(sz) => write!(
                f,
                "Invalid entropy size, expected 128, 160, 192, 224 or 256 bits, but received {} bits",
                sz
            ),
            &Error::MnemonicOutOfBound(val) => {
                write!(f, "The given mnemonic is out of bound, {}", val)
            }
            &Error::LanguageError(ref err) => write!(f, "Mnemonic dictionary error: {}", err),
            &Error::InvalidSeedSize(sz) => write!(
                f,
                "Invalid Seed Size, expected {} bytes, but received {} bytes",
                SEED_SIZE, sz
            ),
            &Error::InvalidChecksum(expected, found) => write!(
                f,
                "Invalid Checksum, expected {:08b} but found {:08b}",
                expected, found
            ),
        }
    }
}
impl From<dictionary::Error> for Error {
    fn from(e: dictionary::Error) -> Self {
        Error::LanguageError(e)
    }
}
impl error::Error for Error {
    fn cause(&self) -> Option<&error::Error> {
        match self {
            &Error::LanguageError(ref error) => Some(error),
            _ => None,
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

/// The support type of `Mnemonics`, i.e. the number of words supported in a
/// mnemonic phrase.
///
/// This enum provides the following properties:
///
/// | number of words | entropy size (bits) | checksum size (bits)  |
/// | --------------- | ------------------- | --------------------- |
/// | 12              | 128                 | 4                     |
/// | 15              | 160                 | 5                     |
/// | 18              | 192                 | 6                     |
/// | 21              | 224                 | 7                     |
/// | 24              | 256                 | 8                     |
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Type {
    Type12Words,
    Type15Words,
    Type18Words,
    Type21Words,
    Type24Words,
}
impl Type {
    pub fn from_word_count(len: usize) -> Result<Self> {
        match len {
            12 => Ok(Type::Type12Words),
            15 => Ok(Type::Type15Words),
            18 => Ok(Type::Type18Words),
            21 => Ok(Type::Type21Words),
            24 => Ok(Type::Type24Words),
            _ => Err(Error::WrongNumberOfWords(len)),
        }
    }

    pub fn from_entropy_size(size: usize) -> Result<Self> {
        match size {
            128 => Ok(Type::Type12Words),
            160 => Ok(Type::Type15Words),
            192 => Ok(Type::Type18Words),
            224 => Ok(Type::Type21Words),
            256 => Ok(Type::Type24Words),
            _ => Err(Error::WrongKeySize(size)),
        }
    }

    pub fn to_key_size(&self) -> usize {
        match self {
            &Type::Type12Words => 128,
            &Type::Type15Words => 160,
            &Type::Type18Words => 192,
            &Type::Type21Words => 224,
            &Type::Type24Words => 256,
        }
    }

    pub fn mnemonic_count(&self) -> usize {
        match self {
            &Type::Type12Words => 12,
            &Type::Type15Words => 15,
            &Type::Type18Words => 18,
            &Type::Type21Words => 21,
            &Type::Type24Words => 24,
        }
    }

    pub fn checksum_size_bits(&self) -> usize {
        match self {
            &Type::Type12Words => 4,
            &Type::Type15Words => 5,
            &Type::Type18Words => 6,
            &Type::Type21Words => 7,
            &Type::Type24Words => 8,
        }
    }
}
impl Default for Type {
    fn default() -> Type {
        Type::Type12Words
    }
}
impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &Type::Type12Words => write!(f, "12"),
            &Type::Type15Words => write!(f, "15"),
            &Type::Type18Words => write!(f, "18"),
            &Type::Type21Words => write!(f, "21"),
            &Type::Type24Words => write!(f, "24"),
        }
    }
}
impl str::FromStr for Type {
    type Err = &'static str;
    fn from_str(s: &str) -> result::Result<Self, Self::Err> {
        match s {
            "12" => Ok(Type::Type12Words),
            "15" => Ok(Type::Type15Words),
            "18" => Ok(Type::Type18Words),
            "21" => Ok(Type::Type21Words),
            "24" => Ok(Type::Type24Words),
            _ => Err("Unknown bip39 mnemonic size"),
        }
    }
}

/// The entropy that is used to generate mnemonics.
///
/// See module documentation for mode details about how to use
/// `Entropy`.
#[derive(PartialEq, Eq, Clone)]
pub enum Entropy {
    Entropy12([u8; 16]),
    Entropy15([u8; 20]),
    Entropy18([u8; 24]),
    Entropy21([u8; 28]),
    Entropy24([u8; 32]),
}
impl Entropy {
    fn new(t: Type) -> Self {
        match t {
            Type::Type12Words => Entropy::Entropy12([0; 16]),
            Type::Type15Words => Entropy::Entropy15([0; 20]),
            Type::Type18Words => Entropy::Entropy18([0; 24]),
            Type::Type21Words => Entropy::Entropy21([0; 28]),
            Type::Type24Words => Entropy::Entropy24([0; 32]),
        }
    }

    /// Retrieve an `Entropy` from the given slice.
    ///
    /// # Error
    ///
    /// This function may fail if the given slice's length is not
    /// one of the supported entropy lengths. See [`Type`](./enum.Type.html)
    /// for the list of supported entropy sizes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let t = Type::from_entropy_size(bytes.len() * 8)?;
        let mut e = Entropy::new(t);
        e.as_mut().copy_from_slice(bytes);
        Ok(e)
    }

    /// Generate entropy using the given random generator.
    ///
    /// The function is generic over the source of entropy, any
    /// closure or function returning bytes will do, but the quality
    /// of the mnemonics is the quality of the given generator.
    pub fn generate<G>(t: Type, gen: G) -> Self
    where
        G: Fn() -> u8,
    {
        let mut entropy = Entropy::new(t);
        for e in entropy.as_mut().iter_mut() {
            *e = gen();
        }
        entropy
    }

    pub fn entropy_type(&self) -> Type {
        match self {
            &Entropy::Entropy12(_) => Type::Type12Words,
            &Entropy::Entropy15(_) => Type::Type15Words,
            &Entropy::Entropy18(_) => Type::Type18Words,
            &Entropy::Entropy21(_) => Type::Type21Words,
            &Entropy::Entropy24(_) => Type::Type24Words,
        }
    }

    fn as_mut(&mut self) -> &mut [u8] {
        match self {
            &mut Entropy::Entropy12(ref mut b) => b.as_mut(),
            &mut Entropy::Entropy15(ref mut b) => b.as_mut(),
            &mut Entropy::Entropy18(ref mut b) => b.as_mut(),
            &mut Entropy::Entropy21(ref mut b) => b.as_mut(),
            &mut Entropy::Entropy24(ref mut b) => b.as_mut(),
        }
    }

    fn hash(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        let mut res = [0u8; 32];
        hasher.input(self.as_ref());
        hasher.result(&mut res);
        res
    }

    /// The checksum of the entropy, the highest bits of the SHA256
    /// hash of the entropy bytes. The number of bits is a function of
    /// the entropy type, see the [`Type`](./enum.Type.html) table.
    pub fn checksum(&self) -> u8 {
        let hash = self.hash()[0];
        match self.entropy_type() {
            Type::Type12Words => (hash >> 4) & 0b0000_1111,
            Type::Type15Words => (hash >> 3) & 0b0001_1111,
            Type::Type18Words => (hash >> 2) & 0b0011_1111,
            Type::Type21Words => (hash >> 1) & 0b0111_1111,
            Type::Type24Words => hash,
        }
    }

    /// Recover an `Entropy` from the given `Mnemonics`, validating the
    /// embedded checksum against the entropy bytes.
    ///
    /// # Error
    ///
    /// This function may fail with `Error::InvalidChecksum` if the
    /// checksum read from the phrase does not match the one computed
    /// from the entropy bytes.
    pub fn from_mnemonics(mnemonics: &Mnemonics) -> Result<Self> {
        let t = mnemonics.get_type();

        let mut packed = BitWriterBy11::new();
        for mnemonic in mnemonics.0.iter() {
            packed.write(mnemonic.0);
        }
        let bytes = packed.to_bytes();

        let mut entropy = Entropy::new(t);
        let entropy_size = entropy.as_ref().len();
        entropy.as_mut().copy_from_slice(&bytes[..entropy_size]);

        // the checksum bits sit at the top of the first byte past the
        // entropy, the rest of that byte is zero padding
        let found = bytes[entropy_size] >> (8 - t.checksum_size_bits());
        let expected = entropy.checksum();
        if expected != found {
            return Err(Error::InvalidChecksum(expected, found));
        }

        Ok(entropy)
    }

    /// Convert the given `Entropy` into its `Mnemonics`, i.e. the
    /// indices of the words encoding the entropy bytes followed by
    /// the checksum.
    pub fn to_mnemonics(&self) -> Mnemonics {
        let t = self.entropy_type();
        let mut combined = Vec::from(self.as_ref());
        combined.extend(&self.hash()[..]);

        let mut reader = BitReaderBy11::new(&combined);

        let mut words: Vec<MnemonicIndex> = Vec::new();
        for _ in 0..t.mnemonic_count() {
            // here we are confident the entropy has enough bits, the
            // SHA256 hash has been appended in full
            let n = reader.read();
            words.push(MnemonicIndex::new(n).unwrap());
        }

        Mnemonics::from_mnemonics(words).unwrap()
    }
}
impl fmt::Display for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.as_ref()))
    }
}
impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.as_ref()))
    }
}
impl AsRef<[u8]> for Entropy {
    fn as_ref(&self) -> &[u8] {
        match self {
            &Entropy::Entropy12(ref b) => b.as_ref(),
            &Entropy::Entropy15(ref b) => b.as_ref(),
            &Entropy::Entropy18(ref b) => b.as_ref(),
            &Entropy::Entropy21(ref b) => b.as_ref(),
            &Entropy::Entropy24(ref b) => b.as_ref(),
        }
    }
}
impl Deref for Entropy {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        self.as_ref()
    }
}
impl Drop for Entropy {
    fn drop(&mut self) {
        securemem::zero(self.as_mut());
    }
}

/// Validate the given mnemonic phrase against the given dictionary.
///
/// This checks everything BIP39 has to say about a phrase: the word
/// count, that all the words belong to the dictionary and that the
/// embedded checksum matches the entropy bytes. The function has no
/// side effect and does not fail, any invalid input simply returns
/// `false`.
pub fn is_valid<D>(dic: &D, phrase: &str) -> bool
where
    D: dictionary::Language,
{
    match Mnemonics::from_string(dic, phrase) {
        Ok(mnemonics) => Entropy::from_mnemonics(&mnemonics).is_ok(),
        Err(_) => false,
    }
}

/// the expected size of a seed, in bytes.
pub const SEED_SIZE: usize = 64;

/// A BIP39 `Seed` object, will be used to generate a given HDWallet
/// root key.
///
/// See the module documentation for more details about how to use it
/// within the `chaindom` library.
pub struct Seed([u8; SEED_SIZE]);
impl Seed {
    /// Create a Seed by taking ownership of the given array.
    pub fn from_bytes(buf: [u8; SEED_SIZE]) -> Self {
        Seed(buf)
    }

    /// Create a Seed by copying the given slice into a new array.
    ///
    /// # Error
    ///
    /// This function may fail if the given slice's length is not
    /// exactly `SEED_SIZE` bytes.
    pub fn from_slice(buf: &[u8]) -> Result<Self> {
        if buf.len() != SEED_SIZE {
            return Err(Error::InvalidSeedSize(buf.len()));
        }
        let mut v = [0u8; SEED_SIZE];
        v[..].clone_from_slice(buf);
        Ok(Seed::from_bytes(v))
    }

    /// Get the seed from the given [`MnemonicString`] and the given
    /// password.
    ///
    /// The password can be empty. It is the PBKDF2 HMAC SHA512
    /// stretching of the phrase, salted with the password, as
    /// mandated by BIP39. Note that the checksum of the phrase is
    /// not involved here, a phrase with an invalid checksum still
    /// stretches to a seed.
    ///
    /// Note that the phrase and the password are expected to be in
    /// unicode NFKD normal form already, the stretching works on the
    /// raw bytes it is given.
    pub fn from_mnemonic_string(mnemonics: &MnemonicString, password: &[u8]) -> Self {
        let mut salt = Vec::from("mnemonic".as_bytes());
        salt.extend_from_slice(password);
        let mut mac = Hmac::new(Sha512::new(), mnemonics.0.as_bytes());
        let mut result = [0; SEED_SIZE];
        pbkdf2(&mut mac, &salt, 2048, &mut result);
        Self::from_bytes(result)
    }
}
impl PartialEq for Seed {
    fn eq(&self, other: &Self) -> bool {
        fixed_time_eq(self.as_ref(), other.as_ref())
    }
}
impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.as_ref()))
    }
}
impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.as_ref()))
    }
}
impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
impl Deref for Seed {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        self.as_ref()
    }
}
impl Drop for Seed {
    fn drop(&mut self) {
        securemem::zero(&mut self.0);
    }
}

/// A validated mnemonic phrase, with the words in the order they
/// were given and separated by the dictionary separator.
///
/// Validated here means every word belongs to the dictionary and the
/// word count is one of the supported ones, the checksum is not
/// verified. Use [`Entropy::from_mnemonics`] or [`is_valid`] for the
/// full check.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone)]
pub struct MnemonicString(String);
impl MnemonicString {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Create a `MnemonicString` from the given `String`, validating
    /// every word against the given dictionary.
    ///
    /// # Error
    ///
    /// This function may fail if one or more words are not present in
    /// the dictionary or if the number of words is not supported.
    pub fn new<D>(dic: &D, s: String) -> Result<Self>
    where
        D: dictionary::Language,
    {
        let _ = Mnemonics::from_string(dic, s.as_str())?;

        Ok(MnemonicString(s))
    }
}
impl Deref for MnemonicString {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        self.0.deref()
    }
}
impl fmt::Display for MnemonicString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// the maximum authorized value for a mnemonic. i.e. 2047
pub const MAX_MNEMONIC_VALUE: u16 = 2047;

/// Safe representation of a mnemonic word index (see
/// `MAX_MNEMONIC_VALUE`).
///
/// See `dictionary` module for more details.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct MnemonicIndex(pub u16);

impl MnemonicIndex {
    /// Smart constructor, validate the given value fits the mnemonic
    /// index boundaries (see `MAX_MNEMONIC_VALUE`).
    ///
    /// # Error
    ///
    /// This function may fail with `Error::MnemonicOutOfBound` if the
    /// given value is out of the valid range.
    pub fn new(m: u16) -> Result<Self> {
        if m <= MAX_MNEMONIC_VALUE {
            Ok(MnemonicIndex(m))
        } else {
            Err(Error::MnemonicOutOfBound(m))
        }
    }

    /// Lookup in the given dictionary the word for this mnemonic index.
    pub fn to_word<D>(self, dic: &D) -> String
    where
        D: dictionary::Language,
    {
        // the unwrap is safe as the `MnemonicIndex` is guaranteed to be
        // within the dictionary bounds
        dic.lookup_word(self).unwrap()
    }

    /// Lookup the mnemonic index of the given word in the dictionary.
    ///
    /// # Error
    ///
    /// This function may fail if the word is not a valid mnemonic in
    /// the given dictionary.
    pub fn from_word<D>(dic: &D, word: &str) -> Result<Self>
    where
        D: dictionary::Language,
    {
        let v = dic.lookup_mnemonic(word)?;
        Ok(v)
    }
}

/// Language agnostic mnemonic phrase representation, an ordered
/// sequence of `MnemonicIndex`.
///
/// This is a handy representation, it is language agnostic and allows
/// to work on the checksum and the entropy without a dictionary at
/// hand.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone)]
pub struct Mnemonics(Vec<MnemonicIndex>);

impl AsRef<[MnemonicIndex]> for Mnemonics {
    fn as_ref(&self) -> &[MnemonicIndex] {
        &self.0[..]
    }
}

impl Mnemonics {
    pub fn get_type(&self) -> Type {
        // the internal vector length is guaranteed valid by the
        // smart constructors
        Type::from_word_count(self.0.len()).unwrap()
    }

    /// Create a `Mnemonics` from the given phrase, looking up every
    /// word in the given dictionary.
    ///
    /// The phrase is split on the dictionary separator and is
    /// expected to be in unicode NFKD normal form already. Leading,
    /// trailing or repeated separators only produce empty tokens,
    /// they are skipped rather than looked up.
    pub fn from_string<D>(dic: &D, mnemonics: &str) -> Result<Self>
    where
        D: dictionary::Language,
    {
        let mut vec = vec![];

        for word in mnemonics.split(dic.separator()).filter(|w| !w.is_empty()) {
            vec.push(MnemonicIndex::from_word(dic, word)?);
        }

        Mnemonics::from_mnemonics(vec)
    }

    /// Create a `Mnemonics` from the given mnemonic indices.
    ///
    /// # Error
    ///
    /// This function may fail if the number of indices is not one of
    /// the supported word counts.
    pub fn from_mnemonics(mnemonics: Vec<MnemonicIndex>) -> Result<Self> {
        let _ = Type::from_word_count(mnemonics.len())?;
        Ok(Mnemonics(mnemonics))
    }

    /// Write the phrase in the given dictionary.
    pub fn to_string<D>(&self, dic: &D) -> MnemonicString
    where
        D: dictionary::Language,
    {
        let mut vec = String::new();
        let mut first = true;
        for m in self.0.iter() {
            if first {
                first = false;
            } else {
                vec.push_str(dic.separator());
            }
            vec.push_str(&m.to_word(dic))
        }
        MnemonicString(vec)
    }
}

pub mod dictionary {
    //! Language support for BIP39 implementations.
    //!
    //! We provide default dictionaries for the some common languages.
    //! This interface is exposed to allow users to implement custom
    //! dictionaries.
    //!
    //! Because this module is part of the `chaindom` crate and that we
    //! need to keep the dependencies as small as possible, we do not
    //! provide additional language support beside the default English.
    //!
    //! The words in the dictionaries are expected to be in unicode
    //! NFKD normal form, the lookup functions do not normalize their
    //! inputs. The default English word list is plain ASCII so the
    //! point is moot for it.

    use std::{error, fmt, result};

    use super::MnemonicIndex;

    /// Errors associated to a given language/dictionary
    #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
    pub enum Error {
        /// this means the given word is not in the Dictionary of the
        /// Language.
        MnemonicWordNotFoundInDictionary(String),
    }
    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                &Error::MnemonicWordNotFoundInDictionary(ref s) => {
                    write!(f, "Mnemonic word not found in dictionary \"{}\"", s)
                }
            }
        }
    }
    impl error::Error for Error {}

    /// wrapper for `dictionary` operations that may return an error
    pub type Result<T> = result::Result<T, Error>;

    /// trait to represent the the properties that needs to be associated to
    /// a given language and its dictionary of known mnemonic words.
    pub trait Language {
        fn name(&self) -> &'static str;
        fn separator(&self) -> &'static str;
        fn lookup_mnemonic(&self, word: &str) -> Result<MnemonicIndex>;
        fn lookup_word(&self, mnemonic: MnemonicIndex) -> Result<String>;
    }

    /// Default Dictionary basic support for the different main languages.
    /// This dictionary expect the inputs to have been normalized (UTF-8 NFKD).
    ///
    /// If you wish to implement support for non pre-normalized form you can
    /// create reuse this dictionary in a custom struct and implement support
    /// for [`Language`](./trait.Language.html) accordingly (_hint_: use
    /// [`unicode-normalization`](https://crates.io/crates/unicode-normalization)).
    pub struct DefaultDictionary {
        pub words: [&'static str; 2048],
        pub name: &'static str,
    }
    impl Language for DefaultDictionary {
        fn name(&self) -> &'static str {
            self.name
        }
        fn separator(&self) -> &'static str {
            " "
        }
        fn lookup_mnemonic(&self, word: &str) -> Result<MnemonicIndex> {
            match self.words.iter().position(|x| x == &word) {
                None => Err(Error::MnemonicWordNotFoundInDictionary(word.to_string())),
                Some(v) => {
                    Ok(
                        // it is safe to call unwrap as the returned index `v`
                        // won't be out of bound for a `MnemonicIndex`
                        // (won't be above 2047)
                        MnemonicIndex::new(v as u16).unwrap(),
                    )
                }
            }
        }
        fn lookup_word(&self, mnemonic: MnemonicIndex) -> Result<String> {
            Ok(unsafe { self.words.get_unchecked(mnemonic.0 as usize) }).map(|s| String::from(*s))
        }
    }

    /// default English dictionary as provided by the
    /// [BIP39 standard](https://github.com/bitcoin/bips/blob/master/bip-0039/english.txt)
    pub const ENGLISH: DefaultDictionary = DefaultDictionary {
        words: include!("bip39_english.txt"),
        name: "english",
    };
}
