//! COSE algorithm identifiers, and their resolution to hash/signature primitives.
//!
//! [See more](https://datatracker.ietf.org/doc/html/rfc9053)

mod registry;
mod resolver;
mod ring;

pub use self::registry::{
    entries, name_for, AlgorithmName, CoseAlgorithmIdentifier, COSE_ALGORITHMS,
};
pub use self::resolver::{
    resolve, AlgorithmError, CoseAlgorithmPair, HashAlgorithm, SignatureAlgorithm,
    SupportedAlgorithm,
};
pub use self::ring::{is_supported_alg, supported_algorithms};
