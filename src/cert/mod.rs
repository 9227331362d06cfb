//! Decoding of X.509 certificates found in attestation statements and
//! FIDO metadata.

mod decoder;
mod types;

pub use self::decoder::{
    armor, decode, decode_all, decode_der, CertificateDecodeError, PEM_BEGIN_CERTIFICATE,
    PEM_END_CERTIFICATE,
};
pub use self::types::{
    CertificateExtension, DecodedCertificate, DistinguishedName, NameAttribute, PublicKeyInfo,
    Validity,
};
