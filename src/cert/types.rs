use std::fmt;

use ring::digest;
use x509_parser::prelude::{X509Certificate, X509Name};

const OID_COMMON_NAME: &str = "2.5.4.3";
const OID_ORGANIZATION: &str = "2.5.4.10";

/// An X.509 certificate decoded into owned values.
///
/// Nothing here has been validated beyond structure: trust, expiry and the
/// certificate's own signature are left for the caller to check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedCertificate {
    /// X.509 version number, e.g. `3`
    pub version: u32,
    /// Big-endian serial number, as encoded
    pub serial: Vec<u8>,
    /// OID of the algorithm the issuer signed with
    pub signature_algorithm: String,
    pub issuer: DistinguishedName,
    pub subject: DistinguishedName,
    pub validity: Validity,
    pub public_key: PublicKeyInfo,
    pub extensions: Vec<CertificateExtension>,
    pub signature: Vec<u8>,
    /// The complete DER encoding
    pub der: Vec<u8>,
}

/// Validity period, as Unix timestamps (seconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validity {
    pub not_before: i64,
    pub not_after: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKeyInfo {
    /// OID of the key algorithm, e.g. `1.2.840.10045.2.1` for EC keys
    pub algorithm: String,
    /// The subject public key bits. For EC keys this is the SEC1 encoded point.
    pub key: Vec<u8>,
    /// The DER encoded SubjectPublicKeyInfo
    pub der: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateExtension {
    pub oid: String,
    pub critical: bool,
    /// The extension's DER encoded value (contents of the extnValue OCTET STRING)
    pub value: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameAttribute {
    pub oid: String,
    /// String value, or hex of the raw value for non-string attribute types
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistinguishedName {
    rendered: String,
    pub attributes: Vec<NameAttribute>,
}

impl DistinguishedName {
    /// Value of the first attribute of the given type
    pub fn attribute(&self, oid: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.oid == oid)
            .map(|attr| attr.value.as_str())
    }

    pub fn common_name(&self) -> Option<&str> {
        self.attribute(OID_COMMON_NAME)
    }

    pub fn organization(&self) -> Option<&str> {
        self.attribute(OID_ORGANIZATION)
    }
}

impl fmt::Display for DistinguishedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl<'a> From<&X509Name<'a>> for DistinguishedName {
    fn from(name: &X509Name<'a>) -> Self {
        let attributes = name
            .iter_attributes()
            .map(|attr| NameAttribute {
                oid: attr.attr_type().to_id_string(),
                value: attr
                    .as_str()
                    .map(str::to_owned)
                    .unwrap_or_else(|_| hex::encode(&attr.attr_value().data)),
            })
            .collect();
        DistinguishedName {
            rendered: name.to_string(),
            attributes,
        }
    }
}

impl DecodedCertificate {
    pub(crate) fn from_x509(cert: &X509Certificate<'_>, der: &[u8]) -> Self {
        let spki = cert.public_key();
        DecodedCertificate {
            version: cert.version().0.saturating_add(1),
            serial: cert.raw_serial().to_vec(),
            signature_algorithm: cert.signature_algorithm.algorithm.to_id_string(),
            issuer: cert.issuer().into(),
            subject: cert.subject().into(),
            validity: Validity {
                not_before: cert.validity().not_before.timestamp(),
                not_after: cert.validity().not_after.timestamp(),
            },
            public_key: PublicKeyInfo {
                algorithm: spki.algorithm.algorithm.to_id_string(),
                key: spki.subject_public_key.data.to_vec(),
                der: spki.raw.to_vec(),
            },
            extensions: cert
                .extensions()
                .iter()
                .map(|ext| CertificateExtension {
                    oid: ext.oid.to_id_string(),
                    critical: ext.critical,
                    value: ext.value.to_vec(),
                })
                .collect(),
            signature: cert.signature_value.data.to_vec(),
            der: der.to_vec(),
        }
    }

    /// Hex encoded SHA-1 of the subject public key bits.
    ///
    /// FIDO metadata identifies U2F authenticators by this value.
    /// [See more](https://datatracker.ietf.org/doc/html/rfc5280#section-4.2.1.2)
    pub fn key_identifier(&self) -> String {
        let hash = digest::digest(&digest::SHA1_FOR_LEGACY_USE_ONLY, &self.public_key.key);
        hex::encode(hash.as_ref())
    }

    pub fn extension(&self, oid: &str) -> Option<&CertificateExtension> {
        self.extensions.iter().find(|ext| ext.oid == oid)
    }

    /// Borrows the certificate as an [`X509Certificate`], for callers that
    /// need x509-parser's view (e.g. for chain validation).
    pub fn x509(&self) -> Result<X509Certificate<'_>, super::CertificateDecodeError> {
        super::decoder::parse_der(&self.der)
    }
}
