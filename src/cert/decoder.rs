use thiserror::Error;
use tracing::{debug, instrument};
use x509_parser::{
    error::{PEMError, X509Error},
    nom,
    pem::parse_x509_pem,
    prelude::{FromDer, X509Certificate},
    x509::X509Version,
};

use super::types::DecodedCertificate;

pub const PEM_BEGIN_CERTIFICATE: &str = "-----BEGIN CERTIFICATE-----";
pub const PEM_END_CERTIFICATE: &str = "-----END CERTIFICATE-----";

/// An error that occurs while decoding a certificate
#[derive(Debug, Error)]
pub enum CertificateDecodeError {
    #[error("Certificate body is not valid UTF-8")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("Invalid PEM certificate: {0}")]
    Pem(#[source] PEMError),

    #[error("Invalid DER certificate: {0}")]
    Der(#[source] X509Error),

    #[error("Certificate DER is truncated")]
    Incomplete,

    #[error("{0} trailing bytes after certificate DER")]
    TrailingData(usize),

    #[error("Certificate {index}: {source}")]
    AtIndex {
        index: usize,
        #[source]
        source: Box<CertificateDecodeError>,
    },
}

/// Wraps a bare base64 certificate body in PEM armor
pub fn armor(body: &str) -> Vec<u8> {
    format!("{PEM_BEGIN_CERTIFICATE}\n{body}\n{PEM_END_CERTIFICATE}").into_bytes()
}

/// Decodes a base64 certificate body with no PEM armor, as embedded in
/// attestation statements and metadata statements.
///
/// The body may be given as text or as the bytes of that text; it is never
/// interpreted as binary DER (see [`decode_der`] for that).
#[instrument(skip(body), level = "debug")]
pub fn decode(body: impl AsRef<[u8]>) -> Result<DecodedCertificate, CertificateDecodeError> {
    let body = std::str::from_utf8(body.as_ref())?;
    let pem = armor(body);
    let (_, pem) = parse_x509_pem(&pem).map_err(|err| {
        let err = match err {
            nom::Err::Incomplete(_) => PEMError::IncompletePEM,
            nom::Err::Error(err) | nom::Err::Failure(err) => err,
        };
        debug!(?err, "Couldn't parse PEM certificate");
        CertificateDecodeError::Pem(err)
    })?;
    decode_der(&pem.contents)
}

/// Decodes a DER encoded certificate, e.g. an `x5c` entry
#[instrument(skip(der), level = "debug")]
pub fn decode_der(der: &[u8]) -> Result<DecodedCertificate, CertificateDecodeError> {
    let cert = parse_der(der)?;
    Ok(DecodedCertificate::from_x509(&cert, der))
}

/// Decodes a list of base64 certificate bodies, failing on the first
/// invalid one.
pub fn decode_all<I, B>(bodies: I) -> Result<Vec<DecodedCertificate>, CertificateDecodeError>
where
    I: IntoIterator<Item = B>,
    B: AsRef<[u8]>,
{
    bodies
        .into_iter()
        .enumerate()
        .map(|(index, body)| {
            decode(body).map_err(|source| CertificateDecodeError::AtIndex {
                index,
                source: Box::new(source),
            })
        })
        .collect()
}

pub(crate) fn parse_der(der: &[u8]) -> Result<X509Certificate<'_>, CertificateDecodeError> {
    let (rest, cert) = X509Certificate::from_der(der).map_err(|err| {
        debug!(?err, "Couldn't parse DER certificate");
        match err {
            nom::Err::Incomplete(_) => CertificateDecodeError::Incomplete,
            nom::Err::Error(err) | nom::Err::Failure(err) => CertificateDecodeError::Der(err),
        }
    })?;
    if !rest.is_empty() {
        debug!(trailing = rest.len(), "Certificate DER has trailing data");
        return Err(CertificateDecodeError::TrailingData(rest.len()));
    }
    // only v1 and v3 certificates are issued in practice
    let version = cert.version();
    if version != X509Version::V1 && version != X509Version::V3 {
        debug!(version = version.0, "Unsupported certificate version");
        return Err(CertificateDecodeError::Der(X509Error::InvalidVersion));
    }
    Ok(cert)
}
