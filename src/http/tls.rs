//! TLS trust configuration for the agent connection.

use crate::config::CaCertificate;
use crate::error::KnobzError;
use reqwest::{Certificate, ClientBuilder};

/// Load the configured trust anchor(s).
///
/// File-backed certificates are read from disk here, so a missing file
/// fails client construction rather than the first request. PEM input must
/// hold at least one certificate.
pub(crate) fn load_certificates(ca: &CaCertificate) -> Result<Vec<Certificate>, KnobzError> {
    match ca {
        CaCertificate::Pem(pem) => pem_bundle(pem.as_bytes()),
        CaCertificate::Der(der) => Certificate::from_der(der)
            .map(|cert| vec![cert])
            .map_err(|e| KnobzError::Config(format!("Invalid CA certificate: {}", e))),
        CaCertificate::File(path) => {
            let pem = std::fs::read(path).map_err(|e| {
                KnobzError::Config(format!(
                    "Failed to read CA certificate {}: {}",
                    path.display(),
                    e
                ))
            })?;
            tracing::debug!(path = %path.display(), "Loaded CA certificate");
            pem_bundle(&pem)
        }
    }
}

fn pem_bundle(pem: &[u8]) -> Result<Vec<Certificate>, KnobzError> {
    let certs = Certificate::from_pem_bundle(pem)
        .map_err(|e| KnobzError::Config(format!("Invalid CA certificate: {}", e)))?;
    if certs.is_empty() {
        return Err(KnobzError::Config(
            "CA certificate PEM contains no certificates".to_string(),
        ));
    }
    Ok(certs)
}

/// Trust only `ca` when one is given; otherwise keep the platform roots.
pub(crate) fn apply_trust_anchor(
    builder: ClientBuilder,
    ca: Option<&CaCertificate>,
) -> Result<ClientBuilder, KnobzError> {
    let Some(ca) = ca else {
        return Ok(builder);
    };

    let certs = load_certificates(ca)?;
    tracing::debug!(count = certs.len(), "Trusting configured CA only");
    Ok(certs
        .into_iter()
        .fold(builder.tls_built_in_root_certs(false), |b, cert| {
            b.add_root_certificate(cert)
        }))
}
