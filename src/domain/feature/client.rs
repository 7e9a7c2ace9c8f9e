//! Features sub-client: flag listing under the configured prefix.

use crate::client::KnobzClient;
use crate::domain::feature::convert::into_features;
use crate::domain::feature::wire::KvEntry;
use crate::domain::feature::Feature;
use crate::error::KnobzError;

pub struct Features<'a> {
    pub(crate) client: &'a KnobzClient,
}

impl<'a> Features<'a> {
    /// Fetch every flag under the prefix, in store key order.
    ///
    /// Only transport failures are returned as errors; a missing prefix is
    /// an empty list and undecodable values become id-only records.
    pub async fn list(&self) -> Result<Vec<Feature>, KnobzError> {
        let entries = self.raw_entries().await?;
        let features = into_features(
            &entries,
            &self.client.prefix,
            self.client.config.strip_file_extension,
        );
        tracing::debug!(
            prefix = %self.client.prefix,
            entries = entries.len(),
            features = features.len(),
            "Fetched features"
        );
        Ok(features)
    }

    /// The raw listing, folder marker included.
    pub async fn raw_entries(&self) -> Result<Vec<KvEntry>, KnobzError> {
        let entries = self.client.http.list_entries(&self.client.prefix).await?;
        Ok(entries)
    }
}
