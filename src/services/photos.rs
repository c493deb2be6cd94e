// SPDX-License-Identifier: MIT

//! Progress photo storage: a two-phase saga over blob and metadata.
//!
//! Upload is blob first, then the metadata document; the metadata document
//! is authoritative — a blob with no metadata is invisible to every
//! listing. When the metadata write fails, a compensating blob delete is
//! attempted; if the app crashes between phases, the orphaned blob stays
//! until a bucket audit removes it.
//!
//! Deletion runs in reverse: metadata first, then blob. A late blob-delete
//! failure can orphan a blob but never leaves metadata pointing at a
//! deleted file.

use crate::backend::{collections, execute_with_retry, BackendClient, Query};
use crate::error::Result;
use crate::models::{NewProgressPhoto, ProgressPhoto};

/// Photo metadata payload with the blob handle filled in.
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct PhotoDocument<'a> {
    #[serde(flatten)]
    data: &'a NewProgressPhoto,
    file_id: &'a str,
    file_url: &'a str,
}

/// Progress photo upload, listing, and deletion.
#[derive(Clone)]
pub struct PhotoService {
    client: BackendClient,
}

impl PhotoService {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// Upload a photo blob and record its metadata.
    pub async fn upload_progress_photo(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        data: &NewProgressPhoto,
    ) -> Result<ProgressPhoto> {
        tracing::debug!(file_name, user_id = %data.user_id, "Uploading progress photo");

        // Phase 1: blob. The clone is one image's bytes, held only for the
        // duration of the retry loop.
        let file = execute_with_retry(|| {
            self.client.create_file(
                collections::PROGRESS_PHOTOS_BUCKET,
                file_name,
                "image/jpeg",
                bytes.clone(),
            )
        })
        .await?;

        let file_url = self
            .client
            .file_view_url(collections::PROGRESS_PHOTOS_BUCKET, &file.id);

        // Phase 2: metadata document (authoritative).
        let document = PhotoDocument {
            data,
            file_id: &file.id,
            file_url: &file_url,
        };
        let created: Result<ProgressPhoto> = execute_with_retry(|| {
            self.client.create_document(
                collections::DATABASE_ID,
                collections::PROGRESS_PHOTOS,
                &document,
            )
        })
        .await;

        match created {
            Ok(photo) => {
                tracing::info!(photo_id = %photo.id, file_id = %file.id, "Progress photo uploaded");
                Ok(photo)
            }
            Err(err) => {
                // Compensate: without metadata the blob is unreachable.
                tracing::warn!(
                    file_id = %file.id,
                    error = %err,
                    "Photo metadata write failed, removing uploaded blob"
                );
                if let Err(cleanup_err) = self
                    .client
                    .delete_file(collections::PROGRESS_PHOTOS_BUCKET, &file.id)
                    .await
                {
                    tracing::warn!(
                        file_id = %file.id,
                        error = %cleanup_err,
                        "Compensating blob delete failed, blob is orphaned"
                    );
                }
                Err(err)
            }
        }
    }

    /// All progress photos for a user, newest first.
    pub async fn user_progress_photos(&self, user_id: &str) -> Result<Vec<ProgressPhoto>> {
        let queries = [
            Query::equal("userId", user_id),
            Query::order_desc("uploadedAt"),
        ];
        let list = execute_with_retry(|| {
            self.client.list_documents(
                collections::DATABASE_ID,
                collections::PROGRESS_PHOTOS,
                &queries,
            )
        })
        .await?;
        Ok(list.documents)
    }

    /// Delete a progress photo: metadata document, then blob.
    pub async fn delete_progress_photo(&self, photo_id: &str, file_id: &str) -> Result<()> {
        execute_with_retry(|| {
            self.client.delete_document(
                collections::DATABASE_ID,
                collections::PROGRESS_PHOTOS,
                photo_id,
            )
        })
        .await?;

        if let Err(err) = execute_with_retry(|| {
            self.client
                .delete_file(collections::PROGRESS_PHOTOS_BUCKET, file_id)
        })
        .await
        {
            // Metadata is already gone; the photo no longer appears
            // anywhere. Report the dangling blob to the caller.
            tracing::warn!(file_id, error = %err, "Photo blob delete failed after metadata delete");
            return Err(err);
        }

        tracing::info!(photo_id, file_id, "Progress photo deleted");
        Ok(())
    }
}
