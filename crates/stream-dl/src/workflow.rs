//! The download-and-deliver operations
//!
//! Each operation is a linear sequence: acquire an artifact, check it, hand
//! it to a delivery action. The only state shared across invocations is the
//! progress subscription installed on the storage provider.

use log::info;
use reqwest::Client;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::delivery::{FileOpener, SharePresenter, ShareRequest};
use crate::error::FetchError;
use crate::http;
use crate::storage::{Directory, DownloadRequest, StorageProvider};

/// Orchestrates the three acquisition-and-delivery strategies.
pub struct DownloadWorkflow {
    client: Client,
    storage: Arc<dyn StorageProvider>,
    share: Arc<dyn SharePresenter>,
    opener: Arc<dyn FileOpener>,
    /// At most one streamed acquisition runs at a time; this keeps the
    /// process-wide progress state unambiguous and stops two transfers from
    /// racing on the same cache artifact.
    stream_guard: Mutex<()>,
}

impl DownloadWorkflow {
    pub fn new(
        storage: Arc<dyn StorageProvider>,
        share: Arc<dyn SharePresenter>,
        opener: Arc<dyn FileOpener>,
    ) -> Self {
        Self {
            client: Client::new(),
            storage,
            share,
            opener,
            stream_guard: Mutex::new(()),
        }
    }

    /// Streamed download of a (potentially large) file, then share.
    ///
    /// Bytes go straight from the network to cache storage, with progress
    /// reported on the storage provider's subscription while the transfer
    /// runs.
    pub async fn download_and_share(
        &self,
        url: &str,
        file_name: &str,
    ) -> Result<PathBuf, FetchError> {
        let _guard = self.stream_guard.lock().await;

        let artifact = self
            .storage
            .download_file(DownloadRequest {
                url: url.to_string(),
                directory: Directory::Cache,
                path: file_name.to_string(),
                progress: true,
            })
            .await?;
        let path = Self::require_artifact(artifact, url)?;

        info!("sharing {}", path.display());
        self.share.share(ShareRequest::for_file(path.clone())).await?;
        Ok(path)
    }

    /// In-memory download of a small file, then share.
    ///
    /// The full body is fetched into memory and written verbatim as raw
    /// bytes; no progress is reported on this path. The write result is
    /// used as-is - only I/O and transport failures abort.
    pub async fn get_and_share(&self, url: &str, file_name: &str) -> Result<PathBuf, FetchError> {
        let data = http::fetch_bytes(&self.client, url).await?;
        let uri = self
            .storage
            .write_file(Directory::Cache, file_name, &data)
            .await?;

        info!("sharing {}", uri.display());
        self.share.share(ShareRequest::for_file(uri.clone())).await?;
        Ok(uri)
    }

    /// Download a file, then open it with the platform's default viewer.
    pub async fn download_and_open(
        &self,
        url: &str,
        file_name: &str,
    ) -> Result<PathBuf, FetchError> {
        let _guard = self.stream_guard.lock().await;

        let artifact = self
            .storage
            .download_file(DownloadRequest {
                url: url.to_string(),
                directory: Directory::Cache,
                path: file_name.to_string(),
                progress: false,
            })
            .await?;
        let path = Self::require_artifact(artifact, url)?;

        info!("opening {}", path.display());
        self.opener.open_with_default(&path).await?;
        Ok(path)
    }

    /// An acquisition only counts if the provider produced a non-empty path.
    fn require_artifact(artifact: Option<PathBuf>, url: &str) -> Result<PathBuf, FetchError> {
        match artifact {
            Some(path) if !path.as_os_str().is_empty() => Ok(path),
            _ => Err(FetchError::Acquisition {
                url: url.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DownloadWorkflow;
    use crate::delivery::{FileOpener, SharePresenter, ShareRequest, SHARE_TEXT, SHARE_TITLE};
    use crate::error::FetchError;
    use crate::storage::{Directory, DownloadRequest, StorageProvider};
    use async_trait::async_trait;
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Storage double returning a scripted download result and recording writes.
    struct StubStorage {
        download_result: Option<PathBuf>,
        writes: Mutex<Vec<(String, Vec<u8>)>>,
    }

    impl StubStorage {
        fn downloads_to(path: &str) -> Self {
            Self {
                download_result: Some(PathBuf::from(path)),
                writes: Mutex::new(Vec::new()),
            }
        }

        fn produces_nothing() -> Self {
            Self {
                download_result: None,
                writes: Mutex::new(Vec::new()),
            }
        }

        fn produces_empty_path() -> Self {
            Self {
                download_result: Some(PathBuf::new()),
                writes: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl StorageProvider for StubStorage {
        async fn download_file(
            &self,
            _request: DownloadRequest,
        ) -> Result<Option<PathBuf>, FetchError> {
            // Transport "succeeded"; only the artifact path varies.
            Ok(self.download_result.clone())
        }

        async fn write_file(
            &self,
            _directory: Directory,
            path: &str,
            data: &[u8],
        ) -> Result<PathBuf, FetchError> {
            self.writes
                .lock()
                .unwrap()
                .push((path.to_string(), data.to_vec()));
            Ok(PathBuf::from("/cache").join(path))
        }
    }

    #[derive(Default)]
    struct RecordingShare {
        requests: Mutex<Vec<ShareRequest>>,
    }

    #[async_trait]
    impl SharePresenter for RecordingShare {
        async fn share(&self, request: ShareRequest) -> Result<(), FetchError> {
            self.requests.lock().unwrap().push(request);
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingOpener {
        opened: Mutex<Vec<PathBuf>>,
    }

    #[async_trait]
    impl FileOpener for RecordingOpener {
        async fn open_with_default(&self, path: &Path) -> Result<(), FetchError> {
            self.opened.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }
    }

    fn workflow(
        storage: Arc<StubStorage>,
    ) -> (DownloadWorkflow, Arc<RecordingShare>, Arc<RecordingOpener>) {
        let share = Arc::new(RecordingShare::default());
        let opener = Arc::new(RecordingOpener::default());
        let workflow = DownloadWorkflow::new(storage, share.clone(), opener.clone());
        (workflow, share, opener)
    }

    #[tokio::test]
    async fn download_and_share_invokes_share_once_with_fixed_caption() {
        let (workflow, share, opener) =
            workflow(Arc::new(StubStorage::downloads_to("/cache/mypdf.pdf")));

        let path = workflow
            .download_and_share("https://example.com/big.pdf", "mypdf.pdf")
            .await
            .unwrap();

        let requests = share.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].title, SHARE_TITLE);
        assert_eq!(requests[0].text, SHARE_TEXT);
        assert_eq!(requests[0].files, vec![path]);
        assert!(opener.opened.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn download_and_share_fails_on_absent_path_before_sharing() {
        let (workflow, share, _opener) = workflow(Arc::new(StubStorage::produces_nothing()));

        let err = workflow
            .download_and_share("https://example.com/big.pdf", "mypdf.pdf")
            .await
            .unwrap_err();

        assert!(matches!(
            &err,
            FetchError::Acquisition { url } if url == "https://example.com/big.pdf"
        ));
        assert_eq!(err.to_string(), "Unable to download https://example.com/big.pdf");
        assert!(share.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn download_and_share_treats_empty_path_as_absent() {
        let (workflow, share, _opener) = workflow(Arc::new(StubStorage::produces_empty_path()));

        let err = workflow
            .download_and_share("https://example.com/big.pdf", "mypdf.pdf")
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Acquisition { .. }));
        assert!(share.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_and_share_writes_fetched_bytes_and_shares_the_uri() {
        let server = MockServer::start().await;
        let payload = b"0123456789".to_vec();
        Mock::given(method("GET"))
            .and(path("/dummy.pdf"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(payload.clone()))
            .mount(&server)
            .await;

        let storage = Arc::new(StubStorage::produces_nothing());
        let (workflow, share, opener) = workflow(storage.clone());

        let uri = workflow
            .get_and_share(&format!("{}/dummy.pdf", server.uri()), "my-pdf.pdf")
            .await
            .unwrap();

        let writes = storage.writes.lock().unwrap().clone();
        assert_eq!(writes, vec![("my-pdf.pdf".to_string(), payload)]);

        let requests = share.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].files, vec![uri]);
        assert!(opener.opened.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn download_and_open_invokes_opener_once_and_never_shares() {
        let (workflow, share, opener) =
            workflow(Arc::new(StubStorage::downloads_to("/cache/mypdf.pdf")));

        let path = workflow
            .download_and_open("https://example.com/dummy.pdf", "mypdf.pdf")
            .await
            .unwrap();

        assert_eq!(*opener.opened.lock().unwrap(), vec![path]);
        assert!(share.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn download_and_open_fails_on_absent_path_before_opening() {
        let (workflow, share, opener) = workflow(Arc::new(StubStorage::produces_nothing()));

        let err = workflow
            .download_and_open("https://example.com/dummy.pdf", "mypdf.pdf")
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Acquisition { .. }));
        assert!(opener.opened.lock().unwrap().is_empty());
        assert!(share.requests.lock().unwrap().is_empty());
    }
}
