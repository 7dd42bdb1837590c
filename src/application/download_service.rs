use std::path::{Path, PathBuf};

use futures::StreamExt;
use log::{debug, info, warn};
use tokio::io::AsyncWriteExt;

use crate::api::{AssetClient, AssetSource};
use crate::domain::{DownloadError, DownloadOutcome};
use crate::platform::{RfdSaveDialog, SaveDialog};

/// Saves a remote asset to a path the user picks.
///
/// Nothing here serializes concurrent calls; the overlay view disables its
/// download button while one is running.
#[derive(Clone)]
pub struct AssetDownloadService<D = RfdSaveDialog, S = AssetClient> {
    dialog: D,
    source: S,
}

impl<D: SaveDialog, S: AssetSource> AssetDownloadService<D, S> {
    pub fn new(dialog: D, source: S) -> Self {
        Self { dialog, source }
    }

    /// Never fails: every error is folded into the returned outcome.
    pub async fn download_asset(&self, url: &str, suggested_filename: &str) -> DownloadOutcome {
        let path = match self.dialog.choose_save_path(suggested_filename).await {
            Ok(Some(path)) => path,
            Ok(None) => {
                info!("Download of {} canceled at save dialog", url);
                return DownloadOutcome::canceled();
            }
            Err(e) => {
                let e = DownloadError::from(e);
                warn!("Download of {} failed: {}", url, e);
                return DownloadOutcome::failed(e.to_string());
            }
        };

        info!("Downloading {} to {}", url, path.display());
        match self.save_to(url, &path).await {
            Ok(written) => {
                info!("Saved {} bytes to {}", written, path.display());
                DownloadOutcome::saved(path)
            }
            Err(e) => {
                warn!("Download of {} failed: {}", url, e);
                discard_partial(&path).await;
                DownloadOutcome::failed(e.to_string())
            }
        }
    }

    async fn save_to(&self, url: &str, path: &Path) -> Result<u64, DownloadError> {
        let mut file = tokio::fs::File::create(path)
            .await
            .map_err(DownloadError::CreateFile)?;

        let (total_size, mut stream) = self.source.open(url).await?;
        if let Some(total_size) = total_size {
            debug!("Expecting {} bytes from {}", total_size, url);
        }

        let mut written = 0u64;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await.map_err(DownloadError::Write)?;
            written += chunk.len() as u64;
        }

        file.flush().await.map_err(DownloadError::Write)?;
        Ok(written)
    }
}

/// Best effort; a leftover partial file is not worth failing over.
async fn discard_partial(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        debug!("Could not remove partial file {}: {}", path.display(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ByteStream, FetchError};
    use crate::domain::DialogError;
    use bytes::Bytes;
    use std::future::Future;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone)]
    enum FakeDialog {
        Pick(PathBuf),
        Cancel,
        Broken,
    }

    impl SaveDialog for FakeDialog {
        fn choose_save_path(
            &self,
            _suggested_filename: &str,
        ) -> impl Future<Output = Result<Option<PathBuf>, DialogError>> + Send {
            let result = match self {
                FakeDialog::Pick(path) => Ok(Some(path.clone())),
                FakeDialog::Cancel => Ok(None),
                FakeDialog::Broken => Err(DialogError("no portal available".to_string())),
            };
            async move { result }
        }
    }

    /// Yields the given chunks, then optionally fails mid-stream.
    #[derive(Clone, Default)]
    struct FakeSource {
        chunks: Vec<&'static [u8]>,
        fail_after: bool,
        opened: Arc<AtomicUsize>,
    }

    impl AssetSource for FakeSource {
        async fn open(&self, _url: &str) -> crate::api::client::Result<(Option<u64>, ByteStream)> {
            self.opened.fetch_add(1, Ordering::SeqCst);

            let mut items: Vec<crate::api::client::Result<Bytes>> = self
                .chunks
                .iter()
                .copied()
                .map(|c| Ok(Bytes::from_static(c)))
                .collect();
            if self.fail_after {
                items.push(Err(FetchError::Interrupted("connection reset".to_string())));
            }

            Ok((None, futures::stream::iter(items).boxed()))
        }
    }

    #[tokio::test]
    async fn test_download_writes_streamed_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.bin");

        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/a.bin")
            .with_status(200)
            .with_body([0x01u8, 0x02, 0x03])
            .create_async()
            .await;

        let service =
            AssetDownloadService::new(FakeDialog::Pick(target.clone()), AssetClient::default());
        let outcome = service
            .download_asset(&format!("{}/a.bin", server.url()), "a.bin")
            .await;

        assert_eq!(outcome, DownloadOutcome::saved(target.clone()));
        assert_eq!(std::fs::read(&target).unwrap(), vec![0x01, 0x02, 0x03]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_cancel_skips_network() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/a.bin")
            .expect(0)
            .create_async()
            .await;

        let service = AssetDownloadService::new(FakeDialog::Cancel, AssetClient::default());
        let outcome = service
            .download_asset(&format!("{}/a.bin", server.url()), "a.bin")
            .await;

        assert_eq!(outcome, DownloadOutcome::failed("Download canceled"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_cancel_opens_no_stream() {
        let source = FakeSource::default();
        let service = AssetDownloadService::new(FakeDialog::Cancel, source.clone());

        let outcome = service.download_asset("https://example.com/a.bin", "a.bin").await;

        assert!(outcome.is_canceled());
        assert_eq!(source.opened.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_dialog_failure_is_reported() {
        let service = AssetDownloadService::new(FakeDialog::Broken, FakeSource::default());

        let outcome = service.download_asset("https://example.com/a.bin", "a.bin").await;

        assert_eq!(
            outcome,
            DownloadOutcome::failed("Save dialog failed: no portal available")
        );
    }

    #[tokio::test]
    async fn test_interrupted_stream_removes_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("partial.bin");
        let source = FakeSource {
            chunks: vec![&b"abc"[..], &b"def"[..]],
            fail_after: true,
            ..Default::default()
        };

        let service = AssetDownloadService::new(FakeDialog::Pick(target.clone()), source.clone());
        let outcome = service.download_asset("https://example.com/a.bin", "a.bin").await;

        assert!(!outcome.success);
        assert_eq!(
            outcome.message.as_deref(),
            Some("Stream interrupted: connection reset")
        );
        assert_eq!(source.opened.load(Ordering::SeqCst), 1);
        assert!(!target.exists());
    }

    #[tokio::test]
    async fn test_connection_failure_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("refused.bin");

        // Grab a free port, then close it so the connect is refused
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let service =
            AssetDownloadService::new(FakeDialog::Pick(target.clone()), AssetClient::default());
        let outcome = service
            .download_asset(&format!("http://{}/a.bin", addr), "a.bin")
            .await;

        assert!(!outcome.success);
        assert!(outcome.path.is_none());
        assert!(outcome.message.unwrap().starts_with("HTTP request failed"));
        assert!(!target.exists());
    }

    #[tokio::test]
    async fn test_error_status_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing.bin");

        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/missing.bin")
            .with_status(404)
            .with_body("not found")
            .create_async()
            .await;

        let service =
            AssetDownloadService::new(FakeDialog::Pick(target.clone()), AssetClient::default());
        let outcome = service
            .download_asset(&format!("{}/missing.bin", server.url()), "missing.bin")
            .await;

        assert_eq!(
            outcome,
            DownloadOutcome::failed("Server responded with 404 Not Found")
        );
        assert!(!target.exists());
    }

    #[tokio::test]
    async fn test_unsupported_scheme_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("ftp.bin");

        let service =
            AssetDownloadService::new(FakeDialog::Pick(target.clone()), AssetClient::default());
        let outcome = service.download_asset("ftp://example.com/a.bin", "a.bin").await;

        assert_eq!(outcome, DownloadOutcome::failed("Unsupported URL scheme: ftp"));
        assert!(!target.exists());
    }

    #[tokio::test]
    async fn test_unwritable_destination() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("no-such-dir").join("out.bin");

        let source = FakeSource::default();
        let service = AssetDownloadService::new(FakeDialog::Pick(target.clone()), source.clone());
        let outcome = service.download_asset("https://example.com/a.bin", "a.bin").await;

        assert!(!outcome.success);
        assert!(outcome.message.unwrap().starts_with("Failed to create file"));
        assert_eq!(source.opened.load(Ordering::SeqCst), 0);
    }
}
