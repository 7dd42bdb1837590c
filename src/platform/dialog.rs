use std::future::Future;
use std::path::PathBuf;

use super::SaveDialog;
use crate::domain::DialogError;

/// Native save dialog backed by rfd.
#[derive(Debug, Clone, Copy, Default)]
pub struct RfdSaveDialog;

impl SaveDialog for RfdSaveDialog {
    fn choose_save_path(
        &self,
        suggested_filename: &str,
    ) -> impl Future<Output = Result<Option<PathBuf>, DialogError>> + Send {
        let suggested_filename = suggested_filename.to_string();

        async move {
            let path = rfd::AsyncFileDialog::new()
                .set_file_name(suggested_filename)
                .add_filter("All Files", &["*"])
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf());

            Ok(path)
        }
    }
}
