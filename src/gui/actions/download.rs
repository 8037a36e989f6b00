// src/gui/actions/download.rs
use crate::{gui::app::App, presenter::DownloadFormat};

/// Save the full question set (filter ignored) into the download directory.
pub fn download(app: &mut App, format: DownloadFormat) {
    let view = app.view();
    let total = view.questions().len();
    let dir = &app.state.options.view.download_dir;

    logf!(
        "Download: Begin format={:?} rows={} (showing {}, filter={:?})",
        format,
        total,
        view.visible().len(),
        view.difficulty()
    );

    let res = view
        .download(format)
        .and_then(|d| {
            logd!("Download: {} ({}, {} bytes)", d.file_name, d.mime, d.contents.len());
            Ok(d.save_in(dir)?)
        });

    let status_msg = match res {
        Ok(path) => {
            logf!("Download: OK rows={} → {}", total, path.display());
            format!("Saved {} question(s) to {}", total, path.display())
        }
        Err(e) => {
            loge!("Download: Error: {}", e);
            format!("Download error: {e}")
        }
    };

    app.status(status_msg);
}
