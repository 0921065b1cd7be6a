//! Background photo decoding.
//!
//! Files are decoded off the render thread; finished images are drained once
//! per frame so registry mutation and re-layout stay on the main thread.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use anyhow::Context;

/// Longest edge of an uploaded photo once resident on the GPU.
pub const MAX_PHOTO_EDGE: u32 = 512;

pub struct DecodedPhoto {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

pub struct PhotoLoader {
    tx: Sender<DecodedPhoto>,
    rx: Receiver<DecodedPhoto>,
}

impl Default for PhotoLoader {
    fn default() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }
}

impl PhotoLoader {
    /// Decode `paths` in order on a worker thread. Failures are logged and skipped.
    pub fn load(&self, paths: Vec<PathBuf>) {
        if paths.is_empty() {
            return;
        }
        let tx = self.tx.clone();
        let spawned = thread::Builder::new()
            .name("photo-decoder".into())
            .spawn(move || {
                for path in paths {
                    match decode(&path) {
                        Ok(photo) => {
                            if tx.send(photo).is_err() {
                                return;
                            }
                        }
                        Err(e) => log::warn!("skipping photo: {e:#}"),
                    }
                }
            });
        if let Err(e) = spawned {
            log::warn!("could not start photo decoder: {e}");
        }
    }

    /// Photos decoded since the last call, in completion order.
    pub fn drain(&self) -> Vec<DecodedPhoto> {
        let mut ready = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(photo) => ready.push(photo),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        ready
    }
}

fn decode(path: &Path) -> anyhow::Result<DecodedPhoto> {
    let img = image::open(path).with_context(|| format!("decoding {}", path.display()))?;
    let img = if img.width() > MAX_PHOTO_EDGE || img.height() > MAX_PHOTO_EDGE {
        img.thumbnail(MAX_PHOTO_EDGE, MAX_PHOTO_EDGE)
    } else {
        img
    };
    let rgba = img.to_rgba8();
    Ok(DecodedPhoto {
        path: path.to_path_buf(),
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}
