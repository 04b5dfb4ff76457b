use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{CrossRotError, CrossRotResult};
use crate::render::frame::FrameRGBA;

/// Writes every frame as `<dir>/frame_NNNNN.png`.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    /// Sink writing into `dir` (created on `begin`).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cfg: None,
            last_idx: None,
            written: Vec::new(),
        }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Files written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// File name used for frame `idx`.
    pub fn frame_file_name(idx: FrameIndex) -> String {
        format!("frame_{:05}.png", idx.0)
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> CrossRotResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(CrossRotError::validation(
                "png sink width/height must be non-zero",
            ));
        }
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create output dir '{}'", self.dir.display()))?;
        self.cfg = Some(cfg);
        self.last_idx = None;
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> CrossRotResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| CrossRotError::encode("png sink not started"))?;
        if let Some(last) = self.last_idx
            && idx.0 <= last.0
        {
            return Err(CrossRotError::encode(
                "png sink received out-of-order frame index",
            ));
        }
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(CrossRotError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }

        let path = self.dir.join(Self::frame_file_name(idx));
        write_png(&path, frame)?;
        self.last_idx = Some(idx);
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> CrossRotResult<()> {
        self.cfg = None;
        Ok(())
    }
}

/// Write a single frame as PNG, converting premultiplied pixels to straight alpha.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> CrossRotResult<()> {
    if frame.data.len() != frame.width as usize * frame.height as usize * 4 {
        return Err(CrossRotError::validation(
            "frame.data size mismatch with width*height*4",
        ));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let straight;
    let bytes = if frame.premultiplied {
        straight = unpremultiply_rgba8(&frame.data);
        straight.as_slice()
    } else {
        frame.data.as_slice()
    };

    image::save_buffer_with_format(
        path,
        bytes,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn unpremultiply_rgba8(src: &[u8]) -> Vec<u8> {
    let mut out = src.to_vec();
    for px in out.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
