use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::sampling::Frame;

/// Stateful cyclic reader over a bounded frame source.
///
/// `Still` is the degenerate single-frame case (length 1, step 0) and yields
/// the same frame forever. `Sequence` walks a finite ordered list of frame
/// files with a fixed step, wrapping to the start. `Unavailable` is the
/// degraded form for sources that were missing or unreadable at init, or that
/// have been closed; it yields nothing, ever.
pub enum FrameCursor {
    Still { frame: Frame },
    Sequence { frames: Vec<PathBuf>, offset: usize, step: usize },
    Unavailable,
}

impl FrameCursor {
    pub fn still(frame: Frame) -> FrameCursor {
        FrameCursor::Still { frame }
    }

    /// Cursor over an explicit frame-file list. `step` is clamped to >= 1.
    pub fn sequence(frames: Vec<PathBuf>, step: usize) -> FrameCursor {
        if frames.is_empty() {
            return FrameCursor::Unavailable;
        }
        FrameCursor::Sequence { frames, offset: 0, step: step.max(1) }
    }

    pub fn unavailable() -> FrameCursor {
        FrameCursor::Unavailable
    }

    /// Decode a single static image. A missing or undecodable file degrades
    /// to an `Unavailable` cursor instead of failing initialization.
    pub fn open_image(path: &Path) -> FrameCursor {
        match image::open(path) {
            Ok(frame) => FrameCursor::Still { frame },
            Err(err) => {
                warn!("image file {} not found or unreadable: {}", path.display(), err);
                FrameCursor::Unavailable
            }
        }
    }

    /// Open a frame-sequence directory (frames ordered by file name).
    pub fn open_sequence(dir: &Path, step: usize) -> FrameCursor {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("frame directory {} not readable: {}", dir.display(), err);
                return FrameCursor::Unavailable;
            }
        };

        let mut frames: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        frames.sort();

        if frames.is_empty() {
            warn!("frame directory {} contains no frames", dir.display());
            return FrameCursor::Unavailable;
        }

        debug!("loaded sequence {} ({} frames, step {})", dir.display(), frames.len(), step.max(1));
        FrameCursor::Sequence { frames, offset: 0, step: step.max(1) }
    }

    /// Produce the next frame, or `None` if there is no new data this cycle.
    ///
    /// A failed read of a sequence frame resets the offset to 0 (single
    /// immediate reset, no retry) so the next cycle starts clean. Wrapping
    /// past the end of the sequence is not an error.
    pub fn advance(&mut self) -> Option<Frame> {
        match self {
            FrameCursor::Still { frame } => Some(frame.clone()),
            FrameCursor::Sequence { frames, offset, step } => match image::open(&frames[*offset]) {
                Ok(frame) => {
                    *offset += *step;
                    if *offset >= frames.len() {
                        *offset = 0;
                        debug!("sequence looped back to start");
                    }
                    Some(frame)
                }
                Err(err) => {
                    warn!("frame {} unreadable, resetting cursor: {}", frames[*offset].display(), err);
                    *offset = 0;
                    None
                }
            },
            FrameCursor::Unavailable => None,
        }
    }

    /// Current read position. 0 for still and unavailable cursors.
    pub fn offset(&self) -> usize {
        match self {
            FrameCursor::Sequence { offset, .. } => *offset,
            _ => 0,
        }
    }

    /// Number of frames in the underlying source.
    pub fn len(&self) -> usize {
        match self {
            FrameCursor::Still { .. } => 1,
            FrameCursor::Sequence { frames, .. } => frames.len(),
            FrameCursor::Unavailable => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, FrameCursor::Unavailable)
    }

    /// Release the underlying source. The cursor degrades to `Unavailable`.
    pub fn close(&mut self) {
        *self = FrameCursor::Unavailable;
    }
}
