// src/app/preview.rs — background frame decoder for the video preview pane
//
// The worker never touches UI state. It decodes, resizes and sends frames
// over a channel; the UI thread uploads them as textures. Every playback gets
// a fresh generation number so frames that arrive after a stop or a restart
// are dropped by `poll`.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use image::codecs::gif::GifDecoder;
use image::imageops::FilterType;
use image::{AnimationDecoder, RgbaImage};
use tracing::{debug, warn};

use crate::error::{Result, WatchlistError};

// max sleep between stop-flag checks while a frame is on screen
const STOP_POLL: Duration = Duration::from_millis(15);
const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(100);
const MIN_FRAME_DELAY: Duration = Duration::from_millis(10);
const MAX_MSGS_PER_POLL: usize = 8;

pub struct PreviewFrame {
    pub generation: u64,
    pub index: usize,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

pub enum PreviewMsg {
    Frame(PreviewFrame),
    Finished { generation: u64, frames: usize },
    Failed { generation: u64, error: String },
}

impl PreviewMsg {
    fn generation(&self) -> u64 {
        match self {
            Self::Frame(f) => f.generation,
            Self::Finished { generation, .. } | Self::Failed { generation, .. } => *generation,
        }
    }
}

struct Playback {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

pub struct PreviewPlayer {
    generation: u64,
    current: Option<Playback>,
    tx: Sender<PreviewMsg>,
    rx: Receiver<PreviewMsg>,
}

impl Default for PreviewPlayer {
    fn default() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            generation: 0,
            current: None,
            tx,
            rx,
        }
    }
}

impl PreviewPlayer {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True while a worker for the current generation is alive.
    pub fn is_playing(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|p| !p.handle.is_finished())
    }

    /// Stop whatever is playing, then start decoding `path` on a new worker.
    pub fn play(&mut self, path: &Path, size: [u32; 2]) -> Result<u64> {
        self.stop();
        if !path.is_file() {
            return Err(WatchlistError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "Invalid video path"),
            ));
        }

        self.generation += 1;
        let generation = self.generation;
        let stop = Arc::new(AtomicBool::new(false));
        let worker = Worker {
            path: path.to_path_buf(),
            size,
            generation,
            stop: Arc::clone(&stop),
            tx: self.tx.clone(),
        };
        let handle = thread::Builder::new()
            .name(format!("preview-{generation}"))
            .spawn(move || worker.run())
            .map_err(|e| WatchlistError::io(path, e))?;

        debug!("preview {generation} started for {}", path.display());
        self.current = Some(Playback { stop, handle });
        Ok(generation)
    }

    /// Signal the worker and wait for it to exit. Frames it already queued
    /// are discarded by the next `poll`.
    pub fn stop(&mut self) {
        if let Some(p) = self.current.take() {
            p.stop.store(true, Ordering::Relaxed);
            if p.handle.join().is_err() {
                warn!("preview worker panicked");
            }
            // anything still queued belongs to the stopped generation
            self.generation += 1;
        }
    }

    /// Drain up to a handful of messages for the current generation.
    pub fn poll(&mut self) -> Vec<PreviewMsg> {
        let mut out = Vec::new();
        while out.len() < MAX_MSGS_PER_POLL {
            match self.rx.try_recv() {
                Ok(msg) if msg.generation() == self.generation => {
                    if matches!(msg, PreviewMsg::Finished { .. } | PreviewMsg::Failed { .. }) {
                        if let Some(p) = self.current.take() {
                            let _ = p.handle.join();
                        }
                    }
                    out.push(msg);
                }
                Ok(_) => {} // stale
                Err(_) => break,
            }
        }
        out
    }
}

impl Drop for PreviewPlayer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// On-screen time for a GIF frame. Zero or sub-millisecond delays would let
/// the worker flood the channel, so they get a floor.
fn frame_delay(num: u32, den: u32) -> Duration {
    if num == 0 || den == 0 {
        return DEFAULT_FRAME_DELAY;
    }
    Duration::from_millis(u64::from(num / den)).max(MIN_FRAME_DELAY)
}

struct Worker {
    path: PathBuf,
    size: [u32; 2],
    generation: u64,
    stop: Arc<AtomicBool>,
    tx: Sender<PreviewMsg>,
}

impl Worker {
    fn run(self) {
        let msg = match self.decode_and_send() {
            Ok(frames) => PreviewMsg::Finished {
                generation: self.generation,
                frames,
            },
            Err(error) => {
                warn!("preview of {} failed: {error}", self.path.display());
                PreviewMsg::Failed {
                    generation: self.generation,
                    error,
                }
            }
        };
        let _ = self.tx.send(msg);
    }

    fn stopped(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    /// Returns false when playback should end (stop flag or UI gone).
    fn send_frame(&self, index: usize, img: RgbaImage) -> bool {
        if self.stopped() {
            return false;
        }
        let [w, h] = self.size;
        let img = image::imageops::resize(&img, w, h, FilterType::Triangle);
        let frame = PreviewFrame {
            generation: self.generation,
            index,
            width: w,
            height: h,
            rgba: img.into_raw(),
        };
        self.tx.send(PreviewMsg::Frame(frame)).is_ok()
    }

    /// Sleep for `d`, waking early if stopped.
    fn hold(&self, d: Duration) -> bool {
        let until = Instant::now() + d;
        loop {
            if self.stopped() {
                return false;
            }
            let now = Instant::now();
            if now >= until {
                return true;
            }
            thread::sleep((until - now).min(STOP_POLL));
        }
    }

    fn decode_and_send(&self) -> std::result::Result<usize, String> {
        let is_gif = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("gif"));

        if !is_gif {
            // single still image
            let img = image::open(&self.path)
                .map_err(|e| format!("decode {}: {e}", self.path.display()))?
                .to_rgba8();
            return Ok(usize::from(self.send_frame(0, img)));
        }

        let file =
            File::open(&self.path).map_err(|e| format!("open {}: {e}", self.path.display()))?;
        let decoder = GifDecoder::new(BufReader::new(file))
            .map_err(|e| format!("gif {}: {e}", self.path.display()))?;

        let mut sent = 0usize;
        for (index, frame) in decoder.into_frames().enumerate() {
            if self.stopped() {
                break;
            }
            let frame = frame.map_err(|e| format!("frame {index}: {e}"))?;
            let (num, den) = frame.delay().numer_denom_ms();
            let delay = frame_delay(num, den);
            if !self.send_frame(index, frame.into_buffer()) {
                break;
            }
            sent += 1;
            if !self.hold(delay) {
                break;
            }
        }
        Ok(sent)
    }
}
