//! Background texture loader.
//!
//! Textures are read from the asset directory and decoded into RGBA buffers
//! off the UI thread. The UI polls once per frame. After [`TextureLoader::shutdown`]
//! any decode that finishes late is dropped instead of being stored.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use rayon::prelude::*;

use crate::color::Rgba;
use crate::error::AssetError;

/// Largest texture edge kept after decoding.
pub const MAX_TEXTURE_EDGE: u32 = 1024;

/// Decoded image data (RGBA).
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl ImageData {
    /// Nearest-neighbour sample with `u` wrapping and `v` clamped.
    pub fn sample(&self, u: f32, v: f32) -> [f32; 4] {
        if self.width == 0 || self.height == 0 {
            return [0.0; 4];
        }
        let w = self.width as usize;
        let h = self.height as usize;
        let x = ((u.rem_euclid(1.0) * w as f32) as usize).min(w - 1);
        let y = ((v.clamp(0.0, 1.0) * h as f32) as usize).min(h - 1);
        let o = (y * w + x) * 4;
        Rgba {
            r: self.rgba[o],
            g: self.rgba[o + 1],
            b: self.rgba[o + 2],
            a: self.rgba[o + 3],
        }
        .to_f32()
    }
}

/// Read and decode one texture, downscaling anything whose longer edge
/// exceeds [`MAX_TEXTURE_EDGE`].
pub fn decode_texture(path: &Path) -> Result<ImageData, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let img = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    if w == 0 || h == 0 {
        return Err(AssetError::Empty { path: path.to_path_buf() });
    }

    let longest = w.max(h);
    let (w, h, pixels) = if longest > MAX_TEXTURE_EDGE {
        let shrink = MAX_TEXTURE_EDGE as f32 / longest as f32;
        let new_w = ((w as f32 * shrink) as u32).max(1);
        let new_h = ((h as f32 * shrink) as u32).max(1);
        let resized =
            image::imageops::resize(&rgba, new_w, new_h, image::imageops::FilterType::Triangle);
        let (rw, rh) = resized.dimensions();
        (rw, rh, resized.into_raw())
    } else {
        (w, h, rgba.into_raw())
    };

    Ok(ImageData { width: w, height: h, rgba: pixels })
}

type LoadResult = (String, Result<ImageData, AssetError>);

/// Manages background texture loading.
pub struct TextureLoader {
    root: PathBuf,
    tx: mpsc::Sender<LoadResult>,
    rx: mpsc::Receiver<LoadResult>,
    pending: HashSet<String>,
    loaded: HashMap<String, ImageData>,
    failed: HashSet<String>,
    shut_down: bool,
}

impl TextureLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            root: root.into(),
            tx,
            rx,
            pending: HashSet::new(),
            loaded: HashMap::new(),
            failed: HashSet::new(),
            shut_down: false,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Queue textures (paths relative to the asset root) for decoding.
    ///
    /// Paths already loaded, pending or failed are skipped: each texture is
    /// attempted at most once.
    pub fn request_all<'a>(&mut self, paths: impl IntoIterator<Item = &'a str>) {
        if self.shut_down {
            return;
        }
        let batch: Vec<String> = paths
            .into_iter()
            .filter(|p| {
                !self.loaded.contains_key(*p)
                    && !self.pending.contains(*p)
                    && !self.failed.contains(*p)
            })
            .map(str::to_owned)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        if batch.is_empty() {
            return;
        }

        self.pending.extend(batch.iter().cloned());
        let root = self.root.clone();
        let tx = self.tx.clone();
        std::thread::spawn(move || {
            batch.par_iter().for_each_with(tx, |tx, rel| {
                let result = decode_texture(&root.join(rel));
                let _ = tx.send((rel.clone(), result));
            });
        });
    }

    /// Collect finished decodes. Call every frame. Returns the number of
    /// textures that became available.
    pub fn poll(&mut self) -> usize {
        let mut ready = 0;
        loop {
            match self.rx.try_recv() {
                Ok((rel, result)) => {
                    self.pending.remove(&rel);
                    if self.shut_down {
                        log::debug!("dropping late texture {rel}");
                        continue;
                    }
                    match result {
                        Ok(data) => {
                            log::debug!("loaded texture {rel} ({}x{})", data.width, data.height);
                            self.loaded.insert(rel, data);
                            ready += 1;
                        }
                        Err(e) => {
                            log::warn!("texture unavailable, using flat colour: {e}");
                            self.failed.insert(rel);
                        }
                    }
                }
                // The loader keeps its own sender, so the channel never disconnects.
                Err(_) => break,
            }
        }
        ready
    }

    /// Stop accepting results; in-flight decodes are discarded on arrival.
    pub fn shutdown(&mut self) {
        self.shut_down = true;
        self.loaded.clear();
    }

    pub fn get(&self, rel: &str) -> Option<&ImageData> {
        self.loaded.get(rel)
    }

    pub fn has_failed(&self, rel: &str) -> bool {
        self.failed.contains(rel)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "cosmic-orbit-{tag}-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(dir.join("textures")).unwrap();
        dir
    }

    fn write_png(path: &Path, w: u32, h: u32, px: [u8; 4]) {
        let img = image::RgbaImage::from_pixel(w, h, image::Rgba(px));
        img.save(path).unwrap();
    }

    fn wait_idle(loader: &mut TextureLoader) {
        let start = Instant::now();
        while !loader.is_idle() && start.elapsed() < Duration::from_secs(10) {
            loader.poll();
            std::thread::sleep(Duration::from_millis(5));
        }
        loader.poll();
    }

    #[test]
    fn sample_wraps_u_and_clamps_v() {
        let img = ImageData {
            width: 2,
            height: 1,
            rgba: vec![255, 0, 0, 255, 0, 0, 255, 255],
        };
        assert_eq!(img.sample(0.25, 0.5)[0], 1.0);
        assert_eq!(img.sample(1.75, 0.5)[2], 1.0);
        assert_eq!(img.sample(-0.25, 9.0)[2], 1.0);
    }

    #[test]
    fn loads_present_and_marks_missing() {
        let dir = scratch_dir("load");
        write_png(&dir.join("textures/a.png"), 4, 2, [10, 20, 30, 255]);

        let mut loader = TextureLoader::new(&dir);
        loader.request_all(["textures/a.png", "textures/missing.png"]);
        assert_eq!(loader.pending_count(), 2);
        wait_idle(&mut loader);

        let a = loader.get("textures/a.png").expect("decoded");
        assert_eq!((a.width, a.height), (4, 2));
        assert!(loader.has_failed("textures/missing.png"));

        // Failed paths are not retried.
        loader.request_all(["textures/missing.png"]);
        assert_eq!(loader.pending_count(), 0);
    }

    #[test]
    fn late_results_are_dropped_after_shutdown() {
        let dir = scratch_dir("late");
        write_png(&dir.join("textures/b.png"), 2, 2, [1, 2, 3, 255]);
        let mut loader = TextureLoader::new(&dir);
        loader.request_all(["textures/b.png"]);
        loader.shutdown();
        wait_idle(&mut loader);
        assert_eq!(loader.loaded_count(), 0);
        loader.request_all(["textures/b.png"]);
        assert_eq!(loader.pending_count(), 0);
    }

    #[test]
    fn wide_textures_are_downscaled() {
        let dir = scratch_dir("wide");
        let path = dir.join("textures/wide.png");
        write_png(&path, 2048, 64, [0, 0, 0, 255]);
        let data = decode_texture(&path).unwrap();
        assert_eq!(data.width, MAX_TEXTURE_EDGE);
        assert_eq!(data.height, 32);
    }

    #[test]
    fn tall_textures_are_downscaled() {
        let dir = scratch_dir("tall");
        let path = dir.join("textures/tall.png");
        write_png(&path, 64, 2048, [0, 0, 0, 255]);
        let data = decode_texture(&path).unwrap();
        assert_eq!((data.width, data.height), (32, MAX_TEXTURE_EDGE));
        assert_eq!(data.rgba.len(), (32 * MAX_TEXTURE_EDGE * 4) as usize);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let dir = scratch_dir("garbage");
        let path = dir.join("textures/bad.jpg");
        std::fs::write(&path, b"not an image").unwrap();
        assert!(matches!(decode_texture(&path), Err(AssetError::Decode { .. })));
    }
}
