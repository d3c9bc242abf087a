//! `CosmicApp`: the top-level egui application state.
//!
//! This module declares the `CosmicApp` struct, its constructor and the
//! `eframe::App` impl. Drawing is split across the sibling sub-modules:
//!
//! - `navigation`: navbar and route switching
//! - `toolbar`   : simulation control panel and planet navigator
//! - `content`   : landing, learn, simulation and not-found pages
//! - `viewport`  : the 3-D solar system view

pub mod content;
pub mod navigation;
pub mod toolbar;
pub mod viewport;

use std::time::Instant;

use eframe::egui;

use cosmic_orbit::assets::TextureLoader;
use cosmic_orbit::audio::{AudioBackend, AudioController, AudioSources, NullBackend};
use cosmic_orbit::bodies::Body;
use cosmic_orbit::config::LaunchConfig;
use cosmic_orbit::render::animator::AnimationState;
use cosmic_orbit::render::camera::OrbitCamera;
use cosmic_orbit::render::scene::Scene;
use cosmic_orbit::render::starfield::{SkyBackdrop, StarfieldParams};
use cosmic_orbit::route::Route;
use cosmic_orbit::sim::SimulationState;

use viewport::SpriteCache;

/// Shooting stars on the 2-D backdrop.
const SHOOTING_STARS: usize = 3;

// ─── Application state ───────────────────────────────────────────────────────

pub struct CosmicApp {
    pub route: Route,
    pub sim: SimulationState,
    pub anim: AnimationState,
    pub camera: OrbitCamera,
    pub scene: Scene,
    pub loader: TextureLoader,
    pub audio: AudioController,
    pub sprites: SpriteCache,
    // 2-D backdrop, regenerated when the route changes
    pub backdrop: SkyBackdrop,
    pub backdrop_route: Route,
    pub seed: u64,
    pub hovered: Option<Body>,
    pub details_open: bool,
    pub fullscreen: bool,
    pub learn_tab: usize,
    pub sim_tab: usize,
    pub app_start: Instant,
    pub last_frame_time: Instant,
}

impl CosmicApp {
    pub fn new(config: LaunchConfig) -> Self {
        let stars = StarfieldParams {
            count: config.stars,
            ..Default::default()
        };
        let scene = Scene::build(stars, config.seed);

        let mut loader = TextureLoader::new(&config.assets);
        loader.request_all(scene.texture_paths());
        log::info!(
            "requested {} textures from {}",
            loader.pending_count(),
            loader.root().display()
        );

        let audio = AudioController::new(
            audio_backend(config.mute),
            AudioSources::under(&config.assets),
            config.volume,
        );

        let route = Route::from_path(&config.page);
        if route == Route::NotFound {
            log::warn!("unknown start page {:?}", config.page);
        }

        Self {
            route,
            sim: SimulationState::new(config.speed),
            anim: AnimationState::new(),
            camera: OrbitCamera::default(),
            scene,
            loader,
            audio,
            sprites: SpriteCache::default(),
            backdrop: SkyBackdrop::generate(route.backdrop_stars(), SHOOTING_STARS, config.seed),
            backdrop_route: route,
            seed: config.seed,
            hovered: None,
            details_open: true,
            fullscreen: false,
            learn_tab: 0,
            sim_tab: 0,
            app_start: Instant::now(),
            last_frame_time: Instant::now(),
        }
    }

    /// Seconds since start-up; drives cosmetic effects only.
    pub fn cosmetic_time(&self) -> f32 {
        self.app_start.elapsed().as_secs_f32()
    }

    fn poll_textures(&mut self) {
        if self.loader.poll() > 0 {
            log::debug!("{} textures ready", self.loader.loaded_count());
        }
        self.scene.resolve_materials(&self.loader);
    }

    fn refresh_backdrop(&mut self) {
        if self.backdrop_route != self.route {
            self.backdrop =
                SkyBackdrop::generate(self.route.backdrop_stars(), SHOOTING_STARS, self.seed);
            self.backdrop_route = self.route;
        }
    }
}

/// Real output unless muted; any failure to open a device falls back to
/// silence.
fn audio_backend(mute: bool) -> Box<dyn AudioBackend> {
    if mute {
        log::info!("audio muted");
        return Box::new(NullBackend);
    }
    #[cfg(feature = "audio")]
    {
        match cosmic_orbit::audio::RodioBackend::new() {
            Ok(backend) => return Box::new(backend),
            Err(e) => log::warn!("{e}; continuing without sound"),
        }
    }
    Box::new(NullBackend)
}

impl eframe::App for CosmicApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_textures();
        self.refresh_backdrop();
        self.sync_fullscreen(ctx);

        egui::TopBottomPanel::top("navbar").show(ctx, |ui| {
            self.draw_navbar(ui);
        });

        if self.route == Route::Simulation {
            egui::SidePanel::right("planet_info")
                .default_width(260.0)
                .show(ctx, |ui| {
                    self.draw_planet_info(ui);
                });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(crate::ui::SPACE_BG))
            .show(ctx, |ui| {
                let t = self.cosmetic_time();
                crate::ui::paint_backdrop(ui.painter(), ui.max_rect(), &self.backdrop, t);
                self.draw_content(ui, ctx);
            });

        // Twinkle and shooting stars animate on every page.
        ctx.request_repaint();
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log::info!("shutting down");
        self.audio.shutdown();
        self.loader.shutdown();
    }
}
