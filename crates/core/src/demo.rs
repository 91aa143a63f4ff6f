//! Demo state and frame driver.
//!
//! [`Demo`] owns the active scene, the parked (already built) scenes, the
//! camera and the user's [`CameraOffset`]. The host calls [`Demo::apply`] for
//! each key action and [`Demo::frame`] once per rendered frame; the two never
//! run concurrently.

use rand::RngCore;

use crate::animate::animate;
use crate::engine::{Camera, Scene};
use crate::scenes::{catalog, SceneDef, SceneHandle};
use crate::types::{CameraOffset, DemoAction, SCENE_COUNT};

pub struct Demo {
    defs: [SceneDef; SCENE_COUNT],
    current: SceneHandle,
    /// Built scenes that are not active, indexed like `defs`.
    parked: Vec<Option<SceneHandle>>,
    active: usize,
    offset: CameraOffset,
    camera: Camera,
    /// Seconds since start. Kept in f64 so long sessions do not lose precision.
    clock: f64,
    supersampling: bool,
    rng: Box<dyn RngCore>,
}

impl Demo {
    /// Build the first scene and place the camera at `t = 0`.
    pub fn new<R: RngCore + 'static>(rng: R) -> Self {
        let mut rng: Box<dyn RngCore> = Box::new(rng);
        let defs = catalog();
        let current = defs[0].build(&mut *rng);
        let mut demo = Self {
            defs,
            current,
            parked: (0..SCENE_COUNT).map(|_| None).collect(),
            active: 0,
            offset: CameraOffset::ZERO,
            camera: Camera::default(),
            clock: 0.0,
            supersampling: false,
            rng,
        };
        demo.place_camera();
        demo
    }

    pub fn scene(&self) -> &Scene {
        &self.current.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn offset(&self) -> CameraOffset {
        self.offset
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn scene_count(&self) -> usize {
        self.defs.len()
    }

    pub fn title(&self) -> &'static str {
        self.defs[self.active].title()
    }

    /// Seconds of animation time elapsed.
    pub fn time(&self) -> f32 {
        self.clock as f32
    }

    pub fn supersampling(&self) -> bool {
        self.supersampling
    }

    /// Track the render target's pixel size for the camera aspect.
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.camera.set_viewport(width, height);
    }

    /// Apply one input action. Returns `true` if any state changed.
    pub fn apply(&mut self, action: DemoAction) -> bool {
        match action {
            DemoAction::SwitchScene(index) => self.switch_scene(index),
            DemoAction::ToggleSupersampling => {
                self.supersampling = !self.supersampling;
                log::info!(
                    "supersampling {}",
                    if self.supersampling { "on" } else { "off" }
                );
                true
            }
            camera => {
                let changed = self.offset.apply(camera);
                self.place_camera();
                changed
            }
        }
    }

    /// Make scene `index` active, building it on first use.
    ///
    /// Switching to the active scene or to an unknown index does nothing.
    /// A real switch zeroes the camera offset.
    pub fn switch_scene(&mut self, index: usize) -> bool {
        if index == self.active {
            return false;
        }
        if index >= self.defs.len() {
            log::warn!("ignoring switch to unknown scene {index}");
            return false;
        }

        let next = match self.parked[index].take() {
            Some(handle) => handle,
            None => self.defs[index].build(&mut *self.rng),
        };
        let previous = std::mem::replace(&mut self.current, next);
        self.parked[self.active] = Some(previous);
        self.active = index;
        self.offset.reset();
        self.place_camera();
        log::info!("switched to scene {} '{}'", index + 1, self.title());
        true
    }

    /// Frame driver: advance the clock by `delta` seconds, animate the active
    /// scene and re-place the camera.
    pub fn frame(&mut self, delta: f32) {
        self.clock += f64::from(delta);
        let time = self.time();
        animate(&mut self.current, time, delta);
        self.place_camera();
    }

    fn place_camera(&mut self) {
        let orbit = self.defs[self.active].orbit;
        let time = self.time();
        orbit.place(&mut self.camera, time, &self.offset);
    }
}
