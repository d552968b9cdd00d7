//! Particle Gravity entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use particle_gravity::Settings;
    use particle_gravity::platform::{EventSource, FrameLoop, PlatformEvent};
    use particle_gravity::renderer::SdfRenderState;
    use particle_gravity::sim::SimState;

    /// Key presses queued between animation frames
    #[derive(Default)]
    struct KeyQueue {
        pending: VecDeque<PlatformEvent>,
    }

    impl EventSource for KeyQueue {
        fn poll_event(&mut self) -> Option<PlatformEvent> {
            self.pending.pop_front()
        }
    }

    struct App {
        frame_loop: FrameLoop,
        render_state: SdfRenderState,
        events: KeyQueue,
        started: bool,
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Particle Gravity starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let settings = Settings::default();

        // Backing store at device resolution, simulation in CSS-independent pixels
        let dpr = window.device_pixel_ratio();
        let width = (settings.width as f64 * dpr) as u32;
        let height = (settings.height as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = settings.seed.unwrap_or(js_sys::Date::now() as u64);
        let state = SimState::new(seed, &settings);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = SdfRenderState::new(
            surface,
            &adapter,
            width,
            height,
            (settings.width as f32, settings.height as f32),
        )
        .await;

        let app = Rc::new(RefCell::new(App {
            frame_loop: FrameLoop::new(state),
            render_state,
            events: KeyQueue::default(),
            started: false,
        }));

        setup_input_handlers(app.clone());
        request_animation_frame(app);

        log::info!("Particle Gravity running (Escape or Q to stop)");
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let ev = match event.key().as_str() {
                "Escape" | "q" | "Q" => PlatformEvent::Quit,
                _ => PlatformEvent::Other,
            };
            app.borrow_mut().events.pending.push_back(ev);
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(app: Rc<RefCell<App>>, time: f64) {
        let running = {
            let mut guard = app.borrow_mut();
            let a = &mut *guard;
            let now = time as u64;
            if !a.started {
                a.frame_loop.start(now);
                a.started = true;
            }
            a.frame_loop.frame(now, &mut a.events, &mut a.render_state)
        };

        if running {
            request_animation_frame(app);
        } else {
            log::info!("Particle Gravity stopped");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
mod native_app {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use anyhow::{Context, Result};
    use clap::Parser;

    use particle_gravity::Settings;
    use particle_gravity::platform::native::{FixedStepClock, FrameBudget, LogRenderer, SystemClock};
    use particle_gravity::platform::{Clock, FrameLoop};
    use particle_gravity::sim::SimState;

    /// Headless N-body attraction run; frames are summarized in the log
    #[derive(Parser, Debug)]
    #[command(name = "particle-gravity", version)]
    pub struct Args {
        /// JSON settings file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// RNG seed (defaults to the wall clock)
        #[arg(short, long)]
        seed: Option<u64>,
        /// Number of particles
        #[arg(short = 'n', long)]
        particles: Option<usize>,
        #[arg(long)]
        width: Option<u32>,
        #[arg(long)]
        height: Option<u32>,
        /// Stop after this many frames (runs until killed if omitted)
        #[arg(short, long)]
        frames: Option<u64>,
        /// Advance a fixed number of milliseconds per frame instead of wall time
        #[arg(long)]
        fixed_dt_ms: Option<u64>,
        /// Print the final state as JSON on stdout
        #[arg(long)]
        dump: bool,
    }

    fn settings_from_args(args: &Args) -> Result<Settings> {
        let mut settings = match &args.config {
            Some(path) => Settings::load(path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => Settings::default(),
        };

        if let Some(seed) = args.seed {
            settings.seed = Some(seed);
        }
        if let Some(n) = args.particles {
            settings.particle_count = n;
        }
        if let Some(w) = args.width {
            settings.width = w;
        }
        if let Some(h) = args.height {
            settings.height = h;
        }
        settings.validate()?;
        Ok(settings)
    }

    fn wall_clock_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }

    pub fn run() -> Result<()> {
        let args = Args::parse();
        let settings = settings_from_args(&args)?;

        let seed = settings.seed.unwrap_or_else(wall_clock_seed);
        log::info!(
            "Particle Gravity (native) starting: {} particles, {}x{}, seed {}",
            settings.particle_count,
            settings.width,
            settings.height,
            seed
        );

        let mut frame_loop = FrameLoop::new(SimState::new(seed, &settings));
        let mut events = FrameBudget::new(args.frames);
        let mut renderer = LogRenderer::new(settings.log_every);
        let mut clock: Box<dyn Clock> = match args.fixed_dt_ms {
            Some(step) => Box::new(FixedStepClock::new(step)),
            None => Box::new(SystemClock::new()),
        };

        let frames = frame_loop.run(clock.as_mut(), &mut events, &mut renderer);
        log::info!("Ran {} frames", frames);

        if args.dump {
            let json = serde_json::to_string_pretty(&frame_loop.state)
                .context("serializing final state")?;
            println!("{}", json);
        }

        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_flags_override_defaults() {
            let args = Args::try_parse_from([
                "particle-gravity",
                "--seed",
                "7",
                "-n",
                "3",
                "--width",
                "320",
            ])
            .unwrap();
            let settings = settings_from_args(&args).unwrap();
            assert_eq!(settings.seed, Some(7));
            assert_eq!(settings.particle_count, 3);
            assert_eq!(settings.width, 320);
            assert_eq!(settings.height, 600);
        }

        #[test]
        fn test_zero_height_rejected() {
            let args = Args::try_parse_from(["particle-gravity", "--height", "0"]).unwrap();
            assert!(settings_from_args(&args).is_err());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    native_app::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
