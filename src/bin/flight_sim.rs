//! Terrain Flight Simulator
//!
//! Run with: `cargo run --bin flight-sim [config.json]`
//!
//! Generates a fractal terrain and flies a viewpoint over it. The window is
//! the keyboard event source; drawing is left to an external renderer that
//! consumes the scene's buffers and matrices.
//!
//! Controls:
//! - Up/Down arrows: Fly forward/backward (blocked by terrain)
//! - Left/Right arrows: Yaw
//! - W/S: Pitch up/down
//! - A/D: Roll
//! - ESC: Exit

use std::path::PathBuf;
use std::process::ExitCode;

use log::{error, info};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

use terrain_flight_engine::mesh::{index_bytes, vertex_bytes};
use terrain_flight_engine::{FlightConfig, FlightScene, KeyBindings, MoveOutcome};

struct App {
    scene: FlightScene,
    bindings: KeyBindings,
    window: Option<Window>,
}

impl App {
    fn handle_key(&mut self, key: KeyCode) {
        let Some(command) = self.bindings.command_for(key) else {
            return;
        };
        if let Some(MoveOutcome::Blocked { distance }) = self.scene.handle_command(command) {
            info!("Terrain ahead ({distance:.3}), move refused");
        }
        let state = self.scene.controller().state();
        info!(
            "pitch {:.0} yaw {:.0} roll {:.0} at {}",
            state.pitch, state.yaw, state.roll, state.position
        );
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title("Terrain Flight - arrows to fly, W/S pitch, A/D roll")
            .with_inner_size(PhysicalSize::new(1280, 720));
        match event_loop.create_window(attrs) {
            Ok(window) => {
                let size = window.inner_size();
                self.scene.set_viewport(size.width, size.height);
                self.window = Some(window);
            }
            Err(e) => {
                error!("Failed to create window: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => self.scene.set_viewport(size.width, size.height),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                if key == KeyCode::Escape {
                    event_loop.exit();
                    return;
                }
                self.handle_key(key);
            }
            _ => {}
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => FlightConfig::load(&path)?,
        None => FlightConfig::default(),
    };

    let scene = FlightScene::new(&config)?;
    let vertices = scene.render().gpu_vertices(scene.mesh());
    info!(
        "Buffers ready: {} vertices ({} bytes), {} indices ({} bytes), height range {:.4}",
        vertices.len(),
        vertex_bytes(&vertices).len(),
        scene.mesh().indices.len(),
        index_bytes(&scene.mesh().indices).len(),
        scene.render().height_range
    );

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App {
        scene,
        bindings: KeyBindings::default(),
        window: None,
    };
    event_loop.run_app(&mut app)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    info!("=== Terrain Flight ===");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
