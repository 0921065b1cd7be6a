use std::path::PathBuf;

use instant::Instant;
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowBuilder;

use tree_core::{DetectorError, DeviceProfile, HandDetector, ImageHandle, Session, SessionConfig};

mod hand;
mod photos;
mod render;

use hand::{Pose, SimulatedHand};
use photos::PhotoLoader;
use render::GpuState;

struct Args {
    photos: Vec<PathBuf>,
    profile: DeviceProfile,
    camera: bool,
}

fn parse_args() -> Args {
    let mut args = Args {
        photos: Vec::new(),
        profile: DeviceProfile::Desktop,
        camera: true,
    };
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--constrained" => args.profile = DeviceProfile::Constrained,
            "--no-camera" => args.camera = false,
            _ if arg.starts_with("--") => log::warn!("ignoring unknown flag {arg}"),
            _ => args.photos.push(PathBuf::from(arg)),
        }
    }
    args
}

fn start_detector(camera: bool) -> Result<SimulatedHand, DetectorError> {
    if !camera {
        return Err(DetectorError::CameraUnavailable("disabled with --no-camera".into()));
    }
    Ok(SimulatedHand::default())
}

fn session_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(42)
}

fn pose_for_key(key: &str) -> Option<Pose> {
    match key {
        "f" | "F" => Some(Pose::Fist),
        "o" | "O" => Some(Pose::Open),
        "p" | "P" => Some(Pose::Pinch),
        _ => None,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = parse_args();
    let config = SessionConfig::default()
        .with_profile(args.profile)
        .with_seed(session_seed());
    let mut session = Session::new(config);

    let mut detector = match start_detector(args.camera) {
        Ok(d) => {
            session.detector_ready();
            Some(d)
        }
        Err(e) => {
            session.detector_unavailable(&e);
            None
        }
    };

    let loader = PhotoLoader::default();
    loader.load(args.photos);

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(session.status())
        .build(&event_loop)?;

    let mut gpu = pollster::block_on(GpuState::new(
        &window,
        session.registry().decoration_count() + 1,
        session.registry().capacity(),
    ))?;

    let start = Instant::now();
    let mut next_image = 0u64;
    let mut shown_status = String::new();

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::Resized(size) => gpu.resize(size),
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::CursorMoved { position, .. } => {
                    let size = gpu.window.inner_size();
                    if let Some(hand) = detector.as_mut() {
                        hand.set_pointer(glam::Vec2::new(
                            position.x as f32 / size.width.max(1) as f32,
                            position.y as f32 / size.height.max(1) as f32,
                        ));
                    }
                }
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            logical_key, state, ..
                        },
                    ..
                } => match (logical_key, state) {
                    (Key::Named(NamedKey::Escape), ElementState::Pressed) => elwt.exit(),
                    (Key::Character(c), state) => {
                        let Some(hand) = detector.as_mut() else {
                            return;
                        };
                        if let Some(pose) = pose_for_key(c.as_str()) {
                            if state == ElementState::Pressed {
                                hand.set_pose(pose);
                            } else if hand.pose() == pose {
                                hand.set_pose(Pose::Relaxed);
                            }
                        } else if state == ElementState::Pressed && c.eq_ignore_ascii_case("h") {
                            hand.toggle_in_view();
                        }
                    }
                    _ => {}
                },
                WindowEvent::DroppedFile(path) => loader.load(vec![path]),
                _ => {}
            },
            Event::AboutToWait => {
                let now_ms = start.elapsed().as_secs_f64() * 1000.0;

                // Decoded photos: upload, then evict + append + re-layout in this turn.
                let decoded = loader.drain();
                if !decoded.is_empty() {
                    let mut handles = Vec::with_capacity(decoded.len());
                    for photo in &decoded {
                        let handle = ImageHandle(next_image);
                        next_image += 1;
                        log::info!("photo {} ready as {:?}", photo.path.display(), handle);
                        gpu.upload_photo(handle, photo);
                        handles.push(handle);
                    }
                    for evicted in session.add_photos(handles) {
                        gpu.release_photo(evicted);
                    }
                }

                if let Some(hand) = detector.as_mut() {
                    session.gesture_tick(hand, now_ms);
                }
                session.render_tick(now_ms);

                if shown_status != session.status() {
                    shown_status = session.status().to_string();
                    log::info!("status: {shown_status}");
                    gpu.window.set_title(&shown_status);
                }

                match gpu.render(&session, now_ms) {
                    Ok(_) => gpu.window.request_redraw(),
                    Err(wgpu::SurfaceError::Lost) => gpu.resize(gpu.window.inner_size()),
                    Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                    Err(e) => log::warn!("surface error: {e:?}"),
                }
            }
            Event::LoopExiting => {
                if let Some(hand) = detector.as_mut() {
                    hand.shutdown();
                }
                gpu.teardown();
                log::info!("shut down");
            }
            _ => {}
        }
    })?;
    Ok(())
}
