use glam::Vec2;
use instant::Instant;
use repel_core::{BoxProvider, EvadeParams, Frame, FrameLoop, Rect, TickOutcome};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowBuilder;

mod gpu;

// Logical size of the drawn control, matching a typical page button
const BUTTON_SIZE: Vec2 = Vec2::new(80.0, 50.0);

/// The window as seen by the frame loop.
struct WindowSurface {
    viewport: Vec2,
}

impl BoxProvider for WindowSurface {
    fn current_box(&self) -> Option<Rect> {
        // Minimised windows report a zero size; nothing to lay out against
        if self.viewport.x <= 0.0 || self.viewport.y <= 0.0 {
            return None;
        }
        Some(Rect {
            origin: Vec2::ZERO,
            size: BUTTON_SIZE,
        })
    }

    fn viewport_size(&self) -> Vec2 {
        self.viewport
    }
}

fn logical_viewport(window: &winit::window::Window) -> Vec2 {
    let size: LogicalSize<f32> = window.inner_size().to_logical(window.scale_factor());
    Vec2::new(size.width, size.height)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let params = EvadeParams::default();
    params.validate()?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Repel button (native)")
        .with_inner_size(LogicalSize::new(960.0, 640.0))
        .build(&event_loop)?;

    let mut gpu = pollster::block_on(gpu::GpuState::new(&window))?;

    let mut frame_loop = FrameLoop::new(
        params,
        WindowSurface {
            viewport: logical_viewport(&window),
        },
        None,
    );
    let pointer = frame_loop.pointer();
    frame_loop.start(Instant::now());
    let mut last_frame: Option<Frame> = None;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => {
                gpu.resize(size);
                frame_loop.provider_mut().viewport = logical_viewport(gpu.window);
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                frame_loop.provider_mut().viewport = logical_viewport(gpu.window);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let p = position.to_logical::<f32>(gpu.window.scale_factor());
                pointer.record(p.x, p.y);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if let Some(frame) = last_frame {
                    let hit = Rect {
                        origin: frame.position,
                        size: BUTTON_SIZE,
                    };
                    if hit.contains(pointer.latest()) {
                        log::info!(
                            "[click] caught it at ({:.0},{:.0})",
                            frame.position.x,
                            frame.position.y
                        );
                    }
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            }
            | WindowEvent::CloseRequested => {
                frame_loop.stop();
                elwt.exit();
            }
            _ => {}
        },
        Event::AboutToWait => {
            if let TickOutcome::Stepped(frame) = frame_loop.tick(Instant::now()) {
                last_frame = Some(frame);
            }
            let Some(frame) = last_frame else {
                return;
            };
            let draw = gpu::DrawState {
                viewport: frame_loop.provider().viewport,
                size: BUTTON_SIZE,
                frame,
            };
            match gpu.render(&draw) {
                Ok(_) => gpu.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => gpu.resize(gpu.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("surface out of memory; exiting");
                    elwt.exit();
                }
                Err(e) => log::warn!("render skipped: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
