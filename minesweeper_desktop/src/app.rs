use crate::pacing::FramePacer;
use crate::platform::PointerTracker;
use crate::render::{FrameRenderer, Palette, PixelCanvas, RenderMode, SpriteSheet};
use anyhow::{anyhow, Context, Result};
use log::{error, info};
use minesweeper::config::{
    CELL_SIZE, FRAME_DELAY, GRID_HEIGHT, GRID_WIDTH, NUM_MINES, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use minesweeper::input::{EventQueue, InputAdapter};
use minesweeper::session::Session;
use minesweeper::{Minefield, Rules};
use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

struct Graphics {
    window: Rc<Window>,
    surface: softbuffer::Surface<Rc<Window>, Rc<Window>>,
}

impl Graphics {
    fn new(event_loop: &ActiveEventLoop) -> Result<Graphics> {
        let attributes = Window::default_attributes()
            .with_title("Minesweeper")
            .with_inner_size(PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_resizable(false);
        let window = Rc::new(
            event_loop
                .create_window(attributes)
                .map_err(|error| anyhow!("failed to create window: {}", error))?,
        );
        let context = softbuffer::Context::new(window.clone())
            .map_err(|error| anyhow!("failed to create graphics context: {}", error))?;
        let surface = softbuffer::Surface::new(&context, window.clone())
            .map_err(|error| anyhow!("failed to create window surface: {}", error))?;
        Ok(Graphics { window, surface })
    }

    fn present(&mut self, canvas: &PixelCanvas, palette: &Palette) -> Result<()> {
        let size = self.window.inner_size();
        let width = NonZeroU32::new(size.width).context("window has zero width")?;
        let height = NonZeroU32::new(size.height).context("window has zero height")?;
        self.surface
            .resize(width, height)
            .map_err(|error| anyhow!("failed to resize surface: {}", error))?;
        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|error| anyhow!("failed to get surface buffer: {}", error))?;
        canvas.copy_to(&mut buffer, size.width, size.height, palette.background);
        buffer
            .present()
            .map_err(|error| anyhow!("failed to present frame: {}", error))
    }
}

/// Window shell driving a session at a fixed frame rate.
pub struct App {
    session: Session,
    queue: EventQueue,
    tracker: PointerTracker,
    renderer: FrameRenderer,
    canvas: PixelCanvas,
    pacer: FramePacer,
    graphics: Option<Graphics>,
    error: Option<anyhow::Error>,
}

impl App {
    pub fn new(session: Session, mode: RenderMode) -> App {
        let canvas = PixelCanvas::new(
            WINDOW_WIDTH,
            WINDOW_HEIGHT,
            SpriteSheet::generate(CELL_SIZE),
        );
        App {
            session,
            queue: EventQueue::new(),
            tracker: PointerTracker::new(),
            renderer: FrameRenderer::new(mode, Palette::default(), CELL_SIZE),
            canvas,
            pacer: FramePacer::new(FRAME_DELAY, Instant::now()),
            graphics: None,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        error!("{:#}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    fn redraw(&mut self) -> Result<()> {
        let graphics = match self.graphics.as_mut() {
            Some(graphics) => graphics,
            None => return Ok(()),
        };
        self.renderer.render(
            &mut self.canvas,
            self.session.get_minefield(),
            self.session.get_input(),
        );
        graphics.present(&self.canvas, self.renderer.get_palette())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }
        match Graphics::new(event_loop) {
            Ok(graphics) => {
                info!("window opened in {} mode", self.renderer.get_mode());
                self.graphics = Some(graphics);
            }
            Err(error) => self.fail(event_loop, error),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if let WindowEvent::RedrawRequested = event {
            if let Err(error) = self.redraw() {
                self.fail(event_loop, error);
            }
            return;
        }
        if let Some(input_event) = self.tracker.translate(&event) {
            self.queue.push(input_event);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if self.pacer.is_due(now) {
            let step = self.session.step_queue(&mut self.queue);
            if step.quit {
                info!("quitting");
                event_loop.exit();
                return;
            }
            self.pacer.tick(now);
            if let Some(graphics) = self.graphics.as_ref() {
                graphics.window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.pacer.next_deadline()));
    }
}

/// Opens the window and plays a freshly seeded game until the window is closed.
pub fn run(mode: RenderMode) -> Result<()> {
    let seed: u64 = rand::random();
    let minefield = Minefield::with_rules(GRID_WIDTH, GRID_HEIGHT, NUM_MINES, seed, Rules::playable())
        .context("failed to create minefield")?;
    let cell_size = NonZeroU32::new(CELL_SIZE).context("cell size must not be zero")?;
    let adapter = InputAdapter::new(cell_size, GRID_WIDTH, GRID_HEIGHT);
    let mut app = App::new(Session::new(minefield, adapter), mode);

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop
        .run_app(&mut app)
        .context("event loop terminated with error")?;

    match app.error.take() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}
