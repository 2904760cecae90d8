//! Command dispatcher and session state
//!
//! A session owns at most one canvas. `C` replaces it wholesale, every other
//! command draws on it. After each successful command the canvas is rendered
//! and the frame is recorded in the history.

use tracing::{debug, info, instrument, warn};

use crate::canvas::{flood_fill, Canvas, FillReport, FrameRenderer, Line, Rect, Renderer, Shape};
use crate::command::Command;
use crate::config::PainterConfig;
use crate::errors::{PainterError, Result};

/// What a successfully executed command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A canvas was created, `replaced` when an older one was discarded
    CanvasCreated {
        width: usize,
        height: usize,
        replaced: bool,
    },
    /// A line or rectangle was drawn, `cells` counts writes including overdraw
    ShapeDrawn { cells: usize },
    /// A flood fill ran
    Filled(FillReport),
}

impl Outcome {
    /// Number of cells written by the command
    pub fn cells_changed(&self) -> usize {
        match self {
            Outcome::CanvasCreated { width, height, .. } => width * height,
            Outcome::ShapeDrawn { cells } => *cells,
            Outcome::Filled(report) => report.len(),
        }
    }
}

/// Execute one command against the given canvas slot.
///
/// The slot is the only state carried between commands. On failure it is
/// left exactly as the failing component left it.
pub fn apply(canvas: &mut Option<Canvas>, command: Command, config: &PainterConfig) -> Result<Outcome> {
    if command.requires_canvas() && canvas.is_none() {
        debug!(letter = %command.letter(), "no canvas yet");
        return Err(PainterError::NoCanvas);
    }

    match command {
        Command::NewCanvas { width, height } => {
            let fresh = Canvas::with_limit(width, height, config.background, config.max_cells)?;
            let outcome = Outcome::CanvasCreated {
                width: fresh.width(),
                height: fresh.height(),
                replaced: canvas.is_some(),
            };
            info!("Canvas {}x{} created", fresh.width(), fresh.height());
            *canvas = Some(fresh);
            Ok(outcome)
        }
        Command::Line { from, to } => {
            let target = canvas.as_mut().ok_or(PainterError::NoCanvas)?;
            let cells = draw(&Line::new(from, to), target, config)?;
            Ok(Outcome::ShapeDrawn { cells })
        }
        Command::Rectangle { corner, opposite } => {
            let target = canvas.as_mut().ok_or(PainterError::NoCanvas)?;
            let cells = draw(&Rect::new(corner, opposite), target, config)?;
            Ok(Outcome::ShapeDrawn { cells })
        }
        Command::Fill { seed, color } => {
            let target = canvas.as_mut().ok_or(PainterError::NoCanvas)?;
            Ok(Outcome::Filled(flood_fill(target, seed, color)?))
        }
    }
}

fn draw<S: Shape>(shape: &S, canvas: &mut Canvas, config: &PainterConfig) -> Result<usize> {
    if config.validate_before_draw {
        shape.draw_checked(canvas, config.brush)
    } else {
        shape.draw(canvas, config.brush)
    }
}

/// A line that failed during [`Session::run`]
#[derive(Debug, Clone)]
pub struct LineFailure {
    /// 1-based line number in the input
    pub line_no: usize,
    pub line: String,
    pub error: PainterError,
}

/// Summary of a whole input run
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Frames rendered during this run, in order
    pub frames: Vec<String>,
    pub failures: Vec<LineFailure>,
    /// The run stopped before the end of the input
    pub aborted: bool,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// All frames concatenated
    pub fn output(&self) -> String {
        self.frames.concat()
    }
}

/// Drawing session
pub struct Session {
    canvas: Option<Canvas>,
    config: PainterConfig,
    renderer: Box<dyn Renderer>,
    history: Vec<String>,
}

impl Session {
    pub fn new(config: PainterConfig) -> Self {
        let renderer = FrameRenderer::with_borders(config.horizontal_border, config.vertical_border);
        Self::with_renderer(config, Box::new(renderer))
    }

    pub fn with_renderer(config: PainterConfig, renderer: Box<dyn Renderer>) -> Self {
        Self {
            canvas: None,
            config,
            renderer,
            history: Vec::new(),
        }
    }

    /// The active canvas, if any
    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    pub fn config(&self) -> &PainterConfig {
        &self.config
    }

    /// Every frame rendered so far
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Execute a command without rendering
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        debug!(letter = %command.letter(), %command, "executing");
        apply(&mut self.canvas, command, &self.config)
    }

    /// Render the active canvas
    pub fn render(&self) -> Option<String> {
        self.canvas.as_ref().map(|canvas| self.renderer.render(canvas))
    }

    /// Parse, execute and render one input line.
    ///
    /// Blank lines are skipped and yield `Ok(None)`.
    #[instrument(level = "debug", skip(self))]
    pub fn dispatch_line(&mut self, line: &str) -> Result<Option<String>> {
        if line.trim().is_empty() {
            return Ok(None);
        }

        let command = Command::parse(line)?;
        let outcome = self.execute(command)?;
        debug!(cells = outcome.cells_changed(), "command applied");

        let frame = self.render().ok_or(PainterError::NoCanvas)?;
        self.history.push(frame.clone());
        Ok(Some(frame))
    }

    /// Process every line of `input` in order.
    ///
    /// A failing line is recorded and processing continues with the next one,
    /// unless `stop_on_error` is configured.
    pub fn run(&mut self, input: &str) -> RunReport {
        let mut report = RunReport::default();

        for (idx, line) in input.lines().enumerate() {
            match self.dispatch_line(line) {
                Ok(Some(frame)) => report.frames.push(frame),
                Ok(None) => {}
                Err(error) => {
                    warn!("Line {}: {}", idx + 1, error);
                    report.failures.push(LineFailure {
                        line_no: idx + 1,
                        line: line.to_string(),
                        error,
                    });
                    if self.config.stop_on_error {
                        report.aborted = true;
                        break;
                    }
                }
            }
        }

        report
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(PainterConfig::default())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("canvas", &self.canvas)
            .field("config", &self.config)
            .field("renderer", &self.renderer.name())
            .field("frames", &self.history.len())
            .finish()
    }
}
