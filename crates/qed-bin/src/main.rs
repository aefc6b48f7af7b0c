//! qed entrypoint.
use anyhow::Result;
use clap::Parser;
use core_actions::{DispatchResult, execute, io_ops};
use core_config::{OrientationSetting, load_from};
use core_events::{EVENT_CHANNEL_CAP, Event, InputEvent, KeyCombination};
use core_keymap::{ModeCache, ModeKind};
use core_model::{EditorModel, MAX_PANES, Orientation};
use core_state::{BufferSettings, EditorState};
use core_terminal::{CrosstermBackend, TerminalBackend, window_title};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tokio::sync::mpsc;
use tracing::{error, info, trace, warn};
use tracing_appender::non_blocking::WorkerGuard;

const LOG_FILE_NAME: &str = "qed.log";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "qed", version, about = "qed text editor")]
struct Args {
    /// Files to open, one pane each. A calculator pane is added when any are given.
    pub files: Vec<PathBuf>,
    /// Optional configuration file path (overrides discovery of `qed.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

struct AppStartup {
    backend: CrosstermBackend,
    log_guard: Option<WorkerGuard>,
}

struct RuntimeContext<'a> {
    model: EditorModel,
    terminal_guard: core_terminal::TerminalGuard<'a>,
}

impl AppStartup {
    fn new() -> Self {
        Self {
            backend: CrosstermBackend::new(),
            log_guard: None,
        }
    }

    fn run<'a>(&'a mut self, args: &Args) -> Result<RuntimeContext<'a>> {
        self.configure_logging()?;
        Self::install_panic_hook();

        info!(target: "runtime", "startup");
        let mut model = load_editor(args)?;
        let (width, height) = self.backend.size()?;
        model.resize(width, height);
        self.backend
            .set_title(&window_title(&model.state().current_buffer().display_name()))?;
        let guard = self.backend.enter_guard()?;

        info!(
            target: "runtime.startup",
            files = args.files.len(),
            panes = model.panes().len(),
            width,
            height,
            config_override = args.config.is_some(),
            "bootstrap_complete"
        );

        Ok(RuntimeContext {
            model,
            terminal_guard: guard,
        })
    }

    fn configure_logging(&mut self) -> Result<()> {
        let log_dir = Path::new(".");
        let log_path = log_dir.join(LOG_FILE_NAME);
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        if tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(nb_writer)
            .try_init()
            .is_ok()
        {
            self.log_guard = Some(guard);
        }
        // Otherwise a global subscriber is already installed; dropping the guard shuts the writer down.
        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }
}

/// Build the session from configuration and open the requested files.
fn load_editor(args: &Args) -> Result<EditorModel> {
    let config = load_from(args.config.clone())?;
    let settings = BufferSettings {
        initial_capacity: config.initial_capacity(),
        stack_limit: config.stack_limit(),
    };
    let orientation = match config.orientation() {
        OrientationSetting::Vertical => Orientation::Vertical,
        OrientationSetting::Horizontal => Orientation::Horizontal,
    };
    let modes = ModeCache::new(&core_events::UsLayout)?;
    let state = EditorState::new(modes, settings, ModeKind::Text);
    let mut model = EditorModel::new(state, orientation);
    open_files(&mut model, &args.files);
    Ok(model)
}

/// Open each file in its own text pane, then add a calculator scratch pane.
///
/// Files beyond the pane capacity (less the calculator pane) are skipped.
/// The first file's pane is left active. Returns the number of files opened.
fn open_files(model: &mut EditorModel, files: &[PathBuf]) -> usize {
    let Some((first, rest)) = files.split_first() else {
        return 0;
    };
    io_ops::open_into_current(model.state_mut(), first);

    let room = MAX_PANES - 2;
    if rest.len() > room {
        warn!(target: "runtime.startup", requested = files.len(), opened = room + 1, "too_many_files");
    }
    for path in rest.iter().take(room) {
        let id = model.state_mut().create_buffer(ModeKind::Text);
        let index = model.open_pane(id);
        model.focus_pane(index);
        io_ops::open_into_current(model.state_mut(), path);
    }
    let opened = 1 + rest.len().min(room);

    let calculator = model.state_mut().create_buffer(ModeKind::RpnCalculator);
    model.open_pane(calculator);
    model.focus_pane(0);
    model.recompute_all();
    opened
}

/// Ctrl+C always ends the session, whatever the current mode binds.
fn is_interrupt(input: &InputEvent) -> bool {
    input.combination == KeyCombination::ctrl(b'C')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShutdownReason {
    CtrlC,
    CommandQuit,
    ShutdownEvent,
    ChannelClosed,
}

impl ShutdownReason {
    fn as_str(&self) -> &'static str {
        match self {
            ShutdownReason::CtrlC => "ctrl_c",
            ShutdownReason::CommandQuit => "command_quit",
            ShutdownReason::ShutdownEvent => "shutdown_event",
            ShutdownReason::ChannelClosed => "channel_closed",
        }
    }
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue { redraw: bool },
    Break { reason: ShutdownReason },
}

/// Apply one event to the session. Pure with respect to the terminal.
fn handle_event(model: &mut EditorModel, event: &Event) -> LoopControl {
    match event {
        Event::Input(input) if is_interrupt(input) => LoopControl::Break {
            reason: ShutdownReason::CtrlC,
        },
        Event::Input(input) => {
            let DispatchResult {
                dirty,
                quit,
                buffer_replaced,
            } = execute(*input, model);
            if quit {
                LoopControl::Break {
                    reason: ShutdownReason::CommandQuit,
                }
            } else {
                LoopControl::Continue {
                    redraw: dirty || buffer_replaced,
                }
            }
        }
        Event::Resize(width, height) => {
            trace!(target: "runtime", width, height, "resize");
            model.resize(*width, *height);
            model.recompute_all();
            LoopControl::Continue { redraw: true }
        }
        Event::Shutdown => LoopControl::Break {
            reason: ShutdownReason::ShutdownEvent,
        },
    }
}

struct EditorRuntime<'a> {
    model: EditorModel,
    rx: mpsc::Receiver<Event>,
    input_task: Option<tokio::task::JoinHandle<()>>,
    input_shutdown: Option<core_input::AsyncInputShutdown>,
    title: String,
    terminal_guard: core_terminal::TerminalGuard<'a>,
}

impl<'a> EditorRuntime<'a> {
    fn new(
        context: RuntimeContext<'a>,
        rx: mpsc::Receiver<Event>,
        input_task: tokio::task::JoinHandle<()>,
        input_shutdown: core_input::AsyncInputShutdown,
    ) -> Self {
        let RuntimeContext {
            model,
            terminal_guard,
        } = context;
        let title = model.state().current_buffer().display_name();
        Self {
            model,
            rx,
            input_task: Some(input_task),
            input_shutdown: Some(input_shutdown),
            title,
            terminal_guard,
        }
    }

    async fn run(&mut self) -> Result<()> {
        self.render();

        let loop_span = tracing::debug_span!(target: "runtime", "event_loop");
        let _enter_loop = loop_span.enter();

        let mut shutdown_reason = ShutdownReason::ChannelClosed;
        while let Some(event) = self.rx.recv().await {
            match handle_event(&mut self.model, &event) {
                LoopControl::Break { reason } => {
                    shutdown_reason = reason;
                    break;
                }
                LoopControl::Continue { redraw } => {
                    if redraw {
                        self.render();
                    }
                    self.refresh_title();
                }
            }
        }

        self.rx.close();
        self.finalize_shutdown(shutdown_reason).await;
        Ok(())
    }

    fn render(&mut self) {
        let views = self.model.frames();
        if let Err(e) = core_render::render(&views) {
            error!(target: "render", ?e, "render_error");
        }
    }

    fn refresh_title(&mut self) {
        let name = self.model.state().current_buffer().display_name();
        if name == self.title {
            return;
        }
        if let Err(e) = self
            .terminal_guard
            .backend()
            .set_title(&window_title(&name))
        {
            warn!(target: "runtime", ?e, "set_title_failed");
        }
        self.title = name;
    }

    async fn finalize_shutdown(&mut self, reason: ShutdownReason) {
        info!(target: "runtime.shutdown", %reason, stage = "begin", "shutdown_stage");
        if let Some(shutdown) = self.input_shutdown.take() {
            trace!(target: "runtime.shutdown", %reason, "input_task_shutdown_signal");
            shutdown.signal();
        }
        if let Some(handle) = self.input_task.take() {
            match handle.await {
                Ok(()) => trace!(target: "runtime.shutdown", %reason, "input_task_joined"),
                Err(err) if err.is_cancelled() => {
                    trace!(target: "runtime.shutdown", %reason, "input_task_cancelled")
                }
                Err(err) => {
                    error!(target: "runtime.shutdown", %reason, ?err, "input_task_join_failed")
                }
            }
        }
        info!(target: "runtime.shutdown", %reason, stage = "complete", "shutdown_stage");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut startup = AppStartup::new();
    let context = startup.run(&args)?;
    let (tx, rx) = mpsc::channel::<Event>(EVENT_CHANNEL_CAP);
    let (input_task, input_shutdown) = core_input::spawn_async_input(tx);

    let mut runtime = EditorRuntime::new(context, rx, input_task, input_shutdown);
    runtime.run().await
}
