pub mod config;
mod history;
pub mod logging;
mod renderer;

use std::{
    io::{Stdout, Write},
    time::Duration,
};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    queue,
    terminal::{self, ClearType},
};

pub use config::Config;

use crate::{
    app::{history::StepHistory, renderer::Renderer},
    maze::{Maze, MazeOverrides},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UserActionEvent {
    /// Pause the animation
    Pause,
    /// Resume the animation
    Resume,
    /// Take one solver step when paused
    Forward,
    /// Undo one solver step when paused
    Backward,
    /// Terminal resize
    Resize,
    /// Increase animation speed
    SpeedUp,
    /// Decrease animation speed
    SlowDown,
    /// Switch to the next solver, keeping the progress made so far
    CycleSolver,
    /// Switch to the next generator and carve a new maze
    CycleGenerator,
    /// Carve a new maze with the same settings
    Regenerate,
    /// Exit the app
    Cancel,
}

pub struct App {
    config: Config,
    /// Current delay between solver steps
    delay: Duration,
    /// Whether the terminal is currently too small to show the maze
    too_small: bool,
}

impl App {
    /// Maximum number of solver steps to remember for stepping backward when paused
    const MAX_HISTORY_STEPS: usize = 500;
    /// How long to wait for input between frames when paused or finished
    const IDLE_POLL_TIMEOUT: Duration = Duration::from_millis(100);
    const MIN_DELAY: Duration = Duration::from_millis(1);
    const MAX_DELAY: Duration = Duration::from_millis(1000);

    pub fn new(config: Config) -> Self {
        let delay = config.delay().clamp(App::MIN_DELAY, App::MAX_DELAY);
        Self {
            config,
            delay,
            too_small: false,
        }
    }

    /// Set a panic hook to restore terminal state on panic
    /// This ensures that the terminal is not left in raw mode or alternate screen on panic
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = App::restore_terminal(&mut std::io::stdout()); // ignore any errors as we are already failing
            hook(panic_info);
        }));
    }

    /// Setup terminal in raw mode and enter alternate screen
    /// Also sets a panic hook to restore terminal on panic
    pub fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        App::set_panic_hook();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Restore terminal to original state
    /// Leave alternate screen and disable raw mode
    pub fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
        stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Map a key press to a user action
    fn key_action(code: KeyCode, is_paused: bool) -> Option<UserActionEvent> {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => Some(UserActionEvent::Cancel),
            KeyCode::Enter if is_paused => Some(UserActionEvent::Resume),
            KeyCode::Enter => Some(UserActionEvent::Pause),
            KeyCode::Right | KeyCode::Char(' ') if is_paused => Some(UserActionEvent::Forward),
            KeyCode::Left if is_paused => Some(UserActionEvent::Backward),
            KeyCode::Up => Some(UserActionEvent::SpeedUp),
            KeyCode::Down => Some(UserActionEvent::SlowDown),
            KeyCode::Char('s') => Some(UserActionEvent::CycleSolver),
            KeyCode::Char('g') => Some(UserActionEvent::CycleGenerator),
            KeyCode::Char('r') => Some(UserActionEvent::Regenerate),
            _ => None,
        }
    }

    /// Wait up to `timeout` for the next user action
    fn poll_action(timeout: Duration, is_paused: bool) -> std::io::Result<Option<UserActionEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        let action = match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                App::key_action(key_event.code, is_paused)
            }
            Event::Resize(_, _) => Some(UserActionEvent::Resize),
            _ => None,
        };
        Ok(action)
    }

    fn status_line(&self, maze: &Maze, is_paused: bool, can_undo: bool) -> String {
        format!(
            "{} | {} | {}x{} | step {} | {:?}{} | {}ms  [Enter] pause  {}  [↑/↓] speed  [s] solver  [g] generator  [r] new  [Esc] exit",
            maze.generator(),
            maze.solver(),
            maze.width(),
            maze.height(),
            maze.steps_taken(),
            maze.phase(),
            if is_paused { " (paused)" } else { "" },
            self.delay.as_millis(),
            if can_undo { "[←/→] step" } else { "[→] step" },
        )
    }

    /// Redraw everything, or show the resize message if the maze does not fit
    fn redraw(&mut self, renderer: &mut Renderer, maze: &Maze) -> std::io::Result<()> {
        self.too_small = !renderer.check_size(maze.width(), maze.height())?;
        if !self.too_small {
            renderer.draw_maze(maze)?;
        }
        Ok(())
    }

    /// Take one solver step, remembering what it changed
    fn step(
        renderer: &mut Renderer,
        maze: &mut Maze,
        history: &mut StepHistory,
    ) -> std::io::Result<()> {
        if let Some(delta) = maze.record_step() {
            let coord = delta.processed();
            history.push(delta);
            renderer.draw_step(maze, coord)?;
            if maze.goal_reached() && coord == maze.goal() {
                tracing::info!("[app loop] Goal reached after {} steps", maze.steps_taken());
            }
        }
        Ok(())
    }

    /// Main application loop: generate the maze, then animate the solver one step per frame
    pub fn run(&mut self) -> std::io::Result<()> {
        let mut maze = self.config.build_maze()?;
        maze.generate();

        let mut renderer = Renderer::new();
        let mut history = StepHistory::new(App::MAX_HISTORY_STEPS);
        let mut is_paused = false;
        self.redraw(&mut renderer, &maze)?;

        tracing::info!(
            "Started main app loop: {} / {} on {}x{}",
            maze.generator(),
            maze.solver(),
            maze.width(),
            maze.height()
        );
        loop {
            let animating = !is_paused && !self.too_small && !maze.frontier().is_empty();
            let timeout = if animating {
                self.delay
            } else {
                App::IDLE_POLL_TIMEOUT
            };

            match App::poll_action(timeout, is_paused)? {
                None => {
                    if animating {
                        App::step(&mut renderer, &mut maze, &mut history)?;
                    }
                }
                Some(action) => {
                    tracing::debug!("[app loop] User action: {:?}", action);
                    match action {
                        UserActionEvent::Cancel => break,
                        UserActionEvent::Pause => is_paused = true,
                        UserActionEvent::Resume => is_paused = false,
                        UserActionEvent::Forward => {
                            if !self.too_small {
                                App::step(&mut renderer, &mut maze, &mut history)?;
                            }
                        }
                        UserActionEvent::Backward => match history.step_back() {
                            Some(delta) => {
                                let coord = delta.processed();
                                maze.undo_step(delta);
                                if !self.too_small {
                                    renderer.draw_step(&maze, coord)?;
                                }
                                tracing::debug!(
                                    "[app loop] Stepped back, {} steps left in history",
                                    history.len()
                                );
                            }
                            None => tracing::debug!("[app loop] No history to step back into"),
                        },
                        UserActionEvent::SpeedUp => {
                            self.delay = (self.delay / 2).max(App::MIN_DELAY);
                        }
                        UserActionEvent::SlowDown => {
                            self.delay = (self.delay * 2).min(App::MAX_DELAY);
                        }
                        UserActionEvent::CycleSolver => {
                            let solver = maze.solver().next();
                            tracing::info!("[app loop] Switching solver to {}", solver);
                            maze.set_solver(solver);
                        }
                        UserActionEvent::CycleGenerator => {
                            let generator = maze.generator().next();
                            tracing::info!("[app loop] Switching generator to {}", generator);
                            maze = maze.copy_with(MazeOverrides::default().with_generator(generator))?;
                            maze.generate();
                            history.clear();
                            self.redraw(&mut renderer, &maze)?;
                        }
                        UserActionEvent::Regenerate => {
                            maze.generate();
                            history.clear();
                            self.redraw(&mut renderer, &maze)?;
                        }
                        UserActionEvent::Resize => self.redraw(&mut renderer, &maze)?,
                    }
                }
            }

            if !self.too_small {
                let status = self.status_line(&maze, is_paused, !history.is_empty());
                renderer.draw_status(&maze, &status)?;
            }
        }

        tracing::info!(
            "Exiting main app loop after {} steps, goal reached: {}",
            maze.steps_taken(),
            maze.goal_reached()
        );
        renderer.finish(&maze)
    }
}
