use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::Instant,
};
use tracing::Level;
use wonderfield::{
    celebration::Celebration,
    config::{Config, ConfigSource, FileConfigSource},
    cue::{CuePlayer, Silent, TerminalBell},
    difficulty::Difficulty,
    engine::{Engine, Flow},
    input::{command_for, Command},
    logging,
    round::Outcome,
    runtime::{ChannelEventSource, GameEvent, Runner},
    ui::Board,
    GameError,
};

/// field of wonders: guess the hidden word letter by letter
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Guess the hidden word one letter at a time. Each word comes with a question as a hint; wrong letters eat into your attempts and every round runs against the clock. Harder modes allow fewer mistakes but score more."
)]
pub struct Cli {
    /// difficulty to start with (tab cycles it during the game)
    #[clap(short = 'd', long, value_enum)]
    difficulty: Option<Difficulty>,

    /// number of seconds per round
    #[clap(short = 's', long, value_parser = clap::value_parser!(u64).range(1..))]
    round_secs: Option<u64>,

    /// JSON word bank to play with instead of the built-in one
    #[clap(short = 'w', long)]
    words: Option<PathBuf>,

    /// JSON config file with default settings
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// do not ring the terminal bell
    #[clap(short = 'm', long)]
    mute: bool,

    /// seed for the word order (same seed, same words)
    #[clap(long)]
    seed: Option<u64>,

    /// write diagnostics to this file
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// most verbose level written to --log-file
    #[clap(long, default_value_t = Level::INFO)]
    log_level: Level,
}

impl Cli {
    /// Config file (if any) with command-line flags layered on top
    fn to_config(&self) -> Result<Config, GameError> {
        let mut config = match &self.config {
            Some(path) => FileConfigSource::with_path(path).load()?,
            None => Config::default(),
        };
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        if let Some(secs) = self.round_secs {
            config.round_secs = secs;
        }
        if let Some(words) = &self.words {
            config.words = Some(words.clone());
        }
        config.mute |= self.mute;
        Ok(config)
    }
}

pub struct App {
    pub engine: Engine<Box<dyn CuePlayer>>,
    pub celebration: Celebration,
    rng: StdRng,
}

impl App {
    pub fn new(config: &Config, seed: Option<u64>, now: Instant) -> Result<Self, GameError> {
        let bank = config.word_bank()?;
        let player: Box<dyn CuePlayer> = if config.mute {
            Box::new(Silent)
        } else {
            Box::new(TerminalBell::stdout())
        };
        let session = config.session_config();

        let (engine, rng) = match seed {
            Some(seed) => (
                Engine::seeded(session, bank, player, seed, now),
                StdRng::seed_from_u64(seed),
            ),
            None => (
                Engine::new(session, bank, player, now),
                StdRng::from_entropy(),
            ),
        };
        tracing::info!(
            bank = engine.bank().name.as_str(),
            words = engine.bank().len(),
            "game ready"
        );

        Ok(Self {
            engine,
            celebration: Celebration::default(),
            rng,
        })
    }

    /// Applies one event; `width`/`height` size the win celebration
    pub fn handle_event(&mut self, event: GameEvent, width: u16, height: u16, now: Instant) -> Flow {
        match event {
            GameEvent::Tick => {
                self.engine.tick(now);
                self.celebration.update();
                Flow::Continue
            }
            GameEvent::Resize => Flow::Continue,
            GameEvent::Closed => Flow::Quit,
            GameEvent::Key(key) => match command_for(key) {
                Some(command) => self.apply(command, width, height, now),
                None => Flow::Continue,
            },
        }
    }

    fn apply(&mut self, command: Command, width: u16, height: u16, now: Instant) -> Flow {
        let was_won = self.engine.session().round().outcome() == Outcome::Won;
        let flow = self.engine.handle(command, now);

        let round = self.engine.session().round();
        if command == Command::RequestNewRound {
            self.celebration.stop();
        } else if !was_won && round.outcome() == Outcome::Won {
            self.celebration
                .start(round.word(), width, height, &mut self.rng);
        }
        flow
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    if let Some(path) = &cli.log_file {
        logging::init_file_logging(path, cli.log_level)?;
    }

    // configuration errors surface before the terminal is taken over
    let config = cli.to_config()?;
    let mut app = App::new(&config, cli.seed, Instant::now())?;

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(
        score = app.engine.session().total_score(),
        words = app.engine.session().guessed_words().len(),
        "game over"
    );
    result
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::with_default_rate(ChannelEventSource::from_terminal());

    loop {
        terminal.draw(|f| ui(app, f))?;

        let event = runner.step();
        let size = terminal.size().unwrap_or_default();
        if app.handle_event(event, size.width, size.height, Instant::now()) == Flow::Quit {
            break;
        }
    }

    Ok(())
}

fn ui(app: &App, f: &mut Frame) {
    let snapshot = app.engine.snapshot(Instant::now());
    f.render_widget(Board::new(&snapshot, &app.celebration), f.area());
}
