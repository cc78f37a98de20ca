use std::io::{BufRead, Write};
use std::time::Duration;

use tictactoe_engine::log;
use tictactoe_engine::SessionRng;
use tictactoe_engine::tally::{TALLY_KEY, TallyStore};
use tictactoe_engine::tictactoe::{Session, SessionSettings, score_moves};

use crate::commands::{Command, HELP, parse_command};
use crate::render::{describe_error, render_board, render_outcome, render_tallies, render_turn};

pub struct GameLoop<S: TallyStore> {
    session: Session,
    settings: SessionSettings,
    rng: SessionRng,
    store: S,
    search_delay: Duration,
}

impl<S: TallyStore> GameLoop<S> {
    pub fn new(mut rng: SessionRng, settings: SessionSettings, store: S, search_delay: Duration) -> Self {
        let session = Session::new(settings.resolve_mode(&mut rng));
        Self {
            session,
            settings,
            rng,
            store,
            search_delay,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Seeds the session from the store, or clears the stored tallies when `reset` is set.
    pub fn load_tallies(&mut self, reset: bool) -> Result<(), Box<dyn std::error::Error>> {
        if reset {
            self.session.reset_tallies();
            self.store.save(TALLY_KEY, &self.session.tallies())?;
            log!("Tallies reset");
        } else if let Some(tallies) = self.store.load(TALLY_KEY)? {
            log!("Loaded tallies {:?}", tallies);
            self.session.restore_tallies(tallies);
        }
        Ok(())
    }

    pub fn run(&mut self, mut input: impl BufRead, mut output: impl Write) -> Result<(), Box<dyn std::error::Error>> {
        writeln!(output, "{}", HELP)?;
        writeln!(output, "{}", render_tallies(&self.session.tallies()))?;

        loop {
            if self.session.is_search_turn() {
                if !self.search_delay.is_zero() {
                    std::thread::sleep(self.search_delay);
                }
                let index = self.session.request_opponent_move()?;
                writeln!(output, "Search plays {}", index + 1)?;
                self.after_move(&mut output)?;
                continue;
            }

            // A finished game's board was already printed with its outcome.
            if !self.session.is_terminal() {
                writeln!(output, "\n{}", render_board(&self.session))?;
                writeln!(output, "{}", render_turn(&self.session))?;
            }
            write!(output, "> ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(message) => {
                    writeln!(output, "{}", message)?;
                    continue;
                }
            };

            match command {
                Command::Place(index) => match self.session.apply_move(index) {
                    Ok(()) => self.after_move(&mut output)?,
                    Err(e) => writeln!(output, "{}", describe_error(e))?,
                },
                Command::Hint => self.write_hint(&mut output)?,
                Command::NewGame => self.start_new_game(),
                Command::ResetTallies => {
                    self.session.reset_tallies();
                    self.save_tallies(&mut output)?;
                    writeln!(output, "{}", render_tallies(&self.session.tallies()))?;
                }
                Command::SetMode { versus_search } => {
                    self.settings.versus_search = versus_search;
                    self.start_new_game();
                }
                Command::Quit => break,
            }
        }

        Ok(())
    }

    fn start_new_game(&mut self) {
        let mode = self.settings.resolve_mode(&mut self.rng);
        self.session.set_mode(mode);
    }

    fn after_move(&mut self, output: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
        let Some(message) = render_outcome(&self.session) else {
            return Ok(());
        };

        writeln!(output, "\n{}", render_board(&self.session))?;
        writeln!(output, "{}", message)?;
        writeln!(output, "{}", render_tallies(&self.session.tallies()))?;
        writeln!(output, "Type 'new' to play again.")?;
        self.save_tallies(output)
    }

    fn save_tallies(&mut self, output: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
        if let Err(e) = self.store.save(TALLY_KEY, &self.session.tallies()) {
            log!("Failed to save tallies: {}", e);
            writeln!(output, "Could not save tallies: {}", e)?;
        }
        Ok(())
    }

    fn write_hint(&self, output: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
        let mark = self.session.to_move();
        match score_moves(self.session.board(), mark, mark.other()) {
            Ok(scored) => {
                let line = scored
                    .iter()
                    .map(|m| format!("{}:{:+}", m.index + 1, m.score))
                    .collect::<Vec<_>>()
                    .join(" ");
                writeln!(output, "Scores for {}: {}", mark.symbol(), line)?;
            }
            Err(e) => writeln!(output, "{}", e)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictactoe_engine::tally::{MemoryTallyStore, Tallies};
    use tictactoe_engine::tictactoe::{Cell, FirstPlayerMode, Mark, Outcome};

    fn game_loop(versus_search: bool, first_player: FirstPlayerMode) -> GameLoop<MemoryTallyStore> {
        let settings = SessionSettings {
            versus_search,
            first_player,
        };
        GameLoop::new(SessionRng::new(7), settings, MemoryTallyStore::new(), Duration::ZERO)
    }

    fn run_script(game: &mut GameLoop<MemoryTallyStore>, script: &str) -> String {
        let mut output = Vec::new();
        game.run(Cursor::new(script.as_bytes()), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_two_players_finish_game_and_tallies_are_saved() {
        let mut game = game_loop(false, FirstPlayerMode::Human);
        let output = run_script(&mut game, "1\n4\n2\n5\n3\nquit\n");

        assert_eq!(game.session().outcome(), Outcome::Win(Mark::X));
        assert!(output.contains("Player X wins! (cells 1-2-3)"));
        assert_eq!(output.matches(" X | X | X ").count(), 1);
        assert_eq!(
            game.store().load(TALLY_KEY).unwrap(),
            Some(Tallies { x_wins: 1, o_wins: 0, draws: 0 })
        );
    }

    #[test]
    fn test_search_answers_each_human_move() {
        let mut game = game_loop(true, FirstPlayerMode::Human);
        let output = run_script(&mut game, "1\n2\n");

        let cells = game.session().board().cells();
        assert_eq!(cells[4], Cell::Marked(Mark::O));
        assert_eq!(cells[2], Cell::Marked(Mark::O));
        assert!(output.contains("Search plays 5"));
        assert!(output.contains("Search plays 3"));
    }

    #[test]
    fn test_search_opens_when_it_plays_first() {
        let mut game = game_loop(true, FirstPlayerMode::Search);
        run_script(&mut game, "");
        assert_eq!(game.session().board().cell(0), Some(Cell::Marked(Mark::X)));
        assert_eq!(game.session().to_move(), Mark::O);
    }

    #[test]
    fn test_bad_input_is_reported_and_ignored() {
        let mut game = game_loop(false, FirstPlayerMode::Human);
        let output = run_script(&mut game, "5\n5\nbogus\n12\n");

        assert!(output.contains("Cell 5 is already taken"));
        assert!(output.contains("Unknown command"));
        assert!(output.contains("Cell must be between 1 and 9"));
        assert_eq!(game.session().board().available_moves().len(), 8);
    }

    #[test]
    fn test_mode_switch_starts_new_game() {
        let mut game = game_loop(false, FirstPlayerMode::Human);
        run_script(&mut game, "5\nmode ai\n");
        assert!(game.session().mode().search_mark().is_some());
        assert_eq!(game.session().board().available_moves().len(), 9);
    }

    #[test]
    fn test_hint_lists_scores() {
        let mut game = game_loop(false, FirstPlayerMode::Human);
        let output = run_script(&mut game, "1\n4\n2\n5\nhint\n");
        assert!(output.contains("Scores for X:"));
        assert!(output.contains("3:+9"));
    }

    #[test]
    fn test_load_and_reset_tallies() {
        let mut store = MemoryTallyStore::new();
        let stored = Tallies { x_wins: 4, o_wins: 2, draws: 1 };
        store.save(TALLY_KEY, &stored).unwrap();

        let settings = SessionSettings::default();
        let mut game = GameLoop::new(SessionRng::new(1), settings, store, Duration::ZERO);
        game.load_tallies(false).unwrap();
        assert_eq!(game.session().tallies(), stored);

        game.load_tallies(true).unwrap();
        assert_eq!(game.session().tallies(), Tallies::default());
        assert_eq!(game.store().load(TALLY_KEY).unwrap(), Some(Tallies::default()));
    }
}
