//! Line-oriented command shell.
//!
//! Maps commands 1:1 onto session and perft operations. All game rules
//! live in the engine; the shell only parses arguments, prints results,
//! and keeps failed commands from mutating the session.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::engine::{ChessError, GameStatus, Generator, Perft, Session};

const HELP: &str = "\
commands:
  setup [<FEN>]      reset the session (no FEN: standard start)
  display            print the board, FEN and status
  move <m> [<m>...]  play moves (long algebraic or SAN);
                     any failure rolls the whole command back
  undo [<count>]     take back moves (default 1)
  perft <depth> [basic]
                     count the legal move tree; 'basic' uses the
                     oracle generator
  help               this text
  quit               leave the shell";

pub struct Shell {
    session: Session,
    config: AppConfig,
}

impl Shell {
    /// Shell seeded from the configured start FEN.
    pub fn new(config: AppConfig) -> Result<Shell, ChessError> {
        let session = Session::from_fen(&config.start_fen)?;
        Ok(Shell { session, config })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Read commands from `input` until quit or EOF.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "ray-chess shell, type 'help' for commands")?;
        self.cmd_display(out)?;
        let mut lines = input.lines();
        loop {
            write!(out, "> ")?;
            out.flush()?;
            let Some(line) = lines.next() else { break };
            let line = line?;
            debug!(line = line.as_str(), "command received");
            if !self.dispatch(line.trim(), out)? {
                break;
            }
        }
        Ok(())
    }

    /// Run one command line. Returns false when the shell should exit.
    pub fn dispatch<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Ok(true);
        };
        let args: Vec<&str> = parts.collect();

        match command {
            "setup" => self.cmd_setup(&args, out)?,
            "display" | "d" => self.cmd_display(out)?,
            "move" | "m" => self.cmd_move(&args, out)?,
            "undo" | "u" => self.cmd_undo(&args, out)?,
            "perft" | "p" => self.cmd_perft(&args, out)?,
            "help" | "h" | "?" => writeln!(out, "{HELP}")?,
            "quit" | "q" | "exit" => {
                writeln!(out, "bye")?;
                return Ok(false);
            }
            other => {
                writeln!(out, "unknown command: {other}")?;
                writeln!(out, "{HELP}")?;
            }
        }
        Ok(true)
    }

    fn cmd_setup<W: Write>(&mut self, args: &[&str], out: &mut W) -> io::Result<()> {
        if args.is_empty() {
            self.session.reset_to_start();
            info!("session reset to the starting position");
        } else {
            let fen = args.join(" ");
            if let Err(err) = self.session.reset(&fen) {
                warn!(%err, "setup rejected");
                writeln!(out, "error: {err}")?;
                return Ok(());
            }
            info!(%fen, "session reset");
        }
        self.cmd_display(out)
    }

    fn cmd_display<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.session.position().board_string())?;
        writeln!(out, "fen: {}", self.session.to_fen())?;
        let turn = self.session.turn();
        match self.session.status() {
            GameStatus::Active => writeln!(out, "{turn} to move"),
            GameStatus::Check => writeln!(out, "{turn} to move, in check"),
            GameStatus::Checkmate => writeln!(out, "checkmate, {} wins", !turn),
            GameStatus::Stalemate => writeln!(out, "stalemate"),
        }
    }

    fn cmd_move<W: Write>(&mut self, args: &[&str], out: &mut W) -> io::Result<()> {
        if args.is_empty() {
            writeln!(out, "usage: move <m> [<m>...]")?;
            return Ok(());
        }
        let backup = self.session.clone();
        for &token in args {
            match self.session.apply_token(token) {
                Ok(san) => writeln!(out, "played {san}")?,
                Err(err) => {
                    self.session = backup;
                    warn!(token, %err, "move rejected, command rolled back");
                    writeln!(out, "error: {err} (command rolled back)")?;
                    return Ok(());
                }
            }
        }
        self.cmd_display(out)
    }

    fn cmd_undo<W: Write>(&mut self, args: &[&str], out: &mut W) -> io::Result<()> {
        let count = match args.first() {
            None => 1,
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    writeln!(out, "error: undo count must be a positive number")?;
                    return Ok(());
                }
            },
        };
        match self.session.undo(count) {
            Ok(n) => {
                writeln!(out, "took back {n} move(s)")?;
                self.cmd_display(out)
            }
            Err(err) => writeln!(out, "error: {err}"),
        }
    }

    fn cmd_perft<W: Write>(&mut self, args: &[&str], out: &mut W) -> io::Result<()> {
        let depth = match args.first() {
            None => self.config.perft_depth,
            Some(raw) => match raw.parse::<u32>() {
                Ok(d) => d,
                Err(_) => {
                    writeln!(out, "error: perft depth must be a number")?;
                    return Ok(());
                }
            },
        };
        let generator = match args.get(1) {
            None => Generator::Fast,
            Some(&"basic") => Generator::Basic,
            Some(other) => {
                writeln!(out, "error: unknown generator '{other}' (expected 'basic')")?;
                return Ok(());
            }
        };

        info!(depth, ?generator, "perft started");
        let mut perft =
            Perft::with_generator(self.session.position().clone(), depth, generator);
        let counts = perft.run();

        writeln!(out, "{counts}")?;
        for (lan, nodes) in perft.divide() {
            writeln!(out, "  {lan}: {nodes}")?;
        }
        let elapsed = perft.elapsed();
        writeln!(out, "elapsed: {:.3}s", elapsed.as_secs_f64())?;
        info!(
            depth,
            nodes = counts.moves,
            elapsed_ms = elapsed.as_millis() as u64,
            "perft finished"
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
