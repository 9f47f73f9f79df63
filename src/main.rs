//! Five Letters CLI
//!
//! Interactive helper and benchmark driver for the constraint solver.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use five_letters::{
    benchmark, load_words, BenchmarkReport, Feedback, Language, RankedDictionary, Session, Word,
};
use indicatif::ProgressBar;
use log::warn;
use rayon::ThreadPoolBuilder;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

const DEFAULT_DICTIONARY: &str = "data/russian_nouns.txt";
const FALLBACK_DICTIONARY: &str = "russian_nouns.txt";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Word list, one word per line.
    #[arg(long, default_value = DEFAULT_DICTIONARY)]
    dict: PathBuf,

    /// Alphabet and feedback symbols of the game.
    #[arg(long, value_enum, default_value_t = Lang::Ru)]
    lang: Lang,

    /// Sets the number of threads used for ranking and benchmarks.
    ///
    /// 0 uses the default number of threads for rayon.
    #[arg(short, long, default_value_t = 0)]
    threads: usize,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Suggest guesses round by round from the feedback you type in (default).
    Play {
        /// How many candidates to list each round.
        #[arg(long, default_value_t = 20)]
        show: usize,
    },
    /// Play automatically against a known secret word.
    Solve {
        secret: String,
        #[arg(long)]
        max_moves: Option<usize>,
    },
    /// Play every dictionary word as the secret and report statistics.
    Bench {
        /// Give up on a game after this many guesses. Unlimited by default.
        #[arg(long)]
        max_moves: Option<usize>,
        /// Do not list the words that needed more than 6 guesses.
        #[arg(long)]
        no_over6: bool,
    },
    /// Show the best opening words.
    Suggest {
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Lang {
    /// "5 букв": ж = on the spot, б = elsewhere, с = absent.
    Ru,
    /// Wordle: g = green, y = yellow, b = gray.
    En,
}

impl From<Lang> for Language {
    fn from(lang: Lang) -> Self {
        match lang {
            Lang::Ru => Language::Russian,
            Lang::En => Language::English,
        }
    }
}

fn resolve_dictionary(path: &Path) -> PathBuf {
    if !path.is_file() && path == Path::new(DEFAULT_DICTIONARY) {
        let fallback = Path::new(FALLBACK_DICTIONARY);
        if fallback.is_file() {
            return fallback.to_path_buf();
        }
    }
    path.to_path_buf()
}

fn print_help(language: Language) {
    let symbols = language.symbols();
    println!("Enter the marks the game showed, optionally followed by the word you played:");
    println!(
        "  {exact} = letter in place, {present} = letter elsewhere, {absent} = no such letter",
        exact = symbols.exact[0],
        present = symbols.present[0],
        absent = symbols.absent[0],
    );
    println!(
        "  e.g. \"{0}{0}{1}{2}{1} word\", or just \"{0}{0}{1}{2}{1}\" to use the suggested word",
        symbols.exact[0], symbols.present[0], symbols.absent[0],
    );
    println!("Commands: reset, help, quit");
}

fn run_interactive(dictionary: &RankedDictionary, language: Language, show: usize) -> Result<()> {
    let symbols = language.symbols();
    let mut session = Session::new(dictionary);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut first_time = true;

    loop {
        let best = session.best_guess().ok().map(|s| s.word);
        let remaining = session.remaining_count();

        println!();
        for scored in session.candidates().take(show) {
            println!("{}: {:.3}", scored.word, scored.score);
        }
        if remaining > show {
            println!("... and {} more", remaining - show);
        }
        match best {
            Some(word) => println!("Best guess: {} ({} candidates)", word, remaining),
            None => println!("No words match the feedback so far. Type 'reset' to start over."),
        }

        if first_time {
            print_help(language);
            first_time = false;
        }
        print!("> ");
        stdout.flush().context("flushing stdout")?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("reading input")? == 0 {
            break;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&first) = parts.first() else {
            continue;
        };

        match first.to_lowercase().as_str() {
            "quit" | "exit" | "q" => break,
            "help" | "h" | "?" => {
                print_help(language);
                continue;
            }
            "reset" => {
                session.reset();
                continue;
            }
            _ => {}
        }

        let feedback = match Feedback::parse(first, &symbols) {
            Ok(feedback) => feedback,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        let guess = match parts.get(1) {
            Some(text) => match language.parse_word(text) {
                Ok(word) => word,
                Err(e) => {
                    println!("{}", e);
                    continue;
                }
            },
            None => match best {
                Some(word) => word,
                None => {
                    println!("There is no suggested word; type the word you played.");
                    continue;
                }
            },
        };

        session.apply_feedback(&guess, &feedback);
        println!(
            "{} {} eliminated {} words ({} → {})",
            guess,
            feedback,
            remaining.saturating_sub(session.remaining_count()),
            remaining,
            session.remaining_count()
        );

        if feedback.is_win() {
            println!("Solved in {} moves!", session.history().len());
            break;
        }
    }
    Ok(())
}

fn run_solve(
    dictionary: &RankedDictionary,
    language: Language,
    secret: &str,
    max_moves: Option<usize>,
) -> Result<()> {
    let secret = language
        .parse_word(secret)
        .context("the secret must be a five-letter word")?;
    if !dictionary.ranked().iter().any(|s| s.word == secret) {
        warn!("{} is not in the dictionary; the solver can never guess it", secret);
    }

    println!("Solving for: {}", secret);
    let symbols = language.symbols();
    let outcome = Session::new(dictionary).solve_for_target(&secret, max_moves);
    for (i, (guess, feedback)) in outcome.guesses.iter().enumerate() {
        println!(
            "Guess {}: {} → {} {}",
            i + 1,
            guess,
            feedback.to_symbol_string(&symbols),
            feedback
        );
    }
    if outcome.solved {
        println!("Solved in {} guesses.", outcome.moves());
    } else {
        println!("Not solved after {} guesses.", outcome.moves());
    }
    Ok(())
}

fn print_report(report: &BenchmarkReport, list_over6: bool) {
    let total = report.total();
    let failed = report.failed();
    let dist = report.distribution();
    let percent = |n: usize| {
        if total == 0 {
            0.0
        } else {
            100.0 * n as f64 / total as f64
        }
    };

    println!();
    println!("=== Results ===");
    println!("Words in dictionary: {}", total);
    println!("Time elapsed:        {:.2?}", report.elapsed);
    println!("Solved:              {} ({:.2}%)", dist.n, percent(dist.n));
    println!("Not solved:          {} ({:.2}%)", failed.len(), percent(failed.len()));

    if dist.n > 0 {
        println!();
        println!("Guess distribution:");
        let max_count = dist.histogram.values().copied().max().unwrap_or(1);
        for (moves, count) in &dist.histogram {
            let bar = "█".repeat((count * 40 / max_count).max(1));
            println!(
                "  {:>2} guesses: {:>6} ({:>5.1}%) {}",
                moves,
                count,
                100.0 * *count as f64 / dist.n as f64,
                bar
            );
        }
        println!();
        println!("Average guesses:  {:.3}", dist.mean);
        println!("Median:           {}", dist.median);
        println!("90th percentile:  {}", dist.p90);
        println!("95th percentile:  {}", dist.p95);
        println!("Solved in ≤6:     {:.2}%", 100.0 * dist.share_within(6));
    }

    if !failed.is_empty() {
        println!();
        println!("Ran out of candidates for: {}", join_words(failed.iter()));
    }

    if list_over6 {
        let slow = report.slower_than(6);
        println!();
        println!("Words that needed more than 6 guesses: {}", slow.len());
        if !slow.is_empty() {
            let tokens: Vec<String> = slow.iter().map(|(w, s)| format!("{}({})", w, s)).collect();
            println!("{}", tokens.join(" "));
        }
    }
}

fn join_words<'a>(words: impl Iterator<Item = &'a Word>) -> String {
    words.map(Word::to_string).collect::<Vec<_>>().join(" ")
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let language = Language::from(args.lang);

    ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()
        .context("building the rayon thread pool")?;

    let path = resolve_dictionary(&args.dict);
    let words = load_words(&path, language)
        .with_context(|| format!("loading the dictionary from {}", path.display()))?;
    let dictionary = RankedDictionary::new(&words);

    match args.command.unwrap_or(Command::Play { show: 20 }) {
        Command::Play { show } => run_interactive(&dictionary, language, show)?,
        Command::Solve { secret, max_moves } => {
            run_solve(&dictionary, language, &secret, max_moves)?
        }
        Command::Bench {
            max_moves,
            no_over6,
        } => {
            let progress = ProgressBar::new(words.len() as u64);
            let report = benchmark(&dictionary, &words, max_moves, |_| progress.inc(1));
            progress.finish_and_clear();
            print_report(&report, !no_over6);
        }
        Command::Suggest { top } => {
            println!("Best opening words:");
            for (i, scored) in dictionary.ranked().iter().take(top).enumerate() {
                println!("{:>4} {} {:.3}", i + 1, scored.word, scored.score);
            }
        }
    }
    Ok(())
}
