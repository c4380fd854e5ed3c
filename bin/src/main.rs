use clap::Parser;
use rs_wordle_filter::*;
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Lists the words from a word list that fit what is known so far in a Wordle-style game.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[arg(short = 'f', long)]
    words_file: String,

    /// The number of letters in the word.
    #[arg(short = 'l', long, default_value_t = 5)]
    length: usize,

    /// Letters that are not in the word, e.g. "гейш".
    #[arg(long, default_value = "")]
    absent: String,

    /// A letter at a known zero-based index, e.g. "а:4". May be repeated.
    #[arg(long, value_parser = parse_here)]
    here: Vec<LetterConstraint>,

    /// A letter that is in the word but not at the given indices, e.g. "в:0,2". May be repeated.
    #[arg(long, value_parser = parse_elsewhere)]
    elsewhere: Vec<LetterConstraint>,

    /// A previous guess and its feedback, e.g. "crane=yy..g", where 'g' means the letter is in
    /// the right place, 'y' means it is elsewhere in the word, and '.' means it is not in the
    /// word. May be repeated.
    #[arg(long, value_parser = parse_guess)]
    guess: Vec<(String, String)>,

    /// Skip words that contain the same letter more than once.
    #[arg(long)]
    unique_letters: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), WordleError> {
    let start_time = Instant::now();
    let word_bank = WordBank::open_with_options(
        &args.words_file,
        LoadOptions {
            unique_letters_only: args.unique_letters,
        },
    )?;
    let spec = build_spec(&args)?;

    let words = word_bank.filter(&spec)?;
    for word in words.iter() {
        println!("{}", word);
    }
    eprintln!(
        "{} of {} words match ({:.3}s).",
        words.len(),
        word_bank.len(),
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

fn build_spec(args: &Args) -> Result<FilterSpec, WordleError> {
    let mut guess_results = Vec::new();
    for (word, feedback) in args.guess.iter() {
        guess_results.push(GuessResult::parse(word, feedback)?);
    }

    let mut constraints = FilterSpec::from_guess_results(args.length, &guess_results)?
        .constraints()
        .to_vec();
    constraints.extend(args.here.iter().cloned());
    constraints.extend(args.elsewhere.iter().cloned());
    constraints.extend(args.absent.chars().map(LetterConstraint::absent));
    Ok(FilterSpec::new(args.length, Some(constraints)))
}

fn parse_guess(input: &str) -> Result<(String, String), String> {
    input
        .split_once('=')
        .map(|(word, feedback)| (word.to_string(), feedback.to_string()))
        .ok_or_else(|| format!("expected WORD=FEEDBACK, got \"{}\"", input))
}

fn split_letter(input: &str) -> Result<(char, &str), String> {
    let (letter, rest) = input
        .split_once(':')
        .ok_or_else(|| format!("expected LETTER:INDEX, got \"{}\"", input))?;
    let mut chars = letter.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Ok((letter, rest)),
        _ => Err(format!("expected a single letter, got \"{}\"", letter)),
    }
}

fn parse_index(input: &str) -> Result<usize, String> {
    input
        .trim()
        .parse::<usize>()
        .map_err(|err| format!("invalid index \"{}\": {}", input, err))
}

fn parse_here(input: &str) -> Result<LetterConstraint, String> {
    let (letter, index) = split_letter(input)?;
    Ok(LetterConstraint::here(letter, parse_index(index)?))
}

fn parse_elsewhere(input: &str) -> Result<LetterConstraint, String> {
    let (letter, indices) = split_letter(input)?;
    let excluded = indices
        .split(',')
        .filter(|index| !index.trim().is_empty())
        .map(parse_index)
        .collect::<Result<Vec<usize>, String>>()?;
    Ok(LetterConstraint::elsewhere(letter, excluded))
}
