// keywise - pick a key, get the whole picture
//
// This is the main entry point. Parses CLI args and dispatches to handlers.

use keywise_lib::{
    lookup::{TableSource, WithFallback},
    notes::Key,
    theory::{
        analyze_with, available_keys, build_chords, build_progressions, get_scale,
        resolve_secondary_dominants, scale_degrees, tensions, DominantStrategy, Mode,
    },
    viz::build_fretboard,
    Result,
};
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    // Grab whatever the user typed
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    let command = &args[1];

    let outcome = match command.as_str() {
        "analyze" => handle_analyze(&args[2..]).await,
        "notes" => handle_notes(&args[2..]).await,
        "chords" => handle_chords(&args[2..]).await,
        "dominants" => handle_dominants(&args[2..]).await,
        "progressions" => handle_progressions(&args[2..]).await,
        "fretboard" => handle_fretboard(&args[2..]).await,
        "keys" => handle_keys(),
        "version" | "-v" | "--version" => {
            println!("keywise v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "-h" | "--help" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            Ok(())
        }
    };

    if let Err(e) = &outcome {
        eprintln!("{}", e.user_message());
    }
    outcome
}

/// Pull the key, mode and flags out of a command's args
///
/// Positional args are `<key> [mode]`; everything else is a flag.
struct Request {
    key: String,
    mode: Mode,
    strategy: DominantStrategy,
    frets: Option<usize>,
    json: bool,
}

fn parse_request(args: &[String]) -> Result<Request> {
    let mut positional = Vec::new();
    let mut strategy = DominantStrategy::Diatonic;
    let mut frets = None;
    let mut json = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--chromatic" => strategy = DominantStrategy::Chromatic,
            "--json" => json = true,
            "--frets" => {
                i += 1;
                if i < args.len() {
                    frets = args[i].parse().ok();
                }
            }
            arg => positional.push(arg.to_string()),
        }
        i += 1;
    }

    let key = positional.first().cloned().unwrap_or_else(|| "C".to_string());
    let mode = match positional.get(1) {
        Some(m) => Mode::parse(m)?,
        None => Mode::Major,
    };

    Ok(Request {
        key,
        mode,
        strategy,
        frets,
        json,
    })
}

async fn handle_analyze(args: &[String]) -> Result<()> {
    let req = parse_request(args)?;
    let analysis = analyze_with(&req.key, req.mode, req.strategy, req.frets)?;

    if req.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!("\n{}", analysis.scale_name);
    println!("{}", "=".repeat(60));

    println!("\nNotes:  {}", analysis.notes.join("  "));
    println!("Chords: {}", analysis.chords.join("  "));

    println!("\nScale Degrees:");
    for degree in &analysis.scale_degrees {
        println!(
            "  {:>2}. {:<5} {:<3} {:<7} {}",
            degree.degree, degree.roman_numeral, degree.note, degree.chord, degree.function_name
        );
    }

    println!("\nSecondary Dominants:");
    for dom in &analysis.secondary_dominants {
        println!("  {:<4} -> {}", dom.seventh, dom.resolves_to);
    }

    println!("\nBorrowed Chords: {}", analysis.borrowed_chords.join("  "));

    println!("\nProgressions:");
    for (name, chords) in &analysis.progressions {
        println!("  {:<10} {}", name, chords.join(" - "));
    }

    println!("{}", "=".repeat(60));

    Ok(())
}

async fn handle_notes(args: &[String]) -> Result<()> {
    let req = parse_request(args)?;

    // The table is the default source; anything remote would be wrapped
    // the same way and degrade to it.
    let source = WithFallback::new(TableSource);
    let notes = source.lookup(&Key::parse(&req.key), req.mode).await;

    println!("{}", notes.join(" "));
    Ok(())
}

async fn handle_chords(args: &[String]) -> Result<()> {
    let req = parse_request(args)?;
    let scale = get_scale(&Key::parse(&req.key), req.mode);
    let chords = build_chords(&scale, req.mode);

    for degree in scale_degrees(&scale.notes, &chords, req.mode) {
        let tension_list = tensions(degree.degree - 1)?.join(" ");
        println!(
            "{:<5} {:<7} {:<13} tensions: {}",
            degree.roman_numeral, degree.chord, degree.function_name, tension_list
        );
    }
    Ok(())
}

async fn handle_dominants(args: &[String]) -> Result<()> {
    let req = parse_request(args)?;
    let scale = get_scale(&Key::parse(&req.key), req.mode);
    let chords = build_chords(&scale, req.mode);
    let dominants = resolve_secondary_dominants(&scale.notes, &chords, req.strategy)?;

    println!("\nSecondary dominants in {}:", scale.name());
    println!("{}", "=".repeat(60));
    for dom in dominants {
        println!("  {:<4} resolves to {}", dom.seventh, dom.resolves_to);
    }
    println!("{}", "=".repeat(60));
    Ok(())
}

async fn handle_progressions(args: &[String]) -> Result<()> {
    let req = parse_request(args)?;
    let scale = get_scale(&Key::parse(&req.key), req.mode);
    let chords = build_chords(&scale, req.mode);
    let progressions = build_progressions(&chords);

    if progressions.is_empty() {
        println!("Not enough chords in this key to build progressions.");
        return Ok(());
    }

    println!("\nCommon progressions in {}:", scale.name());
    println!("{}", "=".repeat(60));
    for (name, sequence) in progressions {
        println!("  {:<10} {}", name, sequence.join(" - "));
    }
    println!("{}", "=".repeat(60));
    Ok(())
}

async fn handle_fretboard(args: &[String]) -> Result<()> {
    let req = parse_request(args)?;
    let scale = get_scale(&Key::parse(&req.key), req.mode);
    let grid = build_fretboard(&scale, req.frets);

    if req.json {
        println!("{}", serde_json::to_string_pretty(&grid)?);
        return Ok(());
    }

    println!("\n{} on the fretboard:", scale.name());

    // Fret-number header
    let mut header = String::from("    ");
    for fret in 0..=grid.fret_count {
        header.push_str(&format!("{:>4}", fret));
    }
    println!("{}", header);

    for row in &grid.strings {
        let mut line = format!("{:<4}", row.string);
        for cell in &row.frets {
            let mark = if cell.is_root {
                format!("[{}]", cell.note)
            } else if cell.is_scale_note {
                cell.note.clone()
            } else {
                ".".to_string()
            };
            line.push_str(&format!("{:>4}", mark));
        }
        println!("{}", line);
    }

    Ok(())
}

fn handle_keys() -> Result<()> {
    println!("{}", available_keys().join(" "));
    Ok(())
}

fn print_usage() {
    println!(
        r#"keywise v{} - pick a key, get the whole picture

USAGE:
    keywise <COMMAND> <key> [mode] [OPTIONS]

COMMANDS:
    analyze <key> [mode]       Full analysis: scale, chords, dominants,
                               borrowed chords, progressions
    notes <key> [mode]         Just the scale notes
    chords <key> [mode]        Diatonic triads with degrees
    dominants <key> [mode]     Secondary dominants per degree
    progressions <key> [mode]  Common progressions in the key
    fretboard <key> [mode]     Scale mapped onto a guitar neck
    keys                       List recognized keys
    version                    Show version
    help                       Show this help

OPTIONS:
    --json          Emit JSON instead of tables (analyze, fretboard)
    --chromatic     Use the chromatic fifth-down dominant rule
    --frets <n>     Fretboard width, up to 24 (default: 12)

EXAMPLES:
    keywise analyze C
    keywise analyze f# minor --json
    keywise dominants Bb major
    keywise fretboard E minor --frets 24

Mode defaults to major. Keys keywise does not recognize fall back to C.
"#,
        env!("CARGO_PKG_VERSION")
    );
}
