//! dawgpack CLI: compiles a word-list file into a packed DAWG binary and
//! verifies the result by walking the bytes it just wrote.

use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use dawgpack::dawg::{dot, Builder, PackedDawg};

#[derive(Parser)]
#[command(name = "dawgpack")]
#[command(about = "Compile a plain-text word list into a packed DAWG binary")]
#[command(version)]
struct Cli {
    /// Input word list, one candidate per line
    #[arg(default_value = "words.txt")]
    wordlist: PathBuf,

    /// Output path for the packed binary
    #[arg(default_value = "dawg.bin")]
    output: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("dawgpack: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    println!("Loading words from: {}", cli.wordlist.display());
    let builder = Builder::from_file(&cli.wordlist)?;
    let loaded = builder.words_loaded();
    let skipped = builder.words_skipped();
    let trie_nodes = builder.trie_node_count();

    println!("Words loaded: {loaded}");
    if skipped > 0 {
        println!("Words skipped (non-alpha): {skipped}");
    }
    println!();
    println!("Trie nodes: {trie_nodes}");

    let dawg = builder.finish();
    let dawg_nodes = dawg.node_count();
    let reduction = 100.0 * (1.0 - dawg_nodes as f64 / trie_nodes as f64);
    println!("DAWG nodes: {dawg_nodes} ({reduction:.1}% reduction)");

    if dawg_nodes <= dot::DOT_NODE_LIMIT {
        let dot_path = cli.output.with_extension("dot");
        let mut w = BufWriter::new(File::create(&dot_path)?);
        dot::export_dot(&dawg, &mut w)?;
        w.flush()?;
        println!("DOT file written to: {}", dot_path.display());
    }

    let packed = dawg.flatten()?;
    println!();
    println!(
        "Packed DAWG: {} entries ({} bytes)",
        packed.len(),
        packed.byte_len()
    );
    if packed.len() <= 100 {
        print!("{packed}");
    }

    packed.write_to_file(&cli.output)?;
    println!("Binary file written: {}", cli.output.display());

    // Re-read the file we just wrote; the walker is the format contract.
    let image = PackedDawg::read_from_file(&cli.output)?;
    println!();
    println!("Verifying: {}", cli.output.display());
    println!("Words found in binary: {}", image.count_words());
    if loaded <= 100 {
        for word in image.words() {
            println!("  {word}");
        }
    }

    Ok(())
}
