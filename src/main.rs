use utf8chars::run;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let results = run(std::env::args_os().skip(1));
    if results.is_err() {
        eprintln!("Usage: utf8chars [--max-chars N] [files]");
    }
    results?;
    Ok(())
}
