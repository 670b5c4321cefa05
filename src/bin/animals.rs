extern crate animal_refl;
use animal_refl::Config;
use animal_refl::Result;
use clap::Parser;

fn main() {
    let config = Config::parse();
    animal_refl::logging::init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let r = animal_refl::run(&config, &mut out);
    ordie(r);
}

fn ordie<T>(r: Result<T>) -> T {
    match r {
        Ok(t) => t,
        Err(error) if error.is_broken_pipe() => {
            tracing::debug!("stdout closed early");
            std::process::exit(0);
        }
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(error.exit_code());
        }
    }
}
