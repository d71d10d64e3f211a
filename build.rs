use clap::Shell;
use std::{env, path::PathBuf};

#[path = "src/cli.rs"]
mod cli;

fn main() {
    let mut out_dir = match env::var_os("OUT_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => return,
    };
    // Completions land next to the binary, three levels up from the build output.
    let _ = out_dir.pop();
    let _ = out_dir.pop();
    let _ = out_dir.pop();

    let mut cli = cli::generate_cli();
    cli.gen_completions("permission-review", Shell::Bash, &out_dir);
    cli.gen_completions("permission-review", Shell::Fish, out_dir);
}
