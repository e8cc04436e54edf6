use std::{
    env, fs,
    io::Result,
    path::{Path, PathBuf},
};

use clap::CommandFactory;
use clap_complete::{generate_to, shells::Shell};

include!("src/options/args.rs");

fn create_dir(dir: &Path) -> Result<()> {
    let res = fs::create_dir_all(dir);
    if let Err(err) = &res {
        eprintln!(
            "Failed to create a directory at location {dir:?}, encountered error {err:?}. Aborting...",
        );
    }

    res
}

fn main() -> Result<()> {
    const COMPLETION_DIR: &str = "./target/tmp/coregraph/completion/";
    const MANPAGE_DIR: &str = "./target/tmp/coregraph/manpage/";

    match env::var_os("COREGRAPH_GENERATE") {
        Some(var) if !var.is_empty() => {
            let completion_out_dir = PathBuf::from(COMPLETION_DIR);
            let manpage_out_dir = PathBuf::from(MANPAGE_DIR);

            create_dir(&completion_out_dir)?;
            create_dir(&manpage_out_dir)?;

            let mut cmd = CoregraphArgs::command();
            for shell in [
                Shell::Bash,
                Shell::Zsh,
                Shell::Fish,
                Shell::PowerShell,
                Shell::Elvish,
            ] {
                generate_to(shell, &mut cmd, "coregraph", &completion_out_dir)?;
            }

            let man = clap_mangen::Man::new(cmd);
            let mut buffer: Vec<u8> = Default::default();
            man.render(&mut buffer)?;
            fs::write(manpage_out_dir.join("coregraph.1"), buffer)?;
        }
        _ => {}
    }

    println!("cargo:rerun-if-env-changed=COREGRAPH_GENERATE");
    println!("cargo:rerun-if-changed=src/options/args.rs");

    Ok(())
}
