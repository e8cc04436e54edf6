use std::{collections::HashMap, env, ffi::OsString, path::Path, process::Command};

pub fn abs_path(path: &str) -> OsString {
    let path = Path::new(path);

    if path.exists() {
        path.canonicalize().unwrap().into_os_string()
    } else {
        path.to_owned().into_os_string()
    }
}

/// Maps a target architecture to the name of its QEMU user-mode binary.
fn get_qemu_target(arch: &str) -> &str {
    match arch {
        "armv7" => "arm",
        "i686" => "i386",
        "powerpc" => "ppc",
        "powerpc64le" => "ppc64le",
        _ => arch,
    }
}

/// Find the runner to use if these tests are being run through cross, based on
/// the env variables it sets.
fn cross_runner() -> Option<String> {
    const TARGET_RUNNER: &str = "CARGO_TARGET_RUNNER";
    const CROSS_RUNNER: &str = "CROSS_RUNNER";

    let env_mapping: HashMap<String, String> = env::vars_os()
        .filter_map(|(k, v)| {
            let (k, v) = (k.to_string_lossy(), v.to_string_lossy());

            if k.starts_with("CARGO_TARGET_") && k.ends_with("_RUNNER") && !v.is_empty() {
                Some((TARGET_RUNNER.to_string(), v.to_string()))
            } else if k == CROSS_RUNNER && !v.is_empty() {
                Some((k.to_string(), v.to_string()))
            } else {
                None
            }
        })
        .collect();

    match env_mapping.get(CROSS_RUNNER) {
        Some(runner) if runner == "qemu-user" => {
            let target_runner = env_mapping.get(TARGET_RUNNER)?;
            let arch = target_runner.split_ascii_whitespace().last()?;
            Some(format!("qemu-{}", get_qemu_target(arch)))
        }
        Some(_) => None,
        None => env_mapping.get(TARGET_RUNNER).cloned(),
    }
}

const COREGRAPH_EXE_PATH: &str = env!("CARGO_BIN_EXE_coregraph");
const RUNNER_ENV_VARS: [(&str, &str); 1] = [("NO_COLOR", "1")];
const DEFAULT_CFG: [&str; 2] = ["-C", "./tests/valid_configs/empty_config.toml"];

/// Returns the [`Command`] of a binary invocation of coregraph, alongside
/// any required env variables.
pub fn coregraph_command(args: &[&str]) -> Command {
    let mut cmd = match cross_runner() {
        None => Command::new(COREGRAPH_EXE_PATH),
        Some(runner) => {
            let mut cmd = Command::new(runner);
            cmd.envs(RUNNER_ENV_VARS);
            cmd.arg(COREGRAPH_EXE_PATH);
            cmd
        }
    };

    let mut prev = "";
    for arg in args.iter() {
        if prev == "-C" {
            // Config paths are resolved from the crate root, not the runner's directory.
            cmd.arg(abs_path(arg));
        } else {
            cmd.arg(arg);
        }

        prev = arg;
    }

    cmd
}

/// Returns the [`Command`] of a binary invocation of coregraph with the
/// default, empty config file.
pub fn no_cfg_coregraph_command() -> Command {
    coregraph_command(&DEFAULT_CFG)
}
