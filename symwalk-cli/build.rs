//! Build script for symwalk-cli.
//!
//! Generates the man page at build time using clap_mangen and places it in
//! OUT_DIR/man.
//!
//! The command structure is rebuilt here rather than imported, since build
//! scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Options shared by `path`, `list` and `tree`.
fn target_args() -> Vec<Arg> {
    vec![
        Arg::new("targets")
            .value_name("TARGET")
            .num_args(0..)
            .help("Files or directories to operate on (default: the working directory)"),
        Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help("Fail with exit code 1 if any missing path or bad link is found"),
        Arg::new("no-expand-user")
            .long("no-expand-user")
            .action(ArgAction::SetTrue)
            .help("Treat a leading `~` literally instead of expanding it"),
        Arg::new("format")
            .long("format")
            .value_name("FORMAT")
            .help("Output format (text or json)"),
    ]
}

/// Options for the walking commands.
fn walk_args() -> Vec<Arg> {
    let mut args = target_args();
    args.push(
        Arg::new("exclude")
            .short('x')
            .long("exclude")
            .value_name("PATTERN")
            .action(ArgAction::Append)
            .help("Glob pattern of paths not to explore; may be repeated"),
    );
    args.push(
        Arg::new("unique-paths")
            .short('u')
            .long("unique-paths")
            .action(ArgAction::SetTrue)
            .help("List each path at most once; repeats are reported as `u<N>` records"),
    );
    args
}

/// Build the CLI command structure for man page generation.
///
/// Keep this synchronized with src/cli.rs and src/commands/mod.rs.
fn build_cli() -> Command {
    Command::new("symwalk")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve paths and walk directory trees through symlinks")
        .long_about(
            "Follow symlinks without risking infinite recursion. Every record printed is a \
             code followed by an absolute path: 'd' directory, 'f' anything else, 'x' excluded, \
             'u<N>' path met N times, 'r' recursive link, 'b' broken link, 'm' missing path.",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read user configuration from this file instead of ~/.symwalk/config.yaml")
                .value_name("PATH")
                .global(true)
                .env("SYMWALK_CONFIG"),
        )
        .subcommands(vec![
            Command::new("path")
                .about("Resolve each target to its physical path")
                .args(target_args()),
            Command::new("list")
                .about("List the immediate members of each target directory")
                .args(walk_args()),
            Command::new("tree")
                .about("Walk the whole tree under each target")
                .args(walk_args()),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(Arg::new("shell").required(true).help("Shell to generate completions for")),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("symwalk.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
