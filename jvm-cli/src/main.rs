use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;
use jvm_runtime::vm::{Options, VerboseFlags};
use jvm_runtime::Vm;

/// A Java Virtual Machine core: loads a class and runs its `main` method.
#[derive(Parser, Debug)]
#[command(name = "jvm", version)]
struct Args {
    /// Fully qualified name of the class containing `main`.
    main_class: String,

    /// Arguments passed through to the program's `main(String[])`.
    program_args: Vec<String>,

    /// Colon-separated list of directories to search for class files.
    #[arg(short = 'c', long = "classpath", visible_alias = "cp", value_delimiter = ':')]
    classpath: Vec<PathBuf>,

    /// Sets a system property, e.g. `-Dfoo=bar`. Repeatable.
    #[arg(short = 'D', value_name = "key=value")]
    properties: Vec<String>,

    /// Comma-separated verbose categories: class,gc,execute,jni,debug.
    #[arg(long = "verbose", value_delimiter = ',')]
    verbose: Vec<String>,
}

fn parse_property(raw: &str) -> Option<(String, String)> {
    let (key, value) = raw.split_once('=')?;
    Some((key.to_string(), value.to_string()))
}

fn verbose_flags(categories: &[String]) -> VerboseFlags {
    let mut flags = VerboseFlags::default();
    for c in categories {
        match c.as_str() {
            "class" => flags.class = true,
            "gc" => flags.gc = true,
            "execute" => flags.execute = true,
            "jni" => flags.jni = true,
            "debug" => flags.debug = true,
            other => eprintln!("jvm: ignoring unknown -verbose category '{other}'"),
        }
    }
    flags
}

fn init_tracing(flags: VerboseFlags) {
    let level = if flags.execute {
        tracing::Level::TRACE
    } else if flags.class || flags.gc || flags.jni || flags.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).with_target(false).init();
}

/// clap only supports single-char short options, but `-cp` (one dash, two
/// letters) is the conventional spelling for the classpath flag on every
/// real `java` launcher. Rewrite it to the long form before parsing.
fn normalize_argv(argv: Vec<String>) -> Vec<String> {
    argv.into_iter()
        .map(|a| if a == "-cp" { "--classpath".to_string() } else { a })
        .collect()
}

fn main() {
    let args = Args::parse_from(normalize_argv(std::env::args().collect()));
    let verbose = verbose_flags(&args.verbose);
    init_tracing(verbose);

    let mut properties = HashMap::new();
    for raw in &args.properties {
        match parse_property(raw) {
            Some((k, v)) => {
                properties.insert(k, v);
            }
            None => eprintln!("jvm: ignoring malformed -D'{raw}' (expected key=value)"),
        }
    }

    let classpath = if args.classpath.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.classpath
    };

    let options = Options {
        classpath,
        properties,
        verbose,
        main_class: args.main_class,
        program_args: args.program_args,
    };

    let vm = Vm::new(options);
    std::process::exit(vm.run_main());
}
