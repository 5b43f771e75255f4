//! Command line: `unc [-c CONFIG] [-l LANG] [--dump] FILE...`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use unc_ir::{LangFlags, Settings};
use unc_lexer::KeywordTable;

use crate::{analyze_source, dump_chunks, load_config, CliError};

/// Every file analyzed without a counted error.
pub const EXIT_OK: i32 = 0;
/// Counted errors, a bad config line, an unreadable file, or bad usage.
pub const EXIT_ERRORS: i32 = 1;
/// An unmatched `}` stopped the resolver (`EX_SOFTWARE`).
pub const EXIT_FATAL: i32 = 70;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Options {
    pub config: Option<PathBuf>,
    /// Forced language; otherwise taken from each file's extension.
    pub lang: Option<LangFlags>,
    pub dump: bool,
    pub files: Vec<PathBuf>,
}

/// What the command line asked for.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Run(Options),
    Help,
    Version,
}

/// Parse the arguments after the program name.
pub fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let mut options = Options::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--dump" | "-p" => options.dump = true,
            "-c" => {
                let path = iter
                    .next()
                    .ok_or_else(|| CliError::Usage("-c needs a config file".to_owned()))?;
                options.config = Some(PathBuf::from(path));
            }
            "-l" => {
                let name = iter
                    .next()
                    .ok_or_else(|| CliError::Usage("-l needs a language".to_owned()))?;
                let lang = LangFlags::from_lang_name(name).ok_or_else(|| CliError::UnknownLanguage(name.clone()))?;
                options.lang = Some(lang);
            }
            "--" => {
                options.files.extend(iter.by_ref().map(PathBuf::from));
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(CliError::Usage(format!("unknown option '{flag}'")));
            }
            file => options.files.push(PathBuf::from(file)),
        }
    }
    if options.files.is_empty() {
        return Err(CliError::Usage("no input files".to_owned()));
    }
    Ok(Command::Run(options))
}

/// How one file went.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum FileStatus {
    Clean,
    Errors,
    Fatal,
}

impl FileStatus {
    pub fn exit_code(self) -> i32 {
        match self {
            FileStatus::Clean => EXIT_OK,
            FileStatus::Errors => EXIT_ERRORS,
            FileStatus::Fatal => EXIT_FATAL,
        }
    }
}

/// Output of one file, buffered so parallel runs print in argument order.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub status: FileStatus,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// Analyze one file and render its diagnostics and dump.
pub fn process_file(
    path: &Path,
    lang: Option<LangFlags>,
    dump: bool,
    settings: &Settings,
    keywords: &KeywordTable,
) -> FileReport {
    let mut report = FileReport {
        path: path.to_path_buf(),
        status: FileStatus::Clean,
        stdout: Vec::new(),
        stderr: Vec::new(),
    };
    let name = path.display().to_string();

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(source) => {
            let _ = writeln!(report.stderr, "error: {}", CliError::io(path, source));
            report.status = FileStatus::Errors;
            return report;
        }
    };
    let lang = lang.unwrap_or_else(|| LangFlags::from_filename(path));
    let _span = tracing::debug_span!("file", path = %name).entered();

    match analyze_source(&bytes, lang, settings, keywords) {
        Ok(analysis) => {
            let _ = analysis.diagnostics.emit_all(&mut report.stderr, &name);
            if analysis.diagnostics.has_errors() {
                report.status = FileStatus::Errors;
            }
            if dump {
                let _ = dump_chunks(&analysis.list, &mut report.stdout);
            }
        }
        Err(fatal) => {
            let _ = fatal.diagnostics.emit_all(&mut report.stderr, &name);
            report.status = FileStatus::Fatal;
        }
    }
    report
}

/// Run the command line and return the process exit status.
pub fn run(args: &[String], stdout: &mut impl Write, stderr: &mut impl Write) -> i32 {
    let options = match parse_args(args) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            let _ = write!(stdout, "{}", usage());
            return EXIT_OK;
        }
        Ok(Command::Version) => {
            let _ = writeln!(stdout, "unc {}", env!("CARGO_PKG_VERSION"));
            return EXIT_OK;
        }
        Err(err) => {
            let _ = writeln!(stderr, "error: {err}");
            let _ = write!(stderr, "{}", usage());
            return EXIT_ERRORS;
        }
    };

    let mut settings = Settings::new();
    let mut keywords = KeywordTable::new();
    let mut status = FileStatus::Clean;
    if let Some(config) = &options.config {
        match load_config(config, &mut settings, &mut keywords) {
            Ok(problems) => {
                let _ = problems.emit_all(stderr, &config.display().to_string());
                if problems.has_errors() {
                    status = FileStatus::Errors;
                }
            }
            Err(err) => {
                let _ = writeln!(stderr, "error: {err}");
                return EXIT_ERRORS;
            }
        }
    }

    let reports: Vec<FileReport> = options
        .files
        .par_iter()
        .map(|path| process_file(path, options.lang, options.dump, &settings, &keywords))
        .collect();

    for report in &reports {
        let _ = stdout.write_all(&report.stdout);
        let _ = stderr.write_all(&report.stderr);
        status = status.max(report.status);
    }
    tracing::debug!(files = reports.len(), ?status, "done");
    status.exit_code()
}

fn usage() -> &'static str {
    "Usage: unc [-c CONFIG] [-l LANG] [--dump] FILE...\n\
     \n\
     Options:\n\
     \x20 -c CONFIG     Read options and keywords from CONFIG\n\
     \x20 -l LANG       Force the language: c, cpp, d, cs, java, oc, oc+, vala, pawn, ecma\n\
     \x20 -p, --dump    Print every chunk after analysis\n\
     \x20 -h, --help    Show this help\n\
     \x20 -V, --version Show the version\n"
}
