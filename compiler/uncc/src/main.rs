//! unc: tokenize and resolve C-family sources, report structural problems.

fn main() {
    uncc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let code = uncc::run(&args, &mut std::io::stdout(), &mut std::io::stderr());
    std::process::exit(code);
}
