use std::io;
use std::process::exit;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let code = drawhand_cli::run(args, &mut io::stdout(), &mut io::stderr());
    exit(code);
}
