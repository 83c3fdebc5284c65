use std::ffi::OsString;

use alphacheck::{
    args::{self, Invocation},
    error::CheckError,
    help, init,
    operations::report_file,
};

fn main() {
    let arguments: Vec<OsString> = std::env::args_os().collect();

    if let Err(e) = real_main(arguments) {
        // the report and its failure share stdout, so the error follows the partial report
        println!("Error: {e}");
        log::debug!("{e:?}");
        std::process::exit(1);
    }
}

fn real_main(args: Vec<OsString>) -> Result<(), CheckError> {
    init::init();
    match args::parse_args(args)? {
        Invocation::Help => help::print_help(env!("CARGO_PKG_NAME")),
        Invocation::Version => help::print_version(),
        Invocation::Report(path) => {
            // acquire a buffered writer to which we can make lots of small writes cheaply
            let mut stdout = std::io::stdout().lock();
            report_file(&path, &mut stdout)?;
        }
    }
    Ok(())
}
