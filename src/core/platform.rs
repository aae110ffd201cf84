//! Process-level error reporting

/// Print the error and its causes to stderr and exit with code 1
pub fn handle_error(error: anyhow::Error) -> ! {
    eprintln!("{}", describe_error(&error));
    std::process::exit(1);
}

/// Render an error chain as `error: ...` followed by `caused by:` lines
pub fn describe_error(error: &anyhow::Error) -> String {
    let mut message = format!("error: {error}");
    for cause in error.chain().skip(1) {
        message.push_str(&format!("\n  caused by: {cause}"));
    }
    message
}
