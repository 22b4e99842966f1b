use valkey_trib::run;

fn main() {
    // Restore default SIGPIPE handling so piping into `head` or `less`
    // exits quietly instead of panicking on a broken pipe.
    #[cfg(unix)]
    reset_sigpipe();

    let argv: Vec<String> = std::env::args().skip(1).collect();

    if let Err(e) = run(argv) {
        eprintln!("Error: {}", e);
    }

    // The legacy interface performs no work anymore; always signal
    // failure so calling scripts notice.
    std::process::exit(1);
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
