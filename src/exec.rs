use std::io::{self, Read, Write};
use std::process::{Command, ExitStatus, Stdio};

/// What to feed to a child process on standard input.
pub enum Input<'a> {
    None,
    /// Credential material. Piped to the child, never part of argv and
    /// never echoed.
    Secret(&'a str),
    /// An owned byte stream, e.g. a Dockerfile opened for the build.
    Stream(Box<dyn Read>),
}

/// Runs external commands. The pipeline depends on this trait rather
/// than on `std::process` directly, so it can be exercised in tests
/// without spawning real processes.
pub trait CommandRunner {
    fn run(&mut self, argv: &[String], stdin: Input) -> io::Result<ExitStatus>;
}

/// Spawns real processes. Each command line is echoed to stdout before
/// execution so the CI log shows exactly what ran; secret input travels
/// on stdin and never appears in the echo.
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&mut self, argv: &[String], stdin: Input) -> io::Result<ExitStatus> {
        println!("+ {}", argv.join(" "));

        let mut command = Command::new(&argv[0]);
        command
            .args(&argv[1..])
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        match stdin {
            Input::None => command.stdin(Stdio::null()).status(),
            Input::Secret(secret) => {
                command.stdin(Stdio::piped());
                let mut child = command.spawn()?;
                child.stdin.as_mut().unwrap().write_all(secret.as_bytes())?;
                // Close the pipe so the child sees EOF.
                drop(child.stdin.take());
                child.wait()
            }
            Input::Stream(mut reader) => {
                command.stdin(Stdio::piped());
                let mut child = command.spawn()?;
                io::copy(&mut reader, child.stdin.as_mut().unwrap())?;
                drop(child.stdin.take());
                child.wait()
            }
        }
    }
}
