#![allow(clippy::unwrap_used, clippy::expect_used)]

use sitelog::log::{Logger, LoggerConfig};
use std::fs;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

const THREADS: usize = 8;
const PER_THREAD: usize = 200;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Write for Capture {
    // Deliberately split every write so a missing lock would show up as
    // spliced lines.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = buf.len().min(7);
        self.0.lock().unwrap().extend_from_slice(&buf[..n]);
        thread::yield_now();
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Capture {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

/// Each console record is a header line followed by a ` > message` line.
fn assert_well_formed(console: &str, header_prefix: &str, marker: &str, expected: usize) {
    let lines: Vec<&str> = console.lines().collect();
    assert_eq!(lines.len(), expected * 2, "unexpected line count");

    for pair in lines.chunks(2) {
        assert!(
            pair[0].starts_with(header_prefix),
            "spliced header: {:?}",
            pair[0]
        );
        let body = pair[1]
            .strip_prefix("\x1b[0m > ")
            .unwrap_or_else(|| panic!("spliced body: {:?}", pair[1]));
        let rest = body
            .strip_prefix(marker)
            .unwrap_or_else(|| panic!("wrong stream: {body:?}"));
        let (t, i) = rest.split_once('-').expect("thread-index");
        assert!(t.parse::<usize>().unwrap() < THREADS);
        assert!(i.parse::<usize>().unwrap() < PER_THREAD);
    }
}

#[test]
fn concurrent_info_and_error_never_interleave() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("concurrent.log");
    let out = Capture::default();
    let err = Capture::default();
    let logger = Arc::new(
        Logger::open_with_console(
            LoggerConfig::new(path.to_str().unwrap(), true, false),
            out.clone(),
            err.clone(),
        )
        .unwrap(),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    if i % 2 == 0 {
                        logger.info(format!("info {t}-{i}"));
                    } else {
                        sitelog::logger_error!(logger, "error {}-{}", t, i);
                    }
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let half = THREADS * PER_THREAD / 2;
    assert_well_formed(
        &out.text(),
        "\x1b[0;36m[  INFO   ] \x1b[1;34m",
        "info ",
        half,
    );
    assert_well_formed(
        &err.text(),
        "\x1b[0;31m[  ERROR  ] \x1b[1;34m",
        "error ",
        half,
    );

    let file = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = file.lines().collect();
    assert_eq!(lines.len(), THREADS * PER_THREAD);
    for line in lines {
        let ok = (line.starts_with("[  INFO   ] ") && line.contains(" > info "))
            || (line.starts_with("[  ERROR  ] ") && line.contains(" > error "));
        assert!(ok, "spliced file line: {line:?}");
    }
}

#[test]
fn reconfigure_while_logging_leaves_a_clean_truncated_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reinit.log");
    let config = LoggerConfig::new(path.to_str().unwrap(), false, false);

    for round in 0..50 {
        let logger =
            Arc::new(Logger::open_with_console(config.clone(), io::sink(), io::sink()).unwrap());
        for _ in 0..200 {
            logger.info("before");
        }

        let stop = Arc::new(AtomicBool::new(false));
        let writers: Vec<_> = (0..4)
            .map(|_| {
                let logger = Arc::clone(&logger);
                let stop = Arc::clone(&stop);
                thread::spawn(move || {
                    while !stop.load(Ordering::Relaxed) {
                        logger.info("old");
                    }
                })
            })
            .collect();

        thread::yield_now();
        logger.reconfigure(config.clone()).unwrap();
        stop.store(true, Ordering::Relaxed);
        for w in writers {
            w.join().unwrap();
        }
        logger.info("NEW");

        let bytes = fs::read(&path).unwrap();
        assert!(
            !bytes.contains(&0),
            "round {round}: NUL bytes in file of {} bytes",
            bytes.len()
        );
        let text = String::from_utf8(bytes).unwrap();
        assert!(!text.contains(" > before\n"), "round {round}: not truncated");
        assert!(text.ends_with(" > NEW\n"), "round {round}: {text:?}");
        for line in text.lines() {
            assert!(line.starts_with("[  INFO   ] "), "round {round}: {line:?}");
            assert!(
                line.ends_with(" > old") || line.ends_with(" > NEW"),
                "round {round}: {line:?}"
            );
        }
    }
}
