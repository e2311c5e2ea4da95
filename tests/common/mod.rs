#![allow(dead_code)]

use std::{
    cell::RefCell,
    io::{self, Write},
    rc::Rc,
};

use matlang::{Error, Outcome, RunOptions, run_with};

/// A writer that keeps everything written to it, readable after the run.
#[derive(Clone, Default)]
pub struct Output(Rc<RefCell<Vec<u8>>>);

impl Output {
    pub fn text(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).expect("program output is UTF-8")
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

const QUIET: RunOptions = RunOptions { dump_memory: false,
                                       check_only:  false, };

/// Runs `src` and returns what it printed, without the memory dump.
pub fn output_of(src: &str) -> String {
    let out = Output::default();
    if let Err(e) = run_with(src, &QUIET, out.clone()) {
        panic!("Script failed: {e}\n{src}");
    }
    out.text()
}

/// Runs `src` with the given options, returning the outcome and the output.
pub fn run_capturing(src: &str, options: &RunOptions) -> (Result<Outcome, Error>, String) {
    let out = Output::default();
    let result = run_with(src, options, out.clone());
    (result, out.text())
}

pub fn assert_success(src: &str) {
    if let Err(e) = run_capturing(src, &QUIET).0 {
        panic!("Script failed: {e}\n{src}");
    }
}

pub fn assert_failure(src: &str) {
    if run_capturing(src, &QUIET).0.is_ok() {
        panic!("Script succeeded but was expected to fail:\n{src}")
    }
}
