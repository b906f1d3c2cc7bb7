//! Test doubles and fixtures shared by the CLI runtime tests.

use std::ffi::OsString;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use solmod_config::Config;

use crate::{AppError, ConfigLoader, IoStreams, run_with_loader};

/// Loader returning a fixed configuration and recording what it was given.
pub(super) struct StaticLoader {
    pub(super) config: Config,
    pub(super) seen: std::cell::RefCell<Vec<OsString>>,
}

impl StaticLoader {
    pub(super) fn new(config: Config) -> Self {
        Self {
            config,
            seen: std::cell::RefCell::default(),
        }
    }
}

impl ConfigLoader for StaticLoader {
    fn load(&self, args: &[OsString]) -> Result<Config, AppError> {
        self.seen.borrow_mut().extend(args.iter().cloned());
        Ok(self.config.clone())
    }
}

/// Captured result of a CLI invocation.
pub(super) struct Invocation {
    pub(super) exit_code: ExitCode,
    pub(super) stdout: String,
    pub(super) stderr: String,
}

pub(super) fn invoke(args: &[&str], loader: &StaticLoader) -> Invocation {
    let mut stdout: Vec<u8> = Vec::new();
    let mut stderr: Vec<u8> = Vec::new();
    let exit_code = {
        let mut io = IoStreams::new(&mut stdout, &mut stderr);
        run_with_loader(args.iter().map(OsString::from), &mut io, loader)
    };
    Invocation {
        exit_code,
        stdout: String::from_utf8(stdout).expect("stdout utf8"),
        stderr: String::from_utf8(stderr).expect("stderr utf8"),
    }
}

pub(super) fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(path, content).expect("write fixture");
}
