// This file is part of genie-wrapper.
//
// genie-wrapper is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// genie-wrapper is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with genie-wrapper. If not, see <https://www.gnu.org/licenses/>.

//! A setuid wrapper for genie. It records who invoked it, collapses
//! its real identity onto the effective one and execs the real
//! program with the same argv.

#[macro_use]
extern crate error_chain;

mod credentials;
mod environ;
mod errors;
mod exec;
mod identity;
mod variant;

use crate::errors::*;
use crate::variant::Variant;
use log::{debug, warn};
use nix::unistd::geteuid;
use std::convert::Infallible;
use std::process;

fn run(variant: Variant) -> Result<Infallible> {
    let logname = if variant.export_logname {
        let name = identity::caller_name()?;
        debug!("invoked by {}", name);
        Some(name)
    } else {
        None
    };
    let env = environ::inherited(logname.as_deref())?;

    credentials::commit_effective()?;

    if !geteuid().is_root() {
        warn!("not running as root - has the setuid bit gone astray?");
    }

    let argv = exec::argv(std::env::args_os())?;
    exec::replace_image(variant.target, &argv, &env)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    match run(variant::ACTIVE) {
        Ok(never) => match never {},
        Err(e) => {
            eprintln!("{}", diagnostic(&e));
            process::exit(1);
        }
    }
}
