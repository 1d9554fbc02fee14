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

//! Replacing the process image with the target program.

use crate::errors::*;
use log::debug;
use nix::unistd::execve;
use std::convert::Infallible;
use std::ffi::{CString, OsString};
use std::os::unix::ffi::OsStringExt;

/// Converts argv to C strings byte-for-byte, argv[0] included. Nothing
/// is parsed; an argument that cannot be passed on unchanged is an
/// error, so the target always sees the same number of arguments.
pub fn argv<I>(args: I) -> Result<Vec<CString>>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| CString::new(arg.into_vec()).chain_err(|| ErrorKind::Argument(i)))
        .collect()
}

/// Execs `target` directly (no `PATH` search). Only returns on failure.
pub fn replace_image(target: &'static str, argv: &[CString], env: &[CString]) -> Result<Infallible> {
    let path = CString::new(target).chain_err(|| ErrorKind::Exec(target))?;
    debug!("exec {} with {} argument(s)", target, argv.len());
    execve(&path, argv, env).chain_err(|| ErrorKind::Exec(target))
}
