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

//! Error types for every step of the wrapper. Each `ErrorKind` names
//! the operation that failed, so `main` can report it without knowing
//! anything else about the step.

use nix::unistd::Uid;

error_chain! {
    errors {
        IdentityLookup(uid: Uid) {
            description("could not look up caller in passwd database")
            display("getpwuid({})", uid)
        }

        UnknownUser(uid: Uid) {
            description("caller has no passwd entry")
            display("getpwuid({}): no such user", uid)
        }

        EnvExport(key: &'static str) {
            description("could not export environment variable")
            display("export {}", key)
        }

        EnvEntry(key: String) {
            description("inherited environment entry is not a C string")
            display("environment entry {} contains a NUL byte", key)
        }

        Argument(index: usize) {
            description("argument is not a C string")
            display("argv[{}] contains a NUL byte", index)
        }

        CredentialReset(call: &'static str) {
            description("could not reset process credentials")
            display("{}", call)
        }

        CredentialMismatch(real: u32, effective: u32) {
            description("real and effective IDs still differ")
            display("real id {} does not match effective id {}", real, effective)
        }

        Exec(path: &'static str) {
            description("could not replace process image")
            display("execv({})", path)
        }
    }
}

impl ErrorKind {
    /// The diagnostic tag printed in front of this error.
    pub fn tag(&self) -> &'static str {
        match self {
            ErrorKind::EnvExport(_) => "genie-wrapper-logname",
            _ => "genie-wrapper",
        }
    }
}

/// Renders an error and its causes as a single diagnostic line, e.g.
/// `genie-wrapper: execv(/usr/lib/genie/genie): ENOENT: No such file
/// or directory`.
pub fn diagnostic(err: &Error) -> String {
    let mut line = String::from(err.kind().tag());
    for cause in err.iter() {
        line.push_str(": ");
        line.push_str(&cause.to_string());
    }
    line
}
