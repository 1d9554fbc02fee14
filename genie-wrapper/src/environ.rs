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

//! Builds the environment block passed to `execve`. The process's own
//! environment is never mutated; the caller's name only exists in the
//! vector handed to the new image.

use crate::errors::*;
use crate::variant::LOGNAME_VAR;
use std::ffi::{CString, NulError, OsStr, OsString};
use std::os::unix::ffi::OsStrExt;

fn entry(key: &OsStr, value: &OsStr) -> std::result::Result<CString, NulError> {
    let mut bytes = Vec::with_capacity(key.len() + value.len() + 2);
    bytes.extend_from_slice(key.as_bytes());
    bytes.push(b'=');
    bytes.extend_from_slice(value.as_bytes());
    CString::new(bytes)
}

/// Converts `vars` into `KEY=value` entries. When `logname` is given,
/// any inherited `GENIE_LOGNAME` is dropped and replaced by it.
pub fn build<I>(vars: I, logname: Option<&str>) -> Result<Vec<CString>>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    let mut env = vars
        .into_iter()
        .filter(|(key, _)| logname.is_none() || key != LOGNAME_VAR)
        .map(|(key, value)| {
            entry(&key, &value)
                .chain_err(|| ErrorKind::EnvEntry(key.to_string_lossy().into_owned()))
        })
        .collect::<Result<Vec<CString>>>()?;

    if let Some(name) = logname {
        let exported = entry(OsStr::new(LOGNAME_VAR), OsStr::new(name))
            .chain_err(|| ErrorKind::EnvExport(LOGNAME_VAR))?;
        env.push(exported);
    }

    Ok(env)
}

/// The current environment, plus `GENIE_LOGNAME` when `logname` is set.
pub fn inherited(logname: Option<&str>) -> Result<Vec<CString>> {
    build(std::env::vars_os(), logname)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(OsString, OsString)> {
        pairs
            .iter()
            .map(|&(k, v)| (OsString::from(k), OsString::from(v)))
            .collect()
    }

    fn strings(env: &[CString]) -> Vec<&str> {
        env.iter().map(|e| e.to_str().unwrap()).collect()
    }

    #[test]
    fn passes_environment_through_untouched() {
        let env = build(vars(&[("PATH", "/bin"), ("GENIE_LOGNAME", "mallory")]), None).unwrap();
        assert_eq!(strings(&env), ["PATH=/bin", "GENIE_LOGNAME=mallory"]);
    }

    #[test]
    fn logname_overwrites_inherited_value() {
        let env = build(
            vars(&[("GENIE_LOGNAME", "mallory"), ("HOME", "/home/alice")]),
            Some("alice"),
        )
        .unwrap();
        assert_eq!(strings(&env), ["HOME=/home/alice", "GENIE_LOGNAME=alice"]);
    }

    #[test]
    fn logname_added_when_absent() {
        let env = build(vars(&[]), Some("alice")).unwrap();
        assert_eq!(strings(&env), ["GENIE_LOGNAME=alice"]);
    }

    #[test]
    fn values_with_equals_signs_survive() {
        let env = build(vars(&[("OPTS", "a=b=c")]), None).unwrap();
        assert_eq!(strings(&env), ["OPTS=a=b=c"]);
    }

    #[test]
    fn nul_in_inherited_entry_is_an_error() {
        let err = build(vars(&[("PATH", "/bin"), ("BAD", "x\0y")]), None).unwrap_err();
        match err.kind() {
            ErrorKind::EnvEntry(key) => assert_eq!(key, "BAD"),
            kind => panic!("unexpected error: {}", kind),
        }
    }

    #[test]
    fn unrepresentable_logname_fails_export() {
        let err = build(vars(&[]), Some("ali\0ce")).unwrap_err();
        match err.kind() {
            ErrorKind::EnvExport(key) => assert_eq!(*key, LOGNAME_VAR),
            kind => panic!("unexpected error: {}", kind),
        }
    }
}
