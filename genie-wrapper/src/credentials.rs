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

//! A module for committing to the effective identity. This is the
//! opposite of dropping privileges: a setuid binary runs with real !=
//! effective, and the program we exec expects a single identity, so
//! real and saved IDs are pulled up to the effective ones.
use crate::errors::*;
use log::debug;
use nix::unistd::*;

fn reset_gid() -> Result<()> {
    let egid = getegid();
    debug!("resetting gid {} to effective gid {}", getgid(), egid);
    setresgid(egid, egid, egid).chain_err(|| ErrorKind::CredentialReset("setresgid"))?;
    check(getgid().as_raw(), getegid().as_raw())
}

fn reset_uid() -> Result<()> {
    let euid = geteuid();
    debug!("resetting uid {} to effective uid {}", getuid(), euid);
    setresuid(euid, euid, euid).chain_err(|| ErrorKind::CredentialReset("setresuid"))?;
    check(getuid().as_raw(), geteuid().as_raw())
}

fn check(real: u32, effective: u32) -> Result<()> {
    if real == effective {
        Ok(())
    } else {
        Err(ErrorKind::CredentialMismatch(real, effective).into())
    }
}

/// Group first: once the uid is reset the process may no longer be
/// allowed to change its gid.
pub fn commit_effective() -> Result<()> {
    reset_gid().and_then(|_| reset_uid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_is_reported() {
        match check(1000, 0).unwrap_err().kind() {
            ErrorKind::CredentialMismatch(1000, 0) => {}
            kind => panic!("unexpected error: {}", kind),
        }
    }

    #[test]
    fn commit_leaves_real_equal_to_effective() {
        // The test binary is not setuid, so this only re-asserts the
        // identities it already has.
        let (uid, gid) = (geteuid(), getegid());
        commit_effective().unwrap();
        assert_eq!(getuid(), uid);
        assert_eq!(geteuid(), uid);
        assert_eq!(getgid(), gid);
        assert_eq!(getegid(), gid);
    }
}
