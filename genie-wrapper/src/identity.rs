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

//! Resolves who invoked us. Only the real UID counts here; the
//! effective UID is whoever owns the setuid binary.

use crate::errors::*;
use nix::unistd::{getuid, Uid, User};

/// Looks up the account name of `uid`. A missing passwd entry is an
/// error rather than a fallback to the numeric ID.
pub fn account_name(uid: Uid) -> Result<String> {
    User::from_uid(uid)
        .chain_err(|| ErrorKind::IdentityLookup(uid))?
        .map(|user| user.name)
        .ok_or_else(|| ErrorKind::UnknownUser(uid).into())
}

/// Account name of the real (invoking) user.
pub fn caller_name() -> Result<String> {
    account_name(getuid())
}
