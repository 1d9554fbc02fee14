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

//! Build-time choice of what the wrapper executes. There is
//! intentionally no runtime override: the target never comes from
//! argv or the environment.

/// Name of the variable carrying the caller's account name.
pub const LOGNAME_VAR: &str = "GENIE_LOGNAME";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Variant {
    /// Absolute path of the program to exec.
    pub target: &'static str,
    /// Whether `GENIE_LOGNAME` is added to the exec environment.
    pub export_logname: bool,
}

#[cfg(any(test, not(feature = "legacy-target")))]
pub const GENIE: Variant = Variant {
    target: "/usr/lib/genie/genie",
    export_logname: true,
};

#[cfg(any(test, feature = "legacy-target"))]
pub const LEGACY: Variant = Variant {
    target: "/usr/lib/genie",
    export_logname: false,
};

#[cfg(not(feature = "legacy-target"))]
pub const ACTIVE: Variant = GENIE;

#[cfg(feature = "legacy-target")]
pub const ACTIVE: Variant = LEGACY;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_are_absolute() {
        assert!(GENIE.target.starts_with('/'));
        assert!(LEGACY.target.starts_with('/'));
    }

    #[test]
    fn only_genie_exports_logname() {
        assert!(GENIE.export_logname);
        assert!(!LEGACY.export_logname);
    }

    #[cfg(not(feature = "legacy-target"))]
    #[test]
    fn default_build_is_genie() {
        assert_eq!(ACTIVE, GENIE);
    }
}
