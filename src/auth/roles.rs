//! Role hierarchy for admin accounts.
//!
//! The UI presents a single privilege level while storage keeps a set of
//! role strings, so a selected level expands to every role it implies
//! (ADMIN covers EDITOR and STAFF, EDITOR covers STAFF). The inverse picks
//! the highest-ranked role present and is lossy for hand-edited sets.

use std::collections::BTreeSet;

pub const ADMIN: &str = "ADMIN";
pub const EDITOR: &str = "EDITOR";
pub const STAFF: &str = "STAFF";

/// Privilege level as selected in the admin UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleLevel {
    Admin,
    Editor,
    Staff,
    Guest,
}

impl RoleLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RoleLevel::Admin => ADMIN,
            RoleLevel::Editor => EDITOR,
            RoleLevel::Staff => STAFF,
            RoleLevel::Guest => "GUEST",
        }
    }
}

/// Expand a selected level into the full set of role strings to store.
///
/// Unrecognized levels (including GUEST) resolve to the empty set. The
/// caller replaces the account's whole role set with the result, never
/// merges into it.
pub fn resolve_roles(level: &str) -> BTreeSet<String> {
    let implied: &[&str] = match level {
        ADMIN => &[ADMIN, EDITOR, STAFF],
        EDITOR => &[EDITOR, STAFF],
        STAFF => &[STAFF],
        _ => &[],
    };

    implied.iter().map(|r| r.to_string()).collect()
}

/// Derive the displayed level from a stored role set.
///
/// Tolerates sets that match none of the canonical supersets (manually
/// edited data): the highest-ranked role present wins, GUEST if none.
pub fn derive_level<S: AsRef<str>>(roles: &[S]) -> RoleLevel {
    let has = |role: &str| roles.iter().any(|r| r.as_ref() == role);

    if has(ADMIN) {
        RoleLevel::Admin
    } else if has(EDITOR) {
        RoleLevel::Editor
    } else if has(STAFF) {
        RoleLevel::Staff
    } else {
        RoleLevel::Guest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(roles: &[&str]) -> BTreeSet<String> {
        roles.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn admin_implies_every_role() {
        assert_eq!(resolve_roles("ADMIN"), set(&["ADMIN", "EDITOR", "STAFF"]));
    }

    #[test]
    fn editor_implies_staff() {
        assert_eq!(resolve_roles("EDITOR"), set(&["EDITOR", "STAFF"]));
    }

    #[test]
    fn staff_stands_alone() {
        assert_eq!(resolve_roles("STAFF"), set(&["STAFF"]));
    }

    #[test]
    fn guest_and_unknown_resolve_empty() {
        assert!(resolve_roles("GUEST").is_empty());
        assert!(resolve_roles("SUPERUSER").is_empty());
        assert!(resolve_roles("").is_empty());
    }

    #[test]
    fn derives_level_from_canonical_sets() {
        assert_eq!(derive_level(&["ADMIN", "EDITOR", "STAFF"]), RoleLevel::Admin);
        assert_eq!(derive_level(&["EDITOR", "STAFF"]), RoleLevel::Editor);
        assert_eq!(derive_level(&["STAFF"]), RoleLevel::Staff);
        assert_eq!(derive_level::<&str>(&[]), RoleLevel::Guest);
    }

    #[test]
    fn derives_highest_rank_from_odd_sets() {
        // Manually edited data: ADMIN without the implied roles still wins
        assert_eq!(derive_level(&["ADMIN"]), RoleLevel::Admin);
        assert_eq!(derive_level(&["STAFF", "EDITOR"]), RoleLevel::Editor);
        assert_eq!(derive_level(&["VIEWER"]), RoleLevel::Guest);
    }

    #[test]
    fn resolve_then_derive_is_idempotent() {
        for level in ["ADMIN", "EDITOR", "STAFF"] {
            let stored: Vec<String> = resolve_roles(level).into_iter().collect();
            let derived = derive_level(&stored);
            let normalized: Vec<String> =
                resolve_roles(derived.as_str()).into_iter().collect();
            assert_eq!(stored, normalized);
        }
    }

    #[test]
    fn odd_set_normalizes_to_nearest_superset() {
        // {ADMIN} derives ADMIN, and resolving that yields the canonical superset
        let derived = derive_level(&["ADMIN"]);
        assert_eq!(
            resolve_roles(derived.as_str()),
            set(&["ADMIN", "EDITOR", "STAFF"])
        );
    }
}
