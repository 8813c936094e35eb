//! Strongly-typed ID newtypes for domain entities.
//!
//! Every entity is identified by an opaque string assigned by the backend.
//! Each entity gets its own newtype so a `TeacherId` cannot be passed where a
//! `StudentId` is expected.
//!
//! # Example
//!
//! ```ignore
//! use focus_models::ids::{StudentId, TeacherId};
//!
//! fn get_student(id: &StudentId) { /* ... */ }
//!
//! let student_id = StudentId::from("1");
//! let teacher_id = TeacherId::from("1");
//!
//! get_student(&student_id);    // OK
//! // get_student(&teacher_id); // Compile error! Type mismatch.
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of ids minted locally when the backend is unavailable.
pub const GENERATED_ID_LEN: usize = 9;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Random lowercase base-36 string of [`GENERATED_ID_LEN`] characters.
///
/// Not guaranteed unique; collisions are possible over a long offline session.
pub fn random_base36() -> String {
    let mut rng = rand::thread_rng();
    (0..GENERATED_ID_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}

/// Macro to define a strongly-typed ID newtype.
///
/// Generates a transparent wrapper around `String` with serde, display and
/// conversion implementations.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Mint a random local ID.
            #[inline]
            pub fn generate() -> Self {
                Self(random_base36())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            #[inline]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

define_id!(
    /// Identifier of a [`crate::users::User`].
    UserId
);

define_id!(
    /// Identifier of a [`crate::students::Student`].
    StudentId
);

define_id!(
    /// Identifier of a [`crate::teachers::Teacher`].
    TeacherId
);

define_id!(
    /// Identifier of a [`crate::classes::Class`].
    ClassId
);

define_id!(
    /// Identifier of a [`crate::dashboard::ActivityItem`].
    ActivityId
);
