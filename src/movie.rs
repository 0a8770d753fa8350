//! Movie records and the id-less candidates they are created from.

use serde::{Deserialize, Serialize};

/// A stored movie. The `id` is assigned by [`MoviesStore`](crate::MoviesStore)
/// and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub year: i32,
}

/// A movie payload that has not been validated or assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
}

impl NewMovie {
    pub fn new(title: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            year,
        }
    }

    /// Attach a store-assigned id, producing the stored record.
    pub(crate) fn with_id(self, id: u64) -> Movie {
        Movie {
            id,
            title: self.title,
            year: self.year,
        }
    }
}
