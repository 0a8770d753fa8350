//! MoviesStore - concurrent in-memory movie storage.
//!
//! Entries live in a `RwLock<HashMap>` keyed by id; ids come from an
//! `AtomicU64` that only ever moves forward, so a deleted id is never
//! handed out again (until [`MoviesStore::clear`] resets the counter).
//!
//! Reads take the shared lock and return owned snapshots, so callers never
//! hold a view into the map.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use tracing::debug;

use crate::error::StoreError;
use crate::movie::{Movie, NewMovie};

const FIRST_ID: u64 = 1;

pub struct MoviesStore {
    movies: RwLock<HashMap<u64, Movie>>,
    next_id: AtomicU64,
}

impl Default for MoviesStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MoviesStore {
    pub fn new() -> Self {
        MoviesStore {
            movies: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(FIRST_ID),
        }
    }

    /// Reserve the next id, assign it to `candidate` and store the result.
    pub fn add(&self, candidate: NewMovie) -> Result<Movie, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let movie = candidate.with_id(id);

        let mut movies = self
            .movies
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;
        movies.insert(id, movie.clone());
        debug!(id, title = %movie.title, year = movie.year, "movie added");

        Ok(movie)
    }

    pub fn get(&self, id: u64) -> Result<Option<Movie>, StoreError> {
        let movies = self
            .movies
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(movies.get(&id).cloned())
    }

    /// Remove the movie with `id`. Returns whether anything was removed.
    pub fn delete(&self, id: u64) -> Result<bool, StoreError> {
        let mut movies = self
            .movies
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;
        let removed = movies.remove(&id).is_some();
        if removed {
            debug!(id, "movie deleted");
        }
        Ok(removed)
    }

    /// Snapshot of every stored movie, in no particular order.
    pub fn list(&self) -> Result<Vec<Movie>, StoreError> {
        let movies = self
            .movies
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(movies.values().cloned().collect())
    }

    /// Snapshot of the movies released in `year`. Empty when none match.
    pub fn filter_by_year(&self, year: i32) -> Result<Vec<Movie>, StoreError> {
        let movies = self
            .movies
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(movies
            .values()
            .filter(|movie| movie.year == year)
            .cloned()
            .collect())
    }

    /// Drop every entry and restart ids at 1.
    pub fn clear(&self) -> Result<(), StoreError> {
        let mut movies = self
            .movies
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;
        movies.clear();
        self.next_id.store(FIRST_ID, Ordering::Relaxed);
        debug!("movie store cleared");
        Ok(())
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        let movies = self
            .movies
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(movies.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}
