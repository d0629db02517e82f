//! Storage for messages whose streams are still open.
//!
//! The decoder keeps at most one partially received [`HttpMessage`] per
//! stream. [`StreamTable`] abstracts the map holding them so callers can
//! substitute bounded or instrumented storage without touching the decoder.

use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
    num::NonZeroUsize,
};

use crate::{error::TableFull, frame::StreamId, http::HttpMessage};

/// Keyed storage of in-progress messages.
///
/// Implementations need only per-key correctness; no iteration order is
/// assumed except by [`drain_ids`](Self::drain_ids), which returns ids sorted.
pub trait StreamTable {
    /// Store `message` for `id`, returning any message it replaced.
    ///
    /// # Errors
    ///
    /// Returns [`TableFull`] when the table has no room for `id`; the message
    /// is dropped. Unbounded tables never refuse.
    fn put(&mut self, id: StreamId, message: HttpMessage) -> Result<Option<HttpMessage>, TableFull>;

    fn get(&self, id: StreamId) -> Option<&HttpMessage>;

    fn get_mut(&mut self, id: StreamId) -> Option<&mut HttpMessage>;

    /// Remove and return the message stored for `id`.
    fn remove(&mut self, id: StreamId) -> Option<HttpMessage>;

    /// Number of streams with a pending message.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool { self.len() == 0 }

    /// Remove every pending message, returning the affected ids in ascending
    /// order.
    fn drain_ids(&mut self) -> Vec<StreamId>;
}

impl<S: BuildHasher> StreamTable for HashMap<StreamId, HttpMessage, S> {
    fn put(&mut self, id: StreamId, message: HttpMessage) -> Result<Option<HttpMessage>, TableFull> {
        Ok(self.insert(id, message))
    }

    fn get(&self, id: StreamId) -> Option<&HttpMessage> { HashMap::get(self, &id) }

    fn get_mut(&mut self, id: StreamId) -> Option<&mut HttpMessage> { HashMap::get_mut(self, &id) }

    fn remove(&mut self, id: StreamId) -> Option<HttpMessage> { HashMap::remove(self, &id) }

    fn len(&self) -> usize { HashMap::len(self) }

    fn drain_ids(&mut self) -> Vec<StreamId> {
        let mut ids: Vec<_> = self.drain().map(|(id, _)| id).collect();
        ids.sort_unstable();
        ids
    }
}

impl StreamTable for BTreeMap<StreamId, HttpMessage> {
    fn put(&mut self, id: StreamId, message: HttpMessage) -> Result<Option<HttpMessage>, TableFull> {
        Ok(self.insert(id, message))
    }

    fn get(&self, id: StreamId) -> Option<&HttpMessage> { BTreeMap::get(self, &id) }

    fn get_mut(&mut self, id: StreamId) -> Option<&mut HttpMessage> { BTreeMap::get_mut(self, &id) }

    fn remove(&mut self, id: StreamId) -> Option<HttpMessage> { BTreeMap::remove(self, &id) }

    fn len(&self) -> usize { BTreeMap::len(self) }

    fn drain_ids(&mut self) -> Vec<StreamId> {
        std::mem::take(self).into_keys().collect()
    }
}

impl<T: StreamTable + ?Sized> StreamTable for Box<T> {
    fn put(&mut self, id: StreamId, message: HttpMessage) -> Result<Option<HttpMessage>, TableFull> {
        (**self).put(id, message)
    }

    fn get(&self, id: StreamId) -> Option<&HttpMessage> { (**self).get(id) }

    fn get_mut(&mut self, id: StreamId) -> Option<&mut HttpMessage> { (**self).get_mut(id) }

    fn remove(&mut self, id: StreamId) -> Option<HttpMessage> { (**self).remove(id) }

    fn len(&self) -> usize { (**self).len() }

    fn drain_ids(&mut self) -> Vec<StreamId> { (**self).drain_ids() }
}

/// Table that refuses new streams once a fixed number are pending.
///
/// Replacing the message of an already pending stream is always allowed.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroUsize;
///
/// use spdy_http::{
///     frame::StreamId,
///     http::{FullHttpResponse, HttpVersion, Status},
///     stream_table::{BoundedStreamTable, StreamTable},
/// };
///
/// let response = || FullHttpResponse::new(HttpVersion::http_1_1(), Status::ok()).into();
/// let mut table = BoundedStreamTable::new(NonZeroUsize::new(1).expect("non-zero"));
/// assert!(table.put(StreamId::new(1), response()).is_ok());
/// assert!(table.put(StreamId::new(3), response()).is_err());
/// ```
#[derive(Debug)]
pub struct BoundedStreamTable<T = HashMap<StreamId, HttpMessage>> {
    inner: T,
    max_streams: NonZeroUsize,
}

impl BoundedStreamTable {
    /// Bound a default hash map to `max_streams` pending streams.
    #[must_use]
    pub fn new(max_streams: NonZeroUsize) -> Self {
        Self::with_inner(HashMap::new(), max_streams)
    }
}

impl<T: StreamTable> BoundedStreamTable<T> {
    /// Bound an existing table.
    #[must_use]
    pub fn with_inner(inner: T, max_streams: NonZeroUsize) -> Self { Self { inner, max_streams } }

    #[must_use]
    pub fn max_streams(&self) -> NonZeroUsize { self.max_streams }

    /// Borrow the wrapped table.
    #[must_use]
    pub fn inner(&self) -> &T { &self.inner }

    #[must_use]
    pub fn into_inner(self) -> T { self.inner }
}

impl<T: StreamTable> StreamTable for BoundedStreamTable<T> {
    fn put(&mut self, id: StreamId, message: HttpMessage) -> Result<Option<HttpMessage>, TableFull> {
        if self.inner.get(id).is_none() && self.inner.len() >= self.max_streams.get() {
            return Err(TableFull {
                stream_id: id,
                max_streams: self.max_streams,
            });
        }
        self.inner.put(id, message)
    }

    fn get(&self, id: StreamId) -> Option<&HttpMessage> { self.inner.get(id) }

    fn get_mut(&mut self, id: StreamId) -> Option<&mut HttpMessage> { self.inner.get_mut(id) }

    fn remove(&mut self, id: StreamId) -> Option<HttpMessage> { self.inner.remove(id) }

    fn len(&self) -> usize { self.inner.len() }

    fn drain_ids(&mut self) -> Vec<StreamId> { self.inner.drain_ids() }
}

#[cfg(test)]
mod tests;
