//! The lazy element-stream protocol.
//!
//! Every vertex or triangle source in Tessera hands out a cursor that
//! implements [`MeshStream`]. A cursor produces one element at a time,
//! never buffers, and can be rewound with [`MeshStream::reset`].
//!
//! ```text
//! while !stream.done() {
//!     let element = stream.generate();
//!     stream.next();
//! }
//! ```

use crate::vertex::{MeshVertex, Triangle};

/// A finite, restartable cursor over mesh elements.
///
/// `generate()` and `next()` must only be called while `done()` is false.
/// Calling them on an exhausted stream is a contract violation and is
/// not checked.
pub trait MeshStream {
    /// Element type produced by this stream.
    type Item;

    /// Returns the current element without advancing.
    ///
    /// Repeated calls without an intervening `next()` return the same element.
    fn generate(&self) -> Self::Item;

    /// Returns true once every element has been produced.
    fn done(&self) -> bool;

    /// Advances the cursor by one element.
    fn next(&mut self);

    /// Rewinds to the initial position, as if freshly constructed.
    ///
    /// Must not fail and must not allocate.
    fn reset(&mut self);

    /// Adapts this stream into a standard [`Iterator`] that drains it.
    fn into_elements(self) -> StreamIter<Self>
    where
        Self: Sized,
    {
        StreamIter { stream: self }
    }
}

impl<S: MeshStream + ?Sized> MeshStream for Box<S> {
    type Item = S::Item;

    #[inline]
    fn generate(&self) -> Self::Item {
        (**self).generate()
    }

    #[inline]
    fn done(&self) -> bool {
        (**self).done()
    }

    #[inline]
    fn next(&mut self) {
        (**self).next()
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }
}

/// Boxed vertex stream handed out by every [`VertexSource`](crate::VertexSource).
pub type VertexStream<'a> = Box<dyn MeshStream<Item = MeshVertex> + 'a>;

/// Boxed triangle stream handed out by every [`TriangleSource`](crate::TriangleSource).
pub type TriangleStream<'a> = Box<dyn MeshStream<Item = Triangle> + 'a>;

/// [`Iterator`] adapter over a [`MeshStream`].
///
/// Yields `generate()` then calls `next()` until the stream is done.
pub struct StreamIter<S> {
    stream: S,
}

impl<S: MeshStream> Iterator for StreamIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stream.done() {
            return None;
        }
        let element = self.stream.generate();
        MeshStream::next(&mut self.stream);
        Some(element)
    }
}

/// Drains `stream` and returns how many elements it produced.
///
/// Used to size a component's vertex range: the caller passes a fresh
/// stream and throws it away afterwards.
pub fn count<S: MeshStream>(mut stream: S) -> usize {
    let mut n = 0;
    while !stream.done() {
        stream.next();
        n += 1;
    }
    n
}
